use crate::modules::package::repository::Package;
use askama::Template;

/// Render model for one page of the browser. Built per request and dropped
/// once rendered.
#[derive(Template)]
#[template(path = "browser.html")]
pub struct BrowserTemplate<'a> {
    pub in_game: bool,
    pub category: &'a str,
    pub page: i64,
    pub packages: &'a [Package],
    pub prev_link: String,
    pub next_link: String,
}
