use super::types::{request, response};
use crate::{
    modules::browser::{category::Category, template::BrowserTemplate},
    types::Context,
    utils::pagination::PageLinks,
};
use askama::Template;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let category =
        Category::from_slug(&payload.category).ok_or(response::Error::UnknownCategory)?;
    let pagination = payload.pagination;

    let packages = ctx
        .packages
        .fetch_package_list_by_type_paged(
            category.package_type(),
            pagination.offset(),
            pagination.limit(),
        )
        .await
        .map_err(|err| response::Error::FailedToFetchPackageList(err.to_string()))?;

    let links = PageLinks::plan(&pagination, packages.len());

    tracing::debug!(
        "Rendering {} page {} with {} packages",
        category.package_type(),
        pagination.page,
        packages.len()
    );

    BrowserTemplate {
        in_game: payload.in_game,
        category: category.package_type(),
        page: pagination.page,
        packages: &packages,
        prev_link: links.prev,
        next_link: links.next,
    }
    .render()
    .map(response::Success::Page)
    .map_err(|err| response::Error::FailedToExecuteTemplate(err.to_string()))
}
