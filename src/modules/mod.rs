pub mod browser;
pub mod package;

use crate::types::Context;
use axum::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new().nest("/browse", browser::routes::get_router())
}
