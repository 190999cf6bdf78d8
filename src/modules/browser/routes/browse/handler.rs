use super::{service::service, types::request};
use crate::{
    modules::browser::middleware::InGame, types::Context, utils::pagination::Pagination,
};
use axum::{
    extract::{rejection::PathRejection, OriginalUri, Path, State},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    category: Result<Path<String>, PathRejection>,
    pagination: Pagination,
    InGame(in_game): InGame,
    OriginalUri(uri): OriginalUri,
) -> Response {
    // A segment that does not decode to a string cannot name a category.
    let category = category.map(|Path(category)| category).unwrap_or_default();

    match service(
        ctx,
        request::Payload {
            category,
            pagination,
            in_game,
        },
    )
    .await
    {
        Ok(success) => success.into_response(),
        Err(err) => err.respond(&uri),
    }
}
