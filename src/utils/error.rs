use axum::{
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
};

/// Terminal error responder: logs the failure against the request path and
/// answers with a plain-text 500 carrying the same message.
pub fn write_error(uri: &Uri, message: impl Into<String>) -> Response {
    let message = message.into();

    tracing::error!("{} {}", uri.path(), message);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        message,
    )
        .into_response()
}
