use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap, HeaderName},
};
use std::convert::Infallible;

/// Sent by the embedded game browser.
pub const GMOD_VERSION: HeaderName = HeaderName::from_static("gmod_version");

pub fn is_in_game(headers: &HeaderMap) -> bool {
    headers
        .get(GMOD_VERSION)
        .map(|value| !value.is_empty())
        .unwrap_or(false)
}

/// Whether the request came from the in-game client. Only selects the
/// rendering variant, it grants nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InGame(pub bool);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for InGame {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(is_in_game(&parts.headers)))
    }
}
