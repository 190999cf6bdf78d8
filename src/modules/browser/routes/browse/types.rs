pub mod request {
    use crate::utils::pagination::Pagination;

    pub struct Payload {
        pub category: String,
        pub pagination: Pagination,
        pub in_game: bool,
    }
}

pub mod response {
    use crate::utils::error::write_error;
    use axum::{
        http::{StatusCode, Uri},
        response::{Html, IntoResponse},
    };

    pub enum Success {
        Page(String),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Page(html) => (StatusCode::OK, Html(html)).into_response(),
            }
        }
    }

    #[derive(Debug, thiserror::Error)]
    pub enum Error {
        #[error("unknown category")]
        UnknownCategory,
        #[error("failed to fetch package list: {0}")]
        FailedToFetchPackageList(String),
        #[error("failed to execute template: {0}")]
        FailedToExecuteTemplate(String),
    }

    impl Error {
        pub fn respond(self, uri: &Uri) -> axum::response::Response {
            match self {
                Self::UnknownCategory => {
                    (StatusCode::NOT_FOUND, self.to_string()).into_response()
                }
                Self::FailedToFetchPackageList(_) | Self::FailedToExecuteTemplate(_) => {
                    write_error(uri, self.to_string())
                }
            }
        }
    }

    pub type Response = Result<Success, Error>;

}
