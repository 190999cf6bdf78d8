use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use http_body_util::BodyExt;
use reboxed::{
    app,
    modules::package::repository::{Error, Package, PackageStore},
    types::{AppContext, AppEnvironment, Context},
};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchCall {
    pub package_type: String,
    pub offset: i64,
    pub limit: i64,
}

/// In-memory store that hands back a fixed number of packages and records
/// every call made to it.
pub struct RecordingStore {
    returned: usize,
    fail: bool,
    calls: Mutex<Vec<FetchCall>>,
}

impl RecordingStore {
    pub fn returning(returned: usize) -> Arc<Self> {
        Arc::new(Self {
            returned,
            fail: false,
            calls: Mutex::new(vec![]),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            returned: 0,
            fail: true,
            calls: Mutex::new(vec![]),
        })
    }

    pub fn calls(&self) -> Vec<FetchCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PackageStore for RecordingStore {
    async fn fetch_package_list_by_type_paged(
        &self,
        package_type: &str,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Package>, Error> {
        self.calls.lock().unwrap().push(FetchCall {
            package_type: package_type.to_string(),
            offset,
            limit,
        });

        if self.fail {
            return Err(Error::UnexpectedError);
        }

        Ok((0..self.returned)
            .map(|i| package(offset + i as i64 + 1, package_type))
            .collect())
    }
}

pub fn package(id: i64, package_type: &str) -> Package {
    Package {
        id,
        package_type: package_type.to_string(),
        name: format!("{}_{}", package_type, id),
        author: "tester".to_string(),
        description: String::new(),
        downloads: id * 10,
        favorites: id,
        uploaded_at: NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap(),
    }
}

pub fn build_test_app(store: Arc<RecordingStore>) -> Router {
    let ctx = Context {
        app: AppContext {
            host: "127.0.0.1".to_string(),
            environment: AppEnvironment::Development,
            port: 0,
            url: "http://127.0.0.1".to_string(),
        },
        packages: store,
    };

    app::router(Arc::new(ctx))
}

pub async fn get(app: Router, uri: &str, headers: &[(&str, &str)]) -> (StatusCode, String) {
    let mut request = Request::builder().uri(uri);
    for (name, value) in headers {
        request = request.header(*name, *value);
    }

    let response = app
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();

    (status, String::from_utf8(body.to_vec()).unwrap())
}
