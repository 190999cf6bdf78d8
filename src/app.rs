use crate::{modules, types::Context};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace;

pub fn router(ctx: Arc<Context>) -> Router {
    Router::new()
        .nest("/ingame", modules::get_router())
        .with_state(ctx)
        .layer(trace::TraceLayer::new_for_http())
}

pub struct App {
    ctx: Arc<Context>,
    router: Router,
}

impl App {
    pub fn new(ctx: Arc<Context>) -> Self {
        let router = router(ctx.clone());

        Self { ctx, router }
    }

    pub async fn serve(self) {
        let addr = format!("{}:{}", self.ctx.app.host, self.ctx.app.port);
        let listener = TcpListener::bind(&addr).await.unwrap_or_else(|e| {
            tracing::error!("{:}", e);
            panic!("Failed to bind to {}", addr)
        });

        tracing::info!("App is running on {} ({})", addr, self.ctx.app.url);

        if let Err(err) = axum::serve(listener, self.router).await {
            tracing::error!("Server stopped unexpectedly: {}", err);
        }
    }
}
