pub mod auth;
pub mod comments;
pub mod config;
pub mod cowsay;
pub mod db;
pub mod error;

use std::sync::Arc;
use std::time::Duration;

use actix_web::HttpResponse;

pub use error::AppError;
pub type Result<T> = std::result::Result<T, AppError>;
pub use config::Settings;

pub use cowsay::{CowsayRenderer, Renderer};
pub use db::{PgStore, Store};

/// Health check endpoint handler
/// Returns a JSON response with server status and timestamp
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Application state shared across all handlers. The store and renderer
/// are trait objects so tests can swap in fakes.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub store: Arc<dyn Store>,
    pub renderer: Arc<dyn Renderer>,
}

impl AppState {
    pub async fn new(settings: Settings) -> Result<Self> {
        let store = PgStore::connect(
            &settings.database.url,
            settings.database.max_connections,
            Duration::from_secs(settings.database.acquire_timeout_secs),
        )
        .await?;

        let renderer = CowsayRenderer::new(settings.cowsay.command.clone());

        Ok(Self {
            settings: Arc::new(settings),
            store: Arc::new(store),
            renderer: Arc::new(renderer),
        })
    }

    /// Assembles state from pre-built components; used by the test
    /// suites to inject in-memory stores and fake renderers.
    pub fn with_parts(
        settings: Settings,
        store: Arc<dyn Store>,
        renderer: Arc<dyn Renderer>,
    ) -> Self {
        Self {
            settings: Arc::new(settings),
            store,
            renderer,
        }
    }

    pub async fn shutdown(&self) {
        self.store.close().await;
    }
}
