pub mod config;
pub mod handler;
pub mod lambda;
pub mod orchestrator;
pub mod outcome;
pub mod telemetry;
pub mod transform;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use media_core::{ObjectStore, S3ObjectStore};
use tower_http::trace::TraceLayer;

pub use config::{Config, ConfigError, LogFormat, Transport};
pub use orchestrator::Orchestrator;
pub use outcome::{Failure, FailureKind, TransformOutcome};

/// 両トランスポートで共有する状態（リクエスト固有の値は持たない）
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Orchestrator,
}

impl AppState {
    pub fn new(store: Arc<dyn ObjectStore>, config: &Config) -> Self {
        Self {
            orchestrator: Orchestrator::new(store).with_fetch_timeout(config.fetch_timeout),
        }
    }

    /// 設定どおりの S3 クライアントで AppState を作成する
    pub fn from_config(config: &Config) -> Self {
        let store = S3ObjectStore::from_settings(&config.storage);
        Self::new(Arc::new(store), config)
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handler::health))
        .route("/resize", get(handler::resize))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
