// HTTP routes

mod http;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::store::CatalogStore;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) store: Arc<CatalogStore>,
}

pub fn app(store: Arc<CatalogStore>) -> Router {
    let state = AppState { store };
    Router::new()
        .route("/", get(|| async { "dockstats-viewer: snapshot catalog API" })) // GET /
        .route("/version", get(http::version_handler)) // GET /version
        .route("/api/snapshots", get(http::list_snapshots)) // GET /api/snapshots
        .route("/api/snapshots/{index}", get(http::get_snapshot)) // GET /api/snapshots/{index}
        .route("/api/container/{id}", get(http::container_series)) // GET /api/container/{id}
        .route("/api/container/{id}/summary", get(http::container_report)) // GET /api/container/{id}/summary
        .route("/api/summary", get(http::all_summaries)) // GET /api/summary
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
