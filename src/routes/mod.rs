// HTTP routes (the thin, replaceable presentation seam)

mod http;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::snapshot::SnapshotAssembler;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) assembler: Arc<SnapshotAssembler>,
}

pub fn app(assembler: Arc<SnapshotAssembler>) -> Router {
    let state = AppState { assembler };
    Router::new()
        .route("/", get(|| async { "Solar station dashboard" })) // GET /
        .route("/version", get(http::version_handler)) // GET /version
        .route("/api/snapshot", get(http::api_snapshot_handler)) // GET /api/snapshot
        .route("/api/profile", get(http::api_profile_handler)) // GET /api/profile
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
