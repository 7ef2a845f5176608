// GET handlers: version, api/snapshot, api/profile

use axum::{extract::State, response::IntoResponse};

use super::AppState;
use crate::version::{NAME, VERSION};

/// GET /version — returns service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}

/// GET /api/snapshot — assembles a fresh StationSnapshot for this render;
/// nothing is cached between requests.
pub(super) async fn api_snapshot_handler(State(state): State<AppState>) -> impl IntoResponse {
    axum::Json(state.assembler.assemble().await)
}

/// GET /api/profile — the PV device profile alone; empty object when the
/// host has no profile file.
pub(super) async fn api_profile_handler(State(state): State<AppState>) -> impl IntoResponse {
    axum::Json(state.assembler.load_profile())
}
