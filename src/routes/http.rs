// GET handlers: version, snapshot catalog, container history and summaries

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;

use super::AppState;
use crate::models::{DISPLAY_TIMESTAMP_FORMAT, Record};
use crate::stats_repo::aggregation;
use crate::version::{NAME, VERSION};

/// GET /version — returns service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}

#[derive(Serialize)]
pub(super) struct SnapshotListEntry {
    name: String,
    timestamp: String,
    containers: usize,
}

/// GET /api/snapshots — all loaded snapshots, newest first.
pub(super) async fn list_snapshots(State(state): State<AppState>) -> impl IntoResponse {
    let catalog = state.store.current().await;
    let entries: Vec<SnapshotListEntry> = catalog
        .snapshots
        .iter()
        .map(|s| SnapshotListEntry {
            name: s.name.clone(),
            timestamp: s.timestamp.format(DISPLAY_TIMESTAMP_FORMAT).to_string(),
            containers: s.records.len(),
        })
        .collect();
    axum::Json(entries)
}

#[derive(Serialize)]
pub(super) struct SnapshotView {
    name: String,
    timestamp: String,
    records: Vec<Record>,
}

/// GET /api/snapshots/{index} — one snapshot with its records verbatim.
/// Indexes follow list order (0 = newest); out of range is 404.
pub(super) async fn get_snapshot(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<impl IntoResponse, StatusCode> {
    let catalog = state.store.current().await;
    let snapshot = catalog.get(index).ok_or(StatusCode::NOT_FOUND)?;
    Ok(axum::Json(SnapshotView {
        name: snapshot.name.clone(),
        timestamp: snapshot.timestamp.format(DISPLAY_TIMESTAMP_FORMAT).to_string(),
        records: snapshot.records.clone(),
    }))
}

/// GET /api/container/{id} — one container's history, oldest first.
/// An unknown ID yields an empty series, not an error.
pub(super) async fn container_series(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let catalog = state.store.current().await;
    axum::Json(aggregation::container_series(&catalog, &id))
}

/// GET /api/container/{id}/summary — history plus derived statistics.
pub(super) async fn container_report(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let catalog = state.store.current().await;
    axum::Json(aggregation::container_report(&catalog, &id))
}

/// GET /api/summary — every container's summary, ranked by avg CPU desc.
pub(super) async fn all_summaries(State(state): State<AppState>) -> impl IntoResponse {
    let catalog = state.store.current().await;
    axum::Json(aggregation::all_summaries(&catalog))
}
