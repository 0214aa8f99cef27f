// Telemetry handlers. Engine calls block on file reads, so each runs on the blocking pool.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::instrument;

use super::AppState;
use crate::error::ProcfsError;
use crate::models::{
    CoreFrequency, LoadInfo, NetworkInterfaceStats, ProcessSnapshot, SwapUsage,
};
use crate::procfs::{Procfs, parse_pid};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    fn new(msg: impl Into<String>) -> Self {
        Self { error: msg.into() }
    }
}

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ErrorResponse>)>;

fn internal_error(e: impl std::fmt::Display) -> (StatusCode, Json<ErrorResponse>) {
    tracing::error!(error = %e, "procfs read failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(e.to_string())),
    )
}

async fn run_blocking<T, F>(procfs: &Arc<Procfs>, f: F) -> ApiResult<T>
where
    T: Send + 'static,
    F: FnOnce(&Procfs) -> Result<T, ProcfsError> + Send + 'static,
{
    let procfs = procfs.clone();
    tokio::task::spawn_blocking(move || f(&procfs))
        .await
        .map_err(|e| internal_error(format!("procfs task join: {}", e)))?
        .map(Json)
        .map_err(internal_error)
}

/// GET /api/processes/{pid}
#[instrument(skip(state), fields(operation = "read_process_snapshot"))]
pub(super) async fn process_snapshot(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> ApiResult<ProcessSnapshot> {
    let Some(pid) = parse_pid(&raw) else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(format!("invalid pid '{}'", raw))),
        ));
    };
    run_blocking(&state.procfs, move |p| Ok(p.read_process_snapshot(pid))).await
}

/// GET /api/processes
#[instrument(skip(state), fields(operation = "enumerate_processes"))]
pub(super) async fn processes(State(state): State<AppState>) -> ApiResult<Vec<ProcessSnapshot>> {
    run_blocking(&state.procfs, |p| {
        Ok(p.enumerate_processes()?.collect::<Vec<_>>())
    })
    .await
}

/// GET /api/swap (megabytes)
#[instrument(skip(state), fields(operation = "read_swap_info"))]
pub(super) async fn swap(State(state): State<AppState>) -> ApiResult<SwapUsage> {
    run_blocking(&state.procfs, |p| Ok(SwapUsage::from(p.read_swap_info()))).await
}

/// GET /api/load
#[instrument(skip(state), fields(operation = "read_load_info"))]
pub(super) async fn load(State(state): State<AppState>) -> ApiResult<LoadInfo> {
    run_blocking(&state.procfs, |p| p.read_load_info()).await
}

/// GET /api/cpu/frequencies
#[instrument(skip(state), fields(operation = "enumerate_core_frequencies"))]
pub(super) async fn cpu_frequencies(State(state): State<AppState>) -> ApiResult<Vec<CoreFrequency>> {
    run_blocking(&state.procfs, |p| p.enumerate_core_frequencies()).await
}

/// GET /api/network/interfaces
#[instrument(skip(state), fields(operation = "enumerate_network_interfaces"))]
pub(super) async fn network_interfaces(
    State(state): State<AppState>,
) -> ApiResult<Vec<NetworkInterfaceStats>> {
    run_blocking(&state.procfs, |p| {
        Ok(p.enumerate_network_interfaces()?.collect::<Vec<_>>())
    })
    .await
}
