// HTTP routes: one read-only JSON endpoint per extraction

mod api;
mod http;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::procfs::Procfs;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) procfs: Arc<Procfs>,
}

pub fn app(procfs: Arc<Procfs>) -> Router {
    let state = AppState { procfs };
    Router::new()
        .route("/version", get(http::version_handler)) // GET /version
        .route("/api/processes", get(api::processes)) // GET /api/processes
        .route("/api/processes/{pid}", get(api::process_snapshot)) // GET /api/processes/{pid}
        .route("/api/swap", get(api::swap)) // GET /api/swap
        .route("/api/load", get(api::load)) // GET /api/load
        .route("/api/cpu/frequencies", get(api::cpu_frequencies)) // GET /api/cpu/frequencies
        .route("/api/network/interfaces", get(api::network_interfaces)) // GET /api/network/interfaces
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
