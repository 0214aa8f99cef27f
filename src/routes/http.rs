// GET /version

use axum::response::IntoResponse;

use crate::version::{DESCRIPTION, NAME, VERSION};

/// Service name and version, baked in from Cargo.toml.
pub(super) async fn version_handler() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
        "description": DESCRIPTION,
    }))
}
