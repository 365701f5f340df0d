use axum::{Router, routing::post};

pub mod commands;
pub mod system;

/// Router for the command endpoints (mounted under `/api`).
pub fn router() -> Router {
    Router::new().route("/commands", post(commands::submit))
}
