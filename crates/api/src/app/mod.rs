//! HTTP application wiring (Axum router).
//!
//! - `routes/`: HTTP handlers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};

use talentpitch_engine::Dispatcher;

pub mod errors;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(dispatcher: Arc<Dispatcher>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/api", routes::router())
        .layer(Extension(dispatcher))
}
