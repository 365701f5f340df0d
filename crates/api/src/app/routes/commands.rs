use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use talentpitch_engine::Dispatcher;
use talentpitch_events::Command;

use crate::app::errors;

/// `POST /api/commands`: translate one command into its event.
pub async fn submit(
    Extension(dispatcher): Extension<Arc<Dispatcher>>,
    body: Result<Json<Command>, JsonRejection>,
) -> axum::response::Response {
    let Json(command) = match body {
        Ok(body) => body,
        Err(rejection) => {
            return errors::json_error(
                StatusCode::BAD_REQUEST,
                "invalid_payload",
                rejection.body_text(),
            );
        }
    };

    match dispatcher.translate(&command) {
        Ok(event) => (StatusCode::OK, Json(event)).into_response(),
        Err(e) => errors::translate_error_to_response(e),
    }
}
