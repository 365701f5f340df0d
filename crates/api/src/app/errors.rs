use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::{Value, json};

use talentpitch_core::{TranslateError, Violation};

pub fn translate_error_to_response(err: TranslateError) -> axum::response::Response {
    match &err {
        TranslateError::UnknownCommandType(_) => {
            json_error(StatusCode::BAD_REQUEST, "unknown_command_type", err.to_string())
        }
        TranslateError::ValidationFailure(violations) => {
            let details: Vec<Value> = violations.iter().map(violation_json).collect();
            (
                StatusCode::BAD_REQUEST,
                axum::Json(json!({
                    "error": "validation_error",
                    "message": err.to_string(),
                    "violations": details,
                })),
            )
                .into_response()
        }
    }
}

fn violation_json(v: &Violation) -> Value {
    json!({
        "field": v.field(),
        "element": v.element(),
        "rule": v.rule(),
        "reason": v.reason(),
    })
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
