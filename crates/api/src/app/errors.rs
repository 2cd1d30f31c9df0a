use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use meterops_core::DomainError;
use meterops_infra::GatewayError;

pub fn gateway_error_to_response(err: GatewayError) -> axum::response::Response {
    match err {
        GatewayError::NotFound { kind, .. } => json_error(
            StatusCode::NOT_FOUND,
            "not_found",
            format!("{} not found", kind.label()),
        ),
        GatewayError::Validation(DomainError::Validation(msg)) => {
            json_error(StatusCode::BAD_REQUEST, "validation_error", msg)
        }
        GatewayError::Validation(e) => json_error(StatusCode::BAD_REQUEST, "validation_error", e.to_string()),
        GatewayError::Store(e) => {
            tracing::error!(error = %e, "document store failure");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_error", "Server error")
        }
        GatewayError::Decode { kind, message } => {
            tracing::error!(%kind, %message, "stored document could not be decoded");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "decode_error", "Server error")
        }
        GatewayError::Transport(msg) => {
            tracing::error!(error = %msg, "upstream failure");
            json_error(StatusCode::BAD_GATEWAY, "transport_error", "Server error")
        }
    }
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

pub fn invalid_id(raw: &str) -> axum::response::Response {
    json_error(StatusCode::BAD_REQUEST, "invalid_id", format!("invalid id {raw:?}"))
}
