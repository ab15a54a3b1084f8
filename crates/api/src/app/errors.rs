use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use soiree_infra::action_dispatcher::DispatchError;

pub fn dispatch_error_to_response(err: DispatchError) -> axum::response::Response {
    match err {
        DispatchError::UnknownFunction(_) => {
            json_error(StatusCode::NOT_FOUND, "unknown_function", err.to_string())
        }
        DispatchError::MissingFunction => {
            json_error(StatusCode::BAD_REQUEST, "missing_function", err.to_string())
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
