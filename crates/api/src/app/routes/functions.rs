//! Tool invocation endpoints.
//!
//! Both accept either invocation shape and answer with the function-response
//! envelope. Tool failures (e.g. the store being down) are reported inside the
//! envelope with status 200; only an unresolvable function name is an HTTP error.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    response::IntoResponse,
    Json,
};

use soiree_invocation::Invocation;

use crate::app::{errors, services::AppServices};

/// `POST /invoke`: dispatch on the invocation's own `function` field.
pub async fn invoke(
    Extension(services): Extension<Arc<AppServices>>,
    Json(call): Json<Invocation>,
) -> axum::response::Response {
    match services.dispatcher.dispatch_invocation(&call).await {
        Ok(envelope) => Json(envelope).into_response(),
        Err(e) => errors::dispatch_error_to_response(e),
    }
}

/// `POST /functions/{name}`: dispatch on the path; suits direct calls that
/// carry no identifiers of their own.
pub async fn invoke_named(
    Extension(services): Extension<Arc<AppServices>>,
    Path(name): Path<String>,
    Json(call): Json<Invocation>,
) -> axum::response::Response {
    match services.dispatcher.dispatch(&name, &call).await {
        Ok(envelope) => Json(envelope).into_response(),
        Err(e) => errors::dispatch_error_to_response(e),
    }
}
