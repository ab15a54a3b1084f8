use axum::{routing::post, Router};

pub mod admin;
pub mod functions;
pub mod system;

/// Router for the tool endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/invoke", post(functions::invoke))
        .route("/functions/:name", post(functions::invoke_named))
        .nest("/admin", admin::router())
}
