use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, routing::post, Json, Router};

use crate::app::{errors, services::AppServices};

pub fn router() -> Router {
    Router::new().route("/seed", post(seed))
}

/// Run the bootstrap seeder for the current year.
pub async fn seed(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    let year = services.clock().current_year();

    match services.seeder.seed(year).await {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "seeded": true,
                "year": year,
            })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, %year, "seeding failed");
            errors::json_error(StatusCode::INTERNAL_SERVER_ERROR, "seed_failed", e.to_string())
        }
    }
}
