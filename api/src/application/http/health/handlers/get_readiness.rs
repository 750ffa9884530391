use crate::application::http::server::api_entities::response::Response;

use super::get_health::HealthResponse;

// No backing stores, so readiness is unconditional.
#[utoipa::path(
    get,
    path = "/health/ready",
    tag = "health",
    summary = "Readiness probe",
    responses(
        (status = 200, body = HealthResponse)
    )
)]
pub async fn get_readiness() -> Response<HealthResponse> {
    Response::OK(HealthResponse {
        status: "ready".to_string(),
    })
}
