use super::handlers::analyze_ingredients::{__path_analyze_ingredients, analyze_ingredients};
use crate::application::http::server::{api_entities::api_error::ApiError, app_state::AppState};
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(analyze_ingredients))]
pub struct AnalysisApiDoc;

pub fn analysis_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/analysis/ingredients", state.args.server.root_path),
        post(analyze_ingredients).fallback(method_not_allowed),
    )
}

// The classifier endpoint is POST-only; anything else gets the JSON error
// body instead of axum's bare 405.
async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
