use axum::extract::State;

use crate::application::http::{
    analysis::validators::AnalyzeIngredientsRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};
use foodcheck_core::domain::analysis::{
    entities::AnalysisReport, ports::IngredientAnalysisService,
    value_objects::AnalyzeIngredientsInput,
};

#[utoipa::path(
    post,
    path = "/ingredients",
    tag = "analysis",
    summary = "Classify an ingredient list",
    description = "Scores a free-text ingredient list against fixed keyword tables and returns a processing level, a consumption-frequency advisory and healthier alternatives",
    request_body = AnalyzeIngredientsRequest,
    responses(
        (status = 200, body = AnalysisReport),
        (status = 400, description = "Missing or empty ingredientsText, or malformed JSON body")
    )
)]
pub async fn analyze_ingredients(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AnalyzeIngredientsRequest>,
) -> Result<Response<AnalysisReport>, ApiError> {
    let report = state
        .service
        .analyze_ingredients(AnalyzeIngredientsInput {
            ingredients_text: payload.ingredients_text,
        })
        .map_err(ApiError::from)?;

    Ok(Response::OK(report))
}
