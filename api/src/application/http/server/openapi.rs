use crate::application::http::analysis::router::AnalysisApiDoc;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "FoodCheck API"
    ),
    nest(
        (path = "/analysis", api = AnalysisApiDoc),
    )
)]
pub struct ApiDoc;
