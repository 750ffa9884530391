use crate::domain::{
    analysis::{entities::AnalysisReport, value_objects::AnalyzeIngredientsInput},
    common::entities::app_errors::CoreError,
};

/// Service trait for ingredient classification. Synchronous: the classifier
/// does no I/O and holds no state.
pub trait IngredientAnalysisService: Send + Sync {
    fn analyze_ingredients(
        &self,
        input: AnalyzeIngredientsInput,
    ) -> Result<AnalysisReport, CoreError>;
}
