#[derive(Debug, Clone)]
pub struct AnalyzeIngredientsInput {
    pub ingredients_text: String,
}
