use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("ingredientsText is required")]
    MissingIngredients,

    #[error("internal error: {0}")]
    Internal(String),
}
