use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeIngredientsRequest {
    /// Ingredient list text, as printed on the package.
    #[serde(default)]
    #[validate(
        custom(function = ingredients_text_present),
        length(max = 5000, message = "ingredientsText must be at most 5000 characters")
    )]
    #[schema(example = "wheat flour, palm oil, emulsifier (soy lecithin)")]
    pub ingredients_text: String,
}

// A missing field deserializes to the empty string, so absent and blank input
// produce the same error.
fn ingredients_text_present(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("required");
        error.message = Some(Cow::Borrowed("ingredientsText is required"));
        return Err(error);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_text_fails_validation() {
        let request = AnalyzeIngredientsRequest {
            ingredients_text: "  \t ".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_non_blank_text_passes_validation() {
        let request = AnalyzeIngredientsRequest {
            ingredients_text: "wheat flour, sugar".to_string(),
        };
        assert!(request.validate().is_ok());
    }
}
