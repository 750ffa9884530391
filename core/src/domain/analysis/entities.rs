use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// How industrially processed an ingredient list looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ProcessingLevel {
    #[serde(rename = "Less processed")]
    LessProcessed,
    #[serde(rename = "Moderately processed")]
    ModeratelyProcessed,
    #[serde(rename = "Highly processed")]
    HighlyProcessed,
}

impl ProcessingLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessingLevel::LessProcessed => "Less processed",
            ProcessingLevel::ModeratelyProcessed => "Moderately processed",
            ProcessingLevel::HighlyProcessed => "Highly processed",
        }
    }

    /// Consumption-frequency advisory, fixed 1:1 per level.
    pub fn frequency_advisory(&self) -> &'static str {
        match self {
            ProcessingLevel::LessProcessed => {
                "Safe for everyday consumption (in reasonable portions)."
            }
            ProcessingLevel::ModeratelyProcessed => "Limit to a few times per week.",
            ProcessingLevel::HighlyProcessed => {
                "Occasional treat only – about once a week or less."
            }
        }
    }
}

/// Result of classifying one ingredient list. This is the full wire shape:
/// exactly these three fields, nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub processing_level: ProcessingLevel,
    pub frequency: String,
    pub alternatives: Vec<String>,
}
