use tracing::debug;

use crate::domain::{
    analysis::{
        entities::{AnalysisReport, ProcessingLevel},
        keywords::{DEFAULT_SUGGESTIONS, HIGH_IMPACT, MODERATE_IMPACT, SUGGESTION_CATEGORIES},
        ports::IngredientAnalysisService,
        value_objects::AnalyzeIngredientsInput,
    },
    common::{entities::app_errors::CoreError, services::Service},
};

/// Lowercase and trim. Idempotent, so already-normalized input passes through
/// unchanged.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Sum of keyword weights over the normalized input. Each keyword counts once
/// no matter how often it occurs.
pub fn score_ingredients(normalized: &str) -> u32 {
    let high = HIGH_IMPACT
        .iter()
        .filter(|keyword| normalized.contains(**keyword))
        .count() as u32;
    let moderate = MODERATE_IMPACT
        .iter()
        .filter(|keyword| normalized.contains(**keyword))
        .count() as u32;

    high * 2 + moderate
}

/// Threshold mapping, total over all scores.
pub fn level_for_score(score: u32) -> ProcessingLevel {
    match score {
        4.. => ProcessingLevel::HighlyProcessed,
        2..=3 => ProcessingLevel::ModeratelyProcessed,
        _ => ProcessingLevel::LessProcessed,
    }
}

/// Union of suggestions from every matching category, insertion order equal to
/// category evaluation order, deduplicated by value. Falls back to the default
/// set so the result is never empty.
pub fn suggest_alternatives(normalized: &str) -> Vec<String> {
    let mut alternatives: Vec<String> = Vec::new();

    for category in SUGGESTION_CATEGORIES {
        let matched = category
            .triggers
            .iter()
            .any(|trigger| normalized.contains(trigger));
        if !matched {
            continue;
        }
        for suggestion in category.suggestions {
            if !alternatives.iter().any(|existing| existing == suggestion) {
                alternatives.push((*suggestion).to_string());
            }
        }
    }

    if alternatives.is_empty() {
        return DEFAULT_SUGGESTIONS
            .iter()
            .map(|suggestion| (*suggestion).to_string())
            .collect();
    }

    alternatives
}

/// Classify an already-normalized, non-empty ingredient list. Pure and
/// deterministic; never fails.
pub fn analyze(normalized: &str) -> AnalysisReport {
    let score = score_ingredients(normalized);
    let level = level_for_score(score);

    AnalysisReport {
        processing_level: level,
        frequency: level.frequency_advisory().to_string(),
        alternatives: suggest_alternatives(normalized),
    }
}

impl IngredientAnalysisService for Service {
    fn analyze_ingredients(
        &self,
        input: AnalyzeIngredientsInput,
    ) -> Result<AnalysisReport, CoreError> {
        let normalized = normalize(&input.ingredients_text);
        if normalized.is_empty() {
            return Err(CoreError::MissingIngredients);
        }

        let report = analyze(&normalized);
        debug!(
            score = score_ingredients(&normalized),
            level = report.processing_level.as_str(),
            "classified ingredient list"
        );

        Ok(report)
    }
}
