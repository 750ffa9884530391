//! Fixed keyword tables driving the classifier.
//!
//! All literals are lowercase; matching is plain substring containment over
//! the lowercased input, so "flavor" also matches "flavored" and "flavoring".
//! Tables are consts, defined once and never mutated.

/// Markers of heavy industrial processing. Weight 2 each.
pub const HIGH_IMPACT: &[&str] = &[
    "emulsifier",
    "stabilizer",
    "artificial",
    "flavour",
    "flavor",
    "colour",
    "color",
    "preservative",
    "corn syrup",
    "glucose syrup",
    "high fructose",
    "equivalent to",
    "e202",
    "e211",
    "e621",
    "e627",
    "e631",
];

/// Markers of moderate refinement. Weight 1 each.
pub const MODERATE_IMPACT: &[&str] = &[
    "refined flour",
    "maida",
    "corn starch",
    "palm oil",
    "hydrogenated",
    "maltodextrin",
    "invert sugar",
    "lecithin",
];

/// One product family with its trigger substrings and the alternatives we
/// suggest for it.
pub struct SuggestionCategory {
    pub triggers: &'static [&'static str],
    pub suggestions: &'static [&'static str],
}

/// Evaluated in order; matching categories contribute their suggestions in
/// this order.
pub const SUGGESTION_CATEGORIES: &[SuggestionCategory] = &[
    SuggestionCategory {
        triggers: &["cereal", "flakes"],
        suggestions: &[
            "Plain oats with fresh fruit",
            "Homemade muesli with nuts and seeds",
        ],
    },
    SuggestionCategory {
        triggers: &["biscuit", "cookie"],
        suggestions: &[
            "Whole grain crackers without added sugar",
            "Homemade biscuits using whole wheat flour and jaggery",
        ],
    },
    SuggestionCategory {
        triggers: &["chips", "namkeen", "snack"],
        suggestions: &[
            "Roasted chana or makhana",
            "Homemade popcorn with minimal oil and salt",
        ],
    },
    SuggestionCategory {
        triggers: &["drink", "juice", "beverage"],
        suggestions: &[
            "Plain water infused with lemon or mint",
            "Freshly made fruit juice without added sugar",
        ],
    },
];

/// Fallback when no category matches.
pub const DEFAULT_SUGGESTIONS: &[&str] = &[
    "Fresh fruits and seasonal salads",
    "Homemade snacks with minimal ingredients",
    "Products with short, simple ingredient lists",
];
