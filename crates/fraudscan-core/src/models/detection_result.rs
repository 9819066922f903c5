use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::models::FraudCase;

/// Structured output of scanning one input text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionResult {
    /// Matched catalog phrases, category-major in catalog order. A phrase
    /// listed under two categories appears once per category.
    pub matched_keywords: Vec<String>,
    /// Exactly the categories owning at least one matched keyword.
    pub matched_categories: BTreeSet<Category>,
    /// Related reference cases, in repository order.
    pub matched_cases: Vec<FraudCase>,
}

impl DetectionResult {
    /// An empty result: nothing matched.
    pub fn empty() -> Self {
        Self::default()
    }

    /// True if at least one keyword matched.
    pub fn is_suspicious(&self) -> bool {
        !self.matched_keywords.is_empty()
    }

    pub fn has_category(&self, category: Category) -> bool {
        self.matched_categories.contains(&category)
    }
}
