use serde::{Deserialize, Serialize};

use crate::category::Category;

/// A reference record describing a real-world fraud pattern.
///
/// Cases are created once when the repository is first touched and are never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FraudCase {
    pub category: Category,
    pub description: String,
    /// Opaque URL. Never dereferenced or validated.
    pub reference_link: String,
    /// Representative keywords, in declared order.
    pub associated_keywords: Vec<String>,
}

impl FraudCase {
    pub fn new(
        category: Category,
        description: impl Into<String>,
        reference_link: impl Into<String>,
        associated_keywords: &[&str],
    ) -> Self {
        Self {
            category,
            description: description.into(),
            reference_link: reference_link.into(),
            associated_keywords: associated_keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    /// Whether any of this case's keywords appears in `keywords`.
    pub fn shares_keyword<S: AsRef<str>>(&self, keywords: &[S]) -> bool {
        self.associated_keywords
            .iter()
            .any(|k| keywords.iter().any(|m| m.as_ref() == k))
    }
}
