use std::collections::BTreeSet;

use crate::category::Category;
use crate::models::FraudCase;

/// Links detected signals to reference cases.
pub trait ICaseMatcher: Send + Sync {
    /// Return every case whose category is in `categories` or whose
    /// associated keywords intersect `keywords`, in repository order.
    fn match_cases(&self, categories: &BTreeSet<Category>, keywords: &[String]) -> Vec<FraudCase>;
}
