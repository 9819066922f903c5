//! Links detected signals to reference cases.

use std::collections::BTreeSet;

use fraudscan_core::traits::ICaseMatcher;
use fraudscan_core::{Category, FraudCase};

use crate::cases::CaseRepository;

/// Selects the reference cases related to a set of detected signals.
///
/// A case is included when its category was detected OR it shares at least
/// one keyword with the matched keywords. Output keeps repository order.
#[derive(Debug, Clone, Default)]
pub struct CaseMatcher {
    repository: CaseRepository,
}

impl CaseMatcher {
    pub fn new(repository: CaseRepository) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &CaseRepository {
        &self.repository
    }

    /// Cases related to `categories` or `keywords`, by reference.
    pub fn select<'a, S: AsRef<str>>(
        &'a self,
        categories: &'a BTreeSet<Category>,
        keywords: &'a [S],
    ) -> impl Iterator<Item = &'a FraudCase> + 'a {
        self.repository
            .iter()
            .filter(move |case| categories.contains(&case.category) || case.shares_keyword(keywords))
    }
}

impl ICaseMatcher for CaseMatcher {
    fn match_cases(&self, categories: &BTreeSet<Category>, keywords: &[String]) -> Vec<FraudCase> {
        self.select(categories, keywords).cloned().collect()
    }
}
