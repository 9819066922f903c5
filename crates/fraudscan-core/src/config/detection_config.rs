use serde::{Deserialize, Serialize};

use super::defaults;
use crate::category::Category;
use crate::errors::FraudScanResult;

/// Detection engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Fold ASCII letters to lowercase on both sides before matching.
    /// Non-ASCII text is never folded.
    pub ascii_case_fold: bool,
    /// Category wire names to scan. Empty means all categories.
    pub enabled_categories: Vec<String>,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            ascii_case_fold: defaults::DEFAULT_ASCII_CASE_FOLD,
            enabled_categories: Vec::new(),
        }
    }
}

impl DetectionConfig {
    /// Resolve `enabled_categories` into categories, in catalog order and
    /// without duplicates. An unknown name fails with `InvalidCategory`.
    pub fn categories(&self) -> FraudScanResult<Vec<Category>> {
        if self.enabled_categories.is_empty() {
            return Ok(Category::ALL.to_vec());
        }
        let mut enabled = Vec::with_capacity(self.enabled_categories.len());
        for name in &self.enabled_categories {
            enabled.push(name.parse::<Category>()?);
        }
        Ok(Category::ALL
            .into_iter()
            .filter(|c| enabled.contains(c))
            .collect())
    }
}
