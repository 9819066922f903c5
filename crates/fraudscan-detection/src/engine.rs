//! Substring detection over the keyword catalog.

use std::borrow::Cow;
use std::collections::BTreeSet;

use fraudscan_core::config::DetectionConfig;
use fraudscan_core::errors::{FraudScanError, FraudScanResult};
use fraudscan_core::traits::{ICaseMatcher, IDetector};
use fraudscan_core::{Category, DetectionResult};

use crate::catalog::{Keyword, KeywordCatalog};
use crate::matcher::CaseMatcher;
use crate::normalize::normalize;

/// A catalog entry with its phrase pre-normalized for matching.
#[derive(Debug, Clone)]
struct ScanEntry {
    category: Category,
    keyword: Keyword,
    needle: Cow<'static, str>,
}

/// Scans text for catalog phrases and links the hits to reference cases.
///
/// Stateless after construction: `detect` takes `&self` and the engine can be
/// shared across threads. Identical input always yields an identical result.
pub struct DetectionEngine {
    entries: Vec<ScanEntry>,
    ascii_case_fold: bool,
    matcher: Box<dyn ICaseMatcher>,
}

impl DetectionEngine {
    /// Engine over the full catalog and the built-in cases.
    pub fn new() -> Self {
        Self::build(&Category::ALL, true)
    }

    /// Engine honoring `config`. Fails with `InvalidCategory` if
    /// `enabled_categories` names an unknown category.
    pub fn with_config(config: &DetectionConfig) -> FraudScanResult<Self> {
        let categories = config.categories()?;
        Ok(Self::build(&categories, config.ascii_case_fold))
    }

    /// Replace the case matcher.
    pub fn with_matcher(mut self, matcher: impl ICaseMatcher + 'static) -> Self {
        self.matcher = Box::new(matcher);
        self
    }

    fn build(categories: &[Category], ascii_case_fold: bool) -> Self {
        Self::from_entries(
            KeywordCatalog::new()
                .iter()
                .filter(|(category, _)| categories.contains(category)),
            ascii_case_fold,
        )
    }

    /// Engine over an explicit `(category, keyword)` table, scanned in the
    /// order given.
    pub(crate) fn from_entries(
        entries: impl IntoIterator<Item = (Category, Keyword)>,
        ascii_case_fold: bool,
    ) -> Self {
        let entries = entries
            .into_iter()
            .map(|(category, keyword)| ScanEntry {
                category,
                keyword,
                needle: normalize(keyword, ascii_case_fold),
            })
            .collect();
        Self {
            entries,
            ascii_case_fold,
            matcher: Box::new(CaseMatcher::default()),
        }
    }

    /// Categories this engine scans, in catalog order.
    pub fn categories(&self) -> Vec<Category> {
        let mut out: Vec<Category> = Vec::new();
        for entry in &self.entries {
            if out.last() != Some(&entry.category) {
                out.push(entry.category);
            }
        }
        out
    }

    /// Keyword pass only: matched phrases (category-major, catalog order) and
    /// the categories owning them.
    pub fn scan(&self, text: &str) -> (Vec<String>, BTreeSet<Category>) {
        let haystack = normalize(text, self.ascii_case_fold);
        let mut keywords = Vec::new();
        let mut categories = BTreeSet::new();
        for entry in &self.entries {
            if haystack.contains(&*entry.needle) {
                keywords.push(entry.keyword.to_string());
                categories.insert(entry.category);
            }
        }
        (keywords, categories)
    }

    /// Scan `text` and attach the related reference cases.
    pub fn detect(&self, text: &str) -> DetectionResult {
        let _span = tracing::debug_span!("fraudscan.detection", input_len = text.len()).entered();

        let (matched_keywords, matched_categories) = self.scan(text);
        let matched_cases = self
            .matcher
            .match_cases(&matched_categories, &matched_keywords);

        tracing::debug!(
            event = "detection_completed",
            keywords = matched_keywords.len(),
            categories = matched_categories.len(),
            cases = matched_cases.len(),
            "detection completed"
        );

        DetectionResult {
            matched_keywords,
            matched_categories,
            matched_cases,
        }
    }

    /// Decode `bytes` as UTF-8 and detect. Invalid UTF-8 is reported as
    /// `MalformedInput`, never repaired.
    pub fn detect_bytes(&self, bytes: &[u8]) -> FraudScanResult<DetectionResult> {
        let text = std::str::from_utf8(bytes).map_err(|e| {
            tracing::warn!(valid_up_to = e.valid_up_to(), "rejected non-UTF-8 input");
            FraudScanError::MalformedInput {
                reason: format!("invalid UTF-8 sequence at byte {}", e.valid_up_to()),
            }
        })?;
        Ok(self.detect(text))
    }
}

impl Default for DetectionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DetectionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DetectionEngine")
            .field("entries", &self.entries.len())
            .field("ascii_case_fold", &self.ascii_case_fold)
            .finish_non_exhaustive()
    }
}

impl IDetector for DetectionEngine {
    fn detect(&self, text: &str) -> FraudScanResult<DetectionResult> {
        Ok(DetectionEngine::detect(self, text))
    }
}
