use std::collections::BTreeSet;

use fraudscan_core::Category;
use fraudscan_detection::{CaseRepository, DetectionEngine, KeywordCatalog};
use proptest::prelude::*;

/// Characters that never occur in any catalog phrase, so text built from
/// them can never match.
const NEUTRAL: &str = "今天天氣真好我們去公園散步吃飯喝茶看書，。！？ abcdefghijklmnopqrstuvwxyz0123456789";

fn neutral_text() -> impl Strategy<Value = String> {
    let chars: Vec<char> = NEUTRAL.chars().collect();
    prop::collection::vec(prop::sample::select(chars), 0..120)
        .prop_map(|cs| cs.into_iter().collect())
}

fn catalog_phrase() -> impl Strategy<Value = (Category, &'static str)> {
    let entries: Vec<(Category, &'static str)> = KeywordCatalog::new().iter().collect();
    prop::sample::select(entries)
}

// ── No catalog phrase → empty result ──────────────────────────────────────

#[test]
fn neutral_alphabet_shares_no_phrase() {
    // Guard for the strategy above: no catalog phrase can be spelled from it.
    for (_, keyword) in KeywordCatalog::new().iter() {
        assert!(
            keyword.chars().any(|c| !NEUTRAL.contains(c.to_ascii_lowercase())),
            "'{keyword}' can be spelled from the neutral alphabet"
        );
    }
}

proptest! {
    #[test]
    fn text_without_phrases_yields_nothing(text in neutral_text()) {
        let result = DetectionEngine::new().detect(&text);
        prop_assert!(result.matched_keywords.is_empty());
        prop_assert!(result.matched_categories.is_empty());
        prop_assert!(result.matched_cases.is_empty());
    }
}

// ── Determinism ───────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn detect_is_idempotent(text in ".{0,200}") {
        let engine = DetectionEngine::new();
        let first = engine.detect(&text);
        let second = engine.detect(&text);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn separate_engines_agree(text in ".{0,200}") {
        prop_assert_eq!(DetectionEngine::new().detect(&text), DetectionEngine::new().detect(&text));
    }
}

// ── Structural invariants ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn keywords_come_from_catalog_and_categories_are_exact(
        prefix in neutral_text(),
        (category, keyword) in catalog_phrase(),
        suffix in ".{0,40}",
    ) {
        let catalog = KeywordCatalog::new();
        let text = format!("{prefix}{keyword}{suffix}");
        let result = DetectionEngine::new().detect(&text);

        prop_assert!(result.matched_keywords.iter().any(|k| k == keyword));
        prop_assert!(result.has_category(category));

        let mut owners = BTreeSet::new();
        for k in &result.matched_keywords {
            let cats = catalog.categories_of(k);
            prop_assert!(!cats.is_empty(), "'{}' is not in the catalog", k);
            owners.extend(cats);
        }
        prop_assert_eq!(owners, result.matched_categories);
    }

    #[test]
    fn cases_are_an_ordered_subset_with_or_predicate(text in ".{0,80}", (_, keyword) in catalog_phrase()) {
        let text = format!("{text}{keyword}");
        let result = DetectionEngine::new().detect(&text);
        let repository = CaseRepository::builtin();

        let expected: Vec<_> = repository
            .iter()
            .filter(|c| {
                result.matched_categories.contains(&c.category)
                    || c.shares_keyword(result.matched_keywords.as_slice())
            })
            .cloned()
            .collect();
        prop_assert_eq!(&result.matched_cases, &expected);
    }

    #[test]
    fn phrase_order_does_not_change_categories(
        (_, a) in catalog_phrase(),
        (_, b) in catalog_phrase(),
    ) {
        let engine = DetectionEngine::new();
        let ab = engine.detect(&format!("{a}，{b}"));
        let ba = engine.detect(&format!("{b}，{a}"));
        prop_assert_eq!(ab.matched_categories, ba.matched_categories);
        prop_assert_eq!(ab.matched_cases, ba.matched_cases);
    }
}
