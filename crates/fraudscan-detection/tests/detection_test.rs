use std::collections::BTreeSet;

use fraudscan_core::config::DetectionConfig;
use fraudscan_core::errors::FraudScanError;
use fraudscan_core::traits::{ICaseMatcher, IDetector};
use fraudscan_core::{Category, FraudCase};
use fraudscan_detection::{CaseMatcher, CaseRepository, DetectionEngine, KeywordCatalog};

// ── Contract: known phrase → category and case ────────────────────────────

#[test]
fn guaranteed_profit_flags_investment_and_links_case() {
    let engine = DetectionEngine::new();
    let result = engine.detect("這個方案保證獲利，名額有限");

    assert!(result.has_category(Category::Investment));
    assert!(result
        .matched_cases
        .iter()
        .any(|c| c.description == "宣稱高報酬率的投資計劃"));
}

#[test]
fn reference_message_matches_only_investment() {
    let engine = DetectionEngine::new();
    let result = engine.detect("保證獲利的虛擬貨幣投資機會，快速致富");

    for keyword in ["保證獲利", "虛擬貨幣投資", "投資機會", "快速致富"] {
        assert!(
            result.matched_keywords.iter().any(|k| k == keyword),
            "missing '{keyword}' in {:?}",
            result.matched_keywords
        );
    }
    assert_eq!(result.matched_categories, BTreeSet::from([Category::Investment]));
    assert_eq!(result.matched_cases.len(), 1);
    assert_eq!(result.matched_cases[0].category, Category::Investment);
}

#[test]
fn clean_text_yields_empty_result() {
    let engine = DetectionEngine::new();
    for text in ["今天天氣真好", "", "   ", "\n\t"] {
        let result = engine.detect(text);
        assert!(result.matched_keywords.is_empty(), "{text:?}");
        assert!(result.matched_categories.is_empty(), "{text:?}");
        assert!(result.matched_cases.is_empty(), "{text:?}");
        assert!(!result.is_suspicious());
    }
}

// ── Ordering ──────────────────────────────────────────────────────────────

#[test]
fn keywords_follow_catalog_order_not_input_order() {
    let engine = DetectionEngine::new();
    let result = engine.detect("小額借款、快速致富、刮刮樂");
    assert_eq!(result.matched_keywords, vec!["快速致富", "刮刮樂", "小額借款"]);
}

#[test]
fn two_categories_regardless_of_phrase_order() {
    let engine = DetectionEngine::new();
    let expected = BTreeSet::from([Category::Impersonation, Category::Loan]);

    let a = engine.detect("健保署通知：可辦理私人放款");
    let b = engine.detect("可辦理私人放款。健保署通知");
    assert_eq!(a.matched_categories, expected);
    assert_eq!(b.matched_categories, expected);
    assert_eq!(a, b);
}

#[test]
fn cases_keep_repository_order() {
    let engine = DetectionEngine::new();
    let result = engine.detect("快速放款，另有海外彩券與秒殺優惠");
    let categories: Vec<Category> = result.matched_cases.iter().map(|c| c.category).collect();
    assert_eq!(
        categories,
        vec![Category::OnlineShopping, Category::Lottery, Category::Loan]
    );
}

// ── Normalization ─────────────────────────────────────────────────────────

#[test]
fn ascii_letters_match_case_insensitively() {
    let engine = DetectionEngine::new();
    for text in ["保證年化報酬XX%", "保證年化報酬xx%", "保證年化報酬Xx%"] {
        let result = engine.detect(text);
        assert_eq!(result.matched_keywords, vec!["保證年化報酬XX%"], "{text}");
    }
}

#[test]
fn full_width_letters_are_not_folded() {
    let engine = DetectionEngine::new();
    assert!(engine.detect("保證年化報酬ＸＸ%").matched_keywords.is_empty());
}

#[test]
fn exact_mode_disables_ascii_folding() {
    let config = DetectionConfig {
        ascii_case_fold: false,
        ..Default::default()
    };
    let engine = DetectionEngine::with_config(&config).unwrap();
    assert!(engine.detect("保證年化報酬xx%").matched_keywords.is_empty());
    assert_eq!(
        engine.detect("保證年化報酬XX%").matched_keywords,
        vec!["保證年化報酬XX%"]
    );
}

// ── Configuration ─────────────────────────────────────────────────────────

#[test]
fn disabled_categories_are_not_scanned() {
    let config = DetectionConfig {
        enabled_categories: vec!["lottery".into()],
        ..Default::default()
    };
    let engine = DetectionEngine::with_config(&config).unwrap();
    let result = engine.detect("保證獲利！中大獎！");
    assert_eq!(result.matched_keywords, vec!["中大獎"]);
    assert_eq!(result.matched_categories, BTreeSet::from([Category::Lottery]));
}

#[test]
fn unknown_enabled_category_is_rejected() {
    let config = DetectionConfig {
        enabled_categories: vec!["romance".into()],
        ..Default::default()
    };
    let err = DetectionEngine::with_config(&config).unwrap_err();
    assert!(matches!(err, FraudScanError::InvalidCategory { name } if name == "romance"));
}

// ── Byte input ────────────────────────────────────────────────────────────

#[test]
fn detect_bytes_accepts_utf8() {
    let engine = DetectionEngine::new();
    let result = engine.detect_bytes("緊急通知".as_bytes()).unwrap();
    assert_eq!(result.matched_keywords, vec!["緊急通知"]);
}

#[test]
fn detect_bytes_rejects_invalid_utf8() {
    let engine = DetectionEngine::new();
    let mut bytes = "中大獎".as_bytes().to_vec();
    bytes.push(0xFF);
    match engine.detect_bytes(&bytes) {
        Err(FraudScanError::MalformedInput { reason }) => assert!(reason.contains("byte 9")),
        other => panic!("expected MalformedInput, got {other:?}"),
    }
}

// ── Trait seams ───────────────────────────────────────────────────────────

#[test]
fn engine_is_usable_as_trait_object() {
    let detector: Box<dyn IDetector> = Box::new(DetectionEngine::new());
    let result = detector.detect("馬上登入").unwrap();
    assert!(result.has_category(Category::Impersonation));
}

#[test]
fn custom_matcher_sees_keyword_only_links() {
    // A loan case tagged with an investment phrase links through the keyword alone.
    let repository = CaseRepository::from_cases(vec![
        FraudCase::new(Category::Loan, "cross-linked", "https://example.invalid/1", &["高回報"]),
        FraudCase::new(Category::Lottery, "unrelated", "https://example.invalid/2", &["刮刮樂"]),
    ]);
    let engine = DetectionEngine::new().with_matcher(CaseMatcher::new(repository));
    let result = engine.detect("高回報");

    assert_eq!(result.matched_categories, BTreeSet::from([Category::Investment]));
    assert_eq!(result.matched_cases.len(), 1);
    assert_eq!(result.matched_cases[0].description, "cross-linked");
}

#[test]
fn matcher_output_is_subset_of_repository() {
    let matcher = CaseMatcher::default();
    let all: BTreeSet<Category> = Category::ALL.into_iter().collect();
    let cases = matcher.match_cases(&all, &[]);
    assert_eq!(cases.as_slice(), matcher.repository().all());
}

#[test]
fn every_catalog_phrase_detects_itself() {
    let engine = DetectionEngine::new();
    let catalog = KeywordCatalog::new();
    for (category, keyword) in catalog.iter() {
        let result = engine.detect(keyword);
        assert!(result.matched_keywords.iter().any(|k| k == keyword), "{keyword}");
        assert!(result.has_category(category), "{keyword} → {category}");
    }
}
