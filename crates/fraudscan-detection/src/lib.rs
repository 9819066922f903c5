//! # fraudscan-detection
//!
//! Keyword-signal detection for fraud-pattern messages.
//! A static per-category phrase catalog, an order-preserving substring scan,
//! and a matcher that links detected signals to reference cases.

pub mod cases;
pub mod catalog;
pub mod engine;
pub mod matcher;
pub mod normalize;
pub mod report;

pub use cases::CaseRepository;
pub use catalog::{Keyword, KeywordCatalog};
pub use engine::DetectionEngine;
pub use matcher::CaseMatcher;
pub use report::DetectionReport;
