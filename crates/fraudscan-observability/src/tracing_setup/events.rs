//! Structured log events for key operations.
//!
//! Each function emits a `tracing` event with structured fields. Message text
//! is never logged, only sizes and counts.

/// Log a completed scan as seen by an outer surface.
pub fn scan_reported(input_bytes: usize, keywords: usize, categories: usize, cases: usize) {
    tracing::info!(
        event = "scan_reported",
        input_bytes = input_bytes,
        keywords = keywords,
        categories = categories,
        cases = cases,
        "scan reported"
    );
}

/// Log configuration resolution.
pub fn config_loaded(source: &str, ascii_case_fold: bool, enabled_categories: usize) {
    tracing::debug!(
        event = "config_loaded",
        source = %source,
        ascii_case_fold = ascii_case_fold,
        enabled_categories = enabled_categories,
        "configuration loaded"
    );
}

/// Log a category name rejected at a boundary.
pub fn category_rejected(name: &str) {
    tracing::warn!(
        event = "category_rejected",
        name = %name,
        "unknown category rejected"
    );
}

/// Log input that could not be decoded.
pub fn input_rejected(reason: &str) {
    tracing::warn!(
        event = "input_rejected",
        reason = %reason,
        "malformed input rejected"
    );
}
