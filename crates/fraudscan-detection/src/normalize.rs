//! Text normalization applied identically to input and catalog phrases.
//!
//! Only ASCII letters are folded. CJK text passes through unchanged, and no
//! Unicode case folding or full-width/half-width folding is performed, so
//! matching on the catalog's CJK phrases is exact-substring.

use std::borrow::Cow;

/// Fold ASCII uppercase letters to lowercase when `ascii_case_fold` is set.
/// Borrows when nothing would change.
pub fn normalize(text: &str, ascii_case_fold: bool) -> Cow<'_, str> {
    if ascii_case_fold && text.bytes().any(|b| b.is_ascii_uppercase()) {
        Cow::Owned(text.to_ascii_lowercase())
    } else {
        Cow::Borrowed(text)
    }
}
