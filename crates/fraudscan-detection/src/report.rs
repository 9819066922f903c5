//! Human-readable rendering of a detection result.

use std::fmt;

use fraudscan_core::DetectionResult;

pub const WARNING_HEADLINE: &str = "警告：檢測到可疑關鍵詞";
pub const SIMILAR_CASES_HEADING: &str = "相似案例：";
pub const ALL_CLEAR: &str = "未檢測到明顯的詐騙關鍵詞，但仍請保持警惕。";
pub const KEYWORD_SEPARATOR: &str = "、";

/// Text report for one detection, ready to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetectionReport {
    /// At least one keyword matched.
    Warning {
        keywords: String,
        /// `description (link)` per related case, in repository order.
        cases: Vec<String>,
    },
    /// Nothing matched.
    AllClear,
}

impl DetectionReport {
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::Warning { .. })
    }
}

impl From<&DetectionResult> for DetectionReport {
    fn from(result: &DetectionResult) -> Self {
        if !result.is_suspicious() {
            return Self::AllClear;
        }
        Self::Warning {
            keywords: result.matched_keywords.join(KEYWORD_SEPARATOR),
            cases: result
                .matched_cases
                .iter()
                .map(|c| format!("{} ({})", c.description, c.reference_link))
                .collect(),
        }
    }
}

impl fmt::Display for DetectionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllClear => f.write_str(ALL_CLEAR),
            Self::Warning { keywords, cases } => {
                writeln!(f, "{WARNING_HEADLINE}")?;
                write!(f, "{keywords}")?;
                if !cases.is_empty() {
                    write!(f, "\n\n{SIMILAR_CASES_HEADING}")?;
                    for case in cases {
                        write!(f, "\n- {case}")?;
                    }
                }
                Ok(())
            }
        }
    }
}
