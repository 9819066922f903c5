//! Reference fraud cases surfaced alongside detections.

use std::borrow::Cow;
use std::sync::LazyLock;

use fraudscan_core::{Category, FraudCase};

static BUILTIN_CASES: LazyLock<Vec<FraudCase>> = LazyLock::new(|| {
    vec![
        FraudCase::new(
            Category::Investment,
            "宣稱高報酬率的投資計劃",
            "https://www.npa.gov.tw/ch/app/news/view?module=news&id=2834",
            &["高回報", "保證獲利"],
        ),
        FraudCase::new(
            Category::OnlineShopping,
            "假冒知名購物網站騙取個資",
            "https://www.npa.gov.tw/ch/app/news/view?module=news&id=2831",
            &["限時特價", "假冒官網"],
        ),
        FraudCase::new(
            Category::Impersonation,
            "假冒檢察官詐騙案件",
            "https://www.npa.gov.tw/ch/app/news/view?module=news&id=2828",
            &["冒充公務員", "緊急通知"],
        ),
        FraudCase::new(
            Category::Lottery,
            "假中獎詐騙案件",
            "https://www.npa.gov.tw/ch/app/news/view?module=news&id=2825",
            &["中大獎", "領獎手續費"],
        ),
        FraudCase::new(
            Category::Loan,
            "假冒銀行行員詐騙案件",
            "https://www.npa.gov.tw/ch/app/news/view?module=news&id=2822",
            &["無擔保貸款", "快速放款"],
        ),
    ]
});

/// Ordered, read-only list of reference cases.
///
/// Declaration order is significant: every query result preserves it.
#[derive(Debug, Clone)]
pub struct CaseRepository {
    cases: Cow<'static, [FraudCase]>,
}

impl CaseRepository {
    /// The built-in case list, shared process-wide.
    pub fn builtin() -> Self {
        Self {
            cases: Cow::Borrowed(BUILTIN_CASES.as_slice()),
        }
    }

    /// A repository over caller-supplied cases, kept in the given order.
    pub fn from_cases(cases: Vec<FraudCase>) -> Self {
        Self {
            cases: Cow::Owned(cases),
        }
    }

    pub fn all(&self) -> &[FraudCase] {
        &self.cases
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FraudCase> {
        self.cases.iter()
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &FraudCase> {
        self.cases.iter().filter(move |c| c.category == category)
    }
}

impl Default for CaseRepository {
    fn default() -> Self {
        Self::builtin()
    }
}
