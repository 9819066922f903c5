//! The five fraud-pattern categories the catalog is keyed by.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::FraudScanError;

/// A fraud-pattern class. Closed set: there are no dynamic categories.
///
/// Variant order is the catalog declaration order, and `Ord` follows it, so a
/// `BTreeSet<Category>` iterates the same way the catalog is scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    /// Guaranteed-return schemes, insider tips, crypto and forex "opportunities".
    Investment,
    /// Fake storefronts, too-good prices, transfer-only payment.
    OnlineShopping,
    /// Callers posing as officials, banks or agencies.
    Impersonation,
    /// Fake prize notices that demand a fee up front.
    Lottery,
    /// Unsecured or no-check loan offers.
    Loan,
}

impl Category {
    /// Total number of categories.
    pub const COUNT: usize = 5;

    /// All variants in catalog declaration order.
    pub const ALL: [Category; Self::COUNT] = [
        Self::Investment,
        Self::OnlineShopping,
        Self::Impersonation,
        Self::Lottery,
        Self::Loan,
    ];

    /// Parse from the wire name (matching the serde rename). Case-sensitive.
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s {
            "investment" => Some(Self::Investment),
            "onlineShopping" => Some(Self::OnlineShopping),
            "impersonation" => Some(Self::Impersonation),
            "lottery" => Some(Self::Lottery),
            "loan" => Some(Self::Loan),
            _ => None,
        }
    }

    /// Wire name for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Investment => "investment",
            Self::OnlineShopping => "onlineShopping",
            Self::Impersonation => "impersonation",
            Self::Lottery => "lottery",
            Self::Loan => "loan",
        }
    }

    /// Human-facing label shown next to results.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Investment => "投資詐騙",
            Self::OnlineShopping => "網路購物詐騙",
            Self::Impersonation => "假冒身分詐騙",
            Self::Lottery => "中獎詐騙",
            Self::Loan => "貸款詐騙",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = FraudScanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_name(s).ok_or_else(|| FraudScanError::InvalidCategory {
            name: s.to_string(),
        })
    }
}
