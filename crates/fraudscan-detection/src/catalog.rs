//! Static trigger-phrase catalog, one ordered list per category.

use fraudscan_core::Category;

/// A catalog trigger phrase.
pub type Keyword = &'static str;

// ── Investment ────────────────────────────────────────────────────────────
const INVESTMENT: &[Keyword] = &[
    "高回報",
    "保證獲利",
    "穩賺不賠",
    "投資機會",
    "股票內線",
    "快速致富",
    "保證年化報酬XX%",
    "無風險投資",
    "私募基金",
    "期貨交易",
    "虛擬貨幣投資",
    "短期暴利",
    "一夜致富",
    "7天翻倍",
    "黃金交易",
    "外匯投資",
    "碳權交易",
];

// ── Online shopping ───────────────────────────────────────────────────────
const ONLINE_SHOPPING: &[Keyword] = &[
    "限時特價",
    "秒殺優惠",
    "錯誤標價",
    "假冒官網",
    "盜版商品",
    "只接受銀行轉帳",
    "僅限郵局匯款",
    "不接受貨到付款",
    "全新未拆封",
    "原廠平行輸入",
    "海外代購",
    "今日最後一天",
    "數量極少",
    "限時搶購",
];

// ── Impersonation ─────────────────────────────────────────────────────────
const IMPERSONATION: &[Keyword] = &[
    "冒充公務員",
    "假冒銀行",
    "緊急通知",
    "系統升級",
    "身分驗證",
    "稅務局人員",
    "社福機構",
    "健保署",
    "警察局",
    "檢察官",
    "帳戶異常",
    "個資外洩",
    "違法行為",
    "欠稅通知",
    "立即處理",
    "馬上登入",
    "盡快回覆",
];

// ── Lottery ───────────────────────────────────────────────────────────────
const LOTTERY: &[Keyword] = &[
    "中大獎",
    "海外彩券",
    "中獎通知",
    "領獎手續費",
    "預先付款",
    "樂透頭獎",
    "刮刮樂",
    "發票對獎",
    "價值百萬",
    "億元大獎",
    "豐厚獎金",
    "保密協議",
    "公證手續",
    "稅務處理",
];

// ── Loan ──────────────────────────────────────────────────────────────────
const LOAN: &[Keyword] = &[
    "無擔保貸款",
    "快速放款",
    "協商債務",
    "代辦貸款",
    "信用卡代償",
    "免信用查核",
    "無需財力證明",
    "信用不良可辦",
    "企業周轉",
    "資金週轉",
    "緊急現金",
    "私人放款",
    "民間借貸",
    "小額借款",
];

/// Immutable category → phrases table.
///
/// Lookups are total over [`Category`]; there is no add or remove path.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordCatalog;

impl KeywordCatalog {
    pub const fn new() -> Self {
        Self
    }

    /// Phrases for `category`, in declared order.
    pub fn keywords_for(&self, category: Category) -> &'static [Keyword] {
        match category {
            Category::Investment => INVESTMENT,
            Category::OnlineShopping => ONLINE_SHOPPING,
            Category::Impersonation => IMPERSONATION,
            Category::Lottery => LOTTERY,
            Category::Loan => LOAN,
        }
    }

    /// Every `(category, phrase)` entry, category-major in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, Keyword)> + '_ {
        Category::ALL.into_iter().flat_map(move |category| {
            self.keywords_for(category)
                .iter()
                .map(move |&keyword| (category, keyword))
        })
    }

    /// Total number of entries across all categories.
    pub fn len(&self) -> usize {
        Category::ALL
            .iter()
            .map(|&c| self.keywords_for(c).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every category listing `keyword` verbatim. Usually zero or one.
    pub fn categories_of(&self, keyword: &str) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|&c| self.keywords_for(c).iter().any(|&k| k == keyword))
            .collect()
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.iter().any(|(_, k)| k == keyword)
    }
}
