//! Transaction and category record types shared across the workspace.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Bucket label for expenses with no category attached.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Icon used when a transaction's category carries none.
pub const DEFAULT_ICON: &str = "📌";

/// Direction of money movement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Income,
    Expense,
}

/// Reference data shared by all users; seeded once, rarely mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: String,
    /// Unique display name, also the grouping key for breakdowns.
    pub name: String,
    /// Single emoji shown next to the name.
    pub icon: String,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: icon.into(),
        }
    }
}

/// A single recorded income or expense.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: String,
    /// Non-negative; direction comes from `kind`, not sign.
    pub amount: f64,
    pub kind: TxKind,
    pub description: String,
    pub category: Option<Category>,
    pub tags: Option<String>,
    pub created_at: DateTime<Utc>,
    /// True when the entry came from a one-tap widget rather than typed input.
    pub is_widget: bool,
}

impl Transaction {
    pub fn new(
        id: impl Into<String>,
        amount: f64,
        kind: TxKind,
        description: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            amount,
            kind,
            description: description.into(),
            category: None,
            tags: None,
            created_at,
            is_widget: false,
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn from_widget(mut self) -> Self {
        self.is_widget = true;
        self
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TxKind::Expense
    }

    pub fn is_income(&self) -> bool {
        self.kind == TxKind::Income
    }

    /// Category name for grouping, falling back to the sentinel bucket.
    pub fn category_name(&self) -> &str {
        self.category
            .as_ref()
            .map(|c| c.name.as_str())
            .unwrap_or(UNCATEGORIZED)
    }

    /// Category icon, falling back to the default pin.
    pub fn category_icon(&self) -> &str {
        self.category
            .as_ref()
            .map(|c| c.icon.as_str())
            .unwrap_or(DEFAULT_ICON)
    }
}

/// The seed category set every ledger starts with.
pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new("cat-food", "Food", "🍲"),
        Category::new("cat-transport", "Transport", "🚗"),
        Category::new("cat-shopping", "Shopping", "🛍️"),
        Category::new("cat-entertainment", "Entertainment", "🎬"),
        Category::new("cat-bills", "Bills", "📱"),
        Category::new("cat-health", "Health", "💊"),
        Category::new("cat-income", "Income", "💰"),
        Category::new("cat-other", "Other", "📌"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_transaction_builder() {
        let at = Utc.with_ymd_and_hms(2026, 8, 12, 9, 30, 0).unwrap();
        let tx = Transaction::new("tx-1", 60.0, TxKind::Expense, "Coffee", at)
            .with_category(Category::new("cat-food", "Food", "🍲"))
            .from_widget();
        assert!(tx.is_expense());
        assert!(tx.is_widget);
        assert_eq!(tx.category_name(), "Food");
        assert_eq!(tx.category_icon(), "🍲");
    }

    #[test]
    fn test_uncategorized_fallbacks() {
        let at = Utc.with_ymd_and_hms(2026, 8, 12, 9, 30, 0).unwrap();
        let tx = Transaction::new("tx-2", 100.0, TxKind::Expense, "Mystery", at);
        assert_eq!(tx.category_name(), UNCATEGORIZED);
        assert_eq!(tx.category_icon(), DEFAULT_ICON);
    }

    #[test]
    fn test_kind_serde_tags() {
        let json = serde_json::to_string(&TxKind::Expense).unwrap();
        assert_eq!(json, "\"expense\"");
        let kind: TxKind = serde_json::from_str("\"income\"").unwrap();
        assert_eq!(kind, TxKind::Income);
    }

    #[test]
    fn test_default_categories_unique_names() {
        let cats = default_categories();
        assert_eq!(cats.len(), 8);
        let mut names: Vec<_> = cats.iter().map(|c| c.name.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 8);
    }
}
