//! Monthly summary assembly: aggregator output combined with budgets.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::aggregate::{aggregate, CategorySlice};
use crate::transaction::Transaction;

/// A spending cap for one month. `category_id: None` is the overall budget.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Budget {
    pub category_id: Option<String>,
    /// 1-12
    pub month: u32,
    pub year: i32,
    pub amount: f64,
}

/// The derived month summary handed to presentation. Not persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_expense: f64,
    pub total_income: f64,
    pub balance: f64,
    pub total_budget: f64,
    /// Percent of budget consumed; 0 when no budget, may exceed 100.
    pub budget_usage: f64,
    pub transaction_count: usize,
    pub category_breakdown: BTreeMap<String, CategorySlice>,
}

/// Build the month summary from transactions and budgets scoped to the same
/// calendar month. The scoping itself is the caller's responsibility.
///
/// Overall and per-category budgets are summed together without
/// deduplication; setting both inflates `total_budget`. Kept as-is.
pub fn build_summary(transactions: &[Transaction], budgets: &[Budget]) -> Summary {
    let totals = aggregate(transactions);
    let total_budget: f64 = budgets.iter().map(|b| b.amount).sum();

    let budget_usage = if total_budget > 0.0 {
        100.0 * totals.total_expense / total_budget
    } else {
        0.0
    };

    Summary {
        balance: totals.total_income - totals.total_expense,
        total_expense: totals.total_expense,
        total_income: totals.total_income,
        total_budget,
        budget_usage,
        transaction_count: transactions.len(),
        category_breakdown: totals.category_breakdown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::{Category, TxKind};
    use chrono::{TimeZone, Utc};

    fn tx(amount: f64, kind: TxKind) -> Transaction {
        let at = Utc.with_ymd_and_hms(2026, 8, 15, 10, 0, 0).unwrap();
        Transaction::new("tx", amount, kind, "test", at)
            .with_category(Category::new("cat-food", "Food", "🍲"))
    }

    fn budget(category_id: Option<&str>, amount: f64) -> Budget {
        Budget {
            category_id: category_id.map(str::to_string),
            month: 8,
            year: 2026,
            amount,
        }
    }

    #[test]
    fn test_empty_month_is_zeroed() {
        let summary = build_summary(&[], &[]);
        assert_eq!(summary.total_expense, 0.0);
        assert_eq!(summary.total_income, 0.0);
        assert_eq!(summary.balance, 0.0);
        assert_eq!(summary.budget_usage, 0.0);
        assert_eq!(summary.transaction_count, 0);
        assert!(summary.category_breakdown.is_empty());
    }

    #[test]
    fn test_balance_identity_including_negative() {
        let txns = vec![tx(100.0, TxKind::Income), tx(350.0, TxKind::Expense)];
        let summary = build_summary(&txns, &[]);
        assert_eq!(summary.balance, summary.total_income - summary.total_expense);
        assert_eq!(summary.balance, -250.0);
    }

    #[test]
    fn test_budget_usage_can_exceed_hundred() {
        let txns = vec![tx(1500.0, TxKind::Expense)];
        let summary = build_summary(&txns, &[budget(None, 1000.0)]);
        assert_eq!(summary.budget_usage, 150.0);
    }

    #[test]
    fn test_zero_budget_means_zero_usage() {
        let txns = vec![tx(1500.0, TxKind::Expense)];
        let summary = build_summary(&txns, &[]);
        assert_eq!(summary.total_budget, 0.0);
        assert_eq!(summary.budget_usage, 0.0);
    }

    // Documented quirk, not a contract: overall and category budgets add.
    #[test]
    fn test_overall_and_category_budgets_blindly_sum() {
        let txns = vec![tx(500.0, TxKind::Expense)];
        let budgets = vec![budget(None, 1000.0), budget(Some("cat-food"), 1000.0)];
        let summary = build_summary(&txns, &budgets);
        assert_eq!(summary.total_budget, 2000.0);
        assert_eq!(summary.budget_usage, 25.0);
    }

    #[test]
    fn test_count_includes_income_and_zero_amounts() {
        let txns = vec![
            tx(0.0, TxKind::Expense),
            tx(100.0, TxKind::Income),
            tx(40.0, TxKind::Expense),
        ];
        let summary = build_summary(&txns, &[]);
        assert_eq!(summary.transaction_count, 3);
        assert_eq!(summary.total_expense, 40.0);
    }

    #[test]
    fn test_serializes_camel_case() {
        let summary = build_summary(&[tx(60.0, TxKind::Expense)], &[budget(None, 120.0)]);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["totalExpense"], 60.0);
        assert_eq!(json["budgetUsage"], 50.0);
        assert_eq!(json["transactionCount"], 1);
        assert_eq!(json["categoryBreakdown"]["Food"]["amount"], 60.0);
        assert_eq!(json["categoryBreakdown"]["Food"]["icon"], "🍲");
    }
}
