//! Reduce a window of transactions into totals and an expense breakdown.
//!
//! Pure over its input; callers are responsible for scoping the slice to a
//! single calendar month (see `period`).

use std::collections::BTreeMap;

use serde::Serialize;

use crate::transaction::Transaction;

/// One expense category's share of the window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySlice {
    pub amount: f64,
    pub icon: String,
}

/// Output of [`aggregate`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Totals {
    pub total_expense: f64,
    pub total_income: f64,
    /// Expense-only, keyed by category name. Icon recorded from the first
    /// transaction seen per group (icons are invariant per category).
    pub category_breakdown: BTreeMap<String, CategorySlice>,
}

/// Sum amounts by kind and group expenses by category name.
///
/// Empty input yields zero totals and an empty breakdown.
pub fn aggregate(transactions: &[Transaction]) -> Totals {
    let mut totals = Totals::default();

    for tx in transactions {
        if tx.is_income() {
            totals.total_income += tx.amount;
            continue;
        }

        totals.total_expense += tx.amount;
        totals
            .category_breakdown
            .entry(tx.category_name().to_string())
            .or_insert_with(|| CategorySlice {
                amount: 0.0,
                icon: tx.category_icon().to_string(),
            })
            .amount += tx.amount;
    }

    totals
}
