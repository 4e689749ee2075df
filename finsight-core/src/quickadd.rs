//! Deterministic free-text entry parser.
//!
//! Fallback path for quick-add when the remote parser is unavailable or
//! rejects the input: pull the first number out as the amount, classify the
//! rest by keyword. Keyword tables mirror the seed category set.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::transaction::TxKind;

static AMOUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:[.,]\d+)?").expect("amount pattern compiles"));

/// A parsed quick-add line, ready to become a transaction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuickEntry {
    pub description: String,
    pub amount: f64,
    pub kind: TxKind,
    /// Category name from the seed set.
    pub category: String,
}

const INCOME_WORDS: &[&str] = &[
    "salary", "paycheck", "payday", "bonus", "refund", "income", "paid me", "sold",
];

const CATEGORY_WORDS: &[(&str, &[&str])] = &[
    (
        "Food",
        &[
            "coffee", "lunch", "dinner", "breakfast", "snack", "noodle", "rice", "tea",
            "restaurant", "food", "drink", "juice", "pastry",
        ],
    ),
    (
        "Transport",
        &[
            "taxi", "metro", "bts", "mrt", "bus", "train", "grab", "uber", "fuel", "gas",
            "parking", "fare",
        ],
    ),
    (
        "Shopping",
        &["shopping", "clothes", "shoes", "groceries", "market", "amazon", "order"],
    ),
    (
        "Entertainment",
        &["movie", "netflix", "concert", "game", "beer", "bar", "karaoke", "spotify"],
    ),
    (
        "Bills",
        &["bill", "electric", "water", "internet", "phone", "rent", "insurance"],
    ),
    (
        "Health",
        &["doctor", "hospital", "pharmacy", "medicine", "dentist", "gym", "clinic"],
    ),
];

/// Parse a line like "coffee 60" or "salary 30000".
///
/// Returns `None` when no amount can be found; the caller decides whether to
/// reject the input or ask again.
pub fn parse_quick_add(text: &str) -> Option<QuickEntry> {
    let m = AMOUNT_RE.find(text)?;
    let amount: f64 = m.as_str().replace(',', ".").parse().ok()?;

    let lowered = text.to_lowercase();
    let kind = if INCOME_WORDS.iter().any(|w| lowered.contains(w)) {
        TxKind::Income
    } else {
        TxKind::Expense
    };

    let category = match kind {
        TxKind::Income => "Income".to_string(),
        TxKind::Expense => CATEGORY_WORDS
            .iter()
            .find(|(_, words)| words.iter().any(|w| lowered.contains(w)))
            .map(|(name, _)| name.to_string())
            .unwrap_or_else(|| "Other".to_string()),
    };

    // Strip the amount token; whatever remains is the description.
    let mut description = String::with_capacity(text.len());
    description.push_str(&text[..m.start()]);
    description.push_str(&text[m.end()..]);
    let description = description.split_whitespace().collect::<Vec<_>>().join(" ");
    let description = if description.is_empty() {
        text.trim().to_string()
    } else {
        description
    };

    Some(QuickEntry {
        description,
        amount,
        kind,
        category,
    })
}
