//! CSV export of transaction history.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use finsight_core::{Transaction, TxKind};

/// Write transactions as CSV rows to any writer.
pub fn write_csv<W: Write>(writer: W, transactions: &[Transaction]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["id", "date", "type", "amount", "category", "description"])
        .context("write csv header")?;

    for tx in transactions {
        let kind = match tx.kind {
            TxKind::Income => "income",
            TxKind::Expense => "expense",
        };
        let date = tx.created_at.format("%Y-%m-%d %H:%M").to_string();
        let amount = format!("{:.2}", tx.amount);
        wtr.write_record([
            tx.id.as_str(),
            date.as_str(),
            kind,
            amount.as_str(),
            tx.category_name(),
            tx.description.as_str(),
        ])
        .with_context(|| format!("write csv row for {}", tx.id))?;
    }

    wtr.flush().context("flush csv")?;
    Ok(())
}

pub fn export_csv(path: &Path, transactions: &[Transaction]) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("create {}", path.display()))?;
    write_csv(file, transactions)
}
