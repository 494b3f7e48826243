//! List command handler.

use crate::commands::Out;
use crate::model::Transaction;
use crate::store::TransactionStore;
use crate::ui::HEADERS;
use crate::{Config, Result};

/// Loads every transaction and renders them as a plain text table, one row per transaction in
/// stored order. Row numbers start at 1 and are the numbers `delete` accepts.
pub async fn list(config: Config) -> Result<Out<Vec<Transaction>>> {
    let store = TransactionStore::load(&config).await?;
    let transactions: Vec<Transaction> = store.transactions().cloned().collect();
    if transactions.is_empty() {
        return Ok(Out::new("No transactions", transactions));
    }
    let table = render_table(&transactions);
    Ok(Out::new(table, transactions))
}

fn render_table(transactions: &[Transaction]) -> String {
    let rows: Vec<Vec<String>> = transactions
        .iter()
        .enumerate()
        .map(|(i, t)| {
            let mut row = vec![(i + 1).to_string()];
            row.extend(t.cells());
            row
        })
        .collect();

    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header: Vec<String> = HEADERS.iter().map(|h| h.to_string()).collect();
    std::iter::once(&header)
        .chain(rows.iter())
        .map(|row| {
            row.iter()
                .zip(&widths)
                .map(|(cell, &width)| format!("{cell:<width$}"))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
