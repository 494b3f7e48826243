//! Delete command handler.

use crate::args::DeleteArgs;
use crate::commands::Out;
use crate::model::Transaction;
use crate::store::TransactionStore;
use crate::{Config, Result};
use anyhow::ensure;

/// Deletes the transaction at the 1-based row number shown by `list`.
///
/// # Errors
/// - Returns an error if there is no such row. Nothing is written in that case.
/// - Returns an error if loading or saving the data file fails.
pub async fn delete(config: Config, args: DeleteArgs) -> Result<Out<Transaction>> {
    let mut store = TransactionStore::load(&config).await?;
    let row = args.row();
    ensure!(
        (1..=store.len()).contains(&row),
        "Row {row} does not exist, there {} {} transaction{}",
        if store.len() == 1 { "is" } else { "are" },
        store.len(),
        if store.len() == 1 { "" } else { "s" }
    );

    let removed = store.remove_at(row - 1).await?;
    let message = format!(
        "Deleted transaction {row} dated {}, {} remaining",
        removed.date(),
        store.len()
    );
    Ok(Out::new(message, removed))
}
