//! Interactive UI command handler.

use crate::commands::Out;
use crate::store::TransactionStore;
use crate::{ui, Config, Result};

/// Runs the full-screen terminal UI until the user quits.
///
/// Every change made in the UI has already been saved when this returns. If a save fails the
/// UI closes and the error is returned.
pub async fn ui(config: Config) -> Result<Out<usize>> {
    let store = TransactionStore::load(&config).await?;
    let app = ui::run(ui::App::new(store)).await?;
    let count = app.store().len();
    let message = format!(
        "{} transaction{} in {}",
        count,
        if count == 1 { "" } else { "s" },
        config.data_path().display()
    );
    Ok(Out::new(message, count))
}
