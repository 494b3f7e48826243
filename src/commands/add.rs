//! Add command handler.

use crate::args::AddArgs;
use crate::commands::Out;
use crate::model::Transaction;
use crate::store::TransactionStore;
use crate::ui::{EntryForm, Field, Submission};
use crate::{Config, Result};
use anyhow::Context;

/// Adds one transaction using the same checks as the entry form.
///
/// # Errors
/// - Returns a `FormError` if the date is not day-month-year or the amount is not a number. Nothing
///   is written in that case.
/// - Returns an error if loading or saving the data file fails.
pub async fn add(config: Config, args: AddArgs) -> Result<Out<Transaction>> {
    let mut store = TransactionStore::load(&config).await?;

    let mut form = EntryForm::new();
    form.set(Field::Date, args.date);
    form.set(Field::Type, args.r#type);
    form.set(Field::Category, args.category);
    form.set(Field::Amount, args.amount);
    form.set(Field::Description, args.description.unwrap_or_default());

    let id = match form.submit(&mut store).await? {
        Submission::Appended(id) => id,
        Submission::Rejected(e) => return Err(e.into()),
    };
    let position = store
        .position_of(id)
        .context("The added transaction is missing from the store")?;
    let transaction = store
        .get(position)
        .cloned()
        .context("The added transaction is missing from the store")?;

    let message = format!(
        "Added transaction {} dated {}",
        position + 1,
        transaction.date()
    );
    Ok(Out::new(message, transaction))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::TestEnv;
    use crate::ui::FormError;

    fn args(date: &str, amount: &str) -> AddArgs {
        AddArgs::new(date, "Income", "Salary", amount, Some("January pay"))
    }

    #[tokio::test]
    async fn test_add_success() {
        let env = TestEnv::new().await;
        let out = add(env.config(), args("01-01-2024", "1500")).await.unwrap();

        assert_eq!(out.message(), "Added transaction 1 dated 01-01-2024");
        let added = out.structure().unwrap();
        assert_eq!(added.amount().value(), 1500.0);

        let store = env.store().await;
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(0), Some(added));
    }

    #[tokio::test]
    async fn test_add_appends_at_end() {
        let env = TestEnv::new().await;
        env.insert_three_transactions().await;
        let out = add(env.config(), args("01-03-2024", "-3")).await.unwrap();
        assert!(out.message().starts_with("Added transaction 4"));
        assert_eq!(env.store().await.get(3), out.structure());
    }

    #[tokio::test]
    async fn test_add_invalid_date() {
        let env = TestEnv::new().await;
        let err = add(env.config(), args("2024-01-01", "1500"))
            .await
            .unwrap_err();
        assert_eq!(err.downcast_ref::<FormError>(), Some(&FormError::InvalidDate));
        assert_eq!(err.to_string(), "Invalid Datetime format");
        assert!(!env.config().data_path().exists());
    }

    #[tokio::test]
    async fn test_add_invalid_amount() {
        let env = TestEnv::new().await;
        env.insert_three_transactions().await;
        let err = add(env.config(), args("01-01-2024", "abc"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Amount must be numerical");
        assert_eq!(env.store().await.len(), 3);
    }
}
