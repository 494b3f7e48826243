//! The entry form: five text fields and the submit algorithm that turns them into a stored
//! transaction.

use crate::model::{parse_date, Amount, Transaction};
use crate::store::{RecordId, TransactionStore};
use crate::Result;
use std::fmt::{Display, Formatter};
use tracing::debug;

/// The fields of the entry form, in display order.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Field {
    #[default]
    Date,
    Type,
    Category,
    Amount,
    Description,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Date,
        Field::Type,
        Field::Category,
        Field::Amount,
        Field::Description,
    ];

    /// The label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Field::Date => "Date:",
            Field::Type => "Type:",
            Field::Category => "Category:",
            Field::Amount => "Amount:",
            Field::Description => "Description:",
        }
    }

    pub fn next(self) -> Field {
        match self {
            Field::Date => Field::Type,
            Field::Type => Field::Category,
            Field::Category => Field::Amount,
            Field::Amount => Field::Description,
            Field::Description => Field::Date,
        }
    }

    pub fn prev(self) -> Field {
        match self {
            Field::Date => Field::Description,
            Field::Type => Field::Date,
            Field::Category => Field::Type,
            Field::Amount => Field::Category,
            Field::Description => Field::Amount,
        }
    }
}

/// A user-correctable problem with the entered values. The `Display` text is what the error
/// dialog shows.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FormError {
    InvalidDate,
    NonNumericAmount,
}

impl FormError {
    /// The field that is cleared when this error is reported.
    pub fn field(self) -> Field {
        match self {
            FormError::InvalidDate => Field::Date,
            FormError::NonNumericAmount => Field::Amount,
        }
    }
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FormError::InvalidDate => f.write_str("Invalid Datetime format"),
            FormError::NonNumericAmount => f.write_str("Amount must be numerical"),
        }
    }
}

impl std::error::Error for FormError {}

/// The result of a submission that did not fail on I/O.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Submission {
    /// The transaction was appended and saved.
    Appended(RecordId),
    /// The values were rejected and nothing was written.
    Rejected(FormError),
}

/// The text currently entered in each field, plus which field has focus.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct EntryForm {
    date: String,
    r#type: String,
    category: String,
    amount: String,
    description: String,
    focus: Field,
}

impl EntryForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Date => &self.date,
            Field::Type => &self.r#type,
            Field::Category => &self.category,
            Field::Amount => &self.amount,
            Field::Description => &self.description,
        }
    }

    fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Date => &mut self.date,
            Field::Type => &mut self.r#type,
            Field::Category => &mut self.category,
            Field::Amount => &mut self.amount,
            Field::Description => &mut self.description,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.value_mut(field) = value.into();
    }

    pub fn clear(&mut self, field: Field) {
        self.value_mut(field).clear();
    }

    pub fn clear_all(&mut self) {
        for field in Field::ALL {
            self.clear(field);
        }
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Appends `c` to the focused field.
    pub fn push(&mut self, c: char) {
        let field = self.focus;
        self.value_mut(field).push(c);
    }

    /// Removes the last character of the focused field.
    pub fn pop(&mut self) {
        let field = self.focus;
        self.value_mut(field).pop();
    }

    /// Checks the entered values and builds a transaction from them.
    ///
    /// The date is checked first; the amount is only checked once the date is accepted.
    pub fn validate(&self) -> std::result::Result<Transaction, FormError> {
        parse_date(&self.date).map_err(|_| FormError::InvalidDate)?;
        let amount: Amount = self
            .amount
            .parse()
            .map_err(|_| FormError::NonNumericAmount)?;
        Ok(Transaction::new(
            self.date.clone(),
            self.r#type.clone(),
            self.category.clone(),
            amount,
            self.description.clone(),
        ))
    }

    /// Submits the form into `store`.
    ///
    /// On a validation failure only the offending field is cleared and the store is untouched.
    /// On success every field is cleared.
    ///
    /// # Errors
    /// Returns an error only if saving the store fails.
    pub async fn submit(&mut self, store: &mut TransactionStore) -> Result<Submission> {
        let transaction = match self.validate() {
            Ok(transaction) => transaction,
            Err(e) => {
                debug!("Rejected submission: {e}");
                self.clear(e.field());
                return Ok(Submission::Rejected(e));
            }
        };
        let id = store.append(transaction).await?;
        self.clear_all();
        Ok(Submission::Appended(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::TestEnv;

    fn filled(date: &str, amount: &str) -> EntryForm {
        let mut form = EntryForm::new();
        form.set(Field::Date, date);
        form.set(Field::Type, "Income");
        form.set(Field::Category, "Salary");
        form.set(Field::Amount, amount);
        form.set(Field::Description, "January pay");
        form
    }

    #[tokio::test]
    async fn test_submit_appends_and_clears_all() {
        let env = TestEnv::new().await;
        let mut store = env.store().await;
        let mut form = filled("01-01-2024", "1500");

        let submission = form.submit(&mut store).await.unwrap();
        let Submission::Appended(id) = submission else {
            panic!("expected the submission to be appended, got {submission:?}");
        };

        assert_eq!(store.len(), 1);
        assert_eq!(store.position_of(id), Some(0));
        let t = store.get(0).unwrap();
        assert_eq!(t.date(), "01-01-2024");
        assert_eq!(t.r#type(), "Income");
        assert_eq!(t.category(), "Salary");
        assert_eq!(t.amount().value(), 1500.0);
        assert_eq!(t.description(), "January pay");
        for field in Field::ALL {
            assert_eq!(form.value(field), "", "{field:?} was not cleared");
        }

        let on_disk = env.store().await;
        assert_eq!(on_disk.get(0), Some(t));
    }

    #[tokio::test]
    async fn test_submit_invalid_date_clears_only_date() {
        let env = TestEnv::new().await;
        let mut store = env.store().await;
        let mut form = filled("31-02-2024", "1500");

        let submission = form.submit(&mut store).await.unwrap();
        assert_eq!(submission, Submission::Rejected(FormError::InvalidDate));
        assert!(store.is_empty());
        assert!(!env.config().data_path().exists());
        assert_eq!(form.value(Field::Date), "");
        assert_eq!(form.value(Field::Type), "Income");
        assert_eq!(form.value(Field::Category), "Salary");
        assert_eq!(form.value(Field::Amount), "1500");
        assert_eq!(form.value(Field::Description), "January pay");
    }

    #[tokio::test]
    async fn test_submit_invalid_amount_clears_only_amount() {
        let env = TestEnv::new().await;
        let mut store = env.store().await;
        let mut form = filled("05-03-2024", "12.5.0");

        let submission = form.submit(&mut store).await.unwrap();
        assert_eq!(submission, Submission::Rejected(FormError::NonNumericAmount));
        assert!(store.is_empty());
        assert_eq!(form.value(Field::Date), "05-03-2024");
        assert_eq!(form.value(Field::Amount), "");
        assert_eq!(form.value(Field::Description), "January pay");
    }

    #[tokio::test]
    async fn test_submit_malformed_date_is_rejected() {
        let env = TestEnv::new().await;
        let mut store = env.store().await;
        for date in ["05-03-24", "05-03-+2024", " 05-03-2024"] {
            let mut form = filled(date, "1500");
            let submission = form.submit(&mut store).await.unwrap();
            assert_eq!(submission, Submission::Rejected(FormError::InvalidDate), "{date}");
            assert_eq!(form.value(Field::Date), "");
            assert_eq!(form.value(Field::Amount), "1500");
        }
        assert!(store.is_empty());
        assert!(!env.config().data_path().exists());
    }

    #[tokio::test]
    async fn test_date_checked_before_amount() {
        let env = TestEnv::new().await;
        let mut store = env.store().await;
        let mut form = filled("2024-03-05", "abc");

        let submission = form.submit(&mut store).await.unwrap();
        assert_eq!(submission, Submission::Rejected(FormError::InvalidDate));
        assert_eq!(form.value(Field::Date), "");
        assert_eq!(form.value(Field::Amount), "abc");
    }

    #[tokio::test]
    async fn test_empty_free_text_fields_are_accepted() {
        let env = TestEnv::new().await;
        let mut store = env.store().await;
        let mut form = EntryForm::new();
        form.set(Field::Date, "05-03-2024");
        form.set(Field::Amount, "0");

        let submission = form.submit(&mut store).await.unwrap();
        assert!(matches!(submission, Submission::Appended(_)));
        let t = store.get(0).unwrap();
        assert_eq!(t.r#type(), "");
        assert_eq!(t.category(), "");
        assert_eq!(t.description(), "");
    }

    #[test]
    fn test_validate_amounts() {
        for ok in ["12.50", "-3", "0"] {
            assert!(filled("05-03-2024", ok).validate().is_ok(), "{ok}");
        }
        for bad in ["abc", "", "12.5.0", "nan", "inf"] {
            assert_eq!(
                filled("05-03-2024", bad).validate(),
                Err(FormError::NonNumericAmount),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_validate_dates() {
        assert!(filled("05-03-2024", "1").validate().is_ok());
        for bad in [
            "2024-03-05",
            "05/03/2024",
            "not-a-date",
            "31-02-2024",
            "05-03-24",
            "05-03-+2024",
        ] {
            assert_eq!(
                filled(bad, "1").validate(),
                Err(FormError::InvalidDate),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_focus_cycles_and_typing() {
        let mut form = EntryForm::new();
        assert_eq!(form.focus(), Field::Date);
        for c in "01-01-2024".chars() {
            form.push(c);
        }
        form.focus_next();
        assert_eq!(form.focus(), Field::Type);
        form.push('X');
        form.pop();
        form.focus_prev();
        form.focus_prev();
        assert_eq!(form.focus(), Field::Description);
        assert_eq!(form.value(Field::Date), "01-01-2024");
        assert_eq!(form.value(Field::Type), "");
    }

    #[test]
    fn test_form_error_messages() {
        assert_eq!(FormError::InvalidDate.to_string(), "Invalid Datetime format");
        assert_eq!(
            FormError::NonNumericAmount.to_string(),
            "Amount must be numerical"
        );
    }
}
