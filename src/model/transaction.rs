use crate::model::Amount;
use serde::{Deserialize, Serialize};

/// A single recorded transaction, exactly as it is persisted.
///
/// `date` is kept as the text that was entered. It was checked against
/// [`DATE_FORMAT`](crate::model::DATE_FORMAT) when the transaction was created and is not
/// re-validated when loaded.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Transaction {
    pub(crate) date: String,
    pub(crate) r#type: String,
    pub(crate) category: String,
    pub(crate) amount: Amount,
    pub(crate) description: String,
}

impl Transaction {
    pub fn new(
        date: impl Into<String>,
        r#type: impl Into<String>,
        category: impl Into<String>,
        amount: Amount,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            r#type: r#type.into(),
            category: category.into(),
            amount,
            description: description.into(),
        }
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn r#type(&self) -> &str {
        &self.r#type
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// The displayed cell values in column order: date, type, category, amount, description.
    pub fn cells(&self) -> [String; 5] {
        [
            self.date.clone(),
            self.r#type.clone(),
            self.category.clone(),
            self.amount.to_string(),
            self.description.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_serialized_field_names() {
        let t = Transaction::new(
            "01-01-2024",
            "Income",
            "Salary",
            Amount::from_str("1500").unwrap(),
            "January pay",
        );
        let value = serde_json::to_value(&t).unwrap();
        assert_eq!(value["date"], "01-01-2024");
        assert_eq!(value["type"], "Income");
        assert_eq!(value["category"], "Salary");
        assert_eq!(value["amount"], 1500.0);
        assert_eq!(value["description"], "January pay");
        assert_eq!(value.as_object().unwrap().len(), 5);
    }

    #[test]
    fn test_deserialize_integer_amount() {
        let json = r#"{
            "date": "05-03-2024",
            "type": "Expense",
            "category": "Food",
            "amount": -12,
            "description": ""
        }"#;
        let t: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(t.amount().value(), -12.0);
        assert_eq!(t.description(), "");
    }

    #[test]
    fn test_cells() {
        let t = Transaction::new(
            "05-03-2024",
            "Expense",
            "Food",
            Amount::from_str("12.50").unwrap(),
            "Lunch",
        );
        assert_eq!(
            t.cells(),
            [
                "05-03-2024".to_string(),
                "Expense".to_string(),
                "Food".to_string(),
                "12.5".to_string(),
                "Lunch".to_string(),
            ]
        );
    }
}
