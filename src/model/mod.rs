//! Types that represent the core data model: the `Transaction` and its `Amount`.
mod amount;
mod date;
mod transaction;

pub use amount::{Amount, AmountError};
pub use date::{parse_date, DateError, DATE_FORMAT};
pub use transaction::Transaction;
