//! These structs provide the CLI interface for the finance CLI.

use clap::{Parser, Subcommand};
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::error;
use tracing_subscriber::filter::LevelFilter;

/// finance: A personal finance manager for the terminal.
///
/// Record transactions (date, type, category, amount and description) and review them in a
/// table. With no subcommand, the interactive terminal UI is started. It has two tabs: one lists
/// every transaction and lets you delete them, the other is a form for adding a new one.
///
/// Transactions are kept in $FINANCE_HOME/transactions.json, which is rewritten after every
/// change.
#[derive(Debug, Parser, Clone)]
pub struct Args {
    #[command(flatten)]
    common: Common,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Args {
    pub fn common(&self) -> &Common {
        &self.common
    }

    /// The subcommand, defaulting to `ui` when none was given.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Ui)
    }
}

#[derive(Subcommand, Debug, Clone, Eq, PartialEq)]
pub enum Command {
    /// Start the interactive terminal UI. This is the default.
    ///
    /// Press F1 for the list of transactions and F2 for the form that adds one. In the list, use
    /// the arrow keys to select a row and `d` to delete it. In the form, use Tab to move between
    /// fields and Enter to submit.
    Ui,
    /// Print every transaction as a table.
    List,
    /// Add a transaction.
    ///
    /// The date must be day-month-year, e.g. 05-03-2024, and the amount must be a number. Type,
    /// category and description can be anything.
    Add(AddArgs),
    /// Delete a transaction by the row number shown by `list`.
    Delete(DeleteArgs),
}

/// Arguments common to all subcommands.
#[derive(Debug, Parser, Clone)]
pub struct Common {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG. See the tracing-subscriber crate for instructions.
    #[arg(long, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,

    /// The directory where the transactions file is kept. Defaults to ~/finance
    #[arg(long, env = "FINANCE_HOME", default_value_t = default_finance_home())]
    finance_home: DisplayPath,
}

impl Common {
    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn finance_home(&self) -> &DisplayPath {
        &self.finance_home
    }
}

/// (Not shown): Args for the `finance add` command.
#[derive(Debug, Parser, Clone, Eq, PartialEq)]
pub struct AddArgs {
    /// The date of the transaction as day-month-year, e.g. 05-03-2024.
    #[arg(long)]
    pub(crate) date: String,

    /// A free-form label such as Income or Expense.
    #[arg(long = "type")]
    pub(crate) r#type: String,

    /// A free-form category such as Salary or Groceries.
    #[arg(long)]
    pub(crate) category: String,

    /// The amount as a decimal number, e.g. -12.50.
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) amount: String,

    /// An optional description.
    #[arg(long)]
    pub(crate) description: Option<String>,
}

impl AddArgs {
    pub fn new(
        date: impl Into<String>,
        r#type: impl Into<String>,
        category: impl Into<String>,
        amount: impl Into<String>,
        description: Option<impl Into<String>>,
    ) -> Self {
        Self {
            date: date.into(),
            r#type: r#type.into(),
            category: category.into(),
            amount: amount.into(),
            description: description.map(Into::into),
        }
    }
}

/// (Not shown): Args for the `finance delete` command.
#[derive(Debug, Parser, Clone, Eq, PartialEq)]
pub struct DeleteArgs {
    /// The row number of the transaction to delete, as shown by `finance list`. Rows start at 1.
    row: usize,
}

impl DeleteArgs {
    pub fn new(row: usize) -> Self {
        Self { row }
    }

    pub fn row(&self) -> usize {
        self.row
    }
}

fn default_finance_home() -> DisplayPath {
    DisplayPath(match dirs::home_dir() {
        Some(home) => home.join("finance"),
        None => {
            error!(
                "There was an error when trying to get your home directory. You can get around \
                this by providing --finance-home or FINANCE_HOME instead of relying on the \
                default finance home directory. If you continue using the program right now, \
                your transactions will be kept in ./finance",
            );
            PathBuf::from("finance")
        }
    })
}

/// A path that clap can use as a default value, which needs `Display`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DisplayPath(PathBuf);

impl DisplayPath {
    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl Display for DisplayPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

impl FromStr for DisplayPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(PathBuf::from(s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_is_ui() {
        let args = Args::try_parse_from(["finance", "--finance-home", "/tmp/f"]).unwrap();
        assert_eq!(args.command(), Command::Ui);
        assert_eq!(args.common().finance_home().path(), Path::new("/tmp/f"));
        assert_eq!(args.common().log_level(), LevelFilter::INFO);
    }

    #[test]
    fn test_parse_add() {
        let args = Args::try_parse_from([
            "finance",
            "--log-level",
            "debug",
            "add",
            "--date",
            "05-03-2024",
            "--type",
            "Expense",
            "--category",
            "Food",
            "--amount",
            "-12.50",
        ])
        .unwrap();
        assert_eq!(args.common().log_level(), LevelFilter::DEBUG);
        assert_eq!(
            args.command(),
            Command::Add(AddArgs::new(
                "05-03-2024",
                "Expense",
                "Food",
                "-12.50",
                None::<String>
            ))
        );
    }

    #[test]
    fn test_log_level_off() {
        let args = Args::try_parse_from(["finance", "--log-level", "off", "list"]).unwrap();
        assert_eq!(args.common().log_level(), LevelFilter::OFF);
        assert_eq!(args.command(), Command::List);
        assert!(Args::try_parse_from(["finance", "--log-level", "loud", "list"]).is_err());
    }

    #[test]
    fn test_parse_delete() {
        let args = Args::try_parse_from(["finance", "delete", "3"]).unwrap();
        assert_eq!(args.command(), Command::Delete(DeleteArgs::new(3)));
        assert!(Args::try_parse_from(["finance", "delete", "x"]).is_err());
    }
}
