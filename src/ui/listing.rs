//! The listing tab: one row per stored transaction, rebuilt in full on every refresh.

use crate::store::{RecordId, TransactionStore};
use ratatui::widgets::TableState;

/// Column headings, in display order. The first column is the 1-based row number.
pub const HEADERS: [&str; 6] = ["#", "Date", "Type", "Category", "Amount", "Description"];

/// A rendered row and the record it was rendered from.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Row {
    id: RecordId,
    cells: [String; 5],
}

impl Row {
    pub fn id(&self) -> RecordId {
        self.id
    }

    /// Date, type, category, amount and description as displayed.
    pub fn cells(&self) -> &[String; 5] {
        &self.cells
    }
}

#[derive(Debug, Default)]
pub struct Listing {
    rows: Vec<Row>,
    state: TableState,
}

impl Listing {
    pub fn new(store: &TransactionStore) -> Self {
        let mut listing = Self::default();
        listing.refresh(store);
        listing
    }

    /// Throws away every row and rebuilds them from `store`. The selection is kept at the same
    /// position where possible.
    pub fn refresh(&mut self, store: &TransactionStore) {
        self.rows = store
            .entries()
            .map(|(id, transaction)| Row {
                id,
                cells: transaction.cells(),
            })
            .collect();
        let selected = match (self.rows.len(), self.state.selected()) {
            (0, _) => None,
            (n, Some(i)) => Some(i.min(n - 1)),
            (_, None) => Some(0),
        };
        self.state.select(selected);
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn selected(&self) -> Option<&Row> {
        self.state.selected().and_then(|i| self.rows.get(i))
    }

    pub fn select_next(&mut self) {
        self.step(1);
    }

    pub fn select_prev(&mut self) {
        self.step(-1);
    }

    fn step(&mut self, delta: isize) {
        let n = self.rows.len();
        if n == 0 {
            self.state.select(None);
            return;
        }
        let cur = self.state.selected().unwrap_or(0) as isize;
        let next = (cur + delta).rem_euclid(n as isize) as usize;
        self.state.select(Some(next));
    }

    pub(crate) fn state_mut(&mut self) -> &mut TableState {
        &mut self.state
    }
}
