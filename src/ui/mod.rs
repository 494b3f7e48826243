//! The interactive terminal UI.
//!
//! `App` holds all UI state and the store. Keys are fed to [`App::handle_key`] one at a time,
//! each one fully handled (including any save) before the next is read. Drawing lives in
//! `render` and the terminal event loop in `terminal`.

mod dialog;
mod form;
mod listing;
mod render;
mod terminal;

pub use dialog::ErrorDialog;
pub use form::{EntryForm, Field, FormError, Submission};
pub use listing::{Listing, Row, HEADERS};
pub use render::draw;
pub use terminal::{run, screen_taken};

use crate::store::{RecordId, TransactionStore};
use crate::Result;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, trace};

/// The two tabs of the UI.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub enum Tab {
    #[default]
    Listing,
    Entry,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Listing, Tab::Entry];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Listing => "View All Transactions",
            Tab::Entry => "Add New Transaction",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Listing => 0,
            Tab::Entry => 1,
        }
    }
}

pub struct App {
    store: TransactionStore,
    listing: Listing,
    form: EntryForm,
    tab: Tab,
    dialog: Option<ErrorDialog>,
    quit: bool,
}

impl App {
    pub fn new(store: TransactionStore) -> Self {
        let listing = Listing::new(&store);
        Self {
            store,
            listing,
            form: EntryForm::new(),
            tab: Tab::default(),
            dialog: None,
            quit: false,
        }
    }

    pub fn store(&self) -> &TransactionStore {
        &self.store
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    pub(crate) fn listing_mut(&mut self) -> &mut Listing {
        &mut self.listing
    }

    pub fn form(&self) -> &EntryForm {
        &self.form
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn dialog(&self) -> Option<&ErrorDialog> {
        self.dialog.as_ref()
    }

    pub fn quit(&self) -> bool {
        self.quit
    }

    /// Handles one key press.
    ///
    /// # Errors
    /// Returns an error if a save fails. The UI cannot recover from that and should exit.
    pub async fn handle_key(&mut self, k: KeyEvent) -> Result<()> {
        if k.kind != KeyEventKind::Press {
            return Ok(());
        }
        trace!("{k:?}");

        if self.dialog.is_some() {
            if matches!(k.code, KeyCode::Enter | KeyCode::Esc) {
                self.dialog = None;
            }
            return Ok(());
        }

        if k.modifiers.contains(KeyModifiers::CONTROL) && k.code == KeyCode::Char('c') {
            self.quit = true;
            return Ok(());
        }

        match k.code {
            KeyCode::F(1) => {
                self.select_tab(Tab::Listing);
                return Ok(());
            }
            KeyCode::F(2) => {
                self.select_tab(Tab::Entry);
                return Ok(());
            }
            _ => {}
        }

        match self.tab {
            Tab::Listing => match k.code {
                KeyCode::Char('q') => self.quit = true,
                KeyCode::Up => self.listing.select_prev(),
                KeyCode::Down => self.listing.select_next(),
                KeyCode::Char('d') | KeyCode::Delete => {
                    if let Some(id) = self.listing.selected().map(Row::id) {
                        self.delete(id).await?;
                    }
                }
                _ => {}
            },
            Tab::Entry => match k.code {
                KeyCode::Enter => self.submit().await?,
                KeyCode::Tab | KeyCode::Down => self.form.focus_next(),
                KeyCode::BackTab | KeyCode::Up => self.form.focus_prev(),
                KeyCode::Backspace => self.form.pop(),
                KeyCode::Char(c) if !k.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.form.push(c)
                }
                _ => {}
            },
        }
        Ok(())
    }

    /// Submits the entry form. Rejected values open the error dialog; accepted values are
    /// appended and the listing is rebuilt.
    pub async fn submit(&mut self) -> Result<()> {
        match self.form.submit(&mut self.store).await? {
            Submission::Appended(id) => {
                debug!("Appended transaction {id}");
                self.listing.refresh(&self.store);
            }
            Submission::Rejected(e) => self.dialog = Some(ErrorDialog::new(e.to_string())),
        }
        Ok(())
    }

    /// Deletes the record with `id` at whatever position it is now, then rebuilds the listing.
    pub async fn delete(&mut self, id: RecordId) -> Result<()> {
        if let Some(position) = self.store.position_of(id) {
            self.store.remove_at(position).await?;
            debug!("Deleted transaction {id} at position {position}");
        }
        self.listing.refresh(&self.store);
        Ok(())
    }
}
