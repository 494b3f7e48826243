//! The transaction store: the authoritative in-memory list of transactions and its mirror on
//! disk.
//!
//! Every mutation rewrites the whole file. The store is loaded once, mutated through
//! [`TransactionStore::append`] and [`TransactionStore::remove_at`], and saved after each
//! mutation.

use crate::model::Transaction;
use crate::{utils, Config, Result};
use anyhow::{ensure, Context};
use serde::Serialize;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use tracing::debug;
use uuid::Uuid;

/// Identifies a record for as long as it is in memory. Ids are assigned when records are loaded
/// or appended and are never written to disk.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct RecordId(Uuid);

impl RecordId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Clone)]
struct Record {
    id: RecordId,
    transaction: Transaction,
}

/// The ordered collection of transactions, synchronized with the data file.
#[derive(Debug, Clone)]
pub struct TransactionStore {
    data_path: PathBuf,
    scratch_path: PathBuf,
    records: Vec<Record>,
}

impl TransactionStore {
    /// Reads the data file in full. A missing file is a normal first run and yields an empty
    /// store.
    pub async fn load(config: &Config) -> Result<Self> {
        let data_path = config.data_path().to_path_buf();
        let transactions: Vec<Transaction> = utils::deserialize_optional(&data_path)
            .await
            .context("Unable to load transactions")?
            .unwrap_or_default();
        debug!(
            "Loaded {} transactions from {}",
            transactions.len(),
            data_path.display()
        );
        let records = transactions
            .into_iter()
            .map(|transaction| Record {
                id: RecordId::new(),
                transaction,
            })
            .collect();
        Ok(Self {
            data_path,
            scratch_path: config.scratch_path().to_path_buf(),
            records,
        })
    }

    /// Overwrites the data file with the entire collection.
    ///
    /// The JSON is written to the scratch file and then renamed over the data file.
    pub async fn save(&self) -> Result<()> {
        let json = to_pretty_json(&self.transactions().collect::<Vec<_>>())?;
        utils::write(&self.scratch_path, json).await?;
        utils::rename(&self.scratch_path, &self.data_path).await?;
        debug!(
            "Saved {} transactions to {}",
            self.records.len(),
            self.data_path.display()
        );
        Ok(())
    }

    /// Adds `transaction` to the end of the collection and saves.
    pub async fn append(&mut self, transaction: Transaction) -> Result<RecordId> {
        let id = RecordId::new();
        self.records.push(Record { id, transaction });
        self.save().await?;
        Ok(id)
    }

    /// Removes the transaction at `position` and saves, returning the removed transaction.
    ///
    /// # Errors
    /// - Returns an error if `position` is out of range. Nothing is removed or written.
    /// - Returns an error if the save fails.
    pub async fn remove_at(&mut self, position: usize) -> Result<Transaction> {
        ensure!(
            position < self.records.len(),
            "Cannot remove transaction at position {position}, there are only {} transactions",
            self.records.len()
        );
        let removed = self.records.remove(position);
        self.save().await?;
        Ok(removed.transaction)
    }

    /// The current position of the record with `id`, if it is still in the store.
    pub fn position_of(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    pub fn get(&self, position: usize) -> Option<&Transaction> {
        self.records.get(position).map(|r| &r.transaction)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over the transactions in order.
    pub fn transactions(&self) -> impl Iterator<Item = &Transaction> {
        self.records.iter().map(|r| &r.transaction)
    }

    /// Iterates over the transactions in order along with their ids.
    pub fn entries(&self) -> impl Iterator<Item = (RecordId, &Transaction)> {
        self.records.iter().map(|r| (r.id, &r.transaction))
    }
}

/// Serializes `value` as JSON indented by four spaces.
fn to_pretty_json<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut serializer)
        .context("Unable to serialize transactions")?;
    Ok(buf)
}
