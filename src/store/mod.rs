//! In-memory transaction store, the host-side collaborator the engine
//! reads snapshots from.
//!
//! Mirrors the tracker's storage contract: the whole record list lives
//! behind one JSON blob, mutations append or delete by index, and ids
//! are assigned here, never by the engine.

use uuid::Uuid;

use crate::domain::{RawRecord, SetupData, Transaction};
use crate::errors::StoreError;

#[derive(Debug, Clone, Default)]
pub struct TransactionStore {
    records: Vec<RawRecord>,
}

impl TransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a persisted record list; `null` or unreadable input yields
    /// an empty store rather than an error surfaced to the user.
    pub fn from_json(raw: &str) -> Self {
        let records = serde_json::from_str::<Option<Vec<RawRecord>>>(raw)
            .ok()
            .flatten()
            .unwrap_or_default();
        Self { records }
    }

    /// Serializes the record list for persistence.
    pub fn to_json(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string(&self.records)?)
    }

    /// Appends a record, assigning a fresh id when it has none, and
    /// returns the record's id.
    pub fn add(&mut self, mut record: RawRecord) -> String {
        let id = record
            .id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        record.id = Some(id.clone());
        self.records.push(record);
        id
    }

    /// Removes and returns the record at `index`.
    pub fn delete_at(&mut self, index: usize) -> Result<RawRecord, StoreError> {
        if index >= self.records.len() {
            return Err(StoreError::OutOfBounds {
                index,
                len: self.records.len(),
            });
        }
        Ok(self.records.remove(index))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[RawRecord] {
        &self.records
    }

    /// The validated snapshot the engine consumes. Records with an
    /// unknown type or unparseable date are skipped with a warning; they
    /// belong to no bucket and no period.
    pub fn snapshot(&self) -> Vec<Transaction> {
        let mut transactions = Vec::with_capacity(self.records.len());
        for (index, record) in self.records.iter().enumerate() {
            match Transaction::from_raw(record) {
                Some(txn) => transactions.push(txn),
                None => {
                    tracing::warn!(
                        index,
                        kind = %record.kind,
                        date = %record.date,
                        "skipping record with unknown type or malformed date"
                    );
                }
            }
        }
        transactions
    }
}

/// Decodes the host's setup blob, defaulting when absent. Companion to
/// [`TransactionStore::from_json`] for the second storage key.
pub fn setup_from_json(raw: &str) -> SetupData {
    SetupData::from_json(raw)
}
