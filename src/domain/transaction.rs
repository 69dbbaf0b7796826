//! Transaction records and their canonical classification.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Canonical transaction buckets.
///
/// Stored data tolerates the legacy `"Savings"` spelling; it folds into
/// [`TransactionKind::Saving`] once, here at the boundary, so aggregation
/// never has to care.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    Income,
    Expense,
    #[serde(alias = "Savings")]
    Saving,
}

impl TransactionKind {
    /// Maps a raw `type` string to its canonical bucket.
    ///
    /// Returns `None` for anything outside the three buckets; such
    /// records are excluded from every aggregate rather than rejected.
    pub fn classify(raw: &str) -> Option<Self> {
        match raw {
            "Income" => Some(TransactionKind::Income),
            "Expense" => Some(TransactionKind::Expense),
            "Saving" | "Savings" => Some(TransactionKind::Saving),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
            TransactionKind::Saving => "Saving",
        };
        f.write_str(label)
    }
}

/// A transaction exactly as the host stores it: free-text type, string
/// date, optional id. This is the wire shape; [`Transaction::from_raw`]
/// produces the validated form the engine consumes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: f64,
    pub category: String,
    pub date: String,
    #[serde(default)]
    pub compulsory: bool,
    #[serde(default)]
    pub recurring: bool,
}

impl RawRecord {
    pub fn new(
        kind: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            kind: kind.into(),
            amount,
            category: category.into(),
            date: date.into(),
            compulsory: false,
            recurring: false,
        }
    }

    pub fn compulsory(mut self) -> Self {
        self.compulsory = true;
        self
    }

    pub fn recurring(mut self) -> Self {
        self.recurring = true;
        self
    }
}

/// A validated, immutable transaction record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    /// Opaque identifier assigned by the store, never by the engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub kind: TransactionKind,
    pub amount: f64,
    pub category: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub compulsory: bool,
    #[serde(default)]
    pub recurring: bool,
}

impl Transaction {
    pub fn new(
        kind: TransactionKind,
        amount: f64,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: None,
            kind,
            amount,
            category: category.into(),
            date,
            compulsory: false,
            recurring: false,
        }
    }

    pub fn compulsory(mut self) -> Self {
        self.compulsory = true;
        self
    }

    pub fn recurring(mut self) -> Self {
        self.recurring = true;
        self
    }

    /// Validates a raw record into an engine-ready transaction.
    ///
    /// Returns `None` when the kind matches no canonical bucket or the
    /// date does not parse; either way the record belongs to no period
    /// and must not disturb aggregation of the rest.
    pub fn from_raw(raw: &RawRecord) -> Option<Self> {
        let kind = TransactionKind::classify(&raw.kind)?;
        let date = parse_record_date(&raw.date)?;
        Some(Self {
            id: raw.id.clone(),
            kind,
            amount: raw.amount,
            category: raw.category.clone(),
            date,
            compulsory: raw.compulsory,
            recurring: raw.recurring,
        })
    }
}

/// Parses the date formats the host writes: RFC 3339 datetimes
/// (`2024-01-05T00:00:00.000Z`) or plain `YYYY-MM-DD` dates.
fn parse_record_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(instant) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(instant.date_naive());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}
