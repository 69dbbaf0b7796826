//! Calendar period selection and transaction filtering.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::domain::Transaction;

/// Month names indexed by `month0`, matching trend-series positions.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A `(year, month)` selection. Months are 0-based (0 = January, 11 =
/// December) throughout the engine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Period {
    pub year: i32,
    pub month0: u32,
}

impl Period {
    pub fn new(year: i32, month0: u32) -> Self {
        Self { year, month0 }
    }

    /// The month before this one, wrapping January back to the previous
    /// year's December.
    pub fn previous(&self) -> Self {
        if self.month0 == 0 {
            Self {
                year: self.year - 1,
                month0: 11,
            }
        } else {
            Self {
                year: self.year,
                month0: self.month0 - 1,
            }
        }
    }

    pub fn contains(&self, txn: &Transaction) -> bool {
        txn.date.year() == self.year && txn.date.month0() == self.month0
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.month0 as usize % 12]
    }
}

/// Transactions falling in the given calendar month, original order kept.
pub fn monthly(transactions: &[Transaction], period: Period) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|txn| period.contains(txn))
        .cloned()
        .collect()
}

/// Transactions falling in the given calendar year, original order kept.
pub fn yearly(transactions: &[Transaction], year: i32) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|txn| txn.date.year() == year)
        .cloned()
        .collect()
}
