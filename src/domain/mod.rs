//! Data model shared by the store boundary and the insights engine.

pub mod setup;
pub mod transaction;

pub use setup::{CategoryEntry, SetupData, DEFAULT_CATEGORY_COLOR, DEFAULT_CURRENCY_SYMBOL};
pub use transaction::{RawRecord, Transaction, TransactionKind};
