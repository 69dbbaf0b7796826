//! Per-category totals within one bucket, with display colors resolved.

use serde::{Deserialize, Serialize};

use crate::domain::{SetupData, Transaction, TransactionKind};

/// How many categories the "top categories" view keeps.
pub const TOP_CATEGORY_COUNT: usize = 5;

/// One category's share of a bucket for a period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategorySlice {
    pub name: String,
    pub total: f64,
    pub color: String,
}

/// Groups a period's records of one kind by category, summing amounts.
///
/// Output order is first-seen order in the input; iteration order is part
/// of the contract, so the accumulator is a Vec scanned by name rather
/// than a hash map. Colors come from the registry matching `kind`, with
/// the default for unregistered names.
pub fn breakdown(
    transactions: &[Transaction],
    kind: TransactionKind,
    setup: &SetupData,
) -> Vec<CategorySlice> {
    let mut slices: Vec<CategorySlice> = Vec::new();
    for txn in transactions.iter().filter(|txn| txn.kind == kind) {
        match slices.iter_mut().find(|slice| slice.name == txn.category) {
            Some(slice) => slice.total += txn.amount,
            None => slices.push(CategorySlice {
                name: txn.category.clone(),
                total: txn.amount,
                color: setup.color_for(kind, &txn.category),
            }),
        }
    }
    slices
}

/// The largest slices by total, descending, truncated to
/// [`TOP_CATEGORY_COUNT`]. The sort is stable, so equal totals keep
/// their first-seen order.
pub fn top_categories(mut slices: Vec<CategorySlice>) -> Vec<CategorySlice> {
    slices.sort_by(|a, b| b.total.partial_cmp(&a.total).unwrap_or(std::cmp::Ordering::Equal));
    slices.truncate(TOP_CATEGORY_COUNT);
    slices
}
