//! Bucket-level amount reducers.

use serde::{Deserialize, Serialize};

use crate::domain::{Transaction, TransactionKind};

/// Selects which transactions a sum covers: an exact bucket match or a
/// caller-supplied predicate.
pub enum KindMatcher<'a> {
    Kind(TransactionKind),
    Custom(&'a dyn Fn(&Transaction) -> bool),
}

impl KindMatcher<'_> {
    fn matches(&self, txn: &Transaction) -> bool {
        match self {
            KindMatcher::Kind(kind) => txn.kind == *kind,
            KindMatcher::Custom(predicate) => predicate(txn),
        }
    }
}

impl<'a> From<TransactionKind> for KindMatcher<'a> {
    fn from(kind: TransactionKind) -> Self {
        KindMatcher::Kind(kind)
    }
}

/// Sum of `amount` over matching records; 0 for empty or non-matching
/// input. Never mutates its input.
pub fn sum_matching<'a>(
    transactions: &[Transaction],
    matcher: impl Into<KindMatcher<'a>>,
) -> f64 {
    let matcher = matcher.into();
    transactions
        .iter()
        .filter(|txn| matcher.matches(txn))
        .map(|txn| txn.amount)
        .sum()
}

/// Sum of amounts flagged compulsory within one period's records.
pub fn compulsory_total(transactions: &[Transaction]) -> f64 {
    sum_matching(
        transactions,
        KindMatcher::Custom(&|txn: &Transaction| txn.compulsory),
    )
}

/// Income, expense, and saving totals for one period's records.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct PeriodTotals {
    pub income: f64,
    pub expense: f64,
    pub saving: f64,
}

impl PeriodTotals {
    /// What remains after expenses and savings; can go negative.
    pub fn leftover(&self) -> f64 {
        self.income - self.expense - self.saving
    }
}

/// Reduces a period's records into its three bucket totals.
pub fn bucket_totals(transactions: &[Transaction]) -> PeriodTotals {
    PeriodTotals {
        income: sum_matching(transactions, TransactionKind::Income),
        expense: sum_matching(transactions, TransactionKind::Expense),
        saving: sum_matching(transactions, TransactionKind::Saving),
    }
}
