//! Twelve-month trend series and its spending extremes.

use serde::{Deserialize, Serialize};

use crate::domain::Transaction;
use crate::insights::period::{monthly, Period, MONTH_NAMES};
use crate::insights::totals::bucket_totals;

/// The trend series is always exactly this long, never sparse.
pub const TREND_MONTHS: usize = 12;

/// Bucket totals for one month of the trend series.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct TrendPoint {
    pub income: f64,
    pub expense: f64,
    pub saving: f64,
}

/// Bucket totals per month for one year, indexed 0 (January) through 11
/// (December). Months without transactions are all-zero entries.
pub fn trend_series(transactions: &[Transaction], year: i32) -> Vec<TrendPoint> {
    (0..TREND_MONTHS as u32)
        .map(|month0| {
            let totals = bucket_totals(&monthly(transactions, Period::new(year, month0)));
            TrendPoint {
                income: totals.income,
                expense: totals.expense,
                saving: totals.saving,
            }
        })
        .collect()
}

/// Highest- and lowest-expense months of a trend series. Ties resolve to
/// the earliest month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpendExtremes {
    pub highest_month0: u32,
    pub highest_amount: f64,
    pub lowest_month0: u32,
    pub lowest_amount: f64,
}

impl SpendExtremes {
    pub fn from_trend(trend: &[TrendPoint]) -> Self {
        let mut highest = (0u32, f64::NEG_INFINITY);
        let mut lowest = (0u32, f64::INFINITY);
        for (idx, point) in trend.iter().enumerate() {
            if point.expense > highest.1 {
                highest = (idx as u32, point.expense);
            }
            if point.expense < lowest.1 {
                lowest = (idx as u32, point.expense);
            }
        }
        Self {
            highest_month0: highest.0,
            highest_amount: highest.1,
            lowest_month0: lowest.0,
            lowest_amount: lowest.1,
        }
    }

    /// Spread between the highest- and lowest-spend months.
    pub fn spread(&self) -> f64 {
        self.highest_amount - self.lowest_amount
    }

    pub fn highest_month_name(&self) -> &'static str {
        MONTH_NAMES[self.highest_month0 as usize % 12]
    }

    pub fn lowest_month_name(&self) -> &'static str {
        MONTH_NAMES[self.lowest_month0 as usize % 12]
    }
}
