//! The financial health score heuristic.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::insights::totals::PeriodTotals;

const BASE_SCORE: i32 = 100;

const EXPENSE_RATIO_LIMIT: f64 = 0.7;
const EXPENSE_HIGH_PENALTY: i32 = 20;
// The heuristic charges every month for spending; a ratio under the
// limit still costs points, it just costs fewer.
const EXPENSE_BASE_PENALTY: i32 = 10;

const SAVINGS_RATIO_TARGET: f64 = 0.2;
const SAVINGS_TARGET_BONUS: i32 = 20;
const SAVINGS_BASE_BONUS: i32 = 10;

const COMPULSORY_RATIO_LIMIT: f64 = 0.6;
const COMPULSORY_PENALTY: i32 = 10;

const EXCELLENT_FLOOR: i32 = 80;
const GOOD_FLOOR: i32 = 60;

/// Qualitative band for a score, with its presentation color.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ScoreBand {
    Excellent,
    Good,
    NeedsAttention,
}

impl ScoreBand {
    pub fn for_score(score: i32) -> Self {
        if score > EXCELLENT_FLOOR {
            ScoreBand::Excellent
        } else if score > GOOD_FLOOR {
            ScoreBand::Good
        } else {
            ScoreBand::NeedsAttention
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent",
            ScoreBand::Good => "Good, but can improve",
            ScoreBand::NeedsAttention => "Needs attention",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "green",
            ScoreBand::Good => "orange",
            ScoreBand::NeedsAttention => "red",
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A month's health score with its band.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthScore {
    pub score: i32,
    pub band: ScoreBand,
}

/// Ratio with a zero-denominator fallback of 0; never non-finite.
pub(crate) fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

/// Scores one month from its bucket totals and compulsory-expense total.
///
/// Starts at 100; the expense and savings rules always fire one of their
/// two branches, the compulsory rule only when breached. No floor or
/// ceiling: the score can leave the 0..=100 range.
pub fn health_score(month: &PeriodTotals, compulsory: f64) -> HealthScore {
    let expense_ratio = safe_ratio(month.expense, month.income);
    let savings_ratio = safe_ratio(month.saving, month.income);
    let compulsory_ratio = safe_ratio(compulsory, month.expense);

    let mut score = BASE_SCORE;
    if expense_ratio > EXPENSE_RATIO_LIMIT {
        score -= EXPENSE_HIGH_PENALTY;
    } else {
        score -= EXPENSE_BASE_PENALTY;
    }
    if savings_ratio > SAVINGS_RATIO_TARGET {
        score += SAVINGS_TARGET_BONUS;
    } else {
        score += SAVINGS_BASE_BONUS;
    }
    if compulsory_ratio > COMPULSORY_RATIO_LIMIT {
        score -= COMPULSORY_PENALTY;
    }

    HealthScore {
        score,
        band: ScoreBand::for_score(score),
    }
}
