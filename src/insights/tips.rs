//! Rule-based suggestions for the selected month.

use serde::{Deserialize, Serialize};

use crate::config::InsightsConfig;
use crate::insights::score::safe_ratio;
use crate::insights::totals::PeriodTotals;
use crate::insights::trend::{SpendExtremes, TrendPoint};

/// Affirmation shown when no rule fires.
pub const ON_TRACK_MESSAGE: &str = "You're on track! Keep it up.";

const SAVINGS_RATIO_TARGET: f64 = 0.2;
const COMPULSORY_RATIO_LIMIT: f64 = 0.6;

/// Either the tips that fired, or the explicit on-track affirmation.
///
/// The rule set is synchronous and exhaustive, so there is no "pending"
/// state; an empty tip list never escapes this type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Suggestions {
    Tips(Vec<String>),
    OnTrack,
}

impl Suggestions {
    fn from_tips(tips: Vec<String>) -> Self {
        if tips.is_empty() {
            Suggestions::OnTrack
        } else {
            Suggestions::Tips(tips)
        }
    }

    /// The messages to present, affirmation included.
    pub fn messages(&self) -> Vec<&str> {
        match self {
            Suggestions::Tips(tips) => tips.iter().map(String::as_str).collect(),
            Suggestions::OnTrack => vec![ON_TRACK_MESSAGE],
        }
    }
}

/// Everything the rules look at for one report.
pub struct TipInputs<'a> {
    pub month: &'a PeriodTotals,
    /// Number of records in the selected month's filtered set.
    pub month_records: usize,
    pub compulsory: f64,
    pub previous_month_expense: f64,
    pub year: &'a PeriodTotals,
    /// Number of records in the selected year's filtered set.
    pub year_records: usize,
    pub trend: &'a [TrendPoint],
    pub currency: &'a str,
}

/// Evaluates the suggestion rules in fixed order; every rule that matches
/// contributes one tip, none are mutually exclusive.
pub fn generate_tips(inputs: &TipInputs<'_>, config: &InsightsConfig) -> Suggestions {
    let mut tips = Vec::new();
    let sym = inputs.currency;

    if inputs.previous_month_expense > 0.0 && inputs.month.expense > inputs.previous_month_expense
    {
        let delta = inputs.month.expense - inputs.previous_month_expense;
        tips.push(format!(
            "Your expenses increased by {sym}{delta:.0} vs last month."
        ));
    }

    // A period with no records at all gets the affirmation, not tips;
    // a zero-income month that still has spending is a real shortfall
    // and both ratio rules fire via the 0-ratio fallback.
    let savings_ratio = safe_ratio(inputs.month.saving, inputs.month.income);
    if inputs.month_records > 0 && savings_ratio < SAVINGS_RATIO_TARGET {
        let shortfall = SAVINGS_RATIO_TARGET * inputs.month.income - inputs.month.saving;
        tips.push(format!(
            "You're saving less than 20% of income; try saving {sym}{shortfall:.0} more."
        ));
    }

    let compulsory_ratio = safe_ratio(inputs.compulsory, inputs.month.expense);
    if compulsory_ratio > COMPULSORY_RATIO_LIMIT {
        tips.push("Compulsory expenses are over 60% of your total spend.".to_string());
    }

    if inputs.year_records > 0
        && average_monthly_savings_rate(inputs.year) < config.min_avg_savings_rate
    {
        tips.push(format!(
            "Try to increase your average monthly savings rate above {:.0}%.",
            config.min_avg_savings_rate
        ));
    }

    let extremes = SpendExtremes::from_trend(inputs.trend);
    if extremes.spread() > config.fluctuation_threshold {
        tips.push(format!(
            "Big fluctuation in spending: {sym}{:.0} difference between {} and {}.",
            extremes.spread(),
            extremes.highest_month_name(),
            extremes.lowest_month_name(),
        ));
    }

    Suggestions::from_tips(tips)
}

/// Yearly savings averaged across twelve months, as a percentage; 0 when
/// the year has no income.
pub fn average_monthly_savings_rate(year: &PeriodTotals) -> f64 {
    safe_ratio(year.saving, year.income) / 12.0 * 100.0
}
