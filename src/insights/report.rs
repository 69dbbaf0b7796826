//! Full report assembly for a selected month and year.

use serde::{Deserialize, Serialize};

use crate::config::InsightsConfig;
use crate::domain::{SetupData, Transaction, TransactionKind};
use crate::insights::breakdown::{breakdown, top_categories, CategorySlice};
use crate::insights::period::{monthly, yearly, Period};
use crate::insights::score::{health_score, HealthScore};
use crate::insights::tips::{average_monthly_savings_rate, generate_tips, Suggestions, TipInputs};
use crate::insights::totals::{bucket_totals, compulsory_total, sum_matching, PeriodTotals};
use crate::insights::trend::{trend_series, SpendExtremes, TrendPoint};

/// Everything a presenter needs for the insights view, freshly computed
/// from one snapshot. Every field is populated even when the filtered
/// set is empty; zero values stand in for "no data", fields are never
/// absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InsightsReport {
    pub period: Period,
    /// Display symbol echoed from setup; never used in arithmetic.
    pub currency: String,
    pub monthly: PeriodTotals,
    pub yearly: PeriodTotals,
    /// Month income minus expenses and savings; can be negative.
    pub leftover: f64,
    pub monthly_expense_breakdown: Vec<CategorySlice>,
    pub yearly_expense_breakdown: Vec<CategorySlice>,
    pub monthly_saving_breakdown: Vec<CategorySlice>,
    pub yearly_saving_breakdown: Vec<CategorySlice>,
    /// Top five yearly expense categories by total.
    pub top_expense_categories: Vec<CategorySlice>,
    /// Always exactly twelve entries, January through December.
    pub trend: Vec<TrendPoint>,
    pub spend_extremes: SpendExtremes,
    pub avg_monthly_savings_rate: f64,
    pub health: HealthScore,
    pub suggestions: Suggestions,
}

/// Builds the full report for one `(month, year)` selection.
///
/// Pure over its arguments: the snapshot is read, never mutated, and no
/// reference into it survives the call.
pub fn build_report(
    transactions: &[Transaction],
    setup: &SetupData,
    period: Period,
    config: &InsightsConfig,
) -> InsightsReport {
    let month_txns = monthly(transactions, period);
    let year_txns = yearly(transactions, period.year);
    let previous_txns = monthly(transactions, period.previous());

    let monthly_totals = bucket_totals(&month_txns);
    let yearly_totals = bucket_totals(&year_txns);
    let compulsory = compulsory_total(&month_txns);
    let previous_month_expense = sum_matching(&previous_txns, TransactionKind::Expense);

    let trend = trend_series(transactions, period.year);
    let spend_extremes = SpendExtremes::from_trend(&trend);
    let health = health_score(&monthly_totals, compulsory);

    let suggestions = generate_tips(
        &TipInputs {
            month: &monthly_totals,
            month_records: month_txns.len(),
            compulsory,
            previous_month_expense,
            year: &yearly_totals,
            year_records: year_txns.len(),
            trend: &trend,
            currency: &setup.currency,
        },
        config,
    );

    tracing::debug!(
        year = period.year,
        month0 = period.month0,
        month_records = month_txns.len(),
        year_records = year_txns.len(),
        score = health.score,
        "assembled insights report"
    );

    InsightsReport {
        period,
        currency: setup.currency.clone(),
        monthly: monthly_totals,
        yearly: yearly_totals,
        leftover: monthly_totals.leftover(),
        monthly_expense_breakdown: breakdown(&month_txns, TransactionKind::Expense, setup),
        yearly_expense_breakdown: breakdown(&year_txns, TransactionKind::Expense, setup),
        monthly_saving_breakdown: breakdown(&month_txns, TransactionKind::Saving, setup),
        yearly_saving_breakdown: breakdown(&year_txns, TransactionKind::Saving, setup),
        top_expense_categories: top_categories(breakdown(
            &year_txns,
            TransactionKind::Expense,
            setup,
        )),
        trend,
        spend_extremes,
        avg_monthly_savings_rate: average_monthly_savings_rate(&yearly_totals),
        health,
        suggestions,
    }
}
