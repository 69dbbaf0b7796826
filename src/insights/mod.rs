//! The aggregation engine: pure functions from a transaction snapshot to
//! period summaries, breakdowns, trends, a health score, and tips.
//!
//! Each submodule is independently callable so presenters can request a
//! partial view (say, only the trend series) without building the full
//! report.

pub mod breakdown;
pub mod period;
pub mod report;
pub mod score;
pub mod tips;
pub mod totals;
pub mod trend;

pub use breakdown::{breakdown, top_categories, CategorySlice, TOP_CATEGORY_COUNT};
pub use period::{monthly, yearly, Period, MONTH_NAMES};
pub use report::{build_report, InsightsReport};
pub use score::{health_score, HealthScore, ScoreBand};
pub use tips::{average_monthly_savings_rate, generate_tips, Suggestions, TipInputs, ON_TRACK_MESSAGE};
pub use totals::{bucket_totals, compulsory_total, sum_matching, KindMatcher, PeriodTotals};
pub use trend::{trend_series, SpendExtremes, TrendPoint, TREND_MONTHS};
