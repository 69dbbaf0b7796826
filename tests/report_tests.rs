use chrono::NaiveDate;
use insights_core::config::InsightsConfig;
use insights_core::domain::{CategoryEntry, SetupData, Transaction, TransactionKind};
use insights_core::insights::{
    build_report, yearly, Period, ScoreBand, Suggestions, TrendPoint, TREND_MONTHS,
};

fn txn(kind: TransactionKind, amount: f64, category: &str, ymd: (i32, u32, u32)) -> Transaction {
    Transaction::new(
        kind,
        amount,
        category,
        NaiveDate::from_ymd_opt(ymd.0, ymd.1, ymd.2).unwrap(),
    )
}

fn january_snapshot() -> Vec<Transaction> {
    vec![
        txn(TransactionKind::Income, 5000.0, "Salary", (2024, 1, 5)),
        txn(TransactionKind::Expense, 4000.0, "Rent", (2024, 1, 10)).compulsory(),
        txn(TransactionKind::Saving, 200.0, "Emergency Fund", (2024, 1, 15)),
    ]
}

#[test]
fn january_2024_scenario_matches_expected_report() {
    let report = build_report(
        &january_snapshot(),
        &SetupData::default(),
        Period::new(2024, 0),
        &InsightsConfig::default(),
    );

    assert_eq!(report.monthly.income, 5000.0);
    assert_eq!(report.monthly.expense, 4000.0);
    assert_eq!(report.monthly.saving, 200.0);
    assert_eq!(report.leftover, 800.0);

    // 100 - 20 (expense ratio 0.8) + 10 (savings ratio 0.04) - 10
    // (compulsory ratio 1.0).
    assert_eq!(report.health.score, 80);
    assert_eq!(report.health.band, ScoreBand::Good);
    assert_eq!(report.health.band.label(), "Good, but can improve");

    // December 2023 has no expenses, so the increase rule stays quiet;
    // the savings shortfall, compulsory, and average-rate rules fire.
    match &report.suggestions {
        Suggestions::Tips(tips) => {
            assert_eq!(tips.len(), 3, "got {tips:?}");
            assert!(tips[0].contains("try saving ₹800 more"));
            assert!(tips[1].contains("over 60%"));
            assert!(tips[2].contains("average monthly savings rate"));
        }
        Suggestions::OnTrack => panic!("expected tips for a tight month"),
    }
}

#[test]
fn empty_snapshot_yields_a_complete_zeroed_report() {
    let report = build_report(
        &[],
        &SetupData::default(),
        Period::new(2025, 6),
        &InsightsConfig::default(),
    );

    assert_eq!(report.monthly.income, 0.0);
    assert_eq!(report.yearly.expense, 0.0);
    assert_eq!(report.leftover, 0.0);
    assert!(report.monthly_expense_breakdown.is_empty());
    assert!(report.yearly_saving_breakdown.is_empty());
    assert!(report.top_expense_categories.is_empty());
    assert_eq!(report.trend.len(), TREND_MONTHS);
    assert!(report.trend.iter().all(|p| *p == TrendPoint::default()));
    assert_eq!(report.avg_monthly_savings_rate, 0.0);
    assert_eq!(report.suggestions, Suggestions::OnTrack);
    // Zero-denominator ratios all fall back to 0: 100 - 10 + 10.
    assert_eq!(report.health.score, 100);
}

#[test]
fn zero_income_month_with_spending_fires_the_savings_rules() {
    let snapshot = vec![txn(TransactionKind::Expense, 100.0, "Food", (2024, 3, 10))];
    let report = build_report(
        &snapshot,
        &SetupData::default(),
        Period::new(2024, 2),
        &InsightsConfig::default(),
    );
    match &report.suggestions {
        Suggestions::Tips(tips) => {
            assert_eq!(tips.len(), 2, "got {tips:?}");
            assert!(tips[0].contains("saving less than 20%"));
            assert!(tips[1].contains("average monthly savings rate"));
        }
        Suggestions::OnTrack => panic!("a spending month with no income is not on track"),
    }
}

#[test]
fn monthly_buckets_partition_the_year() {
    let mut snapshot = january_snapshot();
    snapshot.push(txn(TransactionKind::Expense, 150.0, "Food", (2024, 6, 2)));
    snapshot.push(txn(TransactionKind::Income, 5200.0, "Salary", (2024, 6, 1)));
    snapshot.push(txn(TransactionKind::Saving, 900.0, "Stocks", (2024, 11, 28)));
    // A different year must not leak in.
    snapshot.push(txn(TransactionKind::Expense, 77.0, "Food", (2023, 12, 30)));

    let report = build_report(
        &snapshot,
        &SetupData::default(),
        Period::new(2024, 0),
        &InsightsConfig::default(),
    );

    let trend_income: f64 = report.trend.iter().map(|p| p.income).sum();
    let trend_expense: f64 = report.trend.iter().map(|p| p.expense).sum();
    let trend_saving: f64 = report.trend.iter().map(|p| p.saving).sum();
    assert_eq!(trend_income, report.yearly.income);
    assert_eq!(trend_expense, report.yearly.expense);
    assert_eq!(trend_saving, report.yearly.saving);

    assert_eq!(yearly(&snapshot, 2024).len(), 6);
    assert_eq!(report.yearly.expense, 4150.0);
}

#[test]
fn saving_and_savings_spellings_aggregate_identically() {
    use insights_core::domain::RawRecord;

    let canonical = RawRecord::new("Saving", 200.0, "Emergency Fund", "2024-01-15");
    let legacy = RawRecord::new("Savings", 200.0, "Emergency Fund", "2024-01-15");

    let a = Transaction::from_raw(&canonical).expect("canonical spelling parses");
    let b = Transaction::from_raw(&legacy).expect("legacy spelling parses");
    assert_eq!(a.kind, b.kind);

    let report_a = build_report(
        &[a],
        &SetupData::default(),
        Period::new(2024, 0),
        &InsightsConfig::default(),
    );
    let report_b = build_report(
        &[b],
        &SetupData::default(),
        Period::new(2024, 0),
        &InsightsConfig::default(),
    );
    assert_eq!(report_a.monthly.saving, report_b.monthly.saving);
    assert_eq!(report_a.monthly_saving_breakdown, report_b.monthly_saving_breakdown);
    assert_eq!(report_a.health, report_b.health);
}

#[test]
fn top_categories_come_from_the_year_sorted_and_capped() {
    let pairs = [
        ("A", 100.0),
        ("B", 300.0),
        ("C", 50.0),
        ("D", 300.0),
        ("E", 10.0),
        ("F", 20.0),
    ];
    let snapshot: Vec<Transaction> = pairs
        .iter()
        .enumerate()
        .map(|(i, (name, amount))| {
            txn(
                TransactionKind::Expense,
                *amount,
                name,
                (2024, (i + 1) as u32, 3),
            )
        })
        .collect();

    let report = build_report(
        &snapshot,
        &SetupData::default(),
        Period::new(2024, 0),
        &InsightsConfig::default(),
    );
    let names: Vec<&str> = report
        .top_expense_categories
        .iter()
        .map(|slice| slice.name.as_str())
        .collect();
    assert_eq!(names, vec!["B", "D", "A", "C", "F"]);
}

#[test]
fn breakdown_colors_follow_the_registry() {
    let mut setup = SetupData::default();
    setup.expense_categories.push(CategoryEntry::new("Rent", "#FF9800"));

    let report = build_report(
        &january_snapshot(),
        &setup,
        Period::new(2024, 0),
        &InsightsConfig::default(),
    );
    assert_eq!(report.monthly_expense_breakdown.len(), 1);
    assert_eq!(report.monthly_expense_breakdown[0].color, "#FF9800");
    // Saving category is unregistered and falls back.
    assert_eq!(
        report.monthly_saving_breakdown[0].color,
        insights_core::domain::DEFAULT_CATEGORY_COLOR
    );
}

#[test]
fn report_serializes_for_presenters() {
    let report = build_report(
        &january_snapshot(),
        &SetupData::default(),
        Period::new(2024, 0),
        &InsightsConfig::default(),
    );
    let json = serde_json::to_string(&report).expect("report serializes");
    assert!(json.contains("\"trend\""));
    assert!(json.contains("\"suggestions\""));
}
