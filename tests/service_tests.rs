mod common;

use cashflow_core::{
    analysis::{Average, CategoryEntry, DateRange, Series},
    config::{Config, ConfigManager},
    core::{
        services::{AnalysisRequest, AnalysisService},
        time::FixedClock,
    },
    domain::{Category, Precision, Transfer},
};
use tempfile::tempdir;

use common::*;

fn expense_heavy_transfers() -> Vec<Transfer> {
    vec![
        Transfer::expense(RENT.id, 8_000, date(2025, 1, 1)),
        Transfer::expense(RENT.id, 8_000, date(2025, 2, 1)),
        Transfer::expense(GROCERIES.id, 1_200, date(2025, 1, 7)),
        Transfer::expense(GROCERIES.id, 900, date(2025, 2, 14)),
        Transfer::expense(GROCERIES.id, 300, date(2025, 2, 21)),
        Transfer::expense(GIFTS.id, 600, date(2025, 2, 3)),
        Transfer::expense(SALARY.id, 150, date(2025, 1, 30)),
        Transfer::income(SALARY.id, 4_000, date(2025, 1, 31)).with_hours_worked(160),
        Transfer::income(SALARY.id, 4_000, date(2025, 2, 28)).with_hours_worked(150),
    ]
}

fn two_month_request(limit: usize) -> AnalysisRequest {
    let range = DateRange::new(date(2025, 1, 1), date(2025, 2, 28)).expect("range");
    AnalysisRequest::new(range, Precision::Month, limit).expect("request")
}

#[test]
fn analyze_reports_span_totals() {
    let result = AnalysisService::analyze(
        &two_month_request(3),
        &expense_heavy_transfers(),
        &all_categories(),
    );

    assert_eq!(result.normalized_dates.len(), 2);
    assert_eq!(result.incomes.total_sum, 8_000);
    assert_eq!(result.incomes.total_avg_per_transfer, 4_000.0);
    assert_eq!(result.incomes.total_avg_per_normalized_date, 4_000.0);
    assert_eq!(result.expenses.total_sum, 19_150);
    assert_eq!(result.expenses.transfer_count(), 7);
    assert_eq!(result.balance(), 8_000 - 19_150);
}

#[test]
fn overview_groups_every_list_to_the_limit() {
    let overview = AnalysisService::overview(
        &two_month_request(3),
        &expense_heavy_transfers(),
        &all_categories(),
    )
    .expect("overview");

    let expenses = &overview.expenses;
    assert_eq!(expenses.totals_by_type.len(), 3);
    assert_eq!(expenses.totals_by_type[0], CategoryEntry::named(RENT.id, 16_000));
    assert_eq!(expenses.totals_by_type[1], CategoryEntry::named(GROCERIES.id, 2_400));
    assert_eq!(expenses.totals_by_type[2], CategoryEntry::Other { value: 750 });

    let total: i64 = expenses.totals_by_type.iter().map(|e| *e.value()).sum();
    assert_eq!(total, expenses.total_sum);

    assert_eq!(
        expenses.value_lines[2],
        CategoryEntry::Other {
            value: Series(vec![150, 600])
        }
    );
    assert_eq!(
        expenses.cumulated_lines[2],
        CategoryEntry::Other {
            value: Series(vec![150, 750])
        }
    );

    // rent 8000, gifts 600, groceries 800, salary 150 per transfer
    assert_eq!(
        expenses.averages_by_type[0],
        CategoryEntry::named(RENT.id, Average(8_000.0))
    );
    assert_eq!(
        expenses.averages_by_type[1],
        CategoryEntry::named(GROCERIES.id, Average(800.0))
    );
    assert_eq!(
        expenses.averages_by_type[2],
        CategoryEntry::Other {
            value: Average(375.0)
        }
    );

    assert_eq!(overview.labels, vec!["2025-01", "2025-02"]);
    assert_eq!(overview.balance, 8_000 - 19_150);
}

#[test]
fn overview_within_limit_has_no_other_row() {
    let categories: Vec<Category> = vec![SALARY.clone(), RENT.clone()];
    let overview =
        AnalysisService::overview(&two_month_request(4), &expense_heavy_transfers(), &categories)
            .expect("overview");

    // groceries and gifts are unknown to this category set and get their own rows
    assert_eq!(overview.expenses.totals_by_type.len(), 4);
    assert!(overview
        .expenses
        .totals_by_type
        .iter()
        .all(|entry| !entry.is_other()));
}

#[test]
fn request_from_saved_config_drives_precision_and_limit() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");
    let config = Config {
        default_precision: Precision::Quarter,
        top_n_limit: 2,
        ..Config::default()
    };
    manager.save(&config).expect("save config");

    let loaded = manager.load().expect("load config");
    let range = DateRange::new(date(2025, 1, 1), date(2025, 12, 31)).expect("range");
    let request = AnalysisRequest::from_config(&loaded, range).expect("request");
    let overview = AnalysisService::overview(
        &request,
        &quarterly_salary_transfers(),
        &all_categories(),
    )
    .expect("overview");

    assert_eq!(overview.precision, Precision::Quarter);
    assert_eq!(overview.normalized_dates.len(), 4);
    assert_eq!(overview.incomes.totals_by_type.len(), 2);
    assert_eq!(
        overview.incomes.totals_by_type[0],
        CategoryEntry::named(SALARY.id, 17_000)
    );
    assert_eq!(overview.incomes.totals_by_type[1], CategoryEntry::Other { value: 0 });
}

#[test]
fn widget_overview_covers_trailing_buckets() {
    let clock = FixedClock::on(date(2025, 10, 16));
    let config = Config {
        trailing_buckets: 12,
        ..Config::default()
    };
    let transfers = vec![
        Transfer::income(SALARY.id, 2_500, date(2024, 10, 31)),
        Transfer::income(SALARY.id, 2_500, date(2024, 11, 1)),
        Transfer::income(SALARY.id, 2_500, date(2025, 10, 15)),
    ];

    let overview =
        AnalysisService::widget_overview(&clock, &config, &transfers, &all_categories())
            .expect("widget overview");

    assert_eq!(overview.normalized_dates.len(), 12);
    assert_eq!(overview.normalized_dates[0], date(2024, 11, 1));
    assert_eq!(overview.incomes.total_sum, 5_000);
    assert_eq!(
        overview.incomes.totals_by_type.len(),
        config.compact_top_n_limit
    );
}

#[test]
fn overview_serializes_with_tagged_other_rows() {
    let overview = AnalysisService::overview(
        &two_month_request(2),
        &expense_heavy_transfers(),
        &all_categories(),
    )
    .expect("overview");

    let json = serde_json::to_value(&overview).expect("serialize overview");
    let rows = json["expenses"]["totals_by_type"]
        .as_array()
        .expect("rows");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["kind"], "named");
    assert_eq!(rows[1]["kind"], "other");
    assert_eq!(rows[1]["value"], 3_150);
}
