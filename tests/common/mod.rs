#![allow(dead_code)]

use cashflow_core::domain::{Category, Transfer};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use uuid::Uuid;

/// Fixed categories so ids stay stable across test runs.
pub static SALARY: Lazy<Category> = Lazy::new(|| category(1, "Salary").with_hours_worked());
pub static GROCERIES: Lazy<Category> = Lazy::new(|| category(2, "Groceries"));
pub static RENT: Lazy<Category> = Lazy::new(|| category(3, "Rent"));
pub static GIFTS: Lazy<Category> = Lazy::new(|| category(4, "Gifts"));

fn category(seed: u128, name: &str) -> Category {
    let mut category = Category::new(name);
    category.id = Uuid::from_u128(seed);
    category
}

pub fn all_categories() -> Vec<Category> {
    vec![
        SALARY.clone(),
        GROCERIES.clone(),
        RENT.clone(),
        GIFTS.clone(),
    ]
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Salary paid twice in February, once in September, groceries in August.
pub fn sample_year_transfers() -> Vec<Transfer> {
    vec![
        Transfer::income(SALARY.id, 1_500, date(2025, 2, 3)).with_hours_worked(90),
        Transfer::income(SALARY.id, 3_000, date(2025, 2, 20)).with_hours_worked(100),
        Transfer::income(SALARY.id, 5_000, date(2025, 9, 10)),
        Transfer::expense(GROCERIES.id, 1_500, date(2025, 8, 12)),
    ]
}

/// Seven salary transfers spread over the first, third and fourth quarter.
pub fn quarterly_salary_transfers() -> Vec<Transfer> {
    vec![
        Transfer::income(SALARY.id, 2_000, date(2025, 1, 10)).with_hours_worked(40),
        Transfer::income(SALARY.id, 3_500, date(2025, 2, 10)).with_hours_worked(50),
        Transfer::income(SALARY.id, 4_000, date(2025, 3, 31)).with_hours_worked(50),
        Transfer::income(SALARY.id, 1_000, date(2025, 7, 1)),
        Transfer::income(SALARY.id, 2_000, date(2025, 9, 30)),
        Transfer::income(SALARY.id, 1_500, date(2025, 10, 5)).with_hours_worked(90),
        Transfer::income(SALARY.id, 3_000, date(2025, 12, 24)).with_hours_worked(100),
    ]
}

/// Deterministic pseudo-random transfers within 2024 across all fixture categories.
pub fn generated_transfers(count: usize) -> Vec<Transfer> {
    let categories = all_categories();
    let start = date(2024, 1, 1);
    let mut seed: u64 = 0x5eed;
    (0..count)
        .map(|_| {
            seed = seed
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            let category = &categories[(seed >> 33) as usize % categories.len()];
            let day = start + chrono::Days::new((seed >> 20) % 366);
            let value = ((seed >> 8) % 100_000) as i64;
            let transfer = Transfer::new(category.id, value, day, seed % 3 == 0);
            if seed % 5 == 0 {
                transfer.with_hours_worked((seed % 160) as u32)
            } else {
                transfer
            }
        })
        .collect()
}
