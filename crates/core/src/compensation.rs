// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Yearly compensation history.
//!
//! ## Invariants
//!
//! - `total_compensation = base_salary + annual_bonus_amount`
//! - The bonus is at most 30% of the base salary
//! - The effective date never precedes the hire date

use hr_fixtures_domain::serde_formats::iso_date;
use hr_fixtures_domain::{EmployeeId, JobTitle, year_start};
use serde::Serialize;
use time::Date;
use tracing::info;

use crate::career::Careers;
use crate::error::GenerationError;
use crate::numbers::scaled_amount;
use crate::random::RandomStream;
use crate::roster::Roster;
use crate::table::Record;

pub const MAX_BONUS_RATE: f64 = 0.30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompensationRecord {
    pub compensation_id: String,
    pub employee_id: EmployeeId,
    #[serde(serialize_with = "iso_date::serialize")]
    pub effective_date: Date,
    pub base_salary: u64,
    pub annual_bonus_amount: u64,
    pub total_compensation: u64,
    pub currency: &'static str,
}

impl Record for CompensationRecord {
    const TABLE: &'static str = "23_compensation_history";
    const COLUMNS: &'static [&'static str] = &[
        "compensation_id",
        "employee_id",
        "effective_date",
        "base_salary",
        "annual_bonus_amount",
        "total_compensation",
        "currency",
    ];
}

/// Draws one salary row per active employee per year of employment.
///
/// The base salary comes from the band of the title held on the
/// effective date, so promotions show up as raises.
///
/// # Errors
///
/// Returns an error if a date computation fails.
pub fn build_compensation(
    roster: &Roster,
    careers: &Careers,
    as_of: Date,
    rng: &mut RandomStream,
) -> Result<Vec<CompensationRecord>, GenerationError> {
    let mut rows: Vec<CompensationRecord> = Vec::new();

    for employee in roster.active() {
        for year in employee.hire_date.year()..=as_of.year() {
            let effective_date: Date = year_start(year)?.max(employee.hire_date);
            let title: JobTitle = careers.title_at(employee, effective_date);
            let (low, high) = title.salary_band();
            let base_salary: u64 = rng
                .int(
                    i64::try_from(low).unwrap_or(i64::MAX),
                    i64::try_from(high).unwrap_or(i64::MAX),
                )
                .unsigned_abs();
            let bonus_rate: f64 = rng.clipped_normal(0.12, 0.06, 0.0, MAX_BONUS_RATE);
            let annual_bonus_amount: u64 = scaled_amount(base_salary, bonus_rate);

            rows.push(CompensationRecord {
                compensation_id: format!("COMP{:04}", rows.len() + 1),
                employee_id: employee.employee_id.clone(),
                effective_date,
                base_salary,
                annual_bonus_amount,
                total_compensation: base_salary + annual_bonus_amount,
                currency: "KRW",
            });
        }
    }

    info!(rows = rows.len(), "Built compensation history");
    Ok(rows)
}
