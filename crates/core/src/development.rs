// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Onboarding programs and training history.

use hr_fixtures_domain::serde_formats::iso_date;
use hr_fixtures_domain::{EmployeeId, shift_days};
use serde::Serialize;
use time::Date;
use tracing::info;

use crate::catalog::{Catalog, TrainingCourse};
use crate::error::GenerationError;
use crate::numbers::round1;
use crate::random::RandomStream;
use crate::roster::Roster;
use crate::table::Record;

/// Calendar years, counting the `as_of` year, whose hires get onboarding rows.
const ONBOARDING_WINDOW_YEARS: i32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OnboardingStatus {
    #[serde(rename = "완료")]
    Completed,
    #[serde(rename = "미완료")]
    Incomplete,
}

impl OnboardingStatus {
    const WEIGHTED: [(Self, u32); 2] = [(Self::Completed, 95), (Self::Incomplete, 5)];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TrainingStatus {
    #[serde(rename = "수료")]
    Passed,
    #[serde(rename = "미수료")]
    NotPassed,
}

impl TrainingStatus {
    const WEIGHTED: [(Self, u32); 2] = [(Self::Passed, 95), (Self::NotPassed, 5)];
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OnboardingRecord {
    pub onboarding_id: String,
    pub employee_id: EmployeeId,
    pub program_name: String,
    #[serde(serialize_with = "iso_date::serialize")]
    pub scheduled_date: Date,
    pub completion_status: OnboardingStatus,
    pub satisfaction_score: f64,
}

impl Record for OnboardingRecord {
    const TABLE: &'static str = "10_onboarding_program";
    const COLUMNS: &'static [&'static str] = &[
        "onboarding_id",
        "employee_id",
        "program_name",
        "scheduled_date",
        "completion_status",
        "satisfaction_score",
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingRecord {
    pub training_id: String,
    pub employee_id: EmployeeId,
    pub training_name: String,
    pub category: String,
    pub training_hours: u32,
    #[serde(serialize_with = "iso_date::serialize")]
    pub start_date: Date,
    #[serde(serialize_with = "iso_date::serialize")]
    pub completion_date: Date,
    pub completion_status: TrainingStatus,
    pub assessment_score: f64,
}

impl Record for TrainingRecord {
    const TABLE: &'static str = "11_training_history";
    const COLUMNS: &'static [&'static str] = &[
        "training_id",
        "employee_id",
        "training_name",
        "category",
        "training_hours",
        "start_date",
        "completion_date",
        "completion_status",
        "assessment_score",
    ];
}

/// Schedules the onboarding curriculum for recent hires.
///
/// Program `i` is scheduled `2 * i + 0..=3` days after the hire date.
///
/// # Errors
///
/// Returns an error if a draw or date computation fails.
pub fn build_onboarding(
    roster: &Roster,
    catalog: &Catalog,
    as_of: Date,
    rng: &mut RandomStream,
) -> Result<Vec<OnboardingRecord>, GenerationError> {
    let first_year: i32 = as_of.year() - ONBOARDING_WINDOW_YEARS + 1;
    let mut rows: Vec<OnboardingRecord> = Vec::new();

    for employee in roster
        .active()
        .filter(|employee| employee.hire_date.year() >= first_year)
    {
        for (step, program) in (0_i64..).zip(&catalog.narratives.onboarding_programs) {
            let scheduled_date: Date = rng.date_after(employee.hire_date, step * 2, step * 2 + 3)?;
            if scheduled_date > as_of {
                continue;
            }
            let completion_status: OnboardingStatus =
                *rng.weighted("onboarding_status", &OnboardingStatus::WEIGHTED)?;
            rows.push(OnboardingRecord {
                onboarding_id: format!("ONB{:04}", rows.len() + 1),
                employee_id: employee.employee_id.clone(),
                program_name: program.clone(),
                scheduled_date,
                completion_status,
                satisfaction_score: round1(rng.uniform(3.5, 5.0)),
            });
        }
    }

    info!(rows = rows.len(), "Built onboarding program");
    Ok(rows)
}

/// Assigns distinct training courses over each active employee's tenure.
///
/// # Errors
///
/// Returns an error if a draw or date computation fails.
pub fn build_training(
    roster: &Roster,
    catalog: &Catalog,
    as_of: Date,
    rng: &mut RandomStream,
) -> Result<Vec<TrainingRecord>, GenerationError> {
    let mut rows: Vec<TrainingRecord> = Vec::new();

    for employee in roster.active() {
        let tenure_years: i32 = employee.tenure_years(as_of);
        let wanted: usize = rng.count(2, 8);
        let allowed: usize = usize::try_from(tenure_years.saturating_mul(2)).unwrap_or_default();
        let courses: Vec<&TrainingCourse> =
            rng.sample(&catalog.narratives.training_courses, wanted.min(allowed));

        for course in courses {
            let start_date: Date =
                rng.date_after(employee.hire_date, 90, i64::from(tenure_years) * 365)?;
            if start_date > as_of {
                continue;
            }
            let completion_status: TrainingStatus =
                *rng.weighted("training_status", &TrainingStatus::WEIGHTED)?;
            rows.push(TrainingRecord {
                training_id: format!("TRN{:04}", rows.len() + 1),
                employee_id: employee.employee_id.clone(),
                training_name: course.name.clone(),
                category: course.category.clone(),
                training_hours: course.hours,
                start_date,
                completion_date: shift_days(start_date, i64::from(course.hours / 2))?,
                completion_status,
                assessment_score: round1(rng.uniform(70.0, 100.0)),
            });
        }
    }

    info!(rows = rows.len(), "Built training history");
    Ok(rows)
}
