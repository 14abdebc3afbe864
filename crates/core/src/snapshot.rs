// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-employee yearly summary.
//!
//! Missing source data leaves the column empty rather than inventing a
//! default value. Snapshots are taken at year end, or at `as_of` for the
//! running year.

use std::collections::HashMap;

use hr_fixtures_domain::serde_formats::iso_date;
use hr_fixtures_domain::{EmployeeId, EmploymentStatus, Grade, JobTitle, trailing_years, year_end};
use serde::Serialize;
use time::Date;
use tracing::info;

use crate::career::Careers;
use crate::compensation::CompensationRecord;
use crate::error::GenerationError;
use crate::numbers::{mean, round2};
use crate::projects::ProjectMembership;
use crate::reviews::PerformanceReview;
use crate::roster::Roster;
use crate::surveys::SkillAssessment;
use crate::table::Record;

const SNAPSHOT_YEARS: i32 = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlySnapshot {
    pub snapshot_id: String,
    pub employee_id: EmployeeId,
    #[serde(serialize_with = "iso_date::serialize")]
    pub snapshot_date: Date,
    pub division_name: String,
    pub org_name: String,
    pub job_title: JobTitle,
    pub performance_grade: Option<Grade>,
    pub total_compensation: Option<u64>,
    pub key_skill_score_avg: Option<f64>,
    pub project_count: usize,
    pub employment_status: EmploymentStatus,
}

impl Record for YearlySnapshot {
    const TABLE: &'static str = "26_employee_yearly_snapshot";
    const COLUMNS: &'static [&'static str] = &[
        "snapshot_id",
        "employee_id",
        "snapshot_date",
        "division_name",
        "org_name",
        "job_title",
        "performance_grade",
        "total_compensation",
        "key_skill_score_avg",
        "project_count",
        "employment_status",
    ];
}

/// Tables the snapshot summarizes.
#[derive(Debug, Clone, Copy)]
pub struct SnapshotSources<'a> {
    pub performance: &'a [PerformanceReview],
    pub compensation: &'a [CompensationRecord],
    pub skills: &'a [SkillAssessment],
    pub projects: &'a [ProjectMembership],
}

/// Summarizes each active employee for each of the last three years they
/// were employed in.
///
/// # Errors
///
/// Returns an error if a year-end date cannot be built.
pub fn build_snapshots(
    roster: &Roster,
    careers: &Careers,
    sources: SnapshotSources<'_>,
    as_of: Date,
) -> Result<Vec<YearlySnapshot>, GenerationError> {
    let mut peer_ratings: HashMap<&EmployeeId, Vec<f64>> = HashMap::new();
    for row in sources.skills {
        peer_ratings
            .entry(&row.employee_id)
            .or_default()
            .push(row.peer_rating_avg);
    }

    // Later reviews of the same year overwrite earlier ones.
    let mut last_grades: HashMap<(&EmployeeId, i32), Grade> = HashMap::new();
    for review in sources.performance {
        last_grades.insert(
            (&review.employee_id, review.review_period.year),
            review.final_grade,
        );
    }
    let mut compensation: HashMap<(&EmployeeId, i32), u64> = HashMap::new();
    for row in sources.compensation {
        compensation
            .entry((&row.employee_id, row.effective_date.year()))
            .or_insert(row.total_compensation);
    }
    let mut project_counts: HashMap<(&EmployeeId, i32), usize> = HashMap::new();
    for row in sources.projects {
        *project_counts
            .entry((&row.employee_id, row.start_date.year()))
            .or_default() += 1;
    }

    let mut rows: Vec<YearlySnapshot> = Vec::new();
    for employee in roster.active() {
        let key_skill_score_avg: Option<f64> = peer_ratings
            .get(&employee.employee_id)
            .and_then(|ratings| mean(ratings))
            .map(round2);

        for year in trailing_years(as_of, SNAPSHOT_YEARS) {
            if year < employee.hire_date.year() {
                continue;
            }
            let snapshot_date: Date = year_end(year)?.min(as_of);
            let key: (&EmployeeId, i32) = (&employee.employee_id, year);

            rows.push(YearlySnapshot {
                snapshot_id: format!("SNAP{:04}", rows.len() + 1),
                employee_id: employee.employee_id.clone(),
                snapshot_date,
                division_name: employee.division_name.clone(),
                org_name: employee.org_name.clone(),
                job_title: careers.title_at(employee, snapshot_date),
                performance_grade: last_grades.get(&key).copied(),
                total_compensation: compensation.get(&key).copied(),
                key_skill_score_avg,
                project_count: project_counts.get(&key).copied().unwrap_or(0),
                employment_status: employee.status,
            });
        }
    }

    info!(rows = rows.len(), "Built yearly snapshot");
    Ok(rows)
}
