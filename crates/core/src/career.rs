// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Job-history promotion trails.
//!
//! ## Invariants
//!
//! - Entries of one employee are contiguous and strictly increasing in start date
//! - The first entry starts on the hire date; only the last may be open
//! - A separated employee's last entry closes at the exit date

use std::collections::HashMap;
use std::ops::Range;

use hr_fixtures_domain::serde_formats::iso_date;
use hr_fixtures_domain::{
    Employee, EmployeeId, EmploymentStatus, JobTitle, OrgId, days_between, shift_days,
};
use serde::Serialize;
use time::Date;
use tracing::info;

use crate::error::GenerationError;
use crate::random::RandomStream;
use crate::roster::Roster;
use crate::table::Record;

/// How an entry came about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ChangeType {
    #[serde(rename = "신규입사")]
    Hire,
    #[serde(rename = "승진")]
    Promotion,
}

/// A title held over a date interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobHistoryEntry {
    pub history_id: String,
    pub employee_id: EmployeeId,
    #[serde(serialize_with = "iso_date::serialize")]
    pub start_date: Date,
    #[serde(serialize_with = "iso_date::option::serialize")]
    pub end_date: Option<Date>,
    pub org_id: OrgId,
    pub job_title: JobTitle,
    pub change_type: ChangeType,
}

impl Record for JobHistoryEntry {
    const TABLE: &'static str = "04_job_history";
    const COLUMNS: &'static [&'static str] = &[
        "history_id",
        "employee_id",
        "start_date",
        "end_date",
        "org_id",
        "job_title",
        "change_type",
    ];
}

/// Every employee's job history with a per-employee index.
#[derive(Debug, Clone, Default)]
pub struct Careers {
    entries: Vec<JobHistoryEntry>,
    spans: HashMap<EmployeeId, Range<usize>>,
}

impl Careers {
    /// All entries in roster order.
    #[must_use]
    pub fn entries(&self) -> &[JobHistoryEntry] {
        &self.entries
    }

    /// One employee's entries in date order.
    #[must_use]
    pub fn history_of(&self, employee_id: &EmployeeId) -> &[JobHistoryEntry] {
        self.spans
            .get(employee_id)
            .and_then(|span| self.entries.get(span.clone()))
            .unwrap_or_default()
    }

    /// Title held on `date`.
    ///
    /// Dates before the hire date resolve to the starting title. An
    /// employee without history resolves to the current title.
    #[must_use]
    pub fn title_at(&self, employee: &Employee, date: Date) -> JobTitle {
        let history: &[JobHistoryEntry] = self.history_of(&employee.employee_id);
        history
            .iter()
            .rev()
            .find(|entry| entry.start_date <= date)
            .or_else(|| history.first())
            .map_or(employee.job_title, |entry| entry.job_title)
    }

    fn push(
        &mut self,
        employee: &Employee,
        start_date: Date,
        job_title: JobTitle,
        change_type: ChangeType,
    ) {
        self.entries.push(JobHistoryEntry {
            history_id: format!("HIST{:04}", self.entries.len() + 1),
            employee_id: employee.employee_id.clone(),
            start_date,
            end_date: None,
            org_id: employee.org_id.clone(),
            job_title,
            change_type,
        });
    }

    fn close_last(&mut self, end_date: Date) {
        if let Some(last) = self.entries.last_mut() {
            last.end_date = Some(end_date);
        }
    }
}

/// Builds promotion trails for every employee.
///
/// # Errors
///
/// Returns an error if date arithmetic overflows or a draw fails.
pub fn simulate_careers(
    roster: &Roster,
    as_of: Date,
    rng: &mut RandomStream,
) -> Result<Careers, GenerationError> {
    let mut careers: Careers = Careers::default();

    for employee in roster.employees() {
        let first: usize = careers.entries.len();
        let initial: JobTitle =
            *rng.pick("initial_titles", employee.job_title.initial_title_choices())?;
        careers.push(employee, employee.hire_date, initial, ChangeType::Hire);

        let path: Vec<JobTitle> = (initial.level() + 1..=employee.job_title.level())
            .filter_map(JobTitle::from_level)
            .collect();
        if !path.is_empty() {
            let tenure_days: i64 = days_between(employee.hire_date, employee.tenure_end(as_of));
            let steps: i64 = i64::try_from(path.len()).unwrap_or(i64::MAX);
            let mut previous_start: Date = employee.hire_date;

            for (step, title) in (1_i64..).zip(path) {
                let promoted_on: Date =
                    shift_days(employee.hire_date, step * tenure_days.max(0) / steps)?;
                if promoted_on > as_of || promoted_on <= previous_start {
                    break;
                }
                careers.close_last(shift_days(promoted_on, -1)?);
                careers.push(employee, promoted_on, title, ChangeType::Promotion);
                previous_start = promoted_on;
            }
        }

        if let (EmploymentStatus::Separated, Some(exit_date)) =
            (employee.status, employee.exit_date)
        {
            careers.close_last(exit_date);
        }

        careers
            .spans
            .insert(employee.employee_id.clone(), first..careers.entries.len());
    }

    info!(rows = careers.entries.len(), "Built job history");
    Ok(careers)
}
