// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Rewards and disciplinary actions.

use hr_fixtures_domain::serde_formats::iso_date;
use hr_fixtures_domain::{Employee, EmployeeId};
use serde::Serialize;
use time::Date;
use tracing::info;

use crate::catalog::{Award, Catalog};
use crate::error::GenerationError;
use crate::random::RandomStream;
use crate::roster::Roster;
use crate::table::Record;

/// Reward counts per employee and their weights.
const REWARD_COUNTS: [(usize, u32); 4] = [(0, 70), (1, 25), (2, 3), (3, 2)];
const DISCIPLINE_SHARE: f64 = 0.05;
/// No action is dated within this many days of the hire date.
const PROBATION_DAYS: i64 = 180;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ActionType {
    #[serde(rename = "포상")]
    Reward,
    #[serde(rename = "징계")]
    Discipline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RecordImpact {
    Positive,
    Negative,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RewardOrDiscipline {
    pub record_id: String,
    pub employee_id: EmployeeId,
    pub record_type: ActionType,
    pub category: String,
    pub reason: String,
    #[serde(serialize_with = "iso_date::serialize")]
    pub action_date: Date,
    pub monetary_amount: i64,
    pub issued_by: Option<EmployeeId>,
    pub description: String,
    pub impact_on_record: RecordImpact,
}

impl Record for RewardOrDiscipline {
    const TABLE: &'static str = "18_rewards_and_discipline";
    const COLUMNS: &'static [&'static str] = &[
        "record_id",
        "employee_id",
        "record_type",
        "category",
        "reason",
        "action_date",
        "monetary_amount",
        "issued_by",
        "description",
        "impact_on_record",
    ];
}

impl RewardOrDiscipline {
    fn new(
        sequence: usize,
        employee: &Employee,
        record_type: ActionType,
        award: &Award,
        action_date: Date,
    ) -> Self {
        let (verb, impact_on_record): (&str, RecordImpact) = match record_type {
            ActionType::Reward => ("수상", RecordImpact::Positive),
            ActionType::Discipline => ("조치", RecordImpact::Negative),
        };
        Self {
            record_id: format!("RD{sequence:05}"),
            employee_id: employee.employee_id.clone(),
            record_type,
            category: award.category.clone(),
            reason: award.reason.clone(),
            action_date,
            monetary_amount: award.amount,
            issued_by: employee.manager_id.clone(),
            description: format!("{} {verb}: {}", award.category, award.reason),
            impact_on_record,
        }
    }
}

/// Action date after the probation window, or `None` when the tenure is
/// too short or the draw lands after `as_of`.
fn action_date(
    employee: &Employee,
    as_of: Date,
    rng: &mut RandomStream,
) -> Result<Option<Date>, GenerationError> {
    let max_days: i64 = i64::from(employee.tenure_years(as_of)) * 365;
    if max_days <= PROBATION_DAYS {
        return Ok(None);
    }
    let date: Date = rng.date_after(employee.hire_date, PROBATION_DAYS, max_days)?;
    Ok((date <= as_of).then_some(date))
}

/// Grants rewards and occasional disciplinary actions to active employees
/// with at least one year of tenure.
///
/// # Errors
///
/// Returns an error if a draw or date computation fails.
pub fn build_rewards_and_discipline(
    roster: &Roster,
    catalog: &Catalog,
    as_of: Date,
    rng: &mut RandomStream,
) -> Result<Vec<RewardOrDiscipline>, GenerationError> {
    let mut rows: Vec<RewardOrDiscipline> = Vec::new();

    for employee in roster
        .active()
        .filter(|employee| employee.tenure_years(as_of) >= 1)
    {
        let rewards: usize = *rng.weighted("reward_counts", &REWARD_COUNTS)?;
        for _ in 0..rewards {
            let Some(date) = action_date(employee, as_of, rng)? else {
                continue;
            };
            let award: &Award = rng.pick("rewards", &catalog.narratives.rewards)?;
            rows.push(RewardOrDiscipline::new(
                rows.len() + 1,
                employee,
                ActionType::Reward,
                award,
                date,
            ));
        }

        if !rng.chance(DISCIPLINE_SHARE) {
            continue;
        }
        if let Some(date) = action_date(employee, as_of, rng)? {
            let action: &Award = rng.pick("disciplines", &catalog.narratives.disciplines)?;
            rows.push(RewardOrDiscipline::new(
                rows.len() + 1,
                employee,
                ActionType::Discipline,
                action,
                date,
            ));
        }
    }

    info!(rows = rows.len(), "Built rewards and discipline");
    Ok(rows)
}
