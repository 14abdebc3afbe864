// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Exit interviews for separated employees.

use hr_fixtures_domain::serde_formats::iso_date;
use hr_fixtures_domain::{EmployeeId, EmploymentStatus, ExitReasonCategory, days_between};
use serde::Serialize;
use time::Date;
use tracing::{info, warn};

use crate::catalog::Catalog;
use crate::error::GenerationError;
use crate::numbers::round1;
use crate::random::RandomStream;
use crate::roster::Roster;
use crate::table::Record;

const DAYS_PER_YEAR: f64 = 365.25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RehireEligible {
    Yes,
    No,
}

impl RehireEligible {
    const WEIGHTED: [(Self, u32); 2] = [(Self::Yes, 3), (Self::No, 1)];
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExitInterview {
    pub exit_interview_id: String,
    pub employee_id: EmployeeId,
    #[serde(serialize_with = "iso_date::serialize")]
    pub interview_date: Date,
    #[serde(serialize_with = "iso_date::serialize")]
    pub exit_date: Date,
    pub tenure_years: f64,
    pub primary_reason_category: ExitReasonCategory,
    pub primary_reason_detail: &'static str,
    pub secondary_reason: &'static str,
    pub would_recommend_company: f64,
    pub overall_satisfaction: f64,
    pub qualitative_feedback: String,
    pub improvement_suggestion: &'static str,
    pub rehire_eligible: RehireEligible,
}

impl Record for ExitInterview {
    const TABLE: &'static str = "16_exit_interview";
    const COLUMNS: &'static [&'static str] = &[
        "exit_interview_id",
        "employee_id",
        "interview_date",
        "exit_date",
        "tenure_years",
        "primary_reason_category",
        "primary_reason_detail",
        "secondary_reason",
        "would_recommend_company",
        "overall_satisfaction",
        "qualitative_feedback",
        "improvement_suggestion",
        "rehire_eligible",
    ];
}

/// Interviews every separated employee shortly before their exit date.
///
/// # Errors
///
/// Returns an error if a draw, template or date computation fails.
pub fn build_exit_interviews(
    roster: &Roster,
    catalog: &Catalog,
    rng: &mut RandomStream,
) -> Result<Vec<ExitInterview>, GenerationError> {
    let mut rows: Vec<ExitInterview> = Vec::new();

    for employee in roster
        .employees()
        .iter()
        .filter(|employee| employee.status == EmploymentStatus::Separated)
    {
        let Some(exit_date) = employee.exit_date else {
            warn!(employee_id = %employee.employee_id, "Separated employee has no exit date");
            continue;
        };
        let interview_date: Date = rng.date_after(exit_date, -7, -1)?.max(employee.hire_date);

        let primary: ExitReasonCategory =
            *rng.pick("exit_reason_categories", &ExitReasonCategory::ALL)?;
        let primary_reason_detail: &'static str = *rng.pick("exit_reasons", primary.details())?;
        let others: Vec<ExitReasonCategory> = ExitReasonCategory::ALL
            .into_iter()
            .filter(|category| *category != primary)
            .collect();
        let secondary: ExitReasonCategory = *rng.pick("exit_reason_categories", &others)?;
        let secondary_reason: &'static str = *rng.pick("exit_reasons", secondary.details())?;

        let (low, high) = primary.recommendation_bucket().range();
        let would_recommend_company: f64 = round1(rng.uniform(low, high));
        let overall_satisfaction: f64 = round1(rng.uniform(2.0, 4.5));

        let bindings: [(&str, &str); 2] = [
            ("primary", primary_reason_detail),
            ("secondary", secondary_reason),
        ];
        let qualitative_feedback: String = catalog
            .expander()
            .with_bindings(&bindings)
            .expand_any("exit_feedback", &catalog.narratives.exit_feedback, rng)?;
        let rehire_eligible: RehireEligible =
            *rng.weighted("rehire_eligible", &RehireEligible::WEIGHTED)?;

        #[allow(clippy::cast_precision_loss)]
        let tenure_days: f64 = days_between(employee.hire_date, exit_date) as f64;

        rows.push(ExitInterview {
            exit_interview_id: format!("EXIT{:04}", rows.len() + 1),
            employee_id: employee.employee_id.clone(),
            interview_date,
            exit_date,
            tenure_years: round1(tenure_days / DAYS_PER_YEAR),
            primary_reason_category: primary,
            primary_reason_detail,
            secondary_reason,
            would_recommend_company,
            overall_satisfaction,
            qualitative_feedback,
            improvement_suggestion: primary.improvement_suggestion(),
            rehire_eligible,
        });
    }

    info!(rows = rows.len(), "Built exit interviews");
    Ok(rows)
}
