// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Team-culture survey.
//!
//! Each organization unit is assigned one culture tier up front. Every
//! answer from the unit's members is drawn around the tier's mean, so
//! units read consistently across years.

use std::collections::HashMap;

use hr_fixtures_domain::serde_formats::iso_date;
use hr_fixtures_domain::{CultureTier, EmployeeId, OrgId, OrgUnit, trailing_years};
use serde::Serialize;
use time::Date;
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::error::GenerationError;
use crate::numbers::{mean, round1};
use crate::random::RandomStream;
use crate::roster::Roster;
use crate::table::Record;

const SURVEY_YEARS: i32 = 2;
const QUESTION_COUNT: usize = 7;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CultureSurveyResponse {
    pub survey_id: String,
    pub employee_id: EmployeeId,
    pub org_id: OrgId,
    pub org_name: String,
    pub division_name: String,
    pub survey_year: i32,
    #[serde(serialize_with = "iso_date::serialize")]
    pub survey_date: Date,
    pub q_psychological_safety: f64,
    pub q_trust_in_leadership: f64,
    pub q_collaboration: f64,
    pub q_innovation_encouragement: f64,
    pub q_work_life_balance: f64,
    pub q_recognition: f64,
    pub q_fairness: f64,
    pub overall_team_satisfaction: f64,
    pub qualitative_comment: String,
    pub would_recommend_team: f64,
}

impl Record for CultureSurveyResponse {
    const TABLE: &'static str = "17_team_culture_survey";
    const COLUMNS: &'static [&'static str] = &[
        "survey_id",
        "employee_id",
        "org_id",
        "org_name",
        "division_name",
        "survey_year",
        "survey_date",
        "q_psychological_safety",
        "q_trust_in_leadership",
        "q_collaboration",
        "q_innovation_encouragement",
        "q_work_life_balance",
        "q_recognition",
        "q_fairness",
        "overall_team_satisfaction",
        "qualitative_comment",
        "would_recommend_team",
    ];
}

/// One answer on the 1-5 scale around the tier's mean.
pub(crate) fn culture_answer(tier: CultureTier, rng: &mut RandomStream) -> f64 {
    round1(rng.clipped_normal(tier.mean(), tier.std_dev(), 1.0, 5.0))
}

fn assign_tiers(
    org_units: &[OrgUnit],
    rng: &mut RandomStream,
) -> Result<HashMap<OrgId, CultureTier>, GenerationError> {
    let mut tiers: HashMap<OrgId, CultureTier> = HashMap::with_capacity(org_units.len());
    for unit in org_units {
        let tier: CultureTier = *rng.weighted("culture_tiers", &CultureTier::WEIGHTED)?;
        tiers.insert(unit.org_id.clone(), tier);
    }
    Ok(tiers)
}

/// Surveys active employees for the two most recent years.
///
/// # Errors
///
/// Returns an error if a draw, template or date computation fails.
pub fn build_culture_survey(
    roster: &Roster,
    org_units: &[OrgUnit],
    catalog: &Catalog,
    as_of: Date,
    rng: &mut RandomStream,
) -> Result<Vec<CultureSurveyResponse>, GenerationError> {
    let tiers: HashMap<OrgId, CultureTier> = assign_tiers(org_units, rng)?;
    let expander = catalog.expander();
    let mut rows: Vec<CultureSurveyResponse> = Vec::new();

    for employee in roster.active() {
        let tier: CultureTier = tiers.get(&employee.org_id).copied().unwrap_or_else(|| {
            debug!(org_id = %employee.org_id, "Unit without a culture tier, using average");
            CultureTier::Average
        });

        for survey_year in trailing_years(as_of, SURVEY_YEARS) {
            if survey_year < employee.hire_date.year() {
                continue;
            }
            let survey_date: Date = rng.date_in_year(survey_year, 10, 11)?;
            if survey_date < employee.hire_date || survey_date > as_of {
                continue;
            }

            let answers: [f64; QUESTION_COUNT] =
                std::array::from_fn(|_| culture_answer(tier, rng));
            let qualitative_comment: String =
                expander.expand_any("culture_comments", catalog.culture_comments(tier)?, rng)?;
            let [
                q_psychological_safety,
                q_trust_in_leadership,
                q_collaboration,
                q_innovation_encouragement,
                q_work_life_balance,
                q_recognition,
                q_fairness,
            ] = answers;

            rows.push(CultureSurveyResponse {
                survey_id: format!("TCULTURE{:05}", rows.len() + 1),
                employee_id: employee.employee_id.clone(),
                org_id: employee.org_id.clone(),
                org_name: employee.org_name.clone(),
                division_name: employee.division_name.clone(),
                survey_year,
                survey_date,
                q_psychological_safety,
                q_trust_in_leadership,
                q_collaboration,
                q_innovation_encouragement,
                q_work_life_balance,
                q_recognition,
                q_fairness,
                overall_team_satisfaction: round1(mean(&answers).unwrap_or_default()),
                qualitative_comment,
                would_recommend_team: culture_answer(tier, rng),
            });
        }
    }

    info!(
        units = tiers.len(),
        rows = rows.len(),
        "Built team culture survey"
    );
    Ok(rows)
}
