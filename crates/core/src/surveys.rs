// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Skill assessment, leadership 360 and engagement survey.
//!
//! All three are rating tables on a 1-5 scale with one decimal.

use hr_fixtures_domain::serde_formats::iso_date;
use hr_fixtures_domain::{DomainError, EmployeeId, trailing_years};
use serde::Serialize;
use time::{Date, Month};
use tracing::info;

use crate::catalog::Catalog;
use crate::error::GenerationError;
use crate::numbers::round1;
use crate::random::RandomStream;
use crate::roster::Roster;
use crate::table::Record;

/// Skills rated in one campaign, taken in catalog order.
pub const SKILL_CAMPAIGN_SIZE: usize = 8;
const SURVEY_YEARS: i32 = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillAssessment {
    pub assessment_id: String,
    pub employee_id: EmployeeId,
    #[serde(serialize_with = "iso_date::serialize")]
    pub assessment_date: Date,
    pub metric_code: String,
    pub self_rating: f64,
    pub manager_rating: f64,
    pub peer_rating_avg: f64,
}

impl Record for SkillAssessment {
    const TABLE: &'static str = "20_skill_assessment";
    const COLUMNS: &'static [&'static str] = &[
        "assessment_id",
        "employee_id",
        "assessment_date",
        "metric_code",
        "self_rating",
        "manager_rating",
        "peer_rating_avg",
    ];
}

/// Who rated the leader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RaterRelationship {
    Boss,
    #[serde(rename = "Direct Report")]
    DirectReport,
    Peer,
}

impl RaterRelationship {
    const ALL: [Self; 3] = [Self::Boss, Self::DirectReport, Self::Peer];

    /// Draws a score with the rater group's leniency.
    fn score(self, rng: &mut RandomStream) -> f64 {
        let value: f64 = match self {
            Self::Boss => rng.clipped_normal(3.7, 0.5, 2.0, 5.0),
            Self::DirectReport => rng.clipped_normal(3.5, 0.6, 1.5, 5.0),
            Self::Peer => rng.clipped_normal(3.6, 0.5, 2.0, 5.0),
        };
        round1(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadershipReview {
    pub review_id: String,
    pub leader_employee_id: EmployeeId,
    pub review_year: i32,
    pub rater_relationship: RaterRelationship,
    pub metric_code: String,
    pub score: f64,
}

impl Record for LeadershipReview {
    const TABLE: &'static str = "21_leadership_360_review";
    const COLUMNS: &'static [&'static str] = &[
        "review_id",
        "leader_employee_id",
        "review_year",
        "rater_relationship",
        "metric_code",
        "score",
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngagementSurvey {
    pub survey_id: String,
    pub employee_id: EmployeeId,
    pub survey_year: i32,
    pub q_job_satisfaction: f64,
    pub q_manager_relationship: f64,
    pub q_turnover_intention: f64,
    pub q_work_life_balance: f64,
    pub q_growth_opportunity: f64,
}

impl Record for EngagementSurvey {
    const TABLE: &'static str = "22_engagement_survey";
    const COLUMNS: &'static [&'static str] = &[
        "survey_id",
        "employee_id",
        "survey_year",
        "q_job_satisfaction",
        "q_manager_relationship",
        "q_turnover_intention",
        "q_work_life_balance",
        "q_growth_opportunity",
    ];
}

fn rating(rng: &mut RandomStream, mean: f64, std_dev: f64) -> f64 {
    round1(rng.clipped_normal(mean, std_dev, 1.0, 5.0))
}

/// The skill campaign runs on November 10 of the year before `as_of`.
///
/// # Errors
///
/// Returns an error if the year is out of range.
pub fn skill_campaign_date(as_of: Date) -> Result<Date, DomainError> {
    Ok(Date::from_calendar_date(
        as_of.year() - 1,
        Month::November,
        10,
    )?)
}

/// Rates the campaign skills for active employees hired by the campaign.
///
/// # Errors
///
/// Returns an error if the campaign date cannot be built.
pub fn build_skill_assessments(
    roster: &Roster,
    catalog: &Catalog,
    as_of: Date,
    rng: &mut RandomStream,
) -> Result<Vec<SkillAssessment>, GenerationError> {
    let assessment_date: Date = skill_campaign_date(as_of)?;
    let skills: Vec<&str> = catalog
        .skill_codes()
        .into_iter()
        .take(SKILL_CAMPAIGN_SIZE)
        .collect();
    let mut rows: Vec<SkillAssessment> = Vec::new();

    for employee in roster
        .active()
        .filter(|employee| employee.hire_date <= assessment_date)
    {
        for code in &skills {
            rows.push(SkillAssessment {
                assessment_id: format!("SA{:04}", rows.len() + 1),
                employee_id: employee.employee_id.clone(),
                assessment_date,
                metric_code: (*code).to_string(),
                self_rating: rating(rng, 3.7, 0.5),
                manager_rating: rating(rng, 3.5, 0.6),
                peer_rating_avg: rating(rng, 3.6, 0.5),
            });
        }
    }

    info!(rows = rows.len(), "Built skill assessment");
    Ok(rows)
}

/// Collects Boss, Direct Report and Peer scores for every leadership
/// metric, for each leader and each of the last three years they were
/// employed in.
#[must_use]
pub fn build_leadership_reviews(
    roster: &Roster,
    catalog: &Catalog,
    as_of: Date,
    rng: &mut RandomStream,
) -> Vec<LeadershipReview> {
    let metrics: Vec<&str> = catalog.leadership_codes();
    let mut rows: Vec<LeadershipReview> = Vec::new();

    for leader in roster
        .active()
        .filter(|employee| employee.job_title.is_leader())
    {
        for review_year in trailing_years(as_of, SURVEY_YEARS) {
            if review_year < leader.hire_date.year() {
                continue;
            }
            for code in &metrics {
                for relationship in RaterRelationship::ALL {
                    rows.push(LeadershipReview {
                        review_id: format!("L360_{:04}", rows.len() + 1),
                        leader_employee_id: leader.employee_id.clone(),
                        review_year,
                        rater_relationship: relationship,
                        metric_code: (*code).to_string(),
                        score: relationship.score(rng),
                    });
                }
            }
        }
    }

    info!(rows = rows.len(), "Built leadership 360 review");
    rows
}

/// Surveys active employees for each of the last three years they were
/// employed in.
#[must_use]
pub fn build_engagement_surveys(
    roster: &Roster,
    as_of: Date,
    rng: &mut RandomStream,
) -> Vec<EngagementSurvey> {
    let mut rows: Vec<EngagementSurvey> = Vec::new();

    for employee in roster.active() {
        for survey_year in trailing_years(as_of, SURVEY_YEARS) {
            if survey_year < employee.hire_date.year() {
                continue;
            }
            rows.push(EngagementSurvey {
                survey_id: format!("ENG{:04}", rows.len() + 1),
                employee_id: employee.employee_id.clone(),
                survey_year,
                q_job_satisfaction: rating(rng, 3.6, 0.7),
                q_manager_relationship: rating(rng, 3.7, 0.6),
                q_turnover_intention: rating(rng, 2.5, 0.8),
                q_work_life_balance: rating(rng, 3.4, 0.7),
                q_growth_opportunity: rating(rng, 3.5, 0.7),
            });
        }
    }

    info!(rows = rows.len(), "Built engagement survey");
    rows
}
