// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Key-talent pool and succession plan.
//!
//! Both tables are derived from earlier stages: performance reviews,
//! rewards, leadership 360 scores and engagement surveys.
//!
//! ## Invariants
//!
//! - The pool only holds active, non-root employees with recent reviews
//! - Every successor is a succession-ready member of the pool and differs
//!   from the incumbent
//! - Successor ranks of one position run `1..=n`

use std::collections::{HashMap, HashSet};

use hr_fixtures_domain::serde_formats::iso_date;
use hr_fixtures_domain::{
    DevelopmentPriority, Employee, EmployeeId, Grade, JobTitle, Readiness, RetentionRisk,
    ReviewPeriod, SuccessionReady, TalentInputs, TalentTier,
    average_grade_score, classify_talent, completed_review_periods, shift_days, successor_titles,
    year_end, year_start,
};
use serde::Serialize;
use time::Date;
use tracing::info;

use crate::error::GenerationError;
use crate::numbers::{mean, round2};
use crate::random::RandomStream;
use crate::recognition::{ActionType, RewardOrDiscipline};
use crate::reviews::PerformanceReview;
use crate::roster::Roster;
use crate::surveys::{EngagementSurvey, LeadershipReview, RaterRelationship};
use crate::table::Record;

/// Review periods, counting back from the latest, that feed the pool.
const RECENT_PERIODS: usize = 3;
/// Fewer in-scope candidates than this widens the search to the division.
const MIN_SCOPED_CANDIDATES: usize = 2;
const DIVISION_FALLBACK_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyTalentEntry {
    pub talent_id: String,
    pub employee_id: EmployeeId,
    #[serde(serialize_with = "iso_date::serialize")]
    pub identification_date: Date,
    pub talent_tier: TalentTier,
    pub avg_performance_score: f64,
    pub leadership_score: Option<f64>,
    pub rewards_count: usize,
    pub selection_reason: String,
    pub retention_risk: RetentionRisk,
    pub development_priority: DevelopmentPriority,
    pub succession_ready: SuccessionReady,
    #[serde(serialize_with = "iso_date::serialize")]
    pub review_date: Date,
}

impl Record for KeyTalentEntry {
    const TABLE: &'static str = "24_key_talent_pool";
    const COLUMNS: &'static [&'static str] = &[
        "talent_id",
        "employee_id",
        "identification_date",
        "talent_tier",
        "avg_performance_score",
        "leadership_score",
        "rewards_count",
        "selection_reason",
        "retention_risk",
        "development_priority",
        "succession_ready",
        "review_date",
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuccessionPlanEntry {
    pub succession_plan_id: String,
    pub critical_position: JobTitle,
    pub current_holder_id: EmployeeId,
    pub current_holder_name: String,
    pub org_name: String,
    pub division_name: String,
    pub successor_rank: usize,
    pub successor_id: EmployeeId,
    pub successor_name: String,
    pub successor_current_title: JobTitle,
    pub readiness_level: Readiness,
    pub development_needed: &'static str,
    pub is_key_talent: &'static str,
    pub position_risk_level: RetentionRisk,
    #[serde(serialize_with = "iso_date::serialize")]
    pub plan_date: Date,
    #[serde(serialize_with = "iso_date::serialize")]
    pub next_review_date: Date,
}

impl Record for SuccessionPlanEntry {
    const TABLE: &'static str = "25_succession_plan";
    const COLUMNS: &'static [&'static str] = &[
        "succession_plan_id",
        "critical_position",
        "current_holder_id",
        "current_holder_name",
        "org_name",
        "division_name",
        "successor_rank",
        "successor_id",
        "successor_name",
        "successor_current_title",
        "readiness_level",
        "development_needed",
        "is_key_talent",
        "position_risk_level",
        "plan_date",
        "next_review_date",
    ];
}

/// Earlier tables the talent layer reads.
#[derive(Debug, Clone, Copy)]
pub struct TalentSources<'a> {
    pub performance: &'a [PerformanceReview],
    pub rewards: &'a [RewardOrDiscipline],
    pub leadership: &'a [LeadershipReview],
    pub engagement: &'a [EngagementSurvey],
}

/// The most recent completed review periods, oldest first.
fn recent_periods(
    review_start_year: i32,
    as_of: Date,
) -> Result<Vec<ReviewPeriod>, GenerationError> {
    let mut periods: Vec<ReviewPeriod> = completed_review_periods(review_start_year, as_of)?;
    let skip: usize = periods.len().saturating_sub(RECENT_PERIODS);
    periods.drain(..skip);
    Ok(periods)
}

/// Classifies active, non-root employees into talent tiers.
///
/// # Errors
///
/// Returns an error if the review window is invalid.
pub fn build_key_talent(
    roster: &Roster,
    sources: TalentSources<'_>,
    review_start_year: i32,
    as_of: Date,
) -> Result<Vec<KeyTalentEntry>, GenerationError> {
    let periods: Vec<ReviewPeriod> = recent_periods(review_start_year, as_of)?;
    let Some(last_period) = periods.last() else {
        info!("No completed review period, key-talent pool is empty");
        return Ok(Vec::new());
    };
    let identification_date: Date = last_period.end()?;
    let review_date: Date = year_end(as_of.year())?;

    let mut grades: HashMap<&EmployeeId, Vec<Grade>> = HashMap::new();
    for review in sources
        .performance
        .iter()
        .filter(|review| periods.contains(&review.review_period))
    {
        grades
            .entry(&review.employee_id)
            .or_default()
            .push(review.final_grade);
    }

    let mut rewards: HashMap<&EmployeeId, usize> = HashMap::new();
    for row in sources
        .rewards
        .iter()
        .filter(|row| row.record_type == ActionType::Reward)
    {
        *rewards.entry(&row.employee_id).or_default() += 1;
    }

    let mut leadership: HashMap<&EmployeeId, Vec<f64>> = HashMap::new();
    for review in sources.leadership.iter().filter(|review| {
        review.review_year == as_of.year()
            && review.rater_relationship == RaterRelationship::DirectReport
    }) {
        leadership
            .entry(&review.leader_employee_id)
            .or_default()
            .push(review.score);
    }

    // Latest survey wins; surveys are emitted in year order per employee.
    let turnover: HashMap<&EmployeeId, f64> = sources
        .engagement
        .iter()
        .map(|survey| (&survey.employee_id, survey.q_turnover_intention))
        .collect();

    let mut rows: Vec<KeyTalentEntry> = Vec::new();
    for employee in roster.active().filter(|employee| !employee.is_root()) {
        let Some(avg_performance) = grades
            .get(&employee.employee_id)
            .and_then(|grades| average_grade_score(grades))
        else {
            continue;
        };
        let leadership_score: Option<f64> = if employee.job_title.has_leadership_score() {
            leadership
                .get(&employee.employee_id)
                .and_then(|scores| mean(scores))
        } else {
            None
        };
        let inputs: TalentInputs = TalentInputs {
            avg_performance,
            rewards_count: rewards.get(&employee.employee_id).copied().unwrap_or_default(),
            leadership_score,
            job_title: employee.job_title,
            tenure_years: employee.tenure_years(as_of),
        };
        let Some(classification) = classify_talent(&inputs) else {
            continue;
        };

        rows.push(KeyTalentEntry {
            talent_id: format!("TALENT{:04}", rows.len() + 1),
            employee_id: employee.employee_id.clone(),
            identification_date,
            talent_tier: classification.tier,
            avg_performance_score: round2(avg_performance),
            leadership_score: leadership_score.map(round2),
            rewards_count: inputs.rewards_count,
            selection_reason: classification.joined_reasons(),
            retention_risk: RetentionRisk::from_turnover_intention(
                turnover.get(&employee.employee_id).copied(),
            ),
            development_priority: classification.tier.development_priority(),
            succession_ready: classification.tier.succession_ready(),
            review_date,
        });
    }

    info!(rows = rows.len(), "Built key talent pool");
    Ok(rows)
}

/// In-scope successors for an incumbent, in roster order.
fn scoped_candidates<'a>(
    roster: &'a Roster,
    incumbent: &Employee,
    pool: &HashMap<&EmployeeId, &KeyTalentEntry>,
) -> Vec<&'a Employee> {
    let titles: &[JobTitle] = successor_titles(incumbent.job_title);
    let same_scope = |employee: &Employee| -> bool {
        match incumbent.job_title {
            JobTitle::DivisionHead => employee.division_name == incumbent.division_name,
            _ => employee.org_id == incumbent.org_id,
        }
    };

    let mut candidates: Vec<&Employee> = roster
        .employees()
        .iter()
        .filter(|employee| {
            employee.employee_id != incumbent.employee_id
                && pool.contains_key(&employee.employee_id)
                && titles.contains(&employee.job_title)
                && same_scope(*employee)
        })
        .collect();

    if candidates.len() < MIN_SCOPED_CANDIDATES {
        let taken: HashSet<&EmployeeId> = candidates
            .iter()
            .map(|employee| &employee.employee_id)
            .collect();
        let widened: Vec<&Employee> = roster
            .employees()
            .iter()
            .filter(|employee| {
                employee.division_name == incumbent.division_name
                    && !employee.is_root()
                    && employee.employee_id != incumbent.employee_id
                    && pool.contains_key(&employee.employee_id)
                    && !taken.contains(&employee.employee_id)
            })
            .take(DIVISION_FALLBACK_LIMIT)
            .collect();
        candidates.extend(widened);
    }
    candidates
}

/// Names up to three ranked successors for every active division head and
/// team lead.
///
/// # Errors
///
/// Returns an error if the plan dates cannot be computed.
pub fn build_succession_plan(
    roster: &Roster,
    key_talent: &[KeyTalentEntry],
    review_start_year: i32,
    as_of: Date,
    rng: &mut RandomStream,
) -> Result<Vec<SuccessionPlanEntry>, GenerationError> {
    let plan_date: Date = match recent_periods(review_start_year, as_of)?.last() {
        Some(period) => shift_days(period.end()?, 1)?,
        None => year_start(as_of.year())?,
    };
    let next_review_date: Date = year_start(as_of.year() + 1)?;
    let talent: HashMap<&EmployeeId, &KeyTalentEntry> = key_talent
        .iter()
        .map(|entry| (&entry.employee_id, entry))
        .collect();
    // Emerging talent is still developing and never named as a successor.
    let pool: HashMap<&EmployeeId, &KeyTalentEntry> = key_talent
        .iter()
        .filter(|entry| entry.succession_ready == SuccessionReady::Yes)
        .map(|entry| (&entry.employee_id, entry))
        .collect();

    let mut rows: Vec<SuccessionPlanEntry> = Vec::new();
    for incumbent in roster
        .active()
        .filter(|employee| employee.job_title.is_critical_position())
    {
        let candidates: Vec<&Employee> = scoped_candidates(roster, incumbent, &pool);
        let wanted: usize = rng.count(1, 3);
        let mut chosen: Vec<(&Employee, &KeyTalentEntry)> = rng
            .sample(&candidates, wanted.min(candidates.len()))
            .into_iter()
            .filter_map(|employee| {
                pool.get(&employee.employee_id)
                    .map(|entry| (*employee, *entry))
            })
            .collect();
        chosen.sort_by(|(left, left_entry), (right, right_entry)| {
            right_entry
                .avg_performance_score
                .total_cmp(&left_entry.avg_performance_score)
                .then_with(|| left.employee_id.cmp(&right.employee_id))
        });

        let position_risk_level: RetentionRisk = talent
            .get(&incumbent.employee_id)
            .map_or(RetentionRisk::High, |entry| entry.retention_risk);

        for (rank, (successor, entry)) in (1_usize..).zip(chosen) {
            let readiness_level: Readiness =
                Readiness::from_performance(entry.avg_performance_score);
            rows.push(SuccessionPlanEntry {
                succession_plan_id: format!("SUC{:04}", rows.len() + 1),
                critical_position: incumbent.job_title,
                current_holder_id: incumbent.employee_id.clone(),
                current_holder_name: incumbent.name.clone(),
                org_name: incumbent.org_name.clone(),
                division_name: incumbent.division_name.clone(),
                successor_rank: rank,
                successor_id: successor.employee_id.clone(),
                successor_name: successor.name.clone(),
                successor_current_title: successor.job_title,
                readiness_level,
                development_needed: readiness_level.development_needed(),
                is_key_talent: "Yes",
                position_risk_level,
                plan_date,
                next_review_date,
            });
        }
    }

    info!(rows = rows.len(), "Built succession plan");
    Ok(rows)
}
