// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Half-year performance reviews, continuous reviews and quarterly goals.
//!
//! ## Invariants
//!
//! - Every review period lies inside the employee's employment window
//! - A continuous review's manager evaluation follows its self evaluation
//! - Only completed goals carry a final achievement rate

use hr_fixtures_domain::serde_formats::{iso_date, iso_datetime};
use hr_fixtures_domain::{
    EmployeeId, Grade, PERFORMANCE_GRADE_POOL, Quarter, ReviewPeriod, SELF_RATING_POOL,
    completed_review_periods, manager_rating_weights, shift_days,
};
use serde::Serialize;
use time::{Date, PrimitiveDateTime};
use tracing::info;

use crate::catalog::{Catalog, GoalCategory};
use crate::error::GenerationError;
use crate::random::RandomStream;
use crate::roster::Roster;
use crate::table::Record;

/// Continuous reviews drawn per year of tenure, capped at this many years.
const CONTINUOUS_REVIEW_YEARS_CAP: i32 = 3;
const GOAL_TARGET_DAYS: i64 = 90;
const GOAL_COMPLETION_THRESHOLD: i64 = 80;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PerformanceReview {
    pub review_id: String,
    pub employee_id: EmployeeId,
    pub review_period: ReviewPeriod,
    pub final_grade: Grade,
    pub manager_comment_development: String,
}

impl Record for PerformanceReview {
    const TABLE: &'static str = "13_performance_review";
    const COLUMNS: &'static [&'static str] = &[
        "review_id",
        "employee_id",
        "review_period",
        "final_grade",
        "manager_comment_development",
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContinuousReview {
    pub review_id: String,
    pub employee_id: EmployeeId,
    pub review_type: String,
    #[serde(serialize_with = "iso_date::serialize")]
    pub evaluation_period_start: Date,
    #[serde(serialize_with = "iso_date::serialize")]
    pub evaluation_period_end: Date,
    #[serde(serialize_with = "iso_datetime::serialize")]
    pub self_evaluation_timestamp: PrimitiveDateTime,
    pub self_rating: Grade,
    pub self_comment: String,
    #[serde(serialize_with = "iso_datetime::serialize")]
    pub manager_evaluation_timestamp: PrimitiveDateTime,
    pub manager_rating: Grade,
    pub manager_comment: String,
    /// 1 when the self and manager ratings differ.
    pub rating_gap: u8,
    pub evaluation_status: &'static str,
}

impl Record for ContinuousReview {
    const TABLE: &'static str = "14_continuous_performance_review";
    const COLUMNS: &'static [&'static str] = &[
        "review_id",
        "employee_id",
        "review_type",
        "evaluation_period_start",
        "evaluation_period_end",
        "self_evaluation_timestamp",
        "self_rating",
        "self_comment",
        "manager_evaluation_timestamp",
        "manager_rating",
        "manager_comment",
        "rating_gap",
        "evaluation_status",
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GoalStatus {
    #[serde(rename = "완료")]
    Completed,
    #[serde(rename = "부분 달성")]
    PartiallyAchieved,
    #[serde(rename = "진행중")]
    InProgress,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Goal {
    pub goal_id: String,
    pub employee_id: EmployeeId,
    pub goal_type: String,
    pub goal_category: String,
    pub goal_description: String,
    pub target_period: Quarter,
    #[serde(serialize_with = "iso_date::serialize")]
    pub set_date: Date,
    #[serde(serialize_with = "iso_date::serialize")]
    pub target_completion_date: Date,
    pub progress_percentage: i64,
    pub status: GoalStatus,
    pub final_achievement_rate: Option<i64>,
    pub manager_id: Option<EmployeeId>,
}

impl Record for Goal {
    const TABLE: &'static str = "15_goal_management";
    const COLUMNS: &'static [&'static str] = &[
        "goal_id",
        "employee_id",
        "goal_type",
        "goal_category",
        "goal_description",
        "target_period",
        "set_date",
        "target_completion_date",
        "progress_percentage",
        "status",
        "final_achievement_rate",
        "manager_id",
    ];
}

/// Grades every active employee for each completed half-year they were
/// employed in.
///
/// # Errors
///
/// Returns an error if the review window is invalid or a template fails.
pub fn build_performance_reviews(
    roster: &Roster,
    catalog: &Catalog,
    review_start_year: i32,
    as_of: Date,
    rng: &mut RandomStream,
) -> Result<Vec<PerformanceReview>, GenerationError> {
    let periods: Vec<ReviewPeriod> = completed_review_periods(review_start_year, as_of)?;
    let expander = catalog.expander();
    let mut rows: Vec<PerformanceReview> = Vec::new();

    for employee in roster.active() {
        for period in &periods {
            if employee.hire_date > period.end()? {
                continue;
            }
            let final_grade: Grade = *rng.pick("performance_grades", &PERFORMANCE_GRADE_POOL)?;
            let manager_comment_development: String = expander.expand_any(
                "performance_comments",
                catalog.performance_comments(final_grade)?,
                rng,
            )?;
            rows.push(PerformanceReview {
                review_id: format!("REV{:04}", rows.len() + 1),
                employee_id: employee.employee_id.clone(),
                review_period: *period,
                final_grade,
                manager_comment_development,
            });
        }
    }

    info!(
        periods = periods.len(),
        rows = rows.len(),
        "Built performance reviews"
    );
    Ok(rows)
}

/// Builds ad-hoc reviews pairing a self evaluation with a later manager
/// evaluation.
///
/// # Errors
///
/// Returns an error if a draw, template or date computation fails.
pub fn build_continuous_reviews(
    roster: &Roster,
    catalog: &Catalog,
    as_of: Date,
    rng: &mut RandomStream,
) -> Result<Vec<ContinuousReview>, GenerationError> {
    let narratives = &catalog.narratives.continuous_review;
    let expander = catalog.expander();
    let mut rows: Vec<ContinuousReview> = Vec::new();

    for employee in roster.active() {
        let years: i64 =
            i64::from(employee.tenure_years(as_of).clamp(0, CONTINUOUS_REVIEW_YEARS_CAP));
        let planned: i64 = rng.int(3, 5) * years;

        for _ in 0..planned {
            let period_length: i64 = rng.int(30, 120);
            let period_end: Date = rng.date_after(employee.hire_date, 30, 1095)?;
            if period_end > as_of {
                continue;
            }
            let period_start: Date =
                shift_days(period_end, -period_length)?.max(employee.hire_date);

            let self_date: Date = rng.date_after(period_end, 1, 7)?;
            let self_evaluation_timestamp: PrimitiveDateTime = rng.time_on(self_date, 9, 18)?;
            let manager_date: Date = rng.date_after(self_date, 2, 10)?;
            let manager_evaluation_timestamp: PrimitiveDateTime =
                rng.time_on(manager_date, 9, 18)?;
            if manager_date > as_of {
                continue;
            }

            let self_rating: Grade = *rng.pick("self_ratings", &SELF_RATING_POOL)?;
            let manager_rating: Grade =
                *rng.weighted("manager_ratings", manager_rating_weights(self_rating))?;
            let review_type: String = rng
                .pick("continuous_review.review_types", &narratives.review_types)?
                .clone();
            let self_comment: String = expander.expand_any(
                "continuous_review.self_comments",
                &narratives.self_comments,
                rng,
            )?;
            let manager_comment: String = expander.expand_any(
                "continuous_review.manager_comments",
                catalog.manager_comments(manager_rating)?,
                rng,
            )?;

            rows.push(ContinuousReview {
                review_id: format!("CR{:05}", rows.len() + 1),
                employee_id: employee.employee_id.clone(),
                review_type,
                evaluation_period_start: period_start,
                evaluation_period_end: period_end,
                self_evaluation_timestamp,
                self_rating,
                self_comment,
                manager_evaluation_timestamp,
                manager_rating,
                manager_comment,
                rating_gap: u8::from(self_rating != manager_rating),
                evaluation_status: "완료",
            });
        }
    }

    info!(rows = rows.len(), "Built continuous reviews");
    Ok(rows)
}

/// Sets 2 to 4 goals per quarter for every active employee.
///
/// Quarters that ended before `as_of` are scored as finished; the running
/// quarter is still in progress.
///
/// # Errors
///
/// Returns an error if a draw, template or date computation fails.
pub fn build_goals(
    roster: &Roster,
    catalog: &Catalog,
    review_start_year: i32,
    as_of: Date,
    rng: &mut RandomStream,
) -> Result<Vec<Goal>, GenerationError> {
    let narratives = &catalog.narratives.goals;
    let expander = catalog.expander();
    let mut rows: Vec<Goal> = Vec::new();

    for employee in roster.active() {
        let first_year: i32 = review_start_year.max(employee.hire_date.year());
        for year in first_year..=as_of.year() {
            for quarter in Quarter::of_year(year) {
                let set_date: Date = rng.date_after(quarter.start()?, 0, 6)?;
                if set_date < employee.hire_date || set_date > as_of {
                    continue;
                }
                let finished: bool = quarter.end()? < as_of;

                for _ in 0..rng.count(2, 4) {
                    let category: &GoalCategory =
                        rng.pick("goals.categories", &narratives.categories)?;
                    let goal_type: String = rng.pick("goals.types", &narratives.types)?.clone();
                    let (progress_percentage, status): (i64, GoalStatus) = if finished {
                        let progress: i64 = rng.int(70, 100);
                        if progress >= GOAL_COMPLETION_THRESHOLD {
                            (progress, GoalStatus::Completed)
                        } else {
                            (progress, GoalStatus::PartiallyAchieved)
                        }
                    } else {
                        (rng.int(30, 80), GoalStatus::InProgress)
                    };
                    let goal_description: String =
                        expander.expand_any("goals.descriptions", &category.descriptions, rng)?;

                    rows.push(Goal {
                        goal_id: format!("GOAL{:05}", rows.len() + 1),
                        employee_id: employee.employee_id.clone(),
                        goal_type,
                        goal_category: category.name.clone(),
                        goal_description,
                        target_period: quarter,
                        set_date,
                        target_completion_date: shift_days(set_date, GOAL_TARGET_DAYS)?,
                        progress_percentage,
                        status,
                        final_achievement_rate: (status == GoalStatus::Completed)
                            .then_some(progress_percentage),
                        manager_id: employee.manager_id.clone(),
                    });
                }
            }
        }
    }

    info!(rows = rows.len(), "Built goal management");
    Ok(rows)
}
