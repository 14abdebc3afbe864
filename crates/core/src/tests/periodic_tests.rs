// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::{BTreeSet, HashMap, HashSet};

use hr_fixtures_domain::{
    CultureTier, Employee, EmployeeId, Grade, Half, JobTitle, ReviewPeriod, shift_days, year_end,
    year_start,
};
use time::Date;
use time::macros::date;

use crate::culture::culture_answer;
use crate::numbers::{mean, round1};
use crate::tests::helpers::{
    create_test_employee, default_as_of, default_dataset, employee_by_id,
};
use crate::{
    ActionType, Catalog, CultureSurveyResponse, Dataset, GoalStatus, MAX_BONUS_RATE,
    PerformanceReview, RandomStream, RecordImpact, Roster, SKILL_CAMPAIGN_SIZE,
    build_culture_survey, build_performance_reviews, skill_campaign_date,
};

fn active_ids(dataset: &Dataset) -> HashSet<&EmployeeId> {
    dataset
        .employees
        .iter()
        .filter(|employee| employee.is_active())
        .map(|employee| &employee.employee_id)
        .collect()
}

#[test]
fn test_active_only_tables_skip_separated_employees() {
    let dataset: &Dataset = default_dataset();
    let active: HashSet<&EmployeeId> = active_ids(dataset);

    let referenced = dataset
        .performance_reviews
        .iter()
        .map(|row| &row.employee_id)
        .chain(dataset.continuous_reviews.iter().map(|row| &row.employee_id))
        .chain(dataset.goals.iter().map(|row| &row.employee_id))
        .chain(dataset.training.iter().map(|row| &row.employee_id))
        .chain(dataset.onboarding.iter().map(|row| &row.employee_id))
        .chain(dataset.projects.iter().map(|row| &row.employee_id))
        .chain(dataset.culture_survey.iter().map(|row| &row.employee_id))
        .chain(dataset.rewards_and_discipline.iter().map(|row| &row.employee_id))
        .chain(dataset.meetings.iter().map(|row| &row.employee_id))
        .chain(dataset.skill_assessments.iter().map(|row| &row.employee_id))
        .chain(dataset.engagement_surveys.iter().map(|row| &row.employee_id))
        .chain(dataset.compensation.iter().map(|row| &row.employee_id))
        .chain(dataset.snapshots.iter().map(|row| &row.employee_id));

    for employee_id in referenced {
        assert!(active.contains(employee_id), "{employee_id} is not active");
    }
}

#[test]
fn test_exit_interviews_cover_exactly_the_separated_employees() {
    let dataset: &Dataset = default_dataset();
    let separated: BTreeSet<&EmployeeId> = dataset
        .employees
        .iter()
        .filter(|employee| !employee.is_active())
        .map(|employee| &employee.employee_id)
        .collect();
    let interviewed: BTreeSet<&EmployeeId> = dataset
        .exit_interviews
        .iter()
        .map(|row| &row.employee_id)
        .collect();

    assert_eq!(interviewed, separated);
    assert_eq!(dataset.exit_interviews.len(), separated.len());
    for row in &dataset.exit_interviews {
        let employee: &Employee = employee_by_id(dataset, &row.employee_id);
        assert_eq!(Some(row.exit_date), employee.exit_date);
        assert!(row.interview_date <= row.exit_date);
        assert!(row.interview_date >= employee.hire_date);
    }
}

#[test]
fn test_performance_reviews_fall_inside_employment() {
    let dataset: &Dataset = default_dataset();
    let as_of: Date = default_as_of();
    let mut seen: HashSet<(&EmployeeId, ReviewPeriod)> = HashSet::new();

    for row in &dataset.performance_reviews {
        let employee: &Employee = employee_by_id(dataset, &row.employee_id);
        let period_end: Date = row.review_period.end().unwrap();
        assert!(employee.hire_date <= period_end);
        assert!(period_end <= as_of);
        assert!(seen.insert((&row.employee_id, row.review_period)));
    }
}

#[test]
fn test_current_year_hire_is_reviewed_only_for_elapsed_periods() {
    let catalog: Catalog = Catalog::embedded().unwrap();
    let roster: Roster = Roster::new(vec![
        create_test_employee("EMP000", JobTitle::Ceo, None, date!(2010 - 01 - 01)),
        create_test_employee(
            "EMP001",
            JobTitle::Staff,
            Some("EMP000"),
            date!(2024 - 03 - 04),
        ),
        create_test_employee(
            "EMP002",
            JobTitle::Staff,
            Some("EMP000"),
            date!(2024 - 08 - 19),
        ),
    ]);
    let mut rng: RandomStream = RandomStream::seeded(5);

    let reviews: Vec<PerformanceReview> =
        build_performance_reviews(&roster, &catalog, 2022, date!(2024 - 12 - 15), &mut rng)
            .unwrap();

    let periods_of = |id: &str| -> Vec<ReviewPeriod> {
        reviews
            .iter()
            .filter(|row| row.employee_id == EmployeeId::new(id))
            .map(|row| row.review_period)
            .collect()
    };
    assert_eq!(
        periods_of("EMP001"),
        vec![ReviewPeriod {
            year: 2024,
            half: Half::H1
        }]
    );
    assert!(periods_of("EMP002").is_empty());
    assert_eq!(periods_of("EMP000").len(), 5);
}

#[test]
fn test_continuous_reviews_are_ordered() {
    let dataset: &Dataset = default_dataset();
    let as_of: Date = default_as_of();
    for row in &dataset.continuous_reviews {
        let employee: &Employee = employee_by_id(dataset, &row.employee_id);
        assert!(row.evaluation_period_start >= employee.hire_date);
        assert!(row.evaluation_period_start <= row.evaluation_period_end);
        assert!(row.self_evaluation_timestamp.date() > row.evaluation_period_end);
        assert!(row.manager_evaluation_timestamp > row.self_evaluation_timestamp);
        assert!(row.manager_evaluation_timestamp.date() <= as_of);
        assert_eq!(row.rating_gap, u8::from(row.self_rating != row.manager_rating));
    }
}

#[test]
fn test_goal_status_follows_quarter_state() {
    let dataset: &Dataset = default_dataset();
    let as_of: Date = default_as_of();
    for row in &dataset.goals {
        let employee: &Employee = employee_by_id(dataset, &row.employee_id);
        assert!(row.set_date >= employee.hire_date);
        assert!(row.set_date <= as_of);
        assert_eq!(row.target_completion_date, shift_days(row.set_date, 90).unwrap());
        assert_eq!(row.manager_id, employee.manager_id);

        if row.target_period.end().unwrap() < as_of {
            assert_ne!(row.status, GoalStatus::InProgress);
            assert!(row.progress_percentage >= 70);
        } else {
            assert_eq!(row.status, GoalStatus::InProgress);
        }
        assert_eq!(
            row.final_achievement_rate.is_some(),
            row.status == GoalStatus::Completed
        );
    }
}

#[test]
fn test_onboarding_and_training_dates() {
    let dataset: &Dataset = default_dataset();
    let as_of: Date = default_as_of();

    for row in &dataset.onboarding {
        let employee: &Employee = employee_by_id(dataset, &row.employee_id);
        assert!(employee.hire_date.year() >= as_of.year() - 2);
        assert!(row.scheduled_date >= employee.hire_date);
        assert!(row.scheduled_date <= as_of);
    }

    let mut courses: HashSet<(&EmployeeId, &str)> = HashSet::new();
    for row in &dataset.training {
        let employee: &Employee = employee_by_id(dataset, &row.employee_id);
        assert!(row.start_date >= shift_days(employee.hire_date, 90).unwrap());
        assert!(row.start_date <= as_of);
        assert!(row.completion_date >= row.start_date);
        assert!(courses.insert((&row.employee_id, row.training_name.as_str())));
    }
}

#[test]
fn test_project_members_were_hired_before_the_start() {
    let dataset: &Dataset = default_dataset();
    let mut members: HashSet<(&str, &EmployeeId)> = HashSet::new();
    for row in &dataset.projects {
        let employee: &Employee = employee_by_id(dataset, &row.employee_id);
        assert!(employee.hire_date <= row.start_date);
        assert!(row.start_date < row.end_date);
        assert!(row.start_date <= default_as_of());
        assert!(members.insert((row.project_id.as_str(), &row.employee_id)));
    }
}

#[test]
fn test_rewards_respect_probation_and_sign() {
    let dataset: &Dataset = default_dataset();
    let as_of: Date = default_as_of();
    for row in &dataset.rewards_and_discipline {
        let employee: &Employee = employee_by_id(dataset, &row.employee_id);
        assert!(row.action_date >= shift_days(employee.hire_date, 180).unwrap());
        assert!(row.action_date <= as_of);
        assert_eq!(row.issued_by, employee.manager_id);
        let expected: RecordImpact = match row.record_type {
            ActionType::Reward => RecordImpact::Positive,
            ActionType::Discipline => RecordImpact::Negative,
        };
        assert_eq!(row.impact_on_record, expected);
    }
}

#[test]
fn test_meetings_pair_employee_with_manager() {
    let dataset: &Dataset = default_dataset();
    let as_of: Date = default_as_of();
    let window_start: Date = year_start(as_of.year() - 1).unwrap();
    for row in &dataset.meetings {
        let employee: &Employee = employee_by_id(dataset, &row.employee_id);
        let meeting_date: Date = row.meeting_datetime.date();
        assert_eq!(Some(&row.manager_id), employee.manager_id.as_ref());
        assert!(meeting_date >= window_start.max(employee.hire_date));
        assert!(meeting_date <= as_of);
        assert!(row.next_meeting_scheduled > meeting_date);
        assert!([30, 45, 60].contains(&row.duration_minutes));
    }
}

#[test]
fn test_skill_campaign_rates_fixed_skill_set() {
    let dataset: &Dataset = default_dataset();
    let campaign: Date = skill_campaign_date(default_as_of()).unwrap();
    let mut per_employee: HashMap<&EmployeeId, usize> = HashMap::new();
    for row in &dataset.skill_assessments {
        assert_eq!(row.assessment_date, campaign);
        assert!(row.metric_code.starts_with("SKILL_"));
        *per_employee.entry(&row.employee_id).or_default() += 1;
    }
    assert!(per_employee.values().all(|count| *count == SKILL_CAMPAIGN_SIZE));
}

#[test]
fn test_leadership_reviews_only_rate_leaders() {
    let dataset: &Dataset = default_dataset();
    for row in &dataset.leadership_reviews {
        let leader: &Employee = employee_by_id(dataset, &row.leader_employee_id);
        assert!(leader.job_title.is_leader());
        assert!(row.review_year >= leader.hire_date.year());
        assert!((1.0..=5.0).contains(&row.score));
    }
}

#[test]
fn test_compensation_totals_and_bonus_cap() {
    let dataset: &Dataset = default_dataset();
    for row in &dataset.compensation {
        let employee: &Employee = employee_by_id(dataset, &row.employee_id);
        assert_eq!(row.total_compensation, row.base_salary + row.annual_bonus_amount);
        #[allow(clippy::cast_precision_loss)]
        let cap: f64 = row.base_salary as f64 * MAX_BONUS_RATE;
        #[allow(clippy::cast_precision_loss)]
        let bonus: f64 = row.annual_bonus_amount as f64;
        assert!(bonus <= cap);
        assert!(row.effective_date >= employee.hire_date);
        assert_eq!(row.currency, "KRW");
    }
}

#[test]
fn test_culture_survey_overall_is_mean_of_answers() {
    let dataset: &Dataset = default_dataset();
    let as_of: Date = default_as_of();
    for row in &dataset.culture_survey {
        let answers: [f64; 7] = [
            row.q_psychological_safety,
            row.q_trust_in_leadership,
            row.q_collaboration,
            row.q_innovation_encouragement,
            row.q_work_life_balance,
            row.q_recognition,
            row.q_fairness,
        ];
        assert_eq!(
            row.overall_team_satisfaction,
            round1(mean(&answers).unwrap())
        );
        assert!(answers.iter().all(|answer| (1.0..=5.0).contains(answer)));
        assert!(row.survey_date <= as_of);
        assert!(row.survey_date >= employee_by_id(dataset, &row.employee_id).hire_date);
        assert_eq!(row.survey_date.year(), row.survey_year);
    }
}

#[test]
fn test_culture_survey_is_not_dated_before_a_late_hire() {
    let catalog: Catalog = Catalog::embedded().unwrap();
    let as_of: Date = default_as_of();
    let roster: Roster = Roster::new(vec![
        create_test_employee("EMP000", JobTitle::Ceo, None, date!(2010 - 01 - 01)),
        create_test_employee(
            "EMP001",
            JobTitle::Staff,
            Some("EMP000"),
            date!(2024 - 12 - 02),
        ),
        create_test_employee(
            "EMP002",
            JobTitle::Staff,
            Some("EMP000"),
            date!(2023 - 11 - 15),
        ),
    ]);

    for seed in 0..40 {
        let mut rng: RandomStream = RandomStream::seeded(seed);
        let rows: Vec<CultureSurveyResponse> =
            build_culture_survey(&roster, &[], &catalog, as_of, &mut rng).unwrap();
        assert!(
            rows.iter()
                .all(|row| row.employee_id != EmployeeId::new("EMP001")),
            "seed {seed}: surveyed before hire"
        );
        for row in &rows {
            let hire_date: Date = roster
                .get(&row.employee_id)
                .map(|employee| employee.hire_date)
                .unwrap();
            assert!(row.survey_date >= hire_date, "seed {seed}: {}", row.employee_id);
        }
    }
}

#[test]
fn test_poor_culture_scores_well_below_excellent() {
    let mut rng: RandomStream = RandomStream::seeded(2024);
    let poor: Vec<f64> = (0..2000)
        .map(|_| culture_answer(CultureTier::Poor, &mut rng))
        .collect();
    let excellent: Vec<f64> = (0..2000)
        .map(|_| culture_answer(CultureTier::Excellent, &mut rng))
        .collect();

    let poor_mean: f64 = mean(&poor).unwrap();
    let excellent_mean: f64 = mean(&excellent).unwrap();
    assert!(poor_mean <= 3.0, "poor mean {poor_mean}");
    assert!(excellent_mean >= 4.0, "excellent mean {excellent_mean}");
}

#[test]
fn test_snapshots_cover_recent_years_of_employment() {
    let dataset: &Dataset = default_dataset();
    let as_of: Date = default_as_of();
    let mut seen: HashSet<(&EmployeeId, Date)> = HashSet::new();
    for row in &dataset.snapshots {
        let employee: &Employee = employee_by_id(dataset, &row.employee_id);
        assert_eq!(
            row.snapshot_date,
            year_end(row.snapshot_date.year()).unwrap().min(as_of)
        );
        assert!(row.snapshot_date <= as_of);
        assert!(row.snapshot_date.year() >= employee.hire_date.year());
        assert!(row.snapshot_date.year() > as_of.year() - 3);
        assert!(row.snapshot_date.year() <= as_of.year());
        assert_eq!(row.employment_status, employee.status);
        assert!(row.job_title.level() <= employee.job_title.level());
        assert!(seen.insert((&row.employee_id, row.snapshot_date)));
    }
}

#[test]
fn test_snapshot_columns_summarize_the_year() {
    let dataset: &Dataset = default_dataset();
    for row in &dataset.snapshots {
        let year: i32 = row.snapshot_date.year();
        let grade: Option<Grade> = dataset
            .performance_reviews
            .iter()
            .filter(|review| {
                review.employee_id == row.employee_id && review.review_period.year == year
            })
            .max_by_key(|review| review.review_period.half)
            .map(|review| review.final_grade);
        let compensation: Option<u64> = dataset
            .compensation
            .iter()
            .find(|comp| comp.employee_id == row.employee_id && comp.effective_date.year() == year)
            .map(|comp| comp.total_compensation);
        let projects: usize = dataset
            .projects
            .iter()
            .filter(|member| {
                member.employee_id == row.employee_id && member.start_date.year() == year
            })
            .count();

        assert_eq!(row.performance_grade, grade);
        assert_eq!(row.total_compensation, compensation);
        assert_eq!(row.project_count, projects);
    }
}
