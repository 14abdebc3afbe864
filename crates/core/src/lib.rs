// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod assessment;
mod career;
mod catalog;
mod compensation;
mod config;
mod culture;
mod dataset;
mod development;
mod error;
mod hierarchy;
mod meetings;
mod names;
mod numbers;
mod projects;
mod random;
mod recognition;
mod reviews;
mod roster;
mod separation;
mod snapshot;
mod surveys;
mod table;
mod talent;
mod template;

#[cfg(test)]
mod tests;

use tracing::info;

// Re-export public types and functions
pub use assessment::{
    AptitudeResult, Assessments, CpiResult, MmpiResult, PersonalTraits, RecruitmentRecord,
    run_assessments,
};
pub use career::{Careers, ChangeType, JobHistoryEntry, simulate_careers};
pub use catalog::{Catalog, MetricDefinition};
pub use compensation::{CompensationRecord, MAX_BONUS_RATE, build_compensation};
pub use config::{GeneratorConfig, ROOT_HIRE_DATE};
pub use culture::{CultureSurveyResponse, build_culture_survey};
pub use dataset::Dataset;
pub use development::{
    OnboardingRecord, OnboardingStatus, TrainingRecord, TrainingStatus, build_onboarding,
    build_training,
};
pub use error::GenerationError;
pub use hierarchy::{Hierarchy, ReportingLine, build_hierarchy, build_reporting_lines};
pub use meetings::{OneOnOneMeeting, build_meetings};
pub use names::{NameGenerator, PooledNameGenerator, SimpleNameGenerator, select_name_generator};
pub use projects::{ProjectMembership, build_projects};
pub use random::RandomStream;
pub use recognition::{ActionType, RecordImpact, RewardOrDiscipline, build_rewards_and_discipline};
pub use reviews::{
    ContinuousReview, Goal, GoalStatus, PerformanceReview, build_continuous_reviews, build_goals,
    build_performance_reviews,
};
pub use roster::Roster;
pub use separation::{ExitInterview, RehireEligible, build_exit_interviews};
pub use snapshot::{SnapshotSources, YearlySnapshot, build_snapshots};
pub use surveys::{
    EngagementSurvey, LeadershipReview, RaterRelationship, SKILL_CAMPAIGN_SIZE, SkillAssessment,
    build_engagement_surveys, build_leadership_reviews, build_skill_assessments,
    skill_campaign_date,
};
pub use table::{Record, TableSink};
pub use talent::{
    KeyTalentEntry, SuccessionPlanEntry, TalentSources, build_key_talent, build_succession_plan,
};

/// Builds the complete dataset for `config`.
///
/// Stages run strictly in dependency order and share one random stream,
/// so equal configurations yield equal datasets.
///
/// # Arguments
///
/// * `config` - Seed, `as_of` date, start years and topology
/// * `names` - Name generator used by the hierarchy stage
///
/// # Errors
///
/// Returns an error if:
/// - The configuration is invalid
/// - An embedded data asset is malformed
/// - A stage fails a draw or date computation
#[allow(clippy::too_many_lines)]
pub fn generate(
    config: &GeneratorConfig,
    names: &dyn NameGenerator,
) -> Result<Dataset, GenerationError> {
    config.validate()?;
    let catalog: Catalog = Catalog::embedded()?;
    let mut rng: RandomStream = RandomStream::seeded(config.seed);
    let as_of: time::Date = config.as_of;

    info!(seed = config.seed, %as_of, "Generating dataset");

    let Hierarchy { org_units, roster } = build_hierarchy(config, names, &mut rng)?;
    let reporting_lines: Vec<ReportingLine> = build_reporting_lines(&roster)?;
    let careers: Careers = simulate_careers(&roster, as_of, &mut rng)?;
    let assessments: Assessments =
        run_assessments(&roster, &careers, &catalog, as_of, &mut rng)?;

    let onboarding = build_onboarding(&roster, &catalog, as_of, &mut rng)?;
    let training = build_training(&roster, &catalog, as_of, &mut rng)?;
    let projects = build_projects(
        &roster,
        &catalog,
        config.project_start_year,
        as_of,
        &mut rng,
    )?;
    let performance_reviews = build_performance_reviews(
        &roster,
        &catalog,
        config.review_start_year,
        as_of,
        &mut rng,
    )?;
    let continuous_reviews = build_continuous_reviews(&roster, &catalog, as_of, &mut rng)?;
    let goals = build_goals(
        &roster,
        &catalog,
        config.review_start_year,
        as_of,
        &mut rng,
    )?;
    let exit_interviews = build_exit_interviews(&roster, &catalog, &mut rng)?;
    let culture_survey = build_culture_survey(&roster, &org_units, &catalog, as_of, &mut rng)?;
    let rewards_and_discipline = build_rewards_and_discipline(&roster, &catalog, as_of, &mut rng)?;
    let meetings = build_meetings(&roster, &catalog, as_of, &mut rng)?;
    let skill_assessments = build_skill_assessments(&roster, &catalog, as_of, &mut rng)?;
    let leadership_reviews = build_leadership_reviews(&roster, &catalog, as_of, &mut rng);
    let engagement_surveys = build_engagement_surveys(&roster, as_of, &mut rng);
    let compensation = build_compensation(&roster, &careers, as_of, &mut rng)?;

    let key_talent = build_key_talent(
        &roster,
        TalentSources {
            performance: &performance_reviews,
            rewards: &rewards_and_discipline,
            leadership: &leadership_reviews,
            engagement: &engagement_surveys,
        },
        config.review_start_year,
        as_of,
    )?;
    let succession_plan = build_succession_plan(
        &roster,
        &key_talent,
        config.review_start_year,
        as_of,
        &mut rng,
    )?;
    let snapshots = build_snapshots(
        &roster,
        &careers,
        SnapshotSources {
            performance: &performance_reviews,
            compensation: &compensation,
            skills: &skill_assessments,
            projects: &projects,
        },
        as_of,
    )?;

    let Assessments {
        recruitment,
        aptitude,
        cpi,
        mmpi,
        traits,
    } = assessments;

    let dataset: Dataset = Dataset {
        org_units,
        reporting_lines,
        metrics: catalog.metrics,
        employees: roster.employees().to_vec(),
        job_history: careers.entries().to_vec(),
        personal_traits: traits,
        recruitment,
        aptitude,
        cpi,
        mmpi,
        onboarding,
        training,
        projects,
        performance_reviews,
        continuous_reviews,
        goals,
        exit_interviews,
        culture_survey,
        rewards_and_discipline,
        meetings,
        skill_assessments,
        leadership_reviews,
        engagement_surveys,
        compensation,
        key_talent,
        succession_plan,
        snapshots,
    };

    info!(employees = dataset.employees.len(), "Dataset complete");
    Ok(dataset)
}
