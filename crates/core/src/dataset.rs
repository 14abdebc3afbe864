// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use hr_fixtures_domain::{Employee, OrgUnit};

use crate::assessment::{AptitudeResult, CpiResult, MmpiResult, PersonalTraits, RecruitmentRecord};
use crate::career::JobHistoryEntry;
use crate::catalog::MetricDefinition;
use crate::compensation::CompensationRecord;
use crate::culture::CultureSurveyResponse;
use crate::development::{OnboardingRecord, TrainingRecord};
use crate::hierarchy::ReportingLine;
use crate::meetings::OneOnOneMeeting;
use crate::projects::ProjectMembership;
use crate::recognition::RewardOrDiscipline;
use crate::reviews::{ContinuousReview, Goal, PerformanceReview};
use crate::separation::ExitInterview;
use crate::snapshot::YearlySnapshot;
use crate::surveys::{EngagementSurvey, LeadershipReview, SkillAssessment};
use crate::table::{Record, TableSink};
use crate::talent::{KeyTalentEntry, SuccessionPlanEntry};

/// Every generated table, one field per output file.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub org_units: Vec<OrgUnit>,
    pub reporting_lines: Vec<ReportingLine>,
    pub metrics: Vec<MetricDefinition>,
    pub employees: Vec<Employee>,
    pub job_history: Vec<JobHistoryEntry>,
    pub personal_traits: Vec<PersonalTraits>,
    pub recruitment: Vec<RecruitmentRecord>,
    pub aptitude: Vec<AptitudeResult>,
    pub cpi: Vec<CpiResult>,
    pub mmpi: Vec<MmpiResult>,
    pub onboarding: Vec<OnboardingRecord>,
    pub training: Vec<TrainingRecord>,
    pub projects: Vec<ProjectMembership>,
    pub performance_reviews: Vec<PerformanceReview>,
    pub continuous_reviews: Vec<ContinuousReview>,
    pub goals: Vec<Goal>,
    pub exit_interviews: Vec<ExitInterview>,
    pub culture_survey: Vec<CultureSurveyResponse>,
    pub rewards_and_discipline: Vec<RewardOrDiscipline>,
    pub meetings: Vec<OneOnOneMeeting>,
    pub skill_assessments: Vec<SkillAssessment>,
    pub leadership_reviews: Vec<LeadershipReview>,
    pub engagement_surveys: Vec<EngagementSurvey>,
    pub compensation: Vec<CompensationRecord>,
    pub key_talent: Vec<KeyTalentEntry>,
    pub succession_plan: Vec<SuccessionPlanEntry>,
    pub snapshots: Vec<YearlySnapshot>,
}

impl Dataset {
    /// Writes every table to `sink` in file order.
    ///
    /// # Errors
    ///
    /// Returns the sink's error for the first table that fails.
    pub fn write_to<S: TableSink>(&self, sink: &mut S) -> Result<(), S::Error> {
        sink.write_table(&self.org_units)?;
        sink.write_table(&self.reporting_lines)?;
        sink.write_table(&self.metrics)?;
        sink.write_table(&self.employees)?;
        sink.write_table(&self.job_history)?;
        sink.write_table(&self.personal_traits)?;
        sink.write_table(&self.recruitment)?;
        sink.write_table(&self.aptitude)?;
        sink.write_table(&self.cpi)?;
        sink.write_table(&self.mmpi)?;
        sink.write_table(&self.onboarding)?;
        sink.write_table(&self.training)?;
        sink.write_table(&self.projects)?;
        sink.write_table(&self.performance_reviews)?;
        sink.write_table(&self.continuous_reviews)?;
        sink.write_table(&self.goals)?;
        sink.write_table(&self.exit_interviews)?;
        sink.write_table(&self.culture_survey)?;
        sink.write_table(&self.rewards_and_discipline)?;
        sink.write_table(&self.meetings)?;
        sink.write_table(&self.skill_assessments)?;
        sink.write_table(&self.leadership_reviews)?;
        sink.write_table(&self.engagement_surveys)?;
        sink.write_table(&self.compensation)?;
        sink.write_table(&self.key_talent)?;
        sink.write_table(&self.succession_plan)?;
        sink.write_table(&self.snapshots)
    }

    /// `(table, row count)` pairs in file order.
    #[must_use]
    pub fn table_counts(&self) -> Vec<(&'static str, usize)> {
        fn entry<R: Record>(rows: &[R]) -> (&'static str, usize) {
            (R::TABLE, rows.len())
        }

        vec![
            entry(&self.org_units),
            entry(&self.reporting_lines),
            entry(&self.metrics),
            entry(&self.employees),
            entry(&self.job_history),
            entry(&self.personal_traits),
            entry(&self.recruitment),
            entry(&self.aptitude),
            entry(&self.cpi),
            entry(&self.mmpi),
            entry(&self.onboarding),
            entry(&self.training),
            entry(&self.projects),
            entry(&self.performance_reviews),
            entry(&self.continuous_reviews),
            entry(&self.goals),
            entry(&self.exit_interviews),
            entry(&self.culture_survey),
            entry(&self.rewards_and_discipline),
            entry(&self.meetings),
            entry(&self.skill_assessments),
            entry(&self.leadership_reviews),
            entry(&self.engagement_surveys),
            entry(&self.compensation),
            entry(&self.key_talent),
            entry(&self.succession_plan),
            entry(&self.snapshots),
        ]
    }
}
