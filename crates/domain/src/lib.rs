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
mod culture;
mod error;
mod organization;
mod period;
mod review;
mod separation;
mod staffing;
mod talent;
mod types;

pub mod serde_formats;

#[cfg(test)]
mod tests;

pub use assessment::{
    CLINICAL_ELEVATION_THRESHOLD, CRITICAL_SCALE_THRESHOLD, ClinicalScales, LifestyleType,
    OverallAdjustment, PassFail, RiskLevel, ValidityStatus, aptitude_grade,
};
pub use culture::CultureTier;
pub use organization::{DivisionSpec, Employee, OrgTopology, OrgUnit, TeamSpec};
pub use period::{
    Half, Quarter, ReviewPeriod, completed_review_periods, days_between, shift_days,
    trailing_years, year_end, year_start,
};
pub use review::{
    PERFORMANCE_GRADE_POOL, SELF_RATING_POOL, average_grade_score, manager_rating_weights,
};
pub use separation::{ExitReasonCategory, RecommendationBucket};
pub use staffing::{StaffingPolicy, StaffingRole, contributor_title_choices};
pub use talent::{
    DevelopmentPriority, Readiness, RetentionRisk, SuccessionReady, TalentClassification,
    TalentInputs, TalentTier, classify_talent, successor_titles,
};

// Re-export public types
pub use error::DomainError;
pub use types::{
    EmployeeId, EmploymentStatus, EmploymentType, Gender, Grade, JobTitle, OrgId, OrgType,
};
