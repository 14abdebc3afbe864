// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::JobTitle;

/// Position an employee fills in the hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaffingRole {
    Root,
    DivisionHead,
    TeamLead,
    Contributor(JobTitle),
}

impl StaffingRole {
    /// Title held by someone filling this role.
    #[must_use]
    pub const fn job_title(&self) -> JobTitle {
        match self {
            Self::Root => JobTitle::Ceo,
            Self::DivisionHead => JobTitle::DivisionHead,
            Self::TeamLead => JobTitle::TeamLead,
            Self::Contributor(title) => *title,
        }
    }

    /// Demographic and contract policy for the role.
    #[must_use]
    pub const fn policy(&self) -> StaffingPolicy {
        match self {
            Self::Root => StaffingPolicy::leadership(50, 60),
            Self::DivisionHead => StaffingPolicy::leadership(45, 55),
            Self::TeamLead => StaffingPolicy::leadership(38, 50),
            Self::Contributor(title) => {
                let (min_age, max_age): (i32, i32) = match title {
                    JobTitle::Staff | JobTitle::SeniorStaff => (25, 32),
                    JobTitle::AssistantManager | JobTitle::Manager => (28, 38),
                    JobTitle::DeputyGeneralManager => (33, 45),
                    _ => (38, 55),
                };
                StaffingPolicy {
                    min_age,
                    max_age,
                    regular_weight: 95,
                    contract_weight: 5,
                    active_weight: 90,
                    separated_weight: 10,
                }
            }
        }
    }
}

/// Age range and weighted contract/status draws for a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaffingPolicy {
    pub min_age: i32,
    pub max_age: i32,
    pub regular_weight: u32,
    pub contract_weight: u32,
    pub active_weight: u32,
    pub separated_weight: u32,
}

impl StaffingPolicy {
    /// Leaders are always permanent and active.
    const fn leadership(min_age: i32, max_age: i32) -> Self {
        Self {
            min_age,
            max_age,
            regular_weight: 1,
            contract_weight: 0,
            active_weight: 1,
            separated_weight: 0,
        }
    }
}

/// Candidate titles for a contributor with the given tenure in years.
///
/// Titles may repeat to weight the draw.
#[must_use]
pub const fn contributor_title_choices(tenure_years: i32) -> &'static [JobTitle] {
    match tenure_years {
        i32::MIN..=1 => &[JobTitle::Staff],
        2..=3 => &[
            JobTitle::Staff,
            JobTitle::SeniorStaff,
            JobTitle::AssistantManager,
        ],
        4..=5 => &[
            JobTitle::SeniorStaff,
            JobTitle::AssistantManager,
            JobTitle::Manager,
        ],
        6..=7 => &[
            JobTitle::AssistantManager,
            JobTitle::Manager,
            JobTitle::DeputyGeneralManager,
        ],
        _ => &[
            JobTitle::Manager,
            JobTitle::DeputyGeneralManager,
            JobTitle::DeputyGeneralManager,
            JobTitle::GeneralManager,
        ],
    }
}
