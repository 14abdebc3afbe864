// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Organization topology and the employee entity.
//!
//! ## Invariants
//!
//! - The topology has at least one division
//! - Unit identifiers and names are non-empty and identifiers are unique
//! - Every team references a division that exists in the topology
//! - An employee's exit date is present only when the employee is separated

use std::collections::BTreeSet;

use serde::Serialize;
use time::Date;

use crate::error::DomainError;
use crate::serde_formats::iso_date;
use crate::types::{
    EmployeeId, EmploymentStatus, EmploymentType, Gender, JobTitle, OrgId, OrgType,
};

/// A division under the company root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DivisionSpec {
    pub org_id: OrgId,
    pub name: String,
}

/// A team under a division. `headcount` includes the team lead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamSpec {
    pub org_id: OrgId,
    pub name: String,
    pub division_id: OrgId,
    pub headcount: usize,
}

/// The company layout the hierarchy builder staffs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrgTopology {
    pub company_id: OrgId,
    pub company_name: String,
    pub divisions: Vec<DivisionSpec>,
    pub teams: Vec<TeamSpec>,
}

impl OrgTopology {
    /// Finds a division by identifier.
    #[must_use]
    pub fn division(&self, org_id: &OrgId) -> Option<&DivisionSpec> {
        self.divisions.iter().find(|division| &division.org_id == org_id)
    }

    /// Total planned headcount including the root and division heads.
    #[must_use]
    pub fn planned_headcount(&self) -> usize {
        let team_total: usize = self.teams.iter().map(|team| team.headcount.max(1)).sum();
        1 + self.divisions.len() + team_total
    }

    /// Validates the topology before any employee is created.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - There are no divisions
    /// - A unit identifier or name is empty
    /// - A unit identifier or name is used twice
    /// - A team references an unknown division
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.divisions.is_empty() {
            return Err(DomainError::EmptyTopology);
        }

        let mut seen: BTreeSet<&str> = BTreeSet::new();
        let mut seen_names: BTreeSet<&str> = BTreeSet::new();
        let units = std::iter::once((&self.company_id, self.company_name.as_str()))
            .chain(self.divisions.iter().map(|d| (&d.org_id, d.name.as_str())))
            .chain(self.teams.iter().map(|t| (&t.org_id, t.name.as_str())));

        for (org_id, name) in units {
            if org_id.value().trim().is_empty() {
                return Err(DomainError::InvalidOrgUnit {
                    org_id: org_id.value().to_string(),
                    reason: String::from("identifier must not be empty"),
                });
            }
            if name.trim().is_empty() {
                return Err(DomainError::InvalidOrgUnit {
                    org_id: org_id.value().to_string(),
                    reason: String::from("name must not be empty"),
                });
            }
            if !seen.insert(org_id.value()) {
                return Err(DomainError::DuplicateOrgId(org_id.value().to_string()));
            }
            if !seen_names.insert(name.trim()) {
                return Err(DomainError::DuplicateOrgName(name.to_string()));
            }
        }

        for team in &self.teams {
            if self.division(&team.division_id).is_none() {
                return Err(DomainError::UnknownDivision {
                    team_id: team.org_id.value().to_string(),
                    division_id: team.division_id.value().to_string(),
                });
            }
        }

        Ok(())
    }
}

impl Default for OrgTopology {
    fn default() -> Self {
        let division = |id: &str, name: &str| DivisionSpec {
            org_id: OrgId::new(id),
            name: name.to_string(),
        };
        let team = |id: &str, name: &str, division_id: &str, headcount: usize| TeamSpec {
            org_id: OrgId::new(id),
            name: name.to_string(),
            division_id: OrgId::new(division_id),
            headcount,
        };

        Self {
            company_id: OrgId::new("ORG000"),
            company_name: String::from("넥스트젠 테크놀로지스"),
            divisions: vec![
                division("ORG100", "경영지원본부"),
                division("ORG200", "기술본부"),
                division("ORG300", "비즈니스본부"),
            ],
            teams: vec![
                team("ORG101", "HR팀", "ORG100", 12),
                team("ORG102", "재무팀", "ORG100", 10),
                team("ORG201", "AI솔루션개발팀", "ORG200", 28),
                team("ORG202", "플랫폼개발팀", "ORG200", 32),
                team("ORG203", "데이터분석팀", "ORG200", 24),
                team("ORG204", "IT기획팀", "ORG200", 20),
                team("ORG205", "UI/UX디자인팀", "ORG200", 16),
                team("ORG206", "QA팀", "ORG200", 18),
                team("ORG301", "마케팅팀", "ORG300", 20),
                team("ORG302", "영업팀", "ORG300", 26),
            ],
        }
    }
}

/// One row of the organization structure table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrgUnit {
    pub org_id: OrgId,
    pub org_name: String,
    pub org_type: OrgType,
    pub parent_org_id: Option<OrgId>,
    pub level: u8,
    pub head_employee_id: EmployeeId,
}

/// An employee of the fictional company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employee {
    pub employee_id: EmployeeId,
    pub name: String,
    pub gender: Gender,
    #[serde(serialize_with = "iso_date::serialize")]
    pub birth_date: Date,
    pub employment_type: EmploymentType,
    #[serde(serialize_with = "iso_date::serialize")]
    pub hire_date: Date,
    #[serde(serialize_with = "iso_date::option::serialize")]
    pub exit_date: Option<Date>,
    pub org_id: OrgId,
    pub org_name: String,
    pub division_name: String,
    pub job_title: JobTitle,
    pub manager_id: Option<EmployeeId>,
    pub status: EmploymentStatus,
}

impl Employee {
    /// Returns `true` if the employee has not separated.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == EmploymentStatus::Active
    }

    /// Returns `true` for the root of the manager tree.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.manager_id.is_none()
    }

    /// Last day the employee is on the books, bounded by `as_of`.
    #[must_use]
    pub fn tenure_end(&self, as_of: Date) -> Date {
        self.exit_date.map_or(as_of, |exit| exit.min(as_of))
    }

    /// Whole calendar years between the hire year and `as_of`.
    #[must_use]
    pub const fn tenure_years(&self, as_of: Date) -> i32 {
        as_of.year() - self.hire_date.year()
    }

    /// Returns `true` if `date` lies within the employment window.
    #[must_use]
    pub fn is_employed_on(&self, date: Date, as_of: Date) -> bool {
        date >= self.hire_date && date <= self.tenure_end(as_of)
    }
}
