// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while validating or deriving fixture entities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The organization topology has no divisions.
    EmptyTopology,
    /// An organization unit identifier is used more than once.
    DuplicateOrgId(String),
    /// An organization unit name is used more than once.
    DuplicateOrgName(String),
    /// An organization unit identifier or name is empty.
    InvalidOrgUnit {
        /// The offending unit identifier (may be empty).
        org_id: String,
        /// Why the unit was rejected.
        reason: String,
    },
    /// A team references a division that does not exist.
    UnknownDivision {
        /// The team identifier.
        team_id: String,
        /// The missing division identifier.
        division_id: String,
    },
    /// A configured year window is inverted or outside the simulated calendar.
    InvalidYearRange {
        /// The first year of the window.
        start: i32,
        /// The year of the simulated "now".
        as_of_year: i32,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
    /// A calendar component was out of range.
    InvalidDate {
        /// Description of the validation error.
        reason: String,
    },
    /// An employee identifier did not resolve against the roster.
    UnknownEmployee(String),
    /// A lookup table that must not be empty was empty.
    EmptyChoice {
        /// Name of the empty pool.
        pool: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTopology => write!(f, "Organization topology must contain a division"),
            Self::DuplicateOrgId(org_id) => {
                write!(f, "Organization unit '{org_id}' is defined more than once")
            }
            Self::DuplicateOrgName(name) => {
                write!(f, "Organization unit name '{name}' is used more than once")
            }
            Self::InvalidOrgUnit { org_id, reason } => {
                write!(f, "Invalid organization unit '{org_id}': {reason}")
            }
            Self::UnknownDivision {
                team_id,
                division_id,
            } => {
                write!(
                    f,
                    "Team '{team_id}' references unknown division '{division_id}'"
                )
            }
            Self::InvalidYearRange { start, as_of_year } => {
                write!(
                    f,
                    "Invalid year window: start year {start} is after the simulated year {as_of_year}"
                )
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
            Self::InvalidDate { reason } => write!(f, "Invalid date: {reason}"),
            Self::UnknownEmployee(employee_id) => {
                write!(f, "Employee '{employee_id}' not found in roster")
            }
            Self::EmptyChoice { pool } => write!(f, "Cannot choose from empty pool '{pool}'"),
        }
    }
}

impl std::error::Error for DomainError {}

impl From<time::error::ComponentRange> for DomainError {
    fn from(err: time::error::ComponentRange) -> Self {
        Self::InvalidDate {
            reason: err.to_string(),
        }
    }
}
