// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// Stable employee identifier (e.g. `EMP000`, `DIV001`, `TL003`).
///
/// Every table in the dataset references employees through this key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(String);

impl EmployeeId {
    /// Creates a new `EmployeeId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Formats an identifier from a prefix and a zero-padded sequence number.
    #[must_use]
    pub fn numbered(prefix: &str, sequence: usize) -> Self {
        Self(format!("{prefix}{sequence:03}"))
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Organization unit identifier (e.g. `ORG000`, `ORG201`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrgId(String);

impl OrgId {
    /// Creates a new `OrgId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OrgId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Gender as recorded in the employee master table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "남")]
    Male,
    #[serde(rename = "여")]
    Female,
}

impl Gender {
    /// Both genders, in draw order.
    pub const ALL: [Self; 2] = [Self::Male, Self::Female];
}

/// Contract form of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmploymentType {
    /// Permanent employee.
    #[serde(rename = "정규직")]
    Regular,
    /// Fixed-term contract.
    #[serde(rename = "계약직")]
    Contract,
}

/// Employment status. Separation is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmploymentStatus {
    #[serde(rename = "재직")]
    Active,
    #[serde(rename = "퇴사")]
    Separated,
}

impl EmploymentStatus {
    /// Returns the label written to output tables.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "재직",
            Self::Separated => "퇴사",
        }
    }
}

/// Kind of organization unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrgType {
    Company,
    Division,
    Team,
}

/// Job title ladder.
///
/// Titles are ordered by an ordinal level. The ordinal drives promotion
/// paths, salary bands and the band predicates used by talent rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum JobTitle {
    #[serde(rename = "사원")]
    Staff,
    #[serde(rename = "주임")]
    SeniorStaff,
    #[serde(rename = "대리")]
    AssistantManager,
    #[serde(rename = "과장")]
    Manager,
    #[serde(rename = "차장")]
    DeputyGeneralManager,
    #[serde(rename = "팀장")]
    TeamLead,
    #[serde(rename = "부장")]
    GeneralManager,
    #[serde(rename = "본부장")]
    DivisionHead,
    #[serde(rename = "이사")]
    Director,
    #[serde(rename = "대표이사")]
    Ceo,
}

impl JobTitle {
    /// Every title in ascending level order.
    pub const ALL: [Self; 10] = [
        Self::Staff,
        Self::SeniorStaff,
        Self::AssistantManager,
        Self::Manager,
        Self::DeputyGeneralManager,
        Self::TeamLead,
        Self::GeneralManager,
        Self::DivisionHead,
        Self::Director,
        Self::Ceo,
    ];

    /// Returns the label written to output tables.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Staff => "사원",
            Self::SeniorStaff => "주임",
            Self::AssistantManager => "대리",
            Self::Manager => "과장",
            Self::DeputyGeneralManager => "차장",
            Self::TeamLead => "팀장",
            Self::GeneralManager => "부장",
            Self::DivisionHead => "본부장",
            Self::Director => "이사",
            Self::Ceo => "대표이사",
        }
    }

    /// Ordinal level used for promotion paths (사원 = 1).
    #[must_use]
    pub const fn level(&self) -> u8 {
        match self {
            Self::Staff => 1,
            Self::SeniorStaff => 2,
            Self::AssistantManager => 3,
            Self::Manager => 4,
            Self::DeputyGeneralManager => 5,
            Self::TeamLead => 6,
            Self::GeneralManager => 7,
            Self::DivisionHead => 8,
            Self::Director => 9,
            Self::Ceo => 10,
        }
    }

    /// Resolves the title for an ordinal level.
    ///
    /// When several titles share a level the first one in level order wins.
    #[must_use]
    pub fn from_level(level: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|title| title.level() == level)
    }

    /// Candidate starting titles for someone who currently holds `self`.
    ///
    /// The CEO is the only title that is never promoted into.
    #[must_use]
    pub const fn initial_title_choices(&self) -> &'static [Self] {
        match self {
            Self::Ceo => &[Self::Ceo],
            Self::Staff | Self::SeniorStaff => &[Self::Staff],
            Self::AssistantManager | Self::Manager => &[Self::Staff, Self::SeniorStaff],
            Self::DeputyGeneralManager | Self::TeamLead => {
                &[Self::Staff, Self::SeniorStaff, Self::AssistantManager]
            }
            Self::GeneralManager | Self::DivisionHead | Self::Director => {
                &[Self::SeniorStaff, Self::AssistantManager, Self::Manager]
            }
        }
    }

    /// CPI mean shift applied to dominance and status scales.
    #[must_use]
    pub const fn cpi_leadership_bonus(&self) -> i32 {
        match self {
            Self::TeamLead | Self::DivisionHead | Self::Ceo => 8,
            Self::DeputyGeneralManager | Self::GeneralManager => 5,
            _ => 0,
        }
    }

    /// Titles that receive leadership 360 reviews.
    #[must_use]
    pub const fn is_leader(&self) -> bool {
        matches!(
            self,
            Self::TeamLead | Self::GeneralManager | Self::DivisionHead | Self::Director | Self::Ceo
        )
    }

    /// Titles whose key-talent entry carries a leadership score.
    #[must_use]
    pub const fn has_leadership_score(&self) -> bool {
        matches!(self, Self::TeamLead | Self::DivisionHead | Self::GeneralManager)
    }

    /// Managerial-or-senior band (Tier 2 eligibility).
    #[must_use]
    pub const fn is_managerial_or_senior(&self) -> bool {
        matches!(
            self,
            Self::TeamLead
                | Self::DivisionHead
                | Self::GeneralManager
                | Self::DeputyGeneralManager
                | Self::Manager
        )
    }

    /// Junior band (Tier 3 eligibility).
    #[must_use]
    pub const fn is_junior_band(&self) -> bool {
        matches!(
            self,
            Self::Staff | Self::SeniorStaff | Self::AssistantManager | Self::Manager
        )
    }

    /// Positions that get a succession plan.
    #[must_use]
    pub const fn is_critical_position(&self) -> bool {
        matches!(self, Self::DivisionHead | Self::TeamLead)
    }

    /// Titles hired through executive channels.
    #[must_use]
    pub const fn is_executive_hire(&self) -> bool {
        matches!(
            self,
            Self::TeamLead | Self::GeneralManager | Self::Director | Self::Ceo
        )
    }

    /// Annual base salary band in KRW (inclusive bounds).
    #[must_use]
    pub const fn salary_band(&self) -> (u64, u64) {
        match self {
            Self::Staff => (35_000_000, 42_000_000),
            Self::SeniorStaff => (40_000_000, 48_000_000),
            Self::AssistantManager => (48_000_000, 58_000_000),
            Self::Manager => (58_000_000, 72_000_000),
            Self::DeputyGeneralManager => (72_000_000, 90_000_000),
            Self::TeamLead => (90_000_000, 120_000_000),
            Self::GeneralManager => (110_000_000, 140_000_000),
            Self::DivisionHead => (130_000_000, 160_000_000),
            Self::Director => (150_000_000, 190_000_000),
            Self::Ceo => (200_000_000, 280_000_000),
        }
    }
}

impl std::fmt::Display for JobTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Letter grade used by performance reviews and ratings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    S,
    A,
    B,
    C,
    D,
}

impl Grade {
    /// Numeric score used for averaging (S = 5 .. D = 1).
    #[must_use]
    pub const fn score(&self) -> u8 {
        match self {
            Self::S => 5,
            Self::A => 4,
            Self::B => 3,
            Self::C => 2,
            Self::D => 1,
        }
    }

    /// Returns the grade letter.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::S => "S",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
