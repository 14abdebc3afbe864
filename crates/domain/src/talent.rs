// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Key-talent and succession classification rules.
//!
//! ## Invariants
//!
//! - Tier rules are evaluated in order and the first full match wins
//! - Employees matching no tier are not key talent
//! - A missing engagement survey yields a Medium retention risk

use serde::Serialize;

use crate::types::JobTitle;

/// Key-talent tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum TalentTier {
    #[serde(rename = "Tier 1 - Critical Talent")]
    Critical,
    #[serde(rename = "Tier 2 - High Potential")]
    HighPotential,
    #[serde(rename = "Tier 3 - Emerging Talent")]
    Emerging,
}

impl TalentTier {
    /// Development priority attached to the tier.
    #[must_use]
    pub const fn development_priority(&self) -> DevelopmentPriority {
        match self {
            Self::Critical => DevelopmentPriority::Highest,
            Self::HighPotential => DevelopmentPriority::High,
            Self::Emerging => DevelopmentPriority::Normal,
        }
    }

    /// Tier 1 and Tier 2 are ready to be named successors.
    #[must_use]
    pub const fn succession_ready(&self) -> SuccessionReady {
        match self {
            Self::Critical | Self::HighPotential => SuccessionReady::Yes,
            Self::Emerging => SuccessionReady::Developing,
        }
    }
}

/// Development priority of a key talent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DevelopmentPriority {
    #[serde(rename = "최우선")]
    Highest,
    #[serde(rename = "우선")]
    High,
    #[serde(rename = "일반")]
    Normal,
}

/// Whether a key talent can be named as a successor today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SuccessionReady {
    Yes,
    Developing,
}

/// Aggregates a key-talent decision is based on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TalentInputs {
    /// Mean grade score over the recent review periods.
    pub avg_performance: f64,
    /// Number of reward records.
    pub rewards_count: usize,
    /// Mean direct-report leadership score, for titles that carry one.
    pub leadership_score: Option<f64>,
    pub job_title: JobTitle,
    pub tenure_years: i32,
}

/// Tier plus the human-readable reasons for the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TalentClassification {
    pub tier: TalentTier,
    pub reasons: Vec<String>,
}

impl TalentClassification {
    /// Reasons joined the way they are written to the pool table.
    #[must_use]
    pub fn joined_reasons(&self) -> String {
        self.reasons.join(" | ")
    }
}

/// Classifies an employee into a key-talent tier.
///
/// # Arguments
///
/// * `inputs` - Performance, reward, leadership and tenure aggregates
///
/// # Returns
///
/// `None` if no tier rule matches.
#[must_use]
pub fn classify_talent(inputs: &TalentInputs) -> Option<TalentClassification> {
    let strong_leadership: bool = inputs.leadership_score.is_some_and(|score| score >= 4.3);

    if inputs.avg_performance >= 4.5 && (inputs.rewards_count >= 2 || strong_leadership) {
        let mut reasons: Vec<String> = vec![String::from("탁월한 성과 지속")];
        if inputs.rewards_count >= 2 {
            reasons.push(format!("포상 {}회", inputs.rewards_count));
        }
        if strong_leadership {
            reasons.push(String::from("우수한 리더십"));
        }
        return Some(TalentClassification {
            tier: TalentTier::Critical,
            reasons,
        });
    }

    if inputs.avg_performance >= 4.0 && inputs.job_title.is_managerial_or_senior() {
        let mut reasons: Vec<String> = vec![String::from("안정적 우수 성과")];
        if inputs.leadership_score.is_some_and(|score| score >= 4.0) {
            reasons.push(String::from("리더십 발휘"));
        }
        if inputs.rewards_count >= 1 {
            reasons.push(String::from("포상 이력"));
        }
        return Some(TalentClassification {
            tier: TalentTier::HighPotential,
            reasons,
        });
    }

    if inputs.avg_performance >= 3.8
        && inputs.tenure_years <= 5
        && inputs.job_title.is_junior_band()
    {
        return Some(TalentClassification {
            tier: TalentTier::Emerging,
            reasons: vec![String::from("성장 가능성"), String::from("안정적 성과")],
        });
    }

    None
}

/// Likelihood that a key talent leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum RetentionRisk {
    Low,
    Medium,
    High,
}

impl RetentionRisk {
    /// Derives the risk from the most recent turnover-intention answer.
    #[must_use]
    pub fn from_turnover_intention(turnover_intention: Option<f64>) -> Self {
        match turnover_intention {
            Some(score) if score >= 4.0 => Self::High,
            Some(score) if score >= 3.0 => Self::Medium,
            Some(_) => Self::Low,
            None => Self::Medium,
        }
    }
}

/// How soon a succession candidate could take over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Readiness {
    #[serde(rename = "Ready Now")]
    ReadyNow,
    #[serde(rename = "1-2 Years")]
    OneToTwoYears,
    #[serde(rename = "3+ Years")]
    ThreePlusYears,
}

impl Readiness {
    /// Maps a candidate's average performance to a readiness level.
    #[must_use]
    pub fn from_performance(avg_performance: f64) -> Self {
        if avg_performance >= 4.5 {
            Self::ReadyNow
        } else if avg_performance >= 4.0 {
            Self::OneToTwoYears
        } else {
            Self::ThreePlusYears
        }
    }

    /// Development focus for a candidate at this readiness level.
    #[must_use]
    pub const fn development_needed(&self) -> &'static str {
        match self {
            Self::ReadyNow => "리더십 고도화, 전략적 사고",
            Self::OneToTwoYears => "관리 역량 강화, 의사결정 경험",
            Self::ThreePlusYears => "리더십 기본, 팀 관리 경험",
        }
    }
}

/// Titles considered when looking for successors to `incumbent`.
#[must_use]
pub const fn successor_titles(incumbent: JobTitle) -> &'static [JobTitle] {
    match incumbent {
        JobTitle::DivisionHead => &[
            JobTitle::TeamLead,
            JobTitle::DeputyGeneralManager,
            JobTitle::GeneralManager,
        ],
        _ => &[
            JobTitle::DeputyGeneralManager,
            JobTitle::Manager,
            JobTitle::AssistantManager,
        ],
    }
}
