// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Scoring rules for the recruitment assessment chain.
//!
//! Aptitude results map to a letter grade and a pass/fail outcome, CPI
//! vector scales map to a lifestyle type, and MMPI clinical scales map to a
//! risk level and an overall adjustment rating.

use serde::Serialize;

use crate::types::Grade;

/// T-score at or above which a clinical scale counts as elevated.
pub const CLINICAL_ELEVATION_THRESHOLD: i32 = 70;

/// T-score at or above which a single D or Sc scale marks a profile high risk.
pub const CRITICAL_SCALE_THRESHOLD: i32 = 75;

/// Maps an overall aptitude score to a grade.
///
/// Thresholds: 85 S, 75 A, 65 B, 55 C, anything lower D.
#[must_use]
pub fn aptitude_grade(overall_score: f64) -> Grade {
    if overall_score >= 85.0 {
        Grade::S
    } else if overall_score >= 75.0 {
        Grade::A
    } else if overall_score >= 65.0 {
        Grade::B
    } else if overall_score >= 55.0 {
        Grade::C
    } else {
        Grade::D
    }
}

/// Screening outcome of the aptitude test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PassFail {
    Pass,
    Fail,
}

impl PassFail {
    /// Every grade except D passes.
    #[must_use]
    pub const fn from_grade(grade: Grade) -> Self {
        match grade {
            Grade::D => Self::Fail,
            Grade::S | Grade::A | Grade::B | Grade::C => Self::Pass,
        }
    }
}

/// CPI lifestyle quadrant derived from the v1 (extraversion) and v2
/// (norm orientation) vector scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LifestyleType {
    /// Outgoing and norm-favouring.
    Alpha,
    /// Reserved and norm-favouring.
    Beta,
    /// Outgoing and norm-questioning.
    Gamma,
    /// Reserved and norm-questioning.
    Delta,
}

impl LifestyleType {
    /// Midpoint separating the quadrants on both vectors.
    pub const SPLIT: i32 = 50;

    /// Classifies a profile by its two vector scales.
    #[must_use]
    pub const fn from_vectors(v1: i32, v2: i32) -> Self {
        match (v1 >= Self::SPLIT, v2 >= Self::SPLIT) {
            (true, true) => Self::Alpha,
            (false, true) => Self::Beta,
            (true, false) => Self::Gamma,
            (false, false) => Self::Delta,
        }
    }
}

/// Whether the MMPI validity scales allow the profile to be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ValidityStatus {
    Valid,
    Invalid,
}

/// Clinical risk level of an MMPI profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Overall adjustment rating of an MMPI profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OverallAdjustment {
    Good,
    Fair,
    Poor,
}

impl OverallAdjustment {
    /// GOOD needs a low-risk valid profile, MEDIUM risk is always FAIR,
    /// everything else is POOR.
    #[must_use]
    pub const fn from_profile(risk: RiskLevel, validity: ValidityStatus) -> Self {
        match (risk, validity) {
            (RiskLevel::Low, ValidityStatus::Valid) => Self::Good,
            (RiskLevel::Medium, _) => Self::Fair,
            _ => Self::Poor,
        }
    }
}

/// The ten MMPI clinical scales as T-scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClinicalScales {
    pub hs: i32,
    pub d: i32,
    pub hy: i32,
    pub pd: i32,
    pub mf: i32,
    pub pa: i32,
    pub pt: i32,
    pub sc: i32,
    pub ma: i32,
    pub si: i32,
}

impl ClinicalScales {
    /// Scales that take part in the elevation count. Mf is excluded.
    #[must_use]
    pub const fn scored(&self) -> [i32; 9] {
        [
            self.hs, self.d, self.hy, self.pd, self.pa, self.pt, self.sc, self.ma, self.si,
        ]
    }

    /// Number of scored scales at or above the elevation threshold.
    #[must_use]
    pub fn elevation_count(&self) -> usize {
        self.scored()
            .iter()
            .filter(|score| **score >= CLINICAL_ELEVATION_THRESHOLD)
            .count()
    }

    /// HIGH with three or more elevations or a critical D or Sc score,
    /// MEDIUM with at least one elevation, otherwise LOW.
    #[must_use]
    pub fn risk_level(&self) -> RiskLevel {
        let elevations: usize = self.elevation_count();
        if elevations >= 3
            || self.d >= CRITICAL_SCALE_THRESHOLD
            || self.sc >= CRITICAL_SCALE_THRESHOLD
        {
            RiskLevel::High
        } else if elevations >= 1 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}
