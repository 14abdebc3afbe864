// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Static data assets: metric definitions and narrative templates.
//!
//! Both assets are embedded at compile time and parsed once. Stages read
//! them as opaque lookup tables.

use std::collections::BTreeMap;

use hr_fixtures_domain::{CultureTier, Grade};
use serde::{Deserialize, Serialize};

use crate::error::GenerationError;
use crate::table::Record;
use crate::template::Expander;

const METRICS_ASSET: &str = "metrics.json";
const NARRATIVES_ASSET: &str = "narratives.json";

const EMBEDDED_METRICS: &str = include_str!("../assets/metrics.json");
const EMBEDDED_NARRATIVES: &str = include_str!("../assets/narratives.json");

/// Code prefix of the competency framework skills.
pub const SKILL_CODE_PREFIX: &str = "SKILL_";
/// Code prefix of the leadership 360 metrics.
pub const LEADERSHIP_CODE_PREFIX: &str = "LEAD_";

/// One row of the HR metrics dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricDefinition {
    #[serde(alias = "code")]
    pub metric_code: String,
    #[serde(alias = "name")]
    pub metric_name: String,
    #[serde(alias = "tool")]
    pub tool_name: String,
    pub dimension: String,
    pub definition: String,
    #[serde(alias = "scale")]
    pub measurement_scale: String,
    #[serde(alias = "high")]
    pub high_score_characteristics: String,
    #[serde(alias = "low")]
    pub low_score_characteristics: String,
}

impl Record for MetricDefinition {
    const TABLE: &'static str = "02_hr_metrics_definition";
    const COLUMNS: &'static [&'static str] = &[
        "metric_code",
        "metric_name",
        "tool_name",
        "dimension",
        "definition",
        "measurement_scale",
        "high_score_characteristics",
        "low_score_characteristics",
    ];
}

#[derive(Debug, Deserialize)]
struct MetricsAsset {
    metrics: Vec<MetricDefinition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecruitmentNarratives {
    pub channels: Vec<String>,
    pub executive_channels: Vec<String>,
    pub interviewer_comments: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrainingCourse {
    pub name: String,
    pub category: String,
    pub hours: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectNarratives {
    pub names: Vec<String>,
    pub roles: Vec<String>,
    pub pm_feedback: Vec<String>,
    pub peer_feedback: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContinuousReviewNarratives {
    pub review_types: Vec<String>,
    pub self_comments: Vec<String>,
    manager_comments: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoalCategory {
    pub name: String,
    pub descriptions: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoalNarratives {
    pub types: Vec<String>,
    pub categories: Vec<GoalCategory>,
}

/// A reward or disciplinary action with its monetary effect in KRW.
#[derive(Debug, Clone, Deserialize)]
pub struct Award {
    pub category: String,
    pub reason: String,
    pub amount: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MeetingNarratives {
    pub topics: Vec<String>,
    pub action_items: Vec<String>,
}

/// Template pools and categorical lists used by the stages.
#[derive(Debug, Clone, Deserialize)]
pub struct Narratives {
    fragments: BTreeMap<String, Vec<String>>,
    pub recruitment: RecruitmentNarratives,
    pub motivation_drivers: Vec<String>,
    pub onboarding_programs: Vec<String>,
    pub training_courses: Vec<TrainingCourse>,
    pub projects: ProjectNarratives,
    performance_comments: BTreeMap<String, Vec<String>>,
    pub continuous_review: ContinuousReviewNarratives,
    pub goals: GoalNarratives,
    pub exit_feedback: Vec<String>,
    culture_comments: BTreeMap<String, Vec<String>>,
    pub rewards: Vec<Award>,
    pub disciplines: Vec<Award>,
    pub meetings: MeetingNarratives,
}

/// Parsed data assets.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub metrics: Vec<MetricDefinition>,
    pub narratives: Narratives,
}

impl Catalog {
    /// Parses the assets embedded in the binary.
    ///
    /// # Errors
    ///
    /// Returns an error if an asset is malformed or incomplete.
    pub fn embedded() -> Result<Self, GenerationError> {
        Self::from_json(EMBEDDED_METRICS, EMBEDDED_NARRATIVES)
    }

    /// Parses assets from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if an asset is malformed or incomplete.
    pub fn from_json(metrics: &str, narratives: &str) -> Result<Self, GenerationError> {
        let metrics: MetricsAsset =
            serde_json::from_str(metrics).map_err(|source| GenerationError::Asset {
                asset: METRICS_ASSET,
                source,
            })?;
        let narratives: Narratives =
            serde_json::from_str(narratives).map_err(|source| GenerationError::Asset {
                asset: NARRATIVES_ASSET,
                source,
            })?;

        let catalog: Self = Self {
            metrics: metrics.metrics,
            narratives,
        };
        catalog.check_complete()?;
        Ok(catalog)
    }

    /// Template expander over the shared fragment pools.
    #[must_use]
    pub const fn expander(&self) -> Expander<'_> {
        Expander::new(&self.narratives.fragments)
    }

    /// Codes of the competency skills rated in the skill campaign.
    #[must_use]
    pub fn skill_codes(&self) -> Vec<&str> {
        self.metric_codes(SKILL_CODE_PREFIX)
    }

    /// Codes of the leadership 360 metrics.
    #[must_use]
    pub fn leadership_codes(&self) -> Vec<&str> {
        self.metric_codes(LEADERSHIP_CODE_PREFIX)
    }

    fn metric_codes(&self, prefix: &str) -> Vec<&str> {
        self.metrics
            .iter()
            .map(|metric| metric.metric_code.as_str())
            .filter(|code| code.starts_with(prefix))
            .collect()
    }

    /// Manager development comments for a half-year grade.
    ///
    /// # Errors
    ///
    /// Returns an error if the grade has no comment pool.
    pub fn performance_comments(&self, grade: Grade) -> Result<&[String], GenerationError> {
        lookup(
            &self.narratives.performance_comments,
            grade.as_str(),
            "performance_comments",
        )
    }

    /// Manager comments for a continuous review. Grades without a pool
    /// fall back to B.
    ///
    /// # Errors
    ///
    /// Returns an error if neither the grade nor B has a pool.
    pub fn manager_comments(&self, grade: Grade) -> Result<&[String], GenerationError> {
        let comments: &BTreeMap<String, Vec<String>> =
            &self.narratives.continuous_review.manager_comments;
        let key: &str = if comments.contains_key(grade.as_str()) {
            grade.as_str()
        } else {
            Grade::B.as_str()
        };
        lookup(comments, key, "continuous_review.manager_comments")
    }

    /// Survey comments for a culture tier.
    ///
    /// # Errors
    ///
    /// Returns an error if the tier has no comment pool.
    pub fn culture_comments(&self, tier: CultureTier) -> Result<&[String], GenerationError> {
        lookup(
            &self.narratives.culture_comments,
            tier.as_str(),
            "culture_comments",
        )
    }

    fn check_complete(&self) -> Result<(), GenerationError> {
        for grade in [Grade::S, Grade::A, Grade::B, Grade::C, Grade::D] {
            self.performance_comments(grade)?;
            self.manager_comments(grade)?;
        }
        for (tier, _) in CultureTier::WEIGHTED {
            self.culture_comments(tier)?;
        }
        if self.skill_codes().is_empty() || self.leadership_codes().is_empty() {
            return Err(GenerationError::IncompleteAsset {
                asset: METRICS_ASSET,
                reason: String::from("skill and leadership metrics are required"),
            });
        }
        if self.narratives.goals.categories.is_empty() {
            return Err(GenerationError::IncompleteAsset {
                asset: NARRATIVES_ASSET,
                reason: String::from("goal categories are required"),
            });
        }
        Ok(())
    }
}

fn lookup<'a>(
    pools: &'a BTreeMap<String, Vec<String>>,
    key: &str,
    section: &str,
) -> Result<&'a [String], GenerationError> {
    pools
        .get(key)
        .filter(|pool| !pool.is_empty())
        .map(Vec::as_slice)
        .ok_or_else(|| GenerationError::IncompleteAsset {
            asset: NARRATIVES_ASSET,
            reason: format!("{section} has no entries for '{key}'"),
        })
}
