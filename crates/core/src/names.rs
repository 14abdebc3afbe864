// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Korean personal-name generation.

use std::path::Path;

use hr_fixtures_domain::{DomainError, Gender};
use serde::Deserialize;
use tracing::{info, warn};

use crate::error::GenerationError;
use crate::random::RandomStream;

const NAME_POOL_ASSET: &str = "names_ko.json";
const EMBEDDED_NAME_POOL: &str = include_str!("../assets/names_ko.json");

const SIMPLE_SURNAMES: [&str; 20] = [
    "김", "이", "박", "최", "정", "강", "조", "윤", "장", "임", "한", "오", "서", "신", "권", "황",
    "안", "송", "류", "홍",
];
const SIMPLE_MALE_NAMES: [&str; 20] = [
    "민준", "서준", "도윤", "예준", "시우", "주원", "하준", "지호", "준서", "건우", "우진", "현우",
    "선우", "연우", "유준", "정우", "승우", "승현", "시윤", "준혁",
];
const SIMPLE_FEMALE_NAMES: [&str; 20] = [
    "서연", "서윤", "지우", "서현", "민서", "하은", "하윤", "윤서", "지유", "채원", "지민", "수아",
    "다은", "예은", "소율", "예린", "지안", "수빈", "시은", "소윤",
];

/// Produces a full name matching a gender.
pub trait NameGenerator {
    /// Draws one name.
    ///
    /// # Errors
    ///
    /// Returns an error if a name pool is empty.
    fn name(&self, gender: Gender, rng: &mut RandomStream) -> Result<String, DomainError>;
}

/// Uniform surname and given name from short built-in lists.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleNameGenerator;

impl NameGenerator for SimpleNameGenerator {
    fn name(&self, gender: Gender, rng: &mut RandomStream) -> Result<String, DomainError> {
        let surname: &str = *rng.pick("surnames", &SIMPLE_SURNAMES)?;
        let given: &str = match gender {
            Gender::Male => *rng.pick("male_names", &SIMPLE_MALE_NAMES)?,
            Gender::Female => *rng.pick("female_names", &SIMPLE_FEMALE_NAMES)?,
        };
        Ok(format!("{surname}{given}"))
    }
}

#[derive(Debug, Deserialize)]
struct WeightedSurname {
    name: String,
    weight: u32,
}

#[derive(Debug, Deserialize)]
struct GivenNames {
    male: Vec<String>,
    female: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct NamePoolAsset {
    surnames: Vec<WeightedSurname>,
    given_names: GivenNames,
}

/// Population-weighted surnames and larger given-name lists.
#[derive(Debug, Clone)]
pub struct PooledNameGenerator {
    surnames: Vec<(String, u32)>,
    male: Vec<String>,
    female: Vec<String>,
}

impl PooledNameGenerator {
    /// The pool shipped with the crate.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded pool is malformed.
    pub fn embedded() -> Result<Self, GenerationError> {
        Self::from_json(EMBEDDED_NAME_POOL)
    }

    /// Parses a pool from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a list is empty.
    pub fn from_json(json: &str) -> Result<Self, GenerationError> {
        let asset: NamePoolAsset =
            serde_json::from_str(json).map_err(|source| GenerationError::Asset {
                asset: NAME_POOL_ASSET,
                source,
            })?;

        let surnames: Vec<(String, u32)> = asset
            .surnames
            .into_iter()
            .filter(|surname| surname.weight > 0)
            .map(|surname| (surname.name, surname.weight))
            .collect();
        if surnames.is_empty()
            || asset.given_names.male.is_empty()
            || asset.given_names.female.is_empty()
        {
            return Err(GenerationError::IncompleteAsset {
                asset: NAME_POOL_ASSET,
                reason: String::from("surnames and both given-name lists must be non-empty"),
            });
        }

        Ok(Self {
            surnames,
            male: asset.given_names.male,
            female: asset.given_names.female,
        })
    }
}

impl NameGenerator for PooledNameGenerator {
    fn name(&self, gender: Gender, rng: &mut RandomStream) -> Result<String, DomainError> {
        let surname: &String = rng.weighted("surnames", &self.surnames)?;
        let given: &String = match gender {
            Gender::Male => rng.pick("male_names", &self.male)?,
            Gender::Female => rng.pick("female_names", &self.female)?,
        };
        Ok(format!("{surname}{given}"))
    }
}

/// Chooses the name generator for a run.
///
/// An external pool wins over the embedded one. If the chosen pool cannot
/// be read or parsed, the run degrades to [`SimpleNameGenerator`].
#[must_use]
pub fn select_name_generator(name_pool: Option<&Path>) -> Box<dyn NameGenerator> {
    let pooled: Result<PooledNameGenerator, String> = match name_pool {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|err| format!("cannot read '{}': {err}", path.display()))
            .and_then(|json| PooledNameGenerator::from_json(&json).map_err(|err| err.to_string())),
        None => PooledNameGenerator::embedded().map_err(|err| err.to_string()),
    };

    match pooled {
        Ok(generator) => {
            info!(
                surnames = generator.surnames.len(),
                external = name_pool.is_some(),
                "Using pooled name generator"
            );
            Box::new(generator)
        }
        Err(reason) => {
            warn!(%reason, "Name pool unavailable, falling back to simple names");
            Box::new(SimpleNameGenerator)
        }
    }
}
