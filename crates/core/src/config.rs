// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::path::PathBuf;

use hr_fixtures_domain::{DomainError, OrgTopology};
use time::Date;
use time::macros::date;

use crate::error::GenerationError;

/// Hire date of the company root.
pub const ROOT_HIRE_DATE: Date = date!(2010 - 01 - 01);

/// Inputs that fully determine a generated dataset.
///
/// Two runs with equal configurations produce byte-identical tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Seed for the single random stream.
    pub seed: u64,
    /// The simulated "now". Nothing is dated after it.
    pub as_of: Date,
    /// First year of half-year review periods.
    pub review_start_year: i32,
    /// First year projects are generated for.
    pub project_start_year: i32,
    /// Company layout to staff.
    pub topology: OrgTopology,
    /// Optional external name pool; the embedded pool is used otherwise.
    pub name_pool: Option<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            as_of: date!(2024 - 12 - 15),
            review_start_year: 2022,
            project_start_year: 2020,
            topology: OrgTopology::default(),
            name_pool: None,
        }
    }
}

impl GeneratorConfig {
    /// Validates the configuration before any table is built.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The topology is invalid
    /// - `as_of` precedes the root's hire date
    /// - A start year lies after the `as_of` year
    pub fn validate(&self) -> Result<(), GenerationError> {
        self.topology.validate()?;

        let as_of_year: i32 = self.as_of.year();
        if self.as_of < ROOT_HIRE_DATE {
            return Err(DomainError::InvalidYearRange {
                start: ROOT_HIRE_DATE.year(),
                as_of_year,
            }
            .into());
        }

        for start in [self.review_start_year, self.project_start_year] {
            if start > as_of_year {
                return Err(DomainError::InvalidYearRange { start, as_of_year }.into());
            }
        }

        Ok(())
    }
}
