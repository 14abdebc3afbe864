// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the generation pipeline.

use hr_fixtures_domain::DomainError;
use thiserror::Error;

/// Errors raised while building the dataset.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// A domain rule or a configuration check failed.
    #[error("Domain rule violation: {0}")]
    Domain(#[from] DomainError),

    /// An embedded data asset could not be parsed.
    #[error("Failed to parse data asset '{asset}': {source}")]
    Asset {
        asset: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A data asset parsed but is missing required content.
    #[error("Data asset '{asset}' is incomplete: {reason}")]
    IncompleteAsset { asset: &'static str, reason: String },

    /// A narrative template is malformed.
    #[error("Malformed template '{template}': {reason}")]
    Template { template: String, reason: String },
}
