// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::Serialize;

/// Hidden per-unit parameter that shapes culture survey answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CultureTier {
    Excellent,
    Good,
    Average,
    Poor,
}

impl CultureTier {
    /// Every tier with its draw weight.
    pub const WEIGHTED: [(Self, u32); 4] = [
        (Self::Excellent, 1),
        (Self::Good, 2),
        (Self::Average, 2),
        (Self::Poor, 1),
    ];

    /// Returns the tier name used to key comment pools.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Average => "average",
            Self::Poor => "poor",
        }
    }

    /// Mean survey answer on the 1-5 scale.
    #[must_use]
    pub const fn mean(&self) -> f64 {
        match self {
            Self::Excellent => 4.5,
            Self::Good => 4.0,
            Self::Average => 3.5,
            Self::Poor => 2.5,
        }
    }

    /// Standard deviation of survey answers.
    #[must_use]
    pub const fn std_dev(&self) -> f64 {
        match self {
            Self::Excellent => 0.3,
            Self::Good => 0.4,
            Self::Average => 0.5,
            Self::Poor => 0.6,
        }
    }
}
