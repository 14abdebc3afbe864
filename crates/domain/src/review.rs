// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::Grade;

/// Half-year grade pool. Drawing uniformly gives a bell-shaped distribution.
pub const PERFORMANCE_GRADE_POOL: [Grade; 11] = [
    Grade::S,
    Grade::A,
    Grade::A,
    Grade::A,
    Grade::B,
    Grade::B,
    Grade::B,
    Grade::B,
    Grade::C,
    Grade::C,
    Grade::D,
];

/// Self ratings skew high.
pub const SELF_RATING_POOL: [Grade; 7] = [
    Grade::S,
    Grade::S,
    Grade::A,
    Grade::A,
    Grade::A,
    Grade::B,
    Grade::B,
];

/// Weighted manager ratings given a self rating. Managers rate the same or lower.
#[must_use]
pub const fn manager_rating_weights(self_rating: Grade) -> &'static [(Grade, u32)] {
    match self_rating {
        Grade::S => &[(Grade::S, 1), (Grade::A, 3)],
        Grade::A => &[(Grade::A, 2), (Grade::B, 2)],
        Grade::B => &[(Grade::B, 2), (Grade::C, 1)],
        Grade::C => &[(Grade::B, 1), (Grade::C, 2)],
        Grade::D => &[(Grade::B, 1)],
    }
}

/// Mean grade score of `grades`, or `None` when empty.
#[must_use]
pub fn average_grade_score(grades: &[Grade]) -> Option<f64> {
    if grades.is_empty() {
        return None;
    }
    let count: u32 = u32::try_from(grades.len()).ok()?;
    let total: u32 = grades.iter().map(|grade| u32::from(grade.score())).sum();
    Some(f64::from(total) / f64::from(count))
}
