// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar windows used by periodic records.
//!
//! Review periods are half-years, goal periods are quarters. A period is
//! *completed* once its last day is on or before the simulated "now".

use serde::{Serialize, Serializer};
use time::{Date, Duration, Month};

use crate::error::DomainError;

/// Half of a calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Half {
    H1,
    H2,
}

impl Half {
    /// Returns the half label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::H1 => "H1",
            Self::H2 => "H2",
        }
    }
}

/// A half-year performance review period (e.g. `2023 H2`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReviewPeriod {
    pub year: i32,
    pub half: Half,
}

impl ReviewPeriod {
    /// First day of the period.
    ///
    /// # Errors
    ///
    /// Returns an error if the year is outside the supported calendar.
    pub fn start(&self) -> Result<Date, DomainError> {
        let month: Month = match self.half {
            Half::H1 => Month::January,
            Half::H2 => Month::July,
        };
        Ok(Date::from_calendar_date(self.year, month, 1)?)
    }

    /// Last day of the period.
    ///
    /// # Errors
    ///
    /// Returns an error if the year is outside the supported calendar.
    pub fn end(&self) -> Result<Date, DomainError> {
        let (month, day): (Month, u8) = match self.half {
            Half::H1 => (Month::June, 30),
            Half::H2 => (Month::December, 31),
        };
        Ok(Date::from_calendar_date(self.year, month, day)?)
    }
}

impl std::fmt::Display for ReviewPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.year, self.half.as_str())
    }
}

impl Serialize for ReviewPeriod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Lists every review period from `start_year` whose end is on or before `as_of`.
///
/// # Errors
///
/// Returns an error if `start_year` is after the year of `as_of`.
pub fn completed_review_periods(
    start_year: i32,
    as_of: Date,
) -> Result<Vec<ReviewPeriod>, DomainError> {
    if start_year > as_of.year() {
        return Err(DomainError::InvalidYearRange {
            start: start_year,
            as_of_year: as_of.year(),
        });
    }

    let mut periods: Vec<ReviewPeriod> = Vec::new();
    for year in start_year..=as_of.year() {
        for half in [Half::H1, Half::H2] {
            let period: ReviewPeriod = ReviewPeriod { year, half };
            if period.end()? <= as_of {
                periods.push(period);
            }
        }
    }
    Ok(periods)
}

/// A calendar quarter used for goal setting (e.g. `2024 Q3`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quarter {
    pub year: i32,
    /// 1-based quarter index.
    pub index: u8,
}

impl Quarter {
    /// The four quarters of `year`.
    #[must_use]
    pub fn of_year(year: i32) -> [Self; 4] {
        [1, 2, 3, 4].map(|index| Self { year, index })
    }

    /// First day of the quarter.
    ///
    /// # Errors
    ///
    /// Returns an error if the quarter index or year is out of range.
    pub fn start(&self) -> Result<Date, DomainError> {
        let month: Month = Month::try_from(self.index.saturating_sub(1) * 3 + 1)?;
        Ok(Date::from_calendar_date(self.year, month, 1)?)
    }

    /// Last day of the quarter.
    ///
    /// # Errors
    ///
    /// Returns an error if the quarter index or year is out of range.
    pub fn end(&self) -> Result<Date, DomainError> {
        let month: Month = Month::try_from(self.index.saturating_mul(3))?;
        let day: u8 = time::util::days_in_month(month, self.year);
        Ok(Date::from_calendar_date(self.year, month, day)?)
    }
}

impl std::fmt::Display for Quarter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} Q{}", self.year, self.index)
    }
}

impl Serialize for Quarter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Adds `days` (may be negative) to `date`.
///
/// # Errors
///
/// Returns an error if the result is outside the supported calendar.
pub fn shift_days(date: Date, days: i64) -> Result<Date, DomainError> {
    date.checked_add(Duration::days(days))
        .ok_or_else(|| DomainError::DateArithmeticOverflow {
            operation: format!("shifting {date} by {days} days"),
        })
}

/// Number of days from `from` to `to` (negative if `to` is earlier).
#[must_use]
pub fn days_between(from: Date, to: Date) -> i64 {
    (to - from).whole_days()
}

/// January 1 of `year`.
///
/// # Errors
///
/// Returns an error if the year is outside the supported calendar.
pub fn year_start(year: i32) -> Result<Date, DomainError> {
    Ok(Date::from_calendar_date(year, Month::January, 1)?)
}

/// December 31 of `year`.
///
/// # Errors
///
/// Returns an error if the year is outside the supported calendar.
pub fn year_end(year: i32) -> Result<Date, DomainError> {
    Ok(Date::from_calendar_date(year, Month::December, 31)?)
}

/// The last `count` calendar years ending with the year of `as_of`, oldest first.
#[must_use]
pub fn trailing_years(as_of: Date, count: i32) -> Vec<i32> {
    let last: i32 = as_of.year();
    ((last - count + 1)..=last).collect()
}
