// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The seeded random stream shared by every pipeline stage.
//!
//! Stages never create their own generators. The stream is passed by
//! `&mut` in pipeline order so a seed fully determines the dataset.

use hr_fixtures_domain::{DomainError, shift_days};
use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};
use time::{Date, Month, PrimitiveDateTime, Time};

/// Deterministic source of every random draw in the pipeline.
#[derive(Debug)]
pub struct RandomStream {
    rng: StdRng,
}

impl RandomStream {
    /// Creates a stream from a seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform integer in `low..=high`.
    pub fn int(&mut self, low: i64, high: i64) -> i64 {
        if high <= low {
            return low;
        }
        self.rng.random_range(low..=high)
    }

    /// Uniform count in `low..=high`.
    pub fn count(&mut self, low: usize, high: usize) -> usize {
        if high <= low {
            return low;
        }
        self.rng.random_range(low..=high)
    }

    /// Uniform float in `low..=high`.
    pub fn uniform(&mut self, low: f64, high: f64) -> f64 {
        if high <= low {
            return low;
        }
        self.rng.random_range(low..=high)
    }

    /// Returns `true` with probability `probability`.
    pub fn chance(&mut self, probability: f64) -> bool {
        self.rng.random_range(0.0..1.0) < probability
    }

    /// Draw from `N(mean, std_dev)`.
    pub fn normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        Normal::new(mean, std_dev).map_or(mean, |dist| dist.sample(&mut self.rng))
    }

    /// Draw from `N(mean, std_dev)` clamped to `[low, high]`.
    pub fn clipped_normal(&mut self, mean: f64, std_dev: f64, low: f64, high: f64) -> f64 {
        self.normal(mean, std_dev).clamp(low, high)
    }

    /// Date `low..=high` days after `from`. Negative offsets move backwards.
    ///
    /// # Errors
    ///
    /// Returns an error if the shifted date is out of range.
    pub fn date_after(&mut self, from: Date, low: i64, high: i64) -> Result<Date, DomainError> {
        let offset: i64 = self.int(low, high);
        shift_days(from, offset)
    }

    /// Date in `year` with a month in `first_month..=last_month` and a day
    /// in `1..=28`.
    ///
    /// # Errors
    ///
    /// Returns an error if a month is outside `1..=12` or the year is out of
    /// range.
    pub fn date_in_year(
        &mut self,
        year: i32,
        first_month: u8,
        last_month: u8,
    ) -> Result<Date, DomainError> {
        let month: u8 = self.rng.random_range(first_month..=last_month.max(first_month));
        let day: u8 = self.rng.random_range(1..=28);
        Ok(Date::from_calendar_date(year, Month::try_from(month)?, day)?)
    }

    /// Timestamp on `date` with an hour in `first_hour..=last_hour` and any
    /// minute.
    ///
    /// # Errors
    ///
    /// Returns an error if an hour is outside `0..=23`.
    pub fn time_on(
        &mut self,
        date: Date,
        first_hour: u8,
        last_hour: u8,
    ) -> Result<PrimitiveDateTime, DomainError> {
        let hour: u8 = self.rng.random_range(first_hour..=last_hour.max(first_hour));
        let minute: u8 = self.rng.random_range(0..=59);
        Ok(PrimitiveDateTime::new(date, Time::from_hms(hour, minute, 0)?))
    }

    /// Uniform pick from a pool.
    ///
    /// # Errors
    ///
    /// Returns an error if the pool is empty.
    pub fn pick<'a, T>(&mut self, pool: &str, items: &'a [T]) -> Result<&'a T, DomainError> {
        items
            .choose(&mut self.rng)
            .ok_or_else(|| DomainError::EmptyChoice {
                pool: pool.to_string(),
            })
    }

    /// Weighted pick from `(item, weight)` pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if the pool is empty or every weight is zero.
    pub fn weighted<'a, T>(
        &mut self,
        pool: &str,
        items: &'a [(T, u32)],
    ) -> Result<&'a T, DomainError> {
        items
            .choose_weighted(&mut self.rng, |(_, weight)| *weight)
            .map(|(item, _)| item)
            .map_err(|_| DomainError::EmptyChoice {
                pool: pool.to_string(),
            })
    }

    /// Up to `count` distinct items in random order.
    pub fn sample<'a, T>(&mut self, items: &'a [T], count: usize) -> Vec<&'a T> {
        let mut order: Vec<usize> = (0..items.len()).collect();
        order.shuffle(&mut self.rng);
        order.truncate(count);
        order.into_iter().map(|index| &items[index]).collect()
    }
}
