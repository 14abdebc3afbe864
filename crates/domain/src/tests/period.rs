// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::{Date, Month};

use crate::{
    DomainError, Half, Quarter, ReviewPeriod, completed_review_periods, days_between, shift_days,
    trailing_years, year_end, year_start,
};

fn date(year: i32, month: Month, day: u8) -> Date {
    Date::from_calendar_date(year, month, day).unwrap()
}

#[test]
fn test_completed_review_periods_before_year_end() {
    let as_of: Date = date(2024, Month::December, 15);
    let periods: Vec<ReviewPeriod> = completed_review_periods(2022, as_of).unwrap();

    let labels: Vec<String> = periods.iter().map(ToString::to_string).collect();
    assert_eq!(
        labels,
        vec!["2022 H1", "2022 H2", "2023 H1", "2023 H2", "2024 H1"]
    );
}

#[test]
fn test_review_period_completes_on_its_last_day() {
    let as_of: Date = date(2024, Month::December, 31);
    let periods: Vec<ReviewPeriod> = completed_review_periods(2024, as_of).unwrap();
    assert_eq!(periods.len(), 2);
    assert_eq!(
        periods.last(),
        Some(&ReviewPeriod {
            year: 2024,
            half: Half::H2
        })
    );
}

#[test]
fn test_review_periods_reject_future_start() {
    let as_of: Date = date(2024, Month::December, 15);
    assert_eq!(
        completed_review_periods(2025, as_of),
        Err(DomainError::InvalidYearRange {
            start: 2025,
            as_of_year: 2024
        })
    );
}

#[test]
fn test_review_period_bounds() {
    let period: ReviewPeriod = ReviewPeriod {
        year: 2023,
        half: Half::H2,
    };
    assert_eq!(period.start().unwrap(), date(2023, Month::July, 1));
    assert_eq!(period.end().unwrap(), date(2023, Month::December, 31));
}

#[test]
fn test_quarter_bounds() {
    let quarters: [Quarter; 4] = Quarter::of_year(2024);
    assert_eq!(quarters[0].start().unwrap(), date(2024, Month::January, 1));
    assert_eq!(quarters[0].end().unwrap(), date(2024, Month::March, 31));
    assert_eq!(quarters[1].end().unwrap(), date(2024, Month::June, 30));
    assert_eq!(quarters[2].start().unwrap(), date(2024, Month::July, 1));
    assert_eq!(quarters[3].end().unwrap(), date(2024, Month::December, 31));
    assert_eq!(quarters[2].to_string(), "2024 Q3");
}

#[test]
fn test_invalid_quarter_index_is_an_error() {
    let quarter: Quarter = Quarter {
        year: 2024,
        index: 5,
    };
    assert!(matches!(quarter.end(), Err(DomainError::InvalidDate { .. })));
}

#[test]
fn test_shift_days_crosses_leap_day() {
    let shifted: Date = shift_days(date(2024, Month::February, 28), 2).unwrap();
    assert_eq!(shifted, date(2024, Month::March, 1));

    let back: Date = shift_days(shifted, -2).unwrap();
    assert_eq!(back, date(2024, Month::February, 28));
}

#[test]
fn test_shift_days_overflow() {
    let result: Result<Date, DomainError> = shift_days(Date::MAX, 1);
    assert!(matches!(
        result,
        Err(DomainError::DateArithmeticOverflow { .. })
    ));
}

#[test]
fn test_days_between() {
    let from: Date = date(2024, Month::January, 1);
    let to: Date = date(2024, Month::December, 31);
    assert_eq!(days_between(from, to), 365);
    assert_eq!(days_between(to, from), -365);
}

#[test]
fn test_year_helpers() {
    assert_eq!(year_start(2023).unwrap(), date(2023, Month::January, 1));
    assert_eq!(year_end(2023).unwrap(), date(2023, Month::December, 31));
    assert_eq!(
        trailing_years(date(2024, Month::December, 15), 3),
        vec![2022, 2023, 2024]
    );
}

#[test]
fn test_review_period_serializes_as_label() {
    let period: ReviewPeriod = ReviewPeriod {
        year: 2022,
        half: Half::H1,
    };
    assert_eq!(serde_json::to_string(&period).unwrap(), "\"2022 H1\"");
}
