// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Monthly one-on-one meetings between employees and their managers.

use hr_fixtures_domain::serde_formats::{iso_date, iso_datetime};
use hr_fixtures_domain::{DomainError, EmployeeId, shift_days, year_start};
use serde::Serialize;
use time::{Date, PrimitiveDateTime, Time};
use tracing::info;

use crate::catalog::Catalog;
use crate::error::GenerationError;
use crate::numbers::round1;
use crate::random::RandomStream;
use crate::roster::Roster;
use crate::table::Record;

const MEETING_INTERVAL_DAYS: i64 = 30;
const MEETING_MINUTES: [u8; 2] = [0, 30];
const DURATIONS: [u32; 3] = [30, 45, 60];
const LIST_SEPARATOR: &str = " | ";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OneOnOneMeeting {
    pub meeting_id: String,
    pub employee_id: EmployeeId,
    pub manager_id: EmployeeId,
    #[serde(serialize_with = "iso_datetime::serialize")]
    pub meeting_datetime: PrimitiveDateTime,
    pub duration_minutes: u32,
    pub discussion_topics: String,
    pub action_items: String,
    #[serde(serialize_with = "iso_date::serialize")]
    pub next_meeting_scheduled: Date,
    pub employee_satisfaction_score: f64,
    pub meeting_status: &'static str,
}

impl Record for OneOnOneMeeting {
    const TABLE: &'static str = "19_one_on_one_meetings";
    const COLUMNS: &'static [&'static str] = &[
        "meeting_id",
        "employee_id",
        "manager_id",
        "meeting_datetime",
        "duration_minutes",
        "discussion_topics",
        "action_items",
        "next_meeting_scheduled",
        "employee_satisfaction_score",
        "meeting_status",
    ];
}

/// Schedules a meeting roughly every month from the start of the previous
/// year, or the hire date if later, up to `as_of`.
///
/// # Errors
///
/// Returns an error if a draw, template or date computation fails.
pub fn build_meetings(
    roster: &Roster,
    catalog: &Catalog,
    as_of: Date,
    rng: &mut RandomStream,
) -> Result<Vec<OneOnOneMeeting>, GenerationError> {
    let narratives = &catalog.narratives.meetings;
    let expander = catalog.expander();
    let window_start: Date = year_start(as_of.year() - 1)?;
    let mut rows: Vec<OneOnOneMeeting> = Vec::new();

    for employee in roster.active() {
        let Some(manager_id) = employee.manager_id.as_ref() else {
            continue;
        };
        let mut cursor: Date = window_start.max(employee.hire_date);

        while cursor <= as_of {
            let meeting_date: Date = rng.date_after(cursor, 0, 28)?;
            if meeting_date > as_of {
                break;
            }
            let hour: u8 = u8::try_from(rng.int(10, 16)).unwrap_or(10);
            let minute: u8 = *rng.pick("meeting_minutes", &MEETING_MINUTES)?;
            let start: Time = Time::from_hms(hour, minute, 0).map_err(DomainError::from)?;
            let duration_minutes: u32 = *rng.pick("meeting_durations", &DURATIONS)?;

            let topic_count: usize = rng.count(2, 3);
            let discussion_topics: String = rng
                .sample(&narratives.topics, topic_count)
                .into_iter()
                .map(String::as_str)
                .collect::<Vec<&str>>()
                .join(LIST_SEPARATOR);

            let candidates: Vec<String> = narratives
                .action_items
                .iter()
                .map(|template| expander.expand(template, rng))
                .collect::<Result<_, _>>()?;
            let item_count: usize = rng.count(1, 2);
            let action_items: String = rng
                .sample(&candidates, item_count)
                .into_iter()
                .map(String::as_str)
                .collect::<Vec<&str>>()
                .join(LIST_SEPARATOR);

            let next_meeting_scheduled: Date = rng.date_after(meeting_date, 25, 35)?;
            rows.push(OneOnOneMeeting {
                meeting_id: format!("MTG{:06}", rows.len() + 1),
                employee_id: employee.employee_id.clone(),
                manager_id: manager_id.clone(),
                meeting_datetime: PrimitiveDateTime::new(meeting_date, start),
                duration_minutes,
                discussion_topics,
                action_items,
                next_meeting_scheduled,
                employee_satisfaction_score: round1(rng.uniform(3.5, 5.0)),
                meeting_status: "완료",
            });

            cursor = shift_days(cursor, MEETING_INTERVAL_DAYS)?;
        }
    }

    info!(rows = rows.len(), "Built one-on-one meetings");
    Ok(rows)
}
