// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Yearly project portfolios and their staffing.

use hr_fixtures_domain::serde_formats::iso_date;
use hr_fixtures_domain::{Employee, EmployeeId, shift_days};
use serde::Serialize;
use time::Date;
use tracing::info;

use crate::catalog::Catalog;
use crate::error::GenerationError;
use crate::random::RandomStream;
use crate::roster::Roster;
use crate::table::Record;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Project {
    id: String,
    name: String,
    start_date: Date,
    end_date: Date,
}

/// One employee's participation in one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectMembership {
    pub project_member_id: String,
    pub employee_id: EmployeeId,
    pub project_id: String,
    pub project_name: String,
    pub role: String,
    pub pm_qualitative_feedback: String,
    pub peer_qualitative_feedback: String,
    #[serde(serialize_with = "iso_date::serialize")]
    pub start_date: Date,
    #[serde(serialize_with = "iso_date::serialize")]
    pub end_date: Date,
}

impl Record for ProjectMembership {
    const TABLE: &'static str = "12_project_history";
    const COLUMNS: &'static [&'static str] = &[
        "project_member_id",
        "employee_id",
        "project_id",
        "project_name",
        "role",
        "pm_qualitative_feedback",
        "peer_qualitative_feedback",
        "start_date",
        "end_date",
    ];
}

fn plan_projects(
    catalog: &Catalog,
    start_year: i32,
    as_of: Date,
    rng: &mut RandomStream,
) -> Result<Vec<Project>, GenerationError> {
    let mut projects: Vec<Project> = Vec::new();
    for year in start_year..=as_of.year() {
        let planned: usize = rng.count(8, 15);
        for sequence in 1..=planned {
            let name: String = rng
                .pick("project_names", &catalog.narratives.projects.names)?
                .clone();
            let start_date: Date = rng.date_in_year(year, 1, 10)?;
            let duration_months: i64 = rng.int(3, 12);
            if start_date > as_of {
                continue;
            }
            projects.push(Project {
                id: format!("PRJ_{year}_{sequence:02}"),
                name,
                start_date,
                end_date: shift_days(start_date, duration_months * 30)?,
            });
        }
    }
    Ok(projects)
}

/// Plans projects for every year from `start_year` and staffs each with
/// 3 to 10 active employees already hired when it starts.
///
/// # Errors
///
/// Returns an error if a draw, template or date computation fails.
pub fn build_projects(
    roster: &Roster,
    catalog: &Catalog,
    start_year: i32,
    as_of: Date,
    rng: &mut RandomStream,
) -> Result<Vec<ProjectMembership>, GenerationError> {
    let narratives = &catalog.narratives.projects;
    let expander = catalog.expander();
    let projects: Vec<Project> = plan_projects(catalog, start_year, as_of, rng)?;
    let mut rows: Vec<ProjectMembership> = Vec::new();

    for project in &projects {
        let eligible: Vec<&Employee> = roster
            .active()
            .filter(|employee| employee.hire_date <= project.start_date)
            .collect();
        let team_size: usize = rng.count(3, 10);
        let team: Vec<&&Employee> = rng.sample(&eligible, team_size);

        for (slot, member) in team.into_iter().enumerate() {
            let role: String = narratives
                .roles
                .get(slot % narratives.roles.len().max(1))
                .cloned()
                .unwrap_or_default();
            let pm_qualitative_feedback: String =
                expander.expand_any("projects.pm_feedback", &narratives.pm_feedback, rng)?;
            let peer_qualitative_feedback: String =
                expander.expand_any("projects.peer_feedback", &narratives.peer_feedback, rng)?;

            rows.push(ProjectMembership {
                project_member_id: format!("PM{:04}", rows.len() + 1),
                employee_id: member.employee_id.clone(),
                project_id: project.id.clone(),
                project_name: project.name.clone(),
                role,
                pm_qualitative_feedback,
                peer_qualitative_feedback,
                start_date: project.start_date,
                end_date: project.end_date,
            });
        }
    }

    info!(
        projects = projects.len(),
        rows = rows.len(),
        "Built project history"
    );
    Ok(rows)
}
