// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Organization tree, employee roster and reporting lines.
//!
//! ## Invariants
//!
//! - Exactly one root (`EMP000`) with no manager
//! - Every manager id resolves to an employee created in an earlier layer
//! - Unit heads are the leaders staffed for that unit
//! - Separated employees have an exit date in `[hire_date, as_of]`

use std::collections::HashMap;

use hr_fixtures_domain::{
    DomainError, Employee, EmployeeId, EmploymentStatus, EmploymentType, Gender, JobTitle, OrgId,
    OrgType, OrgUnit, StaffingRole, contributor_title_choices, days_between, shift_days,
    year_start,
};
use serde::Serialize;
use time::Date;
use tracing::info;

use crate::config::{GeneratorConfig, ROOT_HIRE_DATE};
use crate::error::GenerationError;
use crate::names::NameGenerator;
use crate::random::RandomStream;
use crate::roster::Roster;
use crate::table::Record;

/// Days after hire within which a separation is first drawn.
const EXIT_WINDOW_DAYS: (i64, i64) = (180, 2920);
/// Days before `as_of` a separation is moved to when the first draw lands in the future.
const EXIT_REDRAW_DAYS: (i64, i64) = (-365, -30);
/// Contributors are hired between Jan 1 of this many years back and `as_of`.
const CONTRIBUTOR_HIRE_YEARS: i32 = 9;

impl Record for OrgUnit {
    const TABLE: &'static str = "00_organization_structure";
    const COLUMNS: &'static [&'static str] = &[
        "org_id",
        "org_name",
        "org_type",
        "parent_org_id",
        "level",
        "head_employee_id",
    ];
}

impl Record for Employee {
    const TABLE: &'static str = "03_employee_info";
    const COLUMNS: &'static [&'static str] = &[
        "employee_id",
        "name",
        "gender",
        "birth_date",
        "employment_type",
        "hire_date",
        "exit_date",
        "org_id",
        "org_name",
        "division_name",
        "job_title",
        "manager_id",
        "status",
    ];
}

/// Manager chain of one non-root employee, up to three levels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportingLine {
    pub reporting_line_id: String,
    pub employee_id: EmployeeId,
    pub employee_name: String,
    pub job_title: JobTitle,
    pub immediate_manager_id: EmployeeId,
    pub immediate_manager_title: JobTitle,
    pub second_level_manager_id: Option<EmployeeId>,
    pub third_level_manager_id: Option<EmployeeId>,
    pub reporting_depth: u8,
    pub division_name: String,
    pub org_name: String,
}

impl Record for ReportingLine {
    const TABLE: &'static str = "01_reporting_lines";
    const COLUMNS: &'static [&'static str] = &[
        "reporting_line_id",
        "employee_id",
        "employee_name",
        "job_title",
        "immediate_manager_id",
        "immediate_manager_title",
        "second_level_manager_id",
        "third_level_manager_id",
        "reporting_depth",
        "division_name",
        "org_name",
    ];
}

/// Output of the hierarchy stage.
#[derive(Debug, Clone)]
pub struct Hierarchy {
    pub org_units: Vec<OrgUnit>,
    pub roster: Roster,
}

/// Where a new employee sits.
struct Placement<'a> {
    org_id: &'a OrgId,
    org_name: &'a str,
    division_name: &'a str,
    manager_id: Option<EmployeeId>,
}

struct Staffer<'a> {
    as_of: Date,
    names: &'a dyn NameGenerator,
}

impl Staffer<'_> {
    fn hire(
        &self,
        rng: &mut RandomStream,
        role: StaffingRole,
        employee_id: EmployeeId,
        hire_date: Date,
        placement: Placement<'_>,
    ) -> Result<Employee, GenerationError> {
        let policy = role.policy();
        let status: EmploymentStatus = *rng.weighted(
            "employment_status",
            &[
                (EmploymentStatus::Active, policy.active_weight),
                (EmploymentStatus::Separated, policy.separated_weight),
            ],
        )?;
        let gender: Gender = *rng.pick("gender", &Gender::ALL)?;
        let name: String = self.names.name(gender, rng)?;
        let age: i64 = rng.int(i64::from(policy.min_age), i64::from(policy.max_age));
        let birth_year: i32 = self.as_of.year() - i32::try_from(age).unwrap_or(policy.min_age);
        let birth_date: Date = rng.date_in_year(birth_year, 1, 12)?;
        let employment_type: EmploymentType = *rng.weighted(
            "employment_type",
            &[
                (EmploymentType::Regular, policy.regular_weight),
                (EmploymentType::Contract, policy.contract_weight),
            ],
        )?;
        let exit_date: Option<Date> = match status {
            EmploymentStatus::Separated => Some(self.exit_date(rng, hire_date)?),
            EmploymentStatus::Active => None,
        };

        Ok(Employee {
            employee_id,
            name,
            gender,
            birth_date,
            employment_type,
            hire_date,
            exit_date,
            org_id: placement.org_id.clone(),
            org_name: placement.org_name.to_string(),
            division_name: placement.division_name.to_string(),
            job_title: role.job_title(),
            manager_id: placement.manager_id,
            status,
        })
    }

    fn exit_date(&self, rng: &mut RandomStream, hire_date: Date) -> Result<Date, DomainError> {
        let mut exit: Date = rng.date_after(hire_date, EXIT_WINDOW_DAYS.0, EXIT_WINDOW_DAYS.1)?;
        if exit > self.as_of {
            exit = rng.date_after(self.as_of, EXIT_REDRAW_DAYS.0, EXIT_REDRAW_DAYS.1)?;
        }
        Ok(exit.max(shift_days(hire_date, 1)?).min(self.as_of))
    }
}

/// Staffs the topology top-down: root, division heads, team leads,
/// then contributors team by team.
///
/// # Errors
///
/// Returns an error if the topology is invalid or a draw fails.
pub fn build_hierarchy(
    config: &GeneratorConfig,
    names: &dyn NameGenerator,
    rng: &mut RandomStream,
) -> Result<Hierarchy, GenerationError> {
    let topology = &config.topology;
    topology.validate()?;

    let as_of: Date = config.as_of;
    let staffer: Staffer<'_> = Staffer { as_of, names };
    let mut employees: Vec<Employee> = Vec::with_capacity(topology.planned_headcount());
    let mut org_units: Vec<OrgUnit> =
        Vec::with_capacity(1 + topology.divisions.len() + topology.teams.len());

    let root_id: EmployeeId = EmployeeId::numbered("EMP", 0);
    employees.push(staffer.hire(
        rng,
        StaffingRole::Root,
        root_id.clone(),
        ROOT_HIRE_DATE,
        Placement {
            org_id: &topology.company_id,
            org_name: &topology.company_name,
            division_name: &topology.company_name,
            manager_id: None,
        },
    )?);
    org_units.push(OrgUnit {
        org_id: topology.company_id.clone(),
        org_name: topology.company_name.clone(),
        org_type: OrgType::Company,
        parent_org_id: None,
        level: 0,
        head_employee_id: root_id.clone(),
    });

    let mut division_heads: HashMap<&OrgId, EmployeeId> = HashMap::new();
    for (position, division) in topology.divisions.iter().enumerate() {
        let head_id: EmployeeId = EmployeeId::numbered("DIV", position + 1);
        let hire_date: Date = rng.date_after(as_of, -14 * 365, -8 * 365)?;
        employees.push(staffer.hire(
            rng,
            StaffingRole::DivisionHead,
            head_id.clone(),
            hire_date,
            Placement {
                org_id: &division.org_id,
                org_name: &division.name,
                division_name: &division.name,
                manager_id: Some(root_id.clone()),
            },
        )?);
        org_units.push(OrgUnit {
            org_id: division.org_id.clone(),
            org_name: division.name.clone(),
            org_type: OrgType::Division,
            parent_org_id: Some(topology.company_id.clone()),
            level: 1,
            head_employee_id: head_id.clone(),
        });
        division_heads.insert(&division.org_id, head_id);
    }

    let mut team_leads: Vec<EmployeeId> = Vec::with_capacity(topology.teams.len());
    for (position, team) in topology.teams.iter().enumerate() {
        let division = topology
            .division(&team.division_id)
            .ok_or_else(|| unknown_division(&team.org_id, &team.division_id))?;
        let head_id: EmployeeId = division_heads
            .get(&team.division_id)
            .cloned()
            .ok_or_else(|| unknown_division(&team.org_id, &team.division_id))?;
        let lead_id: EmployeeId = EmployeeId::numbered("TL", position + 1);
        let hire_date: Date = rng.date_after(as_of, -12 * 365, -5 * 365)?;
        employees.push(staffer.hire(
            rng,
            StaffingRole::TeamLead,
            lead_id.clone(),
            hire_date,
            Placement {
                org_id: &team.org_id,
                org_name: &team.name,
                division_name: &division.name,
                manager_id: Some(head_id),
            },
        )?);
        org_units.push(OrgUnit {
            org_id: team.org_id.clone(),
            org_name: team.name.clone(),
            org_type: OrgType::Team,
            parent_org_id: Some(division.org_id.clone()),
            level: 2,
            head_employee_id: lead_id.clone(),
        });
        team_leads.push(lead_id);
    }

    let window_start: Date = year_start(as_of.year() - CONTRIBUTOR_HIRE_YEARS)?;
    let window_days: i64 = days_between(window_start, as_of);
    let mut sequence: usize = 1;
    for (team, lead_id) in topology.teams.iter().zip(&team_leads) {
        let division = topology
            .division(&team.division_id)
            .ok_or_else(|| unknown_division(&team.org_id, &team.division_id))?;
        for _ in 1..team.headcount {
            let hire_date: Date = rng.date_after(window_start, 0, window_days)?;
            let tenure_years: i32 = as_of.year() - hire_date.year();
            let title: JobTitle =
                *rng.pick("contributor_titles", contributor_title_choices(tenure_years))?;
            employees.push(staffer.hire(
                rng,
                StaffingRole::Contributor(title),
                EmployeeId::numbered("EMP", sequence),
                hire_date,
                Placement {
                    org_id: &team.org_id,
                    org_name: &team.name,
                    division_name: &division.name,
                    manager_id: Some(lead_id.clone()),
                },
            )?);
            sequence += 1;
        }
    }

    let roster: Roster = Roster::new(employees);
    info!(
        employees = roster.len(),
        active = roster.active().count(),
        org_units = org_units.len(),
        "Built organization hierarchy"
    );
    Ok(Hierarchy { org_units, roster })
}

/// Walks the manager chain of every non-root employee.
///
/// # Errors
///
/// Returns an error if a manager id does not resolve.
pub fn build_reporting_lines(roster: &Roster) -> Result<Vec<ReportingLine>, GenerationError> {
    let mut lines: Vec<ReportingLine> = Vec::with_capacity(roster.len());

    for employee in roster.employees() {
        let Some(manager_id) = employee.manager_id.as_ref() else {
            continue;
        };
        let manager: &Employee = roster.require(manager_id)?;
        let second: Option<&Employee> = roster.manager_of(manager);
        let third: Option<&Employee> = second.and_then(|second| roster.manager_of(second));
        let reporting_depth: u8 = 1 + u8::from(second.is_some()) + u8::from(third.is_some());

        lines.push(ReportingLine {
            reporting_line_id: format!("RL{:04}", lines.len() + 1),
            employee_id: employee.employee_id.clone(),
            employee_name: employee.name.clone(),
            job_title: employee.job_title,
            immediate_manager_id: manager.employee_id.clone(),
            immediate_manager_title: manager.job_title,
            second_level_manager_id: second.map(|second| second.employee_id.clone()),
            third_level_manager_id: third.map(|third| third.employee_id.clone()),
            reporting_depth,
            division_name: employee.division_name.clone(),
            org_name: employee.org_name.clone(),
        });
    }

    info!(rows = lines.len(), "Built reporting lines");
    Ok(lines)
}

fn unknown_division(team_id: &OrgId, division_id: &OrgId) -> DomainError {
    DomainError::UnknownDivision {
        team_id: team_id.value().to_string(),
        division_id: division_id.value().to_string(),
    }
}
