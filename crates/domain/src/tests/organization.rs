// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::{Date, Month};

use crate::{
    DivisionSpec, DomainError, Employee, EmployeeId, EmploymentStatus, EmploymentType, Gender,
    JobTitle, OrgId, OrgTopology, TeamSpec,
};

fn date(year: i32, month: Month, day: u8) -> Date {
    Date::from_calendar_date(year, month, day).unwrap()
}

fn sample_employee(exit_date: Option<Date>) -> Employee {
    Employee {
        employee_id: EmployeeId::new("EMP001"),
        name: String::from("김민준"),
        gender: Gender::Male,
        birth_date: date(1990, Month::March, 4),
        employment_type: EmploymentType::Regular,
        hire_date: date(2019, Month::May, 1),
        exit_date,
        org_id: OrgId::new("ORG201"),
        org_name: String::from("AI솔루션개발팀"),
        division_name: String::from("기술본부"),
        job_title: JobTitle::AssistantManager,
        manager_id: Some(EmployeeId::new("TL003")),
        status: if exit_date.is_some() {
            EmploymentStatus::Separated
        } else {
            EmploymentStatus::Active
        },
    }
}

#[test]
fn test_default_topology_is_valid() {
    let topology: OrgTopology = OrgTopology::default();
    assert!(topology.validate().is_ok());
    assert_eq!(topology.divisions.len(), 3);
    assert_eq!(topology.teams.len(), 10);
}

#[test]
fn test_default_topology_planned_headcount() {
    let topology: OrgTopology = OrgTopology::default();
    // root + 3 division heads + 206 team members
    assert_eq!(topology.planned_headcount(), 210);
}

#[test]
fn test_planned_headcount_counts_empty_team_as_lead_only() {
    let mut topology: OrgTopology = OrgTopology::default();
    topology.teams.truncate(1);
    topology.teams[0].headcount = 0;
    assert_eq!(topology.planned_headcount(), 1 + 3 + 1);
}

#[test]
fn test_topology_without_divisions_is_rejected() {
    let topology: OrgTopology = OrgTopology {
        divisions: Vec::new(),
        teams: Vec::new(),
        ..OrgTopology::default()
    };
    assert_eq!(topology.validate(), Err(DomainError::EmptyTopology));
}

#[test]
fn test_duplicate_org_id_is_rejected() {
    let mut topology: OrgTopology = OrgTopology::default();
    topology.divisions.push(DivisionSpec {
        org_id: OrgId::new("ORG101"),
        name: String::from("중복본부"),
    });
    assert_eq!(
        topology.validate(),
        Err(DomainError::DuplicateOrgId(String::from("ORG101")))
    );
}

#[test]
fn test_duplicate_org_name_is_rejected() {
    let mut topology: OrgTopology = OrgTopology::default();
    topology.teams.push(TeamSpec {
        org_id: OrgId::new("ORG901"),
        name: String::from("HR팀"),
        division_id: OrgId::new("ORG100"),
        headcount: 4,
    });
    assert_eq!(
        topology.validate(),
        Err(DomainError::DuplicateOrgName(String::from("HR팀")))
    );
}

#[test]
fn test_company_id_participates_in_uniqueness() {
    let mut topology: OrgTopology = OrgTopology::default();
    topology.divisions[0].org_id = OrgId::new("ORG000");
    assert_eq!(
        topology.validate(),
        Err(DomainError::DuplicateOrgId(String::from("ORG000")))
    );
}

#[test]
fn test_team_with_unknown_division_is_rejected() {
    let mut topology: OrgTopology = OrgTopology::default();
    topology.teams.push(TeamSpec {
        org_id: OrgId::new("ORG901"),
        name: String::from("유령팀"),
        division_id: OrgId::new("ORG900"),
        headcount: 5,
    });
    assert_eq!(
        topology.validate(),
        Err(DomainError::UnknownDivision {
            team_id: String::from("ORG901"),
            division_id: String::from("ORG900"),
        })
    );
}

#[test]
fn test_blank_unit_name_is_rejected() {
    let mut topology: OrgTopology = OrgTopology::default();
    topology.teams[2].name = String::from("  ");
    let result: Result<(), DomainError> = topology.validate();
    assert!(matches!(
        result,
        Err(DomainError::InvalidOrgUnit { ref org_id, .. }) if org_id == "ORG201"
    ));
}

#[test]
fn test_active_employee_tenure() {
    let employee: Employee = sample_employee(None);
    let as_of: Date = date(2024, Month::December, 15);

    assert!(employee.is_active());
    assert!(!employee.is_root());
    assert_eq!(employee.tenure_end(as_of), as_of);
    assert_eq!(employee.tenure_years(as_of), 5);
    assert!(employee.is_employed_on(date(2024, Month::January, 1), as_of));
    assert!(!employee.is_employed_on(date(2019, Month::April, 30), as_of));
}

#[test]
fn test_separated_employee_tenure_ends_at_exit() {
    let exit: Date = date(2023, Month::August, 31);
    let employee: Employee = sample_employee(Some(exit));
    let as_of: Date = date(2024, Month::December, 15);

    assert!(!employee.is_active());
    assert_eq!(employee.tenure_end(as_of), exit);
    assert!(employee.is_employed_on(exit, as_of));
    assert!(!employee.is_employed_on(date(2023, Month::September, 1), as_of));
}

#[test]
fn test_employee_serializes_dates_and_labels() {
    let employee: Employee = sample_employee(None);
    let value: serde_json::Value = serde_json::to_value(&employee).unwrap();

    assert_eq!(value["hire_date"], "2019-05-01");
    assert_eq!(value["exit_date"], serde_json::Value::Null);
    assert_eq!(value["gender"], "남");
    assert_eq!(value["employment_type"], "정규직");
    assert_eq!(value["job_title"], "대리");
    assert_eq!(value["status"], "재직");
    assert_eq!(value["manager_id"], "TL003");
}
