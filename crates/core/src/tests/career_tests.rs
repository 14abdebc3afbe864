// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeMap;

use hr_fixtures_domain::{Employee, EmployeeId, JobTitle, shift_days};
use time::Date;
use time::macros::date;

use crate::tests::helpers::{
    create_test_employee, default_as_of, default_dataset, employee_by_id,
};
use crate::{
    Careers, ChangeType, Dataset, JobHistoryEntry, RandomStream, Roster, simulate_careers,
};

fn histories(dataset: &Dataset) -> BTreeMap<&EmployeeId, Vec<&JobHistoryEntry>> {
    let mut grouped: BTreeMap<&EmployeeId, Vec<&JobHistoryEntry>> = BTreeMap::new();
    for entry in &dataset.job_history {
        grouped.entry(&entry.employee_id).or_default().push(entry);
    }
    grouped
}

#[test]
fn test_every_employee_has_a_history_starting_at_hire() {
    let dataset: &Dataset = default_dataset();
    let grouped: BTreeMap<&EmployeeId, Vec<&JobHistoryEntry>> = histories(dataset);

    assert_eq!(grouped.len(), dataset.employees.len());
    for (employee_id, entries) in &grouped {
        let hire_date: Date = employee_by_id(dataset, employee_id).hire_date;
        assert_eq!(entries[0].start_date, hire_date);
        assert_eq!(entries[0].change_type, ChangeType::Hire);
        assert!(entries.iter().all(|entry| entry.start_date >= hire_date));
    }
}

#[test]
fn test_history_intervals_are_contiguous() {
    let dataset: &Dataset = default_dataset();
    for entries in histories(dataset).values() {
        for pair in entries.windows(2) {
            let day_before: Date = shift_days(pair[1].start_date, -1).unwrap();
            assert_eq!(pair[0].end_date, Some(day_before));
            assert!(pair[0].start_date < pair[1].start_date);
            assert_eq!(pair[1].change_type, ChangeType::Promotion);
            assert!(pair[0].job_title.level() < pair[1].job_title.level());
        }
    }
}

#[test]
fn test_final_interval_matches_employment_state() {
    let dataset: &Dataset = default_dataset();
    let as_of: Date = default_as_of();
    for (employee_id, entries) in histories(dataset) {
        let employee: &Employee = employee_by_id(dataset, employee_id);
        let last: &JobHistoryEntry = entries[entries.len() - 1];

        assert!(last.job_title.level() <= employee.job_title.level());
        assert!(last.start_date <= as_of);
        match employee.exit_date {
            Some(exit_date) => assert_eq!(last.end_date, Some(exit_date)),
            None => assert_eq!(last.end_date, None),
        }
    }
}

#[test]
fn test_long_tenure_reaches_current_title() {
    let employees: Vec<Employee> = vec![
        create_test_employee("EMP000", JobTitle::Ceo, None, date!(2010 - 01 - 01)),
        create_test_employee(
            "EMP001",
            JobTitle::Manager,
            Some("EMP000"),
            date!(2012 - 03 - 01),
        ),
    ];
    let roster: Roster = Roster::new(employees);
    let mut rng: RandomStream = RandomStream::seeded(11);

    let careers: Careers = simulate_careers(&roster, date!(2024 - 12 - 15), &mut rng).unwrap();
    let history: &[JobHistoryEntry] = careers.history_of(&EmployeeId::new("EMP001"));

    assert_eq!(history.last().unwrap().job_title, JobTitle::Manager);
    assert_eq!(history.last().unwrap().end_date, None);
    let ceo: &[JobHistoryEntry] = careers.history_of(&EmployeeId::new("EMP000"));
    assert_eq!(ceo.len(), 1);
    assert_eq!(ceo[0].job_title, JobTitle::Ceo);
}

#[test]
fn test_title_at_resolves_history_intervals() {
    let employee: Employee = create_test_employee(
        "EMP001",
        JobTitle::Manager,
        Some("EMP000"),
        date!(2012 - 03 - 01),
    );
    let roster: Roster = Roster::new(vec![employee.clone()]);
    let mut rng: RandomStream = RandomStream::seeded(3);
    let careers: Careers = simulate_careers(&roster, date!(2024 - 12 - 15), &mut rng).unwrap();
    let history: &[JobHistoryEntry] = careers.history_of(&employee.employee_id);

    for entry in history {
        assert_eq!(careers.title_at(&employee, entry.start_date), entry.job_title);
    }
    assert_eq!(
        careers.title_at(&employee, date!(2000 - 01 - 01)),
        history[0].job_title
    );
    assert_eq!(
        careers.title_at(&employee, date!(2024 - 12 - 15)),
        JobTitle::Manager
    );
}

#[test]
fn test_title_at_without_history_uses_current_title() {
    let employee: Employee =
        create_test_employee("EMP009", JobTitle::Staff, None, date!(2020 - 01 - 01));
    let careers: Careers = Careers::default();
    assert_eq!(
        careers.title_at(&employee, date!(2022 - 01 - 01)),
        JobTitle::Staff
    );
}
