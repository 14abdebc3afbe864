// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::sync::LazyLock;

use hr_fixtures_domain::{
    Employee, EmployeeId, EmploymentStatus, EmploymentType, Gender, JobTitle, OrgId,
};
use time::Date;
use time::macros::date;

use crate::{Dataset, GeneratorConfig, Record, SimpleNameGenerator, TableSink, generate};

static DEFAULT_DATASET: LazyLock<Dataset> = LazyLock::new(|| {
    generate(&GeneratorConfig::default(), &SimpleNameGenerator).unwrap()
});

/// The dataset of the default configuration, generated once per test run.
pub fn default_dataset() -> &'static Dataset {
    &DEFAULT_DATASET
}

pub fn default_as_of() -> Date {
    GeneratorConfig::default().as_of
}

pub fn employee_by_id<'a>(dataset: &'a Dataset, employee_id: &EmployeeId) -> &'a Employee {
    dataset
        .employees
        .iter()
        .find(|employee| &employee.employee_id == employee_id)
        .unwrap()
}

/// An active employee of team `ORG101` in division `경영지원본부`.
pub fn create_test_employee(
    id: &str,
    job_title: JobTitle,
    manager_id: Option<&str>,
    hire_date: Date,
) -> Employee {
    Employee {
        employee_id: EmployeeId::new(id),
        name: format!("직원{id}"),
        gender: Gender::Female,
        birth_date: date!(1990 - 05 - 20),
        employment_type: EmploymentType::Regular,
        hire_date,
        exit_date: None,
        org_id: OrgId::new("ORG101"),
        org_name: String::from("HR팀"),
        division_name: String::from("경영지원본부"),
        job_title,
        manager_id: manager_id.map(EmployeeId::new),
        status: EmploymentStatus::Active,
    }
}

/// Captures every table as JSON, in write order.
#[derive(Debug, Default)]
pub struct JsonSink {
    pub tables: Vec<(&'static str, String)>,
}

impl TableSink for JsonSink {
    type Error = serde_json::Error;

    fn write_table<R: Record>(&mut self, rows: &[R]) -> Result<(), Self::Error> {
        self.tables.push((R::TABLE, serde_json::to_string(rows)?));
        Ok(())
    }
}
