// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::HashMap;

use hr_fixtures_domain::{DomainError, Employee, EmployeeId};

/// The employee table plus an `employee_id -> position` index.
///
/// Built once after the hierarchy stage; every later stage resolves
/// employees through it instead of scanning.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    employees: Vec<Employee>,
    index: HashMap<EmployeeId, usize>,
}

impl Roster {
    /// Indexes employees in creation order.
    #[must_use]
    pub fn new(employees: Vec<Employee>) -> Self {
        let index: HashMap<EmployeeId, usize> = employees
            .iter()
            .enumerate()
            .map(|(position, employee)| (employee.employee_id.clone(), position))
            .collect();
        Self { employees, index }
    }

    /// All employees in creation order.
    #[must_use]
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Active employees in creation order.
    pub fn active(&self) -> impl Iterator<Item = &Employee> {
        self.employees.iter().filter(|employee| employee.is_active())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    #[must_use]
    pub fn get(&self, employee_id: &EmployeeId) -> Option<&Employee> {
        self.index
            .get(employee_id)
            .and_then(|position| self.employees.get(*position))
    }

    /// Resolves an identifier that must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is not on the roster.
    pub fn require(&self, employee_id: &EmployeeId) -> Result<&Employee, DomainError> {
        self.get(employee_id)
            .ok_or_else(|| DomainError::UnknownEmployee(employee_id.value().to_string()))
    }

    /// The employee's direct manager, if any.
    #[must_use]
    pub fn manager_of(&self, employee: &Employee) -> Option<&Employee> {
        employee
            .manager_id
            .as_ref()
            .and_then(|manager_id| self.get(manager_id))
    }
}
