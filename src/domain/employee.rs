//! Employee records.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Person, JOB_TITLE_MAX};
use crate::validator::{Validate, Validator, Violation};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(flatten)]
    pub person: Person,
    pub job_title: String,
    /// Monthly salary in Chilean pesos
    pub salary: f64,
}

impl Employee {
    pub fn new(person: Person, job_title: impl Into<String>, salary: f64) -> Self {
        Self {
            person,
            job_title: job_title.into(),
            salary,
        }
    }
}

impl Validate for Employee {
    fn violations(&self) -> Vec<Violation> {
        let mut violations = self.person.violations();
        violations.extend(
            Validator::of(&self.job_title)
                .named("job title")
                .not_null()
                .not_empty()
                .max_length(JOB_TITLE_MAX)
                .into_violations(),
        );
        violations.extend(
            Validator::of(&self.salary)
                .named("salary")
                .greater_than(0.0)
                .into_violations(),
        );
        violations
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Employee: {}", self.person.full_name())?;
        writeln!(f, "  RUT: {}", self.person.rut)?;
        writeln!(f, "  Job title: {}", self.job_title)?;
        writeln!(f, "  Salary: ${}", self.salary)?;
        write!(f, "  Address: {}", self.person.address)
    }
}
