//! Personal data shared by clients and employees.

use serde::{Deserialize, Serialize};

use super::{Address, Rut, NAME_MAX};
use crate::validator::{Validate, Validator, Violation};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    pub rut: Rut,
    pub address: Address,
    /// Contact email. Its format is enforced when it is typed at the console,
    /// not by [`Validate`].
    pub email: String,
}

impl Person {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        rut: Rut,
        address: Address,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            rut,
            address,
            email: email.into(),
        }
    }

    /// "FIRST LAST"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Validate for Person {
    fn violations(&self) -> Vec<Violation> {
        let mut violations = Vec::new();
        for (field, value) in [
            ("first name", &self.first_name),
            ("last name", &self.last_name),
        ] {
            violations.extend(
                Validator::of(value)
                    .named(field)
                    .not_null()
                    .not_empty()
                    .max_length(NAME_MAX)
                    .into_violations(),
            );
        }
        violations.extend(self.rut.violations());
        violations.extend(self.address.violations());
        violations
    }
}
