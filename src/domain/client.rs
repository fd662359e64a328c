//! Client records.

use serde::{Deserialize, Serialize};

use super::{patterns, Person};
use crate::validator::{Validate, Validator, Violation};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    #[serde(flatten)]
    pub person: Person,
    pub phone: String,
}

impl Client {
    pub fn new(person: Person, phone: impl Into<String>) -> Self {
        Self {
            person,
            phone: phone.into(),
        }
    }
}

impl Validate for Client {
    fn violations(&self) -> Vec<Violation> {
        let mut violations = self.person.violations();
        violations.extend(
            Validator::of(&self.phone)
                .named("phone")
                .not_null()
                .not_empty()
                .matches(patterns::CLIENT_PHONE)
                .into_violations(),
        );
        violations
    }
}
