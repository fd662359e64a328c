//! Postal address.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{COMMUNE_MAX, REGION_MAX, STREET_MAX};
use crate::validator::{Validate, Validator, Violation};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Street name and number
    pub street: String,
    pub commune: String,
    pub region: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        commune: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            commune: commune.into(),
            region: region.into(),
        }
    }
}

impl Validate for Address {
    fn violations(&self) -> Vec<Violation> {
        let mut violations = Vec::new();
        for (field, value, max) in [
            ("street", &self.street, STREET_MAX),
            ("commune", &self.commune, COMMUNE_MAX),
            ("region", &self.region, REGION_MAX),
        ] {
            violations.extend(
                Validator::of(value)
                    .named(field)
                    .not_null()
                    .not_empty()
                    .max_length(max)
                    .into_violations(),
            );
        }
        violations
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.street, self.commune, self.region)
    }
}
