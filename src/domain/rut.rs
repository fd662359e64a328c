//! Chilean RUT (Rol Único Tributario), the national identifier.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::patterns;
use crate::validator::{Validate, Validator, Violation};

/// A RUT as entered, e.g. `12345678-9`.
///
/// [`Validate`] only checks the shape of the number. The modulo-11 check
/// digit is verified separately by [`Rut::has_valid_check_digit`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rut {
    number: String,
}

impl Rut {
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
        }
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    /// Digits before the dash.
    pub fn body(&self) -> &str {
        self.number
            .split_once('-')
            .map(|(body, _)| body)
            .unwrap_or(&self.number)
    }

    /// Character after the dash, upper-cased.
    pub fn check_digit(&self) -> Option<char> {
        let (_, dv) = self.number.split_once('-')?;
        let mut chars = dv.chars();
        let c = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        Some(c.to_ascii_uppercase())
    }

    /// Compute the modulo-11 check digit for a run of ASCII digits.
    ///
    /// Returns `None` if `body` is empty or contains anything but digits.
    pub fn expected_check_digit(body: &str) -> Option<char> {
        if body.is_empty() || !body.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let mut sum = 0u32;
        let mut factor = 2u32;
        for b in body.bytes().rev() {
            sum += u32::from(b - b'0') * factor;
            factor = if factor == 7 { 2 } else { factor + 1 };
        }

        match 11 - sum % 11 {
            11 => Some('0'),
            10 => Some('K'),
            n => char::from_digit(n, 10),
        }
    }

    /// Whether the check digit agrees with the body.
    pub fn has_valid_check_digit(&self) -> bool {
        match (Self::expected_check_digit(self.body()), self.check_digit()) {
            (Some(expected), Some(actual)) => expected == actual,
            _ => false,
        }
    }
}

impl Validate for Rut {
    fn violations(&self) -> Vec<Violation> {
        Validator::of(&self.number)
            .named("RUT")
            .not_null()
            .not_empty()
            .matches(patterns::RUT)
            .into_violations()
    }
}

impl fmt::Display for Rut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number)
    }
}
