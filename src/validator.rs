//! Fluent rule chaining for field validation.
//!
//! A [`Validator`] wraps a single value (which may be absent) and applies
//! rules one after another. Every failed rule is recorded, and the value is
//! valid only when no rule failed.
//!
//! ```
//! use salmontt::validator::Validator;
//!
//! let ok = Validator::of("Av. Los Pinos 123")
//!     .not_null()
//!     .not_empty()
//!     .max_length(100)
//!     .is_valid();
//! assert!(ok);
//! ```

use regex::Regex;
use std::fmt;

/// A single validation rule.
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    /// The value must be present
    NotNull,
    /// Text must contain something other than whitespace
    NotEmpty,
    /// Text must not exceed this many characters
    MaxLength(usize),
    /// Text must match this pattern in full
    Matches(String),
    /// Number must be strictly greater than this bound
    GreaterThan(f64),
    /// Custom predicate, described in words
    Satisfies(String),
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::NotNull => write!(f, "is required"),
            Rule::NotEmpty => write!(f, "must not be empty"),
            Rule::MaxLength(max) => write!(f, "must be at most {} characters", max),
            Rule::Matches(pattern) => write!(f, "must match {}", pattern),
            Rule::GreaterThan(min) => write!(f, "must be greater than {}", min),
            Rule::Satisfies(description) => write!(f, "must have {}", description),
        }
    }
}

/// A rule that failed for a named field.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    pub field: String,
    pub rule: Rule,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.rule)
    }
}

/// Error returned when a record fails validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// What was validated, e.g. "client"
    pub subject: String,
    pub violations: Vec<Violation>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let details: Vec<String> = self.violations.iter().map(|v| v.to_string()).collect();
        write!(f, "invalid {}: {}", self.subject, details.join("; "))
    }
}

impl std::error::Error for ValidationError {}

/// Types whose contents can be checked against validation rules.
pub trait Validate {
    /// Every rule the value currently breaks.
    fn violations(&self) -> Vec<Violation>;

    fn is_valid(&self) -> bool {
        self.violations().is_empty()
    }

    /// `Ok` when nothing is broken, otherwise an error naming `subject`.
    fn validate(&self, subject: &str) -> Result<(), ValidationError> {
        let violations = self.violations();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                subject: subject.to_string(),
                violations,
            })
        }
    }
}

/// Chains rules over a single, possibly absent, value.
///
/// Text rules are available when `T: AsRef<str>`, numeric rules when the
/// value converts into `f64`. Rules other than [`Validator::not_null`] are
/// skipped when there is no value.
#[derive(Debug)]
pub struct Validator<'a, T: ?Sized> {
    field: &'a str,
    value: Option<&'a T>,
    violations: Vec<Violation>,
}

impl<'a, T: ?Sized> Validator<'a, T> {
    pub fn new(value: Option<&'a T>) -> Self {
        Self {
            field: "value",
            value,
            violations: Vec::new(),
        }
    }

    pub fn of(value: &'a T) -> Self {
        Self::new(Some(value))
    }

    /// Set the field label used in violation messages.
    pub fn named(mut self, field: &'a str) -> Self {
        self.field = field;
        self
    }

    pub fn not_null(mut self) -> Self {
        if self.value.is_none() {
            self.fail(Rule::NotNull);
        }
        self
    }

    /// Apply a custom predicate. `description` completes the sentence
    /// "must have ...".
    pub fn check(mut self, description: &str, predicate: impl FnOnce(&T) -> bool) -> Self {
        if let Some(value) = self.value {
            if !predicate(value) {
                self.fail(Rule::Satisfies(description.to_string()));
            }
        }
        self
    }

    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }

    fn fail(&mut self, rule: Rule) {
        self.violations.push(Violation {
            field: self.field.to_string(),
            rule,
        });
    }
}

impl<'a, T: AsRef<str> + ?Sized> Validator<'a, T> {
    pub fn not_empty(mut self) -> Self {
        if let Some(value) = self.value {
            if value.as_ref().trim().is_empty() {
                self.fail(Rule::NotEmpty);
            }
        }
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        if let Some(value) = self.value {
            if value.as_ref().chars().count() > max {
                self.fail(Rule::MaxLength(max));
            }
        }
        self
    }

    /// The whole value must match `pattern`. A pattern that does not compile
    /// counts as a failure.
    pub fn matches(mut self, pattern: &str) -> Self {
        if let Some(value) = self.value {
            let matched = match Regex::new(&format!("^(?:{})$", pattern)) {
                Ok(re) => re.is_match(value.as_ref()),
                Err(_) => false,
            };
            if !matched {
                self.fail(Rule::Matches(pattern.to_string()));
            }
        }
        self
    }
}

impl<'a, T: Copy + Into<f64>> Validator<'a, T> {
    pub fn greater_than(mut self, min: f64) -> Self {
        if let Some(value) = self.value {
            let number: f64 = (*value).into();
            if number.is_nan() || number <= min {
                self.fail(Rule::GreaterThan(min));
            }
        }
        self
    }
}
