//! Check a single value from the command line

use anyhow::Result;
use clap::ValueEnum;

use salmontt::config::Config;
use salmontt::input::{field_violations, Field};
use salmontt::output::Output;

/// Fields that can be checked with `salmontt check`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CheckKind {
    Rut,
    Email,
    Phone,
    Name,
}

impl From<CheckKind> for Field {
    fn from(kind: CheckKind) -> Self {
        match kind {
            CheckKind::Rut => Field::Rut,
            CheckKind::Email => Field::Email,
            CheckKind::Phone => Field::Phone,
            CheckKind::Name => Field::FirstName,
        }
    }
}

/// Validate `value`, exiting with status 1 when it is rejected
pub fn cmd_check(config: &Config, output: &Output, kind: CheckKind, value: &str) -> Result<()> {
    let field = Field::from(kind);
    let violations = field_violations(field, value, &config.input);

    if violations.is_empty() {
        output.success(&format!("Valid {}: {}", field.label(), value));
        return Ok(());
    }

    output.error(&format!("Invalid {}: {}", field.label(), value));
    for violation in &violations {
        output.detail(&violation.to_string());
    }
    std::process::exit(1);
}
