//! Console input: prompting, validating and re-prompting.
//!
//! A [`LineSource`] produces raw lines. [`FieldReader`] keeps asking until a
//! line passes the rules for the requested field, reporting each rejection
//! through [`Output`].

use anyhow::{bail, Context, Result};
use std::fmt;
use std::io::{self, BufRead};

use crate::config::InputConfig;
use crate::domain::{patterns, Rut, NAME_MAX};
use crate::output::Output;
use crate::validator::{Validator, Violation};

/// Something that can show a prompt and read back one line.
pub trait LineSource {
    /// Show `prompt` and return the next line without its line terminator.
    fn read_line(&mut self, prompt: &str) -> Result<String>;
}

/// Ctrl+C was pressed while a prompt was waiting for input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interrupted;

impl fmt::Display for Interrupted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "input interrupted")
    }
}

impl std::error::Error for Interrupted {}

/// Interactive terminal prompts.
#[derive(Debug, Default)]
pub struct TerminalSource;

impl LineSource for TerminalSource {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        dialoguer::Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(terminal_error)
    }
}

/// An interrupted read becomes [`Interrupted`]; anything else is a read failure.
fn terminal_error(err: dialoguer::Error) -> anyhow::Error {
    match err {
        dialoguer::Error::IO(source) if source.kind() == io::ErrorKind::Interrupted => {
            Interrupted.into()
        }
        dialoguer::Error::IO(source) => {
            anyhow::Error::new(source).context("Failed to read from terminal")
        }
    }
}

/// Lines from any buffered reader, with prompts written to an [`Output`].
///
/// Used for piped standard input and for scripted sessions in tests.
pub struct BufferedSource<R> {
    reader: R,
    output: Output,
}

impl<R: BufRead> BufferedSource<R> {
    pub fn new(reader: R, output: Output) -> Self {
        Self { reader, output }
    }
}

impl<R: BufRead> LineSource for BufferedSource<R> {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.output.prompt(prompt);

        // Bytes that are not UTF-8 are replaced so the field rules reject the line
        let mut bytes = Vec::new();
        let read = self
            .reader
            .read_until(b'\n', &mut bytes)
            .context("Failed to read input")?;
        if read == 0 {
            bail!("Input closed before a value was entered");
        }

        let line = String::from_utf8_lossy(&bytes);
        Ok(line.trim_end_matches(|c| c == '\n' || c == '\r').to_string())
    }
}

/// Fields with a dedicated format check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FirstName,
    LastName,
    Rut,
    Phone,
    Email,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "first name",
            Field::LastName => "last name",
            Field::Rut => "RUT",
            Field::Phone => "phone",
            Field::Email => "email",
        }
    }

    fn prompt(self) -> &'static str {
        match self {
            Field::FirstName => "Enter first name",
            Field::LastName => "Enter last name",
            Field::Rut => "Enter RUT (format 12345678-9)",
            Field::Phone => "Enter phone (format 912345678, without country code)",
            Field::Email => "Enter email",
        }
    }
}

/// Check a value typed for `field`.
pub fn field_violations(field: Field, value: &str, options: &InputConfig) -> Vec<Violation> {
    let validator = Validator::of(value)
        .named(field.label())
        .not_null()
        .not_empty();

    match field {
        Field::FirstName | Field::LastName => validator
            .matches(patterns::PERSON_NAME)
            .max_length(NAME_MAX)
            .into_violations(),
        Field::Rut => {
            let validator = validator.matches(patterns::RUT);
            if options.verify_rut_check_digit {
                validator
                    .check("a valid check digit", |v| Rut::new(v).has_valid_check_digit())
                    .into_violations()
            } else {
                validator.into_violations()
            }
        }
        Field::Phone => validator.matches(patterns::LOCAL_PHONE).into_violations(),
        Field::Email => validator.matches(patterns::EMAIL).into_violations(),
    }
}

/// Reads validated record fields from a [`LineSource`].
pub struct FieldReader<'a, S: LineSource + ?Sized> {
    source: &'a mut S,
    output: &'a Output,
    options: &'a InputConfig,
}

impl<'a, S: LineSource + ?Sized> FieldReader<'a, S> {
    pub fn new(source: &'a mut S, output: &'a Output, options: &'a InputConfig) -> Self {
        Self {
            source,
            output,
            options,
        }
    }

    /// First name, upper-cased
    pub fn read_first_name(&mut self) -> Result<String> {
        self.read_field(Field::FirstName, true)
    }

    /// Last name, upper-cased
    pub fn read_last_name(&mut self) -> Result<String> {
        self.read_field(Field::LastName, true)
    }

    pub fn read_rut(&mut self) -> Result<Rut> {
        self.read_field(Field::Rut, false).map(Rut::new)
    }

    pub fn read_phone(&mut self) -> Result<String> {
        self.read_field(Field::Phone, false)
    }

    pub fn read_email(&mut self) -> Result<String> {
        self.read_field(Field::Email, false)
    }

    /// Free text of at most `max` characters, upper-cased.
    ///
    /// The limit applies to the upper-cased text, which can be longer than
    /// what was typed (`ß` becomes `SS`).
    pub fn read_text(&mut self, label: &str, max: usize) -> Result<String> {
        let prompt = format!("Enter {}", label);
        self.read_until(&prompt, label, true, |value| {
            Validator::of(value)
                .not_null()
                .not_empty()
                .max_length(max)
                .is_valid()
        })
    }

    /// A salary strictly greater than zero
    pub fn read_salary(&mut self) -> Result<f64> {
        loop {
            let line = self.source.read_line("Enter salary")?;
            let salary = match line.trim().parse::<f64>() {
                Ok(value) if value.is_finite() => value,
                _ => {
                    self.output.warn("Salary must be a number.");
                    continue;
                }
            };

            if Validator::of(&salary).greater_than(0.0).is_valid() {
                return Ok(salary);
            }
            self.output.warn("Salary must be greater than 0.");
        }
    }

    /// Any integer; range checks are up to the caller
    pub fn read_number(&mut self, prompt: &str) -> Result<i64> {
        loop {
            let line = self.source.read_line(prompt)?;
            match line.trim().parse::<i64>() {
                Ok(number) => return Ok(number),
                Err(_) => self.output.warn("You must enter a number."),
            }
        }
    }

    fn read_field(&mut self, field: Field, uppercase: bool) -> Result<String> {
        let options = self.options;
        self.read_until(field.prompt(), field.label(), uppercase, |value| {
            field_violations(field, value, options).is_empty()
        })
    }

    /// Read until `accept` passes, checking the value as it will be stored.
    fn read_until(
        &mut self,
        prompt: &str,
        label: &str,
        uppercase: bool,
        accept: impl Fn(&str) -> bool,
    ) -> Result<String> {
        loop {
            let line = self.source.read_line(prompt)?;
            let value = if uppercase { self.normalize(line) } else { line };
            if accept(&value) {
                return Ok(value);
            }
            self.output.warn(&format!("Invalid {}. Try again.", label));
        }
    }

    fn normalize(&self, value: String) -> String {
        if self.options.uppercase {
            value.to_uppercase()
        } else {
            value
        }
    }
}
