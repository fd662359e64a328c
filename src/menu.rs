//! The interactive console: main menu, record capture and listings.

use anyhow::{Context, Result};
use serde_json::json;
use std::fmt;

use crate::config::Config;
use crate::domain::{
    Address, Client, Employee, Person, COMMUNE_MAX, JOB_TITLE_MAX, REGION_MAX, STREET_MAX,
};
use crate::input::{FieldReader, LineSource};
use crate::output::{Output, OutputMode};
use crate::registry::Registry;
use crate::repository::StoredRecord;
use crate::ui::format;
use crate::validator::ValidationError;

/// Entries of the main menu, numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    CreateClient,
    CreateEmployee,
    ShowClients,
    ShowEmployees,
    Exit,
}

impl MenuOption {
    pub const ALL: [MenuOption; 5] = [
        MenuOption::CreateClient,
        MenuOption::CreateEmployee,
        MenuOption::ShowClients,
        MenuOption::ShowEmployees,
        MenuOption::Exit,
    ];

    pub fn from_number(number: i64) -> Option<Self> {
        match number {
            1 => Some(MenuOption::CreateClient),
            2 => Some(MenuOption::CreateEmployee),
            3 => Some(MenuOption::ShowClients),
            4 => Some(MenuOption::ShowEmployees),
            5 => Some(MenuOption::Exit),
            _ => None,
        }
    }

    pub fn number(self) -> i64 {
        match self {
            MenuOption::CreateClient => 1,
            MenuOption::CreateEmployee => 2,
            MenuOption::ShowClients => 3,
            MenuOption::ShowEmployees => 4,
            MenuOption::Exit => 5,
        }
    }

    fn label(self, recent_count: usize) -> String {
        match self {
            MenuOption::CreateClient => "Create client".to_string(),
            MenuOption::CreateEmployee => "Create employee".to_string(),
            MenuOption::ShowClients => format!("View last {} clients", recent_count),
            MenuOption::ShowEmployees => format!("View last {} employees", recent_count),
            MenuOption::Exit => "Exit".to_string(),
        }
    }
}

/// Record kinds, for messages and JSON events.
#[derive(Debug, Clone, Copy)]
enum Kind {
    Client,
    Employee,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Client => write!(f, "client"),
            Kind::Employee => write!(f, "employee"),
        }
    }
}

impl Kind {
    fn capitalized(self) -> &'static str {
        match self {
            Kind::Client => "Client",
            Kind::Employee => "Employee",
        }
    }

    fn plural(self) -> &'static str {
        match self {
            Kind::Client => "clients",
            Kind::Employee => "employees",
        }
    }

    fn plural_capitalized(self) -> &'static str {
        match self {
            Kind::Client => "Clients",
            Kind::Employee => "Employees",
        }
    }
}

/// Console controller holding the registry for one session.
pub struct Menu<S: LineSource> {
    source: S,
    output: Output,
    config: Config,
    registry: Registry,
}

impl<S: LineSource> Menu<S> {
    pub fn new(source: S, output: Output, config: Config) -> Self {
        Self {
            source,
            output,
            config,
            registry: Registry::new(),
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Show the menu and handle choices until the user exits.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.show_menu();
            let number = self.read_option()?;
            match MenuOption::from_number(number) {
                Some(MenuOption::Exit) => {
                    self.output.step("Exiting the system...");
                    return Ok(());
                }
                Some(option) => self.handle(option)?,
                None => self.output.warn("Invalid option."),
            }
        }
    }

    /// Run a single menu option. Exit is a no-op here; [`Menu::run`] owns the loop.
    pub fn handle(&mut self, option: MenuOption) -> Result<()> {
        match option {
            MenuOption::CreateClient => self.create_client(),
            MenuOption::CreateEmployee => self.create_employee(),
            MenuOption::ShowClients => self.show_recent_clients(),
            MenuOption::ShowEmployees => self.show_recent_employees(),
            MenuOption::Exit => Ok(()),
        }
    }

    fn show_menu(&self) {
        self.output.heading("=== MAIN MENU ===");
        for option in MenuOption::ALL {
            self.output.info(&format!(
                "Option {}: {}",
                option.number(),
                option.label(self.config.display.recent_count)
            ));
        }
    }

    fn read_option(&mut self) -> Result<i64> {
        FieldReader::new(&mut self.source, &self.output, &self.config.input)
            .read_number("Select an option")
    }

    /// Prompt for every client field and register the result.
    pub fn create_client(&mut self) -> Result<()> {
        self.output.heading("--- Create Client ---");

        let client = {
            let mut reader = FieldReader::new(&mut self.source, &self.output, &self.config.input);
            let first_name = reader.read_first_name()?;
            let last_name = reader.read_last_name()?;
            let rut = reader.read_rut()?;
            let phone = reader.read_phone()?;
            let email = reader.read_email()?;
            let address = Address::new(
                reader.read_text("street and number", STREET_MAX)?,
                reader.read_text("commune", COMMUNE_MAX)?,
                reader.read_text("region", REGION_MAX)?,
            );
            Client::new(
                Person::new(first_name, last_name, rut, address, email),
                phone,
            )
        };

        self.add_client(client).map(|_| ())
    }

    /// Prompt for every employee field and register the result.
    pub fn create_employee(&mut self) -> Result<()> {
        self.output.heading("--- Create Employee ---");

        let employee = {
            let mut reader = FieldReader::new(&mut self.source, &self.output, &self.config.input);
            let first_name = reader.read_first_name()?;
            let last_name = reader.read_last_name()?;
            let rut = reader.read_rut()?;
            let email = reader.read_email()?;
            let salary = reader.read_salary()?;
            let job_title = reader.read_text("job title", JOB_TITLE_MAX)?;
            let address = Address::new(
                reader.read_text("street and number", STREET_MAX)?,
                reader.read_text("commune", COMMUNE_MAX)?,
                reader.read_text("region", REGION_MAX)?,
            );
            Employee::new(
                Person::new(first_name, last_name, rut, address, email),
                job_title,
                salary,
            )
        };

        self.add_employee(employee).map(|_| ())
    }

    /// Register a client, reporting the outcome. Returns whether it was stored.
    pub fn add_client(&mut self, client: Client) -> Result<bool> {
        let result = self.registry.add_client(client);
        self.report(Kind::Client, result)
    }

    /// Register an employee, reporting the outcome. Returns whether it was stored.
    pub fn add_employee(&mut self, employee: Employee) -> Result<bool> {
        let result = self.registry.add_employee(employee);
        self.report(Kind::Employee, result)
    }

    /// Register employees without prompting, then print the ones stored.
    ///
    /// An employee that fails validation is reported like any rejected
    /// record and left out of the printout.
    pub fn seed(&mut self, employees: Vec<Employee>) -> Result<()> {
        let mut stored = Vec::new();
        for employee in employees {
            if self.add_employee(employee.clone())? {
                stored.push(employee);
            }
        }
        for employee in &stored {
            self.output.info(&employee.to_string());
        }
        Ok(())
    }

    pub fn show_recent_clients(&self) -> Result<()> {
        let recent = self
            .registry
            .recent_clients(self.config.display.recent_count)?;
        self.list(Kind::Client, &recent)
    }

    pub fn show_recent_employees(&self) -> Result<()> {
        let recent = self
            .registry
            .recent_employees(self.config.display.recent_count)?;
        self.list(Kind::Employee, &recent)
    }

    fn report(&self, kind: Kind, result: Result<usize>) -> Result<bool> {
        match result {
            Ok(_) => {
                self.output
                    .success(&format!("{} created successfully.", kind.capitalized()));
                Ok(true)
            }
            Err(err) => match err.downcast_ref::<ValidationError>() {
                Some(validation) => {
                    self.output.error(&format!("Error validating {}.", kind));
                    for violation in &validation.violations {
                        self.output.detail(&violation.to_string());
                    }
                    Ok(false)
                }
                None => Err(err),
            },
        }
    }

    fn list<R: Listing>(&self, kind: Kind, records: &[StoredRecord<R>]) -> Result<()> {
        if records.is_empty() {
            self.output.info(&format!("No {} registered.", kind.plural()));
            return Ok(());
        }

        if self.output.mode() == OutputMode::Json {
            for stored in records {
                let entry = serde_json::to_value(stored)
                    .with_context(|| format!("Failed to serialize {}", kind))?;
                self.output.json(&json!({
                    "level": "record",
                    "kind": kind.to_string(),
                    "entry": entry,
                }));
            }
            return Ok(());
        }

        self.output.heading(&format!(
            "--- Last {} {} ---",
            self.config.display.recent_count,
            kind.plural_capitalized()
        ));
        for stored in records {
            let person = stored.record.person();
            self.output
                .info(&format!("{}. {}", stored.position, person.full_name()));
            for line in stored.record.detail_lines() {
                self.output.info(&line);
            }
            self.output.info(&format!("RUT: {}", person.rut));
            self.output.info(&format!("Address: {}", person.address));
        }
        Ok(())
    }
}

/// Records that can be shown in a listing.
trait Listing: serde::Serialize {
    fn person(&self) -> &Person;

    /// Lines shown between the name and the RUT
    fn detail_lines(&self) -> Vec<String>;
}

impl Listing for Client {
    fn person(&self) -> &Person {
        &self.person
    }

    fn detail_lines(&self) -> Vec<String> {
        vec![format!("Phone: {}", self.phone)]
    }
}

impl Listing for Employee {
    fn person(&self) -> &Person {
        &self.person
    }

    fn detail_lines(&self) -> Vec<String> {
        vec![
            format!("Job title: {}", self.job_title),
            format!("Salary: {}", format::pesos(self.salary)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Rut;
    use crate::input::BufferedSource;
    use crate::output::testing::{captured, contents};
    use std::io::Cursor;
    use std::sync::{Arc, Mutex};

    type TestMenu = Menu<BufferedSource<Cursor<Vec<u8>>>>;

    fn menu(input: &str, mode: OutputMode) -> (TestMenu, Arc<Mutex<Vec<u8>>>) {
        let (output, buffer) = captured(mode);
        let source = BufferedSource::new(Cursor::new(input.as_bytes().to_vec()), output.clone());
        (Menu::new(source, output, Config::default()), buffer)
    }

    fn employee(first_name: &str, salary: f64) -> Employee {
        Employee::new(
            Person::new(
                first_name,
                "ROJAS",
                Rut::new("12345678-9"),
                Address::new("Av. Los Pinos 123", "Paine", "Santiago"),
                "kakarotowins@gmail.com",
            ),
            "PELEADOR",
            salary,
        )
    }

    const CLIENT_INPUT: &str =
        "Lucia\nPerez\n11111111-1\n912345678\nlucia@example.cl\nLos Aromos 12\nMaipu\nSantiago\n";

    #[test]
    fn test_option_numbers_round_trip() {
        for option in MenuOption::ALL {
            assert_eq!(MenuOption::from_number(option.number()), Some(option));
        }
        assert_eq!(MenuOption::from_number(0), None);
        assert_eq!(MenuOption::from_number(6), None);
    }

    #[test]
    fn test_exit_immediately() {
        let (mut menu, buffer) = menu("5\n", OutputMode::Human);
        menu.run().unwrap();

        let text = contents(&buffer);
        assert!(text.contains("=== MAIN MENU ==="));
        assert!(text.contains("Option 3: View last 3 clients"));
        assert!(text.contains("Exiting the system..."));
    }

    #[test]
    fn test_invalid_and_non_numeric_options() {
        let (mut menu, buffer) = menu("abc\n9\n5\n", OutputMode::Human);
        menu.run().unwrap();

        let text = contents(&buffer);
        assert!(text.contains("You must enter a number."));
        assert!(text.contains("Invalid option."));
    }

    #[test]
    fn test_run_fails_when_input_ends() {
        let (mut menu, _) = menu("1\nLucia\n", OutputMode::Human);
        assert!(menu.run().is_err());
        assert_eq!(menu.registry().client_count(), 0);
    }

    #[test]
    fn test_create_client() {
        let (mut menu, buffer) = menu(CLIENT_INPUT, OutputMode::Human);
        menu.create_client().unwrap();

        assert_eq!(menu.registry().client_count(), 1);
        let stored = &menu.registry().recent_clients(1).unwrap()[0];
        assert_eq!(stored.record.person.full_name(), "LUCIA PEREZ");
        assert_eq!(stored.record.person.address.to_string(), "LOS AROMOS 12, MAIPU, SANTIAGO");
        assert_eq!(stored.record.person.email, "lucia@example.cl");
        assert!(contents(&buffer).contains("✓ Client created successfully."));
    }

    #[test]
    fn test_create_employee() {
        let input = "Mario\nChampiñon\n87654321-K\nmariosalta@gmail.com\n950000\nFontanero\nCalle El Roble 456\nPuente Alto\nSantiago\n";
        let (mut menu, buffer) = menu(input, OutputMode::Human);
        menu.create_employee().unwrap();

        let stored = &menu.registry().recent_employees(1).unwrap()[0];
        assert_eq!(stored.record.person.full_name(), "MARIO CHAMPIÑON");
        assert_eq!(stored.record.job_title, "FONTANERO");
        assert_eq!(stored.record.salary, 950000.0);
        assert!(contents(&buffer).contains("✓ Employee created successfully."));
    }

    #[test]
    fn test_add_invalid_employee_reports_violations() {
        let (mut menu, buffer) = menu("", OutputMode::Human);
        assert!(!menu.add_employee(employee("KAKAROTO", 0.0)).unwrap());

        let text = contents(&buffer);
        assert!(text.contains("✗ Error validating employee."));
        assert!(text.contains("  salary must be greater than 0"));
        assert_eq!(menu.registry().employee_count(), 0);
    }

    #[test]
    fn test_empty_listings() {
        let (menu, buffer) = menu("", OutputMode::Human);
        menu.show_recent_clients().unwrap();
        menu.show_recent_employees().unwrap();

        let text = contents(&buffer);
        assert!(text.contains("No clients registered."));
        assert!(text.contains("No employees registered."));
    }

    #[test]
    fn test_listing_shows_last_three_with_positions() {
        let (mut menu, buffer) = menu("", OutputMode::Human);
        for name in ["UNO", "DOS", "TRES", "CUATRO"] {
            assert!(menu.add_employee(employee(name, 500000.0)).unwrap());
        }
        menu.show_recent_employees().unwrap();

        let text = contents(&buffer);
        assert!(text.contains("--- Last 3 Employees ---"));
        assert!(!text.contains("1. UNO ROJAS"));
        assert!(text.contains("2. DOS ROJAS\nJob title: PELEADOR\nSalary: $500000 pesos\nRUT: 12345678-9\nAddress: Av. Los Pinos 123, Paine, Santiago"));
        assert!(text.contains("4. CUATRO ROJAS"));
    }

    #[test]
    fn test_client_listing_lines() {
        let (mut menu, buffer) = menu(CLIENT_INPUT, OutputMode::Human);
        menu.create_client().unwrap();
        menu.show_recent_clients().unwrap();

        let text = contents(&buffer);
        assert!(text.contains(
            "1. LUCIA PEREZ\nPhone: 912345678\nRUT: 11111111-1\nAddress: LOS AROMOS 12, MAIPU, SANTIAGO"
        ));
    }

    #[test]
    fn test_json_listing() {
        let (mut menu, buffer) = menu("", OutputMode::Json);
        menu.add_employee(employee("KAKAROTO", 750000.0)).unwrap();
        menu.show_recent_employees().unwrap();

        let text = contents(&buffer);
        let record = text
            .lines()
            .map(|line| serde_json::from_str::<serde_json::Value>(line).unwrap())
            .find(|event| event["level"] == "record")
            .unwrap();
        assert_eq!(record["kind"], "employee");
        assert_eq!(record["entry"]["position"], 1);
        assert_eq!(record["entry"]["record"]["first_name"], "KAKAROTO");
        assert_eq!(record["entry"]["record"]["salary"], 750000.0);
    }

    #[test]
    fn test_seed_prints_stored_employees() {
        let (mut menu, buffer) = menu("", OutputMode::Human);
        menu.seed(vec![employee("KAKAROTO", 750000.0), employee("MALO", -1.0)])
            .unwrap();

        assert_eq!(menu.registry().employee_count(), 1);
        let text = contents(&buffer);
        assert!(text.contains("Employee: KAKAROTO ROJAS"));
        assert!(!text.contains("Employee: MALO ROJAS"));
    }
}
