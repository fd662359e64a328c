//! # Salmontt - client and employee records
//!
//! A console utility for a small business. It captures, validates and lists
//! client and employee records. Each record holds personal data, a Chilean
//! RUT and a postal address.
//!
//! ## Modules
//!
//! - [`validator`] - Fluent rule chaining for single values
//! - [`domain`] - `Rut`, `Address`, `Person`, `Client` and `Employee`
//! - [`repository`] - Insertion-ordered record storage
//! - [`registry`] - Validation gate in front of the repositories
//! - [`input`] - Prompting and re-prompting for record fields
//! - [`menu`] - The interactive main menu
//! - [`config`] - YAML frontmatter configuration
//! - [`output`] - Human, JSON and quiet console output
//!
//! ## Example
//!
//! ```
//! use salmontt::domain::{Address, Client, Person, Rut};
//! use salmontt::registry::Registry;
//!
//! let person = Person::new(
//!     "LUCIA",
//!     "PEREZ",
//!     Rut::new("11111111-1"),
//!     Address::new("Los Aromos 12", "Maipu", "Santiago"),
//!     "lucia@example.cl",
//! );
//!
//! let mut registry = Registry::new();
//! let position = registry.add_client(Client::new(person, "912345678")).unwrap();
//! assert_eq!(position, 1);
//! ```

pub mod config;
pub mod domain;
pub mod input;
pub mod menu;
pub mod output;
pub mod registry;
pub mod repository;
pub mod seed;
pub mod ui;
pub mod validator;

/// Generate a UTC timestamp in ISO 8601 format: `YYYY-MM-DDTHH:MM:SSZ`
pub fn utc_now_iso() -> String {
    chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}
