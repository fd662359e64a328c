//! Record model: identifiers, addresses and the people the business tracks.
//!
//! [`Client`] and [`Employee`] both embed a [`Person`], which in turn holds a
//! [`Rut`] and an [`Address`]. Every type implements
//! [`Validate`](crate::validator::Validate).

pub mod address;
pub mod client;
pub mod employee;
pub mod patterns;
pub mod person;
pub mod rut;

pub use address::Address;
pub use client::Client;
pub use employee::Employee;
pub use person::Person;
pub use rut::Rut;

/// Maximum characters for first and last names.
pub const NAME_MAX: usize = 50;
/// Maximum characters for a street line.
pub const STREET_MAX: usize = 100;
/// Maximum characters for a commune.
pub const COMMUNE_MAX: usize = 50;
/// Maximum characters for a region.
pub const REGION_MAX: usize = 50;
/// Maximum characters for a job title.
pub const JOB_TITLE_MAX: usize = 50;
