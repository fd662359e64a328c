//! Validated storage of clients and employees.
//!
//! Records are checked with [`Validate`] before they reach a repository.
//! Invalid records are rejected with a
//! [`ValidationError`](crate::validator::ValidationError) that callers can
//! recover with `anyhow::Error::downcast_ref`.

use anyhow::Result;

use crate::domain::{Client, Employee};
use crate::repository::{InMemoryRepository, RecordRepository, StoredRecord};
use crate::validator::Validate;

/// Holds the client and employee lists.
#[derive(Debug, Default)]
pub struct Registry {
    clients: InMemoryRepository<Client>,
    employees: InMemoryRepository<Employee>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and store a client, returning its position.
    pub fn add_client(&mut self, client: Client) -> Result<usize> {
        client.validate("client")?;
        self.clients.save(client)
    }

    /// Validate and store an employee, returning its position.
    pub fn add_employee(&mut self, employee: Employee) -> Result<usize> {
        employee.validate("employee")?;
        self.employees.save(employee)
    }

    pub fn recent_clients(&self, count: usize) -> Result<Vec<StoredRecord<Client>>> {
        self.clients.recent(count)
    }

    pub fn recent_employees(&self, count: usize) -> Result<Vec<StoredRecord<Employee>>> {
        self.employees.recent(count)
    }

    pub fn client_count(&self) -> usize {
        self.clients.count()
    }

    pub fn employee_count(&self) -> usize {
        self.employees.count()
    }
}
