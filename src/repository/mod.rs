//! Storage for registered records.

pub mod in_memory;
pub mod record_repository;

pub use in_memory::InMemoryRepository;
pub use record_repository::{RecordRepository, StoredRecord};
