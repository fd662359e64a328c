use anyhow::Result;

use super::record_repository::{RecordRepository, StoredRecord};

/// In-memory implementation of RecordRepository.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<R> {
    records: Vec<StoredRecord<R>>,
}

impl<R> Default for InMemoryRepository<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> InMemoryRepository<R> {
    /// Create a new empty InMemoryRepository.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<R: Clone> RecordRepository<R> for InMemoryRepository<R> {
    fn save(&mut self, record: R) -> Result<usize> {
        let position = self.records.len() + 1;
        self.records.push(StoredRecord {
            position,
            registered_at: crate::utc_now_iso(),
            record,
        });
        Ok(position)
    }

    fn list_all(&self) -> Result<Vec<StoredRecord<R>>> {
        Ok(self.records.clone())
    }

    fn count(&self) -> usize {
        self.records.len()
    }

    fn recent(&self, count: usize) -> Result<Vec<StoredRecord<R>>> {
        let skip = self.records.len().saturating_sub(count);
        Ok(self.records[skip..].to_vec())
    }
}
