use anyhow::Result;
use serde::Serialize;

/// A record together with where and when it was stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoredRecord<R> {
    /// 1-based insertion position
    pub position: usize,
    /// UTC timestamp, `YYYY-MM-DDTHH:MM:SSZ`
    pub registered_at: String,
    pub record: R,
}

/// A trait for storing records in insertion order.
pub trait RecordRepository<R> {
    /// Append a record and return its position.
    fn save(&mut self, record: R) -> Result<usize>;

    /// All records, oldest first.
    fn list_all(&self) -> Result<Vec<StoredRecord<R>>>;

    /// Number of stored records.
    fn count(&self) -> usize;

    /// The last `count` records, oldest first. Returns everything when fewer
    /// are stored.
    fn recent(&self, count: usize) -> Result<Vec<StoredRecord<R>>> {
        let mut all = self.list_all()?;
        let skip = all.len().saturating_sub(count);
        Ok(all.split_off(skip))
    }
}
