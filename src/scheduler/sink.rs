//! Placement persistence.
//!
//! The generator hands every committed placement to a [`PlacementSink`].
//! Sinks are awaited one call at a time; a failed save is logged by the
//! generator and never aborts the run.

use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard};

use crate::error::SinkError;
use crate::models::{CourseRecord, Placement};

/// Receives placements as they are committed.
#[async_trait]
pub trait PlacementSink: Send + Sync {
    /// Persists one placement.
    async fn save(&self, placement: &Placement) -> Result<(), SinkError>;
}

/// Sink that accepts everything and stores nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

#[async_trait]
impl PlacementSink for NoopSink {
    async fn save(&self, _placement: &Placement) -> Result<(), SinkError> {
        Ok(())
    }
}

/// In-process course store.
///
/// Implements the store contract course services expose: add one, list
/// all, delete all, delete by section. Records get sequential ids.
#[derive(Debug, Default)]
pub struct MemorySink {
    inner: Mutex<MemoryStore>,
}

#[derive(Debug, Default)]
struct MemoryStore {
    records: Vec<CourseRecord>,
    next_id: u64,
}

impl MemorySink {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, MemoryStore>, SinkError> {
        self.inner.lock().map_err(|e| SinkError::new(e.to_string()))
    }

    /// Stores a record, assigning the next id. Returns the stored record.
    pub fn add(&self, mut record: CourseRecord) -> Result<CourseRecord, SinkError> {
        let mut store = self.lock()?;
        store.next_id += 1;
        record.id = Some(store.next_id);
        store.records.push(record.clone());
        Ok(record)
    }

    /// All stored records in insertion order.
    pub fn list(&self) -> Result<Vec<CourseRecord>, SinkError> {
        Ok(self.lock()?.records.clone())
    }

    /// Number of stored records.
    pub fn len(&self) -> Result<usize, SinkError> {
        Ok(self.lock()?.records.len())
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> Result<bool, SinkError> {
        Ok(self.lock()?.records.is_empty())
    }

    /// Removes every record. Returns how many were removed.
    pub fn delete_all(&self) -> Result<usize, SinkError> {
        let mut store = self.lock()?;
        let removed = store.records.len();
        store.records.clear();
        Ok(removed)
    }

    /// Removes every record of one section. Returns how many were removed.
    pub fn delete_section(&self, section: &str) -> Result<usize, SinkError> {
        let mut store = self.lock()?;
        let before = store.records.len();
        store.records.retain(|r| r.section_name != section);
        Ok(before - store.records.len())
    }

    /// Removes one record by id. Returns whether it existed.
    pub fn delete(&self, id: u64) -> Result<bool, SinkError> {
        let mut store = self.lock()?;
        let before = store.records.len();
        store.records.retain(|r| r.id != Some(id));
        Ok(store.records.len() != before)
    }
}

#[async_trait]
impl PlacementSink for MemorySink {
    async fn save(&self, placement: &Placement) -> Result<(), SinkError> {
        self.add(CourseRecord::from(placement)).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Weekday;

    fn placement(section: &str, hour: u32) -> Placement {
        Placement::new("Java", "Dilip", section, "101", Weekday::Monday, hour, hour + 1)
    }

    #[tokio::test]
    async fn test_noop_sink_accepts() {
        assert!(NoopSink.save(&placement("CSE-A", 9)).await.is_ok());
    }

    #[tokio::test]
    async fn test_memory_sink_assigns_ids() {
        let sink = MemorySink::new();
        sink.save(&placement("CSE-A", 9)).await.unwrap();
        sink.save(&placement("CSE-A", 10)).await.unwrap();

        let records = sink.list().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, Some(1));
        assert_eq!(records[1].id, Some(2));
        assert_eq!(records[1].start_time, "10:00");
    }

    #[tokio::test]
    async fn test_memory_sink_deletes() {
        let sink = MemorySink::new();
        sink.save(&placement("CSE-A", 9)).await.unwrap();
        sink.save(&placement("ECE-A", 9)).await.unwrap();
        sink.save(&placement("CSE-A", 10)).await.unwrap();

        assert_eq!(sink.delete_section("CSE-A").unwrap(), 2);
        assert_eq!(sink.len().unwrap(), 1);

        assert!(sink.delete(2).unwrap());
        assert!(!sink.delete(2).unwrap());
        assert!(sink.is_empty().unwrap());

        sink.save(&placement("CSE-A", 11)).await.unwrap();
        assert_eq!(sink.delete_all().unwrap(), 1);
        assert!(sink.is_empty().unwrap());
    }
}
