use super::Repository;
use crate::error::{BookError, Result};
use crate::model::Record;
use std::cell::{Cell, RefCell};

/// In-memory repository for testing.
///
/// Uses `RefCell`/`Cell` so the `Repository` methods can take `&self`;
/// the book is single-threaded.
#[derive(Default)]
pub struct MemRepository {
    records: RefCell<Vec<Record>>,
    writes: Cell<usize>,
    fail_load: Cell<bool>,
    simulate_write_error: Cell<bool>,
}

impl MemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `records` already stored.
    pub fn with_records(records: Vec<Record>) -> Self {
        let repo = Self::default();
        *repo.records.borrow_mut() = records;
        repo
    }

    /// Make every subsequent `load` fail.
    pub fn failing_load() -> Self {
        let repo = Self::default();
        repo.fail_load.set(true);
        repo
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Number of successful persists so far.
    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    pub fn stored(&self) -> Vec<Record> {
        self.records.borrow().clone()
    }
}

impl Repository for MemRepository {
    fn load(&self) -> Result<Vec<Record>> {
        if self.fail_load.get() {
            return Err(BookError::Store("Simulated load error".to_string()));
        }
        Ok(self.records.borrow().clone())
    }

    fn persist(&self, records: &[Record]) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(BookError::Store("Simulated write error".to_string()));
        }
        *self.records.borrow_mut() = records.to_vec();
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}
