//! # Storage Layer
//!
//! The [`Repository`] trait is the persistence policy behind an
//! [`AddressBook`](crate::book::AddressBook). The book calls
//! [`Repository::load`] once when it is built and [`Repository::persist`]
//! after every successful mutation, handing over the full ordered list.
//!
//! ## Implementations
//!
//! - [`fs::FileRepository`]: production storage
//!   - The whole book lives in one JSON file, `contacts.json` by default
//!   - Every persist rewrites the file (temp file + rename)
//!
//! - [`memory::MemRepository`]: in-memory storage for testing
//!   - No filesystem access
//!   - Counts writes and can simulate write failures
//!
//! Keeping this behind a trait lets the book be exercised headlessly and
//! keeps the write-through policy swappable.

use crate::error::Result;
use crate::model::Record;

pub mod fs;
pub mod memory;

pub const DEFAULT_DATA_FILE: &str = "contacts.json";

pub trait Repository {
    /// Load the stored book. A backend with nothing stored yet returns an
    /// empty list rather than an error.
    fn load(&self) -> Result<Vec<Record>>;

    /// Replace the stored book with `records`, in order.
    fn persist(&self, records: &[Record]) -> Result<()>;
}
