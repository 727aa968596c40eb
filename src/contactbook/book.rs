//! # Address Book
//!
//! [`AddressBook`] owns the ordered list of [`Record`]s. Order is insertion
//! order until one of the sort operations rearranges it.
//!
//! ## Write-through
//!
//! Every successful mutation (`add_entry`, a `remove_entry` that removed
//! something, either sort) hands the full list to the [`Repository`] before
//! returning. There is no batching and no rollback: if the write fails the
//! in-memory change stays and the error goes to the caller.
//!
//! ## Loading
//!
//! [`AddressBook::new`] loads from the repository and swallows any failure,
//! starting empty instead. This is the only place errors are not surfaced.
//! Explicit [`AddressBook::load_from_file`] calls propagate errors.
//!
//! ## Ids
//!
//! Ids belong to the caller. The book neither mints nor deduplicates them;
//! [`AddressBook::next_id`] is the `max + 1` convention clients use.

use crate::codec::{self, Format};
use crate::error::{BookError, Result};
use crate::model::Record;
use crate::store::Repository;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info, warn};

/// Field a search runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    FirstName,
    LastName,
    Phone,
    Email,
    Address,
}

impl SearchField {
    pub const ALL: [SearchField; 5] = [
        SearchField::FirstName,
        SearchField::LastName,
        SearchField::Phone,
        SearchField::Email,
        SearchField::Address,
    ];

    /// Position in the search-type picker (0 = first name .. 4 = address).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    fn value(self, record: &Record) -> &str {
        match self {
            SearchField::FirstName => &record.first_name,
            SearchField::LastName => &record.last_name,
            SearchField::Phone => &record.phone_number,
            SearchField::Email => &record.email,
            SearchField::Address => &record.address,
        }
    }

    fn is_optional(self) -> bool {
        matches!(self, SearchField::Email | SearchField::Address)
    }

    /// `needle` must already be lowercase.
    fn matches(self, record: &Record, needle: &str) -> bool {
        let value = self.value(record);
        if self.is_optional() && value.is_empty() {
            return false;
        }
        value.to_lowercase().contains(needle)
    }
}

impl FromStr for SearchField {
    type Err = BookError;

    fn from_str(s: &str) -> Result<Self> {
        if let Ok(index) = s.parse::<usize>() {
            return Self::from_index(index)
                .ok_or_else(|| BookError::Validation(format!("unknown search field: {}", s)));
        }
        match s.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "first" | "firstname" => Ok(SearchField::FirstName),
            "last" | "lastname" => Ok(SearchField::LastName),
            "phone" | "phonenumber" => Ok(SearchField::Phone),
            "email" => Ok(SearchField::Email),
            "address" => Ok(SearchField::Address),
            _ => Err(BookError::Validation(format!("unknown search field: {}", s))),
        }
    }
}

pub struct AddressBook<R: Repository> {
    entries: Vec<Record>,
    repository: R,
    working_path: Option<PathBuf>,
}

impl<R: Repository> AddressBook<R> {
    /// Build a book backed by `repository`, starting from whatever it holds.
    /// Load failures leave the book empty.
    pub fn new(repository: R) -> Self {
        let entries = match repository.load() {
            Ok(entries) => entries,
            Err(e) => {
                warn!(error = %e, "could not load saved contacts, starting empty");
                Vec::new()
            }
        };
        Self {
            entries,
            repository,
            working_path: None,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// The live list, in its current order.
    pub fn entries(&self) -> &[Record] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Path of the last successful `save_to_file`/`load_from_file`.
    pub fn working_path(&self) -> Option<&Path> {
        self.working_path.as_deref()
    }

    pub fn add_entry(&mut self, record: Record) -> Result<()> {
        let missing = record.missing_fields();
        if !missing.is_empty() {
            return Err(BookError::Validation(format!(
                "required fields must be filled in: {}",
                missing.join(", ")
            )));
        }

        info!(id = record.id, "adding contact");
        self.entries.push(record);
        self.persist()
    }

    /// Remove every record carrying `id`. Returns whether any was removed.
    pub fn remove_entry(&mut self, id: i32) -> Result<bool> {
        let before = self.entries.len();
        self.entries.retain(|r| r.id != id);
        let removed = before - self.entries.len();

        if removed == 0 {
            debug!(id, "no contact to remove");
            return Ok(false);
        }

        info!(id, removed, "removed contact");
        self.persist()?;
        Ok(true)
    }

    pub fn contains_id(&self, id: i32) -> bool {
        self.entries.iter().any(|r| r.id == id)
    }

    pub fn max_id(&self) -> i32 {
        self.entries.iter().map(|r| r.id).max().unwrap_or(0)
    }

    /// `max_id() + 1`. Fails instead of wrapping once `i32::MAX` is taken.
    pub fn next_id(&self) -> Result<i32> {
        self.max_id().checked_add(1).ok_or_else(|| {
            BookError::Store(format!("no id left after {}", i32::MAX))
        })
    }

    /// Case-insensitive substring search on one field.
    ///
    /// Empty email/address values never match, not even an empty query.
    pub fn search_by_field(&self, query: &str, field: SearchField) -> Vec<&Record> {
        let needle = query.to_lowercase();
        self.entries
            .iter()
            .filter(|r| field.matches(r, &needle))
            .collect()
    }

    /// Like [`search_by_field`](Self::search_by_field) with the field given
    /// by name or picker index. An unrecognized selector returns everything.
    pub fn search_by_selector(&self, query: &str, selector: &str) -> Vec<&Record> {
        match selector.parse::<SearchField>() {
            Ok(field) => self.search_by_field(query, field),
            Err(_) => {
                debug!(selector, "unknown search selector, returning all");
                self.entries.iter().collect()
            }
        }
    }

    /// Stable sort on last name, plain ordinal comparison.
    pub fn sort_by_last_name(&mut self, ascending: bool) -> Result<()> {
        if ascending {
            self.entries.sort_by(|a, b| a.last_name.cmp(&b.last_name));
        } else {
            self.entries.sort_by(|a, b| b.last_name.cmp(&a.last_name));
        }
        self.persist()
    }

    /// Ascending by id. Does nothing (not even a write) on an empty book.
    pub fn sort_by_id(&mut self) -> Result<()> {
        if self.entries.is_empty() {
            return Ok(());
        }
        self.entries.sort_by_key(|r| r.id);
        self.persist()
    }

    /// Sort by id if there is anything to sort; reports whether it did.
    pub fn refresh_and_sort(&mut self) -> Result<bool> {
        if self.entries.is_empty() {
            return Ok(false);
        }
        self.sort_by_id()?;
        Ok(true)
    }

    /// Write the whole book through to the repository.
    pub fn persist(&self) -> Result<()> {
        self.repository.persist(&self.entries)
    }

    /// Export to `path`, picking the codec from the extension.
    pub fn save_to_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let format = Format::from_path(path);
        codec::write_records(path, format, &self.entries)
            .map_err(|e| BookError::persistence("save", path, e))?;

        info!(path = %path.display(), ?format, count = self.entries.len(), "saved contacts");
        self.working_path = Some(path.to_path_buf());
        Ok(())
    }

    /// Replace the book with the contents of `path`.
    ///
    /// The current list is kept if reading fails. The default data file is
    /// not rewritten; call [`persist`](Self::persist) for that.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let format = Format::from_path(path);
        let entries = codec::read_records(path, format)
            .map_err(|e| BookError::persistence("load", path, e))?;

        info!(path = %path.display(), ?format, count = entries.len(), "loaded contacts");
        self.entries = entries;
        self.working_path = Some(path.to_path_buf());
        Ok(())
    }
}
