//! # Contactbook Architecture
//!
//! Contactbook is a small personal address book. The library owns the
//! records and their persistence; the `contactbook` binary is one client of
//! it, and any other front end (a form, an exporter) goes through the same
//! [`book::AddressBook`] API.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (cli/, wired by main.rs)                               │
//! │  - Parses arguments, prints tables and messages             │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  AddressBook (book.rs)                                      │
//! │  - Ordered records: add, remove, search, sort, max id       │
//! │  - Explicit save/load to any path                           │
//! │  - Write-through to a Repository after every mutation       │
//! └─────────────────────────────────────────────────────────────┘
//!                 │                             │
//!                 ▼                             ▼
//! ┌───────────────────────────────┐ ┌───────────────────────────┐
//! │  Repository (store/)          │ │  Codecs (codec/)          │
//! │  - FileRepository (JSON file) │ │  - JSON (contacts.json)   │
//! │  - MemRepository (tests)      │ │  - legacy tab-separated   │
//! └───────────────────────────────┘ └───────────────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`book`]: the address book and search fields
//! - [`model`]: the [`model::Record`] type
//! - [`codec`]: JSON and legacy text encodings, picked by extension
//! - [`store`]: write-through persistence backends
//! - [`validation`]: stricter field checks for input forms
//! - [`export`]: spreadsheet export behind the [`export::Exporter`] trait
//! - [`config`]: `config.json` settings
//! - [`error`]: error types

pub mod book;
pub mod codec;
pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod store;
pub mod validation;
