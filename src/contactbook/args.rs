use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "contactbook", version)]
#[command(about = "Personal address book for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data file to use instead of the configured one
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    /// Last name
    Last,
    /// Numeric id
    Id,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a contact
    #[command(alias = "a")]
    Add {
        #[arg(long)]
        first: String,

        #[arg(long)]
        last: String,

        #[arg(long)]
        phone: String,

        /// Birth date (YYYY-MM-DD)
        #[arg(long, default_value = "")]
        birth_date: String,

        #[arg(long, default_value = "")]
        email: String,

        #[arg(long, default_value = "")]
        address: String,

        #[arg(long, default_value = "")]
        notes: String,

        /// Explicit id (defaults to the highest id + 1)
        #[arg(long)]
        id: Option<i32>,

        /// Only require first name, last name and phone
        #[arg(long)]
        no_check: bool,
    },

    /// Remove contacts by id
    #[command(alias = "rm")]
    Remove {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<i32>,
    },

    /// List contacts (stored order unless --sort is given)
    #[command(alias = "ls")]
    List {
        /// Order the listing only; the stored order is left alone
        #[arg(long, value_enum)]
        sort: Option<SortKey>,

        /// Descending (last name only)
        #[arg(long, requires = "sort")]
        desc: bool,
    },

    /// Search one field (first, last, phone, email, address or 0-4)
    #[command(alias = "s")]
    Search {
        query: String,

        #[arg(short, long, default_value = "last")]
        field: String,
    },

    /// Reorder the stored contacts
    Sort {
        #[arg(value_enum)]
        by: SortKey,

        /// Descending (last name only)
        #[arg(long)]
        desc: bool,
    },

    /// Sort by id and list
    Refresh,

    /// Save a copy (.json, anything else is tab-separated text)
    Save { path: PathBuf },

    /// Replace the book with the contents of a file
    Import { path: PathBuf },

    /// Export contacts to CSV
    Export {
        path: PathBuf,

        /// Append to an existing file
        #[arg(long)]
        append: bool,

        /// Only export contacts matching this query
        #[arg(short, long)]
        query: Option<String>,

        #[arg(short, long, default_value = "last")]
        field: String,
    },
}
