mod print;

use crate::args::{Cli, Commands, SortKey};
use contactbook::book::AddressBook;
use contactbook::config::BookConfig;
use contactbook::error::{BookError, Result};
use contactbook::export::{CsvExporter, Exporter};
use contactbook::model::Record;
use contactbook::store::fs::FileRepository;
use contactbook::validation::check_record;
use directories::ProjectDirs;
use print::{print_info, print_records, print_success};
use std::path::{Path, PathBuf};
use tracing::debug;

const CONFIG_DIR_ENV: &str = "CONTACTBOOK_CONFIG_DIR";
const DATA_FILE_ENV: &str = "CONTACTBOOK_DATA";

struct AppContext {
    book: AddressBook<FileRepository>,
    config: BookConfig,
}

pub fn run(cli: Cli) -> Result<()> {
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add {
            first,
            last,
            phone,
            birth_date,
            email,
            address,
            notes,
            id,
            no_check,
        }) => {
            let id = match id {
                Some(id) => id,
                None => ctx.book.next_id()?,
            };
            let record = Record::new(id, first, last, phone)
                .with_birth_date(birth_date)
                .with_email(email)
                .with_address(address)
                .with_notes(notes);
            handle_add(&mut ctx, record, no_check)
        }
        Some(Commands::Remove { ids }) => handle_remove(&mut ctx, &ids),
        Some(Commands::List { sort, desc }) => handle_list(&ctx, sort, desc),
        None => handle_list(&ctx, None, false),
        Some(Commands::Search { query, field }) => handle_search(&ctx, &query, &field),
        Some(Commands::Sort { by, desc }) => handle_sort(&mut ctx, by, desc),
        Some(Commands::Refresh) => handle_refresh(&mut ctx),
        Some(Commands::Save { path }) => handle_save(&mut ctx, &path),
        Some(Commands::Import { path }) => handle_import(&mut ctx, &path),
        Some(Commands::Export {
            path,
            append,
            query,
            field,
        }) => handle_export(&ctx, &path, append, query.as_deref(), &field),
    }
}

fn config_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "contactbook", "contactbook").map(|d| d.config_dir().to_path_buf())
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config = match config_dir() {
        Some(dir) => BookConfig::load(dir)?,
        None => BookConfig::default(),
    };

    let data_file = cli
        .data
        .clone()
        .or_else(|| std::env::var_os(DATA_FILE_ENV).map(PathBuf::from))
        .unwrap_or_else(|| config.data_file.clone());
    debug!(data_file = %data_file.display(), "opening address book");

    let book = AddressBook::new(FileRepository::new(data_file));
    Ok(AppContext { book, config })
}

fn handle_add(ctx: &mut AppContext, record: Record, no_check: bool) -> Result<()> {
    if !no_check {
        check_record(&record)?;
    }
    let summary = record.to_string();
    ctx.book.add_entry(record)?;
    print_success(&format!("Contact added: {}", summary));
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, ids: &[i32]) -> Result<()> {
    let mut missing = Vec::new();
    for &id in ids {
        if ctx.book.remove_entry(id)? {
            print_success(&format!("Contact {} removed", id));
        } else {
            missing.push(id.to_string());
        }
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(BookError::Store(format!(
            "No contact with id {}",
            missing.join(", ")
        )))
    }
}

fn handle_list(ctx: &AppContext, sort: Option<SortKey>, desc: bool) -> Result<()> {
    let mut records: Vec<&Record> = ctx.book.entries().iter().collect();
    match sort {
        Some(SortKey::Last) if desc => records.sort_by(|a, b| b.last_name.cmp(&a.last_name)),
        Some(SortKey::Last) => records.sort_by(|a, b| a.last_name.cmp(&b.last_name)),
        Some(SortKey::Id) => records.sort_by_key(|r| r.id),
        None => {}
    }
    print_records(&records);
    Ok(())
}

fn handle_search(ctx: &AppContext, query: &str, field: &str) -> Result<()> {
    let found = ctx.book.search_by_selector(query, field);
    print_records(&found);
    Ok(())
}

fn handle_sort(ctx: &mut AppContext, by: SortKey, desc: bool) -> Result<()> {
    match by {
        SortKey::Last => ctx.book.sort_by_last_name(!desc)?,
        SortKey::Id => ctx.book.sort_by_id()?,
    }
    handle_list(ctx, None, false)
}

fn handle_refresh(ctx: &mut AppContext) -> Result<()> {
    if !ctx.book.refresh_and_sort()? {
        print_info("Nothing to refresh.");
        return Ok(());
    }
    handle_list(ctx, None, false)
}

fn handle_save(ctx: &mut AppContext, path: &Path) -> Result<()> {
    let path = ctx.config.with_default_extension(path);
    ctx.book.save_to_file(&path)?;
    print_success(&format!(
        "Saved {} contacts to {}",
        ctx.book.len(),
        path.display()
    ));
    Ok(())
}

fn handle_import(ctx: &mut AppContext, path: &Path) -> Result<()> {
    ctx.book.load_from_file(path)?;
    ctx.book.persist()?;
    print_success(&format!(
        "Loaded {} contacts from {} (next id: {})",
        ctx.book.len(),
        path.display(),
        ctx.book.next_id()?
    ));
    Ok(())
}

fn handle_export(
    ctx: &AppContext,
    path: &Path,
    append: bool,
    query: Option<&str>,
    field: &str,
) -> Result<()> {
    let records: Vec<&Record> = match query {
        Some(q) => ctx.book.search_by_selector(q, field),
        None => ctx.book.entries().iter().collect(),
    };
    let written = CsvExporter.export(&records, path, append)?;
    print_success(&format!("Exported {} contacts to {}", written, path.display()));
    Ok(())
}
