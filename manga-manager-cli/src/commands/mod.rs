pub(crate) mod edit;
pub(crate) mod find;
pub(crate) mod list;
pub(crate) mod stats;

use std::path::PathBuf;

use manga_manager_catalog::BookRecord;
use manga_manager_db::{default_library_path, Library};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

/// Resolve `--db`, falling back to the default library location.
pub(crate) fn library_path(db_path: Option<PathBuf>) -> PathBuf {
    db_path.unwrap_or_else(default_library_path)
}

pub(crate) fn open_library(db_path: Option<PathBuf>) -> Result<Library, CliError> {
    let path = library_path(db_path);
    Library::open(&path).map_err(|e| {
        CliError::database(format!(
            "Failed to open library {}: {}",
            path.display(),
            e
        ))
    })
}

pub(crate) fn run_path(db_path: Option<PathBuf>) {
    log::info!("{}", library_path(db_path).display());
}

/// Truncate a string to a maximum width, appending "..." if needed.
pub(crate) fn truncate_str(s: &str, max: usize) -> String {
    let count = s.chars().count();
    if count <= max {
        s.to_string()
    } else if max > 3 {
        let head: String = s.chars().take(max - 3).collect();
        format!("{}...", head)
    } else {
        s.chars().take(max).collect()
    }
}

const TITLE_WIDTH: usize = 32;
const AUTHOR_WIDTH: usize = 20;
const TYPE_WIDTH: usize = 20;

pub(crate) fn log_table_header() {
    log::info!(
        "{}",
        format!(
            "{:>5}  {:<tw$}  {:<aw$}  {:<kw$}  {:>5}",
            "ID",
            "Title",
            "Author",
            "Type",
            "Tome",
            tw = TITLE_WIDTH,
            aw = AUTHOR_WIDTH,
            kw = TYPE_WIDTH,
        )
        .if_supports_color(Stdout, |t| t.bold()),
    );
}

pub(crate) fn log_record(record: &BookRecord) {
    log::info!(
        "{:>5}  {:<tw$}  {:<aw$}  {:<kw$}  {:>5}",
        record.id,
        truncate_str(&record.title, TITLE_WIDTH),
        truncate_str(&record.author, AUTHOR_WIDTH),
        truncate_str(&record.kind, TYPE_WIDTH),
        record.tome,
        tw = TITLE_WIDTH,
        aw = AUTHOR_WIDTH,
        kw = TYPE_WIDTH,
    );
}
