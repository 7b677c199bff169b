use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::cli_types::BookArgs;
use crate::CliError;

use super::{log_record, log_table_header, open_library};

/// Look up books by their full identity.
pub(crate) fn run_find(db_path: Option<PathBuf>, book: &BookArgs) -> Result<(), CliError> {
    let key = book
        .to_book()
        .key()
        .map_err(|e| CliError::invalid_input(e.to_string()))?;

    let library = open_library(db_path)?;
    let records = library.find_key(&key)?;

    if records.is_empty() {
        log::info!(
            "{} {}",
            "Not found:".if_supports_color(Stdout, |t| t.yellow()),
            key,
        );
        return Ok(());
    }

    log_table_header();
    for record in &records {
        log_record(record);
    }

    Ok(())
}
