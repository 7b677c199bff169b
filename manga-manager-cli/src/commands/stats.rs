use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

use super::{library_path, open_library};

pub(crate) fn run_stats(db_path: Option<PathBuf>) -> Result<(), CliError> {
    let path = library_path(db_path);

    if !path.exists() {
        log::warn!("No library found at {}", path.display());
        log::info!("Run 'manga-manager add <name> <author> <tome>' to create one.");
        return Ok(());
    }

    let library = open_library(Some(path.clone()))?;
    let stats = library.stats()?;

    log::info!(
        "{}",
        "Library Statistics".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Database: {}", path.display());
    crate::log_blank();
    log::info!("  Books:    {:>8}", stats.books);
    log::info!("  Authors:  {:>8}", stats.authors);
    log::info!("  Types:    {:>8}", stats.types);

    Ok(())
}
