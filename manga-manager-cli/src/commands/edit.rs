use std::path::PathBuf;

use manga_manager_catalog::Book;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::cli_types::{BookArgs, VolumesArgs};
use crate::CliError;

use super::open_library;

/// Add every listed volume, skipping ones already stored.
pub(crate) fn run_add(db_path: Option<PathBuf>, volumes: &VolumesArgs) -> Result<(), CliError> {
    let books = volumes.to_books();
    let mut library = open_library(db_path)?;
    let summary = library.add_many(&books)?;

    log::info!(
        "{} {} volume(s) of {}",
        "Added".if_supports_color(Stdout, |t| t.green()),
        summary.inserted,
        volumes.name.if_supports_color(Stdout, |t| t.bold()),
    );
    if summary.skipped > 0 {
        log::info!(
            "  {}",
            format!("{} already in the library", summary.skipped)
                .if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    Ok(())
}

/// Remove every listed volume. Nothing is removed if any volume is missing.
pub(crate) fn run_remove(
    db_path: Option<PathBuf>,
    volumes: &VolumesArgs,
) -> Result<(), CliError> {
    let books = volumes.to_books();
    let mut library = open_library(db_path)?;
    let deleted = library.delete_many(&books)?;

    log::info!(
        "{} {} volume(s) of {}",
        "Removed".if_supports_color(Stdout, |t| t.red()),
        deleted,
        volumes.name.if_supports_color(Stdout, |t| t.bold()),
    );

    Ok(())
}

/// Build the replacement book: every field not given keeps its old value.
pub(crate) fn replacement(
    old: &BookArgs,
    new_name: Option<String>,
    new_author: Option<String>,
    new_tome: Option<String>,
    new_family: Option<Vec<String>>,
) -> Book {
    Book::new(
        "",
        new_name.unwrap_or_else(|| old.name.clone()),
        new_author.unwrap_or_else(|| old.author.clone()),
        new_tome.unwrap_or_else(|| old.tome.clone()),
    )
    .with_family(new_family.unwrap_or_else(|| old.family.clone()))
}

pub(crate) fn run_replace(
    db_path: Option<PathBuf>,
    old: &Book,
    new: &Book,
) -> Result<(), CliError> {
    let mut library = open_library(db_path)?;
    library.replace(old, new)?;

    let show = |book: &Book| {
        book.key()
            .map(|key| key.to_string())
            .unwrap_or_else(|_| book.to_string())
    };
    log::info!(
        "{} {} {} {}",
        "Replaced".if_supports_color(Stdout, |t| t.green()),
        show(old),
        "\u{2192}".if_supports_color(Stdout, |t| t.dimmed()),
        show(new),
    );

    Ok(())
}
