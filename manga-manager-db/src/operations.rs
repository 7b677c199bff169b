//! Transactional mutations on the `books` table.
//!
//! Every function here runs in a single transaction: either every change in
//! the call is committed, or the transaction is dropped and rolled back.

use manga_manager_catalog::{Book, BookError, BookKey};
use rusqlite::{params, Connection};
use thiserror::Error;

use crate::queries::key_exists;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Book #{index} is malformed: {source}")]
    InvalidBook { index: usize, source: BookError },
    #[error("Book not found: {0}")]
    NotFound(BookKey),
    #[error("Book already exists: {0}")]
    Duplicate(BookKey),
    #[error("Invalid pagination: start '{start}', limit '{limit}'")]
    InvalidPagination { start: String, limit: String },
}

impl CatalogError {
    /// True for errors caused by caller input rather than by storage.
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::Sqlite(_))
    }
}

/// Outcome of [`add_books`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AddSummary {
    pub inserted: usize,
    /// Books skipped because an identical one was already stored.
    pub skipped: usize,
}

/// Validate a book, tagging failures with its position in the batch.
pub(crate) fn validate(index: usize, book: &Book) -> Result<BookKey, CatalogError> {
    book.key()
        .map_err(|source| CatalogError::InvalidBook { index, source })
}

// ── Insert ──────────────────────────────────────────────────────────────────

/// Insert every book not already stored, skipping duplicates.
///
/// A malformed book anywhere in the batch rolls back the whole call.
pub fn add_books(conn: &mut Connection, books: &[Book]) -> Result<AddSummary, CatalogError> {
    let tx = conn.transaction()?;
    let mut summary = AddSummary::default();

    for (index, book) in books.iter().enumerate() {
        let key = validate(index, book)?;
        if key_exists(&tx, &key)? {
            log::debug!("Skipping duplicate {key}");
            summary.skipped += 1;
            continue;
        }
        tx.execute(
            "INSERT INTO books (title, author, type, tome) VALUES (?1, ?2, ?3, ?4)",
            params![key.title, key.author, key.kind, key.tome],
        )?;
        summary.inserted += 1;
    }

    tx.commit()?;
    Ok(summary)
}

// ── Delete ──────────────────────────────────────────────────────────────────

/// Delete every given book. Returns the number of rows removed.
///
/// A malformed or missing book rolls back the whole call.
pub fn delete_books(conn: &mut Connection, books: &[Book]) -> Result<usize, CatalogError> {
    let tx = conn.transaction()?;
    let mut deleted = 0;

    for (index, book) in books.iter().enumerate() {
        let key = validate(index, book)?;
        let changed = tx.execute(
            "DELETE FROM books WHERE title = ?1 AND author = ?2 AND type = ?3 AND tome = ?4",
            params![key.title, key.author, key.kind, key.tome],
        )?;
        if changed == 0 {
            return Err(CatalogError::NotFound(key));
        }
        deleted += changed;
    }

    tx.commit()?;
    Ok(deleted)
}

// ── Update ──────────────────────────────────────────────────────────────────

/// Replace the stored `old` book with `new`.
///
/// Malformed input is reported as book #0 (`old`) or #1 (`new`). Fails with
/// [`CatalogError::Duplicate`] when `new` would collide with another stored book.
pub fn replace_book(conn: &mut Connection, old: &Book, new: &Book) -> Result<(), CatalogError> {
    let old_key = validate(0, old)?;
    let new_key = validate(1, new)?;

    let tx = conn.transaction()?;
    if !key_exists(&tx, &old_key)? {
        return Err(CatalogError::NotFound(old_key));
    }
    if new_key != old_key && key_exists(&tx, &new_key)? {
        return Err(CatalogError::Duplicate(new_key));
    }

    tx.execute(
        "UPDATE books SET title = ?1, author = ?2, type = ?3, tome = ?4
         WHERE title = ?5 AND author = ?6 AND type = ?7 AND tome = ?8",
        params![
            new_key.title,
            new_key.author,
            new_key.kind,
            new_key.tome,
            old_key.title,
            old_key.author,
            old_key.kind,
            old_key.tome,
        ],
    )?;

    tx.commit()?;
    Ok(())
}
