//! Data model types for the book catalog.
//!
//! A [`Book`] is what the user edits; a [`BookKey`] is the validated identity
//! tuple the database addresses rows by; a [`BookRecord`] is a stored row.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Separator used when flattening a book's family tags into the `type` column.
pub const FAMILY_SEPARATOR: &str = ", ";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookError {
    #[error("Tome '{0}' is not a whole number")]
    InvalidTome(String),
}

// ── Book ────────────────────────────────────────────────────────────────────

/// One catalog entry as entered by the user.
///
/// Books are never edited in place: an update is expressed as replacing one
/// Book with another.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Free-form reference shown next to the entry (shelf code, row id, ...).
    pub reference: String,
    pub name: String,
    pub author: String,
    /// Volume number, kept as the text the user typed.
    pub tome: String,
    #[serde(default)]
    pub read_status: bool,
    /// Category tags, in the order they were given.
    #[serde(default)]
    pub family: Vec<String>,
}

impl Book {
    pub fn new(
        reference: impl Into<String>,
        name: impl Into<String>,
        author: impl Into<String>,
        tome: impl Into<String>,
    ) -> Self {
        Self {
            reference: reference.into(),
            name: name.into(),
            author: author.into(),
            tome: tome.into(),
            read_status: false,
            family: Vec::new(),
        }
    }

    /// Set the family tags. Tags are trimmed and blank ones dropped.
    pub fn with_family<I, S>(mut self, family: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.family = family
            .into_iter()
            .map(Into::into)
            .map(|tag| tag.trim().to_string())
            .filter(|tag| !tag.is_empty())
            .collect();
        self
    }

    pub fn with_read_status(mut self, read: bool) -> Self {
        self.read_status = read;
        self
    }

    /// The value stored in the `type` column: family tags joined together.
    pub fn kind(&self) -> String {
        self.family.join(FAMILY_SEPARATOR)
    }

    /// Validate the book and return its storage identity.
    ///
    /// Fails when the tome is not a whole number, since the column is numeric.
    pub fn key(&self) -> Result<BookKey, BookError> {
        let tome = self
            .tome
            .trim()
            .parse::<i64>()
            .map_err(|_| BookError::InvalidTome(self.tome.clone()))?;
        Ok(BookKey {
            title: self.name.clone(),
            author: self.author.clone(),
            kind: self.kind(),
            tome,
        })
    }

    pub fn is_well_formed(&self) -> bool {
        self.key().is_ok()
    }

    /// Rebuild a book from a stored row. The row id becomes the reference.
    ///
    /// The stored `type` is kept verbatim, so the book's key is the row's key
    /// even for values not written by [`Book::kind`].
    pub fn from_record(record: &BookRecord) -> Self {
        Self {
            reference: record.id.to_string(),
            name: record.title.clone(),
            author: record.author.clone(),
            tome: record.tome.to_string(),
            read_status: false,
            family: split_family(&record.kind),
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.reference,
            self.name,
            self.author,
            self.tome,
            self.kind()
        )
    }
}

/// Split a stored `type` value back into family tags.
///
/// Splits on [`FAMILY_SEPARATOR`] exactly, without trimming, so joining the
/// tags again gives back `kind` unchanged.
pub fn split_family(kind: &str) -> Vec<String> {
    if kind.is_empty() {
        return Vec::new();
    }
    kind.split(FAMILY_SEPARATOR).map(String::from).collect()
}

// ── Identity ────────────────────────────────────────────────────────────────

/// The (title, author, type, tome) tuple that identifies a stored book.
///
/// Two books with equal keys are duplicates regardless of their other fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BookKey {
    pub title: String,
    pub author: String,
    pub kind: String,
    pub tome: i64,
}

impl BookKey {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        kind: impl Into<String>,
        tome: i64,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            kind: kind.into(),
            tome,
        }
    }
}

impl fmt::Display for BookKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" by {} #{}", self.title, self.author, self.tome)?;
        if !self.kind.is_empty() {
            write!(f, " [{}]", self.kind)?;
        }
        Ok(())
    }
}

// ── Stored row ──────────────────────────────────────────────────────────────

/// A row of the `books` table.
///
/// The id is assigned by SQLite and only used for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRecord {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub kind: String,
    pub tome: i64,
}

impl BookRecord {
    pub fn key(&self) -> BookKey {
        BookKey::new(&self.title, &self.author, &self.kind, self.tome)
    }
}
