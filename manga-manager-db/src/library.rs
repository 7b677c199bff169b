//! The [`Library`]: an owned connection plus the catalog's public operations.

use std::path::{Path, PathBuf};

use manga_manager_catalog::{Book, BookKey, BookRecord, SortOrder};
use rusqlite::Connection;

use crate::operations::{self, validate, AddSummary, CatalogError};
use crate::queries::{self, LibraryStats, ListQuery, Listing};
use crate::schema::{self, SchemaError};

/// A book catalog backed by a single SQLite connection.
///
/// The connection is owned for the library's whole lifetime. Reads take
/// `&self`, mutations take `&mut self`; callers sharing a library across
/// threads must serialize access themselves.
pub struct Library {
    conn: Connection,
    path: Option<PathBuf>,
}

/// Default location of the library database: `<data dir>/manga-manager/library.db`.
pub fn default_library_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("manga-manager")
        .join("library.db")
}

impl Library {
    /// Open or create the library stored at `path`.
    pub fn open(path: &Path) -> Result<Self, SchemaError> {
        Ok(Self {
            conn: schema::open_database(path)?,
            path: Some(path.to_path_buf()),
        })
    }

    /// A throwaway library that lives in memory.
    pub fn open_in_memory() -> Result<Self, SchemaError> {
        Ok(Self {
            conn: schema::open_memory()?,
            path: None,
        })
    }

    /// Ensure the schema exists. Safe to call any number of times.
    pub fn initialize(&self) -> Result<(), SchemaError> {
        schema::create_schema(&self.conn)
    }

    /// Backing file, or `None` for an in-memory library.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    // ── Queries ──

    pub fn get_all(&self) -> Result<Vec<BookRecord>, CatalogError> {
        queries::all_books(&self.conn)
    }

    pub fn find(
        &self,
        title: &str,
        author: &str,
        kind: &str,
        tome: i64,
    ) -> Result<Vec<BookRecord>, CatalogError> {
        queries::find_books(&self.conn, title, author, kind, tome)
    }

    pub fn find_key(&self, key: &BookKey) -> Result<Vec<BookRecord>, CatalogError> {
        queries::find_by_key(&self.conn, key)
    }

    pub fn list(&self, query: &ListQuery) -> Result<Listing, CatalogError> {
        queries::list_books(&self.conn, query)
    }

    /// List from raw user input, degrading to an empty result on bad
    /// pagination bounds or storage errors.
    pub fn list_raw(
        &self,
        sort: &SortOrder,
        start: &str,
        limit: &str,
        filter: &str,
    ) -> Vec<BookRecord> {
        let result = ListQuery::from_raw(sort.clone(), start, limit, filter)
            .and_then(|query| self.list(&query));
        match result {
            Ok(listing) => listing.rows,
            Err(e) => {
                log::debug!("Listing degraded to empty: {e}");
                Vec::new()
            }
        }
    }

    pub fn count(&self, query: &ListQuery) -> Result<u64, CatalogError> {
        queries::count_books(&self.conn, query)
    }

    /// Whether a book with the same identity is stored.
    pub fn exists(&self, book: &Book) -> Result<bool, CatalogError> {
        let key = validate(0, book)?;
        queries::key_exists(&self.conn, &key)
    }

    pub fn stats(&self) -> Result<LibraryStats, CatalogError> {
        queries::library_stats(&self.conn)
    }

    // ── Mutations ──

    pub fn add_many(&mut self, books: &[Book]) -> Result<AddSummary, CatalogError> {
        operations::add_books(&mut self.conn, books)
    }

    pub fn delete_many(&mut self, books: &[Book]) -> Result<usize, CatalogError> {
        operations::delete_books(&mut self.conn, books)
    }

    pub fn replace(&mut self, old: &Book, new: &Book) -> Result<(), CatalogError> {
        operations::replace_book(&mut self.conn, old, new)
    }

    /// Release the connection.
    pub fn close(self) -> Result<(), CatalogError> {
        self.conn.close().map_err(|(_, e)| CatalogError::Sqlite(e))
    }
}
