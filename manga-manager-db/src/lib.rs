//! SQLite persistence layer for the book catalog.
//!
//! Provides schema creation, filtered/sorted listing, and transactional
//! insert/update/delete backed by SQLite (via rusqlite with bundled feature).

pub mod library;
pub mod operations;
pub mod queries;
pub mod schema;

pub use library::{default_library_path, Library};
pub use operations::{add_books, delete_books, replace_book, AddSummary, CatalogError};
pub use queries::{
    all_books, count_books, find_books, find_by_key, key_exists, library_stats, list_books,
    FilterStatus, LibraryStats, ListQuery, Listing, Page,
};
pub use schema::{open_database, open_memory, SchemaError};
