//! Read queries for the library database.
//!
//! Provides exact-tuple lookup, filtered/sorted/paginated listing, and counts.

use manga_manager_catalog::search::{is_acceptable_filter, parse_search};
use manga_manager_catalog::{BookKey, BookRecord, SortOrder};
use rusqlite::types::{ToSql, Value};
use rusqlite::{params, Connection};

use crate::operations::CatalogError;

const SELECT_BOOKS: &str = "SELECT id, title, author, type, tome FROM books";

/// Rows whose tome can be read back as a book. Listing and counting skip
/// the rest so pages stay full.
const READABLE_TOME: &str = "typeof(tome) = 'integer'";

// ── Query options ───────────────────────────────────────────────────────────

/// Rows to skip and maximum rows to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub start: u64,
    pub limit: u64,
}

impl Page {
    /// Build a page from signed bounds. Pagination only applies when both
    /// are non-negative; anything else means "all rows".
    pub fn from_bounds(start: i64, limit: i64) -> Option<Self> {
        if start >= 0 && limit >= 0 {
            Some(Self {
                start: start as u64,
                limit: limit as u64,
            })
        } else {
            None
        }
    }
}

/// Everything that shapes a listing: sort order, pagination, and filter text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub sort: SortOrder,
    pub page: Option<Page>,
    pub filter: String,
}

impl ListQuery {
    pub fn new(sort: SortOrder) -> Self {
        Self {
            sort,
            ..Default::default()
        }
    }

    pub fn paginate(mut self, start: i64, limit: i64) -> Self {
        self.page = Page::from_bounds(start, limit);
        self
    }

    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    /// Build a query from textual pagination bounds, as typed by a user.
    ///
    /// Bounds that are not integers are an [`CatalogError::InvalidPagination`].
    pub fn from_raw(
        sort: SortOrder,
        start: &str,
        limit: &str,
        filter: &str,
    ) -> Result<Self, CatalogError> {
        let invalid = || CatalogError::InvalidPagination {
            start: start.to_string(),
            limit: limit.to_string(),
        };
        let start_n = start.trim().parse::<i64>().map_err(|_| invalid())?;
        let limit_n = limit.trim().parse::<i64>().map_err(|_| invalid())?;
        Ok(Self::new(sort).paginate(start_n, limit_n).filter(filter))
    }
}

/// How the filter text was used in a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterStatus {
    /// No filter text, or nothing parseable in it.
    Unfiltered,
    /// The filter produced this many prefix conditions.
    Applied(usize),
    /// The filter contained unsupported characters and was skipped.
    Rejected,
}

/// Result of [`list_books`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub rows: Vec<BookRecord>,
    pub filter: FilterStatus,
}

// ── Lookups ─────────────────────────────────────────────────────────────────

/// Every stored book, in storage order.
pub fn all_books(conn: &Connection) -> Result<Vec<BookRecord>, CatalogError> {
    let mut stmt = conn.prepare(SELECT_BOOKS)?;
    let rows = stmt.query_map([], row_to_record)?;
    collect_records(rows)
}

/// Books matching the exact (title, author, type, tome) tuple.
pub fn find_books(
    conn: &Connection,
    title: &str,
    author: &str,
    kind: &str,
    tome: i64,
) -> Result<Vec<BookRecord>, CatalogError> {
    let mut stmt = conn.prepare(&format!(
        "{SELECT_BOOKS} WHERE title = ?1 AND author = ?2 AND type = ?3 AND tome = ?4"
    ))?;
    let rows = stmt.query_map(params![title, author, kind, tome], row_to_record)?;
    collect_records(rows)
}

pub fn find_by_key(conn: &Connection, key: &BookKey) -> Result<Vec<BookRecord>, CatalogError> {
    find_books(conn, &key.title, &key.author, &key.kind, key.tome)
}

/// Whether a book with this identity is stored.
pub fn key_exists(conn: &Connection, key: &BookKey) -> Result<bool, CatalogError> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM books WHERE title = ?1 AND author = ?2 AND type = ?3 AND tome = ?4)",
        params![key.title, key.author, key.kind, key.tome],
        |row| row.get(0),
    )?;
    Ok(exists)
}

// ── Listing ─────────────────────────────────────────────────────────────────

/// List books matching the query's filter, ordered by its sort order and
/// cut to its page.
pub fn list_books(conn: &Connection, query: &ListQuery) -> Result<Listing, CatalogError> {
    let clause = WhereClause::from_filter(&query.filter);
    let mut sql = format!(
        "{SELECT_BOOKS}{} ORDER BY {}",
        clause.sql(),
        query.sort.order_by_clause()
    );

    let mut values: Vec<Box<dyn ToSql>> = clause
        .values
        .into_iter()
        .map(|v| Box::new(v) as Box<dyn ToSql>)
        .collect();

    if let Some(page) = query.page {
        let n = values.len();
        sql.push_str(&format!(" LIMIT ?{} OFFSET ?{}", n + 1, n + 2));
        values.push(Box::new(page.limit as i64));
        values.push(Box::new(page.start as i64));
    }

    log::debug!("list_books: {sql}");

    let mut stmt = conn.prepare(&sql)?;
    let params: Vec<&dyn ToSql> = values.iter().map(|v| v.as_ref()).collect();
    let rows = stmt.query_map(params.as_slice(), row_to_record)?;
    let rows = collect_records(rows)?;

    Ok(Listing {
        rows,
        filter: clause.status,
    })
}

/// Number of books matching the query's filter, ignoring pagination.
pub fn count_books(conn: &Connection, query: &ListQuery) -> Result<u64, CatalogError> {
    let clause = WhereClause::from_filter(&query.filter);
    let sql = format!("SELECT COUNT(*) FROM books{}", clause.sql());
    let params: Vec<&dyn ToSql> = clause.values.iter().map(|v| v as &dyn ToSql).collect();
    let count: i64 = conn.query_row(&sql, params.as_slice(), |row| row.get(0))?;
    Ok(count as u64)
}

/// Filter text turned into SQL conditions with bound values.
struct WhereClause {
    conditions: Vec<String>,
    values: Vec<String>,
    status: FilterStatus,
}

impl WhereClause {
    fn unfiltered(status: FilterStatus) -> Self {
        Self {
            conditions: Vec::new(),
            values: Vec::new(),
            status,
        }
    }

    /// The `WHERE` clause, always limited to rows that read back as books.
    fn sql(&self) -> String {
        let mut conditions = vec![READABLE_TOME];
        conditions.extend(self.conditions.iter().map(String::as_str));
        format!(" WHERE {}", conditions.join(" AND "))
    }

    fn from_filter(filter: &str) -> Self {
        if filter.is_empty() {
            return Self::unfiltered(FilterStatus::Unfiltered);
        }
        if !is_acceptable_filter(filter) {
            log::debug!("Ignoring filter with unsupported characters: {filter:?}");
            return Self::unfiltered(FilterStatus::Rejected);
        }

        let terms = parse_search(filter);
        if terms.is_empty() {
            return Self::unfiltered(FilterStatus::Unfiltered);
        }

        // Case-sensitive prefix match; LIKE would fold ASCII case.
        let mut conditions = Vec::with_capacity(terms.len());
        let mut values = Vec::with_capacity(terms.len());
        for (i, (field, value)) in terms.iter().enumerate() {
            let n = i + 1;
            conditions.push(format!(
                "substr(CAST({col} AS TEXT), 1, length(?{n})) = ?{n}",
                col = field.column()
            ));
            values.push(value.to_string());
        }

        Self {
            conditions,
            values,
            status: FilterStatus::Applied(terms.len()),
        }
    }
}

// ── Statistics ──────────────────────────────────────────────────────────────

/// Summary statistics for the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LibraryStats {
    pub books: i64,
    pub authors: i64,
    pub types: i64,
}

pub fn library_stats(conn: &Connection) -> Result<LibraryStats, CatalogError> {
    let books: i64 = conn.query_row("SELECT COUNT(*) FROM books", [], |r| r.get(0))?;
    let authors: i64 =
        conn.query_row("SELECT COUNT(DISTINCT author) FROM books", [], |r| r.get(0))?;
    let types: i64 = conn.query_row(
        "SELECT COUNT(DISTINCT type) FROM books WHERE type <> ''",
        [],
        |r| r.get(0),
    )?;

    Ok(LibraryStats {
        books,
        authors,
        types,
    })
}

// ── Row Mapping Helpers ─────────────────────────────────────────────────────

/// Map a row to a record. Column types are only affinities, so databases
/// written by other tools can hold NULLs or text tomes: text columns fall
/// back to a display string, and rows without an integer tome are skipped.
fn row_to_record(row: &rusqlite::Row<'_>) -> rusqlite::Result<Option<BookRecord>> {
    let id: i64 = row.get(0)?;
    let tome = match row.get::<_, Value>(4)? {
        Value::Integer(tome) => tome,
        other => {
            log::warn!("Skipping book #{id}: tome {other:?} is not a whole number");
            return Ok(None);
        }
    };
    Ok(Some(BookRecord {
        id,
        title: value_to_text(row.get(1)?),
        author: value_to_text(row.get(2)?),
        kind: value_to_text(row.get(3)?),
        tome,
    }))
}

fn value_to_text(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Integer(i) => i.to_string(),
        Value::Real(f) => f.to_string(),
        Value::Text(s) => s,
        Value::Blob(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
    }
}

fn collect_records<I>(rows: I) -> Result<Vec<BookRecord>, CatalogError>
where
    I: Iterator<Item = rusqlite::Result<Option<BookRecord>>>,
{
    let mut records = Vec::new();
    for row in rows {
        if let Some(record) = row? {
            records.push(record);
        }
    }
    Ok(records)
}
