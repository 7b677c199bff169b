use manga_manager_catalog::Book;
use manga_manager_db::schema::create_schema;
use manga_manager_db::{open_memory, Library};

#[test]
fn books_table_exists() {
    let conn = open_memory().unwrap();
    let exists: bool = conn
        .query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='books')",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert!(exists);
}

#[test]
fn books_table_columns() {
    let conn = open_memory().unwrap();
    let mut stmt = conn.prepare("PRAGMA table_info(books)").unwrap();
    let columns: Vec<String> = stmt
        .query_map([], |row| row.get(1))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(columns, vec!["id", "title", "author", "type", "tome"]);
}

#[test]
fn schema_is_idempotent() {
    let conn = open_memory().unwrap();
    // Creating again should not error
    create_schema(&conn).unwrap();
    create_schema(&conn).unwrap();
}

#[test]
fn initialize_twice_keeps_data() {
    let mut library = Library::open_in_memory().unwrap();
    library
        .add_many(&[Book::new("1", "Naruto", "Kishimoto", "1")])
        .unwrap();

    library.initialize().unwrap();
    library.initialize().unwrap();

    assert_eq!(library.get_all().unwrap().len(), 1);
}

#[test]
fn reopening_a_file_does_not_duplicate_the_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("library.db");
    Library::open(&path).unwrap().close().unwrap();
    Library::open(&path).unwrap().close().unwrap();

    let conn = rusqlite::Connection::open(&path).unwrap();
    let tables: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='books'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(tables, 1);
}

#[test]
fn reopen_file_keeps_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("library.db");

    let mut library = Library::open(&path).unwrap();
    assert_eq!(library.path(), Some(path.as_path()));
    library
        .add_many(&[Book::new("1", "Berserk", "Miura", "1")])
        .unwrap();
    library.close().unwrap();

    let library = Library::open(&path).unwrap();
    let rows = library.get_all().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title, "Berserk");
}

#[test]
fn in_memory_has_no_path() {
    let library = Library::open_in_memory().unwrap();
    assert!(library.path().is_none());
}
