use manga_manager_catalog::{Book, BookError, BookKey};
use manga_manager_db::*;

fn naruto(tome: &str) -> Book {
    Book::new("1", "Naruto", "Kishimoto", tome)
}

#[test]
fn add_then_find_round_trip() {
    let mut library = Library::open_in_memory().unwrap();
    let book = naruto("1").with_family(["shonen"]);

    let summary = library.add_many(std::slice::from_ref(&book)).unwrap();
    assert_eq!(summary, AddSummary { inserted: 1, skipped: 0 });

    let rows = library.find("Naruto", "Kishimoto", "shonen", 1).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].key(), book.key().unwrap());
}

#[test]
fn adding_twice_keeps_one_record() {
    let mut library = Library::open_in_memory().unwrap();
    let book = naruto("1");

    library.add_many(std::slice::from_ref(&book)).unwrap();
    let summary = library.add_many(std::slice::from_ref(&book)).unwrap();
    assert_eq!(summary, AddSummary { inserted: 0, skipped: 1 });

    assert_eq!(library.find("Naruto", "Kishimoto", "", 1).unwrap().len(), 1);
}

#[test]
fn duplicates_within_a_batch_are_skipped() {
    let mut library = Library::open_in_memory().unwrap();
    let summary = library
        .add_many(&[naruto("1"), naruto("2"), naruto(" 1")])
        .unwrap();
    assert_eq!(summary, AddSummary { inserted: 2, skipped: 1 });
    assert_eq!(library.get_all().unwrap().len(), 2);
}

#[test]
fn duplicate_ignores_reference_and_read_status() {
    let mut library = Library::open_in_memory().unwrap();
    library.add_many(&[naruto("1")]).unwrap();
    let other = Book::new("X9", "Naruto", "Kishimoto", "1").with_read_status(true);
    let summary = library.add_many(&[other]).unwrap();
    assert_eq!(summary.skipped, 1);
}

#[test]
fn malformed_book_rolls_back_whole_batch() {
    let mut library = Library::open_in_memory().unwrap();
    library.add_many(&[naruto("1")]).unwrap();

    let err = library
        .add_many(&[naruto("2"), naruto("3"), naruto("not a tome")])
        .unwrap_err();
    match err {
        CatalogError::InvalidBook { index, source } => {
            assert_eq!(index, 2);
            assert_eq!(source, BookError::InvalidTome("not a tome".to_string()));
        }
        other => panic!("unexpected error: {other}"),
    }

    let rows = library.get_all().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].tome, 1);
}

#[test]
fn empty_batch_is_a_no_op() {
    let mut library = Library::open_in_memory().unwrap();
    assert_eq!(library.add_many(&[]).unwrap(), AddSummary::default());
    assert_eq!(library.delete_many(&[]).unwrap(), 0);
}

#[test]
fn delete_removes_present_books() {
    let mut library = Library::open_in_memory().unwrap();
    library
        .add_many(&[naruto("1"), naruto("2"), naruto("3")])
        .unwrap();

    let deleted = library.delete_many(&[naruto("1"), naruto("3")]).unwrap();
    assert_eq!(deleted, 2);

    let rows = library.get_all().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].tome, 2);
}

#[test]
fn delete_of_missing_book_rolls_back() {
    let mut library = Library::open_in_memory().unwrap();
    library.add_many(&[naruto("1"), naruto("2")]).unwrap();

    let err = library
        .delete_many(&[naruto("1"), naruto("9")])
        .unwrap_err();
    assert!(
        matches!(err, CatalogError::NotFound(ref key) if *key == BookKey::new("Naruto", "Kishimoto", "", 9))
    );
    assert_eq!(library.get_all().unwrap().len(), 2);
}

#[test]
fn delete_of_malformed_book_rolls_back() {
    let mut library = Library::open_in_memory().unwrap();
    library.add_many(&[naruto("1")]).unwrap();

    let err = library
        .delete_many(&[naruto("1"), naruto("")])
        .unwrap_err();
    assert!(matches!(err, CatalogError::InvalidBook { index: 1, .. }));
    assert_eq!(library.get_all().unwrap().len(), 1);
}

#[test]
fn deleting_same_book_twice_in_a_batch_fails() {
    let mut library = Library::open_in_memory().unwrap();
    library.add_many(&[naruto("1")]).unwrap();

    assert!(library.delete_many(&[naruto("1"), naruto("1")]).is_err());
    assert_eq!(library.get_all().unwrap().len(), 1);
}

#[test]
fn replace_updates_matching_record() {
    let mut library = Library::open_in_memory().unwrap();
    library.add_many(&[naruto("1")]).unwrap();
    let id = library.get_all().unwrap()[0].id;

    library
        .replace(&naruto("1"), &naruto("2").with_family(["shonen"]))
        .unwrap();

    assert!(library.find("Naruto", "Kishimoto", "", 1).unwrap().is_empty());
    let rows = library.find("Naruto", "Kishimoto", "shonen", 2).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, id);
}

#[test]
fn replace_with_identical_book_succeeds() {
    let mut library = Library::open_in_memory().unwrap();
    library.add_many(&[naruto("1")]).unwrap();
    library.replace(&naruto("1"), &naruto("1")).unwrap();
    assert_eq!(library.get_all().unwrap().len(), 1);
}

#[test]
fn replace_missing_book_fails() {
    let mut library = Library::open_in_memory().unwrap();
    library.add_many(&[naruto("1")]).unwrap();

    let err = library.replace(&naruto("5"), &naruto("6")).unwrap_err();
    assert!(matches!(err, CatalogError::NotFound(_)));
    assert!(library.find("Naruto", "Kishimoto", "", 6).unwrap().is_empty());
}

#[test]
fn replace_with_malformed_input_fails() {
    let mut library = Library::open_in_memory().unwrap();
    library.add_many(&[naruto("1")]).unwrap();

    let err = library.replace(&naruto("1"), &naruto("two")).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidBook { index: 1, .. }));

    let err = library.replace(&naruto("one"), &naruto("2")).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidBook { index: 0, .. }));

    assert_eq!(library.find("Naruto", "Kishimoto", "", 1).unwrap().len(), 1);
}

#[test]
fn replace_onto_existing_book_is_rejected() {
    let mut library = Library::open_in_memory().unwrap();
    library.add_many(&[naruto("1"), naruto("2")]).unwrap();

    let err = library.replace(&naruto("1"), &naruto("2")).unwrap_err();
    assert!(matches!(err, CatalogError::Duplicate(_)));
    assert_eq!(library.find("Naruto", "Kishimoto", "", 1).unwrap().len(), 1);
    assert_eq!(library.find("Naruto", "Kishimoto", "", 2).unwrap().len(), 1);
}

#[test]
fn naruto_scenario() {
    let mut library = Library::open_in_memory().unwrap();
    assert!(library.get_all().unwrap().is_empty());

    let book = Book::new("1", "Naruto", "Kishimoto", "1");
    library.add_many(std::slice::from_ref(&book)).unwrap();

    let rows = library.get_all().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title, "Naruto");
    assert_eq!(rows[0].author, "Kishimoto");
    assert_eq!(rows[0].kind, "");
    assert_eq!(rows[0].tome, 1);

    let stored = Book::from_record(&rows[0]);
    library
        .replace(&stored, &Book::new("1", "Naruto", "Kishimoto", "2"))
        .unwrap();

    assert_eq!(library.find("Naruto", "Kishimoto", "", 2).unwrap().len(), 1);
    assert!(library.find("Naruto", "Kishimoto", "", 1).unwrap().is_empty());
}

#[test]
fn free_functions_work_on_a_bare_connection() {
    let mut conn = open_memory().unwrap();
    add_books(&mut conn, &[naruto("1"), naruto("2")]).unwrap();
    replace_book(&mut conn, &naruto("2"), &naruto("3")).unwrap();
    delete_books(&mut conn, &[naruto("1")]).unwrap();

    let rows = all_books(&conn).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].tome, 3);
}

#[test]
fn errors_render_messages() {
    let err = CatalogError::NotFound(BookKey::new("Naruto", "Kishimoto", "shonen", 1));
    assert_eq!(
        err.to_string(),
        "Book not found: \"Naruto\" by Kishimoto #1 [shonen]"
    );
    assert!(err.is_validation());
}

#[test]
fn stored_rows_round_trip_through_books() {
    let mut conn = open_memory().unwrap();
    add_books(
        &mut conn,
        &[Book::new("", "Naruto", "Kishimoto", "1").with_family(["shonen", " ninja "])],
    )
    .unwrap();
    conn.execute_batch(
        "INSERT INTO books (title, author, type, tome) VALUES ('Naruto', 'Kishimoto', 'shonen,  ninja', 2);
         INSERT INTO books (title, author, type, tome) VALUES ('Naruto', 'Kishimoto', 'a,b', 3);
         INSERT INTO books (title, author, type, tome) VALUES ('Naruto', 'Kishimoto', 'Seinen ', 4);",
    )
    .unwrap();

    let rows = all_books(&conn).unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0].kind, "shonen, ninja");

    let books: Vec<Book> = rows.iter().map(Book::from_record).collect();
    for (book, record) in books.iter().zip(&rows) {
        assert_eq!(book.key().unwrap(), record.key());
    }

    replace_book(&mut conn, &books[1], &Book::new("", "Naruto", "Kishimoto", "20")).unwrap();
    assert_eq!(delete_books(&mut conn, &books[2..]).unwrap(), 2);

    let left: Vec<i64> = all_books(&conn).unwrap().iter().map(|r| r.tome).collect();
    assert_eq!(left, vec![1, 20]);
}

#[test]
fn stored_rows_can_be_deleted_from_the_library() {
    let mut library = Library::open_in_memory().unwrap();
    library
        .add_many(&[naruto("1").with_family([" shonen", "ninja "])])
        .unwrap();

    let books: Vec<Book> = library.get_all().unwrap().iter().map(Book::from_record).collect();
    assert_eq!(books[0].kind(), "shonen, ninja");
    assert_eq!(library.delete_many(&books).unwrap(), 1);
    assert!(library.get_all().unwrap().is_empty());
}
