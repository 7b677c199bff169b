use manga_manager_catalog::Book;

use crate::app::{Dialog, MangaManagerApp};
use crate::state::{TableState, PAGE_SIZES};
use crate::widgets::book_table;
use crate::widgets::popup::Popup;
use crate::widgets::prompt::PromptWindow;

const BOOK_FIELDS: [&str; 4] = ["Name", "Author", "Tome", "Family (comma separated)"];

/// Prompt for a new book, or for changes to `book` when given.
pub fn book_prompt(title: &str, book: Option<&Book>) -> PromptWindow {
    let prompt = PromptWindow::new(title, BOOK_FIELDS);
    match book {
        Some(book) => prompt.with_values([
            book.name.clone(),
            book.author.clone(),
            book.tome.clone(),
            book.kind(),
        ]),
        None => prompt,
    }
}

/// Build a book from the values of a [`book_prompt`].
pub fn book_from_values(values: &[String]) -> Book {
    let field = |i: usize| values.get(i).map(|v| v.trim()).unwrap_or_default();
    Book::new("", field(0), field(1), field(2)).with_family(
        field(3)
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty()),
    )
}

/// Key/value popup describing one book.
pub fn book_details(book: &Book) -> Popup {
    Popup::fields(
        "Book details",
        vec![
            ("Reference".to_string(), book.reference.clone()),
            ("Name".to_string(), book.name.clone()),
            ("Author".to_string(), book.author.clone()),
            ("Tome".to_string(), book.tome.clone()),
            ("Type".to_string(), book.kind()),
        ],
    )
}

/// Confirmation text for deleting the selected rows.
pub fn delete_prompt(table: &TableState) -> Vec<String> {
    let records = table.selected_records();
    let mut lines = vec![format!("Delete {} selected book(s)?", records.len())];
    lines.extend(records.iter().map(|r| r.key().to_string()));
    lines
}

/// Render the library view: toolbar, book table, and status line.
pub fn show(ui: &mut egui::Ui, app: &mut MangaManagerApp) {
    if app.library.is_none() {
        show_welcome(ui, app);
        return;
    }

    show_toolbar(ui, app);
    ui.separator();

    egui::TopBottomPanel::bottom("status_bar").show_inside(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label(app.table.summary());
            if let Some(path) = app.library.as_ref().and_then(|l| l.path()) {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(path.display().to_string());
                });
            }
        });
    });

    egui::CentralPanel::default().show_inside(ui, |ui| {
        egui::ScrollArea::horizontal().show(ui, |ui| {
            book_table::show(ui, &mut app.table);
        });
    });
}

fn show_toolbar(ui: &mut egui::Ui, app: &mut MangaManagerApp) {
    ui.horizontal(|ui| {
        let filter = ui.add(
            egui::TextEdit::singleline(&mut app.table.filter_text)
                .hint_text("title: Nar; author: Kishi")
                .desired_width(220.0),
        );
        if filter.changed() {
            app.table.filter_edited();
        }

        ui.separator();

        if ui.button("Add Book...").clicked() {
            app.dialog = Some(Dialog::AddBook(book_prompt("Add Book", None)));
        }

        let single = app.table.single_selection();
        if ui
            .add_enabled(single.is_some(), egui::Button::new("Edit..."))
            .clicked()
            && let Some(book) = single.clone()
        {
            let prompt = book_prompt("Edit Book", Some(&book));
            app.dialog = Some(Dialog::EditBook {
                original: book,
                prompt,
            });
        }
        if ui
            .add_enabled(single.is_some(), egui::Button::new("Details..."))
            .clicked()
            && let Some(book) = &single
        {
            app.dialog = Some(Dialog::Message(book_details(book)));
        }

        let has_selection = !app.table.selected.is_empty();
        if ui
            .add_enabled(has_selection, egui::Button::new("Delete"))
            .clicked()
        {
            let books = app.table.selected_books();
            let popup = Popup::lines("Delete books", delete_prompt(&app.table)).confirming();
            app.dialog = Some(Dialog::ConfirmDelete { books, popup });
        }

        ui.separator();

        ui.label("Page size:");
        let mut page_size = app.table.page_size;
        for size in PAGE_SIZES {
            ui.selectable_value(&mut page_size, size, size.to_string());
        }
        if page_size != app.table.page_size {
            app.table.set_page_size(page_size);
        }

        ui.separator();

        if ui
            .add_enabled(app.table.has_previous(), egui::Button::new("\u{25c0} Prev"))
            .clicked()
        {
            app.table.previous_page();
        }
        if ui
            .add_enabled(app.table.has_next(), egui::Button::new("Next \u{25b6}"))
            .clicked()
        {
            app.table.next_page();
        }

        ui.separator();

        if ui.button("Open Database...").clicked() {
            open_database_dialog(app);
        }
    });
}

fn show_welcome(ui: &mut egui::Ui, app: &mut MangaManagerApp) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() / 3.0);
        ui.heading("Manga Manager");
        ui.add_space(8.0);
        ui.label("No library is open.");
        ui.add_space(16.0);
        if ui.button("Open Database...").clicked() {
            open_database_dialog(app);
        }
        if ui.button("New Database...").clicked() {
            new_database_dialog(app);
        }
    });
}

/// Pick an existing database file and switch to it.
pub fn open_database_dialog(app: &mut MangaManagerApp) {
    if let Some(path) = rfd::FileDialog::new()
        .set_title("Open library database")
        .add_filter("SQLite database", &["db", "sqlite", "sqlite3"])
        .pick_file()
    {
        app.open_database(path);
    }
}

/// Choose where to create a new database and switch to it.
pub fn new_database_dialog(app: &mut MangaManagerApp) {
    if let Some(path) = rfd::FileDialog::new()
        .set_title("Create library database")
        .set_file_name("library.db")
        .save_file()
    {
        app.open_database(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::popup::PopupBody;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn prompt_values_become_a_book() {
        let book = book_from_values(&strings(&[" Naruto ", "Kishimoto", " 3", "shonen, ninja,"]));
        assert_eq!(book.name, "Naruto");
        assert_eq!(book.author, "Kishimoto");
        assert_eq!(book.tome, "3");
        assert_eq!(book.family, vec!["shonen", "ninja"]);
        assert!(book.is_well_formed());
    }

    #[test]
    fn missing_values_are_empty() {
        let book = book_from_values(&strings(&["Naruto"]));
        assert_eq!(book.author, "");
        assert!(book.family.is_empty());
        assert!(!book.is_well_formed());
    }

    #[test]
    fn edit_prompt_is_prefilled() {
        let book = Book::new("", "Naruto", "Kishimoto", "3").with_family(["shonen", "ninja"]);
        let prompt = book_prompt("Edit Book", Some(&book));
        assert_eq!(prompt.values(), &["Naruto", "Kishimoto", "3", "shonen, ninja"]);
        assert_eq!(book_from_values(prompt.values()), book);
    }

    #[test]
    fn delete_prompt_lists_selected_keys() {
        let mut library = manga_manager_db::Library::open_in_memory().unwrap();
        library
            .add_many(&[
                Book::new("", "Bleach", "Kubo", "1").with_family(["shonen"]),
                Book::new("", "Monster", "Urasawa", "2"),
            ])
            .unwrap();
        let mut table = TableState::default();
        table.refresh(&library).unwrap();
        for id in table.rows.iter().map(|r| r.id).collect::<Vec<_>>() {
            table.click_row(id, egui::Modifiers::CTRL);
        }

        let lines = delete_prompt(&table);
        assert_eq!(
            lines,
            vec![
                "Delete 2 selected book(s)?".to_string(),
                "\"Bleach\" by Kubo #1 [shonen]".to_string(),
                "\"Monster\" by Urasawa #2".to_string(),
            ]
        );
    }

    #[test]
    fn details_list_every_field() {
        let book = Book::new("7", "Bleach", "Kubo", "1");
        match book_details(&book).body() {
            PopupBody::Fields(fields) => {
                assert_eq!(fields.len(), 5);
                assert_eq!(fields[0], ("Reference".to_string(), "7".to_string()));
                assert_eq!(fields[4].1, "");
            }
            other => panic!("unexpected body {other:?}"),
        }
    }
}
