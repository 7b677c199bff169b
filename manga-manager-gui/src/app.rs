use std::path::PathBuf;

use manga_manager_catalog::Book;
use manga_manager_db::{default_library_path, Library};

use crate::settings::{self, AppSettings};
use crate::state::{TableState, View};
use crate::views;
use crate::widgets::popup::{Popup, PopupOutcome};
use crate::widgets::prompt::{PromptOutcome, PromptWindow};

/// The one modal window that can be open at a time.
pub enum Dialog {
    AddBook(PromptWindow),
    EditBook {
        original: Book,
        prompt: PromptWindow,
    },
    ConfirmDelete {
        books: Vec<Book>,
        popup: Popup,
    },
    Message(Popup),
}

/// A library change requested through a dialog.
enum Edit {
    Add(Book),
    Replace { old: Book, new: Book },
    Delete(Vec<Book>),
}

/// Main application state.
pub struct MangaManagerApp {
    pub settings: AppSettings,

    /// The open library, if any database could be opened.
    pub library: Option<Library>,

    /// Current sidebar navigation selection.
    pub current_view: View,

    pub table: TableState,

    pub dialog: Option<Dialog>,
}

impl MangaManagerApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let settings = settings::load_settings();
        let database = settings
            .library
            .database
            .clone()
            .unwrap_or_else(default_library_path);

        let mut app = Self {
            table: TableState::from_view_settings(&settings.view),
            settings,
            library: None,
            current_view: View::Library,
            dialog: None,
        };
        app.open_database(database);
        app
    }

    /// Switch to the database at `path`, creating it if needed.
    pub fn open_database(&mut self, path: PathBuf) {
        match Library::open(&path) {
            Ok(library) => {
                let count = library.stats().map(|s| s.books.max(0) as u64).unwrap_or(0);
                log::info!("Opened {} ({} books)", path.display(), count);

                self.library = Some(library);
                self.table.page = 0;
                self.table.selected.clear();
                self.table.dirty = true;

                self.settings.library.remember(&path, count);
                self.save_settings();
            }
            Err(e) => {
                log::error!("Failed to open {}: {}", path.display(), e);
                self.show_error(
                    "Could not open database",
                    vec![path.display().to_string(), e.to_string()],
                );
            }
        }
    }

    pub fn show_error(&mut self, title: &str, lines: Vec<String>) {
        self.dialog = Some(Dialog::Message(Popup::lines(title, lines)));
    }

    pub fn save_settings(&self) {
        if let Err(e) = settings::save_settings(&self.settings) {
            log::warn!("Failed to save settings: {}", e);
        }
    }

    /// Keep the saved view preferences in step with the table.
    fn sync_view_settings(&mut self) {
        let view = &mut self.settings.view;
        let sort_key = self.table.sort.current_sort_key();
        let reverse = self.table.sort.is_reversed();
        if view.sort_key != sort_key
            || view.reverse != reverse
            || view.page_size != self.table.page_size
        {
            view.sort_key = sort_key;
            view.reverse = reverse;
            view.page_size = self.table.page_size;
            self.save_settings();
        }
    }

    fn refresh_table(&mut self) {
        if !self.table.dirty {
            return;
        }
        let Some(library) = &self.library else {
            self.table.dirty = false;
            return;
        };
        if let Err(e) = self.table.refresh(library) {
            log::error!("Failed to list books: {}", e);
            self.table.dirty = false;
            self.show_error("Could not list books", vec![e.to_string()]);
        }
    }

    fn show_dialog(&mut self, ctx: &egui::Context) {
        let Some(dialog) = self.dialog.as_mut() else {
            return;
        };

        let (close, edit) = match dialog {
            Dialog::AddBook(prompt) => match prompt.show(ctx) {
                PromptOutcome::Pending => (false, None),
                PromptOutcome::Cancelled => (true, None),
                PromptOutcome::Confirmed(values) => {
                    (true, Some(Edit::Add(views::library::book_from_values(&values))))
                }
            },
            Dialog::EditBook { original, prompt } => match prompt.show(ctx) {
                PromptOutcome::Pending => (false, None),
                PromptOutcome::Cancelled => (true, None),
                PromptOutcome::Confirmed(values) => (
                    true,
                    Some(Edit::Replace {
                        old: original.clone(),
                        new: views::library::book_from_values(&values),
                    }),
                ),
            },
            Dialog::ConfirmDelete { books, popup } => match popup.show(ctx) {
                PopupOutcome::Open => (false, None),
                PopupOutcome::Dismissed => (true, None),
                PopupOutcome::Confirmed => (true, Some(Edit::Delete(std::mem::take(books)))),
            },
            Dialog::Message(popup) => (popup.show(ctx) != PopupOutcome::Open, None),
        };

        if close {
            self.dialog = None;
        }
        if let Some(edit) = edit {
            self.apply(edit);
        }
    }

    /// Run a library change and report failures in a popup.
    fn apply(&mut self, edit: Edit) {
        let Some(library) = self.library.as_mut() else {
            return;
        };

        let result = match &edit {
            Edit::Add(book) => library.add_many(std::slice::from_ref(book)).map(|summary| {
                (summary.skipped > 0).then(|| format!("{} is already in the library.", describe(book)))
            }),
            Edit::Replace { old, new } => library.replace(old, new).map(|()| None),
            Edit::Delete(books) => library.delete_many(books).map(|_| None),
        };

        self.table.dirty = true;
        match result {
            Ok(None) => {}
            Ok(Some(notice)) => {
                self.dialog = Some(Dialog::Message(Popup::message("Nothing added", notice)));
            }
            Err(e) => {
                let title = match edit {
                    Edit::Add(_) => "Could not add book",
                    Edit::Replace { .. } => "Could not edit book",
                    Edit::Delete(_) => "Could not delete books",
                };
                log::warn!("{}: {}", title, e);
                self.show_error(title, vec![e.to_string()]);
            }
        }
    }
}

fn describe(book: &Book) -> String {
    book.key()
        .map(|key| key.to_string())
        .unwrap_or_else(|_| book.to_string())
}

impl eframe::App for MangaManagerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.refresh_table();

        // Sidebar
        egui::SidePanel::left("sidebar")
            .resizable(false)
            .exact_width(120.0)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.heading("Manga Manager");
                ui.separator();
                ui.add_space(4.0);

                let view = &mut self.current_view;
                ui.selectable_value(view, View::Library, "Library");
                ui.selectable_value(view, View::Settings, "Settings");
            });

        // Main content
        let enabled = self.dialog.is_none();
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(enabled, |ui| match self.current_view {
                View::Library => views::library::show(ui, self),
                View::Settings => views::settings::show(ui, self),
            });
        });

        self.show_dialog(ctx);
        self.sync_view_settings();
    }
}
