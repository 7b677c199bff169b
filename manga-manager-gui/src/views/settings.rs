use std::path::PathBuf;

use manga_manager_catalog::SortField;
use manga_manager_db::default_library_path;

use crate::app::MangaManagerApp;
use crate::state::PAGE_SIZES;
use crate::views::library::{new_database_dialog, open_database_dialog};

/// Render the Settings view.
pub fn show(ui: &mut egui::Ui, app: &mut MangaManagerApp) {
    ui.heading("Settings");
    ui.separator();
    ui.add_space(8.0);

    egui::ScrollArea::vertical().show(ui, |ui| {
        show_library_section(ui, app);
        ui.add_space(16.0);
        show_view_section(ui, app);
    });
}

enum RecentAction {
    Open(PathBuf),
    Remove(usize),
}

fn show_library_section(ui: &mut egui::Ui, app: &mut MangaManagerApp) {
    ui.strong("Library");
    ui.add_space(4.0);

    ui.horizontal(|ui| {
        ui.label("Current database:");
        match app.library.as_ref().and_then(|l| l.path()) {
            Some(path) => {
                ui.monospace(path.display().to_string());
            }
            None => {
                ui.weak("None");
            }
        }
    });
    ui.horizontal(|ui| {
        if ui.button("Open...").clicked() {
            open_database_dialog(app);
        }
        if ui.button("New...").clicked() {
            new_database_dialog(app);
        }
        if ui.button("Use Default Location").clicked() {
            app.open_database(default_library_path());
        }
    });

    ui.add_space(8.0);

    if app.settings.library.recent_databases.is_empty() {
        return;
    }

    ui.label("Recent Databases:");
    ui.add_space(4.0);

    let mut action = None;
    for (i, recent) in app.settings.library.recent_databases.iter().enumerate() {
        ui.horizontal(|ui| {
            ui.monospace(recent.path.display().to_string());
            ui.weak(format!("{} books", recent.book_count));
            if let Ok(when) = chrono::DateTime::parse_from_rfc3339(&recent.last_opened) {
                ui.weak(when.format("%Y-%m-%d %H:%M").to_string());
            }

            if ui.small_button("Open").clicked() {
                action = Some(RecentAction::Open(recent.path.clone()));
            }
            if ui.small_button("Remove").clicked() {
                action = Some(RecentAction::Remove(i));
            }
        });
    }

    match action {
        Some(RecentAction::Open(path)) => app.open_database(path),
        Some(RecentAction::Remove(idx)) => {
            app.settings.library.recent_databases.remove(idx);
            app.save_settings();
        }
        None => {}
    }
}

fn show_view_section(ui: &mut egui::Ui, app: &mut MangaManagerApp) {
    ui.strong("Book Table");
    ui.add_space(4.0);

    ui.horizontal(|ui| {
        ui.label("Sort by:");
        let current = app.table.sort.current_sort_key();
        for field in SortField::ALL {
            if ui.selectable_label(current == field, field.label()).clicked() && current != field {
                app.table.click_header(field);
            }
        }
    });

    let mut reverse = app.table.sort.is_reversed();
    if ui.checkbox(&mut reverse, "Reverse order").changed() {
        app.table.sort.set_reverse(reverse);
        app.table.dirty = true;
    }

    ui.horizontal(|ui| {
        ui.label("Rows per page:");
        let mut page_size = app.table.page_size;
        for size in PAGE_SIZES {
            ui.selectable_value(&mut page_size, size, size.to_string());
        }
        if page_size != app.table.page_size {
            app.table.set_page_size(page_size);
        }
    });
}
