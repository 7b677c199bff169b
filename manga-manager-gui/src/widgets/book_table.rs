use egui_extras::{Column, TableBuilder};

use manga_manager_catalog::{SortField, SortOrder};

use crate::state::TableState;

/// Header text: the primary sort column gets a direction arrow.
pub fn header_label(field: SortField, sort: &SortOrder) -> String {
    if sort.current_sort_key() != field {
        return field.label().to_string();
    }
    let arrow = if sort.is_reversed() { "\u{25bc}" } else { "\u{25b2}" };
    format!("{} {}", field.label(), arrow)
}

/// Render the current page of books. Header clicks change the sort,
/// row clicks change the selection.
pub fn show(ui: &mut egui::Ui, table: &mut TableState) {
    let available_height = ui.available_height();
    let text_height = egui::TextStyle::Body
        .resolve(ui.style())
        .size
        .max(ui.spacing().interact_size.y);

    let mut header_clicked = None;
    let mut row_clicked = None;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::initial(280.0).at_least(100.0)) // Title
        .column(Column::initial(180.0).at_least(60.0)) // Author
        .column(Column::initial(160.0).at_least(60.0)) // Type
        .column(Column::remainder().at_least(50.0)) // Tome
        .min_scrolled_height(0.0)
        .max_scroll_height(available_height)
        .header(20.0, |mut header| {
            for field in SortField::ALL {
                header.col(|ui| {
                    let label = egui::RichText::new(header_label(field, &table.sort)).strong();
                    if ui
                        .add(egui::Label::new(label).sense(egui::Sense::click()))
                        .on_hover_text("Click to sort")
                        .clicked()
                    {
                        header_clicked = Some(field);
                    }
                });
            }
        })
        .body(|body| {
            body.rows(text_height, table.rows.len(), |mut row| {
                let record = &table.rows[row.index()];
                row.set_selected(table.is_selected(record.id));

                let mut clicked = false;
                let mut modifiers = egui::Modifiers::NONE;
                let cells = [
                    record.title.clone(),
                    record.author.clone(),
                    record.kind.clone(),
                    record.tome.to_string(),
                ];
                for text in cells {
                    row.col(|ui| {
                        let response = ui.add(egui::Label::new(text).sense(egui::Sense::click()));
                        if response.clicked() {
                            clicked = true;
                            modifiers = ui.input(|i| i.modifiers);
                        }
                    });
                }

                if clicked {
                    row_clicked = Some((record.id, modifiers));
                }
            });
        });

    if let Some(field) = header_clicked {
        table.click_header(field);
    }
    if let Some((id, modifiers)) = row_clicked {
        table.click_row(id, modifiers);
    }
}
