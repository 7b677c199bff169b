//! Message window for errors, details, and confirmations.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopupBody {
    Lines(Vec<String>),
    Fields(Vec<(String, String)>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupOutcome {
    Open,
    Dismissed,
    Confirmed,
}

/// A centered window showing lines of text or key/value pairs.
///
/// Informational popups close with OK, Enter, or Escape. Confirmation
/// popups offer Confirm/Cancel; Enter confirms and Escape cancels.
#[derive(Debug, Clone)]
pub struct Popup {
    title: String,
    body: PopupBody,
    confirm: bool,
}

impl Popup {
    pub fn message(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: PopupBody::Lines(vec![text.into()]),
            confirm: false,
        }
    }

    pub fn lines(title: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            title: title.into(),
            body: PopupBody::Lines(lines),
            confirm: false,
        }
    }

    pub fn fields(title: impl Into<String>, fields: Vec<(String, String)>) -> Self {
        Self {
            title: title.into(),
            body: PopupBody::Fields(fields),
            confirm: false,
        }
    }

    /// Ask for Confirm/Cancel instead of a single OK.
    pub fn confirming(mut self) -> Self {
        self.confirm = true;
        self
    }

    pub fn body(&self) -> &PopupBody {
        &self.body
    }

    pub fn show(&self, ctx: &egui::Context) -> PopupOutcome {
        let mut outcome = PopupOutcome::Open;

        egui::Window::new(self.title.as_str())
            .id(egui::Id::new("popup_window"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                match &self.body {
                    PopupBody::Lines(lines) => {
                        for line in lines {
                            ui.label(line.as_str());
                        }
                    }
                    PopupBody::Fields(fields) => {
                        egui::Grid::new("popup_fields")
                            .num_columns(2)
                            .spacing([12.0, 4.0])
                            .show(ui, |ui| {
                                for (key, value) in fields {
                                    ui.strong(key.as_str());
                                    ui.label(value.as_str());
                                    ui.end_row();
                                }
                            });
                    }
                }

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if self.confirm {
                        if ui.button("Confirm").clicked() {
                            outcome = PopupOutcome::Confirmed;
                        }
                        if ui.button("Cancel").clicked() {
                            outcome = PopupOutcome::Dismissed;
                        }
                    } else if ui.button("OK").clicked() {
                        outcome = PopupOutcome::Dismissed;
                    }
                });
            });

        if outcome == PopupOutcome::Open {
            ctx.input(|i| {
                if i.key_pressed(egui::Key::Escape) {
                    outcome = PopupOutcome::Dismissed;
                } else if i.key_pressed(egui::Key::Enter) {
                    outcome = if self.confirm {
                        PopupOutcome::Confirmed
                    } else {
                        PopupOutcome::Dismissed
                    };
                }
            });
        }

        outcome
    }
}
