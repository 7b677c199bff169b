//! Labeled text-input dialog with Confirm/Cancel.

/// What happened to a prompt during this frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    Pending,
    Confirmed(Vec<String>),
    Cancelled,
}

/// A small window of labeled single-line inputs.
///
/// Enter confirms and Escape cancels.
#[derive(Debug, Clone)]
pub struct PromptWindow {
    title: String,
    labels: Vec<String>,
    values: Vec<String>,
    focus_first: bool,
}

impl PromptWindow {
    pub fn new<I, S>(title: impl Into<String>, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        Self {
            title: title.into(),
            values: vec![String::new(); labels.len()],
            labels,
            focus_first: true,
        }
    }

    /// Prefill the inputs. Extra values are dropped, missing ones stay empty.
    pub fn with_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        if values.len() != self.labels.len() {
            log::warn!(
                "Prompt '{}' got {} values for {} labels",
                self.title,
                values.len(),
                self.labels.len()
            );
        }
        for (slot, value) in self.values.iter_mut().zip(values) {
            *slot = value;
        }
        self
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn show(&mut self, ctx: &egui::Context) -> PromptOutcome {
        let mut outcome = PromptOutcome::Pending;

        egui::Window::new(self.title.as_str())
            .id(egui::Id::new("prompt_window"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                egui::Grid::new("prompt_fields")
                    .num_columns(2)
                    .spacing([8.0, 6.0])
                    .show(ui, |ui| {
                        for (i, (label, value)) in
                            self.labels.iter().zip(self.values.iter_mut()).enumerate()
                        {
                            ui.label(label.as_str());
                            let response = ui.add(
                                egui::TextEdit::singleline(value).desired_width(220.0),
                            );
                            if i == 0 && self.focus_first {
                                response.request_focus();
                            }
                            ui.end_row();
                        }
                    });
                self.focus_first = false;

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Confirm").clicked() {
                        outcome = PromptOutcome::Confirmed(self.values.clone());
                    }
                    if ui.button("Cancel").clicked() {
                        outcome = PromptOutcome::Cancelled;
                    }
                });
            });

        if outcome == PromptOutcome::Pending {
            ctx.input(|i| {
                if i.key_pressed(egui::Key::Escape) {
                    outcome = PromptOutcome::Cancelled;
                } else if i.key_pressed(egui::Key::Enter) {
                    outcome = PromptOutcome::Confirmed(self.values.clone());
                }
            });
        }

        outcome
    }
}
