//! Entry form and weight ledger table

use eframe::egui::{self, Color32, RichText, Ui};
use weighmaster_app::{Draft, LedgerController};
use weighmaster_domain::service::group_thousands;
use weighmaster_domain::service::price::{PRICE_QUICK_FILLS, PRICE_SOFT_MAX, PRICE_SOFT_MIN};
use weighmaster_types::{EntryId, FormField};

/// Per-row buttons
#[derive(Debug, Clone, Copy)]
enum RowAction {
    Edit(EntryId),
    Delete(EntryId),
}

/// Panel for entering and listing weighings
pub struct LedgerPanel {
    /// Scroll the form into view on the next frame (after Edit is clicked)
    scroll_to_form: bool,
}

fn draft_value(draft: &Draft, field: FormField) -> String {
    match field {
        FormField::PlateNumber => draft.plate_number.clone(),
        FormField::GrossWeight => draft.gross_weight.clone(),
        FormField::TareWeight => draft.tare_weight.clone(),
        FormField::Date => draft.date.to_string(),
        FormField::Price => draft.price.clone(),
        FormField::CheckNumber => draft.check_number.clone(),
    }
}

/// Single-line input bound to a form field. Returns true when Enter was pressed in it.
fn text_field(
    ui: &mut Ui,
    controller: &mut LedgerController,
    field: FormField,
    hint: &str,
    width: f32,
) -> bool {
    let mut value = draft_value(controller.form().draft(), field);
    let response = ui.add(
        egui::TextEdit::singleline(&mut value)
            .hint_text(hint)
            .desired_width(width),
    );
    if response.changed() {
        controller.set_field(field, &value);
    }
    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
}

impl LedgerPanel {
    pub fn new() -> Self {
        Self {
            scroll_to_form: false,
        }
    }

    pub fn ui(&mut self, ui: &mut Ui, controller: &mut LedgerController) {
        if self.scroll_to_form {
            ui.scroll_to_cursor(Some(egui::Align::TOP));
            self.scroll_to_form = false;
        }

        self.render_form(ui, controller);

        ui.add_space(12.0);
        ui.separator();
        ui.add_space(12.0);

        self.render_ledger(ui, controller);
    }

    fn render_form(&mut self, ui: &mut Ui, controller: &mut LedgerController) {
        ui.label(
            RichText::new("LOAD MANIFEST ENTRY")
                .strong()
                .size(18.0)
                .color(Color32::from_rgb(250, 210, 120)),
        );
        ui.add_space(8.0);

        let mut submit_requested = false;

        egui::Grid::new("entry_form")
            .num_columns(4)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label(FormField::PlateNumber.label());
                submit_requested |= text_field(
                    ui,
                    controller,
                    FormField::PlateNumber,
                    "Enter plate number",
                    200.0,
                );
                ui.label(FormField::CheckNumber.label());
                submit_requested |= text_field(
                    ui,
                    controller,
                    FormField::CheckNumber,
                    "Verification code",
                    200.0,
                );
                ui.end_row();

                ui.label(FormField::GrossWeight.label());
                submit_requested |=
                    text_field(ui, controller, FormField::GrossWeight, "e.g. 12000", 200.0);
                ui.label(FormField::TareWeight.label());
                submit_requested |=
                    text_field(ui, controller, FormField::TareWeight, "e.g. 8000", 200.0);
                ui.end_row();

                // Derived, never edited directly
                ui.label("Net weight (kg)");
                let mut net = controller
                    .net_weight()
                    .map(group_thousands)
                    .unwrap_or_default();
                ui.add(
                    egui::TextEdit::singleline(&mut net)
                        .hint_text("Computed")
                        .interactive(false)
                        .desired_width(200.0),
                );
                ui.label(FormField::Date.label());
                let mut date = controller.form().draft().date;
                if ui
                    .add(egui_extras::DatePickerButton::new(&mut date).id_salt("entry_date"))
                    .changed()
                {
                    controller.set_date(date);
                }
                ui.end_row();
            });

        ui.add_space(8.0);

        ui.horizontal(|ui| {
            ui.label(FormField::Price.label());
            submit_requested |= text_field(ui, controller, FormField::Price, "", 120.0);
            for value in PRICE_QUICK_FILLS {
                if ui.button(group_thousands(value)).clicked() {
                    controller.set_field(FormField::Price, &value.to_string());
                }
            }
            ui.label(
                RichText::new(format!(
                    "Preferred range: {} - {}",
                    group_thousands(PRICE_SOFT_MIN),
                    group_thousands(PRICE_SOFT_MAX)
                ))
                .small()
                .color(Color32::GRAY),
            );
            if let Some(warning) = controller.price_hint().warning() {
                ui.label(RichText::new(warning).small().color(Color32::YELLOW));
            }
        });

        if let Some(err) = controller.form_error() {
            ui.add_space(8.0);
            egui::Frame::new()
                .fill(Color32::from_rgb(90, 20, 20))
                .inner_margin(8.0)
                .corner_radius(4.0)
                .show(ui, |ui| {
                    ui.label(RichText::new(err.to_string()).color(Color32::LIGHT_RED));
                });
        }

        ui.add_space(8.0);

        ui.horizontal(|ui| {
            let editing = controller.form().is_editing();
            let submit_label = if editing { "Update Entry" } else { "Add Entry" };
            if ui.button(RichText::new(submit_label).strong()).clicked() {
                submit_requested = true;
            }
            if editing && ui.button("Cancel Edit").clicked() {
                controller.cancel_edit();
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Clear Form").clicked() {
                    controller.clear_form();
                }
                if ui.button("Relay").clicked() {
                    controller.relay();
                }
            });
        });

        if submit_requested {
            // Rejections are kept on the controller and rendered above
            let _ = controller.submit();
        }

        if let Some(message) = controller.relay_message() {
            ui.add_space(6.0);
            ui.label(
                RichText::new(message.to_uppercase())
                    .small()
                    .color(Color32::from_rgb(250, 220, 150)),
            );
        }
    }

    fn render_ledger(&mut self, ui: &mut Ui, controller: &mut LedgerController) {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new("CARAVAN WEIGHT LEDGER")
                    .strong()
                    .size(16.0)
                    .color(Color32::from_rgb(250, 210, 120)),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    RichText::new(format!("{} total entries", controller.total_entries()))
                        .small(),
                );
            });
        });
        ui.add_space(6.0);

        let highlight = controller.is_search_active();
        let mut action: Option<RowAction> = None;

        egui::Grid::new("ledger_table")
            .num_columns(8)
            .spacing([14.0, 6.0])
            .striped(true)
            .show(ui, |ui| {
                for header in [
                    "Plate", "Gross", "Date", "Tare", "Net", "Price", "Check No", "Actions",
                ] {
                    ui.label(RichText::new(header).strong());
                }
                ui.end_row();

                let entries = controller.displayed_entries();
                if entries.is_empty() {
                    ui.label(
                        RichText::new("No entries match the search criteria.")
                            .italics()
                            .color(Color32::GRAY),
                    );
                    ui.end_row();
                }

                for entry in entries {
                    let color = if highlight {
                        Color32::from_rgb(250, 130, 130)
                    } else {
                        Color32::WHITE
                    };
                    let cell = |text: String| RichText::new(text).color(color);

                    ui.label(cell(entry.plate_number().to_uppercase()).strong());
                    ui.label(cell(group_thousands(entry.gross_weight())));
                    ui.label(cell(entry.date().format("%Y-%m-%d").to_string()));
                    ui.label(cell(group_thousands(entry.tare_weight())));
                    ui.label(cell(group_thousands(entry.net_weight())));
                    ui.label(cell(group_thousands(entry.price())));
                    let check = if entry.check_number().is_empty() {
                        "--".to_string()
                    } else {
                        entry.check_number().to_uppercase()
                    };
                    ui.label(cell(check));

                    ui.horizontal(|ui| {
                        if ui.small_button("Edit").clicked() {
                            action = Some(RowAction::Edit(entry.id()));
                        }
                        if ui
                            .small_button(RichText::new("Delete").color(Color32::LIGHT_RED))
                            .clicked()
                        {
                            action = Some(RowAction::Delete(entry.id()));
                        }
                    });
                    ui.end_row();
                }
            });

        match action {
            Some(RowAction::Edit(id)) => {
                if controller.begin_edit(id) {
                    self.scroll_to_form = true;
                }
            }
            Some(RowAction::Delete(id)) => {
                controller.delete(id);
            }
            None => {}
        }
    }
}

impl Default for LedgerPanel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weighmaster_app::config::AudioKind;
    use weighmaster_app::Config;

    #[test]
    fn test_draft_value_reads_each_field() {
        let config = Config {
            audio: AudioKind::Silent,
            ..Config::default()
        };
        let mut controller = LedgerController::new(&config);
        controller.set_field(FormField::PlateNumber, "01A123BC");
        controller.set_field(FormField::Date, "2026-10-19");

        let draft = controller.form().draft();
        assert_eq!(draft_value(draft, FormField::PlateNumber), "01A123BC");
        assert_eq!(draft_value(draft, FormField::Date), "2026-10-19");
        assert_eq!(draft_value(draft, FormField::Price), "30000");
        assert_eq!(draft_value(draft, FormField::GrossWeight), "");
    }
}
