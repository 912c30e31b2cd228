//! Alarm strip

use eframe::egui::{self, Color32, RichText, Ui};
use weighmaster_app::LedgerController;

pub fn show(ui: &mut Ui, controller: &mut LedgerController) {
    let muted = controller.alarm().is_muted();
    let fill = if muted {
        Color32::from_rgb(60, 30, 30)
    } else {
        Color32::from_rgb(120, 20, 20)
    };

    egui::Frame::new()
        .fill(fill)
        .inner_margin(10.0)
        .corner_radius(6.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("🔔").size(22.0));
                ui.vertical(|ui| {
                    let title = if muted { "Alarm Muted" } else { "Alarm Active" };
                    ui.label(RichText::new(title).strong().color(Color32::WHITE));
                    ui.label(
                        RichText::new(format!(
                            "Caravan safeguard ping {}",
                            controller.alarm().label()
                        ))
                        .small()
                        .color(Color32::from_rgb(255, 210, 210)),
                    );
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let text = if muted { "Unmute" } else { "Mute" };
                    if ui.button(text).clicked() {
                        controller.toggle_mute();
                    }
                });
            });
        });
}
