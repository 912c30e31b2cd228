//! Main application window

use eframe::egui::{self, Color32, RichText};
use std::time::Instant;
use tracing::{info, warn};
use weighmaster_app::{Config, LedgerController};

use crate::alarm_panel;
use crate::host::{self, HostAction};
use crate::ledger_panel::LedgerPanel;

/// Main application state
pub struct WeighmasterApp {
    /// Kept across reloads
    config: Config,
    /// Session state; replaced wholesale on reload
    controller: LedgerController,
    ledger_panel: LedgerPanel,
    /// Status message (message, is_error)
    status_message: Option<(String, bool)>,
}

impl WeighmasterApp {
    pub fn new(config: Config) -> Self {
        let controller = LedgerController::new(&config);
        Self {
            config,
            controller,
            ledger_panel: LedgerPanel::new(),
            status_message: None,
        }
    }

    fn render_header(&mut self, ui: &mut egui::Ui) -> Option<HostAction> {
        let mut action = None;
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new("DESERT WEIGHMASTER").strong().size(20.0));
                ui.label(
                    RichText::new("Caravan logistics control")
                        .small()
                        .color(Color32::from_rgb(250, 210, 120)),
                );
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Reload").clicked() {
                    action = Some(HostAction::Reload);
                }
                if ui.button("Print").clicked() {
                    action = Some(HostAction::Print);
                }

                let mut term = self.controller.search_term().to_string();
                let response = ui.add(
                    egui::TextEdit::singleline(&mut term)
                        .hint_text("🌙 Search caravan records")
                        .desired_width(260.0),
                );
                if response.changed() {
                    self.controller.set_search_term(&term);
                }
            });
        });
        action
    }

    fn handle_host_action(&mut self, action: HostAction) {
        match action {
            HostAction::Print => match host::save_print_view(&self.controller.print_view()) {
                Ok(Some(path)) => {
                    info!(path = %path.display(), "ledger view printed");
                    self.status_message =
                        Some((format!("Printed to {}", path.display()), false));
                }
                Ok(None) => {}
                Err(e) => {
                    warn!(error = %e, "print failed");
                    self.status_message = Some((format!("Print failed: {}", e), true));
                }
            },
            HostAction::Reload => {
                info!("reloading ledger view");
                self.controller = LedgerController::new(&self.config);
                self.ledger_panel = LedgerPanel::new();
                self.status_message = None;
            }
        }
    }
}

impl eframe::App for WeighmasterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(wait) = self.controller.poll_alarm(Instant::now()) {
            ctx.request_repaint_after(wait);
        }

        let action = egui::TopBottomPanel::top("header")
            .show(ctx, |ui| {
                ui.add_space(6.0);
                let action = self.render_header(ui);
                ui.add_space(6.0);
                action
            })
            .inner;

        if let Some(action) = action {
            self.handle_host_action(action);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            alarm_panel::show(ui, &mut self.controller);
            ui.add_space(12.0);

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    self.ledger_panel.ui(ui, &mut self.controller);

                    if let Some((ref msg, is_error)) = self.status_message {
                        ui.add_space(10.0);
                        let color = if is_error {
                            Color32::LIGHT_RED
                        } else {
                            Color32::LIGHT_GREEN
                        };
                        ui.label(RichText::new(msg).color(color));
                    }
                });
        });
    }
}
