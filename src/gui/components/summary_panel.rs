// src/gui/components/summary_panel.rs
//
// Shows the summary text, a non-fatal notice, or nothing at all.

use eframe::egui::{self, RichText};
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let Some(outcome) = &app.results else { return };

    if let Some(summary) = &outcome.summary {
        ui.separator();
        ui.label(RichText::new("Top skills/keywords").strong());
        egui::ScrollArea::vertical()
            .id_salt("summary_scroll")
            .max_height(160.0)
            .show(ui, |ui| {
                ui.label(summary);
            });
    } else if let Some(notice) = &outcome.summary_notice {
        ui.separator();
        ui.weak(notice);
    }
}
