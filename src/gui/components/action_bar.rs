// src/gui/components/action_bar.rs
//
// Export format/headers controls, output path field, and the
// Copy / Export / RUN buttons with the status line.

use eframe::egui;
use crate::{
    csv::Delim,
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    {
        let export = &mut app.state.options.export;

        // --- Format + Include headers ---
        let prev_fmt = export.format;
        let mut fmt = prev_fmt;

        ui.horizontal(|ui| {
            ui.label("Format:");
            ui.selectable_value(&mut fmt, Delim::Csv, "CSV");
            ui.selectable_value(&mut fmt, Delim::Tsv, "TSV");
        });

        if fmt != prev_fmt {
            export.format = fmt;
            logf!("UI: Export format → {:?}", export.format);
            if !app.out_path_dirty {
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
            }
        }

        let before_headers = export.include_headers;
        ui.checkbox(&mut export.include_headers, "Include headers");
        if export.include_headers != before_headers {
            logf!("UI: Include_headers → {}", export.include_headers);
        }
    }

    // --- Output field ---
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text)
                .font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }
    });

    // --- Actions: Copy / Export / RUN ---
    ui.horizontal(|ui| {
        if ui.button("Copy").clicked() {
            actions::copy(app, ui.ctx());
        }

        if ui.button("Export").clicked() {
            actions::export(app);
        }

        let accent = egui::Color32::from_rgb(0, 120, 215);
        let button_run = ui.add(
            egui::Button::new(
                egui::RichText::new("RUN SEARCH")
                    .color(egui::Color32::WHITE)
                    .strong())
                .fill(accent));

        if button_run.clicked() {
            actions::search(app);
        }

        let status = app.status.lock().unwrap().clone();
        ui.label(status);
    });
}
