// src/gui/actions/copy.rs
use eframe::egui;
use crate::{file, gui::app::App};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let txt = {
        let Some(outcome) = &app.results else {
            app.status("Nothing to copy");
            logd!("Copy: Clicked, but there's nothing to copy");
            return;
        };
        if outcome.view.is_empty() {
            app.status("Nothing to copy");
            logd!("Copy: Clicked, but the result set is empty");
            return;
        }

        logf!(
            "Copy: rows={}, columns={}",
            outcome.view.row_count(),
            outcome.view.columns.len()
        );
        file::view_to_export_string(&app.state.options.export, &outcome.view)
    };

    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
