// src/gui/components/view_tabs.rs
//
// Render-style selector. Mirrors the options value so the style is
// configuration-driven, not widget state.

use eframe::egui;
use crate::gui::{app::App, views};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let cur = app.state.gui.current_view_index;
        for (idx, view) in views::ALL.iter().enumerate() {
            let selected = idx == cur;
            if ui.selectable_label(selected, view.title()).clicked() && !selected {
                let prev = app.state.options.render.style;
                app.state.gui.current_view_index = idx;
                app.state.options.render.style = view.style();
                logf!("UI: View switch {:?} → {:?}", prev, view.style());
            }
        }
    });
}
