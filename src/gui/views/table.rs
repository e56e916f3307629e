// src/gui/views/table.rs
//
// Plain striped table over the normalized view.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::config::options::RenderStyle;
use crate::core::normalize::NormalizedView;

use super::View;

pub struct TableView;
pub static VIEW: TableView = TableView;

impl View for TableView {
    fn style(&self) -> RenderStyle { RenderStyle::Table }
    fn title(&self) -> &'static str { "Table" }

    fn draw(&self, ui: &mut egui::Ui, view: &NormalizedView) {
        draw_table(ui, view, |ui, _ci, _col, cell, _row| {
            ui.label(cell);
        });
    }
}

/// Shared table scaffolding; the links view reuses it with a different
/// cell painter.
pub fn draw_table(
    ui: &mut egui::Ui,
    view: &NormalizedView,
    mut cell_ui: impl FnMut(&mut egui::Ui, usize, &str, &str, usize),
) {
    let cols = view.columns.len();
    if cols == 0 {
        ui.label("No results yet.");
        return;
    }

    let avail_h = ui.available_height();
    egui::ScrollArea::new([true, false])
        .id_salt("results_table_hscroll")
        .min_scrolled_height(avail_h)
        .max_height(avail_h)
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                .id_salt(("results_table", cols));
            for ci in 0..cols {
                let w = preferred_width(&view.columns[ci]);
                table = table.column(Column::initial(w).resizable(true).clip(true).at_least(20.0));
            }

            table
                .header(24.0, |mut header| {
                    for col in &view.columns {
                        header.col(|ui| {
                            ui.scope(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                                    ui.add(egui::Label::new(RichText::new(col).strong()).selectable(false));
                                });
                            });
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, view.rows.len(), |mut row| {
                        let ri = row.index();
                        for (ci, col) in view.columns.iter().enumerate() {
                            let cell = view.rows[ri].get(ci).map(|s| s.as_str()).unwrap_or("");
                            row.col(|ui| {
                                ui.scope(|ui| {
                                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                    ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                                        cell_ui(ui, ci, col, cell, ri);
                                    });
                                });
                            });
                        }
                    });
                });
        });
}

fn preferred_width(column: &str) -> f32 {
    match column {
        "title" => 260.0,
        "company" => 160.0,
        "location" => 160.0,
        "date_posted" => 100.0,
        "job_url" => 280.0,
        _ => 120.0,
    }
}
