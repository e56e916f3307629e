// src/gui/views/links.rs
//
// Table variant: job_url cells become clickable links with a per-row
// copy button.

use eframe::egui;

use crate::config::consts::CORE_COLUMNS;
use crate::config::options::RenderStyle;
use crate::core::normalize::NormalizedView;

use super::{View, table::draw_table};

pub struct LinksView;
pub static VIEW: LinksView = LinksView;

const URL_COLUMN: &str = CORE_COLUMNS[4]; // job_url

impl View for LinksView {
    fn style(&self) -> RenderStyle { RenderStyle::Links }
    fn title(&self) -> &'static str { "Links" }

    fn draw(&self, ui: &mut egui::Ui, view: &NormalizedView) {
        draw_table(ui, view, |ui, _ci, col, cell, _row| {
            if col == URL_COLUMN && !cell.is_empty() {
                ui.hyperlink_to("View job", cell);
                if ui.small_button("⎘").on_hover_text("Copy link").clicked() {
                    ui.ctx().copy_text(s!(cell));
                }
            } else {
                ui.label(cell);
            }
        });
    }
}
