// src/gui/views/mod.rs
//
// Pluggable result rendering. All variants draw the same NormalizedView;
// the active one is selected by configuration (RenderStyle), never by
// duplicated data logic.

use eframe::egui;

use crate::config::options::RenderStyle;
use crate::core::normalize::NormalizedView;

pub mod cards;
pub mod links;
pub mod table;

pub trait View: Send + Sync + 'static {
    fn style(&self) -> RenderStyle;
    fn title(&self) -> &'static str;

    /// Draw the normalized result set. Views are read-only over the
    /// view data; interactions (copy, open link) go through the egui
    /// context.
    fn draw(&self, ui: &mut egui::Ui, view: &NormalizedView);
}

pub static ALL: &[&'static dyn View] = &[
    &table::VIEW,
    &links::VIEW,
    &cards::VIEW,
];

pub fn view_for(style: RenderStyle) -> &'static dyn View {
    match style {
        RenderStyle::Table => &table::VIEW,
        RenderStyle::Links => &links::VIEW,
        RenderStyle::Cards => &cards::VIEW,
    }
}
