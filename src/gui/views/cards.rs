// src/gui/views/cards.rs
//
// Card list: one framed group per job with title, company, location,
// posting date, and a "View job" link.

use eframe::egui::{self, RichText};

use crate::config::options::RenderStyle;
use crate::core::normalize::NormalizedView;

use super::View;

pub struct CardsView;
pub static VIEW: CardsView = CardsView;

impl View for CardsView {
    fn style(&self) -> RenderStyle { RenderStyle::Cards }
    fn title(&self) -> &'static str { "Cards" }

    fn draw(&self, ui: &mut egui::Ui, view: &NormalizedView) {
        if view.is_empty() {
            ui.label("No results yet.");
            return;
        }

        egui::ScrollArea::vertical()
            .id_salt("results_cards")
            .show(ui, |ui| {
                for ri in 0..view.row_count() {
                    let cell = |name: &str| view.cell(ri, name).unwrap_or("");

                    ui.group(|ui| {
                        ui.horizontal_wrapped(|ui| {
                            ui.label(RichText::new(cell("title")).strong());
                            let company = cell("company");
                            if !company.is_empty() {
                                ui.label(format!("— {}", company));
                            }
                        });
                        ui.horizontal_wrapped(|ui| {
                            let location = cell("location");
                            if !location.is_empty() {
                                ui.label(location);
                            }
                            let date = cell("date_posted");
                            if !date.is_empty() {
                                ui.weak(format!("posted {}", date));
                            }
                        });
                        let url = cell("job_url");
                        if !url.is_empty() {
                            ui.hyperlink_to("View job", url);
                        }
                    });
                    ui.add_space(6.0);
                }
            });
    }
}
