// src/gui/components/search_panel.rs
//
// Search inputs: query, location, result/recency sliders, site toggles,
// summarizer key. Values live in AppState; this is purely the form.

use eframe::egui;

use crate::config::consts::{HOURS_MAX, HOURS_MIN, RESULTS_MAX, RESULTS_MIN};
use crate::gui::app::App;
use crate::scrape::Site;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let search = &mut app.state.options.search;

    egui::Grid::new("search_inputs")
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            ui.label("Job title:");
            ui.add(egui::TextEdit::singleline(&mut search.query).hint_text("e.g. QA Engineer"));
            ui.end_row();

            ui.label("Location(s):");
            ui.add(egui::TextEdit::singleline(&mut search.location)
                .hint_text("e.g. Bangalore, Hyderabad, Pune"));
            ui.end_row();

            ui.label("Results:");
            ui.add(egui::Slider::new(&mut search.results_wanted, RESULTS_MIN..=RESULTS_MAX));
            ui.end_row();

            ui.label("Posted within (h):");
            ui.add(egui::Slider::new(&mut search.hours_old, HOURS_MIN..=HOURS_MAX));
            ui.end_row();
        });

    ui.separator();

    ui.label("Sites:");
    for &site in Site::all() {
        let mut on = search.sites.contains(&site);
        if ui.checkbox(&mut on, site.as_str()).changed() {
            if on {
                search.sites.push(site);
            } else {
                search.sites.retain(|s| *s != site);
            }
            logf!("UI: sites → {:?}", search.sites);
        }
    }
    ui.checkbox(&mut search.fetch_descriptions, "Fetch descriptions");

    ui.separator();

    ui.label("Summarizer key:");
    let key = egui::TextEdit::singleline(&mut app.state.gui.api_key)
        .password(true)
        .hint_text("empty = no summary");
    ui.add(key);
}
