// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::state::AppState,
    scrape::HttpScraper,
    search::SearchOutcome,
};

use super::{components, views};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Job Search Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // current search outcome; replaced wholesale by each RUN
    pub results: Option<SearchOutcome>,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // status line (progress sink writes here)
    pub status: Arc<Mutex<String>>,

    // scraping collaborator client, reused across searches
    pub scraper: HttpScraper,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let out_path_text = state.options.export.out_path().to_string_lossy().into();

        logf!(
            "Init: default view={:?}, summarizer key={}",
            state.options.render.style,
            if state.gui.api_key.is_empty() { "absent" } else { "present" }
        );

        Self {
            state,
            results: None,
            out_path_text,
            out_path_dirty: false,
            status: Arc::new(Mutex::new(s!("Idle"))),
            scraper: HttpScraper::new(),
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_view(&self) -> &'static dyn views::View {
        views::view_for(self.state.options.render.style)
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap() = msg.into();
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("search")
            .resizable(false)
            .show(ctx, |ui| {
                components::search_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::view_tabs::draw(ui, self);

            ui.separator();

            components::action_bar::draw(ui, self);

            ui.separator();

            match &self.results {
                Some(outcome) => self.current_view().draw(ui, &outcome.view),
                None => { ui.label("Run a search to see results."); }
            }

            components::summary_panel::draw(ui, self);
        });
    }
}
