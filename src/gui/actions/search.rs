// src/gui/actions/search.rs
use crate::{
    gui::app::App,
    gui::progress::GuiProgress,
    search::run_search,
    summarize::{ChatSummarizer, Summarize},
};

pub fn search(app: &mut App) {
    app.state.options.search.clamp_bounds();

    let search_opts = app.state.options.search.clone();
    if search_opts.query.trim().is_empty() {
        app.status("Enter a job title first");
        return;
    }

    logf!(
        "Search: Begin query={:?} location={:?} sites={:?}",
        search_opts.query, search_opts.location, search_opts.sites
    );

    // Credential from the key field; empty disables summarization.
    let key = app.state.gui.api_key.trim();
    let summarizer = if key.is_empty() {
        None
    } else {
        Some(ChatSummarizer::new(s!(key)))
    };

    let mut prog = GuiProgress::new(app.status.clone());

    // → This is where the search happens ←
    let outcome_res = run_search(
        &app.scraper,
        summarizer.as_ref().map(|s| s as &dyn Summarize),
        &search_opts,
        Some(&mut prog),
    );

    match outcome_res {
        Ok(outcome) => {
            logf!(
                "Search: OK rows={} columns={} summary={}",
                outcome.view.row_count(),
                outcome.view.columns.len(),
                outcome.summary.is_some()
            );
            let n = outcome.view.row_count();
            app.results = Some(outcome);
            app.status(format!("{n} jobs scraped"));
        }
        Err(e) => {
            loge!("Search: Error: {}", e);
            app.status(format!("Error: {e}"));
        }
    }
}
