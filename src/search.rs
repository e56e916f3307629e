// src/search.rs
//
// The per-search pipeline: scrape → normalize → sample → optionally
// summarize. One linear pass, no retries, no intermediate state.

use std::error::Error;

use crate::config::consts::SAMPLE_CAP;
use crate::config::options::SearchOptions;
use crate::core::normalize::{NormalizedView, normalize};
use crate::core::sample::build_summary_input;
use crate::progress::Progress;
use crate::scrape::{JobScraper, ScrapeRequest};
use crate::summarize::{SUMMARY_INSTRUCTION, Summarize};

/// Everything one search produced. Request-scoped; the frontend drops
/// it when the next search replaces it.
pub struct SearchOutcome {
    pub view: NormalizedView,
    /// Summary text, when the collaborator was called and answered.
    pub summary: Option<String>,
    /// Non-fatal notice when summarization was skipped or failed.
    pub summary_notice: Option<String>,
}

/// Run one search.
///
/// A scraper error propagates; the invoking shell decides how to
/// present it. A summarizer error never does: the outcome still carries
/// the view, with the failure folded into `summary_notice`.
/// The summarizer is invoked at most once, and only when a sample
/// exists; `summarizer = None` (no credential) disables it entirely.
pub fn run_search(
    scraper: &dyn JobScraper,
    summarizer: Option<&dyn Summarize>,
    opts: &SearchOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<SearchOutcome, Box<dyn Error>> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(if summarizer.is_some() { 2 } else { 1 });
    }

    let request = ScrapeRequest::from_options(opts);
    let records = scraper.scrape(&request, progress.as_deref_mut())?;
    logf!("Search: {} record(s) from scraper", records.len());

    let view = normalize(&records, &opts.column_refs());

    let mut summary = None;
    let mut summary_notice = None;

    match (summarizer, build_summary_input(&records, SAMPLE_CAP)) {
        (Some(s), Some(sample)) => {
            if let Some(p) = progress.as_deref_mut() {
                p.log("Summarizing descriptions…");
            }
            match s.summarize(SUMMARY_INSTRUCTION, &sample) {
                Ok(text) => {
                    logf!("Search: summary OK ({} chars)", text.len());
                    summary = Some(text);
                }
                Err(e) => {
                    loge!("Search: summarizer failed: {}", e);
                    summary_notice = Some(format!("Summary unavailable: {e}"));
                }
            }
        }
        (Some(_), None) => {
            logd!("Search: no qualifying descriptions, summarizer not called");
            summary_notice = Some(s!("No job descriptions to summarize"));
        }
        (None, _) => {
            logd!("Search: summarization disabled (no credential)");
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    Ok(SearchOutcome { view, summary, summary_notice })
}
