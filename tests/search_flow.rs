// tests/search_flow.rs
//
// Pipeline tests with fake collaborators behind the JobScraper and
// Summarize trait seams.

use std::cell::Cell;
use std::error::Error;

use serde_json::json;

use jobdash::config::options::SearchOptions;
use jobdash::progress::Progress;
use jobdash::record::JobRecord;
use jobdash::scrape::{JobScraper, ScrapeRequest};
use jobdash::search::run_search;
use jobdash::summarize::Summarize;

fn rec(v: serde_json::Value) -> JobRecord {
    v.as_object().unwrap().clone()
}

struct FakeScraper {
    records: Vec<JobRecord>,
}

impl JobScraper for FakeScraper {
    fn scrape(
        &self,
        _request: &ScrapeRequest,
        _progress: Option<&mut (dyn Progress + '_)>,
    ) -> Result<Vec<JobRecord>, Box<dyn Error>> {
        Ok(self.records.clone())
    }
}

struct FailingScraper;

impl JobScraper for FailingScraper {
    fn scrape(
        &self,
        _request: &ScrapeRequest,
        _progress: Option<&mut (dyn Progress + '_)>,
    ) -> Result<Vec<JobRecord>, Box<dyn Error>> {
        Err("Scraper error: HTTP 503".into())
    }
}

/// Counts invocations; answers or fails on demand.
struct FakeSummarizer {
    calls: Cell<usize>,
    fail: bool,
    last_content_check: fn(&str),
}

impl FakeSummarizer {
    fn ok(check: fn(&str)) -> Self {
        Self { calls: Cell::new(0), fail: false, last_content_check: check }
    }
    fn failing() -> Self {
        Self { calls: Cell::new(0), fail: true, last_content_check: |_| {} }
    }
}

impl Summarize for FakeSummarizer {
    fn summarize(&self, instruction: &str, content: &str) -> Result<String, Box<dyn Error>> {
        self.calls.set(self.calls.get() + 1);
        assert!(!instruction.is_empty());
        (self.last_content_check)(content);
        if self.fail {
            Err("Summarizer error: HTTP 401".into())
        } else {
            Ok("Rust, SQL, CI".to_string())
        }
    }
}

fn full_record(i: usize, desc: Option<&str>) -> JobRecord {
    let mut r = rec(json!({
        "title": format!("job {i}"),
        "company": "Acme",
        "location": "Pune",
        "date_posted": "2024-01-01",
        "job_url": format!("https://x/{i}"),
    }));
    if let Some(d) = desc {
        r.insert("description".into(), json!(d));
    }
    r
}

#[test]
fn empty_result_set_yields_empty_view_and_no_summary_call() {
    let scraper = FakeScraper { records: vec![] };
    let summarizer = FakeSummarizer::ok(|_| {});

    let outcome = run_search(&scraper, Some(&summarizer), &SearchOptions::default(), None).unwrap();

    assert!(outcome.view.is_empty());
    assert!(outcome.view.columns.is_empty());
    assert!(outcome.summary.is_none());
    assert_eq!(summarizer.calls.get(), 0, "summarizer must not be invoked");
}

#[test]
fn description_column_missing_everywhere_skips_summarizer() {
    let scraper = FakeScraper { records: vec![full_record(0, None)] };
    let summarizer = FakeSummarizer::ok(|_| {});

    let outcome = run_search(&scraper, Some(&summarizer), &SearchOptions::default(), None).unwrap();

    // the five core columns survive; description was never present
    assert_eq!(
        outcome.view.columns,
        vec!["title", "company", "location", "date_posted", "job_url"]
    );
    assert_eq!(summarizer.calls.get(), 0);
    assert!(outcome.summary.is_none());
    assert!(outcome.summary_notice.is_some());
}

#[test]
fn three_of_seven_descriptions_sampled_in_order() {
    let records = vec![
        full_record(0, Some("alpha")),
        full_record(1, None),
        full_record(2, Some("")),
        full_record(3, Some("beta")),
        full_record(4, None),
        full_record(5, Some("   ")),
        full_record(6, Some("gamma")),
    ];
    let scraper = FakeScraper { records };
    let summarizer = FakeSummarizer::ok(|content| {
        assert_eq!(content, "alpha\n\nbeta\n\ngamma");
    });

    let outcome = run_search(&scraper, Some(&summarizer), &SearchOptions::default(), None).unwrap();

    assert_eq!(summarizer.calls.get(), 1, "summarizer called exactly once");
    assert_eq!(outcome.summary.as_deref(), Some("Rust, SQL, CI"));
    assert_eq!(outcome.view.row_count(), 7);
}

#[test]
fn eight_descriptions_capped_at_five() {
    let records: Vec<JobRecord> = (0..8)
        .map(|i| full_record(i, Some(&format!("d{i}"))))
        .collect();
    let scraper = FakeScraper { records };
    let summarizer = FakeSummarizer::ok(|content| {
        assert_eq!(content, "d0\n\nd1\n\nd2\n\nd3\n\nd4");
    });

    run_search(&scraper, Some(&summarizer), &SearchOptions::default(), None).unwrap();
    assert_eq!(summarizer.calls.get(), 1);
}

#[test]
fn summarizer_failure_is_non_fatal() {
    let scraper = FakeScraper { records: vec![full_record(0, Some("desc"))] };
    let summarizer = FakeSummarizer::failing();

    let outcome = run_search(&scraper, Some(&summarizer), &SearchOptions::default(), None).unwrap();

    // results and export stay available; failure becomes a notice
    assert_eq!(outcome.view.row_count(), 1);
    assert!(outcome.summary.is_none());
    let notice = outcome.summary_notice.unwrap();
    assert!(notice.contains("401"), "notice should carry the failure: {notice}");
}

#[test]
fn no_credential_disables_summarization_silently() {
    let scraper = FakeScraper { records: vec![full_record(0, Some("desc"))] };

    let outcome = run_search(&scraper, None, &SearchOptions::default(), None).unwrap();

    assert!(outcome.summary.is_none());
    assert!(outcome.summary_notice.is_none());
}

#[test]
fn scraper_failure_propagates() {
    let outcome = run_search(&FailingScraper, None, &SearchOptions::default(), None);
    assert!(outcome.is_err());
    assert!(outcome.err().unwrap().to_string().contains("503"));
}
