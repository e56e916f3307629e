// src/scrape/http.rs
//
// Production JobScraper: one blocking POST against a JobSpy-compatible
// REST service. The service answers either `{"jobs": [...], "count": n}`
// or a bare JSON array; both are accepted.

use std::error::Error;
use std::time::Duration;

use serde_json::Value;

use crate::config::consts::{SCRAPER_BASE_URL, SCRAPER_SEARCH_PATH, SCRAPER_TIMEOUT_SECS};
use crate::progress::Progress;
use crate::record::JobRecord;

use super::{JobScraper, ScrapeRequest};

pub struct HttpScraper {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpScraper {
    pub fn new() -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(SCRAPER_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();
        Self { client, base_url: s!(SCRAPER_BASE_URL) }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    fn search_url(&self) -> String {
        join!(self.base_url.trim_end_matches('/'), SCRAPER_SEARCH_PATH)
    }
}

impl Default for HttpScraper {
    fn default() -> Self {
        Self::new()
    }
}

impl JobScraper for HttpScraper {
    fn scrape(
        &self,
        request: &ScrapeRequest,
        mut progress: Option<&mut (dyn Progress + '_)>,
    ) -> Result<Vec<JobRecord>, Box<dyn Error>> {
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Scraping {} site(s)…", request.site_name.len()));
        }

        let url = self.search_url();
        logd!("Scrape: POST {} term={:?}", url, request.search_term);

        let resp = self.client.post(&url).json(request).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(format!("Scraper error: HTTP {} from {}", status, url).into());
        }

        let body: Value = resp.json()?;
        let records = parse_records(body)?;

        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("{} jobs scraped", records.len()));
        }
        Ok(records)
    }
}

/// Accept `{"jobs": [...]}` or a bare array of record objects.
/// Non-object entries are skipped; records keep their raw key sets.
fn parse_records(body: Value) -> Result<Vec<JobRecord>, Box<dyn Error>> {
    let items = match body {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("jobs") {
            Some(Value::Array(items)) => items,
            _ => return Err("Scraper response missing `jobs` array".into()),
        },
        _ => return Err("Unexpected scraper response shape".into()),
    };

    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            Value::Object(rec) => Some(rec),
            _ => None,
        })
        .collect())
}
