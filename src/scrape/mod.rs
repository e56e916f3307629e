// src/scrape/mod.rs
//
// Narrow interface to the external job-scraping collaborator.
// The dashboard never parses job-board HTML itself; it hands a request
// to the collaborator and gets raw records back.

mod http;

pub use http::HttpScraper;

use std::error::Error;
use std::fmt;

use serde::Serialize;

use crate::config::options::SearchOptions;
use crate::progress::Progress;
use crate::record::JobRecord;

/// Supported job boards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Site {
    Indeed,
    Glassdoor,
    LinkedIn,
}

impl Site {
    pub fn all() -> &'static [Site] {
        &[Site::Indeed, Site::Glassdoor, Site::LinkedIn]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Site::Indeed => "indeed",
            Site::Glassdoor => "glassdoor",
            Site::LinkedIn => "linkedin",
        }
    }

    pub fn parse(s: &str) -> Result<Site, Box<dyn Error>> {
        match s.trim().to_ascii_lowercase().as_str() {
            "indeed" => Ok(Site::Indeed),
            "glassdoor" => Ok(Site::Glassdoor),
            "linkedin" => Ok(Site::LinkedIn),
            other => Err(format!("Unknown site: {}", other).into()),
        }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One search request to the collaborator. Field names follow the
/// collaborator's wire contract.
#[derive(Clone, Debug, Serialize)]
pub struct ScrapeRequest {
    pub site_name: Vec<Site>,
    pub search_term: String,
    pub location: String,
    pub results_wanted: u32,
    pub hours_old: u32,
    pub country_indeed: String,
    pub linkedin_fetch_description: bool,
}

impl ScrapeRequest {
    pub fn from_options(opts: &SearchOptions) -> Self {
        Self {
            site_name: opts.sites.clone(),
            search_term: opts.query.clone(),
            location: opts.location.clone(),
            results_wanted: opts.results_wanted,
            hours_old: opts.hours_old,
            country_indeed: opts.country.clone(),
            linkedin_fetch_description: opts.fetch_descriptions,
        }
    }
}

/// The scraping collaborator. One blocking call per search; zero or
/// more records back, stable order within one call.
pub trait JobScraper {
    fn scrape(
        &self,
        request: &ScrapeRequest,
        progress: Option<&mut (dyn Progress + '_)>,
    ) -> Result<Vec<JobRecord>, Box<dyn Error>>;
}
