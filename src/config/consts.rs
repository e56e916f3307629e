// src/config/consts.rs

// Scraper collaborator (JobSpy-compatible REST service)
pub const SCRAPER_BASE_URL: &str = "http://127.0.0.1:8000";
pub const SCRAPER_SEARCH_PATH: &str = "/api/v1/search_jobs";
pub const SCRAPER_TIMEOUT_SECS: u64 = 120;

// Summarization collaborator (OpenAI-compatible chat completions)
pub const SUMMARY_BASE_URL: &str = "https://api.openai.com/v1";
pub const SUMMARY_MODEL: &str = "gpt-3.5-turbo";
pub const SUMMARY_TIMEOUT_SECS: u64 = 60;
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

// Search defaults and bounds
pub const DEFAULT_QUERY: &str = "";
pub const DEFAULT_LOCATION: &str = "";
pub const DEFAULT_COUNTRY: &str = "India";
pub const RESULTS_MIN: u32 = 10;
pub const RESULTS_MAX: u32 = 200;
pub const DEFAULT_RESULTS: u32 = 50;
pub const HOURS_MIN: u32 = 1;
pub const HOURS_MAX: u32 = 168;
pub const DEFAULT_HOURS: u32 = 72;

// Display schema
pub const CORE_COLUMNS: &[&str] = &["title", "company", "location", "date_posted", "job_url"];
pub const DESCRIPTION_COLUMN: &str = "description";
pub const SAMPLE_CAP: usize = 5;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "jobs";
