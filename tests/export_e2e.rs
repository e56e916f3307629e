// tests/export_e2e.rs
use std::fs;
use std::path::PathBuf;

use jobdash::config::options::ExportOptions;
use jobdash::core::normalize::normalize;
use jobdash::csv::{Delim, parse_rows};
use jobdash::file::write_export_single;
use jobdash::record::JobRecord;

use serde_json::json;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("jobdash_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn rec(v: serde_json::Value) -> JobRecord {
    v.as_object().unwrap().clone()
}

fn sample_view() -> jobdash::core::normalize::NormalizedView {
    let records = vec![
        rec(json!({
            "title": "QA Engineer, Payments",
            "company": "Acme, Inc.",
            "location": "Pune",
            "date_posted": "2024-01-01",
            "job_url": "https://x/1",
        })),
        rec(json!({
            "title": "Dev \"Ops\" Lead",
            "company": "Beta\nLabs",
            "location": "Remote",
            "date_posted": "2024-01-02",
            "job_url": "https://x/2",
        })),
    ];
    normalize(&records, &["title", "company", "location", "date_posted", "job_url"])
}

#[test]
fn export_writes_jobs_csv_with_header_row() {
    let dir = tmp_dir("default_name");
    let mut export = ExportOptions::default();
    export.set_path(dir.join("jobs.csv").to_str().unwrap());

    let view = sample_view();
    let path = write_export_single(&export, &view).unwrap();
    assert!(path.to_string_lossy().ends_with("jobs.csv"));

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("title,company,location,date_posted,job_url"));
}

#[test]
fn csv_round_trip_preserves_rows_and_quoting() {
    let dir = tmp_dir("round_trip");
    let mut export = ExportOptions::default();
    export.set_path(dir.join("jobs.csv").to_str().unwrap());

    let view = sample_view();
    let path = write_export_single(&export, &view).unwrap();
    let content = fs::read_to_string(&path).unwrap();

    let mut parsed = parse_rows(&content, Delim::Csv);
    let header = parsed.remove(0);
    assert_eq!(header, view.columns);
    assert_eq!(parsed, view.rows);
}

#[test]
fn headers_can_be_suppressed() {
    let dir = tmp_dir("no_headers");
    let mut export = ExportOptions::default();
    export.include_headers = false;
    export.set_path(dir.join("jobs.csv").to_str().unwrap());

    let view = sample_view();
    let path = write_export_single(&export, &view).unwrap();
    let content = fs::read_to_string(&path).unwrap();
    assert!(!content.contains("title,company"));

    let parsed = parse_rows(&content, Delim::Csv);
    assert_eq!(parsed, view.rows);
}

#[test]
fn format_flips_extension_and_separator() {
    let dir = tmp_dir("tsv");
    let mut export = ExportOptions::default();
    export.format = Delim::Tsv;
    export.set_path(dir.join("jobs.tsv").to_str().unwrap());

    let view = sample_view();
    let path = write_export_single(&export, &view).unwrap();
    assert!(path.to_string_lossy().ends_with("jobs.tsv"));

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.lines().next().unwrap().contains('\t'));
}

#[test]
fn export_creates_missing_parent_directories() {
    let dir = tmp_dir("nested");
    let mut export = ExportOptions::default();
    export.set_path(dir.join("deep/down/jobs.csv").to_str().unwrap());

    let view = sample_view();
    let path = write_export_single(&export, &view).unwrap();
    assert!(path.exists());
}
