// src/cli.rs
use std::env;
use std::error::Error;

use crate::config::consts::{API_KEY_ENV, HOURS_MAX, HOURS_MIN, RESULTS_MAX, RESULTS_MIN};
use crate::config::options::AppOptions;
use crate::csv::Delim;
use crate::file;
use crate::progress::Progress;
use crate::scrape::{HttpScraper, Site};
use crate::search::{SearchOutcome, run_search};
use crate::summarize::{ChatSummarizer, Summarize};

struct Params {
    options: AppOptions,
    api_key: Option<String>,
    write_out: bool,
}

impl Params {
    fn new() -> Self {
        Self {
            options: AppOptions::default(),
            api_key: env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty()),
            write_out: false,
        }
    }
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let mut params = Params::new();
    parse_cli(&mut params)?;
    params.options.search.clamp_bounds();

    let scraper = HttpScraper::new();
    let summarizer = params.api_key.as_ref().map(|k| ChatSummarizer::new(k.clone()));

    let mut progress = StderrProgress;
    let outcome = run_search(
        &scraper,
        summarizer.as_ref().map(|s| s as &dyn Summarize),
        &params.options.search,
        Some(&mut progress),
    )?;

    present(&params, &outcome)?;
    Ok(())
}

fn present(params: &Params, outcome: &SearchOutcome) -> Result<(), Box<dyn Error>> {
    let view = &outcome.view;

    if view.is_empty() {
        println!("No jobs found.");
    } else {
        print_table(&view.columns, &view.rows);
        println!("\n{} job(s)", view.row_count());
    }

    if let Some(summary) = &outcome.summary {
        println!("\n--- Top skills/keywords ---\n{}", summary);
    } else if let Some(notice) = &outcome.summary_notice {
        eprintln!("Note: {}", notice);
    }

    if params.write_out && !view.is_empty() {
        let path = file::write_export_single(&params.options.export, view)?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}

/// Aligned plain-text table for stdout.
fn print_table(columns: &[String], rows: &[Vec<String>]) {
    const CELL_MAX: usize = 40;

    let clip = |s: &str| -> String {
        let flat = crate::core::sanitize::normalize_ws(s);
        if flat.chars().count() > CELL_MAX {
            let cut: String = flat.chars().take(CELL_MAX - 1).collect();
            join!(cut, "…")
        } else {
            flat
        }
    };

    let mut widths: Vec<usize> = columns.iter().map(|c| c.chars().count()).collect();
    let clipped: Vec<Vec<String>> = rows
        .iter()
        .map(|r| r.iter().map(|c| clip(c)).collect())
        .collect();
    for row in &clipped {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    let print_row = |cells: &[String]| {
        let line: Vec<String> = cells
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{:<width$}", c, width = widths.get(i).copied().unwrap_or(0)))
            .collect();
        println!("{}", line.join("  "));
    };

    print_row(columns);
    for row in &clipped {
        print_row(row);
    }
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn Error>> {
    let search = &mut params.options.search;
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-q" | "--query" => search.query = args.next().ok_or("Missing value for --query")?,
            "-l" | "--location" => search.location = args.next().ok_or("Missing value for --location")?,
            "-n" | "--results" => {
                let v: u32 = args.next().ok_or("Missing value for --results")?.parse()?;
                if !(RESULTS_MIN..=RESULTS_MAX).contains(&v) {
                    return Err(format!("Results out of range ({}..{})", RESULTS_MIN, RESULTS_MAX).into());
                }
                search.results_wanted = v; }
            "--hours" => {
                let v: u32 = args.next().ok_or("Missing value for --hours")?.parse()?;
                if !(HOURS_MIN..=HOURS_MAX).contains(&v) {
                    return Err(format!("Hours out of range ({}..{})", HOURS_MIN, HOURS_MAX).into());
                }
                search.hours_old = v; }
            "--sites" => {
                let v = args.next().ok_or("Missing value for --sites")?;
                search.sites = parse_sites_list(&v)?; }
            "--country" => search.country = args.next().ok_or("Missing value for --country")?,
            "--no-descriptions" => search.fetch_descriptions = false,
            "--api-key" => params.api_key = Some(args.next().ok_or("Missing value for --api-key")?),
            "--no-summary" => params.api_key = None,
            "-o" | "--out" => {
                let p = args.next().ok_or("Missing output path")?;
                params.options.export.set_path(&p);
                params.write_out = true; }
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.options.export.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => Delim::Csv,
                    "tsv" => Delim::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };}
            "--no-headers" => params.options.export.include_headers = false,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    if search.query.is_empty() {
        return Err("Specify a search term with -q <query>".into());
    }
    Ok(())
}

fn parse_sites_list(s: &str) -> Result<Vec<Site>, Box<dyn Error>> {
    let mut out = Vec::new();
    for part in s.split(',') {
        let part = part.trim();
        if part.is_empty() { continue; }
        let site = Site::parse(part)?;
        if !out.contains(&site) { out.push(site); }
    }
    if out.is_empty() {
        return Err("No sites given".into());
    }
    Ok(out)
}

/// Progress sink that prints status lines to stderr.
struct StderrProgress;

impl Progress for StderrProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{}", msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_sites_list_dedups_and_validates() {
        let sites = parse_sites_list("indeed, linkedin,indeed").unwrap();
        assert_eq!(sites, vec![Site::Indeed, Site::LinkedIn]);
        assert!(parse_sites_list("monster").is_err());
        assert!(parse_sites_list(" , ").is_err());
    }

    #[test]
    fn params_default_to_no_export() {
        let p = Params::new();
        assert!(!p.write_out);
    }
}
