// src/config/options.rs
use std::ffi::OsString;
use std::path::{ Path, PathBuf };

use crate::csv::Delim;
use crate::scrape::Site;
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub search: SearchOptions,
    pub export: ExportOptions,
    pub render: RenderOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            search: SearchOptions::default(),
            export: ExportOptions::default(),
            render: RenderOptions::default(),
        }
    }
}

/* ---------------- Search ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOptions {
    pub sites: Vec<Site>,
    pub query: String,
    pub location: String,
    pub results_wanted: u32,
    pub hours_old: u32,
    pub country: String,
    pub fetch_descriptions: bool,
    /// Display columns, in priority order. The normalizer intersects
    /// these with what the record set actually contains.
    pub columns: Vec<String>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            sites: Site::all().to_vec(),
            query: s!(DEFAULT_QUERY),
            location: s!(DEFAULT_LOCATION),
            results_wanted: DEFAULT_RESULTS,
            hours_old: DEFAULT_HOURS,
            country: s!(DEFAULT_COUNTRY),
            fetch_descriptions: true,
            columns: CORE_COLUMNS.iter().map(|c| s!(*c)).collect(),
        }
    }
}

impl SearchOptions {
    /// Bounds from the dashboard sliders; out-of-range CLI values are
    /// clamped rather than rejected.
    pub fn clamp_bounds(&mut self) {
        self.results_wanted = self.results_wanted.clamp(RESULTS_MIN, RESULTS_MAX);
        self.hours_old = self.hours_old.clamp(HOURS_MIN, HOURS_MAX);
    }

    pub fn column_refs(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.as_str()).collect()
    }
}

/* ---------------- Render ---------------- */

/// Pluggable result-rendering strategy, selected by configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderStyle {
    Table,
    Links,
    Cards,
}

impl RenderStyle {
    pub fn all() -> &'static [RenderStyle] {
        &[RenderStyle::Table, RenderStyle::Links, RenderStyle::Cards]
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    pub style: RenderStyle,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { style: RenderStyle::Table }
    }
}

/* ---------------- Export ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: Delim,
    out_path: OutputPath,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: Delim::Csv,
            out_path: OutputPath::default(),
            include_headers: true,
        }
    }
}

impl ExportOptions {
    pub fn out_path(&self) -> PathBuf {
        let mut path = self.out_path.dir.clone();
        let stem = self.out_path.file_stem.to_string_lossy();
        path.push(join!(stem, ".", self.format.ext()));
        path
    }

    /// Parse GUI/CLI text into dir + stem. Ignores pasted extension;
    /// format controls it.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        let p = Path::new(s);
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
    }

    pub fn delim(&self) -> Delim {
        self.format
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
        }
    }
}
