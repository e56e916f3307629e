// src/file.rs

use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::core::normalize::NormalizedView;
use crate::csv::to_export_string;

/// Serialize the view for export/copy according to the export options.
pub fn view_to_export_string(export: &ExportOptions, view: &NormalizedView) -> String {
    to_export_string(&view.columns, &view.rows, export.include_headers, export.delim())
}

/// Write a single export file based on ExportOptions (path, headers
/// policy, delimiter). Returns the final path written to.
pub fn write_export_single(
    export: &ExportOptions,
    view: &NormalizedView,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    fs::write(&path, view_to_export_string(export, view))?;
    Ok(path)
}

fn ensure_directory(dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)
}
