// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

/// Field separator for export/copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delim {
    Csv,
    Tsv,
}

impl Delim {
    pub fn ch(self) -> char {
        match self {
            Delim::Csv => ',',
            Delim::Tsv => '\t',
        }
    }
    pub fn ext(self) -> &'static str {
        match self {
            Delim::Csv => "csv",
            Delim::Tsv => "tsv",
        }
    }
}

/* ---------------- Parsing ---------------- */

/// Minimal CSV/TSV parser (quotes + CRLF tolerant). std-only.
/// Used by the round-trip tests; the app itself only writes.
pub fn parse_rows(text: &str, delim: Delim) -> Vec<Vec<String>> {
    let sep = delim.ch();
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == sep && !in_quotes => {
                // move the field without cloning
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                if !row.is_empty() && !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Flush any trailing field/row even if quotes were unterminated.
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], delim: Delim) -> io::Result<()> {
    let sep = delim.ch();
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Create a full export string (Copy/Export) from headers and rows.
pub fn to_export_string(
    headers: &[String],
    rows: &[Vec<String>],
    include_headers: bool,
    delim: Delim,
) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if include_headers && !headers.is_empty() {
        let _ = write_row(&mut buf, headers, delim);
    }
    for r in rows {
        let _ = write_row(&mut buf, r, delim);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| s!(*c)).collect()
    }

    #[test]
    fn quotes_separator_and_newline_fields() {
        let mut buf = Vec::new();
        write_row(&mut buf, &row(&["a,b", "plain", "line\nbreak"]), Delim::Csv).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "\"a,b\",plain,\"line\nbreak\"\n");
    }

    #[test]
    fn escapes_embedded_quotes_by_doubling() {
        let mut buf = Vec::new();
        write_row(&mut buf, &row(&[r#"say "hi""#]), Delim::Csv).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "\"say \"\"hi\"\"\"\n");
    }

    #[test]
    fn parse_inverts_write() {
        let rows = vec![
            row(&["QA Engineer", "Acme, Inc.", "Pune"]),
            row(&["Dev \"Ops\"", "Beta", "multi\nline"]),
        ];
        let text = to_export_string(&[], &rows, false, Delim::Csv);
        assert_eq!(parse_rows(&text, Delim::Csv), rows);
    }

    #[test]
    fn tsv_uses_tab_separator() {
        let text = to_export_string(&[], &[row(&["a", "b"])], false, Delim::Tsv);
        assert_eq!(text, "a\tb\n");
    }
}
