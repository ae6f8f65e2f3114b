// src/csv.rs
use std::io::{ self, Write };
use std::mem::take;

use crate::config::consts::STRUCTURE_COL;

/* ---------------- Parsing ---------------- */

/// Minimal CSV/TSV parser (quotes + CRLF tolerant). std-only.
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.trim_start_matches('\u{feff}').chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // "" inside quotes
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == sep && !in_quotes => {
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                if !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Trailing row without newline (also when quotes were left open)
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

/// Dataset files carry a header row; it is the first row naming the Structure column.
pub fn split_headers(mut rows: Vec<Vec<String>>) -> (Option<Vec<String>>, Vec<Vec<String>>) {
    let is_header = rows
        .first()
        .map(|r| r.iter().any(|c| c.trim() == STRUCTURE_COL))
        .unwrap_or(false);
    if is_header {
        let header = rows.remove(0).into_iter().map(|c| c.trim().to_string()).collect();
        return (Some(header), rows);
    }
    (None, rows)
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
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

/// Whole table as one string (clipboard / stdout / file export).
pub fn to_export_string(
    headers: &Option<Vec<String>>,
    rows: &[Vec<String>],
    include_headers: bool,
    sep: char,
) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if include_headers {
        if let Some(h) = headers {
            let _ = write_row(&mut buf, h, sep);
        }
    }
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_quoted_structure_values() {
        let text = "Structure,VALUE_TENURE,Total\r\n\"Single-Family Detached(Own,Rent) , 0-1 BR\",All,1.25\n";
        let rows = parse_rows(text, ',');
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][0], "Single-Family Detached(Own,Rent) , 0-1 BR");
        assert_eq!(rows[1][2], "1.25");
    }

    #[test]
    fn parses_escaped_quotes_and_missing_trailing_newline() {
        let rows = parse_rows("a,\"b \"\"x\"\"\"\nc,d", ',');
        assert_eq!(rows, vec![strings!["a", "b \"x\""], strings!["c", "d"]]);
    }

    #[test]
    fn skips_blank_lines() {
        let rows = parse_rows("a,b\n\n\nc,d\n", ',');
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn header_row_detected_by_structure_column() {
        let (h, r) = split_headers(vec![strings!["Structure ", "Total"], strings!["x", "1"]]);
        assert_eq!(h, Some(strings!["Structure", "Total"]));
        assert_eq!(r.len(), 1);

        let (h, r) = split_headers(vec![strings!["x", "1"]]);
        assert!(h.is_none());
        assert_eq!(r.len(), 1);
    }

    #[test]
    fn writer_quotes_only_when_needed() {
        let s = to_export_string(
            &Some(strings!["Structure", "Total"]),
            &[strings!["5-49 Units (Own,Rent) 2 BR", "3"]],
            true,
            ',',
        );
        assert_eq!(s, "Structure,Total\n\"5-49 Units (Own,Rent) 2 BR\",3\n");

        let t = to_export_string(&None, &[strings!["a,b", "c"]], true, '\t');
        assert_eq!(t, "a,b\tc\n");
    }
}
