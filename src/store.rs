// src/store.rs
//
// Dataset files on disk: one pre-computed table per (state, category, unit type).
// A missing file is a normal outcome ("no data"), not an error.

use std::{ error::Error, fs, io, path::{ Path, PathBuf } };

use crate::config::options::BrowseOptions;
use crate::csv::{ parse_rows, split_headers };

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn row_count(&self) -> usize { self.rows.len() }
    pub fn header_count(&self) -> usize { self.headers.as_ref().map(|h| h.len()).unwrap_or(0) }

    /// Position of a named column (exact match after trimming).
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.as_ref()?.iter().position(|h| h.trim() == name)
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(|s| s.as_str())
    }
}

/// Result of looking up a dataset for a selection.
#[derive(Debug)]
pub enum Lookup {
    Loaded(DataSet),
    NoData { path: PathBuf },
}

pub fn parse_dataset(text: &str) -> DataSet {
    let (headers, rows) = split_headers(parse_rows(text, ','));
    DataSet { headers, rows }
}

pub fn load_from_path(path: &Path) -> Result<Lookup, Box<dyn Error>> {
    let bytes = match fs::read(path) {
        Ok(b) => b,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            logd!("Store: Missing {}", path.display());
            return Ok(Lookup::NoData { path: path.to_path_buf() });
        }
        Err(e) => return Err(format!("Failed to read {}: {e}", path.display()).into()),
    };

    let text = match String::from_utf8(bytes) {
        Ok(t) => t,
        Err(e) => {
            logd!("Store: {} is not valid UTF-8, decoding lossily", path.display());
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    };

    let ds = parse_dataset(&text);
    if ds.headers.is_none() {
        return Err(format!("{}: no header row with a Structure column", path.display()).into());
    }
    logf!(
        "Store: Loaded {} (rows={}, headers={})",
        path.display(),
        ds.row_count(),
        ds.header_count()
    );
    Ok(Lookup::Loaded(ds))
}

/// Resolve the selection to its file name under `data_dir` and load it.
pub fn load_dataset(opts: &BrowseOptions) -> Result<Lookup, Box<dyn Error>> {
    load_from_path(&opts.dataset_path())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_dataset_keeps_header_and_rows() {
        let ds = parse_dataset("Structure,VALUE_TENURE,Total\n\"2-4 Units (Own,Rent) 2 BR\",All,0.5\n");
        assert_eq!(ds.column("Total"), Some(2));
        assert_eq!(ds.column("Missing"), None);
        assert_eq!(ds.cell(0, 0), Some("2-4 Units (Own,Rent) 2 BR"));
        assert_eq!(ds.row_count(), 1);
    }

    #[test]
    fn latin1_bytes_load_lossily() {
        let p = std::env::temp_dir().join("housing_browser_latin1.csv");
        fs::write(&p, b"Structure,VALUE_TENURE\n5-49 Units (Own) 2 BR,Se\xf1or\n").unwrap();
        match load_from_path(&p).unwrap() {
            Lookup::Loaded(ds) => {
                assert_eq!(ds.row_count(), 1);
                assert_eq!(ds.cell(0, 1), Some("Se\u{fffd}or"));
            }
            Lookup::NoData { .. } => panic!("file was written"),
        }
    }

    #[test]
    fn missing_file_is_no_data() {
        let p = std::env::temp_dir().join("housing_browser_definitely_missing.csv");
        let _ = fs::remove_file(&p);
        match load_from_path(&p).unwrap() {
            Lookup::NoData { path } => assert_eq!(path, p),
            Lookup::Loaded(_) => panic!("expected NoData"),
        }
    }
}
