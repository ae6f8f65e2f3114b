// src/file.rs

use std::{
    fs,
    path::{ Path, PathBuf },
};

use crate::config::options::ExportOptions;
use crate::csv::to_export_string;

/// Write the (already filtered + projected) table to `export.out_path()`.
/// Returns the final path written to.
pub fn write_export(
    export: &ExportOptions,
    headers: &Option<Vec<String>>,
    rows: &[Vec<String>],
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let contents = to_export_string(headers, rows, export.include_headers, export.delim());
    fs::write(&path, contents)?;
    logf!("Export: Wrote {} rows → {}", rows.len(), path.display());
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// Default export stem for a selection, e.g. `DM_pop_TEXAS_ALLunits_5-49_Units_Own_2_BR`.
pub fn default_stem(dataset_file: &str, key: Option<&str>) -> String {
    let base = Path::new(dataset_file)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let raw = match key {
        Some(k) => join!(&base, " ", k),
        None => base,
    };
    crate::core::sanitize::sanitize_filename(&raw, crate::config::consts::DEFAULT_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_stem_includes_key() {
        assert_eq!(
            default_stem("DM_pop_TEXAS_ALLunits.csv", Some("5-49 Units (Own) 2 BR")),
            "DM_pop_TEXAS_ALLunits_5-49_Units_Own_2_BR"
        );
        assert_eq!(default_stem("DM_sac_NEW YORK_NEWERunits.csv", None), "DM_sac_NEW_YORK_NEWERunits");
        assert_eq!(default_stem("", None), "table");
    }
}
