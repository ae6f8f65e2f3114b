// tests/export_e2e.rs
use std::fs;
use std::path::PathBuf;

use housing_browser::config::options::{ ExportFormat, ExportOptions };
use housing_browser::file;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("housing_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn table() -> (Option<Vec<String>>, Vec<Vec<String>>) {
    let headers = Some(vec!["Structure".into(), "VALUE_TENURE".into(), "Total".into()]);
    let rows = vec![
        vec!["5-49 Units (Own) 2 BR".into(), "Less than $100k".into(), "1.72".into()],
        vec!["5-49 Units (Own) 2 BR".into(), "$100k, or more".into(), "1.80".into()],
    ];
    (headers, rows)
}

#[test]
fn csv_export_quotes_commas_and_keeps_headers() {
    let dir = tmp_dir("csv");
    let mut export = ExportOptions::default();
    export.set_path(dir.join("texas").to_str().unwrap());

    let (headers, rows) = table();
    let written = file::write_export(&export, &headers, &rows).unwrap();
    assert!(written.to_string_lossy().ends_with("texas.csv"));

    let text = fs::read_to_string(&written).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Structure,VALUE_TENURE,Total");
    assert_eq!(lines[2], "5-49 Units (Own) 2 BR,\"$100k, or more\",1.80");
}

#[test]
fn user_extension_survives_format_change() {
    let dir = tmp_dir("ext");
    let mut export = ExportOptions::default();
    export.set_path(dir.join("hello.txt").to_str().unwrap());
    export.format = ExportFormat::Tsv;
    export.include_headers = false;

    let (headers, rows) = table();
    let written = file::write_export(&export, &headers, &rows).unwrap();
    assert!(written.to_string_lossy().ends_with("hello.txt"));

    let text = fs::read_to_string(&written).unwrap();
    assert_eq!(text.lines().count(), 2);
    assert!(text.starts_with("5-49 Units (Own) 2 BR\tLess than $100k\t1.72"));
}

#[test]
fn export_creates_missing_directories() {
    let dir = tmp_dir("nested");
    let mut export = ExportOptions::default();
    export.set_path(dir.join("a").join("b").join("out.csv").to_str().unwrap());

    let (headers, rows) = table();
    let written = file::write_export(&export, &headers, &rows).unwrap();
    assert!(written.exists());
}
