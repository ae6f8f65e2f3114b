// tests/dataset_lookup.rs
use std::fs;
use std::path::PathBuf;

use housing_browser::config::options::{ BrowseOptions, Category, UnitType };
use housing_browser::runner::{ self, NoData, Query, TableOutcome };
use housing_browser::store::{ self, Lookup };

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("housing_lookup_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

const TEXAS_POP: &str = "\
Structure,VALUE_TENURE,value_range,Total,Age 0-4,Age 5-17,Age 18-34,Age 35-64,Age 65+,Notes
\"Single-Family Detached(Own,Rent) , 0-1 BR\",All,All,0.91,0.05,0.10,0.40,0.30,0.06,n
\"5-49 Units (Own) 2 BR\",Less than $100k,0-100k,1.72,0.12,0.30,0.60,0.50,0.20,n
\"5-49 Units ( Own ),2 BR\",$100k or more,100k+,1.80,0.13,0.31,0.61,0.52,0.23,n
\"5-49 Units (Rent) 2 BR\",All,All,1.45,0.15,0.25,0.55,0.40,0.10,n
All Housing Types,All,All,2.10,0.20,0.40,0.70,0.60,0.20,n
";

fn texas(dir: &PathBuf) -> BrowseOptions {
    BrowseOptions {
        state: "Texas".into(),
        unit_type: UnitType::AllUnits,
        category: Category::PersonsByAge,
        data_dir: dir.clone(),
    }
}

#[test]
fn missing_file_is_no_data() {
    let dir = tmp_dir("missing");
    let opts = BrowseOptions {
        state: "Wyoming".into(),
        unit_type: UnitType::NewerUnits,
        category: Category::SchoolAgeChildren,
        data_dir: dir.clone(),
    };
    assert_eq!(opts.dataset_file_name(), "DM_sac_WYOMING_NEWERunits.csv");

    match store::load_dataset(&opts).unwrap() {
        Lookup::NoData { path } => assert_eq!(path, dir.join("DM_sac_WYOMING_NEWERunits.csv")),
        Lookup::Loaded(_) => panic!("nothing was written"),
    }

    let out = runner::run(&opts, &Query::default()).unwrap();
    match out {
        TableOutcome::NoData(nd @ NoData::MissingFile(_)) => {
            assert!(nd.to_string().starts_with("No data available"));
        }
        other => panic!("expected missing file, got {other:?}"),
    }
}

#[test]
fn midsize_own_two_bedrooms_full_cycle() {
    let dir = tmp_dir("texas");
    let opts = texas(&dir);
    fs::write(dir.join("DM_pop_TEXAS_ALLunits.csv"), TEXAS_POP).unwrap();

    let query = Query {
        structure: Some("Midsize (5-49 units) Multifamily (Own tenure alone)".into()),
        bedrooms: Some("2 BR".into()),
        value_tenure: None,
    };
    match runner::run(&opts, &query).unwrap() {
        TableOutcome::Rows { headers, rows } => {
            let headers = headers.unwrap();
            assert_eq!(headers.len(), 10);
            assert_eq!(headers.last().map(|h| h.as_str()), Some("Notes"));
            assert_eq!(rows.len(), 2);
            assert_eq!(rows[0][3], "1.72");
            assert_eq!(rows[1][3], "1.80");
        }
        other => panic!("expected rows, got {other:?}"),
    }

    let with_value = Query { value_tenure: Some("$100k or more".into()), ..query };
    match runner::run(&opts, &with_value).unwrap() {
        TableOutcome::Rows { rows, .. } => assert_eq!(rows.len(), 1),
        other => panic!("expected one row, got {other:?}"),
    }
}

#[test]
fn studio_display_label_selects_zero_one_bedrooms() {
    let dir = tmp_dir("studio");
    let opts = texas(&dir);
    fs::write(dir.join("DM_pop_TEXAS_ALLunits.csv"), TEXAS_POP).unwrap();

    let query = Query {
        structure: Some("1".into()),
        bedrooms: Some("Studio-1BR".into()),
        value_tenure: None,
    };
    match runner::run(&opts, &query).unwrap() {
        TableOutcome::Rows { rows, .. } => {
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0][3], "0.91");
        }
        other => panic!("expected rows, got {other:?}"),
    }
}

#[test]
fn option_without_rows_in_file_is_no_data() {
    let dir = tmp_dir("large");
    let opts = texas(&dir);
    fs::write(dir.join("DM_pop_TEXAS_ALLunits.csv"), TEXAS_POP).unwrap();

    let query = Query {
        structure: Some("Large (50+ units) Multifamily (Rent tenure alone)".into()),
        bedrooms: Some("2 BR".into()),
        value_tenure: None,
    };
    match runner::run(&opts, &query).unwrap() {
        TableOutcome::NoData(NoData::NoMatchingRows { key }) => assert_eq!(key, "50+ Units (Rent) 2 BR"),
        other => panic!("expected no matching rows, got {other:?}"),
    }
}

#[test]
fn loaded_dataset_excludes_unrecognized_structures() {
    let dir = tmp_dir("excluded");
    let opts = texas(&dir);
    fs::write(dir.join("DM_pop_TEXAS_ALLunits.csv"), TEXAS_POP).unwrap();

    let raw = runner::load_raw(&opts).unwrap().unwrap();
    assert_eq!(raw.dataset().row_count(), 5);
    assert_eq!(raw.excluded_rows(), 1);
    assert_eq!(raw.triples().len(), 3);
    assert_eq!(raw.options().len(), 9);
}

#[test]
fn file_without_structure_header_is_an_error() {
    let dir = tmp_dir("bad_header");
    let opts = texas(&dir);
    fs::write(dir.join("DM_pop_TEXAS_ALLunits.csv"), "a,b\n1,2\n").unwrap();
    assert!(store::load_dataset(&opts).is_err());
}
