// src/runner.rs
//
// One interaction cycle, front-end agnostic:
//   lookup dataset → normalize/decompose all rows → filter by combined option
//   → reconstruct key → filter by bedrooms (+ value bracket) → project columns.
// A missing file or an empty result is reported as `TableOutcome::NoData`.

use std::error::Error;
use std::fmt;
use std::path::PathBuf;

use crate::{
    config::options::BrowseOptions,
    core::{ catalog::{ self, CombinedOption, COMBINED_OPTIONS }, structure },
    data::{ RawData, SelectionView, StructureFilter },
    store::{ self, Lookup },
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NoData {
    /// No file for this (state, category, unit type)
    MissingFile(PathBuf),
    /// The file exists but nothing matches the structure selection
    NoMatchingRows { key: String },
}

impl fmt::Display for NoData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoData::MissingFile(p) => write!(f, "No data available: {} does not exist", p.display()),
            NoData::NoMatchingRows { key } => write!(f, "No data available for {key}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableOutcome {
    Rows { headers: Option<Vec<String>>, rows: Vec<Vec<String>> },
    NoData(NoData),
}

/// Structure part of a query as typed by a user (CLI) or picked in the GUI.
#[derive(Clone, Debug, Default)]
pub struct Query {
    /// 1-based catalog index or exact/case-insensitive label; None = first option
    pub structure: Option<String>,
    /// Canonical token or display label ("Studio-1BR"); None = all
    pub bedrooms: Option<String>,
    pub value_tenure: Option<String>,
}

/// Resolve "4" or "Midsize (5-49 units) Multifamily (Own tenure alone)".
pub fn resolve_option(input: &str) -> Option<&'static CombinedOption> {
    let input = input.trim();
    if let Ok(n) = input.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| COMBINED_OPTIONS.get(i));
    }
    catalog::option_by_label(input)
        .or_else(|| COMBINED_OPTIONS.iter().find(|o| o.label.eq_ignore_ascii_case(input)))
}

impl Query {
    pub fn to_filter(&self) -> Result<StructureFilter, Box<dyn Error>> {
        let option = match &self.structure {
            Some(s) => resolve_option(s).ok_or_else(|| format!("Unknown structure option: {s}"))?,
            None => &COMBINED_OPTIONS[0],
        };
        Ok(StructureFilter {
            option,
            bedroom_range: self.bedrooms.as_deref().map(|b| s!(structure::bedroom_from_display(b))),
            value_tenure: self.value_tenure.as_deref().map(|v| s!(v.trim())),
        })
    }
}

/// Load the dataset for `opts`; the inner `Err` is the "no file" outcome.
pub fn load_raw(opts: &BrowseOptions) -> Result<Result<RawData, NoData>, Box<dyn Error>> {
    Ok(match store::load_dataset(opts)? {
        Lookup::Loaded(ds) => Ok(RawData::new(ds)),
        Lookup::NoData { path } => Err(NoData::MissingFile(path)),
    })
}

/// Filter + project an already loaded dataset.
pub fn table_for(raw: &RawData, filter: &StructureFilter, opts: &BrowseOptions) -> TableOutcome {
    let view = SelectionView::from_raw(raw, filter);
    if view.is_empty() {
        let key = filter.key().unwrap_or_else(|| s!(filter.option.label));
        logd!("Run: No rows for {:?} in {}", key, opts.dataset_file_name());
        return TableOutcome::NoData(NoData::NoMatchingRows { key });
    }
    let (headers, rows) = view.project(opts.category);
    logf!("Run: {} rows for {:?}", rows.len(), filter.key().as_deref().unwrap_or(filter.option.label));
    TableOutcome::Rows { headers, rows }
}

/// Full cycle from options + query.
pub fn run(opts: &BrowseOptions, query: &Query) -> Result<TableOutcome, Box<dyn Error>> {
    let filter = query.to_filter()?;
    match load_raw(opts)? {
        Ok(raw) => Ok(table_for(&raw, &filter, opts)),
        Err(no_data) => Ok(TableOutcome::NoData(no_data)),
    }
}
