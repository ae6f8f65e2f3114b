// src/data.rs
//
// Canonical and view-layer table data.
//
// - RawData: the loaded dataset plus the per-row canonical Structure keys and
//            their decomposed triples. Built once per (state, category, units).
// - StructureFilter: the cascading user choice (combined option → bedrooms →
//                    value bracket).
// - SelectionView: row indexes into RawData that survive the filter, with the
//                  category's column projection applied on materialization.

use crate::config::consts::{ STRUCTURE_COL, VALUE_TENURE_COL };
use crate::config::options::Category;
use crate::core::catalog::{ self, CombinedOption };
use crate::core::structure::{ self, StructureTriple };
use crate::store::DataSet;

#[derive(Clone, Debug)]
pub struct RawData {
    ds: DataSet,
    /// Canonical Structure key per row ("" when the cell is missing)
    keys: Vec<String>,
    /// Decomposed triple per row; None = excluded from the catalog
    row_triples: Vec<Option<StructureTriple>>,
    /// Distinct decomposable triples, first-seen order
    triples: Vec<StructureTriple>,
}

impl RawData {
    pub fn new(ds: DataSet) -> Self {
        let col = ds.column(STRUCTURE_COL);

        let keys: Vec<String> = ds
            .rows
            .iter()
            .map(|r| {
                col.and_then(|c| r.get(c))
                    .map(|v| structure::normalize(v))
                    .unwrap_or_default()
            })
            .collect();

        let row_triples: Vec<Option<StructureTriple>> =
            keys.iter().map(|k| structure::decompose(k)).collect();

        let mut triples: Vec<StructureTriple> = Vec::new();
        let mut excluded = 0usize;
        for (key, t) in keys.iter().zip(&row_triples) {
            match t {
                Some(t) => {
                    if !triples.contains(t) { triples.push(t.clone()); }
                }
                None => {
                    excluded += 1;
                    logd!("Data: Structure {:?} does not decompose, excluded", key);
                }
            }
        }
        if excluded > 0 {
            logf!("Data: {} of {} rows excluded from structure catalog", excluded, keys.len());
        }

        Self { ds, keys, row_triples, triples }
    }

    pub fn dataset(&self) -> &DataSet { &self.ds }
    pub fn keys(&self) -> &[String] { &self.keys }
    pub fn triples(&self) -> &[StructureTriple] { &self.triples }

    /// Rows whose Structure did not decompose.
    pub fn excluded_rows(&self) -> usize {
        self.row_triples.iter().filter(|t| t.is_none()).count()
    }

    pub fn options(&self) -> &'static [CombinedOption] {
        catalog::options_for(&self.triples)
    }

    pub fn bedroom_ranges(&self, opt: &CombinedOption) -> Vec<String> {
        catalog::bedroom_ranges_for(&self.triples, opt)
    }

    /// Distinct VALUE_TENURE values among rows matching the structure part of `filter`.
    pub fn value_tenures(&self, filter: &StructureFilter) -> Vec<String> {
        let Some(col) = self.ds.column(VALUE_TENURE_COL) else { return Vec::new() };
        let structure_only = StructureFilter { value_tenure: None, ..filter.clone() };

        let mut out: Vec<String> = Vec::new();
        for i in structure_only.row_indices(self) {
            if let Some(v) = self.ds.cell(i, col) {
                let v = v.trim();
                if !v.is_empty() && !out.iter().any(|o| o == v) {
                    out.push(s!(v));
                }
            }
        }
        out
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StructureFilter {
    pub option: &'static CombinedOption,
    /// Canonical bedroom token; None = every bedroom range under the option
    pub bedroom_range: Option<String>,
    /// VALUE_TENURE bracket; None = all
    pub value_tenure: Option<String>,
}

impl StructureFilter {
    pub fn new(option: &'static CombinedOption) -> Self {
        Self { option, bedroom_range: None, value_tenure: None }
    }

    /// The canonical key this filter selects, when a bedroom range is chosen.
    pub fn key(&self) -> Option<String> {
        self.bedroom_range
            .as_deref()
            .map(|b| structure::reconstruct(self.option.housing_type, self.option.tenure, b))
    }

    pub fn row_indices(&self, raw: &RawData) -> Vec<usize> {
        let key = self.key();
        let value_col = raw.ds.column(VALUE_TENURE_COL);

        (0..raw.keys.len())
            .filter(|&i| match &key {
                Some(k) => raw.keys[i] == *k,
                None => raw.row_triples[i].as_ref().map(|t| self.option.matches(t)).unwrap_or(false),
            })
            .filter(|&i| match (&self.value_tenure, value_col) {
                (Some(want), Some(c)) => raw.ds.cell(i, c).map(|v| v.trim() == want).unwrap_or(false),
                (Some(_), None) => false,
                (None, _) => true,
            })
            .collect()
    }
}

/// Zero-copy filtered view for display.
#[derive(Clone, Debug)]
pub struct SelectionView<'a> {
    /// Positions of kept rows in the raw dataset
    pub row_ix: Vec<usize>,
    raw: &'a DataSet,
}

impl<'a> SelectionView<'a> {
    pub fn from_raw(raw: &'a RawData, filter: &StructureFilter) -> Self {
        Self { row_ix: filter.row_indices(raw), raw: raw.dataset() }
    }

    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    pub fn row(&self, i: usize) -> Option<&[String]> {
        self.row_ix.get(i).and_then(|&ix| self.raw.rows.get(ix).map(|r| r.as_slice()))
    }

    /// Materialize headers + rows with the category's column layout.
    pub fn project(&self, category: Category) -> (Option<Vec<String>>, Vec<Vec<String>>) {
        let cols = projection(self.raw, category);
        let headers = self.raw.headers.as_ref().map(|h| {
            cols.iter().map(|&c| h.get(c).cloned().unwrap_or_default()).collect()
        });
        let rows = self
            .row_ix
            .iter()
            .filter_map(|&ix| self.raw.rows.get(ix))
            .map(|r| cols.iter().map(|&c| r.get(c).cloned().unwrap_or_default()).collect())
            .collect();
        (headers, rows)
    }
}

/// Source column indexes to show for `category`: the category's listed columns
/// that exist in the file, in listed order, then every other column in file order.
pub fn projection(ds: &DataSet, category: Category) -> Vec<usize> {
    let width = ds
        .headers
        .as_ref()
        .map(|h| h.len())
        .or_else(|| ds.rows.first().map(|r| r.len()))
        .unwrap_or(0);

    let mut cols: Vec<usize> = Vec::with_capacity(width);
    for ix in category.columns().iter().filter_map(|name| ds.column(name)) {
        if !cols.contains(&ix) { cols.push(ix); }
    }
    let rest: Vec<usize> = (0..width).filter(|ix| !cols.contains(ix)).collect();
    cols.extend(rest);
    cols
}
