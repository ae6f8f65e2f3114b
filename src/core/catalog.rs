// src/core/catalog.rs
//
// Fixed catalog of combined (housing type × tenure) choices offered to the user,
// plus the cascading helpers that feed the bedroom dropdown.

use super::structure::{ HousingType::{ self, * }, StructureTriple, Tenure::{ self, * } };

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CombinedOption {
    pub label: &'static str,
    pub housing_type: HousingType,
    pub tenure: Tenure,
}

impl CombinedOption {
    const fn new(label: &'static str, housing_type: HousingType, tenure: Tenure) -> Self {
        Self { label, housing_type, tenure }
    }

    pub fn matches(&self, t: &StructureTriple) -> bool {
        t.housing_type == self.housing_type && t.tenure == self.tenure
    }
}

pub static COMBINED_OPTIONS: [CombinedOption; 9] = [
    CombinedOption::new("Single-Family Detached (Own or Rent)",               SingleFamilyDetached, OwnOrRent),
    CombinedOption::new("Single-Family Attached (Own or Rent)",               SingleFamilyAttached, OwnOrRent),
    CombinedOption::new("Small (2-4 units) Multifamily (Own or Rent)",        Units2to4,            OwnOrRent),
    CombinedOption::new("Midsize (5-49 units) Multifamily (Own tenure alone)", Units5to49,          Own),
    CombinedOption::new("Midsize (5-49 units) Multifamily (Rent tenure alone)", Units5to49,         Rent),
    CombinedOption::new("Large (50+ units) Multifamily (Own tenure alone)",    Units50Plus,          Own),
    CombinedOption::new("Large (50+ units) Multifamily (Rent tenure alone)",   Units50Plus,          Rent),
    CombinedOption::new("All Housing Types (Own tenure alone)",                AllHousingTypes,      Own),
    CombinedOption::new("All Housing Types (Rent tenure alone)",               AllHousingTypes,      Rent),
];

/// The catalog does not depend on what the dataset holds; every option is
/// always offered and an empty result is reported downstream as "no data".
pub fn options_for(_triples: &[StructureTriple]) -> &'static [CombinedOption] {
    &COMBINED_OPTIONS
}

/// Lookup by exact label.
pub fn option_by_label(label: &str) -> Option<&'static CombinedOption> {
    COMBINED_OPTIONS.iter().find(|o| o.label == label)
}

/// Distinct bedroom ranges available under `opt`, first-seen order.
pub fn bedroom_ranges_for(triples: &[StructureTriple], opt: &CombinedOption) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for t in triples.iter().filter(|t| opt.matches(t)) {
        if !out.contains(&t.bedroom_range) {
            out.push(t.bedroom_range.clone());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::structure::decompose;

    #[test]
    fn catalog_is_fixed_and_valid() {
        let opts = options_for(&[]);
        assert_eq!(opts.len(), 9);
        for o in opts {
            assert!(o.housing_type.accepts(o.tenure), "{}", o.label);
        }
    }

    #[test]
    fn midsize_own_maps_to_units_5_to_49() {
        let o = option_by_label("Midsize (5-49 units) Multifamily (Own tenure alone)").unwrap();
        assert_eq!((o.housing_type, o.tenure), (Units5to49, Own));
    }

    #[test]
    fn bedroom_ranges_follow_selected_option() {
        let triples: Vec<_> = [
            "5-49 Units (Own) 0-1 BR",
            "5-49 Units (Own) 2 BR",
            "5-49 Units (Rent) 3+ BR",
            "5-49 Units (Own) 2 BR",
        ]
        .iter()
        .filter_map(|k| decompose(k))
        .collect();

        let own = option_by_label("Midsize (5-49 units) Multifamily (Own tenure alone)").unwrap();
        assert_eq!(bedroom_ranges_for(&triples, own), vec!["0-1 BR", "2 BR"]);

        let large = option_by_label("Large (50+ units) Multifamily (Rent tenure alone)").unwrap();
        assert!(bedroom_ranges_for(&triples, large).is_empty());
    }
}
