// src/core/structure.rs
//
// Structure keys: the dataset's free-form "Structure" column, e.g.
//   "Single-Family Detached(Own,Rent) , 0-1 BR"
// normalized to the canonical shape
//   "<Type> (<Tenure>) <Bedroom range>"
// and decomposed into a (type, tenure, bedrooms) triple and back.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::sanitize::normalize_ws;

static OPEN_PAREN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*\(\s*").unwrap());
static CLOSE_PAREN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*\)[\s,]*").unwrap());

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HousingType {
    SingleFamilyDetached,
    SingleFamilyAttached,
    Units2to4,
    Units5to49,
    Units50Plus,
    AllHousingTypes,
}

impl HousingType {
    pub const ALL: [HousingType; 6] = [
        HousingType::SingleFamilyDetached,
        HousingType::SingleFamilyAttached,
        HousingType::Units2to4,
        HousingType::Units5to49,
        HousingType::Units50Plus,
        HousingType::AllHousingTypes,
    ];

    /// Label as it appears inside canonical keys.
    pub fn label(self) -> &'static str {
        match self {
            HousingType::SingleFamilyDetached => "Single-Family Detached",
            HousingType::SingleFamilyAttached => "Single-Family Attached",
            HousingType::Units2to4            => "2-4 Units",
            HousingType::Units5to49           => "5-49 Units",
            HousingType::Units50Plus          => "50+ Units",
            HousingType::AllHousingTypes      => "All Housing Types",
        }
    }

    /// Case-sensitive match against the canonical label.
    pub fn from_label(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == s)
    }

    /// True when the catalog offers Own and Rent separately. Single-family and
    /// 2-4 unit types carry the combined "Own,Rent" tenure instead.
    pub fn separates_tenure(self) -> bool {
        !matches!(
            self,
            HousingType::SingleFamilyDetached
                | HousingType::SingleFamilyAttached
                | HousingType::Units2to4
        )
    }

    pub fn accepts(self, tenure: Tenure) -> bool {
        match tenure {
            Tenure::OwnOrRent => !self.separates_tenure(),
            Tenure::Own | Tenure::Rent => self.separates_tenure(),
        }
    }
}

impl fmt::Display for HousingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tenure {
    Own,
    Rent,
    OwnOrRent,
}

impl Tenure {
    pub const ALL: [Tenure; 3] = [Tenure::Own, Tenure::Rent, Tenure::OwnOrRent];

    pub fn label(self) -> &'static str {
        match self {
            Tenure::Own       => "Own",
            Tenure::Rent      => "Rent",
            Tenure::OwnOrRent => "Own,Rent",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == s)
    }
}

impl fmt::Display for Tenure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StructureTriple {
    pub housing_type: HousingType,
    pub tenure: Tenure,
    pub bedroom_range: String,
}

impl StructureTriple {
    pub fn key(&self) -> String {
        reconstruct(self.housing_type, self.tenure, &self.bedroom_range)
    }
}

/// Canonicalize a raw Structure value. Idempotent.
///
/// - whitespace around `(` becomes exactly one space before it
/// - whitespace before `)` is dropped; commas/whitespace after it become one space
/// - remaining whitespace runs collapse, ends are trimmed
///
/// Values without a parenthesized group only get the whitespace pass.
pub fn normalize(raw: &str) -> String {
    let s = OPEN_PAREN.replace_all(raw, " (");
    let s = CLOSE_PAREN.replace_all(&s, ") ");
    normalize_ws(&s)
}

/// Split a canonical key into its triple.
/// `None` when the shape is off or the type/tenure text is not a known label.
pub fn decompose(key: &str) -> Option<StructureTriple> {
    let (head, rest) = key.split_once('(')?;
    if rest.matches(')').count() != 1 {
        return None;
    }
    let (tenure, bedrooms) = rest.split_once(')')?;

    let housing_type = HousingType::from_label(head.trim())?;
    let tenure = Tenure::from_label(tenure.trim())?;

    Some(StructureTriple {
        housing_type,
        tenure,
        bedroom_range: bedrooms.trim().to_string(),
    })
}

/// Inverse of `decompose`: the exact key used to filter the dataset.
pub fn reconstruct(housing_type: HousingType, tenure: Tenure, bedroom_range: &str) -> String {
    let bedrooms = bedroom_range.trim();
    if bedrooms.is_empty() {
        format!("{} ({})", housing_type.label(), tenure.label())
    } else {
        format!("{} ({}) {}", housing_type.label(), tenure.label(), bedrooms)
    }
}

/// "0-1 BR" reads better as "Studio-1BR"; everything else is shown as-is.
pub fn display_label(range: &str) -> &str {
    if range == "0-1 BR" { "Studio-1BR" } else { range }
}

/// Inverse of `display_label`, for typed input.
pub fn bedroom_from_display(label: &str) -> &str {
    let label = label.trim();
    if label.eq_ignore_ascii_case("Studio-1BR") { "0-1 BR" } else { label }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_fixes_spacing_around_parens() {
        assert_eq!(
            normalize("Single-Family Detached(Own,Rent) , 0-1 BR"),
            "Single-Family Detached (Own,Rent) 0-1 BR"
        );
        assert_eq!(
            normalize("Single-Family Detached ( Own ) 2 BR"),
            "Single-Family Detached (Own) 2 BR"
        );
        assert_eq!(normalize("  50+ Units   (Rent),3+ BR  "), "50+ Units (Rent) 3+ BR");
    }

    #[test]
    fn normalize_without_group_only_trims() {
        assert_eq!(normalize("All Housing Types"), "All Housing Types");
        assert_eq!(normalize("  All  Housing Types "), "All Housing Types");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn normalize_twice_is_noop_on_odd_inputs() {
        for raw in [")) ,, (", "a( ) ,b", "(x)(y)", "a ) , , b", "((a", " ,) (, "] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once, "input: {raw:?}");
        }
    }

    #[test]
    fn decompose_splits_known_labels() {
        let t = decompose("5-49 Units (Own) 2 BR").unwrap();
        assert_eq!(t.housing_type, HousingType::Units5to49);
        assert_eq!(t.tenure, Tenure::Own);
        assert_eq!(t.bedroom_range, "2 BR");

        let t = decompose("Single-Family Detached (Own,Rent) 0-1 BR").unwrap();
        assert_eq!(t.housing_type, HousingType::SingleFamilyDetached);
        assert_eq!(t.tenure, Tenure::OwnOrRent);
    }

    #[test]
    fn decompose_rejects_bad_shapes() {
        assert_eq!(decompose("All Housing Types"), None);
        assert_eq!(decompose("50+ Units (Own) (Rent) 2 BR"), None);
        assert_eq!(decompose("50+ Units (Own 2 BR"), None);
        assert_eq!(decompose("Mobile Home (Own) 2 BR"), None);
        assert_eq!(decompose("50+ Units (own) 2 BR"), None);
    }

    #[test]
    fn decompose_keeps_known_tenure_for_any_type() {
        let t = decompose(&normalize("Single-Family Detached (Own) 0-1 BR")).unwrap();
        assert_eq!((t.housing_type, t.tenure), (HousingType::SingleFamilyDetached, Tenure::Own));
        assert_eq!(t.bedroom_range, "0-1 BR");

        let t = decompose(&normalize("Single-Family Detached ( Own ) 2 BR")).unwrap();
        assert_eq!(t.key(), "Single-Family Detached (Own) 2 BR");

        let t = decompose("50+ Units (Own,Rent) 2 BR").unwrap();
        assert_eq!(t.tenure, Tenure::OwnOrRent);
    }

    #[test]
    fn reconstruct_inverts_decompose() {
        assert_eq!(reconstruct(HousingType::Units5to49, Tenure::Own, "2 BR"), "5-49 Units (Own) 2 BR");
        for key in [
            "Single-Family Attached (Own,Rent) 3+ BR",
            "All Housing Types (Rent) 0-1 BR",
            "2-4 Units (Own,Rent)",
        ] {
            let t = decompose(key).unwrap();
            assert_eq!(t.key(), key);
        }
    }

    #[test]
    fn display_label_only_renames_studio() {
        assert_eq!(display_label("0-1 BR"), "Studio-1BR");
        assert_eq!(display_label("2 BR"), "2 BR");
        assert_eq!(display_label("3+ BR"), "3+ BR");
        assert_eq!(display_label(""), "");
        assert_eq!(bedroom_from_display("studio-1br"), "0-1 BR");
        assert_eq!(bedroom_from_display(" 2 BR "), "2 BR");
    }
}
