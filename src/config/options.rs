// src/config/options.rs
use std::ffi::OsString;
use std::path::{ Path, PathBuf };
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub browse: BrowseOptions,
    pub export: ExportOptions,
}

/// Housing-age bucket the tables were computed for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnitType {
    AllUnits,
    NewerUnits,
}

impl UnitType {
    pub const ALL: [UnitType; 2] = [UnitType::AllUnits, UnitType::NewerUnits];

    pub fn label(self) -> &'static str {
        match self { UnitType::AllUnits => "All units", UnitType::NewerUnits => "Newer units" }
    }

    /// Token used in dataset file names.
    pub fn file_token(self) -> &'static str {
        match self { UnitType::AllUnits => "ALLunits", UnitType::NewerUnits => "NEWERunits" }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().replace([' ', '-', '_'], "").as_str() {
            "all" | "allunits" => Some(UnitType::AllUnits),
            "newer" | "newerunits" => Some(UnitType::NewerUnits),
            _ => None,
        }
    }
}

/// Demographic category; each has its own file code and column layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    PersonsByAge,
    PublicSchoolChildren,
    SchoolAgeChildren,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::PersonsByAge,
        Category::PublicSchoolChildren,
        Category::SchoolAgeChildren,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::PersonsByAge         => "Persons by Age",
            Category::PublicSchoolChildren => "Public School Children",
            Category::SchoolAgeChildren    => "School Age Children",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Category::PersonsByAge         => "pop",
            Category::PublicSchoolChildren => "psc",
            Category::SchoolAgeChildren    => "sac",
        }
    }

    /// Columns shown for this category, in display order.
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            Category::PersonsByAge => &[
                STRUCTURE_COL, VALUE_TENURE_COL, VALUE_RANGE_COL,
                "Total", "Age 0-4", "Age 5-17", "Age 18-34", "Age 35-64", "Age 65+",
            ],
            Category::PublicSchoolChildren => &[
                STRUCTURE_COL, VALUE_TENURE_COL, VALUE_RANGE_COL,
                "Total", "Grades K-5", "Grades 6-8", "Grades 9-12",
            ],
            Category::SchoolAgeChildren => &[
                STRUCTURE_COL, VALUE_TENURE_COL, VALUE_RANGE_COL,
                "Total", "Ages 5-10", "Ages 11-13", "Ages 14-17",
            ],
        }
    }

    /// Accepts the file code or the label, case-insensitive.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL.into_iter().find(|c| c.code().eq_ignore_ascii_case(s) || c.label().eq_ignore_ascii_case(s))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowseOptions {
    pub state: String,
    pub unit_type: UnitType,
    pub category: Category,
    pub data_dir: PathBuf,
}

impl Default for BrowseOptions {
    fn default() -> Self {
        Self {
            state: s!("Alabama"),
            unit_type: UnitType::AllUnits,
            category: Category::PersonsByAge,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}

impl BrowseOptions {
    /// `DM_{category}_{STATE}_{ALLunits|NEWERunits}.csv`
    pub fn dataset_file_name(&self) -> String {
        format!(
            "{}_{}_{}_{}.{}",
            DATASET_PREFIX,
            self.category.code(),
            self.state.to_uppercase(),
            self.unit_type.file_token(),
            DATASET_EXT,
        )
    }

    pub fn dataset_path(&self) -> PathBuf {
        self.data_dir.join(self.dataset_file_name())
    }

    pub fn boundary_path(&self) -> PathBuf {
        self.data_dir.join(BOUNDARY_FILE)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Some(ExportFormat::Csv),
            "tsv" => Some(ExportFormat::Tsv),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    out_path: OutputPath,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: true,
            out_path: OutputPath::default(),
        }
    }
}

impl ExportOptions {
    /// `<dir>/<stem>.<ext>`; the extension follows the format unless the user typed one.
    pub fn out_path(&self) -> PathBuf {
        let stem = self.out_path.file_stem.to_string_lossy();
        let ext = match &self.out_path.ext {
            Some(ext) => ext.to_string_lossy().into_owned(),
            None => s!(self.format.ext()),
        };
        self.out_path.dir.join(join!(&*stem, ".", &ext))
    }

    /// Parse user text into dir + stem (+ explicit extension, if any).
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
        self.out_path.ext = p.extension().map(|e| e.to_os_string());
    }

    /// Replace only the stem, keeping dir and extension policy.
    pub fn set_file_stem(&mut self, stem: &str) {
        self.out_path.file_stem = OsString::from(stem);
    }

    pub fn delim(&self) -> char {
        self.format.delim()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString,
    ext: Option<OsString>,
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
            ext: None,
        }
    }
}
