// src/config/consts.rs

// Dataset lookup
pub const DEFAULT_DATA_DIR: &str = "data";
pub const DATASET_PREFIX: &str = "DM";
pub const DATASET_EXT: &str = "csv";

// Reference geography
pub const BOUNDARY_FILE: &str = "gz_2010_us_040_00_5m.json";

// Columns the selection logic relies on
pub const STRUCTURE_COL: &str = "Structure";
pub const VALUE_TENURE_COL: &str = "VALUE_TENURE";
pub const VALUE_RANGE_COL: &str = "value_range";

// Local state
pub const LOG_FILE: &str = ".store/debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "table";
