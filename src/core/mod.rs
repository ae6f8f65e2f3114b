// src/core/mod.rs

pub mod catalog;
pub mod sanitize;
pub mod structure;

pub use catalog::{ CombinedOption, COMBINED_OPTIONS };
pub use structure::{ HousingType, StructureTriple, Tenure };
