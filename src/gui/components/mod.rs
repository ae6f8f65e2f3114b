// src/gui/components/mod.rs
pub mod data_table;
pub mod export_bar;
pub mod glossary;
pub mod map_view;
pub mod selector_panel;
pub mod structure_bar;
