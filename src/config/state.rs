// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Index into core::catalog::COMBINED_OPTIONS
    pub option_index: usize,

    /// Selected bedroom range (canonical token, not the display label)
    pub bedroom_range: Option<String>,

    /// Selected VALUE_TENURE bracket; None = all
    pub value_tenure: Option<String>,

    pub window_w: u32,
    pub window_h: u32,

    pub show_map: bool,
    pub show_glossary: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            option_index: 0,
            bedroom_range: None,
            value_tenure: None,
            window_w: 1200,
            window_h: 760,
            show_map: true,
            show_glossary: false,
        }
    }
}

impl GuiState {
    /// Upstream selection changed: downstream dropdowns start over.
    pub fn reset_structure_filters(&mut self) {
        self.bedroom_range = None;
        self.value_tenure = None;
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
