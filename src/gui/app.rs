// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::{
    config::state::AppState,
    core::catalog::{ CombinedOption, COMBINED_OPTIONS },
    data::{ RawData, StructureFilter },
    file,
    geo::{ self, Boundaries },
    runner::{ self, NoData, TableOutcome },
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Housing Demographics Browser",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // dataset for the current (state, category, units); None = no file / load error
    pub raw: Option<RawData>,

    // why the table is empty, when it is
    pub no_data: Option<NoData>,

    // state outlines; None when the boundary file is missing or unreadable
    pub boundaries: Option<Boundaries>,

    // in-memory display (filtered + projected)
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    pub data_dir_text: String,
    pub status: String,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let data_dir_text = state.options.browse.data_dir.to_string_lossy().into_owned();
        let out_path_text = state.options.export.out_path().to_string_lossy().into_owned();

        let mut app = Self {
            state,
            raw: None,
            no_data: None,
            boundaries: None,
            headers: None,
            rows: Vec::new(),
            out_path_text,
            out_path_dirty: false,
            data_dir_text,
            status: s!("Idle"),
        };

        app.reload_boundaries();
        app.reload_dataset();
        logf!("Init: state={}, data_dir={}", app.state.options.browse.state, app.data_dir_text);
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    #[inline]
    pub fn current_option(&self) -> &'static CombinedOption {
        COMBINED_OPTIONS.get(self.state.gui.option_index).unwrap_or(&COMBINED_OPTIONS[0])
    }

    pub fn current_filter(&self) -> StructureFilter {
        StructureFilter {
            option: self.current_option(),
            bedroom_range: self.state.gui.bedroom_range.clone(),
            value_tenure: self.state.gui.value_tenure.clone(),
        }
    }

    pub fn bedroom_choices(&self) -> Vec<String> {
        self.raw.as_ref().map(|r| r.bedroom_ranges(self.current_option())).unwrap_or_default()
    }

    pub fn value_choices(&self) -> Vec<String> {
        self.raw.as_ref().map(|r| r.value_tenures(&self.current_filter())).unwrap_or_default()
    }

    pub fn map(&self) -> Option<geo::StateMap<'_>> {
        geo::map_for(&self.state.options.browse.state, self.boundaries.as_ref())
    }

    /* ---------- selection cascade ---------- */

    /// Boundary file lives next to the datasets.
    pub fn reload_boundaries(&mut self) {
        let path = self.state.options.browse.boundary_path();
        self.boundaries = match geo::load_boundaries(&path) {
            Ok(b) => Some(b),
            Err(e) => {
                logd!("Geo: {} ({})", path.display(), e);
                None
            }
        };
    }

    /// State / category / unit type changed: load the matching file, restart the cascade.
    pub fn reload_dataset(&mut self) {
        let browse = &self.state.options.browse;
        logf!("UI: Load {}", browse.dataset_file_name());

        self.state.gui.reset_structure_filters();
        match runner::load_raw(browse) {
            Ok(Ok(raw)) => {
                let skipped = raw.excluded_rows();
                self.raw = Some(raw);
                self.no_data = None;
                self.status = if skipped > 0 {
                    format!("Loaded {} ({} unrecognized structure row(s) skipped)", browse.dataset_file_name(), skipped)
                } else {
                    format!("Loaded {}", browse.dataset_file_name())
                };
            }
            Ok(Err(no_data)) => {
                self.raw = None;
                self.status = no_data.to_string();
                self.no_data = Some(no_data);
            }
            Err(e) => {
                loge!("UI: Load failed: {}", e);
                self.raw = None;
                self.no_data = None;
                self.status = format!("Error: {e}");
            }
        }
        self.select_default_bedrooms();
        self.rebuild_view();
    }

    /// Combined option changed: bedrooms and value bracket start over.
    pub fn select_option(&mut self, idx: usize) {
        if idx == self.state.gui.option_index { return; }
        self.state.gui.option_index = idx;
        self.state.gui.reset_structure_filters();
        logf!("UI: Structure option → {}", self.current_option().label);
        self.select_default_bedrooms();
        self.rebuild_view();
    }

    pub fn select_bedrooms(&mut self, range: Option<String>) {
        if range == self.state.gui.bedroom_range { return; }
        self.state.gui.bedroom_range = range;
        self.state.gui.value_tenure = None;
        self.rebuild_view();
    }

    pub fn select_value(&mut self, value: Option<String>) {
        if value == self.state.gui.value_tenure { return; }
        self.state.gui.value_tenure = value;
        self.rebuild_view();
    }

    fn select_default_bedrooms(&mut self) {
        self.state.gui.bedroom_range = self.bedroom_choices().into_iter().next();
    }

    /// Recompute the displayed table from raw + current filter.
    pub fn rebuild_view(&mut self) {
        let Some(raw) = self.raw.as_ref() else {
            self.headers = None;
            self.rows.clear();
            return;
        };

        let filter = self.current_filter();
        match runner::table_for(raw, &filter, &self.state.options.browse) {
            TableOutcome::Rows { headers, rows } => {
                self.headers = headers;
                self.rows = rows;
                self.no_data = None;
            }
            TableOutcome::NoData(no_data) => {
                self.headers = None;
                self.rows.clear();
                self.no_data = Some(no_data);
            }
        }

        if !self.out_path_dirty {
            let stem = file::default_stem(
                &self.state.options.browse.dataset_file_name(),
                filter.key().as_deref(),
            );
            self.state.options.export.set_file_stem(&stem);
            self.out_path_text = self.state.options.export.out_path().to_string_lossy().into_owned();
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("selection")
            .resizable(false)
            .show(ctx, |ui| {
                crate::gui::components::selector_panel::draw(ui, self);
            });

        if self.state.gui.show_map {
            egui::SidePanel::right("map")
                .default_width(340.0)
                .show(ctx, |ui| {
                    crate::gui::components::map_view::draw(ui, self);
                });
        }

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(format!("Status: {}", self.status));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::structure_bar::draw(ui, self);

            ui.separator();

            crate::gui::components::export_bar::draw(ui, self);

            ui.separator();

            crate::gui::components::data_table::draw(ui, self);
        });
    }
}
