use std::path::{Path, PathBuf};

use eframe::egui;
use egui_extras::{Size, StripBuilder};
use serde::{Deserialize, Serialize};

use crate::constants;
use crate::data::DataSource;
use crate::error::SliceError;
use crate::slices::SliceSet;
use crate::state::{AppState, MarkStyle};
use crate::ui;

/// Persistable view options, saved and loaded as JSON
#[derive(Serialize, Deserialize)]
pub struct ViewConfig {
    pub dark_mode: bool,
    pub show_grid: bool,
    pub show_legend: bool,
    pub show_slice_panel: bool,
    pub mark_style: MarkStyle,
    pub point_radius: f32,
    pub slice_tolerance: f64,
}

pub struct SliceScope {
    pub state: AppState,
}

impl Default for SliceScope {
    fn default() -> Self {
        Self {
            state: AppState::default(),
        }
    }
}

impl SliceScope {
    /// Load a dataset and rebuild the slice axes from it
    pub fn load_file(&mut self, path: PathBuf) -> Result<(), SliceError> {
        let ds = DataSource::load(&path)?;
        let slices = SliceSet::from_source(&ds)?;

        // Bind the first two sliceable columns to the plot axes
        let x_index = slices.axes.first().map(|a| a.column).unwrap_or(0);
        let y_index = slices.axes.get(1).map(|a| a.column).unwrap_or(x_index);

        self.state.view.x_index = x_index;
        self.state.view.y_index = y_index;
        self.state.view.x_is_timestamp = ds.is_datetime_column(x_index);
        self.state.view.reset_bounds = true;

        self.state.slices = slices;
        self.state.data = Some(ds);
        self.state.note_recent_file(&path);
        self.state.current_file = Some(path);
        self.state.ui.clear_error();

        Ok(())
    }

    /// One `name=value` line per slice axis
    pub fn slices_text(&self) -> String {
        self.state
            .slices
            .axes
            .iter()
            .map(|axis| format!("{}={}", axis.slice.name, axis.slice.value))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Copy the current slice positions to the system clipboard
    pub fn copy_slices(&self) -> Result<(), SliceError> {
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(self.slices_text())?;
        Ok(())
    }

    fn view_config(&self) -> ViewConfig {
        ViewConfig {
            dark_mode: self.state.view.dark_mode,
            show_grid: self.state.view.show_grid,
            show_legend: self.state.view.show_legend,
            show_slice_panel: self.state.view.show_slice_panel,
            mark_style: self.state.view.mark_style,
            point_radius: self.state.view.point_radius,
            slice_tolerance: self.state.slices.tolerance,
        }
    }

    fn apply_config(&mut self, config: ViewConfig) {
        self.state.view.dark_mode = config.dark_mode;
        self.state.view.show_grid = config.show_grid;
        self.state.view.show_legend = config.show_legend;
        self.state.view.show_slice_panel = config.show_slice_panel;
        self.state.view.mark_style = config.mark_style;
        self.state.view.point_radius = config.point_radius;
        self.state.slices.tolerance = config.slice_tolerance;
    }

    fn write_config(config: &ViewConfig, path: &Path) -> Result<(), SliceError> {
        let json = serde_json::to_string_pretty(config)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    fn read_config(path: &Path) -> Result<ViewConfig, SliceError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn save_config(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name("view_config.json")
            .save_file()
        {
            let config = self.view_config();
            if let Err(e) = Self::write_config(&config, &path) {
                self.state.ui.set_error(e.user_message());
            }
        }
    }

    pub fn load_config(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .pick_file()
        {
            match Self::read_config(&path) {
                Ok(config) => self.apply_config(config),
                Err(e) => self.state.ui.set_error(e.user_message()),
            }
        }
    }

    fn handle_keyboard(&mut self, ctx: &egui::Context) {
        // Don't steal keys from active text fields
        if ctx.wants_keyboard_input() {
            return;
        }

        let view = &mut self.state.view;
        ctx.input(|i| {
            if i.key_pressed(egui::Key::R) {
                view.reset_plot_bounds();
            }
            if i.key_pressed(egui::Key::G) {
                view.show_grid = !view.show_grid;
            }
            if i.key_pressed(egui::Key::L) {
                view.show_legend = !view.show_legend;
            }
            if i.key_pressed(egui::Key::S) {
                view.show_slice_panel = !view.show_slice_panel;
            }
            if i.key_pressed(egui::Key::T) {
                view.toggle_dark_mode();
            }
            if i.key_pressed(egui::Key::H) || i.key_pressed(egui::Key::F1) {
                view.show_help = !view.show_help;
            }
            if i.key_pressed(egui::Key::Escape) {
                view.show_help = false;
            }
        });
    }

    fn render_status_bar(&mut self, ui: &mut egui::Ui) {
        ui.separator();
        ui.horizontal(|ui| {
            if let Some(ref file) = self.state.current_file {
                if let Some(name) = file.file_name() {
                    ui.label(format!("📁 {}", name.to_string_lossy()));
                    ui.separator();
                }
            }
            ui.label(format!(
                "Rows: {} | Cols: {}",
                self.state.row_count(),
                self.state.column_count()
            ));
            if self.state.has_data() {
                ui.separator();
                let exempt = self.state.view.axis_columns();
                ui.label(format!(
                    "Slices: {} active | Visible: {} / {}",
                    self.state.slices.constraining_count(&exempt),
                    self.state.ui.visible_points,
                    self.state.row_count()
                ));
            }
        });
    }

    fn render_error_toast(&mut self, ctx: &egui::Context) {
        let Some(message) = self.state.ui.error_message.clone() else {
            return;
        };

        egui::Window::new("⚠ Error")
            .anchor(egui::Align2::RIGHT_BOTTOM, [-12.0, -12.0])
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(message);
                if ui.button("Dismiss").clicked() {
                    self.state.ui.clear_error();
                }
            });
    }
}

impl eframe::App for SliceScope {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Theme follows the view state
        if self.state.view.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }

        self.handle_keyboard(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            let show_slices = self.state.view.show_slice_panel
                && self.state.has_data()
                && !self.state.slices.is_empty();

            let mut horizontal_strip = StripBuilder::new(ui);
            if show_slices {
                horizontal_strip =
                    horizontal_strip.size(Size::exact(constants::layout::SLICE_PANEL_WIDTH));
            }
            horizontal_strip = horizontal_strip.size(Size::remainder());

            horizontal_strip.horizontal(|mut strip| {
                // Left panel: slice controls
                if show_slices {
                    strip.cell(|ui| {
                        ui::render_slice_panel(self, ui);
                    });
                }

                strip.cell(|ui| {
                    StripBuilder::new(ui)
                        .size(Size::initial(constants::layout::TOOLBAR_HEIGHT))
                        .size(Size::remainder())
                        .size(Size::exact(constants::layout::STATUS_BAR_HEIGHT))
                        .vertical(|mut strip| {
                            // Toolbar and controls
                            strip.cell(|ui| {
                                let has_data = ui::render_toolbar(self, ctx, ui);

                                if !has_data {
                                    ui.vertical_centered(|ui| {
                                        ui.heading("No data loaded");
                                        ui.label(
                                            "Open a CSV or Parquet file, or drag and drop one to get started",
                                        );
                                    });
                                }
                            });

                            // Plot area
                            strip.cell(|ui| {
                                if self.state.has_data() {
                                    ui::render_plot(self, ctx, ui);
                                }
                            });

                            // Status bar
                            strip.cell(|ui| {
                                self.render_status_bar(ui);
                            });
                        });
                });
            });
        });

        // Help dialog
        ui::render_help_dialog(self, ctx);

        // Error toast
        self.render_error_toast(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slices::{Slice, SliceAxis, ZoomRange};
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_load_file_binds_axes_and_slices() {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "x1,density,temp").unwrap();
        writeln!(file, "0.0,0,10").unwrap();
        writeln!(file, "0.5,5,20").unwrap();
        writeln!(file, "1.0,10,30").unwrap();
        file.flush().unwrap();

        let mut app = SliceScope::default();
        app.load_file(file.path().to_path_buf()).unwrap();

        assert_eq!(app.state.view.x_index, 0);
        assert_eq!(app.state.view.y_index, 1);
        assert!(app.state.view.reset_bounds);
        assert_eq!(app.state.slices.len(), 3);
        assert_eq!(app.state.recent_files.len(), 1);
        assert!(app.state.current_file.is_some());
    }

    #[test]
    fn test_load_file_missing_path_is_reported() {
        let mut app = SliceScope::default();
        let err = app
            .load_file(PathBuf::from("/nonexistent/data.csv"))
            .unwrap_err();
        // Polars surfaces the missing file; the app state stays empty
        assert!(!err.user_message().is_empty());
        assert!(!app.state.has_data());
    }

    #[test]
    fn test_view_config_round_trip() {
        let mut app = SliceScope::default();
        app.state.view.dark_mode = false;
        app.state.view.show_grid = false;
        app.state.view.point_radius = 4.5;
        app.state.slices.tolerance = 0.12;

        let json = serde_json::to_string_pretty(&app.view_config()).unwrap();
        let parsed: ViewConfig = serde_json::from_str(&json).unwrap();

        let mut other = SliceScope::default();
        other.apply_config(parsed);
        assert!(!other.state.view.dark_mode);
        assert!(!other.state.view.show_grid);
        assert_eq!(other.state.view.point_radius, 4.5);
        assert_eq!(other.state.slices.tolerance, 0.12);
    }

    #[test]
    fn test_slices_text_format() {
        let mut app = SliceScope::default();
        let domain = ZoomRange::new(0.0, 1.0);
        app.state.slices.axes = vec![
            SliceAxis {
                column: 0,
                slice: Slice::new("x1", 0.5),
                domain,
                zoom: domain,
                active: true,
            },
            SliceAxis {
                column: 1,
                slice: Slice::new("density", 3.0),
                domain,
                zoom: domain,
                active: false,
            },
        ];

        assert_eq!(app.slices_text(), "x1=0.5\ndensity=3");
    }
}
