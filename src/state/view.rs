//! View and visualization state

use serde::{Deserialize, Serialize};

use crate::constants::plot::DEFAULT_POINT_RADIUS;

/// Scatter mark style enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MarkStyle {
    #[default]
    Points,
    PointsAndLine,
}

/// View state manages all visualization and display options
#[derive(Debug, Clone)]
pub struct ViewState {
    // Axis binding
    /// Current X axis column index
    pub x_index: usize,

    /// Current Y axis column index
    pub y_index: usize,

    /// X axis is timestamp data
    pub x_is_timestamp: bool,

    // Display options
    /// Dark mode theme toggle
    pub dark_mode: bool,

    /// Show help panel
    pub show_help: bool,

    /// Grid visibility
    pub show_grid: bool,

    /// Legend visibility
    pub show_legend: bool,

    /// Slice panel visibility
    pub show_slice_panel: bool,

    /// Scatter mark style
    pub mark_style: MarkStyle,

    /// Scatter point radius in pixels
    pub point_radius: f32,

    // Plot interaction
    /// Enable zoom functionality
    pub allow_zoom: bool,

    /// Enable pan/drag
    pub allow_drag: bool,

    /// Reset zoom bounds flag
    pub reset_bounds: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            // Axis binding
            x_index: 0,
            y_index: 0,
            x_is_timestamp: false,

            // Display options
            dark_mode: true,
            show_help: false,
            show_grid: true,
            show_legend: true,
            show_slice_panel: true,
            mark_style: MarkStyle::default(),
            point_radius: DEFAULT_POINT_RADIUS,

            // Plot interaction
            allow_zoom: true,
            allow_drag: true,
            reset_bounds: false,
        }
    }
}

impl ViewState {
    /// Create a new ViewState with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset plot bounds on next frame
    pub fn reset_plot_bounds(&mut self) {
        self.reset_bounds = true;
    }

    /// Toggle dark mode
    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    /// Columns currently bound to the plot axes
    pub fn axis_columns(&self) -> [usize; 2] {
        [self.x_index, self.y_index]
    }

    /// Whether a column is bound to a plot axis
    pub fn is_axis_column(&self, column: usize) -> bool {
        column == self.x_index || column == self.y_index
    }
}
