//! Application-wide constants and default values
//!
//! This module centralizes all magic numbers and default values used throughout
//! the application, making them easier to maintain and configure.

/// Slice model defaults
pub mod slices {
    /// Default slice membership tolerance, relative to the zoom window span
    pub const DEFAULT_TOLERANCE: f64 = 0.05;

    /// Minimum selectable tolerance
    pub const MIN_TOLERANCE: f64 = 0.001;

    /// Maximum selectable tolerance
    pub const MAX_TOLERANCE: f64 = 0.5;

    /// Absolute band half-width used when a zoom window has zero span
    pub const DEGENERATE_EPSILON: f64 = 1e-9;
}

/// Performance and housekeeping constants
pub mod performance {
    /// Maximum number of recent files to track
    pub const MAX_RECENT_FILES: usize = 5;
}

/// Plotting and visualization defaults
pub mod plot {
    /// Default scatter point radius in pixels
    pub const DEFAULT_POINT_RADIUS: f32 = 2.5;

    /// Maximum selectable point radius
    pub const MAX_POINT_RADIUS: f32 = 8.0;
}

/// UI layout defaults
pub mod layout {
    /// Left panel (slice controls) default width
    pub const SLICE_PANEL_WIDTH: f32 = 280.0;

    /// Toolbar strip initial height
    pub const TOOLBAR_HEIGHT: f32 = 92.0;

    /// Status bar height reserved at the bottom
    pub const STATUS_BAR_HEIGHT: f32 = 20.0;

    /// Width of the slider region inside a slice row
    pub const SLICE_SLIDER_WIDTH: f32 = 150.0;
}
