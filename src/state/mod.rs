//! Application state management
//!
//! This module organizes the SliceScope application state into logical
//! components: loaded data, slice axes, view options, and transient UI
//! details.

mod ui;
mod view;

pub use ui::UiState;
pub use view::{MarkStyle, ViewState};

use std::path::PathBuf;

use crate::constants::performance::MAX_RECENT_FILES;
use crate::data::DataSource;
use crate::slices::SliceSet;

/// Main application state container
pub struct AppState {
    /// Current data source (CSV or Parquet)
    pub data: Option<DataSource>,

    /// Slice axes derived from the current data source
    pub slices: SliceSet,

    /// View and visualization state
    pub view: ViewState,

    /// UI interaction state
    pub ui: UiState,

    /// Currently loaded file path
    pub current_file: Option<PathBuf>,

    /// Recently opened files
    pub recent_files: Vec<PathBuf>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            data: None,
            slices: SliceSet::default(),
            view: ViewState::default(),
            ui: UiState::default(),
            current_file: None,
            recent_files: Vec::new(),
        }
    }
}

impl AppState {
    /// Create a new application state with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if data is loaded
    pub fn has_data(&self) -> bool {
        self.data.is_some()
    }

    /// Get the number of columns in the current dataset
    pub fn column_count(&self) -> usize {
        self.data.as_ref().map(|ds| ds.width()).unwrap_or(0)
    }

    /// Get the number of rows in the current dataset
    pub fn row_count(&self) -> usize {
        self.data.as_ref().map(|ds| ds.height()).unwrap_or(0)
    }

    /// Get column names
    pub fn column_names(&self) -> Vec<String> {
        self.data
            .as_ref()
            .map(|ds| ds.column_names())
            .unwrap_or_default()
    }

    /// Move a path to the front of the recent-files list
    pub fn note_recent_file(&mut self, path: &PathBuf) {
        self.recent_files.retain(|p| p != path);
        self.recent_files.insert(0, path.clone());
        if self.recent_files.len() > MAX_RECENT_FILES {
            self.recent_files.truncate(MAX_RECENT_FILES);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recent_files_dedup_and_cap() {
        let mut state = AppState::new();
        for i in 0..8 {
            state.note_recent_file(&PathBuf::from(format!("run{}.csv", i)));
        }
        assert_eq!(state.recent_files.len(), MAX_RECENT_FILES);

        // Re-opening an entry moves it to the front without duplicating
        let again = PathBuf::from("run5.csv");
        state.note_recent_file(&again);
        assert_eq!(state.recent_files[0], again);
        assert_eq!(
            state.recent_files.iter().filter(|p| **p == again).count(),
            1
        );
    }
}
