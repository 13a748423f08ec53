//! UI interaction state

/// UI state manages transient interaction details outside the plot
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Error message to display in UI (toast/status bar)
    pub error_message: Option<String>,

    /// Number of rows passing the slice filter in the last frame
    pub visible_points: usize,
}

impl UiState {
    /// Create a new UiState with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an error message
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }

    /// Clear the current error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Check if there's an error to display
    pub fn has_error(&self) -> bool {
        self.error_message.is_some()
    }
}
