#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

// Application shell
mod app;

// Application constants
mod constants;

// Data module for Polars-based data handling
mod data;

// Error handling
mod error;

// Slice model (parameters, zoom windows, filtering)
mod slices;

// Application state modules
mod state;

// UI panels
mod ui;

// Reusable widgets
mod widgets;

use app::SliceScope;

fn main() {
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "SliceScope - Parameter Space Explorer",
        options,
        Box::new(|_| Ok(Box::new(SliceScope::default()))),
    )
    .unwrap();
}
