//! Slice slider: a labeled numeric control for one dataset parameter

use egui::{Response, Ui};

use crate::slices::{Slice, ZoomRange};

/// A slider for one slice parameter, bounded by the visible zoom window.
///
/// The label shows the parameter name verbatim. Rendering never mutates
/// the slice value; values outside the window are clamped only when the
/// user edits them.
pub struct SliceSlider<'a> {
    name: &'a str,
    value: &'a mut f64,
    zoom: ZoomRange,
    slider_width: Option<f32>,
    show_value: bool,
}

impl<'a> SliceSlider<'a> {
    /// Create a slider for a slice within the given zoom window
    pub fn new(slice: &'a mut Slice, zoom: ZoomRange) -> Self {
        let Slice { name, value } = slice;
        Self {
            name: name.as_str(),
            value,
            zoom,
            slider_width: None,
            show_value: true,
        }
    }

    /// Set the slider track width
    pub fn width(mut self, width: f32) -> Self {
        self.slider_width = Some(width);
        self
    }

    /// Toggle the numeric readout next to the handle
    pub fn show_value(mut self, show: bool) -> Self {
        self.show_value = show;
        self
    }

    /// The exact text the label will render
    pub fn label_text(&self) -> &str {
        self.name
    }

    /// Show the widget. Returns the slider's response.
    pub fn show(self, ui: &mut Ui) -> Response {
        let window = self.zoom.normalized();
        ui.horizontal(|ui| {
            ui.label(self.name);
            if let Some(width) = self.slider_width {
                ui.spacing_mut().slider_width = width;
            }
            ui.add(
                egui::Slider::new(self.value, window.low_value..=window.high_value)
                    .clamping(egui::SliderClamping::Edits)
                    .show_value(self.show_value),
            )
        })
        .inner
    }
}
