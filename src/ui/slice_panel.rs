use crate::app::SliceScope;
use crate::constants::layout::SLICE_SLIDER_WIDTH;
use crate::constants::slices::{MAX_TOLERANCE, MIN_TOLERANCE};
use crate::widgets::{SliceSlider, ZoomControl};

/// Render the slice control panel (left sidebar): one slider and zoom
/// editor per dimension, with the plot-axis dimensions shown as bound.
pub fn render_slice_panel(app: &mut SliceScope, ui: &mut eframe::egui::Ui) {
    ui.heading("Slices");
    ui.separator();

    ui.horizontal(|ui| {
        ui.label("Tolerance:");
        ui.add(
            eframe::egui::Slider::new(
                &mut app.state.slices.tolerance,
                MIN_TOLERANCE..=MAX_TOLERANCE,
            )
            .logarithmic(true),
        )
        .on_hover_text("Slice band half-width as a fraction of the zoom span");
    });
    ui.separator();

    let [x_col, y_col] = app.state.view.axis_columns();

    eframe::egui::ScrollArea::vertical().show(ui, |ui| {
        for axis in &mut app.state.slices.axes {
            if axis.column == x_col || axis.column == y_col {
                // Axis-bound dimensions are plotted, not sliced
                ui.horizontal(|ui| {
                    ui.strong(&axis.slice.name);
                    let binding = if axis.column == x_col { "X axis" } else { "Y axis" };
                    ui.weak(format!("bound to {}", binding));
                });
            } else {
                ui.horizontal(|ui| {
                    ui.checkbox(&mut axis.active, "")
                        .on_hover_text("Constrain the plot to this slice");
                    ui.add_enabled_ui(axis.active, |ui| {
                        SliceSlider::new(&mut axis.slice, axis.zoom)
                            .width(SLICE_SLIDER_WIDTH)
                            .show(ui);
                    });
                });
                ui.horizontal(|ui| {
                    ui.add_space(24.0);
                    ui.weak("zoom");
                    ZoomControl::new(&mut axis.zoom, axis.domain).show(ui);
                });
            }
            ui.separator();
        }
    });
}
