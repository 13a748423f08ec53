use chrono::{DateTime, Utc};
use egui_plot::{Line, Plot, Points};

use crate::app::SliceScope;
use crate::state::MarkStyle;

/// Render the main plot area: the selected X/Y columns restricted to rows
/// passing the slice filter.
pub fn render_plot(app: &mut SliceScope, ctx: &eframe::egui::Context, ui: &mut eframe::egui::Ui) {
    profiling::scope!("render_plot");

    let headers = app.state.column_names();
    let x_index = app.state.view.x_index;
    let y_index = app.state.view.y_index;

    if x_index >= headers.len() || y_index >= headers.len() {
        return;
    }

    // Gather visible points under the current slices
    let points: Vec<[f64; 2]> = {
        profiling::scope!("slice_points_prep");

        let Some(ds) = &app.state.data else { return };

        let mask = match app.state.slices.mask(ds, &[x_index, y_index]) {
            Ok(mask) => mask,
            Err(e) => {
                app.state.ui.set_error(e.user_message());
                return;
            }
        };

        let xs = match ds.get_cached_column(x_index) {
            Ok(col) => col,
            Err(e) => {
                app.state.ui.set_error(e.user_message());
                return;
            }
        };
        let ys = match ds.get_cached_column(y_index) {
            Ok(col) => col,
            Err(e) => {
                app.state.ui.set_error(e.user_message());
                return;
            }
        };

        xs.iter()
            .zip(ys.iter())
            .zip(mask.iter())
            .filter_map(|((&x, &y), &visible)| {
                (visible && x.is_finite() && y.is_finite()).then_some([x, y])
            })
            .collect()
    };

    app.state.ui.visible_points = points.len();

    let shift_held = ctx.input(|i| i.modifiers.shift);
    let ctrl_held = ctx.input(|i| i.modifiers.ctrl || i.modifiers.command);
    let alt_held = ctx.input(|i| i.modifiers.alt);

    // Ensure a minimum height for usability, but otherwise fill the space
    let plot_height = ui.available_height().max(200.0);

    let mut plot = Plot::new("slice_plot")
        .allow_zoom(app.state.view.allow_zoom)
        .allow_drag(app.state.view.allow_drag && !alt_held)
        .allow_boxed_zoom(app.state.view.allow_zoom && alt_held)
        .allow_scroll(app.state.view.allow_zoom)
        .show_grid(app.state.view.show_grid)
        .height(plot_height);

    // Apply axis-locked zoom if modifiers held
    if shift_held && app.state.view.allow_zoom {
        plot = plot.allow_zoom([true, false]).allow_boxed_zoom(false); // X-only
    } else if ctrl_held && app.state.view.allow_zoom {
        plot = plot.allow_zoom([false, true]).allow_boxed_zoom(false); // Y-only
    }

    if app.state.view.reset_bounds {
        plot = plot.reset();
        app.state.view.reset_bounds = false;
    }

    if app.state.view.show_legend {
        plot = plot.legend(egui_plot::Legend::default().position(egui_plot::Corner::RightTop));
    }

    // Add custom axis formatters for timestamps
    if app.state.view.x_is_timestamp {
        plot = plot
            .x_axis_formatter(|mark, _range| {
                // Handle fractional seconds by extracting seconds and nanoseconds
                let secs = mark.value.floor() as i64;
                let nanos = ((mark.value.fract() * 1_000_000_000.0) as u32).min(999_999_999);

                if let Some(dt) = DateTime::<Utc>::from_timestamp(secs, nanos) {
                    dt.format("%Y-%m-%d\n%H:%M:%S").to_string()
                } else {
                    format!("{:.2}", mark.value)
                }
            })
            .label_formatter(|name, value| {
                if name.is_empty() {
                    let secs = value.x.floor() as i64;
                    let nanos = ((value.x.fract() * 1_000_000_000.0) as u32).min(999_999_999);
                    if let Some(dt) = DateTime::<Utc>::from_timestamp(secs, nanos) {
                        format!("{}\n{:.2}", dt.format("%Y-%m-%d %H:%M:%S"), value.y)
                    } else {
                        format!("x: {:.3}\ny: {:.2}", value.x, value.y)
                    }
                } else {
                    format!("{}\nx: {:.3}\ny: {:.2}", name, value.x, value.y)
                }
            });
    } else {
        // Ensure x-axis labels always render with sensible formatting
        plot = plot.x_axis_formatter(|mark, _range| {
            if mark.value.abs() < 0.01 && mark.value != 0.0 {
                format!("{:.2e}", mark.value)
            } else if mark.value.abs() >= 1000.0 {
                format!("{:.0}", mark.value)
            } else {
                format!("{:.2}", mark.value)
            }
        });
    }

    let series_name = format!("{} vs {}", headers[y_index], headers[x_index]);
    let radius = app.state.view.point_radius;
    let mark_style = app.state.view.mark_style;

    plot.show(ui, |plot_ui| {
        match mark_style {
            MarkStyle::Points => {
                plot_ui.points(Points::new(series_name, points).radius(radius));
            }
            MarkStyle::PointsAndLine => {
                plot_ui.line(Line::new(series_name.clone(), points.clone()));
                plot_ui.points(Points::new(series_name, points).radius(radius));
            }
        }
    });
}
