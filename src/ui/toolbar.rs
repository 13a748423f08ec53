use eframe::egui::ComboBox;

use crate::app::SliceScope;
use crate::constants::plot::MAX_POINT_RADIUS;
use crate::state::MarkStyle;

/// Render the toolbar: file handling, axis binding, display options.
/// Returns false if no data is loaded (skip plot rendering), true otherwise.
pub fn render_toolbar(
    app: &mut SliceScope,
    ctx: &eframe::egui::Context,
    ui: &mut eframe::egui::Ui,
) -> bool {
    ui.horizontal(|ui| {
        // File operations
        if ui.button("📂 Open").on_hover_text("Open Data File").clicked() {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("Data Files", &["csv", "parquet"])
                .pick_file()
            {
                if let Err(e) = app.load_file(path) {
                    app.state.ui.set_error(e.user_message());
                }
            }
        }

        // Recent files menu
        if !app.state.recent_files.is_empty() {
            ComboBox::from_id_salt("recent_files")
                .selected_text("📋 Recent")
                .show_ui(ui, |ui| {
                    // Need to clone to avoid borrow checker issues with load_file
                    for path in app.state.recent_files.clone().iter() {
                        if let Some(name) = path.file_name() {
                            if ui.button(name.to_string_lossy()).clicked() {
                                if let Err(e) = app.load_file(path.clone()) {
                                    app.state.ui.set_error(e.user_message());
                                }
                            }
                        }
                    }
                });
        }

        // Display current file with icon
        app.state.current_file.as_ref().map(|file| {
            ui.label(format!(
                "📄 {}",
                file.file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("Unknown")
            ))
            .on_hover_text(file.display().to_string())
        });
    });

    // Handle drag and drop using Option combinators
    ctx.input(|i| {
        i.raw
            .dropped_files
            .first()
            .and_then(|f| f.path.as_ref())
            .map(|path| {
                if let Err(e) = app.load_file(path.clone()) {
                    app.state.ui.set_error(e.user_message());
                }
            });
    });

    if !app.state.has_data() {
        return false;
    }

    let headers = app.state.column_names();

    // Axis binding
    ui.horizontal(|ui| {
        let old_x = app.state.view.x_index;
        let old_y = app.state.view.y_index;

        ComboBox::from_label("X Axis")
            .selected_text(
                headers
                    .get(app.state.view.x_index)
                    .cloned()
                    .unwrap_or_default(),
            )
            .show_ui(ui, |ui| {
                for (i, h) in headers.iter().enumerate() {
                    ui.selectable_value(&mut app.state.view.x_index, i, h);
                }
            });

        ComboBox::from_label("Y Axis")
            .selected_text(
                headers
                    .get(app.state.view.y_index)
                    .cloned()
                    .unwrap_or_default(),
            )
            .show_ui(ui, |ui| {
                for (i, h) in headers.iter().enumerate() {
                    ui.selectable_value(&mut app.state.view.y_index, i, h);
                }
            });

        // Update timestamp flag if the X binding changed
        if old_x != app.state.view.x_index || old_y != app.state.view.y_index {
            app.state.view.x_is_timestamp = app
                .state
                .data
                .as_ref()
                .map(|ds| ds.is_datetime_column(app.state.view.x_index))
                .unwrap_or(false);
            app.state.view.reset_bounds = true;
        }
    });

    // Display controls
    ui.horizontal(|ui| {
        ui.checkbox(&mut app.state.view.show_grid, "Grid (G)");
        ui.checkbox(&mut app.state.view.show_legend, "Legend (L)");
        ui.checkbox(&mut app.state.view.show_slice_panel, "Slices (S)");

        ui.separator();
        ui.label("Marks:");
        ui.radio_value(&mut app.state.view.mark_style, MarkStyle::Points, "Points");
        ui.radio_value(
            &mut app.state.view.mark_style,
            MarkStyle::PointsAndLine,
            "Both",
        );
        ui.label("Radius:");
        ui.add(eframe::egui::Slider::new(
            &mut app.state.view.point_radius,
            0.5..=MAX_POINT_RADIUS,
        ));

        ui.separator();
        if ui
            .button("🔄")
            .on_hover_text("Reset the view to default bounds (R)")
            .clicked()
        {
            app.state.view.reset_plot_bounds();
        }

        if ui
            .button("📋 Copy Slices")
            .on_hover_text("Copy slice positions to the clipboard")
            .clicked()
        {
            if let Err(e) = app.copy_slices() {
                app.state.ui.set_error(e.user_message());
            }
        }

        if ui.button("⚙ Save Config").clicked() {
            app.save_config();
        }
        if ui.button("📥 Load Config").clicked() {
            app.load_config();
        }

        ui.separator();
        if ui
            .button(if app.state.view.dark_mode { "🌙" } else { "☀" })
            .on_hover_text("Toggle theme (T)")
            .clicked()
        {
            app.state.view.toggle_dark_mode();
        }
        if ui.button("❓").on_hover_text("Help (F1)").clicked() {
            app.state.view.show_help = !app.state.view.show_help;
        }
    });

    true
}
