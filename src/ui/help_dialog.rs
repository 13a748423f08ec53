use crate::app::SliceScope;

pub fn render_help_dialog(app: &mut SliceScope, ctx: &eframe::egui::Context) {
    if app.state.view.show_help {
        eframe::egui::Window::new("⌨ Keyboard Shortcuts")
            .anchor(eframe::egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .collapsible(false)
            .show(ctx, |ui| {
                ui.heading("Navigation");
                ui.label("R - Reset view");
                ui.label("G - Toggle grid");
                ui.label("L - Toggle legend");
                ui.label("S - Toggle slice panel");
                ui.label("T - Toggle dark/light theme");
                ui.label("H / F1 - Toggle help");
                ui.label("ESC - Close help");

                ui.separator();
                ui.heading("Mouse Controls");
                ui.label("Scroll - Zoom in/out");
                ui.label("Shift + Scroll - Zoom X-axis only");
                ui.label("Ctrl + Scroll - Zoom Y-axis only");
                ui.label("Drag - Pan view");
                ui.label("Alt + Drag - Box zoom");

                ui.separator();
                ui.heading("Slicing");
                ui.label("Drag a slider - Move the slice position");
                ui.label("Zoom fields - Narrow a slider's window");
                ui.label("Checkbox - Enable/disable a slice");

                ui.separator();
                if ui.button("Close").clicked() {
                    app.state.view.show_help = false;
                }
            });
    }
}
