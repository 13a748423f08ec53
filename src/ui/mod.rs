mod help_dialog;
mod plot;
mod slice_panel;
mod toolbar;

pub use help_dialog::render_help_dialog;
pub use plot::render_plot;
pub use slice_panel::render_slice_panel;
pub use toolbar::render_toolbar;
