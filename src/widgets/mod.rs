//! Reusable UI widgets for SliceScope

mod slice_slider;
mod zoom_control;

pub use slice_slider::SliceSlider;
pub use zoom_control::ZoomControl;
