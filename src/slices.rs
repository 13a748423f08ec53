//! Slice model: named dataset parameters, per-dimension zoom windows, and
//! the membership filter that decides which rows are visible in the plot.

use serde::{Deserialize, Serialize};

use crate::constants::slices::{DEFAULT_TOLERANCE, DEGENERATE_EPSILON};
use crate::data::DataSource;
use crate::error::SliceError;

/// One addressable parameter of the loaded dataset.
///
/// The name is displayed verbatim as the slider label; the value is the
/// current position within the parameter domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slice {
    pub name: String,
    pub value: f64,
}

impl Slice {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// The currently visible sub-window of a parameter domain.
///
/// Bounds are inclusive. `low_value <= high_value` is the caller's
/// responsibility; consumers that need an ordered window go through
/// [`ZoomRange::normalized`] rather than assuming it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomRange {
    pub low_value: f64,
    pub high_value: f64,
}

impl ZoomRange {
    pub fn new(low_value: f64, high_value: f64) -> Self {
        Self {
            low_value,
            high_value,
        }
    }

    /// The same window with bounds swapped into ascending order.
    pub fn normalized(self) -> Self {
        if self.low_value > self.high_value {
            Self {
                low_value: self.high_value,
                high_value: self.low_value,
            }
        } else {
            self
        }
    }

    /// Window width after normalization, zero for degenerate windows.
    pub fn span(self) -> f64 {
        let n = self.normalized();
        n.high_value - n.low_value
    }

    /// True when both bounds coincide.
    pub fn is_degenerate(self) -> bool {
        self.low_value == self.high_value
    }

    /// Inclusive containment check on the normalized window.
    pub fn contains(self, v: f64) -> bool {
        let n = self.normalized();
        v >= n.low_value && v <= n.high_value
    }

    /// Clamp a value into the normalized window.
    pub fn clamp(self, v: f64) -> f64 {
        let n = self.normalized();
        v.clamp(n.low_value, n.high_value)
    }
}

/// One dataset dimension: a column binding, its slice position, the full
/// data domain, and the zoom window bounding the slider.
#[derive(Debug, Clone)]
pub struct SliceAxis {
    /// Column index in the backing DataSource
    pub column: usize,

    /// Slider label and current position
    pub slice: Slice,

    /// Full data domain (column min/max), fixed at load time
    pub domain: ZoomRange,

    /// Visible sub-window of the domain, user-adjustable
    pub zoom: ZoomRange,

    /// Whether this axis constrains the plotted points
    pub active: bool,
}

impl SliceAxis {
    /// Widen the zoom window back to the full data domain.
    pub fn reset_zoom(&mut self) {
        self.zoom = self.domain;
    }

    /// Move the slice position to the center of the zoom window.
    pub fn center_value(&mut self) {
        let n = self.zoom.normalized();
        self.slice.value = (n.low_value + n.high_value) / 2.0;
    }
}

/// All slice axes of the loaded dataset plus the membership tolerance.
#[derive(Debug, Clone)]
pub struct SliceSet {
    pub axes: Vec<SliceAxis>,

    /// Band half-width as a fraction of each axis' zoom span
    pub tolerance: f64,
}

impl Default for SliceSet {
    fn default() -> Self {
        Self {
            axes: Vec::new(),
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl SliceSet {
    /// Build one axis per sliceable column of the data source.
    ///
    /// Domains come from the column min/max, slice values are seeded at
    /// the median, and zoom windows start at the full domain.
    pub fn from_source(ds: &DataSource) -> Result<Self, SliceError> {
        let names = ds.column_names();
        let mut axes = Vec::new();

        for (col, name) in names.iter().enumerate() {
            if !ds.is_sliceable_column(col) {
                continue;
            }
            let stats = ds.column_stats(col)?;
            let domain = ZoomRange::new(stats.min, stats.max);
            axes.push(SliceAxis {
                column: col,
                slice: Slice::new(name.clone(), stats.median),
                domain,
                zoom: domain,
                active: true,
            });
        }

        if axes.is_empty() {
            return Err(SliceError::NoNumericColumns);
        }

        Ok(Self {
            axes,
            tolerance: DEFAULT_TOLERANCE,
        })
    }

    pub fn len(&self) -> usize {
        self.axes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    /// Number of axes currently constraining the plot, excluding the
    /// given exempt columns.
    pub fn constraining_count(&self, exempt: &[usize]) -> usize {
        self.axes
            .iter()
            .filter(|a| a.active && !exempt.contains(&a.column))
            .count()
    }

    /// Band half-width for an axis. Relative to the zoom span so that
    /// narrowing the window tightens the slice; degenerate windows fall
    /// back to an absolute epsilon (exact match).
    fn band(&self, axis: &SliceAxis) -> f64 {
        let span = axis.zoom.span();
        if span == 0.0 {
            DEGENERATE_EPSILON
        } else {
            self.tolerance * span
        }
    }

    /// Whether a single coordinate lies within the slice band of an axis.
    /// NaN coordinates never match.
    pub fn matches(&self, axis: &SliceAxis, v: f64) -> bool {
        if v.is_nan() {
            return false;
        }
        (v - axis.slice.value).abs() <= self.band(axis)
    }

    /// Row visibility mask over the data source.
    ///
    /// Plot-axis columns are exempt (they are displayed, not sliced), and
    /// inactive axes do not constrain.
    pub fn mask(&self, ds: &DataSource, exempt: &[usize]) -> Result<Vec<bool>, SliceError> {
        profiling::scope!("slice_mask");

        let mut mask = vec![true; ds.height()];
        for axis in self
            .axes
            .iter()
            .filter(|a| a.active && !exempt.contains(&a.column))
        {
            let col = ds.get_cached_column(axis.column)?;
            for (m, &v) in mask.iter_mut().zip(col.iter()) {
                *m = *m && self.matches(axis, v);
            }
        }
        Ok(mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    fn fixture() -> DataSource {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "x1,density,label").unwrap();
        writeln!(file, "0.0,0,a").unwrap();
        writeln!(file, "0.25,2,b").unwrap();
        writeln!(file, "0.5,5,c").unwrap();
        writeln!(file, "0.75,8,d").unwrap();
        writeln!(file, "1.0,10,e").unwrap();
        file.flush().unwrap();
        DataSource::load(file.path()).unwrap()
    }

    #[test]
    fn test_zoom_range_normalization() {
        let inverted = ZoomRange::new(5.0, 1.0);
        let n = inverted.normalized();
        assert_eq!(n.low_value, 1.0);
        assert_eq!(n.high_value, 5.0);
        assert_eq!(inverted.span(), 4.0);
        assert!(inverted.contains(3.0));
        assert_eq!(inverted.clamp(0.0), 1.0);
        assert_eq!(inverted.clamp(9.0), 5.0);
    }

    #[test]
    fn test_zoom_range_degenerate() {
        let zero = ZoomRange::new(2.0, 2.0);
        assert!(zero.is_degenerate());
        assert_eq!(zero.span(), 0.0);
        assert!(zero.contains(2.0));
        assert!(!zero.contains(2.1));
        assert_eq!(zero.clamp(7.0), 2.0);
    }

    #[test]
    fn test_slice_set_derivation() {
        let ds = fixture();
        let slices = SliceSet::from_source(&ds).unwrap();

        // The string column is skipped
        assert_eq!(slices.len(), 2);

        let x1 = &slices.axes[0];
        assert_eq!(x1.slice.name, "x1");
        assert_eq!(x1.domain, ZoomRange::new(0.0, 1.0));
        assert_eq!(x1.zoom, x1.domain);
        assert_eq!(x1.slice.value, 0.5); // seeded at the median
        assert!(x1.active);

        let density = &slices.axes[1];
        assert_eq!(density.slice.name, "density");
        assert_eq!(density.domain, ZoomRange::new(0.0, 10.0));
    }

    #[test]
    fn test_slice_mask_tolerance_band() {
        let ds = fixture();
        let mut slices = SliceSet::from_source(&ds).unwrap();
        slices.tolerance = 0.05;

        // Slice on density=5 with span 10 -> band of 0.5; only the
        // middle row survives. x1 is exempt as a plot axis.
        let mask = slices.mask(&ds, &[0]).unwrap();
        assert_eq!(mask, vec![false, false, true, false, false]);
    }

    #[test]
    fn test_slice_mask_inactive_axis_exempt() {
        let ds = fixture();
        let mut slices = SliceSet::from_source(&ds).unwrap();
        slices.axes[1].active = false;

        // With the only non-exempt axis inactive, everything passes
        let mask = slices.mask(&ds, &[0]).unwrap();
        assert!(mask.iter().all(|&m| m));
        assert_eq!(slices.constraining_count(&[0]), 0);
    }

    #[test]
    fn test_slice_mask_narrowed_zoom_tightens_band() {
        let ds = fixture();
        let mut slices = SliceSet::from_source(&ds).unwrap();
        slices.tolerance = 0.2;

        // Full span 10 -> band 2.0 around the median 5: only the middle
        // row is within it
        let mask = slices.mask(&ds, &[0]).unwrap();
        assert_eq!(mask.iter().filter(|&&m| m).count(), 1);

        // Narrow the window: span 2 -> band 0.4, still exact middle only
        slices.axes[1].zoom = ZoomRange::new(4.0, 6.0);
        let mask = slices.mask(&ds, &[0]).unwrap();
        assert_eq!(mask, vec![false, false, true, false, false]);
    }

    #[test]
    fn test_slice_mask_degenerate_window_exact_match() {
        let ds = fixture();
        let mut slices = SliceSet::from_source(&ds).unwrap();
        slices.axes[1].zoom = ZoomRange::new(5.0, 5.0);
        slices.axes[1].slice.value = 5.0;

        let mask = slices.mask(&ds, &[0]).unwrap();
        assert_eq!(mask, vec![false, false, true, false, false]);

        // Off the exact value, nothing matches
        slices.axes[1].slice.value = 5.5;
        let mask = slices.mask(&ds, &[0]).unwrap();
        assert!(mask.iter().all(|&m| !m));
    }

    #[test]
    fn test_axis_reset_and_center() {
        let mut axis = SliceAxis {
            column: 0,
            slice: Slice::new("x1", 0.9),
            domain: ZoomRange::new(0.0, 1.0),
            zoom: ZoomRange::new(0.4, 0.6),
            active: true,
        };

        axis.center_value();
        assert!((axis.slice.value - 0.5).abs() < 1e-12);

        axis.reset_zoom();
        assert_eq!(axis.zoom, axis.domain);
    }
}
