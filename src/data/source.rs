use polars::prelude::*;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::SliceError;

/// DataSource wraps a Polars DataFrame with both lazy and materialized views
pub struct DataSource {
    /// Lazy frame for efficient filtering and transformations
    df: LazyFrame,
    /// Materialized DataFrame for display and immediate access
    materialized: DataFrame,
    /// Original file path
    file_path: Option<PathBuf>,
    /// Cache for numeric column conversions
    numeric_cache: RefCell<HashMap<usize, Vec<f64>>>,
}

impl std::fmt::Debug for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataSource")
            .field("materialized", &self.materialized)
            .field("file_path", &self.file_path)
            .field("numeric_cache", &self.numeric_cache)
            .finish()
    }
}

#[allow(dead_code)]
impl DataSource {
    /// Load data from a file (CSV or Parquet)
    pub fn load(path: &Path) -> Result<Self, SliceError> {
        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .ok_or_else(|| SliceError::UnsupportedFormat {
                extension: "none".to_string(),
            })?;

        let df = match extension.to_lowercase().as_str() {
            "parquet" => LazyFrame::scan_parquet(path, Default::default())?,
            "csv" => LazyCsvReader::new(path)
                .with_has_header(true)
                .with_infer_schema_length(Some(100))
                .with_try_parse_dates(true)
                .finish()?,
            ext => {
                return Err(SliceError::UnsupportedFormat {
                    extension: ext.to_string(),
                });
            }
        };

        let materialized = df.clone().collect()?;
        if materialized.height() == 0 {
            return Err(SliceError::EmptyDataset);
        }

        Ok(Self {
            df,
            materialized,
            file_path: Some(path.to_path_buf()),
            numeric_cache: RefCell::new(HashMap::new()),
        })
    }

    /// Create DataSource from an already-loaded DataFrame
    pub fn from_dataframe(df: DataFrame, path: Option<PathBuf>) -> Result<Self, SliceError> {
        if df.height() == 0 {
            return Err(SliceError::EmptyDataset);
        }
        let lazy = df.clone().lazy();
        Ok(Self {
            df: lazy,
            materialized: df,
            file_path: path,
            numeric_cache: RefCell::new(HashMap::new()),
        })
    }

    /// Get a reference to the materialized DataFrame
    pub fn dataframe(&self) -> &DataFrame {
        &self.materialized
    }

    /// Get column values as a Series
    pub fn column_values(&self, col: &str) -> Result<Series, SliceError> {
        self.materialized
            .column(col)
            .map(|c| c.as_materialized_series().clone())
            .map_err(|_| SliceError::ColumnNotFound {
                column: col.to_string(),
            })
    }

    /// Get all column names
    pub fn column_names(&self) -> Vec<String> {
        self.materialized
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    /// Get the number of rows
    pub fn height(&self) -> usize {
        self.materialized.height()
    }

    /// Get the number of columns
    pub fn width(&self) -> usize {
        self.materialized.width()
    }

    /// Get the file path
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Re-materialize the DataFrame (useful after lazy operations)
    pub fn refresh(&mut self) -> Result<(), SliceError> {
        self.materialized = self.df.clone().collect()?;
        // Clear cache when refreshed
        self.numeric_cache.borrow_mut().clear();
        Ok(())
    }

    /// Get cached numeric column, computing if necessary
    pub fn get_cached_column(
        &self,
        col_idx: usize,
    ) -> Result<std::cell::Ref<'_, Vec<f64>>, SliceError> {
        if !self.numeric_cache.borrow().contains_key(&col_idx) {
            let data = self.column_as_f64(col_idx)?;
            self.numeric_cache.borrow_mut().insert(col_idx, data);
        }

        // Return reference into RefCell
        Ok(std::cell::Ref::map(self.numeric_cache.borrow(), |cache| {
            cache.get(&col_idx).expect("Just inserted")
        }))
    }

    /// Get a column's numeric values as Vec<f64>
    /// Non-numeric values are converted to NaN
    /// Datetime/Date columns are converted to Unix timestamps (seconds since epoch)
    pub fn column_as_f64(&self, col_idx: usize) -> Result<Vec<f64>, SliceError> {
        let col_names = self.column_names();
        if col_idx >= col_names.len() {
            return Err(SliceError::ColumnNotFound {
                column: format!("Index {}", col_idx),
            });
        }

        let series = self.column_values(&col_names[col_idx])?;

        // Handle datetime/date types by converting to Unix timestamps
        match series.dtype() {
            DataType::Datetime(_, _) => {
                let timestamps = series
                    .datetime()?
                    .into_iter()
                    .map(|opt| opt.map(|ts| ts as f64 / 1_000_000.0).unwrap_or(f64::NAN))
                    .collect();
                return Ok(timestamps);
            }
            DataType::Date => {
                let timestamps = series
                    .date()?
                    .into_iter()
                    .map(|opt| opt.map(|days| days as f64 * 86400.0).unwrap_or(f64::NAN))
                    .collect();
                return Ok(timestamps);
            }
            _ => {}
        }

        // Try to cast to f64, if that fails, extract as best we can
        match series.cast(&DataType::Float64) {
            Ok(s) => Ok(s
                .f64()?
                .into_iter()
                .map(|opt| opt.unwrap_or(f64::NAN))
                .collect()),
            Err(_) => {
                // For string columns, try to parse as f64
                if let Ok(str_series) = series.str() {
                    Ok(str_series
                        .into_iter()
                        .map(|opt| {
                            opt.and_then(|s| s.parse::<f64>().ok())
                                .unwrap_or(f64::NAN)
                        })
                        .collect())
                } else {
                    // Last resort: return NaN for all values
                    Ok(vec![f64::NAN; series.len()])
                }
            }
        }
    }

    /// Get column by index as Series (for statistics and analysis)
    pub fn get_column_series(&self, col_idx: usize) -> Result<Series, SliceError> {
        let col_names = self.column_names();
        if col_idx >= col_names.len() {
            return Err(SliceError::ColumnNotFound {
                column: format!("Index {}", col_idx),
            });
        }
        self.column_values(&col_names[col_idx])
    }

    /// Calculate statistics for a column by index
    pub fn column_stats(&self, col_idx: usize) -> Result<super::stats::Stats, SliceError> {
        let series = self.get_column_series(col_idx)?;
        Ok(super::stats::calculate_stats(&series))
    }

    /// Check if a column is a datetime or date type
    pub fn is_datetime_column(&self, col_idx: usize) -> bool {
        let col_names = self.column_names();
        if col_idx >= col_names.len() {
            return false;
        }
        if let Ok(series) = self.column_values(&col_names[col_idx]) {
            matches!(series.dtype(), DataType::Datetime(_, _) | DataType::Date)
        } else {
            false
        }
    }

    /// Check if a column can meaningfully back a slice slider
    /// (numeric or datetime, not all-NaN)
    pub fn is_sliceable_column(&self, col_idx: usize) -> bool {
        match self.column_as_f64(col_idx) {
            Ok(values) => values.iter().any(|v| v.is_finite()),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_datasource_csv_loading() {
        // Create a temporary CSV file with .csv extension
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "x,y,z").unwrap();
        writeln!(file, "1,2,3").unwrap();
        writeln!(file, "4,5,6").unwrap();
        writeln!(file, "7,8,9").unwrap();
        file.flush().unwrap();

        let ds = DataSource::load(file.path()).unwrap();

        assert_eq!(ds.height(), 3);
        assert_eq!(ds.width(), 3);

        let names = ds.column_names();
        assert_eq!(names, vec!["x", "y", "z"]);

        let col_x = ds.column_as_f64(0).unwrap();
        assert_eq!(col_x, vec![1.0, 4.0, 7.0]);

        let col_y = ds.column_as_f64(1).unwrap();
        assert_eq!(col_y, vec![2.0, 5.0, 8.0]);
    }

    #[test]
    fn test_datasource_rejects_unknown_extension() {
        let mut file = Builder::new().suffix(".xlsx").tempfile().unwrap();
        writeln!(file, "not a spreadsheet").unwrap();
        file.flush().unwrap();

        let err = DataSource::load(file.path()).unwrap_err();
        assert!(matches!(err, SliceError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_datasource_statistics() {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "values").unwrap();
        for v in [1, 2, 3, 4, 5] {
            writeln!(file, "{}", v).unwrap();
        }
        file.flush().unwrap();

        let ds = DataSource::load(file.path()).unwrap();

        let stats = ds.column_stats(0).unwrap();
        assert_eq!(stats.mean, 3.0);
        assert_eq!(stats.median, 3.0);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 5.0);
        assert_eq!(stats.count, 5);
    }

    #[test]
    fn test_datasource_datetime_parsing() {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "date,value").unwrap();
        writeln!(file, "2024-01-01,10.5").unwrap();
        writeln!(file, "2024-01-02,15.3").unwrap();
        writeln!(file, "2024-01-03,12.8").unwrap();
        file.flush().unwrap();

        let ds = DataSource::load(file.path()).unwrap();

        assert!(
            ds.is_datetime_column(0),
            "Date column should be detected as datetime"
        );

        // Datetime values come back as Unix timestamps in seconds
        let timestamps = ds.column_as_f64(0).unwrap();
        assert_eq!(timestamps.len(), 3);

        let start_ts = 1704067200.0; // 2024-01-01 00:00:00 UTC
        let end_ts = 1704326400.0; // 2024-01-04 00:00:00 UTC
        for &ts in &timestamps {
            assert!(
                ts >= start_ts && ts <= end_ts,
                "Timestamp {} should be between {} and {}",
                ts,
                start_ts,
                end_ts
            );
        }

        let values = ds.column_as_f64(1).unwrap();
        assert_eq!(values, vec![10.5, 15.3, 12.8]);
    }

    #[test]
    fn test_datasource_cached_column() {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "a,b").unwrap();
        writeln!(file, "1,text").unwrap();
        writeln!(file, "2,more").unwrap();
        file.flush().unwrap();

        let ds = DataSource::load(file.path()).unwrap();

        // Numeric column caches cleanly
        let col = ds.get_cached_column(0).unwrap();
        assert_eq!(*col, vec![1.0, 2.0]);
        drop(col);

        // String column converts to NaN rather than erroring
        let col = ds.get_cached_column(1).unwrap();
        assert!(col.iter().all(|v| v.is_nan()));

        assert!(ds.is_sliceable_column(0));
        assert!(!ds.is_sliceable_column(1));
    }
}
