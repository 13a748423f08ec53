use polars::prelude::*;

/// Statistics results
#[derive(Debug, Clone, Copy)]
pub struct Stats {
    pub mean: f64,
    pub std_dev: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    pub count: usize,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            mean: 0.0,
            std_dev: 0.0,
            median: 0.0,
            min: 0.0,
            max: 0.0,
            count: 0,
        }
    }
}

/// Calculate comprehensive statistics from a Series using polars
pub fn calculate_stats(series: &Series) -> Stats {
    let count = series.len();

    if count == 0 {
        return Stats::default();
    }

    // Cast to f64 for numeric operations
    let series_f64 = match series.cast(&DataType::Float64) {
        Ok(s) => s,
        Err(_) => return Stats::default(),
    };

    let chunked = match series_f64.f64() {
        Ok(c) => c,
        Err(_) => return Stats::default(),
    };

    Stats {
        mean: chunked.mean().unwrap_or(0.0),
        std_dev: chunked.std(1).unwrap_or(0.0), // ddof=1 for sample std dev
        median: chunked.median().unwrap_or(0.0),
        min: chunked.min().unwrap_or(0.0),
        max: chunked.max().unwrap_or(0.0),
        count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_basic() {
        let series = Series::new("v".into(), &[2.0f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        let stats = calculate_stats(&series);
        assert_eq!(stats.mean, 5.0);
        assert_eq!(stats.min, 2.0);
        assert_eq!(stats.max, 9.0);
        assert_eq!(stats.count, 8);
    }

    #[test]
    fn test_stats_empty_series() {
        let series = Series::new("v".into(), Vec::<f64>::new());
        let stats = calculate_stats(&series);
        assert_eq!(stats.count, 0);
        assert_eq!(stats.mean, 0.0);
    }
}
