/// Tukey fence multiplier for regular values.
const WHISKER_IQR: f64 = 1.5;

// ---------------------------------------------------------------------------
// BoxStats – what a box-and-whisker element needs
// ---------------------------------------------------------------------------

/// Summary statistics of one category.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxStats {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub q1: f64,
    pub q3: f64,
    /// Smallest value not below `q1 - 1.5 * IQR`.
    pub min_regular: f64,
    /// Largest value not above `q3 + 1.5 * IQR`.
    pub max_regular: f64,
    /// Values outside the regular range, ascending.
    pub outliers: Vec<f64>,
}

impl BoxStats {
    /// Compute statistics over the finite values of `values`.
    ///
    /// Returns `None` if there are none. For an odd count the middle value
    /// belongs to both halves when computing the quartiles.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        if sorted.is_empty() {
            return None;
        }
        sorted.sort_by(f64::total_cmp);

        let n = sorted.len();
        let mean = sorted.iter().sum::<f64>() / n as f64;
        let median = median_of(&sorted);
        let lower = if n % 2 == 1 { &sorted[..=n / 2] } else { &sorted[..n / 2] };
        let q1 = median_of(lower);
        let q3 = median_of(&sorted[n / 2..]);

        let iqr = q3 - q1;
        let low_fence = q1 - WHISKER_IQR * iqr;
        let high_fence = q3 + WHISKER_IQR * iqr;

        let mut min_regular = q1;
        let mut max_regular = q3;
        let mut outliers = Vec::new();
        for &v in &sorted {
            if v < low_fence || v > high_fence {
                outliers.push(v);
            } else {
                min_regular = min_regular.min(v);
                max_regular = max_regular.max(v);
            }
        }

        Some(Self {
            count: n,
            mean,
            median,
            q1,
            q3,
            min_regular,
            max_regular,
            outliers,
        })
    }

    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// Median of a sorted, non-empty slice.
fn median_of(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_odd_count_with_outlier() {
        let stats = BoxStats::from_values(&[8.0, 1.0, 100.0, 3.0, 5.0, 2.0, 7.0, 4.0, 6.0]).unwrap();

        assert_eq!(stats.count, 9);
        assert_eq!(stats.median, 5.0);
        assert_eq!(stats.q1, 3.0);
        assert_eq!(stats.q3, 7.0);
        assert_eq!(stats.iqr(), 4.0);
        assert_eq!(stats.min_regular, 1.0);
        assert_eq!(stats.max_regular, 8.0);
        assert_eq!(stats.outliers, vec![100.0]);
        assert!((stats.mean - 136.0 / 9.0).abs() < 1e-12);
    }

    #[test]
    fn test_odd_count_quartiles_include_middle() {
        let stats = BoxStats::from_values(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(stats.q1, 2.0);
        assert_eq!(stats.median, 3.0);
        assert_eq!(stats.q3, 4.0);

        let three = BoxStats::from_values(&[10.0, 20.0, 30.0]).unwrap();
        assert_eq!((three.q1, three.q3), (15.0, 25.0));
    }

    #[test]
    fn test_even_count() {
        let stats = BoxStats::from_values(&[4.0, 1.0, 3.0, 2.0]).unwrap();
        assert_eq!(stats.median, 2.5);
        assert_eq!(stats.q1, 1.5);
        assert_eq!(stats.q3, 3.5);
        assert_eq!(stats.min_regular, 1.0);
        assert_eq!(stats.max_regular, 4.0);
        assert!(stats.outliers.is_empty());
    }

    #[test]
    fn test_single_value() {
        let stats = BoxStats::from_values(&[2.0]).unwrap();
        assert_eq!(
            (stats.q1, stats.median, stats.q3, stats.min_regular, stats.max_regular),
            (2.0, 2.0, 2.0, 2.0, 2.0)
        );
    }

    #[test]
    fn test_non_finite_values_are_ignored() {
        assert!(BoxStats::from_values(&[]).is_none());
        assert!(BoxStats::from_values(&[f64::NAN, f64::INFINITY]).is_none());

        let stats = BoxStats::from_values(&[f64::NAN, 1.0, 3.0]).unwrap();
        assert_eq!(stats.count, 2);
        assert_eq!(stats.median, 2.0);
    }
}
