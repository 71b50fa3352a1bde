use std::collections::BTreeMap;

use chrono::NaiveDateTime;

const MINUTE_MS: i64 = 60_000;

// ---------------------------------------------------------------------------
// TimedValue – one point of a time series
// ---------------------------------------------------------------------------

/// A value observed at a wall-clock instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimedValue {
    pub at: NaiveDateTime,
    pub value: f64,
}

impl TimedValue {
    /// Start of the minute period containing `at`, in epoch milliseconds.
    ///
    /// Naive timestamps are placed on the axis as if they were UTC.
    pub fn minute_start_millis(&self) -> i64 {
        self.at.and_utc().timestamp_millis().div_euclid(MINUTE_MS) * MINUTE_MS
    }

    /// Middle of the minute period containing `at`; this is where the point
    /// sits on the time axis.
    pub fn minute_middle_millis(&self) -> i64 {
        self.minute_start_millis() + MINUTE_MS / 2
    }
}

// ---------------------------------------------------------------------------
// Series / Dataset – the built, read-only output of an ingestion run
// ---------------------------------------------------------------------------

/// All values that share one key, in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct Series<V> {
    pub key: String,
    pub values: Vec<V>,
}

/// One [`Series`] per distinct key, ordered by key.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset<V> {
    series: Vec<Series<V>>,
}

/// Category → values, the input of a box-and-whisker chart.
pub type BoxAndWhiskerDataset = Dataset<f64>;

/// Series name → timed values, the input of a time-series scatter chart.
pub type TimeSeriesCollection = Dataset<TimedValue>;

impl<V> Dataset<V> {
    /// Build from grouped values. `BTreeMap` iteration gives the key order.
    pub fn from_groups(groups: BTreeMap<String, Vec<V>>) -> Self {
        let series = groups
            .into_iter()
            .map(|(key, values)| Series { key, values })
            .collect();
        Self { series }
    }

    pub fn series(&self) -> &[Series<V>] {
        &self.series
    }

    pub fn get(&self, key: &str) -> Option<&Series<V>> {
        self.series
            .binary_search_by(|s| s.key.as_str().cmp(key))
            .ok()
            .map(|i| &self.series[i])
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.series.iter().map(|s| s.key.as_str())
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Total number of values across all series.
    pub fn value_count(&self) -> usize {
        self.series.iter().map(|s| s.values.len()).sum()
    }
}

impl TimeSeriesCollection {
    /// Earliest and latest timestamps across all series.
    pub fn time_span(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let mut instants = self
            .series
            .iter()
            .flat_map(|s| s.values.iter().map(|v| v.at));
        let first = instants.next()?;
        Some(instants.fold((first, first), |(lo, hi), at| (lo.min(at), hi.max(at))))
    }
}
