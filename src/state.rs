use std::path::PathBuf;

use crate::color::SeriesColors;
use crate::data::ingest::Ingested;
use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Chart state
// ---------------------------------------------------------------------------

/// Everything a demo window shows, fixed once ingestion is done.
pub struct ChartState<V> {
    /// Chart heading above the plot.
    pub title: String,

    /// Input file the dataset came from.
    pub source: PathBuf,

    pub dataset: Dataset<V>,

    /// Rows dropped by the lenient policy.
    pub skipped_rows: usize,

    pub colors: SeriesColors,
}

impl<V> ChartState<V> {
    pub fn new(title: impl Into<String>, ingested: Ingested<V>) -> Self {
        let colors = SeriesColors::new(ingested.dataset.keys());
        Self {
            title: title.into(),
            skipped_rows: ingested.skipped_count(),
            source: ingested.source,
            dataset: ingested.dataset,
            colors,
        }
    }

    /// One-line summary for the status bar.
    pub fn status_line(&self) -> String {
        let name = self
            .source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source.display().to_string());

        let mut line = format!(
            "{name}: {} groups, {} values",
            self.dataset.len(),
            self.dataset.value_count()
        );
        if self.skipped_rows > 0 {
            line.push_str(&format!(", {} rows skipped", self.skipped_rows));
        }
        line
    }
}
