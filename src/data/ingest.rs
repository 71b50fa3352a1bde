use std::path::{Path, PathBuf};

use super::aggregator::Aggregator;
use super::error::{FieldError, IngestError, Result};
use super::model::Dataset;
use super::parse::{NumberField, TimedNumberField, ValueParser};
use super::reader::{Line, LineReader};
use super::record::{split_fields, Fields, TAB};

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// What to do with a record whose fields fail to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Abort the run with [`IngestError::Parse`].
    #[default]
    Strict,
    /// Drop the record, remember why, keep reading.
    Lenient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestOptions {
    /// Column holding the grouping key.
    pub key_field: usize,
    pub delimiter: char,
    pub policy: FailurePolicy,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            key_field: 0,
            delimiter: TAB,
            policy: FailurePolicy::Strict,
        }
    }
}

impl IngestOptions {
    pub fn key_field(mut self, index: usize) -> Self {
        self.key_field = index;
        self
    }

    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// A record dropped under [`FailurePolicy::Lenient`].
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRecord {
    pub line: usize,
    pub reason: FieldError,
}

/// The result of one successful run.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingested<V> {
    pub source: PathBuf,
    pub dataset: Dataset<V>,
    pub skipped: Vec<SkippedRecord>,
}

impl<V> Ingested<V> {
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

// ---------------------------------------------------------------------------
// Ingestor – read → split → parse → aggregate → build
// ---------------------------------------------------------------------------

/// A configured ingestion pipeline. Each call to [`Ingestor::ingest`] is an
/// independent run with its own aggregator.
#[derive(Debug, Clone)]
pub struct Ingestor<P> {
    options: IngestOptions,
    parser: P,
}

impl<P: ValueParser> Ingestor<P> {
    pub fn new(parser: P, options: IngestOptions) -> Self {
        Self { options, parser }
    }

    pub fn options(&self) -> &IngestOptions {
        &self.options
    }

    /// Read `path` in a single pass and build its dataset.
    pub fn ingest(&self, path: impl AsRef<Path>) -> Result<Ingested<P::Value>> {
        let reader = LineReader::open(path)?;
        let source = reader.path().to_path_buf();
        log::debug!("reading {} ({:?})", source.display(), self.options.policy);

        let (dataset, skipped) = self.ingest_lines(reader)?;

        log::info!(
            "{}: {} groups, {} values, {} skipped",
            source.display(),
            dataset.len(),
            dataset.value_count(),
            skipped.len()
        );

        Ok(Ingested {
            source,
            dataset,
            skipped,
        })
    }

    /// Aggregate already-split data lines (header not included).
    pub fn ingest_lines<I>(&self, lines: I) -> Result<(Dataset<P::Value>, Vec<SkippedRecord>)>
    where
        I: IntoIterator<Item = Result<Line>>,
    {
        let mut aggregator = Aggregator::new();
        let mut skipped = Vec::new();

        for line in lines {
            let line = line?;
            let fields = split_fields(&line.text, self.options.delimiter);
            match self.parse_record(&fields) {
                Ok((key, value)) => aggregator.add_value(key, value),
                Err(reason) => match self.options.policy {
                    FailurePolicy::Strict => {
                        return Err(IngestError::Parse {
                            line: line.number,
                            source: reason,
                        });
                    }
                    FailurePolicy::Lenient => {
                        log::warn!("line {}: skipped, {reason}", line.number);
                        skipped.push(SkippedRecord {
                            line: line.number,
                            reason,
                        });
                    }
                },
            }
        }

        Ok((aggregator.build(), skipped))
    }

    fn parse_record<'a>(
        &self,
        fields: &Fields<'a>,
    ) -> std::result::Result<(&'a str, P::Value), FieldError> {
        let key = fields.get(self.options.key_field)?;
        let value = self.parser.parse(fields)?;
        Ok((key, value))
    }
}

// ---------------------------------------------------------------------------
// Presets for the two demos
// ---------------------------------------------------------------------------

/// `[category, -, value, ...]`, any bad value is fatal.
pub fn box_and_whisker() -> Ingestor<NumberField> {
    Ingestor::new(NumberField { index: 2 }, IngestOptions::default())
}

/// `[series, yyyy-MM-dd HH:mm:ss.SSS, value]`, bad rows are skipped.
pub fn fast_scatter() -> Ingestor<TimedNumberField> {
    Ingestor::new(
        TimedNumberField {
            time_index: 1,
            value_index: 2,
        },
        IngestOptions::default().policy(FailurePolicy::Lenient),
    )
}
