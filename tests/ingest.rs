use std::collections::BTreeSet;
use std::io::Write;
use std::path::Path;

use tabchart::data::error::{FieldError, IngestError};
use tabchart::data::ingest::{self, FailurePolicy, IngestOptions, Ingestor};
use tabchart::data::parse::NumberField;
use tempfile::NamedTempFile;

fn tsv(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    file.flush().unwrap();
    file
}

fn distinct_first_columns(path: &Path) -> BTreeSet<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .skip(1)
        .map(|l| l.split('\t').next().unwrap().to_string())
        .collect()
}

#[test]
fn box_and_whisker_groups_in_key_order() {
    let file = tsv(&["header", "B\tx\t2.0", "A\tx\t1.0", "A\tx\t3.0"]);
    let ingested = ingest::box_and_whisker().ingest(file.path()).unwrap();

    let ds = &ingested.dataset;
    assert_eq!(ds.keys().collect::<Vec<_>>(), vec!["A", "B"]);
    assert_eq!(ds.get("A").unwrap().values, vec![1.0, 3.0]);
    assert_eq!(ds.get("B").unwrap().values, vec![2.0]);
    assert_eq!(ingested.skipped_count(), 0);
    assert_eq!(ingested.source, file.path());
}

#[test]
fn header_only_file_is_empty_dataset() {
    let file = tsv(&["type\tsample\tvalue"]);

    let boxes = ingest::box_and_whisker().ingest(file.path()).unwrap();
    assert!(boxes.dataset.is_empty());

    let scatter = ingest::fast_scatter().ingest(file.path()).unwrap();
    assert!(scatter.dataset.is_empty());
    assert_eq!(scatter.skipped_count(), 0);
}

#[test]
fn strict_policy_rejects_non_numeric_value() {
    let file = tsv(&["header", "A\tx\tNaNtext", "B\tx\t1.0"]);

    match ingest::box_and_whisker().ingest(file.path()) {
        Err(IngestError::Parse { line, source }) => {
            assert_eq!(line, 2);
            assert!(matches!(source, FieldError::Number { index: 2, .. }));
        }
        other => panic!("expected a parse error, got {other:?}"),
    }
}

#[test]
fn lenient_policy_drops_bad_date_row() {
    let file = tsv(&[
        "name\ttime\tvalue",
        "s1\t2024-01-15 09:00:01.250\t1.5",
        "s1\t15/01/2024 09:01\t2.5",
        "s2\t2024-01-15 09:02:00.000\t3.5",
    ]);

    let ingested = ingest::fast_scatter().ingest(file.path()).unwrap();
    let ds = &ingested.dataset;

    assert_eq!(ds.value_count(), 2);
    assert_eq!(ds.get("s1").unwrap().values[0].value, 1.5);
    assert_eq!(ds.get("s2").unwrap().values[0].value, 3.5);
    assert_eq!(ingested.skipped_count(), 1);
    assert_eq!(ingested.skipped[0].line, 3);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ingest::fast_scatter()
        .ingest(dir.path().join("absent.tsv"))
        .unwrap_err();
    assert!(matches!(err, IngestError::Io { .. }));
    assert!(err.to_string().contains("absent.tsv"));
}

#[test]
fn key_count_matches_distinct_first_column() {
    let file = tsv(&[
        "k\t-\tv",
        "delta\t-\t4",
        "alpha\t-\t1",
        "charlie\t-\t3",
        "alpha\t-\t1.5",
        "bravo\t-\t2",
        "delta\t-\t4.5",
    ]);

    let ds = ingest::box_and_whisker().ingest(file.path()).unwrap().dataset;
    let expected = distinct_first_columns(file.path());

    assert_eq!(ds.len(), expected.len());
    assert_eq!(
        ds.keys().map(str::to_string).collect::<BTreeSet<_>>(),
        expected
    );
    assert_eq!(ds.get("delta").unwrap().values, vec![4.0, 4.5]);
}

#[test]
fn values_keep_file_order_within_group() {
    let file = tsv(&[
        "name\ttime\tvalue",
        "s\t2024-01-15 10:00:00.000\t3",
        "s\t2024-01-15 08:00:00.000\t1",
        "s\t2024-01-15 09:00:00.000\t2",
    ]);

    let ds = ingest::fast_scatter().ingest(file.path()).unwrap().dataset;
    let values: Vec<f64> = ds.get("s").unwrap().values.iter().map(|v| v.value).collect();
    assert_eq!(values, vec![3.0, 1.0, 2.0]);
}

#[test]
fn runs_are_independent() {
    let ingestor = Ingestor::new(
        NumberField { index: 1 },
        IngestOptions::default().policy(FailurePolicy::Lenient),
    );
    let first = tsv(&["h", "a\t1", "a\tbad"]);
    let second = tsv(&["h", "b\t2"]);

    let one = ingestor.ingest(first.path()).unwrap();
    let two = ingestor.ingest(second.path()).unwrap();

    assert_eq!(one.dataset.keys().collect::<Vec<_>>(), vec!["a"]);
    assert_eq!(one.skipped_count(), 1);
    assert_eq!(two.dataset.keys().collect::<Vec<_>>(), vec!["b"]);
    assert_eq!(two.skipped_count(), 0);
}

#[test]
fn blank_line_follows_the_failure_policy() {
    let boxes = tsv(&["h", "A\tx\t1.0", "", "A\tx\t2.0"]);
    assert!(matches!(
        ingest::box_and_whisker().ingest(boxes.path()),
        Err(IngestError::Parse {
            line: 3,
            source: FieldError::MissingField { index: 2 }
        })
    ));

    let scatter = tsv(&[
        "h",
        "s\t2024-01-15 09:00:00.000\t1.0",
        "",
        "s\t2024-01-15 09:02:00.000\t2.0",
    ]);
    let ingested = ingest::fast_scatter().ingest(scatter.path()).unwrap();
    assert_eq!(ingested.dataset.value_count(), 2);
    assert_eq!(ingested.skipped_count(), 1);
    assert_eq!(ingested.skipped[0].line, 3);
}
