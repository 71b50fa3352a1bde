/// Data layer: reading, grouping, and the datasets handed to the charts.
///
/// Architecture:
/// ```text
///  header\nkey\t...\tvalue\n...
///        │
///        ▼
///   ┌────────────┐
///   │   reader    │  lazy lines, header dropped
///   └────────────┘
///        │
///        ▼
///   ┌────────────┐
///   │   record    │  split on the delimiter
///   └────────────┘
///        │
///        ▼
///   ┌────────────┐
///   │   ingest    │  parse (strict | lenient) → aggregator
///   └────────────┘
///        │
///        ▼
///   ┌────────────┐
///   │   Dataset   │  one Series per key, key order
///   └────────────┘
/// ```

pub mod aggregator;
pub mod error;
pub mod ingest;
pub mod model;
pub mod parse;
pub mod reader;
pub mod record;
pub mod stats;
