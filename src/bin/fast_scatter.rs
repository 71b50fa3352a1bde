use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use tabchart::app::{self, WindowConfig};
use tabchart::data::ingest;
use tabchart::state::ChartState;
use tabchart::ui::plot;

const TITLE: &str = "Fast Scatter Plot Demo";

/// Scatter plot of timestamped values, one series per name.
///
/// Rows whose timestamp or value cannot be parsed are skipped with a warning
/// (set RUST_LOG=warn to see them).
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Tab-separated `name, yyyy-MM-dd HH:mm:ss.SSS, value` rows after a header line.
    file: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let ingested = ingest::fast_scatter()
        .ingest(&args.file)
        .with_context(|| format!("loading {}", args.file.display()))?;

    if ingested.skipped_count() > 0 {
        log::warn!(
            "{} of the rows in {} were skipped",
            ingested.skipped_count(),
            args.file.display()
        );
    }
    if let Some((first, last)) = ingested.dataset.time_span() {
        log::info!("time span {first} .. {last}");
    }

    let state = ChartState::new(TITLE, ingested);
    let window = WindowConfig {
        title: TITLE,
        inner_size: [800.0, 500.0],
        min_inner_size: [300.0, 200.0],
    };

    app::run(window, state, plot::scatter_plot).map_err(|e| anyhow::anyhow!("window error: {e}"))
}
