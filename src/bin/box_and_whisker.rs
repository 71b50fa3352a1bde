use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use tabchart::app::{self, WindowConfig};
use tabchart::data::ingest;
use tabchart::state::ChartState;
use tabchart::ui::plot;

/// Box-and-whisker chart of the values in column 3, grouped by column 1.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Tab-separated input; the first line is a header and is skipped.
    file: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let ingested = ingest::box_and_whisker()
        .ingest(&args.file)
        .with_context(|| format!("loading {}", args.file.display()))?;

    let state = ChartState::new("Box-and-Whisker Demo", ingested);
    let window = WindowConfig {
        title: "Box-and-Whisker Chart Demo",
        inner_size: [450.0, 270.0],
        min_inner_size: [300.0, 200.0],
    };

    app::run(window, state, plot::box_and_whisker_plot)
        .map_err(|e| anyhow::anyhow!("window error: {e}"))
}
