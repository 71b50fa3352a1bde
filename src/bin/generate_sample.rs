use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use clap::Parser;

use tabchart::data::parse::TIMESTAMP_FORMAT;

/// Write example input files for the box-and-whisker and fast-scatter demos.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Directory to write into.
    #[arg(default_value = ".")]
    dir: PathBuf,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5)).rotate_left(7).wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn tsv_writer(path: &Path) -> Result<csv::Writer<std::fs::File>> {
    csv::WriterBuilder::new()
        .delimiter(b'\t')
        .quote_style(csv::QuoteStyle::Never)
        .from_path(path)
        .with_context(|| format!("creating {}", path.display()))
}

/// `type, sample, value` with a skewed category and a few outliers.
fn write_box_whisker(path: &Path, rng: &mut SimpleRng) -> Result<usize> {
    let categories = [("Alpha", 10.0, 1.5), ("Beta", 14.0, 3.0), ("Gamma", 8.0, 0.8)];

    let mut writer = tsv_writer(path)?;
    writer.write_record(["type", "sample", "value"])?;

    let mut rows = 0;
    for (name, mean, sd) in categories {
        for i in 0..40 {
            let mut value = rng.gauss(mean, sd);
            if i % 17 == 16 {
                value += 6.0 * sd;
            }
            let sample = format!("s{i:02}");
            let value = format!("{value:.3}");
            writer.write_record([name, sample.as_str(), value.as_str()])?;
            rows += 1;
        }
    }
    writer.flush()?;
    Ok(rows)
}

/// `name, timestamp, value`, two drifting series and one bad timestamp.
fn write_scatter(path: &Path, rng: &mut SimpleRng) -> Result<usize> {
    let start: NaiveDateTime = NaiveDate::from_ymd_opt(2024, 1, 15)
        .and_then(|d| d.and_hms_milli_opt(9, 0, 0, 0))
        .context("building start time")?;

    let mut writer = tsv_writer(path)?;
    writer.write_record(["name", "time", "value"])?;

    let mut rows = 0;
    for (name, base, drift) in [("sensor-a", 20.0, 0.05), ("sensor-b", 25.0, -0.03)] {
        let mut level: f64 = base;
        for i in 0..120i64 {
            let at = start + TimeDelta::seconds(i * 37) + TimeDelta::milliseconds(i * 13 % 1000);
            level += drift + rng.gauss(0.0, 0.2);
            let stamp = at.format(TIMESTAMP_FORMAT).to_string();
            let value = format!("{level:.3}");
            writer.write_record([name, stamp.as_str(), value.as_str()])?;
            rows += 1;
        }
    }
    writer.write_record(["sensor-a", "not a timestamp", "21.0"])?;
    rows += 1;

    writer.flush()?;
    Ok(rows)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let mut rng = SimpleRng::new(42);
    log::debug!("writing samples into {}", args.dir.display());

    std::fs::create_dir_all(&args.dir)
        .with_context(|| format!("creating {}", args.dir.display()))?;

    let box_path = args.dir.join("box_whisker_sample.tsv");
    let rows = write_box_whisker(&box_path, &mut rng)?;
    println!("Wrote {rows} rows to {}", box_path.display());

    let scatter_path = args.dir.join("scatter_sample.tsv");
    let rows = write_scatter(&scatter_path, &mut rng)?;
    println!("Wrote {rows} rows to {} (one malformed)", scatter_path.display());

    Ok(())
}
