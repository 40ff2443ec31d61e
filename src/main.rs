use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use linklog::chart;
use linklog::checks::Analyzer;
use linklog::config::Thresholds;
use linklog::extract::ChannelSet;

/// Analyze a captured synchronization-link status log against engineering
/// thresholds.
#[derive(Parser)]
#[command(name = "linklog", version)]
struct Cli {
    /// Path to the captured link-status log
    log_file: PathBuf,

    /// Minimum accepted gap between consecutive samples, seconds
    #[arg(long)]
    min_interval: Option<f64>,

    /// Maximum accepted gap between consecutive samples, seconds
    #[arg(long)]
    max_interval: Option<f64>,

    /// Maximum accepted jump between consecutive mu samples, picoseconds
    #[arg(long)]
    max_mu_jump: Option<i64>,

    /// Symmetric bound on the cko value, picoseconds
    #[arg(long)]
    max_cko: Option<i64>,

    /// Emit the report as JSON instead of plain text
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn thresholds(&self) -> Thresholds {
        let mut t = Thresholds::default();
        if let Some(v) = self.min_interval {
            t.min_time_interval = v;
        }
        if let Some(v) = self.max_interval {
            t.max_time_interval = v;
        }
        if let Some(v) = self.max_mu_jump {
            t.max_mu_jump = v;
        }
        if let Some(v) = self.max_cko {
            t.max_cko = v;
        }
        t
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let raw = fs::read_to_string(&cli.log_file)
        .with_context(|| format!("cannot read log file {}", cli.log_file.display()))?;

    let data = ChannelSet::from_lines(raw.lines());
    tracing::info!(records = data.len(), "extracted link-status records");

    let report = Analyzer::new(cli.thresholds()).run(&data);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for (name, outcome, success) in report.sections() {
            if outcome.passed {
                println!("{name}:\t {success}");
            } else {
                for diag in &outcome.diagnostics {
                    println!("ERROR: {diag}");
                }
            }
        }
    }

    // Chart rendering lives outside this binary; surface the requests so a
    // plotting frontend knows what to draw.
    for spec in chart::chart_requests(&data)? {
        tracing::info!(
            field = %spec.field,
            points = spec.values.len(),
            title = %spec.title,
            "chart requested"
        );
    }

    Ok(())
}
