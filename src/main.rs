// src/main.rs
use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::Parser;
use rtxi_experiment::{Experiment, LoadOptions, Measurement, SegmentKind};
/// Inspect an RTXI multisine experiment record
#[derive(Parser)]
#[command(name = "rtxi-inspect")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the JSON record written by RTXI
    record: PathBuf,
    /// Average the multisine parts of these traces
    #[arg(short, long, num_args = 1..)]
    average: Option<Vec<usize>>,
    /// Show a single trace
    #[arg(short, long, conflicts_with = "average")]
    trace: Option<usize>,
    /// Load the record without segment length checks
    #[arg(long)]
    no_validate: bool,
}
fn summarize(label: &str, m: &Measurement) -> String {
    if m.is_empty() {
        return format!("{label}: no samples");
    }
    let (min, max) = m
        .y()
        .iter()
        .fold((f64::MAX, f64::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    format!(
        "{label}: {} samples, dt={} s, response range [{min:.4}, {max:.4}]",
        m.len(),
        m.dt()
    )
}
fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let options = if cli.no_validate {
        LoadOptions::trusting()
    } else {
        LoadOptions::default()
    };
    let experiment = Experiment::from_path_with(&cli.record, options)
        .with_context(|| format!("loading {}", cli.record.display()))?;
    let meta = experiment.metadata();
    println!(
        "version {} | {} traces | dt={} s | duration={} s | {} frequencies | alternance {:?}",
        experiment.version(),
        experiment.count(),
        meta.dt,
        meta.duration,
        meta.frequencies.len(),
        meta.trace_alternance
    );
    if let Some(index) = cli.trace {
        let trace = experiment.trace(index)?;
        for (name, kind) in [
            ("step", SegmentKind::Step),
            ("multisine", SegmentKind::Multisine),
            ("drop", SegmentKind::Drop),
        ] {
            println!("trace {index} {name}: {} samples", trace.segment(kind).len());
        }
        println!(
            "{}",
            summarize(&format!("measurement {index}"), &experiment.get_measurement(index)?)
        );
    }
    if let Some(indices) = cli.average {
        let averaged = experiment
            .average(&indices)
            .with_context(|| format!("averaging traces {indices:?}"))?;
        println!("{}", summarize("average", &averaged));
    }
    Ok(())
}
