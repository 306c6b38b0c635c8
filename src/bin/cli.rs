//! pagesim CLI - compare page replacement policies from the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use pagesim::common::config::MAX_UI_FRAMES;
use pagesim::{
    parse_reference_string, Policy, SimulationReport, Simulator, DEFAULT_FRAMES,
    DEFAULT_REFERENCE_STRING,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Page replacement algorithm simulator")]
struct Cli {
    /// Whitespace-separated page references
    #[arg(short, long, default_value = DEFAULT_REFERENCE_STRING)]
    references: String,

    /// Number of memory frames
    #[arg(short, long, default_value_t = DEFAULT_FRAMES as i64, allow_negative_numbers = true)]
    frames: i64,

    /// Policy to simulate (fifo, lru, optimal); repeat for several, default all
    #[arg(short, long = "policy")]
    policies: Vec<Policy>,

    /// Print the step-by-step trace of every policy
    #[arg(short, long)]
    steps: bool,

    /// Emit the full report as JSON
    #[arg(long, conflicts_with = "steps")]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let policies = if cli.policies.is_empty() {
        Policy::ALL.to_vec()
    } else {
        cli.policies
    };
    if cli.frames > MAX_UI_FRAMES as i64 {
        warn!("{} frames is more than the usual {} maximum", cli.frames, MAX_UI_FRAMES);
    }

    let references =
        parse_reference_string(&cli.references).context("Failed to parse reference string")?;
    info!("simulating {} references with {} frames", references.len(), cli.frames);

    let report = Simulator::default()
        .run(&references, cli.frames, &policies)
        .context("Simulation failed")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_summary(&report);
    if cli.steps {
        print_steps(&report);
    }
    Ok(())
}

fn print_summary(report: &SimulationReport) {
    println!(
        "{} references, {}",
        report.references().len(),
        report.capacity()
    );
    println!();
    println!("{:<8} {:>7} {:>6} {:>10} {:>10}", "Policy", "Faults", "Hits", "Hit %", "Fault %");
    for row in report.summary() {
        println!(
            "{:<8} {:>7} {:>6} {:>10} {:>10}",
            row.policy.name(),
            row.faults,
            row.hits,
            percent(row.hit_ratio),
            percent(row.fault_ratio)
        );
    }
    if let Some(best) = report.fewest_faults() {
        println!();
        println!("Fewest faults: {} ({})", best, best.description());
    }
}

fn print_steps(report: &SimulationReport) {
    for (policy, result) in report.iter() {
        println!();
        println!("{} steps (trace crc32 {:08x})", policy, result.trace_checksum());
        for step in result.steps() {
            println!("  {}", step);
        }
    }
}

fn percent(ratio: Option<f64>) -> String {
    ratio.map_or_else(|| "n/a".to_string(), |r| format!("{:.2}", r * 100.0))
}
