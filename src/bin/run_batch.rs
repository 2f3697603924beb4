//! Run the scenario analysis for every project in a CSV file
//!
//! Usage: run_batch <projects.csv> [-o batch_output.csv]
//!
//! Writes one row per project and scenario. Solver settings come from the
//! environment (IRR_INITIAL_GUESS, IRR_TOLERANCE, IRR_MAX_ITERATIONS,
//! DEFAULT_DURATION).

use anyhow::{Context, Result};
use clap::Parser;
use investment_appraisal::{project::load_projects_csv, AnalysisConfig, ScenarioEngine};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "run_batch")]
#[command(about = "Evaluate expected/best/worst scenarios for a CSV of projects")]
struct Args {
    /// Input CSV with one project per row
    input: PathBuf,

    /// Output CSV path
    #[arg(short, long, default_value = "batch_output.csv")]
    output: PathBuf,
}

/// One output row per project and scenario
#[derive(Debug, Serialize)]
struct OutputRow<'a> {
    #[serde(rename = "Row")]
    row: usize,
    #[serde(rename = "ProjectName")]
    project_name: &'a str,
    #[serde(rename = "Scenario")]
    scenario: &'static str,
    #[serde(rename = "ROI")]
    roi: f64,
    #[serde(rename = "NPV")]
    npv: f64,
    #[serde(rename = "Payback")]
    payback: f64,
    #[serde(rename = "IRR")]
    irr: f64,
    #[serde(rename = "IRRConverged")]
    irr_converged: bool,
    #[serde(rename = "TotalRevenue")]
    total_revenue: f64,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = AnalysisConfig::from_env();
    let start = Instant::now();

    let projects = load_projects_csv(&args.input, config.default_duration)
        .with_context(|| format!("loading projects from {}", args.input.display()))?;
    println!("Loaded {} projects in {:?}", projects.len(), start.elapsed());

    let run_start = Instant::now();
    let engine = ScenarioEngine::new(config);
    let results = engine.run_batch(&projects);
    println!("Scenarios complete in {:?}", run_start.elapsed());

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;

    let mut unconverged = 0;
    for (index, (params, set)) in projects.iter().zip(&results).enumerate() {
        for (scenario, m) in set.iter() {
            if !m.irr_converged {
                unconverged += 1;
            }
            writer.serialize(OutputRow {
                row: index + 1,
                project_name: &params.project_name,
                scenario: scenario.as_str(),
                roi: m.roi,
                npv: m.npv,
                payback: m.payback,
                irr: m.irr,
                irr_converged: m.irr_converged,
                total_revenue: m.total_revenue,
            })?;
        }
    }
    writer.flush()?;

    if unconverged > 0 {
        log::warn!("{} scenario IRRs did not converge; values are last estimates", unconverged);
    }

    println!("Output written to {}", args.output.display());
    println!("Total time: {:?}", start.elapsed());

    Ok(())
}
