//! Investment Appraisal CLI
//!
//! Runs the scenario analysis for a project file, or scores a strategic
//! description. Solver settings can be overridden through the environment
//! (see `AnalysisConfig::from_env`).

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use investment_appraisal::{
    project::{load_project_json, load_strategy_json},
    score_strategy, AnalysisConfig, AnalysisReport, ScenarioEngine,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "investment_appraisal")]
#[command(about = "ROI, NPV, payback and IRR for a single investment project")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze expected, best and worst scenarios of a project JSON file
    Analyze {
        /// Project parameters (JSON)
        input: PathBuf,

        /// Strategic description (JSON) to score alongside the financials
        #[arg(short, long)]
        strategy: Option<PathBuf>,

        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Score a strategic description JSON file
    Score {
        input: PathBuf,

        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = AnalysisConfig::from_env();

    match cli.command {
        Command::Analyze { input, strategy, json } => {
            let params = load_project_json(&input, config.default_duration)
                .with_context(|| format!("loading project from {}", input.display()))?;
            let engine = ScenarioEngine::new(config);
            let mut report = AnalysisReport::build(&engine, params);

            if let Some(path) = strategy {
                let strategic = load_strategy_json(&path)
                    .with_context(|| format!("loading strategy from {}", path.display()))?;
                report = report.with_strategy(&strategic);
            }

            if json {
                println!("{}", report.to_json_pretty()?);
            } else {
                print_report(&report);
            }
        }
        Command::Score { input, json } => {
            let strategic = load_strategy_json(&input)
                .with_context(|| format!("loading strategy from {}", input.display()))?;
            let result = score_strategy(&strategic);

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("Score: {}/100 ({:?})", result.score, result.recommendation);
                println!("  Keyword matches: {}", result.keyword_matches);
                for s in &result.strengths {
                    println!("  + {}", s);
                }
                for w in &result.weaknesses {
                    println!("  - {}", w);
                }
            }
        }
    }

    Ok(())
}

fn print_report(report: &AnalysisReport) {
    let params = &report.parameters;

    let name = if params.project_name.is_empty() { "(unnamed)" } else { params.project_name.as_str() };
    println!("Project: {}", name);
    println!("  Investment: {:.2}", params.initial_investment);
    println!("  Duration: {} months", params.project_duration);
    println!("  Discount Rate: {:.2}%", params.discount_rate);
    println!();

    println!("{:<10} {:>10} {:>14} {:>9} {:>10} {:>14}",
        "Scenario", "ROI %", "NPV", "Payback", "IRR %", "Total Flow");
    println!("{}", "-".repeat(72));

    for (scenario, m) in report.scenarios.iter() {
        let irr = if m.irr_converged {
            format!("{:.2}", m.irr)
        } else {
            format!("~{:.2}", m.irr)
        };
        println!("{:<10} {:>10.2} {:>14.2} {:>9.1} {:>10} {:>14.2}",
            scenario.as_str(),
            m.roi,
            m.npv,
            m.payback,
            irr,
            m.total_revenue,
        );
    }

    println!();
    println!("Verdict: {:?}", report.verdict);

    if let Some(strategy) = &report.strategy {
        println!("Strategic score: {}/100 ({:?})", strategy.score, strategy.recommendation);
    }
}
