//! Arena Projection CLI
//!
//! Runs the ten-year projection for one scenario given on the command line,
//! a batch of scenarios from CSV, or a ticket-price sweep.

use anyhow::{Context, Result};
use arena_projection::{
    report::{format_billions, write_series_csv_path, KeyMetrics, ProjectionReport, ProjectionTable},
    scenario::load_scenarios,
    ScenarioInputs, ScenarioParameters, ScenarioRunner,
};
use clap::Parser;
use log::info;
use std::path::{Path, PathBuf};

/// Ten-year financial projection for the orbital game arena.
#[derive(Parser, Debug)]
#[command(name = "arena_projection", version, about)]
struct Cli {
    /// Crew members [default: 15]
    #[arg(long)]
    crew: Option<u32>,

    /// Contestants per event [default: 12]
    #[arg(long)]
    contestants: Option<u32>,

    /// Enable the spectator deck (phase 2)
    #[arg(long)]
    spectators: bool,

    /// Spectators flown up per event [default: 0]
    #[arg(long)]
    spectator_count: Option<u32>,

    /// Ticket price per spectator in millions USD [default: 60]
    #[arg(long)]
    ticket_price: Option<f64>,

    /// Charge extra CAPEX for persons above baseline capacity
    #[arg(long)]
    scale_capex: bool,

    /// Expense the full CAPEX in year 1 instead of amortizing it
    #[arg(long)]
    no_amortization: bool,

    /// Amortization period in years [default: 10]
    #[arg(long)]
    amortization_years: Option<u32>,

    /// Use an explicit annual amortization amount (millions USD) instead of CAPEX / period
    #[arg(long)]
    manual_amortization: Option<f64>,

    /// Also show net profit with the annual amortization subtracted
    #[arg(long)]
    with_amortization: bool,

    /// Run every scenario in this CSV file
    #[arg(long)]
    scenarios: Option<PathBuf>,

    /// Ticket prices (millions USD) to sweep, comma separated
    #[arg(long, value_delimiter = ',')]
    sweep: Vec<f64>,

    /// Write the yearly series to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn inputs(&self) -> ScenarioInputs {
        ScenarioInputs {
            crew_count: self.crew,
            contestant_count: self.contestants,
            include_spectators: Some(self.spectators),
            spectator_count: self.spectator_count,
            ticket_price_millions: self.ticket_price,
            scale_capex_for_extra_capacity: Some(self.scale_capex),
            use_amortization: Some(!self.no_amortization),
            amortization_years: self.amortization_years,
            manual_amortization_override: Some(self.manual_amortization.is_some()),
            manual_amortization_millions: self.manual_amortization,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let runner = ScenarioRunner::new();

    if let Some(path) = &cli.scenarios {
        return run_batch(&cli, &runner, path);
    }

    let params = cli.inputs().resolve();

    if !cli.sweep.is_empty() {
        return run_sweep(&cli, &runner, &params);
    }

    let result = runner
        .run(&params)
        .context("scenario rejected by the projection engine")?;

    if let Some(path) = &cli.csv {
        write_series_csv_path(&result, &params, path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("Yearly series written to {}", path.display());
    }

    let report = ProjectionReport::new(params, result, cli.with_amortization);
    if cli.json {
        println!("{}", report.to_json()?);
        return Ok(());
    }

    println!("Arena Projection v{}", env!("CARGO_PKG_VERSION"));
    println!("=======================\n");
    println!("{}\n", report.metrics);
    if report.result.annual_amortization > 0.0 {
        println!(
            "Annual amortization: {} (not included in net profit below)\n",
            format_billions(report.result.annual_amortization)
        );
    }
    print!("{}", report.table);

    let summary = &report.summary;
    println!("\nSummary:");
    println!("  10-year revenue:    {}", format_billions(summary.total_revenue));
    println!("  10-year net profit: {}", format_billions(summary.total_net_profit));
    match summary.breakeven_year {
        Some(year) => println!("  Breakeven:          year {}", year),
        None => println!("  Breakeven:          not within 10 years"),
    }

    Ok(())
}

fn run_batch(cli: &Cli, runner: &ScenarioRunner, path: &Path) -> Result<()> {
    let scenarios = load_scenarios(path)
        .with_context(|| format!("failed to load scenarios from {}", path.display()))?;
    let outcomes = runner.run_batch(&scenarios);

    if cli.json {
        let mut reports = Vec::with_capacity(outcomes.len());
        for outcome in outcomes {
            let result = outcome
                .result
                .with_context(|| format!("scenario `{}` rejected", outcome.name))?;
            reports.push(ProjectionReport::new(outcome.params, result, cli.with_amortization));
        }
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    for outcome in outcomes {
        println!("== {} ==", outcome.name);
        match outcome.result {
            Ok(result) => {
                println!("{}", KeyMetrics::from_result(&result));
                let table = if cli.with_amortization {
                    ProjectionTable::with_amortization(&result, &outcome.params)
                } else {
                    ProjectionTable::from_result(&result)
                };
                println!("{}", table);
            }
            Err(err) => println!("  error: {}\n", err),
        }
    }
    Ok(())
}

fn run_sweep(cli: &Cli, runner: &ScenarioRunner, base: &ScenarioParameters) -> Result<()> {
    let points = runner
        .ticket_price_sweep(base, &cli.sweep)
        .context("ticket-price sweep rejected")?;

    if cli.json {
        let rows: Vec<_> = points
            .iter()
            .map(|p| {
                serde_json::json!({
                    "ticket_price_millions": p.ticket_price_millions,
                    "year1_revenue": p.result.year1_revenue,
                    "summary": p.result.summary(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("{:>12} {:>14} {:>18} {:>10}", "Ticket ($M)", "Y1 Revenue", "10y Net Profit", "Breakeven");
    println!("{}", "-".repeat(57));
    for p in &points {
        let summary = p.result.summary();
        println!(
            "{:>12.1} {:>14} {:>18} {:>10}",
            p.ticket_price_millions,
            format_billions(p.result.year1_revenue),
            format_billions(summary.total_net_profit),
            summary
                .breakeven_year
                .map(|y| format!("year {}", y))
                .unwrap_or_else(|| "-".to_string()),
        );
    }
    Ok(())
}
