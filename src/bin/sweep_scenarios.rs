//! Sweep a grid of scenario assumptions against the base rate schedules
//!
//! Outputs one row per (rent increase, initial investment) combination for
//! comparison of totals and the month rent overtakes interest.

use std::time::Instant;

use anyhow::Result;
use rayon::prelude::*;

use roi_projection::{ProjectionResult, ScenarioConfig, ScenarioRunner};

/// Aggregated outcome of one swept scenario
#[derive(Debug, Clone)]
struct SweepRow {
    rent_increase_rate: f64,
    initial_investment: f64,
    avg_monthly_rent: f64,
    total_rent: f64,
    total_interest: f64,
    /// First month (1-based) where rent meets or beats interest, if any
    crossover_month: Option<u32>,
}

fn main() -> Result<()> {
    env_logger::init();

    let start = Instant::now();

    let increase_rates = [0.00, 0.05, 0.10, 0.15, 0.20, 0.25, 0.30];
    let investments = [1_000_000.0, 2_500_000.0, 5_000_000.0, 10_000_000.0];

    let configs: Vec<ScenarioConfig> = increase_rates
        .iter()
        .flat_map(|&rate| {
            investments.iter().map(move |&investment| ScenarioConfig {
                initial_investment: investment,
                rent_increase_rate: rate,
                ..Default::default()
            })
        })
        .collect();

    println!("Sweeping {} scenarios...", configs.len());

    let runner = ScenarioRunner::new();
    let rows: Vec<SweepRow> = configs
        .par_iter()
        .map(|config| {
            let result = runner.run(config)?;
            Ok(summarize_run(config, &result))
        })
        .collect::<Result<_, roi_projection::ProjectionError>>()?;

    println!("Sweep complete in {:?}", start.elapsed());

    // Write output
    let output_path = "sweep_output.csv";
    let mut writer = csv::Writer::from_path(output_path)?;
    writer.write_record([
        "rent_increase",
        "initial_investment",
        "avg_monthly_rent",
        "total_rent",
        "total_interest",
        "crossover_month",
    ])?;

    for row in &rows {
        writer.write_record([
            format!("{:.2}", row.rent_increase_rate),
            format!("{:.0}", row.initial_investment),
            format!("{:.2}", row.avg_monthly_rent),
            format!("{:.2}", row.total_rent),
            format!("{:.2}", row.total_interest),
            row.crossover_month
                .map(|m| m.to_string())
                .unwrap_or_default(),
        ])?;
    }
    writer.flush()?;

    println!("Output written to {output_path}");

    // Print a compact comparison for the reference investment
    println!("\nReference investment (2.5M), by rent increase:");
    for row in rows
        .iter()
        .filter(|r| r.initial_investment == 2_500_000.0)
    {
        let crossover = row
            .crossover_month
            .map(|m| format!("month {m}"))
            .unwrap_or_else(|| "never".to_string());
        println!(
            "  increase {:>4.0}%: total rent {:>12.0}, total interest {:>12.0}, rent overtakes {}",
            row.rent_increase_rate * 100.0,
            row.total_rent,
            row.total_interest,
            crossover,
        );
    }

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}

fn summarize_run(config: &ScenarioConfig, result: &ProjectionResult) -> SweepRow {
    let crossover_month = result
        .rent_series
        .iter()
        .zip(&result.interest_series)
        .position(|(rent, interest)| rent >= interest)
        .map(|i| (i + 1) as u32);

    SweepRow {
        rent_increase_rate: config.rent_increase_rate,
        initial_investment: config.initial_investment,
        avg_monthly_rent: result.summary.avg_monthly_rent,
        total_rent: result.rent_series.iter().sum(),
        total_interest: result.interest_series.iter().sum(),
        crossover_month,
    }
}
