//! ROI Projection CLI
//!
//! Runs a single rent-vs-interest scenario, prints the month table and
//! summary, and optionally writes the result as CSV and/or JSON.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use chrono::{Months, NaiveDate};
use clap::Parser;

use roi_projection::{compute_projection, RateAssumptions, ScenarioConfig, ScenarioInput};

#[derive(Parser, Debug)]
#[command(name = "roi_projection", version, about = "Rent vs interest income projection")]
struct Cli {
    /// Lump sum placed on deposit, base currency
    #[arg(long, default_value_t = 2_500_000.0)]
    initial_investment: f64,

    /// Rent collected in month 1, base currency
    #[arg(long, default_value_t = 20_000.0)]
    initial_rent: f64,

    /// Rent escalation applied every 6 months, as a fraction
    #[arg(long, default_value_t = 0.15)]
    rent_increase: f64,

    /// Number of months to project
    #[arg(long, default_value_t = 24)]
    horizon: usize,

    /// Directory holding annual_rates.csv and fx_rates.csv;
    /// uses the built-in reference schedules when omitted
    #[arg(long)]
    schedules: Option<PathBuf>,

    /// Calendar month of the first projected month (YYYY-MM);
    /// rows are labeled M1, M2, ... when omitted
    #[arg(long)]
    start_month: Option<String>,

    /// Write the month table to this CSV file
    #[arg(long)]
    csv_out: Option<PathBuf>,

    /// Write the full projection result to this JSON file
    #[arg(long)]
    json_out: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    println!("ROI Projection v{}", env!("CARGO_PKG_VERSION"));
    println!("==================\n");

    let mut rates = match &cli.schedules {
        Some(dir) => RateAssumptions::from_csv_path(dir)
            .map_err(|e| anyhow!("failed to load schedules from {}: {e}", dir.display()))?,
        None => RateAssumptions::reference_schedule(),
    };
    // A shorter horizon uses the leading months of the loaded schedules;
    // a longer one is rejected by validation below.
    rates.annual_rates.truncate(cli.horizon);
    rates.fx_rates.truncate(cli.horizon);

    let config = ScenarioConfig {
        initial_investment: cli.initial_investment,
        initial_monthly_rent: cli.initial_rent,
        rent_increase_rate: cli.rent_increase,
        horizon_months: cli.horizon,
    };
    let input = ScenarioInput::new(&config, rates);

    println!("Scenario:");
    println!("  Initial Investment: {:.0}", config.initial_investment);
    println!("  Initial Rent:       {:.0}", config.initial_monthly_rent);
    println!("  Rent Increase:      {:.0}% every 6 months", config.rent_increase_rate * 100.0);
    println!("  Horizon:            {} months", config.horizon_months);
    println!();

    let result = compute_projection(&input).context("projection rejected")?;
    let labels = month_labels(cli.start_month.as_deref(), cli.horizon)?;
    let rows = result.rows(&input.rates);

    // Month table
    println!(
        "{:>8} {:>9} {:>8} {:>12} {:>12} {:>10} {:>10}",
        "Month", "AnnRate", "FX", "Rent", "Interest", "Rent(FX)", "Int(FX)"
    );
    println!("{}", "-".repeat(76));
    for (row, label) in rows.iter().zip(&labels) {
        println!(
            "{:>8} {:>8.1}% {:>8.2} {:>12.2} {:>12.2} {:>10.2} {:>10.2}",
            label,
            row.annual_rate * 100.0,
            row.fx_rate,
            row.rent,
            row.interest,
            row.rent_fx,
            row.interest_fx,
        );
    }

    // Summary
    println!("\nSummary:");
    println!("  Avg Annual Interest: {:.1}%", result.summary.avg_annual_rate_pct);
    println!("  Avg FX Rate:         {:.2}", result.summary.avg_fx_rate);
    println!("  Avg Monthly Rent:    {:.0}", result.summary.avg_monthly_rent);

    let total_rent: f64 = result.rent_series.iter().sum();
    let total_interest: f64 = result.interest_series.iter().sum();
    println!("  Total Rent:          {:.0}", total_rent);
    println!("  Total Interest:      {:.0}", total_interest);

    if let Some(path) = &cli.csv_out {
        write_csv(path, &rows, &labels)?;
        println!("\nMonth table written to: {}", path.display());
    }

    if let Some(path) = &cli.json_out {
        let file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        serde_json::to_writer_pretty(file, &result)?;
        println!("Result written to: {}", path.display());
    }

    Ok(())
}

/// Row labels: calendar months from a YYYY-MM start, or M1, M2, ...
fn month_labels(start_month: Option<&str>, horizon: usize) -> Result<Vec<String>> {
    match start_month {
        Some(start) => {
            let first = NaiveDate::parse_from_str(&format!("{start}-01"), "%Y-%m-%d")
                .with_context(|| format!("invalid --start-month {start}, expected YYYY-MM"))?;
            (0..horizon)
                .map(|i| {
                    first
                        .checked_add_months(Months::new(i as u32))
                        .map(|d| d.format("%Y-%m").to_string())
                        .ok_or_else(|| anyhow!("month offset {i} overflows the calendar"))
                })
                .collect()
        }
        None => Ok((1..=horizon).map(|m| format!("M{m}")).collect()),
    }
}

fn write_csv(path: &Path, rows: &[roi_projection::MonthRow], labels: &[String]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    writer.write_record([
        "month",
        "label",
        "annual_rate",
        "fx_rate",
        "rent",
        "interest",
        "rent_fx",
        "interest_fx",
    ])?;

    for (row, label) in rows.iter().zip(labels) {
        writer.write_record([
            row.month.to_string(),
            label.clone(),
            format!("{:.6}", row.annual_rate),
            format!("{:.4}", row.fx_rate),
            format!("{:.2}", row.rent),
            format!("{:.2}", row.interest),
            format!("{:.4}", row.rent_fx),
            format!("{:.4}", row.interest_fx),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
