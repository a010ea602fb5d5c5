//! CSV-based schedule loader
//!
//! Loads per-month rate schedules from CSV files in data/assumptions/

use std::error::Error;
use std::fs::File;
use std::path::Path;

/// Default path to the schedules directory
pub const DEFAULT_SCHEDULES_PATH: &str = "data/assumptions";

/// Load annual interest rates from CSV
///
/// Expects `annual_rates.csv` with columns `month,annual_rate`, one row per
/// projected month in order.
pub fn load_annual_rates(path: &Path) -> Result<Vec<f64>, Box<dyn Error>> {
    let file = File::open(path.join("annual_rates.csv"))?;
    load_rate_column(file)
}

/// Load fx rates from CSV
///
/// Expects `fx_rates.csv` with columns `month,fx_rate`, one row per projected
/// month in order.
pub fn load_fx_rates(path: &Path) -> Result<Vec<f64>, Box<dyn Error>> {
    let file = File::open(path.join("fx_rates.csv"))?;
    load_rate_column(file)
}

/// Read the second column of a `month,value` CSV in row order
pub fn load_rate_column<R: std::io::Read>(reader: R) -> Result<Vec<f64>, Box<dyn Error>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut values = Vec::new();

    for result in csv_reader.records() {
        let record = result?;
        let _month: usize = record[0].parse()?;
        let value: f64 = record[1].parse()?;
        values.push(value);
    }

    Ok(values)
}

/// Both schedules loaded from a directory
pub struct LoadedSchedules {
    pub annual_rates: Vec<f64>,
    pub fx_rates: Vec<f64>,
}

impl LoadedSchedules {
    /// Load schedules from the default path
    pub fn load_default() -> Result<Self, Box<dyn Error>> {
        Self::load_from(Path::new(DEFAULT_SCHEDULES_PATH))
    }

    /// Load schedules from a specific directory
    pub fn load_from(path: &Path) -> Result<Self, Box<dyn Error>> {
        let schedules = Self {
            annual_rates: load_annual_rates(path)?,
            fx_rates: load_fx_rates(path)?,
        };
        log::info!(
            "loaded schedules from {}: {} rate months, {} fx months",
            path.display(),
            schedules.annual_rates.len(),
            schedules.fx_rates.len()
        );
        Ok(schedules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rate_column_in_row_order() {
        let csv = "month,annual_rate\n1,0.50\n2,0.50\n3,0.40\n";
        let rates = load_rate_column(csv.as_bytes()).unwrap();
        assert_eq!(rates, vec![0.50, 0.50, 0.40]);
    }

    #[test]
    fn rejects_non_numeric_rows() {
        let csv = "month,annual_rate\n1,0.50\n2,not-a-number\n";
        assert!(load_rate_column(csv.as_bytes()).is_err());
    }
}
