//! Market assumptions: per-month interest rate and fx rate schedules

pub mod loader;

pub use loader::LoadedSchedules;

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Per-month market schedules covering the projection horizon
///
/// `annual_rates` holds one nominal annual interest rate per month (as a
/// fraction); `fx_rates` holds base-currency units per foreign-currency unit.
/// Both must have exactly one entry per projected month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateAssumptions {
    pub annual_rates: Vec<f64>,
    pub fx_rates: Vec<f64>,
}

impl RateAssumptions {
    /// The 24-month reference schedule: declining deposit rates (50% for
    /// months 1-6, then 40%, 30%, 25% per half year) against a steadily
    /// depreciating base currency (fx 39.0 to 46.0).
    pub fn reference_schedule() -> Self {
        let mut annual_rates = Vec::with_capacity(24);
        for &rate in &[0.50, 0.40, 0.30, 0.25] {
            annual_rates.extend(std::iter::repeat(rate).take(6));
        }

        let fx_rates = vec![
            39.0, 39.2, 39.5, 39.8, 40.1, 40.4, //
            40.6, 41.0, 41.3, 41.6, 42.0, 42.4, //
            42.8, 43.1, 43.5, 43.8, 44.1, 44.4, //
            44.7, 45.0, 45.2, 45.5, 45.7, 46.0,
        ];

        Self {
            annual_rates,
            fx_rates,
        }
    }

    /// Constant schedules, for sensitivity runs and tests
    pub fn flat(annual_rate: f64, fx_rate: f64, months: usize) -> Self {
        Self {
            annual_rates: vec![annual_rate; months],
            fx_rates: vec![fx_rate; months],
        }
    }

    /// Load both schedules from CSV files in a directory
    pub fn from_csv_path(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let loaded = LoadedSchedules::load_from(path)?;

        Ok(Self {
            annual_rates: loaded.annual_rates,
            fx_rates: loaded.fx_rates,
        })
    }

    /// Number of months both schedules cover, or None if they disagree
    pub fn months(&self) -> Option<usize> {
        if self.annual_rates.len() == self.fx_rates.len() {
            Some(self.annual_rates.len())
        } else {
            None
        }
    }
}
