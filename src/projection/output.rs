//! Output structures for rent-vs-interest projections

use serde::{Deserialize, Serialize};

use crate::assumptions::RateAssumptions;

/// Complete projection output for one scenario
///
/// All four series have length `horizon_months`. The fx series are the base
/// series divided elementwise by the month's fx rate. Recomputed wholesale
/// from a `ScenarioInput`; never mutated incrementally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Monthly rental income in base currency
    pub rent_series: Vec<f64>,

    /// Monthly interest income in base currency
    pub interest_series: Vec<f64>,

    /// Monthly rental income in foreign currency
    pub rent_series_fx: Vec<f64>,

    /// Monthly interest income in foreign currency
    pub interest_series_fx: Vec<f64>,

    /// Unweighted averages over the horizon
    pub summary: ScenarioSummary,
}

impl ProjectionResult {
    /// Number of projected months
    pub fn horizon_months(&self) -> usize {
        self.rent_series.len()
    }

    /// Per-month view for tabular output
    ///
    /// `rates` must be the schedule the projection was computed from; the
    /// rows echo each month's assumed annual rate and fx rate next to the
    /// four income figures.
    pub fn rows(&self, rates: &RateAssumptions) -> Vec<MonthRow> {
        (0..self.horizon_months())
            .map(|i| MonthRow {
                month: (i + 1) as u32,
                annual_rate: rates.annual_rates[i],
                fx_rate: rates.fx_rates[i],
                rent: self.rent_series[i],
                interest: self.interest_series[i],
                rent_fx: self.rent_series_fx[i],
                interest_fx: self.interest_series_fx[i],
            })
            .collect()
    }
}

/// One month of projection output (1-based month numbering)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthRow {
    pub month: u32,
    pub annual_rate: f64,
    pub fx_rate: f64,
    pub rent: f64,
    pub interest: f64,
    pub rent_fx: f64,
    pub interest_fx: f64,
}

/// Summary statistics for a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSummary {
    /// Arithmetic mean of the annual rates, as a percentage
    pub avg_annual_rate_pct: f64,

    /// Arithmetic mean of the fx rates
    pub avg_fx_rate: f64,

    /// Arithmetic mean of the monthly rent, base currency
    pub avg_monthly_rent: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_pair_series_with_schedule_entries() {
        let result = ProjectionResult {
            rent_series: vec![20_000.0, 20_000.0],
            interest_series: vec![85_000.0, 84_000.0],
            rent_series_fx: vec![512.8, 510.2],
            interest_series_fx: vec![2_179.5, 2_142.9],
            summary: ScenarioSummary {
                avg_annual_rate_pct: 45.0,
                avg_fx_rate: 39.1,
                avg_monthly_rent: 20_000.0,
            },
        };
        let rates = RateAssumptions {
            annual_rates: vec![0.50, 0.40],
            fx_rates: vec![39.0, 39.2],
        };

        let rows = result.rows(&rates);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].month, 1);
        assert_eq!(rows[0].annual_rate, 0.50);
        assert_eq!(rows[1].fx_rate, 39.2);
        assert_eq!(rows[1].interest, 84_000.0);
    }
}
