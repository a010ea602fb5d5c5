//! Scenario inputs and a runner for batch projections
//!
//! Pre-loads rate schedules once, then allows running many projections with
//! different scalar assumptions without re-reading CSV files.

use serde::{Deserialize, Serialize};

use crate::assumptions::RateAssumptions;
use crate::projection::{compute_projection, ProjectionError, ProjectionResult};

/// The scalar knobs of a scenario, independent of the rate schedules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Lump sum placed on deposit, base currency
    pub initial_investment: f64,

    /// Rent collected in month 1, base currency
    pub initial_monthly_rent: f64,

    /// Fractional rent escalation applied every 6 months
    pub rent_increase_rate: f64,

    /// Number of months to project
    pub horizon_months: usize,
}

impl Default for ScenarioConfig {
    /// The reference scenario: 2.5M invested against 20k starting rent,
    /// 15% escalation, 24 months.
    fn default() -> Self {
        Self {
            initial_investment: 2_500_000.0,
            initial_monthly_rent: 20_000.0,
            rent_increase_rate: 0.15,
            horizon_months: 24,
        }
    }
}

/// Fully populated projection input: scenario scalars plus the per-month
/// rate schedules covering the horizon
///
/// Constructed fresh for each computation; the engine never reads ambient
/// state. `validate()` is the single gate every projection passes through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioInput {
    pub initial_investment: f64,
    pub initial_monthly_rent: f64,
    pub rent_increase_rate: f64,
    pub horizon_months: usize,
    pub rates: RateAssumptions,
}

impl ScenarioInput {
    pub fn new(config: &ScenarioConfig, rates: RateAssumptions) -> Self {
        Self {
            initial_investment: config.initial_investment,
            initial_monthly_rent: config.initial_monthly_rent,
            rent_increase_rate: config.rent_increase_rate,
            horizon_months: config.horizon_months,
            rates,
        }
    }

    /// The reference scenario with the reference 24-month schedules
    pub fn reference() -> Self {
        Self::new(
            &ScenarioConfig::default(),
            RateAssumptions::reference_schedule(),
        )
    }

    /// Check every precondition the engine relies on.
    ///
    /// The first violation aborts with the corresponding error; a passing
    /// input is guaranteed to project without further validation failures.
    pub fn validate(&self) -> Result<(), ProjectionError> {
        if self.horizon_months == 0 {
            return Err(ProjectionError::ZeroHorizon);
        }
        if self.initial_investment <= 0.0 {
            return Err(ProjectionError::NonPositiveAmount {
                field: "initial_investment",
                value: self.initial_investment,
            });
        }
        if self.initial_monthly_rent <= 0.0 {
            return Err(ProjectionError::NonPositiveAmount {
                field: "initial_monthly_rent",
                value: self.initial_monthly_rent,
            });
        }
        if !(0.0..=1.0).contains(&self.rent_increase_rate) {
            return Err(ProjectionError::IncreaseRateOutOfRange(
                self.rent_increase_rate,
            ));
        }
        if self.rates.annual_rates.len() != self.horizon_months {
            return Err(ProjectionError::LengthMismatch {
                field: "annual_interest_rates",
                expected: self.horizon_months,
                actual: self.rates.annual_rates.len(),
            });
        }
        if self.rates.fx_rates.len() != self.horizon_months {
            return Err(ProjectionError::LengthMismatch {
                field: "fx_rates",
                expected: self.horizon_months,
                actual: self.rates.fx_rates.len(),
            });
        }
        if let Some((i, &a)) = self
            .rates
            .annual_rates
            .iter()
            .enumerate()
            .find(|&(_, &a)| a < -1.0)
        {
            return Err(ProjectionError::RateBelowFloor {
                month: i + 1,
                value: a,
            });
        }
        if let Some((i, &fx)) = self
            .rates
            .fx_rates
            .iter()
            .enumerate()
            .find(|&(_, &fx)| fx <= 0.0)
        {
            return Err(ProjectionError::NonPositiveFxRate {
                month: i + 1,
                value: fx,
            });
        }
        Ok(())
    }
}

/// Pre-loaded scenario runner for efficient batch projections
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
///
/// // Run many scenarios with different escalation assumptions
/// for rate in [0.10, 0.15, 0.20] {
///     let config = ScenarioConfig { rent_increase_rate: rate, ..Default::default() };
///     let result = runner.run(&config)?;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    /// Pre-loaded base rate schedules
    base_rates: RateAssumptions,
}

impl ScenarioRunner {
    /// Create runner with the in-memory reference schedules
    pub fn new() -> Self {
        Self {
            base_rates: RateAssumptions::reference_schedule(),
        }
    }

    /// Create runner by loading schedules from CSV files
    pub fn from_csv_path(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self {
            base_rates: RateAssumptions::from_csv_path(path)?,
        })
    }

    /// Create runner with pre-built schedules
    pub fn with_rates(base_rates: RateAssumptions) -> Self {
        Self { base_rates }
    }

    /// Run a single projection with the given config.
    ///
    /// The base schedules are cut down to the config's horizon; a horizon
    /// longer than the loaded schedules is a length error.
    pub fn run(&self, config: &ScenarioConfig) -> Result<ProjectionResult, ProjectionError> {
        let rates = self.rates_for_horizon(config.horizon_months)?;
        compute_projection(&ScenarioInput::new(config, rates))
    }

    /// Run projections for multiple configs against the same base schedules
    pub fn run_scenarios(
        &self,
        configs: &[ScenarioConfig],
    ) -> Result<Vec<ProjectionResult>, ProjectionError> {
        log::debug!("running {} scenarios", configs.len());
        configs.iter().map(|config| self.run(config)).collect()
    }

    /// Get reference to the base schedules for inspection/modification
    pub fn rates(&self) -> &RateAssumptions {
        &self.base_rates
    }

    /// Get mutable reference to the base schedules for customization
    pub fn rates_mut(&mut self) -> &mut RateAssumptions {
        &mut self.base_rates
    }

    fn rates_for_horizon(&self, horizon_months: usize) -> Result<RateAssumptions, ProjectionError> {
        if self.base_rates.annual_rates.len() < horizon_months {
            return Err(ProjectionError::LengthMismatch {
                field: "annual_interest_rates",
                expected: horizon_months,
                actual: self.base_rates.annual_rates.len(),
            });
        }
        if self.base_rates.fx_rates.len() < horizon_months {
            return Err(ProjectionError::LengthMismatch {
                field: "fx_rates",
                expected: horizon_months,
                actual: self.base_rates.fx_rates.len(),
            });
        }

        Ok(RateAssumptions {
            annual_rates: self.base_rates.annual_rates[..horizon_months].to_vec(),
            fx_rates: self.base_rates.fx_rates[..horizon_months].to_vec(),
        })
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}
