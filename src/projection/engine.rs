//! Core arithmetic for monthly rent and interest income projections

use super::error::ProjectionError;
use super::output::{ProjectionResult, ScenarioSummary};
use crate::scenario::ScenarioInput;

/// Build the monthly rent schedule.
///
/// Month 0 carries the initial rent unescalated. Every 6th month thereafter
/// the running rent is raised by `increase_rate` before being recorded, so
/// steps land exactly at indices 6, 12, 18, ...
pub fn build_rent_series(
    initial_rent: f64,
    increase_rate: f64,
    horizon_months: usize,
) -> Result<Vec<f64>, ProjectionError> {
    if horizon_months == 0 {
        return Err(ProjectionError::ZeroHorizon);
    }
    if initial_rent <= 0.0 {
        return Err(ProjectionError::NonPositiveAmount {
            field: "initial_monthly_rent",
            value: initial_rent,
        });
    }
    if !(0.0..=1.0).contains(&increase_rate) {
        return Err(ProjectionError::IncreaseRateOutOfRange(increase_rate));
    }

    let mut series = Vec::with_capacity(horizon_months);
    let mut current = initial_rent;
    for month in 0..horizon_months {
        if month > 0 && month % 6 == 0 {
            current *= 1.0 + increase_rate;
        }
        series.push(current);
    }
    Ok(series)
}

/// Build the monthly interest income schedule.
///
/// Each annual rate is converted to its effective monthly equivalent,
/// `(1 + a)^(1/12) - 1`, rather than a flat `a / 12`. Interest accrues on the
/// original principal only; accrued interest is not reinvested.
pub fn build_interest_series(
    principal: f64,
    annual_rates: &[f64],
) -> Result<Vec<f64>, ProjectionError> {
    if principal <= 0.0 {
        return Err(ProjectionError::NonPositiveAmount {
            field: "initial_investment",
            value: principal,
        });
    }
    // Rates below -100% have no real 12th root; reject before powf sees them
    if let Some((i, &a)) = annual_rates.iter().enumerate().find(|&(_, &a)| a < -1.0) {
        return Err(ProjectionError::RateBelowFloor {
            month: i + 1,
            value: a,
        });
    }

    Ok(annual_rates
        .iter()
        .map(|&a| principal * ((1.0 + a).powf(1.0 / 12.0) - 1.0))
        .collect())
}

/// Convert a base-currency series to foreign currency, elementwise.
pub fn convert_to_foreign(series: &[f64], fx_rates: &[f64]) -> Result<Vec<f64>, ProjectionError> {
    if series.len() != fx_rates.len() {
        return Err(ProjectionError::LengthMismatch {
            field: "fx_rates",
            expected: series.len(),
            actual: fx_rates.len(),
        });
    }
    if let Some((i, &fx)) = fx_rates.iter().enumerate().find(|&(_, &fx)| fx <= 0.0) {
        return Err(ProjectionError::NonPositiveFxRate {
            month: i + 1,
            value: fx,
        });
    }

    Ok(series
        .iter()
        .zip(fx_rates)
        .map(|(value, fx)| value / fx)
        .collect())
}

/// Unweighted averages over the horizon. The annual rate is reported as a
/// percentage, matching how it is displayed alongside the charts.
pub fn summarize(rent_series: &[f64], annual_rates: &[f64], fx_rates: &[f64]) -> ScenarioSummary {
    ScenarioSummary {
        avg_annual_rate_pct: mean(annual_rates) * 100.0,
        avg_fx_rate: mean(fx_rates),
        avg_monthly_rent: mean(rent_series),
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Run the full projection for one scenario.
///
/// Pure function of its input: validates every precondition up front, then
/// derives all four series and the summary in one pass. On any violated
/// precondition the whole computation aborts with no partial result.
pub fn compute_projection(input: &ScenarioInput) -> Result<ProjectionResult, ProjectionError> {
    input.validate()?;

    let rent_series = build_rent_series(
        input.initial_monthly_rent,
        input.rent_increase_rate,
        input.horizon_months,
    )?;
    let interest_series =
        build_interest_series(input.initial_investment, &input.rates.annual_rates)?;

    let rent_series_fx = convert_to_foreign(&rent_series, &input.rates.fx_rates)?;
    let interest_series_fx = convert_to_foreign(&interest_series, &input.rates.fx_rates)?;

    let summary = summarize(&rent_series, &input.rates.annual_rates, &input.rates.fx_rates);

    Ok(ProjectionResult {
        rent_series,
        interest_series,
        rent_series_fx,
        interest_series_fx,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::RateAssumptions;
    use approx::assert_relative_eq;

    fn reference_input() -> ScenarioInput {
        ScenarioInput {
            initial_investment: 2_500_000.0,
            initial_monthly_rent: 20_000.0,
            rent_increase_rate: 0.15,
            horizon_months: 24,
            rates: RateAssumptions::reference_schedule(),
        }
    }

    #[test]
    fn rent_series_steps_every_six_months() {
        let rents = build_rent_series(20_000.0, 0.15, 24).unwrap();

        assert_eq!(rents.len(), 24);
        assert_eq!(rents[0], 20_000.0);
        assert_relative_eq!(rents[6], 23_000.0, max_relative = 1e-9);
        assert_relative_eq!(rents[12], 26_450.0, max_relative = 1e-9);
        assert_relative_eq!(rents[18], 30_417.5, max_relative = 1e-9);

        // Non-decreasing, strictly increasing only at multiples of 6
        for i in 1..rents.len() {
            if i % 6 == 0 {
                assert!(rents[i] > rents[i - 1]);
            } else {
                assert_eq!(rents[i], rents[i - 1]);
            }
        }
    }

    #[test]
    fn zero_increase_rate_yields_flat_rent() {
        let rents = build_rent_series(20_000.0, 0.0, 24).unwrap();
        assert!(rents.iter().all(|&r| r == 20_000.0));
    }

    #[test]
    fn rent_series_rejects_bad_inputs() {
        assert_eq!(
            build_rent_series(20_000.0, 0.15, 0),
            Err(ProjectionError::ZeroHorizon)
        );
        assert!(matches!(
            build_rent_series(-5.0, 0.15, 24),
            Err(ProjectionError::NonPositiveAmount {
                field: "initial_monthly_rent",
                ..
            })
        ));
        assert_eq!(
            build_rent_series(20_000.0, 1.5, 24),
            Err(ProjectionError::IncreaseRateOutOfRange(1.5))
        );
    }

    #[test]
    fn interest_uses_effective_monthly_rate() {
        let incomes = build_interest_series(2_500_000.0, &[0.50, 0.25]).unwrap();

        let expected_m0 = 2_500_000.0 * (1.50_f64.powf(1.0 / 12.0) - 1.0);
        let expected_m1 = 2_500_000.0 * (1.25_f64.powf(1.0 / 12.0) - 1.0);
        assert_relative_eq!(incomes[0], expected_m0, max_relative = 1e-9);
        assert_relative_eq!(incomes[1], expected_m1, max_relative = 1e-9);

        // Sanity against the hand-computed reference figure
        assert!((incomes[0] - 85_453.0).abs() < 1.0);
    }

    #[test]
    fn interest_rejects_rates_below_total_loss() {
        let err = build_interest_series(1_000.0, &[0.10, -1.5]).unwrap_err();
        assert_eq!(
            err,
            ProjectionError::RateBelowFloor {
                month: 2,
                value: -1.5
            }
        );

        // Exactly -100% is the floor and is accepted
        let incomes = build_interest_series(1_000.0, &[-1.0]).unwrap();
        assert_relative_eq!(incomes[0], -1_000.0, max_relative = 1e-9);
    }

    #[test]
    fn foreign_conversion_divides_elementwise() {
        let foreign = convert_to_foreign(&[20_000.0, 23_000.0], &[39.0, 46.0]).unwrap();
        assert_relative_eq!(foreign[0], 512.8205128205128, max_relative = 1e-9);
        assert_relative_eq!(foreign[1], 500.0, max_relative = 1e-9);
    }

    #[test]
    fn foreign_conversion_rejects_bad_fx() {
        assert_eq!(
            convert_to_foreign(&[1.0, 2.0], &[39.0]),
            Err(ProjectionError::LengthMismatch {
                field: "fx_rates",
                expected: 2,
                actual: 1,
            })
        );
        assert_eq!(
            convert_to_foreign(&[1.0, 2.0], &[39.0, 0.0]),
            Err(ProjectionError::NonPositiveFxRate {
                month: 2,
                value: 0.0
            })
        );
        assert!(convert_to_foreign(&[1.0], &[-40.0]).is_err());
    }

    #[test]
    fn reference_scenario_matches_expected_values() {
        let input = reference_input();
        let result = compute_projection(&input).unwrap();

        assert_eq!(result.rent_series.len(), 24);
        assert_eq!(result.interest_series.len(), 24);
        assert_eq!(result.rent_series_fx.len(), 24);
        assert_eq!(result.interest_series_fx.len(), 24);

        assert_eq!(result.rent_series[0], 20_000.0);
        assert_relative_eq!(result.rent_series[6], 23_000.0, max_relative = 1e-9);
        assert_relative_eq!(
            result.rent_series_fx[0],
            20_000.0 / 39.0,
            max_relative = 1e-9
        );
        assert!((result.interest_series[0] - 85_453.0).abs() < 1.0);

        // Averages of the reference schedule
        assert_relative_eq!(result.summary.avg_annual_rate_pct, 36.25, max_relative = 1e-9);
        assert_relative_eq!(
            result.summary.avg_monthly_rent,
            24_966.875,
            max_relative = 1e-9
        );
        assert!(result.summary.avg_fx_rate > 39.0 && result.summary.avg_fx_rate < 46.0);
    }

    #[test]
    fn fx_series_are_quotients_of_base_series() {
        let input = reference_input();
        let result = compute_projection(&input).unwrap();

        for i in 0..input.horizon_months {
            let fx = input.rates.fx_rates[i];
            assert_relative_eq!(
                result.rent_series_fx[i],
                result.rent_series[i] / fx,
                max_relative = 1e-9
            );
            assert_relative_eq!(
                result.interest_series_fx[i],
                result.interest_series[i] / fx,
                max_relative = 1e-9
            );
        }
    }

    #[test]
    fn projection_is_idempotent() {
        let input = reference_input();
        let first = compute_projection(&input).unwrap();
        let second = compute_projection(&input).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn mismatched_schedule_lengths_are_fatal() {
        let mut input = reference_input();
        input.rates.annual_rates.truncate(12);

        let err = compute_projection(&input).unwrap_err();
        assert_eq!(
            err,
            ProjectionError::LengthMismatch {
                field: "annual_interest_rates",
                expected: 24,
                actual: 12,
            }
        );
    }
}
