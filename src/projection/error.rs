//! Typed errors raised at the projection boundary

use thiserror::Error;

/// Reasons a projection is rejected before any series is produced.
///
/// Validation is all-or-nothing: the first violated precondition aborts the
/// whole computation and no partial result is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    /// A per-month schedule does not cover the projection horizon
    #[error("{field} has {actual} entries, expected {expected} (one per projected month)")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    /// FX conversion is undefined for zero or negative rates
    #[error("fx rate for month {month} must be positive, got {value}")]
    NonPositiveFxRate { month: usize, value: f64 },

    /// Annual rates below -100% have no monthly equivalent
    #[error("annual rate for month {month} is below -100%: {value}")]
    RateBelowFloor { month: usize, value: f64 },

    /// Monetary inputs must be strictly positive
    #[error("{field} must be positive, got {value}")]
    NonPositiveAmount { field: &'static str, value: f64 },

    /// Escalation is a fraction of current rent, bounded to [0, 1]
    #[error("rent increase rate must be within [0, 1], got {0}")]
    IncreaseRateOutOfRange(f64),

    /// A projection over zero months has no output
    #[error("horizon_months must be at least 1")]
    ZeroHorizon,
}
