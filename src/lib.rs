//! ROI Projection - Rent-vs-interest income comparison engine
//!
//! This library provides:
//! - Month-by-month rent and deposit-interest income projections
//! - Stepped rent escalation every 6 months
//! - Foreign-currency conversion of both income series
//! - Summary aggregation and a batch scenario runner

pub mod assumptions;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use assumptions::RateAssumptions;
pub use projection::{compute_projection, MonthRow, ProjectionError, ProjectionResult, ScenarioSummary};
pub use scenario::{ScenarioConfig, ScenarioInput, ScenarioRunner};
