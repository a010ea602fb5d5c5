//! Projection engine for rent-vs-interest income comparisons

mod engine;
mod error;
mod output;

pub use engine::{
    build_interest_series, build_rent_series, compute_projection, convert_to_foreign, summarize,
};
pub use error::ProjectionError;
pub use output::{MonthRow, ProjectionResult, ScenarioSummary};
