//! CLI command implementations

pub mod plan;

pub use plan::PlanArgs;
