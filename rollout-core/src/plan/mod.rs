//! Plan generation and formatting
//!
//! This module turns an employee count and a work-item selection into an
//! ordered sequence of phases with week offsets, plus the derived total
//! duration.

mod format;
mod generator;

pub use format::format_weeks;
pub use generator::{generate, Phase, PhaseTag, Plan};
