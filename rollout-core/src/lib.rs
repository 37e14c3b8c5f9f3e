//! Rollout Core - deterministic implementation-timeline planning
//!
//! This crate computes a project timeline (an ordered sequence of named
//! phases with week offsets and durations) from an organization-size
//! parameter and a selection of work items. The computation is a pure
//! function: no I/O, no randomness, no state between calls.

pub mod catalog;
pub mod config;
pub mod error;
pub mod plan;
pub mod tier;

pub use catalog::{ItemId, SelectionSet, WorkItem};
pub use config::{Config, OutputFormat, EMPLOYEE_RANGE};
pub use error::{Error, Result};
pub use plan::{format_weeks, generate, Phase, PhaseTag, Plan};
pub use tier::OrgSizeTier;
