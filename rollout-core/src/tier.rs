//! Organization-size tiers
//!
//! An employee count is classified into one of four bands, each carrying
//! a linear time-scaling multiplier applied to base durations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Organization-size band controlling the time-scaling multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrgSizeTier {
    /// Fewer than 25 employees
    Small,
    /// 25 to 99 employees
    Medium,
    /// 100 to 499 employees
    Large,
    /// 500 employees or more
    Enterprise,
}

impl OrgSizeTier {
    /// Classify an employee count into its size band
    ///
    /// Bands are contiguous, non-overlapping and left-inclusive:
    /// [0,25), [25,100), [100,500), [500,∞). Total over all of u32.
    pub fn classify(employees: u32) -> Self {
        if employees < 25 {
            OrgSizeTier::Small
        } else if employees < 100 {
            OrgSizeTier::Medium
        } else if employees < 500 {
            OrgSizeTier::Large
        } else {
            OrgSizeTier::Enterprise
        }
    }

    /// Time-scaling multiplier applied to base durations
    pub fn multiplier(&self) -> f64 {
        match self {
            OrgSizeTier::Small => 0.75,
            OrgSizeTier::Medium => 1.0,
            OrgSizeTier::Large => 1.5,
            OrgSizeTier::Enterprise => 2.0,
        }
    }

    /// Get the display label for this tier
    pub fn label(&self) -> &'static str {
        match self {
            OrgSizeTier::Small => "Small",
            OrgSizeTier::Medium => "Medium",
            OrgSizeTier::Large => "Large",
            OrgSizeTier::Enterprise => "Enterprise",
        }
    }
}

impl fmt::Display for OrgSizeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
