//! Timeline generator
//!
//! A plan is a pure function of (employee count, selection): every call
//! rebuilds the phase list from scratch, so no stale phase data can leak
//! between recomputations.

use serde::{Deserialize, Serialize};

use crate::catalog::{self, ItemId, SelectionSet};
use crate::tier::OrgSizeTier;

/// Display name of the planning phase that opens every timeline
const PLANNING_LABEL: &str = "Planning & Requirements";

/// Display name of the deployment phase that closes every timeline
const DEPLOYMENT_LABEL: &str = "Deployment & Go-Live";

/// Unscaled duration of the planning and deployment phases, in weeks
const BOOKEND_BASE_WEEKS: u32 = 2;

/// Stable identity of a phase
///
/// Carried for renderers (color selection, filtering); the generator only
/// uses it to find the core-product phase when scheduling training.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PhaseTag {
    /// Opening planning phase
    Planning,
    /// Phase backing the core-product work item
    CoreProduct,
    /// Phase backing the advanced-reporting work item
    AdvancedReporting,
    /// Phase backing the integrations work item
    Integrations,
    /// Phase backing the custom-workflows work item
    CustomWorkflows,
    /// Phase backing the training work item
    Training,
    /// Closing deployment phase
    Deployment,
}

impl From<ItemId> for PhaseTag {
    fn from(id: ItemId) -> Self {
        match id {
            ItemId::CoreProduct => PhaseTag::CoreProduct,
            ItemId::AdvancedReporting => PhaseTag::AdvancedReporting,
            ItemId::Integrations => PhaseTag::Integrations,
            ItemId::CustomWorkflows => PhaseTag::CustomWorkflows,
            ItemId::Training => PhaseTag::Training,
        }
    }
}

/// A named interval in the timeline
///
/// Offsets and widths are in whole weeks from the start of the plan.
/// Zero-width phases are valid output; renderers decide how to show them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase {
    /// Display name
    pub name: String,
    /// Week offset at which the phase begins
    pub start: u32,
    /// Width in weeks
    pub duration: u32,
    /// Stable identity for renderers
    pub tag: PhaseTag,
}

impl Phase {
    /// First week after the phase
    pub fn end(&self) -> u32 {
        self.start + self.duration
    }
}

/// A computed timeline: ordered phases plus derived totals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// Size band the employee count fell into
    pub tier: OrgSizeTier,
    /// Phases in display order; planning is always first, deployment last
    pub phases: Vec<Phase>,
    /// Maximum phase end across the timeline, in weeks
    pub total_weeks: u32,
}

/// Compute a fresh plan from an employee count and item selection
///
/// Deterministic and total: the same inputs always produce the same plan,
/// and any employee count is accepted. Catalog order fixes both display
/// order and the sequential chain; training is the one item scheduled in
/// parallel, starting once the core product is half done.
pub fn generate(employees: u32, selection: &SelectionSet) -> Plan {
    let tier = OrgSizeTier::classify(employees);
    let multiplier = tier.multiplier();

    let mut phases = Vec::with_capacity(catalog::items().len() + 2);

    let planning = scale(BOOKEND_BASE_WEEKS, multiplier);
    phases.push(Phase {
        name: PLANNING_LABEL.to_string(),
        start: 0,
        duration: planning,
        tag: PhaseTag::Planning,
    });

    // Cursor for the sequential chain; training never advances it.
    let mut next_start = planning;

    for item in catalog::items() {
        if !selection.is_selected(item.id) {
            continue;
        }

        let duration = scale(item.base_weeks, multiplier);
        let start = if item.id == ItemId::Training {
            training_start(&phases).unwrap_or_else(|| {
                // Mandatory-item contract violated by the caller; schedule
                // training on the sequential chain instead of failing.
                tracing::debug!("training selected without core product, scheduling sequentially");
                next_start
            })
        } else {
            next_start
        };

        phases.push(Phase {
            name: item.label.to_string(),
            start,
            duration,
            tag: item.id.into(),
        });

        if item.id != ItemId::Training {
            next_start += duration;
        }
    }

    phases.push(Phase {
        name: DEPLOYMENT_LABEL.to_string(),
        start: next_start,
        duration: scale(BOOKEND_BASE_WEEKS, multiplier),
        tag: PhaseTag::Deployment,
    });

    let total_weeks = phases.iter().map(Phase::end).max().unwrap_or(0);

    Plan {
        tier,
        phases,
        total_weeks,
    }
}

/// Start week for training: the core-product phase is half done
///
/// Looks the phase up by tag identity, not by label.
fn training_start(phases: &[Phase]) -> Option<u32> {
    phases
        .iter()
        .find(|p| p.tag == PhaseTag::CoreProduct)
        .map(|core| core.start + core.duration / 2)
}

/// Scale a base duration, rounding half away from zero
fn scale(base_weeks: u32, multiplier: f64) -> u32 {
    (f64::from(base_weeks) * multiplier).round() as u32
}
