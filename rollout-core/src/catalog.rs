//! Work-item catalog and selection
//!
//! The catalog is a fixed set of five work items. Its declared order is
//! significant: it fixes both the display order of the generated phases
//! and the order of the sequential scheduling chain.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Identifier for a catalog work item
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemId {
    /// The mandatory product rollout every plan contains
    CoreProduct,
    /// Reporting add-on
    AdvancedReporting,
    /// Third-party integrations
    Integrations,
    /// Custom workflow configuration
    CustomWorkflows,
    /// Staff training, scheduled in parallel with the core rollout
    Training,
}

impl ItemId {
    /// Get all item identifiers in catalog order
    pub fn all() -> &'static [ItemId] {
        &[
            ItemId::CoreProduct,
            ItemId::AdvancedReporting,
            ItemId::Integrations,
            ItemId::CustomWorkflows,
            ItemId::Training,
        ]
    }

    /// Get the stable string form of this identifier
    ///
    /// Used for CLI values, config files and serialized plans.
    pub fn name(&self) -> &'static str {
        match self {
            ItemId::CoreProduct => "core-product",
            ItemId::AdvancedReporting => "advanced-reporting",
            ItemId::Integrations => "integrations",
            ItemId::CustomWorkflows => "custom-workflows",
            ItemId::Training => "training",
        }
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for ItemId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "core-product" | "core" => Ok(ItemId::CoreProduct),
            "advanced-reporting" | "reporting" => Ok(ItemId::AdvancedReporting),
            "integrations" => Ok(ItemId::Integrations),
            "custom-workflows" | "workflows" => Ok(ItemId::CustomWorkflows),
            "training" => Ok(ItemId::Training),
            _ => Err(format!("Unknown work item: {}", s)),
        }
    }
}

/// A single entry in the work-item catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkItem {
    /// Stable identifier
    pub id: ItemId,
    /// Display label
    pub label: &'static str,
    /// Unscaled duration in whole weeks
    pub base_weeks: u32,
    /// Whether selection can drop this item
    pub mandatory: bool,
}

const CATALOG: [WorkItem; 5] = [
    WorkItem {
        id: ItemId::CoreProduct,
        label: "Core Product",
        base_weeks: 4,
        mandatory: true,
    },
    WorkItem {
        id: ItemId::AdvancedReporting,
        label: "Advanced Reporting",
        base_weeks: 2,
        mandatory: false,
    },
    WorkItem {
        id: ItemId::Integrations,
        label: "Third-party Integrations",
        base_weeks: 3,
        mandatory: false,
    },
    WorkItem {
        id: ItemId::CustomWorkflows,
        label: "Custom Workflows",
        base_weeks: 3,
        mandatory: false,
    },
    WorkItem {
        id: ItemId::Training,
        label: "Training & Onboarding",
        base_weeks: 2,
        mandatory: false,
    },
];

/// Get the full catalog in declared order
pub fn items() -> &'static [WorkItem] {
    &CATALOG
}

/// Look up a catalog entry by identifier
pub fn item(id: ItemId) -> &'static WorkItem {
    match id {
        ItemId::CoreProduct => &CATALOG[0],
        ItemId::AdvancedReporting => &CATALOG[1],
        ItemId::Integrations => &CATALOG[2],
        ItemId::CustomWorkflows => &CATALOG[3],
        ItemId::Training => &CATALOG[4],
    }
}

/// Which catalog items are selected for a plan
///
/// Deselecting a mandatory item is refused; that pin is enforced here, at
/// the input layer, not inside the generator.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectionSet {
    selected: BTreeSet<ItemId>,
}

impl SelectionSet {
    /// Selection with only the mandatory items enabled
    pub fn mandatory_only() -> Self {
        let selected = CATALOG
            .iter()
            .filter(|i| i.mandatory)
            .map(|i| i.id)
            .collect();
        Self { selected }
    }

    /// Mark an item as selected
    pub fn select(&mut self, id: ItemId) {
        self.selected.insert(id);
    }

    /// Mark an item as not selected
    ///
    /// Returns false when the item is mandatory and stays selected.
    pub fn deselect(&mut self, id: ItemId) -> bool {
        if item(id).mandatory {
            return false;
        }
        self.selected.remove(&id);
        true
    }

    /// Check whether an item is selected
    pub fn is_selected(&self, id: ItemId) -> bool {
        self.selected.contains(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_and_size() {
        let ids: Vec<ItemId> = items().iter().map(|i| i.id).collect();
        assert_eq!(ids, ItemId::all());
        assert_eq!(items().len(), 5);
    }

    #[test]
    fn test_base_weeks() {
        assert_eq!(item(ItemId::CoreProduct).base_weeks, 4);
        assert_eq!(item(ItemId::AdvancedReporting).base_weeks, 2);
        assert_eq!(item(ItemId::Integrations).base_weeks, 3);
        assert_eq!(item(ItemId::CustomWorkflows).base_weeks, 3);
        assert_eq!(item(ItemId::Training).base_weeks, 2);
    }

    #[test]
    fn test_only_core_product_is_mandatory() {
        let mandatory: Vec<ItemId> = items()
            .iter()
            .filter(|i| i.mandatory)
            .map(|i| i.id)
            .collect();
        assert_eq!(mandatory, vec![ItemId::CoreProduct]);
    }

    #[test]
    fn test_item_lookup() {
        for id in ItemId::all() {
            assert_eq!(item(*id).id, *id);
        }
        assert_eq!(item(ItemId::Training).label, "Training & Onboarding");
    }

    #[test]
    fn test_item_id_display() {
        assert_eq!(ItemId::CoreProduct.to_string(), "core-product");
        assert_eq!(ItemId::Training.to_string(), "training");
    }

    #[test]
    fn test_item_id_from_str() {
        assert_eq!(
            "core-product".parse::<ItemId>().unwrap(),
            ItemId::CoreProduct
        );
        assert_eq!("core".parse::<ItemId>().unwrap(), ItemId::CoreProduct);
        assert_eq!(
            "reporting".parse::<ItemId>().unwrap(),
            ItemId::AdvancedReporting
        );
        assert_eq!(
            "workflows".parse::<ItemId>().unwrap(),
            ItemId::CustomWorkflows
        );
    }

    #[test]
    fn test_item_id_from_str_case_insensitive() {
        assert_eq!("Training".parse::<ItemId>().unwrap(), ItemId::Training);
    }

    #[test]
    fn test_item_id_from_str_invalid() {
        assert!("invalid".parse::<ItemId>().is_err());
    }

    #[test]
    fn test_item_id_serde_roundtrip() {
        let id = ItemId::AdvancedReporting;
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"advanced-reporting\"");
        let parsed: ItemId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_mandatory_only_selection() {
        let selection = SelectionSet::mandatory_only();
        assert!(selection.is_selected(ItemId::CoreProduct));
        assert!(!selection.is_selected(ItemId::Training));
    }

    #[test]
    fn test_default_selection_is_empty() {
        let selection = SelectionSet::default();
        assert!(!selection.is_selected(ItemId::CoreProduct));
    }

    #[test]
    fn test_select_and_deselect() {
        let mut selection = SelectionSet::mandatory_only();
        selection.select(ItemId::Training);
        assert!(selection.is_selected(ItemId::Training));

        assert!(selection.deselect(ItemId::Training));
        assert!(!selection.is_selected(ItemId::Training));
    }

    #[test]
    fn test_deselect_mandatory_is_refused() {
        let mut selection = SelectionSet::mandatory_only();
        assert!(!selection.deselect(ItemId::CoreProduct));
        assert!(selection.is_selected(ItemId::CoreProduct));
    }

    #[test]
    fn test_deselect_unselected_item() {
        let mut selection = SelectionSet::mandatory_only();
        assert!(selection.deselect(ItemId::Integrations));
        assert!(!selection.is_selected(ItemId::Integrations));
    }
}
