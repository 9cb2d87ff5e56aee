//! The closed set of product categories.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Product category. The storefront sells exactly these seven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductCategory {
    StorageTanks,
    Dewars,
    TransferSystems,
    ValvesFittings,
    SafetyEquipment,
    Instrumentation,
    Accessories,
}

impl ProductCategory {
    /// All categories in storefront display order.
    pub const ALL: [ProductCategory; 7] = [
        ProductCategory::StorageTanks,
        ProductCategory::Dewars,
        ProductCategory::TransferSystems,
        ProductCategory::ValvesFittings,
        ProductCategory::SafetyEquipment,
        ProductCategory::Instrumentation,
        ProductCategory::Accessories,
    ];

    /// Wire tag, e.g. `valves-fittings`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::StorageTanks => "storage-tanks",
            ProductCategory::Dewars => "dewars",
            ProductCategory::TransferSystems => "transfer-systems",
            ProductCategory::ValvesFittings => "valves-fittings",
            ProductCategory::SafetyEquipment => "safety-equipment",
            ProductCategory::Instrumentation => "instrumentation",
            ProductCategory::Accessories => "accessories",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProductCategory::StorageTanks => "Storage Tanks",
            ProductCategory::Dewars => "Dewars",
            ProductCategory::TransferSystems => "Transfer Systems",
            ProductCategory::ValvesFittings => "Valves & Fittings",
            ProductCategory::SafetyEquipment => "Safety Equipment",
            ProductCategory::Instrumentation => "Instrumentation",
            ProductCategory::Accessories => "Accessories",
        }
    }
}

impl FromStr for ProductCategory {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_lowercase();
        ProductCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == tag)
            .ok_or_else(|| CommerceError::UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A category with its label and how many catalog products carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub category: ProductCategory,
    pub label: &'static str,
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_tags() {
        for category in ProductCategory::ALL {
            assert_eq!(category.as_str().parse::<ProductCategory>().unwrap(), category);
        }
    }

    #[test]
    fn test_unknown_tag() {
        let err = "cryo-pumps".parse::<ProductCategory>().unwrap_err();
        assert_eq!(err, CommerceError::UnknownCategory("cryo-pumps".to_string()));
    }

    #[test]
    fn test_serde_uses_kebab_case() {
        let json = serde_json::to_string(&ProductCategory::SafetyEquipment).unwrap();
        assert_eq!(json, "\"safety-equipment\"");
    }
}
