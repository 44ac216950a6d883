//! Add-on definitions and selection snapshots
//!
//! Two distinct types model add-ons deliberately: `AddOnDefinition` is
//! the live catalog entry, `SelectedAddOn` is a point-in-time snapshot
//! taken when the applicant toggles the add-on on. A snapshot keeps the
//! price the applicant agreed to; later catalog repricing must not
//! retroactively change an in-progress quote.

use serde::{Deserialize, Serialize};

use core_kernel::Money;

/// How an add-on is billed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AddOnBilling {
    /// Charged once at policy issue
    #[serde(rename = "one-time")]
    OneTime,
    /// Charged every policy year, alongside the base premium
    #[serde(rename = "annual")]
    Annual,
}

/// A static catalog entry for an optional supplemental benefit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddOnDefinition {
    /// Unique slug identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Marketing description
    pub description: String,
    /// Price, non-negative
    pub price: Money,
    /// Billing type
    pub billing: AddOnBilling,
    /// Names of products this add-on may be attached to
    pub eligible_products: Vec<String>,
}

impl AddOnDefinition {
    /// Returns true if this add-on may be attached to the named product
    pub fn is_eligible_for(&self, product_name: &str) -> bool {
        self.eligible_products.iter().any(|p| p == product_name)
    }
}

/// A snapshot of an add-on chosen by the applicant
///
/// Created via [`SelectedAddOn::snapshot`]; holds copies of the catalog
/// fields as they were at selection time and is never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedAddOn {
    /// Id of the definition this was snapshotted from
    pub id: String,
    /// Display name at selection time
    pub name: String,
    /// Price at selection time
    pub price: Money,
    /// Billing type at selection time; serialized as `type` on the wire
    #[serde(rename = "type")]
    pub billing: AddOnBilling,
}

impl SelectedAddOn {
    /// Copies the definition's current fields into a selection snapshot
    pub fn snapshot(definition: &AddOnDefinition) -> Self {
        Self {
            id: definition.id.clone(),
            name: definition.name.clone(),
            price: definition.price,
            billing: definition.billing,
        }
    }
}
