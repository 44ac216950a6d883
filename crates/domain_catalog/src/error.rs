//! Catalog domain errors

use thiserror::Error;

/// Errors that can occur when resolving catalog entries
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Product name is not in the catalog
    #[error("Unknown product: {0}")]
    UnknownProduct(String),

    /// Add-on id is not in the catalog
    #[error("Unknown add-on: {0}")]
    UnknownAddOn(String),

    /// Add-on exists but is not offered with the product
    #[error("Add-on {add_on} is not available for product {product}")]
    NotEligible { add_on: String, product: String },
}
