//! Catalog DTOs
//!
//! Option sets are rendered as the display strings the forms present
//! (`"₱50,000.00"`, `"80%"`), alongside the raw numeric price for
//! clients that compute locally.

use rust_decimal::Decimal;
use serde::Serialize;

use domain_catalog::{AddOnBilling, AddOnDefinition, PaymentFrequency, ProductOption};

#[derive(Debug, Serialize)]
pub struct ProductDetailDto {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub name: String,
    pub description: String,
    pub coverage_options: Vec<String>,
    pub deductible_options: Vec<String>,
    pub reimbursement_options: Vec<String>,
    pub payment_frequency_options: Vec<PaymentFrequency>,
    pub details: Vec<ProductDetailDto>,
}

impl From<&ProductOption> for ProductResponse {
    fn from(product: &ProductOption) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            coverage_options: product
                .coverage_options
                .iter()
                .map(|m| m.to_string())
                .collect(),
            deductible_options: product
                .deductible_options
                .iter()
                .map(|m| m.to_string())
                .collect(),
            reimbursement_options: product
                .reimbursement_options
                .iter()
                .map(|r| r.to_string())
                .collect(),
            payment_frequency_options: product.payment_frequency_options.clone(),
            details: product
                .details
                .iter()
                .map(|d| ProductDetailDto {
                    title: d.title.clone(),
                    body: d.body.clone(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AddOnResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub price_display: String,
    #[serde(rename = "type")]
    pub billing: AddOnBilling,
    pub eligible_products: Vec<String>,
}

impl From<&AddOnDefinition> for AddOnResponse {
    fn from(add_on: &AddOnDefinition) -> Self {
        Self {
            id: add_on.id.clone(),
            name: add_on.name.clone(),
            description: add_on.description.clone(),
            price: add_on.price.amount(),
            price_display: add_on.price.to_string(),
            billing: add_on.billing,
            eligible_products: add_on.eligible_products.clone(),
        }
    }
}
