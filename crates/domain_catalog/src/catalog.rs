//! The product catalog
//!
//! A `ProductCatalog` holds the closed set of products and add-ons an
//! applicant can configure. The standard catalog is built once behind a
//! `Lazy` static; lookups hand out references into it. The calculator
//! reads from the catalog but never mutates it.

use once_cell::sync::Lazy;
use rust_decimal::Decimal;

use core_kernel::{Money, Rate};

use crate::addon::{AddOnBilling, AddOnDefinition, SelectedAddOn};
use crate::error::CatalogError;
use crate::product::{PaymentFrequency, ProductDetail, ProductOption};

/// Donation percentages the application form offers
pub const DONATION_OPTIONS: [u32; 5] = [0, 1, 2, 3, 5];

/// The closed set of products and add-ons available to applicants
#[derive(Debug, Clone)]
pub struct ProductCatalog {
    products: Vec<ProductOption>,
    add_ons: Vec<AddOnDefinition>,
}

static STANDARD_CATALOG: Lazy<ProductCatalog> = Lazy::new(build_standard_catalog);

impl ProductCatalog {
    /// Creates a catalog from explicit product and add-on lists
    pub fn new(products: Vec<ProductOption>, add_ons: Vec<AddOnDefinition>) -> Self {
        Self { products, add_ons }
    }

    /// Returns the standard catalog
    pub fn standard() -> &'static ProductCatalog {
        &STANDARD_CATALOG
    }

    /// Returns all products
    pub fn products(&self) -> &[ProductOption] {
        &self.products
    }

    /// Returns all add-on definitions
    pub fn add_ons(&self) -> &[AddOnDefinition] {
        &self.add_ons
    }

    /// Looks up a product by its exact name
    pub fn product(&self, name: &str) -> Option<&ProductOption> {
        self.products.iter().find(|p| p.name == name)
    }

    /// Looks up an add-on definition by id
    pub fn add_on(&self, id: &str) -> Option<&AddOnDefinition> {
        self.add_ons.iter().find(|a| a.id == id)
    }

    /// Returns the add-ons that may be attached to the named product
    pub fn add_ons_for(&self, product_name: &str) -> Vec<&AddOnDefinition> {
        self.add_ons
            .iter()
            .filter(|a| a.is_eligible_for(product_name))
            .collect()
    }

    /// Snapshots an add-on for attachment to the named product
    ///
    /// This is the copy-on-select operation: the returned snapshot keeps
    /// the definition's current price even if the catalog is later
    /// repriced.
    ///
    /// # Errors
    ///
    /// Returns an error if the product or add-on is unknown, or if the
    /// add-on is not eligible for the product.
    pub fn select_add_on(
        &self,
        product_name: &str,
        add_on_id: &str,
    ) -> Result<SelectedAddOn, CatalogError> {
        let product = self
            .product(product_name)
            .ok_or_else(|| CatalogError::UnknownProduct(product_name.to_string()))?;
        let definition = self
            .add_on(add_on_id)
            .ok_or_else(|| CatalogError::UnknownAddOn(add_on_id.to_string()))?;

        if !definition.is_eligible_for(&product.name) {
            return Err(CatalogError::NotEligible {
                add_on: definition.id.clone(),
                product: product.name.clone(),
            });
        }

        Ok(SelectedAddOn::snapshot(definition))
    }
}

fn php(amount: i64) -> Money {
    Money::new(Decimal::from(amount))
}

fn pct(percentage: u32) -> Rate {
    Rate::from_percentage(Decimal::from(percentage))
}

fn detail(title: &str, body: &str) -> ProductDetail {
    ProductDetail {
        title: title.to_string(),
        body: body.to_string(),
    }
}

fn build_standard_catalog() -> ProductCatalog {
    let both_frequencies = vec![PaymentFrequency::Annually, PaymentFrequency::Monthly];

    let products = vec![
        ProductOption {
            name: "Pet Care Essential".to_string(),
            description: "Entry-level accident and illness cover for cats and dogs."
                .to_string(),
            coverage_options: vec![php(25_000), php(50_000), php(75_000)],
            deductible_options: vec![php(1_000), php(2_500)],
            reimbursement_options: vec![pct(70), pct(80)],
            payment_frequency_options: both_frequencies.clone(),
            details: vec![
                detail(
                    "Accident & Illness",
                    "Veterinary fees for accidental injury and illness, up to the annual coverage ceiling.",
                ),
                detail(
                    "Emergency Care",
                    "Emergency consultation and confinement at accredited clinics nationwide.",
                ),
            ],
        },
        ProductOption {
            name: "Pet Care Plus".to_string(),
            description: "Broader cover with higher ceilings and a 90% reimbursement option."
                .to_string(),
            coverage_options: vec![php(50_000), php(100_000), php(150_000)],
            deductible_options: vec![php(1_000), php(2_500)],
            reimbursement_options: vec![pct(70), pct(80), pct(90)],
            payment_frequency_options: both_frequencies.clone(),
            details: vec![
                detail(
                    "Accident & Illness",
                    "Veterinary fees for accidental injury and illness, up to the annual coverage ceiling.",
                ),
                detail(
                    "Diagnostics & Imaging",
                    "Laboratory work, x-ray, and ultrasound included in covered treatment plans.",
                ),
                detail(
                    "Hereditary Conditions",
                    "Hereditary and congenital conditions covered after the waiting period.",
                ),
            ],
        },
        ProductOption {
            name: "Pet Care Elite".to_string(),
            description: "Comprehensive cover for high-value pets with low deductibles."
                .to_string(),
            coverage_options: vec![php(100_000), php(200_000), php(300_000)],
            deductible_options: vec![php(500), php(1_000)],
            reimbursement_options: vec![pct(80), pct(90)],
            payment_frequency_options: both_frequencies,
            details: vec![
                detail(
                    "Comprehensive Cover",
                    "Accident, illness, hereditary, and behavioral treatment in one plan.",
                ),
                detail(
                    "Specialist Referral",
                    "Specialist and rehabilitation treatment on referral by an accredited veterinarian.",
                ),
                detail(
                    "Chronic Condition Care",
                    "Ongoing medication for covered chronic conditions, renewable yearly.",
                ),
            ],
        },
    ];

    let all_products = vec![
        "Pet Care Essential".to_string(),
        "Pet Care Plus".to_string(),
        "Pet Care Elite".to_string(),
    ];

    let add_ons = vec![
        AddOnDefinition {
            id: "dental-care".to_string(),
            name: "Dental Care Rider".to_string(),
            description: "Covers dental treatment and extractions.".to_string(),
            price: php(1_200),
            billing: AddOnBilling::Annual,
            eligible_products: vec![
                "Pet Care Plus".to_string(),
                "Pet Care Elite".to_string(),
            ],
        },
        AddOnDefinition {
            id: "wellness-vaccination".to_string(),
            name: "Wellness & Vaccination Package".to_string(),
            description: "Annual wellness exam, core vaccinations, and deworming.".to_string(),
            price: php(1_500),
            billing: AddOnBilling::Annual,
            eligible_products: all_products.clone(),
        },
        AddOnDefinition {
            id: "microchip-registration".to_string(),
            name: "Microchip & Registration".to_string(),
            description: "Microchip implantation and national registry listing.".to_string(),
            price: php(2_500),
            billing: AddOnBilling::OneTime,
            eligible_products: all_products.clone(),
        },
        AddOnDefinition {
            id: "lost-pet-recovery".to_string(),
            name: "Lost Pet Recovery Assist".to_string(),
            description: "Poster printing, registry alerts, and a reward fund.".to_string(),
            price: php(800),
            billing: AddOnBilling::OneTime,
            eligible_products: all_products,
        },
        AddOnDefinition {
            id: "liability-cover".to_string(),
            name: "Third-Party Liability Cover".to_string(),
            description: "Covers injury or property damage caused by the insured pet.".to_string(),
            price: php(950),
            billing: AddOnBilling::Annual,
            eligible_products: vec!["Pet Care Elite".to_string()],
        },
    ];

    ProductCatalog::new(products, add_ons)
}
