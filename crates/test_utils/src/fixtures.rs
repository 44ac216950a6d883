//! Pre-built Test Fixtures
//!
//! Ready-to-use test data for common entities across the quoting test
//! suite. Fixtures are consistent and predictable so assertions can use
//! exact expected values.

use rust_decimal_macros::dec;

use core_kernel::Money;
use domain_catalog::{PaymentFrequency, ProductCatalog, SelectedAddOn};
use domain_quote::{PetRiskFactors, QuoteRequest};

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// The rated base premium of the standard Essential configuration
    /// (₱50,000 coverage, ₱2,500 deductible, 80% reimbursement)
    pub fn essential_base() -> Money {
        Money::new(dec!(1499))
    }

    /// Price of the annual dental add-on
    pub fn dental_price() -> Money {
        Money::new(dec!(1200))
    }

    /// Price of the one-time microchip add-on
    pub fn microchip_price() -> Money {
        Money::new(dec!(2500))
    }

    /// A zero amount
    pub fn zero() -> Money {
        Money::zero()
    }
}

/// Fixture for catalog test data
pub struct CatalogFixtures;

impl CatalogFixtures {
    /// Name of the entry-level product
    pub fn essential() -> &'static str {
        "Pet Care Essential"
    }

    /// Name of the mid-tier product
    pub fn plus() -> &'static str {
        "Pet Care Plus"
    }

    /// Name of the top-tier product
    pub fn elite() -> &'static str {
        "Pet Care Elite"
    }

    /// A snapshot of the annual dental add-on, taken against Plus
    pub fn dental_snapshot() -> SelectedAddOn {
        ProductCatalog::standard()
            .select_add_on(Self::plus(), "dental-care")
            .expect("dental-care should be selectable for Pet Care Plus")
    }

    /// A snapshot of the one-time microchip add-on
    pub fn microchip_snapshot() -> SelectedAddOn {
        ProductCatalog::standard()
            .select_add_on(Self::essential(), "microchip-registration")
            .expect("microchip-registration should be selectable for Pet Care Essential")
    }

    /// A snapshot of the annual wellness add-on
    pub fn wellness_snapshot() -> SelectedAddOn {
        ProductCatalog::standard()
            .select_add_on(Self::essential(), "wellness-vaccination")
            .expect("wellness-vaccination should be selectable for Pet Care Essential")
    }
}

/// Fixture for quote request test data
pub struct QuoteFixtures;

impl QuoteFixtures {
    /// A fully configured Essential request rating to ₱1,499 base
    pub fn configured() -> QuoteRequest {
        QuoteRequest {
            product_name: CatalogFixtures::essential().to_string(),
            coverage_amount: "₱50,000".to_string(),
            deductible: "₱2,500".to_string(),
            reimbursement_rate: "80%".to_string(),
            payment_frequency: PaymentFrequency::Annually,
            selected_add_ons: vec![],
            donation_percentage: 0,
            pet: PetRiskFactors::baseline(),
        }
    }

    /// The request an untouched form produces: nothing selected yet
    pub fn unconfigured() -> QuoteRequest {
        QuoteRequest {
            product_name: String::new(),
            coverage_amount: String::new(),
            deductible: String::new(),
            reimbursement_rate: String::new(),
            payment_frequency: PaymentFrequency::Annually,
            selected_add_ons: vec![],
            donation_percentage: 0,
            pet: PetRiskFactors {
                pet_age: 0,
                pet_breed: String::new(),
                has_pre_existing_conditions: false,
            },
        }
    }
}
