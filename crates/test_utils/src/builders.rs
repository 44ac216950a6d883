//! Test Data Builders
//!
//! Builder patterns for constructing test data with sensible defaults.
//! Tests specify only the fields under test and inherit defaults for
//! everything else. The default request rates to the ₱1,499 Essential
//! base so expected values stay easy to compute by hand.

use domain_catalog::{PaymentFrequency, SelectedAddOn};
use domain_quote::{PetRiskFactors, QuoteRequest};

use crate::fixtures::QuoteFixtures;

/// Builder for quote requests
pub struct QuoteRequestBuilder {
    request: QuoteRequest,
}

impl Default for QuoteRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteRequestBuilder {
    /// Creates a builder seeded with the configured Essential fixture
    pub fn new() -> Self {
        Self {
            request: QuoteFixtures::configured(),
        }
    }

    /// Creates a builder seeded with an untouched form
    pub fn unconfigured() -> Self {
        Self {
            request: QuoteFixtures::unconfigured(),
        }
    }

    /// Sets the product name
    pub fn with_product(mut self, name: impl Into<String>) -> Self {
        self.request.product_name = name.into();
        self
    }

    /// Sets the coverage amount string as the form would send it
    pub fn with_coverage(mut self, coverage: impl Into<String>) -> Self {
        self.request.coverage_amount = coverage.into();
        self
    }

    /// Sets the deductible string
    pub fn with_deductible(mut self, deductible: impl Into<String>) -> Self {
        self.request.deductible = deductible.into();
        self
    }

    /// Sets the reimbursement rate string
    pub fn with_reimbursement(mut self, rate: impl Into<String>) -> Self {
        self.request.reimbursement_rate = rate.into();
        self
    }

    /// Sets the payment frequency
    pub fn with_frequency(mut self, frequency: PaymentFrequency) -> Self {
        self.request.payment_frequency = frequency;
        self
    }

    /// Appends an add-on snapshot
    pub fn with_add_on(mut self, add_on: SelectedAddOn) -> Self {
        self.request.selected_add_ons.push(add_on);
        self
    }

    /// Sets the donation percentage
    pub fn with_donation(mut self, percentage: u32) -> Self {
        self.request.donation_percentage = percentage;
        self
    }

    /// Sets the pet's age
    pub fn with_pet_age(mut self, age: u32) -> Self {
        self.request.pet.pet_age = age;
        self
    }

    /// Sets the pet's breed
    pub fn with_breed(mut self, breed: impl Into<String>) -> Self {
        self.request.pet.pet_breed = breed.into();
        self
    }

    /// Sets the pre-existing-conditions declaration
    pub fn with_pre_existing_conditions(mut self, declared: bool) -> Self {
        self.request.pet.has_pre_existing_conditions = declared;
        self
    }

    /// Replaces the whole risk profile
    pub fn with_pet(mut self, pet: PetRiskFactors) -> Self {
        self.request.pet = pet;
        self
    }

    /// Builds the quote request
    pub fn build(self) -> QuoteRequest {
        self.request
    }
}
