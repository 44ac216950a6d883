//! Product definitions and configuration option sets
//!
//! A product is a static catalog entry describing what an applicant may
//! configure: the coverage ceilings, deductibles, reimbursement rates,
//! and payment frequencies offered for that plan. Products are created
//! at build time and never mutated.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{Money, Rate};

/// How often the policyholder pays the premium
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentFrequency {
    /// One payment per policy year
    Annually,
    /// Twelve payments per policy year, with a billing surcharge
    Monthly,
}

impl PaymentFrequency {
    /// Returns the number of payments per year
    pub fn payments_per_year(&self) -> u32 {
        match self {
            PaymentFrequency::Annually => 1,
            PaymentFrequency::Monthly => 12,
        }
    }

    /// Returns the billing surcharge applied on top of the equal monthly
    /// share of the annual total
    pub fn surcharge_percent(&self) -> u32 {
        match self {
            PaymentFrequency::Annually => 0,
            PaymentFrequency::Monthly => 5,
        }
    }

    /// Returns the surcharge as a multiplier on the installment share
    pub fn surcharge_factor(&self) -> Decimal {
        Decimal::ONE + Decimal::from(self.surcharge_percent()) / dec!(100)
    }
}

impl fmt::Display for PaymentFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentFrequency::Annually => write!(f, "Annually"),
            PaymentFrequency::Monthly => write!(f, "Monthly"),
        }
    }
}

/// A descriptive detail block shown on the product page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDetail {
    /// Block heading
    pub title: String,
    /// Block body copy
    pub body: String,
}

/// A static catalog entry for an insurance product
///
/// The option vectors are ordered the way they appear in the product's
/// dropdowns, lowest tier first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductOption {
    /// Product name; the closed set of names is defined by the catalog
    pub name: String,
    /// Marketing description
    pub description: String,
    /// Allowed coverage ceilings, ascending
    pub coverage_options: Vec<Money>,
    /// Allowed deductibles, ascending
    pub deductible_options: Vec<Money>,
    /// Allowed reimbursement rates, ascending
    pub reimbursement_options: Vec<Rate>,
    /// Allowed payment frequencies
    pub payment_frequency_options: Vec<PaymentFrequency>,
    /// Descriptive detail blocks
    pub details: Vec<ProductDetail>,
}

impl ProductOption {
    /// Returns true if the coverage amount is one of this product's options
    pub fn allows_coverage(&self, coverage: Money) -> bool {
        self.coverage_options.contains(&coverage)
    }

    /// Returns true if the deductible is one of this product's options
    pub fn allows_deductible(&self, deductible: Money) -> bool {
        self.deductible_options.contains(&deductible)
    }

    /// Returns true if the reimbursement rate is one of this product's options
    pub fn allows_reimbursement(&self, rate: Rate) -> bool {
        self.reimbursement_options.contains(&rate)
    }
}
