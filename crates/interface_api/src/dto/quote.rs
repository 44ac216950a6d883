//! Quote DTOs
//!
//! The request mirrors the configured terms the application wizard
//! collects; the response carries the breakdown both as raw decimals and
//! as peso-formatted display strings.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::{Money, QuoteId};
use domain_catalog::{PaymentFrequency, SelectedAddOn};
use domain_quote::{PetRiskFactors, PremiumBreakdown, QuoteRequest};

/// A quote request as submitted by the payment step
///
/// Coverage, deductible, and reimbursement arrive as the display strings
/// the dropdowns hold; missing selections default to empty strings and
/// rate to the zero breakdown.
#[derive(Debug, Deserialize, Validate)]
pub struct QuoteRequestDto {
    pub product_name: String,
    #[serde(default)]
    pub coverage_amount: String,
    #[serde(default)]
    pub deductible: String,
    #[serde(default)]
    pub reimbursement_rate: String,
    pub payment_frequency: PaymentFrequency,
    #[serde(default)]
    pub selected_add_ons: Vec<SelectedAddOn>,
    pub donation_percentage: u32,
    #[validate(range(max = 30, message = "pet age is out of range"))]
    pub pet_age: u32,
    #[serde(default)]
    pub pet_breed: String,
    #[serde(default)]
    pub has_pre_existing_conditions: bool,
}

impl QuoteRequestDto {
    /// Converts the wire request into the domain quote request
    pub fn into_domain(self) -> QuoteRequest {
        QuoteRequest {
            product_name: self.product_name,
            coverage_amount: self.coverage_amount,
            deductible: self.deductible,
            reimbursement_rate: self.reimbursement_rate,
            payment_frequency: self.payment_frequency,
            selected_add_ons: self.selected_add_ons,
            donation_percentage: self.donation_percentage,
            pet: PetRiskFactors {
                pet_age: self.pet_age,
                pet_breed: self.pet_breed,
                has_pre_existing_conditions: self.has_pre_existing_conditions,
            },
        }
    }
}

/// One breakdown amount, raw and display-formatted
#[derive(Debug, Serialize)]
pub struct AmountDto {
    pub amount: Decimal,
    pub display: String,
}

impl From<Money> for AmountDto {
    fn from(money: Money) -> Self {
        let rounded = money.round_centavos();
        Self {
            amount: rounded.amount(),
            display: rounded.to_string(),
        }
    }
}

/// The computed premium breakdown
#[derive(Debug, Serialize)]
pub struct BreakdownDto {
    pub base_annual: AmountDto,
    pub annual_total: AmountDto,
    pub monthly_total: AmountDto,
    pub one_time_total: AmountDto,
    pub donation_amount: AmountDto,
}

impl From<&PremiumBreakdown> for BreakdownDto {
    fn from(breakdown: &PremiumBreakdown) -> Self {
        Self {
            base_annual: breakdown.base_annual.into(),
            annual_total: breakdown.annual_total.into(),
            monthly_total: breakdown.monthly_total.into(),
            one_time_total: breakdown.one_time_total.into(),
            donation_amount: breakdown.donation_amount.into(),
        }
    }
}

/// A computed quote
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub quote_id: QuoteId,
    pub product_name: String,
    pub payment_frequency: PaymentFrequency,
    pub breakdown: BreakdownDto,
    /// The disclosed billing surcharge, present only for monthly billing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_surcharge_percent: Option<u32>,
    /// False when the request could not be rated and the client should
    /// show the configuration prompt
    pub configured: bool,
    pub generated_at: DateTime<Utc>,
}

impl QuoteResponse {
    /// Assembles a response from a computed breakdown
    pub fn from_breakdown(request: &QuoteRequest, breakdown: &PremiumBreakdown) -> Self {
        let monthly_surcharge_percent = match request.payment_frequency {
            PaymentFrequency::Monthly => Some(PaymentFrequency::Monthly.surcharge_percent()),
            PaymentFrequency::Annually => None,
        };

        Self {
            quote_id: QuoteId::new_v7(),
            product_name: request.product_name.clone(),
            payment_frequency: request.payment_frequency,
            breakdown: breakdown.into(),
            monthly_surcharge_percent,
            configured: !breakdown.is_unconfigured(),
            generated_at: Utc::now(),
        }
    }
}
