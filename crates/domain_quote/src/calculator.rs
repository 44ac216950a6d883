//! Premium calculation
//!
//! The calculator is a pure function of a fully configured quote
//! request. It performs no I/O, keeps no state between calls, and never
//! fails: malformed currency strings, unknown products, and rating-table
//! misses all degrade in-band to zero components so the reactive quoting
//! flow can recompute on every selection change without error handling.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{parse_currency, parse_percent, Money};
use domain_catalog::{AddOnBilling, PaymentFrequency, SelectedAddOn};

use crate::breakdown::PremiumBreakdown;
use crate::rate_table::RateTable;
use crate::risk::{PetRiskFactors, RiskTable};

/// A fully configured quote request
///
/// Coverage, deductible, and reimbursement arrive as the display strings
/// the form presents (`"₱50,000"`, `"80%"`); the calculator parses them
/// leniently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Selected product name
    pub product_name: String,
    /// Selected coverage ceiling, currency-formatted
    pub coverage_amount: String,
    /// Selected deductible, currency-formatted
    pub deductible: String,
    /// Selected reimbursement rate, percentage-formatted
    pub reimbursement_rate: String,
    /// Selected payment frequency
    pub payment_frequency: PaymentFrequency,
    /// Add-on snapshots taken at selection time
    pub selected_add_ons: Vec<SelectedAddOn>,
    /// Donation percentage of the base premium
    pub donation_percentage: u32,
    /// Pet risk factors
    pub pet: PetRiskFactors,
}

/// Deterministic premium calculator over a rating and a risk table
pub struct PremiumCalculator {
    rate_table: RateTable,
    risk_table: RiskTable,
}

impl PremiumCalculator {
    /// Creates a calculator over explicit tables
    pub fn new(rate_table: RateTable, risk_table: RiskTable) -> Self {
        Self {
            rate_table,
            risk_table,
        }
    }

    /// Creates a calculator over the standard built-in tables
    pub fn standard() -> Self {
        Self::new(RateTable::standard(), RiskTable::standard())
    }

    /// Returns the rating table
    pub fn rate_table(&self) -> &RateTable {
        &self.rate_table
    }

    /// Returns the risk table
    pub fn risk_table(&self) -> &RiskTable {
        &self.risk_table
    }

    /// Computes the premium breakdown for a quote request.
    ///
    /// Identical inputs always produce identical results. A request the
    /// rating table cannot resolve (unknown product, unrated
    /// combination, unparsed selections) yields the all-zero breakdown.
    pub fn calculate(&self, request: &QuoteRequest) -> PremiumBreakdown {
        let coverage = parse_currency(&request.coverage_amount);
        let deductible = parse_currency(&request.deductible);
        let reimbursement = parse_percent(&request.reimbursement_rate);

        let Some(table_base) = self.rate_table.base_annual(
            &request.product_name,
            coverage,
            deductible,
            reimbursement,
        ) else {
            return PremiumBreakdown::zero();
        };

        let base_annual = table_base
            .multiply(self.risk_table.loading_for(&request.pet))
            .round_centavos();

        let mut annual_add_ons = Money::zero();
        let mut one_time_total = Money::zero();
        for add_on in &request.selected_add_ons {
            // Snapshots come off the wire; a negative price clamps to
            // zero rather than reducing the premium.
            let price = add_on.price.clamp_non_negative();
            match add_on.billing {
                AddOnBilling::Annual => annual_add_ons = annual_add_ons + price,
                AddOnBilling::OneTime => one_time_total = one_time_total + price,
            }
        }

        let donation_amount = base_annual
            .multiply(Decimal::from(request.donation_percentage) / dec!(100))
            .round_centavos();

        let annual_total = base_annual + annual_add_ons + donation_amount;

        // Monthly billing pays the equal monthly share of the annual
        // total plus the flat billing surcharge; annual billing has no
        // monthly figure.
        let monthly_total = match request.payment_frequency {
            PaymentFrequency::Monthly => annual_total
                .multiply(request.payment_frequency.surcharge_factor() / dec!(12))
                .round_centavos(),
            PaymentFrequency::Annually => Money::zero(),
        };

        let breakdown = PremiumBreakdown {
            base_annual,
            annual_total,
            monthly_total,
            one_time_total,
            donation_amount,
        };

        tracing::debug!(
            product = %request.product_name,
            base_annual = %breakdown.base_annual,
            annual_total = %breakdown.annual_total,
            monthly_total = %breakdown.monthly_total,
            one_time_total = %breakdown.one_time_total,
            "premium computed"
        );

        breakdown
    }
}

impl Default for PremiumCalculator {
    fn default() -> Self {
        Self::standard()
    }
}
