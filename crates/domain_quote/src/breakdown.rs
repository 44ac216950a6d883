//! Premium breakdown value object

use serde::{Deserialize, Serialize};

use core_kernel::Money;

/// The result of a premium calculation
///
/// Recomputed in full on every input change; never persisted by the
/// quoting engine itself. All fields are non-negative. The all-zero
/// breakdown is the in-band "insufficient configuration" value, not an
/// error: no product in the catalog is free, so zero totals always mean
/// the applicant has not finished configuring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PremiumBreakdown {
    /// Yearly cost of the rated product combination after risk loadings
    pub base_annual: Money,
    /// Base premium plus annual add-ons plus donation
    pub annual_total: Money,
    /// Monthly installment including the billing surcharge; zero when
    /// billed annually
    pub monthly_total: Money,
    /// Sum of one-time add-on prices, charged once at issue
    pub one_time_total: Money,
    /// Voluntary donation, proportional to the base premium
    pub donation_amount: Money,
}

impl PremiumBreakdown {
    /// The all-zero breakdown
    pub fn zero() -> Self {
        Self {
            base_annual: Money::zero(),
            annual_total: Money::zero(),
            monthly_total: Money::zero(),
            one_time_total: Money::zero(),
            donation_amount: Money::zero(),
        }
    }

    /// True when the quote request was not configured far enough to rate
    ///
    /// Mirrors the summary view's check: both recurring and one-time
    /// totals at zero.
    pub fn is_unconfigured(&self) -> bool {
        self.annual_total.is_zero() && self.one_time_total.is_zero()
    }
}
