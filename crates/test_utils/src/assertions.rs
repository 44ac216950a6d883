//! Custom Test Assertions
//!
//! Specialized assertion helpers for domain types that give more
//! meaningful failure messages than bare assert_eq.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::Money;
use domain_quote::PremiumBreakdown;

/// Asserts that two Money values are equal within a tolerance
///
/// # Panics
///
/// Panics if the amounts differ by more than the tolerance
pub fn assert_money_approx_eq(actual: &Money, expected: &Money, tolerance: Decimal) {
    let diff = (actual.amount() - expected.amount()).abs();
    assert!(
        diff <= tolerance,
        "Money amounts differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual,
        expected,
        diff,
        tolerance
    );
}

/// Asserts that a Money value is zero
pub fn assert_money_zero(money: &Money) {
    assert!(money.is_zero(), "Expected zero, got {}", money);
}

/// Asserts that a Money value is not negative
pub fn assert_money_non_negative(money: &Money) {
    assert!(!money.is_negative(), "Expected non-negative, got {}", money);
}

/// Asserts that two decimals are equal within a tolerance
pub fn assert_decimal_approx_eq(actual: Decimal, expected: Decimal, tolerance: Decimal) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "Decimals differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual,
        expected,
        diff,
        tolerance
    );
}

/// Asserts that every field of a premium breakdown is non-negative
pub fn assert_breakdown_non_negative(breakdown: &PremiumBreakdown) {
    assert_money_non_negative(&breakdown.base_annual);
    assert_money_non_negative(&breakdown.annual_total);
    assert_money_non_negative(&breakdown.monthly_total);
    assert_money_non_negative(&breakdown.one_time_total);
    assert_money_non_negative(&breakdown.donation_amount);
}

/// Asserts the breakdown additivity invariant:
/// `annual_total = base_annual + annual add-ons + donation_amount`
///
/// # Arguments
///
/// * `breakdown` - The breakdown under test
/// * `annual_add_ons` - The expected sum of annual add-on prices
pub fn assert_breakdown_additive(breakdown: &PremiumBreakdown, annual_add_ons: Money) {
    let expected = breakdown.base_annual + annual_add_ons + breakdown.donation_amount;
    assert_money_approx_eq(&breakdown.annual_total, &expected, dec!(0.01));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_eq_within_tolerance() {
        let a = Money::new(dec!(100.001));
        let b = Money::new(dec!(100.002));
        assert_money_approx_eq(&a, &b, dec!(0.01));
    }

    #[test]
    #[should_panic(expected = "differ by more than tolerance")]
    fn test_approx_eq_outside_tolerance() {
        let a = Money::new(dec!(100.00));
        let b = Money::new(dec!(101.00));
        assert_money_approx_eq(&a, &b, dec!(0.01));
    }

    #[test]
    fn test_breakdown_helpers() {
        let breakdown = PremiumBreakdown {
            base_annual: Money::new(dec!(1499)),
            annual_total: Money::new(dec!(2699)),
            monthly_total: Money::zero(),
            one_time_total: Money::new(dec!(2500)),
            donation_amount: Money::zero(),
        };

        assert_breakdown_non_negative(&breakdown);
        assert_breakdown_additive(&breakdown, Money::new(dec!(1200)));
    }

    #[test]
    #[should_panic(expected = "Expected non-negative")]
    fn test_non_negative_rejects_negative() {
        assert_money_non_negative(&Money::new(dec!(-1)));
    }
}
