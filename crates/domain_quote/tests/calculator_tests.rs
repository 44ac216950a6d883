//! Premium Calculator Tests
//!
//! Exercises the calculation contract end to end:
//! - Determinism and statelessness
//! - Degrade-to-zero behavior on incomplete or malformed input
//! - Add-on partitioning and one-time isolation
//! - Donation proportionality and monotonicity
//! - Monthly billing surcharge
//! - Risk loading monotonicity in age and pre-existing conditions
//!
//! # Test Organization
//!
//! - `determinism_tests` - identical inputs, identical outputs
//! - `degrade_tests` - zero-breakdown policy
//! - `add_on_tests` - partitioning and isolation
//! - `donation_tests` - donation arithmetic
//! - `frequency_tests` - monthly surcharge
//! - `risk_tests` - loading behavior
//! - `property_tests` - invariants over generated requests

use rust_decimal_macros::dec;

use core_kernel::Money;
use domain_catalog::PaymentFrequency;
use domain_quote::{PremiumBreakdown, PremiumCalculator};
use test_utils::{
    assert_breakdown_additive, assert_breakdown_non_negative, assert_money_approx_eq,
    CatalogFixtures, MoneyFixtures, QuoteRequestBuilder,
};

fn calculator() -> PremiumCalculator {
    PremiumCalculator::standard()
}

// ============================================================================
// DETERMINISM TESTS
// ============================================================================

mod determinism_tests {
    use super::*;

    /// Identical inputs produce identical breakdowns
    #[test]
    fn test_calculation_is_deterministic() {
        let calc = calculator();
        let request = QuoteRequestBuilder::new()
            .with_add_on(CatalogFixtures::wellness_snapshot())
            .with_donation(3)
            .with_pet_age(6)
            .build();

        let first = calc.calculate(&request);
        let second = calc.calculate(&request);

        assert_eq!(first, second);
    }

    /// A calculation leaves no state behind that affects the next call
    #[test]
    fn test_calls_are_independent() {
        let calc = calculator();
        let configured = QuoteRequestBuilder::new().build();
        let baseline = calc.calculate(&configured);

        // An unrelated degenerate calculation in between
        let _ = calc.calculate(&QuoteRequestBuilder::unconfigured().build());

        assert_eq!(calc.calculate(&configured), baseline);
    }
}

// ============================================================================
// DEGRADE TESTS
// ============================================================================

mod degrade_tests {
    use super::*;

    /// An untouched form rates to the all-zero breakdown
    #[test]
    fn test_zero_configuration() {
        let breakdown = calculator().calculate(&QuoteRequestBuilder::unconfigured().build());
        assert_eq!(breakdown, PremiumBreakdown::zero());
        assert!(breakdown.is_unconfigured());
    }

    /// Unknown products degrade to zero rather than erroring
    #[test]
    fn test_unknown_product() {
        let request = QuoteRequestBuilder::new()
            .with_product("Pet Care Platinum")
            .build();
        assert!(calculator().calculate(&request).is_unconfigured());
    }

    /// Currency strings keep their full value through parsing
    #[test]
    fn test_formatted_currency_strings_parse_fully() {
        // "₱50,000" must rate as 50000, not as a truncated prefix
        let formatted = QuoteRequestBuilder::new()
            .with_coverage("₱50,000")
            .with_deductible("₱2,500")
            .build();
        let plain = QuoteRequestBuilder::new()
            .with_coverage("50000")
            .with_deductible("2500")
            .build();

        let calc = calculator();
        assert_eq!(calc.calculate(&formatted), calc.calculate(&plain));
        assert_eq!(
            calc.calculate(&formatted).base_annual,
            MoneyFixtures::essential_base()
        );
    }

    /// A not-yet-selected coverage dropdown degrades to zero
    #[test]
    fn test_unselected_coverage() {
        let request = QuoteRequestBuilder::new()
            .with_coverage("Select coverage amount")
            .build();
        assert!(calculator().calculate(&request).is_unconfigured());
    }

    /// An unrated deductible is a table miss, not a fallback
    #[test]
    fn test_unrated_deductible() {
        let request = QuoteRequestBuilder::new().with_deductible("₱1,500").build();
        assert!(calculator().calculate(&request).is_unconfigured());
    }

    /// A coverage between tiers falls back to the nearest lower tier
    #[test]
    fn test_coverage_falls_back_to_lower_tier() {
        let between_tiers = QuoteRequestBuilder::new().with_coverage("₱60,000").build();
        let lower_tier = QuoteRequestBuilder::new().with_coverage("₱50,000").build();

        let calc = calculator();
        assert_eq!(
            calc.calculate(&between_tiers).base_annual,
            calc.calculate(&lower_tier).base_annual
        );
    }
}

// ============================================================================
// ADD-ON TESTS
// ============================================================================

mod add_on_tests {
    use super::*;

    /// One-time and annual add-ons land in their own buckets
    #[test]
    fn test_partition_scenario() {
        // One-time ₱2,500 + annual ₱1,200 on a ₱1,499 base
        let request = QuoteRequestBuilder::new()
            .with_add_on(CatalogFixtures::microchip_snapshot())
            .with_add_on(CatalogFixtures::dental_snapshot())
            .build();

        let breakdown = calculator().calculate(&request);

        assert_eq!(breakdown.one_time_total, Money::new(dec!(2500)));
        assert_eq!(breakdown.annual_total, Money::new(dec!(2699)));
        assert_eq!(breakdown.base_annual, Money::new(dec!(1499)));
    }

    /// One-time add-ons never leak into the recurring totals
    #[test]
    fn test_one_time_isolation() {
        let without = QuoteRequestBuilder::new()
            .with_frequency(PaymentFrequency::Monthly)
            .build();
        let with = QuoteRequestBuilder::new()
            .with_frequency(PaymentFrequency::Monthly)
            .with_add_on(CatalogFixtures::microchip_snapshot())
            .build();

        let calc = calculator();
        let a = calc.calculate(&without);
        let b = calc.calculate(&with);

        assert_eq!(a.annual_total, b.annual_total);
        assert_eq!(a.monthly_total, b.monthly_total);
        assert_eq!(b.one_time_total, Money::new(dec!(2500)));
    }

    /// Annual add-ons raise the annual total by exactly their price
    #[test]
    fn test_annual_add_on_price_flows_through() {
        let base = calculator().calculate(&QuoteRequestBuilder::new().build());
        let with_wellness = calculator().calculate(
            &QuoteRequestBuilder::new()
                .with_add_on(CatalogFixtures::wellness_snapshot())
                .build(),
        );

        assert_eq!(
            with_wellness.annual_total - base.annual_total,
            Money::new(dec!(1500))
        );
    }
}

// ============================================================================
// DONATION TESTS
// ============================================================================

mod donation_tests {
    use super::*;

    /// Donation is the configured percentage of the loaded base premium
    #[test]
    fn test_donation_proportional_to_base() {
        let request = QuoteRequestBuilder::new().with_donation(5).build();
        let breakdown = calculator().calculate(&request);

        // 5% of 1,499 = 74.95
        assert_eq!(breakdown.donation_amount, Money::new(dec!(74.95)));
        assert_eq!(breakdown.annual_total, Money::new(dec!(1573.95)));
    }

    /// Zero percent donates nothing
    #[test]
    fn test_zero_donation() {
        let breakdown = calculator().calculate(&QuoteRequestBuilder::new().build());
        assert!(breakdown.donation_amount.is_zero());
    }

    /// Donation grows with the percentage, never shrinks
    #[test]
    fn test_donation_monotonicity() {
        let calc = calculator();
        let mut previous_donation = Money::zero();
        let mut previous_total = Money::zero();

        for pct in [0u32, 1, 2, 3, 5] {
            let breakdown =
                calc.calculate(&QuoteRequestBuilder::new().with_donation(pct).build());
            assert!(breakdown.donation_amount >= previous_donation);
            assert!(breakdown.annual_total >= previous_total);
            previous_donation = breakdown.donation_amount;
            previous_total = breakdown.annual_total;
        }
    }

    /// Donation rounds to whole centavos
    #[test]
    fn test_donation_rounds_to_centavos() {
        // 1% of 1,449 (Essential 50k / 1,000 / 70%) = 14.49
        let request = QuoteRequestBuilder::new()
            .with_deductible("₱1,000")
            .with_reimbursement("70%")
            .with_donation(1)
            .build();
        let breakdown = calculator().calculate(&request);
        assert_eq!(breakdown.donation_amount, Money::new(dec!(14.49)));
    }
}

// ============================================================================
// FREQUENCY TESTS
// ============================================================================

mod frequency_tests {
    use super::*;

    /// Annual billing reports no monthly figure
    #[test]
    fn test_annual_billing_has_no_monthly_total() {
        let breakdown = calculator().calculate(&QuoteRequestBuilder::new().build());
        assert!(breakdown.monthly_total.is_zero());
    }

    /// Monthly billing pays one twelfth of the annual total plus 5%
    #[test]
    fn test_monthly_surcharge() {
        let request = QuoteRequestBuilder::new()
            .with_frequency(PaymentFrequency::Monthly)
            .build();
        let breakdown = calculator().calculate(&request);

        let expected = breakdown
            .annual_total
            .divide(dec!(12))
            .unwrap()
            .multiply(dec!(1.05));
        assert_money_approx_eq(&breakdown.monthly_total, &expected, dec!(0.01));
        // 1,499 / 12 * 1.05 = 131.1625 -> 131.16
        assert_eq!(breakdown.monthly_total, Money::new(dec!(131.16)));
    }

    /// The surcharge applies to donation and annual add-ons too
    #[test]
    fn test_monthly_surcharge_covers_whole_annual_total() {
        let request = QuoteRequestBuilder::new()
            .with_frequency(PaymentFrequency::Monthly)
            .with_add_on(CatalogFixtures::wellness_snapshot())
            .with_donation(2)
            .build();
        let breakdown = calculator().calculate(&request);

        let expected = breakdown
            .annual_total
            .divide(dec!(12))
            .unwrap()
            .multiply(dec!(1.05))
            .round_centavos();
        assert_eq!(breakdown.monthly_total, expected);
    }
}

// ============================================================================
// RISK TESTS
// ============================================================================

mod risk_tests {
    use super::*;

    /// Older pets rate at least as high as younger ones
    #[test]
    fn test_age_loading_monotonicity() {
        let calc = calculator();
        let young = calc.calculate(&QuoteRequestBuilder::new().with_pet_age(1).build());
        let old = calc.calculate(&QuoteRequestBuilder::new().with_pet_age(10).build());

        assert!(old.base_annual >= young.base_annual);
        // 1,499 * 1.3 = 1,948.70
        assert_eq!(old.base_annual, Money::new(dec!(1948.70)));
    }

    /// Declared pre-existing conditions never lower the premium
    #[test]
    fn test_pre_existing_loading() {
        let calc = calculator();
        let clean = calc.calculate(&QuoteRequestBuilder::new().build());
        let declared = calc.calculate(
            &QuoteRequestBuilder::new()
                .with_pre_existing_conditions(true)
                .build(),
        );

        assert!(declared.base_annual >= clean.base_annual);
        // 1,499 * 1.2 = 1,798.80
        assert_eq!(declared.base_annual, Money::new(dec!(1798.80)));
    }

    /// Age and condition loadings combine multiplicatively
    #[test]
    fn test_combined_loadings() {
        let request = QuoteRequestBuilder::new()
            .with_pet_age(9)
            .with_pre_existing_conditions(true)
            .build();
        let breakdown = calculator().calculate(&request);

        // 1,499 * 1.3 * 1.2 = 2,338.44
        assert_eq!(breakdown.base_annual, Money::new(dec!(2338.44)));
    }

    /// Donation is computed from the loaded base, not the table base
    #[test]
    fn test_donation_applies_after_loading() {
        let request = QuoteRequestBuilder::new()
            .with_pet_age(10)
            .with_donation(5)
            .build();
        let breakdown = calculator().calculate(&request);

        // 5% of 1,948.70 = 97.435 -> 97.44
        assert_eq!(breakdown.donation_amount, Money::new(dec!(97.44)));
    }
}

// ============================================================================
// PROPERTY TESTS
// ============================================================================

mod property_tests {
    use super::*;
    use domain_catalog::AddOnBilling;
    use proptest::prelude::*;
    use test_utils::generators::quote_request_strategy;

    proptest! {
        /// Every field of every breakdown is non-negative
        #[test]
        fn breakdown_fields_are_non_negative(request in quote_request_strategy()) {
            let breakdown = calculator().calculate(&request);
            assert_breakdown_non_negative(&breakdown);
        }

        /// annual_total always equals base + annual add-ons + donation
        #[test]
        fn additivity_invariant_holds(request in quote_request_strategy()) {
            let breakdown = calculator().calculate(&request);
            let annual_add_ons: Money = request
                .selected_add_ons
                .iter()
                .filter(|a| a.billing == AddOnBilling::Annual)
                .map(|a| a.price)
                .sum();
            assert_breakdown_additive(&breakdown, annual_add_ons);
        }

        /// one_time_total is exactly the sum of one-time snapshots
        #[test]
        fn one_time_total_matches_snapshots(request in quote_request_strategy()) {
            let breakdown = calculator().calculate(&request);
            if !breakdown.is_unconfigured() {
                let expected: Money = request
                    .selected_add_ons
                    .iter()
                    .filter(|a| a.billing == AddOnBilling::OneTime)
                    .map(|a| a.price)
                    .sum();
                prop_assert_eq!(breakdown.one_time_total, expected);
            }
        }

        /// Recomputing a request yields a bit-identical breakdown
        #[test]
        fn calculation_is_deterministic(request in quote_request_strategy()) {
            let calc = calculator();
            prop_assert_eq!(calc.calculate(&request), calc.calculate(&request));
        }

        /// Monthly totals honor the surcharge; annual billing reports zero
        #[test]
        fn monthly_total_matches_frequency(request in quote_request_strategy()) {
            let breakdown = calculator().calculate(&request);
            match request.payment_frequency {
                PaymentFrequency::Annually => prop_assert!(breakdown.monthly_total.is_zero()),
                PaymentFrequency::Monthly => {
                    let expected = breakdown
                        .annual_total
                        .divide(dec!(12))
                        .unwrap()
                        .multiply(dec!(1.05));
                    let diff = (breakdown.monthly_total.amount() - expected.amount()).abs();
                    prop_assert!(diff <= dec!(0.01));
                }
            }
        }

        /// Catalog-valid requests always rate to a positive base premium
        #[test]
        fn catalog_valid_requests_are_rated(request in quote_request_strategy()) {
            let breakdown = calculator().calculate(&request);
            prop_assert!(breakdown.base_annual.is_positive());
        }
    }
}
