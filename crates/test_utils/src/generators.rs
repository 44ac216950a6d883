//! Property-Based Test Generators
//!
//! Proptest strategies that generate quote inputs the way the forms
//! actually produce them: catalog-valid selections rendered in the
//! display formats the parser must accept.

use proptest::prelude::*;

use core_kernel::Money;
use domain_catalog::{PaymentFrequency, ProductCatalog, SelectedAddOn, DONATION_OPTIONS};
use domain_quote::{PetRiskFactors, QuoteRequest};

/// Strategy over the standard catalog's product names
pub fn product_name_strategy() -> impl Strategy<Value = String> {
    let names: Vec<String> = ProductCatalog::standard()
        .products()
        .iter()
        .map(|p| p.name.clone())
        .collect();
    proptest::sample::select(names)
}

/// Strategy over the donation percentages the form offers
pub fn donation_option_strategy() -> impl Strategy<Value = u32> {
    proptest::sample::select(DONATION_OPTIONS.to_vec())
}

/// Strategy over realistic pet ages
pub fn pet_age_strategy() -> impl Strategy<Value = u32> {
    0u32..=20u32
}

/// Strategy over common breed entries
pub fn breed_strategy() -> impl Strategy<Value = String> {
    proptest::sample::select(vec![
        "Aspin".to_string(),
        "Puspin".to_string(),
        "Shih Tzu".to_string(),
        "Labrador Retriever".to_string(),
        "Beagle".to_string(),
        "Persian".to_string(),
    ])
}

/// Strategy over payment frequencies
pub fn frequency_strategy() -> impl Strategy<Value = PaymentFrequency> {
    prop_oneof![
        Just(PaymentFrequency::Annually),
        Just(PaymentFrequency::Monthly),
    ]
}

/// Strategy over risk profiles
pub fn pet_risk_strategy() -> impl Strategy<Value = PetRiskFactors> {
    (pet_age_strategy(), breed_strategy(), any::<bool>()).prop_map(
        |(pet_age, pet_breed, has_pre_existing_conditions)| PetRiskFactors {
            pet_age,
            pet_breed,
            has_pre_existing_conditions,
        },
    )
}

/// Renders an amount in one of the string formats the forms produce
pub fn formatted_amount_strategy(amount: Money) -> impl Strategy<Value = String> {
    prop_oneof![
        // Plain number
        Just(amount.amount().to_string()),
        // Full peso display, e.g. "₱50,000.00"
        Just(amount.to_string()),
        // Peso display with stray spacing
        Just(format!(" {} ", amount)),
    ]
}

/// Strategy over fully configured quote requests
///
/// Selections are drawn from the chosen product's own option sets and
/// add-on eligibility, then rendered as display strings.
pub fn quote_request_strategy() -> impl Strategy<Value = QuoteRequest> {
    product_name_strategy().prop_flat_map(|name| {
        let catalog = ProductCatalog::standard();
        let product = catalog
            .product(&name)
            .expect("strategy only yields catalog products")
            .clone();
        let eligible: Vec<SelectedAddOn> = catalog
            .add_ons_for(&name)
            .into_iter()
            .map(SelectedAddOn::snapshot)
            .collect();
        let add_on_count = eligible.len();

        (
            (
                proptest::sample::select(product.coverage_options.clone())
                    .prop_flat_map(formatted_amount_strategy),
                proptest::sample::select(product.deductible_options.clone())
                    .prop_flat_map(formatted_amount_strategy),
                proptest::sample::select(product.reimbursement_options.clone()),
                frequency_strategy(),
            ),
            (
                proptest::sample::subsequence(eligible, 0..=add_on_count),
                donation_option_strategy(),
                pet_risk_strategy(),
            ),
        )
            .prop_map(
                move |(
                    (coverage_amount, deductible, reimbursement, payment_frequency),
                    (selected_add_ons, donation_percentage, pet),
                )| {
                    QuoteRequest {
                        product_name: name.clone(),
                        coverage_amount,
                        deductible,
                        reimbursement_rate: reimbursement.to_string(),
                        payment_frequency,
                        selected_add_ons,
                        donation_percentage,
                        pet,
                    }
                },
            )
    })
}
