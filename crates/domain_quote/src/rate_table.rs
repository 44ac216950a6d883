//! Base premium rating table
//!
//! Base annual premiums are a lookup, not a formula: the product forms
//! offer discrete dropdown combinations, and each combination of
//! (product, coverage, deductible, reimbursement rate) maps to a rated
//! base premium. Tables are plain data and deserialize from JSON so the
//! actuarial owner can version them outside the binary; the built-in
//! standard table carries placeholder figures structured for wholesale
//! replacement.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

use core_kernel::{Money, Rate};

use crate::error::QuoteError;

/// A single rated combination
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateEntry {
    /// Product name
    pub product: String,
    /// Coverage ceiling
    pub coverage: Money,
    /// Deductible
    pub deductible: Money,
    /// Reimbursement rate
    pub reimbursement: Rate,
    /// Rated base annual premium
    pub base_annual: Money,
}

/// A rating table of discrete premium rows
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateTable {
    entries: Vec<RateEntry>,
}

impl RateTable {
    /// Creates a table from explicit entries
    pub fn new(entries: Vec<RateEntry>) -> Self {
        Self { entries }
    }

    /// Loads a table from a JSON string
    pub fn from_json(json: &str) -> Result<Self, QuoteError> {
        serde_json::from_str(json).map_err(|e| QuoteError::ParseError(e.to_string()))
    }

    /// Loads a table from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self, QuoteError> {
        let content = std::fs::read_to_string(path)
            .map_err(|_| QuoteError::FileNotFound(path.display().to_string()))?;
        Self::from_json(&content)
    }

    /// Returns all entries
    pub fn entries(&self) -> &[RateEntry] {
        &self.entries
    }

    /// Resolves the base annual premium for a configured combination.
    ///
    /// Resolution is exact on product, deductible, and reimbursement
    /// rate. On the coverage axis, a missing tier falls back to the
    /// nearest LOWER rated tier. Falling back downward is a deliberate
    /// policy: a quote is served from the closest rated row rather than
    /// failed, and the premium is never rounded up to a tier the
    /// applicant did not configure. Change this fallback only together
    /// with the product owner.
    ///
    /// Returns `None` when nothing matches; the caller degrades to the
    /// zero breakdown.
    pub fn base_annual(
        &self,
        product: &str,
        coverage: Money,
        deductible: Money,
        reimbursement: Rate,
    ) -> Option<Money> {
        let candidates: Vec<&RateEntry> = self
            .entries
            .iter()
            .filter(|e| {
                e.product == product
                    && e.deductible == deductible
                    && e.reimbursement == reimbursement
            })
            .collect();

        if let Some(exact) = candidates.iter().find(|e| e.coverage == coverage) {
            return Some(exact.base_annual);
        }

        candidates
            .into_iter()
            .filter(|e| e.coverage < coverage)
            .max_by_key(|e| e.coverage)
            .map(|e| e.base_annual)
    }

    /// Returns the standard built-in table
    pub fn standard() -> Self {
        fn entry(
            product: &str,
            coverage: i64,
            deductible: i64,
            reimbursement_pct: u32,
            base_annual: i64,
        ) -> RateEntry {
            RateEntry {
                product: product.to_string(),
                coverage: Money::new(Decimal::from(coverage)),
                deductible: Money::new(Decimal::from(deductible)),
                reimbursement: Rate::from_percentage(Decimal::from(reimbursement_pct)),
                base_annual: Money::new(Decimal::from(base_annual)),
            }
        }

        const ESSENTIAL: &str = "Pet Care Essential";
        const PLUS: &str = "Pet Care Plus";
        const ELITE: &str = "Pet Care Elite";

        Self::new(vec![
            entry(ESSENTIAL, 25_000, 1_000, 70, 1_099),
            entry(ESSENTIAL, 25_000, 1_000, 80, 1_249),
            entry(ESSENTIAL, 25_000, 2_500, 70, 949),
            entry(ESSENTIAL, 25_000, 2_500, 80, 1_099),
            entry(ESSENTIAL, 50_000, 1_000, 70, 1_449),
            entry(ESSENTIAL, 50_000, 1_000, 80, 1_649),
            entry(ESSENTIAL, 50_000, 2_500, 70, 1_299),
            entry(ESSENTIAL, 50_000, 2_500, 80, 1_499),
            entry(ESSENTIAL, 75_000, 1_000, 70, 1_799),
            entry(ESSENTIAL, 75_000, 1_000, 80, 2_049),
            entry(ESSENTIAL, 75_000, 2_500, 70, 1_649),
            entry(ESSENTIAL, 75_000, 2_500, 80, 1_849),
            entry(PLUS, 50_000, 1_000, 70, 1_699),
            entry(PLUS, 50_000, 1_000, 80, 1_899),
            entry(PLUS, 50_000, 1_000, 90, 2_149),
            entry(PLUS, 50_000, 2_500, 70, 1_549),
            entry(PLUS, 50_000, 2_500, 80, 1_749),
            entry(PLUS, 50_000, 2_500, 90, 1_999),
            entry(PLUS, 100_000, 1_000, 70, 2_299),
            entry(PLUS, 100_000, 1_000, 80, 2_549),
            entry(PLUS, 100_000, 1_000, 90, 2_899),
            entry(PLUS, 100_000, 2_500, 70, 2_149),
            entry(PLUS, 100_000, 2_500, 80, 2_399),
            entry(PLUS, 100_000, 2_500, 90, 2_749),
            entry(PLUS, 150_000, 1_000, 70, 2_899),
            entry(PLUS, 150_000, 1_000, 80, 3_199),
            entry(PLUS, 150_000, 1_000, 90, 3_599),
            entry(PLUS, 150_000, 2_500, 70, 2_749),
            entry(PLUS, 150_000, 2_500, 80, 3_049),
            entry(PLUS, 150_000, 2_500, 90, 3_449),
            entry(ELITE, 100_000, 500, 80, 3_299),
            entry(ELITE, 100_000, 500, 90, 3_699),
            entry(ELITE, 100_000, 1_000, 80, 3_099),
            entry(ELITE, 100_000, 1_000, 90, 3_499),
            entry(ELITE, 200_000, 500, 80, 4_499),
            entry(ELITE, 200_000, 500, 90, 4_999),
            entry(ELITE, 200_000, 1_000, 80, 4_299),
            entry(ELITE, 200_000, 1_000, 90, 4_799),
            entry(ELITE, 300_000, 500, 80, 5_699),
            entry(ELITE, 300_000, 500, 90, 6_299),
            entry(ELITE, 300_000, 1_000, 80, 5_499),
            entry(ELITE, 300_000, 1_000, 90, 6_099),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn php(amount: i64) -> Money {
        Money::new(Decimal::from(amount))
    }

    #[test]
    fn test_exact_lookup() {
        let table = RateTable::standard();
        let base = table
            .base_annual(
                "Pet Care Essential",
                php(50_000),
                php(2_500),
                Rate::from_percentage(dec!(80)),
            )
            .unwrap();
        assert_eq!(base, php(1_499));
    }

    #[test]
    fn test_coverage_miss_falls_back_to_lower_tier() {
        let table = RateTable::standard();
        // 60,000 is not a rated tier; nearest lower is 50,000
        let base = table
            .base_annual(
                "Pet Care Essential",
                php(60_000),
                php(2_500),
                Rate::from_percentage(dec!(80)),
            )
            .unwrap();
        assert_eq!(base, php(1_499));
    }

    #[test]
    fn test_coverage_below_lowest_tier_is_a_miss() {
        let table = RateTable::standard();
        let base = table.base_annual(
            "Pet Care Essential",
            php(10_000),
            php(2_500),
            Rate::from_percentage(dec!(80)),
        );
        assert_eq!(base, None);
    }

    #[test]
    fn test_unknown_product_is_a_miss() {
        let table = RateTable::standard();
        assert_eq!(
            table.base_annual(
                "No Such Plan",
                php(50_000),
                php(2_500),
                Rate::from_percentage(dec!(80)),
            ),
            None
        );
    }

    #[test]
    fn test_deductible_and_rate_do_not_fall_back() {
        let table = RateTable::standard();
        // 1,500 is not a rated deductible for any product
        assert_eq!(
            table.base_annual(
                "Pet Care Essential",
                php(50_000),
                php(1_500),
                Rate::from_percentage(dec!(80)),
            ),
            None
        );
        // 75% is not a rated reimbursement
        assert_eq!(
            table.base_annual(
                "Pet Care Essential",
                php(50_000),
                php(2_500),
                Rate::from_percentage(dec!(75)),
            ),
            None
        );
    }

    #[test]
    fn test_json_round_trip() {
        let table = RateTable::standard();
        let json = serde_json::to_string(&table).unwrap();
        let back = RateTable::from_json(&json).unwrap();

        assert_eq!(back.entries().len(), table.entries().len());
        assert_eq!(
            back.base_annual(
                "Pet Care Elite",
                php(300_000),
                php(500),
                Rate::from_percentage(dec!(90)),
            ),
            Some(php(6_299))
        );
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        assert!(matches!(
            RateTable::from_json("{not json"),
            Err(QuoteError::ParseError(_))
        ));
    }

    #[test]
    fn test_standard_rows_increase_with_coverage() {
        let table = RateTable::standard();
        let low = table
            .base_annual(
                "Pet Care Plus",
                php(50_000),
                php(1_000),
                Rate::from_percentage(dec!(80)),
            )
            .unwrap();
        let high = table
            .base_annual(
                "Pet Care Plus",
                php(150_000),
                php(1_000),
                Rate::from_percentage(dec!(80)),
            )
            .unwrap();
        assert!(high > low);
    }
}
