//! Risk loading tables
//!
//! Pet risk factors load the base premium multiplicatively. The loading
//! values live in an explicit, named table rather than inline constants
//! so they are independently testable and replaceable as one unit by the
//! actuarial owner; like the rating table, a risk table deserializes
//! from JSON.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::QuoteError;

/// Risk factors derived from the pet-details step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetRiskFactors {
    /// Age in whole years
    pub pet_age: u32,
    /// Breed as entered; rated only when the table carries a loading for it
    pub pet_breed: String,
    /// True if any chronic illness, surgery history, recurring condition,
    /// or ongoing medication was declared
    pub has_pre_existing_conditions: bool,
}

impl PetRiskFactors {
    /// A risk profile with no loadings under the standard table
    pub fn baseline() -> Self {
        Self {
            pet_age: 1,
            pet_breed: String::new(),
            has_pre_existing_conditions: false,
        }
    }
}

/// An inclusive age band with its premium multiplier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgeBand {
    /// Lowest age in the band, inclusive
    pub min_age: u32,
    /// Highest age in the band, inclusive; open-ended when absent
    pub max_age: Option<u32>,
    /// Multiplier applied to the base premium
    pub multiplier: Decimal,
}

/// A per-breed premium multiplier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreedLoading {
    /// Breed name, matched case-insensitively
    pub breed: String,
    /// Multiplier applied to the base premium
    pub multiplier: Decimal,
}

/// The complete risk loading table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskTable {
    /// Age bands, checked in order; an unmatched age loads 1.0
    pub age_bands: Vec<AgeBand>,
    /// Multiplier applied when pre-existing conditions were declared
    pub pre_existing_multiplier: Decimal,
    /// Breed loadings; breeds not listed load 1.0
    pub breed_loadings: Vec<BreedLoading>,
}

impl RiskTable {
    /// Returns the standard loading table
    ///
    /// The standard table carries no breed loadings; the mechanism
    /// exists for actuarial overrides supplied via JSON.
    pub fn standard() -> Self {
        Self {
            age_bands: vec![
                AgeBand {
                    min_age: 0,
                    max_age: Some(2),
                    multiplier: dec!(1.0),
                },
                AgeBand {
                    min_age: 3,
                    max_age: Some(7),
                    multiplier: dec!(1.1),
                },
                AgeBand {
                    min_age: 8,
                    max_age: None,
                    multiplier: dec!(1.3),
                },
            ],
            pre_existing_multiplier: dec!(1.2),
            breed_loadings: vec![],
        }
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

    /// Returns the multiplier for the pet's age
    pub fn age_multiplier(&self, age: u32) -> Decimal {
        self.age_bands
            .iter()
            .find(|band| {
                age >= band.min_age && band.max_age.map_or(true, |max| age <= max)
            })
            .map(|band| band.multiplier)
            .unwrap_or(Decimal::ONE)
    }

    /// Returns the multiplier for declared pre-existing conditions
    pub fn pre_existing_multiplier(&self, declared: bool) -> Decimal {
        if declared {
            self.pre_existing_multiplier
        } else {
            Decimal::ONE
        }
    }

    /// Returns the multiplier for the pet's breed
    pub fn breed_multiplier(&self, breed: &str) -> Decimal {
        self.breed_loadings
            .iter()
            .find(|loading| loading.breed.eq_ignore_ascii_case(breed))
            .map(|loading| loading.multiplier)
            .unwrap_or(Decimal::ONE)
    }

    /// Returns the combined loading for a risk profile
    ///
    /// Each multiplier applies independently to the base premium; the
    /// combined loading is their plain product.
    pub fn loading_for(&self, pet: &PetRiskFactors) -> Decimal {
        self.age_multiplier(pet.pet_age)
            * self.pre_existing_multiplier(pet.has_pre_existing_conditions)
            * self.breed_multiplier(&pet.pet_breed)
    }
}
