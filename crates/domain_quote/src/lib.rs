//! Premium Quoting Domain
//!
//! This crate implements the premium calculation engine for the pet
//! insurance application flow.
//!
//! # Architecture
//!
//! - **Value Objects**: QuoteRequest, PremiumBreakdown, PetRiskFactors
//! - **Rating Data**: RateTable (base premiums per configured
//!   combination), RiskTable (age, pre-existing-condition, and breed
//!   loadings), both JSON-loadable
//! - **Domain Service**: PremiumCalculator, a pure function over the
//!   tables
//!
//! # Calculation Flow
//!
//! ```text
//! configured terms -> lenient parse -> rating-table lookup
//!                  -> risk loadings -> add-on partition
//!                  -> donation      -> annual/monthly totals
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_quote::{PremiumCalculator, QuoteRequest};
//!
//! let calculator = PremiumCalculator::standard();
//! let breakdown = calculator.calculate(&request);
//! if breakdown.is_unconfigured() {
//!     // prompt the applicant to finish configuring
//! }
//! ```

pub mod breakdown;
pub mod calculator;
pub mod error;
pub mod rate_table;
pub mod risk;

pub use breakdown::PremiumBreakdown;
pub use calculator::{PremiumCalculator, QuoteRequest};
pub use error::QuoteError;
pub use rate_table::{RateEntry, RateTable};
pub use risk::{AgeBand, BreedLoading, PetRiskFactors, RiskTable};
