//! Core Kernel - Foundational types for the pet insurance quoting system
//!
//! This crate provides the building blocks shared by the domain modules:
//! - Peso money and rate types with precise decimal arithmetic
//! - Lenient parsing of user-entered currency and percentage strings
//! - Strongly-typed identifiers

pub mod money;
pub mod parse;
pub mod identifiers;

pub use money::{Money, MoneyError, Rate, PESO_SIGN};
pub use parse::{parse_currency, parse_percent};
pub use identifiers::QuoteId;
