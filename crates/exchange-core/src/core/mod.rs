//! # Core Module
//!
//! Pure building blocks for element-count comparison.
//!
//! - **Formula Representation** ([`models`]) - Element symbols and element-to-count maps
//! - **Formula Parsing** ([`formula`]) - Recursive descent over formula text with nested,
//!   multiplied groups
//! - **Comparison** ([`comparison`]) - Multiset comparison, signed differences and verdicts
//!
//! Nothing here performs I/O or holds shared state; every call builds fresh values, so
//! independent inputs can be processed concurrently without coordination.

pub mod comparison;
pub mod formula;
pub mod models;
