//! # Formula Parsing Module
//!
//! Converts one side of an equation into a [`CountMap`](crate::core::models::counts::CountMap).
//!
//! The grammar is deliberately forgiving:
//!
//! ```text
//! side    := item*
//! item    := element | group | separator | other
//! element := UPPER LOWER* DIGIT*
//! group   := '(' side ')' DIGIT*
//! ```
//!
//! Commas and spaces separate items, and any other byte is dropped without complaint, so
//! parsing never fails. A missing digit run means a count or multiplier of one.

pub mod parser;

pub use parser::{ParseResult, parse, parse_formula};
