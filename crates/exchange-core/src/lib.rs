//! # Equivalent Exchange Core Library
//!
//! Element-count equivalence checking for chemical-formula-like equations such as
//! `H2,O -> H2O` or `Ca(OH)2 -> CaO2H2`.
//!
//! ## Architectural Philosophy
//!
//! The library is split into two layers so that the pure algorithms can be tested and
//! reused independently of any front end.
//!
//! - **[`core`]: The Foundation.** Stateless data models (`ElementSymbol`, `CountMap`),
//!   the recursive formula parser and the multiset comparator. Every function in this
//!   layer is total and free of side effects.
//!
//! - **[`workflows`]: The Public API.** Ties the parser and comparator together into the
//!   operations front ends actually call: evaluating a single `LEFT -> RIGHT` line,
//!   running the batch text protocol, and producing a full analysis of one equation for
//!   interactive display.
//!
//! ```
//! use exchange::workflows::evaluate::evaluate_line;
//!
//! assert_eq!(evaluate_line("H2,O -> H2O"), "EQUIVALENT");
//! assert_eq!(evaluate_line("Fe,O3 -> Fe2O3"), "NOT_EQUIVALENT: Missing Fe");
//! ```

pub mod core;
pub mod workflows;
