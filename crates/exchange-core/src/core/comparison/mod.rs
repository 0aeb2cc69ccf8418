//! # Comparison Module
//!
//! Compares the element counts of an input side (left) against an output side (right).
//!
//! - [`comparator`] - The multiset comparison and the signed per-element difference map
//! - [`verdict`] - The classification of a comparison and its canonical text rendering
//!
//! Terminology follows the direction of the exchange: an element is **missing** when the
//! left side supplies fewer atoms than the right side needs, and **extra** when the left
//! side supplies more than the right side consumes.

pub mod comparator;
pub mod verdict;

pub use comparator::{DiffMap, compare, diff};
pub use verdict::Verdict;
