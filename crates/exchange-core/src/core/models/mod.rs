//! # Core Models Module
//!
//! Data structures describing one side of an equation.
//!
//! - [`element`] - The lexical element symbol used as a map key
//! - [`counts`] - The element-to-count multiset produced by the parser
//!
//! ```
//! use exchange::core::models::counts::CountMap;
//!
//! let mut water = CountMap::new();
//! water.add("H", 2);
//! water.add("O", 1);
//! assert_eq!(water.count("H"), 2);
//! assert_eq!(water.count("N"), 0);
//! assert_eq!(water.total(), 3);
//! ```

pub mod counts;
pub mod element;
