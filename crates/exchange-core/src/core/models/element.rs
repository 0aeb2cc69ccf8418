use std::borrow::Borrow;
use std::fmt;

/// An element symbol as it appears in formula text (e.g. "H", "Fe", "Uuo").
///
/// The symbol is purely lexical: one ASCII uppercase letter followed by any number of
/// ASCII lowercase letters. No periodic-table lookup is performed, so "Xy" is as valid
/// a symbol as "Na". Symbols order by ordinary case-sensitive string comparison, which
/// is the order used for every sorted report.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementSymbol(String);

impl ElementSymbol {
    /// Wraps `symbol` without checking its shape; the parser only passes slices it has
    /// already scanned.
    pub fn new(symbol: &str) -> Self {
        Self(symbol.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ElementSymbol {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
