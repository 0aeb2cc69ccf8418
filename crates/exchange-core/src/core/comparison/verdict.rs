use crate::core::models::element::ElementSymbol;
use std::fmt;

/// The classification of one equation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Both sides hold exactly the same atoms.
    Equivalent,
    /// The sides differ. Both lists are sorted and at least one is non-empty.
    NotEquivalent {
        /// Elements the left side under-supplies.
        missing: Vec<ElementSymbol>,
        /// Elements the left side over-supplies.
        extra: Vec<ElementSymbol>,
    },
    /// The line could not be split into exactly two sides.
    Malformed,
}

impl Verdict {
    pub fn is_equivalent(&self) -> bool {
        matches!(self, Verdict::Equivalent)
    }

    /// Elements the left side under-supplies; empty unless `NotEquivalent`.
    pub fn missing(&self) -> &[ElementSymbol] {
        match self {
            Verdict::NotEquivalent { missing, .. } => missing,
            _ => &[],
        }
    }

    /// Elements the left side over-supplies; empty unless `NotEquivalent`.
    pub fn extra(&self) -> &[ElementSymbol] {
        match self {
            Verdict::NotEquivalent { extra, .. } => extra,
            _ => &[],
        }
    }
}

fn write_symbols(f: &mut fmt::Formatter<'_>, symbols: &[ElementSymbol]) -> fmt::Result {
    for (i, symbol) in symbols.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write!(f, "{symbol}")?;
    }
    Ok(())
}

impl fmt::Display for Verdict {
    /// Renders the verdict in the line-oriented output format, e.g.
    /// `NOT_EQUIVALENT: Missing B and Extra A`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Equivalent => f.write_str("EQUIVALENT"),
            Verdict::Malformed => f.write_str("NOT_EQUIVALENT: Malformed"),
            Verdict::NotEquivalent { missing, extra } => {
                f.write_str("NOT_EQUIVALENT: ")?;
                if !missing.is_empty() {
                    f.write_str("Missing ")?;
                    write_symbols(f, missing)?;
                }
                if !extra.is_empty() {
                    if !missing.is_empty() {
                        f.write_str(" and ")?;
                    }
                    f.write_str("Extra ")?;
                    write_symbols(f, extra)?;
                }
                Ok(())
            }
        }
    }
}
