use super::equation::split_sides;
use super::error::EquationError;
use crate::core::comparison::{DiffMap, Verdict, compare, diff};
use crate::core::formula::parse_formula;
use crate::core::models::counts::CountMap;
use crate::core::models::element::ElementSymbol;
use tracing::debug;

/// Everything an interactive display needs about one equation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    /// Element counts of the input side.
    pub left: CountMap,
    /// Element counts of the output side.
    pub right: CountMap,
    /// `right - left` for every element on either side.
    pub diff: DiffMap,
    /// The comparison result; never `Malformed`.
    pub verdict: Verdict,
}

/// One element's counts on both sides, for tabular display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementRow<'a> {
    pub symbol: &'a ElementSymbol,
    pub left: u64,
    pub right: u64,
    pub delta: i128,
}

impl Analysis {
    /// Builds the analysis of two already-parsed sides.
    pub fn from_sides(left: CountMap, right: CountMap) -> Self {
        let diff = diff(&left, &right);
        let verdict = compare(&left, &right);
        Self {
            left,
            right,
            diff,
            verdict,
        }
    }

    pub fn missing(&self) -> &[ElementSymbol] {
        self.verdict.missing()
    }

    pub fn extra(&self) -> &[ElementSymbol] {
        self.verdict.extra()
    }

    pub fn is_equivalent(&self) -> bool {
        self.verdict.is_equivalent()
    }

    pub fn left_total(&self) -> u64 {
        self.left.total()
    }

    pub fn right_total(&self) -> u64 {
        self.right.total()
    }

    /// One row per element on either side, in symbol order.
    pub fn rows(&self) -> impl Iterator<Item = ElementRow<'_>> {
        self.diff.iter().map(|(symbol, &delta)| ElementRow {
            symbol,
            left: self.left.count(symbol.as_str()),
            right: self.right.count(symbol.as_str()),
            delta,
        })
    }
}

/// Analyzes one equation as typed by a user.
///
/// Unlike [`evaluate`](super::evaluate::evaluate), whitespace is not stripped first: the
/// text is split on the arrow as-is and the parser skips spaces inside each side. This
/// means a spaced-out arrow such as `- >` is not recognized here.
///
/// # Errors
///
/// Returns [`EquationError::Malformed`] if the text does not contain exactly one arrow.
///
/// ```
/// use exchange::workflows::analyze::analyze;
///
/// let analysis = analyze("Fe, O3 -> Fe2O3").unwrap();
/// assert_eq!(analysis.left_total(), 4);
/// assert_eq!(analysis.right_total(), 5);
/// assert_eq!(analysis.missing()[0].as_str(), "Fe");
/// ```
pub fn analyze(equation: &str) -> Result<Analysis, EquationError> {
    let (left, right) = split_sides(equation)?;
    let analysis = Analysis::from_sides(parse_formula(left), parse_formula(right));
    debug!(
        equation,
        verdict = %analysis.verdict,
        left_total = analysis.left_total(),
        right_total = analysis.right_total(),
        "Analyzed equation."
    );
    Ok(analysis)
}
