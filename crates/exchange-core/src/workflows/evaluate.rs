use super::equation::{split_sides, strip_whitespace};
use crate::core::comparison::{Verdict, compare};
use crate::core::formula::parse_formula;
use tracing::trace;

/// Evaluates one `LEFT -> RIGHT` line.
///
/// All whitespace is removed before splitting, so `"Fe , O3 - > Fe2O3"` is read as
/// `"Fe,O3->Fe2O3"`. A line that does not split into exactly two sides is classified as
/// [`Verdict::Malformed`] rather than reported as an error.
pub fn evaluate(line: &str) -> Verdict {
    let compact = strip_whitespace(line);
    let (left, right) = match split_sides(&compact) {
        Ok(sides) => sides,
        Err(e) => {
            trace!(line, error = %e, "Classifying line as malformed.");
            return Verdict::Malformed;
        }
    };

    let verdict = compare(&parse_formula(left), &parse_formula(right));
    trace!(line, %verdict, "Evaluated line.");
    verdict
}

/// Evaluates one line and renders the verdict in the output format.
///
/// ```
/// use exchange::workflows::evaluate::evaluate_line;
///
/// assert_eq!(evaluate_line("C,O2 -> CO2"), "EQUIVALENT");
/// assert_eq!(evaluate_line("H2O"), "NOT_EQUIVALENT: Malformed");
/// ```
pub fn evaluate_line(line: &str) -> String {
    evaluate(line).to_string()
}
