use super::config::BatchConfig;
use super::equation::{is_blank, trim_blanks};
use super::evaluate::evaluate;
use super::progress::{Progress, ProgressReporter};
use crate::core::comparison::Verdict;
use rayon::prelude::*;
use tracing::{debug, info, instrument};

/// Verdicts for every evaluated line of a batch, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub verdicts: Vec<Verdict>,
}

impl BatchReport {
    /// Renders one verdict per line, joined with `\n` and without a trailing newline.
    pub fn render(&self) -> String {
        self.verdicts
            .iter()
            .map(Verdict::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn len(&self) -> usize {
        self.verdicts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verdicts.is_empty()
    }

    pub fn equivalent_count(&self) -> usize {
        self.verdicts.iter().filter(|v| v.is_equivalent()).count()
    }

    pub fn malformed_count(&self) -> usize {
        self.verdicts
            .iter()
            .filter(|v| matches!(v, Verdict::Malformed))
            .count()
    }
}

/// Splits raw batch text into trimmed lines, dropping blank lines and header lines.
///
/// Trimming uses [`trim_blanks`], so a byte-order mark at the start of the text is
/// removed along with any other leading blanks.
pub fn prepare_lines<'a>(raw: &'a str, config: &BatchConfig) -> Vec<&'a str> {
    raw.lines()
        .map(trim_blanks)
        .filter(|line| !line.is_empty() && !config.is_header(line))
        .collect()
}

/// Reads the declared line count from the first line of a batch.
///
/// Like a lenient integer prefix parse: an optional sign followed by at least one digit,
/// with anything after the digits ignored (`"3 equations"` reads as 3). A negative count
/// reads as zero. Text without leading digits yields `None`.
pub fn parse_line_count(text: &str) -> Option<usize> {
    let text = text.trim_start_matches(is_blank);
    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if digits_end == 0 {
        return None;
    }
    if negative {
        return Some(0);
    }
    Some(unsigned[..digits_end].parse().unwrap_or(usize::MAX))
}

/// Runs the batch protocol over `raw` text.
///
/// The first remaining line declares how many equations follow; at most that many of the
/// following lines are evaluated, fewer if the input runs out. Lines are independent and
/// are evaluated on the rayon pool, with the report keeping input order.
///
/// # Return
///
/// `None` when there is nothing to do: the input holds no lines after filtering, or the
/// first line does not start with a number.
#[instrument(skip_all, name = "batch_workflow")]
pub fn run(raw: &str, config: &BatchConfig, reporter: &ProgressReporter) -> Option<BatchReport> {
    let lines = prepare_lines(raw, config);
    let Some((header, body)) = lines.split_first() else {
        debug!("Batch input is empty after filtering; nothing to evaluate.");
        return None;
    };
    let Some(declared) = parse_line_count(header) else {
        debug!(header, "Batch header is not a line count; nothing to evaluate.");
        return None;
    };

    let equations = &body[..declared.min(body.len())];
    if equations.len() < declared {
        debug!(
            declared,
            available = equations.len(),
            "Batch declares more lines than it provides."
        );
    }

    reporter.report(Progress::BatchStart {
        total: equations.len() as u64,
    });

    let verdicts: Vec<Verdict> = equations
        .par_iter()
        .enumerate()
        .map(|(index, line)| {
            let verdict = evaluate(line);
            let equation = index + 1;
            if verdict == Verdict::Malformed {
                reporter.report(Progress::EquationMalformed {
                    equation,
                    text: line.to_string(),
                });
            } else {
                reporter.report(Progress::EquationEvaluated {
                    equation,
                    equivalent: verdict.is_equivalent(),
                });
            }
            verdict
        })
        .collect();

    let report = BatchReport { verdicts };
    reporter.report(Progress::BatchFinish {
        evaluated: report.len(),
        equivalent: report.equivalent_count(),
    });
    info!(
        total = report.len(),
        equivalent = report.equivalent_count(),
        malformed = report.malformed_count(),
        "Batch evaluation complete."
    );
    Some(report)
}
