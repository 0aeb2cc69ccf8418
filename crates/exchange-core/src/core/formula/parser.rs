use crate::core::models::counts::CountMap;

/// The outcome of parsing a formula, or one parenthesized group of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResult {
    /// Element counts accumulated by this call.
    pub counts: CountMap,
    /// Byte offset just past the last consumed byte: the end of the text, or the byte
    /// after the `)` that closed this group.
    pub pos: usize,
}

/// Parses `text` starting at byte offset `start`.
///
/// Scanning stops at the end of the text or immediately after a `)`, which closes the
/// group this call is parsing. At the top level an unmatched `)` stops scanning in the
/// same way, leaving `pos` short of the text length; callers that only want the counts
/// ignore it.
///
/// # Arguments
///
/// * `text` - The formula text, e.g. `"Ca(OH)2"` or `"H2,O"`.
/// * `start` - Byte offset to begin at; `0` for a whole formula.
///
/// # Return
///
/// The accumulated counts and the offset at which scanning stopped. A `start` beyond the
/// end of `text` yields an empty map with `pos == start`.
pub fn parse(text: &str, start: usize) -> ParseResult {
    let bytes = text.as_bytes();
    let mut counts = CountMap::new();
    let mut pos = start;

    while pos < bytes.len() {
        match bytes[pos] {
            b'(' => {
                let group = parse(text, pos + 1);
                let (multiplier, next) = read_number(bytes, group.pos);
                counts.merge_scaled(group.counts, multiplier.unwrap_or(1));
                pos = next;
            }
            b')' => {
                return ParseResult {
                    counts,
                    pos: pos + 1,
                };
            }
            b if b.is_ascii_uppercase() => {
                let symbol_end = scan_while(bytes, pos + 1, |b| b.is_ascii_lowercase());
                let (count, next) = read_number(bytes, symbol_end);
                counts.add(&text[pos..symbol_end], count.unwrap_or(1));
                pos = next;
            }
            // Separators and anything unrecognised are dropped alike.
            _ => pos += 1,
        }
    }

    ParseResult { counts, pos }
}

/// Parses a whole formula and returns only its element counts.
///
/// ```
/// use exchange::core::formula::parse_formula;
///
/// let counts = parse_formula("(AB2)3");
/// assert_eq!(counts.count("A"), 3);
/// assert_eq!(counts.count("B"), 6);
/// ```
pub fn parse_formula(text: &str) -> CountMap {
    parse(text, 0).counts
}

fn scan_while(bytes: &[u8], start: usize, predicate: impl Fn(u8) -> bool) -> usize {
    bytes[start..]
        .iter()
        .position(|&b| !predicate(b))
        .map_or(bytes.len(), |offset| start + offset)
}

/// Reads a run of ASCII digits at `start`. Returns `None` for an empty run.
fn read_number(bytes: &[u8], start: usize) -> (Option<u64>, usize) {
    let end = scan_while(bytes, start, |b| b.is_ascii_digit());
    if end == start {
        return (None, start);
    }
    let value = bytes[start..end].iter().fold(0u64, |acc, &digit| {
        acc.saturating_mul(10)
            .saturating_add(u64::from(digit - b'0'))
    });
    (Some(value), end)
}
