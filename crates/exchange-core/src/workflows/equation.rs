use super::error::EquationError;

/// The literal separator between the input and output sides.
pub const ARROW: &str = "->";

/// Splits `text` on [`ARROW`] into its left and right sides.
///
/// No trimming or whitespace removal happens here; the formula parser skips spaces on
/// its own, so interactive input can be passed through as typed.
///
/// # Errors
///
/// Returns [`EquationError::Malformed`] unless the split yields exactly two parts, i.e.
/// unless the arrow occurs exactly once.
pub fn split_sides(text: &str) -> Result<(&str, &str), EquationError> {
    let mut parts = text.split(ARROW);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(left), Some(right), None) => Ok((left, right)),
        _ => Err(EquationError::Malformed {
            sides: text.split(ARROW).count(),
        }),
    }
}

/// Returns `true` for characters that line input treats as blank.
///
/// This is Unicode `White_Space` with two adjustments: the byte-order mark U+FEFF counts
/// as blank, so a file saved with a BOM reads like one without, and NEL (U+0085) does
/// not.
pub fn is_blank(c: char) -> bool {
    match c {
        '\u{FEFF}' => true,
        '\u{0085}' => false,
        c => c.is_whitespace(),
    }
}

/// Trims blank characters (see [`is_blank`]) from both ends of `line`.
pub fn trim_blanks(line: &str) -> &str {
    line.trim_matches(is_blank)
}

/// Removes every blank character (see [`is_blank`]) from `line`.
pub fn strip_whitespace(line: &str) -> String {
    line.chars().filter(|&c| !is_blank(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_sides_returns_both_sides_untrimmed() {
        assert_eq!(split_sides("H2 , O -> H2O"), Ok(("H2 , O ", " H2O")));
    }

    #[test]
    fn split_sides_accepts_empty_sides() {
        assert_eq!(split_sides("->"), Ok(("", "")));
        assert_eq!(split_sides("H2->"), Ok(("H2", "")));
    }

    #[test]
    fn split_sides_rejects_text_without_an_arrow() {
        assert_eq!(
            split_sides("H2O"),
            Err(EquationError::Malformed { sides: 1 })
        );
        assert_eq!(split_sides(""), Err(EquationError::Malformed { sides: 1 }));
    }

    #[test]
    fn split_sides_rejects_chained_arrows() {
        assert_eq!(
            split_sides("A -> B -> C"),
            Err(EquationError::Malformed { sides: 3 })
        );
    }

    #[test]
    fn split_sides_does_not_treat_a_spaced_arrow_as_a_separator() {
        assert_eq!(
            split_sides("A - > B"),
            Err(EquationError::Malformed { sides: 1 })
        );
    }

    #[test]
    fn strip_whitespace_removes_spaces_tabs_and_newlines() {
        assert_eq!(strip_whitespace(" Fe ,\tO3 -\n> Fe2O3 "), "Fe,O3->Fe2O3");
    }

    #[test]
    fn strip_whitespace_drops_byte_order_marks_and_unicode_spaces() {
        assert_eq!(strip_whitespace("\u{FEFF}H2,\u{00A0}O\u{3000}->H2O"), "H2,O->H2O");
    }

    #[test]
    fn strip_whitespace_keeps_next_line_characters() {
        assert_eq!(strip_whitespace("A -\u{85}> B"), "A-\u{85}>B");
    }

    #[test]
    fn trim_blanks_removes_a_leading_byte_order_mark() {
        assert_eq!(trim_blanks("\u{FEFF}INPUT \r"), "INPUT");
        assert_eq!(trim_blanks("\u{85}3"), "\u{85}3");
    }

    #[test]
    fn malformed_error_message_reports_the_side_count() {
        let err = EquationError::Malformed { sides: 3 };
        assert!(err.to_string().contains("found 3 side(s)"));
    }
}
