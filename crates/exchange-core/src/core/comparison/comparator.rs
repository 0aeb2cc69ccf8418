use super::verdict::Verdict;
use crate::core::models::counts::CountMap;
use crate::core::models::element::ElementSymbol;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

/// Signed per-element difference `right - left` for every symbol on either side.
///
/// Positive entries are exactly the missing elements, negative entries exactly the extra
/// ones, and zero marks a balanced element.
pub type DiffMap = BTreeMap<ElementSymbol, i128>;

fn symbol_union<'a>(left: &'a CountMap, right: &'a CountMap) -> BTreeSet<&'a ElementSymbol> {
    left.symbols().chain(right.symbols()).collect()
}

/// Compares the left (input) side against the right (output) side.
///
/// Absent symbols count as zero. The union is walked in symbol order, so the missing and
/// extra lists come out sorted regardless of how either map was built.
///
/// ```
/// use exchange::core::comparison::compare;
/// use exchange::core::formula::parse_formula;
///
/// let verdict = compare(&parse_formula("A2B"), &parse_formula("AB2"));
/// assert_eq!(verdict.to_string(), "NOT_EQUIVALENT: Missing B and Extra A");
/// ```
pub fn compare(left: &CountMap, right: &CountMap) -> Verdict {
    let mut missing = Vec::new();
    let mut extra = Vec::new();

    for symbol in symbol_union(left, right) {
        let l = left.count(symbol.as_str());
        let r = right.count(symbol.as_str());
        match l.cmp(&r) {
            Ordering::Less => missing.push(symbol.clone()),
            Ordering::Greater => extra.push(symbol.clone()),
            Ordering::Equal => {}
        }
    }

    if missing.is_empty() && extra.is_empty() {
        Verdict::Equivalent
    } else {
        Verdict::NotEquivalent { missing, extra }
    }
}

/// Computes `right - left` for every symbol appearing on either side.
pub fn diff(left: &CountMap, right: &CountMap) -> DiffMap {
    symbol_union(left, right)
        .into_iter()
        .map(|symbol| {
            let l = i128::from(left.count(symbol.as_str()));
            let r = i128::from(right.count(symbol.as_str()));
            (symbol.clone(), r - l)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::formula::parse_formula;

    fn counts(pairs: &[(&str, u64)]) -> CountMap {
        pairs.iter().copied().collect()
    }

    fn names(symbols: &[ElementSymbol]) -> Vec<&str> {
        symbols.iter().map(ElementSymbol::as_str).collect()
    }

    #[test]
    fn identical_maps_are_equivalent() {
        let water = counts(&[("H", 2), ("O", 1)]);
        assert_eq!(compare(&water, &water.clone()), Verdict::Equivalent);
    }

    #[test]
    fn two_empty_maps_are_equivalent() {
        assert_eq!(compare(&CountMap::new(), &CountMap::new()), Verdict::Equivalent);
    }

    #[test]
    fn zero_count_entries_balance_against_absent_symbols() {
        let left = counts(&[("H", 0), ("O", 1)]);
        let right = counts(&[("O", 1)]);
        assert_eq!(compare(&left, &right), Verdict::Equivalent);
    }

    #[test]
    fn under_supplied_elements_are_missing() {
        let verdict = compare(&parse_formula("Fe,O3"), &parse_formula("Fe2O3"));
        assert_eq!(names(verdict.missing()), vec!["Fe"]);
        assert!(verdict.extra().is_empty());
    }

    #[test]
    fn over_supplied_elements_are_extra() {
        let verdict = compare(&parse_formula("Na,Cl,K"), &parse_formula("NaCl"));
        assert!(verdict.missing().is_empty());
        assert_eq!(names(verdict.extra()), vec!["K"]);
    }

    #[test]
    fn lists_are_sorted_regardless_of_insertion_order() {
        let left = counts(&[("Zn", 1), ("Ag", 1), ("Mg", 1)]);
        let right = counts(&[("O", 2), ("Cu", 1), ("H", 1)]);

        let verdict = compare(&left, &right);

        assert_eq!(names(verdict.missing()), vec!["Cu", "H", "O"]);
        assert_eq!(names(verdict.extra()), vec!["Ag", "Mg", "Zn"]);
    }

    #[test]
    fn swapping_sides_swaps_missing_and_extra() {
        let samples = [
            ("A2B", "AB2"),
            ("Fe,O3", "Fe2O3"),
            ("C6H12O6", "CO2H2O"),
            ("", "Xe"),
        ];
        for (l, r) in samples {
            let left = parse_formula(l);
            let right = parse_formula(r);
            let forward = compare(&left, &right);
            let backward = compare(&right, &left);
            assert_eq!(forward.missing(), backward.extra(), "{l} -> {r}");
            assert_eq!(forward.extra(), backward.missing(), "{l} -> {r}");
        }
    }

    #[test]
    fn equivalent_iff_every_symbol_has_equal_counts() {
        let base = counts(&[("C", 1), ("O", 2)]);
        let same = counts(&[("O", 2), ("C", 1)]);
        let off_by_one = counts(&[("C", 1), ("O", 3)]);

        assert!(compare(&base, &same).is_equivalent());
        assert!(!compare(&base, &off_by_one).is_equivalent());
    }

    #[test]
    fn diff_is_right_minus_left_over_the_union() {
        let delta = diff(&parse_formula("A2B"), &parse_formula("AB2C"));

        assert_eq!(delta.get("A"), Some(&-1));
        assert_eq!(delta.get("B"), Some(&1));
        assert_eq!(delta.get("C"), Some(&1));
        assert_eq!(delta.len(), 3);
    }

    #[test]
    fn diff_keeps_balanced_symbols_as_zero() {
        let delta = diff(&parse_formula("H2,O"), &parse_formula("H2O"));
        assert_eq!(delta.get("H"), Some(&0));
        assert_eq!(delta.get("O"), Some(&0));
    }

    #[test]
    fn diff_signs_agree_with_verdict_membership() {
        let left = parse_formula("C3H8,O2");
        let right = parse_formula("CO2,H2O");
        let verdict = compare(&left, &right);

        for (symbol, delta) in diff(&left, &right) {
            assert_eq!(delta > 0, verdict.missing().contains(&symbol), "{symbol}");
            assert_eq!(delta < 0, verdict.extra().contains(&symbol), "{symbol}");
        }
    }

    #[test]
    fn diff_does_not_overflow_at_count_extremes() {
        let left = counts(&[("H", u64::MAX)]);
        let delta = diff(&left, &CountMap::new());
        assert_eq!(delta.get("H"), Some(&-i128::from(u64::MAX)));
    }
}
