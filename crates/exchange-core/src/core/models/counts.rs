use super::element::ElementSymbol;
use std::collections::BTreeMap;
use std::collections::btree_map;

/// A multiset of elements: how many atoms of each symbol one formula side holds.
///
/// Keys are unique and iteration follows symbol order, which keeps every derived report
/// deterministic. Equality does not depend on the order in which counts were added.
/// Arithmetic saturates at `u64::MAX` rather than wrapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountMap {
    counts: BTreeMap<ElementSymbol, u64>,
}

impl CountMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `count` atoms of `symbol`, inserting the symbol if it is not present yet.
    ///
    /// A count of zero still records the symbol, so `H0` parses to `{H: 0}`.
    pub fn add(&mut self, symbol: &str, count: u64) {
        match self.counts.get_mut(symbol) {
            Some(existing) => *existing = existing.saturating_add(count),
            None => {
                self.counts.insert(ElementSymbol::new(symbol), count);
            }
        }
    }

    /// Merges every entry of `other`, multiplied by `factor`, into this map.
    pub fn merge_scaled(&mut self, other: CountMap, factor: u64) {
        for (symbol, count) in other.counts {
            let scaled = count.saturating_mul(factor);
            let entry = self.counts.entry(symbol).or_insert(0);
            *entry = entry.saturating_add(scaled);
        }
    }

    /// Returns the count for `symbol`, treating an absent symbol as zero.
    pub fn count(&self, symbol: &str) -> u64 {
        self.counts.get(symbol).copied().unwrap_or(0)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.counts.contains_key(symbol)
    }

    pub fn symbols(&self) -> impl Iterator<Item = &ElementSymbol> {
        self.counts.keys()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, ElementSymbol, u64> {
        self.counts.iter()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of atoms on this side.
    pub fn total(&self) -> u64 {
        self.counts
            .values()
            .fold(0u64, |sum, &count| sum.saturating_add(count))
    }
}

impl<'a> IntoIterator for &'a CountMap {
    type Item = (&'a ElementSymbol, &'a u64);
    type IntoIter = btree_map::Iter<'a, ElementSymbol, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.iter()
    }
}

impl<'a> FromIterator<(&'a str, u64)> for CountMap {
    /// Builds a map by adding each pair in turn; repeated symbols are summed.
    fn from_iter<I: IntoIterator<Item = (&'a str, u64)>>(iter: I) -> Self {
        let mut map = CountMap::new();
        for (symbol, count) in iter {
            map.add(symbol, count);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_inserts_new_symbols_and_accumulates_existing_ones() {
        let mut map = CountMap::new();
        map.add("H", 2);
        map.add("O", 1);
        map.add("H", 3);

        assert_eq!(map.count("H"), 5);
        assert_eq!(map.count("O"), 1);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn add_with_zero_count_still_records_the_symbol() {
        let mut map = CountMap::new();
        map.add("H", 0);

        assert!(map.contains("H"));
        assert_eq!(map.count("H"), 0);
        assert!(!map.is_empty());
    }

    #[test]
    fn count_returns_zero_for_absent_symbols() {
        let map = CountMap::from_iter([("Na", 1)]);
        assert_eq!(map.count("Cl"), 0);
        assert!(!map.contains("Cl"));
    }

    #[test]
    fn merge_scaled_multiplies_and_sums_into_existing_entries() {
        let mut outer = CountMap::from_iter([("Ca", 1), ("O", 1)]);
        let group = CountMap::from_iter([("O", 1), ("H", 1)]);

        outer.merge_scaled(group, 2);

        assert_eq!(outer, CountMap::from_iter([("Ca", 1), ("O", 3), ("H", 2)]));
    }

    #[test]
    fn equality_is_independent_of_insertion_order() {
        let forward = CountMap::from_iter([("A", 1), ("B", 2), ("C", 3)]);
        let backward = CountMap::from_iter([("C", 3), ("B", 2), ("A", 1)]);
        assert_eq!(forward, backward);
    }

    #[test]
    fn iteration_follows_symbol_order() {
        let map = CountMap::from_iter([("O", 1), ("C", 1), ("Ca", 1)]);
        let symbols: Vec<&str> = map.symbols().map(ElementSymbol::as_str).collect();
        assert_eq!(symbols, vec!["C", "Ca", "O"]);
    }

    #[test]
    fn total_sums_all_counts() {
        let map = CountMap::from_iter([("Fe", 2), ("O", 3)]);
        assert_eq!(map.total(), 5);
        assert_eq!(CountMap::new().total(), 0);
    }

    #[test]
    fn arithmetic_saturates_instead_of_overflowing() {
        let mut map = CountMap::from_iter([("H", u64::MAX)]);
        map.add("H", 1);
        assert_eq!(map.count("H"), u64::MAX);

        let mut outer = CountMap::new();
        outer.merge_scaled(CountMap::from_iter([("O", u64::MAX / 2 + 1)]), 2);
        assert_eq!(outer.count("O"), u64::MAX);
    }
}
