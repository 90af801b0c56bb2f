//! Word frequency aggregation.

use std::collections::HashMap;

use serde::Serialize;

/// Ranked `(word, count)` pairs, most frequent first.
///
/// Words with equal counts keep the order in which they first appeared in
/// the token stream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    entries: Vec<(String, usize)>,
}

/// Aggregate a token stream into a ranked frequency table.
pub fn count<I, S>(tokens: I) -> FrequencyTable
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut entries: Vec<(String, usize)> = Vec::new();

    for token in tokens {
        let token = token.as_ref();
        if let Some(&i) = index.get(token) {
            entries[i].1 += 1;
        } else {
            index.insert(token.to_string(), entries.len());
            entries.push((token.to_string(), 1));
        }
    }

    // Stable sort keeps first-occurrence order among ties
    entries.sort_by(|a, b| b.1.cmp(&a.1));

    FrequencyTable { entries }
}

impl FrequencyTable {
    /// All entries in rank order.
    pub fn entries(&self) -> &[(String, usize)] {
        &self.entries
    }

    /// The `n` most frequent entries (fewer if the table is smaller).
    pub fn top(&self, n: usize) -> &[(String, usize)] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no words survived filtering.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, i.e. the number of surviving tokens.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, c)| c).sum()
    }

    /// Count for a single word, if present.
    pub fn get(&self, word: &str) -> Option<usize> {
        self.entries.iter().find(|(w, _)| w == word).map(|(_, c)| *c)
    }

    /// Word to count mapping, for consumers that size by weight.
    pub fn to_map(&self) -> HashMap<&str, usize> {
        self.entries.iter().map(|(w, c)| (w.as_str(), *c)).collect()
    }

    /// Iterate entries in rank order.
    pub fn iter(&self) -> std::slice::Iter<'_, (String, usize)> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = &'a (String, usize);
    type IntoIter = std::slice::Iter<'a, (String, usize)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn pairs(table: &FrequencyTable) -> Vec<(&str, usize)> {
        table.iter().map(|(w, c)| (w.as_str(), *c)).collect()
    }

    #[test]
    fn most_common_first() {
        let table = count(["a", "b", "b", "c", "b", "c"]);
        assert_eq!(pairs(&table), vec![("b", 3), ("c", 2), ("a", 1)]);
    }

    #[test]
    fn ties_keep_first_occurrence_order() {
        let table = count(["red", "red", "blue", "blue"]);
        assert_eq!(pairs(&table), vec![("red", 2), ("blue", 2)]);

        let table = count(["zebra", "apple", "apple", "zebra", "mango"]);
        assert_eq!(pairs(&table), vec![("zebra", 2), ("apple", 2), ("mango", 1)]);
    }

    #[test]
    fn empty_input_gives_empty_table() {
        let table = count(Vec::<String>::new());
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
        assert!(table.top(5).is_empty());
    }

    #[test]
    fn counts_are_conserved_and_descending() {
        let tokens = ["x", "y", "x", "z", "y", "x", "w", "z", "z", "z"];
        let table = count(tokens);
        assert_eq!(table.total(), tokens.len());
        assert!(table.entries().windows(2).all(|w| w[0].1 >= w[1].1));
    }

    #[test]
    fn accessors() {
        let table = count(["sun", "moon", "sun"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("sun"), Some(2));
        assert_eq!(table.get("star"), None);
        assert_eq!(table.top(1), &[("sun".to_string(), 2)]);
        assert_eq!(table.top(10).len(), 2);
        assert_eq!(table.to_map().get("moon"), Some(&1));
    }
}
