//! Insertion-ordered table of labelled constants

use super::Constant;
use rustc_hash::FxHashMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;
use std::iter::Copied;
use std::ops::Index;
use std::slice;

/// Read-only mapping from fixed string labels to [`Constant`]s
///
/// Iteration follows insertion order, so a table lists its entries the way it was
/// written down. Lookup by label goes through a hash index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstantTable {
    entries: Vec<(&'static str, Constant)>,
    index: FxHashMap<&'static str, usize>,
}

impl ConstantTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, replacing the constant in place if the label already exists
    pub fn insert(&mut self, label: &'static str, constant: Constant) {
        if let Some(&i) = self.index.get(label) {
            self.entries[i].1 = constant;
        } else {
            self.index.insert(label, self.entries.len());
            self.entries.push((label, constant));
        }
    }

    /// Look up a constant by label
    pub fn get(&self, label: &str) -> Option<Constant> {
        self.index.get(label).map(|&i| self.entries[i].1)
    }

    /// True if `label` is present
    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Labels in insertion order
    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(label, _)| *label)
    }

    /// `(label, constant)` pairs in insertion order
    pub fn iter(&self) -> Copied<slice::Iter<'_, (&'static str, Constant)>> {
        self.entries.iter().copied()
    }
}

impl<'a> IntoIterator for &'a ConstantTable {
    type Item = (&'static str, Constant);
    type IntoIter = Copied<slice::Iter<'a, (&'static str, Constant)>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<(&'static str, Constant)> for ConstantTable {
    fn from_iter<I: IntoIterator<Item = (&'static str, Constant)>>(iter: I) -> Self {
        let mut table = ConstantTable::new();
        for (label, constant) in iter {
            table.insert(label, constant);
        }
        table
    }
}

impl Index<&str> for ConstantTable {
    type Output = Constant;

    #[track_caller]
    fn index(&self, label: &str) -> &Constant {
        match self.index.get(label) {
            Some(&i) => &self.entries[i].1,
            None => panic!("ConstantTable: no entry labelled '{label}'"),
        }
    }
}

impl Serialize for ConstantTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, constant) in &self.entries {
            map.serialize_entry(label, constant)?;
        }
        map.end()
    }
}

impl fmt::Display for ConstantTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, constant) in &self.entries {
            writeln!(f, "{label}: {constant}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ConstantTable {
        [
            ("b", Constant::new(2.0, "s")),
            ("a", Constant::new(1.0, "cm")),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_keeps_insertion_order() {
        let table = sample();
        assert_eq!(table.labels().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_lookup() {
        let table = sample();
        assert_eq!(table.get("a"), Some(Constant::new(1.0, "cm")));
        assert_eq!(table.get("z"), None);
        assert_eq!(table["b"].value(), 2.0);
        assert!(table.contains("a"));
    }

    #[test]
    fn test_insert_replaces_without_reordering() {
        let mut table = sample();
        table.insert("b", Constant::new(5.0, "s"));
        assert_eq!(table.len(), 2);
        assert_eq!(table.iter().next(), Some(("b", Constant::new(5.0, "s"))));
    }

    #[test]
    #[should_panic(expected = "no entry labelled 'missing'")]
    fn test_index_panics_on_missing() {
        let _c: Constant = sample()["missing"];
    }

    #[test]
    fn test_display_lists_entries() {
        let text = sample().to_string();
        assert_eq!(text, "b: 2e0 [s]\na: 1e0 [cm]\n");
    }

    #[test]
    fn test_empty() {
        assert!(ConstantTable::new().is_empty());
    }

    #[test]
    fn test_for_loop_over_reference() {
        let table = sample();
        let mut total = 0.0;
        for (_, constant) in &table {
            total += constant.value();
        }
        assert_eq!(total, 3.0);
    }
}
