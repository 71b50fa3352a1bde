use std::collections::BTreeMap;

use super::model::Dataset;

// ---------------------------------------------------------------------------
// Aggregator – key → values, filled one record at a time
// ---------------------------------------------------------------------------

/// Groups values by key while the input is being read.
///
/// Keys are kept sorted; values within a key keep insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregator<V> {
    groups: BTreeMap<String, Vec<V>>,
}

impl<V> Default for Aggregator<V> {
    fn default() -> Self {
        Self {
            groups: BTreeMap::new(),
        }
    }
}

impl<V> Aggregator<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `value` to the group for `key`, creating the group on first use.
    pub fn add_value(&mut self, key: &str, value: V) {
        match self.groups.get_mut(key) {
            Some(group) => group.push(value),
            None => {
                self.groups.insert(key.to_string(), vec![value]);
            }
        }
    }

    pub fn group(&self, key: &str) -> Option<&[V]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    pub fn key_count(&self) -> usize {
        self.groups.len()
    }

    pub fn value_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Finish aggregation and hand the groups over as a [`Dataset`].
    pub fn build(self) -> Dataset<V> {
        Dataset::from_groups(self.groups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_value_groups_and_keeps_order() {
        let mut agg = Aggregator::new();
        agg.add_value("B", 2.0);
        agg.add_value("A", 1.0);
        agg.add_value("A", 3.0);

        assert_eq!(agg.key_count(), 2);
        assert_eq!(agg.value_count(), 3);
        assert_eq!(agg.group("A"), Some(&[1.0, 3.0][..]));
        assert_eq!(agg.group("C"), None);

        let ds = agg.build();
        assert_eq!(ds.keys().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(ds.series()[1].values, vec![2.0]);
    }

    #[test]
    fn test_empty_aggregator_builds_empty_dataset() {
        let ds = Aggregator::<f64>::new().build();
        assert!(ds.is_empty());
        assert_eq!(ds.value_count(), 0);
    }
}
