use std::collections::{BTreeMap, BTreeSet};

/// A map from each key to a set of values. Iteration over keys and over each key's values is
/// ordered, so anything built on top of this is deterministic.
#[derive(Clone, Debug, PartialEq)]
pub struct MultiMap<K, V>
where
    K: Ord + Clone,
    V: Ord + Clone,
{
    map: BTreeMap<K, BTreeSet<V>>,
    empty: BTreeSet<V>,
}

impl<K, V> MultiMap<K, V>
where
    K: Ord + Clone,
    V: Ord + Clone,
{
    pub fn new() -> MultiMap<K, V> {
        MultiMap {
            map: BTreeMap::new(),
            empty: BTreeSet::new(),
        }
    }

    /// Returns true if the value wasn't already present for this key.
    pub fn insert(&mut self, key: K, value: V) -> bool {
        self.map.entry(key).or_insert_with(BTreeSet::new).insert(value)
    }

    pub fn get(&self, key: K) -> &BTreeSet<V> {
        self.map.get(&key).unwrap_or(&self.empty)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.map.keys()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn borrow(&self) -> &BTreeMap<K, BTreeSet<V>> {
        &self.map
    }
}

impl<K, V> Default for MultiMap<K, V>
where
    K: Ord + Clone,
    V: Ord + Clone,
{
    fn default() -> Self {
        MultiMap::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let mut mm: MultiMap<usize, &str> = MultiMap::new();
        assert!(mm.is_empty());
        assert!(mm.insert(3, "b"));
        assert!(mm.insert(3, "a"));
        assert!(!mm.insert(3, "a"));
        assert!(mm.insert(1, "c"));

        assert_eq!(mm.len(), 2);
        assert_eq!(
            mm.get(3).iter().cloned().collect::<Vec<_>>(),
            vec!["a", "b"]
        );
        assert!(mm.get(2).is_empty());
        assert!(!mm.contains_key(&2));
        assert_eq!(mm.keys().cloned().collect::<Vec<_>>(), vec![1, 3]);
    }
}
