//! Write-once storage of per-verse results.

use std::collections::btree_map::{self, BTreeMap, Entry};

use crate::errors::RegistryError;
use crate::verse_key::VerseKey;

/// Per-verse results keyed by [`VerseKey`], iterated in canonical order.
///
/// Each key can be filled once; a second insert is refused and the first
/// value stays.
#[derive(Debug, Clone, PartialEq)]
pub struct VerseRegistry<T> {
    entries: BTreeMap<VerseKey, T>,
}

impl<T> Default for VerseRegistry<T> {
    fn default() -> Self {
        VerseRegistry {
            entries: BTreeMap::new(),
        }
    }
}

impl<T> VerseRegistry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: VerseKey, value: T) -> Result<(), RegistryError> {
        match self.entries.entry(key) {
            Entry::Occupied(_) => Err(RegistryError::DuplicateKey { key }),
            Entry::Vacant(slot) => {
                slot.insert(value);
                Ok(())
            }
        }
    }

    pub fn get(&self, key: &VerseKey) -> Option<&T> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &VerseKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &VerseKey> + '_ {
        self.entries.keys()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, VerseKey, T> {
        self.entries.iter()
    }

    /// Derive a registry with the same keys.
    pub fn map<U>(&self, mut f: impl FnMut(&VerseKey, &T) -> U) -> VerseRegistry<U> {
        VerseRegistry {
            entries: self.entries.iter().map(|(key, value)| (*key, f(key, value))).collect(),
        }
    }
}

impl<T> IntoIterator for VerseRegistry<T> {
    type Item = (VerseKey, T);
    type IntoIter = btree_map::IntoIter<VerseKey, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a VerseRegistry<T> {
    type Item = (&'a VerseKey, &'a T);
    type IntoIter = btree_map::Iter<'a, VerseKey, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verse_key::Book;

    #[test]
    fn test_duplicate_insert_keeps_first() {
        let key = VerseKey::new(Book::Genesis, 1, 1);
        let mut registry = VerseRegistry::new();

        registry.insert(key, "first").unwrap();
        assert_eq!(
            registry.insert(key, "second"),
            Err(RegistryError::DuplicateKey { key })
        );
        assert_eq!(registry.get(&key), Some(&"first"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_iteration_is_canonical() {
        let mut registry = VerseRegistry::new();
        registry.insert(VerseKey::new(Book::Exodus, 1, 1), 3).unwrap();
        registry.insert(VerseKey::new(Book::Genesis, 1, 10), 2).unwrap();
        registry.insert(VerseKey::new(Book::Genesis, 1, 2), 1).unwrap();

        let values: Vec<i32> = registry.iter().map(|(_, v)| *v).collect();
        assert_eq!(values, vec![1, 2, 3]);

        let doubled = registry.map(|_, v| v * 2);
        assert_eq!(doubled.into_iter().map(|(_, v)| v).collect::<Vec<_>>(), vec![2, 4, 6]);
    }
}
