//! An insertion-order-preserving key/value container.
//!
//! The standard library's `HashMap` iterates in arbitrary order and
//! `BTreeMap` in key order; neither preserves insertion order. This
//! container does, so configuration and API response keys stay in the
//! order they first appeared.
//!
//! Backed by a `HashMap` for O(1) lookup plus a `Vec` recording first
//! insertion order. Re-assigning an existing key keeps its position;
//! removing and re-inserting a key moves it to the end.
//!
//! # Example
//!
//! ```ignore
//! use ghmodel::OrderedMap;
//!
//! let mut map = OrderedMap::new();
//! map.insert("b", 1);
//! map.insert("a", 2);
//! map.insert("c", 3);
//! let keys: Vec<_> = map.keys().copied().collect();
//! assert_eq!(keys, vec!["b", "a", "c"]);
//! ```

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;
use std::ops::Index;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// A mapping whose iteration order equals first-insertion order.
#[derive(Clone)]
pub struct OrderedMap<K, V> {
    entries: HashMap<K, V>,
    order: Vec<K>,
}

impl<K, V> OrderedMap<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Create an empty map.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Create an empty map with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
            order: Vec::with_capacity(capacity),
        }
    }

    /// Build a map assigning `value` to every key in `keys`, in order.
    ///
    /// Duplicate keys collapse to a single entry at the position of their
    /// first occurrence.
    pub fn from_keys<I>(keys: I, value: V) -> Self
    where
        I: IntoIterator<Item = K>,
        V: Clone,
    {
        let mut map = Self::new();
        for key in keys {
            map.insert(key, value.clone());
        }
        map
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert a key/value pair, returning the previous value if any.
    ///
    /// A new key is appended to the insertion order; re-assigning an
    /// existing key overwrites the value without changing its position.
    /// O(1) amortized.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.entries.insert(key.clone(), value) {
            Some(old) => Some(old),
            None => {
                self.order.push(key);
                None
            }
        }
    }

    /// Look up a value by key.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key)
    }

    /// Look up a key/value pair by key.
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get_key_value(key)
    }

    /// Whether the map contains `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    /// Remove a key, returning its value.
    ///
    /// `None` means the key was absent. The key also leaves the insertion
    /// order, so re-inserting it later appends it at the end.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let removed = self.entries.remove(key)?;
        if let Some(pos) = self.order.iter().position(|k| k.borrow() == key) {
            self.order.remove(pos);
        }
        Some(removed)
    }

    /// Remove and return the most recently inserted remaining entry.
    ///
    /// `None` means the map is empty.
    pub fn pop_last(&mut self) -> Option<(K, V)> {
        let key = self.order.pop()?;
        let value = self.entries.remove(&key)?;
        Some((key, value))
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    /// Keys in insertion order.
    ///
    /// Each call starts a fresh pass over the current order; reverse with
    /// `.rev()`.
    pub fn keys(&self) -> std::slice::Iter<'_, K> {
        self.order.iter()
    }

    /// Values in insertion order.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + '_ {
        self.iter().map(|(_, v)| v)
    }

    /// Key/value pairs in insertion order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            order: self.order.iter(),
            entries: &self.entries,
        }
    }
}

impl<K: Hash + Eq + Clone, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq + Clone + fmt::Debug, V: fmt::Debug> fmt::Debug for OrderedMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Hash + Eq + Clone, V: PartialEq> PartialEq for OrderedMap<K, V> {
    /// Order-sensitive equality: the (key, value) sequences must match.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Hash + Eq + Clone, V: Eq> Eq for OrderedMap<K, V> {}

impl<K: Hash + Eq + Clone, V> Extend<(K, V)> for OrderedMap<K, V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Hash + Eq + Clone, V> FromIterator<(K, V)> for OrderedMap<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K, V, Q> Index<&Q> for OrderedMap<K, V>
where
    K: Hash + Eq + Clone + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
{
    type Output = V;

    /// Panics if the key is absent, like `HashMap` indexing.
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

/// Borrowing iterator over key/value pairs in insertion order.
pub struct Iter<'a, K, V> {
    order: std::slice::Iter<'a, K>,
    entries: &'a HashMap<K, V>,
}

impl<'a, K: Hash + Eq, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let key = self.order.next()?;
            if let Some(pair) = self.entries.get_key_value(key) {
                return Some(pair);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.order.len();
        (0, Some(remaining))
    }
}

impl<K: Hash + Eq, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        loop {
            let key = self.order.next_back()?;
            if let Some(pair) = self.entries.get_key_value(key) {
                return Some(pair);
            }
        }
    }
}

impl<'a, K: Hash + Eq + Clone, V> IntoIterator for &'a OrderedMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator over key/value pairs in insertion order.
pub struct IntoIter<K, V> {
    order: std::vec::IntoIter<K>,
    entries: HashMap<K, V>,
}

impl<K: Hash + Eq, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let key = self.order.next()?;
            if let Some(value) = self.entries.remove(&key) {
                return Some((key, value));
            }
        }
    }
}

impl<K: Hash + Eq + Clone, V> IntoIterator for OrderedMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            order: self.order.into_iter(),
            entries: self.entries,
        }
    }
}

impl<K, V> Serialize for OrderedMap<K, V>
where
    K: Hash + Eq + Clone + Serialize,
    V: Serialize,
{
    /// Serializes entries in insertion order, so a round trip through any
    /// self-describing format reproduces an equivalent map.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de, K, V> Deserialize<'de> for OrderedMap<K, V>
where
    K: Hash + Eq + Clone + Deserialize<'de>,
    V: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedMapVisitor<K, V>(PhantomData<(K, V)>);

        impl<'de, K, V> Visitor<'de> for OrderedMapVisitor<K, V>
        where
            K: Hash + Eq + Clone + Deserialize<'de>,
            V: Deserialize<'de>,
        {
            type Value = OrderedMap<K, V>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut map = OrderedMap::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry()? {
                    map.insert(key, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
    }
}
