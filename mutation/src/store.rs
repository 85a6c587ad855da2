//! Mapping types the mutator can operate on.

use std::collections::{BTreeMap, HashMap};
use std::fmt::Debug;
use std::hash::{BuildHasher, Hash};

use indexmap::IndexMap;
use mapmut_core::{Mapping, Value};

/// A key-unique associative container.
///
/// `Clone` produces the independent copy each mutation works on, so it must
/// not share mutable state with the original.
pub trait KeyedStore: Clone {
    /// Key type. `Debug` is used to name the key in error messages.
    type Key: Debug;
    /// Value type.
    type Value;

    /// Returns true if the key is present.
    fn contains(&self, key: &Self::Key) -> bool;

    /// Get a value by key.
    fn lookup(&self, key: &Self::Key) -> Option<&Self::Value>;

    /// Get a mutable reference to a value by key.
    fn lookup_mut(&mut self, key: &Self::Key) -> Option<&mut Self::Value>;

    /// Insert or replace a value, returning the previous one.
    fn put(&mut self, key: Self::Key, value: Self::Value) -> Option<Self::Value>;

    /// Remove a key, returning its value.
    fn take(&mut self, key: &Self::Key) -> Option<Self::Value>;

    /// Number of entries.
    fn entry_count(&self) -> usize;

    fn is_empty_store(&self) -> bool {
        self.entry_count() == 0
    }
}

impl KeyedStore for Mapping {
    type Key = String;
    type Value = Value;

    fn contains(&self, key: &String) -> bool {
        self.contains_key(key)
    }

    fn lookup(&self, key: &String) -> Option<&Value> {
        self.get(key)
    }

    fn lookup_mut(&mut self, key: &String) -> Option<&mut Value> {
        self.get_mut(key)
    }

    fn put(&mut self, key: String, value: Value) -> Option<Value> {
        self.insert(key, value)
    }

    fn take(&mut self, key: &String) -> Option<Value> {
        self.remove(key)
    }

    fn entry_count(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> KeyedStore for HashMap<K, V, S>
where
    K: Eq + Hash + Clone + Debug,
    V: Clone,
    S: BuildHasher + Clone,
{
    type Key = K;
    type Value = V;

    fn contains(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn lookup_mut(&mut self, key: &K) -> Option<&mut V> {
        self.get_mut(key)
    }

    fn put(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }

    fn take(&mut self, key: &K) -> Option<V> {
        self.remove(key)
    }

    fn entry_count(&self) -> usize {
        self.len()
    }
}

impl<K, V> KeyedStore for BTreeMap<K, V>
where
    K: Ord + Clone + Debug,
    V: Clone,
{
    type Key = K;
    type Value = V;

    fn contains(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn lookup_mut(&mut self, key: &K) -> Option<&mut V> {
        self.get_mut(key)
    }

    fn put(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }

    fn take(&mut self, key: &K) -> Option<V> {
        self.remove(key)
    }

    fn entry_count(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> KeyedStore for IndexMap<K, V, S>
where
    K: Eq + Hash + Clone + Debug,
    V: Clone,
    S: BuildHasher + Clone,
{
    type Key = K;
    type Value = V;

    fn contains(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn lookup_mut(&mut self, key: &K) -> Option<&mut V> {
        self.get_mut(key)
    }

    fn put(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }

    // shift_remove keeps the order of the remaining entries.
    fn take(&mut self, key: &K) -> Option<V> {
        self.shift_remove(key)
    }

    fn entry_count(&self) -> usize {
        self.len()
    }
}
