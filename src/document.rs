use std::fmt;

use indexmap::{IndexMap, map};

use crate::{Error, Kind, Result, Value};

/// A string-keyed collection of [`Value`]s with unique keys.
///
/// Entries iterate, and therefore encode, in insertion order. Overwriting an
/// existing key with [`set`](Document::set) keeps its position; removing a key
/// keeps the relative order of the rest. Equality ignores order.
///
/// Floats compare with `==`, so a document holding a `NaN` anywhere, nested
/// documents and arrays included, is not equal to itself or to its own
/// decoded round trip. The round trip still preserves every bit.
///
/// `clone` is [`quick_clone`](Document::quick_clone).
#[derive(Default)]
pub struct Document {
    entries: IndexMap<String, Value>,
}

impl Document {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Inserts or overwrites, returning the displaced value.
    #[inline]
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Inserts only if `key` is absent. Returns `false`, leaving the document
    /// unchanged, if it was present.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> bool {
        match self.entries.entry(key.into()) {
            map::Entry::Occupied(_) => false,
            map::Entry::Vacant(entry) => {
                entry.insert(value.into());
                true
            }
        }
    }

    #[inline]
    pub fn find(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    #[inline]
    pub fn find_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    /// # Errors
    ///
    /// [`Error::KeyNotFound`] if `key` is absent.
    pub fn at(&self, key: &str) -> Result<&Value> {
        self.entries
            .get(key)
            .ok_or_else(|| Error::KeyNotFound(key.to_owned()))
    }

    /// # Errors
    ///
    /// [`Error::KeyNotFound`] if `key` is absent.
    pub fn at_mut(&mut self, key: &str) -> Result<&mut Value> {
        self.entries
            .get_mut(key)
            .ok_or_else(|| Error::KeyNotFound(key.to_owned()))
    }

    /// Looks up `key` and reads it as `T` in one step.
    ///
    /// ```
    /// use na_doc::doc;
    ///
    /// let d = doc! { "port" => 8080u16 };
    /// assert_eq!(*d.get_as::<u16>("port").unwrap(), 8080);
    /// assert!(d.get_as::<i32>("port").is_err());
    /// ```
    pub fn get_as<T: Kind>(&self, key: &str) -> Result<&T> {
        self.at(key)?.read_as::<T>()
    }

    /// Returns `true` if a key was removed.
    #[inline]
    pub fn remove(&mut self, key: &str) -> bool {
        self.take(key).is_some()
    }

    /// Removes `key` and returns its value.
    #[inline]
    pub fn take(&mut self, key: &str) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    #[inline]
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    #[inline]
    pub fn values(&self) -> impl Iterator<Item = &Value> + '_ {
        self.entries.values()
    }

    /// Clones every value recursively; the result shares no payload with `self`.
    pub fn deep_clone(&self) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .map(|(key, value)| (key.clone(), value.deep_clone()))
                .collect(),
        }
    }

    /// Fresh containers for this document and every nested one, leaf payloads shared.
    pub fn quick_clone(&self) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .map(|(key, value)| (key.clone(), value.quick_clone()))
                .collect(),
        }
    }
}

impl Clone for Document {
    #[inline]
    fn clone(&self) -> Self {
        self.quick_clone()
    }
}

impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .entries
                .iter()
                .all(|(key, value)| other.entries.get(key) == Some(value))
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Document {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut document = Document::new();
        document.extend(iter);
        document
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Document {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

/// Borrowing iterator over `(key, value)` pairs, in document order.
pub struct Iter<'a> {
    inner: map::Iter<'a, String, Value>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Value);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(key, value)| (key.as_str(), value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Document {
    type Item = (&'a str, &'a Value);
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Document {
    type Item = (String, Value);
    type IntoIter = map::IntoIter<String, Value>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_keeps_position() {
        let mut d = Document::new();
        d.set("a", 1i32);
        d.set("b", 2i32);
        let old = d.set("a", 3i32);
        assert_eq!(old, Some(Value::from(1i32)));
        assert_eq!(d.keys().collect::<Vec<_>>(), ["a", "b"]);
    }

    #[test]
    fn remove_keeps_relative_order() {
        let mut d: Document = [("a", 1u8), ("b", 2u8), ("c", 3u8)].into_iter().collect();
        assert!(d.remove("a"));
        assert!(!d.remove("a"));
        assert_eq!(d.keys().collect::<Vec<_>>(), ["b", "c"]);
    }

    #[test]
    fn deep_clone_shares_nothing() {
        let mut inner = Document::new();
        inner.set("s", "text");
        let mut d = Document::new();
        d.set("inner", inner);
        d.set("n", 5i64);

        let copy = d.deep_clone();
        assert_eq!(copy, d);
        assert!(!copy.find("n").unwrap().ptr_eq(d.find("n").unwrap()));
        let original_s = d.get_as::<Document>("inner").unwrap().find("s").unwrap();
        let copied_s = copy.get_as::<Document>("inner").unwrap().find("s").unwrap();
        assert!(!original_s.ptr_eq(copied_s));
    }
}
