//! Deduplicating adapters.
//!
//! Both adapters remember what they have already yielded in an [`FxHashSet`], so
//! the item (or key) type must be `Eq + Hash`. First occurrences keep their order.

use std::hash::Hash;

use rustc_hash::FxHashSet;

use crate::Sequence;

/// Skips items equal to one already yielded.
pub struct Unique<S: Sequence> {
    inner: S,
    seen: FxHashSet<S::Item>,
}

pub fn unique<S>(inner: S) -> Unique<S>
where
    S: Sequence,
    S::Item: Eq + Hash + Clone,
{
    Unique {
        inner,
        seen: FxHashSet::default(),
    }
}

impl<S> Clone for Unique<S>
where
    S: Sequence + Clone,
    S::Item: Clone,
{
    fn clone(&self) -> Self {
        Unique {
            inner: self.inner.clone(),
            seen: self.seen.clone(),
        }
    }
}

impl<S> Sequence for Unique<S>
where
    S: Sequence,
    S::Item: Eq + Hash + Clone,
{
    type Item = S::Item;
    fn next(&mut self) -> Option<S::Item> {
        while let Some(item) = self.inner.next() {
            if !self.seen.contains(&item) {
                self.seen.insert(item.clone());
                return Some(item);
            }
        }
        None
    }
}

/// Skips items whose key matches the key of one already yielded.
///
/// Only keys are retained; the yielded values are the original items.
#[derive(Clone)]
pub struct UniqueBy<S, K, F> {
    inner: S,
    seen: FxHashSet<K>,
    key: F,
}

pub fn unique_by<S, K, F>(inner: S, key: F) -> UniqueBy<S, K, F>
where
    S: Sequence,
    K: Eq + Hash,
    F: FnMut(&S::Item) -> K,
{
    UniqueBy {
        inner,
        seen: FxHashSet::default(),
        key,
    }
}

impl<S, K, F> Sequence for UniqueBy<S, K, F>
where
    S: Sequence,
    K: Eq + Hash,
    F: FnMut(&S::Item) -> K,
{
    type Item = S::Item;
    fn next(&mut self) -> Option<S::Item> {
        while let Some(item) = self.inner.next() {
            if self.seen.insert((self.key)(&item)) {
                return Some(item);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::from_iter;

    #[test]
    fn test_unique_keeps_first_occurrences() {
        let distinct: Vec<i32> = unique(from_iter([1, 1, 1, 2, -3, 1])).collect();
        assert_eq!(distinct, vec![1, 2, -3]);
    }

    #[test]
    fn test_unique_on_references_compares_values() {
        let words = [String::from("x"), String::from("y"), String::from("x")];
        let distinct: Vec<&String> = unique(from_iter(&words)).collect();
        assert_eq!(distinct, vec!["x", "y"]);
    }

    #[test]
    fn test_unique_clone_copies_seen_set() {
        let mut seq = unique(from_iter([5, 6, 5, 7]));
        assert_eq!(seq.next(), Some(5));

        let mut copy = seq.clone();
        assert_eq!(seq.next(), Some(6));
        assert_eq!(seq.next(), Some(7));
        assert_eq!(copy.next(), Some(6));
        assert_eq!(copy.next(), Some(7));
        assert_eq!(copy.next(), None);
    }

    #[test]
    fn test_unique_by_length() {
        let strings = ["aa", "bb", "a", "ccc"];
        let by_len: Vec<&str> = unique_by(from_iter(strings), |s| s.len()).collect();
        assert_eq!(by_len, vec!["aa", "a", "ccc"]);
    }
}
