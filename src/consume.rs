//! Functions for driving sequences to a result.
//!
//! Every terminal operation on [`Sequence`] is defined here once, in terms of
//! [`Sequence::next`] alone. The provided methods on the trait delegate to these
//! functions, so they can also be called directly:
//!
//! ```rust
//! use lazyseq::{consume, prelude::*};
//!
//! let product = consume::fold(from_iter([1, 3, 10]), 1, |acc, v| acc * v);
//! assert_eq!(product, 30);
//! ```

use std::{fmt::Display, ops::Add};

use crate::Sequence;

/// Returns `true` if `predicate` holds for every item pulled from `seq`.
pub fn all<S, P>(seq: &mut S, mut predicate: P) -> bool
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    while let Some(item) = seq.next() {
        if !predicate(&item) {
            return false;
        }
    }
    true
}

/// Returns `true` as soon as `predicate` holds for an item pulled from `seq`.
pub fn any<S, P>(seq: &mut S, mut predicate: P) -> bool
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    while let Some(item) = seq.next() {
        if predicate(&item) {
            return true;
        }
    }
    false
}

pub fn none<S, P>(seq: &mut S, predicate: P) -> bool
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    !any(seq, predicate)
}

/// Pull from `seq` until an item matches `predicate`.
pub fn find<S, P>(seq: &mut S, mut predicate: P) -> Option<S::Item>
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    while let Some(item) = seq.next() {
        if predicate(&item) {
            return Some(item);
        }
    }
    None
}

/// Left fold over every remaining item.
pub fn fold<S, B, F>(mut seq: S, init: B, mut f: F) -> B
where
    S: Sequence,
    F: FnMut(B, S::Item) -> B,
{
    let mut acc = init;
    while let Some(item) = seq.next() {
        acc = f(acc, item);
    }
    acc
}

/// Seed with the first item, then fold the rest with `f(best, candidate)`.
fn reduce<S, F>(mut seq: S, f: F) -> Option<S::Item>
where
    S: Sequence,
    F: FnMut(S::Item, S::Item) -> S::Item,
{
    let first = seq.next()?;
    Some(fold(seq, first, f))
}

pub fn max<S>(seq: S) -> Option<S::Item>
where
    S: Sequence,
    S::Item: PartialOrd,
{
    reduce(seq, |best, candidate| if candidate > best { candidate } else { best })
}

pub fn min<S>(seq: S) -> Option<S::Item>
where
    S: Sequence,
    S::Item: PartialOrd,
{
    reduce(seq, |best, candidate| if candidate < best { candidate } else { best })
}

/// Reduce with a comparator called as `pick(candidate, best)`.
pub fn max_by<S, F>(seq: S, mut pick: F) -> Option<S::Item>
where
    S: Sequence,
    F: FnMut(S::Item, S::Item) -> S::Item,
{
    reduce(seq, |best, candidate| pick(candidate, best))
}

/// Reduce with a comparator called as `pick(candidate, best)`.
///
/// Identical to [`max_by`]; which item "wins" is entirely up to `pick`.
pub fn min_by<S, F>(seq: S, pick: F) -> Option<S::Item>
where
    S: Sequence,
    F: FnMut(S::Item, S::Item) -> S::Item,
{
    max_by(seq, pick)
}

pub fn sum<S, T>(seq: S) -> T
where
    S: Sequence,
    T: Default + Add<S::Item, Output = T>,
{
    fold(seq, T::default(), |acc, item| acc + item)
}

pub fn for_each<S, F>(mut seq: S, mut f: F)
where
    S: Sequence,
    F: FnMut(S::Item),
{
    while let Some(item) = seq.next() {
        f(item);
    }
}

/// Render each item with [`Display`], placing `sep` between (not after) items.
pub fn join<S>(mut seq: S, sep: &str) -> String
where
    S: Sequence,
    S::Item: Display,
{
    let Some(first) = seq.next() else {
        return String::new();
    };

    let mut joined = first.to_string();
    while let Some(item) = seq.next() {
        joined.push_str(sep);
        joined.push_str(&item.to_string());
    }
    joined
}

pub fn count<S: Sequence>(seq: S) -> usize {
    fold(seq, 0, |n, _| n + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{empty, from_iter};

    #[test]
    fn test_all_any_none_on_empty() {
        assert!(all(&mut empty::<i32>(), |_| false));
        assert!(!any(&mut empty::<i32>(), |_| true));
        assert!(none(&mut empty::<i32>(), |_| true));
    }

    #[test]
    fn test_all_stops_at_first_failure() {
        let mut seq = from_iter([2, 4, 5, 6, 7]);

        assert!(!all(&mut seq, |v| v % 2 == 0));
        assert_eq!(seq.next(), Some(6));
    }

    #[test]
    fn test_none_with_odd_values() {
        let mut seq = from_iter([1, 3, 5, 7, 9]);
        assert!(none(&mut seq, |v| v % 2 == 0));
    }

    #[test]
    fn test_find_present_and_absent() {
        assert_eq!(find(&mut from_iter(1..=10), |v| *v == 5), Some(5));
        assert_eq!(find(&mut from_iter(1..=10), |v| *v == 11), None);
    }

    #[test]
    fn test_max_min_keep_earliest_on_ties() {
        let words = ["aaa", "aa", "b"];
        assert_eq!(max(from_iter(words)), Some("b"));
        assert_eq!(min(from_iter(words)), Some("aa"));

        let pairs = [(1, 'a'), (3, 'b'), (3, 'c'), (1, 'd')];
        let by_key = max_by(from_iter(pairs), |candidate, best| {
            if candidate.0 > best.0 { candidate } else { best }
        });
        assert_eq!(by_key, Some((3, 'b')));
    }

    #[test]
    fn test_max_min_on_empty() {
        assert_eq!(max(empty::<u8>()), None);
        assert_eq!(min(empty::<u8>()), None);
        assert_eq!(max_by(empty::<u8>(), |a, _| a), None);
    }

    #[test]
    fn test_max_by_and_min_by_length() {
        let words = ["aa", "b", "ccc", "d", "a"];
        let longest = max_by(from_iter(words), |lhs, rhs| {
            if lhs.len() > rhs.len() { lhs } else { rhs }
        });
        assert_eq!(longest, Some("ccc"));

        let words = ["aa", "b", "ccc", "da", "ab"];
        let shortest = min_by(from_iter(words), |lhs, rhs| {
            if lhs.len() < rhs.len() { lhs } else { rhs }
        });
        assert_eq!(shortest, Some("b"));
    }

    #[test]
    fn test_partial_ord_items() {
        assert_eq!(max(from_iter([1.5, -2.0, 8.25])), Some(8.25));
        assert_eq!(min(from_iter([1.5, -2.0, 8.25])), Some(-2.0));
    }

    #[test]
    fn test_sum_and_fold() {
        assert_eq!(sum::<_, i32>(from_iter([2, 5, 10])), 17);
        assert_eq!(sum::<_, i32>(empty::<i32>()), 0);
        assert_eq!(fold(from_iter([1, 3, 10]), 1, |acc, v| acc * v), 30);
    }

    #[test]
    fn test_fold_is_left_to_right() {
        let trail = fold(from_iter(["a", "b", "c"]), String::new(), |mut acc, s| {
            acc.push_str(s);
            acc
        });
        assert_eq!(trail, "abc");
    }

    #[test]
    fn test_for_each_visits_in_order() {
        let mut seen = Vec::new();
        for_each(from_iter(0..10), |v| seen.push(v));
        assert_eq!(seen, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_join() {
        assert_eq!(join(from_iter(1..=5), ", "), "1, 2, 3, 4, 5");
        assert_eq!(join(from_iter(["solo"]), "-"), "solo");
        assert_eq!(join(empty::<i32>(), ", "), "");
    }

    #[test]
    fn test_count_counts_what_remains() {
        let mut seq = from_iter(0..5);
        seq.next();
        seq.next();
        assert_eq!(count(seq), 3);
    }
}
