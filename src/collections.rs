//! Collection helpers.
//!
//! Every helper returns a new collection except [`dedup_in_place`].
//! Order is always preserved: deduplication keeps first occurrences and
//! counting reports keys in first-seen order.
//!
//! ```rust
//! use datautils::collections::{chunk, unique};
//!
//! assert_eq!(unique(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
//! assert_eq!(chunk(&[1, 2, 3, 4, 5], 2).unwrap(), vec![vec![1, 2], vec![3, 4], vec![5]]);
//! ```

use crate::{Error, Result, Value};
use indexmap::{IndexMap, IndexSet};
use std::hash::Hash;

/// Recursively flattens nested arrays, sets and tuples.
///
/// # Examples
///
/// ```rust
/// use datautils::collections::flatten;
/// use datautils::{value, Value};
///
/// let nested = value!([1, [2, [3, 4]], 5]);
/// let flat = flatten(nested.as_slice().unwrap());
/// assert_eq!(Value::Array(flat), value!([1, 2, 3, 4, 5]));
/// ```
#[must_use]
pub fn flatten(items: &[Value]) -> Vec<Value> {
    flatten_depth(items, usize::MAX)
}

/// Flattens at most `depth` levels of nesting. A depth of zero copies the
/// input unchanged.
#[must_use]
pub fn flatten_depth(items: &[Value], depth: usize) -> Vec<Value> {
    let mut out = Vec::with_capacity(items.len());
    flatten_into(items, depth, &mut out);
    out
}

fn flatten_into(items: &[Value], depth: usize, out: &mut Vec<Value>) {
    for item in items {
        match item.as_slice() {
            Some(inner) if depth > 0 => flatten_into(inner, depth - 1, out),
            _ => out.push(item.clone()),
        }
    }
}

/// Removes duplicates, keeping the first occurrence of each element.
#[must_use]
pub fn unique<T>(items: &[T]) -> Vec<T>
where
    T: Hash + Eq + Clone,
{
    items
        .iter()
        .cloned()
        .collect::<IndexSet<T>>()
        .into_iter()
        .collect()
}

/// Removes elements whose key was already seen, keeping first occurrences.
///
/// # Examples
///
/// ```rust
/// use datautils::collections::unique_by;
///
/// let words = ["apple", "avocado", "banana", "blueberry", "cherry"];
/// assert_eq!(unique_by(&words, |w| w.chars().next()), vec!["apple", "banana", "cherry"]);
/// ```
#[must_use]
pub fn unique_by<T, K, F>(items: &[T], mut key: F) -> Vec<T>
where
    T: Clone,
    K: Hash + Eq,
    F: FnMut(&T) -> K,
{
    let mut seen = IndexSet::new();
    items
        .iter()
        .filter(|item| seen.insert(key(*item)))
        .cloned()
        .collect()
}

/// [`unique`] for [`Value`], which is compared by equality rather than hashed.
#[must_use]
pub fn unique_values(items: &[Value]) -> Vec<Value> {
    let mut out: Vec<Value> = Vec::with_capacity(items.len());
    for item in items {
        if !out.contains(item) {
            out.push(item.clone());
        }
    }
    out
}

/// Removes later duplicates from `items` in place.
pub fn dedup_in_place(items: &mut Vec<Value>) {
    let mut idx = 0;
    while idx < items.len() {
        if items[..idx].contains(&items[idx]) {
            items.remove(idx);
        } else {
            idx += 1;
        }
    }
}

/// Returns the element at `index`, or `default` when out of range.
///
/// Negative indices count from the end.
///
/// # Examples
///
/// ```rust
/// use datautils::collections::get_or;
///
/// let items = [10, 20, 30];
/// assert_eq!(*get_or(&items, -1, &0), 30);
/// assert_eq!(*get_or(&items, 5, &0), 0);
/// ```
#[must_use]
pub fn get_or<'a, T>(items: &'a [T], index: isize, default: &'a T) -> &'a T {
    resolve_index(items.len(), index)
        .and_then(|idx| items.get(idx))
        .unwrap_or(default)
}

fn resolve_index(len: usize, index: isize) -> Option<usize> {
    if index >= 0 {
        usize::try_from(index).ok()
    } else {
        len.checked_sub(index.unsigned_abs())
    }
}

/// Walks `path` through nested objects (by key) and sequences (by index,
/// negative from the end).
///
/// # Examples
///
/// ```rust
/// use datautils::collections::lookup;
/// use datautils::{value, Value};
///
/// let data = value!({"users": [{"name": "Ada"}, {"name": "Lin"}]});
/// assert_eq!(lookup(&data, &["users", "-1", "name"]), Some(&Value::from("Lin")));
/// assert_eq!(lookup(&data, &["users", "7"]), None);
/// ```
#[must_use]
pub fn lookup<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(value, |current, segment| match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) | Value::Set(items) | Value::Tuple(items) => {
            let index = segment.parse::<isize>().ok()?;
            resolve_index(items.len(), index).and_then(|idx| items.get(idx))
        }
        _ => None,
    })
}

/// [`lookup`] falling back to `default`.
#[must_use]
pub fn lookup_or<'a>(value: &'a Value, path: &[&str], default: &'a Value) -> &'a Value {
    lookup(value, path).unwrap_or(default)
}

/// Counts occurrences, keyed in first-seen order.
#[must_use]
pub fn counts<T>(items: &[T]) -> IndexMap<T, usize>
where
    T: Hash + Eq + Clone,
{
    let mut out = IndexMap::new();
    for item in items {
        *out.entry(item.clone()).or_insert(0) += 1;
    }
    out
}

/// Splits `items` into chunks of `size`; the last chunk may be shorter.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `size` is zero.
pub fn chunk<T: Clone>(items: &[T], size: usize) -> Result<Vec<Vec<T>>> {
    if size == 0 {
        return Err(Error::invalid_argument("chunk size must be positive"));
    }
    Ok(items.chunks(size).map(<[T]>::to_vec).collect())
}
