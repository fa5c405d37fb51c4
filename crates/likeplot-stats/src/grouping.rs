//! Insertion-ordered grouping of observations by category.
//!
//! Charts draw their categories in the order the data first mentions them,
//! so grouping never sorts keys.

use std::{fmt, hash::Hash};

use indexmap::{IndexMap, IndexSet};

use crate::summary::{FiveNumberSummary, SummaryError};

/// Error returned by [`CategoryGrouping::summarize`], naming the failing group.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
#[display("category '{category}': {source}")]
pub struct GroupSummaryError {
    pub category: String,
    pub source: SummaryError,
}

/// A mapping from category keys to per-category data.
///
/// Keys are unique and iterate in the order of their first occurrence.
#[derive(Debug, Clone)]
pub struct CategoryGrouping<K, V> {
    map: IndexMap<K, V>,
}

// Equality ignores key order, like `IndexMap`.
impl<K, V> PartialEq for CategoryGrouping<K, V>
where
    K: Hash + Eq,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.map == other.map
    }
}

impl<K, V> Default for CategoryGrouping<K, V> {
    fn default() -> Self {
        Self {
            map: IndexMap::default(),
        }
    }
}

impl<K, T> CategoryGrouping<K, Vec<T>>
where
    K: Hash + Eq,
{
    /// Groups `items` by `key_fn`, collecting `value_fn` of every item.
    ///
    /// # Examples
    ///
    /// ```
    /// use likeplot_stats::grouping::CategoryGrouping;
    ///
    /// let rows = [("b", 1), ("a", 2), ("b", 3)];
    /// let groups = CategoryGrouping::group_by(rows, |r| r.0, |r| r.1);
    /// assert_eq!(groups.get(&"b"), Some(&vec![1, 3]));
    /// assert_eq!(groups.keys().copied().collect::<Vec<_>>(), ["b", "a"]);
    /// ```
    pub fn group_by<I, F, G>(items: I, mut key_fn: F, mut value_fn: G) -> Self
    where
        I: IntoIterator,
        F: FnMut(&I::Item) -> K,
        G: FnMut(&I::Item) -> T,
    {
        let mut map = IndexMap::<K, Vec<T>>::new();
        for item in items {
            map.entry(key_fn(&item)).or_default().push(value_fn(&item));
        }
        Self { map }
    }

    /// Groups `(key, value)` pairs.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, T)>,
    {
        let mut map = IndexMap::<K, Vec<T>>::new();
        for (key, value) in pairs {
            map.entry(key).or_default().push(value);
        }
        Self { map }
    }
}

impl<K> CategoryGrouping<K, Vec<f64>>
where
    K: Hash + Eq + Clone + fmt::Display,
{
    /// Computes a five-number summary for every group, keeping key order.
    ///
    /// Fails on the first group that cannot be summarized.
    pub fn summarize(&self) -> Result<CategoryGrouping<K, FiveNumberSummary>, GroupSummaryError> {
        self.try_map_values(|key, values| {
            FiveNumberSummary::new(values.iter().copied()).map_err(|source| GroupSummaryError {
                category: key.to_string(),
                source,
            })
        })
    }
}

impl<K, V> CategoryGrouping<K, V>
where
    K: Hash + Eq,
{
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.map.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.map.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.map.iter()
    }

    /// Applies `f` to every group, keeping key order.
    pub fn map_values<W, F>(&self, mut f: F) -> CategoryGrouping<K, W>
    where
        K: Clone,
        F: FnMut(&K, &V) -> W,
    {
        CategoryGrouping {
            map: self.map.iter().map(|(k, v)| (k.clone(), f(k, v))).collect(),
        }
    }

    /// Applies a fallible `f` to every group, stopping at the first error.
    pub fn try_map_values<W, E, F>(&self, mut f: F) -> Result<CategoryGrouping<K, W>, E>
    where
        K: Clone,
        F: FnMut(&K, &V) -> Result<W, E>,
    {
        let map = self
            .map
            .iter()
            .map(|(k, v)| Ok((k.clone(), f(k, v)?)))
            .collect::<Result<_, E>>()?;
        Ok(CategoryGrouping { map })
    }
}

impl<'a, K, V> IntoIterator for &'a CategoryGrouping<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = indexmap::map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.iter()
    }
}

/// Returns the distinct values of `items` in first-seen order.
///
/// # Examples
///
/// ```
/// use likeplot_stats::grouping::distinct_in_order;
///
/// let platforms = distinct_in_order(["X", "Instagram", "X", "LinkedIn"]);
/// assert_eq!(platforms, ["X", "Instagram", "LinkedIn"]);
/// ```
pub fn distinct_in_order<I>(items: I) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: Hash + Eq,
{
    items.into_iter().collect::<IndexSet<_>>().into_iter().collect()
}
