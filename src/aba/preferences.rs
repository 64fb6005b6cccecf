use crate::utils::LabelType;
use std::collections::{HashMap, HashSet};

/// A preference relation over sentences, given as a list of `(higher, lower)` pairs.
///
/// A pair `(x, y)` means `x` is strictly preferred over `y`.
/// The relation is only queried through direct pair membership:
/// no transitive closure is ever computed, so `(x, y)` and `(y, z)` do not imply `(x, z)`.
///
/// # Example
///
/// ```
/// # use abaplus::aba::PreferenceRelation;
/// let mut preferences = PreferenceRelation::new();
/// preferences.add_chain(&["x", "y", "z"]);
/// assert!(preferences.is_preferred(&"x", &"y"));
/// assert!(preferences.is_preferred(&"y", &"z"));
/// assert!(!preferences.is_preferred(&"x", &"z"));
/// ```
#[derive(Clone, Debug)]
pub struct PreferenceRelation<T>
where
    T: LabelType,
{
    pairs: Vec<(T, T)>,
    lower_than: HashMap<T, HashSet<T>>,
}

impl<T> Default for PreferenceRelation<T>
where
    T: LabelType,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PreferenceRelation<T>
where
    T: LabelType,
{
    /// Builds an empty preference relation.
    pub fn new() -> Self {
        PreferenceRelation {
            pairs: Vec::new(),
            lower_than: HashMap::new(),
        }
    }

    /// Records that `higher` is strictly preferred over `lower`.
    ///
    /// Pairs are kept in insertion order, duplicates included.
    pub fn add(&mut self, higher: T, lower: T) {
        self.lower_than
            .entry(higher.clone())
            .or_default()
            .insert(lower.clone());
        self.pairs.push((higher, lower));
    }

    /// Records a chain `s1 > s2 > ... > sn` as its adjacent pairs `(s1, s2), ..., (sn-1, sn)`.
    pub fn add_chain(&mut self, chain: &[T]) {
        chain
            .windows(2)
            .for_each(|w| self.add(w[0].clone(), w[1].clone()));
    }

    /// Returns `true` iff the pair `(higher, lower)` has been recorded.
    pub fn is_preferred(&self, higher: &T, lower: &T) -> bool {
        self.lower_than
            .get(higher)
            .map_or(false, |lowers| lowers.contains(lower))
    }

    /// Iterates over the recorded pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &(T, T)> + '_ {
        self.pairs.iter()
    }

    /// Returns the number of recorded pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` iff no pair has been recorded.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
