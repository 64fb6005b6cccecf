use std::{
    fmt::{Debug, Display},
    hash::Hash,
};

/// The trait for sentence labels.
///
/// Sentences may be labeled by any type implementing some traits allowing their use in maps, their display and their ordering.
/// This trait is just a shortcut used to combine them.
/// The ordering is the one used each time the algorithms need a deterministic iteration order.
///
/// Simple types like [usize] and [String] implements [LabelType].
pub trait LabelType: Clone + Debug + Display + Eq + Hash + Ord {}
impl<T: Clone + Debug + Display + Eq + Hash + Ord> LabelType for T {}

/// A trait for objects building the sentences introduced by framework transformations.
///
/// Given a sentence of the initial framework, the new labels must not collide with the ones of the initial framework.
pub trait SyntheticLabels<T>
where
    T: LabelType,
{
    /// Returns the copy of a sentence at a given unfolding level.
    fn leveled(&self, label: &T, level: usize) -> T;

    /// Returns the assumption standing for the derivability of a sentence.
    fn derivable(&self, label: &T) -> T;

    /// Returns the assumption standing for the non-derivability of a sentence.
    fn not_derivable(&self, label: &T) -> T;
}

/// Synthetic labels for [String]-labelled frameworks.
///
/// The labels are built by adding a suffix to the initial sentence:
/// `s^i` for the copy of `s` at level `i`, `s_d` and `s_nd` for the (non-)derivability assumptions.
///
/// # Example
///
/// ```
/// # use abaplus::utils::{StringLabels, SyntheticLabels};
/// let labels = StringLabels;
/// let p = "p".to_string();
/// assert_eq!("p^2", labels.leveled(&p, 2));
/// assert_eq!("p_d", labels.derivable(&p));
/// assert_eq!("p_nd", labels.not_derivable(&p));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct StringLabels;

impl SyntheticLabels<String> for StringLabels {
    fn leveled(&self, label: &String, level: usize) -> String {
        format!("{}^{}", label, level)
    }

    fn derivable(&self, label: &String) -> String {
        format!("{}_d", label)
    }

    fn not_derivable(&self, label: &String) -> String {
        format!("{}_nd", label)
    }
}
