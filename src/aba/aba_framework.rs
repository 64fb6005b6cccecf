use super::PreferenceRelation;
use crate::utils::LabelType;
use std::collections::{BTreeMap, BTreeSet};

/// A rule in an ABA framework.
///
/// The order of the body is irrelevant to the semantics, but it is preserved to keep iterations deterministic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule<T>
where
    T: LabelType,
{
    head: T,
    body: Vec<T>,
}

impl<T> Rule<T>
where
    T: LabelType,
{
    /// Builds a new rule given its head and its body.
    pub fn new(head: T, body: Vec<T>) -> Self {
        Rule { head, body }
    }

    /// Returns the head of the rule.
    pub fn head(&self) -> &T {
        &self.head
    }

    /// Returns the body of the rule.
    pub fn body(&self) -> &[T] {
        &self.body
    }

    /// Returns `true` iff the rule has an empty body.
    pub fn is_fact(&self) -> bool {
        self.body.is_empty()
    }
}

/// Handles an ABA framework with preferences.
///
/// [ABAFramework] objects hold a language, a set of assumptions, the contraries of (some of) the assumptions,
/// a set of identified rules and a preference relation.
///
/// Unlike a strict flat ABA framework, nothing is checked when the framework is populated:
/// assumptions and rules may refer to sentences that are not part of the language,
/// assumptions may have no contrary, and assumptions may be the head of rules.
/// Such sentences are handled as opaque labels by the algorithms.
///
/// Rules are iterated in the order of their identifiers.
///
/// # Example
///
/// ```
/// # use abaplus::aba::{ABAFramework, Rule};
/// let mut framework = ABAFramework::new();
/// framework.set_language(["a", "b", "c", "p", "q", "r", "s", "t"]);
/// framework.set_assumptions(["a", "b", "c"]);
/// framework.set_contrary("a", "r");
/// framework.set_contrary("b", "s");
/// framework.set_contrary("c", "t");
/// framework.add_rule("r1", Rule::new("p", vec!["q", "a"]));
/// framework.add_rule("r2", Rule::new("q", vec![]));
/// framework.add_rule("r3", Rule::new("r", vec!["b", "c"]));
/// assert_eq!(3, framework.n_rules());
/// assert!(!framework.is_atomic());
/// ```
#[derive(Clone, Debug)]
pub struct ABAFramework<T>
where
    T: LabelType,
{
    language: BTreeSet<T>,
    assumptions: BTreeSet<T>,
    contraries: BTreeMap<T, T>,
    rules: BTreeMap<String, Rule<T>>,
    preferences: PreferenceRelation<T>,
}

impl<T> Default for ABAFramework<T>
where
    T: LabelType,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ABAFramework<T>
where
    T: LabelType,
{
    /// Builds an empty framework.
    pub fn new() -> Self {
        ABAFramework {
            language: BTreeSet::new(),
            assumptions: BTreeSet::new(),
            contraries: BTreeMap::new(),
            rules: BTreeMap::new(),
            preferences: PreferenceRelation::new(),
        }
    }

    /// Sets the language, replacing any previous one.
    pub fn set_language<I>(&mut self, language: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.language = language.into_iter().collect();
    }

    /// Adds a sentence to the language.
    pub fn add_to_language(&mut self, sentence: T) {
        self.language.insert(sentence);
    }

    /// Sets the assumptions, replacing any previous ones.
    ///
    /// The language is left untouched.
    pub fn set_assumptions<I>(&mut self, assumptions: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.assumptions = assumptions.into_iter().collect();
    }

    /// Adds an assumption.
    ///
    /// The language is left untouched.
    pub fn add_assumption(&mut self, assumption: T) {
        self.assumptions.insert(assumption);
    }

    /// Sets the contrary of an assumption, replacing any previous one.
    pub fn set_contrary(&mut self, assumption: T, contrary: T) {
        self.contraries.insert(assumption, contrary);
    }

    /// Adds a rule given its identifier.
    ///
    /// If a rule with the same identifier exists, it is replaced.
    pub fn add_rule<S>(&mut self, rule_id: S, rule: Rule<T>)
    where
        S: Into<String>,
    {
        self.rules.insert(rule_id.into(), rule);
    }

    pub(crate) fn set_rules(&mut self, rules: BTreeMap<String, Rule<T>>) {
        self.rules = rules;
    }

    /// Records that `higher` is strictly preferred over `lower`.
    pub fn add_preference(&mut self, higher: T, lower: T) {
        self.preferences.add(higher, lower);
    }

    /// Records a chain of preferences as its adjacent pairs.
    ///
    /// See [PreferenceRelation::add_chain].
    pub fn add_preference_chain(&mut self, chain: &[T]) {
        self.preferences.add_chain(chain);
    }

    /// Returns the language, in increasing order.
    pub fn language(&self) -> &BTreeSet<T> {
        &self.language
    }

    /// Returns the assumptions, in increasing order.
    pub fn assumptions(&self) -> &BTreeSet<T> {
        &self.assumptions
    }

    /// Returns the number of assumptions.
    pub fn n_assumptions(&self) -> usize {
        self.assumptions.len()
    }

    /// Returns `true` iff the provided sentence is an assumption.
    pub fn is_assumption(&self, sentence: &T) -> bool {
        self.assumptions.contains(sentence)
    }

    /// Returns the declared contraries, indexed by the assumptions.
    pub fn contraries(&self) -> &BTreeMap<T, T> {
        &self.contraries
    }

    /// Returns the contrary of a sentence, or `None` if no contrary was declared for it.
    ///
    /// ```
    /// # use abaplus::aba::ABAFramework;
    /// let mut framework = ABAFramework::new();
    /// framework.set_assumptions(["a", "b"]);
    /// framework.set_contrary("a", "p");
    /// assert_eq!(Some(&"p"), framework.contrary_of(&"a"));
    /// assert_eq!(None, framework.contrary_of(&"b"));
    /// ```
    pub fn contrary_of(&self, sentence: &T) -> Option<&T> {
        self.contraries.get(sentence)
    }

    /// Returns the number of rules.
    pub fn n_rules(&self) -> usize {
        self.rules.len()
    }

    /// Returns the rule with the given identifier, if any.
    pub fn get_rule(&self, rule_id: &str) -> Option<&Rule<T>> {
        self.rules.get(rule_id)
    }

    /// Iterates over the rules and their identifiers, in increasing order of identifiers.
    pub fn iter_rules(&self) -> impl Iterator<Item = (&str, &Rule<T>)> + '_ {
        self.rules.iter().map(|(id, r)| (id.as_str(), r))
    }

    /// Returns the preference relation.
    pub fn preferences(&self) -> &PreferenceRelation<T> {
        &self.preferences
    }

    /// Returns the sentences of the language that are not assumptions, in increasing order.
    pub fn non_assumptions(&self) -> Vec<&T> {
        self.language.difference(&self.assumptions).collect()
    }

    /// Returns `true` iff all the sentences of the slice are assumptions.
    pub fn are_assumptions(&self, sentences: &[T]) -> bool {
        sentences.iter().all(|s| self.is_assumption(s))
    }

    /// Returns `true` iff the body of each rule contains only assumptions.
    pub fn is_atomic(&self) -> bool {
        self.rules.values().all(|r| self.are_assumptions(r.body()))
    }
}
