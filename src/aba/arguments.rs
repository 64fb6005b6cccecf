use super::{ABAFramework, Rule};
use crate::utils::LabelType;
use log::debug;
use std::{
    collections::{BTreeSet, HashMap},
    fmt::Display,
};

/// An argument of an ABA framework.
///
/// An argument establishes a claim from a set of assumptions (its support), using a set of rules (its derivation).
/// Arguments are built by [derive_arguments]; their identifiers follow their construction order, starting at 1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Argument<T>
where
    T: LabelType,
{
    id: usize,
    claim: T,
    support: BTreeSet<T>,
    derivation: BTreeSet<String>,
}

impl<T> Argument<T>
where
    T: LabelType,
{
    /// Returns the identifier of the argument.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Returns the label of the argument, built from its identifier (`a1`, `a2`, ...).
    pub fn label(&self) -> String {
        argument_label(self.id)
    }

    /// Returns the claim of the argument.
    pub fn claim(&self) -> &T {
        &self.claim
    }

    /// Returns the assumptions the argument rests on.
    pub fn support(&self) -> &BTreeSet<T> {
        &self.support
    }

    /// Returns the identifiers of the rules used by the argument.
    pub fn derivation(&self) -> &BTreeSet<String> {
        &self.derivation
    }
}

pub(crate) fn argument_label(id: usize) -> String {
    format!("a{}", id)
}

impl<T> Display for Argument<T>
where
    T: LabelType,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {{", self.label())?;
        for (i, s) in self.support.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", s)?;
        }
        write!(f, "}} ⊢ {}", self.claim)
    }
}

/// Handles the arguments derived from an ABA framework.
///
/// There is at most one argument per claim: the first argument built for a claim is the only one that is kept.
/// Arguments are kept in construction order.
#[derive(Debug)]
pub struct ArgumentSet<T>
where
    T: LabelType,
{
    arguments: Vec<Argument<T>>,
    claim_to_index: HashMap<T, usize>,
}

impl<T> Default for ArgumentSet<T>
where
    T: LabelType,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ArgumentSet<T>
where
    T: LabelType,
{
    /// Builds an empty argument set.
    pub fn new() -> Self {
        ArgumentSet {
            arguments: Vec::new(),
            claim_to_index: HashMap::new(),
        }
    }

    /// Adds an argument, unless an argument with the same claim is already present.
    ///
    /// The new argument receives the next identifier.
    /// Returns `true` iff the argument was added.
    pub(crate) fn try_insert(
        &mut self,
        claim: T,
        support: BTreeSet<T>,
        derivation: BTreeSet<String>,
    ) -> bool {
        if self.claim_to_index.contains_key(&claim) {
            return false;
        }
        self.claim_to_index
            .insert(claim.clone(), self.arguments.len());
        self.arguments.push(Argument {
            id: 1 + self.arguments.len(),
            claim,
            support,
            derivation,
        });
        true
    }

    /// Returns the number of arguments.
    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    /// Returns `true` iff there is no argument.
    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    /// Returns `true` iff an argument establishes the given claim.
    pub fn has_claim(&self, claim: &T) -> bool {
        self.claim_to_index.contains_key(claim)
    }

    /// Returns the argument establishing the given claim, if any.
    pub fn get_by_claim(&self, claim: &T) -> Option<&Argument<T>> {
        self.claim_to_index.get(claim).map(|i| &self.arguments[*i])
    }

    /// Returns the argument with the given identifier, if any.
    pub fn get_by_id(&self, id: usize) -> Option<&Argument<T>> {
        id.checked_sub(1).and_then(|i| self.arguments.get(i))
    }

    /// Iterates over the arguments in construction order.
    pub fn iter(&self) -> impl Iterator<Item = &Argument<T>> + '_ {
        self.arguments.iter()
    }
}

/// Computes the arguments of an ABA framework.
///
/// Each assumption gives a trivial argument, in increasing order of assumptions.
/// Then, the rules are scanned in increasing order of their identifiers until a fixed point is reached:
/// a rule whose body sentences are all claims of existing arguments produces an argument for its head,
/// unless this head is already claimed.
/// The support (resp. derivation) of the new argument is the union of the ones of the body arguments
/// (resp. plus the rule identifier).
///
/// Sentences involved in a cycle of rules among non-assumptions never get an argument.
///
/// # Example
///
/// ```
/// # use abaplus::aba::{ABAFramework, Rule, derive_arguments};
/// let mut framework = ABAFramework::new();
/// framework.set_language(["a", "p", "q"]);
/// framework.set_assumptions(["a"]);
/// framework.add_rule("r1", Rule::new("q", vec!["p"]));
/// framework.add_rule("r2", Rule::new("p", vec!["a"]));
/// let arguments = derive_arguments(&framework);
/// assert_eq!(3, arguments.len());
/// assert_eq!(3, arguments.get_by_claim(&"q").unwrap().id());
/// ```
pub fn derive_arguments<T>(framework: &ABAFramework<T>) -> ArgumentSet<T>
where
    T: LabelType,
{
    let mut arguments = ArgumentSet::new();
    for assumption in framework.assumptions() {
        arguments.try_insert(
            assumption.clone(),
            BTreeSet::from([assumption.clone()]),
            BTreeSet::new(),
        );
    }
    let mut n_passes = 0;
    loop {
        n_passes += 1;
        let mut changed = false;
        for (rule_id, rule) in framework.iter_rules() {
            if arguments.has_claim(rule.head()) {
                continue;
            }
            if let Some((support, mut derivation)) = combine_body_arguments(&arguments, rule) {
                derivation.insert(rule_id.to_string());
                changed |= arguments.try_insert(rule.head().clone(), support, derivation);
            }
        }
        if !changed {
            break;
        }
    }
    debug!(
        "derived {} argument(s) in {} pass(es) over {} rule(s)",
        arguments.len(),
        n_passes,
        framework.n_rules()
    );
    arguments
}

fn combine_body_arguments<T>(
    arguments: &ArgumentSet<T>,
    rule: &Rule<T>,
) -> Option<(BTreeSet<T>, BTreeSet<String>)>
where
    T: LabelType,
{
    let mut support = BTreeSet::new();
    let mut derivation = BTreeSet::new();
    for sentence in rule.body() {
        let body_arg = arguments.get_by_claim(sentence)?;
        support.extend(body_arg.support().iter().cloned());
        derivation.extend(body_arg.derivation().iter().cloned());
    }
    Some((support, derivation))
}
