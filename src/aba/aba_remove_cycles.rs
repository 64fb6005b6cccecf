use super::{ABAFramework, Rule};
use crate::utils::{LabelType, StringLabels, SyntheticLabels};
use std::collections::BTreeMap;

/// A structure used to break cycles in an ABA framework by unfolding its rules on levels.
///
/// Let `k` be the number of non-assumption sentences of the language.
/// Each non-assumption sentence `s` gets copies `s^1`, ..., `s^(k-1)`, the sentence `s` itself standing for level `k`.
/// Rules with a body made of assumptions are copied on each level `1..=k`;
/// other rules are copied on each level `i` in `2..=k`, their non-assumption body sentences being taken at level `i-1`.
/// The copy of rule `r` at level `i` is identified by `r_i`.
///
/// Since each rule goes from a level to the previous one, the resulting framework has no cycle.
/// A sentence needing a derivation deeper than `k` in the initial framework is not guaranteed to be derivable in the new one.
pub struct NonCircularTransformer<T>
where
    T: LabelType,
{
    labels: Box<dyn SyntheticLabels<T>>,
}

impl NonCircularTransformer<String> {
    /// Creates a new transformer for String-labelled frameworks.
    ///
    /// See [StringLabels] for the new labels.
    pub fn new_for_strings() -> Self {
        NonCircularTransformer::new_with_labels(Box::new(StringLabels))
    }
}

impl<T> NonCircularTransformer<T>
where
    T: LabelType,
{
    /// Creates a new transformer given the object used to build the leveled copies of sentences.
    pub fn new_with_labels(labels: Box<dyn SyntheticLabels<T>>) -> Self {
        Self { labels }
    }

    /// Returns the unfolding depth used for a framework, that is its number of non-assumption sentences.
    pub fn depth(framework: &ABAFramework<T>) -> usize {
        framework.non_assumptions().len()
    }

    /// Returns the size of the unfolding of a framework.
    ///
    /// This is the greatest of the maximal number of rules the transformation produces (`k` times the number of rules)
    /// and of the number of leveled sentences it adds to the language (`k * (k-1)`).
    pub fn unfolding_size(framework: &ABAFramework<T>) -> usize {
        let depth = Self::depth(framework);
        let n_rules = depth.saturating_mul(framework.n_rules());
        let n_new_sentences = depth.saturating_mul(depth.saturating_sub(1));
        n_rules.max(n_new_sentences)
    }

    /// Translates an input framework into a new one without cycles.
    ///
    /// If the language has no non-assumption sentence, an unchanged copy of the framework is returned.
    ///
    /// # Example
    ///
    /// ```
    /// # use abaplus::aba::{ABAFramework, NonCircularTransformer, Rule, is_circular};
    /// let mut framework = ABAFramework::new();
    /// framework.set_language(["a", "p", "q"].map(String::from));
    /// framework.set_assumptions(["a".to_string()]);
    /// framework.add_rule("r1", Rule::new("p".to_string(), vec!["q".to_string()]));
    /// framework.add_rule("r2", Rule::new("q".to_string(), vec!["p".to_string()]));
    /// framework.add_rule("r3", Rule::new("q".to_string(), vec!["a".to_string()]));
    /// let transformer = NonCircularTransformer::new_for_strings();
    /// let non_circular = transformer.transform(&framework);
    /// assert!(is_circular(&framework));
    /// assert!(!is_circular(&non_circular));
    /// ```
    pub fn transform(&self, framework: &ABAFramework<T>) -> ABAFramework<T> {
        let non_assumptions = framework.non_assumptions();
        let depth = non_assumptions.len();
        let mut new_framework = framework.clone();
        if depth == 0 {
            return new_framework;
        }
        for sentence in non_assumptions.iter() {
            for level in 1..depth {
                new_framework.add_to_language(self.labels.leveled(sentence, level));
            }
        }
        let at_level = |sentence: &T, level: usize| {
            if level < depth {
                self.labels.leveled(sentence, level)
            } else {
                sentence.clone()
            }
        };
        let mut new_rules = BTreeMap::new();
        for (rule_id, rule) in framework.iter_rules() {
            if framework.are_assumptions(rule.body()) {
                for level in 1..=depth {
                    new_rules.insert(
                        format!("{}_{}", rule_id, level),
                        Rule::new(at_level(rule.head(), level), rule.body().to_vec()),
                    );
                }
            } else {
                for level in 2..=depth {
                    let body = rule
                        .body()
                        .iter()
                        .map(|s| {
                            if framework.is_assumption(s) {
                                s.clone()
                            } else {
                                at_level(s, level - 1)
                            }
                        })
                        .collect();
                    new_rules.insert(
                        format!("{}_{}", rule_id, level),
                        Rule::new(at_level(rule.head(), level), body),
                    );
                }
            }
        }
        new_framework.set_rules(new_rules);
        new_framework
    }
}
