use super::{ABAFramework, Rule};
use crate::utils::{LabelType, StringLabels, SyntheticLabels};
use std::collections::BTreeMap;

/// A structure used to translate an ABA framework into an atomic one, in which rule bodies contain only assumptions.
///
/// Each non-assumption sentence `s` of the language gets two new assumptions `s_d` and `s_nd`,
/// with `s_nd` as the contrary of `s_d` and `s` as the contrary of `s_nd`.
/// In rule bodies, each non-assumption `s` is replaced by `s_d`; assumptions are kept unchanged.
pub struct AtomicTransformer<T>
where
    T: LabelType,
{
    labels: Box<dyn SyntheticLabels<T>>,
}

impl AtomicTransformer<String> {
    /// Creates a new transformer for String-labelled frameworks.
    ///
    /// See [StringLabels] for the new labels.
    pub fn new_for_strings() -> Self {
        AtomicTransformer::new_with_labels(Box::new(StringLabels))
    }
}

impl<T> AtomicTransformer<T>
where
    T: LabelType,
{
    /// Creates a new transformer given the object used to build the new assumptions.
    pub fn new_with_labels(labels: Box<dyn SyntheticLabels<T>>) -> Self {
        Self { labels }
    }

    /// Translates an input framework into an atomic one.
    ///
    /// # Example
    ///
    /// ```
    /// # use abaplus::aba::{ABAFramework, AtomicTransformer, Rule};
    /// let mut framework = ABAFramework::new();
    /// framework.set_language(["p", "q"].map(String::from));
    /// framework.add_rule("r1", Rule::new("p".to_string(), vec!["q".to_string()]));
    /// let atomic = AtomicTransformer::new_for_strings().transform(&framework);
    /// assert!(atomic.is_atomic());
    /// assert_eq!(&["q_d".to_string()], atomic.get_rule("r1").unwrap().body());
    /// ```
    pub fn transform(&self, framework: &ABAFramework<T>) -> ABAFramework<T> {
        let mut new_framework = framework.clone();
        for sentence in framework.non_assumptions() {
            let derivable = self.labels.derivable(sentence);
            let not_derivable = self.labels.not_derivable(sentence);
            new_framework.add_assumption(derivable.clone());
            new_framework.add_assumption(not_derivable.clone());
            new_framework.add_to_language(derivable.clone());
            new_framework.add_to_language(not_derivable.clone());
            new_framework.set_contrary(derivable, not_derivable.clone());
            new_framework.set_contrary(not_derivable, sentence.clone());
        }
        let new_rules = framework
            .iter_rules()
            .map(|(rule_id, rule)| {
                let body = rule
                    .body()
                    .iter()
                    .map(|s| {
                        if framework.is_assumption(s) {
                            s.clone()
                        } else {
                            self.labels.derivable(s)
                        }
                    })
                    .collect();
                (rule_id.to_string(), Rule::new(rule.head().clone(), body))
            })
            .collect::<BTreeMap<String, Rule<T>>>();
        new_framework.set_rules(new_rules);
        new_framework
    }
}
