use super::ABAFramework;
use crate::utils::LabelType;
use std::collections::{HashMap, HashSet};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Color {
    Unvisited,
    InProgress,
    Finished,
}

/// The dependency graph among the non-assumption sentences of a framework.
///
/// There is an edge from a head to a body sentence of the same rule when both are non-assumptions of the language.
struct DependencyGraph<'a, T>
where
    T: LabelType,
{
    node_ids: HashMap<&'a T, usize>,
    successors: Vec<Vec<usize>>,
}

impl<'a, T> DependencyGraph<'a, T>
where
    T: LabelType,
{
    fn new(framework: &'a ABAFramework<T>) -> Self {
        let non_assumptions = framework
            .non_assumptions()
            .into_iter()
            .collect::<HashSet<&T>>();
        let mut graph = DependencyGraph {
            node_ids: HashMap::new(),
            successors: Vec::new(),
        };
        for (_, rule) in framework.iter_rules() {
            let head_id = if non_assumptions.contains(rule.head()) {
                Some(graph.node_id(rule.head()))
            } else {
                None
            };
            for sentence in rule.body() {
                if !non_assumptions.contains(sentence) {
                    continue;
                }
                let body_id = graph.node_id(sentence);
                if let Some(h) = head_id {
                    graph.successors[h].push(body_id);
                }
            }
        }
        graph
    }

    fn node_id(&mut self, sentence: &'a T) -> usize {
        let successors = &mut self.successors;
        *self.node_ids.entry(sentence).or_insert_with(|| {
            successors.push(Vec::new());
            successors.len() - 1
        })
    }

    fn n_nodes(&self) -> usize {
        self.successors.len()
    }

    fn has_cycle(&self) -> bool {
        let mut colors = vec![Color::Unvisited; self.n_nodes()];
        for root in 0..self.n_nodes() {
            if colors[root] != Color::Unvisited {
                continue;
            }
            colors[root] = Color::InProgress;
            let mut stack = vec![(root, 0)];
            while let Some(top) = stack.last_mut() {
                let (node, next_successor) = *top;
                match self.successors[node].get(next_successor) {
                    Some(&successor) => {
                        top.1 += 1;
                        match colors[successor] {
                            Color::InProgress => return true,
                            Color::Unvisited => {
                                colors[successor] = Color::InProgress;
                                stack.push((successor, 0));
                            }
                            Color::Finished => {}
                        }
                    }
                    None => {
                        colors[node] = Color::Finished;
                        stack.pop();
                    }
                }
            }
        }
        false
    }
}

/// Returns `true` iff the rules of the framework induce a cycle among the non-assumption sentences of its language.
///
/// Cycles going through assumptions, or through sentences that are not part of the language, are not considered.
///
/// # Example
///
/// ```
/// # use abaplus::aba::{ABAFramework, Rule, is_circular};
/// let mut framework = ABAFramework::new();
/// framework.set_language(["p", "q"]);
/// framework.add_rule("r1", Rule::new("p", vec!["q"]));
/// assert!(!is_circular(&framework));
/// framework.add_rule("r2", Rule::new("q", vec!["p"]));
/// assert!(is_circular(&framework));
/// ```
pub fn is_circular<T>(framework: &ABAFramework<T>) -> bool
where
    T: LabelType,
{
    DependencyGraph::new(framework).has_cycle()
}
