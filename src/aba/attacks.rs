use super::{arguments::argument_label, ABAFramework, Argument, ArgumentSet};
use crate::utils::LabelType;
use log::debug;
use strum_macros::{AsRefStr, Display};

/// The kind of an ABA+ attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, AsRefStr, Display)]
#[strum(serialize_all = "snake_case")]
pub enum AttackKind {
    /// The attacker claims the contrary of an assumption of the attacked argument.
    Normal,
    /// The attacker claims the contrary of an assumption of the attacked argument, and has an assumption preferred over it.
    Reverse,
}

/// An attack between two arguments, given by their identifiers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attack {
    attacker: usize,
    attacked: usize,
    kind: AttackKind,
}

impl Attack {
    fn new(attacker: usize, attacked: usize, kind: AttackKind) -> Self {
        Attack {
            attacker,
            attacked,
            kind,
        }
    }

    /// Returns the identifier of the attacker.
    pub fn attacker(&self) -> usize {
        self.attacker
    }

    /// Returns the identifier of the attacked argument.
    pub fn attacked(&self) -> usize {
        self.attacked
    }

    /// Returns the label of the attacker.
    pub fn attacker_label(&self) -> String {
        argument_label(self.attacker)
    }

    /// Returns the label of the attacked argument.
    pub fn attacked_label(&self) -> String {
        argument_label(self.attacked)
    }

    /// Returns the kind of the attack.
    pub fn kind(&self) -> AttackKind {
        self.kind
    }
}

/// Computes the ABA+ attacks between the arguments of a framework.
///
/// Each ordered couple of arguments `(a, b)` is considered, including the ones where `a` and `b` are the same argument.
///
/// For each assumption `x` supporting `b` whose contrary is the claim of `a`, a normal attack from `a` to `b` is recorded,
/// unless some assumption `y` supporting `a` makes `(y, x)` a preference pair.
///
/// For each assumption `y` supporting `a` whose contrary is the claim of `b`, a reverse attack from `b` to `a` is recorded
/// if some assumption `x` supporting `b` makes `(x, y)` a preference pair.
///
/// Preferences are checked by direct pair membership only.
/// Attacks are not deduplicated: each qualifying assumption produces its own attack.
///
/// # Example
///
/// ```
/// # use abaplus::aba::{ABAFramework, AttackKind, Rule, compute_attacks, derive_arguments};
/// let mut framework = ABAFramework::new();
/// framework.set_language(["a", "b", "p"]);
/// framework.set_assumptions(["a", "b"]);
/// framework.set_contrary("a", "p");
/// framework.add_rule("r1", Rule::new("p", vec!["b"]));
/// let arguments = derive_arguments(&framework);
/// let attacks = compute_attacks(&framework, &arguments);
/// assert_eq!(1, attacks.len());
/// assert_eq!("a3", attacks[0].attacker_label());
/// assert_eq!("a1", attacks[0].attacked_label());
/// assert_eq!(AttackKind::Normal, attacks[0].kind());
/// ```
pub fn compute_attacks<T>(framework: &ABAFramework<T>, arguments: &ArgumentSet<T>) -> Vec<Attack>
where
    T: LabelType,
{
    let mut attacks = Vec::new();
    for a in arguments.iter() {
        for b in arguments.iter() {
            add_normal_attacks(framework, a, b, &mut attacks);
            add_reverse_attacks(framework, a, b, &mut attacks);
        }
    }
    debug!(
        "computed {} attack(s) between {} argument(s)",
        attacks.len(),
        arguments.len()
    );
    attacks
}

fn add_normal_attacks<T>(
    framework: &ABAFramework<T>,
    a: &Argument<T>,
    b: &Argument<T>,
    attacks: &mut Vec<Attack>,
) where
    T: LabelType,
{
    let preferences = framework.preferences();
    for ass_b in b.support() {
        if framework.contrary_of(ass_b) != Some(a.claim()) {
            continue;
        }
        let blocked = a
            .support()
            .iter()
            .any(|ass_a| preferences.is_preferred(ass_a, ass_b));
        if !blocked {
            attacks.push(Attack::new(a.id(), b.id(), AttackKind::Normal));
        }
    }
}

fn add_reverse_attacks<T>(
    framework: &ABAFramework<T>,
    a: &Argument<T>,
    b: &Argument<T>,
    attacks: &mut Vec<Attack>,
) where
    T: LabelType,
{
    let preferences = framework.preferences();
    for ass_a in a.support() {
        if framework.contrary_of(ass_a) != Some(b.claim()) {
            continue;
        }
        let reversed = b
            .support()
            .iter()
            .any(|ass_b| preferences.is_preferred(ass_b, ass_a));
        if reversed {
            attacks.push(Attack::new(b.id(), a.id(), AttackKind::Reverse));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aba::{derive_arguments, Rule};

    fn scenario_framework() -> ABAFramework<&'static str> {
        let mut framework = ABAFramework::new();
        framework.set_language(["p", "q", "a", "b"]);
        framework.set_assumptions(["a", "b"]);
        framework.set_contrary("a", "b");
        framework.add_rule("r1", Rule::new("p", vec!["a"]));
        framework
    }

    fn attack_triples(attacks: &[Attack]) -> Vec<(String, String, AttackKind)> {
        attacks
            .iter()
            .map(|a| (a.attacker_label(), a.attacked_label(), a.kind()))
            .collect()
    }

    fn triple(attacker: &str, attacked: &str, kind: AttackKind) -> (String, String, AttackKind) {
        (attacker.to_string(), attacked.to_string(), kind)
    }

    #[test]
    fn test_no_preferences() {
        let framework = scenario_framework();
        let arguments = derive_arguments(&framework);
        assert_eq!(3, arguments.len());
        let attacks = compute_attacks(&framework, &arguments);
        assert_eq!(
            vec![
                triple("a2", "a1", AttackKind::Normal),
                triple("a2", "a3", AttackKind::Normal),
            ],
            attack_triples(&attacks)
        );
    }

    #[test]
    fn test_preference_of_attacked_does_not_block() {
        let mut framework = scenario_framework();
        framework.add_preference("a", "b");
        let arguments = derive_arguments(&framework);
        let attacks = compute_attacks(&framework, &arguments);
        assert_eq!(
            vec![
                triple("a2", "a1", AttackKind::Normal),
                triple("a2", "a3", AttackKind::Normal),
            ],
            attack_triples(&attacks)
        );
    }

    #[test]
    fn test_preference_of_attacker_turns_to_reverse() {
        let mut framework = scenario_framework();
        framework.add_preference("b", "a");
        let arguments = derive_arguments(&framework);
        let attacks = compute_attacks(&framework, &arguments);
        assert_eq!(
            vec![
                triple("a2", "a1", AttackKind::Reverse),
                triple("a2", "a3", AttackKind::Reverse),
            ],
            attack_triples(&attacks)
        );
    }

    #[test]
    fn test_missing_contrary_never_attacked() {
        let mut framework = ABAFramework::new();
        framework.set_assumptions(["a", "b"]);
        framework.add_rule("r1", Rule::new("b", vec![]));
        let arguments = derive_arguments(&framework);
        assert!(compute_attacks(&framework, &arguments).is_empty());
    }

    #[test]
    fn test_self_attack() {
        let mut framework = ABAFramework::new();
        framework.set_assumptions(["a"]);
        framework.set_contrary("a", "p");
        framework.add_rule("r1", Rule::new("p", vec!["a"]));
        let arguments = derive_arguments(&framework);
        assert_eq!(
            vec![
                triple("a2", "a1", AttackKind::Normal),
                triple("a2", "a2", AttackKind::Normal),
            ],
            attack_triples(&compute_attacks(&framework, &arguments))
        );
    }

    #[test]
    fn test_no_deduplication() {
        let mut framework = ABAFramework::new();
        framework.set_assumptions(["a", "b", "c"]);
        framework.set_contrary("a", "p");
        framework.set_contrary("b", "p");
        framework.add_rule("r1", Rule::new("p", vec!["c"]));
        framework.add_rule("r2", Rule::new("q", vec!["a", "b"]));
        let arguments = derive_arguments(&framework);
        let q_id = arguments.get_by_claim(&"q").unwrap().id();
        let p_id = arguments.get_by_claim(&"p").unwrap().id();
        let attacks = compute_attacks(&framework, &arguments);
        assert_eq!(
            2,
            attacks
                .iter()
                .filter(|att| att.attacker() == p_id && att.attacked() == q_id)
                .count()
        );
    }

    #[test]
    fn test_no_transitive_preferences() {
        let mut framework = ABAFramework::new();
        framework.set_assumptions(["x", "y", "z"]);
        framework.set_contrary("z", "p");
        framework.add_rule("r1", Rule::new("p", vec!["x"]));
        framework.add_preference_chain(&["x", "y", "z"]);
        let arguments = derive_arguments(&framework);
        let attacks = compute_attacks(&framework, &arguments);
        assert!(attacks.iter().all(|a| a.kind() == AttackKind::Normal));
        let p_id = arguments.get_by_claim(&"p").unwrap().id();
        let z_id = arguments.get_by_claim(&"z").unwrap().id();
        assert!(attacks
            .iter()
            .any(|a| a.attacker() == p_id && a.attacked() == z_id));
    }

    #[test]
    fn test_attack_direction_consistency() {
        let mut framework = ABAFramework::new();
        framework.set_assumptions(["a", "b", "c"]);
        framework.set_contrary("a", "p");
        framework.set_contrary("b", "q");
        framework.set_contrary("c", "a");
        framework.add_rule("r1", Rule::new("p", vec!["b"]));
        framework.add_rule("r2", Rule::new("q", vec!["a", "c"]));
        framework.add_preference_chain(&["a", "b"]);
        let arguments = derive_arguments(&framework);
        let attacks = compute_attacks(&framework, &arguments);
        assert!(!attacks.is_empty());
        for att in attacks.iter() {
            let attacker = arguments.get_by_id(att.attacker()).unwrap();
            let attacked = arguments.get_by_id(att.attacked()).unwrap();
            assert!(attacked
                .support()
                .iter()
                .any(|s| framework.contrary_of(s) == Some(attacker.claim())));
        }
    }

    #[test]
    fn test_kind_strings() {
        assert_eq!("normal", AttackKind::Normal.as_ref());
        assert_eq!("reverse", AttackKind::Reverse.to_string());
    }
}
