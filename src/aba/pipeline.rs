use super::{
    compute_attacks, derive_arguments, is_circular, ABAFramework, ArgumentSet, Attack,
    AtomicTransformer, NonCircularTransformer,
};
use crate::utils::LabelType;
use log::{info, warn};
use strum_macros::{AsRefStr, Display};

/// The default maximal size of the non-circular unfolding.
pub const DEFAULT_MAX_UNFOLDED_RULES: usize = 100_000;

/// The stages of the pipeline, each one associated with a variant of the input framework.
#[derive(Clone, Copy, Debug, PartialEq, Eq, AsRefStr, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Stage {
    /// The input framework
    Original,
    /// The non-circular variant of the input framework
    NonCircular,
    /// The atomic variant of the input framework (or of its non-circular variant)
    Atomic,
}

/// The options of a [Pipeline].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PipelineOptions {
    max_unfolded_rules: Option<usize>,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        PipelineOptions {
            max_unfolded_rules: Some(DEFAULT_MAX_UNFOLDED_RULES),
        }
    }
}

impl PipelineOptions {
    /// Sets the maximal size of the non-circular unfolding.
    ///
    /// The size is the greatest of the number of rules and of the number of new sentences the unfolding produces
    /// (see [NonCircularTransformer::unfolding_size]).
    /// When the unfolding of a circular framework would exceed this limit, the non-circular stage is skipped.
    /// `None` removes the limit.
    pub fn with_max_unfolded_rules(mut self, max_unfolded_rules: Option<usize>) -> Self {
        self.max_unfolded_rules = max_unfolded_rules;
        self
    }

    /// Returns the maximal size of the non-circular unfolding, if any.
    pub fn max_unfolded_rules(&self) -> Option<usize> {
        self.max_unfolded_rules
    }
}

/// The output of a pipeline stage: a framework variant, its arguments and its attacks.
pub struct StageResult<T>
where
    T: LabelType,
{
    stage: Stage,
    framework: ABAFramework<T>,
    arguments: ArgumentSet<T>,
    attacks: Vec<Attack>,
}

impl<T> StageResult<T>
where
    T: LabelType,
{
    fn compute(stage: Stage, framework: ABAFramework<T>) -> Self {
        let arguments = derive_arguments(&framework);
        let attacks = compute_attacks(&framework, &arguments);
        info!(
            "{} framework: {} sentence(s), {} assumption(s), {} rule(s), {} argument(s), {} attack(s)",
            stage,
            framework.language().len(),
            framework.n_assumptions(),
            framework.n_rules(),
            arguments.len(),
            attacks.len(),
        );
        StageResult {
            stage,
            framework,
            arguments,
            attacks,
        }
    }

    /// Returns the stage.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Returns the framework variant of this stage.
    pub fn framework(&self) -> &ABAFramework<T> {
        &self.framework
    }

    /// Returns the arguments of the framework variant.
    pub fn arguments(&self) -> &ArgumentSet<T> {
        &self.arguments
    }

    /// Returns the attacks between the arguments.
    pub fn attacks(&self) -> &[Attack] {
        &self.attacks
    }
}

/// The results of the stages that were run by a [Pipeline], in stage order.
pub struct PipelineResult<T>
where
    T: LabelType,
{
    stages: Vec<StageResult<T>>,
}

impl<T> PipelineResult<T>
where
    T: LabelType,
{
    /// Returns the result of a stage, or `None` if the stage was skipped.
    pub fn get(&self, stage: Stage) -> Option<&StageResult<T>> {
        self.stages.iter().find(|s| s.stage == stage)
    }

    /// Iterates over the results of the stages that were run.
    pub fn iter(&self) -> impl Iterator<Item = &StageResult<T>> + '_ {
        self.stages.iter()
    }
}

/// Sequences the transformations and the computation of arguments and attacks.
///
/// The original framework is always processed.
/// If it is circular, its non-circular variant is computed and processed.
/// Then, if the last processed framework is not atomic, its atomic variant is computed and processed.
///
/// # Example
///
/// ```
/// # use abaplus::aba::{ABAFramework, Pipeline, PipelineOptions, Rule, Stage};
/// let mut framework = ABAFramework::new();
/// framework.set_language(["p", "q"].map(String::from));
/// framework.add_rule("r1", Rule::new("p".to_string(), vec!["q".to_string()]));
/// framework.add_rule("r2", Rule::new("q".to_string(), vec!["p".to_string()]));
/// let pipeline = Pipeline::new_for_strings(PipelineOptions::default());
/// let result = pipeline.run(&framework);
/// assert!(result.get(Stage::Original).is_some());
/// assert!(result.get(Stage::NonCircular).is_some());
/// assert!(result.get(Stage::Atomic).is_some());
/// ```
pub struct Pipeline<T>
where
    T: LabelType,
{
    options: PipelineOptions,
    non_circular_transformer: NonCircularTransformer<T>,
    atomic_transformer: AtomicTransformer<T>,
}

impl Pipeline<String> {
    /// Creates a new pipeline for String-labelled frameworks.
    pub fn new_for_strings(options: PipelineOptions) -> Self {
        Pipeline::new(
            options,
            NonCircularTransformer::new_for_strings(),
            AtomicTransformer::new_for_strings(),
        )
    }
}

impl<T> Pipeline<T>
where
    T: LabelType,
{
    /// Creates a new pipeline given its options and its transformers.
    pub fn new(
        options: PipelineOptions,
        non_circular_transformer: NonCircularTransformer<T>,
        atomic_transformer: AtomicTransformer<T>,
    ) -> Self {
        Pipeline {
            options,
            non_circular_transformer,
            atomic_transformer,
        }
    }

    /// Runs the pipeline on a framework.
    ///
    /// The input framework is left untouched; each stage works on its own framework.
    pub fn run(&self, framework: &ABAFramework<T>) -> PipelineResult<T> {
        let original = StageResult::compute(Stage::Original, framework.clone());
        let non_circular = if is_circular(framework) {
            info!("the framework is circular");
            self.try_unfold(framework)
                .map(|f| StageResult::compute(Stage::NonCircular, f))
        } else {
            None
        };
        let (atomic_input_stage, atomic_input) = match non_circular.as_ref() {
            Some(s) => (s.stage(), s.framework()),
            None => (Stage::Original, framework),
        };
        let atomic = if atomic_input.is_atomic() {
            None
        } else {
            info!("the {} framework is not atomic", atomic_input_stage);
            Some(StageResult::compute(
                Stage::Atomic,
                self.atomic_transformer.transform(atomic_input),
            ))
        };
        let stages = std::iter::once(original)
            .chain(non_circular)
            .chain(atomic)
            .collect();
        PipelineResult { stages }
    }

    fn try_unfold(&self, framework: &ABAFramework<T>) -> Option<ABAFramework<T>> {
        let size = NonCircularTransformer::unfolding_size(framework);
        match self.options.max_unfolded_rules {
            Some(max) if size > max => {
                warn!(
                    "skipping the non-circular stage: unfolding size would be {} (limit is {})",
                    size, max
                );
                None
            }
            _ => Some(self.non_circular_transformer.transform(framework)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aba::Rule;

    fn s(label: &str) -> String {
        label.to_string()
    }

    fn rule(head: &str, body: &[&str]) -> Rule<String> {
        Rule::new(s(head), body.iter().map(|b| s(b)).collect())
    }

    fn stages(result: &PipelineResult<String>) -> Vec<Stage> {
        result.iter().map(|s| s.stage()).collect()
    }

    #[test]
    fn test_atomic_acyclic_framework() {
        let mut framework = ABAFramework::new();
        framework.set_language([s("a"), s("b"), s("p")]);
        framework.set_assumptions([s("a"), s("b")]);
        framework.set_contrary(s("a"), s("p"));
        framework.add_rule("r1", rule("p", &["b"]));
        let result = Pipeline::new_for_strings(PipelineOptions::default()).run(&framework);
        assert_eq!(vec![Stage::Original], stages(&result));
        let original = result.get(Stage::Original).unwrap();
        assert_eq!(3, original.arguments().len());
        assert_eq!(1, original.attacks().len());
    }

    #[test]
    fn test_non_atomic_acyclic_framework() {
        let mut framework = ABAFramework::new();
        framework.set_language([s("a"), s("p"), s("q")]);
        framework.set_assumptions([s("a")]);
        framework.add_rule("r1", rule("p", &["q"]));
        framework.add_rule("r2", rule("q", &["a"]));
        let result = Pipeline::new_for_strings(PipelineOptions::default()).run(&framework);
        assert_eq!(vec![Stage::Original, Stage::Atomic], stages(&result));
        let atomic = result.get(Stage::Atomic).unwrap();
        assert!(atomic.framework().is_atomic());
        assert_eq!(&[s("q_d")], atomic.framework().get_rule("r1").unwrap().body());
    }

    #[test]
    fn test_circular_framework() {
        let mut framework = ABAFramework::new();
        framework.set_language([s("p"), s("q")]);
        framework.add_rule("r1", rule("p", &["q"]));
        framework.add_rule("r2", rule("q", &["p"]));
        let result = Pipeline::new_for_strings(PipelineOptions::default()).run(&framework);
        assert_eq!(
            vec![Stage::Original, Stage::NonCircular, Stage::Atomic],
            stages(&result)
        );
        let non_circular = result.get(Stage::NonCircular).unwrap();
        assert!(non_circular.arguments().is_empty());
        let atomic = result.get(Stage::Atomic).unwrap();
        assert!(atomic.framework().get_rule("r1_2").is_some());
        assert!(atomic.framework().is_assumption(&s("q^1_d")));
        assert!(atomic.framework().is_atomic());
    }

    #[test]
    fn test_unfolding_limit() {
        let mut framework = ABAFramework::new();
        framework.set_language([s("p"), s("q")]);
        framework.add_rule("r1", rule("p", &["q"]));
        framework.add_rule("r2", rule("q", &["p"]));
        let options = PipelineOptions::default().with_max_unfolded_rules(Some(3));
        let result = Pipeline::new_for_strings(options).run(&framework);
        assert_eq!(vec![Stage::Original, Stage::Atomic], stages(&result));
        assert!(result
            .get(Stage::Atomic)
            .unwrap()
            .framework()
            .get_rule("r1")
            .is_some());
        let options = PipelineOptions::default().with_max_unfolded_rules(Some(4));
        let result = Pipeline::new_for_strings(options).run(&framework);
        assert!(result.get(Stage::NonCircular).is_some());
        let options = PipelineOptions::default().with_max_unfolded_rules(None);
        let result = Pipeline::new_for_strings(options).run(&framework);
        assert!(result.get(Stage::NonCircular).is_some());
    }

    #[test]
    fn test_unfolding_limit_counts_new_sentences() {
        let mut framework = ABAFramework::new();
        framework.set_language((0..600).map(|i| format!("s{}", i)));
        framework.add_rule("r1", rule("s0", &["s0"]));
        assert!(framework.n_rules() * 600 <= DEFAULT_MAX_UNFOLDED_RULES);
        let result = Pipeline::new_for_strings(PipelineOptions::default()).run(&framework);
        assert_eq!(vec![Stage::Original, Stage::Atomic], stages(&result));
        let atomic = result.get(Stage::Atomic).unwrap();
        assert_eq!(1, atomic.framework().n_rules());
        assert_eq!(1800, atomic.framework().language().len());
    }

    #[test]
    fn test_circular_with_atomic_unfolding() {
        let mut framework = ABAFramework::new();
        framework.set_language([s("a"), s("p")]);
        framework.set_assumptions([s("a")]);
        framework.add_rule("r1", rule("p", &["p"]));
        framework.add_rule("r2", rule("p", &["a"]));
        let result = Pipeline::new_for_strings(PipelineOptions::default()).run(&framework);
        assert_eq!(vec![Stage::Original, Stage::NonCircular], stages(&result));
    }

    #[test]
    fn test_stage_names() {
        assert_eq!("original", Stage::Original.as_ref());
        assert_eq!("non_circular", Stage::NonCircular.as_ref());
        assert_eq!("atomic", Stage::Atomic.to_string());
    }
}
