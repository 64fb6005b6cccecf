//! A module containing the material needed to handle Assumption-based Argumentation frameworks with preferences (ABA+).

mod aba_atomize;
pub use aba_atomize::AtomicTransformer;

mod aba_framework;
pub use aba_framework::ABAFramework;
pub use aba_framework::Rule;

mod aba_remove_cycles;
pub use aba_remove_cycles::NonCircularTransformer;

mod arguments;
pub use arguments::derive_arguments;
pub use arguments::Argument;
pub use arguments::ArgumentSet;

mod attacks;
pub use attacks::compute_attacks;
pub use attacks::Attack;
pub use attacks::AttackKind;

mod circularity;
pub use circularity::is_circular;

mod pipeline;
pub use pipeline::Pipeline;
pub use pipeline::PipelineOptions;
pub use pipeline::PipelineResult;
pub use pipeline::Stage;
pub use pipeline::StageResult;
pub use pipeline::DEFAULT_MAX_UNFOLDED_RULES;

mod preferences;
pub use preferences::PreferenceRelation;
