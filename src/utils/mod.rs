//! Miscellaneous components used in the library.

mod label;
pub use label::LabelType;
pub use label::StringLabels;
pub use label::SyntheticLabels;
