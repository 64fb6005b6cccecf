//! Abaplus computes the arguments and the ABA+ attacks of Assumption-based Argumentation frameworks.
//!
//! Circular frameworks are unfolded into non-circular ones, and non-atomic frameworks are rewritten into atomic ones,
//! each variant getting its own arguments and attacks.

#![warn(missing_docs)]

pub mod aba;

pub mod io;

pub mod utils;
