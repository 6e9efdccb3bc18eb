//! wordforge - seed-word driven candidate password generation.
//!
//! The engine turns a handful of seed words into a bounded, deduplicated
//! candidate list by layering case and leetspeak variants, affix patterns,
//! numeric/year/phone tokens, symbol insertion and name permutations.
//!
//! Data flows one way:
//!
//! ```text
//! seeds -> normalize -> expand / combine -> policy -> common merge
//!       -> dedupe -> shuffle -> cap
//! ```
//!
//! Every generation step is a total function. Only the CLI-facing edges
//! ([`seeds`], [`output`], [`config`]) can fail.

pub mod affix;
pub mod combine;
pub mod common;
pub mod config;
pub mod error;
pub mod expand;
pub mod normalize;
pub mod output;
pub mod pipeline;
pub mod policy;
pub mod seeds;
pub mod tokens;

pub use error::WordforgeError;
pub use pipeline::{GenerateOptions, generate};

/// Insertion-ordered string set used for every intermediate candidate set.
pub type Candidates = indexmap::IndexSet<String>;
