//! Word-level Markov chain library.
//!
//! This crate builds a discrete-time Markov chain over the vocabulary of a
//! small text corpus, including:
//! - Tokenization into a deterministic, first-seen-order vocabulary
//! - Transition counting with synthetic START/END sentinel states
//! - Transition, state, word and combined (joint) probabilities
//! - State distributions after N steps (matrix exponentiation)
//! - Mermaid flow diagram export
//! - Random walk generation
//!
//! Construction is done once; the resulting `MarkovChain` is read-only.

/// Markov chain model, probabilities, projection and export.
pub mod model;

/// Error types for fallible model queries.
pub mod error;

/// I/O utilities (sentence file loading).
pub mod io;

pub use error::{ProjectionError, ProjectionResult};
pub use model::markov_chain::MarkovChain;
pub use model::state::State;
