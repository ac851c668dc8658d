//! Top-level module for the Markov chain model.
//!
//! The model is assembled bottom-up:
//! - Sentence tokenization (`tokenizer`)
//! - Sentinel-aware states (`State`) and the ordered `Vocabulary`
//! - Transition counting (`TransitionCounts`)
//! - Probability derivation (`probability`)
//! - Multi-step distributions (`projection`)
//! - The owning, read-only `MarkovChain`
//! - Mermaid export (`diagram`) and random walks (`walk`)

/// High-level model: owns the corpus and every derived matrix.
///
/// Exposes read-only queries, distribution projection, diagram export
/// and generation.
pub mod markov_chain;

/// A single state of the chain (START, END or a word token).
pub mod state;

/// Lowercase word tokenizer.
pub mod tokenizer;

/// Ordered, duplicate-free state list with O(1) token lookup.
pub mod vocabulary;

/// Transition count accumulation.
pub mod counts;

/// Row normalization, state/word probabilities and joint probabilities.
pub mod probability;

/// State distribution after N steps.
pub mod projection;

/// Mermaid flowchart export.
pub mod diagram;

/// Weighted random walks over transition counts.
mod walk;
