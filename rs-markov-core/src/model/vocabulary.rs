use std::collections::HashMap;

use serde::Serialize;

use super::state::State;

/// Ordered, duplicate-free list of states.
///
/// The list always starts with `[START, END]`, followed by word tokens in the
/// order they are first encountered across the corpus.
///
/// # Responsibilities
/// - Assign a stable index to every distinct token
/// - Encode tokenized sentences into state indices
/// - Resolve a token to its index in O(1)
///
/// # Invariants
/// - `states[0] == State::Start` and `states[1] == State::End`
/// - `index` maps every token state to its position, and nothing else
#[derive(Serialize, Clone, Debug)]
pub struct Vocabulary {
	states: Vec<State>,
	#[serde(skip)]
	index: HashMap<String, usize>,
}

impl Default for Vocabulary {
	fn default() -> Self {
		Self {
			states: vec![State::Start, State::End],
			index: HashMap::new(),
		}
	}
}

impl Vocabulary {
	/// Creates a vocabulary containing only the two sentinels.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds the vocabulary from tokenized sentences.
	///
	/// Returns the vocabulary together with every sentence encoded as state
	/// indices (same order, same lengths as the input).
	pub fn build<S: AsRef<str>>(sentences: &[Vec<S>]) -> (Self, Vec<Vec<usize>>) {
		let mut vocabulary = Self::new();
		let encoded: Vec<Vec<usize>> = sentences
			.iter()
			.map(|tokens| tokens.iter().map(|token| vocabulary.insert(token.as_ref())).collect::<Vec<usize>>())
			.collect();
		(vocabulary, encoded)
	}

	/// Returns the index of `token`, adding it at the end if it is new.
	pub fn insert(&mut self, token: &str) -> usize {
		if let Some(&i) = self.index.get(token) {
			return i;
		}
		let i = self.states.len();
		self.states.push(State::Token(token.to_owned()));
		self.index.insert(token.to_owned(), i);
		i
	}

	/// Exact-match lookup of a word token.
	///
	/// Sentinels are not tokens: `index_of("__START__")` is `None`.
	pub fn index_of(&self, token: &str) -> Option<usize> {
		self.index.get(token).copied()
	}

	pub fn states(&self) -> &[State] {
		&self.states
	}

	pub fn len(&self) -> usize {
		self.states.len()
	}

	/// Always false: the sentinels are present from construction.
	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}
}
