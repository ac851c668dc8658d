use ndarray::{Array1, Array2};
use rand::Rng;
use serde::Serialize;

use super::counts::TransitionCounts;
use super::probability;
use super::projection;
use super::state::State;
use super::tokenizer::tokenize;
use super::vocabulary::Vocabulary;
use super::walk;
use crate::error::ProjectionResult;

/// Word-level Markov chain built from a corpus of sentences.
///
/// This struct owns:
/// - `sentences`: the raw corpus, in input order.
/// - `vocabulary`: `[START, END, words...]` in first-seen order.
/// - `counts`: transition counts, outgoing totals and word frequencies.
/// - the derived transition, state, frequency and combined probabilities.
///
/// Everything is computed once in [`MarkovChain::new`]; there is no mutation
/// API afterward, so a built chain can be shared freely between readers.
#[derive(Serialize, Clone, Debug)]
pub struct MarkovChain {
	sentences: Vec<String>,
	vocabulary: Vocabulary,
	counts: TransitionCounts,
	transition_probabilities: Array2<f64>,
	state_probabilities: Array1<f64>,
	frequency_probabilities: Array1<f64>,
	combined_probabilities: Array2<f64>,
}

impl MarkovChain {
	/// Builds the chain from an ordered corpus of sentences.
	///
	/// # Behavior
	/// - Tokenizes every sentence once (lowercase runs of letters).
	/// - Builds the vocabulary and encodes sentences as state indices.
	/// - Counts transitions, including `START -> first` and `last -> END`.
	/// - Derives every probability matrix and vector.
	///
	/// # Notes
	/// - Sentences without letters are kept in `sentences` but contribute
	///   no counts at all.
	/// - An empty corpus is valid: only the sentinels exist and every
	///   probability is `0.0`, except END's absorbing self-transition.
	pub fn new<I, S>(sentences: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let sentences: Vec<String> = sentences.into_iter().map(Into::into).collect();
		let tokenized: Vec<Vec<String>> = sentences.iter().map(|s| tokenize(s)).collect();

		let (vocabulary, encoded) = Vocabulary::build(&tokenized);
		let counts = TransitionCounts::build(vocabulary.len(), &encoded);

		let transition_probabilities = probability::transition_probabilities(&counts);
		let state_probabilities = probability::state_probabilities(&counts);
		let frequency_probabilities = probability::frequency_probabilities(&counts);
		let combined_probabilities = probability::combined_probabilities(&transition_probabilities, &state_probabilities);

		log::debug!(
			"built markov chain: {} sentences, {} states, {} transitions, {} words",
			sentences.len(),
			vocabulary.len(),
			counts.total_transitions(),
			counts.total_words()
		);

		Self {
			sentences,
			vocabulary,
			counts,
			transition_probabilities,
			state_probabilities,
			frequency_probabilities,
			combined_probabilities,
		}
	}

	/// Returns the raw corpus, in input order.
	pub fn sentences(&self) -> &[String] {
		&self.sentences
	}

	/// Returns the ordered states: `[START, END, words...]`.
	pub fn states(&self) -> &[State] {
		self.vocabulary.states()
	}

	pub fn state_count(&self) -> usize {
		self.vocabulary.len()
	}

	/// Index of a word token, exact match. Sentinels are at
	/// [`State::START_INDEX`] and [`State::END_INDEX`].
	pub fn index_of(&self, token: &str) -> Option<usize> {
		self.vocabulary.index_of(token)
	}

	/// `transition_counts()[[i, j]]` is the number of observed `i -> j` transitions.
	pub fn transition_counts(&self) -> &Array2<usize> {
		self.counts.transitions()
	}

	/// Per-state sum of its transition count row.
	pub fn outgoing_totals(&self) -> &Array1<usize> {
		self.counts.outgoing()
	}

	pub fn total_transitions(&self) -> usize {
		self.counts.total_transitions()
	}

	/// Raw number of occurrences of each state in the corpus (sentinels are 0).
	pub fn word_frequencies(&self) -> &Array1<usize> {
		self.counts.frequencies()
	}

	/// Row-stochastic transition matrix, END absorbing, dangling rows zero.
	pub fn transition_probabilities(&self) -> &Array2<f64> {
		&self.transition_probabilities
	}

	/// Share of all transition events originating at each state.
	///
	/// This is the vector the CLI prints as word probabilities and the one
	/// `combined_probabilities` is scaled by.
	pub fn state_probabilities(&self) -> &Array1<f64> {
		&self.state_probabilities
	}

	/// Frequency of each state among all words of the corpus.
	///
	/// Not a transition share: sentinels are always `0.0`. See
	/// [`MarkovChain::state_probabilities`].
	pub fn frequency_probabilities(&self) -> &Array1<f64> {
		&self.frequency_probabilities
	}

	/// `transition(i, j) * state(i)` for every pair.
	pub fn combined_probabilities(&self) -> &Array2<f64> {
		&self.combined_probabilities
	}

	/// Probability of the `from -> to` transition, by token.
	///
	/// Returns `None` if either token is unknown.
	pub fn transition_probability(&self, from: &str, to: &str) -> Option<f64> {
		let i = self.index_of(from)?;
		let j = self.index_of(to)?;
		Some(self.transition_probabilities[[i, j]])
	}

	/// State distribution after `steps` transitions, starting from START.
	///
	/// `distribution_after(0)` is the unit vector at START.
	///
	/// # Errors
	/// Only fails on an internally inconsistent matrix. The diagnostic is
	/// logged; use [`ProjectionError::fallback`](crate::ProjectionError::fallback)
	/// to recover a zero vector.
	pub fn distribution_after(&self, steps: u32) -> ProjectionResult<Array1<f64>> {
		projection::project(&self.transition_probabilities, State::START_INDEX, self.state_count(), steps)
	}

	/// Generates a sentence by walking the chain from START.
	///
	/// Each next word is drawn with probability proportional to its
	/// transition count. The walk stops at END or after `max_tokens` words.
	///
	/// Returns `None` if the corpus has no words.
	pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R, max_tokens: usize) -> Option<String> {
		let path = walk::random_walk(self.counts.transitions(), max_tokens, rng)?;
		let states = self.states();
		let words: Vec<&str> = path.iter().map(|&i| states[i].key()).collect();
		Some(words.join(" "))
	}
}
