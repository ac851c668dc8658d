use ndarray::{Array1, Array2, Axis};
use serde::Serialize;

use super::state::State;

/// Integer statistics accumulated from the corpus.
///
/// `TransitionCounts` stores, for every pair of states `(i, j)`, how many
/// times a direct transition `i -> j` was observed, including the synthetic
/// `START -> first word` and `last word -> END` transitions of every
/// non-empty sentence.
///
/// # Responsibilities
/// - Accumulate transition counts sentence by sentence
/// - Track raw word frequencies
/// - Provide outgoing totals per state and the grand total
///
/// # Invariants
/// - `transitions` is square, sized by the number of states
/// - `outgoing[i]` is the sum of row `i` of `transitions`
/// - Sentinels never have a word frequency
#[derive(Serialize, Clone, Debug)]
pub struct TransitionCounts {
	/// `transitions[[i, j]]` is the number of observed `i -> j` transitions.
	transitions: Array2<usize>,
	/// Per-state sum of its `transitions` row.
	outgoing: Array1<usize>,
	/// Number of occurrences of each token in the corpus.
	frequencies: Array1<usize>,
	total_transitions: usize,
	total_words: usize,
}

impl TransitionCounts {
	/// Counts transitions over sentences already encoded as state indices.
	///
	/// # Notes
	/// - Empty sentences are skipped entirely, not even `START -> END` is
	///   recorded for them.
	/// - Every index must be `< n_states`.
	pub fn build(n_states: usize, sentences: &[Vec<usize>]) -> Self {
		let mut transitions = Array2::<usize>::zeros((n_states, n_states));
		let mut frequencies = Array1::<usize>::zeros(n_states);
		let mut total_words = 0;

		for words in sentences {
			let (Some(&first), Some(&last)) = (words.first(), words.last()) else {
				continue;
			};

			transitions[[State::START_INDEX, first]] += 1;
			for pair in words.windows(2) {
				transitions[[pair[0], pair[1]]] += 1;
			}
			transitions[[last, State::END_INDEX]] += 1;

			for &word in words {
				frequencies[word] += 1;
			}
			total_words += words.len();
		}

		let outgoing = transitions.sum_axis(Axis(1));
		let total_transitions = outgoing.sum();

		Self { transitions, outgoing, frequencies, total_transitions, total_words }
	}

	pub fn transitions(&self) -> &Array2<usize> {
		&self.transitions
	}

	/// Returns the number of observed `from -> to` transitions.
	pub fn get(&self, from: usize, to: usize) -> usize {
		self.transitions[[from, to]]
	}

	pub fn outgoing(&self) -> &Array1<usize> {
		&self.outgoing
	}

	pub fn frequencies(&self) -> &Array1<usize> {
		&self.frequencies
	}

	pub fn total_transitions(&self) -> usize {
		self.total_transitions
	}

	pub fn total_words(&self) -> usize {
		self.total_words
	}

	/// Number of states (side of the square count matrix).
	pub fn size(&self) -> usize {
		self.transitions.nrows()
	}
}
