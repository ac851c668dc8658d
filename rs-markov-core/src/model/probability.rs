//! Probability derivation from transition counts.
//!
//! All functions are pure: they read a [`TransitionCounts`] and allocate the
//! derived matrix or vector. Division by zero never happens, empty rows and an
//! empty corpus fall back to `0.0`.

use ndarray::{Array1, Array2};

use super::counts::TransitionCounts;
use super::state::State;

/// Row-normalizes the transition counts.
///
/// For every state `i`:
/// - END: one-hot at END, whatever the counts are (absorbing state)
/// - outgoing total of zero: all-zero row (dangling state)
/// - otherwise: `count(i, j) / outgoing(i)`
pub fn transition_probabilities(counts: &TransitionCounts) -> Array2<f64> {
	let n = counts.size();
	let mut probabilities = Array2::<f64>::zeros((n, n));

	for (i, mut row) in probabilities.outer_iter_mut().enumerate() {
		if i == State::END_INDEX {
			row[State::END_INDEX] = 1.0;
			continue;
		}

		let total = counts.outgoing()[i];
		if total == 0 {
			continue;
		}

		for (j, p) in row.iter_mut().enumerate() {
			*p = counts.get(i, j) as f64 / total as f64;
		}
	}

	probabilities
}

/// Share of all observed transition events that originate at each state.
///
/// `outgoing(i) / total_transitions`, or all zeros when nothing was observed.
/// This is not a word frequency: START carries one event per non-empty
/// sentence and END carries none. See [`frequency_probabilities`] for the
/// frequency-based quantity.
pub fn state_probabilities(counts: &TransitionCounts) -> Array1<f64> {
	normalize(counts.outgoing(), counts.total_transitions())
}

/// Raw word frequency of each state over the total number of words.
///
/// Sentinels are always `0.0`. All zeros when the corpus has no words.
pub fn frequency_probabilities(counts: &TransitionCounts) -> Array1<f64> {
	normalize(counts.frequencies(), counts.total_words())
}

/// Joint estimate `transition(i, j) * state(i)`.
///
/// Computed for every pair, dangling rows stay all-zero. The result is neither
/// row- nor globally normalized (END keeps its absorbing row scaled by its
/// state probability, which is `0.0`).
pub fn combined_probabilities(transitions: &Array2<f64>, states: &Array1<f64>) -> Array2<f64> {
	let mut combined = transitions.clone();
	for (mut row, &p) in combined.outer_iter_mut().zip(states.iter()) {
		row *= p;
	}
	combined
}

fn normalize(values: &Array1<usize>, total: usize) -> Array1<f64> {
	if total == 0 {
		return Array1::zeros(values.len());
	}
	values.mapv(|v| v as f64 / total as f64)
}
