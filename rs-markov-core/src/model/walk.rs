use ndarray::{Array2, ArrayView1};
use rand::Rng;

use super::state::State;

/// Draws a column of `row` with probability `row[j] / row.sum()`.
///
/// A uniform draw in `0..sum` is walked down the row until it falls inside a
/// column's count, so zero-count columns are never chosen. `None` only for an
/// all-zero row (END, dangling states, START of an empty corpus).
pub(crate) fn sample_next<R: Rng + ?Sized>(row: ArrayView1<usize>, rng: &mut R) -> Option<usize> {
	let total: usize = row.sum();
	if total == 0 {
		return None;
	}

	let mut r = rng.random_range(0..total);
	for (next, &count) in row.iter().enumerate() {
		if r < count {
			return Some(next);
		}
		r -= count;
	}

	None
}

/// Walks the chain from START until END or `max_tokens` states are visited.
///
/// Returns the visited state indices, sentinels excluded, or `None` if START
/// has no outgoing transitions.
pub(crate) fn random_walk<R: Rng + ?Sized>(counts: &Array2<usize>, max_tokens: usize, rng: &mut R) -> Option<Vec<usize>> {
	let mut current = sample_next(counts.row(State::START_INDEX), rng)?;
	let mut path = Vec::new();

	while current != State::END_INDEX && path.len() < max_tokens {
		path.push(current);
		match sample_next(counts.row(current), rng) {
			Some(next) => current = next,
			None => break,
		}
	}

	Some(path)
}
