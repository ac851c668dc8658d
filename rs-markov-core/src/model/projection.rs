//! Distribution projection.
//!
//! The distribution after `k` steps starting from a unit mass on START is
//! `(Pᵀ)^k · e_start`, where `P` is the row-stochastic transition matrix.

use ndarray::{Array1, Array2};

use crate::error::{ProjectionError, ProjectionResult};

/// Computes the state distribution after `steps` transitions.
///
/// # Parameters
/// - `transitions`: transition probability matrix `P` (rows are "from").
/// - `start`: index receiving the initial unit mass.
/// - `len`: number of states, i.e. the length of the distribution.
/// - `steps`: number of Markov steps; `0` returns the initial vector.
///
/// # Errors
/// Returns a [`ProjectionError`] when the matrix and the state count are
/// inconsistent. The failure is also logged at error level with the
/// dimensions involved, so callers may simply fall back to
/// [`ProjectionError::fallback`].
pub fn project(transitions: &Array2<f64>, start: usize, len: usize, steps: u32) -> ProjectionResult<Array1<f64>> {
	try_project(transitions, start, len, steps).inspect_err(|e| {
		let (rows, cols) = transitions.dim();
		log::error!(
			"distribution projector: failed after {steps} steps: {e} \
			 (transition_probabilities {rows}x{cols}, transposed {cols}x{rows}, initial vector {len})"
		);
	})
}

fn try_project(transitions: &Array2<f64>, start: usize, len: usize, steps: u32) -> ProjectionResult<Array1<f64>> {
	let (rows, cols) = transitions.dim();
	if rows != cols {
		return Err(ProjectionError::NotSquare { rows, cols, len });
	}
	if rows != len {
		return Err(ProjectionError::DimensionMismatch { rows, cols, len });
	}
	if start >= len {
		return Err(ProjectionError::StartOutOfRange { start, len });
	}

	let mut initial = Array1::<f64>::zeros(len);
	initial[start] = 1.0;

	let power = matrix_power(&transitions.t().to_owned(), steps);
	Ok(power.dot(&initial))
}

/// Raises a square matrix to a non-negative integer power by repeated squaring.
///
/// `matrix_power(m, 0)` is the identity.
pub fn matrix_power(matrix: &Array2<f64>, mut exponent: u32) -> Array2<f64> {
	let mut result = Array2::<f64>::eye(matrix.nrows());
	let mut base = matrix.clone();

	while exponent > 0 {
		if exponent & 1 == 1 {
			result = result.dot(&base);
		}
		exponent >>= 1;
		if exponent > 0 {
			base = base.dot(&base);
		}
	}

	result
}
