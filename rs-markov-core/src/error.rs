//! Error types for the Markov chain model.

use ndarray::Array1;
use thiserror::Error;

/// Result type alias for distribution projection.
pub type ProjectionResult<T> = Result<T, ProjectionError>;

/// Errors raised while projecting the state distribution after N steps.
///
/// Every variant carries the dimensions involved so the failure can be
/// diagnosed from the message alone.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectionError {
	/// The transition matrix is not square.
	#[error("transition matrix is {rows}x{cols}, expected a square {len}x{len} matrix")]
	NotSquare { rows: usize, cols: usize, len: usize },

	/// The matrix side does not match the initial vector length.
	#[error("transition matrix is {rows}x{cols} but the initial vector has {len} entries")]
	DimensionMismatch { rows: usize, cols: usize, len: usize },

	/// The start state does not exist in the matrix.
	#[error("start index {start} is out of range for {len} states")]
	StartOutOfRange { start: usize, len: usize },
}

impl ProjectionError {
	/// Number of states the caller expected a distribution over.
	pub fn expected_len(&self) -> usize {
		match *self {
			ProjectionError::NotSquare { len, .. } => len,
			ProjectionError::DimensionMismatch { len, .. } => len,
			ProjectionError::StartOutOfRange { len, .. } => len,
		}
	}

	/// Zero distribution of the expected length.
	///
	/// For callers that accept an all-zero vector when the projection fails.
	pub fn fallback(&self) -> Array1<f64> {
		Array1::zeros(self.expected_len())
	}
}
