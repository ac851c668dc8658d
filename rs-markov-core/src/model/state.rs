use std::fmt;

use serde::Serialize;

/// Raw key of the synthetic start state.
pub const START_KEY: &str = "__START__";
/// Raw key of the synthetic end state.
pub const END_KEY: &str = "__END__";

/// Represents a state of the Markov chain.
///
/// A `State` is either one of the two sentinels marking sentence boundaries
/// or a word token observed in the corpus. Each state is one row and one
/// column of every matrix held by the model.
///
/// ## Invariants
/// - `Start` always lives at index [`State::START_INDEX`]
/// - `End` always lives at index [`State::END_INDEX`]
/// - `Token` values are lowercase runs of letters, never empty
#[derive(Serialize, Clone, Debug, PartialEq, Eq, Hash)]
pub enum State {
	/// Synthetic state preceding the first word of every sentence.
	Start,
	/// Synthetic absorbing state following the last word of every sentence.
	End,
	/// A word token.
	Token(String),
}

impl State {
	pub const START_INDEX: usize = 0;
	pub const END_INDEX: usize = 1;

	/// Returns the raw key: `__START__`, `__END__` or the token itself.
	pub fn key(&self) -> &str {
		match self {
			State::Start => START_KEY,
			State::End => END_KEY,
			State::Token(token) => token,
		}
	}

	/// Returns the human readable label: `START`, `END` or the token itself.
	pub fn label(&self) -> &str {
		match self {
			State::Start => "START",
			State::End => "END",
			State::Token(token) => token,
		}
	}

	/// Returns an identifier usable as a Mermaid node id.
	///
	/// Every character outside `[A-Za-z0-9_]` is replaced by `_`, one
	/// replacement per character. Distinct tokens may therefore share an id
	/// (e.g. `über` and `äber`).
	pub fn diagram_id(&self) -> String {
		self.key()
			.chars()
			.map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
			.collect()
	}

	pub fn is_sentinel(&self) -> bool {
		!matches!(self, State::Token(_))
	}
}

impl fmt::Display for State {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.key())
	}
}
