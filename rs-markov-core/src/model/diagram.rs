//! Mermaid `flowchart` export.
//!
//! Node declarations follow state order, edges follow `i` outer / `j` inner
//! index order, so the same model always renders the same text.

use ndarray::Array1;

use super::markov_chain::MarkovChain;

/// Edges with a probability at or below this value are omitted.
pub const DEFAULT_THRESHOLD: f64 = 0.0;
/// Decimal places used to label edges of the plain diagram.
pub const DEFAULT_DECIMALS: usize = 3;
/// Steps projected for the annotated diagram.
pub const DEFAULT_STEPS: u32 = 3;

const HEADER: &str = "flowchart LR";

impl MarkovChain {
	/// Renders the transition matrix as a Mermaid flowchart.
	///
	/// One node per state (`id["label"]`) and one edge per transition whose
	/// probability is strictly greater than `threshold`, labeled with the
	/// probability formatted to `decimals` places.
	pub fn to_flow_diagram(&self, threshold: f64, decimals: usize) -> String {
		let mut lines = vec![HEADER.to_owned()];

		for state in self.states() {
			lines.push(format!("    {}[\"{}\"]", state.diagram_id(), state.label()));
		}

		self.push_edges(&mut lines, threshold, |p| format!("{p:.decimals$}"));

		lines.join("\n")
	}

	/// Renders the flowchart annotated with the distribution after `steps`.
	///
	/// Node labels carry the projected probability of the state and edges
	/// carry the transition probability, both as percentages rounded to one
	/// decimal place. A failed projection renders every node at `0.0%`.
	pub fn to_flow_diagram_with_distribution(&self, steps: u32, threshold: f64) -> String {
		let distribution: Array1<f64> = self.distribution_after(steps).unwrap_or_else(|e| e.fallback());

		let mut lines = vec![HEADER.to_owned()];

		for (state, &mass) in self.states().iter().zip(distribution.iter()) {
			lines.push(format!("    {}[\"{}<br/>{}%\"]", state.diagram_id(), state.label(), percent(mass)));
		}

		self.push_edges(&mut lines, threshold, |p| format!("{}%", percent(p)));

		lines.join("\n")
	}

	fn push_edges<F>(&self, lines: &mut Vec<String>, threshold: f64, format_label: F)
	where
		F: Fn(f64) -> String,
	{
		let states = self.states();
		for ((i, j), &p) in self.transition_probabilities().indexed_iter() {
			if p <= threshold {
				continue;
			}
			lines.push(format!(
				"    {} -->|{}| {}",
				states[i].diagram_id(),
				format_label(p),
				states[j].diagram_id()
			));
		}
	}
}

/// `value * 100`, rounded half up to one decimal place.
fn percent(value: f64) -> String {
	let rounded = round_half_up(value * 100.0, 10.0) / 10.0;
	format!("{rounded:.1}")
}

/// Rounds `x * scale` to an integer, half away from zero.
///
/// `x * scale` may land just below a tie that `x` itself sits on or above
/// (e.g. `28.749999999999996 * 10`); the tie is then decided on `x`.
fn round_half_up(x: f64, scale: f64) -> f64 {
	let mut f = (x * scale).round();
	if x > 0.0 && (f + 0.5) / scale <= x {
		f += 1.0;
	} else if x < 0.0 && (f - 0.5) / scale >= x {
		f -= 1.0;
	}
	f
}
