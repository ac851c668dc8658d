//! Plain-text rendering of model outputs.
//!
//! Vectors print one `state<TAB>value` line per state, matrices print a
//! header row of state keys followed by one labeled row per state.

use std::fmt::Display;

use ndarray::{Array1, Array2};
use rs_markov_core::State;

/// One state key per line.
pub fn states(states: &[State]) -> String {
    states.iter().map(State::to_string).collect::<Vec<_>>().join("\n")
}

/// One `key<TAB>value` line per state.
pub fn vector<T: Display>(states: &[State], values: &Array1<T>) -> String {
    states
        .iter()
        .zip(values.iter())
        .map(|(state, value)| format!("{state}\t{value}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Tab separated matrix with state keys as row and column headers.
pub fn matrix<T: Display>(states: &[State], values: &Array2<T>) -> String {
    let mut lines = Vec::with_capacity(states.len() + 1);

    let header: Vec<String> = states.iter().map(State::to_string).collect();
    lines.push(format!("\t{}", header.join("\t")));

    for (state, row) in states.iter().zip(values.outer_iter()) {
        let cells: Vec<String> = row.iter().map(ToString::to_string).collect();
        lines.push(format!("{state}\t{}", cells.join("\t")));
    }

    lines.join("\n")
}
