//! Integration tests for rs-markov-core through its public API.

use ndarray::Array1;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rs_markov_core::model::diagram::{DEFAULT_DECIMALS, DEFAULT_STEPS, DEFAULT_THRESHOLD};
use rs_markov_core::{MarkovChain, State};

const EPSILON: f64 = 1e-9;

// ============================================================================
// Corpora
// ============================================================================

fn lucerne() -> Vec<&'static str> {
	vec![
		"die Kappelbrücke",
		"die Museggmauer",
		"das Löwendenkmal",
		"der Vierwaldstättersee",
		"die Altstadt",
		"die Rigi",
		"das Verkehrshaus",
		"die Pilatusbahn",
		"die Gletschergrotte",
		"das Bourbaki-Panorama",
		"die Kappelbrücke",
		"die Kappelbrücke",
		"der Schwanenplatz",
	]
}

fn corpora() -> Vec<Vec<&'static str>> {
	vec![
		vec![],
		vec![""],
		vec!["...", "123"],
		vec!["the cat sits", "the cat eats", "the dog sits"],
		vec!["a a a", "a b", "b a"],
		lucerne(),
	]
}

fn keys(chain: &MarkovChain) -> Vec<&str> {
	chain.states().iter().map(State::key).collect()
}

fn count(chain: &MarkovChain, from: &str, to: &str) -> usize {
	let index = |token: &str| match token {
		"START" => State::START_INDEX,
		"END" => State::END_INDEX,
		_ => chain.index_of(token).unwrap(),
	};
	chain.transition_counts()[[index(from), index(to)]]
}

// ============================================================================
// Properties over every corpus
// ============================================================================

#[test]
fn states_are_sentinels_then_distinct_tokens() {
	for corpus in corpora() {
		let chain = MarkovChain::new(corpus.clone());
		let states = chain.states();

		assert_eq!(states[State::START_INDEX], State::Start);
		assert_eq!(states[State::END_INDEX], State::End);

		let mut seen = std::collections::HashSet::new();
		assert!(states.iter().all(|s| seen.insert(s.clone())), "duplicate state in {corpus:?}");

		for sentence in &corpus {
			for token in rs_markov_core::model::tokenizer::tokenize(sentence) {
				let i = chain.index_of(&token).unwrap();
				assert_eq!(states[i], State::Token(token));
			}
		}
	}
}

#[test]
fn rows_sum_to_one_or_zero() {
	for corpus in corpora() {
		let chain = MarkovChain::new(corpus);
		let p = chain.transition_probabilities();
		for (i, row) in p.outer_iter().enumerate() {
			let sum = row.sum();
			if i == State::END_INDEX || chain.outgoing_totals()[i] > 0 {
				assert!((sum - 1.0).abs() < EPSILON, "row {i} sums to {sum}");
			} else {
				assert_eq!(sum, 0.0, "dangling row {i} sums to {sum}");
			}
		}
	}
}

#[test]
fn end_row_is_one_hot() {
	for corpus in corpora() {
		let chain = MarkovChain::new(corpus);
		let end = chain.transition_probabilities().row(State::END_INDEX).to_owned();
		let mut expected = Array1::<f64>::zeros(chain.state_count());
		expected[State::END_INDEX] = 1.0;
		assert_eq!(end, expected);
	}
}

#[test]
fn zero_steps_is_unit_vector_at_start() {
	for corpus in corpora() {
		let chain = MarkovChain::new(corpus);
		let d = chain.distribution_after(0).unwrap();
		let mut expected = Array1::<f64>::zeros(chain.state_count());
		expected[State::START_INDEX] = 1.0;
		assert_eq!(d, expected);
	}
}

#[test]
fn state_probabilities_sum_to_one_when_observed() {
	for corpus in corpora() {
		let chain = MarkovChain::new(corpus);
		let sum = chain.state_probabilities().sum();
		if chain.total_transitions() > 0 {
			assert!((sum - 1.0).abs() < EPSILON);
		} else {
			assert_eq!(sum, 0.0);
		}
	}
}

#[test]
fn combined_is_transition_times_state() {
	let chain = MarkovChain::new(lucerne());
	let p = chain.transition_probabilities();
	let s = chain.state_probabilities();
	for ((i, j), &c) in chain.combined_probabilities().indexed_iter() {
		assert!((c - p[[i, j]] * s[i]).abs() < EPSILON);
	}
}

#[test]
fn distributions_stay_stochastic() {
	let chain = MarkovChain::new(lucerne());
	for steps in 0..6 {
		let d = chain.distribution_after(steps).unwrap();
		assert!((d.sum() - 1.0).abs() < EPSILON, "step {steps} sums to {}", d.sum());
	}
}

// ============================================================================
// Worked examples
// ============================================================================

#[test]
fn empty_sentences_contribute_nothing() {
	let with_blanks = MarkovChain::new(["", "the cat", "!!", "   "]);
	let without = MarkovChain::new(["the cat"]);
	assert_eq!(with_blanks.transition_counts(), without.transition_counts());
	assert_eq!(with_blanks.total_transitions(), 3);
}

#[test]
fn counts_cat_dog_corpus() {
	let chain = MarkovChain::new(["the cat sits", "the cat eats", "the dog sits"]);

	assert_eq!(keys(&chain), vec!["__START__", "__END__", "the", "cat", "sits", "eats", "dog"]);
	assert_eq!(count(&chain, "START", "the"), 3);
	assert_eq!(count(&chain, "the", "cat"), 2);
	assert_eq!(count(&chain, "the", "dog"), 1);
	assert_eq!(count(&chain, "cat", "sits"), 1);
	assert_eq!(count(&chain, "cat", "eats"), 1);
	assert_eq!(count(&chain, "dog", "sits"), 1);
	assert_eq!(count(&chain, "sits", "END"), 2);
	assert_eq!(count(&chain, "eats", "END"), 1);
	assert_eq!(chain.total_transitions(), 12);
}

#[test]
fn single_unicode_word_goes_to_end() {
	let chain = MarkovChain::new(["Löwendenkmal"]);
	assert_eq!(keys(&chain), vec!["__START__", "__END__", "löwendenkmal"]);

	let row = chain.transition_probabilities().row(2).to_vec();
	assert_eq!(row, vec![0.0, 1.0, 0.0]);
}

#[test]
fn distribution_after_two_steps_on_lucerne() {
	let chain = MarkovChain::new(lucerne());
	let d = chain.distribution_after(2).unwrap();

	// step 1 is an article, step 2 the landmark after it
	let kappel = chain.index_of("kappelbrücke").unwrap();
	assert!((d[kappel] - 3.0 / 13.0).abs() < EPSILON);
	assert!(d[State::END_INDEX].abs() < EPSILON);

	// only "das bourbaki panorama" is still travelling after three steps
	let d = chain.distribution_after(DEFAULT_STEPS).unwrap();
	assert!((d[State::END_INDEX] - 12.0 / 13.0).abs() < EPSILON);
	assert!((d[chain.index_of("panorama").unwrap()] - 1.0 / 13.0).abs() < EPSILON);

	let d = chain.distribution_after(4).unwrap();
	assert!((d[State::END_INDEX] - 1.0).abs() < EPSILON);
}

// ============================================================================
// Diagrams
// ============================================================================

#[test]
fn flow_diagram_labels_edges_with_decimals() {
	let chain = MarkovChain::new(["the cat sits", "the dog sits"]);
	let diagram = chain.to_flow_diagram(DEFAULT_THRESHOLD, DEFAULT_DECIMALS);

	assert!(diagram.contains("    the -->|0.500| cat"));
	assert!(diagram.contains("    the -->|0.500| dog"));
	assert!(diagram.contains("    __START__ -->|1.000| the"));
	assert!(diagram.contains("    __END__ -->|1.000| __END__"));
}

#[test]
fn flow_diagram_preserves_index_order() {
	let chain = MarkovChain::new(["the cat sits", "the dog sits"]);
	let diagram = chain.to_flow_diagram(DEFAULT_THRESHOLD, DEFAULT_DECIMALS);

	let expected = [
		"flowchart LR",
		"    __START__[\"START\"]",
		"    __END__[\"END\"]",
		"    the[\"the\"]",
		"    cat[\"cat\"]",
		"    sits[\"sits\"]",
		"    dog[\"dog\"]",
		"    __START__ -->|1.000| the",
		"    __END__ -->|1.000| __END__",
		"    the -->|0.500| cat",
		"    the -->|0.500| dog",
		"    cat -->|1.000| sits",
		"    sits -->|1.000| __END__",
		"    dog -->|1.000| sits",
	]
	.join("\n");
	assert_eq!(diagram, expected);
}

#[test]
fn flow_diagram_sanitizes_ids_but_not_labels() {
	let chain = MarkovChain::new(["das Löwendenkmal"]);
	let diagram = chain.to_flow_diagram(DEFAULT_THRESHOLD, 1);
	assert!(diagram.contains("    l_wendenkmal[\"löwendenkmal\"]"));
	assert!(diagram.contains("    das -->|1.0| l_wendenkmal"));
}

#[test]
fn distribution_diagram_uses_percentages() {
	let chain = MarkovChain::new(["the cat sits", "the dog sits"]);
	let diagram = chain.to_flow_diagram_with_distribution(2, DEFAULT_THRESHOLD);
	let lines: Vec<&str> = diagram.lines().collect();

	assert_eq!(lines[0], "flowchart LR");
	assert_eq!(lines[1], "    __START__[\"START<br/>0.0%\"]");
	assert_eq!(lines[4], "    cat[\"cat<br/>50.0%\"]");
	assert_eq!(lines[6], "    dog[\"dog<br/>50.0%\"]");
	assert!(lines.contains(&"    the -->|50.0%| cat"));
	assert!(lines.contains(&"    __END__ -->|100.0%| __END__"));
}

// ============================================================================
// Generation and serialization
// ============================================================================

#[test]
fn generates_sentences_from_the_corpus_vocabulary() {
	let chain = MarkovChain::new(lucerne());
	let mut rng = StdRng::seed_from_u64(2024);

	for _ in 0..20 {
		let sentence = chain.generate(&mut rng, 10).unwrap();
		let words: Vec<&str> = sentence.split(' ').collect();
		assert!((2..=3).contains(&words.len()), "unexpected sentence {sentence:?}");
		assert!(["die", "das", "der"].contains(&words[0]));
		assert!(words.iter().all(|w| chain.index_of(w).is_some()));
	}
}

#[test]
fn empty_corpus_generates_nothing() {
	let chain = MarkovChain::new(Vec::<String>::new());
	let mut rng = StdRng::seed_from_u64(1);
	assert_eq!(chain.generate(&mut rng, 10), None);
}

#[test]
fn serializes_the_whole_model() {
	let chain = MarkovChain::new(["die Rigi"]);
	let json = serde_json::to_value(&chain).unwrap();

	assert_eq!(json["sentences"][0], "die Rigi");
	assert_eq!(json["vocabulary"]["states"][0], "Start");
	assert_eq!(json["vocabulary"]["states"][2]["Token"], "die");
	assert!(json["transition_probabilities"].is_object());
}
