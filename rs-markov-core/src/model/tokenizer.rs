use std::sync::LazyLock;

use regex::Regex;

/// Maximal runs of Unicode letters (general category `L`).
static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\p{L}+").expect("word pattern is valid"));

/// Splits a sentence into lowercase word tokens.
///
/// The sentence is lowercased first, then every maximal run of Unicode
/// letters becomes a token. Digits, punctuation, symbols and whitespace only
/// act as separators, so `"das Bourbaki-Panorama"` yields
/// `["das", "bourbaki", "panorama"]`.
///
/// A sentence without any letter yields an empty vector. Never fails.
pub fn tokenize(sentence: &str) -> Vec<String> {
	let lowered = sentence.to_lowercase();
	WORD.find_iter(&lowered).map(|m| m.as_str().to_owned()).collect()
}
