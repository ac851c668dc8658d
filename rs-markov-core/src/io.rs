use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Reads a text file and returns one sentence per line.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`, terminators are stripped
/// - Blank lines are kept; they simply yield no tokens
pub fn read_sentences<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents.lines().map(str::to_owned).collect())
}
