//! Built-in defaults for the CLI.

/// Corpus used when no `--input` file is given.
pub const DEFAULT_SENTENCES: [&str; 13] = [
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
];

/// Upper bound on the words of a generated sentence.
pub const MAX_GENERATED_TOKENS: usize = 50;

/// Log filter applied when `RUST_LOG` is unset.
pub fn default_log_filter(verbose: bool) -> &'static str {
    if verbose { "info" } else { "warn" }
}
