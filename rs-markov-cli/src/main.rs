//! rs-markov CLI - inspect a word-level Markov chain built from sentences.
//!
//! Without `--input` the chain is built from a small built-in corpus.
//! Without any output flag nothing is printed.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use ndarray::Array1;
use rs_markov_core::MarkovChain;
use rs_markov_core::io::read_sentences;
use rs_markov_core::model::diagram::{DEFAULT_DECIMALS, DEFAULT_THRESHOLD};

mod config;
mod render;

/// Build a Markov chain over the words of a corpus and print its matrices,
/// projected distributions or Mermaid diagrams.
#[derive(Parser, Debug)]
#[command(name = "rs-markov", version, long_about = None)]
struct Cli {
    /// Print everything: sentences, states, probabilities, the distribution
    /// after STEPS and the diagram.
    #[arg(short, long, value_name = "STEPS")]
    all: Option<u32>,

    /// Print all states.
    #[arg(short, long)]
    states: bool,

    /// Print transition probabilities.
    #[arg(short, long)]
    transition_probabilities: bool,

    /// Print state probabilities (share of outgoing transitions).
    #[arg(short, long)]
    word_probabilities: bool,

    /// Print word frequency probabilities.
    #[arg(short = 'f', long)]
    word_frequencies: bool,

    /// Print combined (joint) probabilities.
    #[arg(short, long)]
    combined_probabilities: bool,

    /// Print the state distribution after STEPS transitions.
    #[arg(short, long, value_name = "STEPS")]
    distribution_after: Option<u32>,

    /// Print a Mermaid diagram of the transitions.
    #[arg(short, long)]
    mermaid_diagram: bool,

    /// Print a Mermaid diagram annotated with the distribution after STEPS.
    #[arg(short = 'n', long, value_name = "STEPS")]
    mermaid_after: Option<u32>,

    /// Generate COUNT random sentences from the chain.
    #[arg(short, long, value_name = "COUNT")]
    generate: Option<usize>,

    /// Print the whole model as JSON.
    #[arg(long)]
    json: bool,

    /// Input file with one sentence per line, replaces the built-in corpus.
    #[arg(short, long, value_name = "FILENAME")]
    input: Option<PathBuf>,

    /// Edges with a probability at or below this value are not drawn.
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: f64,

    /// Decimal places of edge labels in the plain diagram.
    #[arg(long, default_value_t = DEFAULT_DECIMALS)]
    decimals: usize,

    /// Enable informational logging (the loaded-file notice is always shown).
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config::default_log_filter(cli.verbose)),
    )
    .init();

    let chain = match &cli.input {
        Some(path) => load(path)?,
        None => MarkovChain::new(config::DEFAULT_SENTENCES),
    };

    for block in run(&cli, &chain)? {
        println!("{block}");
    }

    Ok(())
}

/// Builds a chain from a sentence file.
fn load(path: &Path) -> Result<MarkovChain> {
    let sentences = read_sentences(path)
        .with_context(|| format!("failed to read sentences from {}", path.display()))?;
    let chain = MarkovChain::new(sentences);
    log::warn!("successfully read {} with {} sentences.", path.display(), chain.sentences().len());
    Ok(chain)
}

/// Renders every requested output, in a fixed order.
fn run(cli: &Cli, chain: &MarkovChain) -> Result<Vec<String>> {
    let states = chain.states();
    let mut blocks = Vec::new();

    if let Some(steps) = cli.all {
        blocks.push(format!("Sentences:\n{}", chain.sentences().join("\n")));
        blocks.push(format!("\nStates:\n{}", render::states(states)));
        blocks.push(format!("\nWord probabilities\n{}", render::vector(states, chain.state_probabilities())));
        blocks.push(format!("\nTransition probabilities\n{}", render::matrix(states, chain.transition_probabilities())));
        blocks.push(format!("\nCombined probabilities\n{}", render::matrix(states, chain.combined_probabilities())));
        blocks.push(format!("\nDistribution after {steps} steps\n{}", render::vector(states, &distribution(chain, steps))));
        blocks.push(chain.to_flow_diagram(cli.threshold, cli.decimals));
    }

    if cli.states {
        blocks.push(render::states(states));
    }

    if cli.transition_probabilities {
        blocks.push(render::matrix(states, chain.transition_probabilities()));
    }

    if cli.word_probabilities {
        blocks.push(render::vector(states, chain.state_probabilities()));
    }

    if cli.word_frequencies {
        blocks.push(render::vector(states, chain.frequency_probabilities()));
    }

    if cli.combined_probabilities {
        blocks.push(render::matrix(states, chain.combined_probabilities()));
    }

    if let Some(steps) = cli.distribution_after {
        blocks.push(render::vector(states, &distribution(chain, steps)));
    }

    if cli.mermaid_diagram {
        blocks.push(chain.to_flow_diagram(cli.threshold, cli.decimals));
    }

    if let Some(steps) = cli.mermaid_after {
        blocks.push(chain.to_flow_diagram_with_distribution(steps, cli.threshold));
    }

    if let Some(count) = cli.generate {
        let mut rng = rand::rng();
        for _ in 0..count {
            match chain.generate(&mut rng, config::MAX_GENERATED_TOKENS) {
                Some(sentence) => blocks.push(sentence),
                None => {
                    log::warn!("the corpus has no words, nothing to generate");
                    break;
                }
            }
        }
    }

    if cli.json {
        blocks.push(serde_json::to_string_pretty(chain).context("failed to serialize the model")?);
    }

    Ok(blocks)
}

/// Distribution after `steps`, or zeros if the projection failed (already logged).
fn distribution(chain: &MarkovChain, steps: u32) -> Array1<f64> {
    chain.distribution_after(steps).unwrap_or_else(|e| e.fallback())
}
