//! Word-search generator command line.
//!
//! Samples words from a dictionary file, places them on a square grid, and
//! prints the answer key followed by the filled puzzle.

mod config;

use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use wordsearch_core::{Dictionary, Grid};

use config::{Args, Config};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::resolve(Args::parse())?;
    build_puzzle(&config)
}

fn build_puzzle(config: &Config) -> Result<()> {
    let dictionary = Dictionary::load(&config.dictionary, config.min_len, config.max_len)?;
    info!(
        path = %dictionary.path().display(),
        words = dictionary.len(),
        "word list loaded"
    );

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let words = dictionary.sample(config.num_words, &mut rng)?;

    let mut grid = match config.seed {
        Some(seed) => Grid::with_seed(config.size, seed)?,
        None => Grid::new(config.size)?,
    };

    for word in &words {
        if !grid.add_word(word) {
            // Not every word fits a finite grid; dropped words are not fatal
            warn!(word = %word, "word could not be placed, dropping it");
        }
    }
    info!(
        placed = grid.words().len(),
        sampled = words.len(),
        "placement finished"
    );

    println!("Key:\n");
    println!("{}", grid);

    grid.fill();

    println!("Puzzle:\n");
    println!("{}", grid);

    Ok(())
}
