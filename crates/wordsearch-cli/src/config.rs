use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use serde::Deserialize;

const DEFAULT_SIZE: usize = 15;
const DEFAULT_NUM_WORDS: usize = 10;
const DEFAULT_MIN_LEN: usize = 4;
const DEFAULT_MAX_LEN: usize = 8;

/// Command-line arguments. Every value can also come from a JSON config
/// file; explicit flags win over file values, which win over defaults.
#[derive(Debug, Parser)]
#[command(name = "wordsearch", version, about = "Generate word-search puzzles")]
pub struct Args {
    /// JSON config file with the same keys as the flags below
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Grid width and height
    #[arg(long)]
    pub size: Option<usize>,

    /// Number of words to place
    #[arg(long = "words")]
    pub num_words: Option<usize>,

    /// Minimum word length
    #[arg(long)]
    pub min_len: Option<usize>,

    /// Maximum word length
    #[arg(long)]
    pub max_len: Option<usize>,

    /// Word-list file, one word per line
    #[arg(long)]
    pub dictionary: Option<PathBuf>,

    /// Seed for reproducible puzzles
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Keys accepted in the JSON config file.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    size: Option<usize>,
    num_words: Option<usize>,
    min_len: Option<usize>,
    max_len: Option<usize>,
    dictionary: Option<PathBuf>,
    seed: Option<u64>,
}

/// Fully resolved generator settings.
#[derive(Debug)]
pub struct Config {
    pub size: usize,
    pub num_words: usize,
    pub min_len: usize,
    pub max_len: usize,
    pub dictionary: PathBuf,
    pub seed: Option<u64>,
}

impl Config {
    /// Merge flags, the optional config file, and defaults.
    pub fn resolve(args: Args) -> anyhow::Result<Config> {
        let file = match &args.config {
            Some(path) => {
                let contents = fs::read_to_string(path)
                    .with_context(|| format!("failed to read config file {}", path.display()))?;
                serde_json::from_str(&contents)
                    .with_context(|| format!("failed to parse config file {}", path.display()))?
            }
            None => ConfigFile::default(),
        };

        let dictionary = args
            .dictionary
            .or(file.dictionary)
            .context("no word list given (pass --dictionary or set it in the config file)")?;

        Ok(Config {
            size: args.size.or(file.size).unwrap_or(DEFAULT_SIZE),
            num_words: args.num_words.or(file.num_words).unwrap_or(DEFAULT_NUM_WORDS),
            min_len: args.min_len.or(file.min_len).unwrap_or(DEFAULT_MIN_LEN),
            max_len: args.max_len.or(file.max_len).unwrap_or(DEFAULT_MAX_LEN),
            dictionary,
            seed: args.seed.or(file.seed),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults_applied() {
        let config =
            Config::resolve(parse(&["wordsearch", "--dictionary", "words.txt"])).unwrap();

        assert_eq!(config.size, DEFAULT_SIZE);
        assert_eq!(config.num_words, DEFAULT_NUM_WORDS);
        assert_eq!(config.min_len, DEFAULT_MIN_LEN);
        assert_eq!(config.max_len, DEFAULT_MAX_LEN);
        assert_eq!(config.dictionary, PathBuf::from("words.txt"));
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_missing_dictionary_is_an_error() {
        assert!(Config::resolve(parse(&["wordsearch"])).is_err());
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"size": 20, "num_words": 5, "dictionary": "from_file.txt", "seed": 9}}"#
        )
        .unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let config = Config::resolve(parse(&[
            "wordsearch",
            "--config",
            &path,
            "--size",
            "12",
        ]))
        .unwrap();

        // Flag wins over file, file wins over default
        assert_eq!(config.size, 12);
        assert_eq!(config.num_words, 5);
        assert_eq!(config.dictionary, PathBuf::from("from_file.txt"));
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.min_len, DEFAULT_MIN_LEN);
    }

    #[test]
    fn test_unknown_config_keys_are_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"grid_size": 20}}"#).unwrap();
        let path = file.path().to_str().unwrap().to_string();

        assert!(Config::resolve(parse(&["wordsearch", "--config", &path])).is_err());
    }
}
