use std::fs;
use std::path::{Path, PathBuf};

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::error::{Error, Result};

/// Pool of candidate words filtered from a word-list file.
///
/// Loading keeps only ASCII-lowercase alphabetic words whose length falls
/// within the configured bounds, deduplicated. Sampling draws distinct words
/// uniformly without replacement, so a request larger than the pool fails
/// with a typed error instead of spinning.
#[derive(Debug)]
pub struct Dictionary {
    path: PathBuf,
    min_len: usize,
    max_len: usize,
    words: Vec<String>,
}

impl Dictionary {
    /// Read the word list at `path`, one word per line, keeping words of
    /// `min_len` to `max_len` letters.
    pub fn load(path: impl AsRef<Path>, min_len: usize, max_len: usize) -> Result<Self> {
        if min_len == 0 || min_len > max_len {
            return Err(Error::InvalidLengthBounds {
                min: min_len,
                max: max_len,
            });
        }

        let path = path.as_ref().to_path_buf();
        let contents = fs::read_to_string(&path).map_err(|source| Error::WordListUnreadable {
            path: path.clone(),
            source,
        })?;

        let mut words: Vec<String> = contents
            .lines()
            .map(str::trim)
            .filter(|word| word.len() >= min_len && word.len() <= max_len)
            .filter(|word| word.chars().all(|c| c.is_ascii_lowercase()))
            .map(str::to_owned)
            .collect();
        words.sort();
        words.dedup();

        if words.is_empty() {
            return Err(Error::EmptyWordList {
                path,
                min: min_len,
                max: max_len,
            });
        }

        debug!(path = %path.display(), count = words.len(), "word list loaded");

        Ok(Self {
            path,
            min_len,
            max_len,
            words,
        })
    }

    /// The backing word-list file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The configured `(min, max)` word length bounds.
    pub fn length_bounds(&self) -> (usize, usize) {
        (self.min_len, self.max_len)
    }

    /// Number of distinct qualifying words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Sample `quantity` distinct words uniformly without replacement.
    pub fn sample<R: Rng>(&self, quantity: usize, rng: &mut R) -> Result<Vec<String>> {
        if quantity > self.words.len() {
            return Err(Error::NotEnoughWords {
                requested: quantity,
                available: self.words.len(),
            });
        }

        Ok(self
            .words
            .choose_multiple(rng, quantity)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn word_list(lines: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(lines.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_filters_and_dedups() {
        let file = word_list("cat\ndog\ncat\nCAPS\nhi\nnum3r1c\nelephant\n");
        let dict = Dictionary::load(file.path(), 3, 3).unwrap();

        assert_eq!(dict.len(), 2);
        assert_eq!(dict.length_bounds(), (3, 3));
    }

    #[test]
    fn test_sample_returns_distinct_words() {
        let file = word_list("cat\ndog\ncat\n");
        let dict = Dictionary::load(file.path(), 3, 3).unwrap();

        let mut rng = StdRng::seed_from_u64(1);
        let mut words = dict.sample(2, &mut rng).unwrap();
        words.sort();
        assert_eq!(words, ["cat", "dog"]);
    }

    #[test]
    fn test_oversampling_fails_fast() {
        let file = word_list("cat\ndog\ncat\n");
        let dict = Dictionary::load(file.path(), 3, 3).unwrap();

        let mut rng = StdRng::seed_from_u64(1);
        let err = dict.sample(3, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            Error::NotEnoughWords {
                requested: 3,
                available: 2
            }
        ));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = Dictionary::load("/no/such/word/list", 3, 8).unwrap_err();
        assert!(matches!(err, Error::WordListUnreadable { .. }));
    }

    #[test]
    fn test_no_qualifying_words_is_an_error() {
        let file = word_list("x\ny\n");
        let err = Dictionary::load(file.path(), 3, 8).unwrap_err();
        assert!(matches!(err, Error::EmptyWordList { .. }));
    }

    #[test]
    fn test_invalid_bounds_are_rejected() {
        let file = word_list("cat\n");
        assert!(matches!(
            Dictionary::load(file.path(), 0, 3),
            Err(Error::InvalidLengthBounds { min: 0, max: 3 })
        ));
        assert!(matches!(
            Dictionary::load(file.path(), 5, 3),
            Err(Error::InvalidLengthBounds { min: 5, max: 3 })
        ));
    }
}
