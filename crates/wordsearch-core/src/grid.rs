use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::scan::{Probe, ScanCursor};

/// Filler letters weighted by approximate English letter frequency.
/// Derived from https://en.wikipedia.org/wiki/Letter_frequency
const LETTER_FREQ: [char; 103] = [
    'a', 'a', 'a', 'a', 'a', 'a', 'a', 'a', //
    'b', 'b', //
    'c', 'c', 'c', //
    'd', 'd', 'd', 'd', //
    'e', 'e', 'e', 'e', 'e', 'e', 'e', 'e', 'e', 'e', 'e', 'e', //
    'f', 'f', //
    'g', 'g', //
    'h', 'h', 'h', 'h', 'h', 'h', //
    'i', 'i', 'i', 'i', 'i', 'i', 'i', //
    'j', //
    'k', //
    'l', 'l', 'l', 'l', //
    'm', 'm', //
    'n', 'n', 'n', 'n', 'n', 'n', 'n', //
    'o', 'o', 'o', 'o', 'o', 'o', 'o', 'o', //
    'p', 'p', //
    'q', //
    'r', 'r', 'r', 'r', 'r', 'r', //
    's', 's', 's', 's', 's', 's', //
    't', 't', 't', 't', 't', 't', 't', 't', 't', //
    'u', 'u', 'u', //
    'v', //
    'w', 'w', //
    'x', //
    'y', 'y', //
    'z',
];

/// A square word-search grid.
///
/// Words are placed along straight lines in one of the eight compass
/// directions; crossing words may share cells where their letters agree.
/// Empty cells are filled afterwards with frequency-weighted filler
/// letters.
pub struct Grid {
    size: usize,
    cells: Vec<Option<char>>,
    words: Vec<String>,
    rng: StdRng,
}

impl Grid {
    /// Create an empty `size` x `size` grid seeded from system entropy.
    pub fn new(size: usize) -> Result<Self> {
        Self::from_rng(size, StdRng::from_entropy())
    }

    /// Create an empty grid with a fixed seed for reproducible puzzles.
    pub fn with_seed(size: usize, seed: u64) -> Result<Self> {
        Self::from_rng(size, StdRng::seed_from_u64(seed))
    }

    fn from_rng(size: usize, rng: StdRng) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidGridSize(size));
        }
        Ok(Self {
            size,
            cells: vec![None; size * size],
            words: Vec::new(),
            rng,
        })
    }

    /// Grid width and height.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Placed words, in placement order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// The letter at `(x, y)`, or `None` for an empty or out-of-range cell.
    pub fn letter(&self, x: usize, y: usize) -> Option<char> {
        if x < self.size && y < self.size {
            self.cells[x + y * self.size]
        } else {
            None
        }
    }

    /// Number of cells still holding no letter.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Try to place `word` somewhere in the grid.
    ///
    /// The search probes every (position, direction) pair at most once,
    /// starting from a random cell and direction, so it always terminates.
    /// Returns `false` without touching the grid when the word is longer
    /// than the grid or no compatible placement exists.
    pub fn add_word(&mut self, word: &str) -> bool {
        // Skip words we cannot fit
        if word.len() > self.size {
            return false;
        }

        let word = word.to_lowercase();
        let mut cursor = ScanCursor::new(self.size, word.len(), &mut self.rng);

        loop {
            let probe = cursor.probe();
            trace!(
                word = %word,
                x = probe.x,
                y = probe.y,
                direction = %probe.direction,
                "probing placement"
            );

            if cursor.in_bounds() && self.word_fits(&word, probe) {
                self.store_word(word, probe);
                return true;
            }

            cursor.advance();
            if cursor.at_origin() {
                debug!(word = %word, size = self.size, "no legal placement found");
                return false;
            }
        }
    }

    /// Whether every letter of `word`, walked from `probe`, lands on an
    /// empty cell or on a cell already holding that exact letter.
    fn word_fits(&self, word: &str, probe: Probe) -> bool {
        let (dx, dy) = probe.direction.delta();
        let mut x = probe.x as i32;
        let mut y = probe.y as i32;

        for c in word.chars() {
            match self.letter(x as usize, y as usize) {
                None => {}
                Some(held) if held == c => {}
                Some(_) => return false,
            }
            x += dx;
            y += dy;
        }

        true
    }

    fn store_word(&mut self, word: String, probe: Probe) {
        let (dx, dy) = probe.direction.delta();
        let mut x = probe.x as i32;
        let mut y = probe.y as i32;

        for c in word.chars() {
            self.cells[x as usize + y as usize * self.size] = Some(c);
            x += dx;
            y += dy;
        }

        self.words.push(word);
    }

    /// Fill every empty cell with a letter drawn from the frequency table.
    /// Cells written by placed words are left untouched; a second call is a
    /// no-op.
    pub fn fill(&mut self) {
        let rng = &mut self.rng;
        for cell in self.cells.iter_mut() {
            if cell.is_none() {
                *cell = Some(LETTER_FREQ[rng.gen_range(0..LETTER_FREQ.len())]);
            }
        }
    }
}

/// The output layout callers may depend on: rows from the highest y down,
/// letters separated by single spaces, a blank line after each row, then a
/// `Words:` section listing placed words in placement order. Empty cells
/// render as `.`.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.size).rev() {
            for x in 0..self.size {
                if x > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.letter(x, y).unwrap_or('.'))?;
            }
            write!(f, "\n\n")?;
        }

        write!(f, "\nWords:\n\n")?;
        for word in &self.words {
            writeln!(f, "{}", word)?;
        }

        Ok(())
    }
}
