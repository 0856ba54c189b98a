//! # Word-search engine
//!
//! Generates word-search puzzles: words are placed along straight lines in
//! one of eight compass directions on a square grid, crossing words share
//! cells where their letters agree, and leftover cells are filled with
//! letters drawn from an English letter-frequency table.
//!
//! Placement uses an exhaustive randomized search: a [`ScanCursor`] starts
//! at a random cell and direction and enumerates every (position, direction)
//! pair at most once, so `Grid::add_word` always terminates.

pub mod dictionary;
pub mod direction;
pub mod error;
pub mod grid;
pub mod scan;

pub use dictionary::Dictionary;
pub use direction::Direction;
pub use error::{Error, Result};
pub use grid::Grid;
pub use scan::{Probe, ScanCursor};
