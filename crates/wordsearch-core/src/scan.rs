use rand::Rng;

use crate::direction::Direction;

/// One candidate (position, direction) pair tested during a placement
/// search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probe {
    pub x: usize,
    pub y: usize,
    pub direction: Direction,
}

/// Cursor that enumerates every (position, direction) pair of a grid exactly
/// once per search episode.
///
/// Starting from a random cell and direction, `advance` cycles through the
/// eight directions at the current cell before stepping to the next cell in
/// row-major order (x fastest), wrapping at the grid edge. After
/// `8 * size * size` advances the cursor is back at its origin, so a caller
/// that stops on `at_origin` visits each probe at most once and always
/// halts.
#[derive(Debug)]
pub struct ScanCursor {
    size: usize,
    word_len: usize,
    origin: Probe,
    current: Probe,
}

impl ScanCursor {
    /// Create a cursor for a `size` x `size` grid and a word of `word_len`
    /// letters, seeded at a random cell and direction.
    pub fn new<R: Rng>(size: usize, word_len: usize, rng: &mut R) -> Self {
        let origin = Probe {
            x: rng.gen_range(0..size),
            y: rng.gen_range(0..size),
            direction: Direction::random(rng),
        };
        Self {
            size,
            word_len,
            origin,
            current: origin,
        }
    }

    /// The probe presently under test.
    pub fn probe(&self) -> Probe {
        self.current
    }

    /// Step to the next untested probe: cycle the direction, and once the
    /// full direction cycle at this cell completes, move to the next cell.
    pub fn advance(&mut self) {
        self.current.direction = self.current.direction.successor();
        if self.current.direction != self.origin.direction {
            return;
        }

        self.current.x += 1;
        if self.current.x < self.size {
            return;
        }

        self.current.x = 0;
        self.current.y += 1;
        if self.current.y < self.size {
            return;
        }

        self.current.y = 0;
    }

    /// Whether the cursor has wrapped all the way back to its starting
    /// probe, i.e. the search space is exhausted.
    pub fn at_origin(&self) -> bool {
        self.current == self.origin
    }

    /// Whether a word of the cursor's length fits inside the grid from the
    /// current probe.
    ///
    /// The end coordinate is `start + delta * word_len`; it is out of bounds
    /// only when `< 0` or `> size`. The closed upper bound (`end == size`
    /// legal) means components with a zero delta get an extra cell of
    /// tolerance; which placements are legal depends on this exact
    /// convention.
    pub fn in_bounds(&self) -> bool {
        let (dx, dy) = self.current.direction.delta();
        let len = self.word_len as i32;
        let max = self.size as i32;

        let end_x = self.current.x as i32 + dx * len;
        let end_y = self.current.y as i32 + dy * len;

        end_x >= 0 && end_x <= max && end_y >= 0 && end_y <= max
    }
}
