use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Compass direction a word is written in.
///
/// The declaration order is the scan order: `successor` walks the eight
/// values in exactly this sequence, wrapping `NW` back around to `N`. The
/// placement search depends on that cycle being fixed, so the order is a
/// domain fact rather than a derive detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Direction {
    /// All eight directions in cyclic scan order.
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
    ];

    /// Unit step `(dx, dy)` taken for each letter written in this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::N => (0, 1),
            Direction::NE => (1, 1),
            Direction::E => (1, 0),
            Direction::SE => (1, -1),
            Direction::S => (0, -1),
            Direction::SW => (-1, -1),
            Direction::W => (-1, 0),
            Direction::NW => (-1, 1),
        }
    }

    /// The next direction in the fixed cyclic order.
    pub fn successor(self) -> Direction {
        match self {
            Direction::N => Direction::NE,
            Direction::NE => Direction::E,
            Direction::E => Direction::SE,
            Direction::SE => Direction::S,
            Direction::S => Direction::SW,
            Direction::SW => Direction::W,
            Direction::W => Direction::NW,
            Direction::NW => Direction::N,
        }
    }

    /// A direction drawn uniformly from all eight values.
    pub fn random<R: Rng>(rng: &mut R) -> Direction {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::N => "N",
            Direction::NE => "NE",
            Direction::E => "E",
            Direction::SE => "SE",
            Direction::S => "S",
            Direction::SW => "SW",
            Direction::W => "W",
            Direction::NW => "NW",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_deltas() {
        assert_eq!(Direction::N.delta(), (0, 1));
        assert_eq!(Direction::NE.delta(), (1, 1));
        assert_eq!(Direction::E.delta(), (1, 0));
        assert_eq!(Direction::SE.delta(), (1, -1));
        assert_eq!(Direction::S.delta(), (0, -1));
        assert_eq!(Direction::SW.delta(), (-1, -1));
        assert_eq!(Direction::W.delta(), (-1, 0));
        assert_eq!(Direction::NW.delta(), (-1, 1));
    }

    #[test]
    fn test_successor_follows_scan_order() {
        let mut dir = Direction::N;
        for expected in Direction::ALL.iter().skip(1) {
            dir = dir.successor();
            assert_eq!(dir, *expected);
        }

        // NW wraps back to N
        assert_eq!(dir, Direction::NW);
        assert_eq!(dir.successor(), Direction::N);
    }

    #[test]
    fn test_no_delta_is_zero() {
        for dir in Direction::ALL {
            assert_ne!(dir.delta(), (0, 0), "{} must move the cursor", dir);
        }
    }

    #[test]
    fn test_random_covers_all_directions() {
        let mut rng = StdRng::seed_from_u64(42);
        let seen: HashSet<Direction> = (0..1000).map(|_| Direction::random(&mut rng)).collect();
        assert_eq!(seen.len(), 8);
    }
}
