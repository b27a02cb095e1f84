use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::BTreeSet;
use std::fmt;

/// Lowest ball in the standard 90-ball game.
pub const MIN_BALL: u8 = 1;
/// Highest ball in the standard 90-ball game.
pub const MAX_BALL: u8 = 90;
/// Number of distinct balls.
pub const BALL_COUNT: usize = (MAX_BALL - MIN_BALL + 1) as usize;

/// Clamp an arbitrary requested number into the ball range. Out-of-range
/// requests are pulled to the nearest bound rather than rejected.
///
/// ```
/// use bingo_rs::balls::clamp_ball;
///
/// assert_eq!(clamp_ball(150), 90);
/// assert_eq!(clamp_ball(-5), 1);
/// assert_eq!(clamp_ball(42), 42);
/// ```
pub fn clamp_ball(n: i64) -> u8 {
    // Bounds fit in u8, so the cast after clamping is lossless.
    n.clamp(MIN_BALL as i64, MAX_BALL as i64) as u8
}

/// Numbers called so far in a session, kept sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DrawnSet {
    balls: BTreeSet<u8>,
}

impl DrawnSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every ball in the range, as if the whole pouch had been called.
    pub fn full() -> Self {
        (MIN_BALL..=MAX_BALL).collect()
    }

    pub fn len(&self) -> usize {
        self.balls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }

    pub fn is_exhausted(&self) -> bool {
        self.undrawn().next().is_none()
    }

    pub fn contains(&self, n: u8) -> bool {
        self.balls.contains(&n)
    }

    /// Add a ball. Returns `false` if it was already drawn.
    pub fn insert(&mut self, n: u8) -> bool {
        self.balls.insert(n)
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.balls.iter().copied()
    }

    /// Balls in range not yet drawn, ascending.
    pub fn undrawn(&self) -> impl Iterator<Item = u8> + '_ {
        (MIN_BALL..=MAX_BALL).filter(move |n| !self.balls.contains(n))
    }

    /// Pick one undrawn ball uniformly at random, or `None` once exhausted.
    pub fn pick_undrawn<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<u8> {
        let pool: Vec<u8> = self.undrawn().collect();
        pool.choose(rng).copied()
    }

    /// Seeded variant of [`pick_undrawn`](Self::pick_undrawn) for reproducible picks.
    pub fn pick_undrawn_seeded(&self, seed: u64) -> Option<u8> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.pick_undrawn(&mut rng)
    }
}

impl FromIterator<u8> for DrawnSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        Self { balls: iter.into_iter().collect() }
    }
}

impl Extend<u8> for DrawnSet {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        self.balls.extend(iter);
    }
}

impl fmt::Display for DrawnSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for n in &self.balls {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{n}")?;
            first = false;
        }
        Ok(())
    }
}
