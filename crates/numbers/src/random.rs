use crate::error::{NumberError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of distinct random integers.
///
/// Hint sampling and hint selection draw from this trait so that a game can be
/// replayed from its seed and tests can script the draws.
pub trait RandomSource {
    /// `count` distinct values from `[low, high_exclusive)`, in draw order.
    fn draw(&mut self, low: i64, high_exclusive: i64, count: usize) -> Result<Vec<i64>>;

    /// One index into a collection of `len` elements.
    fn pick_index(&mut self, len: usize) -> Result<usize> {
        let high = i64::try_from(len).map_err(|_| NumberError::InvalidRange {
            low: 0,
            high: i64::MAX,
        })?;
        let drawn = self.draw(0, high, 1)?;
        drawn
            .first()
            .and_then(|&idx| usize::try_from(idx).ok())
            .ok_or_else(|| NumberError::range(1, 0))
    }
}

/// `count` values drawn without replacement from `[low, high_exclusive)`.
pub fn random_in_range<R: Rng + ?Sized>(
    rng: &mut R,
    low: i64,
    high_exclusive: i64,
    count: usize,
) -> Result<Vec<i64>> {
    if high_exclusive < low {
        return Err(NumberError::InvalidRange {
            low,
            high: high_exclusive,
        });
    }

    let available = high_exclusive.abs_diff(low);
    if count as u64 > available {
        return Err(NumberError::range(count, available));
    }
    if count == 0 {
        return Ok(Vec::new());
    }

    let length = usize::try_from(available).map_err(|_| NumberError::InvalidRange {
        low,
        high: high_exclusive,
    })?;

    Ok(rand::seq::index::sample(rng, length, count)
        .into_iter()
        .map(|offset| low.wrapping_add(offset as i64))
        .collect())
}

/// Reproducible [`RandomSource`] backed by a seeded [`StdRng`].
#[derive(Debug, Clone)]
pub struct SeededRandom {
    seed: u64,
    rng: StdRng,
}

impl SeededRandom {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seed from OS entropy. The chosen seed stays available through [`Self::seed`].
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn draw(&mut self, low: i64, high_exclusive: i64, count: usize) -> Result<Vec<i64>> {
        random_in_range(&mut self.rng, low, high_exclusive, count)
    }
}
