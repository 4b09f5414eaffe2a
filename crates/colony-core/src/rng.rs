//! The run's single pseudo-random source.
//!
//! # Determinism strategy
//!
//! Every stochastic decision in a run (layout draws, personal rate samples,
//! activation order, hazard rolls, litter sizes, …) is drawn from one
//! `SmallRng` seeded from `SimConfig::seed`.  The simulation is strictly
//! single-threaded, so the draw order, and therefore the whole run, is a
//! function of the seed alone.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Poisson};

/// Simulation-level RNG shared by the scheduler and every agent update.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.0);
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.0)
    }

    /// Choose two distinct elements (by position) from a slice.
    /// Returns `None` if the slice has fewer than two elements.
    pub fn choose_two<T: Copy>(&mut self, slice: &[T]) -> Option<(T, T)> {
        if slice.len() < 2 {
            return None;
        }
        let mut picked = slice.choose_multiple(&mut self.0, 2);
        let a = *picked.next()?;
        let b = *picked.next()?;
        Some((a, b))
    }

    /// Draw from a Poisson distribution with the given mean.
    ///
    /// A non-positive (or non-finite) mean yields 0 instead of an error: the
    /// timers fed by this function treat 0 as "fires on the next update".
    pub fn poisson(&mut self, mean: f64) -> i64 {
        if !(mean.is_finite() && mean > 0.0) {
            return 0;
        }
        match Poisson::new(mean) {
            Ok(dist) => {
                let sample: f64 = dist.sample(&mut self.0);
                sample as i64
            }
            Err(_) => 0,
        }
    }

    /// Poisson draw clamped to at least 1: used for personal periods, which
    /// must be a positive number of ticks.
    #[inline]
    pub fn poisson_at_least_one(&mut self, mean: f64) -> i64 {
        self.poisson(mean).max(1)
    }
}
