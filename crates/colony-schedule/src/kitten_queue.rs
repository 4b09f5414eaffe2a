//! `KittenQueue`: litters waiting to join the population.
//!
//! A litter is queued at its maturity tick when the mother gives birth.
//! Two litters maturing on the same tick add up; an entry is never
//! overwritten.

use std::collections::BTreeMap;

use colony_core::Tick;

#[derive(Default, Debug)]
pub struct KittenQueue {
    inner: BTreeMap<Tick, u32>,
    /// Cached total kitten count for O(1) `pending()`.
    total: u64,
}

impl KittenQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `count` kittens to appear at `tick`, adding to any litter
    /// already due then.
    pub fn push(&mut self, tick: Tick, count: u32) {
        if count == 0 {
            return;
        }
        let entry = self.inner.entry(tick).or_insert(0);
        *entry = entry.saturating_add(count);
        self.total += count as u64;
    }

    /// Remove and return the kittens due at exactly `tick` (0 if none).
    pub fn take(&mut self, tick: Tick) -> u32 {
        let count = self.inner.remove(&tick).unwrap_or(0);
        self.total -= count as u64;
        count
    }

    /// Kittens queued across all future ticks.
    pub fn pending(&self) -> u64 {
        self.total
    }

    /// Number of distinct maturity ticks.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
