//! Cumulative event counts since the start of a run.

/// Demographic counters.  Only ever incremented.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    /// Fights that ended with both cats fleeing.
    pub fights:       u64,
    /// Cats killed by cars.
    pub hit:          u64,
    /// Cats removed by the culling policy.
    pub removed:      u64,
    pub mice_caught:  u64,
    /// Kittens that joined the population.
    pub kittens_born: u64,
}
