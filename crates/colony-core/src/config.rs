//! The model's configuration bundle.
//!
//! Rates are expressed in hours, the way they are set in the control panel,
//! and converted to ticks through the run's `SimClock` at construction time.
//! Defaults reproduce the control panel's initial slider positions.

use serde::{Deserialize, Serialize};

use crate::{ColonyError, ColonyResult};

/// Smallest grid side length for which a radius-1 Moore neighborhood has
/// eight distinct cells on a torus.
pub const MIN_GRID_SIDE: u32 = 3;

/// Every tunable of the cat colony model.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelParams {
    /// Grid width in lots.  Controls how many blocks are generated.
    pub width: u32,
    /// Grid height in lots (avenue to avenue, inclusive).
    pub height: u32,
    /// Initial number of cats.
    pub num_cats: u32,
    /// Mean hours between a cat's meals.
    pub hunger_rate: f64,
    /// Mean hours a cat stays awake before getting sleepy.
    pub sleep_rate: f64,
    /// Mean hours a nap lasts.
    pub sleep_duration_rate: f64,
    /// Probability that a house ever puts food out.
    pub house_willingness: f64,
    /// Mean hours before a feeding house restocks its bowl.
    pub house_rate: f64,
    /// Mean initial mouse population per restaurant.
    pub initial_mice_pop: f64,
    /// Mean hours between new mice arriving at a restaurant.
    pub mouse_growth_rate: f64,
    /// Hours between policy removals of a random cat.  0 disables culling.
    pub cat_removal_rate: f64,
    /// Per-tick probability that a cat standing on a street is hit by a car.
    pub car_hit_prob: f64,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            width:               20,
            height:              24,
            num_cats:            10,
            hunger_rate:         6.0,
            sleep_rate:          0.75,
            sleep_duration_rate: 1.5,
            house_willingness:   0.2,
            house_rate:          8.0,
            initial_mice_pop:    2.0,
            mouse_growth_rate:   72.0,
            cat_removal_rate:    0.0,
            car_hit_prob:        0.0001,
        }
    }
}

impl ModelParams {
    /// Reject parameter combinations the model cannot run with.
    ///
    /// Probabilities must lie in `[0, 1]`, rates must be positive and finite,
    /// and both grid sides must be at least [`MIN_GRID_SIDE`].
    pub fn validate(&self) -> ColonyResult<()> {
        if self.width < MIN_GRID_SIDE || self.height < MIN_GRID_SIDE {
            return Err(ColonyError::Config(format!(
                "grid {}x{} is smaller than the minimum {MIN_GRID_SIDE}x{MIN_GRID_SIDE}",
                self.width, self.height
            )));
        }

        check_probability("house_willingness", self.house_willingness)?;
        check_probability("car_hit_prob", self.car_hit_prob)?;

        check_positive("hunger_rate", self.hunger_rate)?;
        check_positive("sleep_rate", self.sleep_rate)?;
        check_positive("sleep_duration_rate", self.sleep_duration_rate)?;
        check_positive("house_rate", self.house_rate)?;
        check_positive("mouse_growth_rate", self.mouse_growth_rate)?;

        if !(self.initial_mice_pop.is_finite() && self.initial_mice_pop >= 0.0) {
            return Err(ColonyError::Config(format!(
                "initial_mice_pop must be a non-negative number, got {}",
                self.initial_mice_pop
            )));
        }
        if !(self.cat_removal_rate.is_finite() && self.cat_removal_rate >= 0.0) {
            return Err(ColonyError::Config(format!(
                "cat_removal_rate must be a non-negative number of hours, got {}",
                self.cat_removal_rate
            )));
        }
        Ok(())
    }
}

fn check_probability(name: &str, p: f64) -> ColonyResult<()> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(ColonyError::Config(format!("{name} must be in [0, 1], got {p}")))
    }
}

fn check_positive(name: &str, hours: f64) -> ColonyResult<()> {
    if hours.is_finite() && hours > 0.0 {
        Ok(())
    } else {
        Err(ColonyError::Config(format!("{name} must be a positive number of hours, got {hours}")))
    }
}
