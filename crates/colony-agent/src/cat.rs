//! Cat state.
//!
//! A cat carries three independent timer subsystems:
//!
//! | Axis          | Timer                | Fires                                  |
//! |---------------|----------------------|----------------------------------------|
//! | Sleep         | `ticks_until_sleepy` / `ticks_until_awake` | falls asleep / wakes up |
//! | Hunger        | `ticks_until_hungry` | becomes hungry; keeps counting below 0 |
//! | Reproduction  | `ticks_until_birth`  | litter is due                          |
//!
//! The methods here only advance timers and flip flags.  Anything that
//! touches the grid or other agents lives in `colony-behavior`.
//!
//! `found_food` and `chosen_mate` are valid for the current tick only; they
//! are cleared at the start of every update so a removed agent is never
//! referenced on a later tick.

use colony_core::{AgentId, GridPos, SimRng};

use crate::{AgentRates, Sex};

/// Kind of food source a hungry cat has located.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FoodKind {
    House,
    Restaurant,
}

/// Food located during this tick's search.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FoundFood {
    pub source: AgentId,
    pub kind:   FoodKind,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Cat {
    pub sex: Sex,

    // ── Hunger ────────────────────────────────────────────────────────────
    /// Personal mean ticks between meals.
    pub hunger_period:       i64,
    pub is_hungry:           bool,
    /// Negative while hungry; the more negative, the longer the search.
    pub ticks_until_hungry:  i64,
    pub found_food:          Option<FoundFood>,
    pub last_known_food:     Option<GridPos>,
    pub give_up_searching:   bool,

    // ── Sleep ─────────────────────────────────────────────────────────────
    pub sleepy_period:       i64,
    pub sleep_duration_mean: i64,
    pub is_asleep:           bool,
    pub is_sleepy:           bool,
    pub ticks_until_sleepy:  i64,
    pub ticks_until_awake:   i64,

    // ── Reproduction ──────────────────────────────────────────────────────
    pub pregnant:            bool,
    pub ticks_until_birth:   Option<i64>,
    pub chosen_mate:         Option<AgentId>,
    /// 0 for females.
    pub aggressiveness:      f64,

    pub hunt_ability:        f64,
}

impl Cat {
    /// A fresh, awake, sated adult with personal rates drawn around the
    /// model means.
    pub fn new(sex: Sex, rates: &AgentRates, rng: &mut SimRng) -> Self {
        let hunger_period = rng.poisson_at_least_one(rates.hunger_ticks);
        let sleepy_period = rng.poisson_at_least_one(rates.sleepy_ticks);
        let sleep_duration_mean = rng.poisson_at_least_one(rates.sleep_duration_ticks);
        let ticks_until_hungry = rng.poisson(hunger_period as f64);
        let ticks_until_sleepy = rng.poisson(sleepy_period as f64);
        let hunt_ability: f64 = rng.random();
        let aggressiveness = match sex {
            Sex::Male   => rng.random(),
            Sex::Female => 0.0,
        };

        Self {
            sex,
            hunger_period,
            is_hungry: false,
            ticks_until_hungry,
            found_food: None,
            last_known_food: None,
            give_up_searching: false,
            sleepy_period,
            sleep_duration_mean,
            is_asleep: false,
            is_sleepy: false,
            ticks_until_sleepy,
            ticks_until_awake: 0,
            pregnant: false,
            ticks_until_birth: None,
            chosen_mate: None,
            aggressiveness,
            hunt_ability,
        }
    }

    #[inline]
    pub fn is_male(&self) -> bool {
        self.sex == Sex::Male
    }

    #[inline]
    pub fn is_female(&self) -> bool {
        self.sex == Sex::Female
    }

    #[inline]
    pub fn is_awake(&self) -> bool {
        !self.is_asleep
    }

    /// Awake and not already carrying a litter.
    pub fn is_available_mate(&self) -> bool {
        self.is_awake() && !self.pregnant
    }

    // ── Timer updates ─────────────────────────────────────────────────────

    /// Advance the sleep axis by one tick.
    pub fn advance_sleep(&mut self, rng: &mut SimRng) {
        if self.is_asleep {
            self.ticks_until_awake -= 1;
            if self.ticks_until_awake <= 0 {
                self.is_asleep = false;
                self.is_sleepy = false;
                self.ticks_until_sleepy = rng.poisson(self.sleepy_period as f64);
            }
        } else {
            self.ticks_until_sleepy -= 1;
            if self.ticks_until_sleepy <= 0 {
                self.is_sleepy = true;
                self.is_asleep = true;
                self.ticks_until_awake = rng.poisson(self.sleep_duration_mean as f64);
            }
        }
    }

    /// Advance the hunger axis by one tick and drop last tick's food target.
    pub fn advance_hunger(&mut self) {
        self.found_food = None;
        self.ticks_until_hungry -= 1;
        if self.ticks_until_hungry <= 0 {
            self.is_hungry = true;
        }
    }

    /// Advance gestation by one tick and drop last tick's mate.  Returns
    /// `true` exactly once per pregnancy, on the tick the litter is due;
    /// the pregnancy is cleared at that point.
    pub fn advance_gestation(&mut self) -> bool {
        self.chosen_mate = None;
        let Some(remaining) = self.ticks_until_birth.as_mut() else {
            return false;
        };
        *remaining -= 1;
        if *remaining > 0 {
            return false;
        }
        self.pregnant = false;
        self.ticks_until_birth = None;
        true
    }

    // ── Outcomes ──────────────────────────────────────────────────────────

    /// Start a pregnancy lasting `gestation_ticks`.  No effect on males or
    /// cats that are already pregnant.
    pub fn conceive(&mut self, gestation_ticks: i64) -> bool {
        if !self.is_female() || self.pregnant {
            return false;
        }
        self.pregnant = true;
        self.ticks_until_birth = Some(gestation_ticks);
        true
    }

    /// A successful meal at `location`: hunger cleared, the timer redrawn
    /// around the personal period, the location remembered and give-up mode
    /// left.
    pub fn eat(&mut self, location: GridPos, rng: &mut SimRng) {
        self.is_hungry = false;
        self.ticks_until_hungry = rng.poisson(self.hunger_period as f64);
        self.last_known_food = Some(location);
        self.give_up_searching = false;
    }
}
