//! `CatBehavior`: the colony cat state machine.
//!
//! # Movement priority (awake cats only)
//!
//! 1. Hungry → [`find_food`](CatBehavior::find_food) picks the cell.
//! 2. Not pregnant, with an awake open partner of the other sex within one
//!    cell → pick one at random and join it.
//! 3. Otherwise → a random Moore neighbor.
//!
//! # Consequences (awake cats only, fixed order)
//!
//! | Step    | Trigger                                  | Ends the step |
//! |---------|------------------------------------------|---------------|
//! | Hazard  | standing on a street, `car_hit_prob`     | yes (cat dies) |
//! | Fight   | male sharing a cell with awake males     | yes, if blows are exchanged |
//! | Mating  | a mate was chosen this tick              | no            |
//! | Feeding | food was found this tick                 | no            |

use tracing::debug;

use colony_agent::{Agent, FoodKind, FoundFood, Sex};
use colony_core::{AgentId, GridPos};

use crate::{BehaviorModel, BehaviorResult, CatRules, World};

pub struct CatBehavior {
    pub rules: CatRules,
}

impl CatBehavior {
    pub fn new(rules: CatRules) -> Self {
        Self { rules }
    }

    // ── update_state ──────────────────────────────────────────────────────

    /// Advance every timer by one tick.  No grid access.
    ///
    /// A litter that comes due is queued at `tick + maturity_ticks`.
    pub fn update_state(&self, id: AgentId, world: &mut World) -> BehaviorResult<()> {
        let cat = world.agents.cat_mut(id)?;
        cat.advance_sleep(&mut world.rng);
        cat.advance_hunger();
        if cat.advance_gestation() {
            let litter = world.rng.gen_range(self.rules.litter_min..=self.rules.litter_max);
            let due = world.tick + self.rules.maturity_ticks;
            world.kittens.push(due, litter);
            debug!(cat = %id, litter, %due, "litter queued");
        }
        Ok(())
    }

    // ── move ──────────────────────────────────────────────────────────────

    pub fn move_cat(&self, id: AgentId, world: &mut World) -> BehaviorResult<()> {
        let pos = world.cat_pos(id)?;
        let (hungry, pregnant, sex) = {
            let cat = world.agents.cat(id)?;
            (cat.is_hungry, cat.pregnant, cat.sex)
        };

        let target = if hungry {
            self.find_food(id, pos, world)?
        } else if !pregnant {
            match self.choose_mate(id, sex, pos, world) {
                Some(mate) => {
                    world.agents.cat_mut(id)?.chosen_mate = Some(mate);
                    world.cat_pos(mate)?
                }
                None => wander(pos, world),
            }
        } else {
            wander(pos, world)
        };

        world.grid.move_agent(id, target)?;
        Ok(())
    }

    /// Open partners of the other sex within one cell, one picked uniformly.
    fn choose_mate(&self, id: AgentId, sex: Sex, pos: GridPos, world: &mut World) -> Option<AgentId> {
        let wanted = sex.opposite();
        let candidates: Vec<AgentId> = world
            .grid
            .neighbors(pos, true, true, 1)
            .into_iter()
            .filter(|&other| other != id)
            .filter(|&other| {
                world
                    .agents
                    .get(other)
                    .and_then(Agent::as_cat)
                    .is_some_and(|c| c.sex == wanted && c.is_available_mate())
            })
            .collect();
        world.rng.choose(&candidates).copied()
    }

    // ── find_food ─────────────────────────────────────────────────────────

    /// Where a hungry cat goes this tick.  Always returns a cell.
    ///
    /// Food within one cell (including the cat's own) wins; the first
    /// house with a bowl out or restaurant with mice is taken, scanning
    /// neighborhood cells in grid order.  Restaurants are skipped once the
    /// cat has given up for this hunger episode.
    ///
    /// Failing that, a cat hungry for longer than `approach_after` that has
    /// not given up steps toward the last place it ate; anything else
    /// wanders.  A cat hungry for longer than `give_up_after` then gives up
    /// for the rest of the episode.
    pub fn find_food(&self, id: AgentId, pos: GridPos, world: &mut World) -> BehaviorResult<GridPos> {
        let (give_up, overdue, memory) = {
            let cat = world.agents.cat(id)?;
            (cat.give_up_searching, -cat.ticks_until_hungry, cat.last_known_food)
        };

        if let Some((found, cell)) = self.scan_for_food(pos, give_up, world) {
            world.agents.cat_mut(id)?.found_food = Some(found);
            return Ok(cell);
        }

        let approach = match memory {
            Some(target) if !give_up && overdue >= self.rules.approach_after => {
                Some(closest_cell(pos, target, world))
            }
            _ => None,
        };

        // Takes effect from the next tick; this tick's approach still stands.
        if !give_up && overdue >= self.rules.give_up_after {
            world.agents.cat_mut(id)?.give_up_searching = true;
            debug!(cat = %id, "gave up hunting");
        }

        Ok(match approach {
            Some(cell) => cell,
            None => wander(pos, world),
        })
    }

    fn scan_for_food(&self, pos: GridPos, skip_restaurants: bool, world: &World) -> Option<(FoundFood, GridPos)> {
        for cell in world.grid.neighborhood_cells(pos, true, true, 1) {
            for &source in world.grid.cell(cell) {
                let kind = match world.agents.get(source) {
                    Some(Agent::House(house)) if house.food => FoodKind::House,
                    Some(Agent::Restaurant(r)) if r.has_mice() && !skip_restaurants => FoodKind::Restaurant,
                    _ => continue,
                };
                return Some((FoundFood { source, kind }, cell));
            }
        }
        None
    }

    // ── act ───────────────────────────────────────────────────────────────

    pub fn act(&self, id: AgentId, world: &mut World) -> BehaviorResult<()> {
        if self.hazard(id, world)? {
            return Ok(());
        }
        if self.encounter(id, world)? {
            return Ok(());
        }
        self.mate(id, world)?;
        self.feed(id, world)
    }

    /// Car strike.  Returns `true` if the cat died.
    fn hazard(&self, id: AgentId, world: &mut World) -> BehaviorResult<bool> {
        let pos = world.cat_pos(id)?;
        if !world.is_street(pos) || !world.rng.gen_bool(self.rules.car_hit_prob) {
            return Ok(false);
        }
        world.remove_cat(id)?;
        world.counters.hit += 1;
        debug!(cat = %id, %pos, tick = %world.tick, "cat hit by a car");
        Ok(true)
    }

    /// Male rivalry.  Returns `true` if a fight broke out.
    fn encounter(&self, id: AgentId, world: &mut World) -> BehaviorResult<bool> {
        let (male, aggressiveness) = {
            let cat = world.agents.cat(id)?;
            (cat.is_male(), cat.aggressiveness)
        };
        if !male {
            return Ok(false);
        }

        let pos = world.cat_pos(id)?;
        let mut rivals = Vec::new();
        let mut females_present = false;
        for other in world.cats_at(pos) {
            if other == id {
                continue;
            }
            let cat = world.agents.cat(other)?;
            if !cat.is_awake() {
                continue;
            }
            match cat.sex {
                Sex::Male => rivals.push(other),
                Sex::Female => females_present = true,
            }
        }
        if rivals.is_empty() {
            return Ok(false);
        }

        let meet = 1.0 - 1.0 / (1.0 + rivals.len() as f64);
        if !world.rng.gen_bool(meet) {
            return Ok(false);
        }
        let Some(&rival) = world.rng.choose(&rivals) else {
            return Ok(false);
        };

        let bonus = if females_present { self.rules.female_presence_bonus } else { 0.0 };
        let rival_aggressiveness = world.agents.cat(rival)?.aggressiveness;
        let violence = ((aggressiveness + rival_aggressiveness) / 2.0 + bonus) * self.rules.violence_dampening;
        if !world.rng.gen_bool(violence) {
            return Ok(false);
        }

        let (a, b) = flee_cells(pos, world);
        world.grid.move_agent(id, a)?;
        world.grid.move_agent(rival, b)?;
        world.counters.fights += 1;
        debug!(cat = %id, %rival, %pos, "fight");
        Ok(true)
    }

    fn mate(&self, id: AgentId, world: &mut World) -> BehaviorResult<()> {
        let (mate, sex) = {
            let cat = world.agents.cat(id)?;
            (cat.chosen_mate, cat.sex)
        };
        let Some(mate) = mate else {
            return Ok(());
        };
        if !world.agents.contains(mate) || !world.rng.gen_bool(self.rules.mating_success) {
            return Ok(());
        }
        let mother = match sex {
            Sex::Female => id,
            Sex::Male => mate,
        };
        if world.agents.cat_mut(mother)?.conceive(self.rules.gestation_ticks) {
            debug!(%mother, tick = %world.tick, "pregnancy");
        }
        Ok(())
    }

    fn feed(&self, id: AgentId, world: &mut World) -> BehaviorResult<()> {
        let (found, hunt_ability) = {
            let cat = world.agents.cat(id)?;
            (cat.found_food, cat.hunt_ability)
        };
        let Some(FoundFood { source, kind }) = found else {
            return Ok(());
        };
        let Some(location) = world.grid.position(source) else {
            return Ok(());
        };

        let fed = match kind {
            FoodKind::House => world.agents.house_mut(source)?.take_food(),
            FoodKind::Restaurant => {
                let capture = world.agents.restaurant(source)?.capture_probability;
                let caught = world.rng.gen_bool(hunt_ability * capture)
                    && world.agents.restaurant_mut(source)?.catch_mouse();
                if caught {
                    world.counters.mice_caught += 1;
                }
                caught
            }
        };

        if fed {
            world.agents.cat_mut(id)?.eat(location, &mut world.rng);
        }
        Ok(())
    }
}

impl BehaviorModel for CatBehavior {
    fn step_cat(&self, id: AgentId, world: &mut World) -> BehaviorResult<()> {
        self.update_state(id, world)?;
        if world.agents.cat(id)?.is_asleep {
            return Ok(());
        }
        self.move_cat(id, world)?;
        self.act(id, world)
    }
}

// ── Cell selection helpers ────────────────────────────────────────────────────

/// A uniformly random Moore neighbor of `pos`.
fn wander(pos: GridPos, world: &mut World) -> GridPos {
    let cells = world.grid.neighborhood_cells(pos, true, false, 1);
    world.rng.choose(&cells).copied().unwrap_or(pos)
}

/// The cell within one step of `pos` (staying put included) closest to
/// `target`.  Ties go to the first cell in neighborhood order.
fn closest_cell(pos: GridPos, target: GridPos, world: &World) -> GridPos {
    let mut best = pos;
    let mut best_distance = f64::INFINITY;
    for cell in world.grid.neighborhood_cells(pos, true, true, 1) {
        let d = cell.distance(target);
        if d < best_distance {
            best = cell;
            best_distance = d;
        }
    }
    best
}

/// Two distinct cells for fighting cats to flee to.
///
/// The search ring widens from radius 1 until at least two cells hold no
/// cat or the ring covers the whole grid; two cat-free cells are picked at
/// random.  On a grid so crowded that fewer than two cat-free cells exist
/// anywhere, the two least crowded neighbors are used instead.
fn flee_cells(pos: GridPos, world: &mut World) -> (GridPos, GridPos) {
    let others = world.grid.cell_count().saturating_sub(1);
    let widest = world.grid.width().max(world.grid.height());
    for radius in 1..=widest {
        let ring = world.grid.neighborhood_cells(pos, true, false, radius);
        let whole_grid = ring.len() >= others;
        let empty: Vec<GridPos> = ring
            .into_iter()
            .filter(|&cell| world.cat_count_at(cell) == 0)
            .collect();
        if let Some(pair) = world.rng.choose_two(&empty) {
            return pair;
        }
        if whole_grid {
            break;
        }
    }

    let mut cells = world.grid.neighborhood_cells(pos, true, false, 1);
    cells.sort_by_key(|&cell| world.cat_count_at(cell));
    match cells.as_slice() {
        [a, b, ..] => (*a, *b),
        [a] => (*a, pos),
        [] => (pos, pos),
    }
}
