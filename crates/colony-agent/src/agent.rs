//! The closed set of agent kinds.

use std::fmt;

use colony_core::SimRng;
use colony_grid::Terrain;

use crate::{Cat, House, Restaurant};

/// Biological sex of a cat.  Fixed at birth.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Fair coin.
    pub fn random(rng: &mut SimRng) -> Sex {
        if rng.gen_bool(0.5) { Sex::Male } else { Sex::Female }
    }

    pub fn opposite(self) -> Sex {
        match self {
            Sex::Male   => Sex::Female,
            Sex::Female => Sex::Male,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Sex::Male   => "male",
            Sex::Female => "female",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every entity that can occupy a grid cell.
///
/// Terrain markers (`Street`, `Backyard`, `Shop`) carry no state and are never
/// scheduled; they only tell rules what a cell is.  `House` and `Restaurant`
/// mark terrain as well as holding active state.
#[derive(Clone, Debug)]
pub enum Agent {
    Cat(Cat),
    House(House),
    Restaurant(Restaurant),
    Street,
    Backyard,
    Shop,
}

impl Agent {
    /// Static marker for a passive terrain kind.  Houses and restaurants are
    /// active and must be built with their own constructors.
    pub fn marker(terrain: Terrain) -> Option<Agent> {
        match terrain {
            Terrain::Street   => Some(Agent::Street),
            Terrain::Backyard => Some(Agent::Backyard),
            Terrain::Shop     => Some(Agent::Shop),
            Terrain::House | Terrain::Restaurant => None,
        }
    }

    /// The terrain this agent marks, or `None` for a cat.
    pub fn terrain(&self) -> Option<Terrain> {
        match self {
            Agent::Cat(_)        => None,
            Agent::House(_)      => Some(Terrain::House),
            Agent::Restaurant(_) => Some(Terrain::Restaurant),
            Agent::Street        => Some(Terrain::Street),
            Agent::Backyard      => Some(Terrain::Backyard),
            Agent::Shop          => Some(Terrain::Shop),
        }
    }

    /// Whether the scheduler activates this agent every tick.
    pub fn is_scheduled(&self) -> bool {
        matches!(self, Agent::Cat(_) | Agent::House(_) | Agent::Restaurant(_))
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Agent::Cat(_)        => "cat",
            Agent::House(_)      => "house",
            Agent::Restaurant(_) => "restaurant",
            Agent::Street        => "street",
            Agent::Backyard      => "backyard",
            Agent::Shop          => "shop",
        }
    }

    pub fn as_cat(&self) -> Option<&Cat> {
        match self {
            Agent::Cat(cat) => Some(cat),
            _ => None,
        }
    }
}
