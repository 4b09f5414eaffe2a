//! City block layout.
//!
//! # Scale
//!
//! One cell is one house lot.  A street (sidewalks included) is about a lot
//! wide, as is the strip of backyards between two rows of houses, so a block
//! reads `street | house | backyard | house` across four columns and then
//! repeats.
//!
//! The bottom and top rows are avenues lined with shops and restaurants; the
//! avenue cell in every fourth column is the cross street itself.
//!
//! ```text
//! y = h-1   S R R s S R s R S …     (avenue, random shop/restaurant mix)
//! y = 1..   S H B H S H B H S …     (residential rows)
//! y = 0     S s R R S R R R S …     (avenue, drawn independently)
//! ```

use std::collections::BTreeMap;

use colony_core::{GridPos, SimRng};

use crate::{GridError, GridResult};

/// Residential column cycle.
const RESIDENTIAL_CYCLE: [Terrain; 4] = [Terrain::Street, Terrain::House, Terrain::Backyard, Terrain::House];

/// Avenue lot draw: restaurants are twice as likely as shops.
const AVENUE_LOTS: [Terrain; 3] = [Terrain::Shop, Terrain::Restaurant, Terrain::Restaurant];

/// What a cell is.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Terrain {
    Street,
    House,
    Backyard,
    Shop,
    Restaurant,
}

impl Terrain {
    /// Human-readable label, useful for logs and CSV columns.
    pub fn as_str(self) -> &'static str {
        match self {
            Terrain::Street     => "street",
            Terrain::House      => "house",
            Terrain::Backyard   => "backyard",
            Terrain::Shop       => "shop",
            Terrain::Restaurant => "restaurant",
        }
    }
}

impl std::fmt::Display for Terrain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terrain kind → cells of that kind.  Computed once per model.
#[derive(Clone, Debug, Default)]
pub struct Layout {
    cells: BTreeMap<Terrain, Vec<GridPos>>,
}

impl Layout {
    /// Cells assigned to `terrain`, in generation order.
    pub fn cells_of(&self, terrain: Terrain) -> &[GridPos] {
        self.cells.get(&terrain).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate `(terrain, cell)` pairs for every cell on the grid.
    pub fn iter(&self) -> impl Iterator<Item = (Terrain, GridPos)> + '_ {
        self.cells
            .iter()
            .flat_map(|(&terrain, cells)| cells.iter().map(move |&pos| (terrain, pos)))
    }

    /// Total number of assigned cells (equals `width * height`).
    pub fn len(&self) -> usize {
        self.cells.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push(&mut self, terrain: Terrain, pos: GridPos) {
        self.cells.entry(terrain).or_default().push(pos);
    }
}

/// Assign a terrain kind to every cell of a `width × height` grid.
///
/// The block structure is fixed; only the avenue shop/restaurant mix is
/// random.  For each column the bottom avenue lot is drawn before the top
/// one.
pub fn generate_layout(width: u32, height: u32, rng: &mut SimRng) -> GridResult<Layout> {
    if width == 0 || height < 2 {
        return Err(GridError::TooSmall { width, height, min: 2 });
    }

    let mut layout = Layout::default();

    // Avenue lots
    for x in 0..width {
        let bottom = avenue_lot(x, rng);
        let top = avenue_lot(x, rng);
        layout.push(bottom, GridPos::new(x, 0));
        layout.push(top, GridPos::new(x, height - 1));
    }

    // Residential rows
    for x in 0..width {
        let terrain = RESIDENTIAL_CYCLE[x as usize % RESIDENTIAL_CYCLE.len()];
        for y in 1..height - 1 {
            layout.push(terrain, GridPos::new(x, y));
        }
    }

    Ok(layout)
}

fn avenue_lot(x: u32, rng: &mut SimRng) -> Terrain {
    if x % 4 == 0 {
        Terrain::Street
    } else {
        rng.choose(&AVENUE_LOTS).copied().unwrap_or(Terrain::Restaurant)
    }
}
