//! Multi-occupancy grid.
//!
//! # Data layout
//!
//! Cells are stored row-major (`y * width + x`), each as a `Vec<AgentId>`
//! holding every agent currently in that cell.  A second map records the
//! cell of every placed agent, so `remove` and `move_agent` never scan the
//! grid.  Agents are referenced by id only; the grid never owns agent data.
//!
//! # Neighborhoods
//!
//! A Moore neighborhood of radius `r` is the `(2r + 1)²` square around a cell;
//! a von Neumann neighborhood keeps only cells within Manhattan distance `r`.
//! On a torus, coordinates wrap, so every cell has a full neighborhood.  When
//! the square is wider than the grid the wrapped cells would repeat; they are
//! reported once.

use std::collections::HashSet;

use colony_core::{AgentId, GridPos, SimRng};
use colony_core::config::MIN_GRID_SIDE;

use crate::{GridError, GridResult};

#[cfg(feature = "fx-hash")]
type PositionMap = rustc_hash::FxHashMap<AgentId, GridPos>;
#[cfg(not(feature = "fx-hash"))]
type PositionMap = std::collections::HashMap<AgentId, GridPos>;

/// A fixed-size 2-D grid whose cells each hold any number of agents.
pub struct MultiGrid {
    width:     u32,
    height:    u32,
    torus:     bool,
    cells:     Vec<Vec<AgentId>>,
    positions: PositionMap,
}

impl MultiGrid {
    /// Create an empty grid.
    ///
    /// Both sides must be at least 3 so that a radius-1 neighborhood never
    /// degenerates; smaller grids are a configuration error.
    pub fn new(width: u32, height: u32, torus: bool) -> GridResult<Self> {
        if width < MIN_GRID_SIDE || height < MIN_GRID_SIDE {
            return Err(GridError::TooSmall { width, height, min: MIN_GRID_SIDE });
        }
        Ok(Self {
            width,
            height,
            torus,
            cells: vec![Vec::new(); width as usize * height as usize],
            positions: PositionMap::default(),
        })
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of agents currently placed on the grid.
    pub fn agent_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn in_bounds(&self, pos: GridPos) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// A uniformly random cell.
    pub fn random_cell(&self, rng: &mut SimRng) -> GridPos {
        GridPos::new(rng.gen_range(0..self.width), rng.gen_range(0..self.height))
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Put `agent` into the cell at `pos`.
    pub fn place(&mut self, agent: AgentId, pos: GridPos) -> GridResult<()> {
        if !self.in_bounds(pos) {
            return Err(GridError::OutOfBounds(pos));
        }
        if self.positions.contains_key(&agent) {
            return Err(GridError::AlreadyPlaced(agent));
        }
        let idx = self.index(pos);
        self.cells[idx].push(agent);
        self.positions.insert(agent, pos);
        Ok(())
    }

    /// Take `agent` off the grid, returning the cell it occupied.
    pub fn remove(&mut self, agent: AgentId) -> GridResult<GridPos> {
        let pos = self.positions.remove(&agent).ok_or(GridError::NotPlaced(agent))?;
        let idx = self.index(pos);
        let cell = &mut self.cells[idx];
        if let Some(i) = cell.iter().position(|&a| a == agent) {
            cell.swap_remove(i);
        }
        Ok(pos)
    }

    /// Relocate `agent` to `pos`.  Moving into the current cell is a no-op.
    pub fn move_agent(&mut self, agent: AgentId, pos: GridPos) -> GridResult<()> {
        if !self.in_bounds(pos) {
            return Err(GridError::OutOfBounds(pos));
        }
        let current = self.position(agent).ok_or(GridError::NotPlaced(agent))?;
        if current == pos {
            return Ok(());
        }
        self.remove(agent)?;
        self.place(agent, pos)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// The cell `agent` occupies, or `None` if it is not placed.
    #[inline]
    pub fn position(&self, agent: AgentId) -> Option<GridPos> {
        self.positions.get(&agent).copied()
    }

    #[inline]
    pub fn contains(&self, agent: AgentId) -> bool {
        self.positions.contains_key(&agent)
    }

    /// Agents in the cell at `pos` (empty slice for out-of-bounds cells).
    pub fn cell(&self, pos: GridPos) -> &[AgentId] {
        if !self.in_bounds(pos) {
            return &[];
        }
        &self.cells[self.index(pos)]
    }

    /// Cells around `pos`.
    ///
    /// - `moore`: 8-connected square when `true`, von Neumann diamond when
    ///   `false`.
    /// - `include_center`: whether `pos` itself is part of the result.
    /// - `radius`: reach in cells (1 for the immediate neighborhood).
    ///
    /// Cells are listed column by column (`dx` outer, `dy` inner), which
    /// makes "first match" scans deterministic.
    pub fn neighborhood_cells(
        &self,
        pos:            GridPos,
        moore:          bool,
        include_center: bool,
        radius:         u32,
    ) -> Vec<GridPos> {
        let r = radius as i64;
        let side = 2 * r + 1;
        let may_repeat = self.torus && (side > self.width as i64 || side > self.height as i64);
        let mut seen: HashSet<GridPos> = HashSet::new();
        let mut out = Vec::with_capacity((side * side) as usize);

        for dx in -r..=r {
            for dy in -r..=r {
                if !moore && dx.abs() + dy.abs() > r {
                    continue;
                }
                if dx == 0 && dy == 0 && !include_center {
                    continue;
                }
                let Some(cell) = self.offset(pos, dx, dy) else {
                    continue;
                };
                if cell == pos && !include_center {
                    continue;
                }
                if may_repeat && !seen.insert(cell) {
                    continue;
                }
                out.push(cell);
            }
        }
        out
    }

    /// Agents in the cells returned by [`neighborhood_cells`](Self::neighborhood_cells).
    pub fn neighbors(
        &self,
        pos:            GridPos,
        moore:          bool,
        include_center: bool,
        radius:         u32,
    ) -> Vec<AgentId> {
        self.neighborhood_cells(pos, moore, include_center, radius)
            .into_iter()
            .flat_map(|cell| self.cell(cell).iter().copied())
            .collect()
    }

    // ── Internals ─────────────────────────────────────────────────────────

    #[inline]
    fn index(&self, pos: GridPos) -> usize {
        pos.y as usize * self.width as usize + pos.x as usize
    }

    fn offset(&self, pos: GridPos, dx: i64, dy: i64) -> Option<GridPos> {
        let x = pos.x as i64 + dx;
        let y = pos.y as i64 + dy;
        if self.torus {
            let x = x.rem_euclid(self.width as i64) as u32;
            let y = y.rem_euclid(self.height as i64) as u32;
            Some(GridPos::new(x, y))
        } else if (0..self.width as i64).contains(&x) && (0..self.height as i64).contains(&y) {
            Some(GridPos::new(x as u32, y as u32))
        } else {
            None
        }
    }
}
