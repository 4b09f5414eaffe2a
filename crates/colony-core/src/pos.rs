//! Grid coordinates.
//!
//! `(0, 0)` is the bottom-left cell and `(width - 1, height - 1)` the
//! top-right one.  The bottom avenue therefore sits on `y = 0` and the top
//! avenue on `y = height - 1`.

use serde::{Deserialize, Serialize};

/// A cell coordinate on the simulation grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct GridPos {
    pub x: u32,
    pub y: u32,
}

impl GridPos {
    #[inline]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Plain Euclidean distance between cell coordinates.
    ///
    /// Edge wrapping is deliberately ignored: cats steering back toward a
    /// remembered food source compare raw coordinates.
    pub fn distance(self, other: GridPos) -> f64 {
        let dx = self.x as f64 - other.x as f64;
        let dy = self.y as f64 - other.y as f64;
        (dx * dx + dy * dy).sqrt()
    }
}

impl std::fmt::Display for GridPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(u32, u32)> for GridPos {
    #[inline]
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}
