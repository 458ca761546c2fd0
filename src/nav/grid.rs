//! Obstacle queries and arena geometry
//!
//! The core never owns level geometry. Behaviors consume an [`ObstacleField`]
//! implemented by the surrounding world; [`ObstacleGrid`] is the reference
//! implementation used by the demo binary and the tests.

use glam::{IVec2, Vec2};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Convert a world position to its grid cell (cell centers sit on integer
/// coordinates, so discretization is a plain round).
#[must_use]
pub fn world_to_cell(pos: Vec2) -> IVec2 {
    pos.round().as_ivec2()
}

/// Convert a grid cell back to its world-space center.
#[must_use]
pub fn cell_to_world(cell: IVec2) -> Vec2 {
    cell.as_vec2()
}

/// Inclusive rectangular cell range accepted by the path planner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellBounds {
    /// Lowest cell on both axes
    pub min: IVec2,
    /// Highest cell on both axes
    pub max: IVec2,
}

impl CellBounds {
    /// Create bounds from two inclusive corners.
    #[must_use]
    pub const fn new(min: IVec2, max: IVec2) -> Self {
        Self { min, max }
    }

    /// Check whether a cell lies inside the bounds.
    #[must_use]
    pub fn contains(&self, cell: IVec2) -> bool {
        cell.x >= self.min.x && cell.x <= self.max.x && cell.y >= self.min.y && cell.y <= self.max.y
    }

    /// Number of cells along the x axis.
    #[must_use]
    pub fn width(&self) -> i32 {
        self.max.x - self.min.x + 1
    }

    /// Number of cells along the y axis.
    #[must_use]
    pub fn height(&self) -> i32 {
        self.max.y - self.min.y + 1
    }
}

impl Default for CellBounds {
    fn default() -> Self {
        Self::new(IVec2::splat(-8), IVec2::splat(8))
    }
}

/// World-space extent of the playable arena.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArenaBounds {
    /// Lower-left corner
    pub min: Vec2,
    /// Upper-right corner
    pub max: Vec2,
}

impl ArenaBounds {
    /// Create arena bounds from two corners.
    #[must_use]
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Arena center point.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Check whether a point lies inside the arena.
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }

    /// Midpoints of the four boundary edges, pulled inward by `inset`.
    ///
    /// Order: top, bottom, left, right.
    #[must_use]
    pub fn edge_midpoints(&self, inset: f32) -> [Vec2; 4] {
        let c = self.center();
        [
            Vec2::new(c.x, self.max.y - inset),
            Vec2::new(c.x, self.min.y + inset),
            Vec2::new(self.min.x + inset, c.y),
            Vec2::new(self.max.x - inset, c.y),
        ]
    }

    /// Sample a uniform random point inside the arena.
    pub fn random_point(&self, rng: &mut impl Rng) -> Vec2 {
        Vec2::new(
            rng.gen_range(self.min.x..self.max.x),
            rng.gen_range(self.min.y..self.max.y),
        )
    }

    /// Sample a point just outside one of the four arena sides.
    ///
    /// The side is chosen uniformly; `margin` is the distance past the edge.
    /// Useful for placing newly spawned agents off-screen.
    pub fn random_edge_point(&self, rng: &mut impl Rng, margin: f32) -> Vec2 {
        match rng.gen_range(0..4u8) {
            0 => Vec2::new(rng.gen_range(self.min.x..self.max.x), self.max.y + margin),
            1 => Vec2::new(rng.gen_range(self.min.x..self.max.x), self.min.y - margin),
            2 => Vec2::new(self.min.x - margin, rng.gen_range(self.min.y..self.max.y)),
            _ => Vec2::new(self.max.x + margin, rng.gen_range(self.min.y..self.max.y)),
        }
    }
}

impl Default for ArenaBounds {
    fn default() -> Self {
        Self::new(Vec2::splat(-8.0), Vec2::splat(8.0))
    }
}

/// Static obstacle queries consumed by the core.
///
/// Implementations must answer for any point or cell, including ones outside
/// their own extent (typically by reporting them blocked).
pub trait ObstacleField {
    /// Whether a circle at `point` with the given radius overlaps blocked
    /// geometry.
    fn is_blocked(&self, point: Vec2, radius: f32) -> bool;

    /// Whether a single grid cell is blocked.
    fn is_cell_blocked(&self, cell: IVec2) -> bool;
}

/// A bounded grid of blocked cells.
///
/// Cells outside the bounds always report blocked, which gives the arena a
/// solid border without storing it.
#[derive(Debug, Clone)]
pub struct ObstacleGrid {
    bounds: CellBounds,
    blocked: Vec<bool>,
}

impl ObstacleGrid {
    /// Create a grid with every in-bounds cell open.
    #[must_use]
    pub fn new(bounds: CellBounds) -> Self {
        let len = (bounds.width() * bounds.height()) as usize;
        Self {
            bounds,
            blocked: vec![false; len],
        }
    }

    /// Grid bounds.
    #[must_use]
    pub const fn bounds(&self) -> CellBounds {
        self.bounds
    }

    fn index(&self, cell: IVec2) -> Option<usize> {
        if !self.bounds.contains(cell) {
            return None;
        }
        let local = cell - self.bounds.min;
        Some((local.y * self.bounds.width() + local.x) as usize)
    }

    /// Mark a cell blocked or open. Out-of-bounds cells are ignored.
    pub fn set_blocked(&mut self, cell: IVec2, blocked: bool) {
        if let Some(i) = self.index(cell) {
            self.blocked[i] = blocked;
        }
    }

    /// Block the outermost ring of cells.
    pub fn block_border(&mut self) {
        for x in self.bounds.min.x..=self.bounds.max.x {
            self.set_blocked(IVec2::new(x, self.bounds.min.y), true);
            self.set_blocked(IVec2::new(x, self.bounds.max.y), true);
        }
        for y in self.bounds.min.y..=self.bounds.max.y {
            self.set_blocked(IVec2::new(self.bounds.min.x, y), true);
            self.set_blocked(IVec2::new(self.bounds.max.x, y), true);
        }
    }
}

impl ObstacleField for ObstacleGrid {
    fn is_blocked(&self, point: Vec2, radius: f32) -> bool {
        // A cell spans [c - 0.5, c + 0.5) on each axis, so the probe square
        // overlaps exactly the cells whose rounded coordinates it touches.
        let lo = world_to_cell(point - Vec2::splat(radius));
        let hi = world_to_cell(point + Vec2::splat(radius));
        for y in lo.y..=hi.y {
            for x in lo.x..=hi.x {
                if self.is_cell_blocked(IVec2::new(x, y)) {
                    return true;
                }
            }
        }
        false
    }

    fn is_cell_blocked(&self, cell: IVec2) -> bool {
        match self.index(cell) {
            Some(i) => self.blocked[i],
            None => true,
        }
    }
}
