//! Navigation: obstacle queries, path planning, and movement resolution

pub mod grid;
pub mod movement;
pub mod navigator;
pub mod pathfinding;

pub use grid::{cell_to_world, world_to_cell, ArenaBounds, CellBounds, ObstacleField, ObstacleGrid};
pub use movement::SlideState;
pub use navigator::Navigator;
pub use pathfinding::{find_path, PathError};
