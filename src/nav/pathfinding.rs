//! Bounded A* path planning
//!
//! Plans 4-connected routes between grid cells with uniform step cost and a
//! Manhattan heuristic. The search is budgeted: it expands at most a fixed
//! number of nodes per request and reports failure instead of stalling the
//! tick, so a single bad request can never eat the frame.
//!
//! Ties on f-cost break toward the lowest heuristic, then insertion order.
//! On open ground this makes the search march straight at the goal instead
//! of flooding the equal-cost plateau, which is what keeps ordinary requests
//! far under the budget.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;

use glam::{IVec2, Vec2};
use rustc_hash::FxHashMap;

use super::grid::{cell_to_world, world_to_cell, CellBounds, ObstacleField};
use crate::core::config::NavConfig;

/// Why a plan request produced no path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// An endpoint's cell lies outside the planner bounds.
    OutOfBounds,
    /// The frontier emptied before reaching the goal.
    Unreachable,
    /// The node budget ran out before reaching the goal.
    BudgetExhausted,
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds => write!(f, "endpoint outside planner bounds"),
            Self::Unreachable => write!(f, "goal unreachable"),
            Self::BudgetExhausted => write!(f, "expansion budget exhausted"),
        }
    }
}

impl std::error::Error for PathError {}

/// Open-list entry. Ordered as a min-heap on (f, h, seq) so that pops are
/// deterministic for identical inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OpenNode {
    f: u32,
    h: u32,
    g: u32,
    seq: u32,
    cell: IVec2,
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn manhattan(a: IVec2, b: IVec2) -> u32 {
    ((a.x - b.x).abs() + (a.y - b.y).abs()) as u32
}

/// Plan a path from `start` to `goal` across `field`.
///
/// Both endpoints are snapped to their cells first. On success the returned
/// waypoints are cell centers, begin at the start cell, and end at the goal
/// cell; consecutive waypoints are always 4-adjacent.
pub fn find_path(
    field: &dyn ObstacleField,
    bounds: CellBounds,
    cfg: &NavConfig,
    start: Vec2,
    goal: Vec2,
) -> Result<Vec<Vec2>, PathError> {
    let start_cell = world_to_cell(start);
    let goal_cell = world_to_cell(goal);

    if !bounds.contains(start_cell) || !bounds.contains(goal_cell) {
        return Err(PathError::OutOfBounds);
    }
    if start_cell == goal_cell {
        return Ok(vec![cell_to_world(start_cell)]);
    }

    let mut open = BinaryHeap::new();
    let mut came_from: FxHashMap<IVec2, IVec2> = FxHashMap::default();
    let mut g_score: FxHashMap<IVec2, u32> = FxHashMap::default();
    let mut seq = 0u32;
    let mut expanded = 0u32;

    let h0 = manhattan(start_cell, goal_cell);
    g_score.insert(start_cell, 0);
    open.push(OpenNode {
        f: h0,
        h: h0,
        g: 0,
        seq,
        cell: start_cell,
    });

    while let Some(node) = open.pop() {
        // A cheaper route to this cell was pushed after this entry.
        if node.g > g_score.get(&node.cell).copied().unwrap_or(u32::MAX) {
            continue;
        }
        if node.cell == goal_cell {
            return Ok(reconstruct_path(&came_from, node.cell));
        }
        expanded += 1;
        if expanded > cfg.expansion_budget {
            return Err(PathError::BudgetExhausted);
        }

        for dir in [IVec2::X, IVec2::NEG_X, IVec2::Y, IVec2::NEG_Y] {
            let next = node.cell + dir;
            if !bounds.contains(next) {
                continue;
            }
            if field.is_blocked(cell_to_world(next), cfg.path_probe_radius) {
                continue;
            }
            let tentative = node.g + 1;
            if tentative < g_score.get(&next).copied().unwrap_or(u32::MAX) {
                came_from.insert(next, node.cell);
                g_score.insert(next, tentative);
                let h = manhattan(next, goal_cell);
                seq += 1;
                open.push(OpenNode {
                    f: tentative + h,
                    h,
                    g: tentative,
                    seq,
                    cell: next,
                });
            }
        }
    }

    Err(PathError::Unreachable)
}

fn reconstruct_path(came_from: &FxHashMap<IVec2, IVec2>, end: IVec2) -> Vec<Vec2> {
    let mut path = vec![cell_to_world(end)];
    let mut current = end;
    while let Some(&prev) = came_from.get(&current) {
        path.push(cell_to_world(prev));
        current = prev;
    }
    path.reverse();
    path
}
