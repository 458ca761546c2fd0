//! Path following and replan cadence
//!
//! [`Navigator`] owns the bookkeeping between planner calls: the current
//! waypoint list, how long ago it was computed, and whether the agent has
//! been stuck. It never calls the planner itself; behaviors ask
//! [`Navigator::should_replan`] and feed the result back in, which keeps
//! the planner trigger visible at the call site.

use glam::Vec2;

use crate::core::config::NavConfig;

/// Per-agent navigation state.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    path: Vec<Vec2>,
    cursor: usize,
    since_plan: f32,
    stuck_for: f32,
    plans: u32,
}

impl Navigator {
    /// Fresh navigator. The first [`should_replan`](Self::should_replan)
    /// always answers yes.
    #[must_use]
    pub fn new() -> Self {
        Self {
            since_plan: f32::MAX,
            ..Self::default()
        }
    }

    /// Advance the cadence clock. Call once per tick before anything else.
    pub fn begin_tick(&mut self, dt: f32) {
        self.since_plan = (self.since_plan + dt).min(f32::MAX);
    }

    /// Whether the plan is old enough to recompute. Stuck agents replan on a
    /// shorter interval.
    #[must_use]
    pub fn should_replan(&self, cfg: &NavConfig) -> bool {
        let interval = if self.is_stuck(cfg) {
            cfg.replan_interval_stuck
        } else {
            cfg.replan_interval
        };
        self.since_plan >= interval
    }

    /// Install a freshly planned path.
    pub fn record_path(&mut self, path: Vec<Vec2>) {
        self.path = path;
        self.cursor = 0;
        self.since_plan = 0.0;
        self.plans += 1;
    }

    /// Record a failed plan attempt. The old path is discarded so the agent
    /// falls back to direct steering until the next attempt.
    pub fn record_failure(&mut self) {
        self.path.clear();
        self.cursor = 0;
        self.since_plan = 0.0;
        self.plans += 1;
    }

    /// Current waypoint to steer toward, skipping any already within the
    /// arrival radius. `None` once the path is exhausted (or absent).
    pub fn waypoint(&mut self, pos: Vec2, cfg: &NavConfig) -> Option<Vec2> {
        while let Some(&wp) = self.path.get(self.cursor) {
            if pos.distance_squared(wp) <= cfg.waypoint_radius * cfg.waypoint_radius {
                self.cursor += 1;
            } else {
                return Some(wp);
            }
        }
        None
    }

    /// Feed back how far the agent actually moved this tick.
    pub fn note_displacement(&mut self, moved: f32, dt: f32, cfg: &NavConfig) {
        if moved < cfg.stuck_epsilon {
            self.stuck_for += dt;
        } else {
            self.stuck_for = 0.0;
        }
    }

    /// Whether displacement has stayed below the epsilon long enough to
    /// count as stuck.
    #[must_use]
    pub fn is_stuck(&self, cfg: &NavConfig) -> bool {
        self.stuck_for > cfg.stuck_after
    }

    /// Total planner invocations so far, successes and failures alike.
    #[must_use]
    pub const fn plan_count(&self) -> u32 {
        self.plans
    }

    /// Whether an unexhausted path is installed.
    #[must_use]
    pub fn has_path(&self) -> bool {
        self.cursor < self.path.len()
    }
}
