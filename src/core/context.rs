//! Per-tick context threaded through behaviors

use glam::Vec2;

use crate::core::config::SimConfig;
use crate::core::events::EventQueue;
use crate::core::rng::SimRng;
use crate::nav::ObstacleField;

/// External inputs the host hands the simulation each tick.
pub struct FrameInput<'a> {
    /// Current target position, if the target provider has one
    pub target: Option<Vec2>,
    /// Obstacle queries valid for this tick
    pub obstacles: &'a dyn ObstacleField,
}

/// Global flee override. While set, every living agent runs from the origin
/// instead of its normal behavior.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FearMode {
    /// Point all agents flee from
    pub origin: Vec2,
    /// Whether deaths from touching the origin skip their loot roll
    pub suppress_loot: bool,
}

/// Everything a behavior tick may touch besides the agent itself.
pub struct TickContext<'a> {
    pub dt: f32,
    pub target: Option<Vec2>,
    pub fear: Option<FearMode>,
    pub obstacles: &'a dyn ObstacleField,
    pub config: &'a SimConfig,
    pub events: &'a mut EventQueue,
    pub rng: &'a mut SimRng,
}
