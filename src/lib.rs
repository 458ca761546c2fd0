//! Deterministic behavior core for a top-down arena shooter
//!
//! This crate provides:
//! - Grid-based pathfinding with a hard expansion budget
//! - Collision-aware movement with wall sliding
//! - Per-archetype agent behaviors, including two scripted bosses
//! - A weighted loot model and the death-to-removal lifecycle
//!
//! Everything runs headless on a fixed tick; the embedding game supplies
//! the target position and obstacle field each frame and consumes the
//! event queue for presentation, spawning, and audio cues.

pub mod behavior;
pub mod combat;
pub mod core;
pub mod ecs;
pub mod nav;

// Re-exports for convenience
pub use glam;
pub use hecs;
pub use log;
pub use rand;

/// Prelude module for common imports
pub mod prelude {
    pub use crate::behavior::script::{Script, Step, StepAction};
    pub use crate::combat::{LootDrop, LootTable, PowerupKind};
    pub use crate::core::{
        EventQueue, FearMode, FrameInput, SimConfig, SimEvent, SimRng, Simulation, SpawnKind,
    };
    pub use crate::ecs::{Agent, Archetype, BehaviorPhase, VisualState, World};
    pub use crate::nav::{ArenaBounds, CellBounds, ObstacleField, ObstacleGrid};
    pub use glam::{IVec2, Vec2};
}
