//! Agents and the entity store
//!
//! Built on top of the hecs ECS library.

pub mod agent;
mod world;

pub use agent::{Agent, Archetype, BehaviorPhase, Brain, HitStyle, VisualState};
pub use world::World;
