//! Simulation core
//!
//! The [`Simulation`](sim::Simulation) facade plus the cross-cutting pieces
//! it is built from: the tuning tree, the double-buffered event queue, the
//! seeded RNG, and the per-tick context handed to behaviors.

pub mod config;
pub mod context;
pub mod events;
pub mod rng;
pub mod sim;

pub use config::{ConfigError, SimConfig};
pub use context::{FearMode, FrameInput, TickContext};
pub use events::{EventQueue, SimEvent, SpawnKind};
pub use rng::SimRng;
pub use sim::Simulation;
