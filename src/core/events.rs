//! Outbound event queue
//!
//! The core publishes everything the outside world needs to react to as
//! events: visual changes, audio cues, projectile intents, spawn requests,
//! and lifecycle notices. The queue is double-buffered, so events pushed
//! during tick N are read during tick N+1 and consumers never observe a
//! half-written tick.
//!
//! The core never resolves these itself. Spawning the requested pickup,
//! playing the cue, and moving projectiles are all host concerns.

use std::collections::VecDeque;

use glam::Vec2;
use hecs::Entity;

use crate::combat::loot::{LootDrop, PowerupKind};
use crate::ecs::agent::VisualState;

// ============================================================================
// Event Types
// ============================================================================

/// What a spawn request should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnKind {
    /// A regular enemy summoned by a boss skill
    Minion,
    /// A telegraph marker shown before a minion wave lands
    Telegraph,
    Coin { rare: bool },
    Heart,
    Powerup(PowerupKind),
}

impl From<LootDrop> for SpawnKind {
    fn from(drop: LootDrop) -> Self {
        match drop {
            LootDrop::Coin { rare } => Self::Coin { rare },
            LootDrop::Heart => Self::Heart,
            LootDrop::Powerup(kind) => Self::Powerup(kind),
        }
    }
}

/// Events flowing from the simulation to its host.
///
/// The `#[non_exhaustive]` attribute allows adding new variants without
/// breaking downstream code that uses wildcard patterns.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum SimEvent {
    // -------------------------------------------------------------------------
    // Presentation
    // -------------------------------------------------------------------------
    /// An agent's semantic visual tag changed.
    VisualChanged {
        agent: Entity,
        state: VisualState,
    },

    /// Request to play a named audio cue.
    CueRequested {
        /// Cue identifier, resolved by the host
        name: &'static str,
    },

    // -------------------------------------------------------------------------
    // Combat
    // -------------------------------------------------------------------------
    /// An agent wants a projectile fired. The host owns the projectile.
    ProjectileFired {
        agent: Entity,
        origin: Vec2,
        /// Unit direction of travel
        direction: Vec2,
        damage: i32,
        /// Boss projectiles get different treatment on impact
        from_boss: bool,
    },

    /// The simulation wants something materialized in the world.
    SpawnRequested {
        kind: SpawnKind,
        position: Vec2,
    },

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------
    /// An agent's health reached zero; its death sequence has begun.
    AgentDied {
        agent: Entity,
    },

    /// An agent finished its death sequence and left the world.
    AgentRemoved {
        agent: Entity,
    },
}

// ============================================================================
// Event Queue
// ============================================================================

/// Double-buffered queue of [`SimEvent`]s.
///
/// Events pushed during tick N become readable after the tick-boundary
/// [`swap`](Self::swap), which the simulation performs itself. Hosts read
/// with [`iter`](Self::iter) or take ownership with [`drain`](Self::drain).
#[derive(Debug, Default)]
pub struct EventQueue {
    /// Events being written this tick
    pending: VecDeque<SimEvent>,
    /// Events from the previous tick, ready for processing
    processing: VecDeque<SimEvent>,
}

impl EventQueue {
    /// Default initial capacity for event queues.
    const DEFAULT_CAPACITY: usize = 64;

    /// Create a new event queue with default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Create a new event queue with specified initial capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pending: VecDeque::with_capacity(capacity),
            processing: VecDeque::with_capacity(capacity),
        }
    }

    /// Push an event to be processed next tick.
    #[inline]
    pub fn push(&mut self, event: SimEvent) {
        self.pending.push_back(event);
    }

    /// Swap the pending and processing queues.
    ///
    /// After swapping, `iter()` returns events from the tick that just ran
    /// and `push()` writes to a fresh pending queue.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.pending, &mut self.processing);
        self.pending.clear();
    }

    /// Iterate over events from the last completed tick.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &SimEvent> {
        self.processing.iter()
    }

    /// Drain all events from the last completed tick.
    #[inline]
    pub fn drain(&mut self) -> impl Iterator<Item = SimEvent> + '_ {
        self.processing.drain(..)
    }

    /// Check if there are any events to process.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.processing.is_empty()
    }

    /// Number of events ready for processing.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.processing.len()
    }

    /// Number of events waiting for the next swap.
    #[must_use]
    #[inline]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Clear all events, both pending and processing.
    pub fn clear(&mut self) {
        self.pending.clear();
        self.processing.clear();
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_entity() -> Entity {
        let mut world = hecs::World::new();
        world.spawn(())
    }

    #[test]
    fn test_push_not_visible_before_swap() {
        let mut queue = EventQueue::new();
        queue.push(SimEvent::CueRequested { name: "boss-roar" });
        assert!(queue.is_empty(), "events must not be visible before swap");

        queue.swap();
        assert_eq!(queue.len(), 1);
        let events: Vec<_> = queue.iter().collect();
        assert!(matches!(events[0], SimEvent::CueRequested { name: "boss-roar" }));
    }

    #[test]
    fn test_double_buffer_isolation() {
        let mut queue = EventQueue::new();

        queue.push(SimEvent::CueRequested { name: "first" });
        queue.swap();

        // Written while "first" is being processed.
        queue.push(SimEvent::CueRequested { name: "second" });

        let events: Vec<_> = queue.iter().collect();
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], SimEvent::CueRequested { name: "first" }));

        queue.swap();
        let events: Vec<_> = queue.iter().collect();
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], SimEvent::CueRequested { name: "second" }));
    }

    #[test]
    fn test_drain_consumes() {
        let mut queue = EventQueue::new();
        queue.push(SimEvent::AgentDied { agent: test_entity() });
        queue.push(SimEvent::AgentRemoved { agent: test_entity() });
        queue.swap();

        let events: Vec<_> = queue.drain().collect();
        assert_eq!(events.len(), 2);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_clear_wipes_both_buffers() {
        let mut queue = EventQueue::new();
        queue.push(SimEvent::CueRequested { name: "a" });
        queue.swap();
        queue.push(SimEvent::CueRequested { name: "b" });

        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.pending_count(), 0);
    }

    #[test]
    fn test_loot_drop_to_spawn_kind() {
        assert_eq!(
            SpawnKind::from(LootDrop::Coin { rare: true }),
            SpawnKind::Coin { rare: true }
        );
        assert_eq!(SpawnKind::from(LootDrop::Heart), SpawnKind::Heart);
        assert_eq!(
            SpawnKind::from(LootDrop::Powerup(PowerupKind::Coffee)),
            SpawnKind::Powerup(PowerupKind::Coffee)
        );
    }

    #[test]
    fn test_projectile_event_fields() {
        let event = SimEvent::ProjectileFired {
            agent: test_entity(),
            origin: Vec2::new(1.0, 2.0),
            direction: Vec2::X,
            damage: 1,
            from_boss: true,
        };
        if let SimEvent::ProjectileFired {
            origin,
            direction,
            damage,
            from_boss,
            ..
        } = event
        {
            assert_eq!(origin, Vec2::new(1.0, 2.0));
            assert_eq!(direction, Vec2::X);
            assert_eq!(damage, 1);
            assert!(from_boss);
        } else {
            panic!("Wrong event type");
        }
    }
}
