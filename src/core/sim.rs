//! Simulation facade
//!
//! [`Simulation`] owns the agent world, the event queue, the seeded RNG, and
//! the tuning tree. The embedding game drives it with [`Simulation::tick`]
//! once per fixed step, handing in that frame's target position and obstacle
//! field, and reads the double-buffered events afterwards. Projectile
//! flight, pickups, and rendering stay on the embedding side; hits come back
//! in through [`Simulation::apply_damage`].
//!
//! Given the same seed, config, and per-tick inputs, a run is fully
//! deterministic.

use glam::Vec2;
use hecs::Entity;
use smallvec::SmallVec;

use crate::behavior;
use crate::combat::damage;
use crate::core::config::SimConfig;
use crate::core::context::{FearMode, FrameInput, TickContext};
use crate::core::events::{EventQueue, SimEvent};
use crate::core::rng::SimRng;
use crate::ecs::agent::{Agent, Archetype};
use crate::ecs::World;

pub struct Simulation {
    world: World,
    events: EventQueue,
    rng: SimRng,
    config: SimConfig,
    fear: Option<FearMode>,
    time: f64,
    tick_count: u64,
}

impl Simulation {
    #[must_use]
    pub fn new(config: SimConfig, seed: u64) -> Self {
        Self {
            world: World::new(),
            events: EventQueue::new(),
            rng: SimRng::new(seed),
            config,
            fear: None,
            time: 0.0,
            tick_count: 0,
        }
    }

    /// Spawn an agent of the given archetype with its configured stats.
    pub fn spawn_agent(&mut self, archetype: Archetype, pos: Vec2) -> Entity {
        let agent = Agent::new(archetype, pos, self.config.stats_for(archetype));
        let entity = self.world.spawn((agent,));
        log::debug!("spawned {archetype:?} at {pos} as {entity:?}");
        entity
    }

    /// Advance every agent by one fixed step.
    ///
    /// Agents marked for removal despawn at the end of the tick, after their
    /// [`SimEvent::AgentRemoved`] has been queued. The event buffers swap
    /// last, so everything this tick produced is readable from
    /// [`Simulation::events`] until the next tick runs.
    pub fn tick(&mut self, dt: f32, input: FrameInput<'_>) {
        let mut ctx = TickContext {
            dt,
            target: input.target,
            fear: self.fear,
            obstacles: input.obstacles,
            config: &self.config,
            events: &mut self.events,
            rng: &mut self.rng,
        };

        let mut removals: SmallVec<[Entity; 4]> = SmallVec::new();
        for (entity, agent) in self.world.query_mut::<&mut Agent>() {
            behavior::update_agent(entity, agent, &mut ctx);
            if agent.removed {
                removals.push(entity);
            }
        }
        for entity in removals {
            ctx.events.push(SimEvent::AgentRemoved { agent: entity });
            if let Err(err) = self.world.despawn(entity) {
                log::warn!("despawning {entity:?} failed: {err}");
            }
        }

        self.time += f64::from(dt);
        self.tick_count += 1;
        self.events.swap();
    }

    /// Apply damage to an agent. Returns false if the entity is gone.
    pub fn apply_damage(&mut self, entity: Entity, amount: i32) -> bool {
        match self.world.get_mut::<Agent>(entity) {
            Ok(mut agent) => {
                damage::apply_damage(entity, &mut agent, &self.config, &mut self.events, amount);
                true
            }
            Err(_) => false,
        }
    }

    /// Kill an agent outright. Returns false if the entity is gone.
    pub fn kill(&mut self, entity: Entity, with_loot: bool) -> bool {
        match self.world.get_mut::<Agent>(entity) {
            Ok(mut agent) => {
                damage::enter_death(entity, &mut agent, &self.config, &mut self.events, with_loot);
                true
            }
            Err(_) => false,
        }
    }

    /// Enable or disable fear mode for every agent.
    pub fn set_fear(&mut self, fear: Option<FearMode>) {
        self.fear = fear;
    }

    #[must_use]
    pub fn fear(&self) -> Option<FearMode> {
        self.fear
    }

    /// Freeze or unfreeze every agent in place.
    pub fn set_paused(&mut self, paused: bool) {
        for (_, agent) in self.world.query_mut::<&mut Agent>() {
            agent.paused = paused;
        }
    }

    /// Events produced by the last completed tick.
    #[must_use]
    pub fn events(&self) -> &EventQueue {
        &self.events
    }

    pub fn events_mut(&mut self) -> &mut EventQueue {
        &mut self.events
    }

    /// Borrow an agent, if the entity is still live.
    #[must_use]
    pub fn agent(&self, entity: Entity) -> Option<hecs::Ref<'_, Agent>> {
        self.world.get::<Agent>(entity).ok()
    }

    /// Number of live agents.
    #[must_use]
    pub fn agent_count(&self) -> usize {
        self.world.query::<&Agent>().iter().count()
    }

    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[must_use]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Simulated seconds since the simulation was created.
    #[must_use]
    pub fn time(&self) -> f64 {
        self.time
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}
