//! Damage intake and the transition into death
//!
//! Death is entered exactly once: the agent stops colliding the instant its
//! health runs out, and the rest of its lifetime is the death script playing
//! frames, rolling loot, holding the corpse, and finally marking removal.

use hecs::Entity;

use crate::behavior::script::{self, death_script};
use crate::core::config::SimConfig;
use crate::core::events::{EventQueue, SimEvent};
use crate::ecs::agent::{Agent, BehaviorPhase};

/// Apply a hit. Lethal damage enters death with a loot roll; anything less
/// starts the hit-feedback window.
pub fn apply_damage(
    entity: Entity,
    agent: &mut Agent,
    config: &SimConfig,
    events: &mut EventQueue,
    amount: i32,
) {
    if !agent.alive {
        return;
    }
    agent.health -= amount;
    if agent.health <= 0 {
        enter_death(entity, agent, config, events, true);
    } else {
        agent.hit_timer = config.combat.hit_feedback_seconds;
        script::publish_visual(entity, agent, events, agent.hit_visual());
        events.push(SimEvent::CueRequested { name: "agent-hit" });
    }
}

/// Flip an agent into its death sequence. Idempotent.
pub fn enter_death(
    entity: Entity,
    agent: &mut Agent,
    config: &SimConfig,
    events: &mut EventQueue,
    with_loot: bool,
) {
    if !agent.alive {
        return;
    }
    agent.alive = false;
    agent.collidable = false;
    agent.hit_timer = 0.0;
    agent.health = agent.health.min(0);
    agent.slide = None;
    agent.set_phase(BehaviorPhase::Dying);
    agent.script = Some(death_script(
        agent.death_frames,
        config.combat.death_frame_seconds,
        config.combat.death_hold_seconds,
        with_loot,
    ));
    events.push(SimEvent::AgentDied { agent: entity });
    events.push(SimEvent::CueRequested { name: "agent-death" });
}
