//! Per-archetype behaviors
//!
//! [`update_agent`] is the single entry point the simulation calls per agent
//! per tick. It settles the cross-cutting order of business once, so the
//! archetype modules only contain what is genuinely different about them:
//!
//! 1. Removed and paused agents do nothing at all.
//! 2. Dead agents only play their death script.
//! 3. Fear preempts every behavior and sends the agent running from the
//!    fear origin; scripts freeze where they stand until fear ends.
//! 4. Otherwise the archetype's own update runs.
//!
//! After the behavior has moved the agent, the movement visual (walk
//! direction, idle, hit flash, activation poses) is derived from what
//! actually happened this tick and published if it changed.

pub mod chase;
pub mod cowboy;
pub mod demon;
pub mod script;
pub mod sentry;

use glam::Vec2;
use hecs::Entity;

use crate::combat::damage;
use crate::core::context::{FearMode, TickContext};
use crate::ecs::agent::{Agent, Archetype, BehaviorPhase, VisualState};
use crate::nav::movement;

/// Run one agent for one tick.
pub(crate) fn update_agent(entity: Entity, agent: &mut Agent, ctx: &mut TickContext<'_>) {
    if agent.removed || agent.paused {
        return;
    }
    if !agent.alive {
        // Only the death script is left to play.
        script::advance(entity, agent, ctx);
        return;
    }
    if agent.disabled {
        return;
    }
    // Fleeing needs no target, so fear keeps even targetless agents moving.
    if ctx.fear.is_none() && agent.archetype.needs_target() && ctx.target.is_none() {
        agent.disabled = true;
        log::error!("{:?} has no target to act on, disabling it", agent.archetype);
        return;
    }

    agent.phase_time += ctx.dt;
    if agent.hit_timer > 0.0 {
        agent.hit_timer = (agent.hit_timer - ctx.dt).max(0.0);
    }

    let before = agent.pos;
    if let Some(fear) = ctx.fear {
        flee(entity, agent, ctx, fear);
    } else {
        match agent.archetype {
            Archetype::Normal => chase::update(agent, ctx),
            Archetype::Ghost => chase::update_ghost(agent, ctx),
            Archetype::Sentry => sentry::update(entity, agent, ctx),
            Archetype::Cowboy => cowboy::update(entity, agent, ctx),
            Archetype::Demon => demon::update(entity, agent, ctx),
        }
    }

    // Fleeing into the fear origin kills; skip the visual pass in that case
    // so the death frames own the visual from here on.
    if agent.alive {
        let delta = agent.pos - before;
        publish_movement_visual(entity, agent, ctx, delta);
    }
}

/// Run straight away from the fear origin; touching it is lethal.
fn flee(entity: Entity, agent: &mut Agent, ctx: &mut TickContext<'_>, fear: FearMode) {
    let away = agent.pos - fear.origin;
    let dist = away.length();
    if dist <= ctx.config.combat.fear_contact_radius {
        damage::enter_death(entity, agent, ctx.config, ctx.events, !fear.suppress_loot);
        return;
    }
    let dir = away / dist;
    let step = agent.speed * ctx.dt;
    match agent.archetype {
        Archetype::Ghost => {
            movement::unobstructed(&mut agent.pos, dir, step);
        }
        _ => {
            movement::direct_slide(
                ctx.obstacles,
                &ctx.config.nav,
                &mut agent.pos,
                &mut agent.last_dir,
                &mut agent.slide,
                dir,
                step,
                ctx.dt,
            );
        }
    }
}

fn publish_movement_visual(
    entity: Entity,
    agent: &mut Agent,
    ctx: &mut TickContext<'_>,
    delta: Vec2,
) {
    let state = if agent.hit_timer > 0.0 {
        agent.hit_visual()
    } else {
        match agent.phase {
            BehaviorPhase::Activating => VisualState::Activating,
            BehaviorPhase::Activated => VisualState::IdleActivated,
            _ if delta.length_squared() > 1e-10 => {
                if delta.x > 0.0 {
                    VisualState::WalkRight
                } else if delta.x < 0.0 {
                    VisualState::WalkLeft
                } else if agent.visual == VisualState::WalkLeft {
                    // Purely vertical movement keeps the current facing.
                    VisualState::WalkLeft
                } else {
                    VisualState::WalkRight
                }
            }
            _ => VisualState::Idle,
        }
    };
    script::publish_visual(entity, agent, ctx.events, state);
}
