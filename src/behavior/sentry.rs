//! Sentry behavior: walk far from the target, root, activate
//!
//! A sentry samples its destination exactly once, on its first tick: random
//! arena points are drawn until one keeps the configured distance from the
//! target. When the attempt budget runs out the distance requirement is
//! waived; with no target at all the spawn position serves as destination.
//! Which of the three outcomes happened stays observable on the agent and
//! is logged, so a crowded arena degrades loudly instead of silently.
//!
//! The walk uses the light-collision policy so sentries can squeeze past
//! other agents, and the path is planned a single time; sentries never
//! replan.

use glam::Vec2;

use crate::behavior::script::{self, Script, Step, StepAction};
use crate::core::config::SentryConfig;
use crate::core::context::TickContext;
use crate::ecs::agent::{Agent, BehaviorPhase, Brain, SentryPlan, SentrySampling};
use crate::nav::{movement, pathfinding};

pub(crate) fn update(entity: hecs::Entity, agent: &mut Agent, ctx: &mut TickContext<'_>) {
    if agent.script.is_some() {
        script::advance(entity, agent, ctx);
        return;
    }
    match agent.phase {
        BehaviorPhase::Approaching => approach(agent, ctx),
        // Rooted; damage feedback and visuals are handled elsewhere.
        _ => {}
    }
}

fn approach(agent: &mut Agent, ctx: &mut TickContext<'_>) {
    let plan = ensure_plan(agent, ctx);

    if agent.pos.distance(plan.dest) <= ctx.config.sentry.arrive_radius {
        agent.script = Some(activation_script(&ctx.config.sentry));
        return;
    }

    let desired = agent
        .navigator
        .waypoint(agent.pos, &ctx.config.nav)
        .unwrap_or(plan.dest);
    let to = desired - agent.pos;
    let dist = to.length();
    if dist > f32::EPSILON {
        let step = (agent.speed * ctx.dt).min(dist);
        movement::nudge(ctx.obstacles, &ctx.config.nav, &mut agent.pos, to / dist, step);
    }
}

/// Destination sampling, performed once on the first tick.
fn ensure_plan(agent: &mut Agent, ctx: &mut TickContext<'_>) -> SentryPlan {
    if let Brain::Sentry { plan: Some(plan) } = agent.brain {
        return plan;
    }

    let (dest, sampling) = sample_destination(agent.spawn_pos, ctx);
    match sampling {
        SentrySampling::Nominal => {
            log::debug!("sentry heading to {dest}");
        }
        SentrySampling::Relaxed => {
            log::info!(
                "sentry waived its distance requirement after {} attempts, heading to {dest}",
                ctx.config.sentry.sample_attempts
            );
        }
        SentrySampling::SpawnFallback => {
            log::info!("sentry has no target, holding at its spawn point {dest}");
        }
    }

    // One plan for the whole walk. On failure the sentry just nudges
    // straight at the destination.
    match pathfinding::find_path(ctx.obstacles, ctx.config.cells, &ctx.config.nav, agent.pos, dest) {
        Ok(path) => agent.navigator.record_path(path),
        Err(err) => {
            agent.navigator.record_failure();
            log::debug!("sentry plan to {dest} failed: {err}");
        }
    }

    let plan = SentryPlan { dest, sampling };
    if let Brain::Sentry { plan: slot } = &mut agent.brain {
        *slot = Some(plan);
    }
    plan
}

fn sample_destination(spawn_pos: Vec2, ctx: &mut TickContext<'_>) -> (Vec2, SentrySampling) {
    let Some(target) = ctx.target else {
        return (spawn_pos, SentrySampling::SpawnFallback);
    };
    let min_dist = ctx.config.sentry.min_target_distance;
    for _ in 0..ctx.config.sentry.sample_attempts {
        let p = ctx.config.arena.random_point(ctx.rng);
        if p.distance(target) >= min_dist {
            return (p, SentrySampling::Nominal);
        }
    }
    (ctx.config.arena.random_point(ctx.rng), SentrySampling::Relaxed)
}

fn activation_script(cfg: &SentryConfig) -> Script {
    Script::new(vec![
        Step::idle(BehaviorPhase::Activating, cfg.activation_seconds),
        Step::instant(BehaviorPhase::Activated, StepAction::Activate),
    ])
}
