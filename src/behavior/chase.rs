//! Chasing behaviors for the basic walkers
//!
//! Normal agents plan with A* on a cadence and walk the waypoints with full
//! collision; when planning fails they steer straight at the target until
//! the next attempt. Ghosts skip all of it and drift through geometry.

use crate::core::context::TickContext;
use crate::ecs::agent::Agent;
use crate::nav::{movement, pathfinding};

/// Path-following chase with full collision.
pub(crate) fn update(agent: &mut Agent, ctx: &mut TickContext<'_>) {
    let Some(target) = ctx.target else {
        return;
    };

    agent.navigator.begin_tick(ctx.dt);
    if agent.navigator.should_replan(&ctx.config.nav) {
        match pathfinding::find_path(ctx.obstacles, ctx.config.cells, &ctx.config.nav, agent.pos, target) {
            Ok(path) => agent.navigator.record_path(path),
            Err(err) => {
                agent.navigator.record_failure();
                log::debug!("chase plan from {} failed: {err}", agent.pos);
            }
        }
    }

    // Fall back to straight pursuit whenever no usable path is left.
    let desired = agent
        .navigator
        .waypoint(agent.pos, &ctx.config.nav)
        .unwrap_or(target);

    let before = agent.pos;
    let to = desired - agent.pos;
    let dist = to.length();
    if dist > f32::EPSILON {
        let step = (agent.speed * ctx.dt).min(dist);
        movement::direct_slide(
            ctx.obstacles,
            &ctx.config.nav,
            &mut agent.pos,
            &mut agent.last_dir,
            &mut agent.slide,
            to / dist,
            step,
            ctx.dt,
        );
    }
    agent
        .navigator
        .note_displacement(agent.pos.distance(before), ctx.dt, &ctx.config.nav);
}

/// Straight-line chase ignoring all obstacles.
pub(crate) fn update_ghost(agent: &mut Agent, ctx: &mut TickContext<'_>) {
    let Some(target) = ctx.target else {
        return;
    };
    let to = target - agent.pos;
    let dist = to.length();
    if dist < f32::EPSILON {
        return;
    }
    let step = (agent.speed * ctx.dt).min(dist);
    movement::unobstructed(&mut agent.pos, to / dist, step);
}
