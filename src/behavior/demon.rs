//! Demon boss behavior
//!
//! The demon idles through a grace period after spawning, then cycles:
//! think, cast, repeat. The first cast is always the roaming barrage and the
//! second is always the minion waves, so the opening of the fight reads the
//! same every run; from the third cast on the skill is drawn uniformly.
//!
//! - **Skill 1**: travel to the arena-edge midpoint farthest from the
//!   target while firing, hold a barrage there, then travel back to the
//!   spawn point still firing.
//! - **Skill 2**: telegraphed minion waves at the four cardinal offsets
//!   around the boss.
//! - **Skill 3**: a stationary radial bullet barrage.

use glam::Vec2;
use smallvec::SmallVec;

use crate::behavior::script::{
    self, Aim, FirePlan, ResumeWhen, Script, Step, StepAction, Telegraph,
};
use crate::core::config::DemonConfig;
use crate::core::context::TickContext;
use crate::core::rng::SimRng;
use crate::ecs::agent::{Agent, BehaviorPhase, Brain};
use crate::nav::ArenaBounds;

pub(crate) fn update(entity: hecs::Entity, agent: &mut Agent, ctx: &mut TickContext<'_>) {
    if agent.script.is_some() {
        if script::advance(entity, agent, ctx) {
            if let Brain::Demon { casts } = &mut agent.brain {
                *casts += 1;
            }
            agent.set_phase(BehaviorPhase::ChoosingNextSkill);
        }
        return;
    }
    match agent.phase {
        BehaviorPhase::InitialDelay if agent.phase_time >= ctx.config.demon.initial_delay => {
            agent.set_phase(BehaviorPhase::ChoosingNextSkill);
        }
        BehaviorPhase::ChoosingNextSkill if agent.phase_time >= ctx.config.demon.choose_delay => {
            cast(agent, ctx);
        }
        _ => {}
    }
}

fn cast(agent: &mut Agent, ctx: &mut TickContext<'_>) {
    let casts = match agent.brain {
        Brain::Demon { casts } => casts,
        _ => 0,
    };
    // Fixed opening, then uniform.
    let skill = match casts {
        0 => 1,
        1 => 2,
        _ => 1 + ctx.rng.pick_index(3) as u32,
    };
    let cfg = &ctx.config.demon;
    let script = match skill {
        1 => skill1_script(cfg, &ctx.config.arena, agent, ctx.target, ctx.rng),
        2 => skill2_script(cfg),
        _ => skill3_script(cfg),
    };
    log::debug!("demon casts skill {skill} (cast #{casts})");
    agent.script = Some(script);
}

/// Roaming barrage: fire while traveling to the edge midpoint farthest from
/// the target, barrage there for a random duration, then return to spawn
/// still firing.
fn skill1_script(
    cfg: &DemonConfig,
    arena: &ArenaBounds,
    agent: &Agent,
    target: Option<Vec2>,
    rng: &mut SimRng,
) -> Script {
    let anchor = target.unwrap_or(agent.pos);
    let dest = arena
        .edge_midpoints(cfg.midpoint_inset)
        .into_iter()
        .max_by(|a, b| {
            a.distance_squared(anchor)
                .partial_cmp(&b.distance_squared(anchor))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .unwrap_or_else(|| arena.center());
    let barrage = rng.range_f32(cfg.skill1_min_seconds, cfg.skill1_max_seconds);
    Script::new(vec![
        Step::travel_firing(
            BehaviorPhase::Skill1Moving,
            dest,
            cfg.skill1_fire_interval,
            Aim::Target,
            cfg.travel_timeout,
        ),
        Step {
            phase: BehaviorPhase::Skill1Shooting,
            action: StepAction::Barrage {
                fire: FirePlan::every(cfg.skill1_fire_interval),
                aim: Aim::Target,
            },
            until: ResumeWhen::Elapsed(barrage),
        },
        Step::travel_firing(
            BehaviorPhase::Skill1Returning,
            agent.spawn_pos,
            cfg.skill1_fire_interval,
            Aim::Target,
            cfg.travel_timeout,
        ),
    ])
}

/// Telegraphed minion waves at the four cardinal offsets around the boss.
fn skill2_script(cfg: &DemonConfig) -> Script {
    let offsets = [
        Vec2::new(0.0, cfg.skill2_offset),
        Vec2::new(0.0, -cfg.skill2_offset),
        Vec2::new(-cfg.skill2_offset, 0.0),
        Vec2::new(cfg.skill2_offset, 0.0),
    ];
    let mut steps = Vec::with_capacity(cfg.skill2_waves as usize * 2);
    for wave in 0..cfg.skill2_waves {
        let telegraphs: SmallVec<[Telegraph; 4]> = offsets
            .iter()
            .map(|&o| Telegraph::new(o, cfg.skill2_telegraph_seconds))
            .collect();
        steps.push(Step {
            phase: BehaviorPhase::Skill2Spawning,
            action: StepAction::Wave { telegraphs },
            until: ResumeWhen::Instant,
        });
        if wave + 1 < cfg.skill2_waves {
            steps.push(Step::idle(BehaviorPhase::Skill2Spawning, cfg.skill2_wave_gap));
        }
    }
    Script::new(steps)
}

/// Stationary radial barrage.
fn skill3_script(cfg: &DemonConfig) -> Script {
    Script::new(vec![Step {
        phase: BehaviorPhase::Skill3Shooting,
        action: StepAction::RadialBurst {
            rays: cfg.skill3_rays,
            interval: cfg.skill3_interval,
            cooldown: 0.0,
        },
        until: ResumeWhen::Elapsed(cfg.skill3_seconds),
    }])
}
