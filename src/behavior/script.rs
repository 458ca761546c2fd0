//! Scripted step sequences
//!
//! Boss skills, the sentry's activation wind-up, and death animations all
//! run as scripts: an ordered list of [`Step`]s, each carrying the
//! [`BehaviorPhase`] to advertise, an action, and a resume condition. The
//! runner advances the current step once per tick; steps that finish
//! instantly chain into their successor within the same tick, which is what
//! lets "show final frame" and "roll loot" land on the same moment.
//!
//! Scripts are not preemptible. Whatever interrupts an agent (fear, pause)
//! freezes the script where it stands; it resumes untouched.

use glam::Vec2;
use hecs::Entity;
use smallvec::SmallVec;

use crate::combat::loot;
use crate::core::context::TickContext;
use crate::core::events::{EventQueue, SimEvent, SpawnKind};
use crate::ecs::agent::{Agent, BehaviorPhase, VisualState};
use crate::nav::movement;

/// How a step decides it is finished.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResumeWhen {
    /// Finishes the tick it enters
    Instant,
    /// Finishes after this much time in the step
    Elapsed(f32),
    /// Finishes on proximity to a point, or after a give-up timeout
    Arrival { point: Vec2, timeout: f32 },
}

/// Repeating fire cadence carried by a step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FirePlan {
    /// Seconds between shots
    pub interval: f32,
    cooldown: f32,
}

impl FirePlan {
    /// A plan that fires immediately and then every `interval` seconds.
    #[must_use]
    pub const fn every(interval: f32) -> Self {
        Self {
            interval,
            cooldown: 0.0,
        }
    }
}

/// Where repeating fire is pointed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Aim {
    /// At the target's position when the shot goes off
    Target,
    /// Along a fixed direction
    Along(Vec2),
}

/// One pending spawn of a minion wave.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Telegraph {
    /// Offset from the caster, resolved to a fixed point when the step enters
    pub offset: Vec2,
    /// Absolute spawn point, frozen at cast time
    point: Vec2,
    /// Lead time left before the minion materializes
    remaining: f32,
    spawned: bool,
}

impl Telegraph {
    /// A telegraph at `offset` from the caster with the given lead time.
    #[must_use]
    pub const fn new(offset: Vec2, lead: f32) -> Self {
        Self {
            offset,
            point: Vec2::ZERO,
            remaining: lead,
            spawned: false,
        }
    }
}

/// What a step does while it runs.
#[derive(Debug, Clone, PartialEq)]
pub enum StepAction {
    /// Stand still
    Idle,
    /// Walk toward a point with full collision
    MoveTo { point: Vec2 },
    /// Walk toward a point while firing on a cadence
    MoveToFiring {
        point: Vec2,
        fire: FirePlan,
        aim: Aim,
    },
    /// Stand still and fire on a cadence
    Barrage { fire: FirePlan, aim: Aim },
    /// Fire a single shot at the target when the step enters
    FireOnce,
    /// Fire evenly spaced rays in all directions on a cadence
    RadialBurst {
        rays: u32,
        interval: f32,
        cooldown: f32,
    },
    /// Telegraphed minion wave; completes once every telegraph has spawned
    Wave {
        telegraphs: SmallVec<[Telegraph; 4]>,
    },
    /// Publish one death frame when the step enters
    ShowFrame { index: u8 },
    /// Roll the agent's loot table when the step enters
    RollLoot,
    /// Sentry activation: double health and switch hit feedback
    Activate,
    /// Mark the agent for despawn
    Remove,
}

/// One step of a script.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    /// Phase advertised while this step runs
    pub phase: BehaviorPhase,
    pub action: StepAction,
    pub until: ResumeWhen,
}

impl Step {
    /// Idle in a phase for a fixed time.
    #[must_use]
    pub const fn idle(phase: BehaviorPhase, seconds: f32) -> Self {
        Self {
            phase,
            action: StepAction::Idle,
            until: ResumeWhen::Elapsed(seconds),
        }
    }

    /// Walk to a point, giving up after `timeout` seconds.
    #[must_use]
    pub const fn travel(phase: BehaviorPhase, point: Vec2, timeout: f32) -> Self {
        Self {
            phase,
            action: StepAction::MoveTo { point },
            until: ResumeWhen::Arrival { point, timeout },
        }
    }

    /// Walk to a point while firing every `interval` seconds.
    #[must_use]
    pub const fn travel_firing(
        phase: BehaviorPhase,
        point: Vec2,
        interval: f32,
        aim: Aim,
        timeout: f32,
    ) -> Self {
        Self {
            phase,
            action: StepAction::MoveToFiring {
                point,
                fire: FirePlan::every(interval),
                aim,
            },
            until: ResumeWhen::Arrival { point, timeout },
        }
    }

    /// An action that runs its effect on entry and finishes immediately.
    #[must_use]
    pub const fn instant(phase: BehaviorPhase, action: StepAction) -> Self {
        Self {
            phase,
            action,
            until: ResumeWhen::Instant,
        }
    }
}

/// An ordered step sequence plus its cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct Script {
    steps: Vec<Step>,
    cursor: usize,
    in_step: f32,
    entered: bool,
}

impl Script {
    /// Wrap a step list into a runnable script.
    #[must_use]
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            steps,
            cursor: 0,
            in_step: 0.0,
            entered: false,
        }
    }

    /// Phase of the step currently running, if any.
    #[must_use]
    pub fn current_phase(&self) -> Option<BehaviorPhase> {
        self.steps.get(self.cursor).map(|s| s.phase)
    }

    /// Whether every step has completed.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.cursor >= self.steps.len()
    }
}

/// Build the shared death sequence.
///
/// Frames play back to back; the loot roll chains onto the instant the final
/// frame appears, then the corpse holds before removal. With zero frames the
/// roll happens right away and only the hold remains. `with_loot` is cleared
/// for deaths that must not drop anything.
#[must_use]
pub fn death_script(frames: u8, frame_seconds: f32, hold_seconds: f32, with_loot: bool) -> Script {
    let mut steps = Vec::with_capacity(frames as usize + 3);
    if frames > 0 {
        for i in 0..frames - 1 {
            steps.push(Step {
                phase: BehaviorPhase::Dying,
                action: StepAction::ShowFrame { index: i },
                until: ResumeWhen::Elapsed(frame_seconds),
            });
        }
        steps.push(Step::instant(
            BehaviorPhase::Dying,
            StepAction::ShowFrame { index: frames - 1 },
        ));
    }
    if with_loot {
        steps.push(Step::instant(BehaviorPhase::Dying, StepAction::RollLoot));
    }
    steps.push(Step::idle(BehaviorPhase::Dying, hold_seconds));
    steps.push(Step::instant(BehaviorPhase::Dying, StepAction::Remove));
    Script::new(steps)
}

/// Advance the agent's script by one tick.
///
/// Returns `true` when the script ran to completion this tick; the script
/// slot is cleared and the agent keeps the phase of the last step.
pub fn advance(entity: Entity, agent: &mut Agent, ctx: &mut TickContext<'_>) -> bool {
    let Some(mut script) = agent.script.take() else {
        return false;
    };

    let mut dt_applied = false;
    // Bounded by the step count: each loop turn either finishes a step or
    // breaks.
    let mut budget = script.steps.len() + 1;
    while script.cursor < script.steps.len() && budget > 0 {
        budget -= 1;

        if !script.entered {
            let step = &mut script.steps[script.cursor];
            agent.set_phase(step.phase);
            script.in_step = 0.0;
            script.entered = true;
            enter_step(entity, agent, ctx, &mut step.action);
        }
        if !dt_applied {
            script.in_step += ctx.dt;
            dt_applied = true;
        }

        let in_step = script.in_step;
        let step = &mut script.steps[script.cursor];
        tick_step(entity, agent, ctx, &mut step.action);

        if step_done(agent, ctx, &script.steps[script.cursor], in_step) {
            script.cursor += 1;
            script.entered = false;
            continue;
        }
        break;
    }

    if script.is_finished() {
        true
    } else {
        agent.script = Some(script);
        false
    }
}

fn enter_step(entity: Entity, agent: &mut Agent, ctx: &mut TickContext<'_>, action: &mut StepAction) {
    match action {
        StepAction::ShowFrame { index } => {
            publish_visual(entity, agent, ctx.events, VisualState::DeathFrame(*index));
        }
        StepAction::RollLoot => {
            if let Some(drop) = loot::roll(&agent.loot, ctx.rng) {
                ctx.events.push(SimEvent::SpawnRequested {
                    kind: SpawnKind::from(drop),
                    position: agent.pos,
                });
            }
        }
        StepAction::Activate => {
            agent.max_health *= 2;
            agent.health *= 2;
            agent.hit_style = crate::ecs::agent::HitStyle::Activated;
            ctx.events.push(SimEvent::CueRequested { name: "sentry-activate" });
        }
        StepAction::Remove => {
            agent.removed = true;
        }
        StepAction::FireOnce => {
            fire_at_target(entity, agent, ctx);
        }
        StepAction::Wave { telegraphs } => {
            for t in telegraphs.iter_mut() {
                t.point = agent.pos + t.offset;
                ctx.events.push(SimEvent::SpawnRequested {
                    kind: SpawnKind::Telegraph,
                    position: t.point,
                });
            }
        }
        _ => {}
    }
}

fn tick_step(entity: Entity, agent: &mut Agent, ctx: &mut TickContext<'_>, action: &mut StepAction) {
    match action {
        StepAction::MoveTo { point } => {
            walk_toward(agent, ctx, *point);
        }
        StepAction::MoveToFiring { point, fire, aim } => {
            let aim = *aim;
            walk_toward(agent, ctx, *point);
            tick_fire(entity, agent, ctx, fire, aim);
        }
        StepAction::Barrage { fire, aim } => {
            let aim = *aim;
            tick_fire(entity, agent, ctx, fire, aim);
        }
        StepAction::RadialBurst {
            rays,
            interval,
            cooldown,
        } => {
            *cooldown -= ctx.dt;
            while *cooldown <= 0.0 {
                *cooldown += *interval;
                let rays = *rays;
                for i in 0..rays {
                    let angle = i as f32 * std::f32::consts::TAU / rays as f32;
                    fire_along(entity, agent, ctx, Vec2::from_angle(angle));
                }
            }
        }
        StepAction::Wave { telegraphs } => {
            for t in telegraphs.iter_mut() {
                if t.spawned {
                    continue;
                }
                t.remaining -= ctx.dt;
                if t.remaining <= 0.0 {
                    t.spawned = true;
                    ctx.events.push(SimEvent::SpawnRequested {
                        kind: SpawnKind::Minion,
                        position: t.point,
                    });
                }
            }
        }
        _ => {}
    }
}

fn step_done(agent: &Agent, ctx: &TickContext<'_>, step: &Step, in_step: f32) -> bool {
    // Self-completing actions override the resume condition.
    if let StepAction::Wave { telegraphs } = &step.action {
        return telegraphs.iter().all(|t| t.spawned);
    }
    match step.until {
        ResumeWhen::Instant => true,
        ResumeWhen::Elapsed(seconds) => in_step >= seconds,
        ResumeWhen::Arrival { point, timeout } => {
            let radius = ctx.config.nav.waypoint_radius;
            if agent.pos.distance_squared(point) <= radius * radius {
                return true;
            }
            if in_step >= timeout {
                log::warn!(
                    "{:?} gave up traveling to {point} after {timeout}s (at {})",
                    agent.archetype,
                    agent.pos
                );
                return true;
            }
            false
        }
    }
}

fn walk_toward(agent: &mut Agent, ctx: &mut TickContext<'_>, point: Vec2) {
    let to_point = point - agent.pos;
    let dist = to_point.length();
    if dist < f32::EPSILON {
        return;
    }
    let step = (agent.speed * ctx.dt).min(dist);
    movement::direct_slide(
        ctx.obstacles,
        &ctx.config.nav,
        &mut agent.pos,
        &mut agent.last_dir,
        &mut agent.slide,
        to_point / dist,
        step,
        ctx.dt,
    );
}

fn tick_fire(
    entity: Entity,
    agent: &mut Agent,
    ctx: &mut TickContext<'_>,
    fire: &mut FirePlan,
    aim: Aim,
) {
    fire.cooldown -= ctx.dt;
    while fire.cooldown <= 0.0 {
        fire.cooldown += fire.interval;
        match aim {
            Aim::Target => fire_at_target(entity, agent, ctx),
            Aim::Along(direction) => fire_along(entity, agent, ctx, direction),
        }
    }
}

/// Fire one shot at the current target, if there is one.
pub(crate) fn fire_at_target(entity: Entity, agent: &Agent, ctx: &mut TickContext<'_>) {
    let Some(target) = ctx.target else {
        return;
    };
    let dir = target - agent.pos;
    if dir.length_squared() < f32::EPSILON {
        return;
    }
    fire_along(entity, agent, ctx, dir.normalize());
}

/// Fire one shot along a unit direction.
pub(crate) fn fire_along(entity: Entity, agent: &Agent, ctx: &mut TickContext<'_>, direction: Vec2) {
    ctx.events.push(SimEvent::ProjectileFired {
        agent: entity,
        origin: agent.pos,
        direction,
        damage: agent.attack_damage,
        from_boss: agent.archetype.is_boss(),
    });
}

/// Publish a visual change if it differs from the last published state.
pub(crate) fn publish_visual(
    entity: Entity,
    agent: &mut Agent,
    events: &mut EventQueue,
    state: VisualState,
) {
    if agent.visual != state {
        agent.visual = state;
        events.push(SimEvent::VisualChanged {
            agent: entity,
            state,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::SimConfig;
    use crate::core::events::EventQueue;
    use crate::core::rng::SimRng;
    use crate::ecs::agent::Archetype;
    use crate::nav::{CellBounds, ObstacleGrid};

    struct Fixture {
        grid: ObstacleGrid,
        config: SimConfig,
        events: EventQueue,
        rng: SimRng,
        entity: Entity,
        agent: Agent,
    }

    impl Fixture {
        fn new(archetype: Archetype) -> Self {
            let config = SimConfig::default();
            let mut world = hecs::World::new();
            let agent = Agent::new(archetype, Vec2::ZERO, config.stats_for(archetype));
            Self {
                grid: ObstacleGrid::new(CellBounds::default()),
                config,
                events: EventQueue::new(),
                rng: SimRng::new(11),
                entity: world.spawn(()),
                agent,
            }
        }

        fn tick(&mut self, dt: f32) -> bool {
            let mut ctx = TickContext {
                dt,
                target: Some(Vec2::new(4.0, 0.0)),
                fear: None,
                obstacles: &self.grid,
                config: &self.config,
                events: &mut self.events,
                rng: &mut self.rng,
            };
            advance(self.entity, &mut self.agent, &mut ctx)
        }

        fn drain_events(&mut self) -> Vec<SimEvent> {
            self.events.swap();
            self.events.drain().collect()
        }
    }

    #[test]
    fn test_elapsed_steps_take_their_time() {
        let mut fx = Fixture::new(Archetype::Normal);
        fx.agent.script = Some(Script::new(vec![
            Step::idle(BehaviorPhase::Dying, 0.3),
            Step::instant(BehaviorPhase::Dying, StepAction::Remove),
        ]));

        assert!(!fx.tick(0.1));
        assert!(!fx.tick(0.1));
        assert!(!fx.agent.removed);
        // Third tick finishes the idle and chains into the instant remove.
        assert!(fx.tick(0.1));
        assert!(fx.agent.removed);
        assert!(fx.agent.script.is_none());
    }

    #[test]
    fn test_step_phase_is_advertised() {
        let mut fx = Fixture::new(Archetype::Cowboy);
        fx.agent.script = Some(Script::new(vec![
            Step::idle(BehaviorPhase::PausingAtSide, 0.2),
            Step::idle(BehaviorPhase::ReturningToCover, 0.2),
        ]));

        fx.tick(0.1);
        assert_eq!(fx.agent.phase, BehaviorPhase::PausingAtSide);
        fx.tick(0.1);
        fx.tick(0.1);
        assert_eq!(fx.agent.phase, BehaviorPhase::ReturningToCover);
    }

    #[test]
    fn test_death_script_rolls_loot_with_final_frame() {
        let mut fx = Fixture::new(Archetype::Normal);
        fx.agent.loot.drop_chance = 1.0;
        fx.agent.alive = false;
        fx.agent.script = Some(death_script(3, 0.15, 2.0, true));

        // Frames 0 and 1 each hold 0.15s; no loot while they play.
        for _ in 0..3 {
            fx.tick(0.05);
        }
        let events = fx.drain_events();
        assert!(events.iter().any(
            |e| matches!(e, SimEvent::VisualChanged { state: VisualState::DeathFrame(0), .. })
        ));
        assert!(!events.iter().any(|e| matches!(e, SimEvent::SpawnRequested { .. })));

        // At 0.3s the final frame and the loot roll land together.
        for _ in 0..3 {
            fx.tick(0.05);
        }
        let events = fx.drain_events();
        assert!(events.iter().any(
            |e| matches!(e, SimEvent::VisualChanged { state: VisualState::DeathFrame(2), .. })
        ));
        assert!(
            events.iter().any(|e| matches!(e, SimEvent::SpawnRequested { .. })),
            "loot must roll the moment the final frame shows"
        );
        assert!(!fx.agent.removed, "hold must delay removal");

        // Hold runs 2.0s, then the remove chains in.
        let mut ticks = 0;
        while !fx.tick(0.05) {
            ticks += 1;
            assert!(ticks < 60, "script never finished");
        }
        assert!(fx.agent.removed);
        assert!((0.05 * ticks as f32 - 2.0).abs() < 0.15, "hold was {} ticks", ticks);
    }

    #[test]
    fn test_death_script_without_frames_rolls_immediately() {
        let mut fx = Fixture::new(Archetype::Normal);
        fx.agent.loot.drop_chance = 1.0;
        fx.agent.alive = false;
        fx.agent.script = Some(death_script(0, 0.15, 0.5, true));

        fx.tick(0.1);
        let events = fx.drain_events();
        assert!(events.iter().any(|e| matches!(e, SimEvent::SpawnRequested { .. })));
        assert!(!fx.agent.removed);
    }

    #[test]
    fn test_death_script_loot_suppression() {
        let mut fx = Fixture::new(Archetype::Normal);
        fx.agent.loot.drop_chance = 1.0;
        fx.agent.alive = false;
        fx.agent.script = Some(death_script(2, 0.05, 0.1, false));

        while !fx.tick(0.05) {}
        let events = fx.drain_events();
        assert!(
            !events.iter().any(|e| matches!(e, SimEvent::SpawnRequested { .. })),
            "suppressed death must not drop loot"
        );
        assert!(fx.agent.removed);
    }

    #[test]
    fn test_travel_step_arrives() {
        let mut fx = Fixture::new(Archetype::Cowboy);
        let dest = Vec2::new(2.0, 0.0);
        fx.agent.script = Some(Script::new(vec![Step::travel(
            BehaviorPhase::MovingToEdge,
            dest,
            10.0,
        )]));

        let mut done = false;
        for _ in 0..200 {
            if fx.tick(0.016) {
                done = true;
                break;
            }
        }
        assert!(done, "never arrived");
        assert!(fx.agent.pos.distance(dest) <= fx.config.nav.waypoint_radius + 1e-3);
    }

    #[test]
    fn test_travel_step_times_out_when_blocked() {
        let mut fx = Fixture::new(Archetype::Cowboy);
        // Wall off the destination entirely.
        for y in -8..=8 {
            fx.grid.set_blocked(glam::IVec2::new(2, y), true);
        }
        fx.agent.script = Some(Script::new(vec![Step::travel(
            BehaviorPhase::MovingToEdge,
            Vec2::new(5.0, 0.0),
            0.5,
        )]));

        let mut ticks = 0;
        while !fx.tick(0.1) {
            ticks += 1;
            assert!(ticks < 20, "timeout never fired");
        }
        assert!(fx.agent.pos.x < 2.0, "agent must not cross the wall");
    }

    #[test]
    fn test_wave_spawns_at_frozen_points() {
        let mut fx = Fixture::new(Archetype::Demon);
        let offsets = [Vec2::X, Vec2::NEG_X];
        let telegraphs: SmallVec<[Telegraph; 4]> =
            offsets.iter().map(|&o| Telegraph::new(o * 1.5, 0.2)).collect();
        fx.agent.pos = Vec2::new(3.0, 3.0);
        fx.agent.script = Some(Script::new(vec![Step {
            phase: BehaviorPhase::Skill2Spawning,
            action: StepAction::Wave { telegraphs },
            until: ResumeWhen::Instant,
        }]));

        fx.tick(0.1);
        let events = fx.drain_events();
        let marks: Vec<Vec2> = events
            .iter()
            .filter_map(|e| match e {
                SimEvent::SpawnRequested {
                    kind: SpawnKind::Telegraph,
                    position,
                } => Some(*position),
                _ => None,
            })
            .collect();
        assert_eq!(marks, vec![Vec2::new(4.5, 3.0), Vec2::new(1.5, 3.0)]);

        // Move the caster; spawn points must not follow it.
        fx.agent.pos = Vec2::ZERO;
        let done = fx.tick(0.15);
        assert!(done);
        let events = fx.drain_events();
        let minions: Vec<Vec2> = events
            .iter()
            .filter_map(|e| match e {
                SimEvent::SpawnRequested {
                    kind: SpawnKind::Minion,
                    position,
                } => Some(*position),
                _ => None,
            })
            .collect();
        assert_eq!(minions, vec![Vec2::new(4.5, 3.0), Vec2::new(1.5, 3.0)]);
    }

    #[test]
    fn test_radial_burst_directions_and_cadence() {
        let mut fx = Fixture::new(Archetype::Demon);
        fx.agent.script = Some(Script::new(vec![Step {
            phase: BehaviorPhase::Skill3Shooting,
            action: StepAction::RadialBurst {
                rays: 8,
                interval: 0.3,
                cooldown: 0.0,
            },
            until: ResumeWhen::Elapsed(0.8),
        }]));

        let mut shots = Vec::new();
        for _ in 0..9 {
            fx.tick(0.1);
            for e in fx.drain_events() {
                if let SimEvent::ProjectileFired { direction, from_boss, .. } = e {
                    assert!(from_boss);
                    shots.push(direction);
                }
            }
        }
        // Bursts at 0.0s, 0.3s, 0.6s; the step ends at 0.8s.
        assert_eq!(shots.len(), 24, "three bursts of eight");
        for dir in &shots {
            assert!((dir.length() - 1.0).abs() < 1e-5);
        }
        // First burst covers all eight 45-degree rays.
        let first: Vec<Vec2> = shots[..8].to_vec();
        for i in 0..8 {
            let expected = Vec2::from_angle(i as f32 * std::f32::consts::TAU / 8.0);
            assert!((first[i] - expected).length() < 1e-4);
        }
    }

    #[test]
    fn test_barrage_fires_at_target_on_cadence() {
        let mut fx = Fixture::new(Archetype::Cowboy);
        fx.agent.script = Some(Script::new(vec![Step {
            phase: BehaviorPhase::Skill1Shooting,
            action: StepAction::Barrage {
                fire: FirePlan::every(0.4),
                aim: Aim::Target,
            },
            until: ResumeWhen::Elapsed(1.0),
        }]));

        let mut shots = 0;
        for _ in 0..10 {
            fx.tick(0.1);
            shots += fx
                .drain_events()
                .iter()
                .filter(|e| matches!(e, SimEvent::ProjectileFired { .. }))
                .count();
        }
        // Shots at 0.0, 0.4, 0.8 within the one-second window.
        assert_eq!(shots, 3);
    }

    #[test]
    fn test_activate_doubles_health_and_swaps_hit_style() {
        let mut fx = Fixture::new(Archetype::Sentry);
        fx.agent.health = 25;
        fx.agent.max_health = 40;
        fx.agent.script = Some(Script::new(vec![Step::instant(
            BehaviorPhase::Activated,
            StepAction::Activate,
        )]));

        assert!(fx.tick(0.016));
        assert_eq!(fx.agent.max_health, 80);
        assert_eq!(fx.agent.health, 50);
        assert_eq!(fx.agent.hit_style, crate::ecs::agent::HitStyle::Activated);
        assert_eq!(fx.agent.phase, BehaviorPhase::Activated);
        let events = fx.drain_events();
        assert!(events.iter().any(|e| matches!(e, SimEvent::CueRequested { name: "sentry-activate" })));
    }
}
