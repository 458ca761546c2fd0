//! Agent record and behavior vocabulary
//!
//! One [`Agent`] component carries everything a behavior tick needs:
//! kinematics, health, the current [`BehaviorPhase`], navigation state, and
//! the running script if the agent is in a scripted phase. Archetypes share
//! this single record; what differs between them lives in [`Brain`].

use std::fmt;

use glam::Vec2;

use crate::behavior::script::Script;
use crate::combat::loot::LootTable;
use crate::core::config::ArchetypeStats;
use crate::nav::{Navigator, SlideState};

/// The five agent kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Archetype {
    /// Pathfinding chaser with full collision
    Normal,
    /// Straight-line chaser that phases through walls
    Ghost,
    /// Turret that walks to a far point once, then roots and activates
    Sentry,
    /// Boss: cover-anchored skill loops
    Cowboy,
    /// Boss: cyclic caster
    Demon,
}

impl Archetype {
    /// Bosses fire boss-tier projectiles and run scripted skills.
    #[must_use]
    pub const fn is_boss(self) -> bool {
        matches!(self, Self::Cowboy | Self::Demon)
    }

    /// Whether the archetype cannot act without a target position.
    #[must_use]
    pub const fn needs_target(self) -> bool {
        !matches!(self, Self::Sentry)
    }
}

/// Observable tag for what an agent is currently doing.
///
/// Scripted steps carry the tag to advertise; unscripted behaviors set it
/// directly. Presentation reads it, behaviors never branch on another
/// agent's phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BehaviorPhase {
    // ==== Chasers ====
    Chase,

    // ==== Sentry ====
    Approaching,
    Activating,
    Activated,

    // ==== Cowboy ====
    AtCover,
    MovingToEdge,
    MovingAcrossMap,
    PausingAtSide,
    ReturningToCover,
    PeekShooting,

    // ==== Demon ====
    InitialDelay,
    ChoosingNextSkill,
    Skill1Moving,
    Skill1Shooting,
    Skill1Returning,
    Skill2Spawning,
    Skill3Shooting,

    // ==== Shared ====
    Dying,
}

impl BehaviorPhase {
    /// Stable label for logs and observability.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Chase => "chase",
            Self::Approaching => "approaching",
            Self::Activating => "activating",
            Self::Activated => "activated",
            Self::AtCover => "at-cover",
            Self::MovingToEdge => "moving-to-edge",
            Self::MovingAcrossMap => "moving-across-map",
            Self::PausingAtSide => "pausing-at-side",
            Self::ReturningToCover => "returning-to-cover",
            Self::PeekShooting => "peek-shooting",
            Self::InitialDelay => "initial-delay",
            Self::ChoosingNextSkill => "choosing-next-skill",
            Self::Skill1Moving => "skill1-moving",
            Self::Skill1Shooting => "skill1-shooting",
            Self::Skill1Returning => "skill1-returning",
            Self::Skill2Spawning => "skill2-spawning",
            Self::Skill3Shooting => "skill3-shooting",
            Self::Dying => "dying",
        }
    }
}

/// Semantic visual tag published to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualState {
    Idle,
    WalkLeft,
    WalkRight,
    Hit,
    /// Hit feedback for an activated sentry
    HitActivated,
    /// Sentry mid-activation
    Activating,
    /// Activated sentry at rest
    IdleActivated,
    /// One frame of the death sequence, zero-based
    DeathFrame(u8),
}

impl fmt::Display for VisualState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::WalkLeft => write!(f, "walk-left"),
            Self::WalkRight => write!(f, "walk-right"),
            Self::Hit => write!(f, "hit"),
            Self::HitActivated => write!(f, "hit-activated"),
            Self::Activating => write!(f, "activating"),
            Self::IdleActivated => write!(f, "idle-activated"),
            Self::DeathFrame(n) => write!(f, "death-frame-{n}"),
        }
    }
}

/// Which hit-feedback visual an agent shows when damaged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitStyle {
    Base,
    Activated,
}

/// How a sentry's destination sample was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentrySampling {
    /// A point at least the configured distance from the target
    Nominal,
    /// Distance requirement waived after exhausting the attempt budget
    Relaxed,
    /// No target available at all; the spawn position was used
    SpawnFallback,
}

impl SentrySampling {
    /// Stable label for logs and observability.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nominal => "nominal",
            Self::Relaxed => "relaxed",
            Self::SpawnFallback => "spawn-fallback",
        }
    }
}

/// A sentry's chosen destination, fixed at its first tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentryPlan {
    pub dest: Vec2,
    pub sampling: SentrySampling,
}

/// Archetype-private memory.
#[derive(Debug, Clone, PartialEq)]
pub enum Brain {
    /// No memory beyond the shared record
    Simple,
    Sentry {
        /// `None` until the first tick samples a destination
        plan: Option<SentryPlan>,
    },
    Demon {
        /// Completed skill casts, drives the opening rotation
        casts: u32,
    },
}

/// Everything the simulation tracks for one agent.
#[derive(Debug, Clone)]
pub struct Agent {
    pub archetype: Archetype,
    pub pos: Vec2,
    /// Direction of the last successful direct move
    pub last_dir: Vec2,
    pub speed: f32,
    pub health: i32,
    pub max_health: i32,
    pub phase: BehaviorPhase,
    /// Seconds spent in the current phase
    pub phase_time: f32,
    /// Last visual tag published for this agent
    pub visual: VisualState,
    pub hit_style: HitStyle,
    /// Remaining hit-feedback time; movement visuals resume at zero
    pub hit_timer: f32,
    pub navigator: Navigator,
    pub slide: Option<SlideState>,
    pub script: Option<Script>,
    pub brain: Brain,
    pub loot: LootTable,
    pub spawn_pos: Vec2,
    pub alive: bool,
    /// Cleared the instant health reaches zero
    pub collidable: bool,
    pub paused: bool,
    /// Set when a required external reference is missing; permanent
    pub disabled: bool,
    /// Marks the agent for despawn at the end of the tick
    pub removed: bool,
    pub death_frames: u8,
    pub attack_damage: i32,
}

impl Agent {
    /// Build an agent of the given archetype at a position.
    #[must_use]
    pub fn new(archetype: Archetype, pos: Vec2, stats: &ArchetypeStats) -> Self {
        let phase = match archetype {
            Archetype::Normal | Archetype::Ghost => BehaviorPhase::Chase,
            Archetype::Sentry => BehaviorPhase::Approaching,
            Archetype::Cowboy => BehaviorPhase::AtCover,
            Archetype::Demon => BehaviorPhase::InitialDelay,
        };
        let brain = match archetype {
            Archetype::Sentry => Brain::Sentry { plan: None },
            Archetype::Demon => Brain::Demon { casts: 0 },
            _ => Brain::Simple,
        };
        Self {
            archetype,
            pos,
            last_dir: Vec2::ZERO,
            speed: stats.speed,
            health: stats.max_health,
            max_health: stats.max_health,
            phase,
            phase_time: 0.0,
            visual: VisualState::Idle,
            hit_style: HitStyle::Base,
            hit_timer: 0.0,
            navigator: Navigator::new(),
            slide: None,
            script: None,
            brain,
            loot: stats.loot.clone(),
            spawn_pos: pos,
            alive: true,
            collidable: true,
            paused: false,
            disabled: false,
            removed: false,
            death_frames: stats.death_frames,
            attack_damage: stats.attack_damage,
        }
    }

    /// Switch phase and restart the phase clock. No-op when already there.
    pub fn set_phase(&mut self, phase: BehaviorPhase) {
        if self.phase != phase {
            self.phase = phase;
            self.phase_time = 0.0;
        }
    }

    /// Hit-feedback visual for this agent's current style.
    #[must_use]
    pub const fn hit_visual(&self) -> VisualState {
        match self.hit_style {
            HitStyle::Base => VisualState::Hit,
            HitStyle::Activated => VisualState::HitActivated,
        }
    }
}
