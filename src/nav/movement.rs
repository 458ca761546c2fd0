//! Collision-aware movement policies
//!
//! Movement is resolved per tick against an [`ObstacleField`]: a policy
//! probes the candidate position and only commits it when the probe is
//! clear. Three policies cover every agent in the game:
//!
//! - [`direct_slide`]: full collision with wall sliding, used by walkers
//! - [`nudge`]: light collision with a fractional fallback step, used by
//!   agents that should squeeze past dynamic occupants
//! - [`unobstructed`]: no collision at all, used by phasing agents
//!
//! No policy ever commits a position its own probe reports blocked.

use glam::Vec2;
use smallvec::SmallVec;

use super::grid::ObstacleField;
use crate::core::config::NavConfig;

/// Active wall slide. Held by an agent only while it is actually sliding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideState {
    /// Direction of the current slide
    pub dir: Vec2,
    /// Slide time left before the agent gives up for a tick
    pub remaining: f32,
}

/// Move with full collision and wall sliding.
///
/// Tries the requested direction first. When blocked, tries to slide along
/// one of the two perpendiculars of the last successful direct move; a slide
/// lasts at most `cfg.slide_max_duration` before the agent holds still for a
/// tick and re-engages. Returns `true` when the position changed.
pub fn direct_slide(
    field: &dyn ObstacleField,
    cfg: &NavConfig,
    pos: &mut Vec2,
    last_dir: &mut Vec2,
    slide: &mut Option<SlideState>,
    dir: Vec2,
    step: f32,
    dt: f32,
) -> bool {
    if dir.length_squared() < f32::EPSILON {
        *slide = None;
        return false;
    }
    let dir = dir.normalize();

    let next = *pos + dir * step;
    if !field.is_blocked(next, cfg.move_probe_radius) {
        *pos = next;
        *last_dir = dir;
        *slide = None;
        return true;
    }

    // Blocked head-on. Candidate slide directions: the current slide first
    // so an engaged slide keeps its heading, then both perpendiculars of the
    // last successful direct move.
    let base = if last_dir.length_squared() < f32::EPSILON {
        dir
    } else {
        *last_dir
    };
    let mut candidates: SmallVec<[Vec2; 3]> = SmallVec::new();
    if let Some(s) = slide {
        candidates.push(s.dir);
    }
    candidates.push(base.perp());
    candidates.push(-base.perp());

    for cand in candidates {
        let slid = *pos + cand * step;
        if field.is_blocked(slid, cfg.move_probe_radius) {
            continue;
        }
        match slide {
            Some(s) => {
                s.remaining -= dt;
                if s.remaining <= 0.0 {
                    // Slide window spent: stand still this tick and start
                    // fresh on the next attempt.
                    *slide = None;
                    return false;
                }
                s.dir = cand;
            }
            None => {
                *slide = Some(SlideState {
                    dir: cand,
                    remaining: cfg.slide_max_duration,
                });
            }
        }
        *pos = slid;
        return true;
    }

    // Boxed in on all sides.
    *slide = None;
    false
}

/// Move with light collision: a reduced probe radius and, when the full step
/// is blocked, a fractional step in the same direction. Returns `true` when
/// the position changed.
pub fn nudge(
    field: &dyn ObstacleField,
    cfg: &NavConfig,
    pos: &mut Vec2,
    dir: Vec2,
    step: f32,
) -> bool {
    if dir.length_squared() < f32::EPSILON {
        return false;
    }
    let dir = dir.normalize();

    let next = *pos + dir * step;
    if !field.is_blocked(next, cfg.nudge_probe_radius) {
        *pos = next;
        return true;
    }
    let partial = *pos + dir * step * cfg.nudge_fraction;
    if !field.is_blocked(partial, cfg.nudge_probe_radius) {
        *pos = partial;
        return true;
    }
    false
}

/// Move ignoring all obstacles. Returns `true` when the position changed.
pub fn unobstructed(pos: &mut Vec2, dir: Vec2, step: f32) -> bool {
    if dir.length_squared() < f32::EPSILON {
        return false;
    }
    *pos += dir.normalize() * step;
    true
}
