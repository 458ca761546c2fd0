//! Headless demo: one arena encounter, logged to stdout
//!
//! A scripted target orbits the arena center while two bosses, a sentry,
//! and a pack of chasers run their behaviors. Once per second the target
//! "hits" whatever is closest to show damage, death, and loot flowing
//! through the event queue, and late in the run a fear window sends
//! everyone scattering. Run with `RUST_LOG=info` (or `debug` for
//! pathfinding and visual chatter).

use arena_core::hecs::Entity;
use arena_core::prelude::*;

const DT: f32 = 1.0 / 60.0;
const ENCOUNTER_SECONDS: f32 = 30.0;

fn build_arena(cells: CellBounds) -> ObstacleGrid {
    let mut grid = ObstacleGrid::new(cells);
    // Two staggered interior walls; the rest is open floor.
    for y in -5..=-1 {
        grid.set_blocked(IVec2::new(-3, y), true);
    }
    for y in 1..=5 {
        grid.set_blocked(IVec2::new(3, y), true);
    }
    grid
}

fn closest_live_agent(sim: &Simulation, to: Vec2) -> Option<Entity> {
    sim.world()
        .query::<&Agent>()
        .iter()
        .filter(|(_, agent)| agent.alive)
        .min_by(|(_, a), (_, b)| {
            a.pos
                .distance_squared(to)
                .partial_cmp(&b.pos.distance_squared(to))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|(entity, _)| entity)
}

fn main() {
    env_logger::init();

    let config = SimConfig::default();
    let grid = build_arena(config.cells);
    let arena = config.arena;
    let mut sim = Simulation::new(config, 0xC0FFEE);

    sim.spawn_agent(Archetype::Cowboy, sim.config().cowboy.cover);
    sim.spawn_agent(Archetype::Demon, Vec2::new(0.0, 5.0));
    sim.spawn_agent(Archetype::Sentry, Vec2::new(-6.0, 6.0));
    sim.spawn_agent(Archetype::Ghost, Vec2::new(6.0, -6.0));
    let mut seeder = SimRng::new(7);
    for _ in 0..3 {
        sim.spawn_agent(Archetype::Normal, arena.random_point(&mut seeder));
    }
    log::info!("encounter starts with {} agents", sim.agent_count());

    let steps = (ENCOUNTER_SECONDS / DT) as u64;
    let fear_on = (20.0 / DT) as u64;
    let fear_off = (24.0 / DT) as u64;
    for step in 0..steps {
        let t = step as f32 * DT;
        let target = Vec2::new((t * 0.45).sin() * 5.0, (t * 0.35).cos() * 5.0);

        if step == fear_on {
            log::info!("fear mode on");
            sim.set_fear(Some(FearMode {
                origin: target,
                suppress_loot: false,
            }));
        }
        if step == fear_off {
            log::info!("fear mode off");
            sim.set_fear(None);
        }

        // One hit per second on whatever is closest to the target.
        if step % 60 == 0 {
            if let Some(victim) = closest_live_agent(&sim, target) {
                sim.apply_damage(victim, 20);
            }
        }

        sim.tick(
            DT,
            FrameInput {
                target: Some(target),
                obstacles: &grid,
            },
        );

        for event in sim.events().iter() {
            match event {
                SimEvent::VisualChanged { agent, state } => {
                    log::debug!("{agent:?} -> {state}");
                }
                SimEvent::CueRequested { name } => log::info!("cue: {name}"),
                SimEvent::ProjectileFired {
                    origin,
                    direction,
                    from_boss,
                    ..
                } => {
                    log::debug!("shot from {origin} along {direction} (boss: {from_boss})");
                }
                SimEvent::SpawnRequested { kind, position } => {
                    log::info!("spawn {kind:?} at {position}");
                }
                SimEvent::AgentDied { agent } => log::info!("{agent:?} died"),
                SimEvent::AgentRemoved { agent } => log::info!("{agent:?} removed"),
                _ => {}
            }
        }
    }

    log::info!(
        "encounter over: {} agents remain after {:.1}s ({} ticks)",
        sim.agent_count(),
        sim.time(),
        sim.tick_count()
    );
}
