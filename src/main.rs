//! Asteroid Field headless runner
//!
//! Loads settings (optionally from a JSON file given as the first argument),
//! builds a field, and drives it with a scripted pilot for a fixed number of
//! frames, logging what happens. Set `RUST_LOG=debug` for per-tick events.

use std::path::Path;

use asteroid_field::Settings;
use asteroid_field::consts::{MAX_SUBSTEPS, SIM_DT};
use asteroid_field::renderer::field_vertices;
use asteroid_field::sim::{Field, FieldEvent, TickInput, tick};

/// Frames to run at the nominal display rate
const FRAMES: u32 = 600;
/// Nominal display frame time (slightly slower than the sim)
const FRAME_DT: f32 = 1.0 / 50.0;
/// Edge spawn interval in sim ticks
const SPAWN_EVERY: u64 = 90;

/// Scripted pilot: a slow turn with bursts of thrust
fn pilot(time_ticks: u64) -> TickInput {
    TickInput {
        turn: 20.0,
        thrust: if (time_ticks / 120) % 2 == 0 { 1.5 } else { 0.0 },
    }
}

fn run(field: &mut Field) {
    let mut accumulator = 0.0;
    let mut hits = 0u32;

    for _ in 0..FRAMES {
        accumulator += FRAME_DT;
        let mut substeps = 0;
        while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let input = pilot(field.time_ticks);
            for event in tick(field, &input, SIM_DT) {
                match event {
                    FieldEvent::ShipHit { asteroid } => {
                        hits += 1;
                        log::info!("Ship hit by asteroid {}", asteroid);
                    }
                    FieldEvent::AsteroidsCollide { .. } => {}
                    FieldEvent::LeftField { id } => {
                        field.remove(id);
                        log::info!("Asteroid {} left the field", id);
                    }
                }
            }
            if field.time_ticks % SPAWN_EVERY == 0 {
                field.spawn_edge_asteroid();
            }
            accumulator -= SIM_DT;
            substeps += 1;
        }
    }

    log::info!(
        "Done after {} ticks: {} asteroids, {} ship hits, {} vertices in last frame",
        field.time_ticks,
        field.asteroids.len(),
        hits,
        field_vertices(field).len()
    );
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Asteroid Field starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(Path::new(&path)),
        None => Settings::default(),
    };

    let mut field = match Field::new(&settings) {
        Ok(field) => field,
        Err(e) => {
            log::error!("Invalid settings: {}", e);
            std::process::exit(1);
        }
    };
    log::info!("Field initialized with seed: {}", field.seed);

    run(&mut field);
}
