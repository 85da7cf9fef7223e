//! Super Web Bros entry point
//!
//! Native builds run a headless demo: an autopilot walks a generated level
//! and the outcome is logged. Usage: `super-web-bros [easy|medium|hard] [seed]`

#[cfg(not(target_arch = "wasm32"))]
use super_web_bros::{
    Difficulty, GameConfig,
    renderer::build_scene,
    sim::{World, autopilot},
};

/// Give up on the demo after this many ticks (~3 minutes at 60 Hz)
#[cfg(not(target_arch = "wasm32"))]
const MAX_DEMO_TICKS: u64 = 60 * 60 * 3;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let difficulty = args
        .next()
        .and_then(|s| Difficulty::from_str(&s))
        .unwrap_or_default();
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(0x5EED);

    log::info!("Super Web Bros (native) starting: {} seed {}", difficulty.as_str(), seed);

    let mut world = match World::start_level(difficulty, seed, GameConfig::default()) {
        Ok(world) => world,
        Err(e) => {
            log::error!("Failed to load level: {}", e);
            std::process::exit(1);
        }
    };

    while !world.outcome.is_terminal() && world.time_ticks < MAX_DEMO_TICKS {
        let input = autopilot::walk_right(&world);
        world.tick(&input);

        if world.time_ticks % 60 == 0 {
            let frame = build_scene(&world.snapshot(), &world.config);
            log::debug!(
                "tick {}: player x={:.0} camera={:.0} score={} ({} vertices)",
                world.time_ticks,
                world.player.body.pos.x,
                world.camera.offset_x,
                world.score,
                frame.len()
            );
        }
    }

    println!(
        "{:?} after {} ticks, score {}",
        world.outcome, world.time_ticks, world.score
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Web hosts drive `World::tick` from requestAnimationFrame themselves
}
