//! Per-frame simulation tick
//!
//! Advances a [`World`] by exactly one frame. Once the outcome is terminal
//! the world is frozen and further ticks are no-ops.

use super::collision::resolve_player_collisions;
use super::input::InputState;
use super::physics::step_player;
use super::state::{Outcome, World};
use crate::consts::{DUST_COLOR, JUMP_PARTICLES, STOMP_PARTICLES};

/// Advance the world by one tick and report how the run stands
pub fn tick(world: &mut World, input: &InputState) -> Outcome {
    if world.outcome.is_terminal() {
        return world.outcome;
    }

    world.time_ticks += 1;

    // Player physics
    let events = step_player(&mut world.player, input, &world.config);
    if let Some(feet) = events.jump_origin {
        log::debug!("Jump at ({:.0}, {:.0})", feet.x, feet.y);
        world
            .particles
            .spawn_burst(&mut world.rng, feet, DUST_COLOR, JUMP_PARTICLES);
    }

    // Collisions (skipped once the player has left the world)
    if events.fell_out {
        finish(world, Outcome::Lost, "fell out of the world");
    } else {
        let report = resolve_player_collisions(
            &mut world.player,
            &world.platforms,
            &world.enemies,
            &world.goal,
            &world.config,
        );

        for stomp in &report.stomps {
            if let Some(enemy) = world.enemies.iter_mut().find(|e| e.id == stomp.enemy_id) {
                enemy.marked_for_removal = true;
            }
            world.score += world.config.stomp_bonus;
            world.particles.spawn_burst(
                &mut world.rng,
                stomp.center,
                stomp.color,
                STOMP_PARTICLES,
            );
            log::debug!("Stomped enemy {} (score {})", stomp.enemy_id, world.score);
        }

        match report.outcome {
            Outcome::Running => {}
            Outcome::Lost => finish(world, Outcome::Lost, "touched an enemy"),
            Outcome::Won => finish(world, Outcome::Won, "reached the goal"),
        }
    }

    // Enemy patrol, then drop the stomped ones
    for enemy in &mut world.enemies {
        enemy.patrol();
    }
    world.enemies.retain(|e| !e.marked_for_removal);

    world.particles.update(world.config.particle_decay);

    world.camera.follow(world.player.body.pos.x);

    world.outcome
}

fn finish(world: &mut World, outcome: Outcome, reason: &str) {
    world.outcome = outcome;
    log::info!(
        "Run ended {:?} after {} ticks: {} (score {})",
        outcome,
        world.time_ticks,
        reason,
        world.score
    );
}
