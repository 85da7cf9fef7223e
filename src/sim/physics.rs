//! Player physics kernel
//!
//! Order within a tick matters:
//! 1. horizontal input, friction, speed clamp
//! 2. jump (only from the ground), then gravity
//! 3. a single integration step
//! 4. world-exit check
//!
//! Enemies and particles move kinematically and never come through here.

use glam::Vec2;

use super::input::InputState;
use super::state::{Facing, Player};
use crate::config::GameConfig;

/// What happened during the player's physics step
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StepEvents {
    /// Feet position at the moment of a jump, for dust particles
    pub jump_origin: Option<Vec2>,
    /// The player dropped below the world
    pub fell_out: bool,
}

/// Advance the player by one tick of input, forces and motion
pub fn step_player(player: &mut Player, input: &InputState, config: &GameConfig) -> StepEvents {
    apply_horizontal_input(player, input, config.player_accel);
    apply_friction(player, config.friction);
    clamp_speed(player, config.player_max_speed);

    let jump_origin = try_jump(player, input, config.jump_impulse);
    apply_gravity(player, config.gravity);
    integrate(player);

    StepEvents {
        jump_origin,
        fell_out: fell_out_of_world(player, config),
    }
}

/// Accelerate in each pressed direction; left+right cancel
pub fn apply_horizontal_input(player: &mut Player, input: &InputState, accel: f32) {
    let axis = input.horizontal_axis();
    player.body.vel.x += axis * accel;
    if axis > 0.0 {
        player.facing = Facing::Right;
    } else if axis < 0.0 {
        player.facing = Facing::Left;
    }
}

/// Exponential decay toward zero, applied on the ground and in the air
#[inline]
pub fn apply_friction(player: &mut Player, friction: f32) {
    player.body.vel.x *= friction;
}

#[inline]
pub fn clamp_speed(player: &mut Player, max_speed: f32) {
    player.body.vel.x = player.body.vel.x.clamp(-max_speed, max_speed);
}

/// Launch upward if grounded; returns the feet position on success
pub fn try_jump(player: &mut Player, input: &InputState, impulse: f32) -> Option<Vec2> {
    if !(input.jump && player.grounded) {
        return None;
    }
    player.body.vel.y = -impulse;
    player.grounded = false;
    Some(player.body.feet())
}

#[inline]
pub fn apply_gravity(player: &mut Player, gravity: f32) {
    player.body.vel.y += gravity;
}

/// Record the pre-motion position, then move
pub fn integrate(player: &mut Player) {
    player.prev_pos = player.body.pos;
    player.body.integrate();
}

pub fn fell_out_of_world(player: &Player, config: &GameConfig) -> bool {
    player.body.pos.y > config.world_height + config.fall_margin
}
