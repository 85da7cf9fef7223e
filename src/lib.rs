//! Super Web Bros - a side-scrolling platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, level generation)
//! - `renderer`: Camera-relative draw lists for whatever host draws the frame
//! - `config`: Data-driven tuning and difficulty presets
//! - `error`: Load-time configuration errors

pub mod config;
pub mod error;
pub mod renderer;
pub mod sim;

pub use config::{Difficulty, GameConfig, LevelSpec};
pub use error::ConfigError;

use glam::Vec2;

/// Linear RGBA color, each channel in 0-1
pub type Rgba = [f32; 4];

/// Game configuration constants
pub mod consts {
    /// Logical world dimensions (pixels)
    pub const WORLD_WIDTH: f32 = 1280.0;
    pub const WORLD_HEIGHT: f32 = 720.0;
    /// How far below the world the player may fall before the run is lost
    pub const FALL_MARGIN: f32 = 100.0;

    /// Player movement (pixels per tick)
    pub const GRAVITY: f32 = 3.0;
    pub const FRICTION: f32 = 0.8;
    pub const PLAYER_ACCEL: f32 = 4.0;
    pub const PLAYER_MAX_SPEED: f32 = 35.0;
    pub const JUMP_IMPULSE: f32 = 25.0;

    /// Player spawn point and proportions (height is a fraction of world height)
    pub const PLAYER_SPAWN_X: f32 = 100.0;
    pub const PLAYER_SPAWN_Y: f32 = 100.0;
    pub const PLAYER_HEIGHT_FRACTION: f32 = 0.11;
    pub const PLAYER_ASPECT: f32 = 0.7;

    /// Enemy proportions and patrol speed
    pub const ENEMY_HEIGHT_FRACTION: f32 = 0.08;
    pub const ENEMY_ASPECT: f32 = 0.6;
    pub const ENEMY_SPEED: f32 = 2.0;
    pub const ENEMY_COLOR: [f32; 4] = [0.545, 0.0, 0.0, 1.0]; // #8B0000
    /// Enemies spawn this far above the top of their platform
    pub const ENEMY_SPAWN_LIFT: f32 = 50.0;

    /// Stomping
    pub const STOMP_BONUS: u64 = 100;
    /// Fraction of enemy height the player's prior foot must be above
    pub const STOMP_THRESHOLD: f32 = 0.5;

    /// Level layout
    pub const GROUND_HEIGHT: f32 = 60.0;
    pub const PLATFORM_THICKNESS: f32 = 40.0;
    pub const LEVEL_START_X: f32 = 600.0;
    pub const MIN_GAP: f32 = 50.0;
    pub const MIN_PLATFORM_WIDTH: f32 = 100.0;
    pub const MAX_PLATFORM_WIDTH: f32 = 400.0;
    /// Vertical band for raised platform tops (highest, lowest)
    pub const PLATFORM_TOP_HIGH: f32 = 370.0;
    pub const PLATFORM_TOP_LOW: f32 = 530.0;
    pub const ENEMY_SPAWN_CHANCE: f64 = 0.4;
    /// Longest course the generator will lay out, in platform segments
    pub const MAX_LEVEL_SEGMENTS: u32 = 10_000;

    /// Goal flag and the landing pad beneath it
    pub const GOAL_OFFSET: f32 = 200.0;
    pub const GOAL_WIDTH: f32 = 60.0;
    pub const GOAL_HEIGHT: f32 = 120.0;
    pub const GOAL_LIFT: f32 = 180.0;
    pub const GOAL_PAD_WIDTH: f32 = 500.0;

    /// Camera follows with the player 30% in from the left edge
    pub const CAMERA_LEAD: f32 = 0.3;
    pub const CAMERA_SMOOTHING: f32 = 0.1;

    /// Particles
    pub const PARTICLE_DECAY: f32 = 0.05;
    pub const PARTICLE_SPREAD: f32 = 3.0;
    pub const PARTICLE_MIN_SIZE: f32 = 2.0;
    pub const PARTICLE_MAX_SIZE: f32 = 7.0;
    pub const DUST_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const JUMP_PARTICLES: usize = 5;
    pub const STOMP_PARTICLES: usize = 10;
    pub const MAX_PARTICLES: usize = 256;

    /// Input (tap-to-jump pulse is ~100ms at 60 Hz)
    pub const TAP_JUMP_TICKS: u32 = 6;
    pub const TAP_ZONE: f32 = 0.8;
    pub const TILT_THRESHOLD: f32 = 10.0;

    /// Slack for edge comparisons after f32 snapping
    pub const CONTACT_EPSILON: f32 = 1e-3;
}

/// Strict AABB overlap test (touching edges do not overlap)
#[inline]
pub fn rects_overlap(a_pos: Vec2, a_size: Vec2, b_pos: Vec2, b_size: Vec2) -> bool {
    a_pos.x < b_pos.x + b_size.x
        && a_pos.x + a_size.x > b_pos.x
        && a_pos.y < b_pos.y + b_size.y
        && a_pos.y + a_size.y > b_pos.y
}
