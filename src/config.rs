//! Game tuning and difficulty presets
//!
//! Every number the simulation uses lives in [`GameConfig`]. Defaults match
//! the shipped game; hosts may override any subset from JSON.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::level::max_segments;

/// Difficulty presets offered on the start screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" | "med" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Level length and widest gap for this preset
    pub fn level_spec(&self) -> LevelSpec {
        match self {
            Difficulty::Easy => LevelSpec::new(3000.0, 150.0),
            Difficulty::Medium => LevelSpec::new(5000.0, 200.0),
            Difficulty::Hard => LevelSpec::new(8000.0, 250.0),
        }
    }
}

/// What the level generator is asked to build
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelSpec {
    /// Horizontal extent of the generated course (goal sits just past it)
    pub length: f32,
    /// Largest gap between consecutive raised platforms
    pub max_gap: f32,
}

impl LevelSpec {
    pub const fn new(length: f32, max_gap: f32) -> Self {
        Self { length, max_gap }
    }

    /// Reject specs that would produce an empty, degenerate or endless level
    pub fn validate(&self, config: &GameConfig) -> Result<(), ConfigError> {
        if !self.length.is_finite() || self.length <= 0.0 {
            return Err(ConfigError::InvalidLevelLength(self.length));
        }
        // The generator's f32 cursor must still advance by the smallest step
        // anywhere short of `length`
        let min_step = config.min_gap + config.min_platform_width;
        let spacing = f32::from_bits(self.length.to_bits() + 1) - self.length;
        if spacing > min_step || max_segments(self, config) > MAX_LEVEL_SEGMENTS {
            return Err(ConfigError::InvalidLevelLength(self.length));
        }
        if !self.max_gap.is_finite() || self.max_gap < config.min_gap {
            return Err(ConfigError::MaxGapTooSmall {
                max_gap: self.max_gap,
                min_gap: config.min_gap,
            });
        }
        Ok(())
    }
}

/// Simulation tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === World ===
    pub world_width: f32,
    pub world_height: f32,
    pub fall_margin: f32,

    // === Player physics ===
    pub gravity: f32,
    /// Per-tick horizontal velocity multiplier, must lie in (0, 1)
    pub friction: f32,
    pub player_accel: f32,
    pub player_max_speed: f32,
    pub jump_impulse: f32,

    // === Enemies ===
    pub enemy_speed: f32,
    pub stomp_bonus: u64,

    // === Level generation ===
    pub ground_height: f32,
    pub platform_thickness: f32,
    pub level_start_x: f32,
    pub min_gap: f32,
    pub min_platform_width: f32,
    pub max_platform_width: f32,
    /// Highest allowed platform top (smallest y)
    pub platform_top_high: f32,
    /// Lowest allowed platform top (largest y)
    pub platform_top_low: f32,
    pub enemy_spawn_chance: f64,

    // === Camera ===
    pub camera_lead: f32,
    pub camera_smoothing: f32,

    // === Particles ===
    pub particle_decay: f32,
    pub max_particles: usize,

    // === Input ===
    pub tap_jump_ticks: u32,
    pub tilt_threshold: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            fall_margin: FALL_MARGIN,

            gravity: GRAVITY,
            friction: FRICTION,
            player_accel: PLAYER_ACCEL,
            player_max_speed: PLAYER_MAX_SPEED,
            jump_impulse: JUMP_IMPULSE,

            enemy_speed: ENEMY_SPEED,
            stomp_bonus: STOMP_BONUS,

            ground_height: GROUND_HEIGHT,
            platform_thickness: PLATFORM_THICKNESS,
            level_start_x: LEVEL_START_X,
            min_gap: MIN_GAP,
            min_platform_width: MIN_PLATFORM_WIDTH,
            max_platform_width: MAX_PLATFORM_WIDTH,
            platform_top_high: PLATFORM_TOP_HIGH,
            platform_top_low: PLATFORM_TOP_LOW,
            enemy_spawn_chance: ENEMY_SPAWN_CHANCE,

            camera_lead: CAMERA_LEAD,
            camera_smoothing: CAMERA_SMOOTHING,

            particle_decay: PARTICLE_DECAY,
            max_particles: MAX_PARTICLES,

            tap_jump_ticks: TAP_JUMP_TICKS,
            tilt_threshold: TILT_THRESHOLD,
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) config; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Player collision box size
    pub fn player_size(&self) -> Vec2 {
        let height = self.world_height * PLAYER_HEIGHT_FRACTION;
        Vec2::new(height * PLAYER_ASPECT, height)
    }

    /// Enemy collision box size
    pub fn enemy_size(&self) -> Vec2 {
        let height = self.world_height * ENEMY_HEIGHT_FRACTION;
        Vec2::new(height * ENEMY_ASPECT, height)
    }

    /// Top edge of the ground strip
    pub fn ground_y(&self) -> f32 {
        self.world_height - self.ground_height
    }

    /// Check every tuning value before a level is built from it
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("world_width", self.world_width)?;
        positive("world_height", self.world_height)?;
        positive("ground_height", self.ground_height)?;
        positive("platform_thickness", self.platform_thickness)?;
        positive("gravity", self.gravity)?;
        positive("player_max_speed", self.player_max_speed)?;
        positive("jump_impulse", self.jump_impulse)?;
        positive("min_gap", self.min_gap)?;
        positive("min_platform_width", self.min_platform_width)?;
        positive("max_platform_width", self.max_platform_width)?;
        positive("particle_decay", self.particle_decay)?;
        non_negative("fall_margin", self.fall_margin)?;
        non_negative("player_accel", self.player_accel)?;
        non_negative("enemy_speed", self.enemy_speed)?;
        non_negative("level_start_x", self.level_start_x)?;
        non_negative("platform_top_high", self.platform_top_high)?;
        non_negative("platform_top_low", self.platform_top_low)?;

        if !(self.friction > 0.0 && self.friction < 1.0) {
            return Err(invalid("friction", self.friction));
        }
        if !(self.camera_smoothing > 0.0 && self.camera_smoothing <= 1.0) {
            return Err(invalid("camera_smoothing", self.camera_smoothing));
        }
        if !(0.0..=1.0).contains(&self.camera_lead) {
            return Err(invalid("camera_lead", self.camera_lead));
        }
        if !(0.0..=1.0).contains(&self.enemy_spawn_chance) {
            return Err(ConfigError::InvalidTuning {
                field: "enemy_spawn_chance",
                value: self.enemy_spawn_chance,
            });
        }
        if !(self.max_platform_width >= self.min_platform_width) {
            return Err(invalid("max_platform_width", self.max_platform_width));
        }
        if !(self.platform_top_low >= self.platform_top_high) {
            return Err(invalid("platform_top_low", self.platform_top_low));
        }

        // Raised platforms must leave a walkable lane above the ground
        let platform_bottom = self.platform_top_low + self.platform_thickness;
        let lane_top = self.ground_y() - self.player_size().y;
        if platform_bottom > lane_top {
            return Err(ConfigError::BlockedGroundLane {
                platform_bottom,
                lane_top,
            });
        }

        Ok(())
    }
}

fn invalid(field: &'static str, value: f32) -> ConfigError {
    ConfigError::InvalidTuning {
        field,
        value: value as f64,
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, value))
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(field, value))
    }
}
