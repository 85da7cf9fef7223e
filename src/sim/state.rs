//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives in [`World`]. Hosts read it back
//! through [`Snapshot`], which is plain data.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::{Body, HasBody};
use super::camera::Camera;
use super::level::generate_level;
use super::particles::{Particle, ParticleSystem};
use crate::Rgba;
use crate::config::{Difficulty, GameConfig, LevelSpec};
use crate::consts::{
    ENEMY_COLOR, ENEMY_SPAWN_LIFT, GOAL_HEIGHT, GOAL_WIDTH, PLAYER_SPAWN_X, PLAYER_SPAWN_Y, STOMP_THRESHOLD,
};
use crate::error::ConfigError;

/// Which way the player sprite faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

/// How the run is going
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    Running,
    /// Fell out of the world or touched an enemy
    Lost,
    /// Reached the goal flag
    Won,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        *self != Outcome::Running
    }
}

/// The player character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub body: Body,
    pub facing: Facing,
    /// Resting on a platform as of the last collision pass
    pub grounded: bool,
    /// Position before this tick's integration step
    pub prev_pos: Vec2,
}

impl Player {
    pub fn spawn(config: &GameConfig) -> Self {
        let size = config.player_size();
        let body = Body::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y, size.x, size.y);
        Self {
            body,
            facing: Facing::Right,
            grounded: false,
            prev_pos: body.pos,
        }
    }

    #[inline]
    pub fn prev_left(&self) -> f32 {
        self.prev_pos.x
    }

    #[inline]
    pub fn prev_right(&self) -> f32 {
        self.prev_pos.x + self.body.size.x
    }

    #[inline]
    pub fn prev_top(&self) -> f32 {
        self.prev_pos.y
    }

    /// Foot height before this tick's vertical motion
    #[inline]
    pub fn prev_bottom(&self) -> f32 {
        self.prev_pos.y + self.body.size.y
    }
}

/// A patrolling enemy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub body: Body,
    /// Left end of the patrol interval
    pub start_x: f32,
    /// Width of the patrol interval
    pub range: f32,
    pub speed: f32,
    /// +1 moving right, -1 moving left
    pub direction: f32,
    pub color: Rgba,
    /// Stomped this tick; compacted out after the enemy update
    pub marked_for_removal: bool,
}

impl Enemy {
    /// Spawn hovering above a platform top at `platform_y`
    pub fn new(id: u32, x: f32, platform_y: f32, range: f32, config: &GameConfig) -> Self {
        let size = config.enemy_size();
        Self {
            id,
            body: Body::new(x, platform_y - ENEMY_SPAWN_LIFT, size.x, size.y),
            start_x: x,
            range,
            speed: config.enemy_speed,
            direction: 1.0,
            color: ENEMY_COLOR,
            marked_for_removal: false,
        }
    }

    /// Ping-pong between start_x and start_x + range
    pub fn patrol(&mut self) {
        self.body.vel.x = self.speed * self.direction;
        self.body.integrate();

        let end_x = self.start_x + self.range;
        if self.body.pos.x >= end_x {
            self.body.pos.x = end_x;
            self.direction = -1.0;
        } else if self.body.pos.x <= self.start_x {
            self.body.pos.x = self.start_x;
            self.direction = 1.0;
        }
    }

    /// A descending foot above this line counts as a stomp
    pub fn stomp_line(&self) -> f32 {
        self.body.top() + self.body.size.y * STOMP_THRESHOLD
    }
}

/// Static ground or floating platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub body: Body,
}

impl Platform {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            body: Body::new(x, y, width, height),
        }
    }
}

/// The goal flag; touching it wins the level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub body: Body,
}

impl Goal {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            body: Body::new(x, y, GOAL_WIDTH, GOAL_HEIGHT),
        }
    }
}

impl HasBody for Player {
    fn body(&self) -> &Body {
        &self.body
    }
}

impl HasBody for Enemy {
    fn body(&self) -> &Body {
        &self.body
    }
}

impl HasBody for Platform {
    fn body(&self) -> &Body {
        &self.body
    }
}

impl HasBody for Goal {
    fn body(&self) -> &Body {
        &self.body
    }
}

/// Closed set of drawable/collidable entities
#[derive(Debug, Clone, Copy)]
pub enum EntityRef<'a> {
    Platform(&'a Platform),
    Goal(&'a Goal),
    Enemy(&'a Enemy),
    Player(&'a Player),
}

impl HasBody for EntityRef<'_> {
    fn body(&self) -> &Body {
        match self {
            EntityRef::Platform(p) => &p.body,
            EntityRef::Goal(g) => &g.body,
            EntityRef::Enemy(e) => &e.body,
            EntityRef::Player(p) => &p.body,
        }
    }
}

/// A freshly generated level
#[derive(Debug, Clone)]
pub struct Level {
    /// Ground strip first, then raised platforms left to right, then the goal pad
    pub platforms: Vec<Platform>,
    pub enemies: Vec<Enemy>,
    pub goal: Goal,
    /// Number of gap/platform segments the generator emitted
    pub segments: u32,
}

/// Complete game state for one run
#[derive(Debug, Clone)]
pub struct World {
    /// Run seed for reproducibility
    pub seed: u64,
    pub config: GameConfig,
    pub spec: LevelSpec,
    pub player: Player,
    pub platforms: Vec<Platform>,
    pub enemies: Vec<Enemy>,
    pub goal: Goal,
    pub particles: ParticleSystem,
    pub camera: Camera,
    pub score: u64,
    pub outcome: Outcome,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub(crate) rng: Pcg32,
}

impl World {
    /// Validate tuning, then generate a level for a difficulty preset
    pub fn start_level(
        difficulty: Difficulty,
        seed: u64,
        config: GameConfig,
    ) -> Result<Self, ConfigError> {
        log::info!("Starting {} level", difficulty.as_str());
        Self::start_level_with_spec(difficulty.level_spec(), seed, config)
    }

    /// Validate tuning, then generate a level for an explicit spec
    pub fn start_level_with_spec(
        spec: LevelSpec,
        seed: u64,
        config: GameConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        spec.validate(&config)?;

        let mut rng = Pcg32::seed_from_u64(seed);
        let level = generate_level(&mut rng, &spec, &config);
        log::info!(
            "Level seed={} length={} max_gap={}: {} platforms, {} enemies",
            seed,
            spec.length,
            spec.max_gap,
            level.platforms.len(),
            level.enemies.len()
        );

        Ok(Self {
            seed,
            player: Player::spawn(&config),
            platforms: level.platforms,
            enemies: level.enemies,
            goal: level.goal,
            particles: ParticleSystem::new(config.max_particles),
            camera: Camera::new(&config),
            score: 0,
            outcome: Outcome::Running,
            time_ticks: 0,
            spec,
            config,
            rng,
        })
    }

    /// Replace the current level with a new layout; the RNG stream continues.
    /// `config` is public, so it is checked again here.
    pub fn load_level(&mut self, spec: LevelSpec) -> Result<(), ConfigError> {
        self.config.validate()?;
        spec.validate(&self.config)?;
        let level = generate_level(&mut self.rng, &spec, &self.config);
        log::info!(
            "Reloaded level length={}: {} platforms, {} enemies",
            spec.length,
            level.platforms.len(),
            level.enemies.len()
        );

        self.spec = spec;
        self.platforms = level.platforms;
        self.enemies = level.enemies;
        self.goal = level.goal;
        self.player = Player::spawn(&self.config);
        self.particles = ParticleSystem::new(self.config.max_particles);
        self.camera = Camera::new(&self.config);
        self.score = 0;
        self.outcome = Outcome::Running;
        self.time_ticks = 0;
        Ok(())
    }

    /// Read-only copy of everything a renderer needs
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            player: self.player.clone(),
            platforms: self.platforms.clone(),
            enemies: self.enemies.clone(),
            particles: self.particles.as_slice().to_vec(),
            goal: self.goal.clone(),
            camera_x: self.camera.offset_x,
            score: self.score,
            outcome: self.outcome,
            time_ticks: self.time_ticks,
        }
    }
}

/// Plain-data view of a world at the end of a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub player: Player,
    pub platforms: Vec<Platform>,
    pub enemies: Vec<Enemy>,
    pub particles: Vec<Particle>,
    pub goal: Goal,
    pub camera_x: f32,
    pub score: u64,
    pub outcome: Outcome,
    pub time_ticks: u64,
}

impl Snapshot {
    /// Entities in back-to-front draw order
    pub fn entities(&self) -> impl Iterator<Item = EntityRef<'_>> {
        self.platforms
            .iter()
            .map(EntityRef::Platform)
            .chain(std::iter::once(EntityRef::Goal(&self.goal)))
            .chain(self.enemies.iter().map(EntityRef::Enemy))
            .chain(std::iter::once(EntityRef::Player(&self.player)))
    }
}
