//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick
//! - Seeded RNG only
//! - Stable iteration order (generation order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod body;
pub mod camera;
pub mod collision;
pub mod input;
pub mod level;
pub mod particles;
pub mod physics;
pub mod state;
pub mod tick;

pub use body::{Body, HasBody};
pub use camera::Camera;
pub use collision::{CollisionReport, EnemyContact, PlatformContact, Stomp};
pub use input::{InputReducer, InputState, Key, RawInput, TouchButton};
pub use level::generate_level;
pub use particles::{Particle, ParticleSystem};
pub use state::{
    Enemy, EntityRef, Facing, Goal, Level, Outcome, Platform, Player, Snapshot, World,
};
pub use tick::tick;

impl World {
    /// Advance one frame; see [`tick::tick`]
    pub fn tick(&mut self, input: &InputState) -> Outcome {
        tick::tick(self, input)
    }
}
