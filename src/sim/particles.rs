//! Decorative particles
//!
//! Particles never affect gameplay. They drift in a straight line, fade out
//! over ~20 ticks and are compacted out of the collection once dead.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::Rgba;
use crate::consts::{PARTICLE_MAX_SIZE, PARTICLE_MIN_SIZE, PARTICLE_SPREAD};

/// A particle for visual effects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Base tint; renderers fade its alpha with `life`
    pub color: Rgba,
    pub life: f32, // 0-1, decreases every tick
    pub size: f32,
}

impl Particle {
    pub fn new<R: Rng>(rng: &mut R, pos: Vec2, color: Rgba) -> Self {
        Self {
            pos,
            vel: Vec2::new(
                rng.random_range(-PARTICLE_SPREAD..PARTICLE_SPREAD),
                rng.random_range(-PARTICLE_SPREAD..PARTICLE_SPREAD),
            ),
            color,
            life: 1.0,
            size: rng.random_range(PARTICLE_MIN_SIZE..PARTICLE_MAX_SIZE),
        }
    }

    pub fn update(&mut self, decay: f32) {
        self.pos += self.vel;
        self.life -= decay;
    }

    pub fn is_dead(&self) -> bool {
        self.life <= 0.0
    }
}

/// Bounded particle collection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
    capacity: usize,
}

impl ParticleSystem {
    pub fn new(capacity: usize) -> Self {
        Self {
            particles: Vec::with_capacity(capacity.min(64)),
            capacity,
        }
    }

    /// Spawn `count` particles at `origin`; the oldest make room when full
    pub fn spawn_burst<R: Rng>(
        &mut self,
        rng: &mut R,
        origin: Vec2,
        color: Rgba,
        count: usize,
    ) {
        let count = count.min(self.capacity);
        if count == 0 {
            return;
        }
        let excess = (self.particles.len() + count).saturating_sub(self.capacity);
        self.particles.drain(..excess);
        for _ in 0..count {
            self.particles.push(Particle::new(rng, origin, color));
        }
    }

    /// Age every particle, then drop the dead ones
    pub fn update(&mut self, decay: f32) {
        for particle in &mut self.particles {
            particle.update(decay);
        }
        self.particles.retain(|p| !p.is_dead());
    }

    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{DUST_COLOR, ENEMY_COLOR, PARTICLE_DECAY};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_particle_ranges() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..500 {
            let p = Particle::new(&mut rng, Vec2::ZERO, DUST_COLOR);
            assert!(p.vel.x >= -3.0 && p.vel.x < 3.0);
            assert!(p.vel.y >= -3.0 && p.vel.y < 3.0);
            assert!(p.size >= 2.0 && p.size < 7.0);
            assert_eq!(p.life, 1.0);
        }
    }

    #[test]
    fn test_life_strictly_decreases_until_culled() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut system = ParticleSystem::new(64);
        system.spawn_burst(&mut rng, Vec2::new(10.0, 10.0), ENEMY_COLOR, 10);
        assert_eq!(system.len(), 10);

        let mut last_life = 1.0;
        let mut ticks = 0;
        while !system.is_empty() {
            system.update(PARTICLE_DECAY);
            ticks += 1;
            for p in system.as_slice() {
                assert!(p.life < last_life);
                assert!(p.life > 0.0);
            }
            if let Some(p) = system.as_slice().first() {
                last_life = p.life;
            }
            assert!(ticks <= 21, "particles outlived their lifetime");
        }
        assert!(ticks >= 19);
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut system = ParticleSystem::new(8);
        system.spawn_burst(&mut rng, Vec2::ZERO, DUST_COLOR, 5);
        system.update(PARTICLE_DECAY);
        system.spawn_burst(&mut rng, Vec2::ZERO, ENEMY_COLOR, 5);

        assert_eq!(system.len(), 8);
        // Two aged dust particles were evicted; three remain at the front
        let dust = system
            .as_slice()
            .iter()
            .filter(|p| p.color == DUST_COLOR)
            .count();
        assert_eq!(dust, 3);
        assert_eq!(system.as_slice().last().map(|p| p.life), Some(1.0));
    }

    #[test]
    fn test_burst_larger_than_capacity_keeps_newest() {
        let mut rng = Pcg32::seed_from_u64(9);
        let mut system = ParticleSystem::new(4);
        system.spawn_burst(&mut rng, Vec2::ZERO, DUST_COLOR, 3);
        system.update(PARTICLE_DECAY);
        system.spawn_burst(&mut rng, Vec2::new(5.0, 5.0), ENEMY_COLOR, 10);

        assert_eq!(system.len(), 4);
        assert!(system.as_slice().iter().all(|p| p.color == ENEMY_COLOR));
        assert!(system.as_slice().iter().all(|p| p.life == 1.0));
    }

    #[test]
    fn test_zero_capacity_disables_effects() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut system = ParticleSystem::new(0);
        system.spawn_burst(&mut rng, Vec2::ZERO, DUST_COLOR, 5);
        assert!(system.is_empty());
    }
}
