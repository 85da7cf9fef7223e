//! Horizontal follow camera

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

/// Exponentially smoothed horizontal camera, never left of the world origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// World x shown at the left edge of the viewport
    pub offset_x: f32,
    /// Distance from the left edge the player is kept at
    lead: f32,
    smoothing: f32,
}

impl Camera {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            offset_x: 0.0,
            lead: config.world_width * config.camera_lead,
            smoothing: config.camera_smoothing,
        }
    }

    /// Where the camera wants to be for a player at `player_x`
    pub fn target(&self, player_x: f32) -> f32 {
        player_x - self.lead
    }

    /// Move a fixed fraction of the way toward the target
    pub fn follow(&mut self, player_x: f32) {
        let target = self.target(player_x);
        self.offset_x += (target - self.offset_x) * self.smoothing;
        if self.offset_x < 0.0 {
            self.offset_x = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_stationary_player_at_origin_converges_to_zero() {
        let mut camera = Camera::new(&GameConfig::default());
        camera.offset_x = 500.0;
        for _ in 0..400 {
            camera.follow(0.0);
            assert!(camera.offset_x >= 0.0);
        }
        assert!(camera.offset_x < 0.01);
    }

    #[test]
    fn test_moves_a_tenth_of_the_way() {
        let config = GameConfig::default();
        let mut camera = Camera::new(&config);
        // Target = 1384 - 0.3 * 1280 = 1000
        camera.follow(1384.0);
        assert!((camera.offset_x - 100.0).abs() < 1e-3);
        camera.follow(1384.0);
        assert!((camera.offset_x - 190.0).abs() < 1e-3);
    }

    proptest! {
        #[test]
        fn offset_never_negative(xs in prop::collection::vec(-2000.0f32..20000.0, 1..200)) {
            let mut camera = Camera::new(&GameConfig::default());
            for x in xs {
                camera.follow(x);
                prop_assert!(camera.offset_x >= 0.0);
            }
        }
    }
}
