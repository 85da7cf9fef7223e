//! Scripted input for demos and end-to-end runs

use glam::Vec2;

use super::input::InputState;
use super::state::World;

/// How far ahead of the player's leading edge to look for footing
const PROBE_AHEAD: f32 = 20.0;
/// How far below the feet counts as footing
const PROBE_DEPTH: f32 = 5.0;

/// Hold right; jump when grounded and there is nothing to stand on ahead
pub fn walk_right(world: &World) -> InputState {
    let player = &world.player;
    let probe = Vec2::new(
        player.body.right() + PROBE_AHEAD,
        player.body.bottom() + PROBE_DEPTH,
    );
    let footing_ahead = world
        .platforms
        .iter()
        .any(|p| p.body.contains_point(probe));

    InputState {
        left: false,
        right: true,
        jump: player.grounded && !footing_ahead,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GameConfig, LevelSpec};
    use crate::sim::state::Platform;

    fn world_on(platforms: Vec<Platform>) -> World {
        let mut world =
            World::start_level_with_spec(LevelSpec::new(400.0, 150.0), 1, GameConfig::default())
                .unwrap();
        world.platforms = platforms;
        world.player.body.pos = Vec2::new(100.0, 660.0 - world.player.body.size.y);
        world.player.grounded = true;
        world
    }

    #[test]
    fn test_no_jump_on_solid_ground() {
        let world = world_on(vec![Platform::new(0.0, 660.0, 1000.0, 60.0)]);
        assert_eq!(walk_right(&world), InputState::RIGHT);
    }

    #[test]
    fn test_jumps_at_gap() {
        let world = world_on(vec![Platform::new(0.0, 660.0, 170.0, 60.0)]);
        let input = walk_right(&world);
        assert!(input.right && input.jump);
    }

    #[test]
    fn test_no_jump_while_airborne() {
        let mut world = world_on(vec![Platform::new(0.0, 660.0, 170.0, 60.0)]);
        world.player.grounded = false;
        assert!(!walk_right(&world).jump);
    }
}
