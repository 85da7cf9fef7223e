//! Procedural level generation
//!
//! Layout, left to right:
//! - a ground strip from x=0 spanning the whole course
//! - raised platforms separated by random gaps, some carrying an enemy
//! - the goal flag just past the course, on its own landing pad
//!
//! Gaps are bounded by `LevelSpec::max_gap` but not checked against the jump
//! arc; the ground strip is what keeps every level finishable.

use rand::Rng;

use super::state::{Enemy, Goal, Level, Platform};
use crate::config::{GameConfig, LevelSpec};
use crate::consts::{GOAL_LIFT, GOAL_OFFSET, GOAL_PAD_WIDTH};

/// Build a level from `spec`. Both `spec` and `config` are assumed validated.
pub fn generate_level<R: Rng>(
    rng: &mut R,
    spec: &LevelSpec,
    config: &GameConfig,
) -> Level {
    let ground_y = config.ground_y();
    let mut platforms = vec![Platform::new(
        0.0,
        ground_y,
        spec.length,
        config.ground_height,
    )];
    let mut enemies = Vec::new();

    let mut cursor = config.level_start_x;
    let mut segments = 0u32;
    let mut next_enemy_id = 1u32;

    while cursor < spec.length {
        let gap = rng.random_range(config.min_gap..=spec.max_gap);
        let width = rng.random_range(config.min_platform_width..=config.max_platform_width);
        let top = rng.random_range(config.platform_top_high..=config.platform_top_low);
        let x = cursor + gap;

        platforms.push(Platform::new(x, top, width, config.platform_thickness));

        if rng.random_bool(config.enemy_spawn_chance) {
            enemies.push(Enemy::new(next_enemy_id, x + width / 2.0, top, width, config));
            next_enemy_id += 1;
        }

        cursor += gap + width;
        segments += 1;
    }

    let goal = Goal::new(spec.length + GOAL_OFFSET, config.world_height - GOAL_LIFT);
    // Solid footing under the flag
    platforms.push(Platform::new(
        spec.length,
        ground_y,
        GOAL_PAD_WIDTH,
        config.ground_height,
    ));

    log::debug!(
        "Generated {} segments, cursor ended at {}",
        segments,
        cursor
    );

    Level {
        platforms,
        enemies,
        goal,
        segments,
    }
}

/// Upper bound on generator iterations for a spec
pub fn max_segments(spec: &LevelSpec, config: &GameConfig) -> u32 {
    let span = (spec.length - config.level_start_x).max(0.0);
    let min_step = config.min_gap + config.min_platform_width;
    (span / min_step).ceil() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Difficulty;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn generate(seed: u64, spec: LevelSpec) -> Level {
        let mut rng = Pcg32::seed_from_u64(seed);
        generate_level(&mut rng, &spec, &GameConfig::default())
    }

    #[test]
    fn test_ground_strip_covers_course() {
        let spec = Difficulty::Hard.level_spec();
        let level = generate(11, spec);
        let ground = &level.platforms[0];
        assert_eq!(ground.body.left(), 0.0);
        assert!(ground.body.right() >= spec.length);
        assert_eq!(ground.body.top(), 660.0);
    }

    #[test]
    fn test_goal_and_pad() {
        let spec = Difficulty::Easy.level_spec();
        let level = generate(5, spec);
        assert_eq!(level.goal.body.pos.x, 3200.0);
        assert_eq!(level.goal.body.pos.y, 540.0);

        let pad = level.platforms.last().unwrap();
        assert_eq!(pad.body.left(), 3000.0);
        assert!(pad.body.right() > level.goal.body.right());
        assert_eq!(pad.body.top(), 660.0);
    }

    #[test]
    fn test_same_seed_same_level() {
        let spec = Difficulty::Medium.level_spec();
        let a = generate(1234, spec);
        let b = generate(1234, spec);
        assert_eq!(a.platforms, b.platforms);
        assert_eq!(a.enemies, b.enemies);

        let c = generate(1235, spec);
        assert_ne!(a.platforms, c.platforms);
    }

    #[test]
    fn test_enemies_patrol_from_platform_center() {
        let config = GameConfig::default();
        let level = generate(77, Difficulty::Hard.level_spec());
        assert!(!level.enemies.is_empty());
        for enemy in &level.enemies {
            let platform = level
                .platforms
                .iter()
                .find(|p| (p.body.pos.x + p.body.size.x / 2.0 - enemy.start_x).abs() < 1e-3)
                .expect("enemy without a platform");
            assert_eq!(enemy.range, platform.body.size.x);
            assert_eq!(enemy.body.pos.y, platform.body.top() - 50.0);
            assert_eq!(enemy.speed, config.enemy_speed);
        }
    }

    #[test]
    fn test_tiny_level_has_no_segments() {
        let level = generate(3, LevelSpec::new(400.0, 150.0));
        assert_eq!(level.segments, 0);
        assert_eq!(level.platforms.len(), 2);
        assert!(level.enemies.is_empty());
    }

    proptest! {
        #[test]
        fn layout_is_bounded(
            seed in any::<u64>(),
            length in 300.0f32..12000.0,
            max_gap in 50.0f32..400.0,
        ) {
            let config = GameConfig::default();
            let spec = LevelSpec::new(length, max_gap);
            let level = generate(seed, spec);

            prop_assert!(level.segments <= max_segments(&spec, &config));
            prop_assert_eq!(level.platforms.len(), level.segments as usize + 2);
            prop_assert!(level.enemies.len() <= level.platforms.len());

            // Raised platforms advance strictly and respect the gap/width bands
            let raised = &level.platforms[1..level.platforms.len() - 1];
            let mut cursor = config.level_start_x;
            for platform in raised {
                let gap = platform.body.left() - cursor;
                prop_assert!(gap >= config.min_gap - 1e-2 && gap <= max_gap + 1e-2);
                prop_assert!(platform.body.size.x >= config.min_platform_width);
                prop_assert!(platform.body.size.x <= config.max_platform_width);
                prop_assert!(platform.body.top() >= config.platform_top_high);
                prop_assert!(platform.body.top() <= config.platform_top_low);
                let next = platform.body.right();
                prop_assert!(next > cursor);
                cursor = next;
            }
            prop_assert!(cursor >= length || raised.is_empty());
        }
    }
}
