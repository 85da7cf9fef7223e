//! Collision detection and response for the player
//!
//! The tricky part: telling a landing from a head-bump from a side push, and a
//! stomp from a hit. Both decisions use where the player was *before* this
//! tick's motion, not just which way it is moving.

use glam::Vec2;

use super::body::Body;
use super::state::{Enemy, Goal, Outcome, Platform, Player};
use crate::Rgba;
use crate::config::GameConfig;
use crate::consts::CONTACT_EPSILON;

/// How an overlapping platform was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformContact {
    /// Came down onto the top surface
    Landed,
    /// Came up into the underside
    HeadBump,
    /// Walked into its left face
    SideLeft,
    /// Walked into its right face
    SideRight,
    /// Overlapping, but the prior position was already inside; left as is
    Embedded,
}

/// How an overlapping enemy was met
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyContact {
    Stomp,
    Damage,
}

/// An enemy killed from above this tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stomp {
    pub enemy_id: u32,
    /// Enemy center, where its debris bursts from
    pub center: Vec2,
    /// Debris takes on the enemy's color
    pub color: Rgba,
}

/// Result of a full collision pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionReport {
    pub stomps: Vec<Stomp>,
    pub outcome: Outcome,
}

/// Resolve the player against one platform; `None` if they don't overlap
pub fn resolve_platform(player: &mut Player, platform: &Body) -> Option<PlatformContact> {
    if !player.body.overlaps(platform) {
        return None;
    }

    let contact = if player.prev_bottom() <= platform.top() + CONTACT_EPSILON {
        player.body.pos.y = platform.top() - player.body.size.y;
        player.body.vel.y = 0.0;
        player.grounded = true;
        PlatformContact::Landed
    } else if player.prev_top() >= platform.bottom() - CONTACT_EPSILON {
        player.body.pos.y = platform.bottom();
        player.body.vel.y = 0.0;
        PlatformContact::HeadBump
    } else if player.prev_right() <= platform.left() + CONTACT_EPSILON {
        player.body.pos.x = platform.left() - player.body.size.x;
        player.body.vel.x = 0.0;
        PlatformContact::SideLeft
    } else if player.prev_left() >= platform.right() - CONTACT_EPSILON {
        player.body.pos.x = platform.right();
        player.body.vel.x = 0.0;
        PlatformContact::SideRight
    } else {
        PlatformContact::Embedded
    };

    Some(contact)
}

/// Resolve every platform in order; overlapping corrections may compound
pub fn resolve_platforms(player: &mut Player, platforms: &[Platform]) {
    player.grounded = false;
    for platform in platforms {
        resolve_platform(player, &platform.body);
    }
}

/// Stomp if descending with the prior foot above the enemy's stomp line
pub fn classify_enemy_contact(player: &Player, enemy: &Enemy) -> Option<EnemyContact> {
    if !player.body.overlaps(&enemy.body) {
        return None;
    }
    if player.body.vel.y > 0.0 && player.prev_bottom() < enemy.stomp_line() {
        Some(EnemyContact::Stomp)
    } else {
        Some(EnemyContact::Damage)
    }
}

/// Platforms, then enemies, then the goal. Enemies are only read here; the
/// caller marks the stomped ones and compacts them after the enemy update.
pub fn resolve_player_collisions(
    player: &mut Player,
    platforms: &[Platform],
    enemies: &[Enemy],
    goal: &Goal,
    config: &GameConfig,
) -> CollisionReport {
    let mut report = CollisionReport::default();

    resolve_platforms(player, platforms);

    for enemy in enemies.iter().filter(|e| !e.marked_for_removal) {
        match classify_enemy_contact(player, enemy) {
            Some(EnemyContact::Stomp) => {
                player.body.vel.y = -config.jump_impulse / 2.0;
                report.stomps.push(Stomp {
                    enemy_id: enemy.id,
                    center: enemy.body.center(),
                    color: enemy.color,
                });
            }
            Some(EnemyContact::Damage) => {
                report.outcome = Outcome::Lost;
                return report;
            }
            None => {}
        }
    }

    if player.body.overlaps(&goal.body) {
        report.outcome = Outcome::Won;
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A player whose last step moved it from `prev` by `vel`
    fn player_moving(prev: Vec2, vel: Vec2) -> Player {
        let mut player = Player::spawn(&GameConfig::default());
        player.prev_pos = prev;
        player.body.vel = vel;
        player.body.pos = prev + vel;
        player
    }

    fn floor() -> Platform {
        Platform::new(0.0, 500.0, 1000.0, 40.0)
    }

    #[test]
    fn test_landing_snaps_and_grounds() {
        let h = Player::spawn(&GameConfig::default()).body.size.y;
        let mut player = player_moving(Vec2::new(100.0, 500.0 - h - 2.0), Vec2::new(0.0, 9.0));

        resolve_platforms(&mut player, &[floor()]);
        assert!(player.grounded);
        assert_eq!(player.body.vel.y, 0.0);
        assert!((player.body.bottom() - 500.0).abs() < 1e-3);
    }

    #[test]
    fn test_head_bump() {
        let mut player = player_moving(Vec2::new(100.0, 545.0), Vec2::new(0.0, -10.0));
        let contact = resolve_platform(&mut player, &floor().body);
        assert_eq!(contact, Some(PlatformContact::HeadBump));
        assert_eq!(player.body.top(), 540.0);
        assert_eq!(player.body.vel.y, 0.0);
        assert!(!player.grounded);
    }

    #[test]
    fn test_side_push_both_ways() {
        let wall = Platform::new(300.0, 400.0, 50.0, 200.0);

        let w = Player::spawn(&GameConfig::default()).body.size.x;
        let mut from_left = player_moving(Vec2::new(300.0 - w - 1.0, 450.0), Vec2::new(10.0, 0.0));
        assert_eq!(
            resolve_platform(&mut from_left, &wall.body),
            Some(PlatformContact::SideLeft)
        );
        assert!((from_left.body.right() - 300.0).abs() < 1e-3);
        assert_eq!(from_left.body.vel.x, 0.0);

        let mut from_right = player_moving(Vec2::new(352.0, 450.0), Vec2::new(-10.0, 0.0));
        assert_eq!(
            resolve_platform(&mut from_right, &wall.body),
            Some(PlatformContact::SideRight)
        );
        assert_eq!(from_right.body.left(), 350.0);
    }

    #[test]
    fn test_resting_player_stays_grounded() {
        let config = GameConfig::default();
        let mut player = Player::spawn(&config);
        player.body.pos.y = 500.0 - player.body.size.y;
        let platforms = [floor()];

        for _ in 0..50 {
            crate::sim::physics::step_player(&mut player, &Default::default(), &config);
            resolve_platforms(&mut player, &platforms);
            assert!(player.grounded);
            assert_eq!(player.body.vel.y, 0.0);
        }
    }

    #[test]
    fn test_grounded_resets_without_support() {
        let mut player = player_moving(Vec2::new(2000.0, 100.0), Vec2::new(0.0, 3.0));
        player.grounded = true;
        resolve_platforms(&mut player, &[floor()]);
        assert!(!player.grounded);
    }

    #[test]
    fn test_stomp_vs_damage() {
        let config = GameConfig::default();
        let enemy = Enemy::new(7, 100.0, 450.0, 100.0, &config);
        let h = Player::spawn(&config).body.size.y;

        // Prior foot just above the enemy's top, falling
        let stomper = player_moving(
            Vec2::new(100.0, enemy.body.top() - h - 1.0),
            Vec2::new(0.0, 6.0),
        );
        assert_eq!(
            classify_enemy_contact(&stomper, &enemy),
            Some(EnemyContact::Stomp)
        );

        // Falling, but the prior foot was already below mid-height
        let late = player_moving(
            Vec2::new(100.0, enemy.stomp_line() - h + 2.0),
            Vec2::new(0.0, 3.0),
        );
        assert_eq!(
            classify_enemy_contact(&late, &enemy),
            Some(EnemyContact::Damage)
        );

        // Walking into its side
        let walker = player_moving(
            Vec2::new(90.0 - 55.0, enemy.body.top()),
            Vec2::new(12.0, 0.0),
        );
        assert_eq!(
            classify_enemy_contact(&walker, &enemy),
            Some(EnemyContact::Damage)
        );
    }

    #[test]
    fn test_stomp_bounces_and_reports() {
        let config = GameConfig::default();
        let enemy = Enemy::new(7, 100.0, 450.0, 100.0, &config);
        let h = Player::spawn(&config).body.size.y;
        let mut player = player_moving(
            Vec2::new(100.0, enemy.body.top() - h - 1.0),
            Vec2::new(0.0, 6.0),
        );
        let goal = Goal::new(5000.0, 0.0);

        let report = resolve_player_collisions(&mut player, &[], &[enemy.clone()], &goal, &config);
        assert_eq!(report.outcome, Outcome::Running);
        assert_eq!(
            report.stomps,
            vec![Stomp {
                enemy_id: 7,
                center: enemy.body.center(),
                color: enemy.color,
            }]
        );
        assert_eq!(player.body.vel.y, -config.jump_impulse / 2.0);
    }

    #[test]
    fn test_damage_short_circuits_goal() {
        let config = GameConfig::default();
        let enemy = Enemy::new(1, 100.0, 450.0, 100.0, &config);
        let mut player = player_moving(enemy.body.pos, Vec2::ZERO);
        let goal = Goal::new(100.0, 400.0);

        let report = resolve_player_collisions(&mut player, &[], &[enemy], &goal, &config);
        assert_eq!(report.outcome, Outcome::Lost);
    }

    #[test]
    fn test_goal_overlap_wins() {
        let config = GameConfig::default();
        let goal = Goal::new(100.0, 100.0);
        let mut player = player_moving(Vec2::new(90.0, 110.0), Vec2::ZERO);
        let report = resolve_player_collisions(&mut player, &[], &[], &goal, &config);
        assert_eq!(report.outcome, Outcome::Won);
    }
}
