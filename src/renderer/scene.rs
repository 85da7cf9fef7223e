//! Scene assembly
//!
//! Turns a [`Snapshot`] into one camera-relative triangle list, back to
//! front: platforms, goal, enemies, player, particles. Anything entirely
//! outside the viewport is skipped.

use glam::Vec2;

use super::shapes::{self, Rect};
use super::vertex::{Vertex, colors};
use crate::config::GameConfig;
use crate::sim::{EntityRef, Facing, Player, Snapshot};

/// Grass strip drawn along every platform top
const GRASS_DEPTH: f32 = 10.0;
/// Airborne squash/stretch (pixels)
const AIR_STRETCH: f32 = 4.0;
/// Running bob amplitude (pixels) and phase advance per tick
const BOB_AMPLITUDE: f32 = 2.0;
const BOB_RATE: f32 = 1.0 / 3.0;
/// Horizontal speed above which the running bob kicks in
const BOB_MIN_SPEED: f32 = 1.0;

/// Build the full frame for a snapshot
pub fn build_scene(snapshot: &Snapshot, config: &GameConfig) -> Vec<Vertex> {
    let camera_x = snapshot.camera_x;
    let view_right = camera_x + config.world_width;
    let visible = |x: f32, w: f32| x + w >= camera_x && x <= view_right;

    let mut out = Vec::with_capacity(256);

    for entity in snapshot.entities() {
        match entity {
            EntityRef::Platform(platform) => {
                let b = &platform.body;
                if visible(b.pos.x, b.size.x) {
                    platform_shape(&mut out, b.pos.x - camera_x, b.pos.y, b.size.x, b.size.y);
                }
            }
            EntityRef::Goal(goal) => {
                let b = &goal.body;
                // The flag pokes out past the goal's right edge
                if visible(b.pos.x, b.size.x + 20.0) {
                    goal_shape(&mut out, b.pos.x - camera_x, b.pos.y, b.size.y);
                }
            }
            EntityRef::Enemy(enemy) => {
                let b = &enemy.body;
                if visible(b.pos.x, b.size.x) {
                    shapes::rect(
                        &mut out,
                        Rect::new(b.pos.x - camera_x, b.pos.y, b.size.x, b.size.y),
                        enemy.color,
                    );
                }
            }
            EntityRef::Player(player) => {
                let mut pose = player_pose(player, snapshot.time_ticks);
                pose.x -= camera_x;
                match player.facing {
                    Facing::Right => shapes::rect(&mut out, pose, colors::PLAYER),
                    Facing::Left => shapes::rect_flipped(&mut out, pose, colors::PLAYER),
                }
            }
        }
    }

    for particle in &snapshot.particles {
        shapes::rect(
            &mut out,
            Rect::new(
                particle.pos.x - camera_x,
                particle.pos.y,
                particle.size,
                particle.size,
            ),
            shapes::with_alpha(particle.color, particle.life),
        );
    }

    out
}

/// World-space rectangle the player sprite is drawn into
pub fn player_pose(player: &Player, time_ticks: u64) -> Rect {
    let b = &player.body;
    let mut pose = Rect::new(b.pos.x, b.pos.y, b.size.x, b.size.y);

    if !player.grounded {
        // Stretch tall and thin in the air
        pose.w -= AIR_STRETCH;
        pose.h += AIR_STRETCH;
        pose.x += AIR_STRETCH / 2.0;
        pose.y -= AIR_STRETCH / 2.0;
    } else if b.vel.x.abs() > BOB_MIN_SPEED {
        let bob = BOB_AMPLITUDE * (time_ticks as f32 * BOB_RATE).sin();
        pose.h -= bob;
        pose.y += bob;
    }

    pose
}

fn platform_shape(out: &mut Vec<Vertex>, x: f32, y: f32, w: f32, h: f32) {
    let grass = GRASS_DEPTH.min(h);
    shapes::rect(out, Rect::new(x, y, w, grass), colors::GRASS);
    if h > grass {
        shapes::rect(out, Rect::new(x, y + grass, w, h - grass), colors::DIRT);
    }
}

fn goal_shape(out: &mut Vec<Vertex>, x: f32, y: f32, h: f32) {
    shapes::rect(out, Rect::new(x + 25.0, y, 10.0, h), colors::GOAL_POLE);
    shapes::triangle(
        out,
        Vec2::new(x + 35.0, y + 10.0),
        Vec2::new(x + 80.0, y + 30.0),
        Vec2::new(x + 35.0, y + 50.0),
        colors::GOAL_FLAG,
    );
}
