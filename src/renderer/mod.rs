//! Draw-list generation
//!
//! The simulation decides what exists; this module decides what gets drawn
//! and where, as plain triangles a canvas or GPU host can blit as-is.

pub mod scene;
pub mod shapes;
pub mod vertex;

pub use scene::{build_scene, player_pose};
pub use vertex::{Vertex, as_bytes, colors};
