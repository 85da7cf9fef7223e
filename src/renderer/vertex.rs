//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// 2D vertex with position, sprite UV and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    /// Sprite coordinates; hosts with a loaded texture sample it, others ignore
    pub uv: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, u: f32, v: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            uv: [u, v],
            color,
        }
    }

    /// Byte stride of one vertex in an upload buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

/// View a vertex list as raw bytes for a GPU or canvas upload
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Colors for game elements
pub mod colors {
    pub const PLAYER: [f32; 4] = [1.0, 0.302, 0.302, 1.0]; // #FF4D4D
    pub const ENEMY: [f32; 4] = crate::consts::ENEMY_COLOR;
    pub const GRASS: [f32; 4] = [0.298, 0.686, 0.314, 1.0]; // #4CAF50
    pub const DIRT: [f32; 4] = [0.475, 0.333, 0.282, 1.0]; // #795548
    pub const GOAL_POLE: [f32; 4] = [0.333, 0.333, 0.333, 1.0]; // #555
    pub const GOAL_FLAG: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const DUST: [f32; 4] = crate::consts::DUST_COLOR;
}
