//! Shape generation for 2D primitives
//!
//! Everything is emitted as triangle lists in screen space (y down).

use glam::Vec2;

use super::vertex::Vertex;

/// Screen-space rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }
}

/// Append a filled rectangle (two triangles), UVs spanning 0..1
pub fn rect(out: &mut Vec<Vertex>, r: Rect, color: [f32; 4]) {
    quad(out, r, color, false);
}

/// Append a rectangle with its UVs mirrored horizontally
pub fn rect_flipped(out: &mut Vec<Vertex>, r: Rect, color: [f32; 4]) {
    quad(out, r, color, true);
}

fn quad(out: &mut Vec<Vertex>, r: Rect, color: [f32; 4], flip_u: bool) {
    let (u0, u1) = if flip_u { (1.0, 0.0) } else { (0.0, 1.0) };
    let (x0, y0, x1, y1) = (r.x, r.y, r.x + r.w, r.y + r.h);

    out.push(Vertex::new(x0, y0, u0, 0.0, color));
    out.push(Vertex::new(x1, y0, u1, 0.0, color));
    out.push(Vertex::new(x0, y1, u0, 1.0, color));

    out.push(Vertex::new(x0, y1, u0, 1.0, color));
    out.push(Vertex::new(x1, y0, u1, 0.0, color));
    out.push(Vertex::new(x1, y1, u1, 1.0, color));
}

/// Append a filled triangle
pub fn triangle(out: &mut Vec<Vertex>, a: Vec2, b: Vec2, c: Vec2, color: [f32; 4]) {
    out.push(Vertex::new(a.x, a.y, 0.0, 0.0, color));
    out.push(Vertex::new(b.x, b.y, 0.0, 0.0, color));
    out.push(Vertex::new(c.x, c.y, 0.0, 0.0, color));
}

/// Same color with a different alpha
pub fn with_alpha(color: [f32; 4], alpha: f32) -> [f32; 4] {
    [color[0], color[1], color[2], alpha.clamp(0.0, 1.0)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_covers_corners() {
        let mut out = Vec::new();
        rect(&mut out, Rect::new(10.0, 20.0, 30.0, 40.0), [1.0; 4]);
        assert_eq!(out.len(), 6);
        let xs: Vec<f32> = out.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = out.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 10.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 40.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 20.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 60.0);
    }

    #[test]
    fn test_flip_mirrors_uvs() {
        let mut plain = Vec::new();
        let mut flipped = Vec::new();
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        rect(&mut plain, r, [1.0; 4]);
        rect_flipped(&mut flipped, r, [1.0; 4]);
        for (a, b) in plain.iter().zip(&flipped) {
            assert_eq!(a.position, b.position);
            assert_eq!(a.uv[0], 1.0 - b.uv[0]);
            assert_eq!(a.uv[1], b.uv[1]);
        }
    }

    #[test]
    fn test_with_alpha_clamps() {
        assert_eq!(with_alpha([0.5; 4], 2.0)[3], 1.0);
        assert_eq!(with_alpha([0.5; 4], -0.2)[3], 0.0);
    }
}
