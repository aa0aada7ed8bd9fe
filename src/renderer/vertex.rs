//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    #[inline]
    pub fn at(p: Vec2, color: [f32; 4]) -> Self {
        Self::new(p.x, p.y, color)
    }
}

/// Colors for game elements
pub mod colors {
    pub const PLAYER: [f32; 4] = [0.3, 0.9, 0.5, 1.0];
    pub const BALL: [f32; 4] = [0.4, 0.7, 1.0, 1.0];
    pub const CHARGING: [f32; 4] = [1.0, 0.75, 0.3, 1.0];
    pub const WIREFRAME: [f32; 4] = [0.3, 0.3, 0.4, 1.0];
}
