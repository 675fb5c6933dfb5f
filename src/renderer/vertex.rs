//! Vertex types for 2D outline drawing

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

    pub fn at(p: Vec2, color: [f32; 4]) -> Self {
        Self::new(p.x, p.y, color)
    }

    pub fn pos(&self) -> Vec2 {
        Vec2::from(self.position)
    }
}

/// Colors for field elements
pub mod colors {
    pub const ASTEROID: [f32; 4] = [0.7, 0.7, 0.75, 1.0];
    pub const SHIP: [f32; 4] = [0.2, 0.8, 0.4, 1.0];
    pub const WORLD_EDGE: [f32; 4] = [0.3, 0.3, 0.4, 1.0];
}
