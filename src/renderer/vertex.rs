//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// RGBA, each channel in 0.0..=1.0
pub type Color = [f32; 4];

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: Color,
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: Color) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Multiply the RGB channels by `tint`, leaving alpha alone
    pub fn tinted(self, tint: Color) -> Self {
        let [r, g, b, a] = self.color;
        Self {
            position: self.position,
            color: [r * tint[0], g * tint[1], b * tint[2], a],
        }
    }
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const WHEEL: Color = [0.647, 0.165, 0.165, 1.0]; // Brown
    pub const GUIDE: Color = [0.745, 0.745, 0.745, 1.0]; // Gray
    pub const OBSTACLE: Color = [1.0, 0.0, 0.0, 1.0];
    pub const PLAYER: Color = [0.0, 1.0, 0.0, 1.0];
    pub const PROGRESS_FILL: Color = [0.0, 1.0, 0.0, 1.0];
    pub const PROGRESS_EMPTY: Color = [0.745, 0.745, 0.745, 1.0];

    /// Red tint that keeps red and scales green/blue by `1 - strength`
    pub fn penalty_tint(strength: f32) -> Color {
        let gb = (1.0 - strength).clamp(0.0, 1.0);
        [1.0, gb, gb, 1.0]
    }
}
