//! Headless renderer
//!
//! Records every draw call as triangles. A windowed backend can upload
//! [`FrameRecorder::frame_bytes`] as-is; tests inspect the vertices directly.

use glam::Vec2;

use super::shapes;
use super::vertex::{Color, Vertex};
use super::{Fill, Renderer};
use crate::sim::collision::Aabb;

/// Segments used to tessellate circles
pub const CIRCLE_SEGMENTS: u32 = 64;

#[derive(Debug, Default)]
pub struct FrameRecorder {
    /// Frame being built
    current: Vec<Vertex>,
    /// Last presented frame
    presented: Vec<Vertex>,
    frames_presented: u64,
    current_tinted: bool,
    presented_tinted: bool,
}

impl FrameRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Vertices of the last presented frame
    pub fn frame(&self) -> &[Vertex] {
        &self.presented
    }

    /// Last presented frame as raw bytes for a vertex buffer
    pub fn frame_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.presented)
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Whether the last presented frame carried a tint
    pub fn frame_was_tinted(&self) -> bool {
        self.presented_tinted
    }
}

impl Renderer for FrameRecorder {
    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color, fill: Fill) -> Aabb {
        let vertices = match fill {
            Fill::Solid => shapes::circle(center, radius, color, CIRCLE_SEGMENTS),
            Fill::Outline(width) => shapes::ring(
                center,
                (radius - width).max(0.0),
                radius,
                color,
                CIRCLE_SEGMENTS,
            ),
        };
        self.current.extend(vertices);
        Aabb::from_center_half_extent(center, radius)
    }

    fn draw_polygon(&mut self, points: &[Vec2], color: Color) -> Aabb {
        self.current.extend(shapes::polygon(points, color));
        Aabb::from_points(points).unwrap_or(Aabb::EMPTY)
    }

    fn draw_rect(&mut self, rect: Aabb, color: Color) -> Aabb {
        self.current.extend(shapes::rect(&rect, color));
        rect
    }

    fn tint(&mut self, color: Color) {
        for vertex in &mut self.current {
            *vertex = vertex.tinted(color);
        }
        self.current_tinted = true;
    }

    fn present(&mut self) {
        self.presented = std::mem::take(&mut self.current);
        self.presented_tinted = std::mem::take(&mut self.current_tinted);
        self.frames_presented += 1;
        log::trace!(
            "Presented frame {} ({} vertices)",
            self.frames_presented,
            self.presented.len()
        );
    }
}
