//! Rendering boundary
//!
//! The simulation draws through [`Renderer`] and only keeps the bounding boxes
//! each draw call reports. [`FrameRecorder`] is a headless implementation that
//! tessellates every primitive into vertices.

pub mod recorder;
pub mod shapes;
pub mod vertex;

pub use recorder::FrameRecorder;
pub use vertex::{Color, Vertex, colors};

use glam::Vec2;

use crate::sim::collision::Aabb;

/// How a circle is filled
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fill {
    Solid,
    /// Outline of the given width, drawn inward from the radius
    Outline(f32),
}

/// Drawing capability the game loop depends on
pub trait Renderer {
    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color, fill: Fill) -> Aabb;

    /// Draw a filled polygon and return its bounding box
    fn draw_polygon(&mut self, points: &[Vec2], color: Color) -> Aabb;

    fn draw_rect(&mut self, rect: Aabb, color: Color) -> Aabb;

    /// Multiply everything drawn so far this frame by `color`
    fn tint(&mut self, color: Color);

    /// Finish the frame
    fn present(&mut self);
}
