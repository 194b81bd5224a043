//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::{Color, Vertex};
use crate::sim::collision::Aabb;

/// Unit direction of rim vertex `i` out of `segments`
fn rim_direction(i: u32, segments: u32) -> Vec2 {
    Vec2::from_angle(TAU * (i % segments) as f32 / segments as f32)
}

/// Filled circle as a fan of `segments` triangles
pub fn circle(center: Vec2, radius: f32, color: Color, segments: u32) -> Vec<Vertex> {
    let segments = segments.max(3);
    (0..segments)
        .flat_map(|i| {
            let a = center + rim_direction(i, segments) * radius;
            let b = center + rim_direction(i + 1, segments) * radius;
            [center, a, b]
        })
        .map(|p| Vertex::new(p.x, p.y, color))
        .collect()
}

/// Band between `inner_radius` and `outer_radius`, two triangles per segment
pub fn ring(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    color: Color,
    segments: u32,
) -> Vec<Vertex> {
    let segments = segments.max(3);
    (0..segments)
        .flat_map(|i| {
            let d1 = rim_direction(i, segments);
            let d2 = rim_direction(i + 1, segments);
            let (in1, out1) = (center + d1 * inner_radius, center + d1 * outer_radius);
            let (in2, out2) = (center + d2 * inner_radius, center + d2 * outer_radius);
            [in1, out1, in2, in2, out1, out2]
        })
        .map(|p| Vertex::new(p.x, p.y, color))
        .collect()
}

/// Generate vertices for a convex polygon as a triangle fan
pub fn polygon(points: &[Vec2], color: Color) -> Vec<Vertex> {
    let Some((first, rest)) = points.split_first() else {
        return Vec::new();
    };

    let mut vertices = Vec::with_capacity(rest.len().saturating_sub(1) * 3);
    for pair in rest.windows(2) {
        vertices.push(Vertex::new(first.x, first.y, color));
        vertices.push(Vertex::new(pair[0].x, pair[0].y, color));
        vertices.push(Vertex::new(pair[1].x, pair[1].y, color));
    }

    vertices
}

/// Generate vertices for an axis-aligned rectangle
pub fn rect(aabb: &Aabb, color: Color) -> Vec<Vertex> {
    polygon(
        &[
            aabb.min,
            Vec2::new(aabb.max.x, aabb.min.y),
            aabb.max,
            Vec2::new(aabb.min.x, aabb.max.y),
        ],
        color,
    )
}
