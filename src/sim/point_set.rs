//! Rigid point sets
//!
//! A small ordered point cloud moved by whole-set transforms. Rotation is
//! always about the origin, not the centroid, so a template placed away from
//! the origin swings around it. Build world-space shapes by rotating first and
//! translating second.

use glam::Vec2;

use super::collision::Aabb;
use crate::rotate_degrees;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointSet {
    points: Vec<Vec2>,
}

impl PointSet {
    pub fn new(points: impl Into<Vec<Vec2>>) -> Self {
        Self {
            points: points.into(),
        }
    }

    /// Corners of an axis-aligned box in drawing order:
    /// top-left, top-right, bottom-right, bottom-left
    pub fn from_box(aabb: &Aabb) -> Self {
        Self::new([
            aabb.min,
            Vec2::new(aabb.max.x, aabb.min.y),
            aabb.max,
            Vec2::new(aabb.min.x, aabb.max.y),
        ])
    }

    #[inline]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Rotate every point about the origin by `degrees`
    pub fn rotate(&self, degrees: f32) -> Self {
        Self {
            points: self
                .points
                .iter()
                .map(|p| rotate_degrees(*p, degrees))
                .collect(),
        }
    }

    /// Offset every point
    pub fn translate(&self, offset: Vec2) -> Self {
        Self {
            points: self.points.iter().map(|p| *p + offset).collect(),
        }
    }

    pub fn bounding_box(&self) -> Option<Aabb> {
        Aabb::from_points(&self.points)
    }
}
