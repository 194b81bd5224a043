//! Axis-aligned collision boxes
//!
//! Every drawn shape reports an [`Aabb`]; collisions are tested between these
//! boxes rather than the shapes themselves.

use glam::Vec2;

/// Axis-aligned bounding box in screen space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Contains nothing and intersects nothing
    pub const EMPTY: Self = Self {
        min: Vec2::INFINITY,
        max: Vec2::NEG_INFINITY,
    };

    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    pub fn from_min_size(min: Vec2, size: Vec2) -> Self {
        Self::new(min, min + size)
    }

    pub fn from_center_half_extent(center: Vec2, half_extent: f32) -> Self {
        let half = Vec2::splat(half_extent);
        Self::new(center - half, center + half)
    }

    /// Smallest box containing every point, `None` for an empty slice
    pub fn from_points(points: &[Vec2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let (min, max) = rest
            .iter()
            .fold((*first, *first), |(min, max), p| (min.min(*p), max.max(*p)));
        Some(Self { min, max })
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) / 2.0
    }

    pub fn translate(&self, offset: Vec2) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// Overlap test on open ranges: boxes that only share an edge do not collide
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}

/// Index of the first box in `others` that overlaps `target`
pub fn first_collision(target: &Aabb, others: &[Aabb]) -> Option<usize> {
    others.iter().position(|other| target.intersects(other))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Aabb {
        Aabb::from_min_size(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn test_overlap_on_both_axes() {
        let a = rect(0.0, 0.0, 20.0, 20.0);
        let b = rect(10.0, 10.0, 20.0, 20.0);
        assert!(a.intersects(&b));
    }

    #[test]
    fn test_overlap_on_one_axis_only() {
        let a = rect(0.0, 0.0, 20.0, 20.0);
        // Same x range, disjoint y range
        let b = rect(5.0, 30.0, 20.0, 20.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_shared_edge_is_not_a_hit() {
        let a = rect(0.0, 0.0, 20.0, 20.0);
        let b = rect(20.0, 0.0, 20.0, 20.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_from_points() {
        let points = [
            Vec2::new(3.0, -1.0),
            Vec2::new(-2.0, 4.0),
            Vec2::new(0.5, 0.5),
        ];
        let aabb = Aabb::from_points(&points).unwrap();
        assert_eq!(aabb.min, Vec2::new(-2.0, -1.0));
        assert_eq!(aabb.max, Vec2::new(3.0, 4.0));
        assert!(Aabb::from_points(&[]).is_none());
    }

    #[test]
    fn test_empty_never_collides() {
        let everything = rect(-1e6, -1e6, 2e6, 2e6);
        assert!(!Aabb::EMPTY.intersects(&everything));
        assert!(!everything.intersects(&Aabb::EMPTY));
    }

    #[test]
    fn test_first_collision() {
        let player = rect(0.0, 0.0, 10.0, 10.0);
        let obstacles = [
            rect(50.0, 50.0, 10.0, 10.0),
            rect(5.0, 5.0, 10.0, 10.0),
            rect(-5.0, -5.0, 10.0, 10.0),
        ];
        assert_eq!(first_collision(&player, &obstacles), Some(1));
        assert_eq!(first_collision(&player, &obstacles[..1]), None);
    }

    proptest! {
        #[test]
        fn prop_collision_is_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            aw in 0.0f32..100.0, ah in 0.0f32..100.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            bw in 0.0f32..100.0, bh in 0.0f32..100.0,
        ) {
            let a = rect(ax, ay, aw, ah);
            let b = rect(bx, by, bw, bh);
            prop_assert_eq!(a.intersects(&b), b.intersects(&a));

            let x_overlap = ax < bx + bw && bx < ax + aw;
            let y_overlap = ay < by + bh && by < ay + ah;
            prop_assert_eq!(a.intersects(&b), x_overlap && y_overlap);
        }
    }
}
