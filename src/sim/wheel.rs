//! The rotating wheel
//!
//! Each ring has one template box sitting straight above the rotation origin.
//! An obstacle's world-space shape is its ring template rotated by the
//! obstacle angle and then moved to the screen centre.

use glam::Vec2;

use super::collision::Aabb;
use super::generate::{PlacementSource, generate_obstacles};
use super::point_set::PointSet;
use super::state::{Obstacle, Ring};
use crate::error::GenerationError;
use crate::renderer::{Fill, Renderer, colors};
use crate::settings::{GeneratorConfig, WheelConfig};

#[derive(Debug, Clone, PartialEq)]
pub struct Wheel {
    obstacles: Vec<Obstacle>,
    outer_template: PointSet,
    inner_template: PointSet,
    size: f32,
    dist_from_edge: f32,
    box_radius: f32,
    ring_separation: f32,
    guide_width: f32,
}

impl Wheel {
    pub fn new(config: &WheelConfig, ring_separation: f32, obstacles: Vec<Obstacle>) -> Self {
        let outer_box = Aabb::from_center_half_extent(
            Vec2::new(0.0, -(config.size - config.dist_from_edge)),
            config.box_radius,
        );
        let outer_template = PointSet::from_box(&outer_box);
        let inner_template = outer_template.translate(Vec2::new(0.0, ring_separation));

        Self {
            obstacles,
            outer_template,
            inner_template,
            size: config.size,
            dist_from_edge: config.dist_from_edge,
            box_radius: config.box_radius,
            ring_separation,
            guide_width: config.guide_width,
        }
    }

    /// Build a wheel around a freshly generated obstacle set
    pub fn generate<S: PlacementSource>(
        config: &WheelConfig,
        ring_separation: f32,
        generator: &GeneratorConfig,
        source: &mut S,
    ) -> Result<Self, GenerationError> {
        let obstacles = generate_obstacles(generator, source)?;
        Ok(Self::new(config, ring_separation, obstacles))
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn box_radius(&self) -> f32 {
        self.box_radius
    }

    pub fn ring_separation(&self) -> f32 {
        self.ring_separation
    }

    /// Distance from the rotation origin to a ring's box centre
    pub fn ring_radius(&self, ring: Ring) -> f32 {
        match ring {
            Ring::Outer => self.size - self.dist_from_edge,
            Ring::Inner => self.size - self.dist_from_edge - self.ring_separation,
        }
    }

    /// Radius of the guide circle drawn between the rings
    pub fn guide_radius(&self) -> f32 {
        self.size - self.dist_from_edge - (self.ring_separation / 2.0).floor()
    }

    pub fn template(&self, ring: Ring) -> &PointSet {
        match ring {
            Ring::Outer => &self.outer_template,
            Ring::Inner => &self.inner_template,
        }
    }

    /// Advance every obstacle by its speed
    pub fn rotate(&mut self) {
        for obstacle in &mut self.obstacles {
            obstacle.advance();
        }
    }

    /// World-space shape of a box on `ring` at `angle` degrees
    pub fn shape_at(&self, ring: Ring, angle: f32, center: Vec2) -> PointSet {
        self.template(ring).rotate(angle).translate(center)
    }

    /// World-space shapes of every obstacle, in obstacle order
    pub fn shapes(&self, center: Vec2) -> Vec<PointSet> {
        self.obstacles
            .iter()
            .map(|ob| self.shape_at(ob.ring, ob.angle, center))
            .collect()
    }

    /// Draw the wheel and its obstacles, returning one box per obstacle
    pub fn render<R: Renderer>(&self, renderer: &mut R, center: Vec2) -> Vec<Aabb> {
        renderer.draw_circle(center, self.size, colors::WHEEL, Fill::Solid);
        renderer.draw_circle(
            center,
            self.guide_radius(),
            colors::GUIDE,
            Fill::Outline(self.guide_width),
        );

        self.shapes(center)
            .iter()
            .map(|shape| renderer.draw_polygon(shape.points(), colors::OBSTACLE))
            .collect()
    }
}
