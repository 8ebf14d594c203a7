/*
 * Camera Module
 *
 * This module defines the perspective camera each layer of the scene is
 * viewed through. The camera sits on the +Z axis looking at the origin and
 * provides the transformations between world space and window space.
 */

use nannou::prelude::*;

use crate::params::{positive, ParamsError};
use crate::MIN_POINT_RADIUS;

// Closest depth a point may have and still be drawn
const NEAR_PLANE: f32 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PerspectiveCamera {
    // Distance from the origin along +Z
    pub distance: f32,
    // Vertical field of view in degrees
    pub fov_y: f32,
}

/// A world point mapped into window space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub screen: Vec2,
    pub depth: f32,
}

impl PerspectiveCamera {
    pub const fn new(distance: f32, fov_y: f32) -> Self {
        Self { distance, fov_y }
    }

    pub fn validate(&self) -> Result<(), ParamsError> {
        positive("camera.distance", self.distance)?;
        if !(self.fov_y > 0.0 && self.fov_y < 180.0) {
            return Err(ParamsError::FieldOfView(self.fov_y));
        }
        Ok(())
    }

    fn half_fov_tan(&self) -> f32 {
        (self.fov_y.to_radians() / 2.0).tan()
    }

    // Visible world-space extent of the z = 0 plane
    pub fn viewport_at_origin(&self, aspect: f32) -> Vec2 {
        let height = 2.0 * self.distance * self.half_fov_tan();
        vec2(height * aspect, height)
    }

    // Pixels per world unit at depth 1
    pub fn focal_length(&self, window_height: f32) -> f32 {
        (window_height / 2.0) / self.half_fov_tan()
    }

    // Convert a point from world space to window space
    pub fn project(&self, point: Vec3, window_rect: Rect) -> Option<Projected> {
        let depth = self.distance - point.z;
        if depth < NEAR_PLANE {
            return None;
        }

        let scale = self.focal_length(window_rect.h()) / depth;
        Some(Projected {
            screen: window_rect.xy() + vec2(point.x, point.y) * scale,
            depth,
        })
    }
}

/// On-screen radius of a point sprite of world `size` at `depth`.
///
/// Sprites shrink with distance the way attenuated GL points do: the
/// diameter in pixels is `size * (window_height / 2) / depth`.
pub fn point_radius(size: f32, depth: f32, window_height: f32) -> f32 {
    let diameter = size * (window_height / 2.0) / depth;
    (diameter / 2.0).max(MIN_POINT_RADIUS)
}
