/*
 * Ambient Field Module
 *
 * A cloud of fixed points that turns slowly about the vertical axis behind
 * the page. The angle is derived from elapsed wall-clock time, so the spin
 * rate does not depend on the frame rate.
 */

use std::time::Duration;

use nannou::glam::Quat;
use nannou::prelude::*;
use rand::Rng;

use crate::params::FieldParams;

pub struct AmbientField {
    points: Vec<Vec3>,
    angular_speed: f32,
    angle: f32,
}

impl AmbientField {
    pub fn new<R: Rng + ?Sized>(rng: &mut R, params: &FieldParams) -> Self {
        let half = params.spread / 2.0;
        let points = (0..params.count)
            .map(|_| {
                vec3(
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                )
            })
            .collect();

        Self {
            points,
            angular_speed: params.angular_speed,
            angle: 0.0,
        }
    }

    // Set the angle from the time elapsed since the animation started
    pub fn advance(&mut self, elapsed: Duration) {
        self.angle = elapsed.as_secs_f32() * self.angular_speed;
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    // Points in world space with the current rotation applied
    pub fn rotated_points(&self) -> impl Iterator<Item = Vec3> + '_ {
        let rotation = self.rotation();
        self.points.iter().map(move |&p| rotation * p)
    }

    /// Current orientation of the field, a right-handed turn about Y.
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.angle)
    }
}
