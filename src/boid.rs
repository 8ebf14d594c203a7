/*
 * Boid Module
 *
 * This module defines the Boid struct: a single member of the swarm with a
 * position and a velocity in 3D. Steering forces are added straight onto the
 * velocity, which is then clamped to the speed limit before the boid moves.
 * Boids that leave the box re-enter from the opposite face.
 */

use nannou::prelude::*;
use rand::Rng;

use crate::params::SwarmParams;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Boid {
    pub position: Vec3,
    pub velocity: Vec3,
}

impl Boid {
    pub fn new(position: Vec3, velocity: Vec3) -> Self {
        Self { position, velocity }
    }

    // Random position inside the wrap box and a small random velocity
    pub fn random<R: Rng + ?Sized>(rng: &mut R, params: &SwarmParams) -> Self {
        let extents = params.half_extents;
        let position = vec3(
            rng.gen_range(-extents.x..extents.x),
            rng.gen_range(-extents.y..extents.y),
            rng.gen_range(-extents.z..extents.z),
        );

        let speed = params.spawn_speed;
        let velocity = if speed > 0.0 {
            vec3(
                rng.gen_range(-speed..speed),
                rng.gen_range(-speed..speed),
                rng.gen_range(-speed..speed),
            )
        } else {
            Vec3::ZERO
        };

        Self { position, velocity }
    }

    // Apply a steering force to the boid
    pub fn apply_force(&mut self, force: Vec3) {
        self.velocity += force;
    }

    // Rescale the velocity onto the speed limit when it exceeds it
    pub fn limit_speed(&mut self, max_speed: f32) {
        if self.velocity.length() > max_speed {
            self.velocity = self.velocity.normalize() * max_speed;
        }
    }

    pub fn integrate(&mut self) {
        self.position += self.velocity;
    }

    // Wrap the boid around the faces of the box
    pub fn wrap_edges(&mut self, half_extents: Vec3) {
        self.position.x = wrap_axis(self.position.x, half_extents.x);
        self.position.y = wrap_axis(self.position.y, half_extents.y);
        self.position.z = wrap_axis(self.position.z, half_extents.z);
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

/// Teleport `value` to the opposite bound once it leaves `[-half, half]`.
pub fn wrap_axis(value: f32, half: f32) -> f32 {
    if value > half {
        -half
    } else if value < -half {
        half
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn wrap_teleports_instead_of_clamping() {
        assert_eq!(wrap_axis(10.05, 10.0), -10.0);
        assert_eq!(wrap_axis(-10.05, 10.0), 10.0);
        assert_eq!(wrap_axis(10.0, 10.0), 10.0);
        assert_eq!(wrap_axis(-4.5, 5.0), -4.5);
    }

    #[test]
    fn wrap_edges_handles_each_axis_independently() {
        let mut boid = Boid::new(vec3(10.5, -5.1, 2.0), Vec3::ZERO);
        boid.wrap_edges(vec3(10.0, 5.0, 5.0));
        assert_eq!(boid.position, vec3(-10.0, 5.0, 2.0));
    }

    #[test]
    fn speed_limit_keeps_direction() {
        let mut boid = Boid::new(Vec3::ZERO, vec3(3.0, 4.0, 0.0));
        boid.limit_speed(0.2);
        assert!((boid.speed() - 0.2).abs() < 1e-6);
        assert!((boid.velocity.x - 0.12).abs() < 1e-6);
        assert!((boid.velocity.y - 0.16).abs() < 1e-6);
    }

    #[test]
    fn slow_boids_are_not_rescaled() {
        let mut boid = Boid::new(Vec3::ZERO, vec3(0.01, 0.0, 0.0));
        boid.limit_speed(0.2);
        assert_eq!(boid.velocity, vec3(0.01, 0.0, 0.0));
    }

    #[test]
    fn random_boids_spawn_inside_the_box() {
        let params = SwarmParams::default();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..500 {
            let boid = Boid::random(&mut rng, &params);
            assert!(boid.position.x >= -10.0 && boid.position.x < 10.0);
            assert!(boid.position.y >= -5.0 && boid.position.y < 5.0);
            assert!(boid.position.z >= -5.0 && boid.position.z < 5.0);
            assert!(boid.velocity.x.abs() <= 0.05);
            assert!(boid.velocity.y.abs() <= 0.05);
            assert!(boid.velocity.z.abs() <= 0.05);
        }
    }
}
