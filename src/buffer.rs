/*
 * Point Buffer Module
 *
 * Flat xyz storage for the swarm's point cloud, laid out the way a vertex
 * position attribute is: [x0, y0, z0, x1, y1, z1, ...].
 */

use nannou::prelude::*;

use crate::boid::Boid;

#[derive(Clone, Debug, PartialEq)]
pub struct PointBuffer {
    data: Vec<f32>,
}

impl PointBuffer {
    pub fn new(count: usize) -> Self {
        Self { data: vec![0.0; count * 3] }
    }

    pub fn from_boids(boids: &[Boid]) -> Self {
        let mut buffer = Self::new(boids.len());
        buffer.write(boids);
        buffer
    }

    // Copy boid positions into the buffer, one xyz triple per boid
    pub fn write(&mut self, boids: &[Boid]) {
        debug_assert_eq!(boids.len() * 3, self.data.len());

        for (slot, boid) in self.data.chunks_exact_mut(3).zip(boids) {
            slot[0] = boid.position.x;
            slot[1] = boid.position.y;
            slot[2] = boid.position.z;
        }
    }

    pub fn len(&self) -> usize {
        self.data.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.data.chunks_exact(3).map(|p| vec3(p[0], p[1], p[2]))
    }
}
