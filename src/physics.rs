/*
 * Physics Module
 *
 * This module implements the per-frame flocking step for the swarm.
 *
 * Every boid is updated from a snapshot of the swarm taken at the start of
 * the step, so the result does not depend on iteration order. The neighbour
 * scan is a plain O(n²) pass; swarms here hold a couple of dozen boids.
 *
 * Per boid:
 * 1. Separation, alignment and cohesion from neighbours closer than the radius
 * 2. Attraction toward the pointer target, always applied
 * 3. Speed clamp, integration and wrapping
 */

use nannou::prelude::*;

use crate::boid::Boid;
use crate::params::SwarmParams;

/// Per-frame inputs delivered by the host into the flocking step.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameContext {
    /// Pointer target in world units.
    pub target: Vec3,
}

impl FrameContext {
    pub fn new(target: Vec3) -> Self {
        Self { target }
    }
}

// Raw neighbour sums gathered for one boid
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Neighborhood {
    pub separation: Vec3,
    pub alignment: Vec3,
    pub cohesion: Vec3,
    pub count: usize,
}

// Sum the contributions of every boid strictly closer than `radius`
pub fn gather_neighborhood(snapshot: &[Boid], index: usize, radius: f32) -> Neighborhood {
    let boid = &snapshot[index];
    let mut neighborhood = Neighborhood::default();

    for (j, other) in snapshot.iter().enumerate() {
        if j == index {
            continue;
        }

        let d = boid.position.distance(other.position);
        if d < radius {
            // Coincident boids have no direction to push apart along
            if d > 0.0 {
                let away = (boid.position - other.position).normalize() / d;
                neighborhood.separation += away;
            }
            neighborhood.alignment += other.velocity;
            neighborhood.cohesion += other.position;
            neighborhood.count += 1;
        }
    }

    neighborhood
}

// Weighted flocking force, zero for an isolated boid
pub fn flocking_force(boid: &Boid, neighborhood: &Neighborhood, params: &SwarmParams) -> Vec3 {
    if neighborhood.count == 0 {
        return Vec3::ZERO;
    }

    let n = neighborhood.count as f32;
    let alignment = neighborhood.alignment / n;
    let cohesion = neighborhood.cohesion / n - boid.position;

    neighborhood.separation * params.separation_weight
        + alignment * params.alignment_weight
        + cohesion * params.cohesion_weight
}

pub fn attraction_force(boid: &Boid, target: Vec3, weight: f32) -> Vec3 {
    (target - boid.position) * weight
}

// Advance a single boid given its neighbourhood in the snapshot
pub fn step_boid(boid: &mut Boid, neighborhood: &Neighborhood, ctx: &FrameContext, params: &SwarmParams) {
    let flocking = flocking_force(boid, neighborhood, params);
    boid.apply_force(flocking);

    let attraction = attraction_force(boid, ctx.target, params.attraction_weight);
    boid.apply_force(attraction);

    boid.limit_speed(params.max_speed);
    boid.integrate();
    boid.wrap_edges(params.half_extents);
}

/// Advance the whole swarm by one frame.
pub fn step_swarm(boids: &mut [Boid], ctx: &FrameContext, params: &SwarmParams) {
    // Neighbour reads see the previous frame only
    let snapshot = boids.to_vec();

    for (i, boid) in boids.iter_mut().enumerate() {
        let neighborhood = gather_neighborhood(&snapshot, i, params.neighbor_radius);
        step_boid(boid, &neighborhood, ctx, params);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn still(x: f32, y: f32, z: f32) -> Boid {
        Boid::new(vec3(x, y, z), Vec3::ZERO)
    }

    #[test]
    fn isolated_boid_only_feels_the_pointer() {
        let params = SwarmParams::default();
        let mut boids = vec![still(0.0, 0.0, 0.0)];
        let ctx = FrameContext::new(vec3(10.0, 0.0, 0.0));

        step_swarm(&mut boids, &ctx, &params);

        let boid = boids[0];
        assert!((boid.velocity.x - 0.01).abs() < 1e-7);
        assert_eq!(boid.velocity.y, 0.0);
        assert_eq!(boid.velocity.z, 0.0);
        assert!((boid.position.x - 0.01).abs() < 1e-7);
    }

    #[test]
    fn neighbour_radius_is_exclusive() {
        let at_radius = vec![still(0.0, 0.0, 0.0), still(3.0, 0.0, 0.0)];
        assert_eq!(gather_neighborhood(&at_radius, 0, 3.0).count, 0);

        let inside = vec![still(0.0, 0.0, 0.0), still(2.999, 0.0, 0.0)];
        assert_eq!(gather_neighborhood(&inside, 0, 3.0).count, 1);
        assert_eq!(gather_neighborhood(&inside, 1, 3.0).count, 1);
    }

    #[test]
    fn separation_is_inversely_weighted_by_distance() {
        let snapshot = vec![still(0.0, 0.0, 0.0), still(2.0, 0.0, 0.0)];
        let neighborhood = gather_neighborhood(&snapshot, 0, 3.0);
        assert!((neighborhood.separation.x + 0.5).abs() < 1e-6);
        assert_eq!(neighborhood.cohesion, vec3(2.0, 0.0, 0.0));
    }

    #[test]
    fn flocking_force_combines_weighted_rules() {
        let params = SwarmParams::default();
        let boid = still(0.0, 0.0, 0.0);
        let other = Boid::new(vec3(2.0, 0.0, 0.0), vec3(0.0, 0.1, 0.0));
        let snapshot = vec![boid, other];

        let neighborhood = gather_neighborhood(&snapshot, 0, params.neighbor_radius);
        let force = flocking_force(&boid, &neighborhood, &params);

        // separation -0.5 * 0.1, cohesion 2.0 * 0.005
        assert!((force.x - (-0.05 + 0.01)).abs() < 1e-6);
        // alignment 0.1 * 0.05
        assert!((force.y - 0.005).abs() < 1e-6);
    }

    #[test]
    fn alignment_and_cohesion_average_over_all_neighbours() {
        let params = SwarmParams::default();
        let boid = still(0.0, 0.0, 0.0);
        let snapshot = vec![
            boid,
            Boid::new(vec3(2.0, 0.0, 0.0), vec3(0.0, 0.1, 0.0)),
            Boid::new(vec3(0.0, 2.0, 0.0), vec3(0.1, 0.0, 0.0)),
        ];

        let neighborhood = gather_neighborhood(&snapshot, 0, params.neighbor_radius);
        assert_eq!(neighborhood.count, 2);

        let force = flocking_force(&boid, &neighborhood, &params);

        // separation (-0.5, -0.5) * 0.1, mean velocity (0.05, 0.05) * 0.05,
        // mean position (1, 1) * 0.005
        let expected = vec3(-0.05 + 0.0025 + 0.005, -0.05 + 0.0025 + 0.005, 0.0);
        assert!((force - expected).length() < 1e-6, "force {:?}", force);
    }

    #[test]
    fn coincident_boids_do_not_produce_nan() {
        let params = SwarmParams::default();
        let mut boids = vec![still(1.0, 1.0, 1.0), still(1.0, 1.0, 1.0)];

        step_swarm(&mut boids, &FrameContext::default(), &params);

        for boid in &boids {
            assert!(boid.position.is_finite());
            assert!(boid.velocity.is_finite());
        }
    }

    #[test]
    fn update_uses_previous_frame_snapshot() {
        let params = SwarmParams::default();
        let start = vec![
            Boid::new(vec3(0.0, 0.0, 0.0), vec3(0.05, 0.0, 0.0)),
            Boid::new(vec3(1.0, 0.0, 0.0), vec3(-0.05, 0.0, 0.0)),
        ];
        let ctx = FrameContext::default();

        let mut forward = start.clone();
        step_swarm(&mut forward, &ctx, &params);

        let mut reversed: Vec<Boid> = start.iter().rev().copied().collect();
        step_swarm(&mut reversed, &ctx, &params);
        reversed.reverse();

        assert_eq!(forward, reversed);
    }
}
