/*
 * Scene Module
 *
 * The Scene drives both layers of the background animation from the host
 * frame loop. It owns the swarm, the ambient field, the pointer tracker and
 * the point buffer the renderer reads.
 *
 * Lifecycle:
 * - start() spawns the particles and attaches the pointer tracker
 * - attach_buffer() is called by the render side once it can draw
 * - frame() advances the field and steps the swarm
 * - stop() detaches the tracker and drops all particle state (also on drop)
 */

use std::time::Duration;

use log::{debug, info, trace};
use nannou::prelude::*;
use rand::Rng;

use crate::boid::Boid;
use crate::buffer::PointBuffer;
use crate::field::AmbientField;
use crate::input::PointerTracker;
use crate::params::{FieldParams, SwarmParams};
use crate::physics::{self, FrameContext};

/// What the host hands the scene on every rendered frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInput {
    pub elapsed: Duration,
    // Window size in pixels
    pub window_size: Vec2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    // Not started
    Idle,
    // Running, but no buffer to write into yet
    Skipped,
    Stepped,
}

struct Running {
    field: AmbientField,
    boids: Vec<Boid>,
    buffer: Option<PointBuffer>,
}

pub struct Scene {
    swarm_params: SwarmParams,
    field_params: FieldParams,
    pointer: PointerTracker,
    running: Option<Running>,
    frames_stepped: u64,
    frames_skipped: u64,
}

impl Scene {
    pub fn new(swarm_params: SwarmParams, field_params: FieldParams) -> Self {
        Self {
            swarm_params,
            field_params,
            pointer: PointerTracker::new(),
            running: None,
            frames_stepped: 0,
            frames_skipped: 0,
        }
    }

    pub fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.running.is_some() {
            return;
        }

        let field = AmbientField::new(&mut *rng, &self.field_params);
        let boids: Vec<Boid> = (0..self.swarm_params.count)
            .map(|_| Boid::random(&mut *rng, &self.swarm_params))
            .collect();
        debug!(
            "spawned {} boids and {} field points",
            boids.len(),
            field.len()
        );

        self.running = Some(Running {
            field,
            boids,
            buffer: None,
        });
        self.pointer.attach();
        info!("scene started");
    }

    pub fn stop(&mut self) {
        if self.running.take().is_none() {
            return;
        }
        self.pointer.detach();
        info!(
            "scene stopped after {} frames ({} skipped)",
            self.frames_stepped, self.frames_skipped
        );
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    // Create the point buffer, seeded with the current positions
    pub fn attach_buffer(&mut self) {
        if let Some(running) = self.running.as_mut() {
            if running.buffer.is_none() {
                running.buffer = Some(PointBuffer::from_boids(&running.boids));
                debug!("point buffer attached ({} points)", running.boids.len());
            }
        }
    }

    pub fn has_buffer(&self) -> bool {
        self.running
            .as_ref()
            .map_or(false, |running| running.buffer.is_some())
    }

    pub fn on_pointer_moved(&mut self, pixel: Vec2, viewport: Vec2) {
        self.pointer.on_pointer_moved(pixel, viewport);
    }

    // Pointer target in swarm world units for a window of `window_size` pixels
    pub fn frame_context(&self, window_size: Vec2) -> FrameContext {
        let aspect = if window_size.y > 0.0 {
            window_size.x / window_size.y
        } else {
            1.0
        };
        let extent = self.swarm_params.camera.viewport_at_origin(aspect);
        FrameContext::new(self.pointer.world_target(extent))
    }

    pub fn frame(&mut self, input: &FrameInput) -> FrameOutcome {
        let ctx = self.frame_context(input.window_size);

        let Some(running) = self.running.as_mut() else {
            return FrameOutcome::Idle;
        };

        running.field.advance(input.elapsed);

        let Some(buffer) = running.buffer.as_mut() else {
            self.frames_skipped += 1;
            trace!("no point buffer yet, skipping swarm step");
            return FrameOutcome::Skipped;
        };

        physics::step_swarm(&mut running.boids, &ctx, &self.swarm_params);
        buffer.write(&running.boids);
        self.frames_stepped += 1;

        FrameOutcome::Stepped
    }

    pub fn swarm_params(&self) -> &SwarmParams {
        &self.swarm_params
    }

    pub fn field_params(&self) -> &FieldParams {
        &self.field_params
    }

    pub fn pointer(&self) -> &PointerTracker {
        &self.pointer
    }

    pub fn boids(&self) -> &[Boid] {
        self.running
            .as_ref()
            .map(|running| running.boids.as_slice())
            .unwrap_or(&[])
    }

    pub fn buffer(&self) -> Option<&PointBuffer> {
        self.running.as_ref().and_then(|running| running.buffer.as_ref())
    }

    pub fn field(&self) -> Option<&AmbientField> {
        self.running.as_ref().map(|running| &running.field)
    }

    pub fn frames_stepped(&self) -> u64 {
        self.frames_stepped
    }

    pub fn frames_skipped(&self) -> u64 {
        self.frames_skipped
    }
}

impl Drop for Scene {
    fn drop(&mut self) {
        self.stop();
    }
}
