/*
 * Input Module
 *
 * This module tracks the pointer and hands its latest position to the swarm.
 *
 * Pointer positions arrive as device pixels (origin top-left, y down) and are
 * stored in normalized device coordinates (origin centre, y up, [-1, 1]).
 * The tracker only listens while it is attached; the scene attaches it on
 * start and detaches it on stop.
 */

use nannou::prelude::*;

use crate::app::Model;

// Convert device pixel coordinates to normalized device coordinates
pub fn pixel_to_ndc(pixel: Vec2, viewport: Vec2) -> Vec2 {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return Vec2::ZERO;
    }

    vec2(
        (pixel.x / viewport.x) * 2.0 - 1.0,
        -(pixel.y / viewport.y) * 2.0 + 1.0,
    )
}

// nannou reports the cursor relative to the window centre with y up
pub fn window_to_pixel(pos: Point2, window_rect: Rect) -> Vec2 {
    vec2(pos.x - window_rect.left(), window_rect.top() - pos.y)
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerTracker {
    ndc: Vec2,
    attached: bool,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self) {
        self.attached = true;
    }

    // Stop listening; the last target is forgotten
    pub fn detach(&mut self) {
        self.attached = false;
        self.ndc = Vec2::ZERO;
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    // Returns false when the notification was ignored
    pub fn on_pointer_moved(&mut self, pixel: Vec2, viewport: Vec2) -> bool {
        if !self.attached {
            return false;
        }
        self.ndc = pixel_to_ndc(pixel, viewport);
        true
    }

    pub fn ndc(&self) -> Vec2 {
        self.ndc
    }

    // Pointer target on the z = 0 plane of a viewport `extent` world units wide and high
    pub fn world_target(&self, extent: Vec2) -> Vec3 {
        vec3(self.ndc.x * extent.x / 2.0, self.ndc.y * extent.y / 2.0, 0.0)
    }
}

// Mouse moved event handler
pub fn mouse_moved(app: &App, model: &mut Model, pos: Point2) {
    let window_rect = app.window_rect();
    let pixel = window_to_pixel(pos, window_rect);
    model
        .scene
        .on_pointer_moved(pixel, vec2(window_rect.w(), window_rect.h()));
}
