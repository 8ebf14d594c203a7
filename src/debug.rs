/*
 * Debug Information Module
 *
 * Read-only diagnostics about the running scene, shown in the debug window
 * and overlay when the program is launched with --debug.
 */

use std::time::Duration;

use nannou::prelude::*;

use crate::scene::Scene;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub particle_count: usize,
    pub field_points: usize,
    pub pointer_ndc: Vec2,
    pub field_angle: f32,
    pub frames_stepped: u64,
    pub frames_skipped: u64,
}

impl DebugInfo {
    pub fn refresh(&mut self, scene: &Scene, fps: f32, frame_time: Duration) {
        self.fps = fps;
        self.frame_time = frame_time;
        self.particle_count = scene.boids().len();
        self.field_points = scene.field().map_or(0, |field| field.len());
        self.pointer_ndc = scene.pointer().ndc();
        self.field_angle = scene.field().map_or(0.0, |field| field.angle());
        self.frames_stepped = scene.frames_stepped();
        self.frames_skipped = scene.frames_skipped();
    }

    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("FPS: {:.1}", self.fps),
            format!("Frame time: {:.2} ms", self.frame_time.as_secs_f64() * 1000.0),
            format!("Boids: {}", self.particle_count),
            format!("Field points: {}", self.field_points),
            format!("Pointer: ({:.2}, {:.2})", self.pointer_ndc.x, self.pointer_ndc.y),
            format!("Field angle: {:.3} rad", self.field_angle),
            format!("Frames: {} ({} skipped)", self.frames_stepped, self.frames_skipped),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{FieldParams, SwarmParams};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn default_reports_an_idle_scene() {
        let info = DebugInfo::default();
        assert_eq!(info.frame_time, Duration::ZERO);
        assert_eq!(info.pointer_ndc, Vec2::ZERO);
        assert_eq!(info.particle_count, 0);

        // A refresh against a scene that never started changes nothing
        let scene = Scene::new(SwarmParams::default(), FieldParams::default());
        let mut refreshed = DebugInfo::default();
        refreshed.refresh(&scene, 0.0, Duration::ZERO);
        assert_eq!(refreshed, info);
    }

    #[test]
    fn refresh_reads_scene_counters() {
        let mut scene = Scene::new(SwarmParams::default(), FieldParams::default());
        scene.start(&mut StdRng::seed_from_u64(11));

        let mut info = DebugInfo::default();
        info.refresh(&scene, 60.0, Duration::from_millis(16));

        assert_eq!(info.particle_count, 23);
        assert_eq!(info.field_points, 200);
        assert_eq!(info.frames_stepped, 0);
        assert_eq!(info.lines()[0], "FPS: 60.0");
        assert_eq!(info.lines()[2], "Boids: 23");
    }
}
