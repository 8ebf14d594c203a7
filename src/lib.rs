/*
 * Lucid Swarm - Module Definitions
 *
 * The background animation of the Lucid Solution Designers pages: a slowly
 * rotating particle field behind a small boids swarm that drifts toward the
 * pointer. The simulation modules are plain data and math; app, input,
 * renderer and ui bind them to a nannou window.
 */

// Re-export key components for easier access
pub use boid::Boid;
pub use buffer::PointBuffer;
pub use camera::PerspectiveCamera;
pub use config::{Args, LaunchConfig};
pub use debug::DebugInfo;
pub use field::AmbientField;
pub use input::PointerTracker;
pub use params::{FieldParams, ParamsError, SwarmParams, Variant};
pub use physics::{step_swarm, FrameContext};
pub use scene::{FrameInput, FrameOutcome, Scene};

// Define modules
pub mod app;
pub mod boid;
pub mod buffer;
pub mod camera;
pub mod config;
pub mod debug;
pub mod field;
pub mod input;
pub mod params;
pub mod physics;
pub mod renderer;
pub mod scene;
pub mod ui;

// Smallest radius, in pixels, a point is drawn with
pub const MIN_POINT_RADIUS: f32 = 1.0;
