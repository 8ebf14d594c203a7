/*
 * Scene Parameters Module
 *
 * This module defines the fixed parameters of the swarm and the ambient
 * field. The two page variants share one flocking component and differ only
 * in the values set here (particle count, colour and point size).
 */

use nannou::prelude::*;
use thiserror::Error;

use crate::camera::PerspectiveCamera;

/// Errors raised when a parameter set cannot drive the animation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParamsError {
    #[error("the swarm needs at least one particle")]
    EmptySwarm,
    #[error("the ambient field needs at least one point")]
    EmptyField,
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },
    #[error("{name} must be finite")]
    NonFinite { name: &'static str },
    #[error("field of view must lie in (0, 180) degrees, got {0}")]
    FieldOfView(f32),
    #[error("opacity must lie in [0, 1], got {0}")]
    Opacity(f32),
}

/// Page variant the scene is rendered for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Variant {
    /// Landing page hero: the larger, cyan swarm.
    #[default]
    Landing,
    /// Founders page: a handful of larger blue points.
    Founders,
}

impl Variant {
    pub fn swarm_params(self) -> SwarmParams {
        match self {
            Variant::Landing => SwarmParams::default(),
            Variant::Founders => SwarmParams {
                count: 7,
                color: rgb(0x60, 0xa5, 0xfa),
                point_size: 0.08,
                ..SwarmParams::default()
            },
        }
    }

    pub fn field_params(self) -> FieldParams {
        FieldParams::default()
    }

    pub fn title(self) -> &'static str {
        match self {
            Variant::Landing => "Lucid Solution Designers",
            Variant::Founders => "Lucid Solution Designers - Founders",
        }
    }
}

// Parameters of the flocking swarm
#[derive(Clone, Debug, PartialEq)]
pub struct SwarmParams {
    pub count: usize,
    pub neighbor_radius: f32,
    pub separation_weight: f32,
    pub alignment_weight: f32,
    pub cohesion_weight: f32,
    pub attraction_weight: f32,
    pub max_speed: f32,
    // Half-size of the wrap box on each axis
    pub half_extents: Vec3,
    // Initial velocities are drawn from [-spawn_speed, spawn_speed) per axis
    pub spawn_speed: f32,
    pub color: Rgb<u8>,
    pub point_size: f32,
    pub camera: PerspectiveCamera,
}

impl Default for SwarmParams {
    fn default() -> Self {
        Self {
            count: 23,
            neighbor_radius: 3.0,
            separation_weight: 0.1,
            alignment_weight: 0.05,
            cohesion_weight: 0.005,
            attraction_weight: 0.001,
            max_speed: 0.2,
            half_extents: vec3(10.0, 5.0, 5.0),
            spawn_speed: 0.05,
            color: rgb(0x00, 0xd4, 0xff),
            point_size: 0.05,
            camera: PerspectiveCamera::new(15.0, 60.0),
        }
    }
}

impl SwarmParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.count == 0 {
            return Err(ParamsError::EmptySwarm);
        }

        for (name, value) in [
            ("separation_weight", self.separation_weight),
            ("alignment_weight", self.alignment_weight),
            ("cohesion_weight", self.cohesion_weight),
            ("attraction_weight", self.attraction_weight),
            ("spawn_speed", self.spawn_speed),
        ] {
            finite(name, value)?;
        }

        positive("neighbor_radius", self.neighbor_radius)?;
        positive("max_speed", self.max_speed)?;
        positive("half_extents.x", self.half_extents.x)?;
        positive("half_extents.y", self.half_extents.y)?;
        positive("half_extents.z", self.half_extents.z)?;
        positive("point_size", self.point_size)?;
        self.camera.validate()
    }
}

// Parameters of the rotating background field
#[derive(Clone, Debug, PartialEq)]
pub struct FieldParams {
    pub count: usize,
    // Edge length of the cube the points are scattered in
    pub spread: f32,
    // Radians per second of elapsed time
    pub angular_speed: f32,
    pub color: Rgb<u8>,
    pub opacity: f32,
    pub point_size: f32,
    pub camera: PerspectiveCamera,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            count: 200,
            spread: 50.0,
            angular_speed: 0.05,
            color: rgb(0xff, 0xff, 0xff),
            opacity: 0.3,
            point_size: 0.02,
            camera: PerspectiveCamera::new(10.0, 75.0),
        }
    }
}

impl FieldParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.count == 0 {
            return Err(ParamsError::EmptyField);
        }
        positive("spread", self.spread)?;
        finite("angular_speed", self.angular_speed)?;
        positive("point_size", self.point_size)?;
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(ParamsError::Opacity(self.opacity));
        }
        self.camera.validate()
    }
}

fn finite(name: &'static str, value: f32) -> Result<(), ParamsError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ParamsError::NonFinite { name })
    }
}

pub(crate) fn positive(name: &'static str, value: f32) -> Result<(), ParamsError> {
    finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ParamsError::NonPositive { name, value })
    }
}
