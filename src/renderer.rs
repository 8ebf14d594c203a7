/*
 * Renderer Module
 *
 * This module draws the two layers of the scene: the rotating ambient field
 * at the back and the swarm's point cloud on top. Each layer is projected
 * through its own camera, and points shrink with depth.
 */

use log::error;
use nannou::prelude::*;
use nannou::wgpu;

use crate::app::Model;
use crate::camera::{point_radius, PerspectiveCamera};
use crate::ui;

// The swarm glows where points overlap
pub const SWARM_BLEND: wgpu::BlendComponent = wgpu::BlendComponent {
    src_factor: wgpu::BlendFactor::SrcAlpha,
    dst_factor: wgpu::BlendFactor::One,
    operation: wgpu::BlendOperation::Add,
};

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(BLACK);

    let window_rect = app.window_rect();
    let scene = &model.scene;

    if let Some(field) = scene.field() {
        let params = scene.field_params();
        draw_points(
            &draw,
            field.rotated_points(),
            &params.camera,
            window_rect,
            params.point_size,
            color_with_alpha(params.color, params.opacity),
        );
    }

    // The buffer only exists once the swarm is live
    if let Some(buffer) = scene.buffer() {
        let params = scene.swarm_params();
        draw_points(
            &draw.color_blend(SWARM_BLEND),
            buffer.positions(),
            &params.camera,
            window_rect,
            params.point_size,
            color_with_alpha(params.color, 1.0),
        );
    }

    if model.show_debug {
        ui::draw_debug_info(&draw, &model.debug_info, window_rect);
    }

    if let Err(err) = draw.to_frame(app, &frame) {
        error!("failed to draw frame: {:?}", err);
    }

    if let Some(egui) = &model.egui {
        if let Err(err) = egui.draw_to_frame(&frame) {
            error!("failed to draw diagnostics window: {:?}", err);
        }
    }
}

fn draw_points<I>(
    draw: &Draw,
    points: I,
    camera: &PerspectiveCamera,
    window_rect: Rect,
    size: f32,
    color: Rgba,
) where
    I: Iterator<Item = Vec3>,
{
    for point in points {
        let Some(projected) = camera.project(point, window_rect) else {
            continue;
        };
        if !window_rect.contains(projected.screen) {
            continue;
        }

        let radius = point_radius(size, projected.depth, window_rect.h());
        draw.ellipse()
            .xy(projected.screen)
            .radius(radius)
            .color(color);
    }
}

fn color_with_alpha(color: Rgb<u8>, alpha: f32) -> Rgba {
    rgba(
        color.red as f32 / 255.0,
        color.green as f32 / 255.0,
        color.blue as f32 / 255.0,
        alpha,
    )
}
