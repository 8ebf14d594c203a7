/*
 * Application Module
 *
 * This module wires the scene into nannou's frame loop. nannou calls update
 * once per frame on the same thread that delivers window events, so the
 * pointer target reaches the swarm as a plain value with no locking.
 */

use std::sync::OnceLock;

use anyhow::anyhow;
use log::{error, info, warn};
use nannou::prelude::*;
use nannou::winit::event::WindowEvent;
use nannou_egui::Egui;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::LaunchConfig;
use crate::debug::DebugInfo;
use crate::input::mouse_moved;
use crate::params::Variant;
use crate::renderer::view;
use crate::scene::{FrameInput, Scene};
use crate::ui;

// nannou's model function cannot capture, so the launch config is parked here
static LAUNCH: OnceLock<LaunchConfig> = OnceLock::new();

// Fallback window size when no monitor is reported
const DEFAULT_WINDOW: (f32, f32) = (1280.0, 800.0);

// Main model for the application
pub struct Model {
    pub scene: Scene,
    pub variant: Variant,
    pub egui: Option<Egui>,
    pub debug_info: DebugInfo,
    pub show_debug: bool,
}

pub fn run(config: LaunchConfig) -> anyhow::Result<()> {
    LAUNCH
        .set(config)
        .map_err(|_| anyhow!("the scene has already been launched"))?;

    nannou::app(model).update(update).exit(exit).run();
    Ok(())
}

// Initialize the model
fn model(app: &App) -> Model {
    let config = LAUNCH.get().cloned().unwrap_or_else(|| {
        warn!("no launch configuration set, using the landing defaults");
        LaunchConfig::default()
    });

    // Calculate window size based on monitor size (80% of monitor size)
    let (window_width, window_height) = app
        .primary_monitor()
        .map(|monitor| {
            let size = monitor.size();
            (size.width as f32 * 0.8, size.height as f32 * 0.8)
        })
        .unwrap_or(DEFAULT_WINDOW);

    let window_id = match app
        .new_window()
        .title(config.variant.title())
        .size(window_width as u32, window_height as u32)
        .view(view)
        .mouse_moved(mouse_moved)
        .raw_event(raw_window_event)
        .build()
    {
        Ok(id) => id,
        Err(err) => {
            error!("failed to create window: {:?}", err);
            std::process::exit(1);
        }
    };
    info!(
        "opened {:.0}x{:.0} window for the {:?} variant",
        window_width, window_height, config.variant
    );

    let egui = if config.debug {
        app.window(window_id).map(|window| Egui::from_window(&window))
    } else {
        None
    };

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut scene = Scene::new(config.swarm.clone(), config.field.clone());
    scene.start(&mut rng);

    Model {
        scene,
        variant: config.variant,
        egui,
        debug_info: DebugInfo::default(),
        show_debug: config.debug,
    }
}

// Update the model
fn update(app: &App, model: &mut Model, update: Update) {
    let window_rect = app.window_rect();
    let input = FrameInput {
        elapsed: update.since_start,
        window_size: vec2(window_rect.w(), window_rect.h()),
    };

    model.scene.frame(&input);

    // The first frame runs before anything has been drawn; the swarm picks up next frame
    if !model.scene.has_buffer() {
        model.scene.attach_buffer();
    }

    if model.show_debug {
        model
            .debug_info
            .refresh(&model.scene, app.fps(), update.since_last);

        if let Some(egui) = model.egui.as_mut() {
            ui::update_ui(egui, &model.debug_info, model.variant);
        }
    }
}

fn exit(_app: &App, mut model: Model) {
    model.scene.stop();
}

// Handle raw window events for egui
fn raw_window_event(_app: &App, model: &mut Model, event: &WindowEvent) {
    if let Some(egui) = model.egui.as_mut() {
        egui.handle_raw_event(event);
    }
}
