/*
 * UI Module
 *
 * Diagnostics only: an egui window listing the scene counters, and a text
 * overlay drawn straight into the frame. Neither offers any controls.
 */

use nannou::prelude::*;
use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::Variant;

// Build the diagnostics window for this frame
pub fn update_ui(egui: &mut Egui, debug_info: &DebugInfo, variant: Variant) {
    let ctx = egui.begin_frame();

    egui::Window::new("Diagnostics")
        .default_pos([10.0, 10.0])
        .resizable(false)
        .show(&ctx, |ui| {
            ui.label(format!("Variant: {:?}", variant));
            ui.separator();
            for line in debug_info.lines() {
                ui.label(line);
            }
        });
}

// Draw debug information on the screen
pub fn draw_debug_info(draw: &Draw, debug_info: &DebugInfo, window_rect: Rect) {
    let lines = debug_info.lines();

    let margin = 20.0;
    let line_height = 20.0;
    let panel_width = 240.0;
    let panel_height = line_height * lines.len() as f32 + margin;
    let panel_x = window_rect.right() - panel_width / 2.0;
    let panel_y = window_rect.bottom() + panel_height / 2.0;

    draw.rect()
        .x_y(panel_x, panel_y)
        .w_h(panel_width, panel_height)
        .color(rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = window_rect.right() - panel_width + margin;
    let text_top = window_rect.bottom() + panel_height - margin;

    for (i, text) in lines.iter().enumerate() {
        let y = text_top - i as f32 * line_height;

        // nannou centres text on its position, so shift by half the box
        draw.text(text)
            .x_y(text_x + 90.0, y)
            .w(180.0)
            .left_justify()
            .color(WHITE)
            .font_size(14);
    }
}
