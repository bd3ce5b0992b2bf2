/*
 * Renderer Module
 *
 * This module draws a frame: the aiming line while a sling is being pulled,
 * every live ball in launch order, and the debug overlay when enabled.
 * Finished balls were already reaped by this frame's update.
 */

use log::error;
use nannou::prelude::*;

use crate::app::Model;
use crate::ui;

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(BLACK);

    let window_rect = app.window_rect();
    let surface = model.scene.surface();

    if let Some((anchor, current)) = model.gesture.aiming_line() {
        draw.line()
            .start(surface.surface_to_window(anchor, window_rect))
            .end(surface.surface_to_window(current, window_rect))
            .weight(2.0)
            .color(WHITE);
    }

    for ball in model.scene.balls() {
        ball.draw(&draw, surface, window_rect);
    }

    if model.params.show_debug {
        ui::draw_debug_info(&draw, &model.debug_info, window_rect);
    }

    // A failed frame is skipped; the next one redraws everything
    if let Err(err) = draw.to_frame(app, &frame) {
        error!("failed to draw frame: {:?}", err);
    }

    if let Err(err) = model.egui.draw_to_frame(&frame) {
        error!("failed to draw controls: {:?}", err);
    }
}
