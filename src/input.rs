/*
 * Input Module
 *
 * This module turns pointer events into sling gestures. Positions arrive in
 * window coordinates and are converted to surface coordinates before they
 * reach the gesture.
 *
 * - Left press starts aiming (unless the pointer is over the controls)
 * - Moving with the button held stretches the aiming line
 * - Releasing queues a launch with the scene
 */

use log::info;
use nannou::prelude::*;
use nannou::winit::event::MouseButton;

use crate::app::Model;

// Mouse moved event handler
// Button events carry no position, so presses and releases use the last cursor
// position seen here. nannou's own `app.mouse` is fed by the same event.
pub fn mouse_moved(app: &App, model: &mut Model, pos: Point2) {
    model.mouse_position = pos;

    let point = model.scene.surface().window_to_surface(pos, app.window_rect());
    model.gesture.drag(point);
}

// Mouse pressed event handler
pub fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    if button != MouseButton::Left {
        return;
    }

    // Check if the click is on the UI before starting a sling
    if model.egui.ctx().is_pointer_over_area() {
        return;
    }

    let point = model.scene.surface().window_to_surface(model.mouse_position, app.window_rect());
    model.gesture.press(point);
}

// Mouse released event handler
pub fn mouse_released(app: &App, model: &mut Model, button: MouseButton) {
    if button != MouseButton::Left {
        return;
    }

    let point = model.scene.surface().window_to_surface(model.mouse_position, app.window_rect());
    if let Some(request) = model.gesture.release(point, model.params.physics.sling_factor) {
        info!(
            "slinging ball from ({:.0}, {:.0}) at ({:.1}, {:.1})",
            request.position.x, request.position.y, request.velocity.x, request.velocity.y
        );
        model.handle.launch(request);
    }
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
