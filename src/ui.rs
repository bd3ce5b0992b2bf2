/*
 * UI Module
 *
 * This module contains functions for creating and updating the user interface
 * using nannou_egui. It provides controls for adjusting the physics while balls
 * are in flight, and draws the debug overlay.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::SimulationParams;

// Update the UI and return whether the scene should be cleared and whether the physics changed
pub fn update_ui(
    egui: &mut Egui,
    params: &mut SimulationParams,
    debug_info: &DebugInfo,
) -> (bool, bool) {
    let mut clear_requested = false;

    // Take a snapshot of current parameter values for change detection
    params.take_snapshot();

    let ctx = egui.begin_frame();

    egui::Window::new("Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Launch", |ui| {
                ui.add(egui::Slider::new(&mut params.physics.sling_factor, SimulationParams::get_sling_factor_range()).text("Sling Factor"));
                ui.add(egui::Slider::new(&mut params.physics.ball_radius, SimulationParams::get_ball_radius_range()).text("Ball Radius"));
                ui.add(egui::Slider::new(&mut params.physics.max_balls, SimulationParams::get_max_balls_range()).text("Max Balls"));

                if ui.button("Clear Balls").clicked() {
                    clear_requested = true;
                }
            });

            ui.collapsing("Physics", |ui| {
                ui.add(egui::Slider::new(&mut params.physics.gravity, SimulationParams::get_gravity_range()).text("Gravity"));
                ui.add(egui::Slider::new(&mut params.physics.damping, SimulationParams::get_damping_range()).text("Bounce Damping"));
                ui.add(egui::Slider::new(&mut params.physics.floor_friction, SimulationParams::get_floor_friction_range()).text("Floor Friction"));
                ui.add(egui::Slider::new(&mut params.physics.tick_interval_ms, SimulationParams::get_tick_interval_range()).text("Tick (ms)"));
            });

            ui.collapsing("Stats", |ui| {
                ui.label(format!("FPS: {:.1}", debug_info.fps));
                ui.label(format!("Live balls: {}", debug_info.live_balls));
                ui.label(format!("Launched: {}", debug_info.stats.launched));
                ui.label(format!("Retired: {}", debug_info.stats.retired));
                ui.label(format!("Evicted: {}", debug_info.stats.evicted));
            });

            ui.checkbox(&mut params.show_debug, "Show Debug Info");
            ui.checkbox(&mut params.pause_simulation, "Pause Simulation");
        });

    (clear_requested, params.physics_changed())
}

// Draw debug information on the screen
pub fn draw_debug_info(draw: &nannou::Draw, debug_info: &DebugInfo, window_rect: nannou::geom::Rect) {
    let lines = debug_info.lines();

    // Panel in the top-right corner, away from the controls window
    let margin = 10.0;
    let line_height = 16.0;
    let panel_width = 170.0;
    let panel_height = line_height * lines.len() as f32 + margin;
    let panel_x = window_rect.right() - panel_width / 2.0;
    let panel_y = window_rect.top() - panel_height / 2.0;

    draw.rect()
        .x_y(panel_x, panel_y)
        .w_h(panel_width, panel_height)
        .color(nannou::color::rgba(0.0, 0.0, 0.0, 0.7));

    let text_y = window_rect.top() - margin;

    for (i, text) in lines.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);

        draw.text(text)
            .x_y(panel_x, y)
            .w(panel_width - margin)
            .left_justify()
            .color(nannou::color::WHITE)
            .font_size(12);
    }
}
