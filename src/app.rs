/*
 * Application Module
 *
 * This module defines the main application model for the ball tosser.
 * It handles the initialization of the window and scene, and the per-frame
 * update that feeds UI changes into the scene and advances it.
 *
 * Frame flow:
 * - Input handlers update the sling gesture and queue launches on the scene
 * - `update` applies parameter changes, then lets the scene drain its queue,
 *   run its fixed ticks and reap finished balls
 * - `renderer::view` draws whatever is left
 */

use log::{error, info, warn};
use nannou::prelude::*;
use nannou_egui::Egui;

use crate::debug::DebugInfo;
use crate::error::{Error, Result};
use crate::input::{mouse_moved, mouse_pressed, mouse_released, raw_window_event};
use crate::params::SimulationParams;
use crate::renderer::view;
use crate::scene::{Scene, SceneHandle};
use crate::sling::SlingGesture;
use crate::surface::Surface;
use crate::{ui, WINDOW_SIZE};

// Main model for the application
pub struct Model {
    pub scene: Scene,
    pub handle: SceneHandle,
    pub gesture: SlingGesture,
    pub params: SimulationParams,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    // Last pointer position, in window coordinates
    pub mouse_position: Vec2,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    match try_model(app) {
        Ok(model) => model,
        Err(err) => {
            error!("{}", err);
            std::process::exit(1);
        }
    }
}

fn try_model(app: &App) -> Result<Model> {
    let window_id = app
        .new_window()
        .title("Ball Tosser")
        .size(WINDOW_SIZE as u32, WINDOW_SIZE as u32)
        .resizable(false)
        .view(view)
        .mouse_moved(mouse_moved)
        .mouse_pressed(mouse_pressed)
        .mouse_released(mouse_released)
        .raw_event(raw_window_event)
        .build()
        .map_err(|err| Error::WindowCreation(format!("{:?}", err)))?;

    let window = app
        .window(window_id)
        .ok_or_else(|| Error::WindowCreation("window closed during startup".to_string()))?;

    // Create the UI
    let egui = Egui::from_window(&window);

    let params = SimulationParams::default();
    let scene = Scene::new(Surface::new(WINDOW_SIZE, WINDOW_SIZE), params.physics)?;
    let handle = scene.handle();

    info!("window ready at {}x{}, drag anywhere to sling a ball", WINDOW_SIZE, WINDOW_SIZE);

    Ok(Model {
        scene,
        handle,
        gesture: SlingGesture::default(),
        params,
        egui,
        debug_info: DebugInfo::default(),
        mouse_position: Vec2::ZERO,
    })
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    // Update debug info
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    let (clear_requested, physics_changed) = ui::update_ui(&mut model.egui, &mut model.params, &model.debug_info);

    if clear_requested {
        model.handle.clear();
    }

    if physics_changed {
        if let Err(err) = model.scene.set_physics(model.params.physics) {
            warn!("keeping previous physics: {}", err);
            model.params.physics = *model.scene.physics();
        }
    }

    let report = model.scene.frame(update.since_last, model.params.pause_simulation);
    model.debug_info.record_frame(report, &model.scene);
}
