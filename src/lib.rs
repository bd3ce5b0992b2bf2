/*
 * Ball Tosser - Module Definitions
 *
 * This file defines the module structure for the ball tosser application.
 * The physics, gesture and scene modules have no window dependency and can be
 * driven directly; app, input, renderer and ui wire them into nannou.
 */

// Re-export key components for easier access
pub use app::Model;
pub use ball::{Ball, BallState};
pub use debug::DebugInfo;
pub use error::{Error, Result};
pub use params::{PhysicsParams, SimulationParams};
pub use scene::{FrameReport, Scene, SceneCommand, SceneHandle, SceneStats};
pub use sling::{LaunchRequest, SlingGesture};
pub use surface::{Bounds, Surface};

// Define modules
pub mod app;
pub mod ball;
pub mod debug;
pub mod error;
pub mod input;
pub mod params;
pub mod renderer;
pub mod scene;
pub mod sling;
pub mod surface;
pub mod ui;

// Constants
pub const WINDOW_SIZE: f32 = 500.0;
