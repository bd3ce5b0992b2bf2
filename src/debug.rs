/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that contains performance metrics
 * and scene counters to be displayed in the UI.
 *
 * Includes metrics for:
 * - FPS (frames per second) and frame time
 * - Ticks run in the last frame and time carried to the next one
 * - Live balls and running launch/retire totals
 */

use std::time::Duration;

use crate::scene::{FrameReport, Scene, SceneStats};

#[derive(Clone, Debug, Default)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub ticks_per_frame: u32,
    pub pending_time: Duration,
    pub live_balls: usize,
    pub stats: SceneStats,
}

impl DebugInfo {
    pub fn record_frame(&mut self, report: FrameReport, scene: &Scene) {
        self.ticks_per_frame = report.ticks;
        self.pending_time = scene.pending_time();
        self.live_balls = scene.len();
        self.stats = scene.stats();
    }

    // Lines shown in the on-screen overlay
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("FPS: {:.1}", self.fps),
            format!("Frame time: {:.2} ms", self.frame_time.as_secs_f64() * 1000.0),
            format!("Ticks this frame: {}", self.ticks_per_frame),
            format!("Carried over: {:.2} ms", self.pending_time.as_secs_f64() * 1000.0),
            format!("Live balls: {}", self.live_balls),
            format!("Launched: {}", self.stats.launched),
            format!("Retired: {}", self.stats.retired),
        ]
    }
}
