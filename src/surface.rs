/*
 * Surface Module
 *
 * This module defines the Surface struct, the drawing area the balls live in.
 * Physics runs in surface coordinates (origin at the top-left corner, y growing
 * downwards) while nannou draws in window coordinates (origin at the centre,
 * y growing upwards). The Surface converts between the two.
 */

use nannou::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
}

// Range a ball's centre may occupy so the whole ball stays on the surface
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Surface {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    // Convert a point from surface space to window space
    pub fn surface_to_window(&self, point: Vec2, window_rect: Rect) -> Vec2 {
        vec2(window_rect.left() + point.x, window_rect.top() - point.y)
    }

    // Convert a point from window space to surface space
    pub fn window_to_surface(&self, point: Vec2, window_rect: Rect) -> Vec2 {
        vec2(point.x - window_rect.left(), window_rect.top() - point.y)
    }

    pub fn bounds_for(&self, radius: f32) -> Bounds {
        let min = vec2(radius, radius);
        // A ball wider than the surface is pinned at the minimum
        let max = vec2(self.width - radius, self.height - radius).max(min);
        Bounds { min, max }
    }

    /// The y coordinate a ball of the given radius rests at.
    pub fn floor_for(&self, radius: f32) -> f32 {
        self.bounds_for(radius).max.y
    }
}

impl Bounds {
    pub fn clamp(&self, point: Vec2) -> Vec2 {
        point.clamp(self.min, self.max)
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }
}
