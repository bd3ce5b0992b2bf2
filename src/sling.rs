/*
 * Sling Module
 *
 * The press-drag-release gesture that launches a ball. Pressing records an
 * anchor, dragging stretches an aiming line from the anchor to the pointer,
 * and releasing turns the pull vector into the new ball's initial velocity.
 */

use log::debug;
use nannou::prelude::*;

// A ball the scene should create, in surface coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LaunchRequest {
    pub position: Vec2,
    pub velocity: Vec2,
}

impl LaunchRequest {
    /// Launch from `release` with a velocity proportional to the pull back
    /// towards `anchor`.
    pub fn from_pull(anchor: Vec2, release: Vec2, sling_factor: f32) -> Self {
        Self {
            position: release,
            velocity: (anchor - release) * sling_factor,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum SlingGesture {
    #[default]
    Idle,
    Pressed {
        anchor: Vec2,
    },
    Dragging {
        anchor: Vec2,
        current: Vec2,
    },
}

impl SlingGesture {
    pub fn press(&mut self, point: Vec2) {
        *self = SlingGesture::Pressed { anchor: point };
    }

    // Returns false when no press is in progress
    pub fn drag(&mut self, point: Vec2) -> bool {
        match *self {
            SlingGesture::Pressed { anchor } | SlingGesture::Dragging { anchor, .. } => {
                *self = SlingGesture::Dragging { anchor, current: point };
                true
            }
            SlingGesture::Idle => false,
        }
    }

    pub fn release(&mut self, point: Vec2, sling_factor: f32) -> Option<LaunchRequest> {
        let anchor = match std::mem::take(self) {
            SlingGesture::Pressed { anchor } | SlingGesture::Dragging { anchor, .. } => anchor,
            SlingGesture::Idle => {
                debug!("ignoring release at {:?} without a matching press", point);
                return None;
            }
        };

        Some(LaunchRequest::from_pull(anchor, point, sling_factor))
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, SlingGesture::Dragging { .. })
    }

    // The guide line to draw while the user is aiming
    pub fn aiming_line(&self) -> Option<(Vec2, Vec2)> {
        match *self {
            SlingGesture::Dragging { anchor, current } => Some((anchor, current)),
            _ => None,
        }
    }
}
