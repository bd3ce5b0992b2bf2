/*
 * Simulation Parameters Module
 *
 * This module defines the parameters of the ball simulation. The physics
 * constants live in `PhysicsParams`, which the scene copies every frame; the
 * rest are display toggles. All of them can be modified through the UI, and
 * `SimulationParams` keeps a snapshot so the app can tell when they changed.
 */

use std::time::Duration;

use crate::error::{Error, Result};

// Constants that drive ball motion, all expressed per tick in surface units
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicsParams {
    /// Multiplier converting the press-to-release distance into launch speed
    pub sling_factor: f32,
    /// Added to the vertical velocity every tick (surface y grows downwards)
    pub gravity: f32,
    /// Fraction of speed kept by a velocity component when it hits an edge
    pub damping: f32,
    /// Fraction of horizontal speed kept each time the ball touches the floor
    pub floor_friction: f32,
    pub ball_radius: f32,
    pub tick_interval_ms: f32,
    /// A ball on the floor with both speed components at or below this rests
    pub rest_speed: f32,
    pub max_lifetime_ticks: u32,
    pub max_balls: usize,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            sling_factor: 0.25,
            gravity: 0.3,
            damping: 0.8,
            floor_friction: 0.9,
            ball_radius: 25.0,
            tick_interval_ms: 33.0,
            rest_speed: 1.0,
            max_lifetime_ticks: 900,
            max_balls: 200,
        }
    }
}

impl PhysicsParams {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_micros((self.tick_interval_ms * 1000.0).round() as u64)
    }

    // Reject values that would stop balls from ever settling or make the tick meaningless
    pub fn validate(&self) -> Result<()> {
        fn positive(name: &'static str, value: f32) -> Result<()> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(Error::InvalidParam { name, value: value as f64, reason: "must be a positive number" })
            }
        }

        positive("sling_factor", self.sling_factor)?;
        positive("gravity", self.gravity)?;
        positive("ball_radius", self.ball_radius)?;
        positive("tick_interval_ms", self.tick_interval_ms)?;
        positive("rest_speed", self.rest_speed)?;

        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(Error::InvalidParam {
                name: "damping",
                value: self.damping as f64,
                reason: "must lie strictly between 0 and 1",
            });
        }
        if !(self.floor_friction > 0.0 && self.floor_friction <= 1.0) {
            return Err(Error::InvalidParam {
                name: "floor_friction",
                value: self.floor_friction as f64,
                reason: "must lie in (0, 1]",
            });
        }
        if self.max_lifetime_ticks == 0 {
            return Err(Error::InvalidParam { name: "max_lifetime_ticks", value: 0.0, reason: "must be at least one tick" });
        }
        if self.max_balls == 0 {
            return Err(Error::InvalidParam { name: "max_balls", value: 0.0, reason: "must allow at least one ball" });
        }

        Ok(())
    }
}

// Parameters for the simulation that can be adjusted via UI
pub struct SimulationParams {
    pub physics: PhysicsParams,
    pub show_debug: bool,
    pub pause_simulation: bool,

    // Physics as they were before this frame's UI pass
    previous_physics: Option<PhysicsParams>,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            physics: PhysicsParams::default(),
            show_debug: false,
            pause_simulation: false,
            previous_physics: None,
        }
    }
}

impl SimulationParams {
    // Take a snapshot of the physics for change detection
    pub fn take_snapshot(&mut self) {
        self.previous_physics = Some(self.physics);
    }

    // Check if the physics changed since the last snapshot
    pub fn physics_changed(&self) -> bool {
        // If we don't have previous values, nothing has changed
        match &self.previous_physics {
            Some(prev) => *prev != self.physics,
            None => false,
        }
    }

    // Get parameter ranges for UI sliders
    pub fn get_sling_factor_range() -> std::ops::RangeInclusive<f32> {
        0.05..=1.0
    }

    pub fn get_gravity_range() -> std::ops::RangeInclusive<f32> {
        0.05..=2.0
    }

    pub fn get_damping_range() -> std::ops::RangeInclusive<f32> {
        0.1..=0.99
    }

    pub fn get_floor_friction_range() -> std::ops::RangeInclusive<f32> {
        0.5..=1.0
    }

    pub fn get_ball_radius_range() -> std::ops::RangeInclusive<f32> {
        5.0..=60.0
    }

    pub fn get_tick_interval_range() -> std::ops::RangeInclusive<f32> {
        5.0..=100.0
    }

    pub fn get_max_balls_range() -> std::ops::RangeInclusive<usize> {
        1..=1000
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(PhysicsParams::default().validate(), Ok(()));
    }

    #[test]
    fn slider_ranges_only_produce_valid_values() {
        let mut physics = PhysicsParams::default();
        physics.sling_factor = *SimulationParams::get_sling_factor_range().start();
        physics.gravity = *SimulationParams::get_gravity_range().start();
        physics.damping = *SimulationParams::get_damping_range().end();
        physics.floor_friction = *SimulationParams::get_floor_friction_range().end();
        physics.ball_radius = *SimulationParams::get_ball_radius_range().start();
        physics.tick_interval_ms = *SimulationParams::get_tick_interval_range().start();
        physics.max_balls = *SimulationParams::get_max_balls_range().start();
        assert!(physics.validate().is_ok());
    }

    #[test]
    fn damping_must_lose_energy() {
        for damping in [0.0, 1.0, 1.5, -0.2, f32::NAN] {
            let physics = PhysicsParams { damping, ..PhysicsParams::default() };
            match physics.validate() {
                Err(Error::InvalidParam { name, .. }) => assert_eq!(name, "damping"),
                other => panic!("damping {damping} accepted: {other:?}"),
            }
        }
    }

    #[test]
    fn non_positive_values_are_rejected() {
        let cases: [(&str, PhysicsParams); 5] = [
            ("sling_factor", PhysicsParams { sling_factor: 0.0, ..PhysicsParams::default() }),
            ("gravity", PhysicsParams { gravity: -0.3, ..PhysicsParams::default() }),
            ("ball_radius", PhysicsParams { ball_radius: 0.0, ..PhysicsParams::default() }),
            ("tick_interval_ms", PhysicsParams { tick_interval_ms: f32::INFINITY, ..PhysicsParams::default() }),
            ("rest_speed", PhysicsParams { rest_speed: 0.0, ..PhysicsParams::default() }),
        ];

        for (expected, physics) in cases {
            match physics.validate() {
                Err(Error::InvalidParam { name, .. }) => assert_eq!(name, expected),
                other => panic!("{expected} accepted: {other:?}"),
            }
        }
    }

    #[test]
    fn floor_friction_may_be_disabled_but_not_inverted() {
        let frictionless = PhysicsParams { floor_friction: 1.0, ..PhysicsParams::default() };
        assert!(frictionless.validate().is_ok());

        let sticky = PhysicsParams { floor_friction: 0.0, ..PhysicsParams::default() };
        assert!(matches!(sticky.validate(), Err(Error::InvalidParam { name: "floor_friction", .. })));
    }

    #[test]
    fn zero_caps_are_rejected() {
        let no_lifetime = PhysicsParams { max_lifetime_ticks: 0, ..PhysicsParams::default() };
        assert!(matches!(no_lifetime.validate(), Err(Error::InvalidParam { name: "max_lifetime_ticks", .. })));

        let no_balls = PhysicsParams { max_balls: 0, ..PhysicsParams::default() };
        assert!(matches!(no_balls.validate(), Err(Error::InvalidParam { name: "max_balls", .. })));
    }

    #[test]
    fn tick_interval_converts_milliseconds() {
        let physics = PhysicsParams { tick_interval_ms: 40.0, ..PhysicsParams::default() };
        assert_eq!(physics.tick_interval().as_millis(), 40);
    }

    #[test]
    fn change_detection_ignores_display_toggles() {
        let mut params = SimulationParams::default();
        assert!(!params.physics_changed());

        params.take_snapshot();
        params.show_debug = true;
        params.pause_simulation = true;
        assert!(!params.physics_changed());

        params.physics.gravity = 0.6;
        assert!(params.physics_changed());

        params.take_snapshot();
        assert!(!params.physics_changed());
    }
}
