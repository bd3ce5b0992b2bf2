/*
 * Ball Module
 *
 * This module defines the Ball struct and its behavior. A ball is launched
 * with an initial velocity, falls under gravity and bounces off the four
 * edges of the surface, losing some speed at every bounce. It retires once it
 * settles on the floor or outlives its maximum lifetime.
 */

use nannou::prelude::*;
use rand::seq::SliceRandom;

use crate::params::PhysicsParams;
use crate::surface::Surface;

const PALETTE: [(u8, u8, u8); 6] = [
    (230, 57, 70),
    (241, 196, 15),
    (46, 204, 113),
    (52, 152, 219),
    (155, 89, 182),
    (236, 240, 241),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BallState {
    Active,
    /// Settled on the floor
    Resting,
    /// Outlived `max_lifetime_ticks` without settling
    Expired,
}

impl BallState {
    pub fn is_terminal(self) -> bool {
        self != BallState::Active
    }
}

#[derive(Clone, Debug)]
pub struct Ball {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub color: Rgb<u8>,
    state: BallState,
    ticks: u32,
    bounces: u32,
}

impl Ball {
    pub fn new(position: Vec2, velocity: Vec2, radius: f32, color: Rgb<u8>) -> Self {
        Self {
            position,
            velocity,
            radius,
            color,
            state: BallState::Active,
            ticks: 0,
            bounces: 0,
        }
    }

    // Pick a colour from the palette for a freshly launched ball
    pub fn random_color() -> Rgb<u8> {
        let mut rng = rand::thread_rng();
        let &(r, g, b) = PALETTE.choose(&mut rng).unwrap_or(&PALETTE[0]);
        rgb(r, g, b)
    }

    pub fn state(&self) -> BallState {
        self.state
    }

    pub fn done(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    pub fn bounces(&self) -> u32 {
        self.bounces
    }

    // Advance the ball by one fixed step
    pub fn tick(&mut self, surface: &Surface, physics: &PhysicsParams) {
        if self.done() {
            return;
        }

        self.position += self.velocity;
        self.ticks += 1;

        let bounds = surface.bounds_for(self.radius);
        let damping = physics.damping;

        // A colliding component is reflected to point back inside
        if self.position.x < bounds.min.x {
            self.position.x = bounds.min.x;
            self.velocity.x = self.velocity.x.abs() * damping;
            self.bounces += 1;
        } else if self.position.x > bounds.max.x {
            self.position.x = bounds.max.x;
            self.velocity.x = -self.velocity.x.abs() * damping;
            self.bounces += 1;
        }

        if self.position.y < bounds.min.y {
            self.position.y = bounds.min.y;
            self.velocity.y = self.velocity.y.abs() * damping;
            self.bounces += 1;
        } else if self.position.y > bounds.max.y {
            self.position.y = bounds.max.y;
            self.velocity.y = -self.velocity.y.abs() * damping;
            self.velocity.x *= physics.floor_friction;
            self.bounces += 1;
        } else {
            self.velocity.y += physics.gravity;
        }

        self.state = self.next_state(bounds.max.y, physics);
        if self.state == BallState::Resting {
            self.velocity = Vec2::ZERO;
        }
    }

    fn next_state(&self, floor: f32, physics: &PhysicsParams) -> BallState {
        let on_floor = self.position.y >= floor;

        if on_floor
            && self.velocity.x.abs() <= physics.rest_speed
            && self.velocity.y.abs() <= settle_speed(physics)
        {
            BallState::Resting
        } else if self.ticks >= physics.max_lifetime_ticks {
            BallState::Expired
        } else {
            BallState::Active
        }
    }

    // Draw the ball
    pub fn draw(&self, draw: &Draw, surface: &Surface, window_rect: Rect) {
        if self.done() {
            return;
        }

        let screen_pos = surface.surface_to_window(self.position, window_rect);

        draw.ellipse()
            .xy(screen_pos)
            .radius(self.radius)
            .color(self.color);
    }
}

// Largest rebound speed off the floor that still counts as settled.
// Gravity is integrated after the move, so a landing can carry up to one
// gravity step more speed than the ball left the floor with.
fn settle_speed(physics: &PhysicsParams) -> f32 {
    physics.rest_speed + physics.gravity
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface() -> Surface {
        Surface::new(500.0, 500.0)
    }

    fn ball(position: Vec2, velocity: Vec2) -> Ball {
        Ball::new(position, velocity, 25.0, rgb(255, 255, 255))
    }

    #[test]
    fn free_flight_integrates_position_then_gravity() {
        let physics = PhysicsParams::default();
        let mut b = ball(vec2(50.0, 150.0), vec2(12.5, -12.5));

        b.tick(&surface(), &physics);

        assert_eq!(b.position, vec2(62.5, 137.5));
        assert_eq!(b.velocity, vec2(12.5, -12.5 + physics.gravity));
        assert_eq!(b.state(), BallState::Active);
        assert_eq!(b.bounces(), 0);
    }

    #[test]
    fn right_edge_reflects_and_damps() {
        let physics = PhysicsParams::default();
        let mut b = ball(vec2(475.0, 250.0), vec2(5.0, 0.0));

        b.tick(&surface(), &physics);

        assert_eq!(b.position.x, 475.0);
        assert_eq!(b.velocity.x, -5.0 * physics.damping);
        assert_eq!(b.velocity.y, physics.gravity);
        assert_eq!(b.bounces(), 1);
    }

    #[test]
    fn left_edge_and_ceiling_reflect_inwards() {
        let physics = PhysicsParams::default();
        let mut b = ball(vec2(30.0, 30.0), vec2(-10.0, -8.0));

        b.tick(&surface(), &physics);

        assert_eq!(b.position, vec2(25.0, 25.0));
        assert_eq!(b.velocity, vec2(10.0 * physics.damping, 8.0 * physics.damping));
        assert_eq!(b.bounces(), 2);
    }

    #[test]
    fn floor_reflects_upwards() {
        let physics = PhysicsParams::default();
        let mut b = ball(vec2(250.0, 470.0), vec2(0.0, 20.0));

        b.tick(&surface(), &physics);

        assert_eq!(b.position.y, 475.0);
        assert_eq!(b.velocity.y, -20.0 * physics.damping);
        assert_eq!(b.state(), BallState::Active);
    }

    #[test]
    fn floor_contact_slows_horizontal_motion() {
        let physics = PhysicsParams::default();
        let mut b = ball(vec2(250.0, 470.0), vec2(10.0, 20.0));

        b.tick(&surface(), &physics);

        assert_eq!(b.velocity.x, 10.0 * physics.floor_friction);
    }

    #[test]
    fn never_leaves_the_surface() {
        let physics = PhysicsParams::default();
        let bounds = surface().bounds_for(25.0);
        let mut b = ball(vec2(250.0, 250.0), vec2(-40.0, -55.0));

        for _ in 0..physics.max_lifetime_ticks {
            b.tick(&surface(), &physics);
            assert!(bounds.contains(b.position), "escaped to {:?}", b.position);
        }
    }

    #[test]
    fn dropped_ball_comes_to_rest_on_the_floor() {
        let physics = PhysicsParams::default();
        let mut b = ball(vec2(250.0, 150.0), Vec2::ZERO);

        for _ in 0..physics.max_lifetime_ticks {
            b.tick(&surface(), &physics);
            if b.done() {
                break;
            }
        }

        assert_eq!(b.state(), BallState::Resting);
        assert_eq!(b.position.y, 475.0);
        assert_eq!(b.velocity, Vec2::ZERO);
        assert!(b.ticks() < physics.max_lifetime_ticks);
    }

    #[test]
    fn launched_ball_settles_before_its_lifetime() {
        let physics = PhysicsParams::default();
        let mut b = ball(vec2(50.0, 150.0), vec2(12.5, -12.5));

        for _ in 0..physics.max_lifetime_ticks {
            b.tick(&surface(), &physics);
        }

        assert_eq!(b.state(), BallState::Resting);
    }

    #[test]
    fn ball_that_never_settles_expires() {
        let physics = PhysicsParams { max_lifetime_ticks: 10, ..PhysicsParams::default() };
        let mut b = ball(vec2(250.0, 250.0), vec2(30.0, -30.0));

        for _ in 0..9 {
            b.tick(&surface(), &physics);
        }
        assert!(!b.done());

        b.tick(&surface(), &physics);
        assert_eq!(b.state(), BallState::Expired);
    }

    #[test]
    fn lively_ball_keeps_bouncing_instead_of_resting() {
        for damping in [0.9, 0.95, 0.99] {
            let physics = PhysicsParams { damping, ..PhysicsParams::default() };
            let mut b = ball(vec2(250.0, 150.0), Vec2::ZERO);

            while !b.done() {
                b.tick(&surface(), &physics);
            }

            assert!(b.bounces() > 1, "damping {damping}: done after {} bounces", b.bounces());
            assert_eq!(b.state(), BallState::Expired, "damping {damping}");
        }
    }

    #[test]
    fn resting_never_cuts_a_real_bounce_short() {
        let physics = PhysicsParams::default();
        let floor = surface().floor_for(25.0);

        for damping in [0.1, 0.5, 0.8, 0.99] {
            let physics = PhysicsParams { damping, ..physics };
            let mut b = ball(vec2(250.0, 150.0), Vec2::ZERO);

            while !b.done() {
                let incoming = b.velocity.y;
                b.tick(&surface(), &physics);
                if b.state() == BallState::Resting {
                    assert_eq!(b.position.y, floor);
                    assert!(incoming.abs() * damping <= settle_speed(&physics), "damping {damping}: rested at {incoming}");
                }
            }
        }
    }

    #[test]
    fn terminal_state_is_final() {
        let physics = PhysicsParams { max_lifetime_ticks: 1, ..PhysicsParams::default() };
        let mut b = ball(vec2(250.0, 250.0), vec2(3.0, 0.0));

        b.tick(&surface(), &physics);
        assert!(b.done());
        let frozen = b.position;

        for _ in 0..5 {
            b.tick(&surface(), &physics);
            assert!(b.done());
        }
        assert_eq!(b.position, frozen);
        assert_eq!(b.ticks(), 1);
    }

    #[test]
    fn random_color_comes_from_palette() {
        let color = Ball::random_color();
        assert!(PALETTE.contains(&(color.red, color.green, color.blue)));
    }
}
