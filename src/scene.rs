/*
 * Scene Module
 *
 * The Scene owns every live ball and is the only code that adds, ticks or
 * removes them. Everything else talks to it through a SceneHandle, which
 * queues commands that the scene applies at the start of its next frame.
 *
 * A frame runs in three stages:
 * 1. Drain queued commands (launch new balls, clear the scene)
 * 2. Run as many fixed ticks as the elapsed time allows
 * 3. Reap balls that have come to rest or expired
 */

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::time::Duration;

use log::{debug, trace, warn};

use crate::ball::Ball;
use crate::error::Result;
use crate::params::PhysicsParams;
use crate::sling::LaunchRequest;
use crate::surface::Surface;

/// Upper bound on ticks run in a single frame. Time beyond it is dropped so a
/// stalled window does not replay seconds of motion at once.
pub const MAX_TICKS_PER_FRAME: u32 = 8;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SceneCommand {
    Launch(LaunchRequest),
    Clear,
}

// Cloneable sender side of the scene's command queue
#[derive(Clone, Debug)]
pub struct SceneHandle {
    sender: Sender<SceneCommand>,
}

impl SceneHandle {
    pub fn launch(&self, request: LaunchRequest) {
        self.send(SceneCommand::Launch(request));
    }

    pub fn clear(&self) {
        self.send(SceneCommand::Clear);
    }

    fn send(&self, command: SceneCommand) {
        if self.sender.send(command).is_err() {
            warn!("scene has shut down, dropping {:?}", command);
        }
    }
}

// Running totals since the scene was created
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SceneStats {
    pub launched: u64,
    pub retired: u64,
    pub evicted: u64,
    pub cleared: u64,
}

// What happened during one call to `Scene::frame`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub commands: usize,
    pub ticks: u32,
    pub reaped: usize,
}

pub struct Scene {
    balls: Vec<Ball>,
    surface: Surface,
    physics: PhysicsParams,
    commands: Receiver<SceneCommand>,
    handle: SceneHandle,
    accumulator: Duration,
    stats: SceneStats,
}

impl Scene {
    pub fn new(surface: Surface, physics: PhysicsParams) -> Result<Self> {
        physics.validate()?;

        let (sender, commands) = mpsc::channel();

        Ok(Self {
            balls: Vec::new(),
            surface,
            physics,
            commands,
            handle: SceneHandle { sender },
            accumulator: Duration::ZERO,
            stats: SceneStats::default(),
        })
    }

    pub fn handle(&self) -> SceneHandle {
        self.handle.clone()
    }

    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub fn len(&self) -> usize {
        self.balls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn physics(&self) -> &PhysicsParams {
        &self.physics
    }

    pub fn stats(&self) -> SceneStats {
        self.stats
    }

    // New values apply from the next tick; balls already in flight keep their radius
    pub fn set_physics(&mut self, physics: PhysicsParams) -> Result<()> {
        physics.validate()?;
        self.physics = physics;

        // Shrinking the cap applies immediately
        let excess = self.balls.len().saturating_sub(physics.max_balls);
        if excess > 0 {
            self.balls = self.balls.split_off(excess);
            self.stats.evicted += excess as u64;
            debug!("evicted {} balls after lowering the cap to {}", excess, physics.max_balls);
        }

        Ok(())
    }

    // Drain, tick and reap. Paused scenes still take commands but do not move.
    pub fn frame(&mut self, elapsed: Duration, paused: bool) -> FrameReport {
        let commands = self.drain_commands();
        let ticks = if paused { 0 } else { self.advance(elapsed) };
        let reaped = self.reap();

        FrameReport { commands, ticks, reaped }
    }

    pub fn drain_commands(&mut self) -> usize {
        let mut applied = 0;

        loop {
            match self.commands.try_recv() {
                Ok(SceneCommand::Launch(request)) => self.adopt(request),
                Ok(SceneCommand::Clear) => {
                    self.stats.cleared += self.balls.len() as u64;
                    debug!("clearing {} balls", self.balls.len());
                    self.balls.clear();
                }
                // The scene holds a sender itself, so the queue never disconnects
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
            applied += 1;
        }

        applied
    }

    fn adopt(&mut self, request: LaunchRequest) {
        let radius = self.physics.ball_radius;
        let position = self.surface.bounds_for(radius).clamp(request.position);

        if self.balls.len() >= self.physics.max_balls {
            self.balls.remove(0);
            self.stats.evicted += 1;
            debug!("scene full at {} balls, evicted the oldest", self.physics.max_balls);
        }

        self.balls.push(Ball::new(position, request.velocity, radius, Ball::random_color()));
        self.stats.launched += 1;
        debug!("launched ball at {:?} with velocity {:?}", position, request.velocity);
    }

    // Run every whole tick that fits in the accumulated time
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        let interval = self.physics.tick_interval();
        self.accumulator += elapsed;

        let mut ticks = 0;
        while self.accumulator >= interval && ticks < MAX_TICKS_PER_FRAME {
            self.step();
            self.accumulator -= interval;
            ticks += 1;
        }

        if self.accumulator >= interval {
            trace!("dropping {:?} of simulation time", self.accumulator);
            self.accumulator = Duration::ZERO;
        }

        ticks
    }

    // One fixed tick for every live ball
    pub fn step(&mut self) {
        for ball in &mut self.balls {
            ball.tick(&self.surface, &self.physics);
        }
    }

    // Remove finished balls in a single pass, keeping the order of the rest
    pub fn reap(&mut self) -> usize {
        let before = self.balls.len();

        self.balls.retain(|ball| {
            if ball.done() {
                debug!(
                    "retiring ball: {:?} after {} ticks and {} bounces",
                    ball.state(),
                    ball.ticks(),
                    ball.bounces()
                );
            }
            !ball.done()
        });

        let reaped = before - self.balls.len();
        self.stats.retired += reaped as u64;
        reaped
    }

    /// Time carried over to the next frame.
    pub fn pending_time(&self) -> Duration {
        self.accumulator
    }
}
