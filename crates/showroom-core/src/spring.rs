//! Spring-damped camera transitions.
//!
//! The render loop drives a [`CameraTransition`] explicitly through
//! [`CameraTransition::tick`]; nothing here depends on a frame callback.

use crate::config::SpringConfig;
use crate::constants::SPRING_STEP_SEC;
use crate::state::Pose;
use glam::Vec3;
use std::time::Duration;

/// Mass-spring-damper on a 3-vector, integrated in fixed 1 ms steps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring3 {
    value: Vec3,
    velocity: Vec3,
    goal: Vec3,
}

impl Spring3 {
    pub fn new(from: Vec3, goal: Vec3) -> Self {
        Self {
            value: from,
            velocity: Vec3::ZERO,
            goal,
        }
    }

    pub fn value(&self) -> Vec3 {
        self.value
    }

    pub fn goal(&self) -> Vec3 {
        self.goal
    }

    pub fn step(&mut self, cfg: &SpringConfig, dt_sec: f32) {
        let mut remaining = dt_sec;
        while remaining > 0.0 {
            let h = remaining.min(SPRING_STEP_SEC);
            let spring_force = -cfg.tension * (self.value - self.goal);
            let damping_force = -cfg.friction * self.velocity;
            let accel = (spring_force + damping_force) / cfg.mass;
            self.velocity += accel * h;
            self.value += self.velocity * h;
            remaining -= h;
        }
    }

    pub fn at_rest(&self, cfg: &SpringConfig) -> bool {
        (self.goal - self.value).abs().max_element() < cfg.precision
            && self.velocity.abs().max_element() < cfg.precision
    }

    pub fn settle(&mut self) {
        self.value = self.goal;
        self.velocity = Vec3::ZERO;
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransitionStep {
    InProgress(Pose),
    Complete(Pose),
}

impl TransitionStep {
    pub fn pose(&self) -> Pose {
        match *self {
            TransitionStep::InProgress(pose) | TransitionStep::Complete(pose) => pose,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, TransitionStep::Complete(_))
    }
}

/// In-flight move of the camera from one pose to a destination station.
#[derive(Clone, Debug)]
pub struct CameraTransition {
    from: Pose,
    to: Pose,
    position: Spring3,
    target: Spring3,
    elapsed: Duration,
}

impl CameraTransition {
    pub fn new(from: Pose, to: Pose) -> Self {
        Self {
            from,
            to,
            position: Spring3::new(from.position, to.position),
            target: Spring3::new(from.target, to.target),
            elapsed: Duration::ZERO,
        }
    }

    pub fn source(&self) -> Pose {
        self.from
    }

    pub fn destination(&self) -> Pose {
        self.to
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn current(&self) -> Pose {
        Pose::new(self.position.value(), self.target.value())
    }

    /// Advance by `dt`. Once both springs rest they snap exactly onto the
    /// destination and `Complete` is returned.
    pub fn tick(&mut self, cfg: &SpringConfig, dt: Duration) -> TransitionStep {
        self.elapsed += dt;
        let dt_sec = dt.as_secs_f32();
        self.position.step(cfg, dt_sec);
        self.target.step(cfg, dt_sec);
        if self.position.at_rest(cfg) && self.target.at_rest(cfg) {
            self.position.settle();
            self.target.settle();
            TransitionStep::Complete(self.to)
        } else {
            TransitionStep::InProgress(self.current())
        }
    }
}
