//! Damped spring driving a single scalar toward 0 or 1.
//!
//! The spring integrates `a = (-k (x - target) - c v) / m` with semi-implicit
//! Euler in fixed sub-steps, so the result does not depend on how the host
//! slices frame time. Once both the displacement and the velocity fall below
//! `epsilon` it snaps to the target and parks until the target changes.

use crate::constants::*;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    pub epsilon: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: SPRING_STIFFNESS,
            damping: SPRING_DAMPING,
            mass: SPRING_MASS,
            epsilon: SPRING_EPSILON,
        }
    }
}

impl SpringConfig {
    /// Damping ratio; below 1 the spring overshoots before settling.
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

#[derive(Clone, Debug)]
pub struct Spring {
    config: SpringConfig,
    current: f32,
    target: f32,
    velocity: f32,
    resting: bool,
}

impl Spring {
    /// A spring parked at `value`.
    pub fn new(config: SpringConfig, value: f32) -> Self {
        Self {
            config,
            current: value,
            target: value,
            velocity: 0.0,
            resting: true,
        }
    }

    pub fn value(&self) -> f32 {
        self.current
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn is_resting(&self) -> bool {
        self.resting
    }

    pub fn config(&self) -> &SpringConfig {
        &self.config
    }

    /// Aim at a new target.
    ///
    /// With `reduce_motion` the value jumps straight there. Otherwise the
    /// current value and velocity carry over, so reversing mid-flight is
    /// continuous.
    pub fn set_target(&mut self, target: f32, reduce_motion: bool) {
        if !target.is_finite() {
            log::error!("[spring] ignoring non-finite target {target}");
            debug_assert!(false, "spring target must be finite");
            return;
        }
        self.target = target;
        if reduce_motion {
            self.snap();
            return;
        }
        self.resting = self.is_settled();
        if self.resting {
            self.current = target;
            self.velocity = 0.0;
        }
    }

    /// Park at `value` with no velocity.
    pub fn reset(&mut self, value: f32) {
        self.current = value;
        self.target = value;
        self.velocity = 0.0;
        self.resting = true;
    }

    /// Jump to the current target and park.
    pub fn snap(&mut self) {
        self.current = self.target;
        self.velocity = 0.0;
        self.resting = true;
    }

    /// Integrate by `dt`. Returns `true` while the spring is still moving.
    pub fn advance(&mut self, dt: Duration) -> bool {
        if self.resting {
            return false;
        }
        let SpringConfig {
            stiffness: k,
            damping: c,
            mass: m,
            ..
        } = self.config;
        let mut remaining = dt.as_secs_f32().min(MAX_FRAME_DT_SEC);
        while remaining > 0.0 {
            let h = remaining.min(SPRING_SUBSTEP_SEC);
            let accel = (-k * (self.current - self.target) - c * self.velocity) / m;
            self.velocity += accel * h;
            self.current += self.velocity * h;
            remaining -= h;
        }

        if !self.current.is_finite() || !self.velocity.is_finite() {
            log::error!(
                "[spring] non-finite state (x={}, v={}); clamping to target {}",
                self.current,
                self.velocity,
                self.target
            );
            debug_assert!(false, "spring produced a non-finite state");
            self.snap();
            return false;
        }

        if self.is_settled() {
            self.snap();
            return false;
        }
        true
    }

    fn is_settled(&self) -> bool {
        (self.current - self.target).abs() < self.config.epsilon
            && self.velocity.abs() < self.config.epsilon
    }
}
