//! Single-arm pendulum
//!
//! Frame-locked: one call to [`Pendulum::step`] is one tick, there is no
//! delta time. Units are pixels and radians with a display-space gravity.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_6};

pub const ARM_LENGTH: f32 = 250.0;
pub const INITIAL_ANGLE: f32 = FRAC_PI_6;
pub const GRAVITY: f32 = 0.01;
/// Added to the angle when rendering so that angle 0 hangs straight down
pub const PHASE_OFFSET: f32 = FRAC_PI_2;

/// Physical state of the arm
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pendulum {
    pub pivot: (f32, f32),
    pub arm_length: f32,
    /// Radians, never wrapped
    pub angle: f32,
    pub angular_velocity: f32,
    pub angular_acceleration: f32,
    pub gravity: f32,
}

impl Pendulum {
    /// Pendulum at rest velocity, released from `INITIAL_ANGLE`
    pub fn new(pivot: (f32, f32)) -> Self {
        Self {
            pivot,
            arm_length: ARM_LENGTH,
            angle: INITIAL_ANGLE,
            angular_velocity: 0.0,
            angular_acceleration: 0.0,
            gravity: GRAVITY,
        }
    }

    /// Advance one tick with semi-implicit Euler.
    ///
    /// Order matters: acceleration, then velocity, then angle using the
    /// velocity just computed.
    pub fn step(&mut self) {
        let force = self.gravity * self.angle.sin();
        self.angular_acceleration = -force / self.arm_length;
        self.angular_velocity += self.angular_acceleration;
        self.angle += self.angular_velocity;
    }

    /// Bob position: `pivot + arm_length * (cos, sin)(angle + phase_offset)`
    pub fn endpoint(&self, phase_offset: f32) -> (f32, f32) {
        let a = self.angle + phase_offset;
        (
            self.pivot.0 + self.arm_length * a.cos(),
            self.pivot.1 + self.arm_length * a.sin(),
        )
    }
}

impl Default for Pendulum {
    fn default() -> Self {
        Self::new((0.0, 0.0))
    }
}
