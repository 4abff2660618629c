//! Startup configuration
//!
//! Everything here is fixed before the first frame. Stored as pretty JSON so
//! it can be hand edited.

use crate::color::Color;
use crate::error::{Error, Result};
use crate::pendulum::{Pendulum, ARM_LENGTH, GRAVITY, INITIAL_ANGLE, PHASE_OFFSET};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;
pub const BOB_RADIUS: i32 = 15;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub width: u32,
    pub height: u32,
    pub arm_length: f32,
    pub initial_angle: f32,
    pub initial_velocity: f32,
    pub gravity: f32,
    /// Defaults to the centre of the buffer
    pub pivot: Option<(f32, f32)>,
    pub bob_radius: i32,
    pub background: Color,
    pub arm_color: Color,
    pub bob_color: Color,
    pub phase_offset: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            arm_length: ARM_LENGTH,
            initial_angle: INITIAL_ANGLE,
            initial_velocity: 0.0,
            gravity: GRAVITY,
            pivot: None,
            bob_radius: BOB_RADIUS,
            background: Color::BLACK,
            arm_color: Color::WHITE,
            bob_color: Color::BOB,
            phase_offset: PHASE_OFFSET,
        }
    }
}

impl Config {
    /// Load config from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| config_error(path, e))?;
        serde_json::from_str(&json).map_err(|e| config_error(path, e))
    }

    /// Save config to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self).map_err(|e| config_error(path, e))?;
        fs::write(path, json).map_err(|e| config_error(path, e))
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if !(self.arm_length.is_finite() && self.arm_length > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "arm_length must be positive, got {}",
                self.arm_length
            )));
        }
        if !(self.gravity.is_finite() && self.gravity > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "gravity must be positive, got {}",
                self.gravity
            )));
        }
        if !self.initial_angle.is_finite() || !self.initial_velocity.is_finite() {
            return Err(Error::InvalidConfig(
                "initial angle and velocity must be finite".into(),
            ));
        }
        if self.bob_radius < 0 {
            return Err(Error::InvalidConfig(format!(
                "bob_radius must not be negative, got {}",
                self.bob_radius
            )));
        }
        Ok(())
    }

    /// Pivot point, falling back to the integer centre of the buffer
    pub fn pivot(&self) -> (f32, f32) {
        self.pivot
            .unwrap_or(((self.width / 2) as f32, (self.height / 2) as f32))
    }

    /// Build the starting physical state
    pub fn pendulum(&self) -> Pendulum {
        Pendulum {
            arm_length: self.arm_length,
            angle: self.initial_angle,
            angular_velocity: self.initial_velocity,
            gravity: self.gravity,
            ..Pendulum::new(self.pivot())
        }
    }
}

fn config_error(path: &Path, e: impl ToString) -> Error {
    Error::Config {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
}
