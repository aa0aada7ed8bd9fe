//! Simulation tuning
//!
//! Every number that shapes game feel lives here so a level or test can override it.
//! Stored as JSON; reading and writing files is left to the caller.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::Result;
use crate::sim::Button;

/// Ball integration and contact tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsSettings {
    /// World gravity (units/s²)
    pub gravity: Vec2,
    /// Drag coefficient (`a = -v * air_resistance`)
    pub air_resistance: f32,
    /// Range of the snap field beyond the ball surface
    pub snap_distance: f32,
    /// Peak snap acceleration
    pub snap_force: f32,
    /// Acceleration per unit of left stick deflection
    pub move_acceleration: f32,
    /// Jump speed per unit of player radius
    pub jump_speed: f32,
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        Self {
            gravity: Vec2::new(0.0, -200.0),
            air_resistance: AIR_RESISTANCE,
            snap_distance: SNAP_DISTANCE,
            snap_force: SNAP_FORCE,
            move_acceleration: 300.0,
            jump_speed: 10.0,
        }
    }
}

impl PhysicsSettings {
    /// No drag, no gravity, no snap field
    pub fn frictionless() -> Self {
        Self {
            gravity: Vec2::ZERO,
            air_resistance: 0.0,
            snap_force: 0.0,
            ..Self::default()
        }
    }
}

/// Split / launch / merge tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FissionSettings {
    /// Right stick magnitude below which the aim is held
    pub aim_deadzone: f32,
    /// Launch speed per unit of player radius
    pub boost_scale: f32,
    /// Cooldown after a split or merge (ms)
    pub cooldown_ms: f32,
    /// Cosmetic particle count requested on launch
    pub burst_particles: u32,
}

impl Default for FissionSettings {
    fn default() -> Self {
        Self {
            aim_deadzone: AIM_DEADZONE,
            boost_scale: BOOST_SCALE,
            cooldown_ms: COOLDOWN_MS,
            burst_particles: 24,
        }
    }
}

/// Camera autoframing tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Hard frame half-extent (view units)
    pub hard_frame: f32,
    /// Soft frame half-extent (view units)
    pub soft_frame: f32,
    /// World units across the short viewport axis
    pub frame_size: f32,
    /// Soft pursuit rate (1/s)
    pub soft_rate: f32,
    /// When set, frame size follows `player radius * factor`
    pub frame_size_per_radius: Option<f32>,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            hard_frame: HARD_FRAME,
            soft_frame: SOFT_FRAME,
            frame_size: FRAME_SIZE,
            soft_rate: SOFT_RATE,
            frame_size_per_radius: None,
        }
    }
}

/// Which button drives which action
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Bindings {
    pub split: Button,
    pub jump: Button,
    pub reset: Button,
    pub recenter: Button,
}

impl Default for Bindings {
    fn default() -> Self {
        Self {
            split: Button::R1,
            jump: Button::L1,
            reset: Button::L2,
            recenter: Button::R2,
        }
    }
}

/// All tuning for one simulation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub physics: PhysicsSettings,
    pub fission: FissionSettings,
    pub camera: CameraSettings,
    pub bindings: Bindings,
}

impl Settings {
    /// Parse settings; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        log::debug!("Loaded settings: {:?}", settings);
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
