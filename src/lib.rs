//! Blobfall - simulation core for a metaball platformer
//!
//! Core modules:
//! - `sim`: Analytic collision, ball integration, split/merge, camera
//! - `renderer`: Render-facing snapshots and wireframe vertices (no GPU code)
//! - `settings`: Data-driven tuning
//! - `error`: Crate error type

pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{Result, SimError};
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Nominal frame delta used by the native driver (60 Hz)
    pub const FRAME_MS: f32 = 1000.0 / 60.0;

    /// Distance beyond the surface at which the snap field starts pulling
    pub const SNAP_DISTANCE: f32 = 10.0;
    /// Peak snap acceleration, also the clamp on the nearest surface's pull
    pub const SNAP_FORCE: f32 = 5.0;
    /// Velocity-proportional drag coefficient
    pub const AIR_RESISTANCE: f32 = 0.5;

    /// Stick magnitude below which the aim direction is held
    pub const AIM_DEADZONE: f32 = 0.2;
    /// Cooldown applied after a split or a merge (ms)
    pub const COOLDOWN_MS: f32 = 1000.0;
    /// Launch speed per unit of player radius
    pub const BOOST_SCALE: f32 = 4.0;

    /// Camera hard frame half-extent (normalized view units)
    pub const HARD_FRAME: f32 = 0.75;
    /// Camera soft frame half-extent (normalized view units)
    pub const SOFT_FRAME: f32 = 0.25;
    /// World units spanned by the short viewport axis
    pub const FRAME_SIZE: f32 = 200.0;
    /// Soft frame pursuit rate (1/s, in view units)
    pub const SOFT_RATE: f32 = 3.0;

    /// Contact deeper than this fraction of the radius still counts as penetrating
    pub const CONTACT_SLOP: f32 = 1.0e-3;
}

/// Project `u` onto `v`. Projecting onto a zero vector yields zero.
#[inline]
pub fn project(u: Vec2, v: Vec2) -> Vec2 {
    let len_sq = v.length_squared();
    if len_sq == 0.0 {
        return Vec2::ZERO;
    }
    v * (u.dot(v) / len_sq)
}

/// Counter-clockwise perpendicular
#[inline]
pub fn perp(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}

/// Unit vector at `angle` radians
#[inline]
pub fn direction(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_onto_axis() {
        let p = project(Vec2::new(3.0, 4.0), Vec2::new(2.0, 0.0));
        assert!((p - Vec2::new(3.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_project_onto_zero_is_zero() {
        assert_eq!(project(Vec2::new(3.0, 4.0), Vec2::ZERO), Vec2::ZERO);
    }

    #[test]
    fn test_perp_is_orthogonal() {
        let v = Vec2::new(0.3, -1.7);
        assert!(perp(v).dot(v).abs() < 1e-6);
    }
}
