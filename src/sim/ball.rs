//! Ball rigid body
//!
//! A ball is a point mass with a radius. Each frame it:
//! 1. decays its cooldown
//! 2. integrates with a half drift / kick / half drift split step
//! 3. rebuilds acceleration from drag and gravity
//! 4. resolves penetration against every primitive (inelastic along the contact normal)
//! 5. adds the snap field of the single nearest surface in range

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Primitive;
use crate::consts::CONTACT_SLOP;
use crate::error::{Result, SimError};
use crate::project;
use crate::settings::PhysicsSettings;

/// Radius of each half after an area-conserving split
#[inline]
pub fn split_radius(r: f32) -> f32 {
    r / std::f32::consts::SQRT_2
}

/// Radius of the union of two balls with conserved area
#[inline]
pub fn merged_radius(a: f32, b: f32) -> f32 {
    (a * a + b * b).sqrt()
}

/// A simulated ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Acceleration applied on the next step. Rebuilt by `update`; callers add input on top.
    pub acc: Vec2,
    radius: f32,
    /// Time until this ball may merge or split again
    pub cooldown_ms: f32,
}

fn check_radius(radius: f32) -> Result<f32> {
    if radius.is_finite() && radius > 0.0 {
        Ok(radius)
    } else {
        Err(SimError::InvalidRadius(radius))
    }
}

impl Ball {
    pub fn new(pos: Vec2, radius: f32) -> Result<Self> {
        Ok(Self {
            pos,
            vel: Vec2::ZERO,
            acc: Vec2::ZERO,
            radius: check_radius(radius)?,
            cooldown_ms: 0.0,
        })
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: f32) -> Result<()> {
        self.radius = check_radius(radius)?;
        Ok(())
    }

    #[inline]
    pub fn is_cooling_down(&self) -> bool {
        self.cooldown_ms > 0.0
    }

    /// Circle-circle overlap
    #[inline]
    pub fn overlaps(&self, other: &Ball) -> bool {
        let reach = self.radius + other.radius;
        self.pos.distance_squared(other.pos) < reach * reach
    }

    /// Advance one frame against static geometry.
    ///
    /// Returns whether the ball touched any surface this frame.
    pub fn update(
        &mut self,
        delta_ms: f32,
        primitives: &[Primitive],
        physics: &PhysicsSettings,
    ) -> bool {
        let dt = delta_ms / 1000.0;
        self.cooldown_ms = (self.cooldown_ms - delta_ms).max(0.0);

        self.pos += self.vel * (dt / 2.0);
        self.vel += self.acc * dt;
        self.pos += self.vel * (dt / 2.0);

        self.acc = -self.vel * physics.air_resistance + physics.gravity;

        let touching = self.resolve_contacts(primitives);
        self.acc += self.snap_force(primitives, physics);
        touching
    }

    /// Push out of every overlapping primitive and drop the velocity along each contact
    fn resolve_contacts(&mut self, primitives: &[Primitive]) -> bool {
        let mut touching = false;
        for prim in primitives {
            if let Some(contact) = prim.contact(self.pos, self.radius) {
                self.pos += contact.normal() * contact.penetration;
                self.vel -= project(self.vel, contact.offset);
                touching = true;
            }
        }
        touching
    }

    /// Attraction toward the nearest surface within snap range.
    ///
    /// Sampled after contacts are resolved, so a surface the ball rests on sits at
    /// distance `r` and still pulls. Surfaces the ball is still embedded in are skipped.
    pub fn snap_force(&self, primitives: &[Primitive], physics: &PhysicsSettings) -> Vec2 {
        if physics.snap_force <= 0.0 || physics.snap_distance <= 0.0 {
            return Vec2::ZERO;
        }

        let reach = self.radius + physics.snap_distance;
        let floor = self.radius * (1.0 - CONTACT_SLOP);
        let nearest = primitives
            .iter()
            .map(|prim| (prim, prim.distance(self.pos).abs()))
            .filter(|&(_, d)| d < reach && d >= floor)
            .min_by(|a, b| a.1.total_cmp(&b.1));

        let Some((prim, d)) = nearest else {
            return Vec2::ZERO;
        };

        let toward = (prim.nearest_point(self.pos) - self.pos).normalize_or_zero();
        let falloff = 1.0 - (d - self.radius) / physics.snap_distance;
        (toward * physics.snap_force * falloff * falloff).clamp_length_max(physics.snap_force)
    }
}
