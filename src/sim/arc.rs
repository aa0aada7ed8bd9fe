//! Circular arc geometry for curved level surfaces
//!
//! An arc is defined by:
//! - center, radius
//! - start_angle, end_angle (radians, any sign or winding)
//!
//! The span is classified with a single dot product against the bisecting direction:
//! directions closer to the bisector than the endpoints are "on the arc", everything
//! else snaps to whichever endpoint faces the query point more directly.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::direction;

/// An immutable arc of a circle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ArcDef", into = "ArcDef")]
pub struct Arc {
    center: Vec2,
    radius: f32,
    start_angle: f32,
    end_angle: f32,
    /// Unit vector through the middle of the span
    bisector: Vec2,
    start_dir: Vec2,
    end_dir: Vec2,
    /// `bisector · start_dir`; directions with a larger dot lie on the open arc
    min_dot: f32,
}

#[derive(Serialize, Deserialize)]
struct ArcDef {
    center: Vec2,
    radius: f32,
    start_angle: f32,
    end_angle: f32,
}

impl From<ArcDef> for Arc {
    fn from(def: ArcDef) -> Self {
        Arc::new(def.center, def.radius, def.start_angle, def.end_angle)
    }
}

impl From<Arc> for ArcDef {
    fn from(arc: Arc) -> Self {
        ArcDef {
            center: arc.center,
            radius: arc.radius,
            start_angle: arc.start_angle,
            end_angle: arc.end_angle,
        }
    }
}

impl Arc {
    /// Build an arc. `radius` must be positive.
    pub fn new(center: Vec2, radius: f32, start_angle: f32, end_angle: f32) -> Self {
        let bisector = direction((start_angle + end_angle) * 0.5);
        let start_dir = direction(start_angle);
        let end_dir = direction(end_angle);
        Self {
            center,
            radius,
            start_angle,
            end_angle,
            bisector,
            start_dir,
            end_dir,
            min_dot: bisector.dot(start_dir),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn start_angle(&self) -> f32 {
        self.start_angle
    }

    #[inline]
    pub fn end_angle(&self) -> f32 {
        self.end_angle
    }

    #[inline]
    pub fn start_point(&self) -> Vec2 {
        self.center + self.start_dir * self.radius
    }

    #[inline]
    pub fn end_point(&self) -> Vec2 {
        self.center + self.end_dir * self.radius
    }

    /// Whether the direction from the center toward `p` falls inside the open span
    fn on_span(&self, dir: Vec2) -> bool {
        self.min_dot < dir.dot(self.bisector)
    }

    /// Unsigned distance to the arc
    pub fn distance(&self, p: Vec2) -> f32 {
        let dir = (p - self.center).normalize_or_zero();
        if self.on_span(dir) {
            (p.distance(self.center) - self.radius).abs()
        } else {
            p.distance(self.nearest_endpoint(dir))
        }
    }

    /// Closest point on the arc to `p`
    pub fn nearest_point(&self, p: Vec2) -> Vec2 {
        let dir = (p - self.center).normalize_or_zero();
        if self.on_span(dir) {
            self.center + dir * self.radius
        } else {
            self.nearest_endpoint(dir)
        }
    }

    fn nearest_endpoint(&self, dir: Vec2) -> Vec2 {
        if dir.dot(self.start_dir) > dir.dot(self.end_dir) {
            self.start_point()
        } else {
            self.end_point()
        }
    }

    #[inline]
    pub fn collide_circle(&self, p: Vec2, radius: f32) -> bool {
        self.distance(p).abs() < radius
    }

    /// Sample points along the arc from start to end (for wireframes)
    pub fn sample(&self, num_points: usize) -> Vec<Vec2> {
        let span = self.end_angle - self.start_angle;
        (0..num_points)
            .map(|i| {
                let t = i as f32 / (num_points - 1).max(1) as f32;
                self.center + direction(self.start_angle + t * span) * self.radius
            })
            .collect()
    }
}
