//! Straight collision segment
//!
//! A segment caches two implicit planes at construction:
//! - the line plane through both endpoints (signed distance along the unit normal)
//! - the bisecting plane through the midpoint, perpendicular to the line
//!
//! The bisecting plane tells whether a point lies within the segment's perpendicular
//! band or beyond one of its endpoints, so no separate clamp step is needed.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::{perp, project};

/// Signed distance from `p` to the implicit plane `(nx, ny, d)`
#[inline]
pub(crate) fn plane_distance(plane: Vec3, p: Vec2) -> f32 {
    plane.x * p.x + plane.y * p.y + plane.z
}

/// Immutable line segment with cached planes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "SegmentDef", into = "SegmentDef")]
pub struct Segment {
    p0: Vec2,
    p1: Vec2,
    normal: Vec2,
    /// Line plane `(nx, ny, d)`
    line: Vec3,
    /// Bisecting plane through the midpoint, positive toward `p0`
    bisect: Vec3,
    length: f32,
}

/// Serialized form: endpoints only, the rest is derived
#[derive(Serialize, Deserialize)]
struct SegmentDef {
    p0: Vec2,
    p1: Vec2,
}

impl From<SegmentDef> for Segment {
    fn from(def: SegmentDef) -> Self {
        Segment::new(def.p0, def.p1)
    }
}

impl From<Segment> for SegmentDef {
    fn from(seg: Segment) -> Self {
        SegmentDef {
            p0: seg.p0,
            p1: seg.p1,
        }
    }
}

impl Segment {
    /// Build a segment from its endpoints. Endpoints must be distinct.
    pub fn new(p0: Vec2, p1: Vec2) -> Self {
        let length = p0.distance(p1);
        let normal = perp(p1 - p0).normalize_or_zero();
        let line = Vec3::new(normal.x, normal.y, -normal.dot(p0));

        let mid = (p0 + p1) * 0.5;
        let along = perp(normal);
        let bisect = Vec3::new(along.x, along.y, -along.dot(mid));

        Self {
            p0,
            p1,
            normal,
            line,
            bisect,
            length,
        }
    }

    #[inline]
    pub fn p0(&self) -> Vec2 {
        self.p0
    }

    #[inline]
    pub fn p1(&self) -> Vec2 {
        self.p1
    }

    /// Unit normal (counter-clockwise from `p0 -> p1`)
    #[inline]
    pub fn normal(&self) -> Vec2 {
        self.normal
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.length
    }

    /// Endpoint on the side of `p` indicated by the bisecting plane, if `p` is
    /// outside the perpendicular band
    fn beyond_endpoint(&self, p: Vec2) -> Option<Vec2> {
        let along = plane_distance(self.bisect, p);
        if along.abs() > self.length / 2.0 {
            Some(if along < 0.0 { self.p1 } else { self.p0 })
        } else {
            None
        }
    }

    /// Signed distance: positive on the normal side inside the band, Euclidean
    /// distance to the nearer endpoint outside it
    pub fn distance(&self, p: Vec2) -> f32 {
        match self.beyond_endpoint(p) {
            Some(end) => end.distance(p),
            None => plane_distance(self.line, p),
        }
    }

    /// Closest point on the segment to `p`
    pub fn nearest_point(&self, p: Vec2) -> Vec2 {
        match self.beyond_endpoint(p) {
            Some(end) => end,
            None => p - project(p - self.p0, self.normal),
        }
    }

    #[inline]
    pub fn collide_circle(&self, p: Vec2, radius: f32) -> bool {
        self.distance(p).abs() < radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn floor() -> Segment {
        Segment::new(Vec2::new(-5.0, 0.0), Vec2::new(5.0, 0.0))
    }

    #[test]
    fn test_segment_derived_fields() {
        let seg = floor();
        assert!((seg.length() - 10.0).abs() < 1e-6);
        // Left-to-right floor has an upward normal
        assert!((seg.normal() - Vec2::Y).length() < 1e-6);
    }

    #[test]
    fn test_segment_distance_is_signed_inside_band() {
        let seg = floor();
        assert!((seg.distance(Vec2::new(1.0, 2.0)) - 2.0).abs() < 1e-6);
        assert!((seg.distance(Vec2::new(1.0, -2.0)) + 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_segment_nearest_point_is_perpendicular_foot() {
        let seg = floor();
        let q = seg.nearest_point(Vec2::new(2.5, 3.0));
        assert!((q - Vec2::new(2.5, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_segment_beyond_endpoints() {
        let seg = floor();
        let p = Vec2::new(8.0, 4.0);
        assert_eq!(seg.nearest_point(p), Vec2::new(5.0, 0.0));
        assert!((seg.distance(p) - 5.0).abs() < 1e-5);

        let p = Vec2::new(-8.0, -4.0);
        assert_eq!(seg.nearest_point(p), Vec2::new(-5.0, 0.0));
        assert!((seg.distance(p) - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_segment_collide_circle_uses_abs_distance() {
        let seg = floor();
        assert!(seg.collide_circle(Vec2::new(0.0, -0.05), 0.1));
        assert!(seg.collide_circle(Vec2::new(0.0, 0.05), 0.1));
        assert!(!seg.collide_circle(Vec2::new(0.0, 0.2), 0.1));
    }

    #[test]
    fn test_segment_serde_rebuilds_planes() {
        let seg = Segment::new(Vec2::new(1.0, 2.0), Vec2::new(4.0, 6.0));
        let json = serde_json::to_string(&seg).unwrap();
        let back: Segment = serde_json::from_str(&json).unwrap();
        assert_eq!(seg, back);
    }

    proptest! {
        #[test]
        fn prop_outside_band_snaps_to_closer_endpoint(
            x0 in -50.0f32..50.0, y0 in -50.0f32..50.0,
            x1 in -50.0f32..50.0, y1 in -50.0f32..50.0,
            t in 0.05f32..3.0, side in -3.0f32..3.0, beyond_start in any::<bool>(),
        ) {
            let p0 = Vec2::new(x0, y0);
            let p1 = Vec2::new(x1, y1);
            prop_assume!(p0.distance(p1) > 1.0);
            let seg = Segment::new(p0, p1);
            let dir = (p1 - p0).normalize();
            let len = seg.length();
            // Past one end along the line, offset sideways
            let (end, p) = if beyond_start {
                (p0, p0 - dir * t * len + seg.normal() * side)
            } else {
                (p1, p1 + dir * t * len + seg.normal() * side)
            };
            prop_assert_eq!(seg.nearest_point(p), end);
            prop_assert!((seg.distance(p) - end.distance(p)).abs() < 1e-3);
        }

        #[test]
        fn prop_collide_circle_matches_abs_distance(
            px in -20.0f32..20.0, py in -20.0f32..20.0, r in 0.01f32..10.0,
        ) {
            let seg = Segment::new(Vec2::new(-3.0, 1.0), Vec2::new(4.0, -2.0));
            let p = Vec2::new(px, py);
            prop_assert_eq!(seg.collide_circle(p, r), seg.distance(p).abs() < r);
        }
    }
}
