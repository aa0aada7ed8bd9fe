//! Collision primitives and circle contact queries
//!
//! Level geometry is a closed set of two shapes, so dispatch is a plain enum match.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::arc::Arc;
use super::segment::Segment;

/// A static piece of level geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Primitive {
    Segment(Segment),
    Arc(Arc),
}

impl From<Segment> for Primitive {
    fn from(seg: Segment) -> Self {
        Primitive::Segment(seg)
    }
}

impl From<Arc> for Primitive {
    fn from(arc: Arc) -> Self {
        Primitive::Arc(arc)
    }
}

impl Primitive {
    /// Distance from `p` to the shape. Segments report a signed value inside their
    /// perpendicular band; callers that need a magnitude take `abs()`.
    #[inline]
    pub fn distance(&self, p: Vec2) -> f32 {
        match self {
            Primitive::Segment(seg) => seg.distance(p),
            Primitive::Arc(arc) => arc.distance(p),
        }
    }

    #[inline]
    pub fn nearest_point(&self, p: Vec2) -> Vec2 {
        match self {
            Primitive::Segment(seg) => seg.nearest_point(p),
            Primitive::Arc(arc) => arc.nearest_point(p),
        }
    }

    #[inline]
    pub fn collide_circle(&self, p: Vec2, radius: f32) -> bool {
        self.distance(p).abs() < radius
    }

    /// Contact between a circle and this shape, if they overlap
    pub fn contact(&self, center: Vec2, radius: f32) -> Option<Contact> {
        if !self.collide_circle(center, radius) {
            return None;
        }
        let point = self.nearest_point(center);
        let offset = center - point;
        Some(Contact {
            point,
            offset,
            penetration: radius - offset.length(),
        })
    }
}

/// Circle-vs-primitive overlap
#[derive(Debug, Clone, Copy)]
pub struct Contact {
    /// Nearest point on the primitive
    pub point: Vec2,
    /// Vector from the contact point to the circle center (not normalized)
    pub offset: Vec2,
    /// How far the circle must move along `offset` to just touch
    pub penetration: f32,
}

impl Contact {
    /// Unit push-out direction; zero when the center sits exactly on the surface
    #[inline]
    pub fn normal(&self) -> Vec2 {
        self.offset.normalize_or_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_primitive_dispatch_matches_shapes() {
        let seg = Segment::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));
        let arc = Arc::new(Vec2::ZERO, 5.0, 0.0, PI);
        let p = Vec2::new(2.0, 3.0);

        let prim: Primitive = seg.clone().into();
        assert_eq!(prim.distance(p), seg.distance(p));
        assert_eq!(prim.nearest_point(p), seg.nearest_point(p));

        let prim: Primitive = arc.clone().into();
        assert_eq!(prim.distance(p), arc.distance(p));
        assert_eq!(prim.nearest_point(p), arc.nearest_point(p));
    }

    #[test]
    fn test_contact_penetration_and_normal() {
        let prim: Primitive = Segment::new(Vec2::new(-5.0, 0.0), Vec2::new(5.0, 0.0)).into();
        let contact = prim.contact(Vec2::new(1.0, 0.06), 0.1).unwrap();
        assert!((contact.penetration - 0.04).abs() < 1e-5);
        assert!((contact.normal() - Vec2::Y).length() < 1e-5);
        assert!(prim.contact(Vec2::new(1.0, 0.2), 0.1).is_none());
    }

    #[test]
    fn test_contact_from_below_pushes_down() {
        let prim: Primitive = Segment::new(Vec2::new(-5.0, 0.0), Vec2::new(5.0, 0.0)).into();
        let contact = prim.contact(Vec2::new(0.0, -0.05), 0.1).unwrap();
        assert!(contact.normal().y < 0.0);
    }

    #[test]
    fn test_primitive_tagged_json() {
        let json = r#"[
            {"segment": {"p0": [0.0, 0.0], "p1": [4.0, 0.0]}},
            {"arc": {"center": [0.0, 0.0], "radius": 2.0, "start_angle": 0.0, "end_angle": 1.5}}
        ]"#;
        let prims: Vec<Primitive> = serde_json::from_str(json).unwrap();
        assert!(matches!(prims[0], Primitive::Segment(_)));
        assert!(matches!(prims[1], Primitive::Arc(_)));
        assert!((prims[0].distance(Vec2::new(2.0, 1.0)) - 1.0).abs() < 1e-6);
    }
}
