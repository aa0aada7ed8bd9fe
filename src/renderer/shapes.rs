//! Wireframe generation for level geometry

use super::vertex::{Vertex, colors};
use crate::sim::Primitive;

/// Chords per radian when sampling arcs
const ARC_SAMPLES_PER_RADIAN: f32 = 8.0;

/// Line-list vertices (pairs) tracing every primitive
pub fn wireframe(primitives: &[Primitive]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(primitives.len() * 2);

    for prim in primitives {
        match prim {
            Primitive::Segment(seg) => {
                vertices.push(Vertex::at(seg.p0(), colors::WIREFRAME));
                vertices.push(Vertex::at(seg.p1(), colors::WIREFRAME));
            }
            Primitive::Arc(arc) => {
                let span = (arc.end_angle() - arc.start_angle()).abs();
                let chords = ((span * ARC_SAMPLES_PER_RADIAN).ceil() as usize).max(1);
                let points = arc.sample(chords + 1);
                for pair in points.windows(2) {
                    vertices.push(Vertex::at(pair[0], colors::WIREFRAME));
                    vertices.push(Vertex::at(pair[1], colors::WIREFRAME));
                }
            }
        }
    }

    vertices
}
