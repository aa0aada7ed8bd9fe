//! Render-facing output
//!
//! The renderer itself lives outside this crate. These are the plain-data buffers it
//! consumes: per-ball snapshots, the camera matrix and wireframe vertices.

pub mod shapes;
pub mod snapshot;
pub mod vertex;

pub use shapes::wireframe;
pub use snapshot::{BallSnapshot, FrameOutput, frame_output};
pub use vertex::{Vertex, colors};
