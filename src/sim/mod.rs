//! Simulation module
//!
//! Everything that advances game state lives here:
//! - Analytic collision against static segments and arcs
//! - Ball integration, contact and snap field
//! - Split/launch/merge of balls
//! - Autoframing camera
//!
//! Single-threaded and frame-synchronous; no rendering or platform dependencies.

pub mod arc;
pub mod ball;
pub mod camera;
pub mod collision;
pub mod input;
pub mod level;
pub mod segment;
pub mod state;
pub mod tick;

pub use arc::Arc;
pub use ball::{Ball, merged_radius, split_radius};
pub use camera::Camera;
pub use collision::{Contact, Primitive};
pub use input::{Button, ButtonSet, FrameInput};
pub use level::Level;
pub use segment::Segment;
pub use state::{BallId, BallSet, Charge, GameEvent, World};
pub use tick::{merge_overlapping, tick};
