//! Static level description
//!
//! Geometry arrives already extracted from the level art as segments and arcs, plus a
//! spawn point and the starting player radius. The simulation never mutates it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::arc::Arc;
use super::collision::Primitive;
use super::segment::Segment;
use crate::error::{Result, SimError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    #[serde(default)]
    pub primitives: Vec<Primitive>,
    pub spawn: Vec2,
    pub player_radius: f32,
}

impl Level {
    /// Empty level
    pub fn new(spawn: Vec2, player_radius: f32) -> Self {
        Self {
            primitives: Vec::new(),
            spawn,
            player_radius,
        }
    }

    pub fn push_segment(&mut self, p0: Vec2, p1: Vec2) -> &mut Self {
        self.primitives.push(Segment::new(p0, p1).into());
        self
    }

    pub fn push_arc(&mut self, center: Vec2, radius: f32, start: f32, end: f32) -> &mut Self {
        self.primitives.push(Arc::new(center, radius, start, end).into());
        self
    }

    /// Axis-aligned box as four segments, normals facing out
    pub fn push_rect(&mut self, min: Vec2, max: Vec2) -> &mut Self {
        let top_left = Vec2::new(min.x, max.y);
        let bottom_right = Vec2::new(max.x, min.y);
        self.push_segment(min, top_left)
            .push_segment(top_left, max)
            .push_segment(max, bottom_right)
            .push_segment(bottom_right, min)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let level: Level = serde_json::from_str(json)?;
        if !(level.player_radius.is_finite() && level.player_radius > 0.0) {
            return Err(SimError::InvalidRadius(level.player_radius));
        }
        log::info!("Loaded level with {} primitives", level.primitives.len());
        Ok(level)
    }
}
