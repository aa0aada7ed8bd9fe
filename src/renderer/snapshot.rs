//! Per-frame snapshot handed to the renderer

use bytemuck::{Pod, Zeroable};

use super::vertex::colors;
use crate::sim::{Ball, World};

/// One ball as the metaball renderer sees it
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct BallSnapshot {
    pub position: [f32; 2],
    /// Core radius and falloff radius (`[r, 2r]`)
    pub display_radii: [f32; 2],
    pub color: [f32; 4],
}

impl BallSnapshot {
    pub fn new(ball: &Ball, color: [f32; 4]) -> Self {
        let r = ball.radius();
        Self {
            position: ball.pos.to_array(),
            display_radii: [r, r * 2.0],
            color,
        }
    }
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone)]
pub struct FrameOutput {
    pub balls: Vec<BallSnapshot>,
    /// Row-major 3x3 view matrix
    pub camera: [f32; 9],
}

/// Snapshot the world in ball order
pub fn frame_output(world: &World) -> FrameOutput {
    let player = world.balls.player_id();
    let held = world.charging_ball();
    let balls = world
        .balls
        .iter()
        .map(|(id, ball)| {
            let color = if id == player {
                colors::PLAYER
            } else if Some(id) == held {
                colors::CHARGING
            } else {
                colors::BALL
            };
            BallSnapshot::new(ball, color)
        })
        .collect();

    FrameOutput {
        balls,
        camera: world.camera.to_row_major(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::{Ball, Level};
    use glam::Vec2;

    #[test]
    fn test_snapshot_layout() {
        assert_eq!(std::mem::size_of::<BallSnapshot>(), 32);
        let ball = Ball::new(Vec2::new(1.0, 2.0), 3.0).unwrap();
        let snap = BallSnapshot::new(&ball, colors::BALL);
        assert_eq!(snap.display_radii, [3.0, 6.0]);
        let bytes: &[u8] = bytemuck::bytes_of(&snap);
        assert_eq!(bytes.len(), 32);
    }

    #[test]
    fn test_frame_output_colors_player() {
        let mut world = World::new(Level::new(Vec2::ZERO, 1.0), Settings::default()).unwrap();
        world.balls.insert(Ball::new(Vec2::new(5.0, 0.0), 0.5).unwrap());
        let out = frame_output(&world);
        assert_eq!(out.balls.len(), 2);
        assert_eq!(out.balls[0].color, colors::PLAYER);
        assert_eq!(out.balls[1].color, colors::BALL);
        assert_eq!(out.camera, world.camera.to_row_major());
    }
}
