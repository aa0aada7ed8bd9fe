//! Autoframing 2D camera
//!
//! The camera keeps its target inside two rectangles centered on the view:
//! - hard frame: any excursion is corrected instantly and fully
//! - soft frame: excursions are corrected gradually, proportional to elapsed time
//!
//! Both frames are measured in view units (the short viewport axis spans [-1, 1]),
//! so the soft pursuit rate scales with `frame_size` automatically.

use glam::{Mat3, Vec2};

use crate::error::{Result, SimError};
use crate::settings::CameraSettings;

#[derive(Debug, Clone)]
pub struct Camera {
    /// World position at the view center
    pub position: Vec2,
    /// World position being tracked
    pub target: Vec2,
    hard_frame: f32,
    soft_frame: f32,
    frame_size: f32,
    zoom: f32,
    /// Viewport size in pixels (only the aspect ratio matters)
    viewport: Vec2,
    /// Soft pursuit rate (1/s)
    pub soft_rate: f32,
}

impl Camera {
    pub fn new(settings: &CameraSettings) -> Result<Self> {
        let (hard, soft, size) = (settings.hard_frame, settings.soft_frame, settings.frame_size);
        if !(soft >= 0.0 && hard >= soft && size > 0.0) {
            return Err(SimError::InvalidFrame { hard, soft, size });
        }
        Ok(Self {
            position: Vec2::ZERO,
            target: Vec2::ZERO,
            hard_frame: hard,
            soft_frame: soft,
            frame_size: size,
            zoom: 2.0 / size,
            viewport: Vec2::ONE,
            soft_rate: settings.soft_rate,
        })
    }

    #[inline]
    pub fn frame_size(&self) -> f32 {
        self.frame_size
    }

    #[inline]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    #[inline]
    pub fn hard_frame(&self) -> f32 {
        self.hard_frame
    }

    #[inline]
    pub fn soft_frame(&self) -> f32 {
        self.soft_frame
    }

    /// World units spanned by the short viewport axis. Must stay positive while the
    /// camera is in use.
    pub fn set_frame_size(&mut self, frame_size: f32) {
        self.frame_size = frame_size;
        self.zoom = 2.0 / frame_size;
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width, height);
    }

    /// Forward view matrix: `Scale(aspect-corrected zoom) * Translate(-position)`
    pub fn matrix(&self) -> Mat3 {
        let aspect = self.viewport.y / self.viewport.x;
        Mat3::from_scale(Vec2::new(self.zoom * aspect, self.zoom))
            * Mat3::from_translation(-self.position)
    }

    /// Inverse view matrix. Fails when the view is degenerate (zero frame size or
    /// viewport dimension).
    pub fn inverse(&self) -> Result<Mat3> {
        let m = self.matrix();
        let determinant = m.determinant();
        if determinant == 0.0 || !determinant.is_finite() {
            return Err(SimError::SingularMatrix { determinant });
        }
        Ok(m.inverse())
    }

    /// World point in view units
    #[inline]
    pub fn to_local(&self, world: Vec2) -> Vec2 {
        self.matrix().transform_point2(world)
    }

    /// Target in view units
    #[inline]
    pub fn target_local(&self) -> Vec2 {
        self.to_local(self.target)
    }

    /// Row-major 3x3 view matrix for the renderer
    pub fn to_row_major(&self) -> [f32; 9] {
        self.matrix().transpose().to_cols_array()
    }

    /// Reframe toward the target. `dt` is in seconds.
    pub fn update(&mut self, dt: f32) -> Result<()> {
        let inverse = self.inverse()?;

        let hard = Vec2::splat(self.hard_frame);
        let local = self.target_local();
        let excess = local - local.clamp(-hard, hard);
        if excess != Vec2::ZERO {
            self.position += inverse.transform_vector2(excess);
        }

        // Translation does not change the linear part, so `inverse` is still valid
        let soft = Vec2::splat(self.soft_frame);
        let local = self.target_local();
        let excess = local - local.clamp(-soft, soft);
        if excess != Vec2::ZERO {
            let rate = (dt * self.soft_rate).clamp(0.0, 1.0);
            self.position += inverse.transform_vector2(excess * rate);
        }
        Ok(())
    }

    /// Jump straight to the target, ignoring both frames
    pub fn center(&mut self) {
        self.position = self.target;
    }
}
