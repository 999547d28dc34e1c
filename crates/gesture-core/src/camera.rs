//! Perspective camera shared with the scene collaborator.
//!
//! Conversions between world space and the engine's centred, y-up canvas pixel
//! space (see [`crate::projection`]) live here so picking, hover and drag
//! re-projection agree on one convention.

use glam::{Mat4, Vec2, Vec3, Vec4};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(eye: Vec3, target: Vec3) -> Self {
        Self {
            eye,
            target,
            up: Vec3::Y,
            fovy_radians: std::f32::consts::FRAC_PI_4,
            znear: 0.1,
            zfar: 10_000.0,
        }
    }

    /// Compute the clip-space projection matrix for a canvas aspect ratio.
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self, canvas: Vec2) -> Mat4 {
        self.projection_matrix(canvas.x / canvas.y.max(1.0)) * self.view_matrix()
    }

    /// Unit vector along the principal axis.
    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye).normalize_or_zero()
    }

    /// Camera-to-target distance.
    pub fn distance(&self) -> f32 {
        self.eye.distance(self.target)
    }

    /// Depth of `world` along the principal axis.
    pub fn view_depth(&self, world: Vec3) -> f32 {
        (world - self.eye).dot(self.forward())
    }

    /// Project a world point into centred canvas pixels.
    /// Returns `None` for points behind the camera or a zero-sized canvas.
    pub fn world_to_screen(&self, world: Vec3, canvas: Vec2) -> Option<Vec2> {
        if !(canvas.x > 0.0 && canvas.y > 0.0) {
            return None;
        }
        let clip = self.view_projection(canvas) * world.extend(1.0);
        if clip.w <= f32::EPSILON {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some(Vec2::new(ndc.x * canvas.x * 0.5, ndc.y * canvas.y * 0.5))
    }

    /// Compute a world-space ray through a centred canvas pixel.
    ///
    /// Returns `(ray_origin, ray_direction)` in world space.
    pub fn screen_ray(&self, screen: Vec2, canvas: Vec2) -> Option<(Vec3, Vec3)> {
        if !(canvas.x > 0.0 && canvas.y > 0.0) {
            return None;
        }
        let ndc_x = screen.x / (canvas.x * 0.5);
        let ndc_y = screen.y / (canvas.y * 0.5);
        let inv = self.view_projection(canvas).inverse();
        let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        if p_far.w.abs() <= f32::EPSILON {
            return None;
        }
        let p1: Vec3 = p_far.truncate() / p_far.w;
        let rd = (p1 - self.eye).normalize_or_zero();
        (rd != Vec3::ZERO).then_some((self.eye, rd))
    }
}

/// Intersect a ray with the plane at `depth` along `forward` from the ray origin.
#[inline]
pub fn ray_depth_plane(ray_origin: Vec3, ray_dir: Vec3, forward: Vec3, depth: f32) -> Option<Vec3> {
    let denom = ray_dir.dot(forward);
    if denom.abs() <= 1e-6 {
        return None;
    }
    let t = depth / denom;
    (t >= 0.0).then(|| ray_origin + ray_dir * t)
}
