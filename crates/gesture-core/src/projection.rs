//! Video-crop-aware mapping from normalized landmarks to canvas pixels.
//!
//! Screen space throughout the engine is centred on the canvas with `+x` to the
//! right and `+y` up, measured in canvas pixels. The video is drawn with a
//! "cover" fit: the axis with the larger aspect ratio is cropped symmetrically
//! and never letterboxed.

use glam::{Vec2, Vec3};

/// Crop window of the native video frame that is visible on the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VideoProjection {
    pub offset_x: f32,
    pub offset_y: f32,
    pub visible_width: f32,
    pub visible_height: f32,
    pub native_width: f32,
    pub native_height: f32,
}

impl VideoProjection {
    /// Compute the cover crop for a `native` frame shown on a `surface`.
    /// Returns `None` when either has zero (or non-finite) extent.
    pub fn cover(native: Vec2, surface: Vec2) -> Option<Self> {
        let valid = |v: Vec2| v.is_finite() && v.x > 0.0 && v.y > 0.0;
        if !valid(native) || !valid(surface) {
            return None;
        }
        let video_aspect = native.x / native.y;
        let surface_aspect = surface.x / surface.y;
        let (visible_width, visible_height) = if video_aspect > surface_aspect {
            (native.y * surface_aspect, native.y)
        } else {
            (native.x, native.x / surface_aspect)
        };
        Some(Self {
            offset_x: (native.x - visible_width) * 0.5,
            offset_y: (native.y - visible_height) * 0.5,
            visible_width,
            visible_height,
            native_width: native.x,
            native_height: native.y,
        })
    }

    /// Position of a landmark inside the visible crop, clamped to \[0, 1\].
    pub fn crop_uv(&self, landmark: Vec3) -> Vec2 {
        let u = (landmark.x * self.native_width - self.offset_x) / self.visible_width;
        let v = (landmark.y * self.native_height - self.offset_y) / self.visible_height;
        Vec2::new(u.clamp(0.0, 1.0), v.clamp(0.0, 1.0))
    }
}

/// Native video and render-surface sizes for the current frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub video: Vec2,
    pub surface: Vec2,
}

impl Viewport {
    pub fn new(video: Vec2, surface: Vec2) -> Self {
        Self { video, surface }
    }

    pub fn projection(&self) -> Option<VideoProjection> {
        VideoProjection::cover(self.video, self.surface)
    }
}

/// Map a normalized landmark into centred canvas pixels, mirrored horizontally
/// to match a front-facing camera.
pub fn project_landmark(
    landmark: Vec3,
    params: Option<&VideoProjection>,
    canvas_w: f32,
    canvas_h: f32,
) -> Option<Vec2> {
    let params = params?;
    if !(canvas_w > 0.0 && canvas_h > 0.0) {
        return None;
    }
    let uv = params.crop_uv(landmark);
    Some(Vec2::new(
        (1.0 - uv.x) * canvas_w - canvas_w * 0.5,
        canvas_h * 0.5 - uv.y * canvas_h,
    ))
}

/// Normalized landmark that lands on `screen` for the given projection.
/// Inverse of [`project_landmark`] for points inside the visible crop.
pub fn unproject_screen(screen: Vec2, params: &VideoProjection, canvas: Vec2) -> Vec3 {
    let u = 1.0 - (screen.x + canvas.x * 0.5) / canvas.x;
    let v = (canvas.y * 0.5 - screen.y) / canvas.y;
    Vec3::new(
        (u * params.visible_width + params.offset_x) / params.native_width,
        (v * params.visible_height + params.offset_y) / params.native_height,
        0.0,
    )
}
