//! Camera model and perspective projection
//!
//! The camera looks down the view-space -Z axis at `pivot`. Depth is measured
//! from a virtual eye that sits `(view_size / 2) / zoom` in front of the
//! pivot, and the apparent pixel size shrinks with depth through an angular
//! resolution derived from the grid width:
//!
//! ```text
//! angular_resolution_x = 2 atan(1 / (pixels_x / 2))
//! angle_size_x         = 2 atan(pixel_size_x / (2 depth))
//! scale_x              = angular_resolution_x / angle_size_x
//! screen_x             = x / (pixel_size_x scale_x) + pixels_x / 2
//! ```

use tracing::warn;

use crate::simulation::states::NVec3;
use crate::visualization::rotation::{rotate_pitch_then_yaw, rotate_z_up};

#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub pivot: NVec3, // point the view is centred on
    pub zoom: f64, // magnification, > 0
    pub view_size: f64, // field of view width at zoom 1, metres
    pub pixels_x: usize, // grid columns
    pub pixels_y: usize, // grid rows
}

/// Quantities derived from the camera before each frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Optics {
    pub pixel_size_x: f64,
    pub pixel_size_y: f64,
    pub angular_resolution_x: f64,
    pub angular_resolution_y: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            pivot: NVec3::zeros(),
            zoom: 1.0,
            view_size: 8.0e8,
            pixels_x: 32,
            pixels_y: 40,
        }
    }
}

impl Camera {
    /// Recompute the derived pixel sizes and angular resolutions
    pub fn optics(&self) -> Optics {
        let px = self.pixels_x as f64;
        let py = self.pixels_y as f64;

        let angular_resolution_x = 2.0 * (1.0 / (px / 2.0)).atan();
        Optics {
            pixel_size_x: self.view_size / px,
            pixel_size_y: self.view_size / py,
            angular_resolution_x,
            angular_resolution_y: angular_resolution_x * (px / py),
        }
    }

    /// Distance from the eye to the pivot plane
    pub fn eye_distance(&self) -> f64 {
        (self.view_size / 2.0) / self.zoom
    }

    /// World distance moved by one pan unit at the current zoom
    pub fn pan_resolution(&self) -> f64 {
        ((self.view_size / 2.0) / (self.pixels_x as f64 / 2.0)) / self.zoom
    }

    /// Move the pivot along `direction` after rotating it by pitch (about X)
    /// and then yaw (about Z), both in degrees.
    pub fn pan(&mut self, direction: NVec3, distance: f64, pitch: f64, yaw: f64) {
        let world = rotate_pitch_then_yaw(direction, pitch, yaw);
        self.pivot += world * distance;
    }

    /// Multiply the zoom by `factor`. Returns false and keeps the old zoom
    /// when the result would not be finite and positive.
    pub fn zoom_by(&mut self, factor: f64) -> bool {
        self.try_set_zoom(self.zoom * factor)
    }

    /// Set zoom to `2^exponent`, with the same guard as [`Camera::zoom_by`]
    pub fn set_zoom(&mut self, exponent: f64) -> bool {
        self.try_set_zoom(2f64.powf(exponent))
    }

    fn try_set_zoom(&mut self, zoom: f64) -> bool {
        if !(zoom.is_finite() && zoom > 0.0) {
            warn!(current = self.zoom, rejected = zoom, "zoom must stay finite and positive");
            return false;
        }
        self.zoom = zoom;
        true
    }
}

/// View orientation in degrees
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Orientation {
    pub yaw: f64,
    pub pitch: f64,
}

impl Orientation {
    pub fn rotate(&self, v: NVec3) -> NVec3 {
        rotate_z_up(v, self.yaw, self.pitch)
    }

    /// Add `delta` degrees of yaw; a zero delta resets yaw to zero
    pub fn turn_yaw(&mut self, delta: f64) {
        if delta == 0.0 {
            self.yaw = 0.0;
        } else {
            self.yaw += delta;
        }
    }

    /// Add `delta` degrees of pitch; a zero delta resets pitch to zero
    pub fn turn_pitch(&mut self, delta: f64) {
        if delta == 0.0 {
            self.pitch = 0.0;
        } else {
            self.pitch += delta;
        }
    }

    /// Pan along a camera-relative direction
    pub fn pan(&self, camera: &mut Camera, direction: NVec3, distance: f64) {
        camera.pan(direction, distance, -self.pitch, -self.yaw);
    }
}

/// A point mapped into screen space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub x: f64, // column, fractional
    pub y: f64, // row, fractional, grows downwards
    pub depth: f64, // distance from the eye along the view axis
}

impl Projection {
    /// Integer pixel, if it lies inside a `pixels_x * pixels_y` grid
    pub fn pixel(&self, pixels_x: usize, pixels_y: usize) -> Option<(usize, usize)> {
        let (px, py) = (self.x.floor(), self.y.floor());
        if px < 0.0 || py < 0.0 || px >= pixels_x as f64 || py >= pixels_y as f64 {
            return None;
        }
        Some((px as usize, py as usize))
    }
}

/// Everything the renderer needs to know about how to look at the log
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub camera: Camera,
    pub orientation: Orientation,
    pub focused: Option<usize>, // body locked to the pivot
    pub motion_relative_to: Option<usize>, // body whose own motion trails are drawn against
}

impl ViewState {
    /// Project a world position.
    ///
    /// `focus` is the current position of the focus-locked body (zero when
    /// nothing is locked). Returns `None` for points behind the eye or with
    /// a degenerate scale.
    pub fn project(&self, optics: &Optics, world: NVec3, focus: NVec3) -> Option<Projection> {
        let cam = &self.camera;

        let relative = world - focus - cam.pivot;
        let rotated = self.orientation.rotate(relative);

        let depth = -rotated.z + cam.eye_distance();

        let angle_size_x = 2.0 * (optics.pixel_size_x / (2.0 * depth)).atan();
        let angle_size_y = 2.0 * (optics.pixel_size_y / (2.0 * depth)).atan();
        let scale_x = optics.angular_resolution_x / angle_size_x;
        let scale_y = optics.angular_resolution_y / angle_size_y;

        // NaN fails both comparisons as well
        if !(scale_x > 0.0 && scale_y > 0.0) || !scale_x.is_finite() || !scale_y.is_finite() {
            return None;
        }

        let px = cam.pixels_x as f64;
        let py = cam.pixels_y as f64;
        let x = rotated.x / (optics.pixel_size_x * scale_x) + px / 2.0;
        let y = py - (rotated.y / (optics.pixel_size_y * scale_y) + py / 2.0);

        Some(Projection { x, y, depth })
    }
}
