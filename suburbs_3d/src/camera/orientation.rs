/// Accumulated yaw/pitch angles and the mouse-look integrator feeding them.

use glam::Vec3;

/// Default pitch limit in degrees. Keeps the look direction off the poles.
pub const PITCH_LIMIT: f32 = 89.0;

/// Absolute look angles in degrees.
///
/// Yaw is unbounded (trigonometry wraps it); pitch is kept inside
/// [-limit, limit] by `accumulate`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Orientation {
    pub yaw: f32,
    pub pitch: f32,
}

impl Orientation {
    pub fn new(yaw: f32, pitch: f32) -> Self {
        Self { yaw, pitch }
    }

    /// Angles that reproduce the unit direction `front` through `Camera::rotate`.
    pub fn from_front(front: Vec3) -> Self {
        let front = front.normalize_or_zero();
        Self {
            yaw: front.z.atan2(front.x).to_degrees(),
            pitch: front.y.clamp(-1.0, 1.0).asin().to_degrees(),
        }
    }

    /// Add deltas, clamping pitch to ±`pitch_limit`.
    pub fn accumulate(&mut self, yaw_delta: f32, pitch_delta: f32, pitch_limit: f32) {
        self.yaw += yaw_delta;
        self.pitch = (self.pitch + pitch_delta).clamp(-pitch_limit, pitch_limit);
    }
}

/// Integrates cursor positions into an `Orientation`.
///
/// The first cursor event only records the position. Later events produce
/// offsets scaled by the sensitivity, with screen-space y inverted.
#[derive(Debug, Clone)]
pub struct MouseLook {
    last_cursor: Option<(f64, f64)>,
    sensitivity: f32,
    pitch_limit: f32,
    orientation: Orientation,
}

impl MouseLook {
    pub fn new(sensitivity: f32, pitch_limit: f32) -> Self {
        Self {
            last_cursor: None,
            sensitivity,
            pitch_limit,
            orientation: Orientation::default(),
        }
    }

    /// Current accumulated orientation
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Replace the accumulated orientation (e.g. when handing over from a
    /// scripted camera) and forget the last cursor position.
    pub fn reset(&mut self, orientation: Orientation) {
        self.orientation = orientation;
        self.last_cursor = None;
    }

    /// Feed a cursor position. Returns the new absolute orientation to apply
    /// with `Camera::set_orientation`, or `None` for the first event.
    pub fn cursor_moved(&mut self, x: f64, y: f64) -> Option<Orientation> {
        let (last_x, last_y) = self.last_cursor.replace((x, y))?;

        let x_offset = (x - last_x) as f32 * self.sensitivity;
        let y_offset = (last_y - y) as f32 * self.sensitivity;
        self.orientation.accumulate(x_offset, y_offset, self.pitch_limit);

        Some(self.orientation)
    }
}

#[cfg(test)]
#[path = "orientation_tests.rs"]
mod tests;
