/// Camera - free-fly camera owning position and orientation.
///
/// The camera keeps a right-handed orthonormal basis (front, right, up).
/// `front` is always derived: from the target at construction and on
/// `set_position`, from absolute yaw/pitch angles on `rotate`. The camera
/// up axis is re-derived from the fixed world up reference on every update
/// so the basis cannot drift over long sessions.

use glam::{Mat4, Vec3};
use crate::error::{Error, Result};
use super::orientation::Orientation;

/// Squared length below which a cross product counts as parallel vectors
const PARALLEL_EPSILON: f32 = 1e-10;

/// Translation direction for `Camera::move_along`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Forward,
    Backward,
    Left,
    Right,
}

/// Free-fly camera.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    target: Vec3,
    world_up: Vec3,
    front: Vec3,
    right: Vec3,
    up: Vec3,
}

/// (right, up) completing `front` against the `world_up` reference,
/// or `None` when front is parallel to world up.
fn complete_basis(front: Vec3, world_up: Vec3) -> Option<(Vec3, Vec3)> {
    let right = front.cross(world_up);
    if right.length_squared() < PARALLEL_EPSILON {
        return None;
    }
    let right = right.normalize();
    Some((right, right.cross(front)))
}

/// Full basis for a camera at `position` looking at `target`
fn basis_facing(position: Vec3, target: Vec3, world_up: Vec3) -> Result<(Vec3, Vec3, Vec3)> {
    let front = (target - position)
        .try_normalize()
        .ok_or(Error::DegenerateCameraBasis)?;
    let (right, up) = complete_basis(front, world_up).ok_or(Error::DegenerateCameraBasis)?;
    Ok((front, right, up))
}

impl Camera {
    /// Create a camera at `position` looking at `target`.
    ///
    /// # Errors
    ///
    /// `DegenerateCameraBasis` if `target == position`, `up` is zero, or the
    /// look direction is parallel to `up`.
    pub fn new(position: Vec3, target: Vec3, up: Vec3) -> Result<Self> {
        let world_up = up.try_normalize().ok_or(Error::DegenerateCameraBasis)?;
        let (front, right, up) = basis_facing(position, target, world_up)?;

        Ok(Self {
            position,
            target,
            world_up,
            front,
            right,
            up,
        })
    }

    // ===== GETTERS =====

    /// View matrix: look-at from `position` toward `position + front`.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// World-space position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Point the camera was aimed at on construction.
    ///
    /// Stale once `rotate` has been called.
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Unit look direction.
    pub fn front(&self) -> Vec3 {
        self.front
    }

    /// Unit right direction, `front x up`.
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Unit camera up, orthogonal to front and right.
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Fixed up reference given at construction (normalized).
    pub fn world_up(&self) -> Vec3 {
        self.world_up
    }

    // ===== MUTATION =====

    /// Translate by `speed` along front (Forward/Backward) or right (Right/Left).
    ///
    /// `speed` is a distance per call, not scaled by frame time.
    pub fn move_along(&mut self, direction: MoveDirection, speed: f32) {
        let offset = match direction {
            MoveDirection::Forward => self.front * speed,
            MoveDirection::Backward => -self.front * speed,
            MoveDirection::Right => self.right * speed,
            MoveDirection::Left => -self.right * speed,
        };
        self.position += offset;
    }

    /// Rebuild the look direction from absolute angles in degrees.
    ///
    /// Not incremental: callers pass accumulated yaw/pitch. Pitch is not
    /// clamped here. At ±90° the front is vertical and the previous right
    /// axis is kept, re-orthogonalized against the new front.
    pub fn rotate(&mut self, pitch: f32, yaw: f32) {
        let (pitch, yaw) = (pitch.to_radians(), yaw.to_radians());
        let direction = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        );
        self.front = direction.normalize();

        match complete_basis(self.front, self.world_up) {
            Some((right, up)) => {
                self.right = right;
                self.up = up;
            }
            None => {
                crate::engine_debug!("suburbs3d::Camera",
                    "Look direction parallel to up reference, keeping previous right axis");
                let right = (self.right - self.front * self.right.dot(self.front)).normalize();
                self.right = right;
                self.up = right.cross(self.front);
            }
        }
    }

    /// Apply accumulated mouse-look angles. Call once per input event.
    pub fn set_orientation(&mut self, orientation: &Orientation) {
        self.rotate(orientation.pitch, orientation.yaw);
    }

    /// Move to `position` and re-aim at the construction target.
    ///
    /// Used by scripted camera movement before any rotation.
    ///
    /// # Errors
    ///
    /// `DegenerateCameraBasis` if `position` coincides with the target or the
    /// new look direction is vertical. The camera is left unchanged.
    pub fn set_position(&mut self, position: Vec3) -> Result<()> {
        let (front, right, up) = basis_facing(position, self.target, self.world_up)?;
        self.position = position;
        self.front = front;
        self.right = right;
        self.up = up;
        Ok(())
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
