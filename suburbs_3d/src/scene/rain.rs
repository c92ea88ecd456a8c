/// Rain - a falling layer of drops instanced over a square grid

use glam::{Mat4, Vec3};

/// Grid and motion parameters of the rain layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RainDesc {
    /// Height the layer restarts from
    pub start_height: f32,
    /// Height below which the layer restarts
    pub ground_level: f32,
    /// Units per second
    pub fall_speed: f32,
    pub rows: u32,
    pub cols: u32,
    /// Distance between grid cells on X and Z
    pub spacing: f32,
    /// X and Z of the first cell
    pub origin: f32,
    pub drops_per_cell: u32,
}

impl Default for RainDesc {
    fn default() -> Self {
        Self {
            start_height: -50.0,
            ground_level: -80.0,
            fall_speed: 75.0,
            rows: 20,
            cols: 20,
            spacing: 12.5,
            origin: -190.0,
            drops_per_cell: 15,
        }
    }
}

/// Animated rain layer.
///
/// Time only advances while the effect is updated; `pause()` makes the
/// next update start from a zero delta.
#[derive(Debug, Clone)]
pub struct RainEffect {
    desc: RainDesc,
    height: f32,
    last_time: Option<f32>,
}

impl RainEffect {
    pub fn new(desc: RainDesc) -> Self {
        Self {
            desc,
            height: desc.start_height,
            last_time: None,
        }
    }

    pub fn desc(&self) -> &RainDesc {
        &self.desc
    }

    /// Current height of the layer
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Advance the layer to time `now` (seconds)
    pub fn update(&mut self, now: f32) {
        let dt = self.last_time.map_or(0.0, |last| (now - last).max(0.0));
        self.last_time = Some(now);

        self.height -= self.desc.fall_speed * dt;
        if self.height < self.desc.ground_level {
            self.height = self.desc.start_height;
        }
    }

    /// Forget the last update time
    pub fn pause(&mut self) {
        self.last_time = None;
    }

    /// Offset of drop `k` inside its cell. Even drops go to +X/+Z,
    /// odd drops mirror them; each drop sits 5 units above the previous.
    pub fn drop_offset(k: u32) -> Vec3 {
        let step = (k / 2) as f32;
        let sign = if k % 2 == 0 { 1.0 } else { -1.0 };
        Vec3::new(sign * step * 7.5, k as f32 * 5.0, sign * step * 2.5)
    }

    /// Model matrix of every drop at the current height
    pub fn drop_matrices(&self) -> Vec<Mat4> {
        let d = &self.desc;
        let mut drops = Vec::with_capacity((d.rows * d.cols * d.drops_per_cell) as usize);

        for i in 0..d.rows {
            for j in 0..d.cols {
                let cell = Vec3::new(
                    d.origin + i as f32 * d.spacing,
                    self.height,
                    d.origin + j as f32 * d.spacing,
                );
                for k in 0..d.drops_per_cell {
                    drops.push(Mat4::from_translation(cell + Self::drop_offset(k)));
                }
            }
        }

        drops
    }
}

impl Default for RainEffect {
    fn default() -> Self {
        Self::new(RainDesc::default())
    }
}

#[cfg(test)]
#[path = "rain_tests.rs"]
mod tests;
