//! Opaque-pixel collision masks
//!
//! A mask is a bitmap with one flag per sprite pixel. Two masks collide when
//! any opaque pixel of one lands on an opaque pixel of the other.

use glam::Vec2;

use super::sdf::{BatOutline, CandyOutline};

/// Per-pixel opacity bitmap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    width: usize,
    height: usize,
    bits: Vec<bool>,
}

impl Mask {
    /// Build a mask by sampling `opaque` at every pixel center
    pub fn from_fn<F>(width: usize, height: usize, opaque: F) -> Self
    where
        F: Fn(Vec2) -> bool,
    {
        let mut bits = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                bits.push(opaque(Vec2::new(x as f32 + 0.5, y as f32 + 0.5)));
            }
        }
        Self {
            width,
            height,
            bits,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the pixel at (x, y) is opaque; out of range is transparent
    pub fn get(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return false;
        }
        self.bits[y as usize * self.width + x as usize]
    }

    /// First overlapping pixel (in this mask's coordinates) when `other` is
    /// placed with its top-left corner at `offset` relative to this mask
    pub fn overlap(&self, other: &Mask, offset: (i32, i32)) -> Option<(i32, i32)> {
        let (dx, dy) = offset;
        let x0 = dx.max(0);
        let y0 = dy.max(0);
        let x1 = (self.width() as i32).min(dx + other.width() as i32);
        let y1 = (self.height() as i32).min(dy + other.height() as i32);

        for y in y0..y1 {
            for x in x0..x1 {
                if self.get(x, y) && other.get(x - dx, y - dy) {
                    return Some((x, y));
                }
            }
        }
        None
    }
}

/// Pixel size of a `w` x `h` sprite after rotating it by `angle_deg`
pub fn rotated_size(w: f32, h: f32, angle_deg: f32) -> (usize, usize) {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    // Shave float noise so 0° and 90° land on exact pixel sizes
    let rw = (w * cos.abs() + h * sin.abs() - 1e-3).ceil().max(1.0);
    let rh = (w * sin.abs() + h * cos.abs() - 1e-3).ceil().max(1.0);
    (rw as usize, rh as usize)
}

/// Mask of the bat sprite rotated counter-clockwise (on screen) by `angle_deg`.
///
/// The rotated image grows to the bounding box of the rotated sprite and
/// stays centered on the same point.
pub fn bat_mask(outline: &BatOutline, angle_deg: f32) -> Mask {
    let (w, h) = rotated_size(outline.size.x, outline.size.y, angle_deg);
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    let dest_center = Vec2::new(w as f32 / 2.0, h as f32 / 2.0);
    let src_center = outline.size / 2.0;

    Mask::from_fn(w, h, |p| {
        // Undo the on-screen rotation (y grows downward)
        let d = p - dest_center;
        let s = Vec2::new(d.x * cos - d.y * sin, d.x * sin + d.y * cos);
        outline.sdf(s + src_center) <= 0.0
    })
}

/// Mask of a candy sprite
pub fn candy_mask(outline: &CandyOutline) -> Mask {
    let size = outline.size.ceil().max(1.0) as usize;
    Mask::from_fn(size, size, |p| outline.sdf(p) <= 0.0)
}
