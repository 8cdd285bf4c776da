//! Signed distance functions for sprite outlines
//!
//! Negative inside, positive outside. The bat and candy outlines are unions
//! of these primitives; they are rasterized into collision masks and read by
//! the renderer so both agree on what the sprites look like.

use glam::Vec2;

/// Signed distance to a circle
#[inline]
pub fn sd_circle(p: Vec2, center: Vec2, radius: f32) -> f32 {
    (p - center).length() - radius
}

/// Signed distance to an axis-aligned box given its center and half extents
pub fn sd_box(p: Vec2, center: Vec2, half: Vec2) -> f32 {
    let d = (p - center).abs() - half;
    d.max(Vec2::ZERO).length() + d.x.max(d.y).min(0.0)
}

/// Approximate signed distance to an axis-aligned ellipse.
///
/// The sign is exact; the magnitude is scaled by the smaller radius, which is
/// enough for inside/outside sampling.
pub fn sd_ellipse(p: Vec2, center: Vec2, radii: Vec2) -> f32 {
    let q = (p - center) / radii;
    (q.length() - 1.0) * radii.x.min(radii.y)
}

/// Signed distance to a triangle (any winding)
pub fn sd_triangle(p: Vec2, a: Vec2, b: Vec2, c: Vec2) -> f32 {
    let e0 = b - a;
    let e1 = c - b;
    let e2 = a - c;
    let v0 = p - a;
    let v1 = p - b;
    let v2 = p - c;

    let pq0 = v0 - e0 * (v0.dot(e0) / e0.dot(e0)).clamp(0.0, 1.0);
    let pq1 = v1 - e1 * (v1.dot(e1) / e1.dot(e1)).clamp(0.0, 1.0);
    let pq2 = v2 - e2 * (v2.dot(e2) / e2.dot(e2)).clamp(0.0, 1.0);

    let s = (e0.x * e2.y - e0.y * e2.x).signum();
    let d = Vec2::new(pq0.dot(pq0), s * (v0.x * e0.y - v0.y * e0.x))
        .min(Vec2::new(pq1.dot(pq1), s * (v1.x * e1.y - v1.y * e1.x)))
        .min(Vec2::new(pq2.dot(pq2), s * (v2.x * e2.y - v2.y * e2.x)));

    -d.x.sqrt() * d.y.signum()
}

/// Bat sprite outline in local sprite coordinates (origin at top-left)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatOutline {
    pub size: Vec2,
    pub body_center: Vec2,
    pub body_radii: Vec2,
    pub left_wing: [Vec2; 3],
    pub right_wing: [Vec2; 3],
    pub eyes: [Vec2; 2],
    pub eye_radius: f32,
}

impl BatOutline {
    pub fn new(w: f32, h: f32) -> Self {
        Self {
            size: Vec2::new(w, h),
            // Body spans 15%..85% horizontally and 20%..80% vertically
            body_center: Vec2::new(w * 0.5, h * 0.5),
            body_radii: Vec2::new(w * 0.35, h * 0.3),
            left_wing: [
                Vec2::new(0.0, h * 0.5),
                Vec2::new(w * 0.15, h * 0.2),
                Vec2::new(w * 0.15, h * 0.8),
            ],
            right_wing: [
                Vec2::new(w, h * 0.5),
                Vec2::new(w * 0.85, h * 0.2),
                Vec2::new(w * 0.85, h * 0.8),
            ],
            eyes: [
                Vec2::new(w * 0.45, h * 0.45),
                Vec2::new(w * 0.55, h * 0.45),
            ],
            eye_radius: 3.0,
        }
    }

    /// Distance to the opaque part of the sprite
    pub fn sdf(&self, p: Vec2) -> f32 {
        let [a, b, c] = self.left_wing;
        let [d, e, f] = self.right_wing;
        sd_ellipse(p, self.body_center, self.body_radii)
            .min(sd_triangle(p, a, b, c))
            .min(sd_triangle(p, d, e, f))
    }
}

/// Candy sprite outline in local sprite coordinates (origin at top-left)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandyOutline {
    pub size: f32,
    pub center: Vec2,
    pub radius: f32,
    /// Wrapper twists as (top-left, size)
    pub wrappers: [(Vec2, Vec2); 2],
    pub highlight_center: Vec2,
    pub highlight_radius: f32,
}

impl CandyOutline {
    pub fn new(size: f32) -> Self {
        let c = (size / 2.0).floor();
        let wing_w = (size * 0.3).floor();
        let wing_h = (size * 0.12).floor();
        let wing_y = c - (wing_h / 2.0).floor();
        Self {
            size,
            center: Vec2::splat(c),
            radius: (size * 0.36).floor(),
            wrappers: [
                (Vec2::new(0.0, wing_y), Vec2::new(wing_w, wing_h)),
                (Vec2::new(size - wing_w, wing_y), Vec2::new(wing_w, wing_h)),
            ],
            highlight_center: Vec2::splat(c - size * 0.12),
            highlight_radius: (size * 0.08).floor().max(1.0),
        }
    }

    /// Distance to the opaque part of the sprite
    pub fn sdf(&self, p: Vec2) -> f32 {
        let mut d = sd_circle(p, self.center, self.radius);
        for (top_left, size) in self.wrappers {
            let half = size / 2.0;
            d = d.min(sd_box(p, top_left + half, half));
        }
        d
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sd_circle() {
        let c = Vec2::new(10.0, 10.0);
        assert!(sd_circle(Vec2::new(10.0, 10.0), c, 5.0) < 0.0);
        assert!((sd_circle(Vec2::new(20.0, 10.0), c, 5.0) - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_sd_box() {
        let center = Vec2::new(0.0, 0.0);
        let half = Vec2::new(2.0, 1.0);
        assert!(sd_box(Vec2::ZERO, center, half) < 0.0);
        assert!((sd_box(Vec2::new(5.0, 0.0), center, half) - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_sd_triangle_sign_both_windings() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);
        let c = Vec2::new(0.0, 10.0);
        let inside = Vec2::new(2.0, 2.0);
        let outside = Vec2::new(9.0, 9.0);
        assert!(sd_triangle(inside, a, b, c) < 0.0);
        assert!(sd_triangle(inside, a, c, b) < 0.0);
        assert!(sd_triangle(outside, a, b, c) > 0.0);
        assert!(sd_triangle(outside, a, c, b) > 0.0);
    }

    #[test]
    fn test_bat_outline_covers_body_and_wings() {
        let bat = BatOutline::new(56.0, 40.0);
        assert!(bat.sdf(Vec2::new(28.0, 20.0)) < 0.0);
        // Left wing tip region
        assert!(bat.sdf(Vec2::new(3.0, 20.0)) < 0.0);
        // Corners are transparent
        assert!(bat.sdf(Vec2::new(1.0, 1.0)) > 0.0);
        assert!(bat.sdf(Vec2::new(55.0, 39.0)) > 0.0);
    }

    #[test]
    fn test_candy_outline() {
        let candy = CandyOutline::new(20.0);
        assert_eq!(candy.radius, 7.0);
        assert!(candy.sdf(Vec2::new(10.0, 10.0)) < 0.0);
        // Wrapper twist at the left edge
        assert!(candy.sdf(Vec2::new(1.0, 10.0)) < 0.0);
        // Corner is transparent
        assert!(candy.sdf(Vec2::new(1.0, 1.0)) > 0.0);
    }
}
