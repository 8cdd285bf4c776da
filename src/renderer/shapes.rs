//! Scene building for 2D primitives
//!
//! Turns the game state into a flat list of rectangles, circles, triangles
//! and text. No drawing happens here, so the scene can be inspected in tests
//! without a window.

use glam::Vec2;
use std::f32::consts::TAU;

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::sim::{Bat, Candy, GamePhase, GameState, Obstacle, Rect};

/// 8-bit RGBA color
pub type Rgba = [u8; 4];

pub mod palette {
    use super::Rgba;

    pub const BACKGROUND: Rgba = [15, 24, 40, 255];
    pub const BAT: Rgba = [40, 200, 200, 255];
    pub const EYES: Rgba = [16, 16, 16, 255];
    pub const CANDY: Rgba = [255, 120, 120, 255];
    pub const CANDY_HIGHLIGHT: Rgba = [255, 200, 200, 255];
    pub const OBSTACLE: Rgba = [80, 170, 90, 255];
    pub const TEXT: Rgba = [230, 230, 230, 255];
}

/// Text sizes
pub const FONT_SIZE: f32 = 36.0;
pub const BIG_FONT_SIZE: f32 = 64.0;

/// Height of one background band
const BAND_HEIGHT: f32 = 24.0;
/// Triangles per ellipse
const ELLIPSE_SEGMENTS: usize = 24;

/// Horizontal anchoring of a text primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// `pos.x` is the left edge
    Left,
    /// `pos.x` is the center
    Center,
    /// `pos.x` is the right edge
    Right,
}

/// A single draw command
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Rect {
        rect: Rect,
        color: Rgba,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    Triangle {
        points: [Vec2; 3],
        color: Rgba,
    },
    /// `pos.y` is the top of the text
    Text {
        text: String,
        pos: Vec2,
        size: f32,
        align: Align,
        color: Rgba,
    },
}

/// Rotate `offset` counter-clockwise on screen (y grows downward)
pub fn rotate_screen(offset: Vec2, angle_deg: f32) -> Vec2 {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    Vec2::new(
        offset.x * cos + offset.y * sin,
        -offset.x * sin + offset.y * cos,
    )
}

/// Triangle fan approximating an ellipse rotated by `angle_deg` around its center
pub fn ellipse_fan(center: Vec2, radii: Vec2, angle_deg: f32, segments: usize) -> Vec<[Vec2; 3]> {
    let segments = segments.max(3);
    let point = |i: usize| {
        let t = i as f32 / segments as f32 * TAU;
        center + rotate_screen(Vec2::new(t.cos() * radii.x, t.sin() * radii.y), angle_deg)
    };
    (0..segments)
        .map(|i| [center, point(i), point(i + 1)])
        .collect()
}

/// Build every primitive for one frame, back to front
pub fn build_scene(state: &GameState, show_pause_hint: bool) -> Vec<Primitive> {
    let mut out = Vec::new();
    background(&mut out);
    for obs in &state.obstacles {
        obstacle(&mut out, obs);
    }
    for c in &state.candies {
        candy(&mut out, c);
    }
    bat(&mut out, &state.bat);
    hud(&mut out, state, show_pause_hint);
    overlays(&mut out, state);
    out
}

fn background(out: &mut Vec<Primitive>) {
    out.push(Primitive::Rect {
        rect: Rect::new(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT),
        color: palette::BACKGROUND,
    });
    // Bands fade from a lighter top to the base color
    let mut y = 0.0;
    while y < SCREEN_HEIGHT {
        let shade = (40.0 - (y / 20.0).floor()).clamp(0.0, 40.0) as u8;
        out.push(Primitive::Rect {
            rect: Rect::new(0.0, y, SCREEN_WIDTH, BAND_HEIGHT),
            color: [12 + shade, 20 + shade, 36 + shade, 255],
        });
        y += BAND_HEIGHT;
    }
}

fn obstacle(out: &mut Vec<Primitive>, obs: &Obstacle) {
    for rect in [obs.top_rect(), obs.bottom_rect(SCREEN_HEIGHT)] {
        if !rect.is_empty() {
            out.push(Primitive::Rect {
                rect,
                color: palette::OBSTACLE,
            });
        }
    }
}

fn candy(out: &mut Vec<Primitive>, candy: &Candy) {
    let outline = candy.outline();
    let origin = candy.rect();
    let origin = Vec2::new(origin.x, origin.y);

    out.push(Primitive::Circle {
        center: origin + outline.center,
        radius: outline.radius,
        color: palette::CANDY,
    });
    for (top_left, size) in outline.wrappers {
        let p = origin + top_left;
        out.push(Primitive::Rect {
            rect: Rect::new(p.x, p.y, size.x, size.y),
            color: palette::CANDY,
        });
    }
    out.push(Primitive::Circle {
        center: origin + outline.highlight_center,
        radius: outline.highlight_radius,
        color: palette::CANDY_HIGHLIGHT,
    });
}

fn bat(out: &mut Vec<Primitive>, bat: &Bat) {
    let outline = Bat::outline();
    let half = outline.size / 2.0;
    let to_screen = |local: Vec2| bat.pos + rotate_screen(local - half, bat.angle);

    for points in ellipse_fan(
        to_screen(outline.body_center),
        outline.body_radii,
        bat.angle,
        ELLIPSE_SEGMENTS,
    ) {
        out.push(Primitive::Triangle {
            points,
            color: palette::BAT,
        });
    }
    for wing in [outline.left_wing, outline.right_wing] {
        out.push(Primitive::Triangle {
            points: wing.map(to_screen),
            color: palette::BAT,
        });
    }
    for eye in outline.eyes {
        out.push(Primitive::Circle {
            center: to_screen(eye),
            radius: outline.eye_radius,
            color: palette::EYES,
        });
    }
}

fn text(out: &mut Vec<Primitive>, text: String, pos: Vec2, size: f32, align: Align) {
    out.push(Primitive::Text {
        text,
        pos,
        size,
        align,
        color: palette::TEXT,
    });
}

fn hud(out: &mut Vec<Primitive>, state: &GameState, show_pause_hint: bool) {
    text(
        out,
        format!("Score: {}", state.score),
        Vec2::new(12.0, 12.0),
        FONT_SIZE,
        Align::Left,
    );
    text(
        out,
        format!("Best: {}", state.high_score),
        Vec2::new(12.0, 44.0),
        FONT_SIZE,
        Align::Left,
    );
    if show_pause_hint && state.phase == GamePhase::Playing {
        text(
            out,
            "P to Pause".to_string(),
            Vec2::new(SCREEN_WIDTH - 12.0, 12.0),
            FONT_SIZE,
            Align::Right,
        );
    }
}

fn overlays(out: &mut Vec<Primitive>, state: &GameState) {
    let cx = SCREEN_WIDTH / 2.0;
    let cy = SCREEN_HEIGHT / 2.0;
    match state.phase {
        GamePhase::Idle => {
            text(
                out,
                "Bat & Candy".to_string(),
                Vec2::new(cx, cy - 120.0),
                BIG_FONT_SIZE,
                Align::Center,
            );
            text(
                out,
                "Press SPACE or click to flap - collect candies!".to_string(),
                Vec2::new(cx, cy - 60.0),
                FONT_SIZE,
                Align::Center,
            );
        }
        GamePhase::Paused => {
            text(
                out,
                "Paused".to_string(),
                Vec2::new(cx, cy - 90.0),
                BIG_FONT_SIZE,
                Align::Center,
            );
            text(
                out,
                "Press P to resume".to_string(),
                Vec2::new(cx, cy - 20.0),
                FONT_SIZE,
                Align::Center,
            );
        }
        GamePhase::GameOver => {
            text(
                out,
                "Game Over".to_string(),
                Vec2::new(cx, cy - 90.0),
                BIG_FONT_SIZE,
                Align::Center,
            );
            text(
                out,
                format!("Final Score: {}", state.score),
                Vec2::new(cx, cy - 20.0),
                FONT_SIZE,
                Align::Center,
            );
            text(
                out,
                "Press R to play again".to_string(),
                Vec2::new(cx, cy + 30.0),
                FONT_SIZE,
                Align::Center,
            );
        }
        GamePhase::Playing => {}
    }
}
