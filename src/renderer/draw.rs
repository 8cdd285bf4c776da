//! macroquad backend for scene primitives

use macroquad::color::Color;
use macroquad::math::vec2;
use macroquad::shapes::{draw_circle, draw_rectangle, draw_triangle};
use macroquad::text::{draw_text, measure_text};
use macroquad::window::clear_background;

use super::shapes::{Align, Primitive, Rgba, build_scene, palette};
use crate::settings::Settings;
use crate::sim::GameState;

fn color(c: Rgba) -> Color {
    Color::from_rgba(c[0], c[1], c[2], c[3])
}

/// Draw a prepared scene into the current frame
pub fn draw_scene(scene: &[Primitive]) {
    clear_background(color(palette::BACKGROUND));
    for primitive in scene {
        match primitive {
            Primitive::Rect { rect, color: c } => {
                draw_rectangle(rect.x, rect.y, rect.w, rect.h, color(*c));
            }
            Primitive::Circle {
                center,
                radius,
                color: c,
            } => draw_circle(center.x, center.y, *radius, color(*c)),
            Primitive::Triangle { points, color: c } => {
                let [a, b, t] = points.map(|p| vec2(p.x, p.y));
                draw_triangle(a, b, t, color(*c));
            }
            Primitive::Text {
                text,
                pos,
                size,
                align,
                color: c,
            } => {
                let font_size = size.round() as u16;
                let dims = measure_text(text, None, font_size, 1.0);
                let x = match align {
                    Align::Left => pos.x,
                    Align::Center => pos.x - dims.width / 2.0,
                    Align::Right => pos.x - dims.width,
                };
                // draw_text takes the baseline
                draw_text(text, x, pos.y + dims.offset_y, *size, color(*c));
            }
        }
    }
}

/// Build and draw the scene for `state`
pub fn draw_frame(state: &GameState, settings: &Settings) {
    draw_scene(&build_scene(state, settings.show_pause_hint));
}
