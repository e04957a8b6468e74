//! Rasterizes a display list onto an RGBA canvas.

use super::layout::{Anchor, DrawCommand};
use ab_glyph::{Font, PxScale};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_line_segment_mut, draw_text_mut, text_size};

pub fn rasterize<F: Font>(commands: &[DrawCommand], width: u32, height: u32, font: &F) -> RgbaImage {
    let mut canvas = RgbaImage::new(width, height);

    for command in commands {
        match command {
            DrawCommand::Fill { color } => {
                for pixel in canvas.pixels_mut() {
                    *pixel = Rgba(*color);
                }
            }
            DrawCommand::Line { from, to, color } => {
                draw_line_segment_mut(&mut canvas, *from, *to, Rgba(*color));
            }
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => {
                let center = (center.0.round() as i32, center.1.round() as i32);
                draw_filled_circle_mut(&mut canvas, center, radius.round() as i32, Rgba(*color));
            }
            DrawCommand::Text {
                text,
                position,
                size,
                anchor,
                color,
            } => {
                let scale = PxScale::from(*size);
                let (w, h) = text_size(scale, font, text);
                let x = match anchor {
                    Anchor::Left => position.0,
                    Anchor::Center => position.0 - w as f32 / 2.0,
                };
                let y = position.1 - h as f32 / 2.0;
                draw_text_mut(
                    &mut canvas,
                    Rgba(*color),
                    x.round() as i32,
                    y.round() as i32,
                    scale,
                    font,
                    text,
                );
            }
        }
    }

    canvas
}
