//! Segment-glyph text rendering.
//!
//! Characters are drawn as stroked line segments in a seven-segment-like
//! style, so titles and legend labels need no bundled font file. Glyphs
//! cover digits, ASCII letters, and the punctuation used by value labels;
//! anything else renders as blank space.

use crate::colormap::Color;
use tiny_skia::{LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform};

type Seg = ((f32, f32), (f32, f32));

/// Width of one glyph cell relative to the font size.
const GLYPH_WIDTH_FACTOR: f32 = 0.6;
/// Gap between glyph cells relative to the font size.
const GLYPH_SPACING_FACTOR: f32 = 0.25;

/// Pixel width of a rendered string.
pub fn text_width(text: &str, font_size: f32) -> f32 {
    if text.is_empty() {
        return 0.0;
    }
    let char_width = font_size * GLYPH_WIDTH_FACTOR;
    let spacing = font_size * GLYPH_SPACING_FACTOR;
    text.chars().count() as f32 * (char_width + spacing) - spacing
}

/// Draw a string centered at (x, y), rotated by `angle` radians.
///
/// An angle of 0 reads left to right; -PI/2 reads bottom to top, which is
/// how the colorbar label is drawn.
pub fn draw_text(pixmap: &mut Pixmap, x: f32, y: f32, angle: f32, text: &str, font_size: f32, color: Color) {
    let char_width = font_size * GLYPH_WIDTH_FACTOR;
    let char_height = font_size;
    let spacing = font_size * GLYPH_SPACING_FACTOR;
    let total_width = text_width(text, font_size);

    let cos_a = angle.cos();
    let sin_a = angle.sin();

    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint.anti_alias = true;

    let stroke = Stroke {
        width: font_size * 0.11,
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        ..Stroke::default()
    };

    let start_x = -total_width / 2.0;

    for (i, ch) in text.chars().enumerate() {
        let char_x = start_x + i as f32 * (char_width + spacing) + char_width / 2.0;

        // Rotate the glyph center around the anchor
        let cx = char_x * cos_a + x;
        let cy = char_x * sin_a + y;

        draw_glyph(
            pixmap,
            cx,
            cy,
            angle,
            ch,
            char_width,
            char_height,
            &paint,
            &stroke,
        );
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_glyph(
    pixmap: &mut Pixmap,
    x: f32,
    y: f32,
    angle: f32,
    ch: char,
    width: f32,
    height: f32,
    paint: &Paint,
    stroke: &Stroke,
) {
    let cos_a = angle.cos();
    let sin_a = angle.sin();
    let rotate =
        |px: f32, py: f32| -> (f32, f32) { (px * cos_a - py * sin_a + x, px * sin_a + py * cos_a + y) };

    for ((x1, y1), (x2, y2)) in glyph_segments(ch, width / 2.0, height / 2.0) {
        let (rx1, ry1) = rotate(x1, y1);
        let (rx2, ry2) = rotate(x2, y2);

        let mut pb = PathBuilder::new();
        pb.move_to(rx1, ry1);
        pb.line_to(rx2, ry2);

        if let Some(path) = pb.finish() {
            pixmap.stroke_path(&path, paint, stroke, Transform::identity(), None);
        }
    }
}

/// Segment list for one character, in glyph-local coordinates: x spans
/// [-hw, hw], y spans [-hh (top), hh (bottom)].
fn glyph_segments(ch: char, hw: f32, hh: f32) -> Vec<Seg> {
    let ch = ch.to_ascii_uppercase();
    match ch {
        '0' | 'O' => vec![
            ((-hw, -hh), (hw, -hh)),
            ((hw, -hh), (hw, hh)),
            ((hw, hh), (-hw, hh)),
            ((-hw, hh), (-hw, -hh)),
        ],
        '1' => vec![((0.0, -hh), (0.0, hh))],
        '2' => vec![
            ((-hw, -hh), (hw, -hh)),
            ((hw, -hh), (hw, 0.0)),
            ((hw, 0.0), (-hw, 0.0)),
            ((-hw, 0.0), (-hw, hh)),
            ((-hw, hh), (hw, hh)),
        ],
        '3' => vec![
            ((-hw, -hh), (hw, -hh)),
            ((hw, -hh), (hw, hh)),
            ((hw, hh), (-hw, hh)),
            ((-hw, 0.0), (hw, 0.0)),
        ],
        '4' => vec![
            ((-hw, -hh), (-hw, 0.0)),
            ((-hw, 0.0), (hw, 0.0)),
            ((hw, -hh), (hw, hh)),
        ],
        '5' | 'S' => vec![
            ((hw, -hh), (-hw, -hh)),
            ((-hw, -hh), (-hw, 0.0)),
            ((-hw, 0.0), (hw, 0.0)),
            ((hw, 0.0), (hw, hh)),
            ((hw, hh), (-hw, hh)),
        ],
        '6' => vec![
            ((hw, -hh), (-hw, -hh)),
            ((-hw, -hh), (-hw, hh)),
            ((-hw, hh), (hw, hh)),
            ((hw, hh), (hw, 0.0)),
            ((hw, 0.0), (-hw, 0.0)),
        ],
        '7' => vec![((-hw, -hh), (hw, -hh)), ((hw, -hh), (0.0, hh))],
        '8' => vec![
            ((-hw, -hh), (hw, -hh)),
            ((hw, -hh), (hw, hh)),
            ((hw, hh), (-hw, hh)),
            ((-hw, hh), (-hw, -hh)),
            ((-hw, 0.0), (hw, 0.0)),
        ],
        '9' => vec![
            ((-hw, 0.0), (hw, 0.0)),
            ((hw, 0.0), (hw, -hh)),
            ((hw, -hh), (-hw, -hh)),
            ((-hw, -hh), (-hw, 0.0)),
            ((hw, 0.0), (hw, hh)),
        ],
        'A' => vec![
            ((-hw, hh), (-hw, -hh)),
            ((-hw, -hh), (hw, -hh)),
            ((hw, -hh), (hw, hh)),
            ((-hw, 0.0), (hw, 0.0)),
        ],
        'B' => vec![
            ((-hw, -hh), (hw * 0.7, -hh)),
            ((hw * 0.7, -hh), (hw, -hh * 0.5)),
            ((hw, -hh * 0.5), (hw * 0.7, 0.0)),
            ((hw * 0.7, 0.0), (hw, hh * 0.5)),
            ((hw, hh * 0.5), (hw * 0.7, hh)),
            ((hw * 0.7, hh), (-hw, hh)),
            ((-hw, hh), (-hw, -hh)),
            ((-hw, 0.0), (hw * 0.7, 0.0)),
        ],
        'C' => vec![
            ((hw, -hh), (-hw, -hh)),
            ((-hw, -hh), (-hw, hh)),
            ((-hw, hh), (hw, hh)),
        ],
        'D' => vec![
            ((-hw, -hh), (hw * 0.6, -hh)),
            ((hw * 0.6, -hh), (hw, 0.0)),
            ((hw, 0.0), (hw * 0.6, hh)),
            ((hw * 0.6, hh), (-hw, hh)),
            ((-hw, hh), (-hw, -hh)),
        ],
        'E' => vec![
            ((hw, -hh), (-hw, -hh)),
            ((-hw, -hh), (-hw, hh)),
            ((-hw, hh), (hw, hh)),
            ((-hw, 0.0), (hw * 0.6, 0.0)),
        ],
        'F' => vec![
            ((hw, -hh), (-hw, -hh)),
            ((-hw, -hh), (-hw, hh)),
            ((-hw, 0.0), (hw * 0.6, 0.0)),
        ],
        'G' => vec![
            ((hw, -hh), (-hw, -hh)),
            ((-hw, -hh), (-hw, hh)),
            ((-hw, hh), (hw, hh)),
            ((hw, hh), (hw, 0.0)),
            ((hw, 0.0), (0.0, 0.0)),
        ],
        'H' => vec![
            ((-hw, -hh), (-hw, hh)),
            ((hw, -hh), (hw, hh)),
            ((-hw, 0.0), (hw, 0.0)),
        ],
        'I' => vec![((0.0, -hh), (0.0, hh))],
        'J' => vec![
            ((hw, -hh), (hw, hh)),
            ((hw, hh), (-hw, hh)),
            ((-hw, hh), (-hw, hh * 0.4)),
        ],
        'K' => vec![
            ((-hw, -hh), (-hw, hh)),
            ((-hw, 0.0), (hw, -hh)),
            ((-hw, 0.0), (hw, hh)),
        ],
        'L' => vec![((-hw, -hh), (-hw, hh)), ((-hw, hh), (hw, hh))],
        'M' => vec![
            ((-hw, hh), (-hw, -hh)),
            ((-hw, -hh), (0.0, 0.0)),
            ((0.0, 0.0), (hw, -hh)),
            ((hw, -hh), (hw, hh)),
        ],
        'N' => vec![
            ((-hw, hh), (-hw, -hh)),
            ((-hw, -hh), (hw, hh)),
            ((hw, hh), (hw, -hh)),
        ],
        'P' => vec![
            ((-hw, hh), (-hw, -hh)),
            ((-hw, -hh), (hw, -hh)),
            ((hw, -hh), (hw, 0.0)),
            ((hw, 0.0), (-hw, 0.0)),
        ],
        'Q' => vec![
            ((-hw, -hh), (hw, -hh)),
            ((hw, -hh), (hw, hh)),
            ((hw, hh), (-hw, hh)),
            ((-hw, hh), (-hw, -hh)),
            ((hw * 0.3, hh * 0.3), (hw, hh)),
        ],
        'R' => vec![
            ((-hw, hh), (-hw, -hh)),
            ((-hw, -hh), (hw, -hh)),
            ((hw, -hh), (hw, 0.0)),
            ((hw, 0.0), (-hw, 0.0)),
            ((0.0, 0.0), (hw, hh)),
        ],
        'T' => vec![((-hw, -hh), (hw, -hh)), ((0.0, -hh), (0.0, hh))],
        'U' => vec![
            ((-hw, -hh), (-hw, hh)),
            ((-hw, hh), (hw, hh)),
            ((hw, hh), (hw, -hh)),
        ],
        'V' => vec![((-hw, -hh), (0.0, hh)), ((0.0, hh), (hw, -hh))],
        'W' => vec![
            ((-hw, -hh), (-hw, hh)),
            ((-hw, hh), (0.0, 0.0)),
            ((0.0, 0.0), (hw, hh)),
            ((hw, hh), (hw, -hh)),
        ],
        'X' => vec![((-hw, -hh), (hw, hh)), ((hw, -hh), (-hw, hh))],
        'Y' => vec![
            ((-hw, -hh), (0.0, 0.0)),
            ((hw, -hh), (0.0, 0.0)),
            ((0.0, 0.0), (0.0, hh)),
        ],
        'Z' => vec![
            ((-hw, -hh), (hw, -hh)),
            ((hw, -hh), (-hw, hh)),
            ((-hw, hh), (hw, hh)),
        ],
        '-' => vec![((-hw, 0.0), (hw, 0.0))],
        '+' => vec![((-hw, 0.0), (hw, 0.0)), ((0.0, -hh * 0.6), (0.0, hh * 0.6))],
        '.' => vec![((0.0, hh * 0.7), (0.0, hh * 0.8))],
        ',' => vec![((0.0, hh * 0.6), (-hw * 0.3, hh))],
        '/' => vec![((hw, -hh), (-hw, hh))],
        '(' => vec![
            ((hw * 0.4, -hh), (-hw * 0.4, -hh * 0.5)),
            ((-hw * 0.4, -hh * 0.5), (-hw * 0.4, hh * 0.5)),
            ((-hw * 0.4, hh * 0.5), (hw * 0.4, hh)),
        ],
        ')' => vec![
            ((-hw * 0.4, -hh), (hw * 0.4, -hh * 0.5)),
            ((hw * 0.4, -hh * 0.5), (hw * 0.4, hh * 0.5)),
            ((hw * 0.4, hh * 0.5), (-hw * 0.4, hh)),
        ],
        // Space and anything unmapped render as blank
        _ => vec![],
    }
}
