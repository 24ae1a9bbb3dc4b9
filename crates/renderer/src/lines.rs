//! Anti-aliased polyline strokes for borders and coastlines.

use crate::colormap::Color;
use tiny_skia::{LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform};

/// A polyline in pixel coordinates.
#[derive(Debug, Clone)]
pub struct PixelPath {
    pub points: Vec<(f32, f32)>,
    pub closed: bool,
}

/// Stroke style for one boundary layer.
#[derive(Debug, Clone, Copy)]
pub struct LineStyle {
    pub color: Color,
    pub width: f32,
}

impl LineStyle {
    pub fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

/// Stroke a set of paths onto the pixmap.
///
/// Paths extending past the pixmap bounds are clipped by the pixmap edge,
/// which is what keeps basemap lines inside the map axes.
pub fn stroke_paths(pixmap: &mut Pixmap, paths: &[PixelPath], style: &LineStyle) {
    let mut paint = Paint::default();
    paint.set_color_rgba8(style.color.r, style.color.g, style.color.b, style.color.a);
    paint.anti_alias = true;

    let stroke = Stroke {
        width: style.width,
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        ..Stroke::default()
    };

    for path in paths {
        if path.points.len() < 2 {
            continue;
        }

        let mut pb = PathBuilder::new();
        pb.move_to(path.points[0].0, path.points[0].1);
        for &(x, y) in &path.points[1..] {
            pb.line_to(x, y);
        }
        if path.closed {
            pb.close();
        }

        if let Some(path) = pb.finish() {
            pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        }
    }
}

/// Stroke a thin frame along the pixmap edge.
pub fn stroke_frame(pixmap: &mut Pixmap, style: &LineStyle) {
    let w = pixmap.width() as f32;
    let h = pixmap.height() as f32;
    let inset = style.width / 2.0;

    let frame = PixelPath {
        points: vec![
            (inset, inset),
            (w - inset, inset),
            (w - inset, h - inset),
            (inset, h - inset),
        ],
        closed: true,
    };
    stroke_paths(pixmap, &[frame], style);
}
