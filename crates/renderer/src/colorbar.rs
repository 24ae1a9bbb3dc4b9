//! Colorbar legend rendering.
//!
//! A vertical bar showing the active ramp from `vmin` at the bottom to
//! `vmax` at the top, with an arrowhead above the bar marking that values
//! extend beyond the visible maximum, tick labels on the right, and a
//! vertical axis label.

use crate::colormap::{Color, ColorScale};
use crate::glyphs;
use crate::lines::{stroke_paths, LineStyle, PixelPath};
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Transform};

/// Placement and annotation of the colorbar within a figure.
#[derive(Debug, Clone)]
pub struct ColorbarConfig {
    /// Left edge of the bar, pixels
    pub x: f32,
    /// Top edge of the bar, pixels
    pub y: f32,
    /// Bar width, pixels
    pub width: f32,
    /// Bar height, pixels
    pub height: f32,
    /// Number of tick labels from vmin to vmax
    pub ticks: usize,
    /// Axis label drawn vertically beside the ticks
    pub label: String,
    /// Font size for tick labels; the axis label is drawn slightly larger
    pub font_size: f32,
}

/// Draw the colorbar for `scale` onto the figure pixmap.
pub fn draw_colorbar(pixmap: &mut Pixmap, scale: &ColorScale, config: &ColorbarConfig) {
    draw_bar(pixmap, scale, config);
    draw_extend_arrow(pixmap, scale, config);
    draw_outline(pixmap, config);
    draw_ticks(pixmap, scale, config);
    draw_label(pixmap, config);
}

/// Fill the bar with the ramp, bottom = vmin, top = vmax.
fn draw_bar(pixmap: &mut Pixmap, scale: &ColorScale, config: &ColorbarConfig) {
    let pix_width = pixmap.width() as usize;
    let pix_height = pixmap.height() as usize;

    let x0 = config.x.max(0.0) as usize;
    let x1 = ((config.x + config.width) as usize).min(pix_width);
    let y0 = config.y.max(0.0) as usize;
    let y1 = ((config.y + config.height) as usize).min(pix_height);

    let data = pixmap.data_mut();
    for py in y0..y1 {
        let t = 1.0 - (py as f32 - config.y) / config.height;
        let color = scale.colormap.sample(t);
        for px in x0..x1 {
            let idx = (py * pix_width + px) * 4;
            data[idx] = color.r;
            data[idx + 1] = color.g;
            data[idx + 2] = color.b;
            data[idx + 3] = color.a;
        }
    }
}

/// Triangle above the bar in the ramp's top color: values extend past vmax.
fn draw_extend_arrow(pixmap: &mut Pixmap, scale: &ColorScale, config: &ColorbarConfig) {
    let top = scale.colormap.sample(1.0);
    let apex_rise = config.width * 0.9;

    let mut pb = PathBuilder::new();
    pb.move_to(config.x, config.y);
    pb.line_to(config.x + config.width, config.y);
    pb.line_to(config.x + config.width / 2.0, config.y - apex_rise);
    pb.close();

    let mut paint = Paint::default();
    paint.set_color_rgba8(top.r, top.g, top.b, top.a);
    paint.anti_alias = true;

    if let Some(path) = pb.finish() {
        pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    }
}

fn draw_outline(pixmap: &mut Pixmap, config: &ColorbarConfig) {
    let outline = PixelPath {
        points: vec![
            (config.x, config.y),
            (config.x + config.width, config.y),
            (config.x + config.width, config.y + config.height),
            (config.x, config.y + config.height),
        ],
        closed: true,
    };
    stroke_paths(pixmap, &[outline], &LineStyle::new(Color::BLACK, 1.0));
}

fn draw_ticks(pixmap: &mut Pixmap, scale: &ColorScale, config: &ColorbarConfig) {
    if config.ticks < 2 {
        return;
    }

    let tick_len = config.width * 0.4;
    let steps = config.ticks - 1;

    for i in 0..config.ticks {
        let fraction = i as f32 / steps as f32;
        let value = scale.vmin + (scale.vmax - scale.vmin) * fraction;
        let y = config.y + config.height * (1.0 - fraction);

        let mark = PixelPath {
            points: vec![
                (config.x + config.width, y),
                (config.x + config.width + tick_len, y),
            ],
            closed: false,
        };
        stroke_paths(pixmap, &[mark], &LineStyle::new(Color::BLACK, 1.0));

        let text = format_tick(value);
        let text_x = config.x
            + config.width
            + tick_len
            + 4.0
            + glyphs::text_width(&text, config.font_size) / 2.0;
        glyphs::draw_text(pixmap, text_x, y, 0.0, &text, config.font_size, Color::BLACK);
    }
}

/// Axis label, rotated to read bottom-to-top, right of the tick labels.
fn draw_label(pixmap: &mut Pixmap, config: &ColorbarConfig) {
    if config.label.is_empty() {
        return;
    }

    let label_size = config.font_size * 1.2;
    let x = config.x + config.width * 3.0 + label_size;
    let y = config.y + config.height / 2.0;
    glyphs::draw_text(
        pixmap,
        x,
        y,
        -std::f32::consts::FRAC_PI_2,
        &config.label,
        label_size,
        Color::BLACK,
    );
}

/// Format a tick value: whole numbers without decimals, small values with
/// one decimal place.
fn format_tick(value: f32) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.fract().abs() < 0.05 || value.abs() >= 100.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colormap::Colormap;

    #[test]
    fn test_format_tick() {
        assert_eq!(format_tick(0.0), "0");
        assert_eq!(format_tick(5.5), "5.5");
        assert_eq!(format_tick(4.0), "4");
        assert_eq!(format_tick(1250.0), "1250");
    }

    #[test]
    fn test_draw_colorbar_fills_bar() {
        let mut pixmap = Pixmap::new(120, 200).unwrap();
        pixmap.fill(tiny_skia::Color::WHITE);

        let scale = ColorScale::new(Colormap::by_name("Purples").unwrap(), 0.0, 100.0);
        let config = ColorbarConfig {
            x: 10.0,
            y: 30.0,
            width: 12.0,
            height: 140.0,
            ticks: 5,
            label: "Population per pixel".to_string(),
            font_size: 8.0,
        };

        draw_colorbar(&mut pixmap, &scale, &config);
        let data = pixmap.data();

        // Center of the bar near its top should be close to the ramp top
        let idx = ((35 * 120) + 16) * 4;
        let top = scale.colormap.sample(1.0);
        assert!((data[idx] as i32 - top.r as i32).abs() < 30);

        // Bottom of the bar should be near the ramp bottom (light)
        let idx = ((165 * 120) + 16) * 4;
        assert!(data[idx] > 200);
    }
}
