//! Named color ramps for population rendering.
//!
//! Ramps are the standard sequential palettes (ColorBrewer plus a couple
//! of the perceptually uniform matplotlib maps), sampled by piecewise
//! linear interpolation between equally spaced anchor colors. Every ramp
//! carries an under-range color shown for cells below the visible
//! minimum, i.e. zero-population cells.

use map_common::{MapError, MapResult};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Color value in RGBA format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };

    pub const BLACK: Color = Color {
        r: 0,
        g: 0,
        b: 0,
        a: 255,
    };
}

/// Linear color interpolation
fn interpolate_color(color1: Color, color2: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let t_inv = 1.0 - t;

    Color::new(
        ((color1.r as f32 * t_inv) + (color2.r as f32 * t)) as u8,
        ((color1.g as f32 * t_inv) + (color2.g as f32 * t)) as u8,
        ((color1.b as f32 * t_inv) + (color2.b as f32 * t)) as u8,
        ((color1.a as f32 * t_inv) + (color2.a as f32 * t)) as u8,
    )
}

/// Under-range fallback: 80% gray, shown for non-positive cells.
const UNDER_GRAY: Color = Color {
    r: 204,
    g: 204,
    b: 204,
    a: 255,
};

/// A named color ramp with an under-range fallback color.
#[derive(Debug, Clone)]
pub struct Colormap {
    name: &'static str,
    anchors: &'static [(u8, u8, u8)],
    under: Color,
}

impl Colormap {
    /// Look up a ramp by its name. Names are case-sensitive, matching the
    /// conventional palette names ("Purples", "Viridis", ...).
    pub fn by_name(name: &str) -> MapResult<Colormap> {
        REGISTRY
            .get(name)
            .cloned()
            .ok_or_else(|| MapError::UnknownColormap(name.to_string()))
    }

    /// Names of all registered ramps, sorted.
    pub fn names() -> Vec<&'static str> {
        let mut names: Vec<_> = REGISTRY.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The under-range fallback color.
    pub fn under(&self) -> Color {
        self.under
    }

    /// Sample the ramp at a normalized position in [0, 1].
    pub fn sample(&self, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let last = self.anchors.len() - 1;
        let position = t * last as f32;
        let low = (position.floor() as usize).min(last);
        let high = (low + 1).min(last);
        let frac = position - low as f32;

        let (r1, g1, b1) = self.anchors[low];
        let (r2, g2, b2) = self.anchors[high];
        interpolate_color(Color::opaque(r1, g1, b1), Color::opaque(r2, g2, b2), frac)
    }
}

/// A ramp bound to a value range for one render pass.
///
/// Values at or below `vmin` clip to the under-range color; values above
/// `vmax` clip to the top of the ramp.
#[derive(Debug, Clone)]
pub struct ColorScale {
    pub colormap: Colormap,
    pub vmin: f32,
    pub vmax: f32,
}

impl ColorScale {
    pub fn new(colormap: Colormap, vmin: f32, vmax: f32) -> Self {
        Self {
            colormap,
            vmin,
            vmax,
        }
    }

    /// Map a data value to a display color.
    pub fn color_for(&self, value: f32) -> Color {
        if value <= self.vmin {
            return self.colormap.under();
        }

        let range = self.vmax - self.vmin;
        let range = if range.abs() < f32::EPSILON { 1.0 } else { range };
        let normalized = ((value - self.vmin) / range).clamp(0.0, 1.0);
        self.colormap.sample(normalized)
    }
}

macro_rules! ramp {
    ($name:literal, $anchors:expr) => {
        (
            $name,
            Colormap {
                name: $name,
                anchors: &$anchors,
                under: UNDER_GRAY,
            },
        )
    };
}

static REGISTRY: Lazy<HashMap<&'static str, Colormap>> = Lazy::new(|| {
    HashMap::from([
        ramp!(
            "Purples",
            [
                (252, 251, 253),
                (239, 237, 245),
                (218, 218, 235),
                (188, 189, 220),
                (158, 154, 200),
                (128, 125, 186),
                (106, 81, 163),
                (84, 39, 143),
                (63, 0, 125),
            ]
        ),
        ramp!(
            "Blues",
            [
                (247, 251, 255),
                (222, 235, 247),
                (198, 219, 239),
                (158, 202, 225),
                (107, 174, 214),
                (66, 146, 198),
                (33, 113, 181),
                (8, 81, 156),
                (8, 48, 107),
            ]
        ),
        ramp!(
            "Greens",
            [
                (247, 252, 245),
                (229, 245, 224),
                (199, 233, 192),
                (161, 217, 155),
                (116, 196, 118),
                (65, 171, 93),
                (35, 139, 69),
                (0, 109, 44),
                (0, 68, 27),
            ]
        ),
        ramp!(
            "Greys",
            [
                (255, 255, 255),
                (240, 240, 240),
                (217, 217, 217),
                (189, 189, 189),
                (150, 150, 150),
                (115, 115, 115),
                (82, 82, 82),
                (37, 37, 37),
                (0, 0, 0),
            ]
        ),
        ramp!(
            "Oranges",
            [
                (255, 245, 235),
                (254, 230, 206),
                (253, 208, 162),
                (253, 174, 107),
                (253, 141, 60),
                (241, 105, 19),
                (217, 72, 1),
                (166, 54, 3),
                (127, 39, 4),
            ]
        ),
        ramp!(
            "Reds",
            [
                (255, 245, 240),
                (254, 224, 210),
                (252, 187, 161),
                (252, 146, 114),
                (251, 106, 74),
                (239, 59, 44),
                (203, 24, 29),
                (165, 15, 21),
                (103, 0, 13),
            ]
        ),
        ramp!(
            "YlGnBu",
            [
                (255, 255, 217),
                (237, 248, 177),
                (199, 233, 180),
                (127, 205, 187),
                (65, 182, 196),
                (29, 145, 192),
                (34, 94, 168),
                (37, 52, 148),
                (8, 29, 88),
            ]
        ),
        ramp!(
            "YlOrRd",
            [
                (255, 255, 204),
                (255, 237, 160),
                (254, 217, 118),
                (254, 178, 76),
                (253, 141, 60),
                (252, 78, 42),
                (227, 26, 28),
                (189, 0, 38),
                (128, 0, 38),
            ]
        ),
        ramp!(
            "Viridis",
            [
                (68, 1, 84),
                (72, 40, 120),
                (62, 73, 137),
                (49, 104, 142),
                (38, 130, 142),
                (31, 158, 137),
                (53, 183, 121),
                (110, 206, 88),
                (181, 222, 43),
                (253, 231, 37),
            ]
        ),
        ramp!(
            "Plasma",
            [
                (13, 8, 135),
                (70, 3, 159),
                (114, 1, 168),
                (156, 23, 158),
                (189, 55, 134),
                (216, 87, 107),
                (237, 121, 83),
                (251, 159, 58),
                (253, 202, 38),
                (240, 249, 33),
            ]
        ),
    ])
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_endpoints() {
        let cmap = Colormap::by_name("Purples").unwrap();
        assert_eq!(cmap.sample(0.0), Color::opaque(252, 251, 253));
        assert_eq!(cmap.sample(1.0), Color::opaque(63, 0, 125));
    }

    #[test]
    fn test_sample_interpolates() {
        let cmap = Colormap::by_name("Greys").unwrap();
        // Midpoint of a 9-anchor ramp lands exactly on the 5th anchor
        assert_eq!(cmap.sample(0.5), Color::opaque(150, 150, 150));
    }

    #[test]
    fn test_color_scale_under_range() {
        let scale = ColorScale::new(Colormap::by_name("Purples").unwrap(), 0.0, 10.0);
        assert_eq!(scale.color_for(0.0), UNDER_GRAY);
        assert_eq!(scale.color_for(-3.0), UNDER_GRAY);
        assert_ne!(scale.color_for(5.0), UNDER_GRAY);
    }

    #[test]
    fn test_color_scale_clips_above_max() {
        let scale = ColorScale::new(Colormap::by_name("Blues").unwrap(), 0.0, 10.0);
        assert_eq!(scale.color_for(10.0), scale.color_for(1_000_000.0));
    }
}
