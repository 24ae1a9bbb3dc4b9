//! Tests for the named colormap registry.

use renderer::{Color, ColorScale, Colormap};

#[test]
fn test_known_ramps_resolve() {
    for name in [
        "Purples", "Blues", "Greens", "Greys", "Oranges", "Reds", "YlGnBu", "YlOrRd", "Viridis",
        "Plasma",
    ] {
        let cmap = Colormap::by_name(name).unwrap();
        assert_eq!(cmap.name(), name);
    }
}

#[test]
fn test_unknown_ramp_errors() {
    let err = Colormap::by_name("NotARamp").unwrap_err();
    assert!(err.to_string().contains("NotARamp"));

    // Lookup is case-sensitive, matching the conventional palette names
    assert!(Colormap::by_name("purples").is_err());
}

#[test]
fn test_names_are_sorted_and_complete() {
    let names = Colormap::names();
    assert!(names.len() >= 10);
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);
}

#[test]
fn test_under_color_is_light_gray() {
    let cmap = Colormap::by_name("Purples").unwrap();
    assert_eq!(cmap.under(), Color::opaque(204, 204, 204));
}

#[test]
fn test_ramp_is_monotonically_darkening() {
    // Sequential ramps go light to dark; check luminance decreases
    let cmap = Colormap::by_name("Purples").unwrap();
    let luminance = |c: Color| 0.299 * c.r as f32 + 0.587 * c.g as f32 + 0.114 * c.b as f32;

    let low = luminance(cmap.sample(0.0));
    let mid = luminance(cmap.sample(0.5));
    let high = luminance(cmap.sample(1.0));

    assert!(low > mid);
    assert!(mid > high);
}

#[test]
fn test_degenerate_scale_renders_under_only() {
    // vmax = 0 is the documented fallback when no cell is positive: every
    // non-positive value takes the under-range color
    let scale = ColorScale::new(Colormap::by_name("Purples").unwrap(), 0.0, 0.0);
    assert_eq!(scale.color_for(0.0), scale.colormap.under());
    assert_eq!(scale.color_for(-1.0), scale.colormap.under());
}
