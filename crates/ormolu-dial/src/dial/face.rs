//! Static dial renderer.
//!
//! Everything here is time-independent: identical geometry records an
//! identical command sequence, layer by layer: base disc, ripple rings,
//! center fade, texture circles, hour ticks, brand text.

use anyhow::{Result, ensure};
use core::f32::consts::{FRAC_PI_2, PI};

use crate::coords::Vec2;
use crate::paint::{Color, LinearGradient, Paint, RadialGradient, SpreadMode};
use crate::scene::shapes::path::PathBuilder;
use crate::scene::{Border, DrawList, Shadow, ZIndex};
use crate::text::{FontId, FontSystem};

use super::geometry::DialGeometry;
use super::style;

const Z_BASE: ZIndex = ZIndex::new(0);
const Z_RIPPLES: ZIndex = ZIndex::new(1);
const Z_FADE: ZIndex = ZIndex::new(2);
const Z_TEXTURE: ZIndex = ZIndex::new(3);
const Z_TICKS: ZIndex = ZIndex::new(4);
const Z_BRAND: ZIndex = ZIndex::new(5);

/// Records the static face. Later layers composite over earlier ones; no
/// layer is skipped for any geometry.
pub fn draw_face(
    list: &mut DrawList,
    fonts: &FontSystem,
    font: FontId,
    geo: &DialGeometry,
) -> Result<()> {
    draw_base_disc(list, geo)?;
    draw_ripples(list, geo);
    draw_center_fade(list, geo)?;
    draw_texture_rings(list, geo);
    draw_hour_ticks(list, geo)?;
    draw_brand(list, fonts, font, geo);
    Ok(())
}

fn draw_base_disc(list: &mut DrawList, geo: &DialGeometry) -> Result<()> {
    // Light falls in from the upper left; the focal point is offset by
    // 0.3r toward it.
    let focal = geo.center + Vec2::new(-geo.radius * 0.3, -geo.radius * 0.3);
    let gradient = RadialGradient::new(
        focal,
        geo.center,
        geo.radius,
        style::base_disc_stops(),
        SpreadMode::Pad,
    );
    ensure!(gradient.is_valid(), "base disc gradient is degenerate");

    list.push_circle(Z_BASE, geo.center, geo.radius, Paint::RadialGradient(gradient), None);
    Ok(())
}

/// Stroke intensity of a ripple at progress `p` in [0, 1).
///
/// Strong near the innermost ring, decaying roughly exponentially outward.
fn ripple_intensity(p: f32) -> f32 {
    if p < 0.25 {
        0.04 * (1.0 - p * 2.0)
    } else {
        0.1 * (-2.5 * p).exp()
    }
}

/// Ring spacing at progress `p`, as a stroke-width base.
///
/// Wide near `p = 0`, narrowing asymptotically outward.
fn ripple_spacing(p: f32, radius: f32) -> f32 {
    if p < 0.25 {
        radius * (0.1 - p * 0.2)
    } else {
        radius * 0.06 + radius * 0.04 * p.powf(0.7)
    }
}

fn draw_ripples(list: &mut DrawList, geo: &DialGeometry) {
    for i in 0..style::RIPPLE_COUNT {
        let p = i as f32 / style::RIPPLE_COUNT as f32;

        // Rings start at 0.45r and pack outward, with a slight wobble so
        // they do not read as machine-perfect.
        let mut ring_radius = geo.radius * (0.45 + p.powf(0.6) * 0.5);
        ring_radius += (p * PI * 4.0).sin() * geo.radius * 0.01;

        let intensity = ripple_intensity(p);
        let spacing = ripple_spacing(p, geo.radius);

        list.push_ring(
            Z_RIPPLES,
            geo.center,
            ring_radius,
            Border::new(
                spacing * (1.0 + (p * PI).sin() * 0.2),
                Color::black_alpha(intensity),
            ),
        );

        // Light inner edge on each ripple.
        list.push_ring(
            Z_RIPPLES,
            geo.center,
            ring_radius - spacing * 0.3,
            Border::new(spacing * 0.4, Color::white_alpha(intensity * 0.3)),
        );
    }
}

fn draw_center_fade(list: &mut DrawList, geo: &DialGeometry) -> Result<()> {
    let fade_radius = geo.radius * 0.45;
    let gradient = RadialGradient::centered(geo.center, fade_radius, style::center_fade_stops());
    ensure!(gradient.is_valid(), "center fade gradient is degenerate");

    list.push_circle(Z_FADE, geo.center, fade_radius, Paint::RadialGradient(gradient), None);
    Ok(())
}

fn draw_texture_rings(list: &mut DrawList, geo: &DialGeometry) {
    for i in 1..=style::TEXTURE_RING_COUNT {
        let ring_radius = geo.radius * (0.2 + i as f32 * 0.15);
        list.push_ring(
            Z_TEXTURE,
            geo.center,
            ring_radius,
            Border::new(0.3, Color::black_alpha(0.02)),
        );
    }
}

fn draw_hour_ticks(list: &mut DrawList, geo: &DialGeometry) -> Result<()> {
    for i in 0..12 {
        let angle = i as f32 * (PI / 6.0) - FRAC_PI_2;

        let tip = geo.point_at(angle, style::TICK_INNER);
        let base1 = geo.point_at(angle - style::TICK_HALF_WIDTH, style::TICK_OUTER);
        let base2 = geo.point_at(angle + style::TICK_HALF_WIDTH, style::TICK_OUTER);

        let ctrl_frac =
            style::TICK_INNER + (style::TICK_OUTER - style::TICK_INNER) * style::TICK_CTRL_DEPTH;
        let ctrl1 = geo.point_at(angle - style::TICK_CTRL_SPREAD, ctrl_frac);
        let ctrl2 = geo.point_at(angle + style::TICK_CTRL_SPREAD, ctrl_frac);

        let mut path = PathBuilder::new();
        path.move_to(tip)
            .cubic_to(ctrl1, base1, base1)
            .cubic_to(base1, base2, base2)
            .cubic_to(base2, ctrl2, tip)
            .close();

        // Sheen runs across the tick's width, at the inner radius.
        let gradient = LinearGradient::new(
            geo.point_at(angle - style::TICK_SHEEN_SPREAD, style::TICK_INNER),
            geo.point_at(angle + style::TICK_SHEEN_SPREAD, style::TICK_INNER),
            style::tick_metal_stops(),
            SpreadMode::Pad,
        );
        ensure!(gradient.is_valid(), "tick {i} gradient is degenerate");

        list.push_path(
            Z_TICKS,
            path.build(
                Some(Paint::LinearGradient(gradient)),
                Some(Border::new(0.5, Color::white_alpha(0.2))),
                Some(Shadow::new(Color::black_alpha(0.2), 2.0, Vec2::new(1.0, 1.0))),
            ),
        );
    }
    Ok(())
}

fn draw_brand(list: &mut DrawList, fonts: &FontSystem, font: FontId, geo: &DialGeometry) {
    let anchor = geo.center + Vec2::new(0.0, -style::BRAND_LIFT);
    let flourish = Border::new(0.5, Color::from_straight(0.2, 0.2, 0.2, 0.2));

    // Under-flourish, text, over-flourish, in the order the face was designed.
    let mut under = PathBuilder::new();
    under.move_to(anchor + Vec2::new(-40.0, 0.0)).cubic_to(
        anchor + Vec2::new(-20.0, -5.0),
        anchor + Vec2::new(20.0, -5.0),
        anchor + Vec2::new(40.0, 0.0),
    );
    list.push_path(Z_BRAND, under.build(None, Some(flourish.clone()), None));

    let measured = fonts.measure_text(style::BRAND_TEXT, font, style::BRAND_SIZE);
    let origin = anchor + Vec2::new(-measured.x * 0.5, -measured.y);
    list.push_text(
        Z_BRAND,
        style::BRAND_TEXT,
        font,
        style::BRAND_SIZE,
        style::brand_color(),
        origin,
        None,
    );

    let mut over = PathBuilder::new();
    over.move_to(anchor + Vec2::new(-35.0, -2.0)).cubic_to(
        anchor + Vec2::new(-15.0, -7.0),
        anchor + Vec2::new(15.0, -7.0),
        anchor + Vec2::new(35.0, -2.0),
    );
    list.push_path(Z_BRAND, over.build(None, Some(flourish), None));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_fonts() -> (FontSystem, FontId) {
        let mut fonts = FontSystem::new();
        let font = fonts.load_test_stub();
        (fonts, font)
    }

    fn geo() -> DialGeometry {
        DialGeometry::new(120.0, Vec2::new(120.0, 120.0))
    }

    #[test]
    fn deterministic_for_identical_geometry() {
        let (fonts, font) = test_fonts();

        let mut a = DrawList::new();
        let mut b = DrawList::new();
        draw_face(&mut a, &fonts, font, &geo()).unwrap();
        draw_face(&mut b, &fonts, font, &geo()).unwrap();

        assert_eq!(a.items(), b.items());
        assert!(!a.is_empty());
    }

    #[test]
    fn records_every_layer() {
        let (fonts, font) = test_fonts();
        let mut list = DrawList::new();
        draw_face(&mut list, &fonts, font, &geo()).unwrap();

        // base disc + 2*4 ripples + fade + 5 texture rings + 12 ticks
        // + flourish/text/flourish
        assert_eq!(list.len(), 1 + 8 + 1 + 5 + 12 + 3);
    }

    #[test]
    fn ripple_intensity_decays_outward() {
        assert!(ripple_intensity(0.25) > ripple_intensity(0.5));
        assert!(ripple_intensity(0.5) > ripple_intensity(0.75));
        assert!(ripple_intensity(0.99) > 0.0);
    }

    #[test]
    fn ripple_spacing_stays_positive() {
        for i in 0..20 {
            let p = i as f32 / 20.0;
            assert!(ripple_spacing(p, 120.0) > 0.0, "spacing at p={p}");
        }
    }

    #[test]
    fn spacing_widest_at_center() {
        let r = 120.0;
        assert!(ripple_spacing(0.0, r) > ripple_spacing(0.3, r));
    }
}
