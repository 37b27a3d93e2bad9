//! Date window renderer.
//!
//! Two small inset windows under the dial center: the month abbreviation in
//! the wider box, the zero-padded day in the narrower one. A pure function of
//! the calendar fields; time of day never enters here.

use anyhow::{Result, ensure};

use crate::coords::{Rect, Vec2};
use crate::paint::{Color, ColorStop, LinearGradient, Paint, SpreadMode};
use crate::scene::{Border, DrawList, Shadow, ZIndex};
use crate::text::{FontId, FontSystem};
use crate::time::ClockSample;

use super::geometry::DialGeometry;
use super::style;

const Z_DATE: ZIndex = ZIndex::new(10);

const CORNER_RADIUS: f32 = 2.0;
const BOX_GAP: f32 = 4.0;
const MONTH_FONT_SIZE: f32 = 12.0;
const DAY_FONT_SIZE: f32 = 11.0;

/// Three-letter uppercase month abbreviation for a 1-based month index.
pub fn month_label(month: u32) -> Result<&'static str> {
    ensure!(
        (1..=12).contains(&month),
        "month index {month} out of range 1..=12"
    );
    Ok(style::MONTH_ABBREV[(month - 1) as usize])
}

/// Day-of-month formatted to two digits.
pub fn day_label(day_of_month: u32) -> String {
    format!("{day_of_month:02}")
}

pub fn draw_date_window(
    list: &mut DrawList,
    fonts: &FontSystem,
    font: FontId,
    geo: &DialGeometry,
    sample: &ClockSample,
) -> Result<()> {
    let month = month_label(sample.month)?;
    let day = day_label(sample.day_of_month);

    let row_center = geo.center + Vec2::new(0.0, geo.radius * 0.35 + 20.0);

    // The pair is sized together and split 2:1, month box the wider.
    let total_width = geo.radius * 0.3 * 1.1;
    let box_height = geo.radius * 0.12 * 1.1;
    let month_width = total_width * 0.67;
    let day_width = total_width * 0.33;

    // One-pixel nudge keeps the pair visually centered under the pivot.
    let month_center = row_center + Vec2::new(-(day_width + BOX_GAP) * 0.5 - 1.0, 0.0);
    let day_center = row_center + Vec2::new((month_width + BOX_GAP) * 0.5 - 1.0, 0.0);

    draw_date_box(
        list,
        fonts,
        font,
        Rect::from_center(month_center, Vec2::new(month_width, box_height)),
        month,
        MONTH_FONT_SIZE,
    )?;
    draw_date_box(
        list,
        fonts,
        font,
        Rect::from_center(day_center, Vec2::new(day_width, box_height)),
        &day,
        DAY_FONT_SIZE,
    )?;

    Ok(())
}

fn draw_date_box(
    list: &mut DrawList,
    fonts: &FontSystem,
    font: FontId,
    rect: Rect,
    label: &str,
    font_size: f32,
) -> Result<()> {
    ensure!(rect.is_finite() && !rect.is_empty(), "date box rect is degenerate");

    list.push_rounded_rect(
        Z_DATE,
        rect,
        CORNER_RADIUS,
        Paint::solid(Color::white_alpha(1.0)),
        Some(Border::new(1.0, style::date_metal())),
        Some(Shadow::new(Color::black_alpha(0.1), 2.0, Vec2::new(1.0, 1.0))),
    );

    // Diagonal gloss, bright in the corners and clear in the middle.
    let gloss = LinearGradient::new(
        rect.origin,
        rect.max(),
        vec![
            ColorStop::new(0.0, Color::white_alpha(0.5)),
            ColorStop::new(0.5, Color::white_alpha(0.0)),
            ColorStop::new(1.0, Color::white_alpha(0.5)),
        ],
        SpreadMode::Pad,
    );
    ensure!(gloss.is_valid(), "date box gloss gradient is degenerate");
    list.push_rounded_rect(
        Z_DATE,
        rect,
        CORNER_RADIUS,
        Paint::LinearGradient(gloss),
        None,
        None,
    );

    // Month labels ride one pixel lower than day numerals.
    let nudge = Vec2::new(0.0, if label.len() > 2 { 1.0 } else { 0.5 });
    let measured = fonts.measure_text(label, font, font_size);
    let origin = rect.center() - measured * 0.5 + nudge;
    list.push_text(Z_DATE, label, font, font_size, style::date_metal(), origin, None);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::DrawCmd;

    fn fixture() -> (FontSystem, FontId, DialGeometry) {
        let mut fonts = FontSystem::new();
        let font = fonts.load_test_stub();
        (fonts, font, DialGeometry::new(120.0, Vec2::new(120.0, 120.0)))
    }

    fn sample(month: u32, day: u32) -> ClockSample {
        ClockSample {
            hours: 10,
            minutes: 8,
            seconds: 42,
            milliseconds: 0,
            month,
            day_of_month: day,
        }
    }

    #[test]
    fn month_labels() {
        assert_eq!(month_label(1).unwrap(), "JAN");
        assert_eq!(month_label(12).unwrap(), "DEC");
        assert!(month_label(0).is_err());
        assert!(month_label(13).is_err());
    }

    #[test]
    fn day_labels_are_zero_padded() {
        assert_eq!(day_label(1), "01");
        assert_eq!(day_label(23), "23");
    }

    #[test]
    fn draws_both_labels() {
        let (fonts, font, geo) = fixture();
        let mut list = DrawList::new();
        draw_date_window(&mut list, &fonts, font, &geo, &sample(12, 1)).unwrap();

        let texts: Vec<&str> = list
            .items()
            .iter()
            .filter_map(|item| match &item.cmd {
                DrawCmd::Text(t) => Some(t.text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec!["DEC", "01"]);
    }

    #[test]
    fn month_box_is_twice_the_day_box() {
        let (fonts, font, geo) = fixture();
        let mut list = DrawList::new();
        draw_date_window(&mut list, &fonts, font, &geo, &sample(3, 7)).unwrap();

        let widths: Vec<f32> = list
            .items()
            .iter()
            .filter_map(|item| match &item.cmd {
                DrawCmd::RoundedRect(r) if r.shadow.is_some() => Some(r.rect.size.x),
                _ => None,
            })
            .collect();
        assert_eq!(widths.len(), 2);
        let ratio = widths[0] / widths[1];
        assert!((ratio - 0.67 / 0.33).abs() < 0.05, "ratio {ratio}");
    }

    #[test]
    fn independent_of_time_of_day() {
        let (fonts, font, geo) = fixture();

        let mut morning = DrawList::new();
        let mut s = sample(6, 15);
        draw_date_window(&mut morning, &fonts, font, &geo, &s).unwrap();

        let mut night = DrawList::new();
        s.hours = 23;
        s.minutes = 59;
        s.seconds = 59;
        draw_date_window(&mut night, &fonts, font, &geo, &s).unwrap();

        assert_eq!(morning.items(), night.items());
    }

    #[test]
    fn invalid_month_is_an_error() {
        let (fonts, font, geo) = fixture();
        let mut list = DrawList::new();
        assert!(draw_date_window(&mut list, &fonts, font, &geo, &sample(13, 5)).is_err());
    }
}
