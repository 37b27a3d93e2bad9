//! Hand renderer.
//!
//! Hour and minute angles are pure functions of the sample; the second angle
//! comes from the stepping machine and is passed in. Each hand is drawn as a
//! soft shadow silhouette first, then the metallic hand itself, and the
//! pivot cap goes on top of everything.

use core::f32::consts::{FRAC_PI_2, PI};

use crate::coords::{Transform2, Vec2};
use crate::paint::{Color, LinearGradient, Paint, RadialGradient, SpreadMode};
use crate::scene::shapes::path::PathBuilder;
use crate::scene::{Border, DrawList, ZIndex};
use crate::time::ClockSample;

use super::geometry::DialGeometry;
use super::style;

const Z_HAND_SHADOWS: ZIndex = ZIndex::new(20);
const Z_HANDS: ZIndex = ZIndex::new(21);
const Z_PIVOT: ZIndex = ZIndex::new(22);

/// Shadow silhouettes fall down-right of the hands.
const SHADOW_OFFSET: Vec2 = Vec2::new(3.0, 3.0);

/// The counterweight dot sits this far down the second hand's tail.
const COUNTERWEIGHT_POS: f32 = 0.14;

/// Hour hand angle. 12 o'clock is -PI/2, 3 o'clock is 0.
#[inline]
pub fn hour_angle(hours: u32, minutes: u32) -> f32 {
    ((hours % 12) as f32 + minutes as f32 / 60.0) * (PI / 6.0) - FRAC_PI_2
}

/// Minute hand angle, advanced fractionally by the current second.
#[inline]
pub fn minute_angle(minutes: u32, seconds: u32) -> f32 {
    (minutes as f32 + seconds as f32 / 60.0) * (PI / 30.0) - FRAC_PI_2
}

pub fn draw_hands(
    list: &mut DrawList,
    geo: &DialGeometry,
    sample: &ClockSample,
    second_angle: f32,
) {
    let hour = hour_angle(sample.hours, sample.minutes);
    let minute = minute_angle(sample.minutes, sample.seconds);

    let (hour_len, hour_width) = style::HOUR_HAND;
    let (minute_len, minute_width) = style::MINUTE_HAND;
    let (second_len, second_width) = style::SECOND_HAND;

    draw_hand_shadow(list, geo, hour, geo.radius * hour_len, hour_width);
    draw_hand_shadow(list, geo, minute, geo.radius * minute_len, minute_width);
    draw_hand_shadow(list, geo, second_angle, geo.radius * second_len, second_width);

    draw_metal_hand(list, geo, hour, geo.radius * hour_len, hour_width);
    draw_metal_hand(list, geo, minute, geo.radius * minute_len, minute_width);
    draw_second_hand(list, geo, second_angle, geo.radius * second_len);

    draw_pivot(list, geo);
}

/// Outline-local space has the pivot at the origin and the tip at (0, -len);
/// rotating by `angle + PI/2` swings the tip onto the direction angle.
fn hand_transform(geo: &DialGeometry, angle: f32, offset: Vec2) -> Transform2 {
    Transform2::rotation(angle + FRAC_PI_2).then(Transform2::translation(geo.center + offset))
}

fn draw_hand_shadow(list: &mut DrawList, geo: &DialGeometry, angle: f32, len: f32, width: f32) {
    let t = hand_transform(geo, angle, SHADOW_OFFSET);
    let half = width * 0.5;

    // Straight-edged silhouette; the blur comes from the low fill opacity.
    let mut path = PathBuilder::with_transform(t);
    path.move_to(Vec2::new(-half, 0.0))
        .line_to(Vec2::new(-half * 0.5, -len * 0.2))
        .line_to(Vec2::new(0.0, -len))
        .line_to(Vec2::new(half * 0.5, -len * 0.2))
        .line_to(Vec2::new(half, 0.0))
        .close();

    list.push_path(
        Z_HAND_SHADOWS,
        path.build(Some(Paint::solid(Color::black_alpha(0.08))), None, None),
    );
}

fn draw_metal_hand(list: &mut DrawList, geo: &DialGeometry, angle: f32, len: f32, width: f32) {
    let t = hand_transform(geo, angle, Vec2::zero());
    let half = width * 0.5;

    let mut path = PathBuilder::with_transform(t);
    path.move_to(Vec2::new(-half, 0.0))
        .cubic_to(
            Vec2::new(-half, -len * 0.2),
            Vec2::new(-half * 0.5, -len * 0.6),
            Vec2::new(0.0, -len),
        )
        .cubic_to(
            Vec2::new(half * 0.5, -len * 0.6),
            Vec2::new(half, -len * 0.2),
            Vec2::new(half, 0.0),
        )
        .close();

    let gradient = LinearGradient::new(
        t.apply(Vec2::new(-half, 0.0)),
        t.apply(Vec2::new(half, 0.0)),
        style::hand_metal_stops(),
        SpreadMode::Pad,
    );
    list.push_path(Z_HANDS, path.build(Some(Paint::LinearGradient(gradient)), None, None));

    // Soft center-line highlight.
    let mut highlight = PathBuilder::with_transform(t);
    highlight
        .move_to(Vec2::new(-half * 0.5, -len * 0.2))
        .quad_to(Vec2::new(0.0, -len * 0.6), Vec2::new(0.0, -len));
    list.push_path(
        Z_HANDS,
        highlight.build(None, Some(Border::new(0.3, Color::white_alpha(0.4))), None),
    );
}

fn draw_second_hand(list: &mut DrawList, geo: &DialGeometry, angle: f32, len: f32) {
    let t = hand_transform(geo, angle, Vec2::zero());
    let half = style::SECOND_HAND.1 * 0.5;

    // The outline extends 0.2 len behind the pivot as a tail.
    let mut path = PathBuilder::with_transform(t);
    path.move_to(Vec2::new(-half, len * 0.2))
        .cubic_to(
            Vec2::new(-half, len * 0.1),
            Vec2::new(-half * 0.5, 0.0),
            Vec2::new(0.0, -len),
        )
        .cubic_to(
            Vec2::new(half * 0.5, 0.0),
            Vec2::new(half, len * 0.1),
            Vec2::new(half, len * 0.2),
        )
        .close();

    let gradient = LinearGradient::new(
        t.apply(Vec2::new(-half, 0.0)),
        t.apply(Vec2::new(half, 0.0)),
        style::second_hand_stops(),
        SpreadMode::Pad,
    );
    list.push_path(Z_HANDS, path.build(Some(Paint::LinearGradient(gradient)), None, None));

    // Primary and secondary highlights along the blade.
    let mut main = PathBuilder::with_transform(t);
    main.move_to(Vec2::new(-half * 0.5, 0.0))
        .quad_to(Vec2::new(0.0, -len * 0.6), Vec2::new(0.0, -len));
    list.push_path(
        Z_HANDS,
        main.build(None, Some(Border::new(0.5, Color::white_alpha(0.7))), None),
    );

    let mut soft = PathBuilder::with_transform(t);
    soft.move_to(Vec2::new(-half / 3.0, -len * 0.2))
        .quad_to(Vec2::new(0.0, -len * 0.7), Vec2::new(0.0, -len));
    list.push_path(
        Z_HANDS,
        soft.build(None, Some(Border::new(0.3, Color::white_alpha(0.4))), None),
    );

    // Decorative counterweight on the tail.
    let dot_center = t.apply(Vec2::new(0.0, len * COUNTERWEIGHT_POS));
    let dot_radius = 2.0;
    let dot = RadialGradient::new(
        dot_center + Vec2::new(-0.5, -0.5),
        dot_center,
        dot_radius,
        style::counterweight_stops(),
        SpreadMode::Pad,
    );
    list.push_circle(Z_HANDS, dot_center, dot_radius, Paint::RadialGradient(dot), None);
}

fn draw_pivot(list: &mut DrawList, geo: &DialGeometry) {
    let gradient = RadialGradient::centered(geo.center, style::PIVOT_RADIUS, style::pivot_stops());
    list.push_circle(
        Z_PIVOT,
        geo.center,
        style::PIVOT_RADIUS,
        Paint::RadialGradient(gradient),
        None,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::DrawCmd;

    const EPS: f32 = 1e-5;

    #[test]
    fn hour_angle_matches_contract() {
        assert!((hour_angle(0, 0) + FRAC_PI_2).abs() < EPS);
        assert!((hour_angle(6, 0) - FRAC_PI_2).abs() < EPS);
        assert!((hour_angle(3, 0)).abs() < EPS);

        for hours in 0..12 {
            let expected = hours as f32 * (PI / 6.0) - FRAC_PI_2;
            assert!((hour_angle(hours, 0) - expected).abs() < EPS, "h={hours}");
        }
    }

    #[test]
    fn hour_angle_wraps_past_noon() {
        assert!((hour_angle(15, 20) - hour_angle(3, 20)).abs() < EPS);
    }

    #[test]
    fn minutes_advance_the_hour_hand() {
        let at_three = hour_angle(3, 0);
        let half_past = hour_angle(3, 30);
        assert!((half_past - at_three - PI / 12.0).abs() < EPS);
    }

    #[test]
    fn minute_angle_matches_contract() {
        assert!((minute_angle(0, 0) + FRAC_PI_2).abs() < EPS);
        assert!((minute_angle(30, 0) - FRAC_PI_2).abs() < EPS);
        assert!((minute_angle(15, 0)).abs() < EPS);
    }

    #[test]
    fn seconds_advance_the_minute_hand() {
        let on_the_minute = minute_angle(10, 0);
        let half_through = minute_angle(10, 30);
        assert!((half_through - on_the_minute - PI / 60.0).abs() < EPS);
    }

    fn draw_fixture() -> DrawList {
        let geo = DialGeometry::new(120.0, Vec2::new(120.0, 120.0));
        let sample = ClockSample {
            hours: 10,
            minutes: 8,
            seconds: 42,
            milliseconds: 0,
            month: 12,
            day_of_month: 1,
        };
        let mut list = DrawList::new();
        draw_hands(&mut list, &geo, &sample, -FRAC_PI_2);
        list
    }

    #[test]
    fn records_shadows_hands_and_pivot() {
        let list = draw_fixture();
        // 3 shadows + hour (2) + minute (2) + second (4) + pivot
        assert_eq!(list.len(), 12);
    }

    #[test]
    fn pivot_paints_on_top() {
        let mut list = draw_fixture();
        let last = list.iter_in_paint_order().last().unwrap();
        match &last.cmd {
            DrawCmd::Circle(c) => assert_eq!(c.radius, style::PIVOT_RADIUS),
            other => panic!("expected pivot circle on top, got {other:?}"),
        }
    }

    #[test]
    fn shadow_silhouettes_paint_below_hands() {
        let mut list = draw_fixture();
        let first = list.iter_in_paint_order().next().unwrap();
        match &first.cmd {
            DrawCmd::Path(p) => {
                assert!(p.border.is_none());
                assert!(matches!(p.paint, Some(Paint::Solid(_))));
            }
            other => panic!("expected shadow path first, got {other:?}"),
        }
    }
}
