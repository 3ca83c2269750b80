use egui_bargraph::geometry::{
    axis_min_max, axis_scale, clamp_scroll_offset, draw_offset, is_hit, max_axis_value,
    max_scroll_distance, Axis, BarTransform,
};
use egui_bargraph::{Offset, Point};
use proptest::prelude::*;

fn points() -> impl Strategy<Value = Vec<Point>> {
    proptest::collection::vec((-1_000.0f32..1_000.0, -1_000.0f32..1_000.0), 0..32)
        .prop_map(|coords| coords.into_iter().map(Point::from).collect())
}

fn transform() -> impl Strategy<Value = BarTransform> {
    (
        -10.0f32..10.0,
        1.0f32..100.0,
        0.0f32..20.0,
        0.0f32..100.0,
        0.0f32..50.0,
        0.25f32..4.0,
        0.0f32..500.0,
        1.0f32..60.0,
    )
        .prop_map(
            |(x_min, x_step, y_step, left, first, zoom, scroll, bar_width)| BarTransform {
                x_min,
                y_min: 0.0,
                x_step_pixels: x_step * zoom,
                y_step_pixels: y_step,
                x_left_padding: left,
                first_item_offset: first,
                zoom_scale: zoom,
                scroll_offset: scroll,
                bar_width,
                baseline: 300.0,
            },
        )
}

proptest! {
    #[test]
    fn scale_is_ceiled_step_and_never_negative(points in points(), steps in 1u32..50) {
        for axis in [Axis::X, Axis::Y] {
            let (min, max) = axis_min_max(&points, axis);
            let scale = axis_scale(&points, axis, steps).unwrap();

            prop_assert!(scale.scale >= 0.0);
            prop_assert_eq!(scale.scale, ((max - min) / steps as f32).ceil());
            prop_assert_eq!((scale.min, scale.max), (min, max));
        }
    }

    #[test]
    fn clamp_is_bounded_and_idempotent(current in -2_000.0f32..2_000.0, max in 0.0f32..1_000.0) {
        let clamped = clamp_scroll_offset(current, max);

        prop_assert!((0.0..=max).contains(&clamped));
        prop_assert_eq!(clamp_scroll_offset(clamped, max), clamped);
    }

    #[test]
    fn scroll_distance_grows_with_zoom(
        x_max in 0.0f32..50.0,
        step in 1.0f32..80.0,
        first in 0.0f32..40.0,
        column in 0.0f32..80.0,
        right in 0.0f32..20.0,
        canvas in 100.0f32..2_000.0,
        zoom in 0.25f32..4.0,
        extra in 0.0f32..4.0,
    ) {
        let distance = |zoom: f32| {
            max_scroll_distance(column, x_max, 0.0, step * zoom, first * zoom, right, canvas)
        };

        let near = distance(zoom);
        let far = distance(zoom + extra);
        prop_assert!(near >= 0.0);
        prop_assert!(far + 1e-3 >= near);
    }

    #[test]
    fn fitting_content_never_scrolls(
        x_max in 0.0f32..10.0,
        step in 1.0f32..20.0,
        column in 0.0f32..50.0,
    ) {
        let last = x_max * step + column;
        prop_assert_eq!(max_scroll_distance(column, x_max, 0.0, step, 0.0, 0.0, last + 1.0), 0.0);
        prop_assert_eq!(max_scroll_distance(column, x_max, 0.0, step, 0.0, 0.0, last), 0.0);
    }

    #[test]
    fn scrolling_shifts_bars_left(
        transform in transform(),
        x in -10.0f32..10.0,
        y in -10.0f32..10.0,
        delta in 0.0f32..300.0,
    ) {
        let point = Point::new(x, y);
        let before = draw_offset(point, &transform);
        let after = draw_offset(
            point,
            &BarTransform { scroll_offset: transform.scroll_offset + delta, ..transform },
        );

        prop_assert!((before.x - after.x - delta).abs() < 1e-2);
        prop_assert_eq!(before.y, after.y);
    }

    #[test]
    fn max_axis_value_is_covering_multiple(quarters in 0u32..40_000, step in 1u32..100) {
        let data_max = quarters as f32 / 4.0;
        let value = max_axis_value(data_max, step).unwrap();

        prop_assert_eq!(value % step, 0);
        prop_assert!(value as f32 >= data_max);
        prop_assert!((value as f32) < data_max + step as f32);
    }

    #[test]
    fn exact_multiples_are_kept(multiple in 0u32..1_000, step in 1u32..100) {
        let data_max = (multiple * step) as f32;
        prop_assert_eq!(max_axis_value(data_max, step).unwrap(), multiple * step);
    }

    #[test]
    fn large_maxima_cover_or_fail_cleanly(scale in 0.5f64..2.0, step in 1u32..100) {
        let data_max = ((u32::MAX / step) as f64 * step as f64 * scale) as f32;
        let largest_multiple = u64::from(u32::MAX / step * step);

        match max_axis_value(data_max, step) {
            Ok(value) => {
                prop_assert_eq!(value % step, 0);
                prop_assert!(value as f64 >= data_max as f64);
                prop_assert!((value as f64) < data_max as f64 + step as f64);
            }
            Err(_) => prop_assert!(data_max as f64 > largest_multiple as f64),
        }
    }

    #[test]
    fn negative_maxima_floor_at_zero(data_max in -1_000.0f32..0.0, step in 1u32..100) {
        prop_assert_eq!(max_axis_value(data_max, step).unwrap(), 0);
    }

    #[test]
    fn taps_at_or_below_baseline_never_hit(
        center_x in 0.0f32..500.0,
        center_y in 0.0f32..300.0,
        tap_x in 0.0f32..500.0,
        below in 0.0f32..200.0,
        bar_width in 1.0f32..60.0,
        padding in 0.0f32..20.0,
    ) {
        let baseline = 300.0;
        let tap = Offset::new(tap_x, baseline + below);

        prop_assert!(!is_hit(Offset::new(center_x, center_y), tap, bar_width, baseline, padding));
    }
}
