//! Scale and coordinate math for bar graphs.
//!
//! Everything here is a pure function over plain values. Pixel values are
//! egui logical points measured from the top-left corner of the graph.

use std::f32::consts::FRAC_PI_2;
use std::ops::{Add, Sub};

use crate::error::{GraphError, GraphResult};

/// One data sample.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Point {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// A pixel position relative to the graph's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Round to the integer coordinate space of plotters backends.
    #[inline]
    pub fn to_backend(self) -> (i32, i32) {
        (self.x.round() as i32, self.y.round() as i32)
    }
}

impl Add for Offset {
    type Output = Offset;

    #[inline]
    fn add(self, rhs: Offset) -> Self::Output {
        Offset::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Offset {
    type Output = Offset;

    #[inline]
    fn sub(self, rhs: Offset) -> Self::Output {
        Offset::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// An axis-aligned pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PixelRect {
    pub min: Offset,
    pub max: Offset,
}

impl PixelRect {
    /// Build a rectangle from a corner and a size. Negative sizes are
    /// normalized so `min` is always the top-left corner.
    pub fn from_origin_size(origin: Offset, width: f32, height: f32) -> Self {
        let (x0, x1) = ordered(origin.x, origin.x + width);
        let (y0, y1) = ordered(origin.y, origin.y + height);

        Self {
            min: Offset::new(x0, y0),
            max: Offset::new(x1, y1),
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn to_backend(self) -> ((i32, i32), (i32, i32)) {
        (self.min.to_backend(), self.max.to_backend())
    }
}

#[inline]
fn ordered(a: f32, b: f32) -> (f32, f32) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Which coordinate of a [`Point`] to look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    #[inline]
    fn of(self, point: &Point) -> f32 {
        match self {
            Axis::X => point.x,
            Axis::Y => point.y,
        }
    }
}

/// Min and max of one coordinate. Empty input gives `(0, 0)`.
pub fn axis_min_max(points: &[Point], axis: Axis) -> (f32, f32) {
    if points.is_empty() {
        return (0.0, 0.0);
    }

    points
        .iter()
        .map(|point| axis.of(point))
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(min, max), v| {
            (min.min(v), max.max(v))
        })
}

/// Value range of an axis and how many data units one step covers.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisScale {
    pub min: f32,
    pub max: f32,
    pub scale: f32,
}

/// Derive the data units per step, `ceil((max - min) / steps)`.
pub fn axis_scale(points: &[Point], axis: Axis, steps: u32) -> GraphResult<AxisScale> {
    if steps == 0 {
        return Err(GraphError::InvalidAxisConfig(
            "axis steps must be at least 1".to_string(),
        ));
    }

    let (min, max) = axis_min_max(points, axis);
    let scale = ((max - min) / steps as f32).ceil();

    Ok(AxisScale { min, max, scale })
}

/// How far content can scroll before its last point leaves the right edge.
///
/// `x_step_pixels` and `x_left_padding` are expected to already include the
/// zoom factor.
pub fn max_scroll_distance(
    column_width: f32,
    x_max: f32,
    x_min: f32,
    x_step_pixels: f32,
    x_left_padding: f32,
    right_padding: f32,
    canvas_width: f32,
) -> f32 {
    let x_last_point =
        (x_max - x_min) * x_step_pixels + x_left_padding + column_width + right_padding;

    if x_last_point > canvas_width {
        x_last_point - canvas_width
    } else {
        0.0
    }
}

/// Keep a scroll offset inside `[0, max]`.
pub fn clamp_scroll_offset(current: f32, max: f32) -> f32 {
    if current < 0.0 {
        0.0
    } else if current > max {
        max
    } else {
        current
    }
}

/// Everything needed to map a data point to the top-left corner of its bar.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BarTransform {
    pub x_min: f32,
    pub y_min: f32,
    /// Pixels between neighbouring x values, zoom included.
    pub x_step_pixels: f32,
    /// Pixels per y unit.
    pub y_step_pixels: f32,
    pub x_left_padding: f32,
    /// Unzoomed gap before the first item.
    pub first_item_offset: f32,
    pub zoom_scale: f32,
    pub scroll_offset: f32,
    pub bar_width: f32,
    /// y pixel of the zero value.
    pub baseline: f32,
}

/// Top-left pixel of the bar for `point`.
pub fn draw_offset(point: Point, transform: &BarTransform) -> Offset {
    let x = (point.x - transform.x_min) * transform.x_step_pixels
        + transform.x_left_padding
        + transform.first_item_offset * transform.zoom_scale
        - transform.bar_width / 2.0
        - transform.scroll_offset;
    let y = transform.baseline - (point.y - transform.y_min) * transform.y_step_pixels;

    Offset::new(x, y)
}

/// Rectangular hit test against the top-center point of a bar.
///
/// The horizontal window is widened by half the tap padding on each side and
/// the top edge gets the full padding as slack. Taps at or below the
/// baseline never hit.
pub fn is_hit(
    bar_center: Offset,
    tap: Offset,
    bar_width: f32,
    baseline: f32,
    tap_padding: f32,
) -> bool {
    let half_window = (bar_width + tap_padding) / 2.0;

    tap.x > bar_center.x - half_window
        && tap.x < bar_center.x + half_window
        && tap.y + tap_padding > bar_center.y
        && tap.y < baseline
}

/// Round `data_max` up to a whole number of steps, never below zero.
pub fn max_axis_value(data_max: f32, step_size: u32) -> GraphResult<u32> {
    if step_size == 0 {
        return Err(GraphError::InvalidAxisConfig(
            "axis step size must be at least 1".to_string(),
        ));
    }

    let step = u64::from(step_size);
    let steps = (f64::from(data_max) / step as f64).ceil();
    if steps.is_nan() || steps <= 0.0 {
        return Ok(0);
    }

    // `as` saturates, so an infinite maximum fails the checked math below
    let mut value = (steps as u64).checked_mul(step);
    if value.is_some_and(|value| (value as f64) < f64::from(data_max)) {
        value = value.and_then(|value| value.checked_add(step));
    }

    value
        .and_then(|value| u32::try_from(value).ok())
        .ok_or_else(|| {
            GraphError::InvalidAxisConfig(format!(
                "axis maximum {data_max} does not fit in steps of {step_size}"
            ))
        })
}

/// Per-corner radii of a rounded rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    pub const fn same(radius: f32) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }
}

/// Outline of a rounded rectangle, clockwise from the top-left arc.
///
/// Radii are clamped to half the shorter side. Each corner is approximated
/// with `segments` line pieces; zero-radius corners emit a single point.
pub fn rounded_rect_path(rect: PixelRect, radii: CornerRadii, segments: u32) -> Vec<Offset> {
    let limit = (rect.width().min(rect.height()) / 2.0).max(0.0);
    let clamp = |r: f32| r.clamp(0.0, limit);

    // (arc center, radius, start angle) in screen space, y pointing down
    let corners = [
        (
            Offset::new(rect.min.x + clamp(radii.top_left), rect.min.y + clamp(radii.top_left)),
            clamp(radii.top_left),
            2.0 * FRAC_PI_2,
        ),
        (
            Offset::new(rect.max.x - clamp(radii.top_right), rect.min.y + clamp(radii.top_right)),
            clamp(radii.top_right),
            3.0 * FRAC_PI_2,
        ),
        (
            Offset::new(
                rect.max.x - clamp(radii.bottom_right),
                rect.max.y - clamp(radii.bottom_right),
            ),
            clamp(radii.bottom_right),
            0.0,
        ),
        (
            Offset::new(
                rect.min.x + clamp(radii.bottom_left),
                rect.max.y - clamp(radii.bottom_left),
            ),
            clamp(radii.bottom_left),
            FRAC_PI_2,
        ),
    ];

    let segments = segments.max(1);
    let mut path = Vec::with_capacity(corners.len() * (segments as usize + 1));

    for (center, radius, start) in corners {
        if radius <= 0.0 {
            path.push(center);
            continue;
        }

        for step in 0..=segments {
            let angle = start + FRAC_PI_2 * step as f32 / segments as f32;
            path.push(Offset::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            ));
        }
    }

    path
}
