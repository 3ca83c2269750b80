//! Tick positions, labels and gutter sizes for the x and y axis.

use super::label::{measure_label, MeasuredLabel};
use super::model::AxisModel;
use crate::error::GraphResult;
use crate::geometry::{axis_scale, Axis, Offset, Point};
use crate::surface::Surface;

/// A straight axis line or tick marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisSegment {
    pub from: Offset,
    pub to: Offset,
}

impl AxisSegment {
    #[inline]
    pub fn new(from: Offset, to: Offset) -> Self {
        Self { from, to }
    }
}

/// One labeled graduation.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub index: usize,
    /// Pixel position along the axis.
    pub position: f32,
    pub label: MeasuredLabel,
    /// Top-left corner of the label.
    pub label_origin: Offset,
}

/// Inputs for laying out the x axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XAxisParams {
    /// x where the plotting area begins, usually the y-axis width.
    pub x_start: f32,
    /// x where the lead-in line before the first item begins.
    pub axis_start: f32,
    /// y of the axis line.
    pub top: f32,
    pub canvas_width: f32,
    pub scroll_offset: f32,
    pub zoom_scale: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct XAxisLayout {
    pub top: f32,
    /// Height the axis row needs so no label is clipped.
    pub height: f32,
    pub ticks: Vec<AxisTick>,
    pub lines: Vec<AxisSegment>,
    pub markers: Vec<AxisSegment>,
}

/// Height of the x-axis row for labels of at most `label_height`.
#[inline]
fn x_axis_height(axis: &AxisModel, label_height: f32) -> f32 {
    label_height
        + axis.axis_thickness
        + axis.label_marker_width
        + axis.label_padding
        + axis.bottom_padding
}

pub fn layout_x_axis<S: Surface>(
    surface: &S,
    axis: &AxisModel,
    points: &[Point],
    params: &XAxisParams,
) -> GraphResult<XAxisLayout> {
    let scale = axis_scale(points, Axis::X, axis.steps)?.scale;
    let mode = axis.layout_mode;
    let zoom = params.zoom_scale;

    // category width when the values live on the x axis
    let value_width =
        (params.canvas_width - params.x_start - axis.end_padding) / axis.steps as f32;
    let step_pixels = axis.axis_step_size * zoom * scale;
    let first_item_offset = axis.first_item_offset * zoom;
    let top = params.top;

    let mut x_pos = params.x_start + first_item_offset - params.scroll_offset;
    let mut ticks = Vec::with_capacity(axis.steps as usize + 1);
    let mut lines = Vec::with_capacity(axis.steps as usize + 1);
    let mut markers = Vec::with_capacity(axis.steps as usize + 1);

    if axis.first_item_offset != 0.0 {
        lines.push(AxisSegment::new(
            Offset::new(params.axis_start, top),
            Offset::new(params.x_start + first_item_offset, top),
        ));
    }

    let mut label_height: f32 = 0.0;
    for index in 0..=axis.steps as usize {
        let label = measure_label(
            surface,
            axis,
            mode.x_label_index(index, scale),
            axis.axis_step_size * zoom,
        )?;
        label_height = label_height.max(label.height);

        let center = mode.x_label_center(index, x_pos, params.x_start, value_width);
        let label_origin = Offset::new(
            center - label.width / 2.0,
            top + axis.label_marker_width + axis.label_padding - label.height / 2.0,
        );

        if index != axis.steps as usize {
            let (start, end) = mode.x_segment(
                index,
                x_pos,
                params.x_start,
                step_pixels,
                first_item_offset,
                value_width,
                axis.axis_occupies_full_width,
            );
            lines.push(AxisSegment::new(Offset::new(start, top), Offset::new(end, top)));
        }

        markers.push(AxisSegment::new(
            Offset::new(x_pos, top),
            Offset::new(x_pos, top + axis.label_marker_width),
        ));

        ticks.push(AxisTick {
            index,
            position: x_pos,
            label,
            label_origin,
        });

        x_pos += step_pixels;
    }

    Ok(XAxisLayout {
        top,
        height: x_axis_height(axis, label_height),
        ticks,
        lines,
        markers,
    })
}

/// Inputs for laying out the y axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YAxisParams {
    pub canvas_height: f32,
    /// Distance of the first category from the axis origin.
    pub y_start: f32,
    pub scroll_offset: f32,
    pub zoom_scale: f32,
    /// Spacing between categories when they live on the y axis.
    pub data_category_width: f32,
    pub bar_width: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct YAxisLayout {
    /// Width the axis column needs so no label is clipped.
    pub width: f32,
    /// y of the axis origin.
    pub axis_height: f32,
    pub segment_height: f32,
    pub ticks: Vec<AxisTick>,
    pub lines: Vec<AxisSegment>,
    pub markers: Vec<AxisSegment>,
}

/// Labels of every y tick, in tick order, with the column width they need.
fn y_axis_labels<S: Surface>(
    surface: &S,
    axis: &AxisModel,
    zoom_scale: f32,
) -> GraphResult<(Vec<MeasuredLabel>, f32)> {
    let last = axis.steps as usize;
    let available = axis.axis_config.min_text_width_to_ellipsize;

    let mut width: f32 = 0.0;
    let labels = (0..=last)
        .map(|index| {
            let label_index = axis.layout_mode.y_label_index(index, last, zoom_scale);
            let label = measure_label(surface, axis, label_index, available)?;
            width = width.max(label.width + axis.label_padding + axis.axis_offset);
            Ok(label)
        })
        .collect::<GraphResult<Vec<_>>>()?;

    Ok((labels, width))
}

/// Width of the y-axis column without laying out ticks.
pub fn y_axis_width<S: Surface>(surface: &S, axis: &AxisModel, zoom_scale: f32) -> GraphResult<f32> {
    y_axis_labels(surface, axis, zoom_scale).map(|(_, width)| width)
}

pub fn layout_y_axis<S: Surface>(
    surface: &S,
    axis: &AxisModel,
    points: &[Point],
    params: &YAxisParams,
) -> GraphResult<YAxisLayout> {
    let scale = axis_scale(points, Axis::Y, axis.steps)?.scale;
    let mode = axis.layout_mode;
    let zoom = params.zoom_scale;
    let last = axis.steps as usize;

    let axis_height = params.canvas_height - axis.bottom_padding;
    let segment_height = if mode.is_data_in_y_axis() {
        params.data_category_width
    } else {
        (axis_height - axis.top_padding) / axis.steps as f32
    };
    let step_pixels = axis.axis_step_size * zoom * scale;
    let y_step = mode.y_step(step_pixels, zoom);

    let (labels, width) = y_axis_labels(surface, axis, zoom)?;

    let mut y_pos = mode.y_start(axis_height, params.y_start, params.scroll_offset, zoom);
    let mut ticks = Vec::with_capacity(labels.len());
    let mut lines = Vec::with_capacity(labels.len());
    let mut markers = Vec::with_capacity(labels.len());

    if mode.is_data_in_y_axis() && axis.first_item_offset != 0.0 {
        lines.push(AxisSegment::new(
            Offset::new(width, axis_height - axis.first_item_offset * zoom),
            Offset::new(width, axis_height),
        ));
    }

    let tick_at = |index: usize, y_pos: f32| {
        mode.y_tick_position(index, y_pos, axis_height, axis.top_padding, segment_height)
    };

    for (index, label) in labels.into_iter().enumerate() {
        let position = tick_at(index, y_pos);

        if index != last {
            let (start, end) = if mode.is_data_in_y_axis() {
                mode.y_category_segment(
                    y_pos,
                    step_pixels,
                    params.bar_width,
                    axis.first_item_offset * zoom,
                    zoom,
                    axis.axis_occupies_full_width,
                )
            } else {
                (position, tick_at(index + 1, y_pos))
            };
            lines.push(AxisSegment::new(Offset::new(width, start), Offset::new(width, end)));

            markers.push(AxisSegment::new(
                Offset::new(width - axis.label_marker_width, position),
                Offset::new(width, position),
            ));
        }

        ticks.push(AxisTick {
            index,
            position,
            label_origin: Offset::new(axis.start_padding, position - label.height / 2.0),
            label,
        });

        y_pos += y_step;
    }

    Ok(YAxisLayout {
        width,
        axis_height,
        segment_height,
        ticks,
        lines,
        markers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::AxisLayoutMode;
    use crate::error::GraphError;
    use crate::recording::RecordingSurface;

    fn points() -> Vec<Point> {
        (0..5).map(|i| Point::new(i as f32, (i * 2) as f32)).collect()
    }

    fn x_params() -> XAxisParams {
        XAxisParams {
            x_start: 50.0,
            axis_start: 50.0,
            top: 260.0,
            canvas_width: 400.0,
            scroll_offset: 0.0,
            zoom_scale: 1.0,
        }
    }

    #[test]
    fn x_ticks_step_with_zoom_and_scroll() {
        let surface = RecordingSurface::new(400, 300);
        let axis = AxisModel::builder()
            .steps(4)
            .axis_step_size(65.0)
            .first_item_offset(40.0)
            .label_font_size(10.0)
            .label_data(|i| format!("T{i}"))
            .build();

        let layout = layout_x_axis(
            &surface,
            &axis,
            &points(),
            &XAxisParams {
                scroll_offset: 30.0,
                zoom_scale: 2.0,
                ..x_params()
            },
        )
        .unwrap();

        let positions: Vec<f32> = layout.ticks.iter().map(|tick| tick.position).collect();
        // 50 + 40 * 2 - 30, then 65 * 2 per step
        assert_eq!(positions, vec![100.0, 230.0, 360.0, 490.0, 620.0]);
        assert_eq!(layout.ticks[2].label.text, "T2");
        assert_eq!(layout.ticks[2].label_origin.x, 230.0 - 6.0);
        assert_eq!(layout.markers.len(), 5);
        // lead-in plus one line per step
        assert_eq!(layout.lines.len(), 5);
    }

    #[test]
    fn x_axis_height_adds_paddings_to_tallest_label() {
        let surface = RecordingSurface::new(400, 300);
        let axis = AxisModel::builder()
            .steps(4)
            .label_font_size(12.0)
            .label_data(|i| i.to_string())
            .build();

        let layout = layout_x_axis(&surface, &axis, &points(), &x_params()).unwrap();
        // 12 + 2 + 5 + 20 + 10
        assert_eq!(layout.height, 49.0);
    }

    #[test]
    fn x_labels_use_scaled_index() {
        let surface = RecordingSurface::new(400, 300);
        let wide: Vec<Point> = (0..9).map(|i| Point::new(i as f32, 1.0)).collect();
        let axis = AxisModel::builder()
            .steps(4)
            .label_data(|i| format!("#{i}"))
            .build();

        let layout = layout_x_axis(&surface, &axis, &wide, &x_params()).unwrap();
        let labels: Vec<&str> = layout.ticks.iter().map(|t| t.label.text.as_str()).collect();
        assert_eq!(labels, vec!["#0", "#2", "#4", "#6", "#8"]);
    }

    #[test]
    fn zero_steps_fail_fast() {
        let surface = RecordingSurface::new(400, 300);
        let axis = AxisModel::builder().steps(0).build();

        let err = layout_x_axis(&surface, &axis, &points(), &x_params()).unwrap_err();
        assert!(matches!(err, GraphError::InvalidAxisConfig(_)));
    }

    fn y_params() -> YAxisParams {
        YAxisParams {
            canvas_height: 300.0,
            y_start: 0.0,
            scroll_offset: 0.0,
            zoom_scale: 1.0,
            data_category_width: 0.0,
            bar_width: 0.0,
        }
    }

    #[test]
    fn y_ticks_rise_from_baseline() {
        let surface = RecordingSurface::new(400, 300);
        let axis = AxisModel::builder()
            .steps(5)
            .bottom_padding(40.0)
            .label_font_size(10.0)
            .label_data(|i| (i * 20).to_string())
            .build();

        let layout = layout_y_axis(&surface, &axis, &points(), &y_params()).unwrap();

        assert_eq!(layout.axis_height, 260.0);
        assert_eq!(layout.segment_height, 48.0);
        let positions: Vec<f32> = layout.ticks.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![260.0, 212.0, 164.0, 116.0, 68.0, 20.0]);
        let labels: Vec<&str> = layout.ticks.iter().map(|t| t.label.text.as_str()).collect();
        assert_eq!(labels, vec!["0", "20", "40", "60", "80", "100"]);
        // widest label "100" = 18 + 20 + 20
        assert_eq!(layout.width, 58.0);
        assert_eq!(layout.lines.len(), 5);
        assert_eq!(layout.markers.len(), 5);
        assert_eq!(layout.lines[0].from, Offset::new(58.0, 260.0));
        assert_eq!(layout.lines[0].to, Offset::new(58.0, 212.0));
    }

    #[test]
    fn y_ticks_descend_from_top_when_values_down() {
        let surface = RecordingSurface::new(400, 300);
        let axis = AxisModel::builder()
            .steps(2)
            .bottom_padding(40.0)
            .layout_mode(AxisLayoutMode::CategoriesOnXValuesDown)
            .build();

        let layout = layout_y_axis(&surface, &axis, &points(), &y_params()).unwrap();
        let positions: Vec<f32> = layout.ticks.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![20.0, 140.0, 260.0]);
    }

    #[test]
    fn y_categories_follow_scroll() {
        let surface = RecordingSurface::new(400, 300);
        let axis = AxisModel::builder()
            .steps(2)
            .axis_step_size(30.0)
            .bottom_padding(0.0)
            .layout_mode(AxisLayoutMode::CategoriesOnYFromBottom)
            .label_data(|i| format!("c{i}"))
            .build();
        let points: Vec<Point> = (0..3).map(|i| Point::new(1.0, i as f32)).collect();

        let layout = layout_y_axis(
            &surface,
            &axis,
            &points,
            &YAxisParams {
                scroll_offset: 10.0,
                ..y_params()
            },
        )
        .unwrap();

        let positions: Vec<f32> = layout.ticks.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![310.0, 280.0, 250.0]);
    }

    #[test]
    fn y_labels_reverse_when_top_down_and_zoomed_out() {
        let surface = RecordingSurface::new(400, 300);
        let axis = AxisModel::builder()
            .steps(2)
            .layout_mode(AxisLayoutMode::CategoriesOnYFromTop)
            .label_data(|i| format!("c{i}"))
            .build();

        let layout = layout_y_axis(
            &surface,
            &axis,
            &points(),
            &YAxisParams {
                zoom_scale: 0.5,
                ..y_params()
            },
        )
        .unwrap();

        let labels: Vec<&str> = layout.ticks.iter().map(|t| t.label.text.as_str()).collect();
        assert_eq!(labels, vec!["c2", "c1", "c0"]);
    }

    #[test]
    fn y_width_matches_layout() {
        let surface = RecordingSurface::new(400, 300);
        let axis = AxisModel::builder()
            .steps(3)
            .label_data(|i| "x".repeat(i + 1))
            .build();

        let layout = layout_y_axis(&surface, &axis, &points(), &y_params()).unwrap();
        assert_eq!(y_axis_width(&surface, &axis, 1.0).unwrap(), layout.width);
    }
}
