//! Vertical bar graph composition.

use plotters::style::Color;
use tracing::{debug, trace};

use super::model::{BarGraphModel, Orientation};
use super::renderer::{bar_rect, BarRenderer};
use crate::axis::{
    draw_x_axis, draw_y_axis, layout_x_axis, layout_y_axis, y_axis_width, AxisModel, XAxisLayout,
    XAxisParams, YAxisLayout, YAxisParams,
};
use crate::canvas::{CanvasContent, CanvasState, CanvasView};
use crate::error::{GraphError, GraphResult};
use crate::geometry::{
    axis_min_max, draw_offset, is_hit, max_axis_value, max_scroll_distance, Axis, BarTransform,
    Offset, PixelRect, Point,
};
use crate::surface::Surface;

const HIGHLIGHT_WIDTH: u32 = 2;

/// Where one bar ended up on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedBar {
    pub index: usize,
    /// Top-left corner of the bar.
    pub offset: Offset,
    pub height: f32,
    pub rect: PixelRect,
}

impl PlacedBar {
    /// Center of the bar's top edge, the point taps are tested against.
    pub fn top_center(&self, bar_width: f32) -> Offset {
        Offset::new(self.offset.x + bar_width / 2.0, self.offset.y)
    }
}

/// Result of rendering one frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BarFrame {
    /// First bar in data order hit by the active tap.
    pub selected: Option<usize>,
    pub bars: Vec<PlacedBar>,
    pub x_axis: Option<XAxisLayout>,
    pub y_axis: Option<YAxisLayout>,
}

/// Axis gutters measured at the start of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct Gutters {
    /// Width of the y-axis column.
    column_width: f32,
    /// Height of the x-axis row.
    row_height: f32,
}

/// Draws a [`BarGraphModel`] with bars growing up from the x axis.
///
/// The x axis gets one step per bar, spaced by the bar width plus padding.
/// The y axis runs from zero up to the data maximum rounded to a whole
/// number of steps.
pub struct VerticalBarGraph<'a, R> {
    model: &'a BarGraphModel<R>,
    points: Vec<Point>,
    x_axis: AxisModel,
    y_axis: AxisModel,
    gutters: Gutters,
}

impl<'a, R: BarRenderer> VerticalBarGraph<'a, R> {
    pub fn new(model: &'a BarGraphModel<R>) -> Self {
        let steps = model.items.len().saturating_sub(1).max(1) as u32;
        let x_axis = model
            .x_axis
            .with_step_size(model.bar_style.step())
            .with_steps(steps);

        Self {
            model,
            points: model.points(),
            x_axis,
            y_axis: model.y_axis.clone(),
            gutters: Gutters::default(),
        }
    }

    /// Render one frame onto `surface` using and updating `state`.
    pub fn render<S: Surface>(&mut self, surface: &mut S, state: &mut CanvasState) -> GraphResult<BarFrame> {
        state.frame(surface, self)
    }

    fn ensure_vertical(&self) -> GraphResult<()> {
        match self.model.orientation {
            Orientation::Vertical => Ok(()),
            other => Err(GraphError::UnsupportedOrientation(other)),
        }
    }

    fn x_params(&self, canvas_width: f32, top: f32, view: CanvasView) -> XAxisParams {
        XAxisParams {
            x_start: self.gutters.column_width,
            axis_start: self.gutters.column_width,
            top,
            canvas_width,
            scroll_offset: view.scroll_offset,
            zoom_scale: view.zoom_scale,
        }
    }

    /// Pixel transform for the bars at `view`.
    fn transform<S: Surface>(&self, surface: &S, view: CanvasView) -> GraphResult<BarTransform> {
        let (_, height) = surface.logical_size();
        let (x_min, _) = axis_min_max(&self.points, Axis::X);
        let (_, y_max) = axis_min_max(&self.points, Axis::Y);

        let baseline = height - self.gutters.row_height;
        let max_element = max_axis_value(y_max, self.y_axis.steps)?;
        let y_step_pixels = if max_element == 0 {
            0.0
        } else {
            (baseline - self.y_axis.top_padding) / max_element as f32
        };

        Ok(BarTransform {
            x_min,
            y_min: 0.0,
            x_step_pixels: self.model.bar_style.step() * view.zoom_scale,
            y_step_pixels,
            x_left_padding: self.gutters.column_width,
            first_item_offset: self.x_axis.first_item_offset,
            zoom_scale: view.zoom_scale,
            scroll_offset: view.scroll_offset,
            bar_width: self.model.bar_style.bar_width,
            baseline,
        })
    }

    /// Opaque strips under the y axis and along the right edge so scrolled
    /// bars disappear beneath them.
    fn draw_scroll_mask<S: Surface>(&self, surface: &mut S) -> GraphResult<()> {
        let (width, height) = surface.logical_size();
        let style = self.model.background_color.filled();

        for strip in [
            PixelRect::from_origin_size(Offset::default(), self.gutters.column_width, height),
            PixelRect::from_origin_size(
                Offset::new(width - self.model.right_padding, 0.0),
                self.model.right_padding,
                height,
            ),
        ] {
            let (upper_left, bottom_right) = strip.to_backend();
            surface.draw_rect(upper_left, bottom_right, &style, true)?;
        }

        Ok(())
    }
}

impl<R: BarRenderer, S: Surface> CanvasContent<S> for VerticalBarGraph<'_, R> {
    type Output = BarFrame;

    fn max_scroll_distance(&mut self, surface: &S, zoom_scale: f32) -> GraphResult<f32> {
        self.ensure_vertical()?;

        let (width, _) = surface.logical_size();
        let column_width = y_axis_width(surface, &self.y_axis, zoom_scale)?;
        self.gutters.column_width = column_width;

        let view = CanvasView {
            scroll_offset: 0.0,
            zoom_scale,
            tap: None,
        };
        let row = layout_x_axis(surface, &self.x_axis, &self.points, &self.x_params(width, 0.0, view))?;
        self.gutters.row_height = row.height;
        self.y_axis = self.model.y_axis.with_bottom_padding(row.height);

        let (x_min, x_max) = axis_min_max(&self.points, Axis::X);
        let x_left = self.x_axis.first_item_offset * zoom_scale + self.model.horizontal_extra_space;

        Ok(max_scroll_distance(
            column_width,
            x_max,
            x_min,
            self.model.bar_style.step() * zoom_scale,
            x_left,
            self.model.right_padding,
            width,
        ))
    }

    fn draw(&mut self, surface: &mut S, view: CanvasView) -> GraphResult<BarFrame> {
        self.ensure_vertical()?;

        let transform = self.transform(&*surface, view)?;
        let style = &self.model.bar_style;
        trace!(
            bars = self.model.items.len(),
            scroll = view.scroll_offset,
            zoom = view.zoom_scale,
            "drawing bar graph"
        );

        let mut frame = BarFrame::default();
        for (index, item) in self.model.items.iter().enumerate() {
            let offset = draw_offset(item.point, &transform);
            let height = transform.baseline - offset.y;

            self.model
                .renderer
                .draw_bar(surface, item, offset, height, Orientation::Vertical, style)?;

            let placed = PlacedBar {
                index,
                offset,
                height,
                rect: bar_rect(offset, height, Orientation::Vertical, style),
            };

            if frame.selected.is_none()
                && view.tap.is_some_and(|tap| {
                    is_hit(
                        placed.top_center(style.bar_width),
                        tap.position,
                        style.bar_width,
                        transform.baseline,
                        self.model.tap_padding,
                    )
                })
            {
                debug!(index, x = item.point.x, y = item.point.y, "bar tapped");
                frame.selected = Some(index);
            }

            frame.bars.push(placed);
        }

        if let Some(placed) = frame.selected.and_then(|index| frame.bars.get(index)) {
            let (upper_left, bottom_right) = placed.rect.to_backend();
            let outline = self.model.highlight_color.stroke_width(HIGHLIGHT_WIDTH);
            surface.draw_rect(upper_left, bottom_right, &outline, false)?;
        }

        self.draw_scroll_mask(surface)?;

        Ok(frame)
    }

    fn draw_axes(&mut self, surface: &mut S, view: CanvasView, frame: &mut BarFrame) -> GraphResult<()> {
        let (width, height) = surface.logical_size();
        let baseline = height - self.gutters.row_height;

        let x_layout = layout_x_axis(
            &*surface,
            &self.x_axis,
            &self.points,
            &self.x_params(width, baseline, view),
        )?;
        let clip = PixelRect::from_origin_size(
            Offset::new(self.gutters.column_width, 0.0),
            width - self.gutters.column_width - self.model.right_padding,
            height,
        );
        draw_x_axis(surface, &self.x_axis, &x_layout, Some(clip))?;

        let y_layout = layout_y_axis(
            &*surface,
            &self.y_axis,
            &self.points,
            &YAxisParams {
                canvas_height: height,
                y_start: 0.0,
                scroll_offset: view.scroll_offset,
                zoom_scale: view.zoom_scale,
                data_category_width: 0.0,
                bar_width: self.model.bar_style.bar_width,
            },
        )?;
        draw_y_axis(surface, &self.y_axis, &y_layout)?;

        frame.x_axis = Some(x_layout);
        frame.y_axis = Some(y_layout);

        Ok(())
    }
}
