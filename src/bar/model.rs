use plotters::style::{Color, RGBAColor, BLACK, RED, WHITE};

use super::renderer::{BarRenderer, RoundedBarRenderer};
use crate::axis::AxisModel;
use crate::geometry::{CornerRadii, Point};

/// Direction bars grow in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Vertical,
    /// Declared for completeness; rendering it is an error.
    Horizontal,
}

/// One bar: where it maps on the graph and its fill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarModel {
    pub point: Point,
    pub color: RGBAColor,
}

impl BarModel {
    pub fn new(point: impl Into<Point>) -> Self {
        Self {
            point: point.into(),
            color: RED.to_rgba(),
        }
    }

    pub fn color(mut self, color: impl Color) -> Self {
        self.color = color.to_rgba();
        self
    }
}

/// Whether bars are filled or outlined.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BarDrawStyle {
    #[default]
    Fill,
    Stroke { width: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarStyle {
    pub bar_width: f32,
    pub corner_radii: CornerRadii,
    pub padding_between_bars: f32,
    pub draw_style: BarDrawStyle,
}

impl Default for BarStyle {
    fn default() -> Self {
        Self {
            bar_width: 30.0,
            corner_radii: CornerRadii::same(4.0),
            padding_between_bars: 15.0,
            draw_style: BarDrawStyle::Fill,
        }
    }
}

impl BarStyle {
    /// Unzoomed distance between neighbouring bar centers.
    #[inline]
    pub fn step(&self) -> f32 {
        self.bar_width + self.padding_between_bars
    }
}

/// Everything a bar graph draws, plus the strategy that draws each bar.
#[derive(Debug, Clone)]
pub struct BarGraphModel<R = RoundedBarRenderer> {
    /// Bars in draw order.
    pub items: Vec<BarModel>,
    pub x_axis: AxisModel,
    pub y_axis: AxisModel,
    pub bar_style: BarStyle,
    /// Extra room added to the left of the scroll extent.
    pub horizontal_extra_space: f32,
    pub background_color: RGBAColor,
    pub orientation: Orientation,
    /// Masked strip at the right edge.
    pub right_padding: f32,
    /// Slack around a bar that still counts as a tap on it.
    pub tap_padding: f32,
    /// Outline of the selected bar.
    pub highlight_color: RGBAColor,
    pub renderer: R,
}

impl BarGraphModel {
    pub fn new(items: Vec<BarModel>, x_axis: AxisModel, y_axis: AxisModel) -> Self {
        Self {
            items,
            x_axis,
            y_axis,
            bar_style: BarStyle::default(),
            horizontal_extra_space: 0.0,
            background_color: WHITE.to_rgba(),
            orientation: Orientation::Vertical,
            right_padding: 16.0,
            tap_padding: 10.0,
            highlight_color: BLACK.mix(0.6),
            renderer: RoundedBarRenderer::default(),
        }
    }
}

impl<R: BarRenderer> BarGraphModel<R> {
    /// Swap the bar drawing strategy.
    pub fn with_renderer<T: BarRenderer>(self, renderer: T) -> BarGraphModel<T> {
        BarGraphModel {
            items: self.items,
            x_axis: self.x_axis,
            y_axis: self.y_axis,
            bar_style: self.bar_style,
            horizontal_extra_space: self.horizontal_extra_space,
            background_color: self.background_color,
            orientation: self.orientation,
            right_padding: self.right_padding,
            tap_padding: self.tap_padding,
            highlight_color: self.highlight_color,
            renderer,
        }
    }

    pub fn bar_style(mut self, style: BarStyle) -> Self {
        self.bar_style = style;
        self
    }

    pub fn horizontal_extra_space(mut self, space: f32) -> Self {
        self.horizontal_extra_space = space;
        self
    }

    pub fn background_color(mut self, color: impl Color) -> Self {
        self.background_color = color.to_rgba();
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn right_padding(mut self, padding: f32) -> Self {
        self.right_padding = padding;
        self
    }

    pub fn tap_padding(mut self, padding: f32) -> Self {
        self.tap_padding = padding;
        self
    }

    pub fn highlight_color(mut self, color: impl Color) -> Self {
        self.highlight_color = color.to_rgba();
        self
    }

    pub fn points(&self) -> Vec<Point> {
        self.items.iter().map(|item| item.point).collect()
    }
}
