//! Axis description and its builder.

use std::fmt;
use std::sync::Arc;

use plotters::style::{
    Color, FontDesc, FontFamily, FontStyle, FontTransform, RGBAColor, ShapeStyle, TextStyle,
    BLACK, TRANSPARENT,
};
use plotters_backend::text_anchor::{HPos, Pos, VPos};

use super::mode::AxisLayoutMode;

/// Produces the label for a tick index.
pub type LabelFormatter = Arc<dyn Fn(usize) -> String + Send + Sync>;

/// Where a label that is too wide gets cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ellipsize {
    Start,
    Middle,
    #[default]
    End,
}

/// Label overflow policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisConfig {
    /// Width a y-axis label may take before it gets ellipsized.
    pub min_text_width_to_ellipsize: f32,
    pub should_ellipsize: bool,
    pub ellipsize_at: Ellipsize,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            min_text_width_to_ellipsize: 40.0,
            should_ellipsize: false,
            ellipsize_at: Ellipsize::End,
        }
    }
}

/// Which axis carries the data categories and where counting starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataOptions {
    pub is_data_in_y_axis: bool,
    pub is_zero_at_bottom: bool,
}

impl Default for DataOptions {
    fn default() -> Self {
        Self {
            is_data_in_y_axis: false,
            is_zero_at_bottom: true,
        }
    }
}

/// Everything needed to lay out and draw one axis. Sizes are egui points.
///
/// Build one with [`AxisModel::builder`]. Per-render adjustments go through
/// the `with_*` methods, which return a modified copy.
#[derive(Clone)]
pub struct AxisModel {
    /// Number of steps; ticks are drawn for `0..=steps`.
    pub steps: u32,
    /// Extra y-axis width after the label padding.
    pub axis_offset: f32,
    /// Gap between the axis line and its labels.
    pub label_padding: f32,
    /// Unzoomed pixel size of one step.
    pub axis_step_size: f32,
    pub axis_color: RGBAColor,
    pub label_color: RGBAColor,
    pub label_rotation: FontTransform,
    pub axis_thickness: f32,
    pub top_padding: f32,
    pub end_padding: f32,
    pub font_family: String,
    /// Gap between the axis origin and the first item, scaled by zoom.
    pub first_item_offset: f32,
    pub start_padding: f32,
    /// Length of the tick marker lines.
    pub label_marker_width: f32,
    pub bottom_padding: f32,
    pub background_color: RGBAColor,
    pub axis_config: AxisConfig,
    pub label_font_size: f32,
    pub layout_mode: AxisLayoutMode,
    pub label_data: LabelFormatter,
    /// Extend the axis line past the last tick.
    pub axis_occupies_full_width: bool,
}

impl fmt::Debug for AxisModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AxisModel")
            .field("steps", &self.steps)
            .field("axis_step_size", &self.axis_step_size)
            .field("first_item_offset", &self.first_item_offset)
            .field("layout_mode", &self.layout_mode)
            .field("axis_occupies_full_width", &self.axis_occupies_full_width)
            .finish_non_exhaustive()
    }
}

impl Default for AxisModel {
    fn default() -> Self {
        Self {
            steps: 1,
            axis_offset: 20.0,
            label_padding: 20.0,
            axis_step_size: 30.0,
            axis_color: BLACK.to_rgba(),
            label_color: BLACK.to_rgba(),
            label_rotation: FontTransform::None,
            axis_thickness: 2.0,
            top_padding: 20.0,
            end_padding: 20.0,
            font_family: "sans-serif".to_string(),
            first_item_offset: 0.0,
            start_padding: 10.0,
            label_marker_width: 5.0,
            bottom_padding: 10.0,
            background_color: TRANSPARENT,
            axis_config: AxisConfig::default(),
            label_font_size: 14.0,
            layout_mode: AxisLayoutMode::default(),
            label_data: Arc::new(|_| String::new()),
            axis_occupies_full_width: false,
        }
    }
}

impl AxisModel {
    pub fn builder() -> AxisModelBuilder {
        AxisModelBuilder::default()
    }

    /// Label for tick `index`.
    #[inline]
    pub fn label(&self, index: usize) -> String {
        (self.label_data)(index)
    }

    pub fn with_steps(&self, steps: u32) -> Self {
        Self {
            steps,
            ..self.clone()
        }
    }

    pub fn with_step_size(&self, axis_step_size: f32) -> Self {
        Self {
            axis_step_size,
            ..self.clone()
        }
    }

    pub fn with_bottom_padding(&self, bottom_padding: f32) -> Self {
        Self {
            bottom_padding,
            ..self.clone()
        }
    }

    pub(crate) fn label_style(&self) -> TextStyle<'_> {
        let font = FontDesc::new(
            FontFamily::from(self.font_family.as_str()),
            self.label_font_size as f64,
            FontStyle::Normal,
        )
        .transform(self.label_rotation.clone());

        TextStyle::from(font)
            .color(&self.label_color)
            .pos(Pos::new(HPos::Left, VPos::Top))
    }

    pub(crate) fn line_style(&self) -> ShapeStyle {
        ShapeStyle {
            color: self.axis_color,
            filled: false,
            stroke_width: self.axis_thickness.round().max(1.0) as u32,
        }
    }

    pub(crate) fn background_style(&self) -> Option<ShapeStyle> {
        (self.background_color.3 > 0.0).then(|| self.background_color.filled())
    }
}

/// Accumulates axis options; every option has a default.
#[derive(Default)]
pub struct AxisModelBuilder {
    model: AxisModel,
}

impl AxisModelBuilder {
    pub fn steps(mut self, count: u32) -> Self {
        self.model.steps = count;
        self
    }

    pub fn axis_offset(mut self, offset: f32) -> Self {
        self.model.axis_offset = offset;
        self
    }

    pub fn axis_step_size(mut self, size: f32) -> Self {
        self.model.axis_step_size = size;
        self
    }

    pub fn label_color(mut self, color: impl Color) -> Self {
        self.model.label_color = color.to_rgba();
        self
    }

    pub fn label_rotation(mut self, rotation: FontTransform) -> Self {
        self.model.label_rotation = rotation;
        self
    }

    pub fn top_padding(mut self, padding: f32) -> Self {
        self.model.top_padding = padding;
        self
    }

    pub fn end_padding(mut self, padding: f32) -> Self {
        self.model.end_padding = padding;
        self
    }

    pub fn label_padding(mut self, padding: f32) -> Self {
        self.model.label_padding = padding;
        self
    }

    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.model.font_family = family.into();
        self
    }

    pub fn axis_color(mut self, color: impl Color) -> Self {
        self.model.axis_color = color.to_rgba();
        self
    }

    pub fn axis_config(mut self, config: AxisConfig) -> Self {
        self.model.axis_config = config;
        self
    }

    pub fn label_marker_width(mut self, width: f32) -> Self {
        self.model.label_marker_width = width;
        self
    }

    pub fn start_padding(mut self, padding: f32) -> Self {
        self.model.start_padding = padding;
        self
    }

    pub fn first_item_offset(mut self, offset: f32) -> Self {
        self.model.first_item_offset = offset;
        self
    }

    pub fn background_color(mut self, color: impl Color) -> Self {
        self.model.background_color = color.to_rgba();
        self
    }

    pub fn bottom_padding(mut self, padding: f32) -> Self {
        self.model.bottom_padding = padding;
        self
    }

    pub fn axis_thickness(mut self, thickness: f32) -> Self {
        self.model.axis_thickness = thickness;
        self
    }

    pub fn label_font_size(mut self, font_size: f32) -> Self {
        self.model.label_font_size = font_size;
        self
    }

    pub fn label_data<F>(mut self, label_data: F) -> Self
    where
        F: Fn(usize) -> String + Send + Sync + 'static,
    {
        self.model.label_data = Arc::new(label_data);
        self
    }

    pub fn axis_occupies_full_width(mut self, flag: bool) -> Self {
        self.model.axis_occupies_full_width = flag;
        self
    }

    pub fn data_options(mut self, options: DataOptions) -> Self {
        self.model.layout_mode = options.into();
        self
    }

    pub fn layout_mode(mut self, mode: AxisLayoutMode) -> Self {
        self.model.layout_mode = mode;
        self
    }

    pub fn build(self) -> AxisModel {
        self.model
    }
}
