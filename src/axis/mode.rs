//! Tick placement rules for the four data orientations.

use super::model::DataOptions;

/// Which axis carries the data categories and in which direction ticks run.
///
/// The x axis steps right from its start in every mode; the modes differ in
/// which index feeds the label formatter and in how the y axis walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisLayoutMode {
    /// Categories along x, value ticks rise from the baseline.
    #[default]
    CategoriesOnXValuesUp,
    /// Categories along x, value ticks run down from the top padding.
    CategoriesOnXValuesDown,
    /// Categories along y, the first one sits at the bottom and the axis
    /// scrolls with the data.
    CategoriesOnYFromBottom,
    /// Categories along y, the first one sits at the top. Zooming out below
    /// `1.0` falls back to bottom-up placement with reversed labels.
    CategoriesOnYFromTop,
}

impl From<DataOptions> for AxisLayoutMode {
    fn from(options: DataOptions) -> Self {
        match (options.is_data_in_y_axis, options.is_zero_at_bottom) {
            (false, true) => Self::CategoriesOnXValuesUp,
            (false, false) => Self::CategoriesOnXValuesDown,
            (true, true) => Self::CategoriesOnYFromBottom,
            (true, false) => Self::CategoriesOnYFromTop,
        }
    }
}

impl From<AxisLayoutMode> for DataOptions {
    fn from(mode: AxisLayoutMode) -> Self {
        DataOptions {
            is_data_in_y_axis: mode.is_data_in_y_axis(),
            is_zero_at_bottom: mode.is_zero_at_bottom(),
        }
    }
}

impl AxisLayoutMode {
    #[inline]
    pub fn is_data_in_y_axis(self) -> bool {
        matches!(
            self,
            Self::CategoriesOnYFromBottom | Self::CategoriesOnYFromTop
        )
    }

    #[inline]
    pub fn is_zero_at_bottom(self) -> bool {
        matches!(
            self,
            Self::CategoriesOnXValuesUp | Self::CategoriesOnYFromBottom
        )
    }

    /// Top-down walk of the y axis; only applies while not zoomed out.
    #[inline]
    fn walks_down(self, zoom_scale: f32) -> bool {
        self == Self::CategoriesOnYFromTop && zoom_scale >= 1.0
    }

    /// Index passed to the x-axis label formatter for tick `index`.
    pub fn x_label_index(self, index: usize, scale: f32) -> usize {
        if self.is_data_in_y_axis() {
            index
        } else {
            (index as f32 * scale) as usize
        }
    }

    /// Horizontal center of the x-axis label for tick `index`.
    pub fn x_label_center(self, index: usize, x_pos: f32, x_start: f32, value_width: f32) -> f32 {
        if self.is_data_in_y_axis() {
            x_start + value_width * index as f32
        } else {
            x_pos
        }
    }

    /// Start and end x of the axis line drawn after tick `index`.
    #[allow(clippy::too_many_arguments)]
    pub fn x_segment(
        self,
        index: usize,
        x_pos: f32,
        x_start: f32,
        step_pixels: f32,
        first_item_offset: f32,
        value_width: f32,
        full_width: bool,
    ) -> (f32, f32) {
        let start = if self.is_data_in_y_axis() {
            x_start
        } else {
            x_start + first_item_offset
        };

        let end = if full_width {
            x_pos + step_pixels / 2.0 + step_pixels + first_item_offset
        } else if self.is_data_in_y_axis() {
            x_start + value_width * (index + 1) as f32
        } else {
            x_pos + step_pixels
        };

        (start, end)
    }

    /// y of the first tick before any stepping.
    pub fn y_start(self, axis_height: f32, y_start: f32, scroll_offset: f32, zoom_scale: f32) -> f32 {
        if self.walks_down(zoom_scale) {
            y_start - scroll_offset
        } else {
            axis_height - y_start + scroll_offset
        }
    }

    /// Signed pixel distance between consecutive ticks on the y axis.
    pub fn y_step(self, step_pixels: f32, zoom_scale: f32) -> f32 {
        if self.walks_down(zoom_scale) {
            step_pixels
        } else {
            -step_pixels
        }
    }

    /// Index passed to the y-axis label formatter for tick `index`.
    pub fn y_label_index(self, index: usize, last_index: usize, zoom_scale: f32) -> usize {
        if self == Self::CategoriesOnYFromTop && zoom_scale < 1.0 {
            last_index - index
        } else {
            index
        }
    }

    /// y of tick `index`. `y_pos` is the walked position, used only when
    /// categories are on the y axis.
    pub fn y_tick_position(
        self,
        index: usize,
        y_pos: f32,
        axis_height: f32,
        top_padding: f32,
        segment_height: f32,
    ) -> f32 {
        match self {
            Self::CategoriesOnXValuesUp => axis_height - segment_height * index as f32,
            Self::CategoriesOnXValuesDown => top_padding + segment_height * index as f32,
            Self::CategoriesOnYFromBottom | Self::CategoriesOnYFromTop => y_pos,
        }
    }

    /// Start and end y of the axis line drawn after tick `index` when
    /// categories are on the y axis. `first_item_offset` is already zoomed.
    pub fn y_category_segment(
        self,
        y_pos: f32,
        step_pixels: f32,
        bar_width: f32,
        first_item_offset: f32,
        zoom_scale: f32,
        full_width: bool,
    ) -> (f32, f32) {
        let lead = if full_width { bar_width / 2.0 } else { 0.0 };

        if self.walks_down(zoom_scale) {
            let start = if full_width {
                y_pos - step_pixels / 2.0
            } else {
                y_pos
            };
            (start, y_pos + step_pixels + lead + first_item_offset)
        } else {
            (y_pos, y_pos - step_pixels - lead)
        }
    }
}
