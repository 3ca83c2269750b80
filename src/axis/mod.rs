//! Axis models, tick layout and axis drawing.

mod draw;
mod label;
mod layout;
mod mode;
mod model;

pub use draw::{draw_x_axis, draw_y_axis};
pub use label::{ellipsize, measure_label, MeasuredLabel};
pub use layout::{
    layout_x_axis, layout_y_axis, y_axis_width, AxisSegment, AxisTick, XAxisLayout, XAxisParams,
    YAxisLayout, YAxisParams,
};
pub use mode::AxisLayoutMode;
pub use model::{AxisConfig, AxisModel, AxisModelBuilder, DataOptions, Ellipsize, LabelFormatter};
