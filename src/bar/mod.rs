//! Bar graph models, renderers and widgets.

mod model;
mod renderer;
mod vertical;
mod widget;

pub use model::{BarDrawStyle, BarGraphModel, BarModel, BarStyle, Orientation};
pub use renderer::{bar_rect, BarRenderer, RoundedBarRenderer};
pub use vertical::{BarFrame, PlacedBar, VerticalBarGraph};
pub use widget::{BarGraph, BarGraphResponse};
