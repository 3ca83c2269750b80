#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

pub mod axis;
mod backend;
pub mod bar;
pub mod canvas;
mod error;
pub mod geometry;
mod recording;
mod surface;

pub use axis::{AxisConfig, AxisLayoutMode, AxisModel, AxisModelBuilder, DataOptions, Ellipsize};
pub use backend::{EguiBackend, EguiBackendError};
pub use bar::{
    BarDrawStyle, BarFrame, BarGraph, BarGraphModel, BarGraphResponse, BarModel, BarRenderer,
    BarStyle, Orientation, RoundedBarRenderer, VerticalBarGraph,
};
pub use canvas::{CanvasContent, CanvasState, CanvasView, InteractionMode, ScrollableCanvas, TapEvent};
pub use error::{GraphError, GraphResult};
pub use geometry::{CornerRadii, Offset, PixelRect, Point};
pub use recording::{DrawCall, RecordedColor, RecordingSurface};
pub use surface::{measure_text, Surface};
