//! Scroll, zoom and tap handling shared by all graphs.

mod pinch;
mod state;
mod widget;

pub use pinch::{PinchGesture, DEFAULT_TOUCH_SLOP};
pub use state::{CanvasContent, CanvasState, CanvasView, InteractionMode, TapEvent};
pub use widget::{CanvasResponse, ScrollOrientation, ScrollableCanvas};
