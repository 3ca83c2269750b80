//! The drawing surface graphs render onto.
//!
//! Any plotters [`DrawingBackend`] can draw a graph once it also knows how
//! to clip. Text measurement goes through
//! [`DrawingBackend::estimate_text_size`], so layout and drawing always
//! agree on label extents.

use plotters_backend::{BackendTextStyle, DrawingBackend};

use crate::error::GraphResult;
use crate::geometry::PixelRect;

/// A plotters backend that can restrict drawing to a rectangle.
pub trait Surface: DrawingBackend {
    /// Clip subsequent drawing to `area`. `None` lifts the clip.
    fn clip_to(&mut self, area: Option<PixelRect>);

    /// Logical size of the surface as floats.
    #[inline]
    fn logical_size(&self) -> (f32, f32) {
        let (width, height) = self.get_size();
        (width as f32, height as f32)
    }
}

/// Width and height of `text` as the surface would draw it.
pub fn measure_text<S: Surface, T: BackendTextStyle>(
    surface: &S,
    text: &str,
    style: &T,
) -> GraphResult<(f32, f32)> {
    if text.is_empty() {
        return Ok((0.0, 0.0));
    }

    let (width, height) = surface.estimate_text_size(text, style)?;

    Ok((width as f32, height as f32))
}
