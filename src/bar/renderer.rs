//! Bar drawing strategies.

use plotters::style::Color;
use plotters_backend::BackendCoord;

use super::model::{BarDrawStyle, BarModel, BarStyle, Orientation};
use crate::error::GraphResult;
use crate::geometry::{rounded_rect_path, Offset, PixelRect};
use crate::surface::Surface;

/// Draws a single bar.
///
/// `offset` is the top-left corner of the bar and `height` its extent from
/// there to the baseline. A negative height grows the bar the other way.
pub trait BarRenderer {
    fn draw_bar<S: Surface>(
        &self,
        surface: &mut S,
        bar: &BarModel,
        offset: Offset,
        height: f32,
        orientation: Orientation,
        style: &BarStyle,
    ) -> GraphResult<()>;
}

/// Draws bars as rounded rectangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundedBarRenderer {
    /// Line pieces per rounded corner.
    pub corner_segments: u32,
}

impl Default for RoundedBarRenderer {
    fn default() -> Self {
        Self { corner_segments: 6 }
    }
}

/// Rectangle a bar covers.
pub fn bar_rect(offset: Offset, height: f32, orientation: Orientation, style: &BarStyle) -> PixelRect {
    match orientation {
        Orientation::Vertical => PixelRect::from_origin_size(offset, style.bar_width, height),
        Orientation::Horizontal => PixelRect::from_origin_size(offset, height, style.bar_width),
    }
}

impl BarRenderer for RoundedBarRenderer {
    fn draw_bar<S: Surface>(
        &self,
        surface: &mut S,
        bar: &BarModel,
        offset: Offset,
        height: f32,
        orientation: Orientation,
        style: &BarStyle,
    ) -> GraphResult<()> {
        if height == 0.0 {
            return Ok(());
        }

        let rect = bar_rect(offset, height, orientation, style);
        let mut outline: Vec<BackendCoord> =
            rounded_rect_path(rect, style.corner_radii, self.corner_segments)
                .into_iter()
                .map(Offset::to_backend)
                .collect();

        match style.draw_style {
            BarDrawStyle::Fill => surface.fill_polygon(outline, &bar.color.filled())?,
            BarDrawStyle::Stroke { width } => {
                if let Some(&first) = outline.first() {
                    outline.push(first);
                }
                let stroke = bar.color.stroke_width(width.round().max(1.0) as u32);
                surface.draw_path(outline, &stroke)?;
            }
        }

        Ok(())
    }
}
