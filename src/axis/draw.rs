//! Drawing laid out axes onto a surface.

use super::layout::{AxisSegment, AxisTick, XAxisLayout, YAxisLayout};
use super::model::AxisModel;
use crate::error::GraphResult;
use crate::geometry::{Offset, PixelRect};
use crate::surface::Surface;

fn draw_background<S: Surface>(surface: &mut S, axis: &AxisModel, area: PixelRect) -> GraphResult<()> {
    if let Some(style) = axis.background_style() {
        let (upper_left, bottom_right) = area.to_backend();
        surface.draw_rect(upper_left, bottom_right, &style, true)?;
    }

    Ok(())
}

fn draw_segments<S: Surface>(
    surface: &mut S,
    axis: &AxisModel,
    segments: &[AxisSegment],
) -> GraphResult<()> {
    let style = axis.line_style();
    for segment in segments {
        surface.draw_line(segment.from.to_backend(), segment.to.to_backend(), &style)?;
    }

    Ok(())
}

fn draw_labels<S: Surface>(surface: &mut S, axis: &AxisModel, ticks: &[AxisTick]) -> GraphResult<()> {
    let style = axis.label_style();
    for tick in ticks.iter().filter(|tick| !tick.label.text.is_empty()) {
        surface.draw_text(&tick.label.text, &style, tick.label_origin.to_backend())?;
    }

    Ok(())
}

/// Draw the x axis row. Lines, markers and labels are restricted to `clip`
/// so scrolled content never paints over the y-axis column.
pub fn draw_x_axis<S: Surface>(
    surface: &mut S,
    axis: &AxisModel,
    layout: &XAxisLayout,
    clip: Option<PixelRect>,
) -> GraphResult<()> {
    let (width, _) = surface.logical_size();
    draw_background(
        surface,
        axis,
        PixelRect::from_origin_size(Offset::new(0.0, layout.top), width, layout.height),
    )?;

    surface.clip_to(clip);
    let drawn = draw_segments(surface, axis, &layout.lines)
        .and_then(|_| draw_segments(surface, axis, &layout.markers))
        .and_then(|_| draw_labels(surface, axis, &layout.ticks));
    surface.clip_to(None);

    drawn
}

/// Draw the y axis column from the top of the surface to the axis origin.
pub fn draw_y_axis<S: Surface>(surface: &mut S, axis: &AxisModel, layout: &YAxisLayout) -> GraphResult<()> {
    draw_background(
        surface,
        axis,
        PixelRect::from_origin_size(Offset::default(), layout.width, layout.axis_height),
    )?;

    draw_segments(surface, axis, &layout.lines)?;
    draw_segments(surface, axis, &layout.markers)?;
    draw_labels(surface, axis, &layout.ticks)
}
