//! Label measurement and ellipsizing.

use super::model::{AxisModel, Ellipsize};
use crate::error::GraphResult;
use crate::surface::{measure_text, Surface};

const ELLIPSIS: char = '…';

/// A formatted label with the size it will occupy when drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasuredLabel {
    pub text: String,
    pub width: f32,
    pub height: f32,
}

/// Shorten `text` with an ellipsis until `measure` reports at most
/// `max_width`. Text that already fits is returned unchanged; if not even a
/// lone ellipsis fits the result is empty.
pub fn ellipsize<F>(text: &str, max_width: f32, at: Ellipsize, mut measure: F) -> GraphResult<String>
where
    F: FnMut(&str) -> GraphResult<f32>,
{
    if measure(text)? <= max_width {
        return Ok(text.to_string());
    }

    let chars: Vec<char> = text.chars().collect();
    let candidate = |keep: usize| -> String {
        match at {
            Ellipsize::Start => std::iter::once(ELLIPSIS)
                .chain(chars[chars.len() - keep..].iter().copied())
                .collect(),
            Ellipsize::End => chars[..keep]
                .iter()
                .copied()
                .chain(std::iter::once(ELLIPSIS))
                .collect(),
            Ellipsize::Middle => {
                let head = keep.div_ceil(2);
                let tail = keep - head;
                chars[..head]
                    .iter()
                    .copied()
                    .chain(std::iter::once(ELLIPSIS))
                    .chain(chars[chars.len() - tail..].iter().copied())
                    .collect()
            }
        }
    };

    // widest candidate that fits, keep in [0, len)
    let (mut low, mut high) = (0usize, chars.len());
    let mut best = None;
    while low < high {
        let keep = (low + high) / 2;
        let shortened = candidate(keep);
        if measure(&shortened)? <= max_width {
            best = Some(shortened);
            low = keep + 1;
        } else {
            high = keep;
        }
    }

    Ok(best.unwrap_or_default())
}

/// Format and measure the label for `index`. When the axis ellipsizes and
/// the label is wider than `available_width`, it is shortened first.
pub fn measure_label<S: Surface>(
    surface: &S,
    axis: &AxisModel,
    index: usize,
    available_width: f32,
) -> GraphResult<MeasuredLabel> {
    let style = axis.label_style();
    let text = axis.label(index);
    let (mut width, mut height) = measure_text(surface, &text, &style)?;

    let text = if axis.axis_config.should_ellipsize && width > available_width {
        let shortened = ellipsize(
            &text,
            available_width,
            axis.axis_config.ellipsize_at,
            |candidate| measure_text(surface, candidate, &style).map(|(w, _)| w),
        )?;
        (width, height) = measure_text(surface, &shortened, &style)?;
        shortened
    } else {
        text
    };

    Ok(MeasuredLabel {
        text,
        width,
        height,
    })
}
