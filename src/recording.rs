//! A headless surface that records draw calls.
//!
//! Useful for rendering graphs without an egui context, e.g. in tests or to
//! inspect where bars and labels end up.

use std::convert::Infallible;

use plotters_backend::{
    BackendColor, BackendCoord, BackendStyle, BackendTextStyle, DrawingBackend, DrawingErrorKind,
    FontTransform,
};

use crate::geometry::PixelRect;
use crate::surface::Surface;

/// Average glyph advance as a fraction of the font size.
const GLYPH_WIDTH_EM: f64 = 0.6;

/// Color as seen by the backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordedColor {
    pub rgb: (u8, u8, u8),
    pub alpha: f64,
}

impl From<BackendColor> for RecordedColor {
    #[inline]
    fn from(value: BackendColor) -> Self {
        Self {
            rgb: value.rgb,
            alpha: value.alpha,
        }
    }
}

/// One primitive drawn on a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Pixel {
        point: BackendCoord,
        color: RecordedColor,
    },
    Line {
        from: BackendCoord,
        to: BackendCoord,
        color: RecordedColor,
        width: u32,
    },
    Rect {
        upper_left: BackendCoord,
        bottom_right: BackendCoord,
        color: RecordedColor,
        filled: bool,
    },
    Path {
        points: Vec<BackendCoord>,
        color: RecordedColor,
        width: u32,
    },
    Circle {
        center: BackendCoord,
        radius: u32,
        color: RecordedColor,
        filled: bool,
    },
    Polygon {
        points: Vec<BackendCoord>,
        color: RecordedColor,
    },
    Text {
        text: String,
        pos: BackendCoord,
        size: f64,
        color: RecordedColor,
    },
    Clip(Option<PixelRect>),
}

/// Records everything drawn on it. Text is measured with a fixed
/// `0.6em x 1em` glyph box.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            calls: Vec::new(),
        }
    }

    /// Every call in draw order.
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Text of every label drawn, in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn clip_to(&mut self, area: Option<PixelRect>) {
        self.calls.push(DrawCall::Clip(area));
    }
}

impl DrawingBackend for RecordingSurface {
    type ErrorType = Infallible;

    fn get_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn ensure_prepared(&mut self) -> Result<(), DrawingErrorKind<Self::ErrorType>> {
        Ok(())
    }

    fn present(&mut self) -> Result<(), DrawingErrorKind<Self::ErrorType>> {
        Ok(())
    }

    fn draw_pixel(
        &mut self,
        point: BackendCoord,
        color: BackendColor,
    ) -> Result<(), DrawingErrorKind<Self::ErrorType>> {
        self.calls.push(DrawCall::Pixel {
            point,
            color: color.into(),
        });
        Ok(())
    }

    fn draw_line<S: BackendStyle>(
        &mut self,
        from: BackendCoord,
        to: BackendCoord,
        style: &S,
    ) -> Result<(), DrawingErrorKind<Self::ErrorType>> {
        self.calls.push(DrawCall::Line {
            from,
            to,
            color: style.color().into(),
            width: style.stroke_width(),
        });
        Ok(())
    }

    fn draw_rect<S: BackendStyle>(
        &mut self,
        upper_left: BackendCoord,
        bottom_right: BackendCoord,
        style: &S,
        fill: bool,
    ) -> Result<(), DrawingErrorKind<Self::ErrorType>> {
        self.calls.push(DrawCall::Rect {
            upper_left,
            bottom_right,
            color: style.color().into(),
            filled: fill,
        });
        Ok(())
    }

    fn draw_path<S: BackendStyle, I: IntoIterator<Item = BackendCoord>>(
        &mut self,
        path: I,
        style: &S,
    ) -> Result<(), DrawingErrorKind<Self::ErrorType>> {
        self.calls.push(DrawCall::Path {
            points: path.into_iter().collect(),
            color: style.color().into(),
            width: style.stroke_width(),
        });
        Ok(())
    }

    fn draw_circle<S: BackendStyle>(
        &mut self,
        center: BackendCoord,
        radius: u32,
        style: &S,
        fill: bool,
    ) -> Result<(), DrawingErrorKind<Self::ErrorType>> {
        self.calls.push(DrawCall::Circle {
            center,
            radius,
            color: style.color().into(),
            filled: fill,
        });
        Ok(())
    }

    fn fill_polygon<S: BackendStyle, I: IntoIterator<Item = BackendCoord>>(
        &mut self,
        vert: I,
        style: &S,
    ) -> Result<(), DrawingErrorKind<Self::ErrorType>> {
        self.calls.push(DrawCall::Polygon {
            points: vert.into_iter().collect(),
            color: style.color().into(),
        });
        Ok(())
    }

    fn draw_text<TStyle: BackendTextStyle>(
        &mut self,
        text: &str,
        style: &TStyle,
        pos: BackendCoord,
    ) -> Result<(), DrawingErrorKind<Self::ErrorType>> {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            pos,
            size: style.size(),
            color: style.color().into(),
        });
        Ok(())
    }

    fn estimate_text_size<TStyle: BackendTextStyle>(
        &self,
        text: &str,
        style: &TStyle,
    ) -> Result<(u32, u32), DrawingErrorKind<Self::ErrorType>> {
        let size = style.size();
        let width = (GLYPH_WIDTH_EM * size * text.chars().count() as f64).ceil() as u32;
        let height = size.ceil() as u32;

        match style.transform() {
            FontTransform::Rotate90 | FontTransform::Rotate270 => Ok((height, width)),
            _ => Ok((width, height)),
        }
    }
}
