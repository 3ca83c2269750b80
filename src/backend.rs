//! Plotters backend for egui

use std::f32::consts::FRAC_PI_2;
use std::ops::Add;

use egui::{
    epaint::{PathShape, TextShape},
    Align, Align2, Color32, CornerRadius, FontFamily as EguiFontFamily, FontId, Mesh, Painter,
    Pos2, Rect, Shape, Stroke, Ui, Vec2,
};
use plotters_backend::{
    text_anchor::{HPos, Pos, VPos},
    BackendColor, BackendCoord, BackendStyle, BackendTextStyle, DrawingBackend, DrawingErrorKind,
    FontFamily as PlottersFontFamily, FontTransform,
};
use thiserror::Error;

use crate::geometry::PixelRect;
use crate::surface::Surface;

/// Error returned by the backend. egui's painter never fails, so the only
/// source is a polygon that could not be triangulated.
#[derive(Debug, Clone, Copy, Error)]
#[error("egui backend could not tessellate a shape")]
pub struct EguiBackendError;

#[derive(Debug, Clone, Copy)]
/// Converts plotters' integer coordinates into egui positions.
struct EguiBackendCoord {
    x: f32,
    y: f32,
}

impl From<(i32, i32)> for EguiBackendCoord {
    #[inline]
    fn from(value: (i32, i32)) -> Self {
        let (x, y) = value;

        Self {
            x: x as f32,
            y: y as f32,
        }
    }
}

impl From<EguiBackendCoord> for Pos2 {
    #[inline]
    fn from(val: EguiBackendCoord) -> Self {
        Pos2 { x: val.x, y: val.y }
    }
}

impl Add<Pos2> for EguiBackendCoord {
    type Output = EguiBackendCoord;

    #[inline]
    fn add(self, rhs: Pos2) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Add<f32> for EguiBackendCoord {
    type Output = EguiBackendCoord;

    #[inline]
    fn add(self, rhs: f32) -> Self::Output {
        Self {
            x: self.x + rhs,
            y: self.y + rhs,
        }
    }
}

#[derive(Debug, Clone, Copy)]
/// Converts plotters colors into egui colors.
struct EguiBackendColor {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl From<BackendColor> for EguiBackendColor {
    #[inline]
    fn from(value: BackendColor) -> Self {
        let (r, g, b) = value.rgb;

        let a = (value.alpha * 255.0) as u8;

        Self { r, g, b, a }
    }
}

impl From<EguiBackendColor> for Color32 {
    #[inline]
    fn from(val: EguiBackendColor) -> Self {
        Color32::from_rgba_unmultiplied(val.r, val.g, val.b, val.a)
    }
}

/// Convert a plotters color for use with egui directly.
pub(crate) fn to_color32<C: plotters::style::Color>(color: &C) -> Color32 {
    EguiBackendColor::from(color.to_backend_color()).into()
}

fn font_id<TStyle: BackendTextStyle>(style: &TStyle) -> FontId {
    let family = match style.family() {
        PlottersFontFamily::Serif | PlottersFontFamily::SansSerif => EguiFontFamily::Proportional,
        PlottersFontFamily::Monospace => EguiFontFamily::Monospace,
        PlottersFontFamily::Name(string) => EguiFontFamily::Name(string.into()),
    };

    FontId {
        size: style.size() as f32,
        family,
    }
}

fn text_anchor(Pos { h_pos, v_pos }: Pos) -> Align2 {
    let h = match h_pos {
        HPos::Left => Align::Min,
        HPos::Center => Align::Center,
        HPos::Right => Align::Max,
    };
    let v = match v_pos {
        VPos::Top => Align::Min,
        VPos::Center => Align::Center,
        VPos::Bottom => Align::Max,
    };

    Align2([h, v])
}

fn quarter_turns(transform: FontTransform) -> usize {
    match transform {
        FontTransform::None => 0,
        FontTransform::Rotate90 => 1,
        FontTransform::Rotate180 => 2,
        FontTransform::Rotate270 => 3,
    }
}

/// Plotter backend drawing into a rectangle of an egui painter. Coordinates
/// are relative to the rectangle's top-left corner.
pub struct EguiBackend {
    bounds: Rect,
    painter: Painter,
}

impl EguiBackend {
    #[inline]
    /// Create a backend covering the ui's max rect.
    pub fn new(ui: &Ui) -> Self {
        Self::with_rect(ui.painter(), ui.max_rect())
    }

    #[inline]
    /// Create a backend covering `bounds` of an existing painter.
    pub fn with_rect(painter: &Painter, bounds: Rect) -> Self {
        Self {
            bounds,
            painter: painter.with_clip_rect(bounds),
        }
    }

    #[inline]
    /// The screen rectangle this backend draws into.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    #[inline]
    fn point_transform(&self, point: BackendCoord) -> Pos2 {
        (EguiBackendCoord::from(point) + self.bounds.min).into()
    }

    fn screen_points<I: IntoIterator<Item = BackendCoord>>(&self, path: I) -> Vec<Pos2> {
        path.into_iter()
            .map(|point| self.point_transform(point))
            .collect()
    }
}

impl Surface for EguiBackend {
    fn clip_to(&mut self, area: Option<PixelRect>) {
        let clip = match area {
            Some(area) => Rect::from_min_max(
                self.bounds.min + egui::vec2(area.min.x, area.min.y),
                self.bounds.min + egui::vec2(area.max.x, area.max.y),
            )
            .intersect(self.bounds),
            None => self.bounds,
        };

        self.painter.set_clip_rect(clip);
    }
}

impl DrawingBackend for EguiBackend {
    type ErrorType = EguiBackendError;

    fn get_size(&self) -> (u32, u32) {
        (self.bounds.width() as u32, self.bounds.height() as u32)
    }

    fn ensure_prepared(&mut self) -> Result<(), DrawingErrorKind<Self::ErrorType>> {
        Ok(())
    }

    fn present(&mut self) -> Result<(), DrawingErrorKind<Self::ErrorType>> {
        Ok(())
    }

    fn draw_pixel(
        &mut self,
        point: (i32, i32),
        color: BackendColor,
    ) -> Result<(), DrawingErrorKind<Self::ErrorType>> {
        let p0 = EguiBackendCoord::from(point) + self.bounds.min;

        let p1 = p0 + 1.0;

        let color: Color32 = EguiBackendColor::from(color).into();

        let stroke = Stroke::new(1.0, color);

        self.painter.line_segment([p0.into(), p1.into()], stroke);

        Ok(())
    }

    fn draw_line<S: BackendStyle>(
        &mut self,
        from: (i32, i32),
        to: (i32, i32),
        style: &S,
    ) -> Result<(), DrawingErrorKind<Self::ErrorType>> {
        let p0 = self.point_transform(from);
        let p1 = self.point_transform(to);

        let color: Color32 = EguiBackendColor::from(style.color()).into();

        let stroke = Stroke::new(style.stroke_width() as f32, color);

        self.painter.line_segment([p0, p1], stroke);

        Ok(())
    }

    fn draw_rect<S: BackendStyle>(
        &mut self,
        upper_left: BackendCoord,
        bottom_right: BackendCoord,
        style: &S,
        fill: bool,
    ) -> Result<(), DrawingErrorKind<Self::ErrorType>> {
        let rect = Rect::from_two_pos(
            self.point_transform(upper_left),
            self.point_transform(bottom_right),
        );
        let color: Color32 = EguiBackendColor::from(style.color()).into();
        if fill {
            self.painter.rect_filled(rect, CornerRadius::default(), color);
        } else {
            let stroke = Stroke::new(style.stroke_width() as f32, color);
            self.painter.rect(
                rect,
                CornerRadius::default(),
                Color32::TRANSPARENT,
                stroke,
                egui::StrokeKind::Inside,
            );
        }

        Ok(())
    }

    fn draw_path<S: BackendStyle, I: IntoIterator<Item = BackendCoord>>(
        &mut self,
        path: I,
        style: &S,
    ) -> Result<(), DrawingErrorKind<Self::ErrorType>> {
        let points = self.screen_points(path);

        let color: Color32 = EguiBackendColor::from(style.color()).into();

        let stroke = Stroke::new(style.stroke_width() as f32, color);

        self.painter.add(PathShape::line(points, stroke));

        Ok(())
    }

    fn draw_circle<S: BackendStyle>(
        &mut self,
        center: BackendCoord,
        radius: u32,
        style: &S,
        fill: bool,
    ) -> Result<(), DrawingErrorKind<Self::ErrorType>> {
        let center = self.point_transform(center);
        let color: Color32 = EguiBackendColor::from(style.color()).into();
        if fill {
            self.painter.circle_filled(center, radius as _, color);
        } else {
            let stroke = Stroke::new(style.stroke_width() as f32, color);
            self.painter
                .circle(center, radius as _, Color32::TRANSPARENT, stroke);
        }

        Ok(())
    }

    fn fill_polygon<S: BackendStyle, I: IntoIterator<Item = BackendCoord>>(
        &mut self,
        vert: I,
        style: &S,
    ) -> Result<(), DrawingErrorKind<Self::ErrorType>> {
        let points = self.screen_points(vert);
        if points.len() < 3 {
            return Ok(());
        }

        let color: Color32 = EguiBackendColor::from(style.color()).into();

        // earcut handles the concave outlines custom bar renderers may produce
        let flat: Vec<f64> = points
            .iter()
            .flat_map(|point| [point.x as f64, point.y as f64])
            .collect();
        let triangles = earcutr::earcut(&flat, &[], 2)
            .map_err(|_| DrawingErrorKind::DrawingError(EguiBackendError))?;

        let mut mesh = Mesh::default();
        for point in &points {
            mesh.colored_vertex(*point, color);
        }
        for triangle in triangles.chunks_exact(3) {
            mesh.add_triangle(triangle[0] as u32, triangle[1] as u32, triangle[2] as u32);
        }

        self.painter.add(Shape::mesh(mesh));

        Ok(())
    }

    fn draw_text<TStyle: BackendTextStyle>(
        &mut self,
        text: &str,
        style: &TStyle,
        pos: (i32, i32),
    ) -> Result<(), DrawingErrorKind<Self::ErrorType>> {
        let color: Color32 = EguiBackendColor::from(style.color()).into();
        let galley = self
            .painter
            .layout_no_wrap(text.to_string(), font_id(style), color);
        if galley.is_empty() {
            return Ok(());
        }

        let turns = quarter_turns(style.transform());
        let size = galley.size();
        let turned_size = if turns % 2 == 1 {
            Vec2::new(size.y, size.x)
        } else {
            size
        };

        // the anchor applies to the turned box, text pivots on its own top-left
        let turned = text_anchor(style.anchor()).anchor_size(self.point_transform(pos), turned_size);
        let pivot = match turns {
            0 => turned.left_top(),
            1 => turned.right_top(),
            2 => turned.right_bottom(),
            _ => turned.left_bottom(),
        };

        self.painter.add(TextShape {
            angle: turns as f32 * FRAC_PI_2,
            ..TextShape::new(pivot, galley, Color32::PLACEHOLDER)
        });

        Ok(())
    }

    fn estimate_text_size<TStyle: BackendTextStyle>(
        &self,
        text: &str,
        style: &TStyle,
    ) -> Result<(u32, u32), DrawingErrorKind<Self::ErrorType>> {
        let galley = self
            .painter
            .layout_no_wrap(text.to_string(), font_id(style), Color32::PLACEHOLDER);
        let size = galley.size();
        let (width, height) = (size.x.ceil() as u32, size.y.ceil() as u32);

        if quarter_turns(style.transform()) % 2 == 1 {
            Ok((height, width))
        } else {
            Ok((width, height))
        }
    }
}
