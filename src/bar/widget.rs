use std::hash::Hash;
use std::ops::RangeInclusive;

use egui::{Id, Response, Ui, Widget};

use super::model::BarGraphModel;
use super::renderer::{BarRenderer, RoundedBarRenderer};
use super::vertical::VerticalBarGraph;
use crate::backend::to_color32;
use crate::canvas::ScrollableCanvas;

/// What showing a [`BarGraph`] produced.
pub struct BarGraphResponse {
    pub response: Response,
    /// Index of the bar selected by the last tap, if any.
    pub selected: Option<usize>,
}

/// Scrollable, zoomable bar graph widget.
///
/// ```ignore
/// ui.add(BarGraph::new(&model).height(300.0));
/// ```
pub struct BarGraph<'a, R = RoundedBarRenderer> {
    model: &'a BarGraphModel<R>,
    id_salt: Id,
    width: Option<f32>,
    height: Option<f32>,
    pinch_zoom: bool,
    zoom_limits: Option<RangeInclusive<f32>>,
}

impl<'a, R: BarRenderer> BarGraph<'a, R> {
    pub fn new(model: &'a BarGraphModel<R>) -> Self {
        Self {
            model,
            id_salt: Id::new("bar_graph"),
            width: None,
            height: None,
            pinch_zoom: true,
            zoom_limits: None,
        }
    }

    /// Needed when more than one bar graph is shown in the same ui.
    pub fn id_salt(mut self, id_salt: impl Hash) -> Self {
        self.id_salt = Id::new(id_salt);

        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);

        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height);

        self
    }

    pub fn pinch_zoom(mut self, enabled: bool) -> Self {
        self.pinch_zoom = enabled;

        self
    }

    pub fn zoom_limits(mut self, limits: RangeInclusive<f32>) -> Self {
        self.zoom_limits = Some(limits);

        self
    }

    pub fn show(self, ui: &mut Ui) -> BarGraphResponse {
        let mut canvas = ScrollableCanvas::new(self.id_salt, VerticalBarGraph::new(self.model))
            .background(to_color32(&self.model.background_color))
            .pinch_zoom(self.pinch_zoom);

        if let Some(width) = self.width {
            canvas.set_width(width);
        }
        if let Some(height) = self.height {
            canvas.set_height(height);
        }
        if let Some(limits) = self.zoom_limits {
            canvas = canvas.zoom_limits(limits);
        }

        let shown = canvas.show(ui);

        BarGraphResponse {
            response: shown.response,
            selected: shown.output.and_then(|frame| frame.selected),
        }
    }
}

impl<R: BarRenderer> Widget for BarGraph<'_, R> {
    fn ui(self, ui: &mut Ui) -> Response {
        self.show(ui).response
    }
}
