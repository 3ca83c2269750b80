use std::hash::Hash;
use std::ops::RangeInclusive;

use egui::{Color32, CornerRadius, Id, Response, Sense, Ui, Vec2, Widget};
use tracing::{trace, warn};

use super::pinch::DEFAULT_TOUCH_SLOP;
use super::state::{zoom_limits_valid, CanvasContent, CanvasState, CanvasView, TapEvent};
use crate::backend::EguiBackend;
use crate::geometry::Offset;

/// Direction pointer motion scrolls the canvas in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollOrientation {
    #[default]
    Horizontal,
    Vertical,
}

/// Outcome of showing a [`ScrollableCanvas`].
pub struct CanvasResponse<T> {
    pub response: Response,
    /// What the content returned, `None` if the frame failed.
    pub output: Option<T>,
    /// Transform the frame was drawn with.
    pub view: CanvasView,
    /// Set on the frame a tap happened.
    pub tapped: Option<TapEvent>,
}

/// A canvas that scrolls, zooms and reports taps, drawing its content
/// through an [`EguiBackend`].
///
/// State lives in egui's temporary memory under `id_salt`, so give every
/// canvas on screen its own salt.
pub struct ScrollableCanvas<C> {
    id_salt: Id,
    content: C,
    width: Option<f32>,
    height: Option<f32>,
    background: Color32,
    pinch_zoom: bool,
    orientation: ScrollOrientation,
    zoom_limits: Option<RangeInclusive<f32>>,
    touch_slop: f32,
}

impl<C> ScrollableCanvas<C>
where
    C: CanvasContent<EguiBackend>,
{
    pub fn new(id_salt: impl Hash, content: C) -> Self {
        Self {
            id_salt: Id::new(id_salt),
            content,
            width: None,
            height: None,
            background: Color32::WHITE,
            pinch_zoom: true,
            orientation: ScrollOrientation::default(),
            zoom_limits: None,
            touch_slop: DEFAULT_TOUCH_SLOP,
        }
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);

        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height);

        self
    }

    pub fn background(mut self, color: Color32) -> Self {
        self.background = color;

        self
    }

    pub fn pinch_zoom(mut self, enabled: bool) -> Self {
        self.pinch_zoom = enabled;

        self
    }

    pub fn orientation(mut self, orientation: ScrollOrientation) -> Self {
        self.orientation = orientation;

        self
    }

    /// Bound the zoom scale. An empty or NaN range is ignored.
    pub fn zoom_limits(mut self, limits: RangeInclusive<f32>) -> Self {
        if zoom_limits_valid(&limits) {
            self.zoom_limits = Some(limits);
        } else {
            warn!(?limits, "ignoring invalid zoom limits");
        }

        self
    }

    pub fn touch_slop(mut self, touch_slop: f32) -> Self {
        self.touch_slop = touch_slop;

        self
    }

    pub fn set_width(&mut self, width: f32) {
        self.width = Some(width);
    }

    pub fn set_height(&mut self, height: f32) {
        self.height = Some(height);
    }

    /// Read input, update the stored state and draw one frame.
    pub fn show(mut self, ui: &mut Ui) -> CanvasResponse<C::Output> {
        let size = Vec2::new(
            self.width.unwrap_or_else(|| ui.available_width()),
            self.height.unwrap_or_else(|| ui.available_height()),
        );
        let (rect, response) = ui.allocate_exact_size(size, Sense::click_and_drag());

        let id = ui.make_persistent_id(self.id_salt);
        let mut state = ui
            .data_mut(|data| data.get_temp::<CanvasState>(id))
            .unwrap_or_else(|| CanvasState::new().with_touch_slop(self.touch_slop));
        state.zoom_limits = self.zoom_limits.clone();

        let mut gesture = false;

        let pointer = response.drag_delta();
        let wheel = if response.hovered() {
            ui.input(|input| input.smooth_scroll_delta)
        } else {
            Vec2::ZERO
        };
        let delta = match self.orientation {
            ScrollOrientation::Horizontal => pointer.x + wheel.x,
            ScrollOrientation::Vertical => pointer.y + wheel.y,
        };
        if delta != 0.0 {
            gesture = true;
            if state.scroll_by(delta) {
                trace!(?id, "scroll started");
            }
        }

        if self.pinch_zoom && response.hovered() {
            match ui.input(|input| input.multi_touch()) {
                Some(touch) => {
                    gesture = true;
                    // egui reports no finger spread, use the canvas size instead
                    state.pinch(touch.zoom_delta, rect.width().min(rect.height()) / 2.0);
                }
                None => {
                    let zoom = ui.input(|input| input.zoom_delta());
                    if zoom != 1.0 {
                        gesture = true;
                        state.zoom_by(zoom);
                    }
                }
            }
        }

        if !gesture && !response.dragged() {
            state.release();
        }

        let tapped = if response.clicked() {
            response.interact_pointer_pos().map(|pos| {
                let local = pos - rect.min;
                state.tap_at(Offset::new(local.x, local.y))
            })
        } else {
            None
        };

        let output = if ui.is_rect_visible(rect) {
            ui.painter()
                .rect_filled(rect, CornerRadius::ZERO, self.background);

            let mut surface = EguiBackend::with_rect(ui.painter(), rect);
            match state.frame(&mut surface, &mut self.content) {
                Ok(output) => Some(output),
                Err(err) => {
                    warn!(%err, "canvas frame failed");
                    None
                }
            }
        } else {
            None
        };

        if state.is_active() {
            ui.ctx().request_repaint();
        }

        let view = state.view();
        ui.data_mut(|data| data.insert_temp(id, state));

        CanvasResponse {
            response,
            output,
            view,
            tapped,
        }
    }
}

impl<C> Widget for ScrollableCanvas<C>
where
    C: CanvasContent<EguiBackend>,
{
    fn ui(self, ui: &mut Ui) -> Response {
        self.show(ui).response
    }
}
