use std::ops::RangeInclusive;

use tracing::{debug, warn};

use super::pinch::PinchGesture;
use crate::error::GraphResult;
use crate::geometry::{clamp_scroll_offset, Offset};
use crate::surface::Surface;

/// A tap on the canvas, in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TapEvent {
    pub position: Offset,
    /// Scroll offset at the time of the tap.
    pub scroll_offset: f32,
}

/// What the user is currently doing with the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionMode {
    #[default]
    Idle,
    Scrolling,
    Zooming,
    /// The last gesture was a tap. Cleared by the next scroll or zoom.
    Tapped(TapEvent),
}

/// Transform handed to content for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasView {
    pub scroll_offset: f32,
    pub zoom_scale: f32,
    /// Active tap, if the last gesture was one.
    pub tap: Option<TapEvent>,
}

/// Something drawn on a scrollable canvas.
///
/// Every frame the canvas asks for the scroll limit at the current zoom,
/// clamps its scroll offset, then calls [`draw`](Self::draw) followed by
/// [`draw_axes`](Self::draw_axes) with the same view.
pub trait CanvasContent<S: Surface> {
    type Output;

    /// How far the content may scroll at `zoom_scale`.
    fn max_scroll_distance(&mut self, surface: &S, zoom_scale: f32) -> GraphResult<f32>;

    fn draw(&mut self, surface: &mut S, view: CanvasView) -> GraphResult<Self::Output>;

    fn draw_axes(
        &mut self,
        _surface: &mut S,
        _view: CanvasView,
        _drawn: &mut Self::Output,
    ) -> GraphResult<()> {
        Ok(())
    }
}

/// Scroll and zoom of one canvas instance.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasState {
    pub scroll_offset: f32,
    pub zoom_scale: f32,
    /// Scroll limit computed by the last frame.
    pub max_scroll_offset: f32,
    pub mode: InteractionMode,
    /// Bounds for the zoom scale, unbounded when `None`.
    pub zoom_limits: Option<RangeInclusive<f32>>,
    pinch: PinchGesture,
}

impl Default for CanvasState {
    fn default() -> Self {
        Self {
            scroll_offset: 0.0,
            zoom_scale: 1.0,
            max_scroll_offset: 0.0,
            mode: InteractionMode::Idle,
            zoom_limits: None,
            pinch: PinchGesture::default(),
        }
    }
}

impl CanvasState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bound the zoom scale. An empty or NaN range is ignored.
    pub fn with_zoom_limits(mut self, limits: RangeInclusive<f32>) -> Self {
        if zoom_limits_valid(&limits) {
            self.zoom_limits = Some(limits);
        } else {
            warn!(?limits, "ignoring invalid zoom limits");
        }
        self
    }

    pub fn with_touch_slop(mut self, touch_slop: f32) -> Self {
        self.pinch = PinchGesture::new(touch_slop);
        self
    }

    /// Current transform.
    pub fn view(&self) -> CanvasView {
        CanvasView {
            scroll_offset: self.scroll_offset,
            zoom_scale: self.zoom_scale,
            tap: self.tap(),
        }
    }

    pub fn tap(&self) -> Option<TapEvent> {
        match self.mode {
            InteractionMode::Tapped(event) => Some(event),
            _ => None,
        }
    }

    /// A scroll or zoom gesture is in progress.
    pub fn is_active(&self) -> bool {
        matches!(self.mode, InteractionMode::Scrolling | InteractionMode::Zooming)
    }

    /// Pan by `delta`. Content moves with the pointer, so the offset moves
    /// the other way. Clamped against the last computed limit. Returns `true`
    /// when this starts a new scroll.
    pub fn scroll_by(&mut self, delta: f32) -> bool {
        let started = self.mode != InteractionMode::Scrolling;
        self.mode = InteractionMode::Scrolling;

        self.scroll_offset = clamp_scroll_offset(self.scroll_offset - delta, self.max_scroll_offset);

        started
    }

    /// Feed two-finger pinch input. The zoom only changes once the gesture
    /// is past the touch slop.
    pub fn pinch(&mut self, zoom_change: f32, centroid_size: f32) {
        if let Some(factor) = self.pinch.update(zoom_change, centroid_size) {
            self.zoom_by(factor);
        }
    }

    /// Multiply the zoom by `factor`, e.g. from a ctrl + wheel zoom. The
    /// scroll offset is left for the next frame to clamp. An active tap is
    /// kept; only a scroll clears it.
    pub fn zoom_by(&mut self, factor: f32) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }

        if !matches!(self.mode, InteractionMode::Tapped(_)) {
            self.mode = InteractionMode::Zooming;
        }

        let zoom = self.zoom_scale * factor;
        self.zoom_scale = match &self.zoom_limits {
            Some(limits) if zoom_limits_valid(limits) => {
                let clamped = zoom.clamp(*limits.start(), *limits.end());
                if clamped != zoom {
                    debug!(zoom, clamped, "zoom clamped to limits");
                }
                clamped
            }
            _ => zoom,
        };
    }

    pub fn tap_at(&mut self, position: Offset) -> TapEvent {
        let event = TapEvent {
            position,
            scroll_offset: self.scroll_offset,
        };
        self.mode = InteractionMode::Tapped(event);

        event
    }

    /// End the current scroll or zoom gesture. A tap stays active.
    pub fn release(&mut self) {
        if self.is_active() {
            self.mode = InteractionMode::Idle;
        }
        self.pinch.reset();
    }

    /// Run one frame: recompute the scroll limit, clamp, draw the content and
    /// then its axes.
    pub fn frame<S, C>(&mut self, surface: &mut S, content: &mut C) -> GraphResult<C::Output>
    where
        S: Surface,
        C: CanvasContent<S>,
    {
        self.max_scroll_offset = content.max_scroll_distance(&*surface, self.zoom_scale)?;
        self.scroll_offset = clamp_scroll_offset(self.scroll_offset, self.max_scroll_offset);

        let view = self.view();
        let mut drawn = content.draw(surface, view)?;
        content.draw_axes(surface, view, &mut drawn)?;

        Ok(drawn)
    }
}

/// Ordered and free of NaN, the ranges `f32::clamp` accepts.
pub(crate) fn zoom_limits_valid(limits: &RangeInclusive<f32>) -> bool {
    limits.start() <= limits.end()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::RecordingSurface;

    #[derive(Default)]
    struct Recorder {
        max: f32,
        calls: Vec<String>,
    }

    impl CanvasContent<RecordingSurface> for Recorder {
        type Output = CanvasView;

        fn max_scroll_distance(&mut self, _: &RecordingSurface, zoom: f32) -> GraphResult<f32> {
            self.calls.push(format!("max@{zoom}"));
            Ok(self.max * zoom)
        }

        fn draw(&mut self, _: &mut RecordingSurface, view: CanvasView) -> GraphResult<CanvasView> {
            self.calls.push(format!("draw@{}", view.scroll_offset));
            Ok(view)
        }

        fn draw_axes(
            &mut self,
            _: &mut RecordingSurface,
            view: CanvasView,
            drawn: &mut CanvasView,
        ) -> GraphResult<()> {
            assert_eq!(view, *drawn);
            self.calls.push(format!("axes@{}", view.scroll_offset));
            Ok(())
        }
    }

    #[test]
    fn frame_order_and_clamp() {
        let mut surface = RecordingSurface::new(100, 100);
        let mut recorder = Recorder {
            max: 20.0,
            ..Recorder::default()
        };
        let mut state = CanvasState {
            scroll_offset: 45.0,
            zoom_scale: 2.0,
            ..CanvasState::default()
        };

        let view = state.frame(&mut surface, &mut recorder).unwrap();

        assert_eq!(recorder.calls, vec!["max@2", "draw@40", "axes@40"]);
        assert_eq!(state.max_scroll_offset, 40.0);
        assert_eq!(view.scroll_offset, 40.0);
    }

    #[test]
    fn drag_clamps_both_ways() {
        let mut state = CanvasState {
            max_scroll_offset: 30.0,
            ..CanvasState::default()
        };

        assert!(state.scroll_by(-50.0));
        assert_eq!(state.scroll_offset, 30.0);
        assert!(!state.scroll_by(100.0));
        assert_eq!(state.scroll_offset, 0.0);
    }

    #[test]
    fn zoom_is_multiplicative_and_limited() {
        let mut state = CanvasState::new().with_zoom_limits(0.5..=3.0);
        state.zoom_by(2.0);
        assert_eq!(state.zoom_scale, 2.0);
        state.zoom_by(2.0);
        assert_eq!(state.zoom_scale, 3.0);
        state.zoom_by(0.1);
        assert_eq!(state.zoom_scale, 0.5);
        state.zoom_by(0.0);
        assert_eq!(state.zoom_scale, 0.5);
    }

    #[test]
    fn inverted_zoom_limits_are_ignored() {
        let mut state = CanvasState::new().with_zoom_limits(3.0..=0.5);
        assert_eq!(state.zoom_limits, None);

        // set directly on the field
        state.zoom_limits = Some(f32::NAN..=2.0);
        state.zoom_by(4.0);
        assert_eq!(state.zoom_scale, 4.0);
    }

    #[test]
    fn zoom_keeps_an_active_tap() {
        let mut state = CanvasState::new();
        let event = state.tap_at(Offset::new(5.0, 6.0));

        state.zoom_by(2.0);
        state.release();
        assert_eq!(state.zoom_scale, 2.0);
        assert_eq!(state.tap(), Some(event));

        state.scroll_by(1.0);
        assert_eq!(state.tap(), None);
    }

    #[test]
    fn zoom_is_unbounded_by_default() {
        let mut state = CanvasState::new();
        state.zoom_by(10.0);
        state.zoom_by(10.0);
        assert_eq!(state.zoom_scale, 100.0);
    }

    #[test]
    fn zoom_leaves_scroll_alone() {
        let mut state = CanvasState {
            scroll_offset: 25.0,
            max_scroll_offset: 30.0,
            ..CanvasState::default()
        };
        state.zoom_by(0.5);
        assert_eq!(state.scroll_offset, 25.0);
    }

    #[test]
    fn pinch_respects_touch_slop() {
        let mut state = CanvasState::new();
        state.pinch(1.02, 100.0);
        assert_eq!(state.zoom_scale, 1.0);
        assert_eq!(state.mode, InteractionMode::Idle);

        state.pinch(1.5, 100.0);
        assert_eq!(state.zoom_scale, 1.5);
        assert_eq!(state.mode, InteractionMode::Zooming);
    }

    #[test]
    fn tap_survives_release_but_not_scroll() {
        let mut state = CanvasState {
            scroll_offset: 12.0,
            max_scroll_offset: 30.0,
            ..CanvasState::default()
        };

        let event = state.tap_at(Offset::new(5.0, 6.0));
        assert_eq!(event.scroll_offset, 12.0);
        assert_eq!(state.scroll_offset, 12.0);

        state.release();
        assert_eq!(state.tap(), Some(event));
        assert_eq!(state.view().tap, Some(event));

        state.scroll_by(1.0);
        assert_eq!(state.tap(), None);
        state.release();
        assert_eq!(state.mode, InteractionMode::Idle);
    }
}
