/// Touch slop in logical points before a two-finger gesture counts as a pinch.
pub const DEFAULT_TOUCH_SLOP: f32 = 8.0;

/// Filters small two-finger jitter out of pinch input.
///
/// Zoom changes are accumulated until `|1 - accumulated| * centroid_size`
/// exceeds the touch slop. From then on every change is passed through
/// until the gesture is reset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchGesture {
    touch_slop: f32,
    accumulated: f32,
    past_touch_slop: bool,
}

impl Default for PinchGesture {
    fn default() -> Self {
        Self::new(DEFAULT_TOUCH_SLOP)
    }
}

impl PinchGesture {
    pub fn new(touch_slop: f32) -> Self {
        Self {
            touch_slop,
            accumulated: 1.0,
            past_touch_slop: false,
        }
    }

    /// Feed one frame of pinch input. Returns the factor to apply to the zoom
    /// once the gesture is past the touch slop.
    pub fn update(&mut self, zoom_change: f32, centroid_size: f32) -> Option<f32> {
        if !self.past_touch_slop {
            self.accumulated *= zoom_change;
            let motion = (1.0 - self.accumulated).abs() * centroid_size;
            if motion > self.touch_slop {
                self.past_touch_slop = true;
            }
        }

        (self.past_touch_slop && zoom_change != 1.0).then_some(zoom_change)
    }

    /// Forget the current gesture.
    pub fn reset(&mut self) {
        self.accumulated = 1.0;
        self.past_touch_slop = false;
    }
}
