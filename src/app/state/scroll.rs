use std::time::{Duration, Instant};

/// Offsets closer than this are treated as the same scroll position.
const OFFSET_TOLERANCE_PX: f32 = 0.5;

/// Scroll tracking model. `offset_y` and `viewport_height` are inputs; the
/// rest is recomputed from them after every update.
pub struct ScrollState {
    pub(in crate::app) offset_y: f32,
    pub(in crate::app) viewport_height: f32,
    pub(in crate::app) first_visible_index: usize,
    pub(in crate::app) show_scroll_to_top: bool,
}

impl ScrollState {
    pub(in crate::app) fn new(viewport_height: f32) -> Self {
        Self {
            offset_y: 0.0,
            viewport_height: sanitize_extent(viewport_height),
            first_visible_index: 0,
            show_scroll_to_top: false,
        }
    }

    pub(in crate::app) fn set_offset(&mut self, offset_y: f32) {
        self.offset_y = sanitize_extent(offset_y);
    }

    pub(in crate::app) fn set_viewport_height(&mut self, viewport_height: f32) {
        self.viewport_height = sanitize_extent(viewport_height);
    }

    pub(in crate::app) fn is_at_top(&self) -> bool {
        self.first_visible_index == 0
    }
}

/// Animated scroll back to the top of the list.
pub struct ScrollAnimation {
    pub(in crate::app) from_y: f32,
    pub(in crate::app) started_at: Instant,
    pub(in crate::app) duration: Duration,
    issued: Vec<f32>,
}

impl ScrollAnimation {
    pub(in crate::app) fn new(from_y: f32, started_at: Instant, duration: Duration) -> Self {
        let from_y = sanitize_extent(from_y);
        Self {
            from_y,
            started_at,
            duration,
            // The starting position is ours too; a report of it is not a user gesture.
            issued: vec![from_y],
        }
    }

    pub(in crate::app) fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    pub(in crate::app) fn offset_at(&self, now: Instant) -> f32 {
        let progress = self.progress(now);
        if progress >= 1.0 {
            return 0.0;
        }
        self.from_y * (1.0 - ease_out_cubic(progress))
    }

    pub(in crate::app) fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Remember an offset this animation asked the scrollable to move to.
    pub(in crate::app) fn record_issued(&mut self, offset_y: f32) {
        self.issued.push(offset_y);
    }

    /// Whether a reported offset was produced by this animation rather than
    /// by the user.
    pub(in crate::app) fn issued_offset(&self, offset_y: f32) -> bool {
        self.issued
            .iter()
            .any(|issued| (issued - offset_y).abs() <= OFFSET_TOLERANCE_PX)
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

fn sanitize_extent(value: f32) -> f32 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}
