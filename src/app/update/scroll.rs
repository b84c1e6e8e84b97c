use super::super::state::{App, ScrollAnimation, TITLE_BLOCK_HEIGHT_PX};
use super::Effect;
use std::time::{Duration, Instant};
use tracing::{debug, info};

impl App {
    pub(super) fn handle_scrolled(&mut self, offset_y: f32, viewport_height: f32) {
        let interrupted = self
            .animation
            .as_ref()
            .is_some_and(|animation| !animation.issued_offset(offset_y));
        if interrupted {
            if let Some(animation) = self.animation.take() {
                debug!(
                    offset_y,
                    from = animation.from_y,
                    "User scroll interrupted scroll-to-top animation"
                );
            }
        }
        self.scroll.set_offset(offset_y);
        self.scroll.set_viewport_height(viewport_height);
    }

    pub(super) fn handle_scroll_to_top(&mut self) {
        if self.scroll.is_at_top() {
            debug!(
                offset_y = self.scroll.offset_y,
                "Already at the first item; ignoring scroll-to-top"
            );
            return;
        }

        let duration = Duration::from_millis(self.config.scroll_animation_ms);
        if self.animation.is_some() {
            debug!("Restarting scroll-to-top animation from current offset");
        }
        info!(
            from = self.scroll.offset_y,
            first_visible = self.scroll.first_visible_index,
            duration_ms = self.config.scroll_animation_ms,
            "Starting scroll-to-top animation"
        );
        self.animation = Some(ScrollAnimation::new(
            self.scroll.offset_y,
            Instant::now(),
            duration,
        ));
    }

    pub(super) fn handle_animation_tick(&mut self, now: Instant, effects: &mut Vec<Effect>) {
        let Some(animation) = self.animation.as_mut() else {
            return;
        };

        let offset = animation.offset_at(now);
        animation.record_issued(offset);
        let finished = animation.is_finished(now);
        if finished {
            debug!(
                from = animation.from_y,
                elapsed_ms = now.saturating_duration_since(animation.started_at).as_millis() as u64,
                planned_ms = animation.duration.as_millis() as u64,
                "Scroll-to-top animation finished"
            );
        }

        self.scroll.set_offset(offset);
        effects.push(Effect::ScrollTo(offset));
        if finished {
            self.animation = None;
        }
    }

    pub(super) fn handle_window_resized(&mut self, width: f32, height: f32) {
        let estimate = height - TITLE_BLOCK_HEIGHT_PX;
        self.scroll.set_viewport_height(estimate);
        debug!(
            width,
            height,
            viewport_height = self.scroll.viewport_height,
            "Window resized"
        );
    }
}
