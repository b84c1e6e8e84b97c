use iced::keyboard::{Key, Modifiers};
use std::time::Instant;

/// Messages emitted by the UI.
#[derive(Debug, Clone)]
pub enum Message {
    Scrolled {
        offset_y: f32,
        viewport_height: f32,
    },
    ScrollToTop,
    AnimationTick(Instant),
    WindowResized {
        width: f32,
        height: f32,
    },
    KeyPressed {
        key: Key,
        modifiers: Modifiers,
    },
    Quit,
}
