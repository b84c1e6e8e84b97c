use super::super::super::messages::Message;
use super::super::super::state::{App, CONTACT_SCROLL_ID};
use super::super::Effect;
use iced::Event;
use iced::Task;
use iced::event;
use iced::keyboard;
use iced::widget::scrollable::{self, AbsoluteOffset};
use iced::window;
use tracing::info;

impl App {
    pub(super) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::ScrollTo(offset_y) => {
                scrollable::scroll_to(CONTACT_SCROLL_ID.clone(), AbsoluteOffset { x: 0.0, y: offset_y })
            }
            Effect::Quit => {
                if self.animation.take().is_some() {
                    info!("Dropping in-flight scroll animation on quit");
                }
                iced::exit()
            }
        }
    }
}

pub(super) fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    match event {
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized {
            width: size.width,
            height: size.height,
        }),
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. })
            if status == event::Status::Ignored =>
        {
            Some(Message::KeyPressed { key, modifiers })
        }
        _ => None,
    }
}
