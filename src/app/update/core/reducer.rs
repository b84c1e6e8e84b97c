use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;

impl App {
    pub(in crate::app) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::Scrolled {
                offset_y,
                viewport_height,
            } => self.handle_scrolled(offset_y, viewport_height),
            Message::ScrollToTop => self.handle_scroll_to_top(),
            Message::AnimationTick(now) => self.handle_animation_tick(now, &mut effects),
            Message::WindowResized { width, height } => {
                self.handle_window_resized(width, height);
            }
            Message::KeyPressed { key, modifiers } => {
                if let Some(shortcut) = self.shortcut_message_for_key(key, modifiers) {
                    effects.extend(self.reduce(shortcut));
                }
            }
            Message::Quit => effects.push(Effect::Quit),
        }

        self.recompute_derived();
        effects
    }
}
