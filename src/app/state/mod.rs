mod constants;
mod scroll;

use crate::config::AppConfig;
use crate::contacts::{Contact, generate_contacts};
use crate::grouping::{ContactGroups, group_by_initial, total_members};
use crate::list_model::{ListMetrics, StickyListLayout, is_past_threshold};
use iced::Task;
use tracing::{debug, info};

use super::messages::Message;

pub(crate) use constants::*;
pub(in crate::app) use scroll::ScrollAnimation;
use scroll::ScrollState;

/// Core application state composed of sub-models.
pub struct App {
    pub(super) config: AppConfig,
    pub(super) groups: ContactGroups,
    pub(super) layout: StickyListLayout,
    pub(super) scroll: ScrollState,
    pub(super) animation: Option<ScrollAnimation>,
}

impl App {
    pub(super) fn bootstrap(config: AppConfig) -> (App, Task<Message>) {
        let contacts = generate_contacts(config.contact_count);
        let app = App::new(group_by_initial(contacts), config);
        (app, Task::none())
    }

    pub(in crate::app) fn new(groups: ContactGroups, config: AppConfig) -> App {
        let metrics = ListMetrics {
            header_height: config.header_height,
            row_height: config.row_height,
            overscan: config.overscan,
        };
        let layout = StickyListLayout::new(&groups, metrics);
        let scroll = ScrollState::new(config.window_height - TITLE_BLOCK_HEIGHT_PX);
        info!(
            contacts = total_members(&groups),
            sections = groups.len(),
            items = layout.len(),
            content_height = layout.total_height(),
            threshold = config.scroll_to_top_threshold,
            "Built contact list"
        );

        let mut app = App {
            config,
            groups,
            layout,
            scroll,
            animation: None,
        };
        app.recompute_derived();
        app
    }

    /// Refresh everything derived from the scroll inputs, logging transitions.
    pub(in crate::app) fn recompute_derived(&mut self) {
        let first_visible = self.layout.first_visible_index(self.scroll.offset_y);
        let show_scroll_to_top =
            is_past_threshold(first_visible, self.config.scroll_to_top_threshold);

        if first_visible != self.scroll.first_visible_index {
            tracing::trace!(
                from = self.scroll.first_visible_index,
                to = first_visible,
                "First visible item changed"
            );
        }
        if show_scroll_to_top != self.scroll.show_scroll_to_top {
            debug!(
                first_visible,
                visible = show_scroll_to_top,
                "Scroll-to-top control toggled"
            );
        }

        self.scroll.first_visible_index = first_visible;
        self.scroll.show_scroll_to_top = show_scroll_to_top;
    }

    pub(super) fn contact_at(&self, section: char, member: usize) -> Option<&Contact> {
        self.groups.get(&section).and_then(|members| members.get(member))
    }

    pub fn theme(&self) -> iced::Theme {
        crate::theme::Theme::from(self.config.theme).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_top_without_scroll_control() {
        let (app, _task) = App::bootstrap(AppConfig::default());
        assert_eq!(total_members(&app.groups), 50);
        assert_eq!(app.scroll.first_visible_index, 0);
        assert!(!app.scroll.show_scroll_to_top);
        assert!(app.animation.is_none());
        assert!(app.scroll.viewport_height > 0.0);
    }
}
