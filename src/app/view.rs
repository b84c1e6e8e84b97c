use super::messages::Message;
use super::state::{
    App, CONTACT_SCROLL_ID, FAB_MARGIN_PX, ITEM_PADDING_PX, LIST_PADDING_PX, TEXT_LINE_HEIGHT,
};
use crate::contacts::Contact;
use crate::list_model::{ListItem, PinnedHeader};
use iced::alignment::{Horizontal, Vertical};
use iced::font::Weight;
use iced::widget::{
    Column, Container, Space, Stack, button, column, container, scrollable, text, tooltip,
};
use iced::{Element, Font, Length, Padding};
use tracing::trace;

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let title = container(
            text("Contacts")
                .size(self.config.title_font_size as f32)
                .font(Font {
                    weight: Weight::Semibold,
                    ..Font::DEFAULT
                }),
        )
        .center_x(Length::Fill)
        .padding([16, 0]);

        if self.layout.is_empty() {
            let empty = container(text("No contacts").style(crate::theme::secondary_text))
                .center(Length::Fill);
            return column![title, empty].into();
        }

        let mut layers = Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(self.contact_list());

        if let Some(pinned) = self.layout.pinned_header(self.scroll.offset_y) {
            if pinned.visible_height > 0.0 {
                layers = layers.push(self.pinned_header(pinned));
            }
        }

        if self.scroll.show_scroll_to_top {
            layers = layers.push(self.scroll_to_top_button());
        }

        column![title, layers]
            .padding([0, LIST_PADDING_PX])
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Only the items near the viewport are built; spacers keep the content
    /// height (and so the scrollbar) equal to the full list.
    fn contact_list(&self) -> Element<'_, Message> {
        let window = self
            .layout
            .window(self.scroll.offset_y, self.scroll.viewport_height);

        let mut list = Column::new()
            .width(Length::Fill)
            .push(Space::with_height(Length::Fixed(window.top_space)));

        for idx in window.items.clone() {
            match self.layout.item(idx) {
                Some(ListItem::Header(section)) => {
                    trace!(idx, %section, "Materializing section header");
                    list = list.push(self.section_header(section));
                }
                Some(ListItem::Row { section, member }) => {
                    if let Some(contact) = self.contact_at(section, member) {
                        trace!(idx, name = %contact.name, "Materializing contact row");
                        list = list.push(self.contact_row(contact));
                    }
                }
                None => {}
            }
        }

        list = list.push(Space::with_height(Length::Fixed(window.bottom_space)));

        scrollable(list)
            .id(CONTACT_SCROLL_ID.clone())
            .on_scroll(|viewport| Message::Scrolled {
                offset_y: viewport.absolute_offset().y,
                viewport_height: viewport.bounds().height,
            })
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn section_header(&self, section: char) -> Element<'_, Message> {
        self.header_block(section, self.layout.metrics().header_height)
            .padding([0, ITEM_PADDING_PX])
            .align_y(Vertical::Center)
            .into()
    }

    fn header_block(&self, section: char, height: f32) -> Container<'_, Message> {
        container(
            text(section.to_string())
                .size(self.config.header_font_size as f32)
                .font(Font {
                    weight: Weight::Bold,
                    ..Font::DEFAULT
                }),
        )
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .style(crate::theme::section_header)
    }

    fn contact_row<'a>(&'a self, contact: &'a Contact) -> Element<'a, Message> {
        container(
            column![
                text(contact.name.as_str())
                    .size(self.config.name_font_size as f32)
                    .font(Font {
                        weight: Weight::Medium,
                        ..Font::DEFAULT
                    }),
                text(contact.phone_number.as_str())
                    .size(self.config.phone_font_size as f32)
                    .style(crate::theme::secondary_text),
            ]
            .spacing(4),
        )
        .padding([0, ITEM_PADDING_PX])
        .align_y(Vertical::Center)
        .width(Length::Fill)
        .height(Length::Fixed(self.layout.metrics().row_height))
        .style(crate::theme::contact_row)
        .into()
    }

    /// The header of the current section, drawn over the list. While the next
    /// section's header pushes it out, the band shrinks from the top and the
    /// letter keeps its distance from the band's bottom edge, so it slides up.
    fn pinned_header(&self, pinned: PinnedHeader) -> Element<'_, Message> {
        let full_height = self.layout.metrics().header_height;
        let line_height = self.config.header_font_size as f32 * TEXT_LINE_HEIGHT;
        let bottom_gap = ((full_height - line_height) / 2.0).max(0.0);

        let header = self
            .header_block(pinned.section, pinned.visible_height)
            .padding(Padding {
                top: 0.0,
                right: ITEM_PADDING_PX as f32,
                bottom: bottom_gap,
                left: ITEM_PADDING_PX as f32,
            })
            .align_y(Vertical::Bottom)
            .clip(true);

        column![header].width(Length::Fill).into()
    }

    fn scroll_to_top_button(&self) -> Element<'_, Message> {
        let fab = button(text("↑").size(22).align_x(Horizontal::Center))
            .padding([10, 16])
            .style(button::primary)
            .on_press(Message::ScrollToTop);

        container(tooltip(
            fab,
            container(text("Scroll to top").size(13))
                .padding(6)
                .style(container::rounded_box),
            tooltip::Position::Left,
        ))
        .padding(FAB_MARGIN_PX)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Bottom)
        .into()
    }
}
