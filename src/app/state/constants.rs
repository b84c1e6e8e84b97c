use iced::widget::scrollable::Id as ScrollId;
use once_cell::sync::Lazy;

/// Height reserved for the "Contacts" title above the list.
pub(crate) const TITLE_BLOCK_HEIGHT_PX: f32 = 64.0;
pub(crate) const LIST_PADDING_PX: u16 = 8;
pub(crate) const ITEM_PADDING_PX: u16 = 16;
pub(crate) const FAB_MARGIN_PX: u16 = 16;
/// Tick interval for the scroll-to-top animation (about 60 fps).
pub(crate) const ANIMATION_FRAME_MS: u64 = 16;
pub(crate) static CONTACT_SCROLL_ID: Lazy<ScrollId> =
    Lazy::new(|| ScrollId::new("contact-list-scroll"));
/// Default relative line height of iced text, used to place the pinned letter.
pub(crate) const TEXT_LINE_HEIGHT: f32 = 1.3;
