use super::defaults;
use super::models::AppConfig;

/// Limits for list and appearance settings.
pub(super) const MAX_CONTACT_COUNT: usize = 10_000;
const MAX_OVERSCAN: usize = 64;
const MIN_ITEM_HEIGHT: f32 = 16.0;
const MAX_ITEM_HEIGHT: f32 = 320.0;
const MAX_SCROLL_ANIMATION_MS: u64 = 5_000;
const MIN_FONT_SIZE: u32 = 8;
const MAX_FONT_SIZE: u32 = 72;
pub(super) const MIN_WINDOW_EXTENT: f32 = 240.0;
const MAX_WINDOW_WIDTH: f32 = 7680.0;
const MAX_WINDOW_HEIGHT: f32 = 4320.0;

/// Bring every setting into its supported range. Key bindings come out
/// trimmed, lowercase, with aliases resolved and never empty.
pub(super) fn clamp_config(config: &mut AppConfig) {
    config.contact_count = config.contact_count.min(MAX_CONTACT_COUNT);
    config.overscan = config.overscan.min(MAX_OVERSCAN);
    config.header_height = clamp_extent(config.header_height, MIN_ITEM_HEIGHT, MAX_ITEM_HEIGHT);
    config.row_height = clamp_extent(config.row_height, MIN_ITEM_HEIGHT, MAX_ITEM_HEIGHT);
    config.scroll_animation_ms = config.scroll_animation_ms.min(MAX_SCROLL_ANIMATION_MS);
    config.title_font_size = config.title_font_size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
    config.header_font_size = config.header_font_size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
    config.name_font_size = config.name_font_size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
    config.phone_font_size = config.phone_font_size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
    config.window_width = clamp_extent(config.window_width, MIN_WINDOW_EXTENT, MAX_WINDOW_WIDTH);
    config.window_height =
        clamp_extent(config.window_height, MIN_WINDOW_EXTENT, MAX_WINDOW_HEIGHT);
    normalize_key_binding(
        &mut config.key_scroll_to_top,
        defaults::default_key_scroll_to_top(),
    );
    normalize_key_binding(&mut config.key_quit, defaults::default_key_quit());
}

fn clamp_extent(value: f32, min: f32, max: f32) -> f32 {
    if value.is_finite() { value.clamp(min, max) } else { min }
}

fn normalize_key_binding(value: &mut String, fallback: String) {
    let normalized = value.trim().to_ascii_lowercase();
    if normalized.is_empty() {
        *value = fallback;
    } else {
        *value = normalized.replace("spacebar", "space");
    }
}
