pub(crate) fn default_contact_count() -> usize {
    50
}

pub(crate) fn default_scroll_to_top_threshold() -> usize {
    10
}

pub(crate) fn default_overscan() -> usize {
    4
}

pub(crate) fn default_header_height() -> f32 {
    52.0
}

pub(crate) fn default_row_height() -> f32 {
    64.0
}

pub(crate) fn default_scroll_animation_ms() -> u64 {
    350
}

pub(crate) fn default_title_font_size() -> u32 {
    22
}

pub(crate) fn default_header_font_size() -> u32 {
    24
}

pub(crate) fn default_name_font_size() -> u32 {
    16
}

pub(crate) fn default_phone_font_size() -> u32 {
    14
}

pub(crate) fn default_window_width() -> f32 {
    420.0
}

pub(crate) fn default_window_height() -> f32 {
    720.0
}

pub(crate) fn default_key_scroll_to_top() -> String {
    "home".to_string()
}

pub(crate) fn default_key_quit() -> String {
    "q".to_string()
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Debug
}
