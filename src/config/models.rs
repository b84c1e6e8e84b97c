use serde::Deserialize;

/// High-level app configuration; the flattened view of the TOML tables.
#[derive(Debug, Clone, Deserialize, serde::Serialize, PartialEq)]
pub struct AppConfig {
    #[serde(default = "crate::config::defaults::default_contact_count")]
    pub contact_count: usize,
    #[serde(default = "crate::config::defaults::default_scroll_to_top_threshold")]
    pub scroll_to_top_threshold: usize,
    #[serde(default = "crate::config::defaults::default_overscan")]
    pub overscan: usize,
    #[serde(default = "crate::config::defaults::default_header_height")]
    pub header_height: f32,
    #[serde(default = "crate::config::defaults::default_row_height")]
    pub row_height: f32,
    #[serde(default = "crate::config::defaults::default_scroll_animation_ms")]
    pub scroll_animation_ms: u64,
    #[serde(default)]
    pub theme: ThemeMode,
    #[serde(default = "crate::config::defaults::default_title_font_size")]
    pub title_font_size: u32,
    #[serde(default = "crate::config::defaults::default_header_font_size")]
    pub header_font_size: u32,
    #[serde(default = "crate::config::defaults::default_name_font_size")]
    pub name_font_size: u32,
    #[serde(default = "crate::config::defaults::default_phone_font_size")]
    pub phone_font_size: u32,
    #[serde(default = "crate::config::defaults::default_window_width")]
    pub window_width: f32,
    #[serde(default = "crate::config::defaults::default_window_height")]
    pub window_height: f32,
    #[serde(default = "crate::config::defaults::default_key_scroll_to_top")]
    pub key_scroll_to_top: String,
    #[serde(default = "crate::config::defaults::default_key_quit")]
    pub key_quit: String,
    #[serde(default = "crate::config::defaults::default_log_level")]
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            contact_count: crate::config::defaults::default_contact_count(),
            scroll_to_top_threshold: crate::config::defaults::default_scroll_to_top_threshold(),
            overscan: crate::config::defaults::default_overscan(),
            header_height: crate::config::defaults::default_header_height(),
            row_height: crate::config::defaults::default_row_height(),
            scroll_animation_ms: crate::config::defaults::default_scroll_animation_ms(),
            theme: ThemeMode::Day,
            title_font_size: crate::config::defaults::default_title_font_size(),
            header_font_size: crate::config::defaults::default_header_font_size(),
            name_font_size: crate::config::defaults::default_name_font_size(),
            phone_font_size: crate::config::defaults::default_phone_font_size(),
            window_width: crate::config::defaults::default_window_width(),
            window_height: crate::config::defaults::default_window_height(),
            key_scroll_to_top: crate::config::defaults::default_key_scroll_to_top(),
            key_quit: crate::config::defaults::default_key_quit(),
            log_level: crate::config::defaults::default_log_level(),
        }
    }
}

/// Theme mode.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    #[default]
    Day,
    Night,
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ThemeMode::Day => "Day",
            ThemeMode::Night => "Night",
        };
        write!(f, "{}", label)
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    #[default]
    Debug,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
