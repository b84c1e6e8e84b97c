use super::defaults;
use super::models::{AppConfig, LogLevel, ThemeMode};
use serde::Deserialize;

/// On-disk layout of `config.toml`, grouped into tables.
#[derive(Debug, Clone, Deserialize, serde::Serialize, Default)]
pub(super) struct ConfigTables {
    #[serde(default)]
    list: ListConfig,
    #[serde(default)]
    appearance: AppearanceConfig,
    #[serde(default)]
    window: WindowConfig,
    #[serde(default)]
    keys: KeysConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            contact_count: tables.list.contact_count,
            scroll_to_top_threshold: tables.list.scroll_to_top_threshold,
            overscan: tables.list.overscan,
            header_height: tables.list.header_height,
            row_height: tables.list.row_height,
            scroll_animation_ms: tables.list.scroll_animation_ms,
            theme: tables.appearance.theme,
            title_font_size: tables.appearance.title_font_size,
            header_font_size: tables.appearance.header_font_size,
            name_font_size: tables.appearance.name_font_size,
            phone_font_size: tables.appearance.phone_font_size,
            window_width: tables.window.width,
            window_height: tables.window.height,
            key_scroll_to_top: tables.keys.scroll_to_top,
            key_quit: tables.keys.quit,
            log_level: tables.logging.log_level,
        }
    }
}

impl From<&AppConfig> for ConfigTables {
    fn from(config: &AppConfig) -> Self {
        ConfigTables {
            list: ListConfig {
                contact_count: config.contact_count,
                scroll_to_top_threshold: config.scroll_to_top_threshold,
                overscan: config.overscan,
                header_height: config.header_height,
                row_height: config.row_height,
                scroll_animation_ms: config.scroll_animation_ms,
            },
            appearance: AppearanceConfig {
                theme: config.theme,
                title_font_size: config.title_font_size,
                header_font_size: config.header_font_size,
                name_font_size: config.name_font_size,
                phone_font_size: config.phone_font_size,
            },
            window: WindowConfig {
                width: config.window_width,
                height: config.window_height,
            },
            keys: KeysConfig {
                scroll_to_top: config.key_scroll_to_top.clone(),
                quit: config.key_quit.clone(),
            },
            logging: LoggingConfig {
                log_level: config.log_level,
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct ListConfig {
    #[serde(default = "defaults::default_contact_count")]
    contact_count: usize,
    #[serde(default = "defaults::default_scroll_to_top_threshold")]
    scroll_to_top_threshold: usize,
    #[serde(default = "defaults::default_overscan")]
    overscan: usize,
    #[serde(default = "defaults::default_header_height")]
    header_height: f32,
    #[serde(default = "defaults::default_row_height")]
    row_height: f32,
    #[serde(default = "defaults::default_scroll_animation_ms")]
    scroll_animation_ms: u64,
}

impl Default for ListConfig {
    fn default() -> Self {
        ListConfig {
            contact_count: defaults::default_contact_count(),
            scroll_to_top_threshold: defaults::default_scroll_to_top_threshold(),
            overscan: defaults::default_overscan(),
            header_height: defaults::default_header_height(),
            row_height: defaults::default_row_height(),
            scroll_animation_ms: defaults::default_scroll_animation_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct AppearanceConfig {
    #[serde(default)]
    theme: ThemeMode,
    #[serde(default = "defaults::default_title_font_size")]
    title_font_size: u32,
    #[serde(default = "defaults::default_header_font_size")]
    header_font_size: u32,
    #[serde(default = "defaults::default_name_font_size")]
    name_font_size: u32,
    #[serde(default = "defaults::default_phone_font_size")]
    phone_font_size: u32,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        AppearanceConfig {
            theme: ThemeMode::default(),
            title_font_size: defaults::default_title_font_size(),
            header_font_size: defaults::default_header_font_size(),
            name_font_size: defaults::default_name_font_size(),
            phone_font_size: defaults::default_phone_font_size(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct WindowConfig {
    #[serde(default = "defaults::default_window_width")]
    width: f32,
    #[serde(default = "defaults::default_window_height")]
    height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: defaults::default_window_width(),
            height: defaults::default_window_height(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct KeysConfig {
    #[serde(default = "defaults::default_key_scroll_to_top")]
    scroll_to_top: String,
    #[serde(default = "defaults::default_key_quit")]
    quit: String,
}

impl Default for KeysConfig {
    fn default() -> Self {
        KeysConfig {
            scroll_to_top: defaults::default_key_scroll_to_top(),
            quit: defaults::default_key_quit(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}
