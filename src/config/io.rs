use super::clamp::clamp_config;
use super::models::AppConfig;
use super::tables::ConfigTables;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Load configuration from the given path, falling back to defaults on error.
/// The result is always clamped to supported ranges.
pub fn load_config(path: &Path) -> AppConfig {
    let contents = match fs::read_to_string(path) {
        Ok(data) => {
            info!(path = %path.display(), "Loaded base config");
            data
        }
        Err(err) => {
            warn!(
                path = %path.display(),
                "Falling back to default config: {err}"
            );
            return AppConfig::default();
        }
    };

    match parse_config(&contents) {
        Ok(cfg) => {
            debug!("Parsed configuration from disk");
            cfg
        }
        Err(err) => {
            warn!(path = %path.display(), "Invalid config TOML: {err:#}");
            AppConfig::default()
        }
    }
}

pub fn parse_config(contents: &str) -> Result<AppConfig> {
    let tables: ConfigTables =
        toml::from_str(contents).context("failed to parse config tables")?;
    let mut config = AppConfig::from(tables);
    clamp_config(&mut config);
    Ok(config)
}

pub fn serialize_config(config: &AppConfig) -> Result<String> {
    let tables = ConfigTables::from(config);
    toml::to_string_pretty(&tables).context("failed to serialize config tables")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::clamp::{MAX_CONTACT_COUNT, MIN_WINDOW_EXTENT};
    use crate::config::{LogLevel, ThemeMode};

    #[test]
    fn empty_document_yields_defaults() {
        let parsed = parse_config("").expect("empty config parses");
        assert_eq!(parsed, AppConfig::default());
    }

    #[test]
    fn reads_values_from_each_table() {
        let parsed = parse_config(
            r#"
            [list]
            contact_count = 130
            scroll_to_top_threshold = 4

            [appearance]
            theme = "night"

            [window]
            width = 600.0

            [keys]
            scroll_to_top = "ctrl+home"

            [logging]
            log_level = "warn"
            "#,
        )
        .expect("config parses");

        assert_eq!(parsed.contact_count, 130);
        assert_eq!(parsed.scroll_to_top_threshold, 4);
        assert_eq!(parsed.theme, ThemeMode::Night);
        assert_eq!(parsed.window_width, 600.0);
        assert_eq!(parsed.key_scroll_to_top, "ctrl+home");
        assert_eq!(parsed.log_level, LogLevel::Warn);
        assert_eq!(parsed.row_height, AppConfig::default().row_height);
        assert_eq!(parsed.key_quit, "q");
    }

    #[test]
    fn rejects_unknown_enum_values() {
        let err = parse_config("[appearance]\ntheme = \"sepia\"\n").unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse config tables"));
    }

    #[test]
    fn serialized_defaults_parse_back_to_defaults() {
        let text = serialize_config(&AppConfig::default()).expect("serialize defaults");
        assert!(text.contains("[list]"));
        assert_eq!(parse_config(&text).expect("reparse"), AppConfig::default());
    }

    #[test]
    fn loaded_config_is_clamped_before_use() {
        let path = std::env::temp_dir().join(format!(
            "sticky-contacts-clamp-{}.toml",
            std::process::id()
        ));
        fs::write(
            &path,
            "[list]\ncontact_count = 1000000\n\n[window]\nwidth = nan\nheight = -50.0\n",
        )
        .expect("write temp config");

        let loaded = load_config(&path);
        let _ = fs::remove_file(&path);

        assert_eq!(loaded.contact_count, MAX_CONTACT_COUNT);
        assert!(loaded.window_width.is_finite() && loaded.window_width >= MIN_WINDOW_EXTENT);
        assert!(loaded.window_height.is_finite() && loaded.window_height >= MIN_WINDOW_EXTENT);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join(format!(
            "sticky-contacts-missing-{}.toml",
            std::process::id()
        ));
        assert_eq!(load_config(&path), AppConfig::default());
    }
}
