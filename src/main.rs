//! Entry point for the contacts viewer.
//!
//! Responsibilities here are intentionally minimal:
//! - Parse command-line arguments.
//! - Load user configuration from `conf/config.toml` (or the given path).
//! - Launch the GUI, which generates and groups the contact list.

mod app;
mod config;
mod contacts;
mod grouping;
mod list_model;
mod theme;

use crate::app::run_app;
use crate::config::{AppConfig, load_config, serialize_config};
use anyhow::{Context, Result, anyhow};
use std::env;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

const DEFAULT_CONFIG_PATH: &str = "conf/config.toml";

enum Command {
    Run { config_path: PathBuf },
    PrintDefaultConfig,
}

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let config_path = match parse_args(env::args().skip(1))? {
        Command::PrintDefaultConfig => {
            print!("{}", serialize_config(&AppConfig::default())?);
            return Ok(());
        }
        Command::Run { config_path } => config_path,
    };

    let config = load_config(&config_path);
    set_log_level(reload_handle, config.log_level.as_filter_str());
    info!(
        path = %config_path.display(),
        level = %config.log_level,
        theme = %config.theme,
        "Starting contacts viewer"
    );
    info!(
        contact_count = config.contact_count,
        threshold = config.scroll_to_top_threshold,
        overscan = config.overscan,
        animation_ms = config.scroll_animation_ms,
        "Active list configuration"
    );

    run_app(config).context("Failed to start the GUI")?;
    Ok(())
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Command> {
    let mut config_path = None;
    for arg in args {
        match arg.as_str() {
            "--print-default-config" => return Ok(Command::PrintDefaultConfig),
            flag if flag.starts_with("--") => {
                return Err(anyhow!(
                    "Unknown flag {flag}. Usage: sticky-contacts [--print-default-config] [CONFIG_PATH]"
                ));
            }
            _ if config_path.is_some() => {
                return Err(anyhow!(
                    "Usage: sticky-contacts [--print-default-config] [CONFIG_PATH]"
                ));
            }
            _ => config_path = Some(PathBuf::from(&arg)),
        }
    }
    Ok(Command::Run {
        config_path: config_path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH)),
    })
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    warn!("Logging initialized; override level with config.log_level or RUST_LOG");
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("debug"));
    if let Err(err) = handle.modify(|filter| *filter = parsed.clone()) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn defaults_to_conf_path() {
        let Command::Run { config_path } = parse_args(args(&[])).expect("parse") else {
            panic!("expected run command");
        };
        assert_eq!(config_path, PathBuf::from(DEFAULT_CONFIG_PATH));
    }

    #[test]
    fn accepts_explicit_config_path() {
        let Command::Run { config_path } =
            parse_args(args(&["/tmp/contacts.toml"])).expect("parse")
        else {
            panic!("expected run command");
        };
        assert_eq!(config_path, PathBuf::from("/tmp/contacts.toml"));
    }

    #[test]
    fn recognizes_print_default_config() {
        assert!(matches!(
            parse_args(args(&["--print-default-config"])),
            Ok(Command::PrintDefaultConfig)
        ));
    }

    #[test]
    fn rejects_unknown_flags_and_extra_paths() {
        assert!(parse_args(args(&["--verbose"])).is_err());
        assert!(parse_args(args(&["a.toml", "b.toml"])).is_err());
    }
}
