#![cfg_attr(windows, windows_subsystem = "windows")]

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::info;
use std::path::PathBuf;

use scwidget::settings::{EphemeralSettingsStore, SettingsStore, TomlSettingsStore};
use scwidget::utils::AppConfig;

/// STALCRAFT Widget - the map viewer in a borderless overlay window
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Page to embed instead of the map viewer
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// Display settings file
    #[arg(long, value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Start from default geometry, zoom and layer, and do not save them
    #[arg(long)]
    reset: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = AppConfig::load()?;
    if let Some(url) = args.url {
        config.window.url = url;
    }
    if let Some(path) = args.settings {
        config.general.settings_path = Some(path);
    }
    config.validate()?;

    let log_level = if args.debug { "debug" } else { config.general.log_level.as_str() };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level))
        .format_timestamp_millis()
        .init();

    info!("Starting scwidget v{}", env!("CARGO_PKG_VERSION"));

    let store: Box<dyn SettingsStore> = match config.settings_path() {
        Some(path) if config.general.remember_window_state && !args.reset => {
            info!("Display settings file: {:?}", path);
            Box::new(TomlSettingsStore::new(path))
        }
        _ => {
            info!("Display settings will not be remembered");
            Box::new(EphemeralSettingsStore)
        }
    };

    scwidget::window::run(config, store)?;
    Ok(())
}
