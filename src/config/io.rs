//! Config I/O: locate and load the hotkey configuration.
//!
//! Loading is best-effort by design. A missing file, unreadable file, or
//! malformed JSON all degrade to the default bindings; a present file with
//! one field missing or blank falls back for that field only. No error
//! escapes this module.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use super::hotkey::{parse, HotkeySettings, DEFAULT_EXIT, DEFAULT_TOGGLE};

#[derive(Deserialize, Debug, Default)]
struct AppConfig {
    #[serde(default, alias = "Hotkeys")]
    hotkeys: HotkeyConfig,
}

#[derive(Deserialize, Debug, Default)]
struct HotkeyConfig {
    #[serde(default, alias = "Toggle")]
    toggle: Option<String>,
    #[serde(default, alias = "Exit")]
    exit: Option<String>,
}

/// Default config file location, created on demand.
pub fn config_path() -> PathBuf {
    let config_dir = dirs::config_dir().unwrap_or_default().join("proxy-hotkey");
    let _ = std::fs::create_dir_all(&config_dir);
    config_dir.join("config.json")
}

/// Load hotkey settings from `path`, falling back to defaults on any failure.
pub fn load(path: &Path) -> HotkeySettings {
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using default hotkeys");
        return HotkeySettings::default();
    }

    let data = match std::fs::read_to_string(path) {
        Ok(d) => d,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "config unreadable, using default hotkeys");
            return HotkeySettings::default();
        }
    };

    let config: AppConfig = match serde_json::from_str(&data) {
        Ok(c) => c,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "config malformed, using default hotkeys");
            return HotkeySettings::default();
        }
    };

    settings_from(config)
}

fn settings_from(config: AppConfig) -> HotkeySettings {
    let toggle = field_or_default(config.hotkeys.toggle.as_deref(), DEFAULT_TOGGLE);
    let exit = field_or_default(config.hotkeys.exit.as_deref(), DEFAULT_EXIT);
    HotkeySettings {
        toggle: parse(toggle),
        exit: parse(exit),
    }
}

fn field_or_default<'a>(field: Option<&'a str>, default: &'a str) -> &'a str {
    match field {
        Some(s) if !s.trim().is_empty() => s,
        _ => default,
    }
}
