//! Process wiring: global state, startup/shutdown, and the toggle action.

use std::sync::Mutex;

use anyhow::Result;
use lazy_static::lazy_static;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use windows::core::w;
use windows::Win32::Foundation::{CloseHandle, GetLastError, ERROR_ALREADY_EXISTS, HANDLE};
use windows::Win32::System::Threading::CreateMutexW;

use crate::config;
use crate::listener;
use crate::proxy::{self, RegistryStore, SettingsStore};
use crate::tray::Tray;

struct AppState {
    store: RegistryStore,
    tray: Tray,
}

lazy_static! {
    static ref APP: Mutex<Option<AppState>> = Mutex::new(None);
}

pub fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!(version = env!("CARGO_PKG_VERSION"), "proxy-hotkey starting");

    let instance_guard = match acquire_single_instance() {
        Some(handle) => handle,
        None => {
            info!("another instance is already running");
            return Ok(());
        }
    };

    let settings = config::load(&config::config_path());
    info!(
        toggle = %settings.toggle.display_name(),
        exit = %settings.exit.display_name(),
        "hotkeys loaded"
    );

    let store = RegistryStore;
    let enabled = store.proxy_enabled().unwrap_or(false);
    let tray = Tray::new(enabled, &settings.toggle.display_name())?;

    *APP.lock().unwrap() = Some(AppState { store, tray });

    listener::run(&settings)?;

    // Drop the tray icon before exiting so the shell removes it.
    *APP.lock().unwrap() = None;
    unsafe {
        let _ = CloseHandle(instance_guard);
    }

    info!("proxy-hotkey stopped");
    Ok(())
}

/// Flip the proxy flag and refresh the tray. Called from the listener's
/// window procedure when the toggle hotkey fires.
pub fn toggle_and_refresh() {
    if let Ok(mut guard) = APP.lock() {
        if let Some(app) = guard.as_mut() {
            match proxy::toggle(&app.store) {
                Ok(enabled) => {
                    info!(enabled, "proxy flag toggled");
                    app.tray.refresh(enabled);
                }
                Err(e) => error!(error = %e, "proxy toggle failed"),
            }
        }
    }
}

fn acquire_single_instance() -> Option<HANDLE> {
    unsafe {
        let handle = CreateMutexW(None, true, w!("Global\\ProxyHotkeySingleInstance")).ok()?;
        if GetLastError() == ERROR_ALREADY_EXISTS {
            let _ = CloseHandle(handle);
            return None;
        }
        Some(handle)
    }
}
