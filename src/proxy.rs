//! System proxy flag access behind a small store abstraction.
//!
//! The toggle logic only sees the [`SettingsStore`] trait; the registry
//! implementation lives here too but tests run against an in-memory store.

use anyhow::Result;

/// Get/set access to the boolean proxy-enabled flag.
pub trait SettingsStore {
    fn proxy_enabled(&self) -> Result<bool>;
    fn set_proxy_enabled(&self, enabled: bool) -> Result<()>;
}

/// Read, flip, and write the flag. Returns the new state.
pub fn toggle<S: SettingsStore>(store: &S) -> Result<bool> {
    let next = !store.proxy_enabled()?;
    store.set_proxy_enabled(next)?;
    Ok(next)
}

#[cfg(windows)]
pub use registry::RegistryStore;

#[cfg(windows)]
mod registry {
    use anyhow::{Context, Result};
    use winreg::enums::{HKEY_CURRENT_USER, KEY_READ, KEY_SET_VALUE};
    use winreg::RegKey;

    use super::SettingsStore;

    const INTERNET_SETTINGS: &str =
        "Software\\Microsoft\\Windows\\CurrentVersion\\Internet Settings";
    const PROXY_ENABLE: &str = "ProxyEnable";

    /// The per-user ProxyEnable DWORD under Internet Settings.
    pub struct RegistryStore;

    impl SettingsStore for RegistryStore {
        fn proxy_enabled(&self) -> Result<bool> {
            let hkcu = RegKey::predef(HKEY_CURRENT_USER);
            // A missing key or value reads as "proxy disabled".
            let key = match hkcu.open_subkey_with_flags(INTERNET_SETTINGS, KEY_READ) {
                Ok(key) => key,
                Err(_) => return Ok(false),
            };
            let value: u32 = key.get_value(PROXY_ENABLE).unwrap_or(0);
            Ok(value != 0)
        }

        fn set_proxy_enabled(&self, enabled: bool) -> Result<()> {
            let hkcu = RegKey::predef(HKEY_CURRENT_USER);
            let key = hkcu
                .open_subkey_with_flags(INTERNET_SETTINGS, KEY_SET_VALUE)
                .context("Internet Settings key is missing")?;
            key.set_value(PROXY_ENABLE, &u32::from(enabled))
                .context("failed to write ProxyEnable")?;
            Ok(())
        }
    }
}
