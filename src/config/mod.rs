//! Configuration module for proxy-hotkey.
//!
//! Split into two sub-modules:
//! - `hotkey`: binding string parser and the parsed types
//! - `io`: config file location and loading

mod hotkey;
mod io;

pub use hotkey::{
    parse, HotkeySettings, HotkeySpec, DEFAULT_EXIT, DEFAULT_TOGGLE, MOD_ALT, MOD_CONTROL,
    MOD_SHIFT, MOD_WIN, VK_F7, VK_F8,
};
pub use io::{config_path, load};
