//! Hotkey string parsing and the parsed binding types.
//!
//! A binding string is '+'-delimited, case-insensitive: "Ctrl+Alt+F7".
//! Modifier tokens OR into the modifier mask; any other token is tried
//! against the key-name table, last valid hit wins. A string with no valid
//! key token still yields a usable binding (F7 with whatever modifiers
//! parsed), so a broken config never blocks startup.

use crate::keymap;

// RegisterHotKey modifier flags (winuser.h).
pub const MOD_ALT: u32 = 0x0001;
pub const MOD_CONTROL: u32 = 0x0002;
pub const MOD_SHIFT: u32 = 0x0004;
pub const MOD_WIN: u32 = 0x0008;

pub const VK_F7: u32 = 0x76;
pub const VK_F8: u32 = 0x77;

/// Binding string substituted when the config omits or blanks out "toggle".
pub const DEFAULT_TOGGLE: &str = "F7";
/// Binding string substituted when the config omits or blanks out "exit".
pub const DEFAULT_EXIT: &str = "F8";

/// A parsed hotkey: virtual-key code plus modifier mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HotkeySpec {
    /// Virtual-key code
    pub vk: u32,
    /// Modifier flags (Ctrl, Alt, Shift, Win)
    pub modifiers: u32,
}

impl HotkeySpec {
    /// Human-readable form for tooltips and logs, e.g. "Ctrl+Alt+F7".
    pub fn display_name(&self) -> String {
        let mut parts = Vec::new();
        if self.modifiers & MOD_CONTROL != 0 {
            parts.push("Ctrl".to_string());
        }
        if self.modifiers & MOD_SHIFT != 0 {
            parts.push("Shift".to_string());
        }
        if self.modifiers & MOD_ALT != 0 {
            parts.push("Alt".to_string());
        }
        if self.modifiers & MOD_WIN != 0 {
            parts.push("Win".to_string());
        }
        parts.push(keymap::vk_name(self.vk));
        parts.join("+")
    }
}

/// The two bindings held for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HotkeySettings {
    pub toggle: HotkeySpec,
    pub exit: HotkeySpec,
}

impl Default for HotkeySettings {
    fn default() -> Self {
        Self {
            toggle: parse(DEFAULT_TOGGLE),
            exit: parse(DEFAULT_EXIT),
        }
    }
}

/// Parse a binding string. Unknown tokens are dropped silently; if no key
/// token survives, the key falls back to F7.
pub fn parse(input: &str) -> HotkeySpec {
    let mut modifiers = 0u32;
    let mut vk = None;

    for raw in input.split('+') {
        let token = raw.trim();
        if token.is_empty() {
            continue;
        }
        if token.eq_ignore_ascii_case("ctrl") || token.eq_ignore_ascii_case("control") {
            modifiers |= MOD_CONTROL;
        } else if token.eq_ignore_ascii_case("alt") {
            modifiers |= MOD_ALT;
        } else if token.eq_ignore_ascii_case("shift") {
            modifiers |= MOD_SHIFT;
        } else if token.eq_ignore_ascii_case("win") || token.eq_ignore_ascii_case("windows") {
            modifiers |= MOD_WIN;
        } else if let Some(code) = keymap::lookup(token) {
            vk = Some(code);
        }
    }

    HotkeySpec {
        vk: vk.unwrap_or(VK_F7),
        modifiers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_modifiers_and_key() {
        let spec = parse("Ctrl+Alt+F7");
        assert_eq!(spec.modifiers, MOD_CONTROL | MOD_ALT);
        assert_eq!(spec.vk, VK_F7);
    }

    #[test]
    fn empty_and_garbage_default_to_f7() {
        let expected = HotkeySpec {
            vk: VK_F7,
            modifiers: 0,
        };
        assert_eq!(parse(""), expected);
        assert_eq!(parse("   "), expected);
        assert_eq!(parse("garbage"), expected);
    }

    #[test]
    fn repeated_modifiers_are_idempotent() {
        let spec = parse("shift+shift+f9");
        assert_eq!(spec.modifiers, MOD_SHIFT);
        assert_eq!(spec.vk, 0x78);
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!(parse("CTRL+f7"), parse("Ctrl+F7"));
        assert_eq!(parse("WINDOWS+a"), parse("Win+A"));
    }

    #[test]
    fn modifier_aliases() {
        assert_eq!(parse("Control+F1"), parse("Ctrl+F1"));
        assert_eq!(parse("Windows+F1"), parse("Win+F1"));
    }

    #[test]
    fn last_valid_key_wins() {
        assert_eq!(parse("F1+F2").vk, 0x71);
        assert_eq!(parse("Ctrl+F13+F9").vk, 0x78);
    }

    #[test]
    fn unknown_key_tokens_are_dropped() {
        let spec = parse("Ctrl+Bogus+F5");
        assert_eq!(spec.vk, 0x74);
        assert_eq!(spec.modifiers, MOD_CONTROL);
    }

    #[test]
    fn modifiers_survive_a_missing_key() {
        let spec = parse("Ctrl+Alt");
        assert_eq!(spec.vk, VK_F7);
        assert_eq!(spec.modifiers, MOD_CONTROL | MOD_ALT);
    }

    #[test]
    fn tokens_may_carry_whitespace() {
        assert_eq!(parse(" Ctrl + F7 "), parse("Ctrl+F7"));
    }

    #[test]
    fn default_settings_are_f7_and_f8() {
        let settings = HotkeySettings::default();
        assert_eq!(settings.toggle.vk, VK_F7);
        assert_eq!(settings.toggle.modifiers, 0);
        assert_eq!(settings.exit.vk, VK_F8);
        assert_eq!(settings.exit.modifiers, 0);
    }

    #[test]
    fn display_name_orders_modifiers() {
        assert_eq!(parse("alt+ctrl+f7").display_name(), "Ctrl+Alt+F7");
        assert_eq!(parse("win+shift+a").display_name(), "Shift+Win+A");
        assert_eq!(parse("F8").display_name(), "F8");
    }
}
