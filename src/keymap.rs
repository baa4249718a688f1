//! Symbolic key names to Windows virtual-key codes.
//!
//! Reference: Windows Virtual-Key Codes (winuser.h). Letters and digits map
//! to their ASCII values (VK_A..VK_Z = 0x41..0x5A, VK_0..VK_9 = 0x30..0x39);
//! everything else gets an explicit entry. Lookups are case-insensitive and
//! exact, no partial or fuzzy matching.

/// Resolve a symbolic key name ("F7", "a", "PageUp") to its VK code.
///
/// Returns `None` for names outside the table; callers treat that as "not a
/// key token" and drop it.
pub fn lookup(name: &str) -> Option<u32> {
    let name = name.trim().to_ascii_uppercase();

    // Single letters and digits are their own VK codes.
    if name.len() == 1 {
        let c = name.as_bytes()[0];
        if c.is_ascii_uppercase() || c.is_ascii_digit() {
            return Some(c as u32);
        }
    }

    // Function keys F1..F24 (VK_F1 = 0x70). Exact digits only, no leading
    // zeros or signs.
    if let Some(n) = name.strip_prefix('F') {
        if !n.is_empty() && !n.starts_with('0') && n.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(idx) = n.parse::<u32>() {
                if (1..=24).contains(&idx) {
                    return Some(0x70 + idx - 1);
                }
            }
        }
    }

    // D0..D9, the digit-row aliases.
    if name.len() == 2 && name.starts_with('D') && name.as_bytes()[1].is_ascii_digit() {
        return Some(name.as_bytes()[1] as u32);
    }

    // Numpad0..Numpad9 (VK_NUMPAD0 = 0x60).
    if let Some(n) = name.strip_prefix("NUMPAD") {
        if n.len() == 1 && n.as_bytes()[0].is_ascii_digit() {
            return Some(0x60 + (n.as_bytes()[0] - b'0') as u32);
        }
    }

    let vk = match name.as_str() {
        "SPACE" => 0x20,
        "TAB" => 0x09,
        "ENTER" | "RETURN" => 0x0D,
        "ESCAPE" | "ESC" => 0x1B,
        "BACK" | "BACKSPACE" => 0x08,
        "INSERT" => 0x2D,
        "DELETE" => 0x2E,
        "HOME" => 0x24,
        "END" => 0x23,
        "PAGEUP" | "PRIOR" => 0x21,
        "PAGEDOWN" | "NEXT" => 0x22,
        "LEFT" => 0x25,
        "UP" => 0x26,
        "RIGHT" => 0x27,
        "DOWN" => 0x28,
        "PAUSE" => 0x13,
        "CAPSLOCK" | "CAPITAL" => 0x14,
        "NUMLOCK" => 0x90,
        "SCROLLLOCK" | "SCROLL" => 0x91,
        "PRINTSCREEN" | "SNAPSHOT" => 0x2C,
        "MULTIPLY" => 0x6A,
        "ADD" => 0x6B,
        "SUBTRACT" => 0x6D,
        "DECIMAL" => 0x6E,
        "DIVIDE" => 0x6F,
        _ => return None,
    };
    Some(vk)
}

/// Human-readable name for a VK code, for tooltips and logs.
pub fn vk_name(vk: u32) -> String {
    // Letters and digits round-trip through ASCII.
    if (0x41..=0x5A).contains(&vk) || (0x30..=0x39).contains(&vk) {
        return char::from_u32(vk).map(String::from).unwrap_or_default();
    }
    if (0x70..=0x87).contains(&vk) {
        return format!("F{}", vk - 0x70 + 1);
    }
    if (0x60..=0x69).contains(&vk) {
        return format!("Numpad{}", vk - 0x60);
    }
    match vk {
        0x20 => "Space",
        0x09 => "Tab",
        0x0D => "Enter",
        0x1B => "Escape",
        0x08 => "Backspace",
        0x2D => "Insert",
        0x2E => "Delete",
        0x24 => "Home",
        0x23 => "End",
        0x21 => "PageUp",
        0x22 => "PageDown",
        0x25 => "Left",
        0x26 => "Up",
        0x27 => "Right",
        0x28 => "Down",
        0x13 => "Pause",
        0x14 => "CapsLock",
        0x90 => "NumLock",
        0x91 => "ScrollLock",
        0x2C => "PrintScreen",
        0x6A => "Multiply",
        0x6B => "Add",
        0x6D => "Subtract",
        0x6E => "Decimal",
        0x6F => "Divide",
        _ => return format!("0x{vk:02X}"),
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_and_digits_map_to_ascii() {
        assert_eq!(lookup("a"), Some(0x41));
        assert_eq!(lookup("Z"), Some(0x5A));
        assert_eq!(lookup("0"), Some(0x30));
        assert_eq!(lookup("9"), Some(0x39));
    }

    #[test]
    fn digit_row_aliases_match_plain_digits() {
        assert_eq!(lookup("D0"), lookup("0"));
        assert_eq!(lookup("d5"), lookup("5"));
        assert_eq!(lookup("D9"), Some(0x39));
    }

    #[test]
    fn function_keys() {
        assert_eq!(lookup("F1"), Some(0x70));
        assert_eq!(lookup("F7"), Some(0x76));
        assert_eq!(lookup("F8"), Some(0x77));
        assert_eq!(lookup("F24"), Some(0x87));
        assert_eq!(lookup("F25"), None);
        assert_eq!(lookup("F0"), None);
        assert_eq!(lookup("F07"), None);
        assert_eq!(lookup("F+7"), None);
        // Bare "F" is the letter, not a truncated function key.
        assert_eq!(lookup("F"), Some(0x46));
    }

    #[test]
    fn numpad_keys() {
        assert_eq!(lookup("Numpad0"), Some(0x60));
        assert_eq!(lookup("numpad9"), Some(0x69));
        assert_eq!(lookup("Numpad10"), None);
    }

    #[test]
    fn named_keys_and_aliases() {
        assert_eq!(lookup("Space"), Some(0x20));
        assert_eq!(lookup("Enter"), lookup("Return"));
        assert_eq!(lookup("Esc"), lookup("Escape"));
        assert_eq!(lookup("PageUp"), lookup("Prior"));
        assert_eq!(lookup("PageDown"), lookup("Next"));
        assert_eq!(lookup("Backspace"), lookup("Back"));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(lookup("f7"), lookup("F7"));
        assert_eq!(lookup("SPACE"), lookup("space"));
        assert_eq!(lookup("pageup"), lookup("PAGEUP"));
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(lookup(""), None);
        assert_eq!(lookup("garbage"), None);
        // Modifier names are not key names; the parser handles them first.
        assert_eq!(lookup("Ctrl"), None);
        assert_eq!(lookup("Shift"), None);
    }

    #[test]
    fn vk_name_round_trips_common_keys() {
        for name in ["A", "5", "F7", "F24", "Space", "PageUp", "Numpad3", "Enter"] {
            let vk = lookup(name).unwrap();
            assert_eq!(vk_name(vk), name);
        }
    }

    #[test]
    fn vk_name_falls_back_to_hex() {
        assert_eq!(vk_name(0xE7), "0xE7");
    }
}
