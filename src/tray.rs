//! Tray icon reflecting the current proxy state.
//!
//! The two icons (enabled/disabled) are rendered in code as RGBA discs, so
//! the binary ships no image assets. No menu and no balloons; the tooltip
//! carries the state and the toggle binding.

use anyhow::Result;
use lazy_static::lazy_static;
use tray_icon::{Icon, TrayIcon, TrayIconBuilder};

const ICON_SIZE: u32 = 32;

// Wrapper to make Icon usable from lazy_static.
struct SafeIcon(Icon);
unsafe impl Send for SafeIcon {}
unsafe impl Sync for SafeIcon {}

lazy_static! {
    static ref ICON_ENABLED: SafeIcon = SafeIcon(build_icon(true));
    static ref ICON_DISABLED: SafeIcon = SafeIcon(build_icon(false));
}

fn build_icon(enabled: bool) -> Icon {
    let rgba = render_disc(if enabled {
        [0x2E, 0xCC, 0x71, 0xFF] // green: proxy on
    } else {
        [0x95, 0xA5, 0xA6, 0xFF] // grey: proxy off
    });
    Icon::from_rgba(rgba, ICON_SIZE, ICON_SIZE).expect("icon buffer has fixed dimensions")
}

fn state_icon(enabled: bool) -> Icon {
    if enabled {
        ICON_ENABLED.0.clone()
    } else {
        ICON_DISABLED.0.clone()
    }
}

/// Filled disc on a transparent background.
fn render_disc(color: [u8; 4]) -> Vec<u8> {
    let mut buf = vec![0u8; (ICON_SIZE * ICON_SIZE * 4) as usize];
    let center = (ICON_SIZE as f32 - 1.0) / 2.0;
    let radius = ICON_SIZE as f32 / 2.0 - 1.0;
    for y in 0..ICON_SIZE {
        for x in 0..ICON_SIZE {
            let dx = x as f32 - center;
            let dy = y as f32 - center;
            if dx * dx + dy * dy <= radius * radius {
                let i = ((y * ICON_SIZE + x) * 4) as usize;
                buf[i..i + 4].copy_from_slice(&color);
            }
        }
    }
    buf
}

fn tooltip(enabled: bool, toggle_label: &str) -> String {
    let state = if enabled { "on" } else { "off" };
    format!("Proxy: {state} ({toggle_label} toggles)")
}

/// The tray handle plus the label baked into its tooltip.
pub struct Tray {
    icon: TrayIcon,
    toggle_label: String,
}

// The handle is only touched from the thread that built it (the message
// pump); Send is required so it can sit in the lazy_static app state.
unsafe impl Send for Tray {}

impl Tray {
    pub fn new(enabled: bool, toggle_label: &str) -> Result<Self> {
        let icon = TrayIconBuilder::new()
            .with_tooltip(tooltip(enabled, toggle_label))
            .with_icon(state_icon(enabled))
            .build()
            .map_err(|e| anyhow::anyhow!("failed to create tray icon: {e}"))?;
        Ok(Self {
            icon,
            toggle_label: toggle_label.to_string(),
        })
    }

    /// Swap icon and tooltip after a toggle.
    pub fn refresh(&mut self, enabled: bool) {
        let _ = self.icon.set_icon(Some(state_icon(enabled)));
        let _ = self
            .icon
            .set_tooltip(Some(tooltip(enabled, &self.toggle_label)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disc_buffer_has_icon_dimensions() {
        let buf = render_disc([0xFF, 0x00, 0x00, 0xFF]);
        assert_eq!(buf.len(), (ICON_SIZE * ICON_SIZE * 4) as usize);
    }

    #[test]
    fn disc_corners_are_transparent_and_center_opaque() {
        let buf = render_disc([0x2E, 0xCC, 0x71, 0xFF]);
        // Top-left corner lies outside the disc.
        assert_eq!(&buf[0..4], &[0, 0, 0, 0]);
        let mid = ICON_SIZE / 2;
        let center = ((mid * ICON_SIZE + mid) * 4) as usize;
        assert_eq!(buf[center + 3], 0xFF);
    }

    #[test]
    fn states_render_differently() {
        assert_ne!(
            render_disc([0x2E, 0xCC, 0x71, 0xFF]),
            render_disc([0x95, 0xA5, 0xA6, 0xFF])
        );
    }

    #[test]
    fn tooltip_names_state_and_binding() {
        assert_eq!(tooltip(true, "F7"), "Proxy: on (F7 toggles)");
        assert_eq!(tooltip(false, "Ctrl+Alt+F7"), "Proxy: off (Ctrl+Alt+F7 toggles)");
    }
}
