//! Global hotkey listener: hidden window, RegisterHotKey, message pump.
//!
//! Runs on the main thread so the tray icon shares the same pump. The pump
//! ends when the exit hotkey posts WM_QUIT.

use anyhow::Result;
use tracing::{info, warn};
use windows::core::w;
use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::Input::KeyboardAndMouse::{
    RegisterHotKey, UnregisterHotKey, HOT_KEY_MODIFIERS,
};
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, DefWindowProcW, DestroyWindow, DispatchMessageW, GetMessageW,
    PostQuitMessage, RegisterClassW, TranslateMessage, MSG, WINDOW_EX_STYLE, WM_HOTKEY,
    WNDCLASSW, WS_OVERLAPPEDWINDOW,
};

use crate::config::{HotkeySettings, HotkeySpec};

const HOTKEY_TOGGLE_ID: i32 = 1;
const HOTKEY_EXIT_ID: i32 = 2;

/// Register both hotkeys and pump messages until the exit hotkey fires.
pub fn run(settings: &HotkeySettings) -> Result<()> {
    unsafe {
        let instance = GetModuleHandleW(None)?;

        let class_name = w!("ProxyHotkeyListenerClass");
        let wc = WNDCLASSW {
            lpfnWndProc: Some(listener_proc),
            hInstance: instance.into(),
            lpszClassName: class_name,
            ..Default::default()
        };
        // Registration fails if the class already exists, which is fine.
        let _ = RegisterClassW(&wc);

        let hwnd = CreateWindowExW(
            WINDOW_EX_STYLE::default(),
            class_name,
            w!("proxy-hotkey listener"),
            WS_OVERLAPPEDWINDOW,
            0,
            0,
            0,
            0,
            None,
            None,
            Some(instance.into()),
            None,
        )
        .unwrap_or_default();
        if hwnd.is_invalid() {
            anyhow::bail!("failed to create hotkey listener window");
        }

        register(hwnd, HOTKEY_TOGGLE_ID, &settings.toggle);
        register(hwnd, HOTKEY_EXIT_ID, &settings.exit);

        let mut msg = MSG::default();
        while GetMessageW(&mut msg, None, 0, 0).as_bool() {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }

        for id in [HOTKEY_TOGGLE_ID, HOTKEY_EXIT_ID] {
            let _ = UnregisterHotKey(Some(hwnd), id);
        }
        let _ = DestroyWindow(hwnd);
    }
    Ok(())
}

fn register(hwnd: HWND, id: i32, spec: &HotkeySpec) {
    unsafe {
        // A failed registration (e.g. the binding is taken by another
        // program) must not prevent startup.
        if let Err(e) = RegisterHotKey(Some(hwnd), id, HOT_KEY_MODIFIERS(spec.modifiers), spec.vk)
        {
            warn!(id, binding = %spec.display_name(), error = %e, "hotkey registration failed");
        } else {
            info!(id, binding = %spec.display_name(), "hotkey registered");
        }
    }
}

unsafe extern "system" fn listener_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    match msg {
        WM_HOTKEY => {
            match wparam.0 as i32 {
                HOTKEY_TOGGLE_ID => crate::app::toggle_and_refresh(),
                HOTKEY_EXIT_ID => {
                    info!("exit hotkey pressed");
                    PostQuitMessage(0);
                }
                _ => {}
            }
            LRESULT(0)
        }
        _ => DefWindowProcW(hwnd, msg, wparam, lparam),
    }
}
