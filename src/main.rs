#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! proxy-hotkey: tray utility that toggles the Windows system proxy flag
//! with a global hotkey and exits on a second one.

mod config;
mod keymap;
mod proxy;

#[cfg(windows)]
mod app;
#[cfg(windows)]
mod listener;
#[cfg(windows)]
mod tray;

#[cfg(windows)]
fn main() -> anyhow::Result<()> {
    app::run()
}

#[cfg(not(windows))]
fn main() {
    eprintln!("proxy-hotkey only runs on Windows");
    std::process::exit(1);
}
