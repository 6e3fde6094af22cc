#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    launcher_desktop::logging::init();

    if let Err(e) = launcher_desktop::run() {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}
