#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    if let Err(err) = rosgrade_ui::run() {
        eprintln!("rosgrade failed: {err}");
        std::process::exit(1);
    }
}
