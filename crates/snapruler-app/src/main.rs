//! Replay entry point: `snapruler <script.json>`.

use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Starting SnapRuler");

    let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) else {
        eprintln!("usage: snapruler <script.json>");
        return ExitCode::from(2);
    };

    match snapruler_app::run(&path) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}: {}", path.display(), e);
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
