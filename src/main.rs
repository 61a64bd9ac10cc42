use glint::{Simulation, TrailConfig};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => match TrailConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Could not load {}: {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        None => TrailConfig::default(),
    };

    match Simulation::new().with_config(config).run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
