//! orient3d - prints how yaw/pitch/roll map to quaternions and matrices
//!
//! Reads `config/` (see [`AppConfig`]) and prints one derivation per
//! configured sample orientation.

use orient3d::config::AppConfig;
use orient3d::report::Report;

fn main() {
    let loaded = AppConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    // Initialize logging; RUST_LOG still wins over the configured level
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();
    log::info!("Starting orient3d");

    if let Err(e) = &loaded {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }

    match Report::build(&config) {
        Ok(report) => print!("{}", report),
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    }
}
