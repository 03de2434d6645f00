//! University Portal - Entry Point
//!
//! Registration, login and role dashboards over a local key-value store,
//! driven from a line console on stdin/stdout.

use log::{error, info};
use tokio::io::BufReader;

use uniportal::Portal;
use uniportal::config::PortalConfig;
use uniportal::console::run_console;
use uniportal::logging;

#[tokio::main]
async fn main() {
    logging::setup_logging();

    let config = match std::env::args().nth(1) {
        Some(path) => PortalConfig::load_from(&path),
        None => PortalConfig::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };
    info!("Launching portal with {:?} storage", config.storage.backend);

    let mut portal = match Portal::open(config) {
        Ok(portal) => portal,
        Err(e) => {
            error!("Failed to open portal: {}", e);
            std::process::exit(1);
        }
    };
    info!("Directory holds {} users", portal.directory().len());

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();

    if let Err(e) = run_console(&mut portal, stdin, &mut stdout).await {
        error!("Console stopped: {}", e);
        std::process::exit(1);
    }
}
