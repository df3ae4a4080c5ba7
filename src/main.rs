//! BTS ticket counter
//!
//! Interactive fare quoting and ticket sales on stdin/stdout.
//! Reads configuration from TOML file (~/.config/bts-fare/config.toml).

use tracing::{error, info};

use bts_fare::{
    build_fare_service, config_path_from_env, init_default_tracing, init_tracing, AppConfig,
    ConsoleSession,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = config_path_from_env();
    let config = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            init_tracing(&cfg);
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            init_default_tracing();
            error!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        }
    };

    let service = build_fare_service(&config)?;
    info!(
        stations = service.calculator().topology().station_count(),
        names = service.directory().len(),
        "Fare engine ready"
    );

    // ── Sales loop ─────────────────────────────────────────────
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let summary = ConsoleSession::new(&service, stdin.lock(), stdout.lock()).run()?;

    info!(
        tickets_sold = summary.tickets_sold,
        total_collected = summary.total_collected,
        "Session closed"
    );
    Ok(())
}
