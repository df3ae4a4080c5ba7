//! BTS fare engine: command line front end
//!
//! ```sh
//! # Interactive ticket counter (default)
//! fare-cli
//!
//! # One-shot quote, optionally as JSON
//! fare-cli quote N13 E4
//! fare-cli quote N13 E4 --json
//!
//! # List stations, or distances from one base station
//! fare-cli stations
//! fare-cli grid --from CEN
//!
//! # Validate config without running
//! fare-cli --check
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{error, info};

use bts_fare::domain::Zone;
use bts_fare::{
    build_fare_service, default_config_path, init_tracing, AppConfig, ConsoleSession, FareService,
};

/// BTS fare engine: quotes fares and sells tickets.
#[derive(Parser, Debug)]
#[command(
    name = "fare-cli",
    version,
    about = "Fare quoting and ticket sales for the BTS base and extension zones",
    long_about = "Fare quoting and ticket sales for the BTS base and extension zones.\n\n\
                  Default config: ~/.config/bts-fare/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "BTS_FARE_CONFIG")]
    config: Option<PathBuf>,

    /// Override the station names file.
    #[arg(long)]
    names_file: Option<PathBuf>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit.
    #[arg(long)]
    check: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the interactive ticket counter.
    Sell,
    /// Quote the fare between two stations.
    Quote {
        origin: String,
        destination: String,
        /// Print the quote as JSON.
        #[arg(long)]
        json: bool,
    },
    /// List every station with its zone and name.
    Stations,
    /// Print distances from one base station to every other.
    Grid {
        #[arg(long)]
        from: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli.config.unwrap_or_else(default_config_path);
    let (mut config, load_error) = match AppConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        if let Some(e) = load_error {
            eprintln!("❌ Configuration is invalid: {}", e);
            eprintln!("   Config file : {}", config_path.display());
            std::process::exit(1);
        }
        let calculator = config.build_calculator()?;
        let topology = calculator.topology();
        let (first, last) = topology.ends();
        println!("✅ Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   Stations    : {} ({}-{})", topology.station_count(), first, last);
        println!(
            "   Seam        : {} / {}",
            topology.boundary().base,
            topology.boundary().extension
        );
        println!("   Base fares  : {:?}", calculator.base_table().steps());
        println!("   Names file  : {}", config.stations.names_file.display());
        println!("   Log level   : {}", config.logging.level);
        return Ok(());
    }

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    init_tracing(&config);
    match load_error {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) => {
            error!("Failed to load config from {}: {}", config_path.display(), e);
            error!("Using default configuration.");
        }
    }

    if let Some(path) = cli.names_file {
        info!("CLI override: names_file = {}", path.display());
        config.stations.names_file = path;
    }

    run(cli.command, &config)
}

fn run(command: Option<Command>, config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let service = build_fare_service(config)?;

    match command.unwrap_or(Command::Sell) {
        Command::Sell => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            ConsoleSession::new(&service, stdin.lock(), stdout.lock()).run()?;
        }
        Command::Quote {
            origin,
            destination,
            json,
        } => {
            let quote = service.quote_codes(&origin, &destination)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&quote)?);
            } else {
                let breakdown = &quote.breakdown;
                if let Some(fee) = breakdown.base_zone_fee {
                    println!("Base Station Zone: Fee = {} {}", fee, quote.currency);
                }
                if let Some(fee) = breakdown.extension_zone_fee {
                    println!("Extension Station Zone: Fee = {} {}", fee, quote.currency);
                }
                if breakdown.zone.crosses_seam() {
                    let boundary = service.calculator().topology().boundary();
                    println!("Via seam {} / {}", boundary.base, boundary.extension);
                }
                println!("{} -> {}: Fee = {}", quote.origin, quote.destination, quote.total());
            }
        }
        Command::Stations => print_stations(&service),
        Command::Grid { from } => {
            let from = service.validate_station(&from)?;
            let grid = service.calculator().grid();
            if !grid.contains(&from) {
                return Err(format!("{} is not a base zone station", from).into());
            }
            for (to, distance) in grid.row(&from)? {
                println!("{:>4} {:>3}", to.to_string(), distance);
            }
        }
    }

    Ok(())
}

fn print_stations(service: &FareService) {
    let topology = service.calculator().topology();
    let stations = topology.extension().iter().chain(topology.base());
    for code in stations {
        let zone = match topology.zone_of(code) {
            Some(Zone::Base) => "base",
            Some(Zone::Extension) => "extension",
            None => continue,
        };
        let name = service.directory().name_of(code).unwrap_or("-");
        println!("{:>4}  {:<9}  {}", code.to_string(), zone, name);
    }
}
