//! # BTS fare engine
//!
//! Fare pricing for a two-line transit network (north and east arms
//! meeting at a junction) with a linear extension beyond the north arm,
//! plus an interactive ticket counter built on top of it.
//!
//! ## Architecture
//!
//! - **domain**: station codes, topology, distance grid, fare tables and calculator
//! - **application**: fare quoting and ticket sales
//! - **infrastructure**: station name list loading
//! - **interfaces**: interactive console session
//! - **config** / **logging**: TOML configuration and tracing setup

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod logging;
pub mod support;

pub use config::{config_path_from_env, default_config_path, AppConfig};
pub use logging::{init_default_tracing, init_tracing};

pub use application::{FareQuote, FareService, SalesSummary, TicketOffice};
pub use domain::{DistanceGrid, FareCalculator, StationCode, Topology};
pub use infrastructure::StationDirectory;
pub use interfaces::ConsoleSession;
pub use support::errors::{AppError, DomainError, InfraError};

use std::sync::Arc;

use tracing::warn;

/// Wire up a [`FareService`] from config: build the calculator and load
/// station names. A missing names file is not fatal, names then show as
/// `None`.
pub fn build_fare_service(config: &AppConfig) -> Result<FareService, AppError> {
    let calculator = config.build_calculator()?;

    let names_file = &config.stations.names_file;
    let directory = match StationDirectory::load(names_file) {
        Ok(directory) => directory,
        Err(e) => {
            warn!(
                path = %names_file.display(),
                error = %e,
                "Station names unavailable, continuing without them"
            );
            StationDirectory::empty()
        }
    };

    Ok(FareService::new(
        Arc::new(calculator),
        Arc::new(directory),
        config.fares.currency.clone(),
    ))
}
