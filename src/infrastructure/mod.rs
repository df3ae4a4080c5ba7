//! Infrastructure layer - external concerns

pub mod station_directory;

pub use station_directory::StationDirectory;
