pub mod fare;
pub mod grid;
pub mod station;

// Re-export commonly used types
pub use fare::{BaseFareTable, ExtensionFareFormula, FareBreakdown, FareCalculator, TripZone};
pub use grid::DistanceGrid;
pub use station::{Line, SeamBoundary, StationCode, Topology, Zone, JUNCTION_CODE};

pub use crate::support::errors::{DomainError, DomainResult};
