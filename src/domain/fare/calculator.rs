//! Fare calculation over a fixed topology

use std::fmt;

use serde::Serialize;

use super::table::{BaseFareTable, ExtensionFareFormula};
use crate::domain::grid::DistanceGrid;
use crate::domain::station::{StationCode, Topology, Zone};
use crate::support::errors::{DomainError, DomainResult};

/// Which zones a trip touches, in dispatch order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TripZone {
    ExtensionToBase,
    BaseToExtension,
    BothBase,
    BothExtension,
}

impl TripZone {
    pub fn classify(origin: Zone, dest: Zone) -> Self {
        match (origin, dest) {
            (Zone::Extension, Zone::Base) => Self::ExtensionToBase,
            (Zone::Base, Zone::Extension) => Self::BaseToExtension,
            (Zone::Base, Zone::Base) => Self::BothBase,
            (Zone::Extension, Zone::Extension) => Self::BothExtension,
        }
    }

    pub fn crosses_seam(self) -> bool {
        matches!(self, Self::ExtensionToBase | Self::BaseToExtension)
    }
}

impl fmt::Display for TripZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExtensionToBase => write!(f, "ExtensionToBase"),
            Self::BaseToExtension => write!(f, "BaseToExtension"),
            Self::BothBase => write!(f, "BothBase"),
            Self::BothExtension => write!(f, "BothExtension"),
        }
    }
}

/// Per-zone fare breakdown for a single trip
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FareBreakdown {
    pub zone: TripZone,
    /// Fee charged for the base zone part, if any
    pub base_zone_fee: Option<u32>,
    /// Fee charged for the extension zone part, if any
    pub extension_zone_fee: Option<u32>,
    pub total: u32,
}

/// Prices trips on a topology with a precomputed base zone grid.
///
/// The calculator never mutates after construction, every query is a
/// pure function of its inputs.
#[derive(Debug, Clone)]
pub struct FareCalculator {
    topology: Topology,
    grid: DistanceGrid,
    base_table: BaseFareTable,
    extension: ExtensionFareFormula,
}

impl FareCalculator {
    pub fn new(
        topology: Topology,
        base_table: BaseFareTable,
        extension: ExtensionFareFormula,
    ) -> DomainResult<Self> {
        let grid = DistanceGrid::build(topology.base())?;
        Ok(Self {
            topology,
            grid,
            base_table,
            extension,
        })
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn grid(&self) -> &DistanceGrid {
        &self.grid
    }

    pub fn base_table(&self) -> &BaseFareTable {
        &self.base_table
    }

    pub fn extension_formula(&self) -> ExtensionFareFormula {
        self.extension
    }

    /// Fare between two base zone stations, looked up through the grid.
    pub fn base_fare(&self, origin: &StationCode, dest: &StationCode) -> DomainResult<u32> {
        let distance = self.grid.distance(origin, dest)?;
        Ok(self.base_table.fare_for(distance))
    }

    /// Linear fare from the ordinals alone, no grid involved.
    pub fn extension_fare(&self, origin: &StationCode, dest: &StationCode) -> u32 {
        self.extension
            .fare_for(origin.ordinal().abs_diff(dest.ordinal()))
    }

    pub fn classify(&self, origin: &StationCode, dest: &StationCode) -> DomainResult<TripZone> {
        Ok(TripZone::classify(self.zone(origin)?, self.zone(dest)?))
    }

    pub fn compute_fare(&self, origin: &StationCode, dest: &StationCode) -> DomainResult<u32> {
        Ok(self.compute_breakdown(origin, dest)?.total)
    }

    pub fn compute_breakdown(
        &self,
        origin: &StationCode,
        dest: &StationCode,
    ) -> DomainResult<FareBreakdown> {
        let zone = self.classify(origin, dest)?;

        let breakdown = match zone {
            TripZone::ExtensionToBase => self.seam_breakdown(zone, dest, origin)?,
            TripZone::BaseToExtension => self.seam_breakdown(zone, origin, dest)?,
            TripZone::BothBase => {
                let fee = self.base_fare(origin, dest)?;
                FareBreakdown {
                    zone,
                    base_zone_fee: Some(fee),
                    extension_zone_fee: None,
                    total: fee,
                }
            }
            TripZone::BothExtension => {
                let fee = self.extension_fare(origin, dest);
                FareBreakdown {
                    zone,
                    base_zone_fee: None,
                    extension_zone_fee: Some(fee),
                    total: fee,
                }
            }
        };

        Ok(breakdown)
    }

    /// Both partial fees are anchored at the fixed seam pair; the
    /// extension minimum is charged only once. The extension fee never
    /// drops below that minimum, so the subtraction cannot underflow.
    fn seam_breakdown(
        &self,
        zone: TripZone,
        base_station: &StationCode,
        extension_station: &StationCode,
    ) -> DomainResult<FareBreakdown> {
        let boundary = self.topology.boundary();
        let base_fee = self.base_fare(base_station, &boundary.base)?;
        let extension_fee = self.extension_fare(&boundary.extension, extension_station);

        Ok(FareBreakdown {
            zone,
            base_zone_fee: Some(base_fee),
            extension_zone_fee: Some(extension_fee),
            total: base_fee.saturating_add(extension_fee - self.extension.minimum_fare),
        })
    }

    fn zone(&self, code: &StationCode) -> DomainResult<Zone> {
        self.topology
            .zone_of(code)
            .ok_or_else(|| DomainError::unknown_station(code))
    }
}

// ── Tests ──────────────────────────────────────────────────────
