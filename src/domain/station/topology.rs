//! Network topology
//!
//! The base zone is laid out as descending north stations, the junction,
//! then ascending east stations. The extension zone continues the north
//! line past the outermost base station.

use std::fmt;

use serde::Serialize;

use super::code::{Line, StationCode};
use crate::support::errors::{DomainError, DomainResult};

/// Fare zone a station belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Zone {
    Base,
    Extension,
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base => write!(f, "Base Station Zone"),
            Self::Extension => write!(f, "Extension Station Zone"),
        }
    }
}

/// The pair of adjacent stations straddling the base/extension seam.
///
/// Cross-zone trips are always priced through this pair, whatever line
/// the base-side station is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeamBoundary {
    /// Outermost base station on the north line
    pub base: StationCode,
    /// Innermost extension station
    pub extension: StationCode,
}

/// Validated base and extension station lists
#[derive(Debug, Clone)]
pub struct Topology {
    base: Vec<StationCode>,
    extension: Vec<StationCode>,
    boundary: SeamBoundary,
}

impl Topology {
    pub fn new(base: Vec<StationCode>, extension: Vec<StationCode>) -> DomainResult<Self> {
        let outermost_base = validate_base(&base)?;
        let innermost_extension = validate_extension(&extension, outermost_base.ordinal())?;

        Ok(Self {
            base,
            extension,
            boundary: SeamBoundary {
                base: outermost_base,
                extension: innermost_extension,
            },
        })
    }

    /// Build the usual layout: `N<base_north>..N1, CEN, E1..E<base_east>`
    /// for the base zone and `N<extension_last>..N<base_north + 1>` for the
    /// extension.
    pub fn standard(base_north: u32, base_east: u32, extension_last: u32) -> DomainResult<Self> {
        let base = (1..=base_north)
            .rev()
            .map(StationCode::north)
            .chain(std::iter::once(StationCode::Junction))
            .chain((1..=base_east).map(StationCode::east))
            .collect();
        let extension = (base_north + 1..=extension_last)
            .rev()
            .map(StationCode::north)
            .collect();

        Self::new(base, extension)
    }

    pub fn base(&self) -> &[StationCode] {
        &self.base
    }

    pub fn extension(&self) -> &[StationCode] {
        &self.extension
    }

    pub fn boundary(&self) -> SeamBoundary {
        self.boundary
    }

    pub fn is_base(&self, code: &StationCode) -> bool {
        self.base.contains(code)
    }

    pub fn is_extension(&self, code: &StationCode) -> bool {
        self.extension.contains(code)
    }

    pub fn contains(&self, code: &StationCode) -> bool {
        self.zone_of(code).is_some()
    }

    pub fn zone_of(&self, code: &StationCode) -> Option<Zone> {
        if self.is_base(code) {
            Some(Zone::Base)
        } else if self.is_extension(code) {
            Some(Zone::Extension)
        } else {
            None
        }
    }

    /// Farthest stations of the network, used for the `N24-E9` prompt hint.
    pub fn ends(&self) -> (StationCode, StationCode) {
        let first = self.extension.first().copied().unwrap_or(self.boundary.base);
        let last = self.base.last().copied().unwrap_or(self.boundary.base);
        (first, last)
    }

    pub fn station_count(&self) -> usize {
        self.base.len() + self.extension.len()
    }
}

/// Check the base layout and return its outermost north station
/// (the junction when the north side is empty).
fn validate_base(base: &[StationCode]) -> DomainResult<StationCode> {
    let junctions = base.iter().filter(|c| c.is_junction()).count();
    if junctions != 1 {
        return Err(DomainError::InvalidTopology(format!(
            "base zone needs exactly one junction, found {}",
            junctions
        )));
    }

    let split = base.iter().position(|c| c.is_junction()).unwrap_or(0);
    let (north, east) = (&base[..split], &base[split + 1..]);

    check_arm(north, Line::North, |prev, next| prev > next, "descending")?;
    check_arm(east, Line::East, |prev, next| prev < next, "ascending")?;

    Ok(north.first().copied().unwrap_or(StationCode::Junction))
}

/// Check the extension layout and return its innermost station.
fn validate_extension(extension: &[StationCode], seam_ordinal: u32) -> DomainResult<StationCode> {
    check_arm(extension, Line::North, |prev, next| prev > next, "descending")?;

    let innermost = extension.last().copied().ok_or_else(|| {
        DomainError::InvalidTopology("extension zone has no stations".to_string())
    })?;
    if innermost.ordinal() <= seam_ordinal {
        return Err(DomainError::InvalidTopology(format!(
            "extension station {} does not lie beyond the base zone (N{})",
            innermost, seam_ordinal
        )));
    }

    Ok(innermost)
}

fn check_arm(
    arm: &[StationCode],
    line: Line,
    ordered: impl Fn(u32, u32) -> bool,
    order_name: &str,
) -> DomainResult<()> {
    if let Some(stray) = arm
        .iter()
        .find(|c| c.is_junction() || c.line() != line)
    {
        return Err(DomainError::InvalidTopology(format!(
            "station {} is out of place on the {} arm",
            stray, line
        )));
    }

    for pair in arm.windows(2) {
        if !ordered(pair[0].ordinal(), pair[1].ordinal()) {
            return Err(DomainError::InvalidTopology(format!(
                "{} line must be strictly {}: {} then {}",
                line, order_name, pair[0], pair[1]
            )));
        }
    }

    Ok(())
}

// ── Tests ──────────────────────────────────────────────────────
