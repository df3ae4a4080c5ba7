//! Fare tables for both zones

use serde::Serialize;

use crate::support::errors::{DomainError, DomainResult};

/// Base zone step fares indexed by distance, 0 and 1 sharing the first step.
pub const DEFAULT_BASE_FARES: [u32; 8] = [16, 23, 26, 30, 33, 37, 40, 44];

pub const DEFAULT_EXTENSION_MINIMUM: u32 = 15;
pub const DEFAULT_EXTENSION_PER_STATION: u32 = 3;

/// Upper bound for any configured fare or per-station increment
pub const MAX_FARE: u32 = 10_000;

/// Step table mapping a base zone distance to a fare
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BaseFareTable {
    steps: Vec<u32>,
}

impl BaseFareTable {
    /// `steps[0]` prices distances 0 and 1, `steps[k]` prices distance
    /// `k + 1`, and the last step prices everything farther.
    pub fn new(steps: Vec<u32>) -> DomainResult<Self> {
        if steps.is_empty() {
            return Err(DomainError::InvalidFareTable(
                "base fare table is empty".to_string(),
            ));
        }
        if let Some(pair) = steps.windows(2).find(|pair| pair[0] > pair[1]) {
            return Err(DomainError::InvalidFareTable(format!(
                "base fares must not decrease ({} then {})",
                pair[0], pair[1]
            )));
        }
        if let Some(fare) = steps.iter().find(|fare| **fare > MAX_FARE) {
            return Err(DomainError::InvalidFareTable(format!(
                "base fare {} exceeds {}",
                fare, MAX_FARE
            )));
        }
        Ok(Self { steps })
    }

    pub fn fare_for(&self, distance: u32) -> u32 {
        let step = (distance.max(1) - 1) as usize;
        self.steps
            .get(step)
            .or_else(|| self.steps.last())
            .copied()
            .unwrap_or_default()
    }

    pub fn minimum(&self) -> u32 {
        self.fare_for(0)
    }

    pub fn maximum(&self) -> u32 {
        self.steps.last().copied().unwrap_or_default()
    }

    pub fn steps(&self) -> &[u32] {
        &self.steps
    }
}

impl Default for BaseFareTable {
    fn default() -> Self {
        Self {
            steps: DEFAULT_BASE_FARES.to_vec(),
        }
    }
}

/// Linear extension zone pricing: boarding fee plus a per-station increment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExtensionFareFormula {
    pub minimum_fare: u32,
    pub per_station: u32,
}

impl ExtensionFareFormula {
    pub fn new(minimum_fare: u32, per_station: u32) -> DomainResult<Self> {
        if minimum_fare > MAX_FARE || per_station > MAX_FARE {
            return Err(DomainError::InvalidFareTable(format!(
                "extension fares {} + {}/station exceed {}",
                minimum_fare, per_station, MAX_FARE
            )));
        }
        Ok(Self {
            minimum_fare,
            per_station,
        })
    }

    /// Saturates instead of wrapping for absurd station counts.
    pub fn fare_for(&self, stations: u32) -> u32 {
        self.per_station
            .saturating_mul(stations)
            .saturating_add(self.minimum_fare)
    }
}

impl Default for ExtensionFareFormula {
    fn default() -> Self {
        Self {
            minimum_fare: DEFAULT_EXTENSION_MINIMUM,
            per_station: DEFAULT_EXTENSION_PER_STATION,
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────
