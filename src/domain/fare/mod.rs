//! Fare aggregate
//!
//! Zone fare tables and the calculator that dispatches a trip to them.

pub mod calculator;
pub mod table;

pub use calculator::{FareBreakdown, FareCalculator, TripZone};
pub use table::{BaseFareTable, ExtensionFareFormula};
