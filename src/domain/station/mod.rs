//! Station aggregate
//!
//! Station codes, their parser, and the base/extension network layout.

pub mod code;
pub mod topology;

pub use code::{Line, StationCode, JUNCTION_CODE};
pub use topology::{SeamBoundary, Topology, Zone};
