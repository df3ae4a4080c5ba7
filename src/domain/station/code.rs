//! Station code entity
//!
//! A station code is `<Line><Ordinal>` (`N13`, `E9`) or the junction
//! literal `CEN`, which sits at ordinal 0 of the north line.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::support::errors::{DomainError, DomainResult};

/// Literal code of the junction station connecting both lines.
pub const JUNCTION_CODE: &str = "CEN";

/// Line a regular station belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Line {
    /// Northern arm, the one the extension zone continues
    North,
    East,
}

impl Line {
    pub fn letter(self) -> char {
        match self {
            Self::North => 'N',
            Self::East => 'E',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'N' => Some(Self::North),
            'E' => Some(Self::East),
            _ => None,
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Parsed station code
///
/// The junction is its own variant so that it never collides with a
/// regular station that happens to carry ordinal 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StationCode {
    Junction,
    Regular { line: Line, ordinal: u32 },
}

impl StationCode {
    pub fn north(ordinal: u32) -> Self {
        Self::Regular {
            line: Line::North,
            ordinal,
        }
    }

    pub fn east(ordinal: u32) -> Self {
        Self::Regular {
            line: Line::East,
            ordinal,
        }
    }

    /// Position as (line, ordinal). The junction reports `(North, 0)`.
    pub fn position(&self) -> (Line, u32) {
        match *self {
            Self::Junction => (Line::North, 0),
            Self::Regular { line, ordinal } => (line, ordinal),
        }
    }

    pub fn line(&self) -> Line {
        self.position().0
    }

    pub fn ordinal(&self) -> u32 {
        self.position().1
    }

    pub fn is_junction(&self) -> bool {
        matches!(self, Self::Junction)
    }

    /// Parse a station code string into its (line, ordinal) position.
    pub fn parse(code: &str) -> DomainResult<Self> {
        if code == JUNCTION_CODE {
            return Ok(Self::Junction);
        }

        let mut chars = code.chars();
        let line = chars
            .next()
            .and_then(Line::from_letter)
            .ok_or_else(|| DomainError::invalid_format(code))?;

        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::invalid_format(code));
        }
        let ordinal = digits
            .parse::<u32>()
            .map_err(|_| DomainError::invalid_format(code))?;

        Ok(Self::Regular { line, ordinal })
    }
}

impl FromStr for StationCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for StationCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<StationCode> for String {
    fn from(code: StationCode) -> Self {
        code.to_string()
    }
}

impl fmt::Display for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Junction => write!(f, "{}", JUNCTION_CODE),
            Self::Regular { line, ordinal } => write!(f, "{}{}", line, ordinal),
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────
