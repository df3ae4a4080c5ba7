//! Station display names
//!
//! Loaded from a two-column text list, one `code,name` pair per line:
//!
//! ```text
//! N24,Khu Khot
//! CEN,Siam
//! E9,On Nut
//! ```

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, warn};

use crate::domain::StationCode;
use crate::support::errors::InfraError;

/// Lookup of station code to display name
#[derive(Debug, Clone, Default)]
pub struct StationDirectory {
    names: HashMap<StationCode, String>,
}

impl StationDirectory {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> Result<Self, InfraError> {
        let file = File::open(path)?;
        let directory = Self::from_reader(file)?;
        debug!(
            path = %path.display(),
            stations = directory.len(),
            "Station names loaded"
        );
        Ok(directory)
    }

    /// Rows with an unparseable code or no name are skipped with a warning.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, InfraError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut names = HashMap::new();
        for record in reader.records() {
            let row = record?;

            let Some(raw_code) = row.get(0).filter(|c| !c.is_empty()) else {
                continue;
            };
            let Some(name) = row.get(1).filter(|n| !n.is_empty()) else {
                warn!(code = raw_code, "Station row without a name, skipped");
                continue;
            };
            match raw_code.parse::<StationCode>() {
                Ok(code) => {
                    names.insert(code, name.to_string());
                }
                Err(e) => warn!(code = raw_code, error = %e, "Station row skipped"),
            }
        }

        Ok(Self { names })
    }

    pub fn name_of(&self, code: &StationCode) -> Option<&str> {
        self.names.get(code).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_code_name_pairs() {
        let dir = StationDirectory::from_reader(
            "E3,Nana\nE4,Asok\nE5,Phrom Phong\n".as_bytes(),
        )
        .unwrap();
        assert_eq!(dir.len(), 3);
        assert_eq!(dir.name_of(&StationCode::east(4)), Some("Asok"));
        assert_eq!(dir.name_of(&StationCode::east(5)), Some("Phrom Phong"));
    }

    #[test]
    fn blank_lines_are_ignored() {
        let dir = StationDirectory::from_reader(
            "N20,Saphan Mai\n\nN19,Sai Yud\n\n".as_bytes(),
        )
        .unwrap();
        assert_eq!(dir.len(), 2);
        assert_eq!(dir.name_of(&StationCode::north(19)), Some("Sai Yud"));
    }

    #[test]
    fn junction_row() {
        let dir = StationDirectory::from_reader("CEN,Siam".as_bytes()).unwrap();
        assert_eq!(dir.name_of(&StationCode::Junction), Some("Siam"));
    }

    #[test]
    fn empty_input_gives_empty_directory() {
        let dir = StationDirectory::from_reader("".as_bytes()).unwrap();
        assert!(dir.is_empty());
        assert_eq!(dir.name_of(&StationCode::east(1)), None);
    }

    #[test]
    fn bad_rows_are_skipped() {
        let dir = StationDirectory::from_reader(
            "X1,Nowhere\nE1\nE2,Ratchadamri\n".as_bytes(),
        )
        .unwrap();
        assert_eq!(dir.len(), 1);
        assert_eq!(dir.name_of(&StationCode::east(2)), Some("Ratchadamri"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = StationDirectory::load(Path::new("/nonexistent/stations.txt")).unwrap_err();
        assert!(matches!(err, InfraError::Io(_)));
    }
}
