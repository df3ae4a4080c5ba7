//! All-pairs distance grid over the base zone

use std::collections::HashMap;

use crate::domain::station::StationCode;
use crate::support::errors::{DomainError, DomainResult};

/// Number of stations traversed between any two base stations.
///
/// Built once and never mutated afterwards, so a single grid can be
/// shared between any number of readers.
#[derive(Debug, Clone)]
pub struct DistanceGrid {
    stations: Vec<StationCode>,
    index: HashMap<StationCode, usize>,
    /// Row-major `n * n` matrix
    distances: Vec<u32>,
}

impl DistanceGrid {
    /// Build the grid for every pair in `stations`.
    pub fn build(stations: &[StationCode]) -> DomainResult<Self> {
        let mut index = HashMap::with_capacity(stations.len());
        for (i, code) in stations.iter().enumerate() {
            if index.insert(*code, i).is_some() {
                return Err(DomainError::InvalidTopology(format!(
                    "station {} listed twice",
                    code
                )));
            }
        }

        let n = stations.len();
        let mut distances = vec![0; n * n];
        for (i, from) in stations.iter().enumerate() {
            for (j, to) in stations.iter().enumerate() {
                distances[i * n + j] = stations_between(from, to);
            }
        }

        Ok(Self {
            stations: stations.to_vec(),
            index,
            distances,
        })
    }

    pub fn distance(&self, from: &StationCode, to: &StationCode) -> DomainResult<u32> {
        let i = self.index_of(from)?;
        let j = self.index_of(to)?;
        Ok(self.distances[i * self.stations.len() + j])
    }

    /// All distances from `from`, in grid order.
    pub fn row(&self, from: &StationCode) -> DomainResult<impl Iterator<Item = (StationCode, u32)> + '_> {
        let i = self.index_of(from)?;
        let n = self.stations.len();
        Ok(self
            .stations
            .iter()
            .copied()
            .zip(self.distances[i * n..(i + 1) * n].iter().copied()))
    }

    pub fn contains(&self, code: &StationCode) -> bool {
        self.index.contains_key(code)
    }

    pub fn stations(&self) -> &[StationCode] {
        &self.stations
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    fn index_of(&self, code: &StationCode) -> DomainResult<usize> {
        self.index
            .get(code)
            .copied()
            .ok_or_else(|| DomainError::unknown_station(code))
    }
}

/// The junction is the only connector between the two lines.
fn stations_between(a: &StationCode, b: &StationCode) -> u32 {
    match (a, b) {
        (StationCode::Junction, other) | (other, StationCode::Junction) => other.ordinal(),
        _ if a.line() == b.line() => a.ordinal().abs_diff(b.ordinal()),
        _ => a.ordinal() + b.ordinal(),
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::station::topology::tests::standard_topology;

    fn codes(list: &[&str]) -> Vec<StationCode> {
        list.iter().map(|c| c.parse().unwrap()).collect()
    }

    fn d(grid: &DistanceGrid, a: &str, b: &str) -> u32 {
        grid.distance(&a.parse().unwrap(), &b.parse().unwrap()).unwrap()
    }

    fn standard_grid() -> DistanceGrid {
        DistanceGrid::build(standard_topology().base()).unwrap()
    }

    #[test]
    fn same_line_distances() {
        let grid = DistanceGrid::build(&codes(&["N2", "N3"])).unwrap();
        assert_eq!(d(&grid, "N2", "N3"), 1);
        assert_eq!(d(&grid, "N3", "N3"), 0);

        let grid = DistanceGrid::build(&codes(&["E9", "E8", "E7"])).unwrap();
        assert_eq!(d(&grid, "E9", "E7"), 2);
        assert_eq!(d(&grid, "E8", "E7"), 1);
    }

    #[test]
    fn junction_and_cross_line_distances() {
        let grid = DistanceGrid::build(&codes(&["N2", "N1", "CEN", "E1"])).unwrap();
        assert_eq!(d(&grid, "N2", "CEN"), 2);
        assert_eq!(d(&grid, "CEN", "E1"), 1);
        assert_eq!(d(&grid, "N2", "E1"), 3);
        assert_eq!(d(&grid, "N1", "E1"), 2);
        assert_eq!(d(&grid, "CEN", "CEN"), 0);
    }

    #[test]
    fn standard_grid_examples() {
        let grid = standard_grid();
        assert_eq!(grid.len(), 18);
        assert_eq!(d(&grid, "N8", "N1"), 7);
        assert_eq!(d(&grid, "N8", "CEN"), 8);
        assert_eq!(d(&grid, "N8", "E2"), 10);
    }

    #[test]
    fn row_matches_lookups() {
        let grid = DistanceGrid::build(&codes(&["N2", "N1", "CEN", "E1", "E2", "E3"])).unwrap();
        let row: Vec<(String, u32)> = grid
            .row(&StationCode::east(1))
            .unwrap()
            .map(|(c, d)| (c.to_string(), d))
            .collect();
        let expected = [("N2", 3), ("N1", 2), ("CEN", 1), ("E1", 0), ("E2", 1), ("E3", 2)];
        assert_eq!(row.len(), expected.len());
        for ((code, dist), (want_code, want_dist)) in row.iter().zip(expected) {
            assert_eq!((code.as_str(), *dist), (want_code, want_dist));
        }
    }

    #[test]
    fn diagonal_is_zero_and_grid_is_symmetric() {
        let grid = standard_grid();
        for x in grid.stations() {
            assert_eq!(grid.distance(x, x).unwrap(), 0);
            for y in grid.stations() {
                assert_eq!(grid.distance(x, y).unwrap(), grid.distance(y, x).unwrap());
            }
        }
    }

    #[test]
    fn same_line_distances_add_up() {
        let grid = standard_grid();
        for line in [
            codes(&["N8", "N7", "N6", "N5", "N4", "N3", "N2", "N1"]),
            codes(&["E1", "E2", "E3", "E4", "E5", "E6", "E7", "E8", "E9"]),
        ] {
            for (i, x) in line.iter().enumerate() {
                for (j, y) in line.iter().enumerate().skip(i) {
                    for z in &line[j..] {
                        assert_eq!(
                            grid.distance(x, z).unwrap(),
                            grid.distance(x, y).unwrap() + grid.distance(y, z).unwrap()
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn cross_line_routes_through_junction() {
        let grid = standard_grid();
        for n in 1..=8 {
            for e in 1..=9 {
                let (x, y) = (StationCode::north(n), StationCode::east(e));
                assert_eq!(grid.distance(&x, &y).unwrap(), n + e);
            }
        }
    }

    #[test]
    fn unknown_station_lookup_fails() {
        let grid = standard_grid();
        assert_eq!(
            grid.distance(&StationCode::north(9), &StationCode::Junction),
            Err(DomainError::unknown_station("N9"))
        );
        assert!(!grid.contains(&StationCode::north(9)));
    }

    #[test]
    fn duplicates_are_rejected() {
        assert!(DistanceGrid::build(&codes(&["N1", "N1"])).is_err());
    }

    #[test]
    fn grid_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DistanceGrid>();
    }
}
