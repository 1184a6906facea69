//! Flight catalog loading.
//!
//! A `Catalog` is the read-only, departure-ordered list of flights that
//! every search runs against. It is built once from a CSV file and never
//! mutated afterwards.

mod error;
mod loader;

use std::fs::File;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::domain::{AirportCode, Flight};

pub use error::CatalogError;

/// Scheduled flights, ordered by departure time.
///
/// # Invariants
///
/// - Flights are non-decreasing by departure time
/// - Flights departing at the same time keep their input order
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    flights: Vec<Flight>,
}

impl Catalog {
    /// Build a catalog from flights in any order.
    pub fn new(mut flights: Vec<Flight>) -> Self {
        // Stable, so equal departures keep their input order
        flights.sort_by_key(Flight::departure);
        Self { flights }
    }

    /// Load a catalog from CSV input.
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, CatalogError> {
        let flights = loader::read_flights(reader)?;
        Ok(Self::new(flights))
    }

    /// Load a catalog from a CSV file.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file cannot be opened, is not valid CSV, lacks
    /// a required column, or contains a row that does not describe a
    /// valid flight.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::from_reader(io::BufReader::new(file))?;
        debug!(
            path = %path.display(),
            flights = catalog.len(),
            "loaded flight catalog"
        );
        Ok(catalog)
    }

    /// Returns all flights in departure order.
    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    /// Returns true if any flight departs from or arrives at `airport`.
    pub fn serves(&self, airport: AirportCode) -> bool {
        self.flights
            .iter()
            .any(|f| f.origin() == airport || f.destination() == airport)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::fixtures::{code, flight};

    const CSV: &str = "\
flight_no,origin,destination,departure,arrival,base_price,bag_price,bags_allowed
LATE,BBB,CCC,2021-09-01T12:00:00,2021-09-01T13:00:00,90,5,1
EARLY,AAA,BBB,2021-09-01T08:00:00,2021-09-01T09:00:00,100,5,2
TIE1,AAA,CCC,2021-09-01T10:00:00,2021-09-01T11:00:00,300,5,2
TIE2,AAA,DDD,2021-09-01T10:00:00,2021-09-01T11:30:00,200,5,2
";

    fn ids(catalog: &Catalog) -> Vec<&str> {
        catalog.flights().iter().map(|f| f.id().as_str()).collect()
    }

    #[test]
    fn new_sorts_by_departure() {
        let catalog = Catalog::new(vec![
            flight("F3", "CCC", "DDD", "13:00", "14:00", 10, 1),
            flight("F1", "AAA", "BBB", "08:00", "09:00", 10, 1),
            flight("F2", "BBB", "CCC", "10:00", "11:00", 10, 1),
        ]);
        assert_eq!(ids(&catalog), vec!["F1", "F2", "F3"]);
    }

    #[test]
    fn reader_sorts_stably() {
        let catalog = Catalog::from_reader(CSV.as_bytes()).unwrap();
        assert_eq!(ids(&catalog), vec!["EARLY", "TIE1", "TIE2", "LATE"]);
        assert_eq!(catalog.len(), 4);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn departures_non_decreasing() {
        let catalog = Catalog::from_reader(CSV.as_bytes()).unwrap();
        for pair in catalog.flights().windows(2) {
            assert!(pair[0].departure() <= pair[1].departure());
        }
    }

    #[test]
    fn from_path_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CSV.as_bytes()).unwrap();

        let catalog = Catalog::from_path(file.path()).unwrap();
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Catalog::from_path(dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn serves_known_airports_only() {
        let catalog = Catalog::from_reader(CSV.as_bytes()).unwrap();
        assert!(catalog.serves(code("AAA")));
        assert!(catalog.serves(code("DDD")));
        assert!(!catalog.serves(code("ZZZ")));
    }

    #[test]
    fn empty_catalog() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert!(!catalog.serves(code("AAA")));
    }
}
