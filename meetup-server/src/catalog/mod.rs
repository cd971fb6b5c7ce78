//! The attraction catalog.

use std::collections::HashSet;

use crate::domain::{Attraction, Station};

/// Read-only collection of attractions, in table order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttractionCatalog {
    attractions: Vec<Attraction>,
}

impl AttractionCatalog {
    /// Create a catalog from already-validated attractions.
    pub fn new(attractions: Vec<Attraction>) -> Self {
        Self { attractions }
    }

    /// Attractions reachable from any of `stations`, as a working copy.
    ///
    /// Catalog order is preserved; the ranker's tie-breaking relies on it.
    pub fn near(&self, stations: &[Station]) -> Vec<Attraction> {
        let wanted: HashSet<&Station> = stations.iter().collect();
        self.attractions
            .iter()
            .filter(|a| wanted.contains(&a.mrt_station))
            .cloned()
            .collect()
    }

    /// All attractions.
    pub fn attractions(&self) -> &[Attraction] {
        &self.attractions
    }

    /// Number of attractions.
    pub fn len(&self) -> usize {
        self.attractions.len()
    }

    /// Returns true if the catalog has no attractions.
    pub fn is_empty(&self) -> bool {
        self.attractions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attraction(name: &str, station: &str) -> Attraction {
        Attraction::from_cells(name, station, "5", "4", "low", "walk").unwrap()
    }

    fn station(s: &str) -> Station {
        Station::parse(s).unwrap()
    }

    #[test]
    fn near_filters_by_station() {
        let catalog = AttractionCatalog::new(vec![
            attraction("a", "X"),
            attraction("b", "Y"),
            attraction("c", "X"),
            attraction("d", "Z"),
        ]);

        let names: Vec<_> = catalog
            .near(&[station("X")])
            .into_iter()
            .map(|a| a.name)
            .collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn near_multiple_stations_keeps_catalog_order() {
        let catalog = AttractionCatalog::new(vec![
            attraction("a", "Z"),
            attraction("b", "Y"),
            attraction("c", "X"),
        ]);

        let names: Vec<_> = catalog
            .near(&[station("X"), station("Z")])
            .into_iter()
            .map(|a| a.name)
            .collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn near_nothing() {
        let catalog = AttractionCatalog::new(vec![attraction("a", "X")]);
        assert!(catalog.near(&[]).is_empty());
        assert!(catalog.near(&[station("Q")]).is_empty());
        assert_eq!(catalog.len(), 1);
    }
}
