//! Station-to-station travel times.
//!
//! The travel-time table is a small square matrix over the MRT stations the
//! data set knows about. A cell is either a whole number of minutes or
//! undefined; undefined means "not reachable" and is never read as zero.

use std::collections::HashMap;

use crate::domain::{DomainError, Station};

/// Read-only lookup of travel minutes between two stations.
///
/// Stations keep the order they were registered in, which is also the
/// order candidates are considered in by the fair-station selector.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TravelTimeIndex {
    stations: Vec<Station>,
    positions: HashMap<Station, usize>,
    /// Row-major `stations.len()` x `stations.len()` matrix.
    minutes: Vec<Option<u32>>,
}

impl TravelTimeIndex {
    /// Create an index over `stations` with every cell undefined.
    pub fn new(stations: Vec<Station>) -> Result<Self, DomainError> {
        let mut positions = HashMap::with_capacity(stations.len());
        for (i, station) in stations.iter().enumerate() {
            if positions.insert(station.clone(), i).is_some() {
                return Err(DomainError::DuplicateStation(station.clone()));
            }
        }

        let n = stations.len();
        Ok(Self {
            stations,
            positions,
            minutes: vec![None; n * n],
        })
    }

    /// Set the travel time from `from` to `to`.
    ///
    /// Returns `false` (and changes nothing) if either station is unknown.
    pub fn set(&mut self, from: &Station, to: &Station, minutes: u32) -> bool {
        match self.cell(from, to) {
            Some(idx) => {
                self.minutes[idx] = Some(minutes);
                true
            }
            None => false,
        }
    }

    /// Get the travel time from `from` to `to`.
    ///
    /// Returns `None` if the pair is undefined or either station is unknown.
    pub fn get(&self, from: &Station, to: &Station) -> Option<u32> {
        self.cell(from, to).and_then(|idx| self.minutes[idx])
    }

    /// Whether `station` is one of the indexed stations.
    pub fn contains(&self, station: &Station) -> bool {
        self.positions.contains_key(station)
    }

    /// Look up an indexed station by name.
    pub fn station(&self, name: &str) -> Option<&Station> {
        let probe = Station::parse(name).ok()?;
        self.positions.get(&probe).map(|&i| &self.stations[i])
    }

    /// All stations, in table order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Number of stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Returns true if no stations are indexed.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Number of defined cells.
    pub fn defined_count(&self) -> usize {
        self.minutes.iter().filter(|m| m.is_some()).count()
    }

    fn cell(&self, from: &Station, to: &Station) -> Option<usize> {
        let row = *self.positions.get(from)?;
        let col = *self.positions.get(to)?;
        Some(row * self.stations.len() + col)
    }
}

/// Builder for travel-time indexes.
///
/// Provides a fluent API for tests and fixtures. Stations are registered on
/// first mention; blank names are ignored.
#[derive(Debug, Default)]
pub struct TravelTimeIndexBuilder {
    stations: Vec<Station>,
    times: Vec<(Station, Station, u32)>,
}

impl TravelTimeIndexBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a station without giving it any times.
    pub fn station(mut self, name: &str) -> Self {
        self.register(name);
        self
    }

    /// Add a one-way travel time.
    pub fn time(mut self, from: &str, to: &str, minutes: u32) -> Self {
        if let (Some(from), Some(to)) = (self.register(from), self.register(to)) {
            self.times.push((from, to, minutes));
        }
        self
    }

    /// Add the same travel time in both directions.
    pub fn symmetric(self, a: &str, b: &str, minutes: u32) -> Self {
        self.time(a, b, minutes).time(b, a, minutes)
    }

    /// Build the index.
    pub fn build(self) -> TravelTimeIndex {
        // Stations are deduplicated on registration, so `new` cannot fail here.
        let mut index = TravelTimeIndex::new(self.stations).unwrap_or_default();
        for (from, to, minutes) in &self.times {
            index.set(from, to, *minutes);
        }
        index
    }

    fn register(&mut self, name: &str) -> Option<Station> {
        let station = Station::parse(name).ok()?;
        if !self.stations.contains(&station) {
            self.stations.push(station.clone());
        }
        Some(station)
    }
}
