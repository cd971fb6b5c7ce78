//! The loaded data the planner works on.

use crate::catalog::AttractionCatalog;
use crate::domain::Station;
use crate::travel_times::TravelTimeIndex;

/// Travel times plus attractions, loaded once and shared read-only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub travel_times: TravelTimeIndex,
    pub catalog: AttractionCatalog,
}

impl Dataset {
    /// Bundle an index and a catalog.
    pub fn new(travel_times: TravelTimeIndex, catalog: AttractionCatalog) -> Self {
        Self {
            travel_times,
            catalog,
        }
    }

    /// Stations participants may start from.
    pub fn stations(&self) -> &[Station] {
        self.travel_times.stations()
    }
}
