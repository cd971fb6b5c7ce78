//! The two-stage recommendation pipeline.
//!
//! First pick the fairest meeting station(s), then rank the attractions
//! around them.

use tracing::{debug, info};

use crate::dataset::Dataset;

use super::config::PlannerConfig;
use super::error::PlanError;
use super::fair::{FairStations, select_fair_stations};
use super::rank::{ScoredAttraction, rank_attractions};
use super::request::RecommendRequest;

/// Outcome of a recommendation.
#[derive(Debug, Clone, PartialEq)]
pub enum Recommendation {
    /// No station is reachable by every participant.
    NoFairStation,

    /// Fair stations exist but have no attractions nearby.
    NoCandidates { fair: FairStations },

    /// Ranked attractions around the fair stations, best first.
    Ranked {
        fair: FairStations,
        attractions: Vec<ScoredAttraction>,
    },
}

impl Recommendation {
    /// The fair stations, if any were found.
    pub fn fair_stations(&self) -> Option<&FairStations> {
        match self {
            Recommendation::NoFairStation => None,
            Recommendation::NoCandidates { fair } | Recommendation::Ranked { fair, .. } => {
                Some(fair)
            }
        }
    }

    /// The ranked attractions; empty unless the outcome is `Ranked`.
    pub fn attractions(&self) -> &[ScoredAttraction] {
        match self {
            Recommendation::Ranked { attractions, .. } => attractions,
            _ => &[],
        }
    }
}

/// Runs requests against a loaded data set.
pub struct Recommender<'a> {
    dataset: &'a Dataset,
    config: &'a PlannerConfig,
}

impl<'a> Recommender<'a> {
    /// Create a recommender.
    pub fn new(dataset: &'a Dataset, config: &'a PlannerConfig) -> Self {
        Self { dataset, config }
    }

    /// Run the pipeline for a validated request.
    pub fn recommend(&self, request: &RecommendRequest) -> Result<Recommendation, PlanError> {
        let starts = request.starts();
        let fair = select_fair_stations(
            &starts,
            &self.dataset.travel_times,
            self.dataset.stations(),
        );

        if fair.is_empty() {
            info!(participants = request.len(), "no fair meeting station");
            return Ok(Recommendation::NoFairStation);
        }

        let candidates = self.dataset.catalog.near(&fair.stations);
        debug!(
            stations = %fair.joined(", "),
            bound_mins = fair.bound_mins,
            candidates = candidates.len(),
            "fair stations selected"
        );

        if candidates.is_empty() {
            return Ok(Recommendation::NoCandidates { fair });
        }

        let attractions = rank_attractions(candidates, &request.tags(), request.len(), self.config)?;

        info!(
            stations = %fair.joined(", "),
            bound_mins = fair.bound_mins,
            ranked = attractions.len(),
            "recommendation ready"
        );

        Ok(Recommendation::Ranked { fair, attractions })
    }
}
