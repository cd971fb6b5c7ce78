//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::PreferenceTag;
use crate::planner::{Recommendation, ScoredAttraction};

/// Query for the index page.
#[derive(Debug, Default, Deserialize)]
pub struct IndexQuery {
    /// How many participant rows to show
    pub n: Option<usize>,
}

/// One participant in a JSON request.
#[derive(Debug, Clone, Deserialize)]
pub struct ParticipantInput {
    /// Start station name, exactly as in the travel-time table
    pub station: String,

    /// Preference tag slug or label (e.g. "cafe" or "咖啡廳")
    pub tag: String,
}

/// Request to recommend a meeting place.
#[derive(Debug, Deserialize)]
pub struct RecommendRequestBody {
    /// Participants, in order
    pub participants: Vec<ParticipantInput>,
}

impl RecommendRequestBody {
    /// Raw `(station, tag)` pairs.
    pub fn pairs(&self) -> Vec<(&str, &str)> {
        self.participants
            .iter()
            .map(|p| (p.station.as_str(), p.tag.as_str()))
            .collect()
    }
}

/// Pair up repeated `station` and `tag` form fields in submission order.
///
/// Other fields are ignored. Returns an error message if the counts differ.
pub fn pair_form_fields(fields: &[(String, String)]) -> Result<Vec<(String, String)>, String> {
    let stations: Vec<&String> = fields
        .iter()
        .filter(|(k, _)| k == "station")
        .map(|(_, v)| v)
        .collect();
    let tags: Vec<&String> = fields
        .iter()
        .filter(|(k, _)| k == "tag")
        .map(|(_, v)| v)
        .collect();

    if stations.len() != tags.len() {
        return Err(format!(
            "Got {} stations but {} tags",
            stations.len(),
            tags.len()
        ));
    }

    Ok(stations
        .into_iter()
        .zip(tags)
        .map(|(s, t)| (s.clone(), t.clone()))
        .collect())
}

/// Which of the three outcomes a recommendation had.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    NoFairStation,
    NoCandidates,
    Ranked,
}

/// A ranked attraction.
#[derive(Debug, Serialize)]
pub struct AttractionResult {
    /// 1-based position
    pub rank: usize,

    pub name: String,

    /// Station the attraction is reached from
    pub mrt_station: String,

    /// Walking minutes from the station
    pub walk_min: f64,

    pub rating: f64,

    /// Price levels as listed in the data
    pub price_levels: Vec<String>,

    /// Category labels as listed in the data
    pub tags: Vec<String>,

    pub tag_score: f64,
    pub walk_score: f64,
    pub price_score: f64,
    pub rating_score: f64,
    pub total_score: f64,
}

impl AttractionResult {
    /// Create from a scored attraction.
    pub fn from_scored(scored: &ScoredAttraction) -> Self {
        let a = &scored.attraction;
        Self {
            rank: scored.rank,
            name: a.name.clone(),
            mrt_station: a.mrt_station.to_string(),
            walk_min: a.walk_min,
            rating: a.rating,
            price_levels: a.price_levels.iter().map(|p| p.to_string()).collect(),
            tags: a.tags.clone(),
            tag_score: scored.tag_score,
            walk_score: scored.walk_score,
            price_score: scored.price_score,
            rating_score: scored.rating_score,
            total_score: scored.total_score,
        }
    }
}

/// Response for a recommendation.
#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub outcome: Outcome,

    /// Fair meeting stations; empty when none exists
    pub fair_stations: Vec<String>,

    /// Longest trip any participant makes to a fair station
    pub bound_mins: Option<u32>,

    /// Ranked attractions, best first
    pub attractions: Vec<AttractionResult>,
}

impl RecommendResponse {
    /// Create from a recommendation.
    pub fn from_recommendation(recommendation: &Recommendation) -> Self {
        let outcome = match recommendation {
            Recommendation::NoFairStation => Outcome::NoFairStation,
            Recommendation::NoCandidates { .. } => Outcome::NoCandidates,
            Recommendation::Ranked { .. } => Outcome::Ranked,
        };
        let fair = recommendation.fair_stations();

        Self {
            outcome,
            fair_stations: fair
                .map(|f| f.stations.iter().map(|s| s.to_string()).collect())
                .unwrap_or_default(),
            bound_mins: fair.map(|f| f.bound_mins),
            attractions: recommendation
                .attractions()
                .iter()
                .map(AttractionResult::from_scored)
                .collect(),
        }
    }
}

/// Response listing start stations.
#[derive(Debug, Serialize)]
pub struct StationListResponse {
    pub stations: Vec<String>,
}

/// A preference tag.
#[derive(Debug, Serialize)]
pub struct TagResult {
    /// ASCII identifier accepted in requests
    pub slug: &'static str,

    /// Label used in the attraction data
    pub label: &'static str,
}

impl From<PreferenceTag> for TagResult {
    fn from(tag: PreferenceTag) -> Self {
        Self {
            slug: tag.slug(),
            label: tag.label(),
        }
    }
}

/// Response listing preference tags.
#[derive(Debug, Serialize)]
pub struct TagListResponse {
    pub tags: Vec<TagResult>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
