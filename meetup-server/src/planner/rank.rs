//! Attraction scoring and ranking.
//!
//! Each candidate gets four component scores which are combined into a
//! weighted total:
//! 1. Tag match: how many participants asked for one of its categories
//! 2. Walk: shorter walks from the station are better
//! 3. Price: the cheapest price bucket on offer
//! 4. Rating: the published rating, scaled to 0-1

use serde::Serialize;

use crate::domain::{Attraction, PreferenceTag, PriceLevel};

use super::config::PlannerConfig;
use super::error::PlanError;

/// An attraction with its scores and position in the ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredAttraction {
    pub attraction: Attraction,

    /// Tag matches per participant. Not clamped; can exceed 1.0.
    pub tag_score: f64,

    /// Walking-distance score in [0, 1].
    pub walk_score: f64,

    /// Price score in [0, 1].
    pub price_score: f64,

    /// Rating divided by five.
    pub rating_score: f64,

    /// Weighted sum of the component scores.
    pub total_score: f64,

    /// 1-based position after sorting.
    pub rank: usize,
}

/// Component scores before weighting, for callers that want to show them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub tag: f64,
    pub walk: f64,
    pub price: f64,
    pub rating: f64,
}

impl ScoreBreakdown {
    /// Score one attraction.
    pub fn compute(
        attraction: &Attraction,
        user_tags: &[PreferenceTag],
        num_users: usize,
        config: &PlannerConfig,
    ) -> Self {
        Self {
            tag: tag_score(&attraction.tags, user_tags, num_users),
            walk: walk_score(attraction.walk_min, config),
            price: price_score(&attraction.price_levels),
            rating: rating_score(attraction.rating),
        }
    }

    /// Weighted total.
    pub fn total(&self, config: &PlannerConfig) -> f64 {
        self.tag * config.tag_weight
            + self.walk * config.walk_weight
            + self.price * config.price_weight
            + self.rating * config.rating_weight
    }
}

/// Tag matches across all of an attraction's labels, per participant.
///
/// Every (label, participant) pair that matches counts once, so a
/// participant can contribute more than once and the result can exceed 1.0.
/// `num_users` must be non-zero.
pub fn tag_score(labels: &[String], user_tags: &[PreferenceTag], num_users: usize) -> f64 {
    let matches: usize = labels
        .iter()
        .map(|label| user_tags.iter().filter(|tag| tag.matches(label)).count())
        .sum();

    matches as f64 / num_users as f64
}

/// Linear walk score between the configured best and worst walk times.
///
/// The clamps take precedence over the linear part at both ends.
pub fn walk_score(walk_min: f64, config: &PlannerConfig) -> f64 {
    if walk_min <= config.walk_best_mins {
        1.0
    } else if walk_min >= config.walk_worst_mins {
        0.0
    } else {
        (config.walk_worst_mins - walk_min) / config.walk_range()
    }
}

/// Best price bucket on offer: low 1.0, medium 0.5, anything else 0.0.
pub fn price_score(levels: &[PriceLevel]) -> f64 {
    levels
        .iter()
        .map(|level| match level {
            PriceLevel::Low => 1.0,
            PriceLevel::Medium => 0.5,
            PriceLevel::High | PriceLevel::Other(_) => 0.0,
        })
        .fold(0.0, f64::max)
}

/// Rating on the 0-5 scale mapped to 0-1. Not clamped.
pub fn rating_score(rating: f64) -> f64 {
    rating / 5.0
}

/// Score and rank candidate attractions, best first.
///
/// Candidates with equal totals keep their input order. An empty input
/// gives an empty ranking.
pub fn rank_attractions(
    candidates: Vec<Attraction>,
    user_tags: &[PreferenceTag],
    num_users: usize,
    config: &PlannerConfig,
) -> Result<Vec<ScoredAttraction>, PlanError> {
    if num_users == 0 {
        return Err(PlanError::NoParticipants);
    }

    let mut scored: Vec<ScoredAttraction> = candidates
        .into_iter()
        .map(|attraction| {
            let scores = ScoreBreakdown::compute(&attraction, user_tags, num_users, config);
            ScoredAttraction {
                tag_score: scores.tag,
                walk_score: scores.walk,
                price_score: scores.price,
                rating_score: scores.rating,
                total_score: scores.total(config),
                rank: 0,
                attraction,
            }
        })
        .collect();

    // Vec::sort_by is stable, which keeps catalog order on ties.
    scored.sort_by(|a, b| b.total_score.total_cmp(&a.total_score));

    for (i, item) in scored.iter_mut().enumerate() {
        item.rank = i + 1;
    }

    Ok(scored)
}
